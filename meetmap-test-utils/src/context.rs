//! Test context returned by [`TestBuilder`](crate::TestBuilder).

use mockito::{Mock, ServerGuard};

/// Running mock backend.
///
/// The server stays alive, and its mocks registered, for as long as the context is held.
///
/// ```ignore
/// let test = TestBuilder::new()
///     .with_events_endpoint(vec![event::event_json("1", "upcoming", &["CONFERENCE"])], 1)
///     .build()
///     .await;
///
/// let client = client_for(&test);
/// // ... exercise the client ...
///
/// test.assert_mocks();
/// ```
pub struct TestContext {
    pub(crate) server: ServerGuard,
    pub(crate) mocks: Vec<Mock>,
}

impl TestContext {
    /// Base URL of the mock server, usable as API, geocoding and user search URL.
    pub fn url(&self) -> String {
        self.server.url()
    }

    /// Direct access to the server for one-off mocks.
    pub fn server(&mut self) -> &mut ServerGuard {
        &mut self.server
    }

    /// Assert every queued endpoint received its expected number of requests.
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }
}
