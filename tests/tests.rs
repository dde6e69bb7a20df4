mod browse;
mod session;

use meetmap::client::{
    config::Config,
    service::{ApiClient, HttpTransport, Session},
};
use meetmap_test_utils::prelude::*;

/// Client pointed at the mock backend with an optional logged-in session.
pub fn client_for(test: &TestContext, token: Option<&str>) -> ApiClient {
    let url = test.url();
    let config = Config {
        api_url: url.clone(),
        geocoding_url: url.clone(),
        user_search_url: format!("{}/users/search", url),
    };

    let session = Session::in_memory();
    if let Some(token) = token {
        session.login(token);
    }

    ApiClient::new(config, session, HttpTransport::default())
}
