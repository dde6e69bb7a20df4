//! Declarative mock backend setup.
//!
//! Endpoints are queued by the `with_*` methods and only registered on the mockito server when
//! [`TestBuilder::build`] runs.

use mockito::{Matcher, Server};
use serde_json::{json, Value};

use crate::{constant::TEST_TOKEN, context::TestContext};

/// Single queued endpoint.
struct EndpointSpec {
    method: &'static str,
    path: String,
    status: usize,
    body: Value,
    query: Option<Matcher>,
    request_body: Option<Matcher>,
    authorized: bool,
    multipart: bool,
    expected_requests: Option<usize>,
}

impl EndpointSpec {
    fn new(method: &'static str, path: &str, status: usize, body: Value) -> Self {
        Self {
            method,
            path: path.to_string(),
            status,
            body,
            query: None,
            request_body: None,
            authorized: false,
            multipart: false,
            expected_requests: None,
        }
    }
}

/// Builder for a mock backend.
pub struct TestBuilder {
    endpoints: Vec<EndpointSpec>,
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self {
            endpoints: Vec::new(),
        }
    }

    /// Add an endpoint that answers any request on `path` without checking credentials.
    ///
    /// # Arguments
    /// - `method` - HTTP method, e.g. `"GET"`
    /// - `path` - Request path without query string
    /// - `status` - Status code to answer with
    /// - `body` - JSON body to answer with
    pub fn with_endpoint(mut self, method: &'static str, path: &str, status: usize, body: Value) -> Self {
        self.endpoints
            .push(EndpointSpec::new(method, path, status, body));
        self
    }

    /// Add an endpoint that only matches requests carrying [`TEST_TOKEN`] as bearer token.
    ///
    /// The mock verifies it was called exactly `expected_requests` times.
    pub fn with_authorized_endpoint(
        mut self,
        method: &'static str,
        path: &str,
        body: Value,
        expected_requests: usize,
    ) -> Self {
        let mut spec = EndpointSpec::new(method, path, 200, body);
        spec.authorized = true;
        spec.expected_requests = Some(expected_requests);
        self.endpoints.push(spec);
        self
    }

    /// Add an authorized endpoint that only matches when the JSON request body contains
    /// `expected_body`.
    pub fn with_json_endpoint(
        mut self,
        method: &'static str,
        path: &str,
        expected_body: Value,
        body: Value,
    ) -> Self {
        let mut spec = EndpointSpec::new(method, path, 200, body);
        spec.authorized = true;
        spec.request_body = Some(Matcher::PartialJson(expected_body));
        spec.expected_requests = Some(1);
        self.endpoints.push(spec);
        self
    }

    /// Add an authorized multipart upload endpoint answering with `url`.
    pub fn with_upload_endpoint(mut self, path: &str, url: &str) -> Self {
        let mut spec = EndpointSpec::new("POST", path, 200, json!({ "url": url }));
        spec.authorized = true;
        spec.multipart = true;
        spec.expected_requests = Some(1);
        self.endpoints.push(spec);
        self
    }

    /// Add an endpoint failing with `status` and the backend's `{"error": message}` body.
    pub fn with_error_endpoint(
        mut self,
        method: &'static str,
        path: &str,
        status: usize,
        message: &str,
    ) -> Self {
        self.endpoints.push(EndpointSpec::new(
            method,
            path,
            status,
            json!({ "error": message }),
        ));
        self
    }

    /// Add the public `GET /events` listing.
    pub fn with_events_endpoint(mut self, events: Vec<Value>, expected_requests: usize) -> Self {
        let mut spec = EndpointSpec::new("GET", "/events", 200, Value::Array(events));
        spec.expected_requests = Some(expected_requests);
        self.endpoints.push(spec);
        self
    }

    /// Add `POST /auth/login` answering with [`TEST_TOKEN`] for `email`.
    pub fn with_login_endpoint(mut self, email: &str) -> Self {
        let mut spec = EndpointSpec::new(
            "POST",
            "/auth/login",
            200,
            json!({ "token": TEST_TOKEN }),
        );
        spec.request_body = Some(Matcher::PartialJson(json!({ "email": email })));
        spec.expected_requests = Some(1);
        self.endpoints.push(spec);
        self
    }

    /// Add `GET /users/getInfo` answering with `user`.
    pub fn with_user_info_endpoint(self, user: Value) -> Self {
        self.with_authorized_endpoint("GET", "/users/getInfo", user, 1)
    }

    /// Add the geocoder's `GET /search` answering `results` for the address `query`.
    pub fn with_geocoding_endpoint(mut self, query: &str, results: Vec<Value>) -> Self {
        let mut spec = EndpointSpec::new("GET", "/search", 200, Value::Array(results));
        spec.query = Some(Matcher::AllOf(vec![
            Matcher::UrlEncoded("q".to_string(), query.to_string()),
            Matcher::UrlEncoded("format".to_string(), "json".to_string()),
        ]));
        spec.expected_requests = Some(1);
        self.endpoints.push(spec);
        self
    }

    /// Start the mock server and register every queued endpoint.
    pub async fn build(self) -> TestContext {
        let mut server = Server::new_async().await;
        let mut mocks = Vec::with_capacity(self.endpoints.len());

        for spec in self.endpoints {
            let mut mock = server
                .mock(spec.method, spec.path.as_str())
                .with_status(spec.status)
                .with_header("content-type", "application/json")
                .with_body(spec.body.to_string());

            if let Some(query) = spec.query {
                mock = mock.match_query(query);
            }
            if let Some(request_body) = spec.request_body {
                mock = mock.match_body(request_body);
            }
            if spec.authorized {
                mock = mock.match_header("authorization", format!("Bearer {}", TEST_TOKEN).as_str());
            }
            if spec.multipart {
                mock = mock.match_header(
                    "content-type",
                    Matcher::Regex("^multipart/form-data".to_string()),
                );
            }
            if let Some(expected_requests) = spec.expected_requests {
                mock = mock.expect(expected_requests);
            }

            mocks.push(mock.create_async().await);
        }

        TestContext { server, mocks }
    }
}
