mod auth;
mod favorite;
mod geocoding;
mod user;

use meetmap_test_utils::{fixtures, prelude::*};
use serde_json::json;

use crate::client::{
    config::Config,
    error::{ApiError, Error},
};

use super::*;

/// Client pointed at the mock server for every configured URL.
fn client_for(test: &TestContext, token: Option<&str>) -> ApiClient {
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

fn logged_in(test: &TestContext) -> ApiClient {
    client_for(test, Some(TEST_TOKEN))
}
