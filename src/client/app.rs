use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::{
    config::Config,
    error::Error,
    router::Route,
    service::{ApiClient, HttpTransport, Session},
    store::user::{refresh_user, UserState},
};

const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    let config = use_hook(|| {
        Config::from_env().inspect_err(|err| tracing::error!("Configuration error: {}", err))
    });

    rsx! {
        document::Stylesheet { href: MAIN_CSS }

        match config {
            Ok(config) => rsx!(Shell { config }),
            Err(err) => rsx!(
                div { class: "min-h-screen flex items-center justify-center p-4",
                    div { role: "alert", class: "alert alert-error",
                        {Error::from(err).user_message()}
                    }
                }
            ),
        }
    }
}

/// Provides the API client and the user store, then restores a stored session.
#[component]
fn Shell(config: Config) -> Element {
    let client = use_context_provider(|| {
        ApiClient::new(config.clone(), Session::persistent(), HttpTransport::default())
    });
    let user_store = use_store(UserState::default);
    use_context_provider(|| user_store);

    use_hook(move || {
        spawn(async move { refresh_user(&client, user_store).await });
    });

    rsx!(Router::<Route> {})
}
