use std::collections::HashSet;

use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        components::{ErrorAlert, EventList, EventMap, FilterPanel, Page},
        error::Error,
        service::{ApiClient, EventService, FavoriteService},
        store::user::UserState,
    },
    filter::EventBrowser,
};

#[component]
pub fn Home() -> Element {
    let client = use_context::<ApiClient>();
    let user_store = use_context::<Store<UserState>>();
    let mut browser = use_signal(EventBrowser::default);
    let mut favorites = use_signal(HashSet::<String>::new);
    let mut error = use_signal(|| None::<String>);
    let mut loading = use_signal(|| true);

    let events_client = client.clone();
    use_hook(move || {
        spawn(async move {
            match EventService::new(&events_client).list().await {
                Ok(events) => {
                    tracing::debug!(count = events.len(), "Loaded events");
                    browser.write().replace_events(events);
                }
                Err(err) => {
                    tracing::error!("Failed to load events: {}", err);
                    error.set(Some(Error::from(err).user_message()));
                }
            }
            loading.set(false);
        });
    });

    // Favorites follow the login state
    use_effect(move || {
        let logged_in = user_store.read().is_logged_in();
        if !logged_in {
            favorites.set(HashSet::new());
            return;
        }

        let client = client.clone();
        spawn(async move {
            match FavoriteService::new(&client).favorites().await {
                Ok(events) => favorites.set(events.into_iter().map(|event| event.id).collect()),
                Err(err) => tracing::error!("Failed to load favorites: {}", err),
            }
        });
    });

    let visible = browser.read().visible().to_vec();

    rsx!(
        Title { "Events | meetmap" }
        Meta {
            name: "description",
            content: "Discover events near you, filter by tag, month and status."
        }
        Page { heading: "Discover events",
            ErrorAlert { message: error() }
            div { class: "grid gap-4 grid-cols-1 lg:grid-cols-2",
                FilterPanel { browser }
                EventMap { browser }
            }
            if loading() {
                div { class: "grid gap-4 grid-cols-1 md:grid-cols-2 xl:grid-cols-3",
                    for placeholder in 0..3 {
                        div { key: "{placeholder}", class: "skeleton h-64 w-full" }
                    }
                }
            } else {
                EventList { events: visible, favorites }
            }
        }
    )
}
