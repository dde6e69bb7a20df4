use std::collections::HashSet;

use dioxus::prelude::*;

use crate::{client::components::EventCard, model::event::Event};

#[component]
pub fn EventList(events: Vec<Event>, favorites: Signal<HashSet<String>>) -> Element {
    if events.is_empty() {
        return rsx!(
            div { class: "card bg-base-200 w-full",
                div { class: "card-body items-center text-center",
                    p { "No events match your filters." }
                }
            }
        );
    }

    rsx!(
        div { class: "grid gap-4 grid-cols-1 md:grid-cols-2 xl:grid-cols-3",
            for event in events {
                EventCard { key: "{event.id}", event: event.clone(), favorites }
            }
        }
    )
}
