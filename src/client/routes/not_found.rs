use dioxus::prelude::*;

use crate::client::{components::Page, router::Route};

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    rsx!(
        Title { "Not found | meetmap" }
        Page { class: "flex flex-col items-center",
            div { class: "card shadow-sm w-full max-w-96 mx-auto",
                div { class: "card-body items-center text-center",
                    h2 { class: "card-title", "Page not found" }
                    p { "There is nothing at {path}." }
                    Link { class: "btn btn-primary", to: Route::Home {}, "Back to events" }
                }
            }
        }
    )
}
