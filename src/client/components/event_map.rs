use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaLocationDot, FaRotateLeft};
use dioxus_free_icons::Icon;

use crate::{
    client::util::map::MapBounds,
    filter::{EventBrowser, Selection},
};

#[derive(Clone, Debug, PartialEq)]
pub struct Marker {
    event_id: String,
    title: String,
    left: f64,
    top: f64,
}

/// Markers for the filtered events, projected into the map box.
///
/// Clicking a marker narrows the list to that event; the reset button brings the filtered list
/// back.
#[component]
pub fn EventMap(browser: Signal<EventBrowser>) -> Element {
    let mut browser = browser;
    let (markers, selected) = {
        let state = browser.read();
        let matching = state.matching();
        let bounds = MapBounds::from_events(matching);

        let markers: Vec<Marker> = matching
            .iter()
            .filter(|event| event.location.has_valid_coordinates())
            .map(|event| {
                let (left, top) = bounds.project(event.location.latitude, event.location.longitude);
                Marker {
                    event_id: event.id.clone(),
                    title: event.title.clone(),
                    left,
                    top,
                }
            })
            .collect();
        let selected = match state.selection() {
            Selection::SingleSelected(id) => Some(id.clone()),
            Selection::AllEvents => None,
        };

        (markers, selected)
    };

    rsx!(
        div { class: "flex flex-col gap-2",
            div { class: "event-map shadow-sm",
                for marker in markers {
                    MapMarker {
                        key: "{marker.event_id}",
                        selected: selected.as_deref() == Some(marker.event_id.as_str()),
                        marker: marker.clone(),
                        browser,
                    }
                }
            }
            if selected.is_some() {
                button {
                    class: "btn btn-outline btn-sm self-start flex gap-2",
                    onclick: move |_| browser.write().reset(),
                    Icon {
                        width: 14,
                        height: 14,
                        icon: FaRotateLeft
                    }
                    "Show all events"
                }
            }
        }
    )
}

#[component]
fn MapMarker(marker: Marker, selected: bool, browser: Signal<EventBrowser>) -> Element {
    let mut browser = browser;
    let event_id = marker.event_id.clone();

    rsx!(
        button {
            class: if selected { "marker selected" } else { "marker" },
            style: "left: {marker.left:.3}%; top: {marker.top:.3}%;",
            title: "{marker.title}",
            onclick: move |_| {
                browser.write().select(&event_id);
            },
            Icon {
                width: 28,
                height: 28,
                icon: FaLocationDot
            }
        }
    )
}
