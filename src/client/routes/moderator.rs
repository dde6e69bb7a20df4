use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaCheck, FaTriangleExclamation, FaXmark};
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;

use crate::{
    client::{
        components::{ErrorAlert, Page, RequireRole},
        service::{ApiClient, EventService},
    },
    model::{
        event::{Event, ModerationStatus},
        user::Role,
    },
};

#[component]
pub fn ModeratorDashboard() -> Element {
    rsx!(
        Title { "Moderation | meetmap" }
        RequireRole { role: Role::Moderator,
            ModerationQueue {}
        }
    )
}

/// Events grouped by moderation status, one tab per status.
#[component]
fn ModerationQueue() -> Element {
    let client = use_context::<ApiClient>();
    let mut status = use_signal(|| ModerationStatus::Pending);
    let mut error = use_signal(|| None::<String>);

    let mut queue = use_resource(move || {
        let client = client.clone();
        let status = status();
        async move { EventService::new(&client).by_moderation_status(status).await }
    });

    let on_decided = use_callback(move |(event_id, decision): (String, ModerationStatus)| {
        tracing::info!(event_id = %event_id, status = ?decision, "Moderated event");
        error.set(None);
        queue.restart();
    });

    let content = match &*queue.read() {
        None => rsx!(div { class: "skeleton h-32 w-full" }),
        Some(Err(err)) => rsx!(ErrorAlert { message: Some(err.user_message()) }),
        Some(Ok(events)) if events.is_empty() => rsx!(
            p { class: "opacity-70", "No {status().label().to_lowercase()} events." }
        ),
        Some(Ok(events)) => {
            let events = events.clone();
            rsx!(
                div { class: "flex flex-col gap-2",
                    for event in events {
                        ModerationRow {
                            key: "{event.id}",
                            event: event.clone(),
                            on_decided,
                            on_error: move |message| error.set(Some(message)),
                        }
                    }
                }
            )
        }
    };

    rsx!(
        Page { heading: "Moderation",
            div { role: "tablist", class: "tabs tabs-bordered",
                for option in ModerationStatus::ALL {
                    button {
                        key: "{option.as_path()}",
                        role: "tab",
                        class: if status() == option { "tab tab-active" } else { "tab" },
                        onclick: move |_| status.set(option),
                        "{option.label()}"
                    }
                }
            }
            ErrorAlert { message: error() }
            {content}
        }
    )
}

#[component]
fn ModerationRow(
    event: Event,
    on_decided: EventHandler<(String, ModerationStatus)>,
    on_error: EventHandler<String>,
) -> Element {
    let client = use_context::<ApiClient>();
    let mut busy = use_signal(|| false);

    let decide = move |event_id: String, decision: ModerationStatus| {
        let client = client.clone();
        busy.set(true);

        spawn(async move {
            match EventService::new(&client)
                .set_moderation_status(&event_id, decision)
                .await
            {
                Ok(_) => on_decided.call((event_id, decision)),
                Err(err) => {
                    tracing::error!("Failed to moderate event {}: {}", event_id, err);
                    on_error.call(err.user_message());
                }
            }
            busy.set(false);
        });
    };

    let approve_id = event.id.clone();
    let reject_id = event.id.clone();
    let mut approve = decide.clone();
    let mut reject = decide;
    let current = event.moderation_status;

    rsx!(
        div { class: "card bg-base-200",
            div { class: "card-body p-4 flex-row items-center gap-4",
                div { class: "flex-1",
                    h3 { class: "font-semibold", "{event.title}" }
                    p { class: "text-sm opacity-70",
                        "{event.organizer_name} · {event.display_start()} · {event.location.address}"
                    }
                    p { class: "text-sm line-clamp-2", "{event.description}" }
                }
                span { class: "badge badge-outline", "{event.status.label()}" }
                if event.is_stale_pending() {
                    span { class: "badge badge-warning flex gap-1",
                        Icon { width: 12, height: 12, icon: FaTriangleExclamation }
                        "Held but still pending"
                    }
                }
                if current != Some(ModerationStatus::Approved) {
                    button {
                        class: "btn btn-sm btn-success",
                        disabled: busy(),
                        onclick: move |_| approve(approve_id.clone(), ModerationStatus::Approved),
                        Icon { width: 14, height: 14, icon: FaCheck }
                        "Approve"
                    }
                }
                if current != Some(ModerationStatus::Rejected) {
                    button {
                        class: "btn btn-sm btn-error",
                        disabled: busy(),
                        onclick: move |_| reject(reject_id.clone(), ModerationStatus::Rejected),
                        Icon { width: 14, height: 14, icon: FaXmark }
                        "Reject"
                    }
                }
            }
        }
    )
}
