use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaPen, FaPlus, FaTrash};
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;

use crate::{
    client::{
        components::{tag_key, ErrorAlert, EventFormDialog, Page, RequireRole, TagBadge},
        service::{ApiClient, EventService},
        store::user::UserState,
    },
    model::{event::Event, user::Role},
};

#[component]
pub fn OrganizerDashboard() -> Element {
    rsx!(
        Title { "My events | meetmap" }
        RequireRole { role: Role::Organizer,
            OrganizerEvents {}
        }
    )
}

/// Events created by the logged-in organizer.
///
/// `editing` is `Some(None)` while the create form is open and `Some(Some(event))` while an
/// existing event is edited.
#[component]
fn OrganizerEvents() -> Element {
    let client = use_context::<ApiClient>();
    let user_store = use_context::<Store<UserState>>();
    let mut events = use_signal(Vec::<Event>::new);
    let mut editing = use_signal(|| None::<Option<Event>>);
    let mut error = use_signal(|| None::<String>);
    let mut loading = use_signal(|| true);

    let organizer_id = user_store
        .read()
        .user
        .as_ref()
        .map(|user| user.profile().id.clone())
        .unwrap_or_default();

    let load_client = client.clone();
    use_hook(move || {
        spawn(async move {
            match EventService::new(&load_client).by_organizer(&organizer_id).await {
                Ok(loaded) => events.set(loaded),
                Err(err) => {
                    tracing::error!("Failed to load organizer events: {}", err);
                    error.set(Some(err.user_message()));
                }
            }
            loading.set(false);
        })
    });

    let on_saved = move |saved: Event| {
        tracing::info!(event_id = %saved.id, "Saved event");
        let mut list = events.write();
        match list.iter_mut().find(|event| event.id == saved.id) {
            Some(existing) => *existing = saved,
            None => list.push(saved),
        }
        drop(list);
        editing.set(None);
    };

    let on_delete = use_callback(move |event_id: String| {
        let client = client.clone();

        spawn(async move {
            match EventService::new(&client).delete(&event_id).await {
                Ok(()) => {
                    tracing::info!(event_id = %event_id, "Deleted event");
                    events.write().retain(|event| event.id != event_id);
                }
                Err(err) => error.set(Some(err.user_message())),
            }
        });
    });

    rsx!(
        Page { heading: "My events",
            div { class: "flex justify-end",
                button {
                    class: "btn btn-primary flex gap-2",
                    onclick: move |_| editing.set(Some(None)),
                    Icon { width: 14, height: 14, icon: FaPlus }
                    "New event"
                }
            }
            ErrorAlert { message: error() }
            if loading() {
                div { class: "skeleton h-32 w-full" }
            } else if events.read().is_empty() {
                p { class: "opacity-70", "You have not created any events yet." }
            } else {
                div { class: "flex flex-col gap-2",
                    for event in events() {
                        OrganizerEventRow {
                            key: "{event.id}",
                            event: event.clone(),
                            on_edit: move |event| editing.set(Some(Some(event))),
                            on_delete,
                        }
                    }
                }
            }
            if let Some(event) = editing() {
                EventFormDialog {
                    event,
                    on_saved,
                    on_close: move |_| editing.set(None),
                }
            }
        }
    )
}

#[component]
fn OrganizerEventRow(
    event: Event,
    on_edit: EventHandler<Event>,
    on_delete: EventHandler<String>,
) -> Element {
    let edited = event.clone();
    let event_id = event.id.clone();
    let moderation = event
        .moderation_status
        .map(|status| status.label())
        .unwrap_or("Not submitted");

    rsx!(
        div { class: "card bg-base-200",
            div { class: "card-body p-4 flex-row items-center gap-4",
                div { class: "flex-1",
                    h3 { class: "font-semibold", "{event.title}" }
                    p { class: "text-sm opacity-70",
                        "{event.display_start()} · {event.location.address}"
                    }
                    div { class: "flex flex-wrap gap-1 mt-1",
                        for tag in event.tags.clone() {
                            TagBadge { key: "{tag_key(&tag)}", tag: tag.clone() }
                        }
                    }
                }
                span { class: "badge badge-outline", "{event.status.label()}" }
                span { class: "badge badge-ghost", "{moderation}" }
                button {
                    class: "btn btn-sm btn-ghost",
                    title: "Edit",
                    onclick: move |_| on_edit.call(edited.clone()),
                    Icon { width: 14, height: 14, icon: FaPen }
                }
                button {
                    class: "btn btn-sm btn-ghost text-error",
                    title: "Delete",
                    onclick: move |_| on_delete.call(event_id.clone()),
                    Icon { width: 14, height: 14, icon: FaTrash }
                }
            }
        }
    )
}
