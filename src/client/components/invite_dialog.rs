use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        components::{ErrorAlert, SuccessAlert},
        error::Error,
        service::{ApiClient, EventService, FriendService},
    },
    model::friend::Friend,
};

/// Picks friends to invite to an event.
#[component]
pub fn InviteDialog(event_id: String, on_close: EventHandler<()>) -> Element {
    let client = use_context::<ApiClient>();
    let mut selected = use_signal(Vec::<String>::new);
    let mut error = use_signal(|| None::<String>);
    let mut sent = use_signal(|| None::<String>);

    let load_client = client.clone();
    let friends = use_resource(move || {
        let client = load_client.clone();
        async move { FriendService::new(&client).friends().await }
    });

    let send = move |_| {
        let client = client.clone();
        let event_id = event_id.clone();
        let friend_ids = selected();

        spawn(async move {
            match EventService::new(&client).invite(&event_id, &friend_ids).await {
                Ok(()) => {
                    error.set(None);
                    sent.set(Some(format!("Invited {} friends", friend_ids.len())));
                    selected.set(Vec::new());
                }
                Err(err) => {
                    tracing::error!(event_id = %event_id, "Failed to send invitations: {}", err);
                    error.set(Some(Error::from(err).user_message()));
                }
            }
        });
    };

    rsx!(
        div { class: "modal modal-open",
            div { class: "modal-box flex flex-col gap-3",
                h3 { class: "text-lg font-semibold", "Invite friends" }
                match &*friends.read() {
                    None => rsx!(span { class: "loading loading-spinner" }),
                    Some(Err(err)) => rsx!(
                        ErrorAlert { message: Some(Error::from(err.clone()).user_message()) }
                    ),
                    Some(Ok(list)) if list.is_empty() => rsx!(
                        p { class: "opacity-70", "Add friends on your profile to invite them." }
                    ),
                    Some(Ok(list)) => rsx!(
                        ul { class: "flex flex-col gap-1",
                            for friend in list.iter().cloned() {
                                FriendCheckbox { key: "{friend.id}", friend: friend.clone(), selected }
                            }
                        }
                    ),
                }
                ErrorAlert { message: error() }
                SuccessAlert { message: sent() }
                div { class: "modal-action",
                    button { class: "btn btn-ghost", onclick: move |_| on_close.call(()), "Close" }
                    button {
                        class: "btn btn-primary",
                        disabled: selected.read().is_empty(),
                        onclick: send,
                        "Send invitations"
                    }
                }
            }
        }
    )
}

#[component]
fn FriendCheckbox(friend: Friend, selected: Signal<Vec<String>>) -> Element {
    let checked = selected.read().contains(&friend.id);
    let friend_id = friend.id.clone();

    rsx!(
        li {
            label { class: "label cursor-pointer justify-start gap-2",
                input {
                    class: "checkbox checkbox-sm",
                    r#type: "checkbox",
                    checked,
                    onchange: move |_| {
                        let mut ids = selected.write();
                        match ids.iter().position(|id| *id == friend_id) {
                            Some(index) => {
                                ids.remove(index);
                            }
                            None => ids.push(friend_id.clone()),
                        }
                    },
                }
                span { "{friend.name}" }
            }
        }
    )
}
