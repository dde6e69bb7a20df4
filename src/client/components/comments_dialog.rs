use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaStar, FaXmark};
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;

use crate::{
    client::{
        components::ErrorAlert,
        error::Error,
        service::{ApiClient, EventService},
        store::user::UserState,
    },
    model::comment::{average_rating, NewComment, MAX_RATING},
};

/// Comments and ratings of one event, with a form for logged-in users.
#[component]
pub fn CommentsDialog(event_id: String, title: String, on_close: EventHandler<()>) -> Element {
    let client = use_context::<ApiClient>();
    let user_store = use_context::<Store<UserState>>();
    let mut text = use_signal(String::new);
    let mut rating = use_signal(|| 0u8);
    let mut error = use_signal(|| None::<String>);

    let load_client = client.clone();
    let load_event_id = event_id.clone();
    let mut comments = use_resource(move || {
        let client = load_client.clone();
        let event_id = load_event_id.clone();
        async move { EventService::new(&client).comments(&event_id).await }
    });

    let logged_in = user_store.read().is_logged_in();

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        let event_id = event_id.clone();
        let comment = NewComment {
            text: text(),
            rating: rating(),
        };

        spawn(async move {
            match EventService::new(&client).add_comment(&event_id, &comment).await {
                Ok(_) => {
                    text.set(String::new());
                    rating.set(0);
                    error.set(None);
                    comments.restart();
                }
                Err(err) => {
                    tracing::error!(event_id = %event_id, "Failed to add comment: {}", err);
                    error.set(Some(err.user_message()));
                }
            }
        });
    };

    rsx!(
        div { class: "modal modal-open",
            div { class: "modal-box flex flex-col gap-3",
                div { class: "flex justify-between items-center",
                    h3 { class: "text-lg font-semibold", "{title}" }
                    button {
                        class: "btn btn-ghost btn-sm btn-circle",
                        onclick: move |_| on_close.call(()),
                        Icon { width: 14, height: 14, icon: FaXmark }
                    }
                }
                match &*comments.read() {
                    None => rsx!(span { class: "loading loading-spinner" }),
                    Some(Err(err)) => rsx!(
                        ErrorAlert { message: Some(Error::from(err.clone()).user_message()) }
                    ),
                    Some(Ok(list)) => rsx!(
                        if let Some(average) = average_rating(list) {
                            p { class: "flex items-center gap-1",
                                Icon { width: 14, height: 14, icon: FaStar }
                                "{average:.1} / {MAX_RATING} from {list.len()} comments"
                            }
                        }
                        if list.is_empty() {
                            p { class: "opacity-70", "No comments yet." }
                        }
                        ul { class: "flex flex-col gap-2 max-h-64 overflow-y-auto",
                            for comment in list.iter() {
                                li { key: "{comment.id}", class: "border-b border-base-300 pb-2",
                                    div { class: "flex justify-between text-sm",
                                        span { class: "font-semibold", "{comment.author_name}" }
                                        span { class: "opacity-70",
                                            {comment.created_at.format("%d %b %Y").to_string()}
                                        }
                                    }
                                    if comment.rating > 0 {
                                        p { class: "text-xs", "Rating: {comment.rating} / {MAX_RATING}" }
                                    }
                                    if !comment.text.is_empty() {
                                        p { "{comment.text}" }
                                    }
                                }
                            }
                        }
                    ),
                }
                if logged_in {
                    form { class: "flex flex-col gap-2", onsubmit: submit,
                        textarea {
                            class: "textarea textarea-bordered",
                            placeholder: "Share your thoughts",
                            value: "{text}",
                            oninput: move |evt| text.set(evt.value()),
                        }
                        div { class: "flex items-center gap-2",
                            select {
                                class: "select select-bordered select-sm",
                                value: "{rating}",
                                onchange: move |evt| rating.set(evt.value().parse().unwrap_or(0)),
                                for value in 0..=MAX_RATING {
                                    option { key: "{value}", value: "{value}",
                                        if value == 0 { "No rating" } else { "{value} stars" }
                                    }
                                }
                            }
                            button { class: "btn btn-primary btn-sm", r#type: "submit", "Post" }
                        }
                        ErrorAlert { message: error() }
                    }
                } else {
                    p { class: "text-sm opacity-70", "Log in to leave a comment." }
                }
            }
            div { class: "modal-backdrop", onclick: move |_| on_close.call(()) }
        }
    )
}
