use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaCheck, FaMagnifyingGlass, FaTrash, FaUserPlus, FaXmark};
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;

use crate::{
    client::{
        components::ErrorAlert,
        error::Error,
        service::{ApiClient, FriendService, UserService},
    },
    model::{
        api::UserSearchResult,
        friend::{Friend, FriendBook, FriendRequest, FriendResponse},
    },
};

/// Friend list, incoming requests and user search on the profile page.
///
/// Local state only changes after the backend accepted the action.
#[component]
pub fn FriendsPanel(book: FriendBook) -> Element {
    let client = use_context::<ApiClient>();
    let book = use_signal(|| book.clone());
    let mut query = use_signal(String::new);
    let mut results = use_signal(Vec::<UserSearchResult>::new);
    let mut error = use_signal(|| None::<String>);

    let search = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        let query = query();

        spawn(async move {
            match UserService::new(&client).search(&query).await {
                Ok(found) => {
                    results.set(found);
                    error.set(None);
                }
                Err(err) => {
                    tracing::error!("Failed to search users: {}", err);
                    error.set(Some(Error::from(err).user_message()));
                }
            }
        });
    };

    let current = book.read().clone();

    rsx!(
        div { class: "flex flex-col gap-4",
            ErrorAlert { message: error() }
            div { class: "flex flex-col gap-2",
                h2 { class: "text-lg", "Friend requests" }
                if current.incoming.is_empty() {
                    p { class: "opacity-70", "No pending requests." }
                }
                for request in current.incoming.iter().cloned() {
                    RequestRow { key: "{request.id}", request: request.clone(), book, error }
                }
            }
            div { class: "flex flex-col gap-2",
                h2 { class: "text-lg", "Friends" }
                if current.friends.is_empty() {
                    p { class: "opacity-70", "No friends yet." }
                }
                for friend in current.friends.iter().cloned() {
                    FriendRow { key: "{friend.id}", friend: friend.clone(), book, error }
                }
            }
            div { class: "flex flex-col gap-2",
                h2 { class: "text-lg", "Find people" }
                form { class: "flex gap-2", onsubmit: search,
                    input {
                        class: "input input-bordered flex-1",
                        r#type: "search",
                        placeholder: "Username",
                        value: "{query}",
                        oninput: move |evt| query.set(evt.value()),
                    }
                    button { class: "btn btn-outline", r#type: "submit",
                        Icon { width: 14, height: 14, icon: FaMagnifyingGlass }
                    }
                }
                for result in results() {
                    SearchResultRow {
                        key: "{result.id}",
                        already_friend: current.is_friend(&result.id),
                        result: result.clone(),
                        error,
                    }
                }
            }
        }
    )
}

#[component]
fn RequestRow(
    request: FriendRequest,
    book: Signal<FriendBook>,
    error: Signal<Option<String>>,
) -> Element {
    let client = use_context::<ApiClient>();
    let (mut book, mut error) = (book, error);
    let request_id = request.id.clone();

    let respond = move |response: FriendResponse| {
        let client = client.clone();
        let request_id = request_id.clone();

        spawn(async move {
            match FriendService::new(&client).respond(&request_id, response).await {
                Ok(()) => {
                    book.write().apply_response(&request_id, response);
                }
                Err(err) => {
                    tracing::error!(request_id = %request_id, "Failed to answer friend request: {}", err);
                    error.set(Some(Error::from(err).user_message()));
                }
            }
        });
    };
    let accept = respond.clone();
    let decline = respond;

    rsx!(
        div { class: "flex items-center justify-between gap-2",
            span { "{request.sender.name}" }
            div { class: "flex gap-1",
                button {
                    class: "btn btn-success btn-xs",
                    onclick: move |_| accept(FriendResponse::Accept),
                    Icon { width: 12, height: 12, icon: FaCheck }
                }
                button {
                    class: "btn btn-ghost btn-xs",
                    onclick: move |_| decline(FriendResponse::Decline),
                    Icon { width: 12, height: 12, icon: FaXmark }
                }
            }
        }
    )
}

#[component]
fn FriendRow(friend: Friend, book: Signal<FriendBook>, error: Signal<Option<String>>) -> Element {
    let client = use_context::<ApiClient>();
    let (mut book, mut error) = (book, error);
    let friend_id = friend.id.clone();

    let remove = move |_| {
        let client = client.clone();
        let friend_id = friend_id.clone();

        spawn(async move {
            match FriendService::new(&client).remove(&friend_id).await {
                Ok(()) => {
                    book.write().remove_friend(&friend_id);
                }
                Err(err) => {
                    tracing::error!(friend_id = %friend_id, "Failed to remove friend: {}", err);
                    error.set(Some(Error::from(err).user_message()));
                }
            }
        });
    };

    rsx!(
        div { class: "flex items-center justify-between gap-2",
            div { class: "flex items-center gap-2",
                if let Some(avatar_url) = &friend.avatar_url {
                    div { class: "avatar",
                        div { class: "w-8 h-8 rounded-full",
                            img { src: "{avatar_url}", alt: "{friend.name}" }
                        }
                    }
                }
                span { "{friend.name}" }
            }
            button {
                class: "btn btn-ghost btn-xs",
                title: "Remove friend",
                onclick: remove,
                Icon { width: 12, height: 12, icon: FaTrash }
            }
        }
    )
}

#[component]
fn SearchResultRow(
    result: UserSearchResult,
    already_friend: bool,
    error: Signal<Option<String>>,
) -> Element {
    let client = use_context::<ApiClient>();
    let mut sent = use_signal(|| false);
    let mut error = error;
    let user_id = result.id.clone();

    let send_request = move |_| {
        let client = client.clone();
        let user_id = user_id.clone();

        spawn(async move {
            match FriendService::new(&client).send_request(&user_id).await {
                Ok(()) => sent.set(true),
                Err(err) => {
                    tracing::error!(user_id = %user_id, "Failed to send friend request: {}", err);
                    error.set(Some(Error::from(err).user_message()));
                }
            }
        });
    };

    rsx!(
        div { class: "flex items-center justify-between gap-2",
            span { "{result.username}" }
            if already_friend {
                span { class: "badge", "Friend" }
            } else if sent() {
                span { class: "badge badge-success", "Request sent" }
            } else {
                button {
                    class: "btn btn-outline btn-xs flex gap-1",
                    onclick: send_request,
                    Icon { width: 12, height: 12, icon: FaUserPlus }
                    "Add"
                }
            }
        }
    )
}
