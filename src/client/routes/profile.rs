//! Profile page of the logged-in user.
//!
//! Everything the page shows is fetched in one go under [`PROFILE_LOAD_TIMEOUT`]. When the
//! deadline passes the page stays in a timed-out state until the user retries; nothing keeps
//! loading in the background.

use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaArrowsRotate;
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;

use crate::{
    client::{
        components::{ErrorAlert, FriendsPanel, Page, RequireRole, SuccessAlert},
        error::ApiError,
        service::{
            with_timeout, ApiClient, FavoriteService, FriendService, Transport, UserService,
            PROFILE_LOAD_TIMEOUT,
        },
        store::user::UserState,
        util::file::read_picked_file,
    },
    model::{
        api::InvitationDto,
        event::Event,
        friend::FriendBook,
        user::{Role, User},
    },
};

/// Everything shown on the profile page.
#[derive(Clone, Debug, PartialEq)]
pub struct ProfileData {
    pub user: User,
    pub friends: FriendBook,
    pub my_events: Vec<Event>,
    pub favorites: Vec<Event>,
    pub invitations: Vec<InvitationDto>,
}

/// Fetches the account, friends, registrations, favorites and invitations concurrently.
pub async fn load_profile<T: Transport>(client: &ApiClient<T>) -> Result<ProfileData, ApiError> {
    let users = UserService::new(client);
    let friends = FriendService::new(client);
    let favorites = FavoriteService::new(client);

    let (user, friend_list, incoming, my_events, favorite_events, invitations) = futures::try_join!(
        users.get_info(),
        friends.friends(),
        friends.incoming(),
        users.my_events(),
        favorites.favorites(),
        favorites.invitations(),
    )?;

    Ok(ProfileData {
        user,
        friends: FriendBook::new(friend_list, incoming),
        my_events,
        favorites: favorite_events,
        invitations,
    })
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProfileTab {
    #[default]
    Info,
    Friends,
    MyEvents,
    Favorites,
    Invitations,
}

impl ProfileTab {
    pub const ALL: [ProfileTab; 5] = [
        Self::Info,
        Self::Friends,
        Self::MyEvents,
        Self::Favorites,
        Self::Invitations,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Info => "Profile",
            Self::Friends => "Friends",
            Self::MyEvents => "My events",
            Self::Favorites => "Favorites",
            Self::Invitations => "Invitations",
        }
    }
}

#[component]
pub fn Profile() -> Element {
    rsx!(
        Title { "Profile | meetmap" }
        RequireRole {
            ProfileContent {}
        }
    )
}

#[component]
fn ProfileContent() -> Element {
    let client = use_context::<ApiClient>();
    let mut tab = use_signal(ProfileTab::default);

    let mut profile = use_resource(move || {
        let client = client.clone();
        async move {
            with_timeout(PROFILE_LOAD_TIMEOUT, load_profile(&client))
                .await
                .inspect_err(|err| tracing::error!("Failed to load profile: {}", err))
        }
    });

    let content = match &*profile.read() {
        None => rsx!(div { class: "skeleton h-64 w-full" }),
        Some(Err(err)) => {
            let message = match err {
                ApiError::Timeout(_) => "Loading your profile timed out.".to_string(),
                err => err.user_message(),
            };

            rsx!(
                div { class: "card bg-base-200 w-full",
                    div { class: "card-body items-center text-center gap-3",
                        ErrorAlert { message: Some(message) }
                        button {
                            class: "btn btn-outline flex gap-2",
                            onclick: move |_| profile.restart(),
                            Icon { width: 14, height: 14, icon: FaArrowsRotate }
                            "Retry"
                        }
                    }
                }
            )
        }
        Some(Ok(data)) => {
            let data = data.clone();

            rsx!(
                div { role: "tablist", class: "tabs tabs-bordered",
                    for option in ProfileTab::ALL {
                        button {
                            key: "{option.label()}",
                            role: "tab",
                            class: if tab() == option { "tab tab-active" } else { "tab" },
                            onclick: move |_| tab.set(option),
                            "{option.label()}"
                        }
                    }
                }
                match tab() {
                    ProfileTab::Info => rsx!(ProfileInfo { user: data.user.clone() }),
                    ProfileTab::Friends => rsx!(FriendsPanel { book: data.friends.clone() }),
                    ProfileTab::MyEvents => rsx!(
                        EventTable { events: data.my_events.clone(), empty: "You have not registered for any event." }
                    ),
                    ProfileTab::Favorites => rsx!(
                        EventTable { events: data.favorites.clone(), empty: "Double click an event card to add it here." }
                    ),
                    ProfileTab::Invitations => rsx!(InvitationList { invitations: data.invitations.clone() }),
                }
            )
        }
    };

    rsx!(
        Page { heading: "Your profile",
            {content}
        }
    )
}

/// Account form; switching the role starts the role's own fields from scratch.
#[component]
fn ProfileInfo(user: User) -> Element {
    let client = use_context::<ApiClient>();
    let mut user_store = use_context::<Store<UserState>>();
    let mut draft = use_signal(|| user.clone());
    let mut error = use_signal(|| None::<String>);
    let mut saved = use_signal(|| None::<String>);

    let current = draft.read().clone();
    let profile = current.profile().clone();
    let details = current.organizer_details().cloned();

    let avatar_client = client.clone();
    let upload_avatar = move |evt: FormEvent| {
        let client = avatar_client.clone();

        spawn(async move {
            let Some(file) = read_picked_file(&evt).await else {
                return;
            };
            match UserService::new(&client).upload_avatar(file).await {
                Ok(url) => {
                    draft.write().profile_mut().avatar_url = Some(url.clone());
                    if let Some(user) = user_store.write().user.as_mut() {
                        user.profile_mut().avatar_url = Some(url);
                    }
                }
                Err(err) => {
                    tracing::error!("Failed to upload avatar: {}", err);
                    error.set(Some(err.user_message()));
                }
            }
        });
    };

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        let user = draft();

        spawn(async move {
            match UserService::new(&client).edit_info(&user).await {
                Ok(updated) => {
                    tracing::info!(role = ?updated.role(), "Saved profile");
                    draft.set(updated.clone());
                    user_store.write().user = Some(updated);
                    error.set(None);
                    saved.set(Some("Profile saved".to_string()));
                }
                Err(err) => {
                    saved.set(None);
                    error.set(Some(err.user_message()));
                }
            }
        });
    };

    rsx!(
        form { class: "card shadow-sm w-full max-w-2xl", onsubmit: submit,
            div { class: "card-body gap-3",
                div { class: "flex items-center gap-4",
                    div { class: "avatar",
                        div { class: "w-20 h-20 rounded-full bg-base-300",
                            if let Some(avatar_url) = &profile.avatar_url {
                                img { src: "{avatar_url}", alt: "{profile.username}" }
                            }
                        }
                    }
                    input {
                        class: "file-input file-input-bordered file-input-sm",
                        r#type: "file",
                        accept: "image/*",
                        onchange: upload_avatar,
                    }
                }
                input {
                    class: "input input-bordered w-full",
                    placeholder: "Username",
                    value: "{profile.username}",
                    oninput: move |evt| draft.write().profile_mut().username = evt.value(),
                }
                div { class: "flex gap-2",
                    input {
                        class: "input input-bordered flex-1",
                        placeholder: "First name",
                        value: "{profile.first_name}",
                        oninput: move |evt| draft.write().profile_mut().first_name = evt.value(),
                    }
                    input {
                        class: "input input-bordered flex-1",
                        placeholder: "Last name",
                        value: "{profile.last_name}",
                        oninput: move |evt| draft.write().profile_mut().last_name = evt.value(),
                    }
                }
                input {
                    class: "input input-bordered w-full",
                    r#type: "email",
                    placeholder: "Email",
                    value: "{profile.email}",
                    oninput: move |evt| draft.write().profile_mut().email = evt.value(),
                }
                select {
                    class: "select select-bordered w-full",
                    onchange: move |evt| {
                        if let Some(role) = Role::from_label(&evt.value()) {
                            let switched = draft().with_role(role);
                            draft.set(switched);
                        }
                    },
                    for role in Role::ALL {
                        option {
                            key: "{role.label()}",
                            value: "{role.label()}",
                            selected: current.role() == role,
                            "{role.label()}"
                        }
                    }
                }
                if let Some(details) = details {
                    input {
                        class: "input input-bordered w-full",
                        placeholder: "Activity area",
                        value: "{details.activity_area}",
                        oninput: move |evt| {
                            if let Some(details) = draft.write().organizer_details_mut() {
                                details.activity_area = evt.value();
                            }
                        },
                    }
                    textarea {
                        class: "textarea textarea-bordered w-full",
                        placeholder: "About you as an organizer",
                        value: "{details.description}",
                        oninput: move |evt| {
                            if let Some(details) = draft.write().organizer_details_mut() {
                                details.description = evt.value();
                            }
                        },
                    }
                }
                ErrorAlert { message: error() }
                SuccessAlert { message: saved() }
                button { class: "btn btn-primary self-start", r#type: "submit", "Save" }
            }
        }
    )
}

#[component]
fn EventTable(events: Vec<Event>, empty: &'static str) -> Element {
    if events.is_empty() {
        return rsx!(p { class: "opacity-70", "{empty}" });
    }

    rsx!(
        div { class: "overflow-x-auto",
            table { class: "table table-md",
                thead {
                    tr {
                        th { "Event" }
                        th { "Starts" }
                        th { "Where" }
                        th { "Status" }
                    }
                }
                tbody {
                    for event in events {
                        tr { key: "{event.id}",
                            td { "{event.title}" }
                            td { "{event.display_start()}" }
                            td { "{event.location.address}" }
                            td { "{event.status.label()}" }
                        }
                    }
                }
            }
        }
    )
}

#[component]
fn InvitationList(invitations: Vec<InvitationDto>) -> Element {
    if invitations.is_empty() {
        return rsx!(p { class: "opacity-70", "No invitations." });
    }

    rsx!(
        ul { class: "flex flex-col gap-2",
            for invitation in invitations {
                li { key: "{invitation.id}", class: "card bg-base-200",
                    div { class: "card-body p-3",
                        p {
                            span { class: "font-semibold", "{invitation.invited_by.name}" }
                            " invited you to "
                            span { class: "font-semibold", "{invitation.event.title}" }
                        }
                        p { class: "text-sm opacity-70",
                            "{invitation.event.display_start()} · {invitation.event.location.address}"
                        }
                    }
                }
            }
        }
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Expect every tab to have a distinct label and the first one to be the default
    #[test]
    fn tabs_are_distinct() {
        let labels: std::collections::HashSet<_> =
            ProfileTab::ALL.iter().map(ProfileTab::label).collect();

        assert_eq!(labels.len(), ProfileTab::ALL.len());
        assert_eq!(ProfileTab::default(), ProfileTab::ALL[0]);
    }
}
