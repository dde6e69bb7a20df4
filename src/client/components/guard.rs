use dioxus::prelude::*;

use crate::{
    client::{
        access::{require_login, require_role},
        components::{ErrorAlert, Page},
        error::AccessError,
        router::Route,
        store::user::UserState,
    },
    model::user::Role,
};

/// Renders `children` only for a logged-in account, and only for `role` when one is given.
#[component]
pub fn RequireRole(role: Option<Role>, children: Element) -> Element {
    let user_store = use_context::<Store<UserState>>();
    let state = user_store.read();

    if !state.fetched {
        return rsx!(
            Page {
                div { class: "skeleton h-32 w-full" }
            }
        );
    }

    let access = match role {
        Some(role) => require_role(state.user.as_ref(), role).map(|_| ()),
        None => require_login(state.user.as_ref()).map(|_| ()),
    };

    match access {
        Ok(()) => children,
        Err(err) => rsx!(
            Page { class: "flex flex-col items-center",
                ErrorAlert { message: Some(err.to_string()) }
                if err == AccessError::NotLoggedIn {
                    Link { class: "btn btn-primary", to: Route::Login {}, "Log in" }
                } else {
                    Link { class: "btn btn-outline", to: Route::Home {}, "Back to events" }
                }
            }
        ),
    }
}
