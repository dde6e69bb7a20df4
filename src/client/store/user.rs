use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::service::{ApiClient, UserService},
    model::user::{Role, User},
};

/// Logged-in account shared through the context.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UserState {
    pub user: Option<User>,
    /// Set once the account lookup for a stored session has finished, successful or not.
    pub fetched: bool,
}

impl UserState {
    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(User::role)
    }

    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }
}

/// Fetches the account for the current session into the store.
///
/// A rejected token is dropped from the session so the next page load starts logged out.
pub async fn refresh_user(client: &ApiClient, mut user_store: Store<UserState>) {
    if !client.session().is_authenticated() {
        user_store.set(UserState {
            user: None,
            fetched: true,
        });
        return;
    }

    let user = match UserService::new(client).get_info().await {
        Ok(user) => Some(user),
        Err(err) => {
            tracing::error!("Failed to load the current user: {}", err);
            if err.is_unauthorized() {
                client.session().logout();
            }
            None
        }
    };

    user_store.set(UserState {
        user,
        fetched: true,
    });
}
