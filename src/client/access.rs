//! Role checks for routes and actions.
//!
//! Pages call these with the user held in [`UserState`](crate::client::store::user::UserState);
//! the backend enforces the same rules, so a failed check only decides what is rendered.

use crate::{
    client::error::AccessError,
    model::user::{Role, User},
};

/// Any logged-in account.
pub fn require_login(user: Option<&User>) -> Result<&User, AccessError> {
    user.ok_or(AccessError::NotLoggedIn)
}

/// A logged-in account with exactly `role`.
pub fn require_role(user: Option<&User>, role: Role) -> Result<&User, AccessError> {
    let user = require_login(user)?;
    if user.role() != role {
        return Err(AccessError::Forbidden { required: role });
    }

    Ok(user)
}
