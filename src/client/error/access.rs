use thiserror::Error;

use crate::model::user::Role;

/// A route or action was attempted without the required login or role.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AccessError {
    #[error("Please log in to continue")]
    NotLoggedIn,
    #[error("This page is only available to {} accounts", .required.label().to_lowercase())]
    Forbidden { required: Role },
}
