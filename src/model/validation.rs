use thiserror::Error;

/// Form-level validation failure, rendered next to the form.
///
/// Lives with the models that raise it; the client re-exports it from `client::error`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("The {0} is required")]
    Required(&'static str),
    #[error("The title must be between {min} and {max} characters")]
    TitleLength { min: usize, max: usize },
    #[error("Could not understand the date {0:?}")]
    InvalidDate(String),
    #[error("Coordinates ({latitude}, {longitude}) are out of range")]
    Coordinates { latitude: f64, longitude: f64 },
    #[error("The tag {0:?} is used twice")]
    DuplicateTag(String),
    #[error("A rating must be between 0 and 5, got {0}")]
    Rating(u8),
    #[error("Write a comment or pick a rating")]
    EmptyComment,
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("The password must be at least {0} characters")]
    PasswordLength(usize),
    #[error("{0:?} is not a valid email address")]
    Email(String),
}
