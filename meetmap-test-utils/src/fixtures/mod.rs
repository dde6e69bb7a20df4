//! JSON bodies in the shape the backend sends them.
//!
//! - `event` - events and comments
//! - `user` - accounts, friends and friend requests
//! - `geocoding` - geocoder hits

pub mod event;
pub mod geocoding;
pub mod user;
