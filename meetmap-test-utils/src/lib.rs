//! Test utilities for the meetmap client.
//!
//! Tests describe the backend they need with [`TestBuilder`]: every endpoint is queued on the
//! builder and registered on a fresh mockito server during [`TestBuilder::build`]. Response bodies
//! come from the JSON [`fixtures`], so this crate does not depend on the client's own types.

pub mod builder;
pub mod constant;
pub mod context;
pub mod fixtures;

pub use builder::TestBuilder;
pub use context::TestContext;

pub mod prelude {
    pub use crate::{
        constant::TEST_TOKEN,
        fixtures::{event, geocoding, user},
        TestBuilder, TestContext,
    };
}
