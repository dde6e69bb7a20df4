use dioxus::prelude::*;

use crate::client::{
    components::Navbar,
    routes::{Home, Login, ModeratorDashboard, NotFound, OrganizerDashboard, Profile, Register},
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]

    #[route("/")]
    Home {},

    #[route("/login")]
    Login {},

    #[route("/register")]
    Register {},

    #[route("/profile")]
    Profile {},

    #[route("/organizer")]
    OrganizerDashboard {},

    #[route("/moderator")]
    ModeratorDashboard {},

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
