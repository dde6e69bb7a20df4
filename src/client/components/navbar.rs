use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaMapLocationDot, FaRightFromBracket};
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;

use crate::{
    client::{
        router::Route,
        service::{ApiClient, AuthService},
        store::user::UserState,
    },
    model::user::Role,
};

#[component]
pub fn Navbar() -> Element {
    let client = use_context::<ApiClient>();
    let mut user_store = use_context::<Store<UserState>>();
    let navigator = use_navigator();

    let state = user_store.read().clone();
    let role = state.role();

    let logout = move |_| {
        AuthService::new(&client).logout();
        user_store.set(UserState {
            user: None,
            fetched: true,
        });
        tracing::info!("Logged out");
        navigator.push(Route::Home {});
    };

    rsx! {
        div {
            class: "navbar bg-base-200 fixed z-50",
            div {
                class: "navbar-start",
                Link { to: Route::Home {},
                    div { class: "flex items-center gap-2",
                        Icon {
                            width: 24,
                            height: 24,
                            icon: FaMapLocationDot
                        }
                        p { class: "text-xl",
                            "meetmap"
                        }
                    }
                }
            }
            div {
                class: "navbar-end flex gap-2",
                Link { class: "btn btn-ghost", to: Route::Home {}, "Events" }
                if role == Some(Role::Organizer) {
                    Link { class: "btn btn-ghost", to: Route::OrganizerDashboard {}, "My events" }
                }
                if role == Some(Role::Moderator) {
                    Link { class: "btn btn-ghost", to: Route::ModeratorDashboard {}, "Moderation" }
                }
                if let Some(user) = &state.user {
                    Link { class: "btn btn-ghost", to: Route::Profile {},
                        "{user.profile().display_name()}"
                    }
                    button {
                        class: "btn btn-outline flex gap-2",
                        onclick: logout,
                        Icon {
                            width: 16,
                            height: 16,
                            icon: FaRightFromBracket
                        }
                        "Logout"
                    }
                } else if state.fetched {
                    Link { class: "btn btn-outline", to: Route::Login {}, "Login" }
                    Link { class: "btn btn-primary", to: Route::Register {}, "Register" }
                }
            }
        }

        Outlet::<Route> {}
    }
}
