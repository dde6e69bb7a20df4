use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        components::{ErrorAlert, Page},
        error::Error,
        router::Route,
        service::{auth::validate_registration, ApiClient, AuthService},
        store::user::{refresh_user, UserState},
    },
    model::{api::RegisterDto, user::Role},
};

/// Roles an account can sign up with; moderators are appointed.
const SIGNUP_ROLES: [Role; 2] = [Role::Participant, Role::Organizer];

#[component]
pub fn Register() -> Element {
    let client = use_context::<ApiClient>();
    let user_store = use_context::<Store<UserState>>();
    let navigator = use_navigator();
    let mut username = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirmation = use_signal(String::new);
    let mut role = use_signal(|| Role::Participant);
    let mut error = use_signal(|| None::<String>);
    let mut busy = use_signal(|| false);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let account = RegisterDto {
            username: username().trim().to_string(),
            email: email().trim().to_string(),
            password: password(),
            role: role(),
        };
        if let Err(err) = validate_registration(&account, &confirmation()) {
            error.set(Some(err.to_string()));
            return;
        }

        let client = client.clone();
        busy.set(true);
        spawn(async move {
            match AuthService::new(&client).register(&account).await {
                Ok(()) => {
                    refresh_user(&client, user_store).await;
                    navigator.push(Route::Profile {});
                }
                Err(err) => {
                    tracing::error!("Registration failed: {}", err);
                    error.set(Some(Error::from(err).user_message()));
                    busy.set(false);
                }
            }
        });
    };

    rsx!(
        Title { "Register | meetmap" }
        Page { class: "flex flex-col items-center",
            form { class: "card shadow-sm w-full max-w-96 mx-auto", onsubmit: submit,
                div { class: "card-body gap-3",
                    h2 { class: "card-title", "Create an account" }
                    input {
                        class: "input input-bordered w-full",
                        placeholder: "Username",
                        value: "{username}",
                        oninput: move |evt| username.set(evt.value()),
                    }
                    input {
                        class: "input input-bordered w-full",
                        r#type: "email",
                        placeholder: "Email",
                        value: "{email}",
                        oninput: move |evt| email.set(evt.value()),
                    }
                    input {
                        class: "input input-bordered w-full",
                        r#type: "password",
                        placeholder: "Password",
                        value: "{password}",
                        oninput: move |evt| password.set(evt.value()),
                    }
                    input {
                        class: "input input-bordered w-full",
                        r#type: "password",
                        placeholder: "Repeat password",
                        value: "{confirmation}",
                        oninput: move |evt| confirmation.set(evt.value()),
                    }
                    select {
                        class: "select select-bordered w-full",
                        onchange: move |evt| {
                            if let Some(picked) = Role::from_label(&evt.value()) {
                                role.set(picked);
                            }
                        },
                        for option_role in SIGNUP_ROLES {
                            option {
                                key: "{option_role.label()}",
                                value: "{option_role.label()}",
                                selected: role() == option_role,
                                "{option_role.label()}"
                            }
                        }
                    }
                    ErrorAlert { message: error() }
                    button { class: "btn btn-primary", r#type: "submit", disabled: busy(), "Register" }
                    p { class: "text-sm",
                        "Already registered? "
                        Link { class: "link", to: Route::Login {}, "Log in" }
                    }
                }
            }
        }
    )
}
