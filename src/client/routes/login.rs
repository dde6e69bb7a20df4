use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        components::{ErrorAlert, Page},
        error::{Error, ValidationError},
        router::Route,
        service::{ApiClient, AuthService},
        store::user::{refresh_user, UserState},
    },
    model::api::LoginDto,
};

#[component]
pub fn Login() -> Element {
    let client = use_context::<ApiClient>();
    let user_store = use_context::<Store<UserState>>();
    let navigator = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut busy = use_signal(|| false);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let credentials = LoginDto {
            email: email().trim().to_string(),
            password: password(),
        };
        if credentials.email.is_empty() {
            error.set(Some(ValidationError::Required("email").to_string()));
            return;
        }
        if credentials.password.is_empty() {
            error.set(Some(ValidationError::Required("password").to_string()));
            return;
        }

        let client = client.clone();
        busy.set(true);
        spawn(async move {
            match AuthService::new(&client).login(&credentials).await {
                Ok(()) => {
                    tracing::info!("Logged in");
                    refresh_user(&client, user_store).await;
                    navigator.push(Route::Home {});
                }
                Err(err) => {
                    tracing::error!("Login failed: {}", err);
                    error.set(Some(Error::from(err).user_message()));
                    busy.set(false);
                }
            }
        });
    };

    rsx!(
        Title { "Login | meetmap" }
        Page { class: "flex flex-col items-center",
            form { class: "card shadow-sm w-full max-w-96 mx-auto", onsubmit: submit,
                div { class: "card-body gap-3",
                    h2 { class: "card-title", "Log in" }
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
                    ErrorAlert { message: error() }
                    button { class: "btn btn-primary", r#type: "submit", disabled: busy(), "Log in" }
                    p { class: "text-sm",
                        "No account yet? "
                        Link { class: "link", to: Route::Register {}, "Register" }
                    }
                }
            }
        }
    )
}
