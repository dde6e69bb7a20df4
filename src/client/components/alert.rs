use dioxus::prelude::*;

/// Inline error message, renders nothing without one.
#[component]
pub fn ErrorAlert(#[props(!optional)] message: Option<String>) -> Element {
    let Some(message) = message else {
        return rsx!();
    };

    rsx!(
        div { role: "alert", class: "alert alert-error",
            span { "{message}" }
        }
    )
}

#[component]
pub fn SuccessAlert(#[props(!optional)] message: Option<String>) -> Element {
    let Some(message) = message else {
        return rsx!();
    };

    rsx!(
        div { role: "alert", class: "alert alert-success",
            span { "{message}" }
        }
    )
}
