use dioxus::prelude::*;

/// Content area below the fixed navbar, optionally headed by a page title.
#[component]
pub fn Page(class: Option<&'static str>, heading: Option<String>, children: Element) -> Element {
    let class = class.unwrap_or("");

    rsx!(
        div {
            class: "min-h-screen pt-[64px] p-4 {class}",
            div { class: "w-full max-w-[1440px] mx-auto flex flex-col gap-4",
                if let Some(heading) = heading {
                    h1 { class: "text-2xl font-semibold", "{heading}" }
                }
                {children}
            }
        }
    )
}
