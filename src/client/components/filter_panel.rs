use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaFilter, FaMagnifyingGlass};
use dioxus_free_icons::Icon;

use crate::{
    filter::{custom_tags_in, EventBrowser},
    model::{
        event::{LifecycleStatus, YearMonth},
        tag::{FixedTag, Tag},
    },
};

/// Search box, tag chips, month picker and status toggles for the home page.
///
/// Every change goes through [`EventBrowser::update_criteria`], which re-filters synchronously
/// and leaves a marker selection.
#[component]
pub fn FilterPanel(browser: Signal<EventBrowser>) -> Element {
    let mut browser = browser;
    let (criteria, active, custom_tags) = {
        let state = browser.read();
        (
            state.criteria().clone(),
            state.active_filter_count(),
            custom_tags_in(state.events()),
        )
    };
    let month = criteria
        .month
        .map(|month| month.to_string())
        .unwrap_or_default();

    let tags: Vec<Tag> = FixedTag::ALL
        .iter()
        .copied()
        .map(Tag::Fixed)
        .chain(custom_tags)
        .collect();

    rsx!(
        div { class: "card shadow-sm w-full",
            div { class: "card-body gap-3",
                div { class: "flex items-center gap-2",
                    Icon {
                        width: 18,
                        height: 18,
                        icon: FaFilter
                    }
                    h2 { class: "card-title", "Filters" }
                    if active > 0 {
                        span { class: "badge badge-primary", "{active}" }
                        button {
                            class: "btn btn-ghost btn-xs",
                            onclick: move |_| browser.write().update_criteria(|c| c.clear()),
                            "Clear"
                        }
                    }
                }
                label { class: "input input-bordered flex items-center gap-2 w-full",
                    Icon {
                        width: 14,
                        height: 14,
                        icon: FaMagnifyingGlass
                    }
                    input {
                        class: "grow",
                        r#type: "search",
                        placeholder: "Search by title or organizer",
                        value: "{criteria.search}",
                        oninput: move |evt| {
                            let search = evt.value();
                            browser.write().update_criteria(|c| c.search = search);
                        }
                    }
                }
                div { class: "flex flex-wrap gap-2",
                    for tag in tags {
                        TagChip {
                            key: "{tag_key(&tag)}",
                            selected: criteria.has_tag(&tag),
                            tag: tag.clone(),
                            onclick: move |tag: Tag| browser.write().update_criteria(|c| c.toggle_tag(tag)),
                        }
                    }
                }
                div { class: "flex flex-wrap items-center gap-4",
                    input {
                        class: "input input-bordered",
                        r#type: "month",
                        value: "{month}",
                        onchange: move |evt| {
                            let month = YearMonth::parse(&evt.value());
                            browser.write().update_criteria(|c| c.month = month);
                        }
                    }
                    for status in LifecycleStatus::ALL {
                        label { key: "{status.label()}", class: "label cursor-pointer gap-2",
                            input {
                                class: "checkbox checkbox-sm",
                                r#type: "checkbox",
                                checked: criteria.statuses.contains(&status),
                                onchange: move |_| browser.write().update_criteria(|c| c.toggle_status(status)),
                            }
                            span { "{status.label()}" }
                        }
                    }
                }
            }
        }
    )
}

pub fn tag_key(tag: &Tag) -> String {
    match tag {
        Tag::Fixed(tag) => tag.wire_name().to_string(),
        Tag::Custom(tag) => format!("custom-{}", tag.id),
    }
}

/// Clickable tag badge in the tag's color.
#[component]
pub fn TagChip(tag: Tag, selected: bool, onclick: EventHandler<Tag>) -> Element {
    let color = tag.color().to_string();
    let style = if selected {
        format!("background-color: {}; border-color: {}; color: white;", color, color)
    } else {
        format!("border-color: {}; color: {};", color, color)
    };
    let clicked = tag.clone();

    rsx!(
        button {
            class: "badge badge-outline cursor-pointer",
            style: "{style}",
            r#type: "button",
            onclick: move |_| onclick.call(clicked.clone()),
            "{tag.label()}"
        }
    )
}

/// Read-only tag badge.
#[component]
pub fn TagBadge(tag: Tag) -> Element {
    rsx!(
        span {
            class: "badge badge-sm text-white",
            style: "background-color: {tag.color()};",
            "{tag.label()}"
        }
    )
}
