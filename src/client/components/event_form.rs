use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaLocationDot, FaPlus, FaXmark};
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;

use crate::{
    client::{
        components::{tag_key, ErrorAlert, SuccessAlert, TagChip},
        error::Error,
        service::{ApiClient, EventService, GeocodingService},
        util::file::read_picked_file,
    },
    model::{
        event::{parse_timestamp, Event, EventDraft},
        tag::{push_custom_tag, FixedTag, Tag, DEFAULT_CUSTOM_TAG_COLOR},
    },
};

/// Create or edit form for an organizer's event.
///
/// Opens empty when `event` is `None`. The draft is validated before anything is sent; the
/// address is turned into coordinates through the geocoder.
#[component]
pub fn EventFormDialog(
    #[props(!optional)] event: Option<Event>,
    on_saved: EventHandler<Event>,
    on_close: EventHandler<()>,
) -> Element {
    let client = use_context::<ApiClient>();
    let event_id = event.as_ref().map(|event| event.id.clone());
    let mut draft = use_signal(|| {
        event
            .as_ref()
            .map(EventDraft::from_event)
            .unwrap_or_default()
    });
    let mut custom_name = use_signal(String::new);
    let mut custom_color = use_signal(|| DEFAULT_CUSTOM_TAG_COLOR.to_string());
    let mut error = use_signal(|| None::<String>);
    let mut info = use_signal(|| None::<String>);
    let mut busy = use_signal(|| false);

    let current = draft.read().clone();
    let starts_value = parse_timestamp(&current.starts_at)
        .map(|start| start.format("%Y-%m-%dT%H:%M").to_string())
        .unwrap_or_else(|| current.starts_at.clone());
    let custom_tags: Vec<Tag> = current
        .tags
        .iter()
        .filter(|tag| matches!(tag, Tag::Custom(_)))
        .cloned()
        .collect();
    let heading = if event_id.is_some() { "Edit event" } else { "New event" };

    let geocode_client = client.clone();
    let locate = move |_| {
        let client = geocode_client.clone();
        let address = draft.read().address.clone();

        spawn(async move {
            match GeocodingService::new(&client).locate(&address).await {
                Ok(Some((latitude, longitude, name))) => {
                    let mut fields = draft.write();
                    fields.latitude = Some(latitude);
                    fields.longitude = Some(longitude);
                    info.set(Some(format!("Located: {}", name)));
                    error.set(None);
                }
                Ok(None) => error.set(Some("No location found for this address".to_string())),
                Err(err) => {
                    tracing::error!("Failed to geocode address: {}", err);
                    error.set(Some(Error::from(err).user_message()));
                }
            }
        });
    };

    let upload_client = client.clone();
    let upload = move |evt: FormEvent| {
        let client = upload_client.clone();

        spawn(async move {
            let Some(file) = read_picked_file(&evt).await else {
                return;
            };
            match EventService::new(&client).upload_image(file).await {
                Ok(url) => draft.write().image_url = Some(url),
                Err(err) => {
                    tracing::error!("Failed to upload event image: {}", err);
                    error.set(Some(Error::from(err).user_message()));
                }
            }
        });
    };

    let add_custom_tag = move |_| {
        let name = custom_name();
        let color = Some(custom_color());
        let result = push_custom_tag(&mut draft.write().tags, &name, color);

        match result {
            Ok(_) => {
                custom_name.set(String::new());
                error.set(None);
            }
            Err(err) => error.set(Some(err.to_string())),
        }
    };

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        let event_id = event_id.clone();
        let draft = draft();

        busy.set(true);
        spawn(async move {
            let events = EventService::new(&client);
            let result = match &event_id {
                Some(event_id) => events.update(event_id, &draft).await,
                None => events.create(&draft).await,
            };
            busy.set(false);

            match result {
                Ok(event) => on_saved.call(event),
                Err(err) => {
                    if let Error::ApiError(api_err) = &err {
                        tracing::error!("Failed to save event: {}", api_err);
                    }
                    error.set(Some(err.user_message()));
                }
            }
        });
    };

    rsx!(
        div { class: "modal modal-open",
            div { class: "modal-box max-w-2xl",
                form { class: "flex flex-col gap-3", onsubmit: submit,
                    div { class: "flex justify-between items-center",
                        h3 { class: "text-lg font-semibold", "{heading}" }
                        button {
                            class: "btn btn-ghost btn-sm btn-circle",
                            r#type: "button",
                            onclick: move |_| on_close.call(()),
                            Icon { width: 14, height: 14, icon: FaXmark }
                        }
                    }
                    input {
                        class: "input input-bordered w-full",
                        placeholder: "Title",
                        value: "{current.title}",
                        oninput: move |evt| draft.write().title = evt.value(),
                    }
                    textarea {
                        class: "textarea textarea-bordered w-full",
                        placeholder: "Description",
                        value: "{current.description}",
                        oninput: move |evt| draft.write().description = evt.value(),
                    }
                    div { class: "flex gap-2",
                        input {
                            class: "input input-bordered flex-1",
                            r#type: "datetime-local",
                            value: "{starts_value}",
                            oninput: move |evt| draft.write().starts_at = evt.value(),
                        }
                        input {
                            class: "input input-bordered flex-1",
                            placeholder: "Duration, e.g. 2 hours",
                            value: "{current.duration}",
                            oninput: move |evt| draft.write().duration = evt.value(),
                        }
                    }
                    div { class: "flex gap-2",
                        input {
                            class: "input input-bordered flex-1",
                            placeholder: "Address",
                            value: "{current.address}",
                            oninput: move |evt| draft.write().address = evt.value(),
                        }
                        button {
                            class: "btn btn-outline flex gap-2",
                            r#type: "button",
                            onclick: locate,
                            Icon { width: 14, height: 14, icon: FaLocationDot }
                            "Locate"
                        }
                    }
                    if let (Some(latitude), Some(longitude)) = (current.latitude, current.longitude) {
                        p { class: "text-xs opacity-70", "Coordinates: {latitude:.5}, {longitude:.5}" }
                    }
                    div { class: "flex items-center gap-2",
                        input {
                            class: "file-input file-input-bordered file-input-sm",
                            r#type: "file",
                            accept: "image/*",
                            onchange: upload,
                        }
                        if let Some(image_url) = &current.image_url {
                            img { class: "h-12 rounded", src: "{image_url}", alt: "Cover image" }
                        }
                    }
                    div { class: "flex flex-wrap gap-2",
                        for fixed in FixedTag::ALL {
                            TagChip {
                                key: "{fixed.wire_name()}",
                                tag: Tag::Fixed(fixed),
                                selected: current.tags.contains(&Tag::Fixed(fixed)),
                                onclick: move |_| draft.write().toggle_fixed_tag(fixed),
                            }
                        }
                    }
                    div { class: "flex flex-wrap gap-2",
                        for tag in custom_tags {
                            TagChip {
                                key: "{tag_key(&tag)}",
                                tag: tag.clone(),
                                selected: true,
                                onclick: move |removed: Tag| draft.write().tags.retain(|tag| *tag != removed),
                            }
                        }
                    }
                    div { class: "flex gap-2 items-center",
                        input {
                            class: "input input-bordered input-sm flex-1",
                            placeholder: "Custom tag",
                            value: "{custom_name}",
                            oninput: move |evt| custom_name.set(evt.value()),
                        }
                        input {
                            r#type: "color",
                            value: "{custom_color}",
                            oninput: move |evt| custom_color.set(evt.value()),
                        }
                        button {
                            class: "btn btn-outline btn-sm",
                            r#type: "button",
                            onclick: add_custom_tag,
                            Icon { width: 12, height: 12, icon: FaPlus }
                        }
                    }
                    ErrorAlert { message: error() }
                    SuccessAlert { message: info() }
                    div { class: "modal-action",
                        button {
                            class: "btn btn-ghost",
                            r#type: "button",
                            onclick: move |_| on_close.call(()),
                            "Cancel"
                        }
                        button {
                            class: "btn btn-primary",
                            r#type: "submit",
                            disabled: busy(),
                            "Save"
                        }
                    }
                }
            }
        }
    )
}
