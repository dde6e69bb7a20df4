use std::{collections::HashSet, time::Duration};

use dioxus::prelude::*;
use dioxus_free_icons::icons::{
    fa_regular_icons::FaHeart as FaHeartOutline,
    fa_solid_icons::{FaCalendarDays, FaEllipsis, FaHeart, FaLocationDot, FaUserPlus},
};
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;

use crate::{
    client::{
        components::{tag_key, CommentsDialog, ErrorAlert, InviteDialog, TagBadge},
        error::{AccessError, Error},
        service::{ApiClient, EventService, FavoriteService},
        store::user::UserState,
        util::{
            card_gesture::{
                CardFace, CardGesture, GestureAction, DOUBLE_CLICK_WINDOW_MS, RIPPLE_DURATION_MS,
                RIPPLE_WAVES,
            },
            time::{now_ms, sleep},
        },
    },
    model::event::Event,
};

/// Event card with a front face for browsing and a back face for actions.
///
/// Double clicking the front toggles the favorite, a single click opens the comments. Hovering
/// the corner handle flips the card to registration and invites.
#[component]
pub fn EventCard(event: Event, favorites: Signal<HashSet<String>>) -> Element {
    let client = use_context::<ApiClient>();
    let user_store = use_context::<Store<UserState>>();
    let mut gesture = use_signal(CardGesture::default);
    let mut show_comments = use_signal(|| false);
    let error = use_signal(|| None::<String>);

    let logged_in = user_store.read().is_logged_in();
    let is_favorite = favorites.read().contains(&event.id);
    let current = *gesture.read();
    let flipped = current.face() == CardFace::Flipped;
    let rippling = current.ripple_active(now_ms());

    let event_id = event.id.clone();
    let onclick = move |_| {
        let now = now_ms();
        let action = gesture.write().click(now);

        match action {
            Some(GestureAction::ToggleFavorite) => {
                toggle_favorite(client.clone(), event_id.clone(), logged_in, favorites, error);
                spawn(async move {
                    sleep(Duration::from_millis(RIPPLE_DURATION_MS as u64)).await;
                    gesture.write().clear_ripple(now_ms());
                });
            }
            Some(GestureAction::OpenDetails) => show_comments.set(true),
            None => {}
        }

        let pending = gesture.read().has_pending_click();
        if pending {
            spawn(async move {
                sleep(Duration::from_millis(DOUBLE_CLICK_WINDOW_MS as u64)).await;
                let resolved = gesture.write().resolve(now_ms());
                if resolved == Some(GestureAction::OpenDetails) {
                    show_comments.set(true);
                }
            });
        }
    };

    rsx!(
        div {
            class: if flipped { "event-card flipped" } else { "event-card" },
            onmouseleave: move |_| gesture.write().hover_leave(),
            div { class: "faces",
                div { class: "face front card bg-base-100 shadow-sm select-none",
                    onclick: onclick,
                    if let Some(image_url) = &event.image_url {
                        figure { class: "h-28 overflow-hidden",
                            img { src: "{image_url}", alt: "{event.title}" }
                        }
                    }
                    div { class: "card-body p-4 gap-1",
                        div { class: "flex justify-between items-start gap-2",
                            h2 { class: "card-title text-base", "{event.title}" }
                            span { class: "text-error",
                                if is_favorite {
                                    Icon { width: 18, height: 18, icon: FaHeart }
                                } else {
                                    Icon { width: 18, height: 18, icon: FaHeartOutline }
                                }
                            }
                        }
                        p { class: "text-sm flex items-center gap-1",
                            Icon { width: 12, height: 12, icon: FaCalendarDays }
                            "{event.display_start()}"
                            if !event.duration.is_empty() {
                                " · {event.duration}"
                            }
                        }
                        p { class: "text-sm flex items-center gap-1",
                            Icon { width: 12, height: 12, icon: FaLocationDot }
                            "{event.location.address}"
                        }
                        p { class: "text-xs opacity-70",
                            "{event.organizer_name} · {event.status.label()}"
                        }
                        div { class: "flex flex-wrap gap-1",
                            for tag in event.tags.iter().cloned() {
                                TagBadge { key: "{tag_key(&tag)}", tag: tag.clone() }
                            }
                        }
                    }
                    if rippling {
                        div { class: "ripple",
                            for wave in 0..RIPPLE_WAVES {
                                span { key: "{wave}", class: "wave" }
                            }
                        }
                    }
                }
                div { class: "face back card bg-base-200 shadow-sm",
                    CardBack { event_id: event.id.clone(), logged_in }
                }
            }
            button {
                class: "btn btn-circle btn-xs absolute top-2 left-2 z-10",
                title: "More actions",
                onmouseenter: move |_| gesture.write().hover_enter(),
                Icon { width: 12, height: 12, icon: FaEllipsis }
            }
            ErrorAlert { message: error() }
            if show_comments() {
                CommentsDialog {
                    event_id: event.id.clone(),
                    title: event.title.clone(),
                    on_close: move |_| show_comments.set(false),
                }
            }
        }
    )
}

/// Flips the favorite on the backend and mirrors the confirmed state locally.
fn toggle_favorite(
    client: ApiClient,
    event_id: String,
    logged_in: bool,
    mut favorites: Signal<HashSet<String>>,
    mut error: Signal<Option<String>>,
) {
    if !logged_in {
        error.set(Some(AccessError::NotLoggedIn.to_string()));
        return;
    }

    spawn(async move {
        match FavoriteService::new(&client).toggle(&event_id).await {
            Ok(true) => {
                favorites.write().insert(event_id);
            }
            Ok(false) => {
                favorites.write().remove(&event_id);
            }
            Err(err) => {
                tracing::error!(event_id = %event_id, "Failed to toggle favorite: {}", err);
                error.set(Some(Error::from(err).user_message()));
            }
        }
    });
}

/// Registration and invite actions.
#[component]
fn CardBack(event_id: String, logged_in: bool) -> Element {
    let client = use_context::<ApiClient>();
    let mut registered = use_signal(|| None::<bool>);
    let mut show_invite = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    let status_client = client.clone();
    let status_event_id = event_id.clone();
    use_effect(move || {
        if !logged_in {
            return;
        }
        let client = status_client.clone();
        let event_id = status_event_id.clone();
        spawn(async move {
            match EventService::new(&client).is_registered(&event_id).await {
                Ok(status) => registered.set(Some(status)),
                Err(err) => {
                    tracing::error!(event_id = %event_id, "Failed to check registration: {}", err);
                }
            }
        });
    });

    let toggle_event_id = event_id.clone();
    let toggle_registration = move |_| {
        let client = client.clone();
        let event_id = toggle_event_id.clone();
        let currently = registered().unwrap_or(false);

        spawn(async move {
            let events = EventService::new(&client);
            let result = if currently {
                events.cancel_registration(&event_id).await
            } else {
                events.sign_up(&event_id).await
            };

            match result {
                Ok(()) => {
                    registered.set(Some(!currently));
                    error.set(None);
                }
                Err(err) => {
                    tracing::error!(event_id = %event_id, "Failed to change registration: {}", err);
                    error.set(Some(Error::from(err).user_message()));
                }
            }
        });
    };

    if !logged_in {
        return rsx!(
            div { class: "card-body items-center justify-center text-center",
                p { "Log in to register for this event or invite friends." }
            }
        );
    }

    rsx!(
        div { class: "card-body items-center justify-center gap-3",
            match registered() {
                None => rsx!(span { class: "loading loading-spinner" }),
                Some(true) => rsx!(
                    p { class: "text-success", "You are registered" }
                    button { class: "btn btn-outline btn-sm", onclick: toggle_registration, "Cancel registration" }
                ),
                Some(false) => rsx!(
                    button { class: "btn btn-primary btn-sm", onclick: toggle_registration, "Register" }
                ),
            }
            button {
                class: "btn btn-ghost btn-sm flex gap-2",
                onclick: move |_| show_invite.set(true),
                Icon { width: 14, height: 14, icon: FaUserPlus }
                "Invite friends"
            }
            ErrorAlert { message: error() }
            if show_invite() {
                InviteDialog {
                    event_id: event_id.clone(),
                    on_close: move |_| show_invite.set(false),
                }
            }
        }
    )
}
