use crate::domain::a003_lightbox::service::{use_lightbox, LightboxService};
use crate::shared::icons::icon;
use contracts::enums::lightbox_command::LightboxCommand;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{AddEventListenerOptions, EventTarget, KeyboardEvent, TouchEvent};

/// Modal image viewer with prev/next controls, keyboard and swipe navigation.
#[component]
pub fn Lightbox() -> impl IntoView {
    let lightbox = use_lightbox();
    let backdrop_ref = NodeRef::<leptos::html::Div>::new();

    // Escape / arrows, only acted upon while open
    Effect::new(move |bound: Option<bool>| {
        if bound == Some(true) {
            return true;
        }
        let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
            if let Some(keyboard_event) = event.dyn_ref::<KeyboardEvent>() {
                if let Some(command) = LightboxCommand::from_key(&keyboard_event.key()) {
                    lightbox.apply(command);
                }
            }
        }) as Box<dyn FnMut(_)>);

        let Some(window) = web_sys::window() else {
            return false;
        };
        let _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
        true
    });

    // Swipe; passive so scrolling is never blocked
    Effect::new(move |bound: Option<bool>| {
        if bound == Some(true) {
            return true;
        }
        let Some(backdrop) = backdrop_ref.get() else {
            return false;
        };
        bind_touch_listeners(backdrop.as_ref(), lightbox);
        true
    });

    let on_backdrop_click = move |ev: ev::MouseEvent| {
        let Some(backdrop) = backdrop_ref.get_untracked() else {
            return;
        };
        if ev.target().map(JsValue::from) == Some(JsValue::from(backdrop)) {
            lightbox.close();
        }
    };

    let on_prev = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
        lightbox.prev();
    };

    let on_next = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
        lightbox.next();
    };

    let nav_display = move || if lightbox.nav_visible() { "flex" } else { "none" };

    view! {
        <div
            id="lightbox"
            class="lightbox"
            class:is-open=move || lightbox.is_open()
            aria-hidden=move || lightbox.aria_hidden()
            node_ref=backdrop_ref
            on:click=on_backdrop_click
        >
            <button
                id="lightboxClose"
                class="lightbox__close"
                aria-label=LightboxCommand::Close.aria_label()
                on:click=move |_| lightbox.close()
            >
                {icon("x")}
            </button>
            <button
                id="lightboxPrev"
                class="lightbox__nav lightbox__nav--prev"
                aria-label=LightboxCommand::Prev.aria_label()
                style:display=nav_display
                on:click=on_prev
            >
                {icon("chevron-left")}
            </button>
            <img id="lightboxImg" class="lightbox__img" alt="" src=move || lightbox.image_src() />
            <button
                id="lightboxNext"
                class="lightbox__nav lightbox__nav--next"
                aria-label=LightboxCommand::Next.aria_label()
                style:display=nav_display
                on:click=on_next
            >
                {icon("chevron-right")}
            </button>
        </div>
    }
}

fn bind_touch_listeners(target: &EventTarget, lightbox: LightboxService) {
    let options = AddEventListenerOptions::new();
    options.set_passive(true);

    let on_touch_start = Closure::wrap(Box::new(move |event: TouchEvent| {
        let touches = event.touches();
        if let Some(touch) = touches.get(0) {
            lightbox.touch_start(
                touches.length(),
                touch.client_x() as f64,
                touch.client_y() as f64,
            );
        }
    }) as Box<dyn FnMut(_)>);

    let on_touch_end = Closure::wrap(Box::new(move |event: TouchEvent| {
        let changed = event.changed_touches();
        match changed.get(0) {
            Some(touch) => lightbox.touch_end(
                changed.length(),
                touch.client_x() as f64,
                touch.client_y() as f64,
            ),
            // still ends the gesture
            None => lightbox.touch_end(0, 0.0, 0.0),
        }
    }) as Box<dyn FnMut(_)>);

    let _ = target.add_event_listener_with_callback_and_add_event_listener_options(
        "touchstart",
        on_touch_start.as_ref().unchecked_ref(),
        &options,
    );
    let _ = target.add_event_listener_with_callback_and_add_event_listener_options(
        "touchend",
        on_touch_end.as_ref().unchecked_ref(),
        &options,
    );
    on_touch_start.forget();
    on_touch_end.forget();
}
