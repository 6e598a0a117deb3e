//! Login page - the passcode gate in front of the gallery.
//!
//! Returning visitors with a live authenticated flag skip the gate and go
//! straight to the carousel.

use dioxus::prelude::*;

use crate::app::Route;
use crate::context::{use_engine, use_engine_ready};

/// Passcode gate component.
///
/// A wrong passcode raises a visible error line; it clears again on the
/// next successful submission.
#[component]
pub fn Login() -> Element {
    let navigator = use_navigator();
    let engine = use_engine();
    let engine_ready = use_engine_ready();

    let mut password = use_signal(String::new);
    let mut error = use_signal(|| false);

    // Returning visitors skip the gate
    use_effect(move || {
        if engine_ready() {
            spawn(async move {
                let shared = engine();
                let guard = shared.read().await;
                if let Some(ref eng) = *guard {
                    if eng.is_authenticated() {
                        tracing::info!("Returning visitor, skipping the gate");
                        navigator.push(Route::Gallery {});
                    }
                }
            });
        }
    });

    let submit = move |_| {
        spawn(async move {
            let shared = engine();
            let guard = shared.read().await;
            if let Some(ref eng) = *guard {
                if eng.login(&password()) {
                    error.set(false);
                    navigator.push(Route::Gallery {});
                } else {
                    error.set(true);
                }
            }
        });
    };

    // Enter submits, same as the button
    let handle_keydown = move |e: KeyboardEvent| {
        if e.key() == Key::Enter {
            e.prevent_default();
            spawn(async move {
                let shared = engine();
                let guard = shared.read().await;
                if let Some(ref eng) = *guard {
                    if eng.login(&password()) {
                        error.set(false);
                        navigator.push(Route::Gallery {});
                    } else {
                        error.set(true);
                    }
                }
            });
        }
    };

    rsx! {
        main { class: "app",
            div { class: "vignette" }
            div { class: "login-screen",
                div { class: "login-form",
                    h1 { "Welcome" }
                    input {
                        r#type: "password",
                        value: "{password}",
                        placeholder: "Enter login",
                        class: if error() { "error" } else { "" },
                        autofocus: true,
                        oninput: move |e| password.set(e.value()),
                        onkeydown: handle_keydown,
                    }
                    button { onclick: submit, "Enter" }
                    if error() {
                        p { class: "login-error", "Incorrect passcode" }
                    }
                }
            }
        }
    }
}
