use std::sync::Arc;

use dioxus::prelude::*;
use tokio::sync::RwLock;

use crate::context::{get_data_dir, load_catalog, make_gate, SharedEngine};
use crate::pages::{Gallery, Login};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Passcode gate
/// - `/gallery` - The card carousel
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Login {},
    #[route("/gallery")]
    Gallery {},
}

/// Root application component.
///
/// Provides global styles, engine context, and routing.
#[component]
pub fn App() -> Element {
    // Initialize shared engine state
    let engine: Signal<SharedEngine> = use_signal(|| Arc::new(RwLock::new(None)));
    let mut engine_ready: Signal<bool> = use_signal(|| false);

    // Provide engine context to all child components
    use_context_provider(|| engine);
    use_context_provider(|| engine_ready);

    // Initialize engine on mount
    use_effect(move || {
        spawn(async move {
            let data_dir = get_data_dir();
            match cardfold_core::CardEngine::new(&data_dir, load_catalog(), make_gate()) {
                Ok(eng) => {
                    let shared = engine();
                    let mut guard = shared.write().await;
                    *guard = Some(eng);
                    drop(guard);
                    engine_ready.set(true);
                    tracing::info!("CardEngine initialized");
                }
                Err(e) => {
                    tracing::error!("Failed to initialize CardEngine: {}", e);
                }
            }
        });
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
