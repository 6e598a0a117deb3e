//! Engine context provider for Cardfold.
//!
//! Provides the CardEngine instance to all components via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let engine = use_engine();
//! let shared = engine();
//! if let Some(ref eng) = *shared.read().await {
//!     let index = eng.active_index();
//! }
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use cardfold_core::{CardEngine, Catalog, Gate};
use dioxus::prelude::*;
use tokio::sync::RwLock;

/// Shared engine type for context.
///
/// The engine is wrapped in Arc<RwLock<>> to allow:
/// - Multiple components to read concurrently
/// - Safe mutation when needed
pub type SharedEngine = Arc<RwLock<Option<CardEngine>>>;

/// Get the data directory for the application.
/// Uses the global data dir set from command line args.
pub fn get_data_dir() -> PathBuf {
    crate::get_data_dir()
}

/// Get the directory the card artwork is loaded from.
pub fn get_assets_dir() -> PathBuf {
    crate::get_assets_dir()
}

/// Load the card catalog: the `--catalog` override when given and
/// readable, otherwise the built-in collection.
pub fn load_catalog() -> Catalog {
    match crate::get_catalog_path() {
        Some(path) => Catalog::load(&path).unwrap_or_else(|e| {
            tracing::warn!("Could not load catalog {:?}: {}, using built-in", path, e);
            Catalog::builtin()
        }),
        None => Catalog::builtin(),
    }
}

/// Build the passcode gate from the `--passcode` override or the default.
pub fn make_gate() -> Gate {
    match crate::get_passcode() {
        Some(passcode) => Gate::new(passcode),
        None => Gate::default(),
    }
}

/// Hook to access the CardEngine from context.
///
/// Returns a Signal containing the shared engine state.
pub fn use_engine() -> Signal<SharedEngine> {
    use_context::<Signal<SharedEngine>>()
}

/// Hook to check if the engine is initialized.
///
/// Returns a reactive signal that updates when engine state changes.
pub fn use_engine_ready() -> Signal<bool> {
    use_context::<Signal<bool>>()
}
