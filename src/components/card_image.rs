//! Async Card Artwork Loader
//!
//! Reads artwork from the assets directory, probes its natural dimensions
//! and displays it inline as a base64 data URI. The aspect ratio is
//! reported back to the owner so panel widths can follow the artwork.

use std::io;
use std::path::Path;

use dioxus::prelude::*;
use image::GenericImageView;

use crate::context::get_assets_dir;

/// Decoded artwork ready for display
pub struct Artwork {
    pub data_uri: String,
    /// Natural width / height
    pub aspect: f64,
}

/// Read an image file and wrap it as a data URI with its aspect ratio
pub async fn load_artwork(path: &Path) -> io::Result<Artwork> {
    let bytes = tokio::fs::read(path).await?;
    let decoded = image::load_from_memory(&bytes)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    let (width, height) = decoded.dimensions();
    if height == 0 {
        return Err(io::Error::new(io::ErrorKind::InvalidData, "empty image"));
    }

    use base64::Engine;
    let base64 = base64::engine::general_purpose::STANDARD.encode(&bytes);
    let mime = mime_for(path);
    Ok(Artwork {
        data_uri: format!("data:{mime};base64,{base64}"),
        aspect: width as f64 / height as f64,
    })
}

fn mime_for(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .as_deref()
    {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("webp") => "image/webp",
        _ => "image/png",
    }
}

/// Asynchronously load and display one piece of card artwork
///
/// # Examples
///
/// ```ignore
/// rsx! {
///     CardImage {
///         path: "cards/garden-gate-cover.png".to_string(),
///         alt: "Garden Gate - cover".to_string(),
///         on_load: move |aspect| tracing::debug!("aspect {aspect}"),
///     }
/// }
/// ```
#[component]
pub fn CardImage(
    /// Artwork path, relative to the assets directory
    path: String,
    /// Alt text
    alt: String,
    /// Called with the natural aspect ratio once the image has decoded
    #[props(default)]
    on_load: Option<EventHandler<f64>>,
) -> Element {
    let mut data_uri = use_signal(|| Option::<String>::None);
    let mut failed = use_signal(|| false);

    // Load on mount; completion order across cards is arbitrary and the
    // owner's pairing logic copes with that
    use_effect(move || {
        let path = path.clone();
        spawn(async move {
            let full = get_assets_dir().join(&path);
            match load_artwork(&full).await {
                Ok(artwork) => {
                    if let Some(handler) = &on_load {
                        handler.call(artwork.aspect);
                    }
                    data_uri.set(Some(artwork.data_uri));
                }
                Err(e) => {
                    tracing::warn!("Could not load artwork {:?}: {}", full, e);
                    failed.set(true);
                }
            }
        });
    });

    rsx! {
        if let Some(uri) = data_uri() {
            img {
                class: "card-art",
                src: "{uri}",
                alt: "{alt}",
                draggable: "false",
            }
        } else if failed() {
            div { class: "card-art-missing" }
        } else {
            div { class: "card-art-loading" }
        }
    }
}
