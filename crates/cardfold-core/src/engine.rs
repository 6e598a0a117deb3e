//! Engine facade
//!
//! `CardEngine` owns the catalog, durable session store, passcode gate,
//! carousel index and open/close lifecycle, and exposes the operation
//! surface the UI calls. Store failures after startup degrade to defaults
//! instead of surfacing: a card viewer has no fatal states.

use std::path::Path;

use crate::auth::Gate;
use crate::carousel::Carousel;
use crate::catalog::{Card, CardId, Catalog};
use crate::error::CardResult;
use crate::gesture::Direction;
use crate::lifecycle::OpenLifecycle;
use crate::store::Store;

/// What a card click resolved to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The active card opened
    Opened(CardId),
    /// A card was open (or the click hit another card while one was open);
    /// the close transition started
    CloseRequested,
    /// A non-active card became the active one
    Selected(usize),
    /// The click had no effect (e.g. landed during the closing transition)
    Ignored,
}

/// Central state owner for one gallery session
pub struct CardEngine {
    catalog: Catalog,
    store: Store,
    gate: Gate,
    carousel: Carousel,
    lifecycle: OpenLifecycle,
}

impl CardEngine {
    /// Open the session store under `data_dir` and rehydrate the carousel
    /// from the persisted index (middle card when absent or invalid).
    pub fn new(data_dir: &Path, catalog: Catalog, gate: Gate) -> CardResult<Self> {
        let store = Store::open(data_dir)?;
        let saved = store.load_index().unwrap_or_else(|e| {
            tracing::warn!("Could not read persisted index: {}", e);
            None
        });
        let carousel = Carousel::restore(catalog.len(), saved)?;
        tracing::info!(
            "Engine ready: {} cards, starting at index {}",
            catalog.len(),
            carousel.active()
        );
        Ok(Self {
            catalog,
            store,
            gate,
            carousel,
            lifecycle: OpenLifecycle::default(),
        })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn active_index(&self) -> usize {
        self.carousel.active()
    }

    /// The card in the active slot
    pub fn active_card(&self) -> &Card {
        // The carousel index is clamped to the catalog range by construction
        self.catalog
            .get(self.carousel.active())
            .expect("active index in range")
    }

    pub fn lifecycle(&self) -> OpenLifecycle {
        self.lifecycle
    }

    /// Whether a live authenticated flag is stored
    pub fn is_authenticated(&self) -> bool {
        self.store.is_authenticated().unwrap_or_else(|e| {
            tracing::warn!("Could not read auth flag: {}", e);
            false
        })
    }

    /// Check the passcode; persists the flag on success
    pub fn login(&self, input: &str) -> bool {
        if !self.gate.verify(input) {
            tracing::debug!("Rejected passcode attempt");
            return false;
        }
        if let Err(e) = self.store.set_authenticated() {
            tracing::warn!("Could not persist auth flag: {}", e);
        }
        true
    }

    /// Step one card left or right. No-op while a card is open or closing.
    pub fn navigate(&mut self, direction: Direction) -> bool {
        if !self.lifecycle.is_closed() {
            return false;
        }
        let changed = self.carousel.navigate(direction);
        if changed {
            self.persist_index();
        }
        changed
    }

    /// Jump to a card position (click on a non-active card)
    pub fn select(&mut self, index: usize) -> bool {
        if !self.lifecycle.is_closed() {
            return false;
        }
        let changed = self.carousel.set_active(index);
        if changed {
            self.persist_index();
        }
        changed
    }

    /// Apply a drag-release slot shift
    pub fn end_drag(&mut self, shift: i64) -> bool {
        if !self.lifecycle.is_closed() {
            return false;
        }
        let changed = self.carousel.shift(shift);
        if changed {
            self.persist_index();
        }
        changed
    }

    /// Route a card click.
    ///
    /// While any card is open, every card click closes it, regardless of
    /// which card was hit; switching cards always takes two clicks. Clicks
    /// during the closing transition are ignored.
    pub fn card_clicked(&mut self, id: CardId) -> ClickOutcome {
        match self.lifecycle {
            OpenLifecycle::Closed => {
                if id == self.active_card().id {
                    match self.open_active() {
                        Some(opened) => ClickOutcome::Opened(opened),
                        None => ClickOutcome::Ignored,
                    }
                } else if let Some(position) = self.catalog.position_of(id) {
                    self.select(position);
                    ClickOutcome::Selected(position)
                } else {
                    ClickOutcome::Ignored
                }
            }
            OpenLifecycle::Open(_) => {
                self.request_close();
                ClickOutcome::CloseRequested
            }
            OpenLifecycle::Closing(_) => ClickOutcome::Ignored,
        }
    }

    /// Open the active card (Enter key or active-card click)
    pub fn open_active(&mut self) -> Option<CardId> {
        let id = self.active_card().id;
        if self.lifecycle.open(id) {
            tracing::debug!("Opened {}", id);
            Some(id)
        } else {
            None
        }
    }

    /// Begin the close transition (open-card click, Escape, outside close)
    pub fn request_close(&mut self) -> bool {
        let closed = self.lifecycle.close();
        if closed {
            tracing::debug!("Closing {:?}", self.lifecycle.closing_card());
        }
        closed
    }

    /// Complete the close transition once the exit animation has run
    pub fn finish_close(&mut self) -> bool {
        self.lifecycle.finish_close()
    }

    fn persist_index(&self) {
        if let Err(e) = self.store.save_index(self.carousel.active()) {
            tracing::warn!("Could not persist index: {}", e);
        }
    }
}
