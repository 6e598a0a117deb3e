//! Gallery page - the card carousel.
//!
//! Owns the reactive mirrors of the engine state (active index, open/close
//! lifecycle, live drag) and feeds raw pointer, touch and keyboard input
//! through the core gesture trackers. Card-level pan/zoom lives in the
//! CardView component.

use cardfold_core::{
    CardId, Catalog, ClickOutcome, Direction, DragTracker, OpenLifecycle, Vec2, CARD_SPACING,
    CLOSE_ANIMATION, JUST_DRAGGED_WINDOW,
};
use dioxus::prelude::*;

use crate::app::Route;
use crate::components::CardView;
use crate::context::{use_engine, use_engine_ready, SharedEngine};

/// Carousel page component.
#[component]
pub fn Gallery() -> Element {
    let navigator = use_navigator();
    let engine = use_engine();
    let engine_ready = use_engine_ready();

    let mut catalog = use_signal(|| Option::<Catalog>::None);
    let mut active_index = use_signal(|| 0usize);
    let mut lifecycle = use_signal(OpenLifecycle::default);
    let mut drag = use_signal(DragTracker::default);
    let mut viewport = use_signal(|| Vec2::new(1280.0, 800.0));

    // Pull initial state once the engine is up; bounce unauthenticated
    // visitors back to the gate
    use_effect(move || {
        if engine_ready() {
            spawn(async move {
                let shared = engine();
                let guard = shared.read().await;
                if let Some(ref eng) = *guard {
                    if !eng.is_authenticated() {
                        navigator.push(Route::Login {});
                        return;
                    }
                    catalog.set(Some(eng.catalog().clone()));
                    active_index.set(eng.active_index());
                    lifecycle.set(eng.lifecycle());
                }
            });
        }
    });

    let navigate = move |direction: Direction| {
        spawn(async move {
            let shared = engine();
            let mut guard = shared.write().await;
            if let Some(eng) = guard.as_mut() {
                if eng.navigate(direction) {
                    active_index.set(eng.active_index());
                }
            }
        });
    };

    let open_active = move || {
        spawn(async move {
            let shared = engine();
            let mut guard = shared.write().await;
            if let Some(eng) = guard.as_mut() {
                if eng.open_active().is_some() {
                    lifecycle.set(eng.lifecycle());
                }
            }
        });
    };

    let begin_close = move || {
        spawn(async move {
            let requested = {
                let shared = engine();
                let mut guard = shared.write().await;
                match guard.as_mut() {
                    Some(eng) => {
                        let ok = eng.request_close();
                        if ok {
                            lifecycle.set(eng.lifecycle());
                        }
                        ok
                    }
                    None => false,
                }
            };
            if requested {
                settle_close(engine, lifecycle).await;
            }
        });
    };

    let handle_card_click = move |id: CardId| {
        spawn(async move {
            let outcome = {
                let shared = engine();
                let mut guard = shared.write().await;
                let Some(eng) = guard.as_mut() else { return };
                let outcome = eng.card_clicked(id);
                match outcome {
                    ClickOutcome::Opened(_) | ClickOutcome::CloseRequested => {
                        lifecycle.set(eng.lifecycle());
                    }
                    ClickOutcome::Selected(_) => active_index.set(eng.active_index()),
                    ClickOutcome::Ignored => {}
                }
                outcome
            };
            if outcome == ClickOutcome::CloseRequested {
                settle_close(engine, lifecycle).await;
            }
        });
    };

    // Carousel drag surface. Everything is a no-op while a card is open;
    // in-card panning and carousel navigation are mutually exclusive.
    let drag_start = move |x: f64| {
        if !lifecycle().is_closed() {
            return;
        }
        let mut d = drag();
        d.begin(x);
        drag.set(d);
    };

    let drag_move = move |x: f64| {
        if !lifecycle().is_closed() {
            return;
        }
        let mut d = drag();
        if d.update(x).is_some() {
            drag.set(d);
        }
    };

    let drag_end = move || {
        let mut d = drag();
        if !d.is_dragging() {
            return;
        }
        let shift = d.release(CARD_SPACING);
        drag.set(d);
        spawn(async move {
            {
                let shared = engine();
                let mut guard = shared.write().await;
                if let Some(eng) = guard.as_mut() {
                    if eng.end_drag(shift) {
                        active_index.set(eng.active_index());
                    }
                }
            }
            // suppression window so the trailing click doesn't land
            tokio::time::sleep(JUST_DRAGGED_WINDOW).await;
            let mut d = drag();
            d.clear_just_dragged();
            drag.set(d);
        });
    };

    let handle_keydown = move |e: KeyboardEvent| match e.key() {
        Key::ArrowLeft => navigate(Direction::Prev),
        Key::ArrowRight => navigate(Direction::Next),
        Key::Escape => begin_close(),
        Key::Enter => open_active(),
        _ => {}
    };

    let Some(cards) = catalog() else {
        return rsx! {
            main { class: "app",
                div { class: "vignette" }
                div { class: "gallery-loading", "Opening the cabinet..." }
            }
        };
    };

    let active = active_index().min(cards.len() - 1);
    let active_card = cards.get(active).cloned();
    let open = !lifecycle().is_closed();
    let dragging = drag().is_dragging();

    let carousel_class = match (open, dragging) {
        (true, _) => "carousel card-open",
        (false, true) => "carousel dragging",
        (false, false) => "carousel",
    };

    rsx! {
        main {
            class: "app",
            tabindex: "0",
            autofocus: true,
            onkeydown: handle_keydown,
            onresize: move |e| {
                if let Ok(size) = e.get_content_box_size() {
                    viewport.set(Vec2::new(size.width, size.height));
                }
            },

            div { class: if open { "vignette card-open" } else { "vignette" } }

            div {
                class: "{carousel_class}",
                onmousedown: move |e| drag_start(e.client_coordinates().x),
                onmousemove: move |e| drag_move(e.client_coordinates().x),
                onmouseup: move |_| drag_end(),
                onmouseleave: move |_| drag_end(),
                ontouchstart: move |e| {
                    if let Some(touch) = e.touches().first() {
                        drag_start(touch.client_coordinates().x);
                    }
                },
                ontouchmove: move |e| {
                    if let Some(touch) = e.touches().first() {
                        drag_move(touch.client_coordinates().x);
                    }
                },
                ontouchend: move |_| drag_end(),

                div { class: "carousel-track",
                    for (index, card) in cards.cards().iter().enumerate() {
                        CardView {
                            key: "{card.id}",
                            card: card.clone(),
                            slot_offset: index as f64 - active as f64,
                            lifecycle,
                            viewport,
                            drag_offset: drag().offset(),
                            suppress_click: drag().has_dragged(),
                            on_click: handle_card_click,
                        }
                    }
                }
            }

            // Caption for the active card; tucked away while one is open
            if let Some(card) = active_card {
                div { class: if open { "card-name hidden" } else { "card-name" },
                    h2 { "{card.name}" }
                    if let Some(occasion) = &card.occasion {
                        p { class: "card-occasion", "{occasion}" }
                    }
                }
            }
        }
    }
}

/// Let the exit animation run, then complete the close transition.
async fn settle_close(engine: Signal<SharedEngine>, mut lifecycle: Signal<OpenLifecycle>) {
    tokio::time::sleep(CLOSE_ANIMATION).await;
    let shared = engine();
    let mut guard = shared.write().await;
    if let Some(eng) = guard.as_mut() {
        eng.finish_close();
        lifecycle.set(eng.lifecycle());
    }
}
