//! Card Component
//!
//! Renders one card of the carousel: cover artwork, inside panels for its
//! kind, and the computed transform for its current slot and lifecycle
//! state. An open fold card owns live pan/pinch/wheel-zoom state; all the
//! math lives in cardfold-core, this component only routes events into it.

use cardfold_core::{
    card_transform, spread_width, stacking_order, wheel_zoom, Card, CardId, CardKind,
    OpenLifecycle, PanZoom, PanelPair, PanelSize, PinchTracker, TransformInput, Vec2, ViewState,
    DRAG_SLOP,
};
use dioxus::html::geometry::WheelDelta;
use dioxus::prelude::*;

use crate::components::CardImage;

/// One card in the carousel
#[component]
pub fn CardView(
    card: Card,
    /// Signed distance from the active slot, in card slots
    slot_offset: f64,
    lifecycle: ReadOnlySignal<OpenLifecycle>,
    viewport: ReadOnlySignal<Vec2>,
    /// Live carousel drag offset in pixels
    drag_offset: f64,
    /// True while a just-finished drag should swallow the trailing click
    suppress_click: bool,
    on_click: EventHandler<CardId>,
) -> Element {
    let id = card.id;
    let kind = card.kind;
    let opens = card.opens;
    let pannable = kind.pannable();
    let has_pair = card.left_image.is_some() && card.right_image.is_some();

    let mut cover_size = use_signal(PanelSize::default);
    let mut left_size = use_signal(PanelSize::default);
    let mut right_size = use_signal(PanelSize::default);
    let mut pair = use_signal(PanelPair::default);

    let mut pan_zoom = use_signal(PanZoom::default);
    let mut is_panning = use_signal(|| false);
    let mut pan_pointer_origin = use_signal(|| Vec2::ZERO);
    let mut pan_offset_origin = use_signal(|| Vec2::ZERO);
    let mut pinch = use_signal(PinchTracker::default);

    // Reset pan/zoom when the card closes; when a wide fold card opens,
    // preset the pan toward its opening edge so the first panel is in view
    use_effect(move || {
        let lc = lifecycle();
        if lc.view_state(id) == ViewState::Open {
            if pannable {
                let spread = spread_width(left_size(), right_size());
                // peek: a window resize while open should not re-bias
                let bias = PanZoom::open_bias(spread, viewport.peek().x, opens);
                pan_zoom.set(PanZoom {
                    offset: bias,
                    ..Default::default()
                });
            }
        } else {
            pan_zoom.set(PanZoom::default());
        }
    });

    // Artwork sizing. A card with both inside panels commits their sizes
    // together once both aspects are known, whichever loads first.
    let on_cover_load = move |aspect: f64| cover_size.set(PanelSize::from_aspect(aspect));
    let on_left_load = move |aspect: f64| {
        if has_pair {
            let mut p = pair();
            if let Some((left, right)) = p.load_left(aspect) {
                left_size.set(left);
                right_size.set(right);
            }
            pair.set(p);
        } else {
            left_size.set(PanelSize::from_aspect(aspect));
        }
    };
    let on_right_load = move |aspect: f64| {
        if has_pair {
            let mut p = pair();
            if let Some((left, right)) = p.load_right(aspect) {
                left_size.set(left);
                right_size.set(right);
            }
            pair.set(p);
        } else {
            right_size.set(PanelSize::from_aspect(aspect));
        }
    };

    // Pan/zoom plumbing, live only while this card is the open fold
    let can_pan = move || pannable && lifecycle().view_state(id) == ViewState::Open;
    let content_box = move || {
        Vec2::new(
            spread_width(left_size(), right_size()),
            left_size().height,
        )
    };

    let begin_pan = move |p: Vec2| {
        is_panning.set(true);
        pan_pointer_origin.set(p);
        pan_offset_origin.set(pan_zoom().offset);
    };
    let move_pan = move |p: Vec2| {
        if !is_panning() {
            return;
        }
        let origin = pan_pointer_origin();
        let start = pan_offset_origin();
        let target = Vec2::new(start.x + p.x - origin.x, start.y + p.y - origin.y);
        let mut pz = pan_zoom();
        pz.pan_to(target, content_box(), viewport());
        pan_zoom.set(pz);
    };
    let end_pan = move || is_panning.set(false);
    let apply_zoom = move |delta: f64| {
        let mut pz = pan_zoom();
        pz.zoom_by(delta, content_box(), viewport());
        pan_zoom.set(pz);
    };

    let on_mouse_down = move |e: MouseEvent| {
        if !can_pan() {
            return;
        }
        e.prevent_default();
        let p = e.client_coordinates();
        begin_pan(Vec2::new(p.x, p.y));
    };
    let on_mouse_move = move |e: MouseEvent| {
        let p = e.client_coordinates();
        move_pan(Vec2::new(p.x, p.y));
    };

    let on_touch_start = move |e: TouchEvent| {
        if !can_pan() {
            return;
        }
        let touches = e.touches();
        if touches.len() == 1 {
            let p = touches[0].client_coordinates();
            begin_pan(Vec2::new(p.x, p.y));
        } else if touches.len() == 2 {
            let a = touches[0].client_coordinates();
            let b = touches[1].client_coordinates();
            let mut tracker = pinch();
            tracker.begin(Vec2::new(a.x, a.y), Vec2::new(b.x, b.y));
            pinch.set(tracker);
            is_panning.set(false);
        }
    };
    let on_touch_move = move |e: TouchEvent| {
        if !can_pan() {
            return;
        }
        let touches = e.touches();
        if touches.len() == 2 && pinch().is_active() {
            let a = touches[0].client_coordinates();
            let b = touches[1].client_coordinates();
            let mut tracker = pinch();
            let delta = tracker.update(Vec2::new(a.x, a.y), Vec2::new(b.x, b.y));
            pinch.set(tracker);
            apply_zoom(delta);
        } else if touches.len() == 1 && is_panning() {
            let p = touches[0].client_coordinates();
            move_pan(Vec2::new(p.x, p.y));
        }
    };
    let on_touch_end = move |_: TouchEvent| {
        end_pan();
        let mut tracker = pinch();
        tracker.end();
        pinch.set(tracker);
    };

    let on_wheel = move |e: WheelEvent| {
        if !can_pan() {
            return;
        }
        let modifiers = e.modifiers();
        let delta_y = wheel_delta_y(e.delta());
        if let Some(delta) = wheel_zoom(delta_y, modifiers.ctrl() || modifiers.meta()) {
            e.prevent_default();
            apply_zoom(delta);
        }
    };

    let handle_click = move |e: MouseEvent| {
        e.stop_propagation();
        if suppress_click {
            return;
        }
        // a pan that travelled further than the slop is not a click
        if can_pan() {
            let travel = pan_zoom().offset.distance(pan_offset_origin());
            if travel > DRAG_SLOP {
                return;
            }
        }
        on_click.call(id);
    };

    let lc = lifecycle();
    let view = lc.view_state(id);
    let is_open = view == ViewState::Open;
    let is_closing = lc.closing_card() == Some(id);

    let transform = card_transform(TransformInput {
        slot_offset,
        view,
        kind,
        left: left_size(),
        right: right_size(),
        pan: pan_zoom().offset,
        zoom: pan_zoom().zoom,
        drag_offset,
    });
    let z_index = stacking_order(view, slot_offset);

    let kind_class = match kind {
        CardKind::Fold => "fold",
        CardKind::FoldDown => "fold-down",
        CardKind::Popup => "popup",
        CardKind::NoOpen => "no-open",
    };
    let mut classes = format!("card-container {kind_class}");
    if slot_offset.abs() < 0.5 {
        classes.push_str(" active");
    }
    if is_open {
        classes.push_str(" open");
    }
    if view == ViewState::Hidden {
        classes.push_str(" hidden");
    }
    if is_closing {
        classes.push_str(" closing");
    }
    if is_panning() {
        classes.push_str(" panning");
    }
    if pan_zoom().zoom > 1.0 {
        classes.push_str(" zoomed");
    }

    let cover = cover_size();
    let container_style = format!(
        "--width: {:.2}px; --height: {:.2}px; --aspect-ratio: {:.4}; transform: {}; z-index: {};",
        cover.width,
        cover.height,
        cover.aspect(),
        transform.to_css(),
        z_index,
    );

    // Panel dimensions stay populated through the closing transition so
    // the exit animation has real sizes to collapse from
    let sized = is_open || is_closing;
    let left_style = if sized {
        panel_style("left", left_size())
    } else {
        String::new()
    };
    let right_style = if sized {
        panel_style("right", right_size())
    } else {
        String::new()
    };

    let left_class = if kind == CardKind::FoldDown {
        "card-top"
    } else {
        "card-left"
    };
    let right_class = if kind == CardKind::FoldDown {
        "card-bottom"
    } else {
        "card-right"
    };

    rsx! {
        div {
            class: "{classes}",
            style: "{container_style}",
            onclick: handle_click,
            onmousedown: on_mouse_down,
            onmousemove: on_mouse_move,
            onmouseup: move |_| end_pan(),
            onmouseleave: move |_| end_pan(),
            ontouchstart: on_touch_start,
            ontouchmove: on_touch_move,
            ontouchend: on_touch_end,
            onwheel: on_wheel,

            div { class: "card-inner",
                match kind {
                    CardKind::NoOpen => rsx! {
                        div { class: "card-cover",
                            CardImage {
                                path: card.cover_image.clone(),
                                alt: "{card.name} - cover",
                                on_load: on_cover_load,
                            }
                        }
                    },
                    CardKind::Popup => rsx! {
                        div { class: "popup-wrapper",
                            if let Some(left_image) = card.left_image.clone() {
                                div { class: "popup-content",
                                    CardImage {
                                        path: left_image,
                                        alt: "{card.name} - popup",
                                        on_load: on_left_load,
                                    }
                                }
                            }
                            if let Some(right_image) = card.right_image.clone() {
                                div { class: "popup-message",
                                    CardImage {
                                        path: right_image,
                                        alt: "{card.name} - message",
                                        on_load: on_right_load,
                                    }
                                }
                            }
                        }
                        div { class: "card-cover",
                            CardImage {
                                path: card.cover_image.clone(),
                                alt: "{card.name} - cover",
                                on_load: on_cover_load,
                            }
                        }
                    },
                    CardKind::Fold | CardKind::FoldDown => rsx! {
                        if let Some(left_image) = card.left_image.clone() {
                            div { class: "{left_class}", style: "{left_style}",
                                CardImage {
                                    path: left_image,
                                    alt: "{card.name} - inside",
                                    on_load: on_left_load,
                                }
                            }
                        }
                        if let Some(right_image) = card.right_image.clone() {
                            div { class: "{right_class}", style: "{right_style}",
                                CardImage {
                                    path: right_image,
                                    alt: "{card.name} - inside",
                                    on_load: on_right_load,
                                }
                            }
                        }
                        div { class: "card-cover",
                            CardImage {
                                path: card.cover_image.clone(),
                                alt: "{card.name} - cover",
                                on_load: on_cover_load,
                            }
                        }
                    },
                }
            }
        }
    }
}

fn panel_style(prefix: &str, size: PanelSize) -> String {
    format!(
        "--{prefix}-width: {:.2}px; --{prefix}-height: {:.2}px; --{prefix}-aspect-ratio: {:.4};",
        size.width,
        size.height,
        size.aspect(),
    )
}

/// Normalize the wheel delta to pixels
fn wheel_delta_y(delta: WheelDelta) -> f64 {
    match delta {
        WheelDelta::Pixels(v) => v.y,
        WheelDelta::Lines(v) => v.y * 40.0,
        WheelDelta::Pages(v) => v.y * 800.0,
    }
}
