//! Scroll-driven UI state: header elevation, back-to-top visibility, the
//! progress bar, counter triggering and the hero parallax, all recomputed by
//! one throttled handler subscribed to `scroll` and `resize`.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use yew::prelude::*;

use crate::config::{
    HEADER_SCROLL_THRESHOLD, PARALLAX_FACTOR, SCROLL_THRESHOLD, SCROLL_THROTTLE_MS,
};
use crate::counters;

pub fn header_scrolled(offset: f64) -> bool {
    offset > HEADER_SCROLL_THRESHOLD
}

pub fn back_to_top_visible(offset: f64) -> bool {
    offset > SCROLL_THRESHOLD
}

/// Percentage of the document scrolled, 0 when the page does not scroll at
/// all. The raw float drives the bar width; callers round for aria output.
pub fn progress_percent(scroll_top: f64, scroll_height: f64, client_height: f64) -> f64 {
    let range = scroll_height - client_height;
    if range <= 0.0 {
        return 0.0;
    }
    (scroll_top / range * 100.0).clamp(0.0, 100.0)
}

/// Bounding-box test against the viewport used for counter triggering.
pub fn counter_in_view(top: f64, bottom: f64, viewport_height: f64) -> bool {
    top < viewport_height && bottom > 0.0
}

/// Vertical offset applied to the hero background, capped so the image never
/// slides fully out of its container.
pub fn parallax_shift(offset: f64, hero_height: f64) -> f64 {
    (offset * PARALLAX_FACTOR).min(hero_height)
}

/// Leading-edge throttle over timestamps: the first event in a window passes,
/// everything else inside the window is dropped, and nothing is queued for
/// the trailing edge.
pub struct ThrottleGate {
    window_ms: f64,
    last_fire: Option<f64>,
}

impl ThrottleGate {
    pub fn new(window_ms: f64) -> Self {
        Self {
            window_ms,
            last_fire: None,
        }
    }

    pub fn admit(&mut self, now_ms: f64) -> bool {
        match self.last_fire {
            Some(last) if now_ms - last < self.window_ms => false,
            _ => {
                self.last_fire = Some(now_ms);
                true
            }
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ScrollEffectsProps {
    /// Fired when the header crosses the elevation threshold, deduplicated.
    pub on_header_state: Callback<bool>,
}

#[function_component(ScrollEffects)]
pub fn scroll_effects(props: &ScrollEffectsProps) -> Html {
    let progress = use_state(|| 0.0f64);
    let show_top = use_state(|| false);

    {
        let progress = progress.clone();
        let show_top = show_top.clone();
        let on_header_state = props.on_header_state.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let window_clone = window.clone();

                let gate = Rc::new(RefCell::new(ThrottleGate::new(SCROLL_THROTTLE_MS)));
                let header_state = Rc::new(Cell::new(None::<bool>));
                let top_state = Rc::new(Cell::new(false));
                let counters_done = Rc::new(Cell::new(false));

                let handler = Closure::wrap(Box::new(move || {
                    if !gate.borrow_mut().admit(js_sys::Date::now()) {
                        return;
                    }
                    let offset = window_clone.scroll_y().unwrap_or(0.0);

                    // Each output below is guarded on its own; a missing
                    // target skips that output and never the whole handler.
                    let scrolled = header_scrolled(offset);
                    if header_state.get() != Some(scrolled) {
                        header_state.set(Some(scrolled));
                        on_header_state.emit(scrolled);
                    }

                    let visible = back_to_top_visible(offset);
                    if top_state.get() != visible {
                        top_state.set(visible);
                        show_top.set(visible);
                    }

                    if let Some(root) = window_clone.document().and_then(|d| d.document_element()) {
                        progress.set(progress_percent(
                            root.scroll_top() as f64,
                            root.scroll_height() as f64,
                            root.client_height() as f64,
                        ));
                    }

                    if let Some(document) = window_clone.document() {
                        counters::run_visible_counters(&document, &window_clone, &counters_done);
                        apply_parallax(&document, offset);
                    }
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback("scroll", handler.as_ref().unchecked_ref())
                    .unwrap();
                window
                    .add_event_listener_with_callback("resize", handler.as_ref().unchecked_ref())
                    .unwrap();

                // Initial pass so the bar and button match a restored
                // scroll position before the first scroll event.
                let _ = handler
                    .as_ref()
                    .unchecked_ref::<js_sys::Function>()
                    .call0(&JsValue::NULL);

                move || {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        handler.as_ref().unchecked_ref(),
                    );
                    let _ = window.remove_event_listener_with_callback(
                        "resize",
                        handler.as_ref().unchecked_ref(),
                    );
                }
            },
            (),
        );
    }

    let on_back_to_top = Callback::from(|_: MouseEvent| {
        if let Some(window) = web_sys::window() {
            let options = web_sys::ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    });

    let aria_now = format!("{}", (*progress).round() as i32);
    // Hidden control stays out of the tab order.
    let tab_index = if *show_top { "0" } else { "-1" };

    html! {
        <>
            <style>
                {r#"
                .scroll-progress {
                    position: fixed;
                    top: 0;
                    left: 0;
                    height: 3px;
                    width: 0%;
                    background: var(--accent-color);
                    z-index: 120;
                    transition: width 0.1s linear;
                }
                .back-to-top {
                    position: fixed;
                    bottom: 1.5rem;
                    right: 1.5rem;
                    width: 48px;
                    height: 48px;
                    border-radius: 50%;
                    border: none;
                    background: var(--accent-color);
                    color: #fff;
                    font-size: 1.4rem;
                    cursor: pointer;
                    opacity: 0;
                    pointer-events: none;
                    transform: translateY(8px);
                    transition: opacity 0.3s ease, transform 0.3s ease;
                    z-index: 90;
                }
                .back-to-top.visible {
                    opacity: 1;
                    pointer-events: auto;
                    transform: translateY(0);
                }
                "#}
            </style>
            <div
                class="scroll-progress"
                role="progressbar"
                aria-valuemin="0"
                aria-valuemax="100"
                aria-valuenow={aria_now}
                style={format!("width: {}%", *progress)}
            ></div>
            <button
                class={classes!("back-to-top", (*show_top).then(|| "visible"))}
                tabindex={tab_index}
                aria-label="Back to top"
                onclick={on_back_to_top}
            >
                {"↑"}
            </button>
        </>
    }
}

fn apply_parallax(document: &web_sys::Document, offset: f64) {
    if let Some(hero) = document
        .query_selector(".hero-background")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
    {
        let shift = parallax_shift(offset, hero.offset_height() as f64);
        let _ = hero
            .style()
            .set_property("transform", &format!("translate3d(0, {}px, 0)", shift));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn header_threshold_is_exclusive_at_100() {
        assert!(!header_scrolled(0.0));
        assert!(!header_scrolled(100.0));
        assert!(header_scrolled(100.1));
        assert!(header_scrolled(2_000.0));
    }

    #[test]
    fn back_to_top_threshold_is_exclusive_at_300() {
        assert!(!back_to_top_visible(300.0));
        assert!(back_to_top_visible(300.5));
        assert!(!back_to_top_visible(0.0));
    }

    #[test]
    fn progress_is_zero_when_page_does_not_scroll() {
        assert_eq!(progress_percent(0.0, 800.0, 800.0), 0.0);
        assert_eq!(progress_percent(50.0, 700.0, 800.0), 0.0);
    }

    #[test]
    fn progress_is_clamped_ratio() {
        assert_eq!(progress_percent(0.0, 2_000.0, 1_000.0), 0.0);
        assert_eq!(progress_percent(500.0, 2_000.0, 1_000.0), 50.0);
        assert_eq!(progress_percent(1_000.0, 2_000.0, 1_000.0), 100.0);
        // Overscroll (rubber-banding) stays clamped.
        assert_eq!(progress_percent(1_200.0, 2_000.0, 1_000.0), 100.0);
        assert_eq!(progress_percent(-40.0, 2_000.0, 1_000.0), 0.0);
    }

    #[test]
    fn throttle_admits_one_call_per_window() {
        let mut gate = ThrottleGate::new(100.0);
        assert!(gate.admit(0.0));
        assert!(!gate.admit(10.0));
        assert!(!gate.admit(99.9));
        assert!(gate.admit(100.0));
        assert!(!gate.admit(150.0));
    }

    #[test]
    fn throttle_admits_every_spaced_event() {
        let mut gate = ThrottleGate::new(100.0);
        let mut fired = 0;
        for i in 0..5 {
            if gate.admit(i as f64 * 100.0) {
                fired += 1;
            }
        }
        assert_eq!(fired, 5);
    }

    #[test]
    fn throttle_has_no_trailing_call() {
        // Dropped events leave no memory: a burst then silence fires once.
        let mut gate = ThrottleGate::new(100.0);
        let fired = [0.0, 5.0, 10.0, 15.0]
            .iter()
            .filter(|t| gate.admit(**t))
            .count();
        assert_eq!(fired, 1);
        assert!(gate.admit(500.0));
    }

    #[test]
    fn counter_visibility_is_open_interval_overlap() {
        assert!(counter_in_view(100.0, 300.0, 800.0));
        // Entirely below the fold.
        assert!(!counter_in_view(900.0, 1_100.0, 800.0));
        // Entirely scrolled past.
        assert!(!counter_in_view(-300.0, 0.0, 800.0));
        // Straddling the top edge still counts.
        assert!(counter_in_view(-50.0, 10.0, 800.0));
    }

    #[test]
    fn parallax_shift_is_capped_by_hero_height() {
        assert_eq!(parallax_shift(100.0, 600.0), 30.0);
        assert_eq!(parallax_shift(10_000.0, 600.0), 600.0);
    }
}
