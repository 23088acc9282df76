//! One-shot animated stat counters. The interpolator is pure; the DOM runner
//! is driven from the throttled scroll handler in `scroll`.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::Interval;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, Window};

use crate::config::{COUNTER_DURATION_MS, COUNTER_FRAME_MS};
use crate::scroll::counter_in_view;

/// Fixed-step interpolation from 0 to `target`. The accumulator may
/// overshoot internally; the displayed value never does.
pub struct CounterAnim {
    target: f64,
    increment: f64,
    acc: f64,
}

impl CounterAnim {
    pub fn new(target: f64, duration_ms: f64, frame_ms: f64) -> Self {
        let steps = (duration_ms / frame_ms).max(1.0);
        Self {
            target,
            increment: target / steps,
            acc: 0.0,
        }
    }

    pub fn tick(&mut self) {
        if !self.done() {
            self.acc += self.increment;
        }
    }

    pub fn done(&self) -> bool {
        self.acc >= self.target
    }

    /// Monotonically non-decreasing, capped at the target.
    pub fn display(&self) -> u64 {
        self.acc.floor().min(self.target).max(0.0) as u64
    }

    #[cfg(test)]
    fn increment(&self) -> f64 {
        self.increment
    }
}

/// Start every not-yet-animated `.stat-number[data-target]` whose box
/// intersects the viewport. Once none remain unstarted the done flag is set
/// and later scroll ticks skip all geometry queries.
pub fn run_visible_counters(document: &Document, window: &Window, all_done: &Rc<Cell<bool>>) {
    if all_done.get() {
        return;
    }
    let viewport_height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let nodes = match document.query_selector_all(".stat-number[data-target]") {
        Ok(nodes) => nodes,
        Err(_) => return,
    };

    let mut pending = 0u32;
    for i in 0..nodes.length() {
        let element = nodes
            .get(i)
            .and_then(|node| node.dyn_into::<HtmlElement>().ok());
        let element = match element {
            Some(element) => element,
            None => continue,
        };
        let classes = element.class_list();
        if classes.contains("counting") || classes.contains("counted") {
            continue;
        }
        let rect = element.get_bounding_client_rect();
        if counter_in_view(rect.top(), rect.bottom(), viewport_height) {
            start_counter(element);
        } else {
            pending += 1;
        }
    }
    if pending == 0 {
        all_done.set(true);
    }
}

fn start_counter(element: HtmlElement) {
    let target = element
        .get_attribute("data-target")
        .and_then(|v| v.parse::<f64>().ok());
    let target = match target {
        Some(target) if target >= 0.0 => target,
        // A malformed target is settled immediately so it is never retried.
        _ => {
            let _ = element.class_list().add_1("counted");
            return;
        }
    };
    let _ = element.class_list().add_1("counting");

    let anim = Rc::new(RefCell::new(CounterAnim::new(
        target,
        COUNTER_DURATION_MS,
        COUNTER_FRAME_MS,
    )));
    // The interval cancels itself by dropping its own handle on completion.
    let handle: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
    let handle_clone = handle.clone();

    let interval = Interval::new(COUNTER_FRAME_MS as u32, move || {
        let mut anim = anim.borrow_mut();
        anim.tick();
        element.set_text_content(Some(&anim.display().to_string()));
        if anim.done() {
            element.set_text_content(Some(&(target as u64).to_string()));
            let _ = element.class_list().replace("counting", "counted");
            handle_clone.borrow_mut().take();
        }
    });
    *handle.borrow_mut() = Some(interval);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn increment_matches_target_over_duration() {
        let anim = CounterAnim::new(100.0, 2_000.0, 16.0);
        assert_eq!(anim.increment(), 0.8);
    }

    #[test]
    fn display_reaches_target_exactly_and_never_overshoots() {
        let mut anim = CounterAnim::new(100.0, 2_000.0, 16.0);
        let mut last = 0;
        for _ in 0..1_000 {
            anim.tick();
            let shown = anim.display();
            assert!(shown >= last, "display must be non-decreasing");
            assert!(shown <= 100, "display must never exceed the target");
            last = shown;
            if anim.done() {
                break;
            }
        }
        assert!(anim.done());
        assert_eq!(anim.display(), 100);
    }

    #[test]
    fn completes_in_expected_step_count() {
        let mut anim = CounterAnim::new(100.0, 2_000.0, 16.0);
        let mut steps = 0;
        while !anim.done() {
            anim.tick();
            steps += 1;
        }
        // 2000ms / 16ms = 125 ticks of 0.8 each; accumulated float error
        // may cost one extra tick.
        assert!((125..=126).contains(&steps), "took {} steps", steps);
    }

    #[test]
    fn ticking_past_completion_is_a_no_op() {
        let mut anim = CounterAnim::new(10.0, 2_000.0, 16.0);
        while !anim.done() {
            anim.tick();
        }
        let settled = anim.display();
        anim.tick();
        anim.tick();
        assert_eq!(anim.display(), settled);
        assert_eq!(settled, 10);
    }

    #[test]
    fn zero_target_settles_immediately() {
        let anim = CounterAnim::new(0.0, 2_000.0, 16.0);
        assert!(anim.done());
        assert_eq!(anim.display(), 0);
    }
}
