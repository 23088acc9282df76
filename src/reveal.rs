//! One-shot reveal of `.reveal` elements as they enter the viewport.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

const THRESHOLD: f64 = 0.1;
const ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Keeps the observer and its callback alive; dropping disconnects.
pub struct RevealHandle {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Drop for RevealHandle {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Observe every `.reveal` element currently in the document. Elements are
/// unobserved on first intersection, so scrolling back out never reverses
/// the transition.
pub fn setup() -> Option<RevealHandle> {
    let document = web_sys::window()?.document()?;

    let callback = Closure::wrap(Box::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                    if entry.is_intersecting() {
                        let target = entry.target();
                        let _ = target.class_list().add_1("revealed");
                        observer.unobserve(&target);
                    }
                }
            }
        },
    ) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(THRESHOLD));
    options.set_root_margin(ROOT_MARGIN);

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options).ok()?;

    let nodes = document.query_selector_all(".reveal").ok()?;
    for i in 0..nodes.length() {
        if let Some(element) = nodes.get(i).and_then(|node| node.dyn_into::<Element>().ok()) {
            observer.observe(&element);
        }
    }

    Some(RevealHandle {
        observer,
        _callback: callback,
    })
}
