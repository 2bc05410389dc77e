use wasm_bindgen::prelude::*;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config::{REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD};

pub const REVEAL_SELECTOR: &str =
    ".section, .stat-card, .service-card, .category-card, .testimonial-card, .tool-card";
pub const REVEALED_CLASS: &str = "revealed";

type RevealCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// Marks matching elements as revealed the first time they scroll into view.
/// Disconnects when dropped.
pub struct RevealObserver {
    observer: IntersectionObserver,
    _callback: RevealCallback,
}

impl RevealObserver {
    pub fn observe(selector: &str) -> Result<Self, JsValue> {
        let callback = RevealCallback::new(
            |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    if entry.is_intersecting() {
                        reveal(&entry.target(), &observer);
                    }
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
        options.set_root_margin(REVEAL_ROOT_MARGIN);
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;

        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or("Failed to get document object")?;
        let nodes = document.query_selector_all(selector)?;
        for index in 0..nodes.length() {
            if let Some(element) = nodes.item(index).and_then(|node| node.dyn_into::<Element>().ok()) {
                observer.observe(&element);
            }
        }

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

// One-shot: a revealed element is no longer observed.
fn reveal(target: &Element, observer: &IntersectionObserver) {
    if target.class_list().add_1(REVEALED_CLASS).is_err() {
        gloo::console::warn!("Could not mark element as revealed");
    }
    observer.unobserve(target);
}

#[hook]
pub fn use_reveal_on_scroll() {
    use_effect_with((), |_| {
        let observer = match RevealObserver::observe(REVEAL_SELECTOR) {
            Ok(observer) => Some(observer),
            Err(error) => {
                gloo::console::error!("Failed to set up reveal observer", error);
                None
            }
        };

        move || drop(observer)
    });
}
