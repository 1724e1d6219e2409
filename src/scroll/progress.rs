use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, Window};
use yew::prelude::*;

const TRACKED_EVENTS: [&str; 2] = ["scroll", "resize"];

/// Progress of a tracked region from its top meeting the viewport top
/// (0) to its bottom meeting the viewport top (1), scaled by `span`.
pub fn progress_from_rect(top: f64, height: f64, span: f64) -> Option<f64> {
    if !top.is_finite() || !height.is_finite() || height <= 0.0 {
        return None;
    }
    Some((-top / height).clamp(0.0, 1.0) * span)
}

fn measure(target: &NodeRef, span: f64) -> Option<f64> {
    let element = target.cast::<Element>()?;
    let rect = element.get_bounding_client_rect();
    progress_from_rect(rect.top(), rect.height(), span)
}

/// Window scroll/resize listeners that are removed when the guard drops.
pub struct ScrollSubscription {
    window: Window,
    callback: Closure<dyn FnMut()>,
}

impl ScrollSubscription {
    pub fn attach(window: Window, on_change: impl FnMut() + 'static) -> Result<Self, JsValue> {
        let callback = Closure::wrap(Box::new(on_change) as Box<dyn FnMut()>);
        for event in TRACKED_EVENTS {
            window.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        }
        Ok(ScrollSubscription { window, callback })
    }
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        for event in TRACKED_EVENTS {
            let _ = self
                .window
                .remove_event_listener_with_callback(event, self.callback.as_ref().unchecked_ref());
        }
    }
}

/// Report the scroll progress of `target` on mount and on every scroll or
/// resize until unmount. `None` means the region could not be measured.
#[hook]
pub fn use_scroll_progress(target: NodeRef, span: f64, on_sample: Callback<Option<f64>>) {
    use_effect_with_deps(
        move |target: &NodeRef| {
            let target = target.clone();
            let initial = measure(&target, span);
            if initial.is_none() {
                warn!("scroll target could not be measured, holding resting state");
            }
            on_sample.emit(initial);

            let subscription = match web_sys::window() {
                Some(window) => {
                    let on_sample = on_sample.clone();
                    ScrollSubscription::attach(window, move || {
                        on_sample.emit(measure(&target, span));
                    })
                    .map_err(|err| warn!("failed to subscribe to scroll events: {:?}", err))
                    .ok()
                }
                None => {
                    warn!("no window, scroll tracking disabled");
                    None
                }
            };

            move || drop(subscription)
        },
        target,
    );
}
