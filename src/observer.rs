use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::Callback;

/// One-shot visibility flag. Flips to visible exactly once and never resets;
/// entrance animations must not re-trigger when an element scrolls back out
/// and in again.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct VisibilityGate {
    visible: bool,
}

impl VisibilityGate {
    pub fn new() -> Self {
        Self { visible: false }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Returns true only on the call that flipped the gate.
    pub fn mark_visible(&mut self) -> bool {
        !std::mem::replace(&mut self.visible, true)
    }
}

/// Something that can watch the element it was bound to at construction and
/// report viewport entry. Concrete backends wrap the browser's
/// IntersectionObserver; tests substitute a fake that fires synchronously.
pub trait ViewportObserver {
    fn start(&self);
    fn stop(&self);
}

/// IntersectionObserver-backed watcher. `on_enter` fires every time the
/// target's intersection ratio crosses `threshold`; callers that want
/// one-shot behavior put a [`VisibilityGate`] behind the callback.
pub struct IntersectionBackend {
    observer: IntersectionObserver,
    target: Element,
    _on_intersect: Closure<dyn FnMut(js_sys::Array)>,
}

impl IntersectionBackend {
    pub fn new(target: Element, threshold: f64, on_enter: Callback<()>) -> Result<Self, JsValue> {
        let on_intersect = Closure::wrap(Box::new(move |entries: js_sys::Array| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() {
                    on_enter.emit(());
                }
            }
        }) as Box<dyn FnMut(js_sys::Array)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        let observer = IntersectionObserver::new_with_options(
            on_intersect.as_ref().unchecked_ref(),
            &options,
        )?;

        Ok(Self {
            observer,
            target,
            _on_intersect: on_intersect,
        })
    }
}

impl ViewportObserver for IntersectionBackend {
    fn start(&self) {
        self.observer.observe(&self.target);
    }

    fn stop(&self) {
        self.observer.disconnect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    struct FakeObserver {
        on_enter: Callback<()>,
        fires_per_start: u32,
        running: Cell<bool>,
    }

    impl ViewportObserver for FakeObserver {
        fn start(&self) {
            self.running.set(true);
            for _ in 0..self.fires_per_start {
                self.on_enter.emit(());
            }
        }

        fn stop(&self) {
            self.running.set(false);
        }
    }

    #[test]
    fn gate_flips_exactly_once() {
        let mut gate = VisibilityGate::new();
        assert!(!gate.is_visible());
        assert!(gate.mark_visible());
        assert!(!gate.mark_visible());
        assert!(gate.is_visible());
    }

    #[test]
    fn gate_is_monotonic() {
        let mut gate = VisibilityGate::new();
        gate.mark_visible();
        for _ in 0..10 {
            gate.mark_visible();
            assert!(gate.is_visible());
        }
    }

    #[test]
    fn repeated_intersections_reveal_once() {
        let gate = Rc::new(RefCell::new(VisibilityGate::new()));
        let reveals = Rc::new(Cell::new(0u32));

        let on_enter = {
            let gate = gate.clone();
            let reveals = reveals.clone();
            Callback::from(move |_| {
                if gate.borrow_mut().mark_visible() {
                    reveals.set(reveals.get() + 1);
                }
            })
        };

        let fake = FakeObserver {
            on_enter,
            fires_per_start: 3,
            running: Cell::new(false),
        };

        fake.start();
        assert!(fake.running.get());
        fake.stop();

        assert_eq!(reveals.get(), 1);
        assert!(gate.borrow().is_visible());
    }
}
