use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::Interval;
use web_sys::Element;
use yew::prelude::*;

use crate::observer::{IntersectionBackend, ViewportObserver, VisibilityGate};

/// Counters arm once half the widget is on screen.
const COUNTER_THRESHOLD: f64 = 0.5;

pub const COUNT_DURATION_MS: u32 = 2_000;
pub const COUNT_STEPS: u32 = 60;

/// Displayed value after `step` ticks of a `steps`-tick run toward `target`.
/// Intermediate ticks floor the fractional increment; the final tick snaps
/// to the exact target so rounding drift never shows.
pub fn interpolated_value(step: u32, steps: u32, target: u32) -> u32 {
    if steps == 0 || step >= steps {
        return target;
    }
    let increment = f64::from(target) / f64::from(steps);
    (increment * f64::from(step)).floor() as u32
}

#[derive(Properties, PartialEq)]
pub struct StatCounterProps {
    pub value: u32,
    #[prop_or_default]
    pub suffix: AttrValue,
    pub label: AttrValue,
}

/// Counts up from 0 to `value` over two seconds the first time the widget
/// becomes half-visible. Settles on the exact target and stays there.
#[function_component(StatCounter)]
pub fn stat_counter(props: &StatCounterProps) -> Html {
    let count = use_state(|| 0u32);
    let counting = use_state(|| false);
    let node_ref = use_node_ref();

    // Arm once at half visibility; later viewport entries are no-ops.
    {
        let counting = counting.clone();
        let node_ref = node_ref.clone();
        use_effect_with_deps(
            move |_| {
                let gate = Rc::new(RefCell::new(VisibilityGate::new()));
                let on_enter = Callback::from(move |_| {
                    if gate.borrow_mut().mark_visible() {
                        counting.set(true);
                    }
                });
                let backend = node_ref
                    .cast::<Element>()
                    .and_then(|el| IntersectionBackend::new(el, COUNTER_THRESHOLD, on_enter).ok());
                if let Some(backend) = &backend {
                    backend.start();
                }
                move || {
                    if let Some(backend) = backend {
                        backend.stop();
                    }
                }
            },
            (),
        );
    }

    // Drive the ticks once armed. The interval handle cancels itself on the
    // final tick and is dropped on unmount either way.
    {
        let count = count.clone();
        let target = props.value;
        use_effect_with_deps(
            move |armed: &bool| {
                let handle: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
                if *armed {
                    let step = Rc::new(Cell::new(0u32));
                    let handle_inner = handle.clone();
                    let interval = Interval::new(COUNT_DURATION_MS / COUNT_STEPS, move || {
                        step.set(step.get() + 1);
                        count.set(interpolated_value(step.get(), COUNT_STEPS, target));
                        if step.get() >= COUNT_STEPS {
                            handle_inner.borrow_mut().take();
                        }
                    });
                    *handle.borrow_mut() = Some(interval);
                }
                let handle_cleanup = handle;
                move || {
                    handle_cleanup.borrow_mut().take();
                }
            },
            *counting,
        );
    }

    html! {
        <div ref={node_ref} class="stat-counter">
            <div class="stat-value">
                { *count }<span class="stat-suffix">{ &props.suffix }</span>
            </div>
            <div class="stat-label">{ &props.label }</div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settles_exactly_on_target() {
        assert_eq!(interpolated_value(COUNT_STEPS, COUNT_STEPS, 12), 12);
        assert_eq!(interpolated_value(COUNT_STEPS, COUNT_STEPS, 340), 340);
        assert_eq!(interpolated_value(COUNT_STEPS, COUNT_STEPS, 200), 200);
    }

    #[test]
    fn never_exceeds_target_mid_animation() {
        for target in [12u32, 200, 340] {
            for step in 0..=COUNT_STEPS {
                assert!(interpolated_value(step, COUNT_STEPS, target) <= target);
            }
        }
    }

    #[test]
    fn grows_monotonically() {
        for target in [12u32, 200, 340] {
            let mut previous = 0;
            for step in 0..=COUNT_STEPS {
                let value = interpolated_value(step, COUNT_STEPS, target);
                assert!(value >= previous);
                previous = value;
            }
        }
    }

    #[test]
    fn intermediate_steps_floor_the_increment() {
        // 340 / 60 = 5.666..; halfway through the run shows exactly 170.
        assert_eq!(interpolated_value(30, COUNT_STEPS, 340), 170);
        assert_eq!(interpolated_value(1, COUNT_STEPS, 340), 5);
    }

    #[test]
    fn degenerate_runs_snap_to_target() {
        assert_eq!(interpolated_value(0, 0, 42), 42);
        assert_eq!(interpolated_value(99, COUNT_STEPS, 42), 42);
        assert_eq!(interpolated_value(30, COUNT_STEPS, 0), 0);
    }
}
