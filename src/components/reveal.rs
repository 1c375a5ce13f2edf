use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use web_sys::Element;
use yew::prelude::*;

use crate::observer::{IntersectionBackend, ViewportObserver, VisibilityGate};

/// Fraction of a block that must enter the viewport before it reveals.
const REVEAL_THRESHOLD: f64 = 0.1;

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    /// Delay before the reveal plays, used to stagger sibling blocks.
    #[prop_or(0)]
    pub delay_ms: u32,
}

/// Wraps a content block and plays a one-way entrance animation the first
/// time it scrolls into view. Scrolling back out never hides it again.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let visible = use_state(|| false);
    let node_ref = use_node_ref();

    {
        let visible = visible.clone();
        let node_ref = node_ref.clone();
        let delay_ms = props.delay_ms;
        use_effect_with_deps(
            move |_| {
                let gate = Rc::new(RefCell::new(VisibilityGate::new()));
                let pending = Rc::new(RefCell::new(None::<Timeout>));

                let on_enter = {
                    let visible = visible.clone();
                    let pending = pending.clone();
                    Callback::from(move |_| {
                        if !gate.borrow_mut().mark_visible() {
                            return;
                        }
                        let visible = visible.clone();
                        *pending.borrow_mut() = Some(Timeout::new(delay_ms, move || {
                            visible.set(true);
                        }));
                    })
                };

                let backend = node_ref
                    .cast::<Element>()
                    .and_then(|el| IntersectionBackend::new(el, REVEAL_THRESHOLD, on_enter).ok());
                match &backend {
                    Some(backend) => backend.start(),
                    // No observer means no animation; never hide the content.
                    None => visible.set(true),
                }

                move || {
                    if let Some(backend) = backend {
                        backend.stop();
                    }
                    pending.borrow_mut().take();
                }
            },
            (),
        );
    }

    html! {
        <div
            ref={node_ref}
            class={classes!("reveal", (*visible).then(|| "visible"), props.class.clone())}
        >
            { for props.children.iter() }
        </div>
    }
}
