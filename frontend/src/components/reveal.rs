use gloo_timers::callback::Timeout;
use js_sys::Array;
use log::{debug, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config;
use crate::motion::{Entrance, RevealGate, Trigger};

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    pub entrance: Entrance,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Wrapper that plays `entrance` on its children exactly once.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let revealed = use_state(|| false);
    let trigger = props.entrance.trigger;

    {
        let node = node.clone();
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |trigger| -> Box<dyn FnOnce()> {
                match trigger {
                    Trigger::Mount => {
                        let timeout = Timeout::new(config::MOUNT_REVEAL_DELAY_MS, move || {
                            revealed.set(true);
                        });
                        Box::new(move || drop(timeout))
                    }
                    Trigger::InView => match observe_once(&node, revealed) {
                        Some((observer, callback)) => Box::new(move || {
                            observer.disconnect();
                            drop(callback);
                        }),
                        None => Box::new(|| ()),
                    },
                }
            },
            trigger,
        );
    }

    html! {
        <div ref={node} class={props.class.clone()} style={props.entrance.style(*revealed)}>
            { for props.children.iter() }
        </div>
    }
}

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Watch `node` until it first intersects the viewport, then flip `revealed`
/// and stop observing.
fn observe_once(
    node: &NodeRef,
    revealed: UseStateHandle<bool>,
) -> Option<(IntersectionObserver, ObserverCallback)> {
    let Some(element) = node.cast::<web_sys::Element>() else {
        warn!("reveal wrapper has no mounted element");
        revealed.set(true);
        return None;
    };

    let fallback = revealed.clone();
    let mut gate = RevealGate::default();
    let callback: ObserverCallback = Closure::wrap(Box::new(
        move |entries: Array, observer: IntersectionObserver| {
            let visible = entries.iter().any(|entry| {
                entry
                    .unchecked_into::<IntersectionObserverEntry>()
                    .is_intersecting()
            });
            if gate.observe(visible) {
                debug!("section entered viewport, playing entrance");
                revealed.set(true);
                observer.disconnect();
            }
        },
    ) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config::REVEAL_THRESHOLD));
    options.set_root_margin(config::REVEAL_ROOT_MARGIN);

    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => {
            observer.observe(&element);
            Some((observer, callback))
        }
        Err(err) => {
            // Without an observer the content would stay hidden; show it as is.
            warn!("IntersectionObserver unavailable: {:?}", err);
            fallback.set(true);
            None
        }
    }
}
