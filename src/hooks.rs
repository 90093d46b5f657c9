use gloo_timers::callback::Timeout;
use log::{debug, warn};
use web_sys::Element;
use yew::prelude::*;

use crate::config;
use crate::motion::viewport::{self, ObserveOptions};
use crate::motion::{NavState, VisibilityLatch};

/// Latches `true` the first time `node` scrolls into the (shrunk) viewport.
#[hook]
pub fn use_in_view(node: NodeRef) -> bool {
    use_in_view_with(node, ObserveOptions::default())
}

#[hook]
pub fn use_in_view_with(node: NodeRef, options: ObserveOptions) -> bool {
    let latch = use_reducer(VisibilityLatch::default);

    {
        let dispatcher = latch.dispatcher();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let subscription = match node.cast::<Element>() {
                    Some(element) => {
                        let on_change = {
                            let dispatcher = dispatcher.clone();
                            let id = element.id();
                            Callback::from(move |intersecting: bool| {
                                if intersecting {
                                    debug!("section '{}' entered view", id);
                                }
                                dispatcher.dispatch(intersecting);
                            })
                        };
                        Some(viewport::observe_with_fallback(&element, &options, on_change))
                    }
                    None => {
                        warn!("reveal target is not mounted, showing it without animation");
                        dispatcher.dispatch(true);
                        None
                    }
                };
                move || drop(subscription)
            },
            node,
        );
    }

    latch.is_visible()
}

/// Tracks the page scroll offset for the navigation bar.
#[hook]
pub fn use_nav_state() -> NavState {
    let nav = use_reducer(NavState::default);

    {
        let dispatcher = nav.dispatcher();
        use_effect_with_deps(
            move |_| {
                let sample = move || {
                    let offset = web_sys::window()
                        .and_then(|window| window.scroll_y().ok())
                        .unwrap_or(0.0);
                    dispatcher.dispatch(offset);
                };
                // Page may be restored mid-scroll
                sample();
                let subscription = viewport::listen_window(&["scroll"], sample)
                    .map_err(|err| warn!("nav scroll tracking disabled: {}", err))
                    .ok();
                move || drop(subscription)
            },
            (),
        );
    }

    *nav
}

/// Latches `true` right after mount, so entrance animations run on load.
#[hook]
pub fn use_mount_reveal() -> bool {
    let latch = use_reducer(VisibilityLatch::default);

    {
        let dispatcher = latch.dispatcher();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(config::MOUNT_REVEAL_DELAY_MS, move || {
                    dispatcher.dispatch(true)
                });
                move || drop(timeout)
            },
            (),
        );
    }

    latch.is_visible()
}
