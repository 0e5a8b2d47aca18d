//! Scope-owned timers.
//!
//! Tasks spawned here belong to the calling component. Dioxus cancels them
//! when the component unmounts, so a timer never fires against a widget
//! that is gone.

use std::time::Duration;

use dioxus::prelude::*;

/// Run `tick` every `period` for as long as the component is mounted.
///
/// Only the closure from the first render is kept.
pub fn use_interval(period: Duration, tick: impl FnMut() + 'static) -> Task {
    use_hook(move || {
        let mut tick = tick;
        spawn(async move {
            loop {
                tokio::time::sleep(period).await;
                tick();
            }
        })
    })
}

/// Run `action` once after `delay`, unless the component unmounts first.
pub fn after(delay: Duration, action: impl FnOnce() + 'static) -> Task {
    spawn(async move {
        tokio::time::sleep(delay).await;
        action();
    })
}
