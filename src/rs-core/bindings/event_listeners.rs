use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{Event, EventTarget};

use crate::{
    errors::{format_js_value, PlayerInitError},
    Logger,
};

struct RegisteredListener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

/// Keeps every DOM event listener added by a player alongside its target, so
/// they can all be removed at once.
///
/// Listeners still registered are removed when the registry is dropped.
#[derive(Default)]
pub(crate) struct EventListenerRegistry {
    listeners: Vec<RegisteredListener>,
}

impl EventListenerRegistry {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Call `handler` each time `event` is dispatched on `target`.
    pub(crate) fn listen<F>(
        &mut self,
        target: &EventTarget,
        event: &'static str,
        handler: F,
    ) -> Result<(), PlayerInitError>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .map_err(|err| PlayerInitError::Listener {
                event,
                message: format_js_value(&err),
            })?;
        self.listeners.push(RegisteredListener {
            target: target.clone(),
            event,
            callback,
        });
        Ok(())
    }

    pub(crate) fn len(&self) -> usize {
        self.listeners.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Remove every listener registered so far.
    pub(crate) fn remove_all(&mut self) {
        if self.listeners.is_empty() {
            return;
        }
        Logger::lazy_debug(&|| format!("Listeners: removing {} listeners", self.listeners.len()));
        for listener in self.listeners.drain(..) {
            if let Err(err) = listener.target.remove_event_listener_with_callback(
                listener.event,
                listener.callback.as_ref().unchecked_ref(),
            ) {
                Logger::lazy_warn(&|| {
                    format!(
                        "Listeners: could not remove \"{}\" listener: {}",
                        listener.event,
                        format_js_value(&err)
                    )
                });
            }
        }
    }
}

impl Drop for EventListenerRegistry {
    fn drop(&mut self) {
        self.remove_all();
    }
}
