use std::{cell::RefCell, rc::Rc};

use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, HtmlVideoElement};

use crate::{
    bindings::{DomView, EventListenerRegistry, MEDIA_SELECTOR},
    config::PlayerConfiguration,
    controller::PlayerController,
    errors::{format_js_value, PlayerInitError},
    wasm_bindgen, JsValue, Logger, LoggerLevel,
};

use self::wiring::{dispatch, register_listeners, SharedController};

mod wiring;

/// Custom controls bound to a `<video>` element and the widgets around it.
///
/// Exported to the JavaScript-side. Every listener it added is removed when
/// `destroy` is called or when the instance is freed.
#[wasm_bindgen]
pub struct WaspPlayerControls {
    controller: SharedController,
    listeners: EventListenerRegistry,
}

#[wasm_bindgen]
impl WaspPlayerControls {
    /// Bind controls to the first element matching `selector`, which should
    /// contain a `<video>` element, with the default configuration.
    #[wasm_bindgen(constructor)]
    pub fn new(selector: &str) -> Result<WaspPlayerControls, JsValue> {
        Self::attach(selector, PlayerConfiguration::default()).map_err(JsValue::from)
    }

    /// Same as the constructor, with a custom `PlayerConfiguration`.
    pub fn with_config(
        selector: &str,
        config: PlayerConfiguration,
    ) -> Result<WaspPlayerControls, JsValue> {
        Self::attach(selector, config).map_err(JsValue::from)
    }

    /// Remove every listener and cancel the pending interface timer.
    ///
    /// The player's DOM is left as is. Calling it more than once has no effect.
    pub fn destroy(&mut self) {
        if self.listeners.is_empty() {
            return;
        }
        Logger::info("Player: destroying controls");
        self.listeners.remove_all();
        match self.controller.try_borrow_mut() {
            Ok(mut ctrl) => ctrl.teardown(),
            Err(_) => Logger::warn("Player: controller busy while destroying controls"),
        }
    }

    /// Returns `false` if the controller is busy handling an event.
    pub fn is_playing(&self) -> bool {
        self.controller
            .try_borrow()
            .map(|ctrl| ctrl.is_playing())
            .unwrap_or(false)
    }

    /// Returns `false` if the controller is busy handling an event.
    pub fn is_interface_hidden(&self) -> bool {
        self.controller
            .try_borrow()
            .map(|ctrl| ctrl.is_interface_hidden())
            .unwrap_or(false)
    }

    pub fn toggle_video(&self) {
        dispatch(&self.controller, "toggle_video", PlayerController::toggle_video);
    }

    pub fn toggle_fullscreen(&self) {
        dispatch(
            &self.controller,
            "toggle_fullscreen",
            PlayerController::toggle_fullscreen,
        );
    }

    /// Set the volume, from `0` to `100`.
    pub fn set_volume(&self, value: f64) {
        dispatch(&self.controller, "set_volume", |c| c.set_volume(value));
    }
}

impl WaspPlayerControls {
    fn attach(
        selector: &str,
        config: PlayerConfiguration,
    ) -> Result<WaspPlayerControls, PlayerInitError> {
        Logger::lazy_info(&|| format!("Player: attaching controls to \"{selector}\""));
        let view = locate(selector)?;
        let controller = Rc::new(RefCell::new(PlayerController::new(view, config)));
        let mut listeners = EventListenerRegistry::new();
        if let Err(err) = register_listeners(&controller, &mut listeners) {
            Logger::lazy_error(&|| format!("Player: {err}"));
            listeners.remove_all();
            return Err(err);
        }
        Ok(WaspPlayerControls {
            controller,
            listeners,
        })
    }
}

impl Drop for WaspPlayerControls {
    fn drop(&mut self) {
        self.destroy();
    }
}

/// Find the player's container and its media element.
fn locate(selector: &str) -> Result<DomView, PlayerInitError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or(PlayerInitError::NoDocument)?;

    let container = document
        .query_selector(selector)
        .map_err(|err| PlayerInitError::InvalidSelector {
            selector: selector.to_owned(),
            message: format_js_value(&err),
        })?
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .ok_or_else(|| PlayerInitError::ContainerNotFound {
            selector: selector.to_owned(),
        })?;

    let video = container
        .query_selector(MEDIA_SELECTOR)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlVideoElement>().ok())
        .ok_or_else(|| PlayerInitError::MediaNotFound {
            selector: selector.to_owned(),
        })?;

    Ok(DomView::new(document, container, video))
}

/// Update the maximum level of logs emitted by every player.
#[wasm_bindgen]
pub fn set_log_level(level: LoggerLevel) {
    Logger::set_logger_level(level);
}
