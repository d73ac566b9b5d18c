use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

use crate::bindings::Marker;

/// Error encountered while constructing a player controller.
///
/// When one of those is returned, no event listener is left registered.
#[derive(Error, Debug, PartialEq)]
pub enum PlayerInitError {
    #[error("No document is available in the current environment")]
    NoDocument,
    #[error("Invalid selector \"{selector}\": {message}")]
    InvalidSelector { selector: String, message: String },
    #[error("Player container not found with selector \"{selector}\"")]
    ContainerNotFound { selector: String },
    #[error("No video element found inside \"{selector}\"")]
    MediaNotFound { selector: String },
    #[error("Could not listen to \"{event}\" events: {message}")]
    Listener { event: &'static str, message: String },
}

impl From<PlayerInitError> for JsValue {
    fn from(err: PlayerInitError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

/// Error encountered while updating the DOM in reaction to an event.
#[derive(Error, Debug, PartialEq)]
pub enum DomError {
    #[error("Expected element \"{}\" is missing from the player", .0.selector())]
    MissingMarker(Marker),
    #[error("DOM operation failed: {0}")]
    Js(String),
}

impl DomError {
    pub(crate) fn from_js(value: &JsValue) -> Self {
        DomError::Js(format_js_value(value))
    }
}

/// Produce a readable description of a thrown JavaScript value.
pub(crate) fn format_js_value(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_error_messages() {
        let err = PlayerInitError::ContainerNotFound {
            selector: ".player".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "Player container not found with selector \".player\""
        );
        let err = PlayerInitError::MediaNotFound {
            selector: "#main".to_owned(),
        };
        assert_eq!(err.to_string(), "No video element found inside \"#main\"");
    }

    #[test]
    fn test_missing_marker_message() {
        let err = DomError::MissingMarker(Marker::Hint);
        assert_eq!(
            err.to_string(),
            "Expected element \".j-hint\" is missing from the player"
        );
    }
}
