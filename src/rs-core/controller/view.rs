use crate::{bindings::Marker, errors::DomError};

/// Everything the `PlayerController` needs from its host environment: reading
/// and driving the media element, fullscreen, DOM writes on the player's
/// marked elements and delayed callbacks.
///
/// In a browser this is implemented by `DomView` on top of `web-sys`.
pub(crate) trait PlayerView {
    /// Handle to a callback scheduled through `schedule`.
    ///
    /// Dropping it before the callback ran cancels that callback.
    type Timer;

    fn current_time(&self) -> f64;
    fn set_current_time(&mut self, position: f64);
    fn duration(&self) -> f64;
    fn volume(&self) -> f64;
    fn set_volume(&mut self, volume: f64);
    fn play(&mut self);
    fn pause(&mut self);

    /// Returns `true` if the document currently has an element in fullscreen.
    fn is_fullscreen(&self) -> bool;
    fn request_fullscreen(&mut self) -> Result<(), DomError>;
    fn exit_fullscreen(&mut self);

    /// Add the class to the player's container if `force` is `true`, remove it
    /// otherwise.
    fn toggle_container_class(&mut self, class: &str, force: bool) -> Result<(), DomError>;

    /// Add the class to the given element if `force` is `true`, remove it
    /// otherwise.
    fn toggle_class(&mut self, marker: Marker, class: &str, force: bool) -> Result<(), DomError>;
    fn add_class(&mut self, marker: Marker, class: &str) -> Result<(), DomError>;
    fn remove_classes(&mut self, marker: Marker, classes: &[&str]) -> Result<(), DomError>;

    /// Set an inline style property on the given element.
    fn set_style(&mut self, marker: Marker, property: &str, value: &str) -> Result<(), DomError>;

    fn text(&self, marker: Marker) -> Result<String, DomError>;
    fn set_text(&mut self, marker: Marker, text: &str) -> Result<(), DomError>;
    fn set_input_value(&mut self, marker: Marker, value: f64) -> Result<(), DomError>;

    /// Rendered width of the given element, in pixels.
    fn offset_width(&self, marker: Marker) -> Result<f64, DomError>;

    /// Run `callback` once, after `delay_ms` milliseconds.
    fn schedule(&mut self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Self::Timer;
}
