use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, HtmlVideoElement};

use super::Marker;
use crate::{
    controller::PlayerView,
    errors::{format_js_value, DomError},
    Logger,
};

/// `PlayerView` implementation relying on the browser's DOM.
///
/// Marked elements are looked up inside the container each time they are
/// needed, so the player's markup may be changed after construction.
pub(crate) struct DomView {
    document: Document,
    container: HtmlElement,
    video: HtmlVideoElement,
}

impl DomView {
    pub(crate) fn new(document: Document, container: HtmlElement, video: HtmlVideoElement) -> Self {
        Self {
            document,
            container,
            video,
        }
    }

    pub(crate) fn document(&self) -> &Document {
        &self.document
    }

    pub(crate) fn container(&self) -> &HtmlElement {
        &self.container
    }

    pub(crate) fn video(&self) -> &HtmlVideoElement {
        &self.video
    }

    pub(crate) fn element(&self, marker: Marker) -> Result<Element, DomError> {
        self.container
            .query_selector(marker.selector())
            .map_err(|err| DomError::from_js(&err))?
            .ok_or(DomError::MissingMarker(marker))
    }

    pub(crate) fn html_element(&self, marker: Marker) -> Result<HtmlElement, DomError> {
        self.element(marker)?
            .dyn_into::<HtmlElement>()
            .map_err(|_| DomError::Js(format!("\"{}\" is not an HTML element", marker.selector())))
    }
}

impl PlayerView for DomView {
    type Timer = Timeout;

    fn current_time(&self) -> f64 {
        self.video.current_time()
    }

    fn set_current_time(&mut self, position: f64) {
        self.video.set_current_time(position);
    }

    fn duration(&self) -> f64 {
        self.video.duration()
    }

    fn volume(&self) -> f64 {
        self.video.volume()
    }

    fn set_volume(&mut self, volume: f64) {
        self.video.set_volume(volume);
    }

    fn play(&mut self) {
        match self.video.play() {
            Ok(promise) => wasm_bindgen_futures::spawn_local(async move {
                if let Err(err) = JsFuture::from(promise).await {
                    Logger::lazy_warn(&|| {
                        format!("DOM: playback was refused: {}", format_js_value(&err))
                    });
                }
            }),
            Err(err) => {
                Logger::lazy_warn(&|| format!("DOM: could not play: {}", format_js_value(&err)))
            }
        }
    }

    fn pause(&mut self) {
        if let Err(err) = self.video.pause() {
            Logger::lazy_warn(&|| format!("DOM: could not pause: {}", format_js_value(&err)));
        }
    }

    fn is_fullscreen(&self) -> bool {
        self.document.fullscreen_element().is_some()
    }

    fn request_fullscreen(&mut self) -> Result<(), DomError> {
        self.container
            .request_fullscreen()
            .map_err(|err| DomError::from_js(&err))
    }

    fn exit_fullscreen(&mut self) {
        self.document.exit_fullscreen();
    }

    fn toggle_container_class(&mut self, class: &str, force: bool) -> Result<(), DomError> {
        self.container
            .class_list()
            .toggle_with_force(class, force)
            .map(|_| ())
            .map_err(|err| DomError::from_js(&err))
    }

    fn toggle_class(&mut self, marker: Marker, class: &str, force: bool) -> Result<(), DomError> {
        self.element(marker)?
            .class_list()
            .toggle_with_force(class, force)
            .map(|_| ())
            .map_err(|err| DomError::from_js(&err))
    }

    fn add_class(&mut self, marker: Marker, class: &str) -> Result<(), DomError> {
        self.element(marker)?
            .class_list()
            .add_1(class)
            .map_err(|err| DomError::from_js(&err))
    }

    fn remove_classes(&mut self, marker: Marker, classes: &[&str]) -> Result<(), DomError> {
        let class_list = self.element(marker)?.class_list();
        for class in classes {
            class_list
                .remove_1(class)
                .map_err(|err| DomError::from_js(&err))?;
        }
        Ok(())
    }

    fn set_style(&mut self, marker: Marker, property: &str, value: &str) -> Result<(), DomError> {
        self.html_element(marker)?
            .style()
            .set_property(property, value)
            .map_err(|err| DomError::from_js(&err))
    }

    fn text(&self, marker: Marker) -> Result<String, DomError> {
        Ok(self.element(marker)?.text_content().unwrap_or_default())
    }

    fn set_text(&mut self, marker: Marker, text: &str) -> Result<(), DomError> {
        self.element(marker)?.set_text_content(Some(text));
        Ok(())
    }

    fn set_input_value(&mut self, marker: Marker, value: f64) -> Result<(), DomError> {
        let input = self
            .element(marker)?
            .dyn_into::<HtmlInputElement>()
            .map_err(|_| DomError::Js(format!("\"{}\" is not an input", marker.selector())))?;
        input.set_value(&value.to_string());
        Ok(())
    }

    fn offset_width(&self, marker: Marker) -> Result<f64, DomError> {
        Ok(self.html_element(marker)?.offset_width() as f64)
    }

    fn schedule(&mut self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_ms, callback)
    }
}
