//! In-memory `PlayerView` used to exercise the `PlayerController` without a
//! browser, with a virtual clock for scheduled callbacks.

use std::{
    cell::{Cell, RefCell},
    collections::{BTreeMap, BTreeSet, HashMap},
    rc::Rc,
};

use super::PlayerView;
use crate::{bindings::Marker, errors::DomError};

const ALL_MARKERS: [Marker; 13] = [
    Marker::ToggleVideo,
    Marker::ToggleVideoIcon,
    Marker::Play,
    Marker::Pause,
    Marker::VolumeInput,
    Marker::ToggleVolume,
    Marker::Fullscreen,
    Marker::FullscreenIcon,
    Marker::Line,
    Marker::LineCurrent,
    Marker::LineGhost,
    Marker::Hint,
    Marker::Duration,
];

#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct TestElement {
    classes: BTreeSet<String>,
    styles: BTreeMap<String, String>,
    text: String,
    value: Option<f64>,
    offset_width: f64,
    /// When set, the element's width follows the length of its text.
    width_per_char: Option<f64>,
    text_writes: usize,
}

struct ScheduledCallback {
    due: u64,
    cancelled: Rc<Cell<bool>>,
    callback: Option<Box<dyn FnOnce()>>,
}

pub(crate) struct TestTimer {
    cancelled: Rc<Cell<bool>>,
}

impl Drop for TestTimer {
    fn drop(&mut self) {
        self.cancelled.set(true);
    }
}

pub(crate) struct TestView {
    current_time: f64,
    duration: f64,
    volume: f64,
    paused: bool,
    fullscreen: bool,
    container_classes: BTreeSet<String>,
    elements: HashMap<Marker, TestElement>,
    now: u64,
    scheduled: RefCell<Vec<ScheduledCallback>>,
}

impl TestView {
    pub(crate) fn new() -> Self {
        Self {
            current_time: 0.,
            duration: f64::NAN,
            volume: 1.,
            paused: true,
            fullscreen: false,
            container_classes: BTreeSet::new(),
            elements: ALL_MARKERS
                .iter()
                .map(|m| (*m, TestElement::default()))
                .collect(),
            now: 0,
            scheduled: RefCell::new(vec![]),
        }
    }

    pub(crate) fn set_duration(&mut self, duration: f64) {
        self.duration = duration;
    }

    pub(crate) fn is_paused(&self) -> bool {
        self.paused
    }

    pub(crate) fn remove_element(&mut self, marker: Marker) {
        self.elements.remove(&marker);
    }

    pub(crate) fn set_offset_width(&mut self, marker: Marker, width: f64) {
        if let Some(el) = self.elements.get_mut(&marker) {
            el.offset_width = width;
        }
    }

    pub(crate) fn set_width_per_char(&mut self, marker: Marker, width: f64) {
        if let Some(el) = self.elements.get_mut(&marker) {
            el.width_per_char = Some(width);
        }
    }

    pub(crate) fn has_class(&self, marker: Marker, class: &str) -> bool {
        self.elements
            .get(&marker)
            .map(|el| el.classes.contains(class))
            .unwrap_or(false)
    }

    pub(crate) fn has_container_class(&self, class: &str) -> bool {
        self.container_classes.contains(class)
    }

    pub(crate) fn style(&self, marker: Marker, property: &str) -> Option<&str> {
        self.elements
            .get(&marker)
            .and_then(|el| el.styles.get(property))
            .map(String::as_str)
    }

    pub(crate) fn input_value(&self, marker: Marker) -> Option<f64> {
        self.elements.get(&marker).and_then(|el| el.value)
    }

    pub(crate) fn text_writes(&self, marker: Marker) -> usize {
        self.elements
            .get(&marker)
            .map(|el| el.text_writes)
            .unwrap_or(0)
    }

    /// Everything displayed by the player, to compare interface states.
    pub(crate) fn snapshot(&self) -> (BTreeSet<String>, BTreeMap<String, TestElement>) {
        let elements = self
            .elements
            .iter()
            .map(|(marker, el)| {
                let mut el = el.clone();
                el.text_writes = 0;
                (marker.selector().to_owned(), el)
            })
            .collect();
        (self.container_classes.clone(), elements)
    }

    /// Number of scheduled callbacks neither cancelled nor already run.
    pub(crate) fn live_timers(&self) -> usize {
        self.scheduled
            .borrow()
            .iter()
            .filter(|s| !s.cancelled.get() && s.callback.is_some())
            .count()
    }

    /// Move the virtual clock forward, running the callbacks which became due.
    pub(crate) fn advance(&mut self, ms: u64) {
        self.now += ms;
        let now = self.now;
        let due: Vec<Box<dyn FnOnce()>> = self
            .scheduled
            .borrow_mut()
            .iter_mut()
            .filter(|s| s.due <= now && !s.cancelled.get())
            .filter_map(|s| s.callback.take())
            .collect();
        due.into_iter().for_each(|cb| cb());
    }

    fn element(&self, marker: Marker) -> Result<&TestElement, DomError> {
        self.elements
            .get(&marker)
            .ok_or(DomError::MissingMarker(marker))
    }

    fn element_mut(&mut self, marker: Marker) -> Result<&mut TestElement, DomError> {
        self.elements
            .get_mut(&marker)
            .ok_or(DomError::MissingMarker(marker))
    }
}

impl PlayerView for TestView {
    type Timer = TestTimer;

    fn current_time(&self) -> f64 {
        self.current_time
    }

    fn set_current_time(&mut self, position: f64) {
        self.current_time = position;
    }

    fn duration(&self) -> f64 {
        self.duration
    }

    fn volume(&self) -> f64 {
        self.volume
    }

    fn set_volume(&mut self, volume: f64) {
        self.volume = volume;
    }

    fn play(&mut self) {
        self.paused = false;
    }

    fn pause(&mut self) {
        self.paused = true;
    }

    fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    fn request_fullscreen(&mut self) -> Result<(), DomError> {
        self.fullscreen = true;
        Ok(())
    }

    fn exit_fullscreen(&mut self) {
        self.fullscreen = false;
    }

    fn toggle_container_class(&mut self, class: &str, force: bool) -> Result<(), DomError> {
        if force {
            self.container_classes.insert(class.to_owned());
        } else {
            self.container_classes.remove(class);
        }
        Ok(())
    }

    fn toggle_class(&mut self, marker: Marker, class: &str, force: bool) -> Result<(), DomError> {
        let el = self.element_mut(marker)?;
        if force {
            el.classes.insert(class.to_owned());
        } else {
            el.classes.remove(class);
        }
        Ok(())
    }

    fn add_class(&mut self, marker: Marker, class: &str) -> Result<(), DomError> {
        self.element_mut(marker)?.classes.insert(class.to_owned());
        Ok(())
    }

    fn remove_classes(&mut self, marker: Marker, classes: &[&str]) -> Result<(), DomError> {
        let el = self.element_mut(marker)?;
        classes.iter().for_each(|c| {
            el.classes.remove(*c);
        });
        Ok(())
    }

    fn set_style(&mut self, marker: Marker, property: &str, value: &str) -> Result<(), DomError> {
        self.element_mut(marker)?
            .styles
            .insert(property.to_owned(), value.to_owned());
        Ok(())
    }

    fn text(&self, marker: Marker) -> Result<String, DomError> {
        Ok(self.element(marker)?.text.clone())
    }

    fn set_text(&mut self, marker: Marker, text: &str) -> Result<(), DomError> {
        let el = self.element_mut(marker)?;
        el.text = text.to_owned();
        el.text_writes += 1;
        Ok(())
    }

    fn set_input_value(&mut self, marker: Marker, value: f64) -> Result<(), DomError> {
        self.element_mut(marker)?.value = Some(value);
        Ok(())
    }

    fn offset_width(&self, marker: Marker) -> Result<f64, DomError> {
        let el = self.element(marker)?;
        Ok(match el.width_per_char {
            Some(per_char) => per_char * el.text.chars().count() as f64,
            None => el.offset_width,
        })
    }

    fn schedule(&mut self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> TestTimer {
        let cancelled = Rc::new(Cell::new(false));
        self.scheduled.borrow_mut().push(ScheduledCallback {
            due: self.now + u64::from(delay_ms),
            cancelled: Rc::clone(&cancelled),
            callback: Some(callback),
        });
        TestTimer { cancelled }
    }
}
