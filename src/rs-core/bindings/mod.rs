mod dom_view;
mod event_listeners;
mod js_functions;
mod markers;

pub(crate) use dom_view::DomView;
pub(crate) use event_listeners::EventListenerRegistry;
pub(crate) use js_functions::js_log;
pub use js_functions::LogLevel;
pub use markers::Marker;
pub(crate) use markers::{
    COMPRESS_ICON_CLASS, EXPAND_ICON_CLASS, FULLSCREEN_CLASS, HIDDEN_INTERFACE_CLASS,
    MEDIA_SELECTOR, PAUSE_ICON_CLASS, PLAY_ICON_CLASS,
};
