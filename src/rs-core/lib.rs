use wasm_bindgen::prelude::*;

mod bindings;
mod config;
mod controller;
mod controls;
mod errors;
mod player;
mod utils;

pub use bindings::{LogLevel, Marker};
pub use config::PlayerConfiguration;
pub use controls::{GhostPreview, PointerSample, VolumeIcon};
pub use errors::{DomError, PlayerInitError};
pub use player::{set_log_level, WaspPlayerControls};
pub use utils::logger::{Logger, LoggerLevel};
