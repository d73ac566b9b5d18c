//! Pure computations behind the player's controls.
//!
//! Nothing in here touches the DOM. The `PlayerController` uses those helpers
//! to know what to write through its `PlayerView`.

mod time;
mod timeline;
mod volume;

pub(crate) use time::{
    duration_label, format_percent, format_px, progress_percent, round_position,
};
pub use timeline::{GhostPreview, PointerSample};
pub use volume::VolumeIcon;
pub(crate) use volume::{slider_to_volume, toggled_mute_volume, volume_to_slider};
