/// Icon displayed on the volume toggle button, depending on the current volume.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VolumeIcon {
    /// Volume strictly above `0.66`.
    Up,
    /// Volume strictly above `0.33`, up to `0.66` included.
    Down,
    /// Volume strictly above `0`, up to `0.33` included.
    Off,
    /// Volume at exactly `0`.
    Mute,
}

impl VolumeIcon {
    pub const ALL: [VolumeIcon; 4] = [
        VolumeIcon::Up,
        VolumeIcon::Down,
        VolumeIcon::Off,
        VolumeIcon::Mute,
    ];

    /// Select the icon corresponding to the given volume, from `0` to `1`.
    ///
    /// Bounds are compared strictly, so `0.33` gives `Off` and `0.66` gives `Down`.
    /// Returns `None` only for values no media element can have (negative or `NaN`).
    pub fn from_volume(volume: f64) -> Option<Self> {
        if volume > 0.66 {
            Some(VolumeIcon::Up)
        } else if volume > 0.33 {
            Some(VolumeIcon::Down)
        } else if volume > 0. {
            Some(VolumeIcon::Off)
        } else if volume == 0. {
            Some(VolumeIcon::Mute)
        } else {
            None
        }
    }

    pub fn class_name(self) -> &'static str {
        match self {
            VolumeIcon::Up => "fa-volume-up",
            VolumeIcon::Down => "fa-volume-down",
            VolumeIcon::Off => "fa-volume-off",
            VolumeIcon::Mute => "fa-volume-mute",
        }
    }
}

/// Convert the value of the volume range input, from `0` to `100`, to a media
/// volume.
///
/// Returns `None` if the input has no numeric value.
pub(crate) fn slider_to_volume(value: f64) -> Option<f64> {
    if value.is_nan() {
        return None;
    }
    Some((value / 100.).clamp(0., 1.))
}

pub(crate) fn volume_to_slider(volume: f64) -> f64 {
    volume * 100.
}

/// Volume to set when the mute button is clicked: `0` at full volume, full
/// volume otherwise.
pub(crate) fn toggled_mute_volume(volume: f64) -> f64 {
    if volume == 1. {
        0.
    } else {
        1.
    }
}
