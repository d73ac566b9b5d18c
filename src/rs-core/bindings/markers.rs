/// Elements the player's container is expected to contain, each identified by a
/// fixed marker class.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Marker {
    /// Button toggling playback.
    ToggleVideo,
    /// Play/pause glyph inside the `ToggleVideo` button.
    ToggleVideoIcon,
    /// Big "play" indicator, shown while playing.
    Play,
    /// Big "pause" indicator, shown while paused.
    Pause,
    /// Volume range input, from `0` to `100`.
    VolumeInput,
    /// Mute button, also carrying the volume icon classes.
    ToggleVolume,
    /// Button toggling fullscreen.
    Fullscreen,
    /// Expand/compress glyph inside the `Fullscreen` button.
    FullscreenIcon,
    /// Scrub line.
    Line,
    /// Part of the scrub line filled up to the current position.
    LineCurrent,
    /// Part of the scrub line filled up to the hovered position.
    LineGhost,
    /// Label showing the hovered position.
    Hint,
    /// Current time / duration label.
    Duration,
}

impl Marker {
    pub fn selector(self) -> &'static str {
        match self {
            Marker::ToggleVideo => ".j-toggle-video",
            Marker::ToggleVideoIcon => ".j-toggle-video .fas",
            Marker::Play => ".j-play",
            Marker::Pause => ".j-pause",
            Marker::VolumeInput => ".j-volume-input",
            Marker::ToggleVolume => ".j-toggle-volume",
            Marker::Fullscreen => ".j-fullscreen",
            Marker::FullscreenIcon => ".j-fullscreen .fas",
            Marker::Line => ".j-line",
            Marker::LineCurrent => ".j-line-current",
            Marker::LineGhost => ".j-line-ghost",
            Marker::Hint => ".j-hint",
            Marker::Duration => ".j-duration",
        }
    }
}

pub(crate) const PLAY_ICON_CLASS: &str = "fa-play";
pub(crate) const PAUSE_ICON_CLASS: &str = "fa-pause";
pub(crate) const EXPAND_ICON_CLASS: &str = "fa-expand";
pub(crate) const COMPRESS_ICON_CLASS: &str = "fa-compress";

/// Set on the container while it is in fullscreen mode.
pub(crate) const FULLSCREEN_CLASS: &str = "player--fullscreen";
/// Set on the container while the interface is hidden.
pub(crate) const HIDDEN_INTERFACE_CLASS: &str = "player--hide-interface";

/// Selector of the media element, looked up inside the container.
pub(crate) const MEDIA_SELECTOR: &str = "video";
