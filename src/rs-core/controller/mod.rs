use crate::{
    bindings::{
        Marker, COMPRESS_ICON_CLASS, EXPAND_ICON_CLASS, FULLSCREEN_CLASS, HIDDEN_INTERFACE_CLASS,
        PAUSE_ICON_CLASS, PLAY_ICON_CLASS,
    },
    config::PlayerConfiguration,
    controls::{
        duration_label, format_percent, format_px, progress_percent, round_position,
        slider_to_volume, toggled_mute_volume, volume_to_slider, GhostPreview, PointerSample,
        VolumeIcon,
    },
    errors::DomError,
    Logger,
};

use self::interface::InterfaceVisibility;
pub(crate) use self::view::PlayerView;

mod interface;
mod view;

#[cfg(test)]
mod test_view;

/// Keyboard shortcuts handled by the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum KeyCommand {
    TogglePlayback,
    SeekForward,
    SeekBackward,
}

impl KeyCommand {
    /// Parse the `code` property of a `keydown` event.
    pub(crate) fn from_code(code: &str) -> Option<Self> {
        match code {
            "Space" => Some(KeyCommand::TogglePlayback),
            "ArrowRight" => Some(KeyCommand::SeekForward),
            "ArrowLeft" => Some(KeyCommand::SeekBackward),
            _ => None,
        }
    }
}

/// The `PlayerController` reacts to the events happening on the player by
/// reading the current media state and reflecting it on the player's
/// interface.
///
/// All of its UI state is owned here and only mutated through its methods.
pub(crate) struct PlayerController<V: PlayerView> {
    /// Access to the media element and to the player's DOM.
    view: V,

    config: PlayerConfiguration,

    /// Set to `true` when the last playback toggle asked to play.
    /// Starts at `false`, matching a media element which did not autoplay.
    is_playing: bool,

    /// Auto-hide state of the interface.
    interface: InterfaceVisibility<V::Timer>,
}

impl<V: PlayerView> PlayerController<V> {
    pub(crate) fn new(view: V, config: PlayerConfiguration) -> Self {
        Self {
            view,
            config,
            is_playing: false,
            interface: InterfaceVisibility::new(),
        }
    }

    pub(crate) fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub(crate) fn is_interface_hidden(&self) -> bool {
        self.interface.is_hidden()
    }

    #[cfg(test)]
    pub(crate) fn has_pending_hide_timer(&self) -> bool {
        self.interface.has_pending_timer()
    }

    pub(crate) fn view(&self) -> &V {
        &self.view
    }

    /// Called once the media element loaded its metadata.
    pub(crate) fn on_loaded_metadata(&mut self) {
        self.set_video_duration();
        self.update_volume_input();
    }

    /// Called on each `timeupdate` event of the media element.
    pub(crate) fn on_time_update(&mut self) {
        self.set_video_duration();
        self.toggle_interface();
    }

    /// Switch between playing and paused, updating the corresponding indicators.
    pub(crate) fn toggle_video(&mut self) {
        self.is_playing = !self.is_playing;
        let is_playing = self.is_playing;
        Logger::lazy_debug(&|| format!("Controller: toggling playback (playing: {is_playing})"));
        report(self.render_playback_state());
        if is_playing {
            self.view.play();
        } else {
            self.view.pause();
        }
    }

    fn render_playback_state(&mut self) -> Result<(), DomError> {
        let is_playing = self.is_playing;
        self.view
            .set_style(Marker::Play, "display", display_value(is_playing))?;
        self.view
            .set_style(Marker::Pause, "display", display_value(!is_playing))?;
        self.view
            .toggle_class(Marker::ToggleVideoIcon, PLAY_ICON_CLASS, !is_playing)?;
        self.view
            .toggle_class(Marker::ToggleVideoIcon, PAUSE_ICON_CLASS, is_playing)
    }

    /// Update the volume from the value of the volume input, from `0` to `100`.
    pub(crate) fn set_volume(&mut self, value: f64) {
        match slider_to_volume(value) {
            Some(volume) => self.view.set_volume(volume),
            None => Logger::warn("Controller: ignoring volume input without a numeric value"),
        }
    }

    /// Go from full volume to muted, and from any other volume to full volume.
    pub(crate) fn toggle_mute(&mut self) {
        let volume = toggled_mute_volume(self.view.volume());
        self.view.set_volume(volume);
    }

    /// Reflect the current volume on the volume input and icon.
    pub(crate) fn update_volume_input(&mut self) {
        report(self.render_volume());
    }

    fn render_volume(&mut self) -> Result<(), DomError> {
        let volume = self.view.volume();
        self.view
            .set_input_value(Marker::VolumeInput, volume_to_slider(volume))?;

        let all_icons = VolumeIcon::ALL.map(VolumeIcon::class_name);
        self.view.remove_classes(Marker::ToggleVolume, &all_icons)?;
        match VolumeIcon::from_volume(volume) {
            Some(icon) => self.view.add_class(Marker::ToggleVolume, icon.class_name()),
            None => {
                Logger::lazy_warn(&|| format!("Controller: no volume icon for volume {volume}"));
                Ok(())
            }
        }
    }

    /// Reflect the current position and duration on the time label and
    /// progress bar.
    pub(crate) fn set_video_duration(&mut self) {
        report(self.render_duration());
    }

    fn render_duration(&mut self) -> Result<(), DomError> {
        let duration = round_position(self.view.duration());
        let current = round_position(self.view.current_time());
        let label = duration_label(current, duration);

        self.view.set_style(
            Marker::LineCurrent,
            "width",
            &format_percent(progress_percent(current, duration)),
        )?;

        if self.view.text(Marker::Duration)? != label {
            self.view.set_text(Marker::Duration, &label)?;
        }
        Ok(())
    }

    /// Enter fullscreen on the player's container or exit it if something is
    /// already in fullscreen.
    pub(crate) fn toggle_fullscreen(&mut self) {
        if self.view.is_fullscreen() {
            Logger::debug("Controller: exiting fullscreen");
            self.view.exit_fullscreen();
        } else {
            Logger::debug("Controller: requesting fullscreen");
            report(self.view.request_fullscreen());
        }
    }

    /// Reflect the current fullscreen state, to call when it changed.
    pub(crate) fn check_fullscreen(&mut self) {
        report(self.render_fullscreen());
    }

    fn render_fullscreen(&mut self) -> Result<(), DomError> {
        let is_fullscreen = self.view.is_fullscreen();
        self.view
            .toggle_class(Marker::FullscreenIcon, EXPAND_ICON_CLASS, !is_fullscreen)?;
        self.view
            .toggle_class(Marker::FullscreenIcon, COMPRESS_ICON_CLASS, is_fullscreen)?;
        self.view
            .toggle_container_class(FULLSCREEN_CLASS, is_fullscreen)
    }

    /// Media position pointed at on the scrub line.
    pub(crate) fn calc_needed_line(&self, sample: &PointerSample) -> f64 {
        sample.time_at(self.view.duration())
    }

    /// Preview the position hovered on the scrub line.
    pub(crate) fn calc_ghost_line(&mut self, sample: &PointerSample) {
        report(self.render_ghost_line(sample));
    }

    fn render_ghost_line(&mut self, sample: &PointerSample) -> Result<(), DomError> {
        let preview = GhostPreview::compute(sample, self.view.duration());
        self.view.set_text(Marker::Hint, &preview.hint_text)?;

        // Measured after the text update, as its width depends on it.
        let hint_width = self.view.offset_width(Marker::Hint)?;
        self.view
            .set_style(Marker::Hint, "left", &format_px(sample.centered_left(hint_width)))?;
        self.view
            .set_style(Marker::LineGhost, "width", &format_px(preview.ghost_width))
    }

    /// Seek to the position clicked on the scrub line.
    pub(crate) fn seek_to_pointer(&mut self, sample: &PointerSample) {
        let position = self.calc_needed_line(sample);
        Logger::lazy_debug(&|| format!("Controller: seeking to {position}"));
        self.view.set_current_time(position);
    }

    /// Move the playhead by `delta` seconds, without clamping the result.
    pub(crate) fn seek_by(&mut self, delta: f64) {
        let position = self.view.current_time() + delta;
        self.view.set_current_time(position);
    }

    /// React to a key press, based on the event's `code`.
    ///
    /// Returns `true` if the key's default action should be prevented.
    pub(crate) fn handle_key(&mut self, code: &str) -> bool {
        match KeyCommand::from_code(code) {
            Some(KeyCommand::TogglePlayback) => {
                self.toggle_video();
                true
            }
            Some(KeyCommand::SeekForward) => {
                self.seek_by(self.config.seek_step);
                false
            }
            Some(KeyCommand::SeekBackward) => {
                self.seek_by(-self.config.seek_step);
                false
            }
            None => false,
        }
    }

    /// Pointer activity on the player: show the interface and restart the
    /// countdown before hiding it.
    pub(crate) fn check_interface(&mut self) {
        let delay = self.config.hide_interface_delay_ms;
        let view = &mut self.view;
        self.interface
            .on_activity(|callback| view.schedule(delay, callback));
    }

    /// Reflect the interface's visibility on the player's container.
    pub(crate) fn toggle_interface(&mut self) {
        let is_hidden = self.interface.is_hidden();
        report(
            self.view
                .toggle_container_class(HIDDEN_INTERFACE_CLASS, is_hidden),
        );
    }

    /// Release what the controller holds on to that could still trigger later.
    pub(crate) fn teardown(&mut self) {
        if self.interface.has_pending_timer() {
            Logger::debug("Controller: cancelling interface timer");
        }
        self.interface.cancel();
    }
}

fn display_value(is_shown: bool) -> &'static str {
    if is_shown {
        "block"
    } else {
        "none"
    }
}

fn report(result: Result<(), DomError>) {
    if let Err(err) = result {
        Logger::lazy_error(&|| format!("Controller: {err}"));
    }
}
