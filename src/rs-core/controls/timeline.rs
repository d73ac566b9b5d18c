use super::time::format_time;

/// Position of the pointer relative to the scrub line, as read when a mouse
/// event is received on it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSample {
    /// Horizontal coordinate of the pointer in the viewport, in pixels.
    pub client_x: f64,
    /// Left offset of the scrub line in the viewport, in pixels.
    pub left: f64,
    /// Rendered width of the scrub line, in pixels.
    pub width: f64,
}

impl PointerSample {
    pub fn new(client_x: f64, left: f64, width: f64) -> Self {
        Self {
            client_x,
            left,
            width,
        }
    }

    /// Distance, in pixels, between the start of the line and the pointer.
    pub fn offset(&self) -> f64 {
        self.client_x - self.left
    }

    /// Media position the pointer points at, for a content of the given duration.
    ///
    /// Not clamped: a pointer outside of the line gives a position outside of
    /// `[0, duration]`.
    pub fn time_at(&self, duration: f64) -> f64 {
        duration * (self.offset() / self.width)
    }

    /// Left position, in pixels, an element of the given width should have to
    /// be horizontally centered on the pointer.
    pub fn centered_left(&self, element_width: f64) -> f64 {
        self.client_x - (self.left + element_width / 2.)
    }
}

/// What to display while hovering the scrub line.
#[derive(Clone, Debug, PartialEq)]
pub struct GhostPreview {
    /// Formatted position the media would seek to on click.
    pub hint_text: String,
    /// Width of the ghost fill, in pixels.
    pub ghost_width: f64,
}

impl GhostPreview {
    /// The hint's position is not part of it: it depends on the hint's width
    /// once `hint_text` is displayed, see `PointerSample::centered_left`.
    pub fn compute(sample: &PointerSample, duration: f64) -> Self {
        Self {
            hint_text: format_time(sample.time_at(duration)),
            ghost_width: sample.offset(),
        }
    }
}
