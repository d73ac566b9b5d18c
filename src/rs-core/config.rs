use crate::wasm_bindgen;

const DEFAULT_HIDE_INTERFACE_DELAY_MS: u32 = 5000;
const DEFAULT_SEEK_STEP: f64 = 5.;

/// Configuration on which a `PlayerController` relies.
///
/// Can be created from the JavaScript-side and given to
/// `WaspPlayerControls::with_config`.
#[wasm_bindgen]
#[derive(Clone, Debug, PartialEq)]
pub struct PlayerConfiguration {
    /// Quiet period, in milliseconds, without pointer movement over the
    /// container after which the interface is considered hidden.
    pub(crate) hide_interface_delay_ms: u32,

    /// Amount of seconds the playhead moves when pressing the left or right
    /// arrow keys.
    ///
    /// The resulting position is not clamped to the content's bounds.
    pub(crate) seek_step: f64,
}

#[wasm_bindgen]
impl PlayerConfiguration {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_hide_interface_delay_ms(&mut self, delay_ms: u32) {
        self.hide_interface_delay_ms = delay_ms;
    }

    pub fn set_seek_step(&mut self, seek_step: f64) {
        self.seek_step = seek_step;
    }

    pub fn hide_interface_delay_ms(&self) -> u32 {
        self.hide_interface_delay_ms
    }

    pub fn seek_step(&self) -> f64 {
        self.seek_step
    }
}

impl Default for PlayerConfiguration {
    fn default() -> Self {
        Self {
            hide_interface_delay_ms: DEFAULT_HIDE_INTERFACE_DELAY_MS,
            seek_step: DEFAULT_SEEK_STEP,
        }
    }
}
