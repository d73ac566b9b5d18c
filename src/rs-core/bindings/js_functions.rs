use crate::wasm_bindgen;

/// # js_functions
///
/// JavaScript functions callable from Rust which are not covered by `web-sys`,
/// as well as the enumerations used by them.

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console, js_name = error)]
    fn console_error(log: &str);

    #[wasm_bindgen(js_namespace = console, js_name = warn)]
    fn console_warn(log: &str);

    #[wasm_bindgen(js_namespace = console, js_name = info)]
    fn console_info(log: &str);

    #[wasm_bindgen(js_namespace = console, js_name = debug)]
    fn console_debug(log: &str);
}

/// Log the given text in the JavaScript console, with the log level given.
#[cfg(target_arch = "wasm32")]
pub(crate) fn js_log(log_level: LogLevel, log: &str) {
    match log_level {
        LogLevel::Error => console_error(log),
        LogLevel::Warn => console_warn(log),
        LogLevel::Info => console_info(log),
        LogLevel::Debug => console_debug(log),
    }
}

/// Outside of a browser (e.g. native unit tests) there is no console to
/// write to, logs go to stderr instead.
#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn js_log(log_level: LogLevel, log: &str) {
    eprintln!("[{log_level:?}] {log}");
}

/// Levels with which a log can be emitted.
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    /// Log level reserved for very important errors and highly unexpected events.
    Error = 0,

    /// Log level reserved for less important errors and unexpected events.
    Warn = 1,

    /// Log level reserved for important events
    Info = 2,

    /// Log level used when debugging. Small-ish yet impactful events should be logged with it.
    Debug = 3,
}
