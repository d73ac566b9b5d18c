/// Format a position in seconds as `minutes:seconds`.
///
/// Only the seconds are zero-padded to two digits, minutes are written as is
/// (`600` gives `"10:00"`, `5` gives `"0:05"`).
///
/// Non-finite values are written the way JavaScript would stringify them
/// (`NaN:NaN` before the duration is known, `Infinity:NaN` for a live
/// content's duration).
pub(crate) fn format_time(seconds: f64) -> String {
    // `+ 0.` turns a `-0` into `0` so it is not written with a sign
    let minutes = (seconds / 60.).floor() + 0.;
    let secs = (seconds % 60.).floor() + 0.;
    format!("{}:{}", js_number(minutes), pad_two_digits(secs))
}

fn pad_two_digits(value: f64) -> String {
    if value < 10. {
        format!("0{}", js_number(value))
    } else {
        js_number(value)
    }
}

/// Write a number like JavaScript's `String(number)` does for the values a
/// media element can report: infinite durations (live contents) give
/// `Infinity` where `Display` would give `inf`.
fn js_number(value: f64) -> String {
    if value == f64::INFINITY {
        "Infinity".to_owned()
    } else if value == f64::NEG_INFINITY {
        "-Infinity".to_owned()
    } else {
        format!("{value}")
    }
}

/// Round a media position to the closest second, halves going away from zero.
pub(crate) fn round_position(position: f64) -> f64 {
    position.round() + 0.
}

/// Text displayed in the current time / duration label.
pub(crate) fn duration_label(current: f64, duration: f64) -> String {
    format!("{} / {}", format_time(current), format_time(duration))
}

/// Percentage of the content already played.
///
/// Not clamped: a position past the duration gives more than `100`.
pub(crate) fn progress_percent(current: f64, duration: f64) -> f64 {
    current / (duration / 100.)
}

pub(crate) fn format_percent(value: f64) -> String {
    format!("{}%", js_number(value))
}

pub(crate) fn format_px(value: f64) -> String {
    format!("{}px", js_number(value))
}
