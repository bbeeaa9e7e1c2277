//! Time labels for the progress display

/// Format seconds as `m:ss`
///
/// Unknown, NaN, infinite or negative inputs render as `"0:00"`, which is
/// what the view shows while stream metadata is pending.
///
/// ```rust
/// use cadence_playback::format_time;
///
/// assert_eq!(format_time(Some(125.7)), "2:05");
/// assert_eq!(format_time(Some(f64::NAN)), "0:00");
/// assert_eq!(format_time(None), "0:00");
/// ```
pub fn format_time(seconds: Option<f64>) -> String {
    let seconds = match seconds {
        Some(s) if s.is_finite() && s > 0.0 => s,
        _ => return "0:00".to_string(),
    };

    let whole = seconds.floor() as u64;
    format!("{}:{:02}", whole / 60, whole % 60)
}
