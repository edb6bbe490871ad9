/// Truncates a non-negative volume to one decimal place.
///
/// Volumes in the engine are kept at a single decimal, and the decimal is
/// always produced by truncation: `round1(12.37) == 12.3`, never `12.4`.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).floor() / 10.0
}
