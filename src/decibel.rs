//! Decibel ↔ linear amplitude conversion.
//!
//! Neither direction floors or clamps its result: `db_to_lin(-200.0)` is a
//! tiny positive gain, `lin_to_db(0.0)` is `-inf`.

/// Convert an amplitude level in decibels to linear gain: `10^(db / 20)`.
///
/// ```
/// use gainmath::db_to_lin;
///
/// assert_eq!(db_to_lin(0.0), 1.0);
/// assert!((db_to_lin(-6.0) - 0.5012).abs() < 1e-4);
/// ```
#[inline]
pub fn db_to_lin(db: f32) -> f32 {
    10.0_f32.powf(db / 20.0)
}

/// Convert linear gain to decibels: `20 * log10(gain)`.
///
/// Zero maps to `-inf` and negative gains to NaN.
#[inline]
pub fn lin_to_db(gain: f32) -> f32 {
    20.0 * gain.log10()
}
