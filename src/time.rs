//! Millisecond time constants for limiter attack/release stages.

use crate::error::{Error, Result};

fn check_time(time_ms: f32, sample_rate: f64) -> Result<()> {
    if !sample_rate.is_finite() || sample_rate <= 0.0 {
        tracing::debug!(sample_rate, "rejected sample rate");
        return Err(Error::InvalidParameter(format!(
            "sample rate must be positive and finite, got {sample_rate}"
        )));
    }
    if !time_ms.is_finite() || time_ms < 0.0 {
        tracing::debug!(time_ms, "rejected time");
        return Err(Error::InvalidParameter(format!(
            "time must be non-negative and finite, got {time_ms} ms"
        )));
    }
    Ok(())
}

/// Length of `time_ms` in whole samples, never less than one.
pub fn ms_to_samples(time_ms: f32, sample_rate: f64) -> Result<usize> {
    check_time(time_ms, sample_rate)?;
    let samples = (time_ms as f64 * sample_rate / 1000.0) as usize;
    Ok(samples.max(1))
}

/// One-pole smoothing coefficient reaching 90% of a step after `time_ms`.
///
/// `0.1^(1 / (time_ms * sample_rate / 1000 + 1))`
///
/// Times so long that the coefficient rounds to `1.0` in `f32` are rejected:
/// a smoother with that coefficient never moves.
pub fn time_constant_coeff(time_ms: f32, sample_rate: f64) -> Result<f32> {
    check_time(time_ms, sample_rate)?;
    let samples = time_ms as f64 * sample_rate / 1000.0;
    let coeff = 0.1_f64.powf(1.0 / (samples + 1.0)) as f32;
    if coeff >= 1.0 {
        tracing::debug!(time_ms, sample_rate, "time constant saturates");
        return Err(Error::InvalidParameter(format!(
            "time constant of {time_ms} ms at {sample_rate} Hz is too long to represent"
        )));
    }
    Ok(coeff)
}
