//! Test helpers shared by the gainmath integration tests.
//!
//! ## Tolerance Levels
//!
//! Use the appropriate tolerance from [`tolerances`] module:
//! - `FLOAT_EPSILON` (1e-6): Exact conversions (unity gain)
//! - `CONVERSION_EPSILON` (1e-4): dB ↔ linear trips

#![allow(dead_code)]


use std::io;
use std::sync::{Arc, Mutex};

/// Common sample rates a limiter runs at.
pub const SAMPLE_RATES: [f64; 4] = [22050.0, 44100.0, 48000.0, 96000.0];

/// Default attack/release time of the limiter, in ms.
pub const DEFAULT_TIME_MS: f32 = 20.0;

/// Writer that appends formatted tracing output to a shared buffer.
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    pub fn contents(&self) -> String {
        let buf = self.0.lock().expect("log buffer poisoned");
        String::from_utf8_lossy(&buf).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .expect("log buffer poisoned")
            .extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Run `f` with a DEBUG-level subscriber installed and return what it logged.
pub fn capture_debug_logs(f: impl FnOnce()) -> String {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    logs.contents()
}
