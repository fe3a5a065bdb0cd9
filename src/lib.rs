//! # gainmath - gain math for limiters and level controls
//!
//! Pure, stateless helpers:
//! - [`clamp`] / [`Bounds`] - saturating clamp to a closed interval
//! - [`db_to_lin`] / [`lin_to_db`] - decibel ↔ linear amplitude
//! - [`ms_to_samples`] / [`time_constant_coeff`] - attack/release time constants
//!
//! Every function is safe to call from any thread, including the audio thread:
//! no allocation on the success path, no locks, no shared state.
//!
//! ## Quick Start
//!
//! ```
//! use gainmath::utilities;
//!
//! let level = utilities::clamp(-3.0, -60.0, 0.0)?;
//! let gain = utilities::db_to_lin(level);
//! assert!((gain - 0.7079).abs() < 1e-4);
//! # Ok::<(), gainmath::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default) - `Serialize`/`Deserialize` for [`Bounds`]

mod error;
pub use error::{Error, Result};

mod bounds;
pub use bounds::{clamp, Bounds};

mod decibel;
pub use decibel::{db_to_lin, lin_to_db};

mod time;
pub use time::{ms_to_samples, time_constant_coeff};

/// All helpers under one namespace.
pub mod utilities {
    pub use crate::bounds::{clamp, Bounds};
    pub use crate::decibel::{db_to_lin, lin_to_db};
    pub use crate::time::{ms_to_samples, time_constant_coeff};
}

/// Convenient imports for common usage
pub mod prelude {
    pub use crate::utilities::*;
    pub use crate::{Error, Result};
}
