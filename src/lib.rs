//! Quaternion arithmetic.
//!
//! A [`Quaternion`] is a 4-tuple of `f64` components `(r, i, j, k)` standing
//! for `r + i𝐢 + j𝐣 + k𝐤`. All operations are pure: they take quaternions by
//! value or reference and return new values without touching their inputs.
//!
//! ```
//! use quaternion::Quaternion;
//!
//! let x = Quaternion::new(1.0, 2.0, -3.0, -1.0);
//! let y = Quaternion::from_real(0.75);
//!
//! let inv = x.inv();
//! let sum = x + y;
//! let prod = x * y;
//! # let _ = (inv, sum, prod);
//! ```

#[macro_use]
mod macros;

pub mod error;
pub mod quaternion;

pub use error::{QuaternionError, Result};
pub use quaternion::Quaternion;

/// Version of this library, for consumers that need to check compatibility.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
