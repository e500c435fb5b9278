//! Telescopium: telescope sizing and diffraction-limited resolution calculations
//!
//! This crate answers optical sizing questions for astronomical observation:
//! how large a telescope aperture is needed to resolve an object of a known
//! physical size at a known distance with a given number of pixels across it,
//! what angular resolution a given aperture achieves at a given wavelength,
//! and what object size a given angular resolution corresponds to at a given
//! distance.
//!
//! All calculations are pure functions over [`units::Quantity`] values. The
//! three optics operations share the Rayleigh criterion `theta = 1.22 * λ / D`
//! solved for different unknowns, so their results are mutually consistent.
//!
//! # Example
//!
//! ```rust
//! use telescopium::optics::{self, ObjectShape};
//! use telescopium::units::Quantity;
//!
//! // Aperture needed to image Jupiter at 100 pixels across in green light
//! let (aperture, angular_size) = optics::required_aperture(
//!     &Quantity::distance(139822.0, "km")?,
//!     &Quantity::distance(600000000.0, "km")?,
//!     ObjectShape::Spherical,
//!     100,
//!     &Quantity::distance(522.0, "nm")?,
//!     "mm",
//! )?;
//! assert!(aperture.value > 0.0);
//! assert_eq!(angular_size.unit, "arcsec");
//! # Ok::<(), telescopium::TelescopiumError>(())
//! ```

use thiserror::Error;

pub mod constants;
pub mod optics;
pub mod units;

// Re-export commonly used types
pub use optics::ObjectShape;
pub use units::{Quantity, UnitCategory};

/// Main error type for the telescopium library
#[derive(Debug, Error)]
pub enum TelescopiumError {
    /// A unit symbol outside the recognized set for its category
    #[error("Unknown {category} unit symbol: {symbol:?}")]
    UnknownUnit {
        category: UnitCategory,
        symbol: String,
    },

    /// A mathematically degenerate input (zero divisor, domain violation, ...)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result type for telescopium operations
pub type Result<T> = std::result::Result<T, TelescopiumError>;
