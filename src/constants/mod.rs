//! Constants module for telescope sizing calculations

use std::f64::consts::PI;

// Astronomical distances
/// Astronomical Unit in meters (per IAU 2012 Resolution B2)
pub const AU_M: f64 = 149_597_870_700.0;
/// Astronomical units per light year
pub const LY_AU: f64 = 63_241.0;
/// Astronomical units per parsec
pub const PC_AU: f64 = 206_264.8;
/// Light year in meters
pub const LY_M: f64 = AU_M * LY_AU;
/// Parsec in meters
pub const PC_M: f64 = AU_M * PC_AU;
/// International inch in meters
pub const INCH_M: f64 = 0.0254;

// Angles
/// Degrees to radians conversion factor
pub const DEG2RAD: f64 = PI / 180.0;
/// Radians to degrees conversion factor
pub const RAD2DEG: f64 = 180.0 / PI;
/// Arcminutes per degree
pub const AMIN_PER_DEG: f64 = 60.0;
/// Arcseconds per degree
pub const ASEC_PER_DEG: f64 = 3_600.0;
/// Milliarcseconds per degree
pub const MAS_PER_DEG: f64 = 3_600_000.0;
/// Microarcseconds per degree
pub const UAS_PER_DEG: f64 = 3_600_000_000.0;

// Optics
/// Rayleigh criterion coefficient: theta = 1.22 * lambda / D for the first
/// minimum of the Airy diffraction pattern of a circular aperture
pub const RAYLEIGH_COEFF: f64 = 1.22;
