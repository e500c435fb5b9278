//! Diffraction-limited telescope sizing and angular-size geometry
//!
//! The three public operations here are different solutions of the same
//! Rayleigh criterion `theta = 1.22 * lambda / D`:
//!
//! - [`required_aperture`] solves for the aperture D,
//! - [`telescope_resolution`] solves for the angle theta,
//! - [`resolvable_object_size`] inverts the angular-size geometry to
//!   recover a linear object size from theta.
//!
//! All inputs are normalized to meters and radians through the unit layer
//! before computing, and results are converted back to the caller's
//! requested units. Every operation either returns a fully valid result or
//! an error; no partially computed value escapes.

use log::debug;

use crate::constants::RAYLEIGH_COEFF;
use crate::units::{convert_angle, convert_distance, Quantity, UnitCategory};
use crate::{Result, TelescopiumError};

/// Gross shape of an observed object, selecting the angular-size formula
///
/// `Flat` suits extended objects seen in projection (nebulae, gas clouds);
/// `Spherical` suits planets and stars. `Undefined` is a sentinel carried
/// over from callers that do not know the shape.
///
/// Note: the geometry functions treat every shape other than `Flat` as
/// `Spherical`, including `Undefined`. This fallback is deliberate for
/// numerical compatibility with existing results; callers that consider an
/// undefined shape an error should reject it before calling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ObjectShape {
    Undefined = -1,
    Flat = 1,
    Spherical = 2,
}

/// Display name for a shape variant
pub fn shape_display_name(shape: ObjectShape) -> &'static str {
    match shape {
        ObjectShape::Undefined => "UNDEFINED",
        ObjectShape::Flat => "FLAT",
        ObjectShape::Spherical => "SPHERICAL",
    }
}

/// Numeric code for a shape variant (-1, 1, 2)
pub fn shape_numeric_code(shape: ObjectShape) -> i32 {
    shape as i32
}

fn expect_category(q: &Quantity, want: UnitCategory, what: &str) -> Result<()> {
    if q.category != want {
        return Err(TelescopiumError::InvalidArgument(format!(
            "{} must be a {} quantity, got {}",
            what, want, q.category
        )));
    }
    Ok(())
}

fn expect_finite(value: f64, what: &str) -> Result<f64> {
    if !value.is_finite() {
        return Err(TelescopiumError::InvalidArgument(format!(
            "{} is not finite (check that inputs are geometrically consistent)",
            what
        )));
    }
    Ok(value)
}

/// Angular extent in radians of an object of linear size `size_m` seen from
/// `dist_m` away:
///
/// ```text
/// FLAT:      delta = 2 * atan(size / (2 * distance))
/// otherwise: delta = 2 * asin(size / (2 * distance))
/// ```
///
/// The arcsine form measures across the near limb of a sphere; it requires
/// `size <= 2 * distance`, and violating that yields an error rather than a
/// NaN result.
fn angular_size_rad(size_m: f64, dist_m: f64, shape: ObjectShape) -> Result<f64> {
    if dist_m == 0.0 {
        return Err(TelescopiumError::InvalidArgument(
            "object distance must be non-zero".to_string(),
        ));
    }
    let ratio = size_m / (dist_m + dist_m);
    let angle = match shape {
        ObjectShape::Flat => 2.0 * ratio.atan(),
        _ => 2.0 * ratio.asin(),
    };
    expect_finite(angle, "angular size")
}

/// Inverse of [`angular_size_rad`]: the linear size in meters subtending
/// `angle_rad` at `dist_m`
fn linear_size_m(angle_rad: f64, dist_m: f64, shape: ObjectShape) -> Result<f64> {
    if dist_m == 0.0 {
        return Err(TelescopiumError::InvalidArgument(
            "object distance must be non-zero".to_string(),
        ));
    }
    let half = angle_rad * 0.5;
    let size = match shape {
        ObjectShape::Flat => half.tan() * (2.0 * dist_m),
        _ => half.sin() * (2.0 * dist_m),
    };
    expect_finite(size, "object size")
}

/// Rayleigh criterion solved for the remaining unknown. The relation
/// `theta = 1.22 * lambda / D` is symmetric in theta and D, so one helper
/// serves both directions: pass an aperture to get an angle, or an angle to
/// get an aperture. All arguments in meters/radians.
fn rayleigh_solve(wavelength_m: f64, known: f64, known_what: &str) -> Result<f64> {
    if known == 0.0 {
        return Err(TelescopiumError::InvalidArgument(format!(
            "{} must be non-zero",
            known_what
        )));
    }
    expect_finite(RAYLEIGH_COEFF * wavelength_m / known, "Rayleigh solution")
}

/// Compute the telescope aperture needed to image an object across a given
/// number of pixels, plus the object's whole-disk angular size in arcsec
///
/// The object's angular extent is divided into `pixel_count` resolution
/// elements; the aperture is sized so its Rayleigh limit at `wavelength`
/// matches one element. Returns `(aperture in output_unit, angular size in
/// arcsec)`.
///
/// Fails with `InvalidArgument` for a zero pixel count, zero distance, or a
/// zero per-pixel angular size (which would demand an infinite aperture),
/// and with `UnknownUnit` for unrecognized unit symbols.
pub fn required_aperture(
    object_size: &Quantity,
    object_distance: &Quantity,
    shape: ObjectShape,
    pixel_count: u32,
    wavelength: &Quantity,
    output_unit: &str,
) -> Result<(Quantity, Quantity)> {
    expect_category(object_size, UnitCategory::Distance, "object size")?;
    expect_category(object_distance, UnitCategory::Distance, "object distance")?;
    expect_category(wavelength, UnitCategory::Distance, "wavelength")?;
    if pixel_count == 0 {
        return Err(TelescopiumError::InvalidArgument(
            "pixel count must be at least 1".to_string(),
        ));
    }

    let size_m = object_size.value_in("m")?;
    let dist_m = object_distance.value_in("m")?;
    let size_per_pixel_m = size_m / pixel_count as f64;

    let whole_angle_rad = angular_size_rad(size_m, dist_m, shape)?;
    let pixel_angle_rad = angular_size_rad(size_per_pixel_m, dist_m, shape)?;

    let wavelength_m = wavelength.value_in("m")?;
    let aperture_m = rayleigh_solve(wavelength_m, pixel_angle_rad, "per-pixel angular size")?;
    debug!(
        "required_aperture: {} across {} px -> {} rad/px, D = {} m",
        object_size, pixel_count, pixel_angle_rad, aperture_m
    );

    let aperture = convert_distance(aperture_m, "m", output_unit)?;
    let angular_size = convert_angle(whole_angle_rad, "rad", "arcsec")?;
    Ok((aperture, angular_size))
}

/// Compute the total object size that spans `pixel_count` pixels when each
/// pixel covers `angular_resolution` at `object_distance`
///
/// This is the inverse of [`required_aperture`]'s geometry: the per-pixel
/// angle is turned back into a per-pixel linear size and scaled up by the
/// pixel count. A zero angular resolution is valid and yields a zero size.
pub fn resolvable_object_size(
    object_distance: &Quantity,
    size_unit: &str,
    angular_resolution: &Quantity,
    shape: ObjectShape,
    pixel_count: u32,
) -> Result<Quantity> {
    expect_category(object_distance, UnitCategory::Distance, "object distance")?;
    expect_category(angular_resolution, UnitCategory::Angle, "angular resolution")?;
    if pixel_count == 0 {
        return Err(TelescopiumError::InvalidArgument(
            "pixel count must be at least 1".to_string(),
        ));
    }

    let dist_m = object_distance.value_in("m")?;
    let angle_rad = angular_resolution.value_in("rad")?;

    let size_m = linear_size_m(angle_rad, dist_m, shape)? * pixel_count as f64;
    debug!(
        "resolvable_object_size: {} at {} over {} px -> {} m",
        angular_resolution, object_distance, pixel_count, size_m
    );

    convert_distance(size_m, "m", size_unit)
}

/// Compute the diffraction-limited angular resolution of an aperture at a
/// given wavelength, in the requested angle unit
pub fn telescope_resolution(
    aperture: &Quantity,
    wavelength: &Quantity,
    resolution_unit: &str,
) -> Result<Quantity> {
    expect_category(aperture, UnitCategory::Distance, "aperture")?;
    expect_category(wavelength, UnitCategory::Distance, "wavelength")?;

    let aperture_m = aperture.value_in("m")?;
    let wavelength_m = wavelength.value_in("m")?;

    let theta_rad = rayleigh_solve(wavelength_m, aperture_m, "aperture")?;
    debug!(
        "telescope_resolution: D = {}, lambda = {} -> {} rad",
        aperture, wavelength, theta_rad
    );

    convert_angle(theta_rad, "rad", resolution_unit)
}
