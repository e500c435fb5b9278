//! End-to-end scenario tests exercising the public API the way the
//! demonstration driver does

use approx::assert_relative_eq;

use telescopium::optics::{self, ObjectShape};
use telescopium::units::{convert_angle, convert_distance, Quantity};
use telescopium::TelescopiumError;

#[test]
fn jupiter_at_100_pixels() {
    let size = Quantity::distance(139822.0, "km").unwrap();
    let distance = Quantity::distance(600000000.0, "km").unwrap();
    let wavelength = Quantity::distance(522.0, "nm").unwrap();

    let (aperture, angular_size) = optics::required_aperture(
        &size,
        &distance,
        ObjectShape::Spherical,
        100,
        &wavelength,
        "mm",
    )
    .unwrap();

    assert!(aperture.value > 0.0 && aperture.value.is_finite());
    assert_eq!(aperture.unit, "mm");

    // Whole-disk angular size from first principles
    let expected_rad = 2.0 * (139822.0e3_f64 / (2.0 * 600000000.0e3)).asin();
    let expected_arcsec = convert_angle(expected_rad, "rad", "arcsec").unwrap().value;
    assert_eq!(angular_size.unit, "arcsec");
    assert_relative_eq!(angular_size.value, expected_arcsec, max_relative = 1e-12);

    // And the aperture from the per-pixel angle
    let pixel_rad = 2.0 * (139822.0e3_f64 / 100.0 / (2.0 * 600000000.0e3)).asin();
    let expected_aperture_mm = 1.22 * 522.0e-9 / pixel_rad * 1000.0;
    assert_relative_eq!(aperture.value, expected_aperture_mm, max_relative = 1e-12);
}

#[test]
fn earth_from_one_au_needs_a_modest_aperture() {
    let (aperture, angular_size) = optics::required_aperture(
        &Quantity::distance(2.0 * 6371.0, "km").unwrap(),
        &Quantity::distance(1.0, "au").unwrap(),
        ObjectShape::Spherical,
        100,
        &Quantity::distance(522.0, "nm").unwrap(),
        "mm",
    )
    .unwrap();

    // Earth at 1 au subtends about 17.6 arcsec; a hundredth of that per
    // pixel needs an aperture in the high-hundreds-of-millimeters range
    assert_relative_eq!(angular_size.value, 17.57, max_relative = 1e-2);
    assert!(aperture.value > 100.0, "aperture {} mm", aperture.value);
    assert!(aperture.value < 10000.0, "aperture {} mm", aperture.value);
}

#[test]
fn single_pixel_exoplanet_detection() {
    // Earth-sized planet at 30 pc, one pixel, 1 um light: the solar gravity
    // lens mission scale. The answer is tens of kilometers of aperture.
    let (aperture, _) = optics::required_aperture(
        &Quantity::distance(2.0 * 6371.0, "km").unwrap(),
        &Quantity::distance(30.0, "pc").unwrap(),
        ObjectShape::Spherical,
        1,
        &Quantity::distance(1.0, "um").unwrap(),
        "km",
    )
    .unwrap();

    assert_eq!(aperture.unit, "km");
    assert!(aperture.value > 10.0 && aperture.value < 1000.0);
}

#[test]
fn tennis_ball_on_the_moon() {
    let (aperture, angular_size) = optics::required_aperture(
        &Quantity::distance(6.86, "cm").unwrap(),
        &Quantity::distance(384400.0, "km").unwrap(),
        ObjectShape::Spherical,
        100,
        &Quantity::distance(1.3, "mm").unwrap(),
        "km",
    )
    .unwrap();

    assert!(aperture.value > 0.0 && aperture.value.is_finite());
    assert!(angular_size.value > 0.0);
}

#[test]
fn rayleigh_relation_is_consistent_across_operations() {
    // For a grid of apertures and wavelengths: resolution -> object size at
    // some distance -> required aperture for one pixel recovers the aperture
    let distance = Quantity::distance(1.0, "au").unwrap();
    for (d_value, d_unit) in [(5.0, "inch"), (203.2, "mm"), (2.4, "m"), (1.0, "km")] {
        for (w_value, w_unit) in [(522.0, "nm"), (1.0, "um"), (1.3, "mm")] {
            let aperture = Quantity::distance(d_value, d_unit).unwrap();
            let wavelength = Quantity::distance(w_value, w_unit).unwrap();

            let theta = optics::telescope_resolution(&aperture, &wavelength, "rad").unwrap();
            let object = optics::resolvable_object_size(
                &distance,
                "m",
                &theta,
                ObjectShape::Spherical,
                1,
            )
            .unwrap();
            let (recovered, _) = optics::required_aperture(
                &object,
                &distance,
                ObjectShape::Spherical,
                1,
                &wavelength,
                d_unit,
            )
            .unwrap();

            assert_relative_eq!(recovered.value, d_value, max_relative = 1e-9);
        }
    }
}

#[test]
fn flat_and_spherical_inverses_agree_with_forward_geometry() {
    // resolvable_object_size is the exact inverse of the angular-size step
    // in required_aperture for both shape formulas
    for shape in [ObjectShape::Flat, ObjectShape::Spherical] {
        let distance = Quantity::distance(384400.0, "km").unwrap();
        let wavelength = Quantity::distance(522.0, "nm").unwrap();
        let original = Quantity::distance(100.0, "m").unwrap();

        let (aperture, _) =
            optics::required_aperture(&original, &distance, shape, 50, &wavelength, "m").unwrap();
        let theta = optics::telescope_resolution(&aperture, &wavelength, "rad").unwrap();
        let recovered =
            optics::resolvable_object_size(&distance, "m", &theta, shape, 50).unwrap();

        assert_relative_eq!(recovered.value, 100.0, max_relative = 1e-9);
    }
}

#[test]
fn unknown_units_surface_as_errors_not_sentinels() {
    assert!(matches!(
        Quantity::distance(1.0, "furlong"),
        Err(TelescopiumError::UnknownUnit { .. })
    ));

    let err = optics::required_aperture(
        &Quantity::distance(1.0, "m").unwrap(),
        &Quantity::distance(1.0, "km").unwrap(),
        ObjectShape::Spherical,
        10,
        &Quantity::distance(522.0, "nm").unwrap(),
        "cubit",
    );
    assert!(matches!(err, Err(TelescopiumError::UnknownUnit { .. })));
}

#[test]
fn degenerate_inputs_fail_atomically() {
    let size = Quantity::distance(1.0, "m").unwrap();
    let wavelength = Quantity::distance(522.0, "nm").unwrap();

    let err = optics::required_aperture(
        &size,
        &Quantity::distance(0.0, "m").unwrap(),
        ObjectShape::Spherical,
        100,
        &wavelength,
        "mm",
    );
    assert!(matches!(err, Err(TelescopiumError::InvalidArgument(_))));

    let err = optics::required_aperture(
        &size,
        &Quantity::distance(1.0, "km").unwrap(),
        ObjectShape::Spherical,
        0,
        &wavelength,
        "mm",
    );
    assert!(matches!(err, Err(TelescopiumError::InvalidArgument(_))));
}

#[test]
fn conversions_round_trip_through_extreme_scales() {
    // nm -> pc -> nm spans about 25 orders of magnitude
    let out = convert_distance(1.0, "nm", "pc").unwrap();
    let back = convert_distance(out.value, "pc", "nm").unwrap();
    assert_relative_eq!(back.value, 1.0, max_relative = 1e-12);

    let out = convert_angle(1.0, "uas", "rad").unwrap();
    let back = convert_angle(out.value, "rad", "uas").unwrap();
    assert_relative_eq!(back.value, 1.0, max_relative = 1e-12);
}
