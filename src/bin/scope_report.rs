//! Scenario report: how big a telescope is needed to resolve various objects
//!
//! Prints a set of classic sizing scenarios (Jupiter from Earth, Earth from
//! several distances, a tennis ball on the Moon) plus the resolution of a few
//! common amateur apertures. Illustrates the library API; the output format
//! is not a stable surface.

use clap::Parser;

use telescopium::optics::{self, shape_display_name, ObjectShape};
use telescopium::units::{convert_distance, Quantity};

#[derive(Parser)]
#[command(name = "scope_report", about = "Telescope sizing scenario report")]
struct Args {
    /// Only run scenarios whose name contains this substring (case-insensitive)
    #[arg(short, long)]
    filter: Option<String>,
}

struct Scenario {
    name: &'static str,
    /// Object diameter with unit symbol
    size: (f64, &'static str),
    /// Object distance with unit symbol
    distance: (f64, &'static str),
    shape: ObjectShape,
    pixel_count: u32,
    /// Observing wavelength with unit symbol
    wavelength: (f64, &'static str),
    /// Unit for the reported aperture
    aperture_unit: &'static str,
}

const SCENARIOS: [Scenario; 6] = [
    Scenario {
        name: "Jupiter",
        size: (2.0 * 69911.0, "km"),
        distance: (600000000.0, "km"),
        shape: ObjectShape::Spherical,
        pixel_count: 100,
        wavelength: (522.0, "nm"),
        aperture_unit: "mm",
    },
    Scenario {
        name: "Earth from 1 au",
        size: (2.0 * 6371.0, "km"),
        distance: (1.0, "au"),
        shape: ObjectShape::Spherical,
        pixel_count: 100,
        wavelength: (522.0, "nm"),
        aperture_unit: "mm",
    },
    Scenario {
        name: "Earth from 1 ly",
        size: (2.0 * 6371.0, "km"),
        distance: (1.0, "ly"),
        shape: ObjectShape::Spherical,
        pixel_count: 100,
        wavelength: (522.0, "nm"),
        aperture_unit: "km",
    },
    Scenario {
        // Single-pixel detection of an exoplanet, after Turyshev's solar
        // gravity lens mission study
        name: "Earth from 30 pc",
        size: (2.0 * 6371.0, "km"),
        distance: (30.0, "pc"),
        shape: ObjectShape::Spherical,
        pixel_count: 1,
        wavelength: (1.0, "um"),
        aperture_unit: "km",
    },
    Scenario {
        name: "Earth from M13 (22180 ly)",
        size: (2.0 * 6371.0, "km"),
        distance: (22180.0, "ly"),
        shape: ObjectShape::Spherical,
        pixel_count: 100,
        wavelength: (522.0, "nm"),
        aperture_unit: "km",
    },
    Scenario {
        name: "Tennis ball on the Moon",
        size: (6.86, "cm"),
        distance: (384400.0, "km"),
        shape: ObjectShape::Spherical,
        pixel_count: 100,
        wavelength: (1.3, "mm"),
        aperture_unit: "km",
    },
];

/// Amateur telescope apertures to report diffraction limits for, in inches
const AMATEUR_APERTURES_INCH: [f64; 4] = [5.0, 8.0, 10.0, 16.0];

fn print_scenario(scenario: &Scenario) {
    println!("{}", scenario.name);
    println!(
        "  Diameter: {} {}",
        scenario.size.0, scenario.size.1
    );
    match convert_distance(scenario.distance.0, scenario.distance.1, "au") {
        Ok(dist_au) => println!(
            "  Distance: {} {} / {}",
            scenario.distance.0, scenario.distance.1, dist_au
        ),
        Err(e) => println!("  Distance: {} (conversion failed: {})", scenario.distance.0, e),
    }
    println!("  Shape: {}", shape_display_name(scenario.shape));
    println!("  Expected size on image: {} pixels", scenario.pixel_count);
    println!(
        "  Light wavelength: {} {}",
        scenario.wavelength.0, scenario.wavelength.1
    );

    let result = Quantity::distance(scenario.size.0, scenario.size.1)
        .and_then(|size| {
            let distance = Quantity::distance(scenario.distance.0, scenario.distance.1)?;
            let wavelength = Quantity::distance(scenario.wavelength.0, scenario.wavelength.1)?;
            optics::required_aperture(
                &size,
                &distance,
                scenario.shape,
                scenario.pixel_count,
                &wavelength,
                scenario.aperture_unit,
            )
        });

    match result {
        Ok((aperture, angular_size)) => println!(
            "  Mirror/lens size: {}, object size on sky: {}",
            aperture, angular_size
        ),
        Err(e) => println!("  No valid result: {}", e),
    }
    println!();
}

fn print_amateur_resolutions() {
    println!("Diffraction limits of common apertures at 522 nm:");
    for inches in AMATEUR_APERTURES_INCH {
        let resolution = Quantity::distance(inches, "inch").and_then(|aperture| {
            let wavelength = Quantity::distance(522.0, "nm")?;
            optics::telescope_resolution(&aperture, &wavelength, "arcsec")
        });
        match resolution {
            Ok(theta) => {
                let mm = convert_distance(inches, "inch", "mm")
                    .map(|q| q.value)
                    .unwrap_or(f64::NAN);
                println!("  {}\" ({} mm): {}", inches, mm, theta);
            }
            Err(e) => println!("  {}\": no valid result: {}", inches, e),
        }
    }
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    for scenario in SCENARIOS.iter() {
        if let Some(filter) = &args.filter {
            if !scenario
                .name
                .to_lowercase()
                .contains(&filter.to_lowercase())
            {
                continue;
            }
        }
        print_scenario(scenario);
    }

    if args.filter.is_none() {
        print_amateur_resolutions();
    }
}
