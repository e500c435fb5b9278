//! Unit conversion layer for distance and angle quantities
//!
//! Conversions are routed through a canonical unit per category (meters for
//! distance, degrees for angle) as a single multiply-then-divide, so any two
//! recognized units convert exactly to floating-point precision with no
//! accumulated chaining error.
//!
//! The scale tables are process-wide immutable constants, initialized once
//! and never mutated, so the conversion functions are safe to call from any
//! number of threads without synchronization.

use std::collections::HashMap;
use std::fmt;

use lazy_static::lazy_static;
use log::debug;

use crate::constants::{
    AMIN_PER_DEG, ASEC_PER_DEG, AU_M, INCH_M, LY_M, MAS_PER_DEG, PC_M, RAD2DEG, UAS_PER_DEG,
};
use crate::{Result, TelescopiumError};

/// Distance unit symbols paired with their scale in meters per unit
const DISTANCE_SCALE_PAIRS: [(&str, f64); 10] = [
    ("m", 1.0),
    ("cm", 1e-2),
    ("mm", 1e-3),
    ("um", 1e-6),
    ("nm", 1e-9),
    ("km", 1e3),
    ("inch", INCH_M),
    ("au", AU_M),
    ("ly", LY_M),
    ("pc", PC_M),
];

/// Angle unit symbols paired with their scale in degrees per unit.
/// `amin`/`arcmin`/`am`/`MOA` are synonyms, as are `asec`/`arcsec`/`as`.
const ANGLE_SCALE_PAIRS: [(&str, f64); 11] = [
    ("deg", 1.0),
    ("amin", 1.0 / AMIN_PER_DEG),
    ("arcmin", 1.0 / AMIN_PER_DEG),
    ("am", 1.0 / AMIN_PER_DEG),
    ("MOA", 1.0 / AMIN_PER_DEG),
    ("asec", 1.0 / ASEC_PER_DEG),
    ("arcsec", 1.0 / ASEC_PER_DEG),
    ("as", 1.0 / ASEC_PER_DEG),
    ("mas", 1.0 / MAS_PER_DEG),
    ("uas", 1.0 / UAS_PER_DEG),
    ("rad", RAD2DEG),
];

lazy_static! {
    /// Map from distance unit symbols to meters per unit
    static ref DISTANCE_SCALE_M: HashMap<&'static str, f64> = {
        let mut m = HashMap::new();
        for &(symbol, scale) in DISTANCE_SCALE_PAIRS.iter() {
            m.insert(symbol, scale);
        }
        m
    };

    /// Map from angle unit symbols to degrees per unit
    static ref ANGLE_SCALE_DEG: HashMap<&'static str, f64> = {
        let mut m = HashMap::new();
        for &(symbol, scale) in ANGLE_SCALE_PAIRS.iter() {
            m.insert(symbol, scale);
        }
        m
    };
}

/// The physical category a quantity and its unit belong to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitCategory {
    Distance,
    Angle,
}

impl UnitCategory {
    /// Look up a unit symbol in this category's scale table, returning the
    /// table's canonical `&'static str` for the symbol and its scale factor
    fn lookup(&self, symbol: &str) -> Result<(&'static str, f64)> {
        let table: &HashMap<&'static str, f64> = match self {
            UnitCategory::Distance => &DISTANCE_SCALE_M,
            UnitCategory::Angle => &ANGLE_SCALE_DEG,
        };
        match table.get_key_value(symbol) {
            Some((&unit, &scale)) => Ok((unit, scale)),
            None => Err(TelescopiumError::UnknownUnit {
                category: *self,
                symbol: symbol.to_string(),
            }),
        }
    }
}

impl fmt::Display for UnitCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitCategory::Distance => write!(f, "distance"),
            UnitCategory::Angle => write!(f, "angle"),
        }
    }
}

/// A scalar value tagged with a recognized unit symbol and its category
///
/// Construction goes through [`Quantity::distance`] or [`Quantity::angle`],
/// which validate the symbol against the category's scale table, so a
/// `Quantity` always carries a recognized unit. The category tag prevents
/// accidentally feeding an angle where a distance is expected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quantity {
    pub value: f64,
    pub unit: &'static str,
    pub category: UnitCategory,
}

impl Quantity {
    /// Create a distance quantity, e.g. `Quantity::distance(600000000.0, "km")`
    pub fn distance(value: f64, unit: &str) -> Result<Self> {
        let (unit, _) = UnitCategory::Distance.lookup(unit)?;
        Ok(Self {
            value,
            unit,
            category: UnitCategory::Distance,
        })
    }

    /// Create an angle quantity, e.g. `Quantity::angle(1.5, "arcsec")`
    pub fn angle(value: f64, unit: &str) -> Result<Self> {
        let (unit, _) = UnitCategory::Angle.lookup(unit)?;
        Ok(Self {
            value,
            unit,
            category: UnitCategory::Angle,
        })
    }

    /// Convert this quantity to another unit of the same category
    pub fn convert_to(&self, unit: &str) -> Result<Quantity> {
        match self.category {
            UnitCategory::Distance => convert_distance(self.value, self.unit, unit),
            UnitCategory::Angle => convert_angle(self.value, self.unit, unit),
        }
    }

    /// The numeric value of this quantity expressed in `unit`
    pub fn value_in(&self, unit: &str) -> Result<f64> {
        Ok(self.convert_to(unit)?.value)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}

/// Convert a distance value between two recognized unit symbols
///
/// The result is `value * scale(from) / scale(to)` with meter as the
/// canonical unit. Fails with `UnknownUnit` when either symbol is outside
/// the recognized set (`m`, `cm`, `mm`, `um`, `nm`, `km`, `inch`, `au`,
/// `ly`, `pc`).
pub fn convert_distance(value: f64, from: &str, to: &str) -> Result<Quantity> {
    let (_, from_scale) = UnitCategory::Distance.lookup(from)?;
    let (to_unit, to_scale) = UnitCategory::Distance.lookup(to)?;
    let converted = value * from_scale / to_scale;
    debug!("convert_distance: {} {} -> {} {}", value, from, converted, to);
    Ok(Quantity {
        value: converted,
        unit: to_unit,
        category: UnitCategory::Distance,
    })
}

/// Convert an angle value between two recognized unit symbols
///
/// The result is `value * scale(from) / scale(to)` with degree as the
/// canonical unit. Recognized symbols are `deg`, `amin`/`arcmin`/`am`/`MOA`,
/// `asec`/`arcsec`/`as`, `mas`, `uas` and `rad`; synonyms share one scale
/// value, so converting through any of them is exactly equivalent.
pub fn convert_angle(value: f64, from: &str, to: &str) -> Result<Quantity> {
    let (_, from_scale) = UnitCategory::Angle.lookup(from)?;
    let (to_unit, to_scale) = UnitCategory::Angle.lookup(to)?;
    let converted = value * from_scale / to_scale;
    debug!("convert_angle: {} {} -> {} {}", value, from, converted, to);
    Ok(Quantity {
        value: converted,
        unit: to_unit,
        category: UnitCategory::Angle,
    })
}
