//! Unit conversion for length, temperature, area and volume.
//!
//! Length, area and volume go through the SI base unit with a scale factor.
//! Temperature goes through kelvin and is the only quantity that may be
//! negative.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{NumError, NumResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quantity {
    Length,
    Temperature,
    Area,
    Volume,
}

/// Metres per unit.
const LENGTH: &[(&str, f64)] = &[
    ("m", 1.0),
    ("km", 1_000.0),
    ("cm", 0.01),
    ("mm", 0.001),
    ("in", 0.0254),
    ("ft", 0.3048),
    ("yd", 0.9144),
    ("mi", 1_609.344),
];

/// Square metres per unit.
const AREA: &[(&str, f64)] = &[
    ("m2", 1.0),
    ("km2", 1e6),
    ("cm2", 1e-4),
    ("mm2", 1e-6),
    ("in2", 0.000_645_16),
    ("ft2", 0.092_903_04),
    ("yd2", 0.836_127_36),
    ("mi2", 2_589_988.110_336),
];

/// Cubic metres per unit. `pt` is the imperial pint, `floz` the US fluid ounce.
const VOLUME: &[(&str, f64)] = &[
    ("m3", 1.0),
    ("l", 0.001),
    ("ml", 1e-6),
    ("in3", 1.638_706_4e-5),
    ("ft3", 0.028_316_846_592),
    ("gal", 0.003_785_411_784),
    ("pt", 0.000_568_261_25),
    ("floz", 2.957_352_956_25e-5),
];

const TEMPERATURE: &[&str] = &["c", "f", "k", "r"];

impl Quantity {
    pub fn name(self) -> &'static str {
        match self {
            Self::Length => "length",
            Self::Temperature => "temperature",
            Self::Area => "area",
            Self::Volume => "volume",
        }
    }

    /// Accepted unit symbols, lowercase.
    pub fn units(self) -> Vec<&'static str> {
        match self.scale_table() {
            Some(table) => table.iter().map(|(unit, _)| *unit).collect(),
            None => TEMPERATURE.to_vec(),
        }
    }

    fn scale_table(self) -> Option<&'static [(&'static str, f64)]> {
        match self {
            Self::Length => Some(LENGTH),
            Self::Area => Some(AREA),
            Self::Volume => Some(VOLUME),
            Self::Temperature => None,
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn normalize(unit: &str) -> String {
    unit.trim().to_lowercase()
}

fn scale_of(quantity: Quantity, table: &[(&str, f64)], unit: &str) -> NumResult<f64> {
    let key = normalize(unit);
    table
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, scale)| *scale)
        .ok_or_else(|| NumError::UnknownUnit {
            quantity: quantity.name(),
            unit: unit.to_string(),
        })
}

fn to_kelvin(value: f64, unit: &str) -> NumResult<f64> {
    let kelvin = match normalize(unit).as_str() {
        "c" => value + 273.15,
        "f" => (value + 459.67) * 5.0 / 9.0,
        "k" => value,
        "r" => value * 5.0 / 9.0,
        _ => {
            return Err(NumError::UnknownUnit {
                quantity: Quantity::Temperature.name(),
                unit: unit.to_string(),
            })
        }
    };
    if kelvin < 0.0 {
        return Err(NumError::BelowAbsoluteZero(format!("{value} {unit}")));
    }
    Ok(kelvin)
}

fn from_kelvin(kelvin: f64, unit: &str) -> NumResult<f64> {
    match normalize(unit).as_str() {
        "c" => Ok(kelvin - 273.15),
        "f" => Ok(kelvin * 9.0 / 5.0 - 459.67),
        "k" => Ok(kelvin),
        "r" => Ok(kelvin * 9.0 / 5.0),
        _ => Err(NumError::UnknownUnit {
            quantity: Quantity::Temperature.name(),
            unit: unit.to_string(),
        }),
    }
}

/// Convert `value` of `quantity` from unit `from` to unit `to`.
///
/// Unit symbols are matched case-insensitively (see [`Quantity::units`]).
/// Length, area and volume must be non-negative; temperatures must not be
/// below absolute zero.
pub fn convert(quantity: Quantity, value: f64, from: &str, to: &str) -> NumResult<f64> {
    if !value.is_finite() {
        return Err(NumError::NotFinite("value"));
    }

    let Some(table) = quantity.scale_table() else {
        let kelvin = to_kelvin(value, from)?;
        return from_kelvin(kelvin, to);
    };

    if value < 0.0 {
        return Err(NumError::NegativeInput("value"));
    }
    let from_scale = scale_of(quantity, table, from)?;
    let to_scale = scale_of(quantity, table, to)?;
    Ok(value * from_scale / to_scale)
}
