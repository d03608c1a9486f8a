use crate::rc::config::RcSettings;
use crate::rc::fonts::resolve_title_size;
use crate::units::error::UnitError;

/// Physical units, in inches per unit
const PHYSICAL_UNITS: &[(&str, f64)] = &[
    ("in", 1.0),
    ("m", 39.37),
    ("ft", 12.0),
    ("cm", 0.3937),
    ("mm", 0.03937),
    ("pt", 1.0 / 72.0),
];

/// Ordered mapping from unit suffix to inches per unit.
///
/// Font-relative and pixel entries depend on the settings the table was built
/// from, so callers build a fresh table for every conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct UnitTable {
    entries: Vec<(&'static str, f64)>,
}

impl UnitTable {
    pub fn build(settings: &RcSettings) -> Result<Self, UnitError> {
        let small = positive("font.size", settings.font.size)?;
        let large = positive("font.title_size", resolve_title_size(&settings.font)?)?;

        let mut entries: Vec<(&'static str, f64)> = PHYSICAL_UNITS.to_vec();
        entries.extend([
            ("em", small / 72.0),
            ("ex", 0.5 * small / 72.0),
            ("Em", large / 72.0),
            ("Ex", 0.5 * large / 72.0),
        ]);

        // Symbolic resolutions can't be expressed as a length
        if let Some(dpi) = settings.dpi.figure.as_number() {
            entries.push(("px", 1.0 / positive("dpi.figure", dpi)?));
        }
        if let Some(dpi) = settings.dpi.savefig.as_number() {
            entries.push(("pp", 1.0 / positive("dpi.savefig", dpi)?));
        }

        log::debug!(
            "Built unit table with {} units (font {}pt, title {}pt)",
            entries.len(),
            small,
            large
        );

        Ok(Self { entries })
    }

    pub fn get(&self, unit: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(name, _)| *name == unit)
            .map(|(_, factor)| *factor)
    }

    pub fn contains(&self, unit: &str) -> bool {
        self.get(unit).is_some()
    }

    /// Inches per `unit`, or `InvalidUnit` naming every valid key
    pub fn scale(&self, unit: &str) -> Result<f64, UnitError> {
        self.get(unit).ok_or_else(|| UnitError::InvalidUnit {
            unit: unit.to_string(),
            valid: self.valid_units(),
        })
    }

    pub fn units(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(name, _)| *name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Comma separated unit keys, in table order
    pub fn valid_units(&self) -> String {
        self.units().collect::<Vec<_>>().join(", ")
    }
}

/// Sizes and resolutions are divisors or scales; zero, negative or
/// non-finite values would produce meaningless factors
fn positive(name: &'static str, value: f64) -> Result<f64, UnitError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(UnitError::InvalidSetting { name, value })
    }
}
