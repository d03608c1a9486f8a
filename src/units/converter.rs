use crate::rc::config::RcSettings;
use crate::units::error::{SpecFault, UnitError};
use crate::units::table::UnitTable;
use crate::units::tokenizer::{tokenize, TokenError};
use crate::units::types::{SizeValue, Sizes};

/// Converts size specs into a base unit using the given font and DPI settings
pub struct UnitConverter<'a> {
    settings: &'a RcSettings,
}

impl<'a> UnitConverter<'a> {
    pub fn new(settings: &'a RcSettings) -> Self {
        Self { settings }
    }

    /// The unit table for the current settings
    pub fn table(&self) -> Result<UnitTable, UnitError> {
        UnitTable::build(self.settings)
    }

    /// Convert one size or a list of sizes into `base_unit`.
    ///
    /// Plain numbers are taken to already be in `base_unit` and pass through
    /// unchanged. `None` means "no size" and is returned as is.
    pub fn convert(
        &self,
        value: Option<Sizes<SizeValue>>,
        base_unit: &str,
    ) -> Result<Option<Sizes<f64>>, UnitError> {
        let Some(sizes) = value else {
            return Ok(None);
        };

        let table = self.table()?;
        let scale = table.scale(base_unit)?;

        let converted = sizes.try_map(|size| convert_with(&table, &size, scale))?;
        log::debug!("Converted {} size(s) to '{}'", converted.len(), base_unit);
        Ok(Some(converted))
    }

    /// Convert a single size into `base_unit`
    pub fn convert_one(&self, value: &SizeValue, base_unit: &str) -> Result<f64, UnitError> {
        let table = self.table()?;
        let scale = table.scale(base_unit)?;
        convert_with(&table, value, scale)
    }

    /// Convert a single size spec string into `base_unit`
    pub fn convert_str(&self, spec: &str, base_unit: &str) -> Result<f64, UnitError> {
        self.convert_one(&SizeValue::Spec(spec.to_string()), base_unit)
    }
}

/// Convert `value` with an already built table, `scale` being the inches per
/// base unit
pub(crate) fn convert_with(
    table: &UnitTable,
    value: &SizeValue,
    scale: f64,
) -> Result<f64, UnitError> {
    let spec = match value {
        SizeValue::Number(n) => return Ok(*n),
        SizeValue::Spec(spec) => spec,
    };

    let invalid = |reason| UnitError::InvalidSizeSpec {
        spec: spec.clone(),
        reason,
        expected: format!("<number><unit> with unit one of {}", table.valid_units()),
    };

    let token = tokenize(spec).map_err(|e| match e {
        TokenError::MalformedNumber => invalid(SpecFault::MalformedNumber),
    })?;
    let factor = table
        .get(token.suffix)
        .ok_or_else(|| invalid(SpecFault::UnknownSuffix))?;

    Ok(token.magnitude * factor / scale)
}

/// Convert `value` into `base_unit` with the given settings
pub fn units(
    value: Option<Sizes<SizeValue>>,
    base_unit: &str,
    settings: &RcSettings,
) -> Result<Option<Sizes<f64>>, UnitError> {
    UnitConverter::new(settings).convert(value, base_unit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rc::config::Dpi;
    use approx::assert_relative_eq;

    fn one(spec: &str) -> Option<Sizes<SizeValue>> {
        Some(Sizes::One(SizeValue::from(spec)))
    }

    fn single(result: Option<Sizes<f64>>) -> f64 {
        match result {
            Some(Sizes::One(v)) => v,
            other => panic!("Expected a single value, got {:?}", other),
        }
    }

    #[test]
    fn test_physical_units() {
        let settings = RcSettings::default();
        let converter = UnitConverter::new(&settings);

        assert_eq!(single(converter.convert(one("1in"), "in").unwrap()), 1.0);
        assert_relative_eq!(
            single(converter.convert(one("72pt"), "in").unwrap()),
            1.0,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            single(converter.convert(one("2.54cm"), "in").unwrap()),
            1.0,
            epsilon = 1e-3
        );
        assert_relative_eq!(
            single(converter.convert(one("1ft"), "cm").unwrap()),
            12.0 / 0.3937
        );
        assert_relative_eq!(
            single(converter.convert(one("1m"), "mm").unwrap()),
            1000.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_font_units() {
        let settings = RcSettings::default();
        let converter = UnitConverter::new(&settings);

        assert_relative_eq!(converter.convert_str("1em", "pt").unwrap(), 10.0, epsilon = 1e-9);
        assert_relative_eq!(converter.convert_str("1ex", "pt").unwrap(), 5.0, epsilon = 1e-9);
        assert_relative_eq!(converter.convert_str("1Em", "pt").unwrap(), 12.0, epsilon = 1e-9);
        assert_relative_eq!(converter.convert_str("2Ex", "pt").unwrap(), 12.0, epsilon = 1e-9);
        assert_relative_eq!(converter.convert_str("1Em", "em").unwrap(), 1.2, epsilon = 1e-9);
    }

    #[test]
    fn test_pixel_units() {
        let settings = RcSettings::default();
        let converter = UnitConverter::new(&settings);

        assert_relative_eq!(converter.convert_str("90px", "in").unwrap(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(converter.convert_str("1in", "pp").unwrap(), 300.0, epsilon = 1e-9);
    }

    #[test]
    fn test_zero_dpi_is_an_error() {
        let mut settings = RcSettings::default();
        settings.dpi.figure = Dpi::Value(0.0);
        let converter = UnitConverter::new(&settings);

        // Neither direction may quietly produce inf or 0
        for (spec, unit) in [("1px", "in"), ("1in", "px"), ("1in", "pt")] {
            assert!(matches!(
                converter.convert_str(spec, unit),
                Err(UnitError::InvalidSetting { name: "dpi.figure", .. })
            ));
        }
    }

    #[test]
    fn test_number_passthrough() {
        let settings = RcSettings::default();
        let converter = UnitConverter::new(&settings);

        for unit in ["in", "pt", "cm", "em", "Ex", "px"] {
            let result = converter
                .convert(Some(Sizes::One(SizeValue::from(5))), unit)
                .unwrap();
            assert_eq!(single(result), 5.0);
        }
    }

    #[test]
    fn test_none_passthrough() {
        let settings = RcSettings::default();
        let converter = UnitConverter::new(&settings);

        assert_eq!(converter.convert(None, "in").unwrap(), None);
        // No table lookup happens for a missing size
        assert_eq!(converter.convert(None, "zz").unwrap(), None);
    }

    #[test]
    fn test_sequence_shape() {
        let settings = RcSettings::default();
        let converter = UnitConverter::new(&settings);

        let input = Sizes::Many(vec![
            SizeValue::from("1in"),
            SizeValue::from(3),
            SizeValue::from("36pt"),
        ]);
        let result = converter.convert(Some(input), "in").unwrap().unwrap();
        match result {
            Sizes::Many(values) => {
                assert_eq!(values.len(), 3);
                assert_eq!(values[0], 1.0);
                assert_eq!(values[1], 3.0);
                assert_relative_eq!(values[2], 0.5, epsilon = 1e-12);
            }
            Sizes::One(_) => panic!("Expected a list"),
        }

        let empty = converter.convert(Some(Sizes::Many(vec![])), "in").unwrap();
        assert_eq!(empty, Some(Sizes::Many(vec![])));
    }

    #[test]
    fn test_invalid_size_specs() {
        let settings = RcSettings::default();
        let converter = UnitConverter::new(&settings);

        match converter.convert_str("bogus", "in") {
            Err(UnitError::InvalidSizeSpec { spec, reason, .. }) => {
                assert_eq!(spec, "bogus");
                assert_eq!(reason, SpecFault::MalformedNumber);
            }
            other => panic!("Expected InvalidSizeSpec, got {:?}", other),
        }

        match converter.convert_str("12kg", "in") {
            Err(UnitError::InvalidSizeSpec { reason, expected, .. }) => {
                assert_eq!(reason, SpecFault::UnknownSuffix);
                assert!(expected.contains("in, m, ft"));
            }
            other => panic!("Expected InvalidSizeSpec, got {:?}", other),
        }

        // A bare number string has an empty suffix, which is not a unit
        assert!(converter.convert_str("12", "in").unwrap_err().is_invalid_size_spec());
    }

    #[test]
    fn test_one_bad_item_fails_the_list() {
        let settings = RcSettings::default();
        let converter = UnitConverter::new(&settings);

        let input = Sizes::Many(vec![SizeValue::from("1in"), SizeValue::from("1zz")]);
        assert!(converter
            .convert(Some(input), "in")
            .unwrap_err()
            .is_invalid_size_spec());
    }

    #[test]
    fn test_invalid_base_unit() {
        let settings = RcSettings::default();
        let err = units(one("1in"), "zz", &settings).unwrap_err();
        assert!(err.is_invalid_unit());
        assert!(err.to_string().contains("Valid units are in, m, ft"));
    }

    #[test]
    fn test_base_unit_checked_before_items() {
        let settings = RcSettings::default();
        let err = units(one("bogus"), "zz", &settings).unwrap_err();
        assert!(err.is_invalid_unit());
    }
}
