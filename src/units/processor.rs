use crate::rc::config::RcSettings;
use crate::units::converter::convert_with;
use crate::units::error::UnitError;
use crate::units::table::UnitTable;
use crate::units::tokenizer::looks_like_size_spec;
use crate::units::types::SizeValue;
use std::collections::HashMap;
use toml::{map::Map, Value};

/// Rewrites size spec strings inside TOML values as numbers in one base unit
pub struct SizeProcessor {
    table: UnitTable,
    base_unit: String,
    scale: f64,
}

impl SizeProcessor {
    /// Fails if the settings can't produce a unit table or `base_unit` isn't in it
    pub fn new(settings: &RcSettings, base_unit: &str) -> Result<Self, UnitError> {
        let table = UnitTable::build(settings)?;
        let scale = table.scale(base_unit)?;
        Ok(Self {
            table,
            base_unit: base_unit.to_string(),
            scale,
        })
    }

    pub fn base_unit(&self) -> &str {
        &self.base_unit
    }

    /// Process a TOML Value, converting any size strings found.
    /// Strings that look like sizes but don't convert are kept with a warning.
    pub fn process_value(&self, value: &Value) -> Value {
        match value {
            Value::String(s) => match self.convert_string(s) {
                Some(converted) => Value::Float(converted),
                None => value.clone(),
            },
            Value::Array(arr) => Value::Array(arr.iter().map(|v| self.process_value(v)).collect()),
            Value::Table(table) => Value::Table(self.process_table(table)),
            _ => value.clone(),
        }
    }

    /// Process a HashMap of TOML values, keeping converted originals under
    /// `_<key>_original`
    pub fn process_map(&self, values: &HashMap<String, Value>) -> HashMap<String, Value> {
        let mut processed = HashMap::new();

        for (key, value) in values {
            let processed_value = self.process_value(value);
            if let (Value::String(s), Value::Float(_)) = (value, &processed_value) {
                processed.insert(original_key(key), Value::String(s.clone()));
            }
            processed.insert(key.clone(), processed_value);
        }

        processed
    }

    fn process_table(&self, table: &Map<String, Value>) -> Map<String, Value> {
        let mut processed = Map::new();

        for (key, value) in table {
            let processed_value = self.process_value(value);
            if let (Value::String(s), Value::Float(_)) = (value, &processed_value) {
                processed.insert(original_key(key), Value::String(s.clone()));
            }
            processed.insert(key.clone(), processed_value);
        }

        processed
    }

    fn convert_string(&self, s: &str) -> Option<f64> {
        if !looks_like_size_spec(s) {
            return None;
        }

        match convert_with(&self.table, &SizeValue::Spec(s.to_string()), self.scale) {
            Ok(converted) => Some(converted),
            Err(e) => {
                log::warn!("Keeping '{}' unconverted: {}", s, e);
                None
            }
        }
    }
}

fn original_key(key: &str) -> String {
    format!("_{}_original", key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn processor(unit: &str) -> SizeProcessor {
        SizeProcessor::new(&RcSettings::default(), unit).unwrap()
    }

    #[test]
    fn test_process_simple_size_string() {
        let result = processor("pt").process_value(&Value::String("1in".to_string()));
        match result {
            Value::Float(v) => assert_relative_eq!(v, 72.0, epsilon = 1e-9),
            other => panic!("Expected Float, got {:?}", other),
        }
    }

    #[test]
    fn test_process_non_size_string() {
        let result = processor("in").process_value(&Value::String("not a size".to_string()));
        assert!(matches!(result, Value::String(s) if s == "not a size"));
    }

    #[test]
    fn test_unknown_suffix_kept() {
        let result = processor("in").process_value(&Value::String("100bar".to_string()));
        assert!(matches!(result, Value::String(s) if s == "100bar"));
    }

    #[test]
    fn test_process_array() {
        let value = Value::Array(vec![
            Value::String("2in".to_string()),
            Value::String("label".to_string()),
            Value::Integer(42),
        ]);

        let result = processor("in").process_value(&value);
        assert_eq!(
            result,
            Value::Array(vec![
                Value::Float(2.0),
                Value::String("label".to_string()),
                Value::Integer(42),
            ])
        );
    }

    #[test]
    fn test_process_table() {
        let mut inner = Map::new();
        inner.insert("pad".to_string(), Value::String("1em".to_string()));

        let mut table = Map::new();
        table.insert("width".to_string(), Value::String("36pt".to_string()));
        table.insert("name".to_string(), Value::String("panel".to_string()));
        table.insert("spacing".to_string(), Value::Table(inner));

        let result = processor("in").process_value(&Value::Table(table));
        let Value::Table(t) = result else {
            panic!("Expected Table");
        };

        assert_relative_eq!(t["width"].as_float().unwrap(), 0.5, epsilon = 1e-12);
        assert_eq!(t["_width_original"].as_str(), Some("36pt"));
        assert_eq!(t["name"].as_str(), Some("panel"));
        assert!(!t.contains_key("_name_original"));

        let spacing = t["spacing"].as_table().unwrap();
        assert_relative_eq!(spacing["pad"].as_float().unwrap(), 10.0 / 72.0, epsilon = 1e-12);
        assert_eq!(spacing["_pad_original"].as_str(), Some("1em"));
    }

    #[test]
    fn test_process_map() {
        let mut values = HashMap::new();
        values.insert("height".to_string(), Value::String("2.54cm".to_string()));
        values.insert("count".to_string(), Value::Integer(3));

        let processed = processor("cm").process_map(&values);
        assert_relative_eq!(processed["height"].as_float().unwrap(), 2.54, epsilon = 1e-12);
        assert_eq!(processed["_height_original"].as_str(), Some("2.54cm"));
        assert_eq!(processed["count"], Value::Integer(3));
        assert_eq!(processed.len(), 3);
    }

    #[test]
    fn test_invalid_base_unit() {
        let result = SizeProcessor::new(&RcSettings::default(), "furlong");
        assert!(matches!(result, Err(UnitError::InvalidUnit { .. })));
    }
}
