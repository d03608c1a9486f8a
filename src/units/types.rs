use crate::units::error::{SpecFault, UnitError};
use serde::{Deserialize, Serialize};

/// A single size: a plain number in the base unit, or a `<number><unit>` string
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum SizeValue {
    Number(f64),
    Spec(String),
}

impl From<f64> for SizeValue {
    fn from(value: f64) -> Self {
        SizeValue::Number(value)
    }
}

impl From<i32> for SizeValue {
    fn from(value: i32) -> Self {
        SizeValue::Number(f64::from(value))
    }
}

impl From<&str> for SizeValue {
    fn from(value: &str) -> Self {
        SizeValue::Spec(value.to_string())
    }
}

impl From<String> for SizeValue {
    fn from(value: String) -> Self {
        SizeValue::Spec(value)
    }
}

impl TryFrom<&toml::Value> for SizeValue {
    type Error = UnitError;

    fn try_from(value: &toml::Value) -> Result<Self, Self::Error> {
        match value {
            toml::Value::Float(f) => Ok(SizeValue::Number(*f)),
            toml::Value::Integer(i) => Ok(SizeValue::Number(*i as f64)),
            toml::Value::String(s) => Ok(SizeValue::Spec(s.clone())),
            other => Err(unsupported(other.to_string())),
        }
    }
}

impl TryFrom<&serde_json::Value> for SizeValue {
    type Error = UnitError;

    fn try_from(value: &serde_json::Value) -> Result<Self, Self::Error> {
        match value {
            serde_json::Value::Number(n) => n
                .as_f64()
                .map(SizeValue::Number)
                .ok_or_else(|| unsupported(n.to_string())),
            serde_json::Value::String(s) => Ok(SizeValue::Spec(s.clone())),
            other => Err(unsupported(other.to_string())),
        }
    }
}

fn unsupported(spec: String) -> UnitError {
    UnitError::InvalidSizeSpec {
        spec,
        reason: SpecFault::UnsupportedType,
        expected: "a number or a <number><unit> string".to_string(),
    }
}

/// One value or an ordered list of values; conversion keeps the shape
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum Sizes<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> Sizes<T> {
    pub fn len(&self) -> usize {
        match self {
            Sizes::One(_) => 1,
            Sizes::Many(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn try_map<U, E, F>(self, mut f: F) -> Result<Sizes<U>, E>
    where
        F: FnMut(T) -> Result<U, E>,
    {
        match self {
            Sizes::One(item) => Ok(Sizes::One(f(item)?)),
            Sizes::Many(items) => items
                .into_iter()
                .map(f)
                .collect::<Result<Vec<_>, E>>()
                .map(Sizes::Many),
        }
    }

    pub fn into_vec(self) -> Vec<T> {
        match self {
            Sizes::One(item) => vec![item],
            Sizes::Many(items) => items,
        }
    }

    pub fn as_one(&self) -> Option<&T> {
        match self {
            Sizes::One(item) => Some(item),
            Sizes::Many(_) => None,
        }
    }
}

impl Sizes<SizeValue> {
    /// Build from a TOML value: arrays become `Many`, anything else `One`
    pub fn from_toml(value: &toml::Value) -> Result<Self, UnitError> {
        match value {
            toml::Value::Array(items) => items
                .iter()
                .map(SizeValue::try_from)
                .collect::<Result<Vec<_>, _>>()
                .map(Sizes::Many),
            other => SizeValue::try_from(other).map(Sizes::One),
        }
    }

    /// Build from a JSON value; `null` means no size was given
    pub fn from_json(value: &serde_json::Value) -> Result<Option<Self>, UnitError> {
        match value {
            serde_json::Value::Null => Ok(None),
            serde_json::Value::Array(items) => items
                .iter()
                .map(SizeValue::try_from)
                .collect::<Result<Vec<_>, _>>()
                .map(|items| Some(Sizes::Many(items))),
            other => SizeValue::try_from(other).map(|v| Some(Sizes::One(v))),
        }
    }
}
