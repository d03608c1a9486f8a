// WebAssembly bindings for the plotunits API
use crate::numeric::{self, Scalar};
use crate::rc::config::Config;
use crate::units::{Sizes, UnitConverter};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct PlotUnitsWasm {}

impl Default for PlotUnitsWasm {
    fn default() -> Self {
        Self::new()
    }
}

fn load_config(config_toml: Option<String>) -> Result<Config, JsValue> {
    match config_toml {
        Some(content) => Config::load_from_str(&content)
            .map_err(|e| JsValue::from_str(&format!("Failed to load config: {}", e))),
        None => Ok(Config::empty()),
    }
}

#[wasm_bindgen]
impl PlotUnitsWasm {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {}
    }

    /// Convert sizes given as JSON (a number, a string, a list of them, or null)
    /// Returns JSON in the same shape
    #[wasm_bindgen]
    pub fn convert(
        &self,
        values_json: &str,
        unit: Option<String>,
        config_toml: Option<String>,
    ) -> Result<String, JsValue> {
        let config = load_config(config_toml)?;
        let unit = unit.unwrap_or_else(|| config.units.default.clone());

        let value: serde_json::Value = serde_json::from_str(values_json)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse values JSON: {}", e)))?;
        let sizes = Sizes::from_json(&value).map_err(|e| JsValue::from_str(&e.to_string()))?;

        let converted = UnitConverter::new(&config.rc)
            .convert(sizes, &unit)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        serde_json::to_string(&converted)
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize result: {}", e)))
    }

    /// Unit table as a JSON object of unit -> size in `unit`
    #[wasm_bindgen]
    pub fn unit_table(
        &self,
        unit: Option<String>,
        config_toml: Option<String>,
    ) -> Result<String, JsValue> {
        let config = load_config(config_toml)?;
        let unit = unit.unwrap_or_else(|| config.units.default.clone());

        let table = UnitConverter::new(&config.rc)
            .table()
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        let scale = table
            .scale(&unit)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        let entries: serde_json::Map<String, serde_json::Value> = table
            .iter()
            .map(|(name, factor)| (name.to_string(), serde_json::json!(factor / scale)))
            .collect();

        serde_json::to_string(&entries)
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize table: {}", e)))
    }

    /// Inclusive range from a JSON array of one to three numbers
    #[wasm_bindgen]
    pub fn arange(&self, args_json: &str) -> Result<String, JsValue> {
        let args: Vec<Scalar> = serde_json::from_str(args_json)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse arguments JSON: {}", e)))?;

        let values = numeric::arange(&args).map_err(|e| JsValue::from_str(&e.to_string()))?;

        serde_json::to_string(&values)
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize range: {}", e)))
    }

    /// Cell edges from a JSON array of cell centres
    #[wasm_bindgen]
    pub fn edges(&self, values_json: &str) -> Result<String, JsValue> {
        let centres: Vec<f64> = serde_json::from_str(values_json)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse values JSON: {}", e)))?;

        let edges = numeric::edges(&centres).map_err(|e| JsValue::from_str(&e.to_string()))?;

        serde_json::to_string(&edges)
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize edges: {}", e)))
    }
}
