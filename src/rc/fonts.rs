use crate::rc::config::{FontConfig, FontSize};
use crate::units::error::UnitError;

/// Relative font size keywords and their multipliers of the base font size
const FONT_SCALINGS: &[(&str, f64)] = &[
    ("xx-small", 0.579),
    ("x-small", 0.694),
    ("small", 0.833),
    ("medium", 1.0),
    ("large", 1.2),
    ("x-large", 1.44),
    ("xx-large", 1.728),
    ("larger", 1.2),
    ("smaller", 0.833),
];

/// Look up the multiplier for a font scale keyword
pub fn font_scaling(keyword: &str) -> Option<f64> {
    FONT_SCALINGS
        .iter()
        .find(|(name, _)| *name == keyword)
        .map(|(_, scale)| *scale)
}

pub fn font_scale_keywords() -> impl Iterator<Item = &'static str> {
    FONT_SCALINGS.iter().map(|(name, _)| *name)
}

/// Title font size in points, resolving scale keywords against the base size
pub fn resolve_title_size(font: &FontConfig) -> Result<f64, UnitError> {
    match &font.title_size {
        FontSize::Points(points) => Ok(*points),
        FontSize::Named(keyword) => font_scaling(keyword)
            .map(|scale| scale * font.size)
            .ok_or_else(|| UnitError::UnknownFontScale {
                keyword: keyword.clone(),
                valid: font_scale_keywords().collect::<Vec<_>>().join(", "),
            }),
    }
}
