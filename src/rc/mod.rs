pub mod config;
pub mod fonts;

pub use config::*;
pub use fonts::{font_scaling, resolve_title_size};
