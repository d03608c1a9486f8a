// Flexible size units: "1in", "72pt", "1.2em", or plain numbers in a base unit

pub mod converter;
pub mod error;
pub mod processor;
pub mod table;
pub mod tokenizer;
pub mod types;


pub use converter::{units, UnitConverter};
pub use error::{SpecFault, UnitError};
pub use processor::SizeProcessor;
pub use table::UnitTable;
pub use tokenizer::{looks_like_size_spec, tokenize, SizeToken, TokenError};
pub use types::{SizeValue, Sizes};
