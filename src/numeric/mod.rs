pub mod arange;
pub mod edges;
pub mod error;

pub use arange::{arange, arange_float, arange_int, RangeValues, Scalar};
pub use edges::{edges, edges_2d, Axis};
pub use error::NumericError;
