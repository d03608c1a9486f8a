pub mod numeric;
pub mod rc;
pub mod units;

#[cfg(target_arch = "wasm32")]
pub mod wasm;
