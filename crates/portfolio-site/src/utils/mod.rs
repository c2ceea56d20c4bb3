#[cfg(target_arch = "wasm32")]
pub mod debounce;
pub mod format;
pub mod validation;
