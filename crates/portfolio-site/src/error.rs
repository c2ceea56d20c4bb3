use thiserror::Error;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("DOM error: {0}")]
    Dom(String),

    #[error("Storage error for key {key}: {reason}")]
    Storage { key: String, reason: String },

    #[error("Invalid site config: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Missing browser global: {0}")]
    MissingGlobal(&'static str),
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for SiteError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        let message = value
            .as_string()
            .or_else(|| {
                value
                    .dyn_ref::<js_sys::Error>()
                    .map(|e| String::from(e.message()))
            })
            .unwrap_or_else(|| format!("{:?}", value));
        SiteError::Dom(message)
    }
}

#[cfg(target_arch = "wasm32")]
impl From<SiteError> for wasm_bindgen::JsValue {
    fn from(value: SiteError) -> Self {
        wasm_bindgen::JsValue::from_str(&value.to_string())
    }
}
