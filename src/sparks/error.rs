use wasm_bindgen::JsValue;

/// Reasons the spark cursor stays inactive.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum SparkError {
    #[error("viewport is {width}px wide, sparks need at least {min}px")]
    ViewportTooNarrow { width: f64, min: f64 },

    #[error("no browser window")]
    NoWindow,

    #[error("window did not report its size")]
    NoViewport,

    #[error("spark canvas is not mounted")]
    NoCanvas,

    #[error("canvas has no 2d context")]
    NoContext,

    #[error("browser call failed: {0}")]
    Js(String),
}

impl SparkError {
    pub fn js(value: JsValue) -> Self {
        SparkError::Js(format!("{:?}", value))
    }
}
