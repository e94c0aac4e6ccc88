//! Lookups into the server-rendered page

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element};

/// Errors raised while binding to the page
#[derive(Debug, Error)]
pub enum PageError {
    #[error("document is not available")]
    NoDocument,

    #[error("element #{0} not found")]
    MissingElement(String),

    #[error("element {0} has an unexpected type")]
    WrongElementType(String),

    #[error("JavaScript error: {0}")]
    Js(String),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl From<JsValue> for PageError {
    fn from(value: JsValue) -> Self {
        PageError::Js(js_error_message(&value))
    }
}

/// Best-effort text of a thrown JavaScript value
pub fn js_error_message(value: &JsValue) -> String {
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

/// Find an element by id and cast it to the expected element type
pub fn element_by_id<T: JsCast>(document: &Document, id: &str) -> Result<T, PageError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| PageError::MissingElement(id.to_string()))?
        .dyn_into::<T>()
        .map_err(|_| PageError::WrongElementType(format!("#{}", id)))
}

/// Find a descendant matching `selector` and cast it to the expected type
pub fn query_within<T: JsCast>(parent: &Element, selector: &str) -> Result<T, PageError> {
    parent
        .query_selector(selector)?
        .ok_or_else(|| PageError::MissingElement(selector.to_string()))?
        .dyn_into::<T>()
        .map_err(|_| PageError::WrongElementType(selector.to_string()))
}
