use thiserror::Error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

#[derive(Debug, Error)]
pub enum DomError {
    #[error("no window")]
    NoWindow,
    #[error("no document")]
    NoDocument,
    #[error("missing element `{0}`")]
    MissingElement(&'static str),
    #[error("element `{0}` has an unexpected type")]
    WrongType(&'static str),
    #[error("js error: {0}")]
    Js(String),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        DomError::Js(format!("{:?}", value))
    }
}

#[inline]
pub fn window() -> Result<web::Window, DomError> {
    web::window().ok_or(DomError::NoWindow)
}

#[inline]
pub fn document() -> Result<web::Document, DomError> {
    window()?.document().ok_or(DomError::NoDocument)
}

pub fn element_by_id<T: JsCast>(document: &web::Document, id: &'static str) -> Result<T, DomError> {
    document
        .get_element_by_id(id)
        .ok_or(DomError::MissingElement(id))?
        .dyn_into::<T>()
        .map_err(|_| DomError::WrongType(id))
}

pub fn query<T: JsCast>(document: &web::Document, selector: &'static str) -> Result<T, DomError> {
    document
        .query_selector(selector)?
        .ok_or(DomError::MissingElement(selector))?
        .dyn_into::<T>()
        .map_err(|_| DomError::WrongType(selector))
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    } else {
        log::warn!("no #{} to wire a click handler to", element_id);
    }
}

/// Resolves once the document finished parsing.
pub async fn dom_ready(document: &web::Document) {
    let state = js_sys::Reflect::get(document, &JsValue::from_str("readyState"))
        .ok()
        .and_then(|v| v.as_string());
    if state.as_deref() != Some("loading") {
        return;
    }
    let ready = js_sys::Promise::new(&mut |resolve, _reject| {
        _ = document.add_event_listener_with_callback("DOMContentLoaded", &resolve);
    });
    _ = JsFuture::from(ready).await;
}

/// Resolves after `ms` milliseconds.
pub async fn delay(ms: u32) {
    let timeout = js_sys::Promise::new(&mut |resolve, _reject| {
        if let Some(w) = web::window() {
            _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms as i32);
        }
    });
    _ = JsFuture::from(timeout).await;
}
