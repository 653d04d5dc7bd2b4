use super::geometry::Viewport;
use dioxus::logger::tracing::warn;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ViewportError {
    #[error("no browser window")]
    NoWindow,
    #[error("window {0} is not readable")]
    Unreadable(&'static str),
}

pub fn current_viewport() -> Result<Viewport, ViewportError> {
    let window = web_sys::window().ok_or(ViewportError::NoWindow)?;
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .ok_or(ViewportError::Unreadable("innerWidth"))?;
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .ok_or(ViewportError::Unreadable("innerHeight"))?;
    Ok(Viewport::new(width, height))
}

/// The live viewport, or `fallback` when the browser cannot tell us.
pub fn viewport_or(fallback: Viewport) -> Viewport {
    current_viewport().unwrap_or_else(|err| {
        warn!("{err}; placing blocks in {}x{}", fallback.width, fallback.height);
        fallback
    })
}
