use stream_core::{AnchorGeometry, Point, Rect, Size};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Event, UrlSearchParams};

/// Get the browser viewport dimensions
pub fn viewport_size() -> Option<Size> {
    let window = web_sys::window()?;
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;

    if width > 0.0 && height > 0.0 {
        return Some(Size::new(width, height));
    }

    let root = window.document()?.document_element()?;
    Some(Size::new(
        root.client_width().max(0) as f64,
        root.client_height().max(0) as f64,
    ))
}

/// Viewport-relative box of the element with `id`, if it is in the document.
pub fn element_rect(id: &str) -> Option<Rect> {
    let document = web_sys::window()?.document()?;
    let element = document.get_element_by_id(id)?;
    let rect = element.get_bounding_client_rect();
    Some(Rect::new(rect.left(), rect.top(), rect.width(), rect.height()))
}

/// Viewport position of the coordinate origin for absolutely positioned
/// children of the element with `id`: the top-left of its padding box,
/// moved by its scroll offset so the origin follows the scrolled content.
pub fn overlay_origin(id: &str) -> Option<Point> {
    let document = web_sys::window()?.document()?;
    let element = document.get_element_by_id(id)?;
    let rect = element.get_bounding_client_rect();
    Some(Point::new(
        rect.left() + f64::from(element.client_left()) - f64::from(element.scroll_left()),
        rect.top() + f64::from(element.client_top()) - f64::from(element.scroll_top()),
    ))
}

/// Every value of `param` in the current location's query string.
pub fn query_values(param: &str) -> Vec<String> {
    let Some(search) = web_sys::window().and_then(|w| w.location().search().ok()) else {
        return Vec::new();
    };
    let Ok(params) = UrlSearchParams::new_with_str(&search) else {
        return Vec::new();
    };
    params
        .get_all(param)
        .iter()
        .filter_map(|value| value.as_string())
        .collect()
}

/// Push a history entry with `param` set to `value` (removed when empty),
/// keeping the rest of the query string and the fragment.
pub fn push_query_param(param: &str, value: &str) -> Option<()> {
    let window = web_sys::window()?;
    let location = window.location();
    let params = UrlSearchParams::new_with_str(&location.search().ok()?).ok()?;
    if value.is_empty() {
        params.delete(param);
    } else {
        params.set(param, value);
    }

    let query = String::from(params.to_string());
    let mut url = location.pathname().ok()?;
    if !query.is_empty() {
        url.push('?');
        url.push_str(&query);
    }
    url.push_str(&location.hash().unwrap_or_default());

    window
        .history()
        .ok()?
        .push_state_with_url(&JsValue::NULL, "", Some(&url))
        .ok()
}

/// A window event listener that is removed when dropped.
pub struct WindowListener {
    event: &'static str,
    capture: bool,
    callback: Closure<dyn FnMut(Event)>,
}

impl WindowListener {
    /// `capture` also catches events that do not bubble, such as scrolls of
    /// nested containers.
    pub fn new<F>(event: &'static str, capture: bool, handler: F) -> Option<Self>
    where
        F: FnMut(Event) + 'static,
    {
        let window = web_sys::window()?;
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        window
            .add_event_listener_with_callback_and_bool(
                event,
                callback.as_ref().unchecked_ref(),
                capture,
            )
            .ok()?;

        Some(Self {
            event,
            capture,
            callback,
        })
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            let _ = window.remove_event_listener_with_callback_and_bool(
                self.event,
                self.callback.as_ref().unchecked_ref(),
                self.capture,
            );
        }
    }
}

/// Registry handle for a mounted message card: its DOM id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomAnchor {
    pub element_id: String,
}

impl AnchorGeometry for DomAnchor {
    fn rect(&self) -> Option<Rect> {
        element_rect(&self.element_id)
    }
}
