use dioxus::prelude::*;
use dioxus_logger::tracing::debug;
use stream_core::{diff_stream_names, parse_stream_names};

use crate::interop::{query_values, WindowListener};
use crate::page::ViewerContext;

/// Stream names currently in the address bar.
pub fn read_stream_names(param: &str) -> Vec<String> {
    let values = query_values(param);
    parse_stream_names(values.iter().map(String::as_str))
}

/// Redraw connectors whenever anything may have moved on screen. Scroll is
/// captured so scrolling inside a stream row counts too.
pub fn install_layout_listeners(ctx: &ViewerContext) -> Vec<WindowListener> {
    let mut listeners = Vec::new();
    for (event, capture) in [("resize", false), ("orientationchange", false), ("scroll", true)] {
        let ctx = ctx.clone();
        if let Some(listener) = WindowListener::new(event, capture, move |_| ctx.invalidate()) {
            listeners.push(listener);
        }
    }
    listeners
}

/// Back/forward navigation re-reads the stream names from the address.
pub fn install_navigation_listener(
    param: &'static str,
    mut stream_names: Signal<Vec<String>>,
) -> Option<WindowListener> {
    WindowListener::new("popstate", false, move |_| {
        let next = read_stream_names(param);
        log_stream_changes(&stream_names.peek(), &next);
        stream_names.set(next);
    })
}

pub fn log_stream_changes(previous: &[String], next: &[String]) {
    let diff = diff_stream_names(previous, next);
    if diff.is_empty() {
        return;
    }
    debug!(
        "stream views changing (mount={:?}, unmount={:?})",
        diff.mounted, diff.unmounted
    );
}
