//! Browser-only checks for the DOM helpers. Run with `wasm-pack test --headless --chrome`.

#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;

use stream_core::{
    connector_ends, route_connector, AnchorGeometry, AnchorRegistry, ConnectorRequest, Rect,
};
use stream_viewer::interop::{
    element_rect, overlay_origin, push_query_param, query_values, DomAnchor, WindowListener,
};
use stream_viewer::page::effects::read_stream_names;
use stream_viewer::page::route_in_root;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn append_div(parent: &web_sys::Element, id: &str, style: &str) -> web_sys::Element {
    let document = web_sys::window().unwrap().document().unwrap();
    let element = document.create_element("div").unwrap();
    element.set_id(id);
    element.set_attribute("style", style).unwrap();
    parent.append_child(&element).unwrap();
    element
}

fn append_box(id: &str, style: &str) -> web_sys::Element {
    let body = web_sys::window().unwrap().document().unwrap().body().unwrap();
    append_div(&body, id, style)
}

fn anchor(element_id: &str) -> DomAnchor {
    DomAnchor {
        element_id: element_id.to_string(),
    }
}

fn cross_stream_request() -> ConnectorRequest {
    ConnectorRequest {
        source: 9001,
        target: 9002,
        ends: connector_ends(false),
    }
}

/// Positioned, scrollable root at (50, 30) with a 4px border. Its content is
/// far larger than the box; two cards sit at fixed content coordinates.
fn scrollable_root(root_id: &str) -> web_sys::Element {
    let root = append_box(
        root_id,
        "position: absolute; left: 50px; top: 30px; width: 300px; height: 200px; \
         overflow: auto; border: 4px solid black; padding: 0; margin: 0;",
    );
    append_div(
        &root,
        &format!("{root_id}-spacer"),
        "position: absolute; left: 0; top: 0; width: 2000px; height: 1000px;",
    );
    append_div(
        &root,
        &format!("{root_id}-source"),
        "position: absolute; left: 500px; top: 40px; width: 100px; height: 40px;",
    );
    append_div(
        &root,
        &format!("{root_id}-target"),
        "position: absolute; left: 700px; top: 200px; width: 100px; height: 40px;",
    );
    root
}

fn root_registry(root_id: &str) -> AnchorRegistry<DomAnchor> {
    let mut registry = AnchorRegistry::new();
    registry.register(9001, anchor(&format!("{root_id}-source")));
    registry.register(9002, anchor(&format!("{root_id}-target")));
    registry
}

/// The path an overlay inside the root must draw, whatever the scroll.
fn content_path(request: &ConnectorRequest) -> String {
    route_connector(
        Rect::new(500.0, 40.0, 100.0, 40.0),
        Rect::new(700.0, 200.0, 100.0, 40.0),
        request.ends,
    )
    .unwrap()
    .svg_d()
}

#[wasm_bindgen_test]
fn test_route_in_unscrolled_root() {
    let root = scrollable_root("route-root-still");
    let registry = root_registry("route-root-still");
    let request = cross_stream_request();

    let origin = overlay_origin("route-root-still").unwrap();
    assert_eq!(origin.x, 54.0);
    assert_eq!(origin.y, 34.0);

    let path = route_in_root(&registry, &request, "route-root-still").unwrap();
    assert_eq!(path.svg_d(), content_path(&request));

    root.remove();
}

#[wasm_bindgen_test]
fn test_route_in_scrolled_root_follows_content() {
    let root = scrollable_root("route-root-scrolled");
    let registry = root_registry("route-root-scrolled");
    let request = cross_stream_request();

    root.set_scroll_left(400);
    root.set_scroll_top(100);
    assert_eq!(root.scroll_left(), 400);
    assert_eq!(root.scroll_top(), 100);

    // The card moved on screen with the content.
    let source = element_rect("route-root-scrolled-source").unwrap();
    assert_eq!(source.left, 54.0 + 500.0 - 400.0);
    assert_eq!(source.top, 34.0 + 40.0 - 100.0);

    let path = route_in_root(&registry, &request, "route-root-scrolled").unwrap();
    assert_eq!(path.start.x, 500.0 + 50.0 + 10.0);
    assert_eq!(path.start.y, 40.0 + 40.0);
    assert_eq!(path.svg_d(), content_path(&request));

    root.remove();
}

#[wasm_bindgen_test]
fn test_element_rect_missing_element() {
    assert!(element_rect("message-does-not-exist").is_none());
    assert!(overlay_origin("message-does-not-exist").is_none());
}

#[wasm_bindgen_test]
fn test_dom_anchor_reports_laid_out_rect() {
    let element = append_box(
        "message-4242",
        "position: absolute; left: 10px; top: 20px; width: 100px; height: 40px;",
    );

    let mut registry = AnchorRegistry::new();
    registry.register(4242, anchor("message-4242"));
    let rect = registry.rect(4242).expect("anchor should be laid out");
    assert_eq!(rect.width, 100.0);
    assert_eq!(rect.height, 40.0);

    element.remove();
    assert!(anchor("message-4242").rect().is_none());
}

#[wasm_bindgen_test]
fn test_hidden_anchor_is_not_laid_out() {
    let element = append_box("message-4343", "display: none;");

    let mut registry = AnchorRegistry::new();
    registry.register(4343, anchor("message-4343"));
    assert!(registry.rect(4343).is_none());

    element.remove();
}

#[wasm_bindgen_test]
fn test_push_query_param_round_trip() {
    push_query_param("streamNames", "orders,shipping").unwrap();
    assert_eq!(
        query_values("streamNames"),
        vec!["orders,shipping".to_string()]
    );
    assert_eq!(read_stream_names("streamNames"), vec!["orders", "shipping"]);

    push_query_param("streamNames", "").unwrap();
    assert!(query_values("streamNames").is_empty());
    assert!(read_stream_names("streamNames").is_empty());
}

#[wasm_bindgen_test]
fn test_window_listener_removed_on_drop() {
    let window = web_sys::window().unwrap();
    let hits = Rc::new(Cell::new(0));

    let listener = {
        let hits = hits.clone();
        WindowListener::new("stream-viewer-test", false, move |_| {
            hits.set(hits.get() + 1)
        })
        .unwrap()
    };
    let event = web_sys::Event::new("stream-viewer-test").unwrap();
    window.dispatch_event(&event).unwrap();
    assert_eq!(hits.get(), 1);

    drop(listener);
    let event = web_sys::Event::new("stream-viewer-test").unwrap();
    window.dispatch_event(&event).unwrap();
    assert_eq!(hits.get(), 1);
}
