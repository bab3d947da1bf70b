use dioxus::prelude::*;
use stream_core::ConnectorRequest;

use crate::page::ViewerContext;

pub const ARROWHEAD_ID: &str = "causation-arrowhead";

/// Shared arrowhead marker, rendered once per page.
#[component]
pub fn ArrowheadDefs() -> Element {
    rsx! {
        svg {
            class: "causation-defs",
            width: "0",
            height: "0",
            defs {
                marker {
                    id: "{ARROWHEAD_ID}",
                    "viewBox": "0 0 10 10",
                    "refX": "9",
                    "refY": "5",
                    "markerWidth": "6",
                    "markerHeight": "6",
                    "orient": "auto",
                    path { d: "M 0 0 L 10 5 L 0 10 z", fill: "#1f2937" }
                }
            }
        }
    }
}

/// Arrow from the causing message's card to the caused one.
///
/// Re-routed from live geometry on every layout tick. Draws nothing while
/// either card is missing or not laid out yet.
#[component]
pub fn CausationConnector(request: ConnectorRequest) -> Element {
    let ctx = use_context::<ViewerContext>();
    let _tick = (ctx.layout_tick)();

    let Some(path) = ctx.route(&request) else {
        return rsx! {};
    };
    let d = path.svg_d();
    let target_side = request.ends.target.side.as_str();

    rsx! {
        svg {
            class: "causation-connector",
            "data-source": "{request.source}",
            "data-target-side": "{target_side}",
            path {
                d: "{d}",
                fill: "none",
                stroke: "#1f2937",
                stroke_width: "2",
                "marker-end": "url(#{ARROWHEAD_ID})",
            }
        }
    }
}
