use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;

use dioxus::prelude::*;
use stream_core::{resolve_connector, AnchorRegistry, AnchorToken, ConnectorPath, ConnectorRequest};

use crate::interop::{overlay_origin, DomAnchor};

/// DOM id of the page root; connector overlays are positioned against it.
pub const PAGE_ROOT_ID: &str = "stream-page";

/// State shared by every stream view on the page.
#[derive(Clone)]
pub struct ViewerContext {
    anchors: Rc<RefCell<AnchorRegistry<DomAnchor>>>,
    /// Bumped whenever card geometry may have moved: resize, scroll, fresh
    /// snapshots, cards mounting or unmounting. Connectors subscribe to it.
    pub layout_tick: Signal<u64>,
    /// Causation stream names seen per displayed stream.
    pub causation_streams: Signal<BTreeMap<String, BTreeSet<String>>>,
}

impl ViewerContext {
    pub fn new(
        layout_tick: Signal<u64>,
        causation_streams: Signal<BTreeMap<String, BTreeSet<String>>>,
    ) -> Self {
        Self {
            anchors: Rc::new(RefCell::new(AnchorRegistry::new())),
            layout_tick,
            causation_streams,
        }
    }

    /// Does not invalidate layout: called while the card renders, before its
    /// element exists. The card invalidates once mounted.
    pub fn register_anchor(&self, global_position: i64, anchor: DomAnchor) -> AnchorToken {
        self.anchors.borrow_mut().register(global_position, anchor)
    }

    pub fn deregister_anchor(&self, global_position: i64, token: AnchorToken) {
        if self.anchors.borrow_mut().deregister(global_position, token) {
            self.invalidate();
        }
    }

    /// Route `request` against current geometry, relative to the page root.
    pub fn route(&self, request: &ConnectorRequest) -> Option<ConnectorPath> {
        route_in_root(&self.anchors.borrow(), request, PAGE_ROOT_ID)
    }

    pub fn invalidate(&self) {
        // May run from drop hooks while the page itself is tearing down.
        let mut layout_tick = self.layout_tick;
        if let Ok(mut tick) = layout_tick.try_write() {
            *tick = tick.wrapping_add(1);
        };
    }

    pub fn record_causation_streams(&self, stream_name: &str, names: BTreeSet<String>) {
        let mut causation_streams = self.causation_streams;
        let unchanged = causation_streams.peek().get(stream_name) == Some(&names);
        if unchanged {
            return;
        }
        if let Ok(mut streams) = causation_streams.try_write() {
            streams.insert(stream_name.to_string(), names);
        };
    }

    pub fn forget_stream(&self, stream_name: &str) {
        let mut causation_streams = self.causation_streams;
        if let Ok(mut streams) = causation_streams.try_write() {
            streams.remove(stream_name);
        };
    }
}

/// Route `request` in the coordinate space of overlays positioned inside the
/// element `root_id`, which may itself be scrolled.
pub fn route_in_root(
    anchors: &AnchorRegistry<DomAnchor>,
    request: &ConnectorRequest,
    root_id: &str,
) -> Option<ConnectorPath> {
    let origin = overlay_origin(root_id)?;
    resolve_connector(anchors, request, origin)
}
