//! Core of the message stream viewer
//!
//! Platform-independent pieces shared by the Dioxus front end:
//! - message model and snapshot replacement
//! - stream-name parsing for the page's query state
//! - anchor registry and causation-connector geometry
//! - popup placement
//! - the cancellable per-stream poll loop
//!
//! Nothing here touches the DOM, so everything is testable natively.

pub mod anchors;
pub mod connector;
pub mod error;
pub mod geometry;
pub mod message;
pub mod polling;
pub mod popup;
pub mod snapshot;
pub mod streams;

pub use anchors::{AnchorGeometry, AnchorRegistry, AnchorToken};
pub use connector::{
    connector_ends, resolve_connector, route_connector, AnchorOffset, AnchorSide, AnchorSpec,
    ConnectorEnds, ConnectorPath, ConnectorRequest,
};
pub use error::FetchError;
pub use geometry::{Point, Rect, Size};
pub use message::{
    anchor_dom_id, detail_rows, display_time, CausationReference, DetailRow, Message, MessageData,
};
pub use polling::{run_poll_loop, PollHandle, StreamSource, StreamState};
pub use popup::{
    place_popup, Align, Placement, PopupOffset, PreferredPlacement, ResolvedPopup, Side,
    DETAIL_POPUP_OFFSET,
};
pub use snapshot::{StreamEntry, StreamSnapshot};
pub use streams::{
    add_stream_names, causation_candidates, diff_stream_names, join_stream_names,
    parse_stream_names, remove_stream_name, StreamDiff, STREAM_NAMES_PARAM,
};
