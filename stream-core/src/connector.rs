//! Causation arrows between message cards.
//!
//! A connector runs from the bottom of the causing message's card to the
//! caused message's card. Same-stream pairs share a row, so the arrow ends on
//! the bottom edge and arcs under the row; cross-stream pairs end on the top
//! edge of the lower row. Nothing is cached: every redraw recomputes from
//! the current geometry.

use crate::anchors::{AnchorGeometry, AnchorRegistry};
use crate::geometry::{Point, Rect};
use crate::message::Message;

/// Horizontal bias at the causing end, so arrows sharing a card spread out.
pub const SOURCE_OFFSET: AnchorOffset = AnchorOffset {
    rightness: 10.0,
    bottomness: 0.0,
};

pub const TARGET_OFFSET: AnchorOffset = AnchorOffset {
    rightness: -10.0,
    bottomness: 0.0,
};

/// How far control points reach, as a share of the larger axis distance.
pub const CURVATURE: f64 = 0.45;

/// Lower bound for control point reach so short arrows still bend.
pub const MIN_CONTROL_REACH: f64 = 30.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorSide {
    Top,
    Bottom,
}

impl AnchorSide {
    /// Vertical direction the edge faces (down is positive).
    fn outward(self) -> f64 {
        match self {
            AnchorSide::Top => -1.0,
            AnchorSide::Bottom => 1.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AnchorSide::Top => "top",
            AnchorSide::Bottom => "bottom",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchorOffset {
    pub rightness: f64,
    pub bottomness: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchorSpec {
    pub side: AnchorSide,
    pub offset: AnchorOffset,
}

impl AnchorSpec {
    /// Point on `rect` this spec designates.
    pub fn point(&self, rect: Rect) -> Point {
        let edge_y = match self.side {
            AnchorSide::Top => rect.top,
            AnchorSide::Bottom => rect.bottom(),
        };
        Point::new(
            rect.center_x() + self.offset.rightness,
            edge_y + self.offset.bottomness,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConnectorEnds {
    pub source: AnchorSpec,
    pub target: AnchorSpec,
}

/// Anchor sides for an arrow from the causing message into `message`.
pub fn connector_ends(same_stream: bool) -> ConnectorEnds {
    ConnectorEnds {
        source: AnchorSpec {
            side: AnchorSide::Bottom,
            offset: SOURCE_OFFSET,
        },
        target: AnchorSpec {
            side: if same_stream {
                AnchorSide::Bottom
            } else {
                AnchorSide::Top
            },
            offset: TARGET_OFFSET,
        },
    }
}

/// Everything needed to draw one message's causation arrow.
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectorRequest {
    /// Global position of the causing message
    pub source: i64,
    /// Global position of the caused message
    pub target: i64,
    pub ends: ConnectorEnds,
}

impl ConnectorRequest {
    pub fn for_message(message: &Message) -> Option<Self> {
        let cause = message.causation()?;
        Some(Self {
            source: cause.global_position,
            target: message.global_position,
            ends: connector_ends(cause.same_stream_as(message)),
        })
    }
}

/// Cubic Bézier from the source anchor to the target anchor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConnectorPath {
    pub start: Point,
    pub control_start: Point,
    pub control_end: Point,
    pub end: Point,
}

impl ConnectorPath {
    /// `d` attribute for an SVG `<path>`.
    pub fn svg_d(&self) -> String {
        format!(
            "M {:.1} {:.1} C {:.1} {:.1}, {:.1} {:.1}, {:.1} {:.1}",
            self.start.x,
            self.start.y,
            self.control_start.x,
            self.control_start.y,
            self.control_end.x,
            self.control_end.y,
            self.end.x,
            self.end.y,
        )
    }
}

/// Route between two boxes. `None` when either box has not been laid out,
/// which would otherwise produce a degenerate line to the origin.
pub fn route_connector(source: Rect, target: Rect, ends: ConnectorEnds) -> Option<ConnectorPath> {
    if !source.is_laid_out() || !target.is_laid_out() {
        return None;
    }

    let start = ends.source.point(source);
    let end = ends.target.point(target);
    let span = (end.x - start.x).abs().max((end.y - start.y).abs());
    let reach = (span * CURVATURE).max(MIN_CONTROL_REACH);

    Some(ConnectorPath {
        start,
        control_start: Point::new(start.x, start.y + ends.source.side.outward() * reach),
        control_end: Point::new(end.x, end.y + ends.target.side.outward() * reach),
        end,
    })
}

/// Look both endpoints up and route between them, in coordinates relative
/// to `origin` (the overlay's top-left corner). Any missing or unlaid
/// endpoint means nothing is drawn.
pub fn resolve_connector<H: AnchorGeometry>(
    registry: &AnchorRegistry<H>,
    request: &ConnectorRequest,
    origin: Point,
) -> Option<ConnectorPath> {
    let source = registry.rect(request.source)?.relative_to(origin);
    let target = registry.rect(request.target)?.relative_to(origin);
    route_connector(source, target, request.ends)
}
