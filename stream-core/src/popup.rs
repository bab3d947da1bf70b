//! Floating placement for the message detail popup.
//!
//! A pure function of the card's box, the popup's measured size and the
//! viewport. The caller re-runs it whenever any of those change; no layout
//! state is kept between runs.

use crate::geometry::{Point, Rect, Size};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Top,
    Bottom,
    Left,
    Right,
}

impl Side {
    fn opposite(self) -> Side {
        match self {
            Side::Top => Side::Bottom,
            Side::Bottom => Side::Top,
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    fn is_vertical(self) -> bool {
        matches!(self, Side::Top | Side::Bottom)
    }
}

/// Alignment along the edge the popup sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Start,
    Center,
    End,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub side: Side,
    pub align: Align,
}

impl Placement {
    /// Name in the `top-start` style, used as a data attribute for styling.
    pub fn name(&self) -> String {
        let side = match self.side {
            Side::Top => "top",
            Side::Bottom => "bottom",
            Side::Left => "left",
            Side::Right => "right",
        };
        match self.align {
            Align::Start => format!("{side}-start"),
            Align::Center => side.to_string(),
            Align::End => format!("{side}-end"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreferredPlacement {
    /// Pick whichever side has the most room.
    Auto(Align),
    /// Use this placement, flipping to the opposite side if it does not fit.
    Fixed(Placement),
}

/// `skidding` moves along the reference edge, `distance` away from it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PopupOffset {
    pub skidding: f64,
    pub distance: f64,
}

pub const DETAIL_POPUP_OFFSET: PopupOffset = PopupOffset {
    skidding: 5.0,
    distance: 5.0,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedPopup {
    pub placement: Placement,
    /// Top-left corner in viewport coordinates
    pub position: Point,
}

pub fn place_popup(
    reference: Rect,
    popup: Size,
    viewport: Size,
    preferred: PreferredPlacement,
    offset: PopupOffset,
) -> ResolvedPopup {
    let room = |side: Side| -> f64 {
        let available = match side {
            Side::Top => reference.top,
            Side::Bottom => viewport.height - reference.bottom(),
            Side::Left => reference.left,
            Side::Right => viewport.width - reference.right(),
        };
        let needed = if side.is_vertical() {
            popup.height
        } else {
            popup.width
        };
        available - needed - offset.distance
    };

    let placement = match preferred {
        PreferredPlacement::Auto(align) => {
            let mut best = Side::Bottom;
            for side in [Side::Bottom, Side::Right, Side::Top, Side::Left] {
                if room(side) > room(best) {
                    best = side;
                }
            }
            Placement { side: best, align }
        }
        PreferredPlacement::Fixed(placement) => {
            let flipped = placement.side.opposite();
            if room(placement.side) < 0.0 && room(flipped) > room(placement.side) {
                Placement {
                    side: flipped,
                    align: placement.align,
                }
            } else {
                placement
            }
        }
    };

    let along = |start: f64, center: f64, end: f64, length: f64| -> f64 {
        offset.skidding
            + match placement.align {
                Align::Start => start,
                Align::Center => center - length / 2.0,
                Align::End => end - length,
            }
    };

    let raw = match placement.side {
        Side::Bottom => Point::new(
            along(reference.left, reference.center_x(), reference.right(), popup.width),
            reference.bottom() + offset.distance,
        ),
        Side::Top => Point::new(
            along(reference.left, reference.center_x(), reference.right(), popup.width),
            reference.top - offset.distance - popup.height,
        ),
        Side::Right => Point::new(
            reference.right() + offset.distance,
            along(reference.top, reference.center_y(), reference.bottom(), popup.height),
        ),
        Side::Left => Point::new(
            reference.left - offset.distance - popup.width,
            along(reference.top, reference.center_y(), reference.bottom(), popup.height),
        ),
    };

    ResolvedPopup {
        placement,
        position: Point::new(
            clamp_axis(raw.x, popup.width, viewport.width),
            clamp_axis(raw.y, popup.height, viewport.height),
        ),
    }
}

/// Keep `[value, value + length]` inside `[0, limit]`; a popup larger than
/// the viewport pins to the leading edge.
fn clamp_axis(value: f64, length: f64, limit: f64) -> f64 {
    let max = (limit - length).max(0.0);
    value.clamp(0.0, max)
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Size = Size {
        width: 1200.0,
        height: 800.0,
    };

    fn auto_start() -> PreferredPlacement {
        PreferredPlacement::Auto(Align::Start)
    }

    fn inside(resolved: &ResolvedPopup, popup: Size, viewport: Size) -> bool {
        resolved.position.x >= 0.0
            && resolved.position.y >= 0.0
            && resolved.position.x + popup.width <= viewport.width
            && resolved.position.y + popup.height <= viewport.height
    }

    #[test]
    fn test_auto_start_below_card_with_room() {
        let card = Rect::new(100.0, 40.0, 900.0, 60.0);
        let popup = Size::new(300.0, 200.0);
        let resolved = place_popup(card, popup, VIEWPORT, auto_start(), DETAIL_POPUP_OFFSET);

        assert_eq!(resolved.placement.side, Side::Bottom);
        assert_eq!(resolved.placement.name(), "bottom-start");
        assert_eq!(resolved.position, Point::new(105.0, 105.0));
    }

    #[test]
    fn test_auto_picks_top_near_bottom_edge() {
        let card = Rect::new(100.0, 700.0, 900.0, 60.0);
        let popup = Size::new(300.0, 200.0);
        let resolved = place_popup(card, popup, VIEWPORT, auto_start(), DETAIL_POPUP_OFFSET);

        assert_eq!(resolved.placement.side, Side::Top);
        assert_eq!(resolved.position.y, 700.0 - 5.0 - 200.0);
        assert!(inside(&resolved, popup, VIEWPORT));
    }

    #[test]
    fn test_fixed_placement_flips_when_it_does_not_fit() {
        let card = Rect::new(100.0, 700.0, 120.0, 60.0);
        let popup = Size::new(300.0, 200.0);
        let preferred = PreferredPlacement::Fixed(Placement {
            side: Side::Bottom,
            align: Align::Center,
        });
        let resolved = place_popup(card, popup, VIEWPORT, preferred, DETAIL_POPUP_OFFSET);
        assert_eq!(resolved.placement.side, Side::Top);
        assert_eq!(resolved.placement.name(), "top");
    }

    #[test]
    fn test_popup_is_clamped_into_viewport() {
        let popup = Size::new(500.0, 300.0);
        for card in [
            Rect::new(1150.0, 10.0, 40.0, 30.0),
            Rect::new(-60.0, 400.0, 40.0, 30.0),
            Rect::new(600.0, 780.0, 40.0, 30.0),
        ] {
            let resolved = place_popup(card, popup, VIEWPORT, auto_start(), DETAIL_POPUP_OFFSET);
            assert!(inside(&resolved, popup, VIEWPORT), "{card:?} -> {resolved:?}");
        }
    }

    #[test]
    fn test_oversized_popup_pins_to_origin() {
        let card = Rect::new(100.0, 100.0, 40.0, 30.0);
        let popup = Size::new(2000.0, 1000.0);
        let resolved = place_popup(card, popup, VIEWPORT, auto_start(), DETAIL_POPUP_OFFSET);
        assert_eq!(resolved.position, Point::new(0.0, 0.0));
    }
}
