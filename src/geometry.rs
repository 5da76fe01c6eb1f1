//! Viewport geometry for the highlight box and tooltip placement.

/// Gap between the pointer and the tooltip, in CSS pixels.
pub const TOOLTIP_OFFSET: f64 = 16.0;

/// Minimum distance kept between the tooltip and the viewport edges.
pub const VIEWPORT_INSET: f64 = 10.0;

/// Size assumed for a tooltip that has not been laid out yet.
pub const FALLBACK_TOOLTIP_SIZE: Size = Size {
    width: 300.0,
    height: 200.0,
};

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// An axis-aligned rectangle, as returned by `getBoundingClientRect`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Shift a viewport-relative rect into document coordinates.
    pub fn offset(self, scroll: Point) -> Self {
        Self {
            x: self.x + scroll.x,
            y: self.y + scroll.y,
            ..self
        }
    }
}

/// Top-left corner for a tooltip next to the pointer.
///
/// The tooltip sits [`TOOLTIP_OFFSET`] below-right of the pointer. On each
/// axis where that would run past the viewport (less [`VIEWPORT_INSET`]) it
/// flips to the other side of the pointer. Finally both coordinates are
/// clamped to at least `VIEWPORT_INSET`. A zero measured dimension falls
/// back to [`FALLBACK_TOOLTIP_SIZE`].
pub fn place_tooltip(pointer: Point, tooltip: Size, viewport: Size) -> Point {
    let width = nonzero_or(tooltip.width, FALLBACK_TOOLTIP_SIZE.width);
    let height = nonzero_or(tooltip.height, FALLBACK_TOOLTIP_SIZE.height);

    Point {
        x: place_axis(pointer.x, width, viewport.width),
        y: place_axis(pointer.y, height, viewport.height),
    }
}

fn place_axis(pointer: f64, extent: f64, viewport: f64) -> f64 {
    let mut at = pointer + TOOLTIP_OFFSET;
    if at + extent > viewport - VIEWPORT_INSET {
        at = pointer - extent - TOOLTIP_OFFSET;
    }
    at.max(VIEWPORT_INSET)
}

fn nonzero_or(v: f64, fallback: f64) -> f64 {
    if v > 0.0 {
        v
    } else {
        fallback
    }
}
