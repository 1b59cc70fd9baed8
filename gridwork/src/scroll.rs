//! Horizontal scroll targeting for cell navigation.
//!
//! Computes the minimal scroll adjustment that brings a target cell
//! into the part of the viewport not covered by pinned columns. The
//! math is pure; [`ScrollPort`] is the stateful surrogate for a scroll
//! container that applies the deltas additively.

use crate::engine::TextDirection;
use crate::geometry::PinnedWidths;

/// Directional intent behind a cell-navigation scroll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollIntent {
    Left,
    Right,
    Home,
    End,
    PageLeft,
    PageRight,
}

impl ScrollIntent {
    /// Collapse page-step intents onto their base direction.
    pub fn normalize(self) -> ScrollIntent {
        match self {
            ScrollIntent::PageLeft => ScrollIntent::Left,
            ScrollIntent::PageRight => ScrollIntent::Right,
            other => other,
        }
    }
}

/// Horizontal extent of a laid-out box, in viewport pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    pub left: f32,
    pub right: f32,
}

impl Span {
    pub fn new(left: f32, right: f32) -> Self {
        Self { left, right }
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }
}

/// Inputs for one scroll-targeting computation.
#[derive(Debug, Clone, Copy)]
pub struct ScrollTarget {
    /// Bounding box of the scroll container.
    pub container: Span,
    /// Bounding box of the target cell.
    pub cell: Span,
    /// Current horizontal scroll offset of the container. Some engines
    /// report negative offsets under right-to-left scrolling.
    pub scroll_left: f32,
    /// Widths of the pinned column groups covering the viewport edges.
    pub pinned: PinnedWidths,
    /// Extra margin kept between the cell and the usable band.
    pub viewport_margin: f32,
    pub direction: TextDirection,
}

impl ScrollTarget {
    /// Right-to-left is in effect when declared, or when the container
    /// reports a negative scroll offset.
    fn effective_rtl(&self) -> bool {
        self.direction == TextDirection::Rtl || self.scroll_left < 0.0
    }

    /// The usable viewport band: the container inset by the pinned
    /// widths and margin, with the pinned insets swapped under RTL
    /// (the left pin group covers the right viewport edge there).
    fn band(&self) -> Span {
        let (leading_inset, trailing_inset) = if self.effective_rtl() {
            (self.pinned.right, self.pinned.left)
        } else {
            (self.pinned.left, self.pinned.right)
        };
        Span::new(
            self.container.left + leading_inset + self.viewport_margin,
            self.container.right - trailing_inset - self.viewport_margin,
        )
    }
}

/// Compute the scroll delta that brings the target cell into view.
///
/// Returns exactly `0.0` when the cell already lies fully within the
/// usable band. With a directional intent the cell is aligned to the
/// band edge the motion is heading for; without one, whichever edge is
/// clipped gets corrected. The delta is additive: callers apply it on
/// top of the current scroll offset.
pub fn scroll_adjustment(target: &ScrollTarget, intent: Option<ScrollIntent>) -> f32 {
    let band = target.band();

    if target.cell.left >= band.left && target.cell.right <= band.right {
        return 0.0;
    }

    let clipped_left = target.cell.left < band.left;
    let clipped_right = target.cell.right > band.right;

    match intent.map(ScrollIntent::normalize) {
        None => {
            if clipped_right {
                target.cell.right - band.right
            } else if clipped_left {
                -(band.left - target.cell.left)
            } else {
                0.0
            }
        }
        Some(intent) => {
            // Under RTL, Home moves toward increasing scroll offsets
            // and End toward decreasing ones; LTR is the reverse.
            let forward = if target.effective_rtl() {
                matches!(intent, ScrollIntent::Right | ScrollIntent::Home)
            } else {
                matches!(intent, ScrollIntent::Right | ScrollIntent::End)
            };
            if forward {
                target.cell.right - band.right
            } else {
                -(band.left - target.cell.left)
            }
        }
    }
}

/// Stateful surrogate for a horizontally scrollable container.
#[derive(Debug, Clone, Copy)]
pub struct ScrollPort {
    bounds: Span,
    scroll_left: f32,
}

impl ScrollPort {
    pub fn new(bounds: Span) -> Self {
        Self {
            bounds,
            scroll_left: 0.0,
        }
    }

    pub fn bounds(&self) -> Span {
        self.bounds
    }

    pub fn scroll_left(&self) -> f32 {
        self.scroll_left
    }

    pub fn set_scroll_left(&mut self, scroll_left: f32) {
        self.scroll_left = scroll_left;
    }

    /// Bring `cell` into the unclipped band, mutating the scroll offset
    /// additively. Returns the delta that was applied.
    pub fn scroll_cell_into_view(
        &mut self,
        cell: Span,
        pinned: PinnedWidths,
        viewport_margin: f32,
        direction: TextDirection,
        intent: Option<ScrollIntent>,
    ) -> f32 {
        let delta = scroll_adjustment(
            &ScrollTarget {
                container: self.bounds,
                cell,
                scroll_left: self.scroll_left,
                pinned,
                viewport_margin,
                direction,
            },
            intent,
        );
        self.scroll_left += delta;
        delta
    }
}
