//! Pinned-column geometry.
//!
//! Computes the sticky offsets, boundary shadow and stacking hints for
//! columns pinned to either edge of a horizontally scrollable grid.
//! Everything here is pure; the rendering layer applies the results.

use crate::engine::{Column, PinSide, TextDirection};

/// Opacity for pinned cells, slightly translucent so scrolled content
/// reads as passing underneath them.
const PINNED_OPACITY: f32 = 0.97;

/// Reach of the boundary shadow in pixels.
const SHADOW_REACH: f32 = 4.0;

/// Positioning scheme for a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellPosition {
    /// Normal flow; scrolls with the content.
    #[default]
    Relative,
    /// Fixed to the viewport edge during horizontal scroll.
    Sticky,
}

/// Inset shadow separating a pin group from the scrollable columns.
///
/// The sign of `offset_x` encodes which edge the shadow hugs; it
/// mirrors under right-to-left rendering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundaryShadow {
    pub offset_x: f32,
    pub blur: f32,
    pub spread: f32,
}

impl BoundaryShadow {
    fn new(offset_x: f32) -> Self {
        Self {
            offset_x,
            blur: SHADOW_REACH,
            spread: -SHADOW_REACH,
        }
    }
}

/// Computed styling for one column's cells.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PinningStyle {
    /// Sticky inset from the leading viewport edge, when pinned left.
    pub left: Option<f32>,
    /// Sticky inset from the trailing viewport edge, when pinned right.
    pub right: Option<f32>,
    pub position: CellPosition,
    pub width: f32,
    pub opacity: f32,
    /// Pinned cells render above scrolling content.
    pub z_index: i32,
    pub shadow: Option<BoundaryShadow>,
}

impl Default for PinningStyle {
    fn default() -> Self {
        Self {
            left: None,
            right: None,
            position: CellPosition::Relative,
            width: 0.0,
            opacity: 1.0,
            z_index: 0,
            shadow: None,
        }
    }
}

/// Aggregate pixel widths of the visible pinned columns per side.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PinnedWidths {
    pub left: f32,
    pub right: f32,
}

/// Sum the widths of the visible columns pinned to each side.
pub fn pinned_widths(columns: &[Column]) -> PinnedWidths {
    let mut widths = PinnedWidths::default();
    for column in columns.iter().filter(|c| c.visible) {
        match column.pinned {
            Some(PinSide::Left) => widths.left += column.size,
            Some(PinSide::Right) => widths.right += column.size,
            None => {}
        }
    }
    widths
}

/// Compute the pinning style for one column.
///
/// Only visible columns participate in offsets and group-edge
/// detection. The boundary shadow is applied solely to the last column
/// of the left pin group and the first column of the right pin group,
/// and only when `with_border` is set; its direction mirrors under
/// right-to-left rendering. An unknown column id fails soft to the
/// default (unpinned) style.
pub fn pinning_style(
    columns: &[Column],
    column_id: &str,
    direction: TextDirection,
    with_border: bool,
) -> PinningStyle {
    let visible: Vec<&Column> = columns.iter().filter(|c| c.visible).collect();
    let Some(index) = visible.iter().position(|c| c.id == column_id) else {
        log::debug!("pinning style requested for unknown column {column_id:?}");
        return PinningStyle::default();
    };
    let column = visible[index];

    let Some(side) = column.pinned else {
        return PinningStyle {
            width: column.size,
            ..PinningStyle::default()
        };
    };

    // Cumulative width of the left-pinned columns before this one, and
    // of the right-pinned columns after it.
    let start: f32 = visible[..index]
        .iter()
        .filter(|c| c.pinned == Some(PinSide::Left))
        .map(|c| c.size)
        .sum();
    let after: f32 = visible[index + 1..]
        .iter()
        .filter(|c| c.pinned == Some(PinSide::Right))
        .map(|c| c.size)
        .sum();

    let is_last_left = side == PinSide::Left
        && !visible[index + 1..]
            .iter()
            .any(|c| c.pinned == Some(PinSide::Left));
    let is_first_right = side == PinSide::Right
        && !visible[..index]
            .iter()
            .any(|c| c.pinned == Some(PinSide::Right));

    let rtl = direction == TextDirection::Rtl;

    let left_position = (side == PinSide::Left).then_some(start);
    let right_position = (side == PinSide::Right).then_some(after);

    let shadow = if with_border {
        if is_last_left {
            Some(BoundaryShadow::new(if rtl {
                SHADOW_REACH
            } else {
                -SHADOW_REACH
            }))
        } else if is_first_right {
            Some(BoundaryShadow::new(if rtl {
                -SHADOW_REACH
            } else {
                SHADOW_REACH
            }))
        } else {
            None
        }
    } else {
        None
    };

    PinningStyle {
        left: if rtl { right_position } else { left_position },
        right: if rtl { left_position } else { right_position },
        position: CellPosition::Sticky,
        width: column.size,
        opacity: PINNED_OPACITY,
        z_index: 1,
        shadow,
    }
}
