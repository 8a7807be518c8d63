// Copyright 2026 the Laminate Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gravity bitmasks and direction-aware box placement.
//!
//! A [`Gravity`] describes how a box of a given size is positioned (or
//! stretched) inside a containing rectangle. The encoding matches the
//! conventional host-platform layout: each axis owns four bits,
//!
//! - `SPECIFIED` — the axis carries gravity at all,
//! - `PULL_BEFORE` — pull to the left / top edge,
//! - `PULL_AFTER` — pull to the right / bottom edge,
//! - `CLIP` — clip the placed box to the container on this axis,
//!
//! with the x axis in bits 0–3 and the y axis in bits 4–7. Pulling to both
//! edges fills the axis; pulling to neither centers on it.
//!
//! [`START`](Gravity::START) and [`END`](Gravity::END) additionally carry
//! [`RELATIVE_LAYOUT_DIRECTION`](Gravity::RELATIVE_LAYOUT_DIRECTION) and are
//! resolved to left or right by [`Gravity::to_absolute`].

use core::fmt;
use core::ops::{BitAnd, BitOr, BitOrAssign};

use kurbo::Rect;

const AXIS_SPECIFIED: u32 = 0x0001;
const AXIS_PULL_BEFORE: u32 = 0x0002;
const AXIS_PULL_AFTER: u32 = 0x0004;
const AXIS_CLIP: u32 = 0x0008;

const AXIS_X_SHIFT: u32 = 0;
const AXIS_Y_SHIFT: u32 = 4;

/// Layout direction used to resolve relative (start / end) values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LayoutDirection {
    /// Left to right: start is left, end is right.
    #[default]
    Ltr,
    /// Right to left: start is right, end is left.
    Rtl,
}

impl LayoutDirection {
    /// Returns `true` for [`Rtl`](Self::Rtl).
    #[inline]
    #[must_use]
    pub const fn is_rtl(self) -> bool {
        matches!(self, Self::Rtl)
    }
}

/// A gravity bitmask.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Gravity(u32);

impl Gravity {
    /// No gravity on either axis.
    pub const NONE: Self = Self(0);

    /// Push to the top of the container, not changing the height.
    pub const TOP: Self = Self((AXIS_PULL_BEFORE | AXIS_SPECIFIED) << AXIS_Y_SHIFT);
    /// Push to the bottom of the container, not changing the height.
    pub const BOTTOM: Self = Self((AXIS_PULL_AFTER | AXIS_SPECIFIED) << AXIS_Y_SHIFT);
    /// Push to the left of the container, not changing the width.
    pub const LEFT: Self = Self((AXIS_PULL_BEFORE | AXIS_SPECIFIED) << AXIS_X_SHIFT);
    /// Push to the right of the container, not changing the width.
    pub const RIGHT: Self = Self((AXIS_PULL_AFTER | AXIS_SPECIFIED) << AXIS_X_SHIFT);

    /// Center vertically, not changing the height.
    pub const CENTER_VERTICAL: Self = Self(AXIS_SPECIFIED << AXIS_Y_SHIFT);
    /// Grow vertically to fill the container.
    pub const FILL_VERTICAL: Self = Self(Self::TOP.0 | Self::BOTTOM.0);
    /// Center horizontally, not changing the width.
    pub const CENTER_HORIZONTAL: Self = Self(AXIS_SPECIFIED << AXIS_X_SHIFT);
    /// Grow horizontally to fill the container.
    pub const FILL_HORIZONTAL: Self = Self(Self::LEFT.0 | Self::RIGHT.0);
    /// Center on both axes.
    pub const CENTER: Self = Self(Self::CENTER_VERTICAL.0 | Self::CENTER_HORIZONTAL.0);
    /// Fill on both axes.
    pub const FILL: Self = Self(Self::FILL_VERTICAL.0 | Self::FILL_HORIZONTAL.0);

    /// Clip the top and bottom edges to the container.
    pub const CLIP_VERTICAL: Self = Self(AXIS_CLIP << AXIS_Y_SHIFT);
    /// Clip the left and right edges to the container.
    pub const CLIP_HORIZONTAL: Self = Self(AXIS_CLIP << AXIS_X_SHIFT);

    /// Marks horizontal values as relative to the layout direction.
    pub const RELATIVE_LAYOUT_DIRECTION: Self = Self(0x0080_0000);

    /// Push to the start edge (left in LTR, right in RTL).
    pub const START: Self = Self(Self::RELATIVE_LAYOUT_DIRECTION.0 | Self::LEFT.0);
    /// Push to the end edge (right in LTR, left in RTL).
    pub const END: Self = Self(Self::RELATIVE_LAYOUT_DIRECTION.0 | Self::RIGHT.0);

    const HORIZONTAL_MASK: u32 = (AXIS_SPECIFIED | AXIS_PULL_BEFORE | AXIS_PULL_AFTER) << AXIS_X_SHIFT;
    const VERTICAL_MASK: u32 = (AXIS_SPECIFIED | AXIS_PULL_BEFORE | AXIS_PULL_AFTER) << AXIS_Y_SHIFT;
    const RELATIVE_HORIZONTAL_MASK: u32 = Self::START.0 | Self::END.0;

    /// Creates a gravity from raw bits.
    #[inline]
    #[must_use]
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// Returns the raw bits.
    #[inline]
    #[must_use]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Returns whether every bit of `other` is set in `self`.
    #[inline]
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns whether a horizontal component (absolute or relative) is set.
    #[inline]
    #[must_use]
    pub const fn is_horizontal(self) -> bool {
        self.0 > 0 && self.0 & Self::RELATIVE_HORIZONTAL_MASK != 0
    }

    /// Returns whether a vertical component is set.
    #[inline]
    #[must_use]
    pub const fn is_vertical(self) -> bool {
        self.0 > 0 && self.0 & Self::VERTICAL_MASK != 0
    }

    /// Returns only the absolute horizontal bits (without clipping).
    #[inline]
    #[must_use]
    pub const fn horizontal(self) -> Self {
        Self(self.0 & Self::HORIZONTAL_MASK)
    }

    /// Returns only the vertical bits (without clipping).
    #[inline]
    #[must_use]
    pub const fn vertical(self) -> Self {
        Self(self.0 & Self::VERTICAL_MASK)
    }

    /// Resolves [`START`](Self::START) and [`END`](Self::END) into
    /// [`LEFT`](Self::LEFT) or [`RIGHT`](Self::RIGHT) for `direction`.
    ///
    /// Gravity without the relative bit is returned unchanged.
    #[must_use]
    pub const fn to_absolute(self, direction: LayoutDirection) -> Self {
        let mut g = self.0;
        if g & Self::RELATIVE_LAYOUT_DIRECTION.0 != 0 {
            let rtl = direction.is_rtl();
            if g & Self::START.0 == Self::START.0 {
                g &= !Self::START.0;
                g |= if rtl { Self::RIGHT.0 } else { Self::LEFT.0 };
            } else if g & Self::END.0 == Self::END.0 {
                g &= !Self::END.0;
                g |= if rtl { Self::LEFT.0 } else { Self::RIGHT.0 };
            }
            g &= !Self::RELATIVE_LAYOUT_DIRECTION.0;
        }
        Self(g)
    }

    /// Places a `width` × `height` box inside `container`.
    ///
    /// Relative bits are resolved against `direction` first. The container
    /// may be inverted (for example when insets exceed its size); the result
    /// is then inverted or empty as well.
    #[must_use]
    pub fn apply(self, width: f64, height: f64, container: Rect, direction: LayoutDirection) -> Rect {
        let g = self.to_absolute(direction).0;
        let (x0, x1) = place_axis(g >> AXIS_X_SHIFT, width, container.x0, container.x1);
        let (y0, y1) = place_axis(g >> AXIS_Y_SHIFT, height, container.y0, container.y1);
        Rect::new(x0, y0, x1, y1)
    }
}

/// Places a span of `size` between `start` and `end` according to the four
/// axis bits in the low nibble of `bits`.
fn place_axis(bits: u32, size: f64, start: f64, end: f64) -> (f64, f64) {
    let clip = bits & AXIS_CLIP == AXIS_CLIP;
    match bits & (AXIS_PULL_BEFORE | AXIS_PULL_AFTER) {
        0 => {
            let lo = start + (end - start - size) / 2.0;
            let hi = lo + size;
            if clip {
                (lo.max(start), hi.min(end))
            } else {
                (lo, hi)
            }
        }
        AXIS_PULL_BEFORE => {
            let hi = start + size;
            (start, if clip { hi.min(end) } else { hi })
        }
        AXIS_PULL_AFTER => {
            let lo = end - size;
            (if clip { lo.max(start) } else { lo }, end)
        }
        _ => (start, end),
    }
}

impl BitOr for Gravity {
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for Gravity {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for Gravity {
    type Output = Self;

    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl fmt::Debug for Gravity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Gravity({:#x})", self.0)
    }
}
