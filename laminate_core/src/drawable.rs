// Copyright 2026 the Laminate Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The capability interface host drawables implement.
//!
//! The stack never depends on concrete drawable types. Anything that can
//! report an intrinsic size and a padding, and accept a placement rectangle,
//! can be a layer. The remaining methods have no-op defaults and only matter
//! for drawables whose appearance depends on host state.

use alloc::boxed::Box;

use kurbo::{Insets, Rect};

use crate::gravity::LayoutDirection;

/// A drawable's natural, unconstrained size.
///
/// `None` in a dimension means the drawable has no intrinsic size there
/// (for example a solid color that fills whatever it is given).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct IntrinsicSize {
    /// Intrinsic width, if any.
    pub width: Option<f64>,
    /// Intrinsic height, if any.
    pub height: Option<f64>,
}

impl IntrinsicSize {
    /// No intrinsic size in either dimension.
    pub const UNDEFINED: Self = Self {
        width: None,
        height: None,
    };

    /// Creates an intrinsic size defined in both dimensions.
    #[inline]
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
        }
    }
}

/// How a drawable's pixels combine with what is underneath.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Opacity {
    /// Opacity cannot be determined.
    Unknown,
    /// Some pixels are partially transparent.
    #[default]
    Translucent,
    /// Nothing is drawn.
    Transparent,
    /// Every pixel is fully opaque.
    Opaque,
}

impl Opacity {
    /// Combines the opacity of two drawables drawn on top of each other.
    ///
    /// Equal values are kept; otherwise `Unknown` wins over `Translucent`,
    /// which wins over `Transparent`, which wins over `Opaque`.
    #[must_use]
    pub const fn resolve(self, other: Self) -> Self {
        match (self, other) {
            (a, b) if a as u8 == b as u8 => a,
            (Self::Unknown, _) | (_, Self::Unknown) => Self::Unknown,
            (Self::Translucent, _) | (_, Self::Translucent) => Self::Translucent,
            (Self::Transparent, _) | (_, Self::Transparent) => Self::Transparent,
            _ => Self::Opaque,
        }
    }
}

/// A renderable element that can be placed by a [`LayerStack`].
///
/// [`LayerStack`]: crate::layer::LayerStack
pub trait Drawable {
    /// Returns the natural size of this drawable.
    fn intrinsic_size(&self) -> IntrinsicSize;

    /// Returns the padding this drawable asks of its content.
    ///
    /// The value may depend on the current state and level.
    fn padding(&self) -> Insets {
        Insets::ZERO
    }

    /// Returns the current placement rectangle.
    fn bounds(&self) -> Rect;

    /// Assigns the placement rectangle.
    fn set_bounds(&mut self, bounds: Rect);

    /// Whether the drawable's appearance depends on the state set.
    fn is_stateful(&self) -> bool {
        false
    }

    /// Applies a new state set. Returns whether the appearance (and possibly
    /// the padding) changed.
    fn set_state(&mut self, state: &[u32]) -> bool {
        _ = state;
        false
    }

    /// Applies a new level. Returns whether the appearance changed.
    fn set_level(&mut self, level: u32) -> bool {
        _ = level;
        false
    }

    /// Applies a new layout direction. Returns whether anything changed.
    fn set_layout_direction(&mut self, direction: LayoutDirection) -> bool {
        _ = direction;
        false
    }

    /// Shows or hides the drawable. Returns whether visibility changed.
    fn set_visible(&mut self, visible: bool) -> bool {
        _ = visible;
        false
    }

    /// Sets the drawable's alpha.
    fn set_alpha(&mut self, alpha: u8) {
        _ = alpha;
    }

    /// Returns the drawable's alpha.
    fn alpha(&self) -> u8 {
        u8::MAX
    }

    /// Enables or disables mirroring under right-to-left layout.
    fn set_auto_mirrored(&mut self, mirrored: bool) {
        _ = mirrored;
    }

    /// Returns how this drawable's pixels combine with what is underneath.
    fn opacity(&self) -> Opacity {
        Opacity::Translucent
    }
}

impl<D: Drawable + ?Sized> Drawable for Box<D> {
    fn intrinsic_size(&self) -> IntrinsicSize {
        (**self).intrinsic_size()
    }

    fn padding(&self) -> Insets {
        (**self).padding()
    }

    fn bounds(&self) -> Rect {
        (**self).bounds()
    }

    fn set_bounds(&mut self, bounds: Rect) {
        (**self).set_bounds(bounds);
    }

    fn is_stateful(&self) -> bool {
        (**self).is_stateful()
    }

    fn set_state(&mut self, state: &[u32]) -> bool {
        (**self).set_state(state)
    }

    fn set_level(&mut self, level: u32) -> bool {
        (**self).set_level(level)
    }

    fn set_layout_direction(&mut self, direction: LayoutDirection) -> bool {
        (**self).set_layout_direction(direction)
    }

    fn set_visible(&mut self, visible: bool) -> bool {
        (**self).set_visible(visible)
    }

    fn set_alpha(&mut self, alpha: u8) {
        (**self).set_alpha(alpha);
    }

    fn alpha(&self) -> u8 {
        (**self).alpha()
    }

    fn set_auto_mirrored(&mut self, mirrored: bool) {
        (**self).set_auto_mirrored(mirrored);
    }

    fn opacity(&self) -> Opacity {
        (**self).opacity()
    }
}
