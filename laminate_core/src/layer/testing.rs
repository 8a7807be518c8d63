// Copyright 2026 the Laminate Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Test double for [`Drawable`].

use alloc::vec::Vec;

use kurbo::{Insets, Rect};

use crate::drawable::{Drawable, IntrinsicSize, Opacity};
use crate::gravity::LayoutDirection;

/// A drawable with configurable size and padding that records what the stack
/// tells it.
///
/// When stateful, any state set containing [`TestDrawable::PRESSED`] swaps
/// the padding for `pressed_padding`.
#[derive(Clone, Debug)]
pub(crate) struct TestDrawable {
    pub(crate) intrinsic: IntrinsicSize,
    pub(crate) padding: Insets,
    pub(crate) pressed_padding: Insets,
    pub(crate) bounds: Rect,
    pub(crate) stateful: bool,
    pub(crate) pressed: bool,
    pub(crate) level: u32,
    pub(crate) direction: LayoutDirection,
    pub(crate) visible: bool,
    pub(crate) alpha: u8,
    pub(crate) mirrored: bool,
    pub(crate) opacity: Opacity,
    pub(crate) bounds_history: Vec<Rect>,
}

impl TestDrawable {
    pub(crate) const PRESSED: u32 = 0x0101_00a7;

    pub(crate) fn sized(width: f64, height: f64) -> Self {
        Self::with_intrinsic(IntrinsicSize::new(width, height))
    }

    pub(crate) fn unsized() -> Self {
        Self::with_intrinsic(IntrinsicSize::UNDEFINED)
    }

    pub(crate) fn with_intrinsic(intrinsic: IntrinsicSize) -> Self {
        Self {
            intrinsic,
            padding: Insets::ZERO,
            pressed_padding: Insets::ZERO,
            bounds: Rect::ZERO,
            stateful: false,
            pressed: false,
            level: 0,
            direction: LayoutDirection::Ltr,
            visible: true,
            alpha: u8::MAX,
            mirrored: false,
            opacity: Opacity::Opaque,
            bounds_history: Vec::new(),
        }
    }

    pub(crate) fn padded(mut self, padding: Insets) -> Self {
        self.padding = padding;
        self
    }

    pub(crate) fn stateful(mut self, pressed_padding: Insets) -> Self {
        self.stateful = true;
        self.pressed_padding = pressed_padding;
        self
    }

    pub(crate) fn with_opacity(mut self, opacity: Opacity) -> Self {
        self.opacity = opacity;
        self
    }
}

impl Drawable for TestDrawable {
    fn intrinsic_size(&self) -> IntrinsicSize {
        self.intrinsic
    }

    fn padding(&self) -> Insets {
        if self.pressed {
            self.pressed_padding
        } else {
            self.padding
        }
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
        self.bounds_history.push(bounds);
    }

    fn is_stateful(&self) -> bool {
        self.stateful
    }

    fn set_state(&mut self, state: &[u32]) -> bool {
        let pressed = state.contains(&Self::PRESSED);
        let changed = pressed != self.pressed;
        self.pressed = pressed;
        changed
    }

    fn set_level(&mut self, level: u32) -> bool {
        let changed = level != self.level;
        self.level = level;
        changed
    }

    fn set_layout_direction(&mut self, direction: LayoutDirection) -> bool {
        let changed = direction != self.direction;
        self.direction = direction;
        changed
    }

    fn set_visible(&mut self, visible: bool) -> bool {
        let changed = visible != self.visible;
        self.visible = visible;
        changed
    }

    fn set_alpha(&mut self, alpha: u8) {
        self.alpha = alpha;
    }

    fn alpha(&self) -> u8 {
        self.alpha
    }

    fn set_auto_mirrored(&mut self, mirrored: bool) {
        self.mirrored = mirrored;
    }

    fn opacity(&self) -> Opacity {
        self.opacity
    }
}
