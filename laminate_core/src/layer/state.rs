// Copyright 2026 the Laminate Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host state forwarded to every layer, and aggregate queries over layers.

use alloc::vec::Vec;

use super::id::key;
use super::stack::LayerStack;
use crate::dirty;
use crate::drawable::{Drawable, Opacity};
use crate::gravity::LayoutDirection;

impl<D: Drawable> LayerStack<D> {
    /// Applies a state set (for example pressed or focused) to every stateful
    /// layer. Returns whether any layer changed.
    ///
    /// Layers whose padding changed as a result are re-laid out within the
    /// current bounds. Passing the current state set is a no-op.
    pub fn set_state(&mut self, state: &[u32]) -> bool {
        if self.state == state {
            return false;
        }
        self.state = Vec::from(state);

        let mut changed = false;
        for i in 0..self.len() {
            if self.drawables[i].is_stateful() && self.drawables[i].set_state(&self.state) {
                self.dirty.mark(key(i), dirty::CONTENT);
                self.refresh_padding(i);
                changed = true;
            }
        }
        self.finish_host_change(changed);
        changed
    }

    /// Returns the current state set.
    #[must_use]
    pub fn state(&self) -> &[u32] {
        &self.state
    }

    /// Applies a level to every layer. Returns whether any layer changed.
    pub fn set_level(&mut self, level: u32) -> bool {
        if self.level == level {
            return false;
        }
        self.level = level;

        let mut changed = false;
        for i in 0..self.len() {
            if self.drawables[i].set_level(level) {
                self.dirty.mark(key(i), dirty::CONTENT);
                self.refresh_padding(i);
                changed = true;
            }
        }
        self.finish_host_change(changed);
        changed
    }

    /// Returns the current level.
    #[must_use]
    pub fn level(&self) -> u32 {
        self.level
    }

    /// Sets the layout direction, forwards it to every layer and re-lays out.
    /// Returns whether the direction changed.
    pub fn set_layout_direction(&mut self, direction: LayoutDirection) -> bool {
        if self.direction == direction {
            return false;
        }
        self.direction = direction;
        for d in &mut self.drawables {
            d.set_layout_direction(direction);
        }
        self.layout_layers(self.bounds, direction);
        true
    }

    /// Shows or hides the stack and every layer. Returns whether the stack's
    /// visibility changed.
    pub fn set_visible(&mut self, visible: bool) -> bool {
        let changed = self.visible != visible;
        self.visible = visible;
        for d in &mut self.drawables {
            d.set_visible(visible);
        }
        changed
    }

    /// Returns whether the stack is visible.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Sets the alpha of every layer, including layers added later.
    pub fn set_alpha(&mut self, alpha: u8) {
        self.alpha = Some(alpha);
        for d in &mut self.drawables {
            d.set_alpha(alpha);
        }
        self.invalidate_caches();
    }

    /// Returns the alpha of the bottom layer, or of the stack itself when
    /// empty.
    #[must_use]
    pub fn alpha(&self) -> u8 {
        match self.drawables.first() {
            Some(d) => d.alpha(),
            None => self.alpha.unwrap_or(u8::MAX),
        }
    }

    /// Enables or disables mirroring under right-to-left layout on every
    /// layer.
    pub fn set_auto_mirrored(&mut self, mirrored: bool) {
        self.auto_mirrored = mirrored;
        for d in &mut self.drawables {
            d.set_auto_mirrored(mirrored);
        }
    }

    /// Returns whether mirroring was requested.
    #[must_use]
    pub fn is_auto_mirrored(&self) -> bool {
        self.auto_mirrored
    }

    /// Whether any layer's appearance depends on the state set.
    #[must_use]
    pub fn is_stateful(&self) -> bool {
        if let Some(stateful) = self.cached_stateful.get() {
            return stateful;
        }
        let stateful = self.drawables.iter().any(Drawable::is_stateful);
        self.cached_stateful.set(Some(stateful));
        stateful
    }

    /// Returns how the stack's pixels combine with what is underneath.
    ///
    /// The override wins when set. Otherwise the layers' opacities are
    /// combined bottom to top with [`Opacity::resolve`]; an empty stack is
    /// [`Opacity::Transparent`].
    #[must_use]
    pub fn opacity(&self) -> Opacity {
        if let Some(opacity) = self.opacity_override {
            return opacity;
        }
        if let Some(opacity) = self.cached_opacity.get() {
            return opacity;
        }
        let mut layers = self.drawables.iter().map(Drawable::opacity);
        let opacity = match layers.next() {
            Some(first) => layers.fold(first, Opacity::resolve),
            None => Opacity::Transparent,
        };
        self.cached_opacity.set(Some(opacity));
        opacity
    }

    /// Brings a drawable entering the stack in line with the host state.
    pub(crate) fn prepare_drawable(&self, drawable: &mut D) {
        drawable.set_layout_direction(self.direction);
        drawable.set_level(self.level);
        if drawable.is_stateful() {
            drawable.set_state(&self.state);
        }
        drawable.set_visible(self.visible);
        if let Some(alpha) = self.alpha {
            drawable.set_alpha(alpha);
        }
        drawable.set_auto_mirrored(self.auto_mirrored);
    }

    fn finish_host_change(&mut self, changed: bool) {
        if changed {
            self.invalidate_caches();
            self.layout_layers(self.bounds, self.direction);
        }
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Insets, Rect};

    use super::super::testing::TestDrawable;
    use super::*;

    const PRESSED: &[u32] = &[TestDrawable::PRESSED];

    fn button() -> LayerStack<TestDrawable> {
        let mut stack = LayerStack::from_drawables([
            TestDrawable::sized(10.0, 10.0)
                .padded(Insets::uniform(1.0))
                .stateful(Insets::uniform(4.0)),
            TestDrawable::sized(10.0, 10.0),
        ]);
        stack.set_bounds(Rect::new(0.0, 0.0, 50.0, 50.0));
        stack
    }

    #[test]
    fn state_change_refreshes_padding_and_relayouts() {
        let mut stack = button();
        assert_eq!(stack.drawables[1].bounds, Rect::new(1.0, 1.0, 49.0, 49.0));

        assert!(stack.set_state(PRESSED));
        assert_eq!(stack.state(), PRESSED);
        assert!(stack.drawables[0].pressed);
        assert_eq!(stack.padding(), Insets::uniform(4.0));
        assert_eq!(stack.drawables[1].bounds, Rect::new(4.0, 4.0, 46.0, 46.0));

        let layouts = stack.drawables[1].bounds_history.len();
        assert!(!stack.set_state(PRESSED), "same state is a no-op");
        assert_eq!(stack.drawables[1].bounds_history.len(), layouts);

        assert!(stack.set_state(&[]));
        assert_eq!(stack.padding(), Insets::uniform(1.0));
    }

    #[test]
    fn state_change_is_reported_by_update() {
        let mut stack = button();
        let _ = stack.update();
        stack.set_state(PRESSED);
        let changes = stack.update();
        assert_eq!(changes.content, &[0]);
        assert_eq!(changes.padding, &[0]);
        assert!(!changes.layout_ran, "set_state already re-laid out");
    }

    #[test]
    fn state_reaches_only_stateful_layers() {
        let mut stack = button();
        stack.drawables[1].stateful = false;
        stack.set_state(PRESSED);
        assert!(!stack.drawables[1].pressed);
    }

    #[test]
    fn level_is_forwarded_to_every_layer() {
        let mut stack = button();
        assert!(stack.set_level(3));
        assert_eq!(stack.level(), 3);
        assert!(stack.drawables().all(|d| d.level == 3));
        assert!(!stack.set_level(3));
    }

    #[test]
    fn direction_change_relayouts() {
        let mut stack = LayerStack::from_drawables([TestDrawable::sized(10.0, 10.0)]);
        stack.set_layer_width(0, Some(20.0)).unwrap();
        stack.set_bounds(Rect::new(0.0, 0.0, 100.0, 10.0));
        assert_eq!(stack.drawables[0].bounds.x0, 0.0);

        assert!(stack.set_layout_direction(LayoutDirection::Rtl));
        assert_eq!(stack.layout_direction(), LayoutDirection::Rtl);
        assert_eq!(stack.drawables[0].direction, LayoutDirection::Rtl);
        assert_eq!(stack.drawables[0].bounds, Rect::new(80.0, 0.0, 100.0, 10.0));
        assert!(!stack.set_layout_direction(LayoutDirection::Rtl));
    }

    #[test]
    fn visibility_alpha_and_mirroring_fan_out() {
        let mut stack = button();
        assert!(stack.set_visible(false));
        assert!(!stack.is_visible());
        assert!(stack.drawables().all(|d| !d.visible));
        assert!(!stack.set_visible(false));

        stack.set_alpha(128);
        assert_eq!(stack.alpha(), 128);
        assert!(stack.drawables().all(|d| d.alpha == 128));

        stack.set_auto_mirrored(true);
        assert!(stack.is_auto_mirrored());
        assert!(stack.drawables().all(|d| d.mirrored));
    }

    #[test]
    fn added_layers_inherit_host_state() {
        let mut stack = button();
        stack.set_state(PRESSED);
        stack.set_level(7);
        stack.set_alpha(9);
        stack.set_visible(false);
        stack.set_auto_mirrored(true);
        stack.set_layout_direction(LayoutDirection::Rtl);

        let index = stack
            .add_layer(
                TestDrawable::sized(1.0, 1.0).stateful(Insets::ZERO),
                Insets::ZERO,
                None,
            )
            .unwrap();
        let added = stack.drawable(index).unwrap();
        assert!(added.pressed);
        assert_eq!(added.level, 7);
        assert_eq!(added.alpha, 9);
        assert!(!added.visible);
        assert!(added.mirrored);
        assert_eq!(added.direction, LayoutDirection::Rtl);
    }

    #[test]
    fn replaced_drawable_inherits_mirroring() {
        let mut stack = button();
        stack.set_auto_mirrored(true);
        let _ = stack.set_drawable(1, TestDrawable::sized(2.0, 2.0)).unwrap();
        assert!(stack.drawable(1).unwrap().mirrored);

        stack.set_auto_mirrored(false);
        let mut mirrored = TestDrawable::sized(2.0, 2.0);
        mirrored.mirrored = true;
        let _ = stack.set_drawable(1, mirrored).unwrap();
        assert!(!stack.drawable(1).unwrap().mirrored);
    }

    #[test]
    fn alpha_of_untouched_stack() {
        let stack = LayerStack::<TestDrawable>::new();
        assert_eq!(stack.alpha(), u8::MAX);
        let stack = button();
        assert_eq!(stack.alpha(), u8::MAX);
    }

    #[test]
    fn statefulness_is_cached_and_invalidated() {
        let mut stack = LayerStack::from_drawables([TestDrawable::sized(1.0, 1.0)]);
        assert!(!stack.is_stateful());
        stack
            .add_layer(
                TestDrawable::sized(1.0, 1.0).stateful(Insets::ZERO),
                Insets::ZERO,
                None,
            )
            .unwrap();
        assert!(stack.is_stateful());
        stack.drawable_mut(1).unwrap().stateful = false;
        assert!(!stack.is_stateful());
    }

    #[test]
    fn opacity_folds_layers() {
        assert_eq!(LayerStack::<TestDrawable>::new().opacity(), Opacity::Transparent);

        let mut stack = LayerStack::from_drawables([
            TestDrawable::sized(1.0, 1.0),
            TestDrawable::sized(1.0, 1.0),
        ]);
        assert_eq!(stack.opacity(), Opacity::Opaque);

        let _ = stack
            .set_drawable(1, TestDrawable::sized(1.0, 1.0).with_opacity(Opacity::Translucent))
            .unwrap();
        assert_eq!(stack.opacity(), Opacity::Translucent);

        stack.set_opacity_override(Some(Opacity::Opaque));
        assert_eq!(stack.opacity_override(), Some(Opacity::Opaque));
        assert_eq!(stack.opacity(), Opacity::Opaque);
        stack.set_opacity_override(None);
        assert_eq!(stack.opacity(), Opacity::Translucent);
    }
}
