// Copyright 2026 the Laminate Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Struct-of-arrays layer storage with lookup and per-layer attributes.

use alloc::vec::Vec;
use core::cell::Cell;

use kurbo::{Insets, Rect};
use understory_dirty::{CycleHandling, DirtyTracker};

use super::id::{LayerIdent, key};
use super::padding::PaddingMode;
use crate::dirty;
use crate::drawable::{Drawable, Opacity};
use crate::error::{Axis, Error, check_inset, check_size};
use crate::gravity::{Gravity, LayoutDirection};

/// An ordered stack of drawables laid out on top of each other.
///
/// Layers are addressed by index; later layers draw on top. Layers can be
/// appended but never removed, and only the drawable of an existing layer
/// can be replaced. Each layer occupies a slot in parallel arrays.
///
/// The stack is not internally synchronized. Callers serialize access, for
/// example by confining the stack to the rendering thread.
#[derive(Debug)]
pub struct LayerStack<D> {
    // -- Layers --
    pub(crate) drawables: Vec<D>,
    pub(crate) insets: Vec<Insets>,
    pub(crate) inset_start: Vec<Option<f64>>,
    pub(crate) inset_end: Vec<Option<f64>>,
    pub(crate) width: Vec<Option<f64>>,
    pub(crate) height: Vec<Option<f64>>,
    pub(crate) gravity: Vec<Gravity>,
    pub(crate) ids: Vec<Option<LayerIdent>>,

    // -- Cached per-layer padding (refreshed from the drawables) --
    pub(crate) padding: Vec<Insets>,

    // -- Stack properties --
    pub(crate) padding_mode: PaddingMode,
    pub(crate) auto_mirrored: bool,
    pub(crate) opacity_override: Option<Opacity>,

    // -- Host state forwarded to children --
    pub(crate) bounds: Rect,
    pub(crate) direction: LayoutDirection,
    pub(crate) level: u32,
    pub(crate) state: Vec<u32>,
    pub(crate) alpha: Option<u8>,
    pub(crate) visible: bool,

    // -- Aggregate caches (None = recompute on next read) --
    pub(crate) cached_opacity: Cell<Option<Opacity>>,
    pub(crate) cached_stateful: Cell<Option<bool>>,

    // -- Dirty tracking --
    pub(crate) dirty: DirtyTracker<u32>,
    pub(crate) layout_dirty: bool,
}

impl<D: Drawable> Default for LayerStack<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Drawable> LayerStack<D> {
    /// Creates an empty stack in [`PaddingMode::Nest`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            drawables: Vec::new(),
            insets: Vec::new(),
            inset_start: Vec::new(),
            inset_end: Vec::new(),
            width: Vec::new(),
            height: Vec::new(),
            gravity: Vec::new(),
            ids: Vec::new(),
            padding: Vec::new(),
            padding_mode: PaddingMode::Nest,
            auto_mirrored: false,
            opacity_override: None,
            bounds: Rect::ZERO,
            direction: LayoutDirection::Ltr,
            level: 0,
            state: Vec::new(),
            alpha: None,
            visible: true,
            cached_opacity: Cell::new(None),
            cached_stateful: Cell::new(None),
            dirty: DirtyTracker::with_cycle_handling(CycleHandling::Error),
            layout_dirty: true,
        }
    }

    /// Creates a stack with one layer per drawable, in iteration order, each
    /// with zero insets and no identifier.
    pub fn from_drawables(drawables: impl IntoIterator<Item = D>) -> Self {
        let mut stack = Self::new();
        for drawable in drawables {
            stack.push_layer(drawable, Insets::ZERO, None);
        }
        stack
    }

    // -- Layer list --

    /// Appends a layer wrapping `drawable` and returns its index.
    ///
    /// The drawable receives the stack's current layout direction, level,
    /// state set, visibility, alpha and mirroring before its padding is
    /// cached. Placement happens on the next layout pass.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] if any inset is NaN or infinite; the
    /// stack is left unmodified.
    pub fn add_layer(
        &mut self,
        drawable: D,
        insets: Insets,
        id: Option<LayerIdent>,
    ) -> Result<usize, Error> {
        for v in [insets.x0, insets.y0, insets.x1, insets.y1] {
            check_inset(v)?;
        }
        Ok(self.push_layer(drawable, insets, id))
    }

    /// Returns the number of layers.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.drawables.len()
    }

    /// Returns whether the stack has no layers.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.drawables.is_empty()
    }

    /// Returns the drawables in draw order (lowest index first).
    pub fn drawables(&self) -> impl Iterator<Item = &D> + '_ {
        self.drawables.iter()
    }

    /// Returns the drawable of a layer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index >= len()`.
    pub fn drawable(&self, index: usize) -> Result<&D, Error> {
        self.validate(index)?;
        Ok(&self.drawables[index])
    }

    /// Returns the drawable of a layer for direct mutation.
    ///
    /// Since the drawable may change its size or padding, the layer's
    /// padding is refreshed and the stack re-laid out on the next
    /// [`update`](Self::update).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index >= len()`.
    pub fn drawable_mut(&mut self, index: usize) -> Result<&mut D, Error> {
        self.validate(index)?;
        self.mark_content(index);
        Ok(&mut self.drawables[index])
    }

    /// Replaces the drawable of a layer and returns the previous one.
    ///
    /// The new drawable takes over the old one's bounds and receives the
    /// stack's current host state.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index >= len()`.
    pub fn set_drawable(&mut self, index: usize, drawable: D) -> Result<D, Error> {
        self.validate(index)?;
        Ok(self.replace_drawable(index, drawable))
    }

    /// Replaces the drawable of the first (lowest-index) layer carrying `id`.
    ///
    /// Returns the previous drawable, or hands `drawable` back in `Err` if no
    /// layer carries `id`.
    pub fn set_drawable_by_id(&mut self, id: LayerIdent, drawable: D) -> Result<D, D> {
        match self.find_index_by_id(id) {
            Some(index) => Ok(self.replace_drawable(index, drawable)),
            None => Err(drawable),
        }
    }

    // -- Identifiers --

    /// Assigns (or clears) the identifier of a layer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index >= len()`.
    pub fn set_id(&mut self, index: usize, id: Option<LayerIdent>) -> Result<(), Error> {
        self.validate(index)?;
        self.ids[index] = id;
        Ok(())
    }

    /// Returns the identifier of a layer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index >= len()`.
    pub fn id(&self, index: usize) -> Result<Option<LayerIdent>, Error> {
        self.validate(index)?;
        Ok(self.ids[index])
    }

    /// Returns the index of the **first** (lowest-index) layer carrying `id`.
    ///
    /// Earlier layers take precedence for structural operations such as
    /// [`set_drawable_by_id`](Self::set_drawable_by_id).
    #[must_use]
    pub fn find_index_by_id(&self, id: LayerIdent) -> Option<usize> {
        self.ids.iter().position(|&candidate| candidate == Some(id))
    }

    /// Returns the drawable of the **last** (highest-index) layer carrying
    /// `id`.
    ///
    /// Later layers draw on top, so they take precedence for visual lookup.
    #[must_use]
    pub fn find_drawable_by_id(&self, id: LayerIdent) -> Option<&D> {
        let index = self.ids.iter().rposition(|&candidate| candidate == Some(id))?;
        Some(&self.drawables[index])
    }

    /// Mutable counterpart of [`find_drawable_by_id`](Self::find_drawable_by_id).
    pub fn find_drawable_by_id_mut(&mut self, id: LayerIdent) -> Option<&mut D> {
        let index = self.ids.iter().rposition(|&candidate| candidate == Some(id))?;
        self.mark_content(index);
        Some(&mut self.drawables[index])
    }

    // -- Explicit size --

    /// Sets the explicit size of a layer. `None` uses the drawable's
    /// intrinsic size in that dimension.
    ///
    /// An explicit size also changes the default gravity in that dimension
    /// from fill to start / top; see [`set_layer_gravity`](Self::set_layer_gravity).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index >= len()`, or
    /// [`Error::Configuration`] if a size is negative or not finite.
    pub fn set_layer_size(
        &mut self,
        index: usize,
        width: Option<f64>,
        height: Option<f64>,
    ) -> Result<(), Error> {
        self.validate(index)?;
        let width = check_size(Axis::Horizontal, width)?;
        let height = check_size(Axis::Vertical, height)?;
        self.width[index] = width;
        self.height[index] = height;
        self.mark_layout(index);
        Ok(())
    }

    /// Sets the explicit width of a layer.
    ///
    /// # Errors
    ///
    /// See [`set_layer_size`](Self::set_layer_size).
    pub fn set_layer_width(&mut self, index: usize, width: Option<f64>) -> Result<(), Error> {
        self.validate(index)?;
        self.width[index] = check_size(Axis::Horizontal, width)?;
        self.mark_layout(index);
        Ok(())
    }

    /// Sets the explicit height of a layer.
    ///
    /// # Errors
    ///
    /// See [`set_layer_size`](Self::set_layer_size).
    pub fn set_layer_height(&mut self, index: usize, height: Option<f64>) -> Result<(), Error> {
        self.validate(index)?;
        self.height[index] = check_size(Axis::Vertical, height)?;
        self.mark_layout(index);
        Ok(())
    }

    /// Returns the explicit width of a layer, if set.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index >= len()`.
    pub fn layer_width(&self, index: usize) -> Result<Option<f64>, Error> {
        self.validate(index)?;
        Ok(self.width[index])
    }

    /// Returns the explicit height of a layer, if set.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index >= len()`.
    pub fn layer_height(&self, index: usize) -> Result<Option<f64>, Error> {
        self.validate(index)?;
        Ok(self.height[index])
    }

    // -- Gravity --

    /// Sets the gravity used to place a layer within its containing
    /// rectangle (after insets and padding).
    ///
    /// Where `gravity` has no horizontal component, the layer fills
    /// horizontally unless it has an explicit width, in which case it is
    /// anchored to the start edge. The vertical axis behaves the same with
    /// fill / top.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index >= len()`.
    pub fn set_layer_gravity(&mut self, index: usize, gravity: Gravity) -> Result<(), Error> {
        self.validate(index)?;
        self.gravity[index] = gravity;
        self.mark_layout(index);
        Ok(())
    }

    /// Returns the gravity of a layer as set (without defaults applied).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index >= len()`.
    pub fn layer_gravity(&self, index: usize) -> Result<Gravity, Error> {
        self.validate(index)?;
        Ok(self.gravity[index])
    }

    // -- Insets --

    /// Sets the absolute insets of a layer and clears its start / end
    /// insets.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index >= len()`, or
    /// [`Error::Configuration`] if any inset is not finite.
    pub fn set_layer_inset(&mut self, index: usize, insets: Insets) -> Result<(), Error> {
        self.validate(index)?;
        for v in [insets.x0, insets.y0, insets.x1, insets.y1] {
            check_inset(v)?;
        }
        self.insets[index] = insets;
        self.inset_start[index] = None;
        self.inset_end[index] = None;
        self.mark_layout(index);
        Ok(())
    }

    /// Sets direction-relative insets of a layer. Left and right insets are
    /// reset to zero.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index >= len()`, or
    /// [`Error::Configuration`] if any inset is not finite.
    pub fn set_layer_inset_relative(
        &mut self,
        index: usize,
        start: f64,
        top: f64,
        end: f64,
        bottom: f64,
    ) -> Result<(), Error> {
        self.validate(index)?;
        for v in [start, top, end, bottom] {
            check_inset(v)?;
        }
        self.insets[index] = Insets::new(0.0, top, 0.0, bottom);
        self.inset_start[index] = Some(start);
        self.inset_end[index] = Some(end);
        self.mark_layout(index);
        Ok(())
    }

    /// Sets the left inset of a layer.
    ///
    /// # Errors
    ///
    /// See [`set_layer_inset`](Self::set_layer_inset).
    pub fn set_layer_inset_left(&mut self, index: usize, left: f64) -> Result<(), Error> {
        self.update_inset(index, left, |insets, v| insets.x0 = v)
    }

    /// Sets the top inset of a layer.
    ///
    /// # Errors
    ///
    /// See [`set_layer_inset`](Self::set_layer_inset).
    pub fn set_layer_inset_top(&mut self, index: usize, top: f64) -> Result<(), Error> {
        self.update_inset(index, top, |insets, v| insets.y0 = v)
    }

    /// Sets the right inset of a layer.
    ///
    /// # Errors
    ///
    /// See [`set_layer_inset`](Self::set_layer_inset).
    pub fn set_layer_inset_right(&mut self, index: usize, right: f64) -> Result<(), Error> {
        self.update_inset(index, right, |insets, v| insets.x1 = v)
    }

    /// Sets the bottom inset of a layer.
    ///
    /// # Errors
    ///
    /// See [`set_layer_inset`](Self::set_layer_inset).
    pub fn set_layer_inset_bottom(&mut self, index: usize, bottom: f64) -> Result<(), Error> {
        self.update_inset(index, bottom, |insets, v| insets.y1 = v)
    }

    /// Sets (or clears) the start inset of a layer. When set, it overrides
    /// the left inset in LTR layout and the right inset in RTL layout.
    ///
    /// # Errors
    ///
    /// See [`set_layer_inset`](Self::set_layer_inset).
    pub fn set_layer_inset_start(&mut self, index: usize, start: Option<f64>) -> Result<(), Error> {
        self.validate(index)?;
        if let Some(v) = start {
            check_inset(v)?;
        }
        self.inset_start[index] = start;
        self.mark_layout(index);
        Ok(())
    }

    /// Sets (or clears) the end inset of a layer. When set, it overrides
    /// the right inset in LTR layout and the left inset in RTL layout.
    ///
    /// # Errors
    ///
    /// See [`set_layer_inset`](Self::set_layer_inset).
    pub fn set_layer_inset_end(&mut self, index: usize, end: Option<f64>) -> Result<(), Error> {
        self.validate(index)?;
        if let Some(v) = end {
            check_inset(v)?;
        }
        self.inset_end[index] = end;
        self.mark_layout(index);
        Ok(())
    }

    /// Returns the absolute insets of a layer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index >= len()`.
    pub fn layer_inset(&self, index: usize) -> Result<Insets, Error> {
        self.validate(index)?;
        Ok(self.insets[index])
    }

    /// Returns the start inset of a layer, if set.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index >= len()`.
    pub fn layer_inset_start(&self, index: usize) -> Result<Option<f64>, Error> {
        self.validate(index)?;
        Ok(self.inset_start[index])
    }

    /// Returns the end inset of a layer, if set.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index >= len()`.
    pub fn layer_inset_end(&self, index: usize) -> Result<Option<f64>, Error> {
        self.validate(index)?;
        Ok(self.inset_end[index])
    }

    // -- Stack properties --

    /// Sets how layer padding affects subsequent layers.
    pub fn set_padding_mode(&mut self, mode: PaddingMode) {
        if self.padding_mode != mode {
            self.padding_mode = mode;
            self.layout_dirty = true;
        }
    }

    /// Returns the padding mode.
    #[must_use]
    pub fn padding_mode(&self) -> PaddingMode {
        self.padding_mode
    }

    /// Overrides the aggregate opacity. `None` restores the value computed
    /// from the layers.
    pub fn set_opacity_override(&mut self, opacity: Option<Opacity>) {
        self.opacity_override = opacity;
    }

    /// Returns the opacity override, if any.
    #[must_use]
    pub fn opacity_override(&self) -> Option<Opacity> {
        self.opacity_override
    }

    // -- Internal helpers --

    /// Fails with [`Error::IndexOutOfRange`] unless `index < len()`.
    pub(crate) fn validate(&self, index: usize) -> Result<(), Error> {
        let len = self.len();
        if index < len {
            Ok(())
        } else {
            Err(Error::IndexOutOfRange { index, len })
        }
    }

    fn push_layer(&mut self, mut drawable: D, insets: Insets, id: Option<LayerIdent>) -> usize {
        self.prepare_drawable(&mut drawable);
        let index = self.drawables.len();
        let padding = drawable.padding();
        self.drawables.push(drawable);
        self.insets.push(insets);
        self.inset_start.push(None);
        self.inset_end.push(None);
        self.width.push(None);
        self.height.push(None);
        self.gravity.push(Gravity::NONE);
        self.ids.push(id);
        self.padding.push(padding);
        debug_assert_eq!(self.padding.len(), self.drawables.len());
        self.mark_content(index);
        index
    }

    fn replace_drawable(&mut self, index: usize, mut drawable: D) -> D {
        self.prepare_drawable(&mut drawable);
        drawable.set_bounds(self.drawables[index].bounds());
        let old = core::mem::replace(&mut self.drawables[index], drawable);
        self.refresh_padding(index);
        self.mark_content(index);
        old
    }

    fn update_inset(
        &mut self,
        index: usize,
        value: f64,
        set: impl FnOnce(&mut Insets, f64),
    ) -> Result<(), Error> {
        self.validate(index)?;
        let value = check_inset(value)?;
        set(&mut self.insets[index], value);
        self.mark_layout(index);
        Ok(())
    }

    /// Marks a layer's layout attributes dirty.
    pub(crate) fn mark_layout(&mut self, index: usize) {
        self.dirty.mark(key(index), dirty::LAYOUT);
        self.layout_dirty = true;
    }

    /// Marks a layer's drawable dirty and drops aggregate caches.
    pub(crate) fn mark_content(&mut self, index: usize) {
        self.dirty.mark(key(index), dirty::CONTENT);
        self.invalidate_caches();
        self.layout_dirty = true;
    }

    pub(crate) fn invalidate_caches(&self) {
        self.cached_opacity.set(None);
        self.cached_stateful.set(None);
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing::TestDrawable;
    use super::*;
    use crate::error::ConfigurationError;

    fn two_layers() -> LayerStack<TestDrawable> {
        LayerStack::from_drawables([TestDrawable::sized(10.0, 10.0), TestDrawable::sized(20.0, 5.0)])
    }

    #[test]
    fn add_layer_returns_sequential_indices() {
        let mut stack = LayerStack::new();
        assert!(stack.is_empty());
        let a = stack
            .add_layer(TestDrawable::sized(1.0, 1.0), Insets::ZERO, None)
            .unwrap();
        let b = stack
            .add_layer(TestDrawable::sized(1.0, 1.0), Insets::uniform(2.0), Some(LayerIdent(7)))
            .unwrap();
        assert_eq!((a, b), (0, 1));
        assert_eq!(stack.len(), 2);
        assert_eq!(stack.layer_inset(1).unwrap(), Insets::uniform(2.0));
        assert_eq!(stack.id(1).unwrap(), Some(LayerIdent(7)));
        assert_eq!(stack.id(0).unwrap(), None);
        assert!(stack.padding.len() >= stack.len());
    }

    #[test]
    fn add_layer_rejects_non_finite_insets() {
        let mut stack = two_layers();
        let err = stack
            .add_layer(
                TestDrawable::sized(1.0, 1.0),
                Insets::new(0.0, f64::NAN, 0.0, 0.0),
                None,
            )
            .unwrap_err();
        assert_eq!(err, Error::Configuration(ConfigurationError::NonFiniteInset));
        assert_eq!(stack.len(), 2);
    }

    #[test]
    fn index_lookup_prefers_lowest_and_drawable_lookup_prefers_highest() {
        let mut stack = LayerStack::new();
        let shared = LayerIdent(42);
        stack
            .add_layer(TestDrawable::sized(1.0, 1.0), Insets::ZERO, None)
            .unwrap();
        stack
            .add_layer(TestDrawable::sized(2.0, 2.0), Insets::ZERO, Some(shared))
            .unwrap();
        stack
            .add_layer(TestDrawable::sized(3.0, 3.0), Insets::ZERO, Some(shared))
            .unwrap();

        assert_eq!(stack.find_index_by_id(shared), Some(1));
        let found = stack.find_drawable_by_id(shared).unwrap();
        assert_eq!(found.intrinsic.width, Some(3.0));

        assert_eq!(stack.find_index_by_id(LayerIdent(1)), None);
        assert!(stack.find_drawable_by_id(LayerIdent(1)).is_none());
    }

    #[test]
    fn set_drawable_by_id_replaces_lowest_match() {
        let mut stack = LayerStack::new();
        let shared = LayerIdent(5);
        stack
            .add_layer(TestDrawable::sized(1.0, 1.0), Insets::ZERO, Some(shared))
            .unwrap();
        stack
            .add_layer(TestDrawable::sized(2.0, 2.0), Insets::ZERO, Some(shared))
            .unwrap();

        let old = stack
            .set_drawable_by_id(shared, TestDrawable::sized(9.0, 9.0))
            .unwrap();
        assert_eq!(old.intrinsic.width, Some(1.0));
        assert_eq!(stack.drawable(0).unwrap().intrinsic.width, Some(9.0));
        assert_eq!(stack.drawable(1).unwrap().intrinsic.width, Some(2.0));

        let rejected = stack
            .set_drawable_by_id(LayerIdent(6), TestDrawable::sized(4.0, 4.0))
            .unwrap_err();
        assert_eq!(rejected.intrinsic.width, Some(4.0));
    }

    #[test]
    fn set_drawable_transfers_bounds() {
        let mut stack = two_layers();
        stack.layout_layers(Rect::new(0.0, 0.0, 30.0, 30.0), LayoutDirection::Ltr);
        let old_bounds = stack.drawable(1).unwrap().bounds;

        let _ = stack.set_drawable(1, TestDrawable::sized(1.0, 1.0)).unwrap();
        assert_eq!(stack.drawable(1).unwrap().bounds, old_bounds);
    }

    #[test]
    fn out_of_range_gravity_leaves_stack_unmodified() {
        let mut stack = two_layers();
        let err = stack.set_layer_gravity(5, Gravity::CENTER).unwrap_err();
        assert_eq!(err, Error::IndexOutOfRange { index: 5, len: 2 });
        assert_eq!(stack.layer_gravity(0).unwrap(), Gravity::NONE);
        assert_eq!(stack.layer_gravity(1).unwrap(), Gravity::NONE);
    }

    #[test]
    fn every_index_accessor_fails_fast() {
        let mut stack = two_layers();
        let oob = Error::IndexOutOfRange { index: 2, len: 2 };
        assert_eq!(stack.drawable(2).unwrap_err(), oob);
        assert_eq!(stack.id(2).unwrap_err(), oob);
        assert_eq!(stack.set_id(2, None).unwrap_err(), oob);
        assert_eq!(stack.set_layer_size(2, None, None).unwrap_err(), oob);
        assert_eq!(stack.layer_width(2).unwrap_err(), oob);
        assert_eq!(stack.set_layer_inset_left(2, 1.0).unwrap_err(), oob);
        assert_eq!(stack.set_layer_inset_start(2, Some(1.0)).unwrap_err(), oob);
        assert_eq!(
            stack
                .set_drawable(2, TestDrawable::sized(1.0, 1.0))
                .unwrap_err(),
            oob
        );
    }

    #[test]
    fn negative_size_is_rejected_without_mutation() {
        let mut stack = two_layers();
        stack.set_layer_size(0, Some(4.0), Some(4.0)).unwrap();
        let err = stack.set_layer_size(0, Some(8.0), Some(-1.0)).unwrap_err();
        assert_eq!(
            err,
            Error::Configuration(ConfigurationError::NegativeSize {
                axis: Axis::Vertical,
                value: -1.0
            })
        );
        assert_eq!(stack.layer_width(0).unwrap(), Some(4.0));
        assert_eq!(stack.layer_height(0).unwrap(), Some(4.0));
    }

    #[test]
    fn inset_setters() {
        let mut stack = two_layers();
        stack.set_layer_inset_relative(0, 1.0, 2.0, 3.0, 4.0).unwrap();
        assert_eq!(stack.layer_inset(0).unwrap(), Insets::new(0.0, 2.0, 0.0, 4.0));
        assert_eq!(stack.layer_inset_start(0).unwrap(), Some(1.0));
        assert_eq!(stack.layer_inset_end(0).unwrap(), Some(3.0));

        stack.set_layer_inset(0, Insets::new(5.0, 6.0, 7.0, 8.0)).unwrap();
        assert_eq!(stack.layer_inset_start(0).unwrap(), None);
        assert_eq!(stack.layer_inset_end(0).unwrap(), None);

        stack.set_layer_inset_left(1, 1.0).unwrap();
        stack.set_layer_inset_top(1, 2.0).unwrap();
        stack.set_layer_inset_right(1, 3.0).unwrap();
        stack.set_layer_inset_bottom(1, 4.0).unwrap();
        assert_eq!(stack.layer_inset(1).unwrap(), Insets::new(1.0, 2.0, 3.0, 4.0));
    }

    #[test]
    fn explicit_size_does_not_touch_drawable() {
        let mut stack = two_layers();
        stack.set_layer_size(0, Some(50.0), None).unwrap();
        stack.set_layer_height(0, Some(7.0)).unwrap();
        stack.set_layer_width(1, Some(3.0)).unwrap();
        assert_eq!(
            stack.drawable(0).unwrap().intrinsic.width,
            Some(10.0),
            "explicit size must not change the drawable's own intrinsic size"
        );
        assert_eq!(stack.layer_width(0).unwrap(), Some(50.0));
        assert_eq!(stack.layer_height(0).unwrap(), Some(7.0));
        assert_eq!(stack.layer_width(1).unwrap(), Some(3.0));
    }
}
