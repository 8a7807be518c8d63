// Copyright 2026 the Laminate Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout passes and change reporting.
//!
//! A layout pass walks the layers bottom to top. For each layer it:
//!
//! 1. Resolves start / end insets to left / right for the layout direction.
//! 2. Shrinks the container by those insets and by the running padding
//!    (non-zero only in [`PaddingMode::Nest`]).
//! 3. Resolves the layer's gravity, filling unspecified axes unless the layer
//!    has an explicit size there.
//! 4. Applies the gravity to the layer's size and hands the result to the
//!    drawable.
//!
//! [`LayerStack::update`] wraps a pass with padding refresh and drains every
//! dirty channel into [`LayoutChanges`], following a drain-and-report
//! pattern. Indices in [`LayoutChanges`] are raw layer indices.

use alloc::vec::Vec;

use kurbo::{Insets, Rect};

use super::padding::{PaddingMode, sum_insets};
use super::stack::LayerStack;
use crate::dirty;
use crate::drawable::Drawable;
use crate::gravity::{Gravity, LayoutDirection};
use crate::trace::{
    LayerPlacedEvent, LayoutBeginEvent, LayoutEndEvent, PaddingChangedEvent, TraceSink, Tracer,
    UpdateSummary,
};

/// The set of changes produced by a single [`LayerStack::update`] call.
#[derive(Clone, Debug, Default)]
pub struct LayoutChanges {
    /// Layers whose insets, size or gravity changed.
    pub attributes: Vec<u32>,
    /// Layers whose cached padding changed.
    pub padding: Vec<u32>,
    /// Layers whose drawable was added, replaced or mutably borrowed.
    pub content: Vec<u32>,
    /// Whether a layout pass ran.
    pub layout_ran: bool,
}

impl LayoutChanges {
    /// Clears all change lists.
    pub fn clear(&mut self) {
        self.attributes.clear();
        self.padding.clear();
        self.content.clear();
        self.layout_ran = false;
    }

    /// Returns whether nothing changed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.layout_ran
            && self.attributes.is_empty()
            && self.padding.is_empty()
            && self.content.is_empty()
    }
}

impl<D: Drawable> LayerStack<D> {
    /// Places every layer inside `container`, resolving start / end values
    /// for `direction`.
    ///
    /// Uses the cached per-layer padding; padding the drawables changed since
    /// the last refresh is picked up by [`update`](Self::update). Running this
    /// twice with the same inputs assigns the same rectangles.
    pub fn layout_layers(&mut self, container: Rect, direction: LayoutDirection) {
        self.layout_layers_traced(container, direction, &mut Tracer::none());
    }

    /// Like [`layout_layers`](Self::layout_layers), reporting each placement
    /// to `tracer`.
    pub fn layout_layers_traced(
        &mut self,
        container: Rect,
        direction: LayoutDirection,
        tracer: &mut Tracer<'_>,
    ) {
        let nest = self.padding_mode == PaddingMode::Nest;
        tracer.layout_begin(&LayoutBeginEvent {
            container,
            direction,
            padding_mode: self.padding_mode,
            layer_count: self.len(),
        });

        let mut running = Insets::ZERO;
        for i in 0..self.len() {
            let (left, right) = self.resolved_horizontal_insets(i, direction);
            let insets = self.insets[i];
            let containing = Rect::new(
                container.x0 + left + running.x0,
                container.y0 + insets.y0 + running.y0,
                container.x1 - right - running.x1,
                container.y1 - insets.y1 - running.y1,
            );

            let gravity = resolve_gravity(self.gravity[i], self.width[i], self.height[i]);
            let intrinsic = self.drawables[i].intrinsic_size();
            let width = self.width[i].or(intrinsic.width).unwrap_or(0.0).max(0.0);
            let height = self.height[i].or(intrinsic.height).unwrap_or(0.0).max(0.0);
            let bounds = gravity.apply(width, height, containing, direction);
            self.drawables[i].set_bounds(bounds);

            tracer.layer_placed(&LayerPlacedEvent {
                index: i,
                containing,
                gravity,
                bounds,
            });

            if nest {
                running = sum_insets(running, self.padding[i]);
            }
        }

        tracer.layout_end(&LayoutEndEvent {
            layer_count: self.len(),
            running_padding: running,
        });
        self.layout_dirty = false;
    }

    /// Sets the stack's bounds and re-lays out all layers.
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
        self.layout_layers(bounds, self.direction);
    }

    /// Returns the stack's bounds.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Returns the stack's layout direction.
    #[must_use]
    pub fn layout_direction(&self) -> LayoutDirection {
        self.direction
    }

    /// Whether attributes or padding changed since the last layout pass.
    #[must_use]
    pub fn needs_layout(&self) -> bool {
        self.layout_dirty
    }

    /// Refreshes padding, re-lays out within [`bounds`](Self::bounds) if
    /// anything changed, and reports what changed since the last update.
    pub fn update(&mut self) -> LayoutChanges {
        let mut changes = LayoutChanges::default();
        self.update_into(&mut changes);
        changes
    }

    /// Like [`update`](Self::update), but reuses a caller-provided buffer.
    pub fn update_into(&mut self, changes: &mut LayoutChanges) {
        self.update_impl(changes, &mut Tracer::none());
    }

    /// Like [`update`](Self::update), reporting padding changes, the layout
    /// pass and a summary to `sink`.
    pub fn update_traced(&mut self, sink: &mut dyn TraceSink) -> LayoutChanges {
        let mut changes = LayoutChanges::default();
        self.update_impl(&mut changes, &mut Tracer::new(sink));
        changes
    }

    fn update_impl(&mut self, changes: &mut LayoutChanges, tracer: &mut Tracer<'_>) {
        changes.clear();

        self.refresh_all_padding();

        if self.layout_dirty {
            self.layout_layers_traced(self.bounds, self.direction, tracer);
            changes.layout_ran = true;
        }

        changes.attributes = self
            .dirty
            .drain(dirty::LAYOUT)
            .deterministic()
            .run()
            .collect();
        changes.padding = self
            .dirty
            .drain(dirty::PADDING)
            .deterministic()
            .run()
            .collect();
        changes.content = self
            .dirty
            .drain(dirty::CONTENT)
            .deterministic()
            .run()
            .collect();

        for &idx in &changes.padding {
            tracer.padding_changed(&PaddingChangedEvent {
                index: idx as usize,
                padding: self.padding[idx as usize],
            });
        }
        tracer.update(&UpdateSummary {
            layout_ran: changes.layout_ran,
            attribute_changes: changes.attributes.len(),
            padding_changes: changes.padding.len(),
            content_changes: changes.content.len(),
        });
    }
}

/// Fills in the axes `gravity` leaves unspecified and adds clipping on both
/// axes so placements never leave the containing rectangle.
///
/// An unspecified axis fills unless the layer has an explicit size on it, in
/// which case it anchors to the start (horizontal) or top (vertical).
fn resolve_gravity(gravity: Gravity, width: Option<f64>, height: Option<f64>) -> Gravity {
    let mut resolved = gravity;
    if !gravity.is_horizontal() {
        resolved |= if width.is_some() {
            Gravity::START
        } else {
            Gravity::FILL_HORIZONTAL
        };
    }
    if !gravity.is_vertical() {
        resolved |= if height.is_some() {
            Gravity::TOP
        } else {
            Gravity::FILL_VERTICAL
        };
    }
    resolved | Gravity::CLIP_HORIZONTAL | Gravity::CLIP_VERTICAL
}
