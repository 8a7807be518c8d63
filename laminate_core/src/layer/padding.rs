// Copyright 2026 the Laminate Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Padding aggregation and intrinsic size.

use kurbo::Insets;

use super::stack::LayerStack;
use crate::dirty;
use crate::drawable::{Drawable, IntrinsicSize};
use crate::gravity::LayoutDirection;
use crate::layer::id::key;

/// How the padding of each layer affects the layers above it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PaddingMode {
    /// Each layer is inset by the sum of the padding of all layers below
    /// it. The stack's padding is the per-side sum.
    #[default]
    Nest,
    /// Every layer is placed directly in the container. The stack's padding
    /// is the per-side maximum.
    Stack,
}

impl<D: Drawable> LayerStack<D> {
    /// Returns the stack's padding aggregated under `mode`.
    ///
    /// Every layer's cached padding is refreshed from its drawable first; a
    /// layer whose padding changed is marked on the
    /// [`PADDING`](crate::dirty::PADDING) channel and the stack then
    /// [needs layout](Self::needs_layout).
    pub fn aggregate_padding(&mut self, mode: PaddingMode) -> Insets {
        self.refresh_all_padding();
        self.fold_padding(mode)
    }

    /// Returns the stack's padding under its own [`PaddingMode`]. See
    /// [`aggregate_padding`](Self::aggregate_padding).
    pub fn padding(&mut self) -> Insets {
        self.aggregate_padding(self.padding_mode)
    }

    /// Returns whether any side of [`padding`](Self::padding) is non-zero.
    pub fn has_padding(&mut self) -> bool {
        let p = self.padding();
        p.x0 != 0.0 || p.y0 != 0.0 || p.x1 != 0.0 || p.y1 != 0.0
    }

    fn fold_padding(&self, mode: PaddingMode) -> Insets {
        let padding = &self.padding[..self.len()];
        match mode {
            PaddingMode::Nest => padding.iter().fold(Insets::ZERO, |acc, p| sum_insets(acc, *p)),
            PaddingMode::Stack => padding.iter().fold(Insets::ZERO, |acc, p| Insets {
                x0: acc.x0.max(p.x0),
                y0: acc.y0.max(p.y0),
                x1: acc.x1.max(p.x1),
                y1: acc.y1.max(p.y1),
            }),
        }
    }

    /// Re-reads the padding of one layer's drawable. Returns whether the
    /// cached value changed.
    pub(crate) fn refresh_padding(&mut self, index: usize) -> bool {
        let padding = self.drawables[index].padding();
        if self.padding[index] == padding {
            return false;
        }
        self.padding[index] = padding;
        self.dirty.mark(key(index), dirty::PADDING);
        self.layout_dirty = true;
        true
    }

    /// Re-reads the padding of every layer. Returns whether any changed.
    pub(crate) fn refresh_all_padding(&mut self) -> bool {
        let mut changed = false;
        for index in 0..self.len() {
            changed |= self.refresh_padding(index);
        }
        changed
    }

    // -- Intrinsic size --

    /// Returns the smallest size that fits every layer, with `None` in a
    /// dimension where no layer has an explicit or intrinsic size.
    ///
    /// A layer contributes its size plus its insets and, in
    /// [`PaddingMode::Nest`], the accumulated padding of the layers below
    /// it. Start / end insets are resolved against the current layout
    /// direction.
    #[must_use]
    pub fn intrinsic_size(&self) -> IntrinsicSize {
        IntrinsicSize {
            width: self.intrinsic_width(),
            height: self.intrinsic_height(),
        }
    }

    /// Width half of [`intrinsic_size`](Self::intrinsic_size).
    #[must_use]
    pub fn intrinsic_width(&self) -> Option<f64> {
        let nest = self.padding_mode == PaddingMode::Nest;
        let mut running = 0.0;
        let mut width: Option<f64> = None;
        for i in 0..self.len() {
            let own = self.width[i].or(self.drawables[i].intrinsic_size().width);
            if let Some(w) = own {
                let (left, right) = self.resolved_horizontal_insets(i, self.direction);
                let extent = w + left + right + running;
                width = Some(width.map_or(extent, |cur| cur.max(extent)));
            }
            if nest {
                running += self.padding[i].x0 + self.padding[i].x1;
            }
        }
        width
    }

    /// Height half of [`intrinsic_size`](Self::intrinsic_size).
    #[must_use]
    pub fn intrinsic_height(&self) -> Option<f64> {
        let nest = self.padding_mode == PaddingMode::Nest;
        let mut running = 0.0;
        let mut height: Option<f64> = None;
        for i in 0..self.len() {
            let own = self.height[i].or(self.drawables[i].intrinsic_size().height);
            if let Some(h) = own {
                let insets = self.insets[i];
                let extent = h + insets.y0 + insets.y1 + running;
                height = Some(height.map_or(extent, |cur| cur.max(extent)));
            }
            if nest {
                running += self.padding[i].y0 + self.padding[i].y1;
            }
        }
        height
    }

    /// Resolves a layer's `(left, right)` insets for `direction`. A set
    /// start / end inset overrides the absolute one on its side.
    pub(crate) fn resolved_horizontal_insets(
        &self,
        index: usize,
        direction: LayoutDirection,
    ) -> (f64, f64) {
        let insets = self.insets[index];
        let start = self.inset_start[index];
        let end = self.inset_end[index];
        if direction.is_rtl() {
            (end.unwrap_or(insets.x0), start.unwrap_or(insets.x1))
        } else {
            (start.unwrap_or(insets.x0), end.unwrap_or(insets.x1))
        }
    }
}

/// Per-side sum of two insets.
pub(crate) fn sum_insets(a: Insets, b: Insets) -> Insets {
    Insets::new(a.x0 + b.x0, a.y0 + b.y0, a.x1 + b.x1, a.y1 + b.y1)
}
