// Copyright 2026 the Laminate Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Painting contract for rendering integrations.
//!
//! `laminate_core` never rasterizes anything. It owns the data model and
//! layout; a rendering crate implements [`Painter`] for its canvas type and
//! receives each layer's drawable, already placed, in draw order.
//!
//! # Frame pseudocode
//!
//! ```rust,ignore
//! fn on_frame(stack: &mut LayerStack<MyDrawable>, canvas: &mut Canvas) {
//!     // Mutate: host state, attributes, drawables.
//!     stack.set_state(&pressed_state);
//!
//!     // Update: refresh padding and re-lay out what changed.
//!     let changes = stack.update();
//!
//!     // Paint: bottom layer first.
//!     if !changes.is_empty() {
//!         stack.draw(&mut CanvasPainter::new(canvas));
//!     }
//! }
//! ```

use crate::drawable::Drawable;
use crate::layer::LayerStack;

/// Renders placed drawables onto some target.
///
/// Implementations read each drawable's [`bounds`](Drawable::bounds) to know
/// where to paint it.
pub trait Painter<D> {
    /// Paints the drawable of layer `index`.
    fn paint(&mut self, index: usize, drawable: &D);
}

impl<D: Drawable> LayerStack<D> {
    /// Paints every layer, lowest index first, so later layers end up on top.
    pub fn draw(&self, painter: &mut impl Painter<D>) {
        for (index, drawable) in self.drawables().enumerate() {
            painter.paint(index, drawable);
        }
    }
}
