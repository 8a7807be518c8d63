// Copyright 2026 the Laminate Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layer stack data model.
//!
//! A *layer* wraps one [`Drawable`](crate::drawable::Drawable) together with
//! its layout attributes:
//!
//! - An optional identifier ([`LayerIdent`]) used for lookup. Identifiers
//!   need not be unique.
//! - **Insets** from the stack's bounds, either absolute (left / right) or
//!   direction-relative (start / end, which override left / right).
//! - An optional **explicit size** that overrides the drawable's intrinsic
//!   size.
//! - A [`Gravity`](crate::gravity::Gravity) placing the layer inside its
//!   containing rectangle.
//!
//! Layers are stored in struct-of-arrays layout and addressed by index.
//! Index 0 is drawn first (bottom).
//!
//! # Layout
//!
//! [`LayerStack::layout_layers`] places every layer inside the container:
//! the containing rectangle of a layer is the container shrunk by the layer's
//! insets and, in [`PaddingMode::Nest`], by the accumulated padding of all
//! layers below it. Gravity then positions the layer's size within that
//! rectangle. The result is always contained in the containing rectangle.
//!
//! # Dirty tracking
//!
//! Attribute setters mark the layer on the [`LAYOUT`](crate::dirty::LAYOUT)
//! channel; padding refreshes mark [`PADDING`](crate::dirty::PADDING);
//! drawable replacement and mutable access mark
//! [`CONTENT`](crate::dirty::CONTENT). [`LayerStack::update`] refreshes
//! padding, re-lays out if needed and drains all channels into
//! [`LayoutChanges`].

mod id;
mod layout;
mod padding;
mod stack;
mod state;

#[cfg(test)]
pub(crate) mod testing;

pub use id::LayerIdent;
pub use layout::LayoutChanges;
pub use padding::PaddingMode;
pub use stack::LayerStack;
