// Copyright 2026 the Laminate Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layered drawable composition with gravity-based layout.
//!
//! `laminate_core` manages an ordered stack of drawables drawn on top of
//! each other. Each layer carries insets, an optional explicit size and a
//! gravity; the stack turns them into a placement rectangle per layer,
//! aggregates padding across layers and forwards host state (pressed,
//! level, layout direction, visibility, alpha) to every drawable. It is
//! `no_std` compatible (with `alloc`) and uses struct-of-arrays storage
//! addressed by layer index.
//!
//! # Architecture
//!
//! ```text
//!   host mutations (set_state, set_layer_*, drawable_mut, ...)
//!       │
//!       ▼
//!   LayerStack::update() ──► LayoutChanges
//!       │
//!       ▼
//!   LayerStack::draw() ──► Painter::paint() (bottom layer first)
//! ```
//!
//! **[`layer`]** — The [`LayerStack`](layer::LayerStack) itself: layer
//! storage and lookup, per-layer attributes, padding aggregation, intrinsic
//! size, layout and host-state fan-out.
//!
//! **[`drawable`]** — The [`Drawable`](drawable::Drawable) capability trait
//! host drawables implement, and the [`Opacity`](drawable::Opacity) model.
//!
//! **[`gravity`]** — Bit-encoded [`Gravity`](gravity::Gravity) placement
//! flags and [`LayoutDirection`](gravity::LayoutDirection).
//!
//! **[`dirty`]** — Dirty channels via `understory_dirty`. Attribute setters,
//! padding refreshes and drawable changes mark their channel; updates drain
//! them.
//!
//! **[`paint`]** — The [`Painter`](paint::Painter) trait rendering crates
//! implement.
//!
//! **[`error`]** — [`Error`](error::Error) for rejected indices and
//! configuration values.
//!
//! **[`trace`]** — [`TraceSink`](trace::TraceSink) trait and event types for
//! layout instrumentation, with zero-overhead [`Tracer`](trace::Tracer)
//! wrapper.
//!
//! # Example
//!
//! ```
//! use kurbo::{Insets, Rect};
//! use laminate_core::drawable::{Drawable, IntrinsicSize};
//! use laminate_core::gravity::Gravity;
//! use laminate_core::layer::LayerStack;
//!
//! #[derive(Default)]
//! struct Swatch {
//!     bounds: Rect,
//! }
//!
//! impl Drawable for Swatch {
//!     fn intrinsic_size(&self) -> IntrinsicSize {
//!         IntrinsicSize::new(16.0, 16.0)
//!     }
//!     fn bounds(&self) -> Rect {
//!         self.bounds
//!     }
//!     fn set_bounds(&mut self, bounds: Rect) {
//!         self.bounds = bounds;
//!     }
//! }
//!
//! let mut stack = LayerStack::new();
//! stack.add_layer(Swatch::default(), Insets::ZERO, None)?;
//! let badge = stack.add_layer(Swatch::default(), Insets::uniform(2.0), None)?;
//! stack.set_layer_gravity(badge, Gravity::END | Gravity::BOTTOM)?;
//!
//! stack.set_bounds(Rect::new(0.0, 0.0, 40.0, 40.0));
//! assert_eq!(stack.drawable(badge)?.bounds(), Rect::new(22.0, 22.0, 38.0, 38.0));
//! # Ok::<(), laminate_core::error::Error>(())
//! ```
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one branch
//!   per call site).

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod dirty;
pub mod drawable;
pub mod error;
pub mod gravity;
pub mod layer;
pub mod paint;
pub mod trace;
