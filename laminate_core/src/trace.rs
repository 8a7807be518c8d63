// Copyright 2026 the Laminate Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for layout passes.
//!
//! This module provides a [`TraceSink`] trait with per-event methods that the
//! layout pass calls at each stage. All method bodies default to no-ops, so
//! implementing only the events you care about is fine.
//!
//! [`Tracer`] wraps an optional `&mut dyn TraceSink`. When the `trace` feature
//! is **off**, every `Tracer` method compiles to nothing (zero overhead). When
//! **on**, each method performs a single `Option` branch before dispatching.
//!
//! Sinks are handed to
//! [`layout_layers_traced`](crate::layer::LayerStack::layout_layers_traced) and
//! [`update_traced`](crate::layer::LayerStack::update_traced); the untraced
//! entry points use [`Tracer::none`].
//!
//! # Crate features
//!
//! - `trace` — enables the `Tracer` method bodies (one branch per call).

use kurbo::{Insets, Rect};

use crate::gravity::{Gravity, LayoutDirection};
use crate::layer::PaddingMode;

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted before the first layer of a layout pass is placed.
#[derive(Clone, Copy, Debug)]
pub struct LayoutBeginEvent {
    /// Container bounds for the whole stack.
    pub container: Rect,
    /// Direction used to resolve start / end values.
    pub direction: LayoutDirection,
    /// Padding aggregation mode.
    pub padding_mode: PaddingMode,
    /// Number of layers about to be placed.
    pub layer_count: usize,
}

/// Emitted after a layer's placement rectangle has been assigned.
#[derive(Clone, Copy, Debug)]
pub struct LayerPlacedEvent {
    /// Index of the placed layer.
    pub index: usize,
    /// Containing rectangle after insets and running padding.
    pub containing: Rect,
    /// Gravity after defaults were applied.
    pub gravity: Gravity,
    /// Rectangle handed to the drawable.
    pub bounds: Rect,
}

/// Emitted after the last layer of a layout pass is placed.
#[derive(Clone, Copy, Debug)]
pub struct LayoutEndEvent {
    /// Number of layers placed.
    pub layer_count: usize,
    /// Running padding after the last layer (zero in stack mode).
    pub running_padding: Insets,
}

/// Emitted by an update for each layer whose cached padding changed.
#[derive(Clone, Copy, Debug)]
pub struct PaddingChangedEvent {
    /// Index of the layer.
    pub index: usize,
    /// The newly cached padding.
    pub padding: Insets,
}

/// Emitted at the end of an update.
#[derive(Clone, Copy, Debug)]
pub struct UpdateSummary {
    /// Whether a layout pass ran.
    pub layout_ran: bool,
    /// Number of layers with attribute changes.
    pub attribute_changes: usize,
    /// Number of layers with padding changes.
    pub padding_changes: usize,
    /// Number of layers with drawable changes.
    pub content_changes: usize,
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from layout passes and updates.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called before a layout pass places its first layer.
    fn on_layout_begin(&mut self, e: &LayoutBeginEvent) {
        _ = e;
    }

    /// Called after each layer is placed.
    fn on_layer_placed(&mut self, e: &LayerPlacedEvent) {
        _ = e;
    }

    /// Called after a layout pass places its last layer.
    fn on_layout_end(&mut self, e: &LayoutEndEvent) {
        _ = e;
    }

    /// Called for each layer whose cached padding changed.
    fn on_padding_changed(&mut self, e: &PaddingChangedEvent) {
        _ = e;
    }

    /// Called at the end of an update.
    fn on_update(&mut self, s: &UpdateSummary) {
        _ = s;
    }
}

// ---------------------------------------------------------------------------
// NoopSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Thin wrapper around an optional [`TraceSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing. When
/// **on**, each method checks the inner `Option` (one branch) before
/// dispatching to the sink.
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn TraceSink>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut dyn TraceSink>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl<'a> Tracer<'a> {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn TraceSink) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Emits a [`LayoutBeginEvent`].
    #[inline]
    pub fn layout_begin(&mut self, e: &LayoutBeginEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_layout_begin(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`LayerPlacedEvent`].
    #[inline]
    pub fn layer_placed(&mut self, e: &LayerPlacedEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_layer_placed(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`LayoutEndEvent`].
    #[inline]
    pub fn layout_end(&mut self, e: &LayoutEndEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_layout_end(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`PaddingChangedEvent`].
    #[inline]
    pub fn padding_changed(&mut self, e: &PaddingChangedEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_padding_changed(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits an [`UpdateSummary`].
    #[inline]
    pub fn update(&mut self, s: &UpdateSummary) {
        #[cfg(feature = "trace")]
        if let Some(sink) = &mut self.sink {
            sink.on_update(s);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = s;
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
