// Copyright 2026 the Laminate Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory event recording.
//!
//! [`RecorderSink`] implements [`TraceSink`] and keeps a copy of every event
//! it receives, in arrival order, as a [`RecordedEvent`]. Recordings can be
//! inspected directly or handed to [`json::export`](crate::json::export).

use laminate_core::trace::{
    LayerPlacedEvent, LayoutBeginEvent, LayoutEndEvent, PaddingChangedEvent, TraceSink,
    UpdateSummary,
};

/// A single recorded trace event.
#[derive(Clone, Copy, Debug)]
pub enum RecordedEvent {
    /// A layout pass started.
    LayoutBegin(LayoutBeginEvent),
    /// A layer was placed.
    LayerPlaced(LayerPlacedEvent),
    /// A layout pass finished.
    LayoutEnd(LayoutEndEvent),
    /// A layer's cached padding changed.
    PaddingChanged(PaddingChangedEvent),
    /// An update finished.
    Update(UpdateSummary),
}

/// A [`TraceSink`] that records every event in memory.
#[derive(Debug, Default)]
pub struct RecorderSink {
    events: Vec<RecordedEvent>,
}

impl RecorderSink {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded events in arrival order.
    #[must_use]
    pub fn events(&self) -> &[RecordedEvent] {
        &self.events
    }

    /// Consumes the recorder and returns the recorded events.
    #[must_use]
    pub fn into_events(self) -> Vec<RecordedEvent> {
        self.events
    }

    /// Discards everything recorded so far.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl TraceSink for RecorderSink {
    fn on_layout_begin(&mut self, e: &LayoutBeginEvent) {
        self.events.push(RecordedEvent::LayoutBegin(*e));
    }

    fn on_layer_placed(&mut self, e: &LayerPlacedEvent) {
        self.events.push(RecordedEvent::LayerPlaced(*e));
    }

    fn on_layout_end(&mut self, e: &LayoutEndEvent) {
        self.events.push(RecordedEvent::LayoutEnd(*e));
    }

    fn on_padding_changed(&mut self, e: &PaddingChangedEvent) {
        self.events.push(RecordedEvent::PaddingChanged(*e));
    }

    fn on_update(&mut self, s: &UpdateSummary) {
        self.events.push(RecordedEvent::Update(*s));
    }
}
