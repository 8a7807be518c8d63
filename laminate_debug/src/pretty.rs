// Copyright 2026 the Laminate Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per event
//! to a [`Write`](std::io::Write) destination (default: stderr).

use std::io::Write;

use kurbo::{Insets, Rect};
use laminate_core::trace::{
    LayerPlacedEvent, LayoutBeginEvent, LayoutEndEvent, PaddingChangedEvent, TraceSink,
    UpdateSummary,
};

/// Writes human-readable trace lines to a [`Write`](std::io::Write) destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink").finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            writer: Box::new(std::io::stderr()),
        }
    }

    /// Creates a sink that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self { writer }
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the sink and returns the destination.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

struct ShowRect(Rect);

impl std::fmt::Display for ShowRect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let r = self.0;
        write!(f, "({}, {})-({}, {})", r.x0, r.y0, r.x1, r.y1)
    }
}

struct ShowInsets(Insets);

impl std::fmt::Display for ShowInsets {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let i = self.0;
        write!(f, "[l={} t={} r={} b={}]", i.x0, i.y0, i.x1, i.y1)
    }
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_layout_begin(&mut self, e: &LayoutBeginEvent) {
        let _ = writeln!(
            self.writer,
            "[layout:begin] layers={} container={} dir={:?} mode={:?}",
            e.layer_count,
            ShowRect(e.container),
            e.direction,
            e.padding_mode,
        );
    }

    fn on_layer_placed(&mut self, e: &LayerPlacedEvent) {
        let _ = writeln!(
            self.writer,
            "[layer] #{} containing={} gravity={:?} bounds={}",
            e.index,
            ShowRect(e.containing),
            e.gravity,
            ShowRect(e.bounds),
        );
    }

    fn on_layout_end(&mut self, e: &LayoutEndEvent) {
        let _ = writeln!(
            self.writer,
            "[layout:end] layers={} padding={}",
            e.layer_count,
            ShowInsets(e.running_padding),
        );
    }

    fn on_padding_changed(&mut self, e: &PaddingChangedEvent) {
        let _ = writeln!(self.writer, "[padding] #{} {}", e.index, ShowInsets(e.padding));
    }

    fn on_update(&mut self, s: &UpdateSummary) {
        let layout = if s.layout_ran { "ran" } else { "skipped" };
        let _ = writeln!(
            self.writer,
            "[update] layout={layout} attributes={} padding={} content={}",
            s.attribute_changes, s.padding_changes, s.content_changes,
        );
    }
}
