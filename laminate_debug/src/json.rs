// Copyright 2026 the Laminate Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JSON export of recorded events.
//!
//! [`export`] writes the events captured by a
//! [`RecorderSink`](crate::recorder::RecorderSink) as a JSON array with one
//! object per event. Each object carries a `"kind"` tag and the event's
//! fields; rectangles are `[x0, y0, x1, y1]` and insets are
//! `[left, top, right, bottom]`.

use std::io::{self, Write};

use kurbo::{Insets, Rect};
use serde_json::{Value, json};

use crate::recorder::RecordedEvent;

/// Writes `events` as a JSON array to `writer`.
pub fn export(events: &[RecordedEvent], writer: &mut dyn Write) -> io::Result<()> {
    let values: Vec<Value> = events.iter().map(to_value).collect();
    serde_json::to_writer(&mut *writer, &Value::Array(values))?;
    writer.flush()
}

/// Converts one event to its JSON object.
#[must_use]
pub fn to_value(event: &RecordedEvent) -> Value {
    match event {
        RecordedEvent::LayoutBegin(e) => json!({
            "kind": "layout_begin",
            "container": rect(e.container),
            "direction": format!("{:?}", e.direction),
            "padding_mode": format!("{:?}", e.padding_mode),
            "layer_count": e.layer_count,
        }),
        RecordedEvent::LayerPlaced(e) => json!({
            "kind": "layer_placed",
            "index": e.index,
            "containing": rect(e.containing),
            "gravity": e.gravity.bits(),
            "bounds": rect(e.bounds),
        }),
        RecordedEvent::LayoutEnd(e) => json!({
            "kind": "layout_end",
            "layer_count": e.layer_count,
            "running_padding": insets(e.running_padding),
        }),
        RecordedEvent::PaddingChanged(e) => json!({
            "kind": "padding_changed",
            "index": e.index,
            "padding": insets(e.padding),
        }),
        RecordedEvent::Update(s) => json!({
            "kind": "update",
            "layout_ran": s.layout_ran,
            "attribute_changes": s.attribute_changes,
            "padding_changes": s.padding_changes,
            "content_changes": s.content_changes,
        }),
    }
}

fn rect(r: Rect) -> Value {
    json!([r.x0, r.y0, r.x1, r.y1])
}

fn insets(i: Insets) -> Value {
    json!([i.x0, i.y0, i.x1, i.y1])
}

#[cfg(test)]
mod tests {
    use super::*;
    use laminate_core::gravity::{Gravity, LayoutDirection};
    use laminate_core::layer::PaddingMode;
    use laminate_core::trace::{LayerPlacedEvent, LayoutBeginEvent, TraceSink};

    use crate::recorder::RecorderSink;

    #[test]
    fn export_produces_valid_json() {
        let mut rec = RecorderSink::new();
        rec.on_layout_begin(&LayoutBeginEvent {
            container: Rect::new(0.0, 0.0, 10.0, 10.0),
            direction: LayoutDirection::Rtl,
            padding_mode: PaddingMode::Stack,
            layer_count: 1,
        });
        rec.on_layer_placed(&LayerPlacedEvent {
            index: 0,
            containing: Rect::new(0.0, 0.0, 10.0, 10.0),
            gravity: Gravity::END,
            bounds: Rect::new(0.0, 0.0, 4.0, 10.0),
        });

        let mut out = Vec::new();
        export(rec.events(), &mut out).unwrap();
        let json_str = String::from_utf8(out).unwrap();

        let parsed: Vec<Value> = serde_json::from_str(&json_str).unwrap();
        assert_eq!(parsed.len(), 2);

        assert_eq!(parsed[0]["kind"], "layout_begin");
        assert_eq!(parsed[0]["direction"], "Rtl");
        assert_eq!(parsed[0]["padding_mode"], "Stack");

        assert_eq!(parsed[1]["kind"], "layer_placed");
        assert_eq!(parsed[1]["gravity"], Gravity::END.bits());
        assert_eq!(parsed[1]["bounds"], json!([0.0, 0.0, 4.0, 10.0]));
    }

    #[test]
    fn export_empty_recording() {
        let mut out = Vec::new();
        export(&[], &mut out).unwrap();
        let json_str = String::from_utf8(out).unwrap();
        let parsed: Vec<Value> = serde_json::from_str(&json_str).unwrap();
        assert!(parsed.is_empty());
    }
}
