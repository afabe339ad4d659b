//! # Stock Events
//!
//! Domain events emitted by the repository, and the sinks that carry them.
//!
//! ## Why Events Instead of Dialogs
//! Replenishment used to be a popup problem ("notify the supplier"). As a
//! library the repository cannot pop anything, so it emits a [`StockEvent`]
//! to an injected [`StockEventSink`] and the embedding application decides
//! what a notification looks like: a log line, an NDJSON record for
//! automation, a toast, an email to the supplier.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  InventoryRepository                                                    │
//! │       │ stock observed at or under threshold                            │
//! │       ▼                                                                 │
//! │  StockEvent::Replenished ──► StockEventSink                             │
//! │                                  ├── TracingSink    (default, logs)     │
//! │                                  ├── JsonLinesSink  (NDJSON stream)     │
//! │                                  └── MemorySink     (tests, inspection) │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use serde::Serialize;
use tracing::warn;

// =============================================================================
// Events
// =============================================================================

/// Something notable that happened to stock levels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum StockEvent {
    /// A product was observed at or under the low-stock threshold and reset
    /// to the replenish level. Carries both the level that triggered the
    /// policy and the level the product now sits at.
    Replenished {
        product_id: String,
        name: String,
        observed_stock: i64,
        new_stock: i64,
    },
}

// =============================================================================
// Sink Trait
// =============================================================================

/// Receiver for stock events.
///
/// Implementations must not fail: event delivery is fire-and-forget and
/// never blocks or aborts the stock mutation that produced the event.
pub trait StockEventSink: Send {
    fn on_event(&self, event: StockEvent);
}

/// A shared sink is still a sink. Lets callers keep a handle to the same
/// sink they hand to the repository (e.g. to inspect a [`MemorySink`]).
impl<S: StockEventSink + Sync> StockEventSink for Arc<S> {
    fn on_event(&self, event: StockEvent) {
        (**self).on_event(event);
    }
}

// =============================================================================
// Tracing Sink (default)
// =============================================================================

/// Sink that turns events into structured log records.
///
/// This is the default wiring: with no sink injected, replenishments still
/// leave a trace an operator can see.
#[derive(Debug, Default)]
pub struct TracingSink;

impl StockEventSink for TracingSink {
    fn on_event(&self, event: StockEvent) {
        match event {
            StockEvent::Replenished {
                product_id,
                name,
                observed_stock,
                new_stock,
            } => {
                warn!(
                    id = %product_id,
                    name = %name,
                    observed_stock,
                    new_stock,
                    "Low stock replenished"
                );
            }
        }
    }
}

// =============================================================================
// JSON Lines Sink
// =============================================================================

/// Sink that writes one JSON object per event (NDJSON), for automation.
pub struct JsonLinesSink {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonLinesSink {
    /// Creates a sink writing NDJSON to stdout.
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Creates a sink writing to a custom writer (files, buffers in tests).
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_line(&self, line: &str) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{line}");
            let _ = writer.flush();
        }
    }
}

impl StockEventSink for JsonLinesSink {
    fn on_event(&self, event: StockEvent) {
        if let Ok(json) = serde_json::to_string(&event) {
            self.write_line(&json);
        }
    }
}

// =============================================================================
// Memory Sink
// =============================================================================

/// Sink that collects events in memory for later inspection.
#[derive(Debug, Default)]
pub struct MemorySink {
    events: Mutex<Vec<StockEvent>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of every event received so far, in order.
    pub fn events(&self) -> Vec<StockEvent> {
        self.events.lock().map(|e| e.clone()).unwrap_or_default()
    }
}

impl StockEventSink for MemorySink {
    fn on_event(&self, event: StockEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    struct TestWriter {
        buffer: Arc<Mutex<Vec<u8>>>,
    }

    impl TestWriter {
        fn new() -> (Self, Arc<Mutex<Vec<u8>>>) {
            let buffer = Arc::new(Mutex::new(Vec::new()));
            (
                Self {
                    buffer: buffer.clone(),
                },
                buffer,
            )
        }
    }

    impl Write for TestWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.buffer.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn replenished() -> StockEvent {
        StockEvent::Replenished {
            product_id: "B1".to_string(),
            name: "Cola".to_string(),
            observed_stock: 8,
            new_stock: 100,
        }
    }

    #[test]
    fn test_json_sink_writes_one_line_per_event() {
        let (writer, buffer) = TestWriter::new();
        let sink = JsonLinesSink::with_writer(writer);

        sink.on_event(replenished());

        let output = String::from_utf8(buffer.lock().unwrap().clone()).unwrap();
        assert!(output.ends_with('\n'));
        assert!(output.contains("\"event\":\"replenished\""));
        assert!(output.contains("\"product_id\":\"B1\""));
        assert!(output.contains("\"observed_stock\":8"));
        assert!(output.contains("\"new_stock\":100"));
    }

    #[test]
    fn test_memory_sink_collects_in_order() {
        let sink = MemorySink::new();
        sink.on_event(replenished());
        sink.on_event(StockEvent::Replenished {
            product_id: "S1".to_string(),
            name: "Chips".to_string(),
            observed_stock: 0,
            new_stock: 100,
        });

        let events = sink.events();
        assert_eq!(events.len(), 2);
        assert!(matches!(
            &events[0],
            StockEvent::Replenished { product_id, .. } if product_id == "B1"
        ));
        assert!(matches!(
            &events[1],
            StockEvent::Replenished { observed_stock: 0, .. }
        ));
    }
}
