use serde_json::{json, Map, Value};
use std::fmt::Write as _;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::{format::Writer, FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

/// An event's recorded fields, with `message` pulled out.
struct EventFields {
    message: String,
    extra: Map<String, Value>,
}

impl EventFields {
    fn collect(event: &Event<'_>) -> Self {
        let mut fields = EventFields {
            message: String::new(),
            extra: Map::new(),
        };
        event.record(&mut fields);
        fields
    }

    fn insert(&mut self, field: &Field, value: Value) {
        if field.name() == "message" {
            self.message = match value {
                Value::String(s) => s,
                other => other.to_string(),
            };
        } else {
            self.extra.insert(field.name().to_string(), value);
        }
    }
}

impl Visit for EventFields {
    fn record_f64(&mut self, field: &Field, value: f64) {
        self.insert(field, json!(value));
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.insert(field, json!(value));
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.insert(field, json!(value));
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.insert(field, json!(value));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.insert(field, json!(value));
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        self.insert(field, json!(format!("{:?}", value)));
    }
}

/// One JSON object per line: timestamp (local, ms), level, target, pid, tid,
/// file, line, message, `fields` when present, and the crate version.
pub(super) struct JsonLineFormat {
    pid: u32,
}

impl JsonLineFormat {
    pub(super) fn new() -> Self {
        Self {
            pid: std::process::id(),
        }
    }

    fn render(&self, event: &Event<'_>) -> Value {
        let metadata = event.metadata();
        let EventFields { message, extra } = EventFields::collect(event);

        let mut line = json!({
            "timestamp": chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z").to_string(),
            "level": metadata.level().as_str(),
            "target": metadata.target(),
            "pid": self.pid,
            "tid": format!("{:?}", std::thread::current().id()),
            "file": metadata.file(),
            "line": metadata.line(),
            "message": message,
            "version": env!("CARGO_PKG_VERSION"),
        });
        if !extra.is_empty() {
            line["fields"] = Value::Object(extra);
        }
        line
    }
}

impl<S, N> FormatEvent<S, N> for JsonLineFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        writeln!(writer, "{}", self.render(event))
    }
}

/// `2024-06-15 09:00:00.123 INFO teamdo::scheduler carried=3 - Done (src/x.rs:42)`
pub(super) struct ConsoleFormat {
    pid: u32,
}

impl ConsoleFormat {
    pub(super) fn new() -> Self {
        Self {
            pid: std::process::id(),
        }
    }
}

fn coloured(level: &Level) -> &'static str {
    match *level {
        Level::ERROR => "\x1b[31mERROR\x1b[0m",
        Level::WARN => "\x1b[33mWARN\x1b[0m",
        Level::INFO => "\x1b[32mINFO\x1b[0m",
        Level::DEBUG => "\x1b[36mDEBUG\x1b[0m",
        Level::TRACE => "\x1b[35mTRACE\x1b[0m",
    }
}

impl<S, N> FormatEvent<S, N> for ConsoleFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let metadata = event.metadata();
        let fields = EventFields::collect(event);

        let mut line = format!(
            "{} {} {} pid={}",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
            coloured(metadata.level()),
            metadata.target(),
            self.pid
        );
        for (key, value) in &fields.extra {
            let _ = write!(line, " {}={}", key, value);
        }
        let _ = write!(line, " - {}", fields.message);
        if let (Some(file), Some(number)) = (metadata.file(), metadata.line()) {
            let _ = write!(line, " ({}:{})", file, number);
        }

        writeln!(writer, "{}", line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::{fmt, Registry};

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Captured {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    #[test]
    fn test_json_line_shape() {
        let out = Captured::default();
        let writer = out.clone();
        let subscriber = Registry::default().with(
            fmt::layer()
                .with_writer(move || writer.clone())
                .event_format(JsonLineFormat::new()),
        );

        tracing::subscriber::with_default(subscriber, || {
            tracing::warn!(target: "teamdo::carry_over", task_id = "t-1", retries = 2u64, "Task failed");
        });

        let text = out.text();
        assert_eq!(text.lines().count(), 1);
        let line: Value = serde_json::from_str(text.trim_end()).unwrap();
        assert_eq!(line["level"], "WARN");
        assert_eq!(line["target"], "teamdo::carry_over");
        assert_eq!(line["message"], "Task failed");
        assert_eq!(line["fields"]["task_id"], "t-1");
        assert_eq!(line["fields"]["retries"], 2);
        assert_eq!(line["pid"], std::process::id());
        assert!(line["line"].is_u64());
    }

    #[test]
    fn test_json_line_omits_empty_fields() {
        let out = Captured::default();
        let writer = out.clone();
        let subscriber = Registry::default().with(
            fmt::layer()
                .with_writer(move || writer.clone())
                .event_format(JsonLineFormat::new()),
        );

        tracing::subscriber::with_default(subscriber, || tracing::info!("plain"));

        let line: Value = serde_json::from_str(out.text().trim_end()).unwrap();
        assert_eq!(line["message"], "plain");
        assert!(line.get("fields").is_none());
    }

    #[test]
    fn test_console_line_lists_fields_before_message() {
        let out = Captured::default();
        let writer = out.clone();
        let subscriber = Registry::default().with(
            fmt::layer()
                .with_ansi(false)
                .with_writer(move || writer.clone())
                .event_format(ConsoleFormat::new()),
        );

        tracing::subscriber::with_default(subscriber, || {
            tracing::info!(target: "teamdo::scheduler", carried = 3u64, "Done");
        });

        let text = out.text();
        assert!(text.contains("teamdo::scheduler"));
        assert!(text.contains(" carried=3 - Done"));
    }
}
