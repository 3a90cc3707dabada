use serde_json::{Map, Number, Value};

/// Threshold used by the browser bundle, which has no environment to read.
pub const BROWSER_LOG_LEVEL: LogLevel = LogLevel::Info;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "debug" => Some(Self::Debug),
            "info" => Some(Self::Info),
            "warn" | "warning" => Some(Self::Warn),
            _ => None,
        }
    }
}

/// Builds the single-line event object. Extra fields never overwrite `ts`,
/// `level` or `event`.
pub fn event_payload(ts: u64, level: LogLevel, event: &str, fields: Value) -> Value {
    let mut payload = Map::new();
    payload.insert("ts".to_string(), Value::Number(Number::from(ts)));
    payload.insert("level".to_string(), Value::String(level.as_str().to_string()));
    payload.insert("event".to_string(), Value::String(event.to_string()));

    if let Value::Object(extra) = fields {
        for (key, value) in extra {
            payload.entry(key).or_insert(value);
        }
    }

    Value::Object(payload)
}

pub fn log_event(threshold: LogLevel, level: LogLevel, event: &str, fields: Value) {
    if level < threshold {
        return;
    }

    let payload = event_payload(now_unix_seconds(), level, event, fields);
    emit(level, &payload.to_string());
}

#[cfg(target_arch = "wasm32")]
fn now_unix_seconds() -> u64 {
    (js_sys::Date::now() / 1_000.0).max(0.0) as u64
}

#[cfg(not(target_arch = "wasm32"))]
fn now_unix_seconds() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| value.as_secs())
        .unwrap_or(0)
}

#[cfg(target_arch = "wasm32")]
fn emit(level: LogLevel, line: &str) {
    let line = wasm_bindgen::JsValue::from_str(line);
    match level {
        LogLevel::Warn => web_sys::console::warn_1(&line),
        LogLevel::Debug | LogLevel::Info => web_sys::console::log_1(&line),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(level: LogLevel, line: &str) {
    match level {
        LogLevel::Warn => eprintln!("{line}"),
        LogLevel::Debug | LogLevel::Info => println!("{line}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn levels_order_by_severity() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Warn);
    }

    #[test]
    fn level_parsing_is_case_insensitive() {
        assert_eq!(LogLevel::parse(" DEBUG "), Some(LogLevel::Debug));
        assert_eq!(LogLevel::parse("warning"), Some(LogLevel::Warn));
        assert_eq!(LogLevel::parse("trace"), None);
    }

    #[test]
    fn payload_keeps_reserved_keys() {
        let payload = event_payload(
            42,
            LogLevel::Info,
            "contact_submitted",
            json!({ "event": "spoofed", "subject": "Hello" }),
        );

        assert_eq!(payload["ts"], json!(42));
        assert_eq!(payload["level"], json!("info"));
        assert_eq!(payload["event"], json!("contact_submitted"));
        assert_eq!(payload["subject"], json!("Hello"));
    }

    #[test]
    fn non_object_fields_are_ignored() {
        let payload = event_payload(1, LogLevel::Warn, "noise", json!("just a string"));
        let object = payload.as_object().expect("payload is an object");
        assert_eq!(object.len(), 3);
    }
}
