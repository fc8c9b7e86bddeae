use serde_json::{Map, Number, Value};

pub const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;

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
            "warn" => Some(Self::Warn),
            _ => None,
        }
    }
}

/// Emits single-line JSON events at or above a minimum level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Logger {
    level: LogLevel,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(DEFAULT_LOG_LEVEL)
    }
}

impl Logger {
    pub fn new(level: LogLevel) -> Self {
        Self { level }
    }

    pub fn enabled(self, level: LogLevel) -> bool {
        level >= self.level
    }

    pub fn event(self, level: LogLevel, event: &str, fields: Value) {
        if let Some(line) = self.render(level, event, fields, now_unix_seconds()) {
            emit(level, &line);
        }
    }

    fn render(self, level: LogLevel, event: &str, fields: Value, ts: u64) -> Option<String> {
        if !self.enabled(level) {
            return None;
        }

        let mut payload = Map::new();
        payload.insert("ts".to_string(), Value::Number(Number::from(ts)));
        payload.insert("level".to_string(), Value::String(level.as_str().to_string()));
        payload.insert("event".to_string(), Value::String(event.to_string()));

        if let Value::Object(extra) = fields {
            for (key, value) in extra {
                payload.insert(key, value);
            }
        }

        Some(Value::Object(payload).to_string())
    }
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
fn emit(_level: LogLevel, line: &str) {
    println!("{line}");
}

#[cfg(target_arch = "wasm32")]
fn now_unix_seconds() -> u64 {
    (js_sys::Date::now() / 1_000.0) as u64
}

#[cfg(not(target_arch = "wasm32"))]
fn now_unix_seconds() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| value.as_secs())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn events_below_minimum_level_are_dropped() {
        let logger = Logger::new(LogLevel::Info);

        assert!(logger
            .render(LogLevel::Debug, "scroll_tracker_attached", json!({}), 0)
            .is_none());
        assert!(logger
            .render(LogLevel::Warn, "page_config_fallback", json!({}), 0)
            .is_some());
    }

    #[test]
    fn rendered_event_carries_level_name_and_fields() {
        let logger = Logger::new(LogLevel::Debug);
        let line = logger
            .render(
                LogLevel::Debug,
                "section_visibility_changed",
                json!({ "section": "about", "visible": true }),
                1_700_000_000,
            )
            .expect("debug event should render at debug level");

        let parsed: Value = serde_json::from_str(&line).expect("valid JSON line");
        assert_eq!(parsed["ts"], json!(1_700_000_000u64));
        assert_eq!(parsed["level"], json!("debug"));
        assert_eq!(parsed["event"], json!("section_visibility_changed"));
        assert_eq!(parsed["section"], json!("about"));
        assert_eq!(parsed["visible"], json!(true));
        assert!(!line.contains('\n'));
    }

    #[test]
    fn log_level_parsing_is_case_insensitive() {
        assert_eq!(LogLevel::parse(" DEBUG "), Some(LogLevel::Debug));
        assert_eq!(LogLevel::parse("Warn"), Some(LogLevel::Warn));
        assert_eq!(LogLevel::parse("trace"), None);
    }
}
