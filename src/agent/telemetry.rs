//! In-memory telemetry trail of processed events and reflection passes

use crate::core::error::Result;
use crate::core::types::SimTime;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetryEntry {
    pub time: SimTime,
    pub line: String,
}

#[derive(Debug, Clone)]
pub struct TelemetryLogger {
    capacity: usize,
    entries: VecDeque<TelemetryEntry>,
}

impl TelemetryLogger {
    pub const DEFAULT_CAPACITY: usize = 1024;

    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            entries: VecDeque::with_capacity(capacity.min(Self::DEFAULT_CAPACITY)),
        }
    }

    pub fn log(&mut self, time: SimTime, line: impl Into<String>) {
        if self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(TelemetryEntry {
            time,
            line: line.into(),
        });
    }

    pub fn entries(&self) -> impl Iterator<Item = &TelemetryEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn dump(&self) {
        for entry in &self.entries {
            tracing::info!("[telemetry] {:.2};{}", entry.time, entry.line);
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.entries)?)
    }
}

impl Default for TelemetryLogger {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_and_evict() {
        let mut log = TelemetryLogger::new(2);
        log.log(1.0, "a");
        log.log(2.0, "b");
        log.log(3.0, "c");
        let lines: Vec<&str> = log.entries().map(|e| e.line.as_str()).collect();
        assert_eq!(lines, vec!["b", "c"]);
    }

    #[test]
    fn test_dump_keeps_trail() {
        let mut log = TelemetryLogger::new(4);
        log.log(0.5, "ev=Greeting");
        log.log(1.0, "reflection;signal=0.000");
        log.dump();
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn test_json_export() {
        let mut log = TelemetryLogger::default();
        log.log(1.5, "ev=Praise");
        let json = log.to_json().unwrap();
        let parsed: Vec<TelemetryEntry> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].line, "ev=Praise");
    }
}
