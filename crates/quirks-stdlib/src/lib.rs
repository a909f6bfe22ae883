//! Serde fixture types for the json suite.

use serde::{Deserialize, Serialize};

/// Record type exercised by the serialization suite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Server {
    pub host: String,
    pub port: u16,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Internally tagged enum; the wire form carries a `"type"` field.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    Click { x: i32, y: i32 },
    KeyPress { key: String },
}
