//! Block-structured rich text used for event and project descriptions.
//!
//! The editor saves `{ time, blocks, version }` and the backend stores it as a
//! serialized string. Older records hold plain text instead.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single typed content block, e.g. `paragraph` with `{ "text": ... }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub data: Value,
}

impl Block {
    pub fn paragraph(text: impl Into<String>) -> Self {
        Self {
            id: None,
            kind: "paragraph".to_string(),
            data: serde_json::json!({ "text": text.into() }),
        }
    }

    pub fn header(text: impl Into<String>, level: u8) -> Self {
        Self {
            id: None,
            kind: "header".to_string(),
            data: serde_json::json!({ "text": text.into(), "level": level }),
        }
    }

    fn text(&self) -> Option<&str> {
        self.data.get("text").and_then(Value::as_str)
    }
}

/// An ordered list of blocks plus the editor's volatile save metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BlockDocument {
    /// Save time in epoch millis; rewritten on every save
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<i64>,
    #[serde(default)]
    pub blocks: Vec<Block>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl BlockDocument {
    pub fn new(blocks: Vec<Block>) -> Self {
        Self {
            time: None,
            blocks,
            version: None,
        }
    }

    /// Wrap plain text as a one-paragraph document.
    pub fn paragraph(text: impl Into<String>) -> Self {
        Self::new(vec![Block::paragraph(text)])
    }

    /// Read a stored description. Anything that is not a serialized block
    /// document is treated as legacy plain text.
    pub fn parse(raw: &str) -> Self {
        if raw.trim().is_empty() {
            return Self::default();
        }

        match serde_json::from_str::<Value>(raw) {
            Ok(value @ Value::Object(_)) if value.get("blocks").is_some_and(Value::is_array) => {
                serde_json::from_value(value).unwrap_or_else(|_| Self::paragraph(raw))
            }
            _ => Self::paragraph(raw),
        }
    }

    /// Serialize for transport.
    pub fn to_wire(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Content equality: compares blocks only, ignoring `time` and `version`.
    pub fn same_content(&self, other: &BlockDocument) -> bool {
        self.blocks == other.blocks
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Text of all text-bearing blocks, tags stripped, one block per line.
    pub fn plain_text(&self) -> String {
        self.blocks
            .iter()
            .filter_map(Block::text)
            .map(strip_tags)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn strip_tags(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut in_tag = false;
    for ch in html.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    out.replace("&nbsp;", " ").trim().to_string()
}
