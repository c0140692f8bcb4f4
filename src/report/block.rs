//! Content blocks: self-describing renderable units of rich content.
//!
//! Blocks are a tagged union on the wire (a `"type"` discriminator plus the
//! fields of the active variant) and a true sum type here, so renderers
//! match kinds exhaustively at compile time.

use serde::{Deserialize, Serialize};

use crate::Status;

/// A renderable unit of rich content within a report or section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    /// Key-value pairs, one line or bullet per pair.
    KvPairs {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
        #[serde(default)]
        pairs: Vec<KvPair>,
    },
    /// A list of items, one line or bullet per item.
    List {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
        #[serde(default)]
        items: Vec<ListItem>,
    },
    /// A table with a header row and data rows.
    Table {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
        #[serde(default)]
        headers: Vec<String>,
        #[serde(default)]
        rows: Vec<Vec<String>>,
    },
    /// Free-form text, word-wrapped by the box renderer.
    Text {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
        #[serde(default)]
        content: String,
    },
    /// A single labeled measurement with optional target.
    Metric {
        label: String,
        value: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        status: Option<Status>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        target: Option<String>,
    },
}

impl ContentBlock {
    /// Create a kv_pairs block.
    pub fn kv_pairs(title: impl Into<String>, pairs: Vec<KvPair>) -> Self {
        ContentBlock::KvPairs {
            title: some_nonempty(title.into()),
            pairs,
        }
    }

    /// Create a list block.
    pub fn list(title: impl Into<String>, items: Vec<ListItem>) -> Self {
        ContentBlock::List {
            title: some_nonempty(title.into()),
            items,
        }
    }

    /// Create a table block.
    pub fn table(title: impl Into<String>, headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        ContentBlock::Table {
            title: some_nonempty(title.into()),
            headers,
            rows,
        }
    }

    /// Create a text block.
    pub fn text(title: impl Into<String>, content: impl Into<String>) -> Self {
        ContentBlock::Text {
            title: some_nonempty(title.into()),
            content: content.into(),
        }
    }

    /// Create a metric block. Target is optional.
    pub fn metric(
        label: impl Into<String>,
        value: impl Into<String>,
        status: Status,
        target: Option<String>,
    ) -> Self {
        ContentBlock::Metric {
            label: label.into(),
            value: value.into(),
            status: Some(status),
            target,
        }
    }

    /// The block's optional heading. Metric blocks have no heading.
    pub fn title(&self) -> Option<&str> {
        match self {
            ContentBlock::KvPairs { title, .. }
            | ContentBlock::List { title, .. }
            | ContentBlock::Table { title, .. }
            | ContentBlock::Text { title, .. } => title.as_deref(),
            ContentBlock::Metric { .. } => None,
        }
    }
}

fn some_nonempty(s: String) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}

/// A key-value pair with optional leading icon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KvPair {
    pub key: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl KvPair {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        KvPair {
            key: key.into(),
            value: value.into(),
            icon: None,
        }
    }
}

/// A list entry with optional icon and status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListItem {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
}

impl ListItem {
    pub fn new(text: impl Into<String>) -> Self {
        ListItem {
            text: text.into(),
            icon: None,
            status: None,
        }
    }

    /// Icon resolution: an explicit icon wins, otherwise the status icon,
    /// otherwise none.
    pub fn effective_icon(&self) -> Option<&str> {
        match self.icon.as_deref() {
            Some(icon) if !icon.is_empty() => Some(icon),
            _ => self.status.map(|s| s.icon()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn wire_discriminator_selects_variant() {
        let block: ContentBlock = serde_json::from_str(
            r#"{"type": "kv_pairs", "title": "Metadata", "pairs": [{"key": "Author", "value": "pm"}]}"#,
        )
        .unwrap();
        match block {
            ContentBlock::KvPairs { title, pairs } => {
                assert_eq!(title.as_deref(), Some("Metadata"));
                assert_eq!(pairs.len(), 1);
                assert_eq!(pairs[0].key, "Author");
            }
            other => panic!("expected kv_pairs, got {:?}", other),
        }

        let block: ContentBlock = serde_json::from_str(
            r#"{"type": "metric", "label": "Coverage", "value": "85%", "status": "GO", "target": "80%"}"#,
        )
        .unwrap();
        assert_eq!(
            block,
            ContentBlock::metric("Coverage", "85%", Status::Go, Some("80%".to_string()))
        );
    }

    #[test]
    fn explicit_icon_wins_over_status() {
        let item = ListItem {
            text: "finding".to_string(),
            icon: Some("\u{1F512}".to_string()),
            status: Some(Status::NoGo),
        };
        assert_eq!(item.effective_icon(), Some("\u{1F512}"));
    }

    #[test]
    fn status_icon_used_when_no_explicit_icon() {
        let item = ListItem {
            text: "finding".to_string(),
            icon: None,
            status: Some(Status::Warn),
        };
        assert_eq!(item.effective_icon(), Some(Status::Warn.icon()));
    }

    #[test]
    fn no_icon_when_neither_set() {
        assert_eq!(ListItem::new("plain").effective_icon(), None);
    }

    #[test]
    fn empty_icon_falls_back_to_status() {
        let item = ListItem {
            text: "finding".to_string(),
            icon: Some(String::new()),
            status: Some(Status::Go),
        };
        assert_eq!(item.effective_icon(), Some(Status::Go.icon()));
    }
}
