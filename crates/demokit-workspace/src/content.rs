// content.rs — File content model and rendering.
//
// A fixture file is either text (indent-normalized, see indent.rs) or a
// JSON value written pretty-printed. Manifests describe entries either as a
// plain string or as an option set:
//
//     { "contentType": "json", "body": { "foo": "baz" } }
//     { "body": "\n  indented\n", "insertFinalNewline": false }

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::WorkspaceError;
use crate::indent::normalize_indent;

/// How a file body is encoded on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    #[default]
    Text,
    Json,
}

/// The content of one fixture file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawFileEntry")]
pub enum FileContent {
    /// Text, normalized when it begins with a newline.
    Text {
        body: String,
        insert_final_newline: bool,
    },
    /// A JSON value, written with 2-space indentation and no trailing newline.
    Json(Value),
}

impl FileContent {
    /// Text content with the default trailing-newline behavior.
    pub fn text(body: impl Into<String>) -> Self {
        Self::Text {
            body: body.into(),
            insert_final_newline: true,
        }
    }

    pub fn json(value: Value) -> Self {
        Self::Json(value)
    }

    /// JSON content from any serializable value.
    pub fn json_from<T: Serialize>(value: &T) -> Result<Self, WorkspaceError> {
        Ok(Self::Json(serde_json::to_value(value)?))
    }

    /// Drop the trailing line of an indented block instead of ending it
    /// with a newline. No effect on JSON content.
    pub fn without_final_newline(self) -> Self {
        match self {
            Self::Text { body, .. } => Self::Text {
                body,
                insert_final_newline: false,
            },
            json @ Self::Json(_) => json,
        }
    }

    pub fn content_type(&self) -> ContentType {
        match self {
            Self::Text { .. } => ContentType::Text,
            Self::Json(_) => ContentType::Json,
        }
    }

    /// Produce the exact bytes to be written.
    pub fn render(&self) -> Result<String, WorkspaceError> {
        match self {
            Self::Text {
                body,
                insert_final_newline,
            } => normalize_indent(body, *insert_final_newline),
            Self::Json(value) => Ok(serde_json::to_string_pretty(value)?),
        }
    }
}

impl Default for FileContent {
    fn default() -> Self {
        Self::text("")
    }
}

impl From<&str> for FileContent {
    fn from(body: &str) -> Self {
        Self::text(body)
    }
}

impl From<String> for FileContent {
    fn from(body: String) -> Self {
        Self::text(body)
    }
}

impl From<&String> for FileContent {
    fn from(body: &String) -> Self {
        Self::text(body.as_str())
    }
}

impl From<Value> for FileContent {
    fn from(value: Value) -> Self {
        Self::Json(value)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawFileEntry {
    Plain(String),
    Options(RawFileOptions),
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct RawFileOptions {
    #[serde(default)]
    content_type: ContentType,
    #[serde(default)]
    body: Option<Value>,
    #[serde(default = "default_insert_final_newline")]
    insert_final_newline: bool,
}

fn default_insert_final_newline() -> bool {
    true
}

impl TryFrom<RawFileEntry> for FileContent {
    type Error = String;

    fn try_from(raw: RawFileEntry) -> Result<Self, Self::Error> {
        let options = match raw {
            RawFileEntry::Plain(body) => return Ok(Self::text(body)),
            RawFileEntry::Options(options) => options,
        };

        match options.content_type {
            ContentType::Text => {
                let body = match options.body {
                    None => String::new(),
                    Some(Value::String(body)) => body,
                    Some(other) => {
                        return Err(format!("text content requires a string body, got {other}"))
                    }
                };
                Ok(Self::Text {
                    body,
                    insert_final_newline: options.insert_final_newline,
                })
            }
            ContentType::Json => Ok(Self::Json(
                options.body.unwrap_or_else(|| Value::String(String::new())),
            )),
        }
    }
}
