use serde::Deserialize;

/// Loose mirror of a pug-parser node. Only the fields the tree needs are
/// kept; positions and filenames are dropped except `line`.
#[derive(Debug, Deserialize)]
pub(crate) struct RawNode {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub val: Option<serde_json::Value>,
    #[serde(default)]
    pub attrs: Vec<RawAttr>,
    #[serde(default)]
    pub block: Option<Box<RawNode>>,
    #[serde(default)]
    pub nodes: Vec<RawNode>,
    #[serde(default)]
    pub line: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawAttr {
    pub name: String,
    pub val: RawValue,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum RawValue {
    Flag(bool),
    Text(String),
}
