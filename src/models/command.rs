use serde::Serialize;

/// A command string handed to a terminal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TerminalLaunch {
    pub title: String,
    pub command: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

/// Prefilled value for the "Tag image as..." prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagSuggestion {
    pub value: String,
    /// Character range to preselect, covering the registry prefix and its `/`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selection: Option<(usize, usize)>,
}
