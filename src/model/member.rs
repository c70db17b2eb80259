use serde::{Deserialize, Serialize};

/// A team member as supplied by the roster.
///
/// Pure input data; nothing in the pipeline mutates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub name: String,

    /// The identity key both providers are queried with.
    pub email: String,

    /// Free-text context for display ("on-call this week", etc.).
    #[serde(default)]
    pub note: String,
}

impl Member {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            note: String::new(),
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }
}
