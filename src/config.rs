/// Settings for a `LineAttributor`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributorConfig {
    /// Subject pre-filled in the mail link
    pub subject: String,
}

impl Default for AttributorConfig {
    fn default() -> Self {
        Self {
            subject: "Email from source browser".to_string(),
        }
    }
}

impl AttributorConfig {
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = subject.into();
        self
    }
}
