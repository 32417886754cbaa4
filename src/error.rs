// src/error.rs

use std::fmt;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UserMsgKind {
    Success,
    Warn,
    Error,
    Info,
}

#[derive(Clone, Debug)]
pub struct UserMsg {
    pub kind: UserMsgKind,
    pub short: &'static str,
    pub detail: Option<String>,
}

/// One structural fault found while resolving template placeholders.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlaceholderError {
    pub kind: PlaceholderErrorKind,
    /// Raw tag text (without delimiters), or the offending fragment.
    pub tag: String,
    /// Document part the fault was found in, e.g. `word/document.xml`.
    pub part: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlaceholderErrorKind {
    UnclosedTag,
    UnopenedTag,
    EmptyTag,
    UnclosedSection,
    UnopenedSection,
    MismatchedSection { open: String, close: String },
}

impl fmt::Display for PlaceholderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use PlaceholderErrorKind::*;

        match &self.kind {
            UnclosedTag => write!(f, "{}: unclosed tag '{{{}'", self.part, self.tag),
            UnopenedTag => write!(f, "{}: unopened tag '{}}}'", self.part, self.tag),
            EmptyTag => write!(f, "{}: empty tag '{{}}'", self.part),
            UnclosedSection => write!(f, "{}: section '{}' is never closed", self.part, self.tag),
            UnopenedSection => write!(
                f,
                "{}: closing tag '{{/{}}}' has no matching opening tag",
                self.part, self.tag
            ),
            MismatchedSection { open, close } => write!(
                f,
                "{}: section '{open}' closed by '{{/{close}}}'",
                self.part
            ),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // --------------------------------------------------
    // generic / plumbing
    // --------------------------------------------------
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("state lock poisoned")]
    StateLockPoisoned,

    // --------------------------------------------------
    // session
    // --------------------------------------------------
    #[error("user name is empty")]
    EmptyUserName,

    // --------------------------------------------------
    // client directory
    // --------------------------------------------------
    #[error("client directory load failed: {0}")]
    DirectoryLoad(String),

    // --------------------------------------------------
    // template / generation
    // --------------------------------------------------
    #[error("template read failed: {0}")]
    TemplateRead(String),

    #[error("template render failed: {}", join_errors(.errors))]
    TemplateRender { errors: Vec<PlaceholderError> },

    #[error("proposal record could not be encoded: {0}")]
    RecordEncode(String),

    #[error("document packaging failed: {0}")]
    DocumentPackage(String),

    #[error("output write failed: {0}")]
    OutputWrite(String),

    #[error("a proposal is already being generated")]
    GenerationInProgress,
}

fn join_errors(errors: &[PlaceholderError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join(" | ")
}

impl AppError {
    pub fn user_msg(&self) -> UserMsg {
        use AppError::*;

        let mut kind = UserMsgKind::Error;
        let detail = Some(self.to_string());

        let short: &'static str = match self {
            Io(_) => "File operation failed.",
            StateLockPoisoned => "Internal state lock failed.",

            EmptyUserName => "Select a user to continue.",

            DirectoryLoad(_) => {
                kind = UserMsgKind::Warn;
                "Client list could not be loaded. Enter client details manually."
            }

            TemplateRead(_) => "Proposal template could not be read.",
            TemplateRender { .. } => "Proposal template has placeholder errors.",
            RecordEncode(_) | DocumentPackage(_) => "Failed to build the proposal document.",
            OutputWrite(_) => "Failed to save the generated proposal.",
            GenerationInProgress => {
                kind = UserMsgKind::Info;
                "A proposal is already being generated."
            }
        };

        UserMsg {
            kind,
            short,
            detail,
        }
    }

    /// Sub-errors carried by a render failure (empty for every other kind).
    pub fn placeholder_errors(&self) -> &[PlaceholderError] {
        match self {
            AppError::TemplateRender { errors } => errors,
            _ => &[],
        }
    }
}

// ======================================================
// Unit Tests
// ======================================================
