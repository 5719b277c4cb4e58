//! Outcome of ensuring a secret exists.

/// Terminal state of the secret lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnsureOutcome {
    /// The secret was absent and has been created.
    Created,
    /// The secret already existed and is compatible (possibly after an
    /// ownership transfer).
    AlreadyExists,
    /// A conflict was reported or the user declined; the secret must not be
    /// used.
    Aborted,
}

impl EnsureOutcome {
    /// Whether the caller may go on to grant access.
    pub fn is_usable(&self) -> bool {
        matches!(self, Self::Created | Self::AlreadyExists)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::AlreadyExists => "already-exists",
            Self::Aborted => "aborted",
        }
    }
}

impl std::fmt::Display for EnsureOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
