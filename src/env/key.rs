//! Environment keys and per-node frames.

use std::fmt;

/// Token meaning "no particular style"; every key's fallback.
pub const DEFAULT_TOKEN: &str = "default";

/// The fixed set of inheritable environment keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EnvKey {
    ButtonStyle,
    DatePickerStyle,
}

impl EnvKey {
    pub const ALL: [EnvKey; 2] = [EnvKey::ButtonStyle, EnvKey::DatePickerStyle];

    /// Name as written in builder source (`buttonStyle`).
    pub fn name(self) -> &'static str {
        match self {
            EnvKey::ButtonStyle => "buttonStyle",
            EnvKey::DatePickerStyle => "datePickerStyle",
        }
    }

    /// Token used when no node on the path declares this key.
    pub fn default_token(self) -> &'static str {
        DEFAULT_TOKEN
    }

    /// Concrete style name that [`DEFAULT_TOKEN`] stands for.
    pub fn default_style_name(self) -> &'static str {
        match self {
            EnvKey::ButtonStyle => "DefaultButtonStyle",
            EnvKey::DatePickerStyle => "DefaultDatePickerStyle",
        }
    }

    /// Look a key up by its source name.
    pub fn from_name(name: &str) -> Option<EnvKey> {
        EnvKey::ALL.into_iter().find(|key| key.name() == name)
    }

    fn slot(self) -> usize {
        match self {
            EnvKey::ButtonStyle => 0,
            EnvKey::DatePickerStyle => 1,
        }
    }
}

impl fmt::Display for EnvKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// EnvFrame
// ---------------------------------------------------------------------------

/// Values one node declares. Unset keys defer to ancestors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvFrame {
    values: [Option<String>; EnvKey::ALL.len()],
}

impl EnvFrame {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare `token` for `key` (builder).
    pub fn with(mut self, key: EnvKey, token: impl Into<String>) -> Self {
        self.set(key, token);
        self
    }

    /// Declare `token` for `key`, replacing any earlier declaration.
    pub fn set(&mut self, key: EnvKey, token: impl Into<String>) {
        self.values[key.slot()] = Some(token.into());
    }

    /// The declared token, if this frame sets `key`.
    pub fn get(&self, key: EnvKey) -> Option<&str> {
        self.values[key.slot()].as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.values.iter().all(Option::is_none)
    }
}
