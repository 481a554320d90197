use serde::{Deserialize, Serialize};

/// Kind of pattern named by an apgcode prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum PatternKind {
    StillLife,
    Oscillator,
    Spaceship,
}

string_enum!(PatternKind {
    StillLife => "still_life",
    Oscillator => "oscillator",
    Spaceship => "spaceship",
});

impl PatternKind {
    pub const ALL: [PatternKind; 3] = [
        PatternKind::StillLife,
        PatternKind::Oscillator,
        PatternKind::Spaceship,
    ];

    /// Two-letter apgcode prefix (`xs`, `xp`, `xq`).
    pub fn prefix(self) -> &'static str {
        match self {
            PatternKind::StillLife => "xs",
            PatternKind::Oscillator => "xp",
            PatternKind::Spaceship => "xq",
        }
    }

    pub fn from_prefix(prefix: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.prefix() == prefix)
    }

    /// Whether the pattern's period is fixed at 1 rather than encoded.
    pub fn has_fixed_period(self) -> bool {
        self == PatternKind::StillLife
    }
}
