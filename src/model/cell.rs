use serde::{Deserialize, Serialize};

/// State of a single Life cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum CellState {
    #[default]
    Dead,
    Alive,
}

string_enum!(CellState {
    Dead => "dead",
    Alive => "alive",
});

impl CellState {
    pub fn is_alive(self) -> bool {
        self == CellState::Alive
    }

    /// Display color used by renderers (dead cells white, live cells black).
    pub fn color(self) -> &'static str {
        match self {
            CellState::Dead => "#FFF",
            CellState::Alive => "#000",
        }
    }
}

impl From<bool> for CellState {
    fn from(alive: bool) -> Self {
        if alive {
            CellState::Alive
        } else {
            CellState::Dead
        }
    }
}
