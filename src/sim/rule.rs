use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RuleError;
use crate::model::CellState;

/// Outer-totalistic birth/survival rule on the Moore neighborhood.
///
/// Bit `n` of `birth` set means a dead cell with `n` live neighbors is born;
/// bit `n` of `survival` set means a live cell with `n` live neighbors stays
/// alive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct LifeRule {
    birth: u16,
    survival: u16,
}

impl LifeRule {
    /// Conway's Game of Life, B3/S23.
    pub const CONWAY: LifeRule = LifeRule {
        birth: 1 << 3,
        survival: (1 << 2) | (1 << 3),
    };

    pub fn new(birth: &[u8], survival: &[u8]) -> Result<Self, RuleError> {
        let counts = |ns: &[u8]| {
            ns.iter().try_fold(0u16, |m, &n| match n {
                0..=8 => Ok(m | 1 << n),
                _ => Err(RuleError::CountOutOfRange(n.to_string())),
            })
        };
        Ok(Self {
            birth: counts(birth)?,
            survival: counts(survival)?,
        })
    }

    pub fn parse(s: &str) -> Result<Self, RuleError> {
        let syntax = || RuleError::Syntax(s.to_string());
        let (b, sv) = s.split_once('/').ok_or_else(syntax)?;
        let b = b.strip_prefix(['B', 'b']).ok_or_else(syntax)?;
        let sv = sv.strip_prefix(['S', 's']).ok_or_else(syntax)?;
        Ok(Self {
            birth: mask(b.chars())?,
            survival: mask(sv.chars())?,
        })
    }

    /// State of a cell in the next generation given its live-neighbor count.
    pub fn next_state(&self, current: CellState, live_neighbors: u8) -> CellState {
        let table = match current {
            CellState::Alive => self.survival,
            CellState::Dead => self.birth,
        };
        CellState::from(live_neighbors <= 8 && table & (1 << live_neighbors) != 0)
    }
}

impl Default for LifeRule {
    fn default() -> Self {
        Self::CONWAY
    }
}

fn mask(counts: impl Iterator<Item = char>) -> Result<u16, RuleError> {
    let mut m = 0u16;
    for c in counts {
        match c.to_digit(10) {
            Some(n) if n <= 8 => m |= 1 << n,
            _ => return Err(RuleError::CountOutOfRange(c.to_string())),
        }
    }
    Ok(m)
}

fn digits(m: u16) -> String {
    (0..=8u8)
        .filter(|n| m & (1 << n) != 0)
        .map(|n| (n + b'0') as char)
        .collect()
}

impl fmt::Display for LifeRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "B{}/S{}", digits(self.birth), digits(self.survival))
    }
}

impl FromStr for LifeRule {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<LifeRule> for String {
    fn from(rule: LifeRule) -> Self {
        rule.to_string()
    }
}

impl TryFrom<String> for LifeRule {
    type Error = RuleError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conway_transitions() {
        let r = LifeRule::CONWAY;
        for n in 0..=8 {
            let survives = r.next_state(CellState::Alive, n);
            let born = r.next_state(CellState::Dead, n);
            assert_eq!(survives.is_alive(), n == 2 || n == 3, "alive with {n}");
            assert_eq!(born.is_alive(), n == 3, "dead with {n}");
        }
    }

    #[test]
    fn parse_and_display() {
        let r = LifeRule::parse("B3/S23").unwrap();
        assert_eq!(r, LifeRule::CONWAY);
        assert_eq!(r.to_string(), "B3/S23");

        let highlife: LifeRule = "b36/s23".parse().unwrap();
        assert_eq!(highlife.to_string(), "B36/S23");
        assert!(highlife.next_state(CellState::Dead, 6).is_alive());
    }

    #[test]
    fn new_from_counts() {
        assert_eq!(LifeRule::new(&[3], &[2, 3]).unwrap(), LifeRule::CONWAY);
        assert_eq!(
            LifeRule::new(&[9], &[]),
            Err(RuleError::CountOutOfRange("9".to_string()))
        );
    }

    #[test]
    fn empty_lists_are_valid() {
        let r = LifeRule::parse("B/S").unwrap();
        for n in 0..=8 {
            assert!(!r.next_state(CellState::Alive, n).is_alive());
            assert!(!r.next_state(CellState::Dead, n).is_alive());
        }
    }

    #[test]
    fn rejects_bad_rulestrings() {
        assert!(matches!(LifeRule::parse("23/3"), Err(RuleError::Syntax(_))));
        assert!(matches!(LifeRule::parse("B3S23"), Err(RuleError::Syntax(_))));
        assert_eq!(
            LifeRule::parse("B39/S23"),
            Err(RuleError::CountOutOfRange("9".to_string()))
        );
        assert_eq!(
            LifeRule::parse("B3/S2x"),
            Err(RuleError::CountOutOfRange("x".to_string()))
        );
    }

    #[test]
    fn serde_as_rulestring() {
        let json = serde_json::to_string(&LifeRule::CONWAY).unwrap();
        assert_eq!(json, "\"B3/S23\"");
        let parsed: LifeRule = serde_json::from_str("\"B36/S23\"").unwrap();
        assert_eq!(parsed.to_string(), "B36/S23");
        assert!(serde_json::from_str::<LifeRule>("\"nope\"").is_err());
    }
}
