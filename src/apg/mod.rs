//! Apgcode parsing.
//!
//! An apgcode such as `xq4_153` names a pattern kind and period in its
//! prefix segment and encodes the live cells in the Wechsler body after the
//! first underscore.

pub mod wechsler;

use std::fmt;
use std::str::FromStr;

use crate::error::ApgError;
use crate::model::{Coord, PatternKind};

pub use wechsler::WechslerDecoder;

/// A parsed apgcode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApgCode {
    source: String,
    kind: PatternKind,
    period: u32,
    /// Byte offset of the Wechsler body within `source`.
    body_start: usize,
    body_end: usize,
}

impl ApgCode {
    pub fn parse(code: &str) -> Result<Self, ApgError> {
        let malformed = |reason: &str| ApgError::MalformedCode {
            code: code.to_string(),
            reason: reason.to_string(),
        };

        let mut segments = code.split('_');
        let prefix = segments
            .next()
            .filter(|s| !s.is_empty())
            .ok_or_else(|| malformed("missing prefix segment"))?;

        let kind = prefix
            .get(..2)
            .and_then(PatternKind::from_prefix)
            .ok_or_else(|| ApgError::UnrecognizedPatternKind(prefix.to_string()))?;

        let period = if kind.has_fixed_period() {
            1
        } else {
            let digits = &prefix[2..];
            if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                return Err(malformed("period must be a decimal number"));
            }
            match digits.parse::<u32>() {
                Ok(p) if p >= 1 => p,
                _ => return Err(malformed("period must be between 1 and u32::MAX")),
            }
        };

        let body = segments
            .next()
            .ok_or_else(|| malformed("missing wechsler segment"))?;
        let body_start = prefix.len() + 1;

        Ok(Self {
            source: code.to_string(),
            kind,
            period,
            body_start,
            body_end: body_start + body.len(),
        })
    }

    /// The full code this was parsed from.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn kind(&self) -> PatternKind {
        self.kind
    }

    /// Oscillation period; always 1 for still lifes.
    pub fn period(&self) -> u32 {
        self.period
    }

    /// The Wechsler-encoded segment.
    pub fn body(&self) -> &str {
        &self.source[self.body_start..self.body_end]
    }

    /// A fresh lazy decoder over the pattern's live cells.
    pub fn cells(&self) -> WechslerDecoder<'_> {
        WechslerDecoder::new(self.body())
    }

    /// Decode every live cell, failing on the first malformed byte.
    pub fn decode(&self) -> Result<Vec<Coord>, ApgError> {
        let cells = self.cells().collect::<Result<Vec<_>, _>>()?;
        tracing::debug!(code = %self.source, cells = cells.len(), "decoded apgcode");
        Ok(cells)
    }

    /// Inclusive `(min, max)` corners of the decoded pattern, or `None` if it
    /// has no live cells.
    pub fn bounding_box(&self) -> Result<Option<(Coord, Coord)>, ApgError> {
        Ok(bounding_box(&self.decode()?))
    }
}

/// Inclusive `(min, max)` corners of a set of cells.
pub fn bounding_box(cells: &[Coord]) -> Option<(Coord, Coord)> {
    let first = *cells.first()?;
    Some(cells.iter().fold((first, first), |(min, max), c| {
        (
            Coord::new(min.x.min(c.x), min.y.min(c.y)),
            Coord::new(max.x.max(c.x), max.y.max(c.y)),
        )
    }))
}

impl FromStr for ApgCode {
    type Err = ApgError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ApgCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}
