use std::iter::FusedIterator;

use crate::error::ApgError;
use crate::model::Coord;

/// Rows per strip. Each strip character describes one column of a 5-row band.
pub const STRIP_HEIGHT: u8 = 5;

/// Lazy decoder for the Wechsler body of an apgcode.
///
/// Yields live-cell offsets relative to the pattern origin, column by column
/// within each 5-row band. A single consuming pass: once exhausted, or after
/// the first error, it yields nothing more.
#[derive(Debug, Clone)]
pub struct WechslerDecoder<'a> {
    bytes: &'a [u8],
    pos: usize,
    column: i64,
    row: i64,
    strip: u8,
    /// Next bit of `strip` to inspect; `STRIP_HEIGHT` when the strip is drained.
    bit: u8,
    done: bool,
}

impl<'a> WechslerDecoder<'a> {
    pub fn new(body: &'a str) -> Self {
        Self {
            bytes: body.as_bytes(),
            pos: 0,
            column: 0,
            row: 0,
            strip: 0,
            bit: STRIP_HEIGHT,
            done: false,
        }
    }

    /// Current output column.
    pub fn column(&self) -> i64 {
        self.column
    }

    /// Row offset of the current band.
    pub fn row_offset(&self) -> i64 {
        self.row
    }

    fn fail(&mut self, position: usize, found: String) -> Option<Result<Coord, ApgError>> {
        self.done = true;
        Some(Err(ApgError::MalformedInput { position, found }))
    }

    /// Emit the next live cell of the current strip, if any remain.
    fn drain_strip(&mut self) -> Option<Coord> {
        while self.bit < STRIP_HEIGHT {
            let bit = self.bit;
            let coord = Coord::new(self.column, self.row + bit as i64);
            self.bit += 1;
            if self.bit == STRIP_HEIGHT {
                self.column += 1;
            }
            if (self.strip >> bit) & 1 == 1 {
                return Some(coord);
            }
        }
        None
    }
}

impl Iterator for WechslerDecoder<'_> {
    type Item = Result<Coord, ApgError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(coord) = self.drain_strip() {
                return Some(Ok(coord));
            }
            if self.done {
                return None;
            }
            let Some(&byte) = self.bytes.get(self.pos) else {
                self.done = true;
                return None;
            };
            let position = self.pos;
            self.pos += 1;

            match byte {
                b'0' => self.column += 1,
                b'1'..=b'9' => {
                    self.strip = byte - b'0';
                    self.bit = 0;
                }
                b'a'..=b'v' => {
                    self.strip = byte - b'a' + 10;
                    self.bit = 0;
                }
                b'w' => self.column += 2,
                b'x' => self.column += 3,
                b'y' => {
                    let count = self.bytes.get(self.pos).and_then(|&b| base36(b));
                    match count {
                        Some(c) => {
                            self.pos += 1;
                            self.column += 4 + c as i64;
                        }
                        None => {
                            let found = match self.bytes.get(self.pos) {
                                Some(&b) => format!("{:?} after 'y'", b as char),
                                None => "end of input after 'y'".to_string(),
                            };
                            return self.fail(self.pos, found);
                        }
                    }
                }
                b'z' => {
                    self.column = 0;
                    self.row += STRIP_HEIGHT as i64;
                }
                other => return self.fail(position, format!("{:?}", other as char)),
            }
        }
    }
}

impl FusedIterator for WechslerDecoder<'_> {}

fn base36(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'z' => Some(byte - b'a' + 10),
        _ => None,
    }
}
