//! Bin-packing instances in the line-oriented benchmark format:
//!
//! ```text
//! <instance name>
//! <capacity> <item count> <third integer, unused>
//! <size of item 0>
//! ...
//! <size of item n-1>
//! ```

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::num::ParseIntError;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InstanceError {
    #[error("could not open instance file {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not read instance: {0}")]
    Read(#[from] io::Error),

    #[error("line {line}: unexpected end of input, expected {expected}")]
    UnexpectedEof { line: usize, expected: &'static str },

    #[error("line {line}: expected {expected} integer(s), found {found} field(s)")]
    FieldCount {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("line {line}: '{token}' is not an integer")]
    InvalidInteger {
        line: usize,
        token: String,
        #[source]
        source: ParseIntError,
    },

    #[error("line {line}: capacity must be positive, got {capacity}")]
    NonPositiveCapacity { line: usize, capacity: i64 },

    #[error("line {line}: item count must not be negative, got {count}")]
    NegativeItemCount { line: usize, count: i64 },
}

/// A parsed instance; immutable once built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Instance {
    name: String,
    capacity: i64,
    sizes: Vec<i64>,
    unused: i64,
}

impl Instance {
    /// Sizes are not checked against the capacity; an item that fits nowhere
    /// makes the model infeasible.
    pub fn new(name: impl Into<String>, capacity: i64, sizes: Vec<i64>) -> Self {
        Self {
            name: name.into(),
            capacity,
            sizes,
            unused: 0,
        }
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, InstanceError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| InstanceError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn from_reader(reader: impl BufRead) -> Result<Self, InstanceError> {
        let mut lines = reader.lines();
        let mut line_no = 0;
        let mut next_line = |expected: &'static str| -> Result<(usize, String), InstanceError> {
            line_no += 1;
            match lines.next() {
                Some(line) => Ok((line_no, line?)),
                None => Err(InstanceError::UnexpectedEof {
                    line: line_no,
                    expected,
                }),
            }
        };

        let (_, name) = next_line("the instance name")?;
        let name = name.trim().to_string();

        let (line, header) = next_line("capacity, item count and a third integer")?;
        let fields = parse_integers(&header, line, 3)?;
        let (capacity, count, unused) = (fields[0], fields[1], fields[2]);
        if capacity <= 0 {
            return Err(InstanceError::NonPositiveCapacity { line, capacity });
        }
        let Ok(count) = usize::try_from(count) else {
            return Err(InstanceError::NegativeItemCount { line, count });
        };

        let mut sizes = Vec::with_capacity(count);
        for _ in 0..count {
            let (line, text) = next_line("an item size")?;
            sizes.push(parse_integers(&text, line, 1)?[0]);
        }

        Ok(Self {
            name,
            capacity,
            sizes,
            unused,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn capacity(&self) -> i64 {
        self.capacity
    }

    pub fn item_count(&self) -> usize {
        self.sizes.len()
    }

    pub fn sizes(&self) -> &[i64] {
        &self.sizes
    }

    /// Third integer of the header line. Read, kept, never interpreted.
    pub fn unused(&self) -> i64 {
        self.unused
    }

    /// Sum of all sizes, exact for any item sizes.
    pub fn total_size(&self) -> i128 {
        self.sizes.iter().copied().map(i128::from).sum()
    }
}

impl FromStr for Instance {
    type Err = InstanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_reader(s.as_bytes())
    }
}

fn parse_integers(text: &str, line: usize, expected: usize) -> Result<Vec<i64>, InstanceError> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    if tokens.len() != expected {
        return Err(InstanceError::FieldCount {
            line,
            expected,
            found: tokens.len(),
        });
    }
    tokens
        .into_iter()
        .map(|token| {
            token
                .parse::<i64>()
                .map_err(|source| InstanceError::InvalidInteger {
                    line,
                    token: token.to_string(),
                    source,
                })
        })
        .collect()
}
