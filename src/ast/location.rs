use serde::Serialize;
use std::fmt;

/// Position of a node in the statement text it was parsed from.
///
/// Both coordinates are 1-based. Nodes synthesized by a rewrite pass carry no
/// location at all rather than a placeholder value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct NodeLocation {
    line: usize,
    column: usize,
}

impl NodeLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn column(&self) -> usize {
        self.column
    }
}

impl fmt::Display for NodeLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
