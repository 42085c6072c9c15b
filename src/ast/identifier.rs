use super::{AstVisitor, Node, NodeLocation, NodeRef};
use crate::debug_println;
use crate::error::{AstError, ErrorKind, Result};
use nonempty::NonEmpty;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A single name such as a column or property name.
///
/// Equality and hashing look at the text only; whether it was quoted and where
/// it appeared do not matter.
#[derive(Clone)]
pub struct Identifier {
    location: Option<NodeLocation>,
    value: String,
    delimited: bool,
}

impl Identifier {
    pub fn new(value: impl Into<String>) -> Result<Self> {
        Self::build(None, value.into(), false)
    }

    pub fn new_at(location: NodeLocation, value: impl Into<String>) -> Result<Self> {
        Self::build(Some(location), value.into(), false)
    }

    /// A quoted identifier, e.g. `"Order Date"`.
    pub fn delimited(value: impl Into<String>) -> Result<Self> {
        Self::build(None, value.into(), true)
    }

    pub fn delimited_at(location: NodeLocation, value: impl Into<String>) -> Result<Self> {
        Self::build(Some(location), value.into(), true)
    }

    /// Quoted identifiers may be all whitespace; bare ones may not.
    fn build(location: Option<NodeLocation>, value: String, delimited: bool) -> Result<Self> {
        if value.is_empty() || (!delimited && value.trim().is_empty()) {
            debug_println!("rejecting Identifier: {:?} is blank", value);
            return Err(
                AstError::new(ErrorKind::EmptyIdentifier, "identifier value is empty")
                    .with_optional_location(location),
            );
        }
        Ok(Self {
            location,
            value,
            delimited,
        })
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_delimited(&self) -> bool {
        self.delimited
    }
}

impl Node for Identifier {
    fn location(&self) -> Option<NodeLocation> {
        self.location
    }

    fn children(&self) -> Vec<NodeRef<'_>> {
        Vec::new()
    }

    fn accept<R, C, V>(&self, visitor: &mut V, context: C) -> R
    where
        V: AstVisitor<R, C> + ?Sized,
    {
        visitor.visit_identifier(self, context)
    }
}

impl PartialEq for Identifier {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Identifier {}

impl Hash for Identifier {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl fmt::Debug for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Identifier").field(&self.value).finish()
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.delimited {
            write!(f, "\"{}\"", self.value.replace('"', "\"\""))
        } else {
            f.write_str(&self.value)
        }
    }
}

/// Dot-separated path naming a table, e.g. `catalog.schema.orders`.
///
/// Not a node: it has no location of its own and is never visited.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct QualifiedName {
    parts: NonEmpty<Identifier>,
}

impl QualifiedName {
    pub fn of(parts: impl IntoIterator<Item = Identifier>) -> Result<Self> {
        NonEmpty::from_vec(parts.into_iter().collect())
            .map(|parts| Self { parts })
            .ok_or_else(|| {
                debug_println!("rejecting QualifiedName: no parts");
                AstError::new(
                    ErrorKind::EmptyQualifiedName,
                    "qualified name has no parts",
                )
            })
    }

    /// Splits on `.`; every segment must be a non-blank identifier.
    pub fn parse(dotted: &str) -> Result<Self> {
        let parts = dotted
            .split('.')
            .map(|part| Identifier::new(part))
            .collect::<Result<Vec<_>>>()
            .map_err(|e| e.with_note(format!("in qualified name '{}'", dotted)))?;
        Self::of(parts)
    }

    pub fn parts(&self) -> &NonEmpty<Identifier> {
        &self.parts
    }

    /// The last part, usually the object name itself.
    pub fn suffix(&self) -> &Identifier {
        self.parts.last()
    }

    /// Everything before the suffix, or `None` for a single-part name.
    pub fn prefix(&self) -> Option<QualifiedName> {
        if self.parts.tail.is_empty() {
            return None;
        }
        let mut parts: Vec<Identifier> = self.parts.iter().cloned().collect();
        parts.pop();
        NonEmpty::from_vec(parts).map(|parts| Self { parts })
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, part) in self.parts.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{}", part)?;
        }
        Ok(())
    }
}

impl fmt::Debug for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("QualifiedName")
            .field(&self.to_string())
            .finish()
    }
}
