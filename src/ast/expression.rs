use super::{AstVisitor, Identifier, Node, NodeLocation, NodeRef};
use std::fmt;
use std::hash::{Hash, Hasher};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LiteralValue {
    String(String),
    Long(i64),
    Boolean(bool),
}

/// A constant appearing in the statement text.
#[derive(Clone)]
pub struct Literal {
    location: Option<NodeLocation>,
    value: LiteralValue,
}

impl Literal {
    pub fn new(value: LiteralValue) -> Self {
        Self {
            location: None,
            value,
        }
    }

    pub fn new_at(location: NodeLocation, value: LiteralValue) -> Self {
        Self {
            location: Some(location),
            value,
        }
    }

    pub fn string(value: impl Into<String>) -> Self {
        Self::new(LiteralValue::String(value.into()))
    }

    pub fn long(value: i64) -> Self {
        Self::new(LiteralValue::Long(value))
    }

    pub fn boolean(value: bool) -> Self {
        Self::new(LiteralValue::Boolean(value))
    }

    pub fn value(&self) -> &LiteralValue {
        &self.value
    }
}

impl Node for Literal {
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
        visitor.visit_literal(self, context)
    }
}

impl PartialEq for Literal {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Literal {}

impl Hash for Literal {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl fmt::Debug for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Literal").field(&self.value).finish()
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            LiteralValue::String(s) => write!(f, "'{}'", s.replace('\'', "''")),
            LiteralValue::Long(n) => write!(f, "{}", n),
            LiteralValue::Boolean(b) => write!(f, "{}", b),
        }
    }
}

/// Value side of a property assignment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expression {
    Identifier(Identifier),
    Literal(Literal),
}

impl Node for Expression {
    fn location(&self) -> Option<NodeLocation> {
        match self {
            Expression::Identifier(n) => n.location(),
            Expression::Literal(n) => n.location(),
        }
    }

    fn children(&self) -> Vec<NodeRef<'_>> {
        match self {
            Expression::Identifier(n) => n.children(),
            Expression::Literal(n) => n.children(),
        }
    }

    fn accept<R, C, V>(&self, visitor: &mut V, context: C) -> R
    where
        V: AstVisitor<R, C> + ?Sized,
    {
        match self {
            Expression::Identifier(n) => n.accept(visitor, context),
            Expression::Literal(n) => n.accept(visitor, context),
        }
    }
}

impl From<Identifier> for Expression {
    fn from(identifier: Identifier) -> Self {
        Expression::Identifier(identifier)
    }
}

impl From<Literal> for Expression {
    fn from(literal: Literal) -> Self {
        Expression::Literal(literal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_display() {
        assert_eq!(Literal::string("it's").to_string(), "'it''s'");
        assert_eq!(Literal::long(-3).to_string(), "-3");
        assert_eq!(Literal::boolean(true).to_string(), "true");
    }

    #[test]
    fn test_literal_equality_ignores_location() {
        let parsed = Literal::new_at(NodeLocation::new(1, 40), LiteralValue::Long(8));
        assert_eq!(parsed, Literal::long(8));
        assert_ne!(Literal::long(8), Literal::string("8"));
    }

    #[test]
    fn test_expression_delegates_location() {
        let location = NodeLocation::new(4, 2);
        let expr = Expression::from(Identifier::new_at(location, "snappy").unwrap());
        assert_eq!(expr.location(), Some(location));
        assert!(expr.children().is_empty());
    }
}
