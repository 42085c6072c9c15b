//! Column definitions as they appear in `ADD COLUMN` and `CREATE TABLE`.

use super::{AstVisitor, Expression, Identifier, Node, NodeLocation, NodeRef};
use crate::debug_println;
use crate::error::{AstError, ErrorKind, Result};
use std::fmt;
use std::hash::{Hash, Hasher};

/// `name = value` entry of a `WITH (...)` clause.
#[derive(Clone)]
pub struct Property {
    location: Option<NodeLocation>,
    name: Identifier,
    value: Expression,
}

impl Property {
    pub fn new(name: Identifier, value: impl Into<Expression>) -> Self {
        Self {
            location: None,
            name,
            value: value.into(),
        }
    }

    pub fn new_at(location: NodeLocation, name: Identifier, value: impl Into<Expression>) -> Self {
        Self {
            location: Some(location),
            name,
            value: value.into(),
        }
    }

    pub fn name(&self) -> &Identifier {
        &self.name
    }

    pub fn value(&self) -> &Expression {
        &self.value
    }
}

impl Node for Property {
    fn location(&self) -> Option<NodeLocation> {
        self.location
    }

    /// `[name, value]`
    fn children(&self) -> Vec<NodeRef<'_>> {
        vec![NodeRef::from(&self.name), NodeRef::from(&self.value)]
    }

    fn accept<R, C, V>(&self, visitor: &mut V, context: C) -> R
    where
        V: AstVisitor<R, C> + ?Sized,
    {
        visitor.visit_property(self, context)
    }
}

impl PartialEq for Property {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.value == other.value
    }
}

impl Eq for Property {}

impl Hash for Property {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.value.hash(state);
    }
}

impl fmt::Debug for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Property")
            .field("name", &self.name)
            .field("value", &self.value)
            .finish()
    }
}

/// Name, type and constraints of a single column.
///
/// The type is kept as the text the parser saw (`varchar(10)`,
/// `array(bigint)`); resolving it is left to analysis.
#[derive(Clone)]
pub struct ColumnDefinition {
    location: Option<NodeLocation>,
    name: Identifier,
    data_type: String,
    nullable: bool,
    properties: Vec<Property>,
    comment: Option<String>,
}

impl ColumnDefinition {
    pub fn new(name: Identifier, data_type: impl Into<String>) -> Result<Self> {
        Self::build(None, name, data_type.into())
    }

    pub fn new_at(
        location: NodeLocation,
        name: Identifier,
        data_type: impl Into<String>,
    ) -> Result<Self> {
        Self::build(Some(location), name, data_type.into())
    }

    fn build(location: Option<NodeLocation>, name: Identifier, data_type: String) -> Result<Self> {
        if data_type.trim().is_empty() {
            debug_println!("rejecting ColumnDefinition: '{}' has no type", name);
            return Err(AstError::new(
                ErrorKind::EmptyDataType,
                format!("column '{}' has no type", name),
            )
            .with_optional_location(location));
        }
        Ok(Self {
            location,
            name,
            data_type,
            nullable: true,
            properties: Vec::new(),
            comment: None,
        })
    }

    /// Marks the column `NOT NULL`.
    pub fn not_null(mut self) -> Self {
        self.nullable = false;
        self
    }

    pub fn with_properties(mut self, properties: impl IntoIterator<Item = Property>) -> Self {
        self.properties = properties.into_iter().collect();
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn name(&self) -> &Identifier {
        &self.name
    }

    pub fn data_type(&self) -> &str {
        &self.data_type
    }

    pub fn is_nullable(&self) -> bool {
        self.nullable
    }

    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }
}

impl Node for ColumnDefinition {
    fn location(&self) -> Option<NodeLocation> {
        self.location
    }

    /// `[name, properties...]` in declaration order.
    fn children(&self) -> Vec<NodeRef<'_>> {
        std::iter::once(NodeRef::from(&self.name))
            .chain(self.properties.iter().map(NodeRef::from))
            .collect()
    }

    fn accept<R, C, V>(&self, visitor: &mut V, context: C) -> R
    where
        V: AstVisitor<R, C> + ?Sized,
    {
        visitor.visit_column_definition(self, context)
    }
}

impl PartialEq for ColumnDefinition {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.data_type == other.data_type
            && self.nullable == other.nullable
            && self.properties == other.properties
            && self.comment == other.comment
    }
}

impl Eq for ColumnDefinition {}

impl Hash for ColumnDefinition {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.data_type.hash(state);
        self.nullable.hash(state);
        self.properties.hash(state);
        self.comment.hash(state);
    }
}

impl fmt::Debug for ColumnDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnDefinition")
            .field("name", &self.name)
            .field("type", &self.data_type)
            .field("nullable", &self.nullable)
            .field("properties", &self.properties)
            .field("comment", &self.comment)
            .finish()
    }
}
