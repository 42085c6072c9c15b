//! `ALTER TABLE` statements.
//!
//! Statements are the roots of executable trees. Their guard flags
//! (`IF EXISTS` / `IF NOT EXISTS`) are instructions for the execution stage and
//! are not evaluated here.

use super::{
    AstVisitor, ColumnDefinition, Identifier, Node, NodeLocation, NodeRef, QualifiedName,
};
use crate::debug_println;
use crate::error::{AstError, Result};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Every statement kind the tree can hold.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Statement {
    AddColumn(AddColumn),
    DropColumn(DropColumn),
    RenameColumn(RenameColumn),
}

impl Statement {
    pub fn as_node_ref(&self) -> NodeRef<'_> {
        NodeRef::from(self)
    }
}

impl Node for Statement {
    fn location(&self) -> Option<NodeLocation> {
        self.as_node_ref().location()
    }

    fn children(&self) -> Vec<NodeRef<'_>> {
        self.as_node_ref().children()
    }

    fn accept<R, C, V>(&self, visitor: &mut V, context: C) -> R
    where
        V: AstVisitor<R, C> + ?Sized,
    {
        self.as_node_ref().accept(visitor, context)
    }
}

impl From<AddColumn> for Statement {
    fn from(node: AddColumn) -> Self {
        Statement::AddColumn(node)
    }
}

impl From<DropColumn> for Statement {
    fn from(node: DropColumn) -> Self {
        Statement::DropColumn(node)
    }
}

impl From<RenameColumn> for Statement {
    fn from(node: RenameColumn) -> Self {
        Statement::RenameColumn(node)
    }
}

/// `ALTER TABLE [IF EXISTS] name ADD COLUMN [IF NOT EXISTS] column`
///
/// Equality and hashing consider `name` and `column` only. Two statements that
/// differ just in their guard flags or source location compare equal.
#[derive(Clone)]
pub struct AddColumn {
    location: Option<NodeLocation>,
    name: QualifiedName,
    column: ColumnDefinition,
    table_name_exists: bool,
    column_name_not_exists: bool,
}

impl AddColumn {
    /// Builds a synthesized statement with no source location.
    pub fn new(
        name: QualifiedName,
        column: ColumnDefinition,
        table_name_exists: bool,
        column_name_not_exists: bool,
    ) -> Self {
        Self::with_location(None, name, column, table_name_exists, column_name_not_exists)
    }

    /// Builds a statement at the position the parser found it.
    pub fn new_at(
        location: NodeLocation,
        name: QualifiedName,
        column: ColumnDefinition,
        table_name_exists: bool,
        column_name_not_exists: bool,
    ) -> Self {
        Self::with_location(
            Some(location),
            name,
            column,
            table_name_exists,
            column_name_not_exists,
        )
    }

    fn with_location(
        location: Option<NodeLocation>,
        name: QualifiedName,
        column: ColumnDefinition,
        table_name_exists: bool,
        column_name_not_exists: bool,
    ) -> Self {
        Self {
            location,
            name,
            column,
            table_name_exists,
            column_name_not_exists,
        }
    }

    /// Incremental construction for callers that collect attributes one at a time.
    pub fn builder() -> AddColumnBuilder {
        AddColumnBuilder::default()
    }

    pub fn name(&self) -> &QualifiedName {
        &self.name
    }

    pub fn column(&self) -> &ColumnDefinition {
        &self.column
    }

    /// `IF EXISTS` on the table.
    pub fn table_name_exists(&self) -> bool {
        self.table_name_exists
    }

    /// `IF NOT EXISTS` on the column.
    pub fn column_name_not_exists(&self) -> bool {
        self.column_name_not_exists
    }
}

impl Node for AddColumn {
    fn location(&self) -> Option<NodeLocation> {
        self.location
    }

    /// `[column]`
    fn children(&self) -> Vec<NodeRef<'_>> {
        vec![NodeRef::ColumnDefinition(&self.column)]
    }

    fn accept<R, C, V>(&self, visitor: &mut V, context: C) -> R
    where
        V: AstVisitor<R, C> + ?Sized,
    {
        visitor.visit_add_column(self, context)
    }
}

// Guard flags stay out of identity; see DESIGN.md before relying on this for
// plan caching or deduplication.
impl PartialEq for AddColumn {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.column == other.column
    }
}

impl Eq for AddColumn {}

impl Hash for AddColumn {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.column.hash(state);
    }
}

impl fmt::Debug for AddColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AddColumn")
            .field("name", &self.name)
            .field("column", &self.column)
            .finish()
    }
}

/// Collects `AddColumn` attributes and checks they were all supplied.
#[derive(Debug, Default)]
pub struct AddColumnBuilder {
    location: Option<NodeLocation>,
    name: Option<QualifiedName>,
    column: Option<ColumnDefinition>,
    table_name_exists: bool,
    column_name_not_exists: bool,
}

impl AddColumnBuilder {
    pub fn location(mut self, location: NodeLocation) -> Self {
        self.location = Some(location);
        self
    }

    pub fn name(mut self, name: QualifiedName) -> Self {
        self.name = Some(name);
        self
    }

    pub fn column(mut self, column: ColumnDefinition) -> Self {
        self.column = Some(column);
        self
    }

    pub fn table_name_exists(mut self, value: bool) -> Self {
        self.table_name_exists = value;
        self
    }

    pub fn column_name_not_exists(mut self, value: bool) -> Self {
        self.column_name_not_exists = value;
        self
    }

    pub fn build(self) -> Result<AddColumn> {
        let location = self.location;
        let reject = |attribute: &str| {
            debug_println!("rejecting AddColumn: {} missing", attribute);
            AstError::missing(attribute).with_optional_location(location)
        };

        let name = self.name.ok_or_else(|| reject("table"))?;
        let column = self.column.ok_or_else(|| reject("column"))?;

        Ok(AddColumn::with_location(
            location,
            name,
            column,
            self.table_name_exists,
            self.column_name_not_exists,
        ))
    }
}

/// `ALTER TABLE [IF EXISTS] table DROP COLUMN [IF EXISTS] field`
#[derive(Clone)]
pub struct DropColumn {
    location: Option<NodeLocation>,
    table: QualifiedName,
    field: Identifier,
    table_exists: bool,
    column_exists: bool,
}

impl DropColumn {
    pub fn new(
        table: QualifiedName,
        field: Identifier,
        table_exists: bool,
        column_exists: bool,
    ) -> Self {
        Self {
            location: None,
            table,
            field,
            table_exists,
            column_exists,
        }
    }

    pub fn new_at(
        location: NodeLocation,
        table: QualifiedName,
        field: Identifier,
        table_exists: bool,
        column_exists: bool,
    ) -> Self {
        Self {
            location: Some(location),
            ..Self::new(table, field, table_exists, column_exists)
        }
    }

    pub fn table(&self) -> &QualifiedName {
        &self.table
    }

    pub fn field(&self) -> &Identifier {
        &self.field
    }

    pub fn table_exists(&self) -> bool {
        self.table_exists
    }

    pub fn column_exists(&self) -> bool {
        self.column_exists
    }
}

impl Node for DropColumn {
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
        visitor.visit_drop_column(self, context)
    }
}

impl PartialEq for DropColumn {
    fn eq(&self, other: &Self) -> bool {
        self.table == other.table
            && self.field == other.field
            && self.table_exists == other.table_exists
            && self.column_exists == other.column_exists
    }
}

impl Eq for DropColumn {}

impl Hash for DropColumn {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.table.hash(state);
        self.field.hash(state);
        self.table_exists.hash(state);
        self.column_exists.hash(state);
    }
}

impl fmt::Debug for DropColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DropColumn")
            .field("table", &self.table)
            .field("field", &self.field)
            .field("table_exists", &self.table_exists)
            .field("column_exists", &self.column_exists)
            .finish()
    }
}

/// `ALTER TABLE [IF EXISTS] table RENAME COLUMN [IF EXISTS] source TO target`
#[derive(Clone)]
pub struct RenameColumn {
    location: Option<NodeLocation>,
    table: QualifiedName,
    source: Identifier,
    target: Identifier,
    table_exists: bool,
    column_exists: bool,
}

impl RenameColumn {
    pub fn new(
        table: QualifiedName,
        source: Identifier,
        target: Identifier,
        table_exists: bool,
        column_exists: bool,
    ) -> Self {
        Self {
            location: None,
            table,
            source,
            target,
            table_exists,
            column_exists,
        }
    }

    pub fn new_at(
        location: NodeLocation,
        table: QualifiedName,
        source: Identifier,
        target: Identifier,
        table_exists: bool,
        column_exists: bool,
    ) -> Self {
        Self {
            location: Some(location),
            ..Self::new(table, source, target, table_exists, column_exists)
        }
    }

    pub fn table(&self) -> &QualifiedName {
        &self.table
    }

    pub fn source(&self) -> &Identifier {
        &self.source
    }

    pub fn target(&self) -> &Identifier {
        &self.target
    }

    pub fn table_exists(&self) -> bool {
        self.table_exists
    }

    pub fn column_exists(&self) -> bool {
        self.column_exists
    }
}

impl Node for RenameColumn {
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
        visitor.visit_rename_column(self, context)
    }
}

impl PartialEq for RenameColumn {
    fn eq(&self, other: &Self) -> bool {
        self.table == other.table
            && self.source == other.source
            && self.target == other.target
            && self.table_exists == other.table_exists
            && self.column_exists == other.column_exists
    }
}

impl Eq for RenameColumn {}

impl Hash for RenameColumn {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.table.hash(state);
        self.source.hash(state);
        self.target.hash(state);
        self.table_exists.hash(state);
        self.column_exists.hash(state);
    }
}

impl fmt::Debug for RenameColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenameColumn")
            .field("table", &self.table)
            .field("source", &self.source)
            .field("target", &self.target)
            .field("table_exists", &self.table_exists)
            .field("column_exists", &self.column_exists)
            .finish()
    }
}
