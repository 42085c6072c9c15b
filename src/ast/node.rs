use super::{
    AddColumn, AstVisitor, ColumnDefinition, DropColumn, Expression, Identifier, Literal,
    NodeLocation, Property, RenameColumn, Statement,
};

/// Contract shared by every tree element.
pub trait Node {
    /// Where the node was parsed from, for diagnostics only.
    fn location(&self) -> Option<NodeLocation>;

    /// Directly nested nodes, in the order documented on each node type.
    fn children(&self) -> Vec<NodeRef<'_>>;

    /// Calls the visitor operation for this node's concrete kind and returns its result.
    fn accept<R, C, V>(&self, visitor: &mut V, context: C) -> R
    where
        V: AstVisitor<R, C> + ?Sized;
}

/// Borrowed view of any node in the tree.
///
/// Generic walkers work on this type so they never need to know which concrete
/// node they hold. Comparisons go through the structural equality of the
/// referenced node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeRef<'a> {
    AddColumn(&'a AddColumn),
    DropColumn(&'a DropColumn),
    RenameColumn(&'a RenameColumn),
    ColumnDefinition(&'a ColumnDefinition),
    Property(&'a Property),
    Identifier(&'a Identifier),
    Literal(&'a Literal),
}

impl<'a> NodeRef<'a> {
    /// Name of the concrete node type.
    pub fn kind(self) -> &'static str {
        match self {
            NodeRef::AddColumn(_) => "AddColumn",
            NodeRef::DropColumn(_) => "DropColumn",
            NodeRef::RenameColumn(_) => "RenameColumn",
            NodeRef::ColumnDefinition(_) => "ColumnDefinition",
            NodeRef::Property(_) => "Property",
            NodeRef::Identifier(_) => "Identifier",
            NodeRef::Literal(_) => "Literal",
        }
    }

    /// True for nodes that can be the root of an executable tree.
    pub fn is_statement(self) -> bool {
        matches!(
            self,
            NodeRef::AddColumn(_) | NodeRef::DropColumn(_) | NodeRef::RenameColumn(_)
        )
    }

    /// Short text for the node where it has one: a table name, identifier or literal.
    pub fn label(self) -> Option<String> {
        match self {
            NodeRef::AddColumn(n) => Some(n.name().to_string()),
            NodeRef::DropColumn(n) => Some(n.table().to_string()),
            NodeRef::RenameColumn(n) => Some(n.table().to_string()),
            NodeRef::ColumnDefinition(n) => Some(format!("{} {}", n.name(), n.data_type())),
            NodeRef::Property(n) => Some(n.name().to_string()),
            NodeRef::Identifier(n) => Some(n.to_string()),
            NodeRef::Literal(n) => Some(n.to_string()),
        }
    }

    pub fn location(self) -> Option<NodeLocation> {
        match self {
            NodeRef::AddColumn(n) => n.location(),
            NodeRef::DropColumn(n) => n.location(),
            NodeRef::RenameColumn(n) => n.location(),
            NodeRef::ColumnDefinition(n) => n.location(),
            NodeRef::Property(n) => n.location(),
            NodeRef::Identifier(n) => n.location(),
            NodeRef::Literal(n) => n.location(),
        }
    }

    pub fn children(self) -> Vec<NodeRef<'a>> {
        match self {
            NodeRef::AddColumn(n) => n.children(),
            NodeRef::DropColumn(n) => n.children(),
            NodeRef::RenameColumn(n) => n.children(),
            NodeRef::ColumnDefinition(n) => n.children(),
            NodeRef::Property(n) => n.children(),
            NodeRef::Identifier(n) => n.children(),
            NodeRef::Literal(n) => n.children(),
        }
    }

    pub fn accept<R, C, V>(self, visitor: &mut V, context: C) -> R
    where
        V: AstVisitor<R, C> + ?Sized,
    {
        match self {
            NodeRef::AddColumn(n) => n.accept(visitor, context),
            NodeRef::DropColumn(n) => n.accept(visitor, context),
            NodeRef::RenameColumn(n) => n.accept(visitor, context),
            NodeRef::ColumnDefinition(n) => n.accept(visitor, context),
            NodeRef::Property(n) => n.accept(visitor, context),
            NodeRef::Identifier(n) => n.accept(visitor, context),
            NodeRef::Literal(n) => n.accept(visitor, context),
        }
    }
}

macro_rules! node_ref_from {
    ($($variant:ident),* $(,)?) => {
        $(
            impl<'a> From<&'a $variant> for NodeRef<'a> {
                fn from(node: &'a $variant) -> Self {
                    NodeRef::$variant(node)
                }
            }
        )*
    };
}

node_ref_from!(
    AddColumn,
    DropColumn,
    RenameColumn,
    ColumnDefinition,
    Property,
    Identifier,
    Literal,
);

impl<'a> From<&'a Statement> for NodeRef<'a> {
    fn from(statement: &'a Statement) -> Self {
        match statement {
            Statement::AddColumn(n) => NodeRef::AddColumn(n),
            Statement::DropColumn(n) => NodeRef::DropColumn(n),
            Statement::RenameColumn(n) => NodeRef::RenameColumn(n),
        }
    }
}

impl<'a> From<&'a Expression> for NodeRef<'a> {
    fn from(expression: &'a Expression) -> Self {
        match expression {
            Expression::Identifier(n) => NodeRef::Identifier(n),
            Expression::Literal(n) => NodeRef::Literal(n),
        }
    }
}
