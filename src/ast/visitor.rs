use super::{
    AddColumn, ColumnDefinition, DropColumn, Identifier, Literal, NodeRef, Property,
    RenameColumn,
};

/// One operation per concrete node type.
///
/// Only [`visit_node`](AstVisitor::visit_node) is required. Every other
/// operation falls back to its family (`visit_statement` or `visit_expression`)
/// and from there to `visit_node`, so a visitor overrides just the kinds it
/// cares about. Adding a node type means adding an operation here.
///
/// `C` is an opaque context handed through unchanged by `accept`.
pub trait AstVisitor<R, C> {
    fn visit_node(&mut self, node: NodeRef<'_>, context: C) -> R;

    fn visit_statement(&mut self, node: NodeRef<'_>, context: C) -> R {
        self.visit_node(node, context)
    }

    fn visit_add_column(&mut self, node: &AddColumn, context: C) -> R {
        self.visit_statement(NodeRef::AddColumn(node), context)
    }

    fn visit_drop_column(&mut self, node: &DropColumn, context: C) -> R {
        self.visit_statement(NodeRef::DropColumn(node), context)
    }

    fn visit_rename_column(&mut self, node: &RenameColumn, context: C) -> R {
        self.visit_statement(NodeRef::RenameColumn(node), context)
    }

    fn visit_column_definition(&mut self, node: &ColumnDefinition, context: C) -> R {
        self.visit_node(NodeRef::ColumnDefinition(node), context)
    }

    fn visit_property(&mut self, node: &Property, context: C) -> R {
        self.visit_node(NodeRef::Property(node), context)
    }

    fn visit_expression(&mut self, node: NodeRef<'_>, context: C) -> R {
        self.visit_node(node, context)
    }

    fn visit_identifier(&mut self, node: &Identifier, context: C) -> R {
        self.visit_expression(NodeRef::Identifier(node), context)
    }

    fn visit_literal(&mut self, node: &Literal, context: C) -> R {
        self.visit_expression(NodeRef::Literal(node), context)
    }
}
