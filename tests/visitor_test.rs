mod common;

use common::*;
use sqltree::{
    AddColumn, AstVisitor, ColumnDefinition, DropColumn, Identifier, Literal, Node, NodeRef,
    Property, RenameColumn, Statement,
};

/// Records which operations ran and with which context.
#[derive(Default)]
struct RecordingVisitor {
    calls: Vec<String>,
}

impl<'c> AstVisitor<&'static str, &'c str> for RecordingVisitor {
    fn visit_node(&mut self, node: NodeRef<'_>, context: &'c str) -> &'static str {
        self.calls.push(format!("node:{}:{}", node.kind(), context));
        "node"
    }

    fn visit_add_column(&mut self, node: &AddColumn, context: &'c str) -> &'static str {
        self.calls
            .push(format!("add_column:{}:{}", node.name(), context));
        "add_column"
    }
}

#[test]
fn test_accept_invokes_add_column_once() {
    let node = parsed_add_column();
    let mut visitor = RecordingVisitor::default();

    let result = node.accept(&mut visitor, "ctx");

    assert_eq!(result, "add_column");
    assert_eq!(visitor.calls, ["add_column:orders:ctx"]);
}

#[test]
fn test_dispatch_independent_of_static_type() {
    let statement = Statement::from(parsed_add_column());
    let mut visitor = RecordingVisitor::default();

    assert_eq!(statement.accept(&mut visitor, "as statement"), "add_column");
    assert_eq!(
        NodeRef::from(&statement).accept(&mut visitor, "as node ref"),
        "add_column"
    );
    assert_eq!(
        visitor.calls,
        ["add_column:orders:as statement", "add_column:orders:as node ref"]
    );
}

/// Passes the visited node back so tests can check identity.
struct IdentityVisitor;

impl AstVisitor<Option<*const AddColumn>, ()> for IdentityVisitor {
    fn visit_node(&mut self, _node: NodeRef<'_>, _context: ()) -> Option<*const AddColumn> {
        None
    }

    fn visit_add_column(&mut self, node: &AddColumn, _context: ()) -> Option<*const AddColumn> {
        Some(node as *const AddColumn)
    }
}

#[test]
fn test_accept_passes_the_instance_itself() {
    let node = synthesized_add_column();
    let seen = node.accept(&mut IdentityVisitor, ());
    assert_eq!(seen, Some(&node as *const AddColumn));
}

/// Only overrides the family operations to check the fallback chain.
#[derive(Default)]
struct FamilyVisitor {
    statements: Vec<&'static str>,
    expressions: Vec<&'static str>,
    others: Vec<&'static str>,
}

impl AstVisitor<(), ()> for FamilyVisitor {
    fn visit_node(&mut self, node: NodeRef<'_>, _context: ()) {
        self.others.push(node.kind());
    }

    fn visit_statement(&mut self, node: NodeRef<'_>, _context: ()) {
        self.statements.push(node.kind());
    }

    fn visit_expression(&mut self, node: NodeRef<'_>, _context: ()) {
        self.expressions.push(node.kind());
    }
}

#[test]
fn test_default_operations_fall_back_to_family() {
    let statements = [
        Statement::from(synthesized_add_column()),
        Statement::from(DropColumn::new(table("orders"), ident("status"), false, true)),
        Statement::from(RenameColumn::new(
            table("orders"),
            ident("status"),
            ident("state"),
            false,
            false,
        )),
    ];
    let property = Property::new(ident("format"), Literal::string("ORC"));
    let column = column("status", "varchar");

    let mut visitor = FamilyVisitor::default();
    for statement in &statements {
        statement.accept(&mut visitor, ());
    }
    column.accept(&mut visitor, ());
    property.accept(&mut visitor, ());
    Identifier::new("x").unwrap().accept(&mut visitor, ());
    Literal::long(1).accept(&mut visitor, ());

    assert_eq!(
        visitor.statements,
        ["AddColumn", "DropColumn", "RenameColumn"]
    );
    assert_eq!(visitor.others, ["ColumnDefinition", "Property"]);
    assert_eq!(visitor.expressions, ["Identifier", "Literal"]);
}

/// A recursive visitor that renders an indented outline, threading depth as context.
struct OutlineVisitor {
    lines: Vec<String>,
}

impl OutlineVisitor {
    fn descend(&mut self, node: NodeRef<'_>, depth: usize) {
        for child in node.children() {
            child.accept(self, depth + 1);
        }
    }
}

impl AstVisitor<(), usize> for OutlineVisitor {
    fn visit_node(&mut self, node: NodeRef<'_>, depth: usize) {
        self.lines
            .push(format!("{}{}", "  ".repeat(depth), node.kind()));
        self.descend(node, depth);
    }

    fn visit_column_definition(&mut self, node: &ColumnDefinition, depth: usize) {
        self.lines.push(format!(
            "{}column {} {}",
            "  ".repeat(depth),
            node.name(),
            node.data_type()
        ));
        self.descend(NodeRef::from(node), depth);
    }
}

#[test]
fn test_recursive_visitor_with_context() {
    let column = column("payload", "varbinary")
        .with_properties([Property::new(ident("compression"), Literal::string("zstd"))]);
    let node = AddColumn::new(table("events"), column, false, true);

    let mut visitor = OutlineVisitor { lines: Vec::new() };
    node.accept(&mut visitor, 0);

    insta::assert_snapshot!(visitor.lines.join("\n"), @r"
AddColumn
  column payload varbinary
    Identifier
    Property
      Identifier
      Literal
");
}
