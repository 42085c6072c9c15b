//! SQL statement tree
//!
//! Nodes are built once by the parser (or a rewrite pass) and never mutated
//! afterwards. Each node owns its children outright; there are no parent links,
//! so trees are navigated top-down through either an [`AstVisitor`] or the
//! untyped [`Node::children`] enumeration.

pub mod column;
pub mod dump;
pub mod expression;
pub mod identifier;
pub mod location;
pub mod node;
pub mod statement;
pub mod traversal;
pub mod visitor;

pub use column::{ColumnDefinition, Property};
pub use dump::TreeDumper;
pub use expression::{Expression, Literal, LiteralValue};
pub use identifier::{Identifier, QualifiedName};
pub use location::NodeLocation;
pub use node::{Node, NodeRef};
pub use statement::{AddColumn, AddColumnBuilder, DropColumn, RenameColumn, Statement};
pub use traversal::NodeExt;
pub use visitor::AstVisitor;
