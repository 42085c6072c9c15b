//! Immutable SQL statement nodes.
//!
//! A parser builds a tree of these nodes once; analysis, planning and
//! rewriting then read it through [`AstVisitor`] dispatch or the generic
//! [`NodeExt`] walks.

pub mod ast;
pub mod config;
pub mod debug;
pub mod error;

pub use ast::*;
pub use config::*;
pub use error::{AstError, ErrorKind};
