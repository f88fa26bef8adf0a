//! Abstract syntax tree for the Bluc language.
//!
//! Statements live in an arena (`Ast`) indexed by `StmtId`; expressions are
//! ordinary boxed trees attached to statement nodes as payloads.

pub mod expr;
pub mod printer;
pub mod stmt;

pub use expr::{BinaryExpr, Expr, ExprVisitor, GroupingExpr, LiteralExpr, UnaryExpr};
pub use printer::{AstPrinter, ExprPrinter};
pub use stmt::{Ast, StmtId, StmtKind, StmtNode};
