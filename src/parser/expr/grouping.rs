//! Parenthesized grouping.
//!
//! Grouping is context-sensitive: `(` only opens a grouped expression inside
//! bodies where a parenthesis cannot instead mean a parameter or argument
//! list. Elsewhere the rule declines and dispatch falls through.

use crate::ast::{Expr, StmtKind};
use crate::parser::context::ContextStack;
use crate::parser::cursor::Cursor;
use crate::parser::error::ExprError;

use super::{ExprParser, ExprRule};

/// Contexts in which `(` starts a grouped expression.
pub const GROUPING_CONTEXTS: &[StmtKind] = &[
    StmtKind::ClassField,
    StmtKind::MethodBlock,
    StmtKind::LambdaBlock,
    StmtKind::ConstructorBlock,
    StmtKind::StaticConstructorBlock,
    StmtKind::AttemptBlock,
    StmtKind::CatchBlock,
];

pub struct GroupingRule;

impl ExprRule for GroupingRule {
    fn precedence(&self) -> u8 {
        11
    }

    fn can_start(
        &self,
        _engine: &ExprParser,
        _slot: usize,
        cursor: &Cursor,
        context: &ContextStack,
    ) -> bool {
        cursor.current_token_matches("(") && context.contains_any(GROUPING_CONTEXTS)
    }

    fn parse(
        &self,
        engine: &ExprParser,
        _slot: usize,
        cursor: &mut Cursor,
        context: &ContextStack,
    ) -> Result<Expr, ExprError> {
        let open = cursor.consume("(")?;
        // The inner expression restarts from the loosest rule.
        let inner = engine.parse_from(0, cursor, context)?;
        let close = cursor
            .consume(")")
            .map_err(|_| ExprError::MissingClosingParenthesis { open: open.clone() })?;
        Ok(Expr::grouping(open, inner, close))
    }
}
