//! Equality comparison, the loosest binding expression form.

use crate::ast::Expr;
use crate::parser::context::ContextStack;
use crate::parser::cursor::Cursor;
use crate::parser::error::ExprError;

use super::{parse_left_assoc, ExprParser, ExprRule};

const OPERATORS: &[&str] = &["==", "!="];

pub struct EqualityRule;

impl ExprRule for EqualityRule {
    fn precedence(&self) -> u8 {
        7
    }

    fn can_start(
        &self,
        engine: &ExprParser,
        slot: usize,
        cursor: &Cursor,
        context: &ContextStack,
    ) -> bool {
        // An equality chain starts wherever its left operand can start.
        engine.can_start_from(slot + 1, cursor, context)
    }

    fn parse(
        &self,
        engine: &ExprParser,
        slot: usize,
        cursor: &mut Cursor,
        context: &ContextStack,
    ) -> Result<Expr, ExprError> {
        parse_left_assoc(engine, slot, cursor, context, OPERATORS)
    }
}
