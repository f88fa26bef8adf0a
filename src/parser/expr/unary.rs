//! Prefix unary operators.

use crate::ast::Expr;
use crate::parser::context::ContextStack;
use crate::parser::cursor::Cursor;
use crate::parser::error::ExprError;

use super::{ExprParser, ExprRule};

const OPERATORS: &[&str] = &["!", "-"];

pub struct UnaryRule;

impl ExprRule for UnaryRule {
    fn precedence(&self) -> u8 {
        10
    }

    fn can_start(
        &self,
        engine: &ExprParser,
        slot: usize,
        cursor: &Cursor,
        context: &ContextStack,
    ) -> bool {
        cursor.current_token_matches_any(OPERATORS)
            || engine.can_start_from(slot + 1, cursor, context)
    }

    fn parse(
        &self,
        engine: &ExprParser,
        slot: usize,
        cursor: &mut Cursor,
        context: &ContextStack,
    ) -> Result<Expr, ExprError> {
        if cursor.current_token_matches_any(OPERATORS) {
            let operator_text = cursor.current_text().to_string();
            let operator = cursor.consume(&operator_text)?;
            // Right recursion, so `!!x` nests as `(! (! x))`.
            let operand = self.parse(engine, slot, cursor, context)?;
            Ok(Expr::unary(operator, operand))
        } else {
            engine.parse_from(slot + 1, cursor, context)
        }
    }
}
