//! Additive and multiplicative binary forms.

use crate::ast::Expr;
use crate::parser::context::ContextStack;
use crate::parser::cursor::Cursor;
use crate::parser::error::ExprError;

use super::{parse_left_assoc, ExprParser, ExprRule};

pub struct AdditiveRule;

impl ExprRule for AdditiveRule {
    fn precedence(&self) -> u8 {
        8
    }

    fn can_start(
        &self,
        engine: &ExprParser,
        slot: usize,
        cursor: &Cursor,
        context: &ContextStack,
    ) -> bool {
        engine.can_start_from(slot + 1, cursor, context)
    }

    fn parse(
        &self,
        engine: &ExprParser,
        slot: usize,
        cursor: &mut Cursor,
        context: &ContextStack,
    ) -> Result<Expr, ExprError> {
        parse_left_assoc(engine, slot, cursor, context, &["+", "-"])
    }
}

pub struct MultiplicativeRule;

impl ExprRule for MultiplicativeRule {
    fn precedence(&self) -> u8 {
        9
    }

    fn can_start(
        &self,
        engine: &ExprParser,
        slot: usize,
        cursor: &Cursor,
        context: &ContextStack,
    ) -> bool {
        engine.can_start_from(slot + 1, cursor, context)
    }

    fn parse(
        &self,
        engine: &ExprParser,
        slot: usize,
        cursor: &mut Cursor,
        context: &ContextStack,
    ) -> Result<Expr, ExprError> {
        parse_left_assoc(engine, slot, cursor, context, &["*", "/", "%"])
    }
}
