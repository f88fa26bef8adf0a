//! Literal and identifier atoms, the tightest binding rule.

use crate::ast::Expr;
use crate::parser::context::ContextStack;
use crate::parser::cursor::Cursor;
use crate::parser::error::ExprError;
use crate::parser::lexer::{is_operator, is_punctuation, TokenKind};

use super::{ExprParser, ExprRule};

/// Accepts any lexed word that is neither punctuation nor an operator. The
/// parser does not distinguish numbers, strings and identifiers at this
/// level; they are all atoms.
pub struct LiteralRule;

impl ExprRule for LiteralRule {
    fn precedence(&self) -> u8 {
        12
    }

    fn can_start(
        &self,
        _engine: &ExprParser,
        _slot: usize,
        cursor: &Cursor,
        _context: &ContextStack,
    ) -> bool {
        let token = cursor.current_token();
        token.kind() == TokenKind::Lexed
            && !is_punctuation(token.text())
            && !is_operator(token.text())
    }

    fn parse(
        &self,
        _engine: &ExprParser,
        _slot: usize,
        cursor: &mut Cursor,
        _context: &ContextStack,
    ) -> Result<Expr, ExprError> {
        let value = cursor.current_token().clone();
        cursor.advance()?;
        Ok(Expr::literal(value))
    }
}
