//! Precedence-ordered expression parsing.
//!
//! Each expression form is a rule implementing [`ExprRule`]. The engine keeps
//! the rules in one table sorted by ascending precedence and dispatches by
//! probing from a slot onward, taking the first rule that can start at the
//! current token. Binary rules bind their operands by re-entering the engine
//! one slot past themselves, which is what makes tighter rules bind tighter.

mod arithmetic;
mod equality;
mod grouping;
mod literal;
mod unary;

use once_cell::sync::Lazy;

use crate::ast::Expr;

use super::context::ContextStack;
use super::cursor::Cursor;
use super::error::ExprError;

pub use arithmetic::{AdditiveRule, MultiplicativeRule};
pub use equality::EqualityRule;
pub use grouping::GroupingRule;
pub use literal::LiteralRule;
pub use unary::UnaryRule;

/// One expression form. Rules are stateless; all parse state lives in the
/// cursor and context stack passed through the engine.
pub trait ExprRule: Send + Sync {
    /// Binding strength. Lower values bind looser and are probed first.
    fn precedence(&self) -> u8;

    /// True if this rule can begin parsing at the cursor's current token.
    /// Must not move the cursor.
    fn can_start(
        &self,
        engine: &ExprParser,
        slot: usize,
        cursor: &Cursor,
        context: &ContextStack,
    ) -> bool;

    /// Parses this rule's expression form starting at the current token.
    fn parse(
        &self,
        engine: &ExprParser,
        slot: usize,
        cursor: &mut Cursor,
        context: &ContextStack,
    ) -> Result<Expr, ExprError>;
}

static RULES: Lazy<Vec<Box<dyn ExprRule>>> = Lazy::new(|| {
    let mut rules: Vec<Box<dyn ExprRule>> = vec![
        Box::new(EqualityRule),
        Box::new(AdditiveRule),
        Box::new(MultiplicativeRule),
        Box::new(UnaryRule),
        Box::new(GroupingRule),
        Box::new(LiteralRule),
    ];
    rules.sort_by_key(|rule| rule.precedence());
    rules
});

/// The expression engine. Holds no per-parse state; one instance serves any
/// number of parses.
pub struct ExprParser;

impl ExprParser {
    pub fn new() -> Self {
        Self
    }

    fn rules(&self) -> &'static [Box<dyn ExprRule>] {
        &RULES
    }

    /// True if any rule can begin an expression at the current token.
    pub fn can_start(&self, cursor: &Cursor, context: &ContextStack) -> bool {
        self.can_start_from(0, cursor, context)
    }

    /// True if any rule at `slot` or tighter can begin at the current token.
    pub fn can_start_from(&self, slot: usize, cursor: &Cursor, context: &ContextStack) -> bool {
        self.rules()[slot.min(self.rules().len())..]
            .iter()
            .enumerate()
            .any(|(offset, rule)| rule.can_start(self, slot + offset, cursor, context))
    }

    /// Parses one full expression starting from the loosest rule.
    pub fn parse(&self, cursor: &mut Cursor, context: &ContextStack) -> Result<Expr, ExprError> {
        self.parse_from(0, cursor, context)
    }

    /// Parses an expression using only rules at `slot` and tighter. The first
    /// rule that can start at the current token wins.
    pub fn parse_from(
        &self,
        slot: usize,
        cursor: &mut Cursor,
        context: &ContextStack,
    ) -> Result<Expr, ExprError> {
        let rules = self.rules();
        for (offset, rule) in rules[slot.min(rules.len())..].iter().enumerate() {
            if rule.can_start(self, slot + offset, cursor, context) {
                return rule.parse(self, slot + offset, cursor, context);
            }
        }
        Err(ExprError::NoRuleMatches {
            token: cursor.current_token().clone(),
        })
    }
}

impl Default for ExprParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared body of the left-associative binary rules: parse a tighter operand,
/// then fold while the current token is one of `operators`.
fn parse_left_assoc(
    engine: &ExprParser,
    slot: usize,
    cursor: &mut Cursor,
    context: &ContextStack,
    operators: &[&str],
) -> Result<Expr, ExprError> {
    let mut left = engine.parse_from(slot + 1, cursor, context)?;
    while cursor.current_token_matches_any(operators) {
        let operator_text = cursor.current_text().to_string();
        let operator = cursor.consume(&operator_text)?;
        let right = engine.parse_from(slot + 1, cursor, context)?;
        left = Expr::binary(left, operator, right);
    }
    Ok(left)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_is_sorted_by_ascending_precedence() {
        let precedences: Vec<u8> = RULES.iter().map(|rule| rule.precedence()).collect();
        let mut sorted = precedences.clone();
        sorted.sort_unstable();
        assert_eq!(precedences, sorted);
    }

    #[test]
    fn registry_has_no_duplicate_precedences() {
        let mut precedences: Vec<u8> = RULES.iter().map(|rule| rule.precedence()).collect();
        precedences.dedup();
        assert_eq!(precedences.len(), RULES.len());
    }
}
