//! Statement parsing and AST construction.
//!
//! The statement parser owns the cursor and the context stack, dispatches on
//! the current token (and context) to a `parse_*` method per construct, and
//! grows the statement arena as it goes. A parser instance is single-use:
//! one token sequence, one `parse` call.

use crate::ast::{Ast, StmtId, StmtKind};
use crate::config::{Config, RecoveryMode};

use super::context::ContextStack;
use super::cursor::Cursor;
use super::error::ParseError;
use super::expr::ExprParser;
use super::lexer::{is_operator, is_punctuation, Token, TokenKind};

/// Contexts whose bodies admit bare expression statements.
const EXPR_STMT_CONTEXTS: &[StmtKind] = &[
    StmtKind::MethodBlock,
    StmtKind::ConstructorBlock,
    StmtKind::StaticConstructorBlock,
    StmtKind::InitializerBlock,
    StmtKind::AttemptBlock,
    StmtKind::CatchBlock,
    StmtKind::Block,
    StmtKind::WhileBlock,
    StmtKind::ForBlock,
    StmtKind::LambdaBlock,
];

pub struct StmtParser {
    cursor: Cursor,
    context: ContextStack,
    expr_parser: ExprParser,
    config: Config,
    has_run: bool,
}

impl StmtParser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self::with_config(tokens, Config::default())
    }

    pub fn with_config(tokens: Vec<Token>, config: Config) -> Self {
        Self {
            cursor: Cursor::new(tokens),
            context: ContextStack::new(),
            expr_parser: ExprParser::new(),
            config,
            has_run: false,
        }
    }

    /// Parses the whole token sequence into a statement tree. On a fatal
    /// error the recovery policy decides whether to stop in place or drain
    /// the cursor to the end before reporting; either way the first error is
    /// what comes back.
    pub fn parse(&mut self) -> Result<Ast, ParseError> {
        if self.has_run {
            return Err(ParseError::AlreadyRan);
        }
        self.has_run = true;

        let mut ast = Ast::new();
        let root = ast.root();

        if self.cursor.current_token().is_sof() {
            self.cursor.advance().map_err(ParseError::from_cursor)?;
        }

        let mut first_error = None;
        while !self.cursor.at_eof(0) {
            if let Err(error) = self.parse_stmt(&mut ast, root) {
                eprintln!("BLUCC: fatal parse error: {error}");
                first_error = Some(error);
                if self.config.recovery == RecoveryMode::RecoverAndContinue {
                    while self.cursor.advance().is_ok() {}
                }
                break;
            }
        }

        match first_error {
            Some(error) => Err(error),
            None => Ok(ast),
        }
    }

    fn parse_stmt(&mut self, ast: &mut Ast, parent: StmtId) -> Result<(), ParseError> {
        if self.cursor.current_token_matches("class") {
            self.parse_class(ast, parent)
        } else if self.cursor.current_token_matches("while") {
            self.parse_while(ast, parent)
        } else if self.cursor.current_token_matches("return") {
            self.parse_return(ast, parent)
        } else if self.cursor.current_token_matches("{") {
            self.parse_block(ast, parent)
        } else if self.context.current() == StmtKind::Class && self.looks_like_method_decl() {
            self.parse_method(ast, parent)
        } else if self.context.contains_any(EXPR_STMT_CONTEXTS)
            && self.expr_parser.can_start(&self.cursor, &self.context)
        {
            self.parse_expr_stmt(ast, parent)
        } else {
            Err(ParseError::FatalUnknown {
                token: self.cursor.current_token().clone(),
            })
        }
    }

    fn parse_class(&mut self, ast: &mut Ast, parent: StmtId) -> Result<(), ParseError> {
        self.consume_text("class")?;
        let name = self.consume_identifier()?;
        let node = ast.add_named_node(parent, StmtKind::Class, name.text());
        self.consume_text("{")?;
        self.with_context(StmtKind::Class, |parser| {
            parser.parse_stmt_list_until(ast, node, "}")
        })?;
        self.consume_text("}")?;
        Ok(())
    }

    fn parse_method(&mut self, ast: &mut Ast, parent: StmtId) -> Result<(), ParseError> {
        let name = self.consume_identifier()?;
        let node = ast.add_named_node(parent, StmtKind::MethodBlock, name.text());
        self.consume_text("(")?;
        self.with_context(StmtKind::MethodParameters, |parser| {
            parser.parse_parameter_list(ast, node)
        })?;
        self.consume_text(")")?;
        self.consume_text("{")?;
        self.with_context(StmtKind::MethodBlock, |parser| {
            parser.parse_stmt_list_until(ast, node, "}")
        })?;
        self.consume_text("}")?;
        Ok(())
    }

    /// Parameters between the parentheses of a method declaration: zero or
    /// more identifiers separated by commas.
    fn parse_parameter_list(&mut self, ast: &mut Ast, node: StmtId) -> Result<(), ParseError> {
        if self.cursor.current_token_matches(")") {
            return Ok(());
        }
        loop {
            let parameter = self.consume_identifier()?;
            ast.add_named_node(node, StmtKind::MethodParameters, parameter.text());
            if self.cursor.current_token_matches(",") {
                self.consume_text(",")?;
            } else {
                return Ok(());
            }
        }
    }

    fn parse_while(&mut self, ast: &mut Ast, parent: StmtId) -> Result<(), ParseError> {
        self.consume_text("while")?;
        let node = ast.add_node(parent, StmtKind::WhileBlock);
        self.consume_text("(")?;
        let condition = self.with_context(StmtKind::WhileParameters, |parser| {
            parser.parse_expr()
        })?;
        ast.set_expr(node, condition);
        self.consume_text(")")?;
        self.consume_text("{")?;
        self.with_context(StmtKind::WhileBlock, |parser| {
            parser.parse_stmt_list_until(ast, node, "}")
        })?;
        self.consume_text("}")?;
        Ok(())
    }

    fn parse_return(&mut self, ast: &mut Ast, parent: StmtId) -> Result<(), ParseError> {
        // A value is present only when tokens follow on the same line.
        let bare = self.cursor.at_end_of_line();
        self.consume_text("return")?;
        let node = ast.add_node(parent, StmtKind::ReturnStatement);
        if !bare {
            let value = self.with_context(StmtKind::ReturnStatement, |parser| {
                parser.parse_expr()
            })?;
            ast.set_expr(node, value);
        }
        Ok(())
    }

    fn parse_block(&mut self, ast: &mut Ast, parent: StmtId) -> Result<(), ParseError> {
        let node = ast.add_node(parent, StmtKind::Block);
        self.consume_text("{")?;
        self.with_context(StmtKind::Block, |parser| {
            parser.parse_stmt_list_until(ast, node, "}")
        })?;
        self.consume_text("}")?;
        Ok(())
    }

    fn parse_expr_stmt(&mut self, ast: &mut Ast, parent: StmtId) -> Result<(), ParseError> {
        let node = ast.add_node(parent, StmtKind::ExpressionStatement);
        let expr = self.parse_expr()?;
        ast.set_expr(node, expr);
        Ok(())
    }

    /// Parses statements into `node` until the terminator (or EOF, which the
    /// caller's consume of the terminator then reports).
    fn parse_stmt_list_until(
        &mut self,
        ast: &mut Ast,
        node: StmtId,
        terminator: &str,
    ) -> Result<(), ParseError> {
        while !self.cursor.at_eof(0) && !self.cursor.current_token_matches(terminator) {
            self.parse_stmt(ast, node)?;
        }
        Ok(())
    }

    fn with_context<T>(
        &mut self,
        kind: StmtKind,
        body: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> Result<T, ParseError> {
        self.context.push(kind);
        let result = body(self);
        self.context.pop();
        result
    }

    fn parse_expr(&mut self) -> Result<crate::ast::Expr, ParseError> {
        self.expr_parser
            .parse(&mut self.cursor, &self.context)
            .map_err(ParseError::from_expr)
    }

    fn consume_text(&mut self, expected: &str) -> Result<Token, ParseError> {
        self.cursor.consume(expected).map_err(ParseError::from_cursor)
    }

    /// Consumes the current token as an identifier-shaped word.
    fn consume_identifier(&mut self) -> Result<Token, ParseError> {
        let token = self.cursor.current_token().clone();
        if token.kind() != TokenKind::Lexed
            || is_punctuation(token.text())
            || is_operator(token.text())
        {
            return Err(ParseError::FatalUnknown { token });
        }
        self.cursor.advance().map_err(ParseError::from_cursor)?;
        Ok(token)
    }

    fn looks_like_method_decl(&self) -> bool {
        let token = self.cursor.current_token();
        token.kind() == TokenKind::Lexed
            && !is_punctuation(token.text())
            && !is_operator(token.text())
            && self.cursor.peek_matches(1, "(")
    }
}
