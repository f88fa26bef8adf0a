//! Printers for expressions and statement trees.

use crate::ast::expr::{
    BinaryExpr, Expr, ExprVisitor, GroupingExpr, LiteralExpr, UnaryExpr,
};
use crate::ast::stmt::{Ast, StmtId};

/// Renders an expression in fully parenthesized prefix form, e.g.
/// `(== a (+ b c))`. Mainly used to make precedence visible in tests and
/// debug output.
pub struct ExprPrinter;

impl ExprPrinter {
    pub fn new() -> Self {
        Self
    }

    pub fn print(&mut self, expr: &Expr) -> String {
        expr.accept(self)
    }
}

impl Default for ExprPrinter {
    fn default() -> Self {
        Self::new()
    }
}

impl ExprVisitor for ExprPrinter {
    type Output = String;

    fn visit_binary(&mut self, expr: &BinaryExpr) -> String {
        format!(
            "({} {} {})",
            expr.operator.text(),
            expr.left.accept(self),
            expr.right.accept(self)
        )
    }

    fn visit_unary(&mut self, expr: &UnaryExpr) -> String {
        format!("({} {})", expr.operator.text(), expr.operand.accept(self))
    }

    fn visit_grouping(&mut self, expr: &GroupingExpr) -> String {
        format!("(group {})", expr.inner.accept(self))
    }

    fn visit_literal(&mut self, expr: &LiteralExpr) -> String {
        expr.value.text().to_string()
    }
}

/// Renders a statement tree as an indented outline, one node per line.
pub struct AstPrinter {
    indent: &'static str,
}

impl AstPrinter {
    pub fn new() -> Self {
        Self { indent: "  " }
    }

    pub fn print(&self, ast: &Ast) -> String {
        let mut out = String::new();
        self.print_node(ast, ast.root(), 0, &mut out);
        out
    }

    fn print_node(&self, ast: &Ast, id: StmtId, depth: usize, out: &mut String) {
        let node = ast.node(id);
        for _ in 0..depth {
            out.push_str(self.indent);
        }
        out.push_str(&format!("{:?}", node.kind));
        if let Some(name) = &node.name {
            out.push_str(&format!(" `{name}`"));
        }
        if let Some(expr) = &node.expr {
            let mut printer = ExprPrinter::new();
            out.push_str(&format!(" {}", printer.print(expr)));
        }
        out.push('\n');
        for child in ast.children_of(id) {
            self.print_node(ast, *child, depth + 1, out);
        }
    }
}

impl Default for AstPrinter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::stmt::StmtKind;
    use crate::parser::lexer::Token;

    fn tok(text: &str) -> Token {
        Token::new(None, 1, 1, text)
    }

    #[test]
    fn prints_nested_binary_in_prefix_form() {
        let expr = Expr::binary(
            Expr::literal(tok("a")),
            tok("=="),
            Expr::binary(Expr::literal(tok("b")), tok("+"), Expr::literal(tok("c"))),
        );
        assert_eq!(ExprPrinter::new().print(&expr), "(== a (+ b c))");
    }

    #[test]
    fn prints_grouping_and_unary() {
        let expr = Expr::unary(
            tok("!"),
            Expr::grouping(tok("("), Expr::literal(tok("x")), tok(")")),
        );
        assert_eq!(ExprPrinter::new().print(&expr), "(! (group x))");
    }

    #[test]
    fn outline_shows_kind_name_and_expr() {
        let mut ast = Ast::new();
        let class = ast.add_named_node(ast.root(), StmtKind::Class, "Foo");
        let ret = ast.add_node(class, StmtKind::ReturnStatement);
        ast.set_expr(ret, Expr::literal(tok("1")));
        let rendered = AstPrinter::new().print(&ast);
        assert_eq!(rendered, "TopLevel\n  Class `Foo`\n    ReturnStatement 1\n");
    }
}
