//! Statement nodes and the arena-backed statement tree.

use crate::ast::expr::Expr;

/// Every statement construct the parser can produce or use as a parse
/// context. The set is closed; new constructs extend this enum rather than
/// introducing open-ended node types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StmtKind {
    TopLevel,
    Class,
    Interface,
    Enum,
    Annotation,
    ClassField,
    ConstructorParameters,
    ConstructorArguments,
    ConstructorCall,
    ConstructorBlock,
    StaticConstructorBlock,
    InitializerBlock,
    AttemptBlock,
    CatchParameters,
    CatchBlock,
    MethodCall,
    MethodParameters,
    MethodArguments,
    MethodBlock,
    ReturnStatement,
    LambdaParameters,
    LambdaArguments,
    LambdaBlock,
    Block,
    SwitchParameters,
    SwitchBlock,
    WhileParameters,
    WhileBlock,
    ForBlockParameters,
    ForBlock,
    ExpressionStatement,
}

/// Index handle into the statement arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StmtId(usize);

impl StmtId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// One statement node. The root is its own parent; every other node has
/// exactly one parent and appears in that parent's child list.
#[derive(Debug, Clone)]
pub struct StmtNode {
    pub kind: StmtKind,
    pub parent: StmtId,
    pub children: Vec<StmtId>,
    pub expr: Option<Expr>,
    pub name: Option<String>,
}

/// The statement tree for one parsed source file. Nodes live in an arena and
/// refer to each other by `StmtId`.
#[derive(Debug)]
pub struct Ast {
    nodes: Vec<StmtNode>,
    root: StmtId,
}

impl Ast {
    /// Creates a tree holding only the self-parenting top-level root.
    pub fn new() -> Self {
        let root = StmtId(0);
        Self {
            nodes: vec![StmtNode {
                kind: StmtKind::TopLevel,
                parent: root,
                children: Vec::new(),
                expr: None,
                name: None,
            }],
            root,
        }
    }

    pub fn root(&self) -> StmtId {
        self.root
    }

    pub fn node(&self, id: StmtId) -> &StmtNode {
        &self.nodes[id.0]
    }

    pub fn parent_of(&self, id: StmtId) -> StmtId {
        self.nodes[id.0].parent
    }

    pub fn children_of(&self, id: StmtId) -> &[StmtId] {
        &self.nodes[id.0].children
    }

    /// True only for the root, which is the one node that parents itself.
    pub fn is_root(&self, id: StmtId) -> bool {
        self.parent_of(id) == id
    }

    /// Appends a new node under `parent` and returns its handle.
    pub fn add_node(&mut self, parent: StmtId, kind: StmtKind) -> StmtId {
        let id = StmtId(self.nodes.len());
        self.nodes.push(StmtNode {
            kind,
            parent,
            children: Vec::new(),
            expr: None,
            name: None,
        });
        self.nodes[parent.0].children.push(id);
        id
    }

    /// Appends a named node under `parent` and returns its handle.
    pub fn add_named_node(
        &mut self,
        parent: StmtId,
        kind: StmtKind,
        name: impl Into<String>,
    ) -> StmtId {
        let id = self.add_node(parent, kind);
        self.nodes[id.0].name = Some(name.into());
        id
    }

    /// Attaches an expression payload to a node.
    pub fn set_expr(&mut self, id: StmtId, expr: Expr) {
        self.nodes[id.0].expr = Some(expr);
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl Default for Ast {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_tree_has_self_parenting_root() {
        let ast = Ast::new();
        let root = ast.root();
        assert!(ast.is_root(root));
        assert_eq!(ast.parent_of(root), root);
        assert_eq!(ast.node(root).kind, StmtKind::TopLevel);
        assert!(ast.children_of(root).is_empty());
    }

    #[test]
    fn tree_is_debug_formattable() {
        let mut ast = Ast::new();
        ast.add_named_node(ast.root(), StmtKind::Class, "Foo");
        let rendered = format!("{ast:?}");
        assert!(rendered.contains("TopLevel"));
        assert!(rendered.contains("Class"));
    }

    #[test]
    fn add_node_links_parent_and_child() {
        let mut ast = Ast::new();
        let class = ast.add_named_node(ast.root(), StmtKind::Class, "Foo");
        let method = ast.add_named_node(class, StmtKind::MethodBlock, "bar");
        assert_eq!(ast.parent_of(class), ast.root());
        assert_eq!(ast.children_of(ast.root()), &[class]);
        assert_eq!(ast.children_of(class), &[method]);
        assert!(!ast.is_root(class));
        assert_eq!(ast.node(method).name.as_deref(), Some("bar"));
    }
}
