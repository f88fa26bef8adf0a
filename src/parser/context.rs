//! Parse-context stack.
//!
//! Records which statement constructs enclose the current parse position so
//! that context-sensitive rules (grouping, expression statements) can ask
//! where they are. The base frame is the top-level context and can never be
//! popped.

use crate::ast::StmtKind;

pub struct ContextStack {
    frames: Vec<StmtKind>,
}

impl ContextStack {
    pub fn new() -> Self {
        Self {
            frames: vec![StmtKind::TopLevel],
        }
    }

    /// Enters a statement context.
    pub fn push(&mut self, kind: StmtKind) {
        self.frames.push(kind);
    }

    /// Leaves the innermost statement context. The base frame stays put.
    pub fn pop(&mut self) -> Option<StmtKind> {
        if self.frames.len() > 1 {
            self.frames.pop()
        } else {
            None
        }
    }

    /// The innermost context.
    pub fn current(&self) -> StmtKind {
        self.frames.last().copied().unwrap_or(StmtKind::TopLevel)
    }

    /// True if any enclosing context matches one of `kinds`.
    pub fn contains_any(&self, kinds: &[StmtKind]) -> bool {
        self.frames.iter().any(|frame| kinds.contains(frame))
    }

    pub fn depth(&self) -> usize {
        self.frames.len()
    }
}

impl Default for ContextStack {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_top_level() {
        let stack = ContextStack::new();
        assert_eq!(stack.current(), StmtKind::TopLevel);
        assert_eq!(stack.depth(), 1);
    }

    #[test]
    fn push_and_pop_nest() {
        let mut stack = ContextStack::new();
        stack.push(StmtKind::Class);
        stack.push(StmtKind::MethodBlock);
        assert_eq!(stack.current(), StmtKind::MethodBlock);
        assert_eq!(stack.pop(), Some(StmtKind::MethodBlock));
        assert_eq!(stack.current(), StmtKind::Class);
    }

    #[test]
    fn base_frame_is_never_popped() {
        let mut stack = ContextStack::new();
        assert_eq!(stack.pop(), None);
        assert_eq!(stack.current(), StmtKind::TopLevel);
        assert_eq!(stack.depth(), 1);
    }

    #[test]
    fn contains_any_searches_all_frames() {
        let mut stack = ContextStack::new();
        stack.push(StmtKind::Class);
        stack.push(StmtKind::MethodBlock);
        stack.push(StmtKind::WhileParameters);
        assert!(stack.contains_any(&[StmtKind::MethodBlock]));
        assert!(stack.contains_any(&[StmtKind::CatchBlock, StmtKind::Class]));
        assert!(!stack.contains_any(&[StmtKind::LambdaBlock]));
    }
}
