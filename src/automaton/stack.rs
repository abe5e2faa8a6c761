//! The pushdown stack.
//!
//! Holds at most two symbols: the immutable `Z0` bottom marker and, while a
//! session is established, one `SESSION` token above it. Every operation
//! that would break that shape is refused rather than applied.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::error::EngineError;

/// Stack alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StackSymbol {
    /// Bottom-of-stack marker. Pushed at construction, never popped.
    Z0,
    /// Established-session token.
    Session,
}

impl StackSymbol {
    /// Returns the label emitted as `stackTop`.
    ///
    /// Consumers detect a session by substring match on `"S"`, so no
    /// non-session label may contain that letter.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Z0 => "Z0",
            Self::Session => "SESSION",
        }
    }
}

impl fmt::Display for StackSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for StackSymbol {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Stack operation attached to a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StackOp {
    /// Leave the stack untouched.
    None,
    /// Push `SESSION`.
    PushSession,
    /// Pop `SESSION`.
    PopSession,
}

/// Bounded stack with `Z0` permanently at the bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack {
    symbols: Vec<StackSymbol>,
}

impl Stack {
    /// Maximum depth: `Z0` plus one session token.
    pub const MAX_DEPTH: usize = 2;

    /// Creates a stack holding only `Z0`.
    #[must_use]
    pub fn new() -> Self {
        let mut symbols = Vec::with_capacity(Self::MAX_DEPTH);
        symbols.push(StackSymbol::Z0);
        Self { symbols }
    }

    /// Returns the top symbol.
    #[must_use]
    pub fn top(&self) -> StackSymbol {
        self.symbols.last().copied().unwrap_or(StackSymbol::Z0)
    }

    /// Returns the number of symbols on the stack (1 or 2).
    #[must_use]
    pub fn depth(&self) -> usize {
        self.symbols.len()
    }

    /// Whether a session token is present.
    #[must_use]
    pub fn has_session(&self) -> bool {
        self.top() == StackSymbol::Session
    }

    /// Symbols from bottom to top.
    #[must_use]
    pub fn symbols(&self) -> &[StackSymbol] {
        &self.symbols
    }

    /// Applies a stack operation.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::StackViolation`] when pushing a second session
    /// token or popping with no session present (which would expose or
    /// remove `Z0`).
    pub fn apply(&mut self, op: StackOp) -> Result<(), EngineError> {
        match op {
            StackOp::None => Ok(()),
            StackOp::PushSession => {
                if self.has_session() {
                    return Err(EngineError::StackViolation("SESSION already on the stack"));
                }
                self.symbols.push(StackSymbol::Session);
                Ok(())
            }
            StackOp::PopSession => {
                if !self.has_session() {
                    return Err(EngineError::StackViolation("pop would remove Z0"));
                }
                self.symbols.pop();
                Ok(())
            }
        }
    }
}

impl Default for Stack {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_stack_holds_only_z0() {
        let stack = Stack::new();
        assert_eq!(stack.depth(), 1);
        assert_eq!(stack.top(), StackSymbol::Z0);
        assert!(!stack.has_session());
    }

    #[test]
    fn push_then_pop_session() {
        let mut stack = Stack::new();
        stack.apply(StackOp::PushSession).unwrap();
        assert_eq!(stack.depth(), 2);
        assert_eq!(stack.top(), StackSymbol::Session);
        assert_eq!(stack.symbols(), &[StackSymbol::Z0, StackSymbol::Session]);

        stack.apply(StackOp::PopSession).unwrap();
        assert_eq!(stack.depth(), 1);
        assert_eq!(stack.top(), StackSymbol::Z0);
    }

    #[test]
    fn double_push_is_refused() {
        let mut stack = Stack::new();
        stack.apply(StackOp::PushSession).unwrap();
        let err = stack.apply(StackOp::PushSession).unwrap_err();
        assert!(matches!(err, EngineError::StackViolation(_)));
        assert_eq!(stack.depth(), 2);
    }

    #[test]
    fn z0_is_never_popped() {
        let mut stack = Stack::new();
        let err = stack.apply(StackOp::PopSession).unwrap_err();
        assert!(matches!(err, EngineError::StackViolation(_)));
        assert_eq!(stack.top(), StackSymbol::Z0);
    }

    #[test]
    fn noop_leaves_stack_unchanged() {
        let mut stack = Stack::new();
        stack.apply(StackOp::None).unwrap();
        assert_eq!(stack, Stack::new());
    }

    #[test]
    fn only_session_label_contains_s() {
        assert!(!StackSymbol::Z0.label().contains('S'));
        assert!(StackSymbol::Session.label().contains("SESSION"));
    }
}
