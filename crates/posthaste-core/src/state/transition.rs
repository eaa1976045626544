//! Transitions between parse contexts.

use super::State;

/// How a transition mutates the state stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransitionKind {
    /// Pop the current top of the stack (if any), then push the target.
    Replace,
    /// Push the target on top of the current context.
    Append,
}

/// Where parsing goes next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transition {
    /// The state to enter.
    pub to: State,
    /// How the stack is mutated to enter it.
    pub kind: TransitionKind,
}

impl Transition {
    /// Leaves the current context and enters `to` in its place.
    #[must_use]
    pub const fn replace(to: State) -> Self {
        Self {
            to,
            kind: TransitionKind::Replace,
        }
    }

    /// Enters `to` nested inside the current context.
    #[must_use]
    pub const fn append(to: State) -> Self {
        Self {
            to,
            kind: TransitionKind::Append,
        }
    }
}

/// The outcome of asking a state about the text read since it was entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Keep accumulating.
    Undecided,
    /// Move to another state.
    Transition(Transition),
    /// The state's span has ended; resume the enclosing context.
    Complete,
}
