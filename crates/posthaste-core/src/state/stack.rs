//! The stack of nested parse contexts.

use super::{State, Transition, TransitionKind};

/// A stack of [`State`]s, innermost last.
///
/// The stack is never observably empty: with no frames stored, the top is
/// [`State::NoContext`]. The sentinel itself is never stored, so an empty
/// stack and a stack holding only the sentinel are the same value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StateStack {
    frames: Vec<State>,
}

impl StateStack {
    /// Creates an empty stack.
    #[must_use]
    pub const fn new() -> Self {
        Self { frames: Vec::new() }
    }

    /// The current context, or the sentinel when nothing is stored.
    #[must_use]
    pub fn top(&self) -> State {
        self.frames.last().copied().unwrap_or_default()
    }

    /// Pushes `state`. Pushing the sentinel is a no-op.
    pub fn push(&mut self, state: State) {
        if !state.is_sentinel() {
            self.frames.push(state);
        }
    }

    /// Removes and returns the top, or the sentinel when nothing is stored.
    pub fn pop(&mut self) -> State {
        self.frames.pop().unwrap_or_default()
    }

    /// Applies a transition.
    pub fn apply(&mut self, transition: Transition) {
        if transition.kind == TransitionKind::Replace {
            self.pop();
        }
        self.push(transition.to);
    }

    /// Every state below the top, nearest to the top first.
    ///
    /// A stack of `A, B, C, D` (pushed in that order) yields `C, B, A`.
    #[must_use]
    pub fn queue(&self) -> Vec<State> {
        self.below_top().iter().rev().copied().collect()
    }

    /// The state at `index` in [`queue`](Self::queue), or the sentinel when
    /// `index` is out of range.
    #[must_use]
    pub fn previous(&self, index: usize) -> State {
        self.below_top()
            .iter()
            .rev()
            .nth(index)
            .copied()
            .unwrap_or_default()
    }

    fn below_top(&self) -> &[State] {
        self.frames
            .split_last()
            .map(|(_, rest)| rest)
            .unwrap_or_default()
    }

    /// Number of stored frames, not counting the sentinel.
    #[must_use]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Returns true if only the sentinel is on the stack.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// The stored frames, innermost last.
    #[must_use]
    pub fn as_slice(&self) -> &[State] {
        &self.frames
    }

    /// Iterates over the stored frames, outermost first.
    pub fn iter(&self) -> impl Iterator<Item = &State> {
        self.frames.iter()
    }
}

impl<'a> IntoIterator for &'a StateStack {
    type Item = &'a State;
    type IntoIter = std::slice::Iter<'a, State>;

    fn into_iter(self) -> Self::IntoIter {
        self.frames.iter()
    }
}

impl FromIterator<State> for StateStack {
    fn from_iter<I: IntoIterator<Item = State>>(iter: I) -> Self {
        let mut stack = Self::new();
        for state in iter {
            stack.push(state);
        }
        stack
    }
}
