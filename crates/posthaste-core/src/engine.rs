//! The parser engine.

use tracing::{debug, trace};

use crate::error::{ParseError, Result, StateError};
use crate::reader::LookaheadReader;
use crate::span::Span;
use crate::state::{Decision, State, StateStack, Transition, TransitionKind};

type StateResult<T> = std::result::Result<T, StateError>;

/// A transition the engine applied, with the text it committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransitionEvent {
    /// The state that made the decision.
    pub from: State,
    /// The top of the stack after the transition.
    pub to: State,
    /// How the stack was mutated.
    pub kind: TransitionKind,
    /// The buffered text cleared by the transition.
    pub span: Span,
}

/// Incremental SQL parser.
///
/// Each call to [`read`](Self::read) consumes one character, appends it to
/// the buffer and asks the state on top of the stack whether its span is
/// over. Any transition clears the buffer.
#[derive(Debug, Clone)]
pub struct SqlParser<'a> {
    reader: LookaheadReader<'a>,
    stack: StateStack,
    /// Characters read since the last transition.
    buffer: String,
    /// Byte offset where `buffer` starts.
    buffer_start: usize,
    lookahead: Option<char>,
    transitions: Vec<TransitionEvent>,
    /// Set once a decision fails; the parse cannot continue.
    error: Option<ParseError>,
}

impl<'a> SqlParser<'a> {
    /// Creates a parser positioned before the first character of `sql`,
    /// outside of any clause.
    #[must_use]
    pub fn new(sql: &'a str) -> Self {
        Self::with_stack(sql, StateStack::new())
    }

    /// Creates a parser that starts inside the contexts in `stack`.
    #[must_use]
    pub fn with_stack(sql: &'a str, stack: StateStack) -> Self {
        Self {
            reader: LookaheadReader::new(sql),
            stack,
            buffer: String::new(),
            buffer_start: 0,
            lookahead: None,
            transitions: Vec::new(),
            error: None,
        }
    }

    /// Reads the next character and moves to the next state if the current
    /// one has ended.
    ///
    /// Returns `Ok(false)` without changing anything once the input is
    /// exhausted.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] if the current state cannot accept the input.
    /// The parse is then over: every later call returns the same error.
    pub fn read(&mut self) -> Result<bool> {
        if let Some(err) = &self.error {
            return Err(err.clone());
        }
        let Some(c) = self.reader.peek() else {
            return Ok(false);
        };
        self.buffer.push(c);
        self.lookahead = self.reader.peek_next();
        self.reader.read();
        trace!(
            cursor = self.reader.cursor(),
            char = ?c,
            lookahead = ?self.lookahead,
            "read"
        );

        let current = self.stack.top();
        let outcome = current.decide(&self.buffer, self.lookahead);
        self.settle(current, outcome)?;
        Ok(true)
    }

    /// Reads up to `n` characters.
    ///
    /// Returns `Ok(true)` if at least one character was read.
    ///
    /// # Errors
    ///
    /// Stops at the first [`ParseError`] and returns it.
    pub fn read_n(&mut self, n: usize) -> Result<bool> {
        let mut any = false;
        for _ in 0..n {
            any |= self.read()?;
        }
        Ok(any)
    }

    /// Reads until the end of input and returns the final stack.
    ///
    /// # Errors
    ///
    /// Stops at the first [`ParseError`] and returns it.
    pub fn read_to_end(&mut self) -> Result<&StateStack> {
        while self.read()? {}
        Ok(&self.stack)
    }

    /// Applies the decision `current` made on the buffer. A failed decision
    /// poisons the parser.
    fn settle(&mut self, current: State, outcome: StateResult<Decision>) -> Result<()> {
        let decision = match outcome {
            Ok(decision) => decision,
            Err(source) => {
                let err = ParseError::at(source, self.buffer_span(), self.reader.cursor());
                debug!(state = %current, error = %err, "state decision failed");
                self.error = Some(err.clone());
                return Err(err);
            }
        };

        let transition = match decision {
            Decision::Undecided => return Ok(()),
            Decision::Transition(transition) => transition,
            // Replace the completed state with whatever was active before it.
            Decision::Complete => Transition::replace(self.stack.previous(0)),
        };
        self.stack.apply(transition);
        self.commit(current, transition.kind);
        Ok(())
    }

    fn commit(&mut self, from: State, kind: TransitionKind) {
        let event = TransitionEvent {
            from,
            to: self.stack.top(),
            kind,
            span: self.buffer_span(),
        };
        debug!(
            from = %event.from,
            to = %event.to,
            kind = ?event.kind,
            start = event.span.start,
            end = event.span.end,
            "state transition"
        );
        self.transitions.push(event);
        self.buffer.clear();
        self.buffer_start = self.reader.position();
    }

    fn buffer_span(&self) -> Span {
        Span::new(self.buffer_start, self.reader.position())
    }

    /// Returns true once every character has been read.
    #[must_use]
    pub const fn is_at_end(&self) -> bool {
        self.reader.is_at_end()
    }

    /// Characters read since the last transition.
    #[must_use]
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Number of characters read.
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.reader.cursor()
    }

    /// The character after the last one read, as seen by the last decision.
    #[must_use]
    pub const fn lookahead(&self) -> Option<char> {
        self.lookahead
    }

    /// The state on top of the stack.
    #[must_use]
    pub fn current_state(&self) -> State {
        self.stack.top()
    }

    /// The state one level below the top.
    #[must_use]
    pub fn previous_state(&self) -> State {
        self.stack.previous(0)
    }

    /// The stack of active states.
    #[must_use]
    pub const fn state_stack(&self) -> &StateStack {
        &self.stack
    }

    /// Every transition applied so far, oldest first.
    #[must_use]
    pub fn transitions(&self) -> &[TransitionEvent] {
        &self.transitions
    }

    /// The most recent transition.
    #[must_use]
    pub fn last_transition(&self) -> Option<&TransitionEvent> {
        self.transitions.last()
    }

    /// The SQL being parsed.
    #[must_use]
    pub const fn sql(&self) -> &'a str {
        self.reader.source()
    }
}
