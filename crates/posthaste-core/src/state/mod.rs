//! Parse contexts and the decisions they make.
//!
//! Every [`State`] looks at the text read since it was entered (plus one
//! character of lookahead) and returns a [`Decision`]. The engine applies the
//! decision to a [`StateStack`].

pub mod rules;
mod stack;
mod transition;

use core::fmt;

pub use stack::StateStack;
pub use transition::{Decision, Transition, TransitionKind};

use crate::error::StateError;
use crate::keyword::Keyword;

/// Category of a parse context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StateKind {
    /// A clause such as `FROM` or `WHERE`.
    Section,
    /// A statement-level context such as `SELECT`.
    QueryType,
}

/// A parse context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum State {
    /// Not inside any clause. The implicit bottom of every stack.
    #[default]
    NoContext,
    /// The column list of a `SELECT`.
    Select,
    /// The table list of a `FROM` section.
    From,
    /// A bare comma-separated list.
    CommaSeparated,
}

impl State {
    /// Upper-case name of the state.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::NoContext => "NONE",
            Self::Select => "SELECT",
            Self::From => "FROM",
            Self::CommaSeparated => "COMMA_SEPARATED",
        }
    }

    /// The category of the state, if it has one.
    #[must_use]
    pub const fn kind(&self) -> Option<StateKind> {
        match self {
            Self::Select => Some(StateKind::QueryType),
            Self::From => Some(StateKind::Section),
            Self::NoContext | Self::CommaSeparated => None,
        }
    }

    /// Returns true for the "no context" sentinel.
    #[must_use]
    pub const fn is_sentinel(&self) -> bool {
        matches!(self, Self::NoContext)
    }

    /// Decides where to go given the text read since this state was entered
    /// and the character that follows it (`None` at end of input).
    ///
    /// # Errors
    ///
    /// Returns [`StateError::Unsupported`] when a recognized statement type
    /// has no state yet.
    pub fn decide(&self, buffer: &str, lookahead: Option<char>) -> Result<Decision, StateError> {
        match self {
            Self::NoContext => top_level(buffer, lookahead),
            Self::Select | Self::CommaSeparated => {
                if rules::ends_list_item(buffer, lookahead) {
                    Ok(Decision::Complete)
                } else {
                    Ok(Decision::Undecided)
                }
            }
            // TODO: give FROM the same list-end detection as SELECT once table
            // references (aliases, joins) have their own states.
            Self::From => Ok(Decision::Undecided),
        }
    }
}

fn top_level(buffer: &str, lookahead: Option<char>) -> Result<Decision, StateError> {
    let Some(keyword) = rules::leading_keyword(buffer, lookahead) else {
        return Ok(Decision::Undecided);
    };
    match keyword {
        Keyword::Select => Ok(Decision::Transition(Transition::replace(State::Select))),
        Keyword::From => Ok(Decision::Transition(Transition::replace(State::From))),
        Keyword::Insert | Keyword::Update => Err(StateError::Unsupported { keyword }),
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
