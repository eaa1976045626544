//! # posthaste-core
//!
//! An incremental, character-at-a-time SQL lexer.
//!
//! The parser keeps a stack of nested contexts ("inside a SELECT list",
//! "inside a FROM section") and, after every character, asks the innermost
//! context whether its span has ended. A one-character lookahead lets a
//! context see its own boundary without taking that character away from the
//! next context.
//!
//! ```rust
//! use posthaste_core::{SqlParser, State};
//!
//! let mut parser = SqlParser::new("SELECT foo FROM bar");
//!
//! parser.read_n(7)?; // "SELECT "
//! assert_eq!(parser.current_state(), State::Select);
//! assert_eq!(parser.buffer(), "");
//!
//! parser.read_to_end()?;
//! assert_eq!(parser.current_state(), State::From);
//! assert_eq!(parser.buffer(), "bar");
//!
//! // Each transition records the text it committed.
//! let committed: Vec<&str> = parser
//!     .transitions()
//!     .iter()
//!     .filter_map(|t| t.span.slice(parser.sql()))
//!     .collect();
//! assert_eq!(committed, ["SELECT ", "foo ", "FROM "]);
//! # Ok::<(), posthaste_core::ParseError>(())
//! ```
//!
//! Recognized keywords must be upper case, start the buffer, and be followed
//! by whitespace. `INSERT` and `UPDATE` are recognized but rejected with
//! [`ParseError::Unsupported`].

pub mod engine;
pub mod error;
pub mod keyword;
pub mod reader;
pub mod span;
pub mod state;

pub use engine::{SqlParser, TransitionEvent};
pub use error::{ParseError, Result, StateError};
pub use keyword::Keyword;
pub use reader::LookaheadReader;
pub use span::Span;
pub use state::{Decision, State, StateKind, StateStack, Transition, TransitionKind};
