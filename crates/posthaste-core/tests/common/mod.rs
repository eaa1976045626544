#![allow(dead_code)]

use posthaste_core::{ParseError, SqlParser, State, StateStack};

/// Installs a fmt subscriber that writes through the test harness.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

/// Builds the expected stack from its frames, outermost first.
pub fn stack(states: &[State]) -> StateStack {
    states.iter().copied().collect()
}

/// Reads exactly `n` characters, panicking on a parse error or early end.
pub fn read_n(parser: &mut SqlParser<'_>, n: usize) {
    for i in 0..n {
        match parser.read() {
            Ok(true) => {}
            Ok(false) => panic!("input ended after {i} of {n} characters"),
            Err(e) => panic!("read {} failed: {e}", i + 1),
        }
    }
}

/// Parses all of `sql`, panicking on error.
pub fn parse(sql: &str) -> SqlParser<'_> {
    let mut parser = SqlParser::new(sql);
    parser
        .read_to_end()
        .unwrap_or_else(|e| panic!("Failed to parse: {sql}\nError: {e:?}"));
    parser
}

/// Parses all of `sql`, expecting an error.
pub fn parse_err(sql: &str) -> ParseError {
    let mut parser = SqlParser::new(sql);
    match parser.read_to_end() {
        Ok(stack) => panic!("Expected parse error for: {sql}, got stack {stack:?}"),
        Err(e) => e,
    }
}

/// The text committed by each transition, in order.
pub fn committed<'a>(parser: &SqlParser<'a>) -> Vec<&'a str> {
    parser
        .transitions()
        .iter()
        .map(|t| t.span.slice(parser.sql()).expect("span on char boundary"))
        .collect()
}
