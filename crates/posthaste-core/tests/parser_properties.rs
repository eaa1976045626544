//! Property tests over arbitrary input.

use posthaste_core::SqlParser;
use proptest::prelude::*;

/// Text without the reserved INSERT/UPDATE keywords, so parsing never fails.
fn sql_like() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z_ ,\t\n]{0,40}",
        prop::collection::vec(
            prop_oneof![
                Just("SELECT "),
                Just("FROM "),
                Just("foo"),
                Just("bar"),
                Just(", "),
                Just(" "),
                Just("é"),
            ],
            0..12
        )
        .prop_map(|parts| parts.concat()),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_cursor_counts_reads(sql in sql_like()) {
        let mut parser = SqlParser::new(&sql);
        let mut reads = 0;
        while parser.read().unwrap() {
            reads += 1;
            prop_assert_eq!(parser.cursor(), reads);
        }
        prop_assert_eq!(reads, sql.chars().count());
        prop_assert!(parser.is_at_end());
    }

    #[test]
    fn prop_buffer_grows_by_one_or_resets(sql in sql_like()) {
        let mut parser = SqlParser::new(&sql);
        let mut transitions = 0;
        let mut previous_len = 0;
        while parser.read().unwrap() {
            let len = parser.buffer().chars().count();
            if parser.transitions().len() > transitions {
                transitions = parser.transitions().len();
                prop_assert_eq!(len, 0);
            } else {
                prop_assert_eq!(len, previous_len + 1);
            }
            previous_len = len;
        }
    }

    #[test]
    fn prop_spans_tile_the_input(sql in sql_like()) {
        let mut parser = SqlParser::new(&sql);
        parser.read_to_end().unwrap();
        let mut end = 0;
        for event in parser.transitions() {
            prop_assert_eq!(event.span.start, end);
            prop_assert!(!event.span.is_empty());
            end = event.span.end;
        }
        prop_assert_eq!(&sql[end..], parser.buffer());
    }

    #[test]
    fn prop_read_after_end_is_idempotent(sql in sql_like(), extra in 1usize..5) {
        let mut parser = SqlParser::new(&sql);
        parser.read_to_end().unwrap();
        let stack = parser.state_stack().clone();
        let buffer = parser.buffer().to_owned();
        let cursor = parser.cursor();
        for _ in 0..extra {
            prop_assert_eq!(parser.read(), Ok(false));
        }
        prop_assert_eq!(parser.state_stack(), &stack);
        prop_assert_eq!(parser.buffer(), buffer);
        prop_assert_eq!(parser.cursor(), cursor);
    }
}
