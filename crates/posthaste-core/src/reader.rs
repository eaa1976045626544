//! Single-character reader with one character of lookahead.

/// Reads SQL one character at a time.
///
/// The reader keeps two positions: `cursor` counts characters consumed so far,
/// `pos` is the byte offset of the next unread character. Nothing is skipped
/// or normalized; whitespace is returned like any other character.
#[derive(Debug, Clone)]
pub struct LookaheadReader<'a> {
    /// The input source code.
    input: &'a str,
    /// The current byte position.
    pos: usize,
    /// Number of characters consumed.
    cursor: usize,
}

impl<'a> LookaheadReader<'a> {
    /// Creates a new reader positioned at the start of `input`.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            cursor: 0,
        }
    }

    /// Returns the character at the cursor without advancing.
    #[must_use]
    pub fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    /// Returns the character after the one at the cursor without advancing.
    ///
    /// `None` is the empty symbol: the character that `peek` returns is the
    /// last one, or there is no input left at all.
    #[must_use]
    pub fn peek_next(&self) -> Option<char> {
        let mut chars = self.input[self.pos..].chars();
        chars.next();
        chars.next()
    }

    /// Consumes the character at the cursor and returns it.
    pub fn read(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        self.cursor += 1;
        Some(c)
    }

    /// Number of characters consumed so far.
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Byte offset of the next unread character.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// Returns true once every character has been consumed.
    #[must_use]
    pub const fn is_at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// The full source text.
    #[must_use]
    pub const fn source(&self) -> &'a str {
        self.input
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        let mut reader = LookaheadReader::new("");
        assert!(reader.is_at_end());
        assert_eq!(reader.peek(), None);
        assert_eq!(reader.peek_next(), None);
        assert_eq!(reader.read(), None);
        assert_eq!(reader.cursor(), 0);
    }

    #[test]
    fn test_peek_does_not_advance() {
        let reader = LookaheadReader::new("ab");
        assert_eq!(reader.peek(), Some('a'));
        assert_eq!(reader.peek_next(), Some('b'));
        assert_eq!(reader.peek(), Some('a'));
        assert_eq!(reader.cursor(), 0);
    }

    #[test]
    fn test_read_sequence() {
        let mut reader = LookaheadReader::new("a b");
        assert_eq!(reader.read(), Some('a'));
        assert_eq!(reader.read(), Some(' '));
        assert_eq!(reader.peek_next(), None);
        assert_eq!(reader.read(), Some('b'));
        assert_eq!(reader.read(), None);
        assert_eq!(reader.cursor(), 3);
        assert!(reader.is_at_end());
    }

    #[test]
    fn test_whitespace_is_not_collapsed() {
        let mut reader = LookaheadReader::new(" \t\n ");
        let read: Vec<char> = core::iter::from_fn(|| reader.read()).collect();
        assert_eq!(read, vec![' ', '\t', '\n', ' ']);
    }

    #[test]
    fn test_multibyte_cursor_counts_characters() {
        let mut reader = LookaheadReader::new("é×z");
        assert_eq!(reader.read(), Some('é'));
        assert_eq!(reader.cursor(), 1);
        assert_eq!(reader.position(), 2);
        assert_eq!(reader.peek_next(), Some('z'));
        assert_eq!(reader.read(), Some('×'));
        assert_eq!(reader.read(), Some('z'));
        assert_eq!(reader.cursor(), 3);
        assert_eq!(reader.position(), "é×z".len());
    }
}
