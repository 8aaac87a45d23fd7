/// Kind of a scanned token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// A maximal run of whitespace, newlines included.
    Whitespace,
    /// A `"`-delimited literal, possibly spanning lines.
    Quoted,
    /// A run of non-whitespace characters other than `{`, `}` and `@`.
    Word,
    /// A single `{`, `}` or `@`.
    Marker,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
}

impl<'a> Token<'a> {
    pub fn is_whitespace(&self) -> bool {
        self.kind == TokenKind::Whitespace
    }

    pub fn contains_newline(&self) -> bool {
        self.text.contains('\n')
    }

    pub fn is_marker(&self, marker: char) -> bool {
        self.kind == TokenKind::Marker && self.text.starts_with(marker)
    }
}

fn is_marker_char(ch: char) -> bool {
    matches!(ch, '{' | '}' | '@')
}

/// Splits comment text into tokens while counting lines.
///
/// Tokens borrow from the input; concatenating every token yields the input
/// unchanged.
pub struct Scanner<'a> {
    input: &'a str,
    pos: usize,
    line: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            line: 0,
        }
    }

    /// Number of newlines consumed so far.
    pub fn line(&self) -> usize {
        self.line
    }

    pub fn next_token(&mut self) -> Option<Token<'a>> {
        let rest = &self.input[self.pos..];
        let first = rest.chars().next()?;

        let (kind, len) = if first.is_whitespace() {
            let len = rest
                .char_indices()
                .find(|(_, c)| !c.is_whitespace())
                .map_or(rest.len(), |(i, _)| i);
            (TokenKind::Whitespace, len)
        } else if first == '"' {
            let len = rest[1..].find('"').map_or(rest.len(), |i| i + 2);
            (TokenKind::Quoted, len)
        } else if is_marker_char(first) {
            (TokenKind::Marker, first.len_utf8())
        } else {
            let len = rest
                .char_indices()
                .find(|(_, c)| c.is_whitespace() || is_marker_char(*c))
                .map_or(rest.len(), |(i, _)| i);
            (TokenKind::Word, len)
        };

        let text = &rest[..len];
        self.line += text.matches('\n').count();
        self.pos += len;
        Some(Token { kind, text })
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}
