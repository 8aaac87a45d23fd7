use super::scanner::{Scanner, Token};

const COMMENT_OPEN: &str = "/**";
const COMMENT_CLOSE: &str = "*/";

/// Receives structural events from a [`CommentParser`].
///
/// Lines are counted from the start of the parsed text, so a comment passed
/// on its own starts at line 0.
pub trait CommentHandler {
    /// A section tag (`@name arg`) or inline tag (`{@name arg}`).
    fn on_tag(&mut self, line: usize, name: &str, arg: &str);

    /// Text outside of any doc comment.
    fn on_text(&mut self, _text: &str) {}

    fn on_comment_enter(&mut self, line: usize);

    /// Comment text between structural events, markup included.
    fn on_comment_text(&mut self, text: &str);

    fn on_comment_exit(&mut self);
}

/// Event-driven doc comment parser.
pub struct CommentParser<'a> {
    scanner: Scanner<'a>,
    lookahead: Option<Token<'a>>,
    text: String,
}

impl<'a> CommentParser<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            scanner: Scanner::new(source),
            lookahead: None,
            text: String::new(),
        }
    }

    /// Parse the whole input, reporting events to `handler`.
    pub fn parse<H: CommentHandler + ?Sized>(mut self, handler: &mut H) {
        while let Some(token) = self.next_token() {
            if token.text.starts_with(COMMENT_OPEN) && token.text != "/**/" {
                self.flush(handler, false);
                self.text.push_str(token.text);
                if token.text.len() > COMMENT_OPEN.len() + 1 && token.text.ends_with(COMMENT_CLOSE)
                {
                    // `/**text*/` without any whitespace
                    handler.on_comment_enter(self.scanner.line());
                    self.flush(handler, true);
                    handler.on_comment_exit();
                } else {
                    self.parse_comment(handler);
                }
            } else {
                self.text.push_str(token.text);
            }
        }
        self.flush(handler, false);
    }

    fn next_token(&mut self) -> Option<Token<'a>> {
        self.lookahead.take().or_else(|| self.scanner.next_token())
    }

    fn push_back(&mut self, token: Token<'a>) {
        self.lookahead = Some(token);
    }

    /// Returns true when the token after a `{` is `@`. Any other token is
    /// pushed back to be processed normally.
    fn opens_inline_tag(&mut self) -> bool {
        match self.next_token() {
            Some(next) if next.is_marker('@') => true,
            Some(next) => {
                self.push_back(next);
                false
            }
            None => false,
        }
    }

    fn parse_comment<H: CommentHandler + ?Sized>(&mut self, handler: &mut H) {
        handler.on_comment_enter(self.scanner.line());

        while let Some(token) = self.next_token() {
            if token.text.ends_with(COMMENT_CLOSE) {
                self.text.push_str(token.text);
                break;
            } else if token.is_marker('@') {
                self.flush(handler, true);
                if !self.parse_section_tag(handler) {
                    break;
                }
            } else if token.is_marker('{') {
                if self.opens_inline_tag() {
                    self.flush(handler, true);
                    self.parse_inline_tag(handler);
                } else {
                    self.text.push_str(token.text);
                }
            } else {
                self.text.push_str(token.text);
            }
        }

        self.flush(handler, true);
        handler.on_comment_exit();
    }

    /// Parses `@name argument...` up to the end of the line. Returns false if
    /// the comment ended while scanning the tag.
    fn parse_section_tag<H: CommentHandler + ?Sized>(&mut self, handler: &mut H) -> bool {
        let line = self.scanner.line();
        let mut name: Option<&'a str> = None;
        let mut arg = String::new();
        let mut open = true;

        loop {
            let Some(token) = self.next_token() else {
                open = false;
                break;
            };

            let whitespace = token.is_whitespace();
            if name.is_none() && !whitespace {
                name = Some(token.text);
            } else if token.contains_newline() {
                if whitespace {
                    self.text.push_str(token.text);
                } else {
                    arg.push_str(token.text);
                }
                break;
            } else if token.text.ends_with(COMMENT_CLOSE) {
                self.text.push_str(token.text);
                open = false;
                break;
            } else if token.is_marker('{') {
                if self.opens_inline_tag() {
                    self.flush(handler, true);
                    self.parse_inline_tag(handler);
                } else {
                    arg.push_str(token.text);
                }
            } else if !arg.is_empty() || !whitespace {
                arg.push_str(token.text);
            }
        }

        handler.on_tag(line, name.unwrap_or_default(), &arg);
        open
    }

    /// Parses `name argument...}` after a `{@` opener. Continuation `*`
    /// tokens are skipped and braces nest.
    fn parse_inline_tag<H: CommentHandler + ?Sized>(&mut self, handler: &mut H) {
        let line = self.scanner.line();
        let mut name: Option<&'a str> = None;
        let mut arg = String::new();
        let mut depth = 0usize;

        while let Some(token) = self.next_token() {
            if token.text == "*" {
                continue;
            }
            if token.text.ends_with(COMMENT_CLOSE) {
                // unterminated inline tag, let the comment close normally
                self.push_back(token);
                break;
            }

            let whitespace = token.is_whitespace();
            if name.is_none() && !whitespace {
                name = Some(token.text);
            } else if token.is_marker('}') && depth == 0 {
                break;
            } else {
                if token.is_marker('{') {
                    depth += 1;
                } else if token.is_marker('}') {
                    depth -= 1;
                }
                if !arg.is_empty() || !whitespace {
                    arg.push_str(token.text);
                }
            }
        }

        handler.on_tag(line, name.unwrap_or_default(), &arg);
    }

    fn flush<H: CommentHandler + ?Sized>(&mut self, handler: &mut H, in_comment: bool) {
        if self.text.is_empty() {
            return;
        }
        if in_comment {
            handler.on_comment_text(&self.text);
        } else {
            handler.on_text(&self.text);
        }
        self.text.clear();
    }
}
