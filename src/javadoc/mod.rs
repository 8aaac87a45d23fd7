//! Doc comment tokenizer and event parser.

pub mod parser;
pub mod scanner;

pub use parser::{CommentHandler, CommentParser};
pub use scanner::{Scanner, Token, TokenKind};

/// An owned parser event, as recorded by [`parse_events`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommentEvent {
    Text(String),
    Enter(usize),
    CommentText(String),
    Tag {
        line: usize,
        name: String,
        arg: String,
    },
    Exit,
}

impl CommentHandler for Vec<CommentEvent> {
    fn on_tag(&mut self, line: usize, name: &str, arg: &str) {
        self.push(CommentEvent::Tag {
            line,
            name: name.to_string(),
            arg: arg.to_string(),
        });
    }

    fn on_text(&mut self, text: &str) {
        self.push(CommentEvent::Text(text.to_string()));
    }

    fn on_comment_enter(&mut self, line: usize) {
        self.push(CommentEvent::Enter(line));
    }

    fn on_comment_text(&mut self, text: &str) {
        self.push(CommentEvent::CommentText(text.to_string()));
    }

    fn on_comment_exit(&mut self) {
        self.push(CommentEvent::Exit);
    }
}

/// Parse `source` and collect every event in order.
pub fn parse_events(source: &str) -> Vec<CommentEvent> {
    let mut events = Vec::new();
    CommentParser::new(source).parse(&mut events);
    events
}
