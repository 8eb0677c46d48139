//! The fixed set of content types responses are produced with.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentType {
    TextPlain,
    ApplicationJson,
}

impl ContentType {
    /// Header value for this content type.
    pub fn text(&self) -> &'static str {
        match self {
            ContentType::TextPlain => "text/plain; charset=UTF-8",
            ContentType::ApplicationJson => "application/json; charset=UTF-8",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}
