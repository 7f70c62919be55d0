//! Character buffer for the token currently being read.

#[derive(Debug, Default)]
pub struct Buffer {
    text: String,
}

impl Buffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, c: char) {
        self.text.push(c);
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Empty, or holding nothing but whitespace.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    pub fn ends_with_space(&self) -> bool {
        self.text.ends_with(' ')
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// Take an unquoted token. Surrounding whitespace is dropped and an
    /// all-blank buffer yields nothing.
    pub fn take_bareword(&mut self) -> Option<String> {
        let word = self.text.trim();
        let word = (!word.is_empty()).then(|| word.to_string());
        self.text.clear();
        word
    }

    /// Take the contents of a quoted literal exactly as read, even if empty.
    pub fn take_literal(&mut self) -> String {
        std::mem::take(&mut self.text)
    }
}
