use super::{lex::lex, token::Token, Error};

/// One numbered source line: the raw text, its tokens, and any
/// diagnostics raised while scanning it.
#[derive(Debug)]
pub struct Line {
    number: usize,
    text: String,
    tokens: Vec<Token>,
    errors: Vec<Error>,
}

impl Line {
    /// Scan a source line. `number` is the 1-based position in the file.
    pub fn new(number: usize, text: &str) -> Line {
        let (tokens, errors) = lex(text);
        Line {
            number,
            text: text.trim_end().to_string(),
            tokens,
            errors,
        }
    }

    pub fn number(&self) -> usize {
        self.number
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty() && self.errors.is_empty()
    }

    pub fn take_errors(&mut self) -> Vec<Error> {
        std::mem::take(&mut self.errors)
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} {}", self.number, self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_keeps_text_for_diagnostics() {
        let line = Line::new(7, "bogus x 1  ");
        assert_eq!(line.number(), 7);
        assert_eq!(line.text(), "bogus x 1");
        assert_eq!(line.tokens().len(), 3);
    }
}
