use std::collections::HashMap;

thread_local!(
    static STRING_TO_WORD: HashMap<String, Word> = Word::all()
        .iter()
        .map(|w| (w.to_string(), w.clone()))
        .collect();
);

/// A classified FPL token. Classification is purely lexical; whether a
/// token makes sense where it appears is decided by the line grammar.
#[derive(Debug, PartialEq, Clone)]
pub enum Token {
    /// An opcode keyword.
    Word(Word),
    /// A variable name.
    Ident(String),
    /// An integer constant, kept as source text until decoded.
    Literal(String),
    /// A label definition with the trailing `:` stripped.
    Label(String),
    /// A drone command, delimiters included.
    Command(String),
    Unknown(String),
}

impl Token {
    pub fn classify(s: &str) -> Token {
        if let Some(word) = Word::from_string(s) {
            return Token::Word(word);
        }
        if is_label_definition(s) {
            return Token::Label(s[..s.len() - 1].to_string());
        }
        if is_drone_command(s) {
            return Token::Command(s.to_string());
        }
        if is_int_constant(s) {
            return Token::Literal(s.to_string());
        }
        if is_identifier(s) {
            return Token::Ident(s.to_string());
        }
        Token::Unknown(s.to_string())
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Token::*;
        match self {
            Word(w) => write!(f, "{}", w),
            Ident(s) => write!(f, "{}", s),
            Literal(s) => write!(f, "{}", s),
            Label(s) => write!(f, "{}:", s),
            Command(s) => write!(f, "{}", s),
            Unknown(s) => write!(f, "{}", s),
        }
    }
}

/// First character alphabetic, no trailing `:`, and not an opcode keyword.
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    !s.ends_with(':') && !is_opcode(s)
}

/// An optional leading `+` or `-` followed by one or more digits.
/// A bare sign with no digits is not a constant.
pub fn is_int_constant(s: &str) -> bool {
    let digits = match s.chars().next() {
        Some('+') | Some('-') => &s[1..],
        Some(_) => s,
        None => return false,
    };
    !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
}

/// First character alphabetic and last character `:`.
pub fn is_label_definition(s: &str) -> bool {
    match s.chars().next() {
        Some(c) if c.is_ascii_alphabetic() => s.ends_with(':'),
        _ => false,
    }
}

/// At least two characters, delimited by `<` and `>`.
pub fn is_drone_command(s: &str) -> bool {
    s.len() >= 2 && s.starts_with('<') && s.ends_with('>')
}

/// Exact match against the opcode keyword set.
pub fn is_opcode(s: &str) -> bool {
    Word::from_string(s).is_some()
}

/// Return the argument surrounded with double quotes, for diagnostics.
pub fn add_quotes(s: &str) -> String {
    format!("\"{}\"", s)
}

/// The FPL opcode keywords. Keywords are lower case and case sensitive.
#[derive(Debug, PartialEq, Clone)]
pub enum Word {
    Int,
    Add,
    Sub,
    Mul,
    Div,
    Set,
    Cmp,
    Beq,
    Bne,
    Bra,
    Cmd,
    Nop,
    End,
}

impl Word {
    fn all() -> Vec<Word> {
        use Word::*;
        vec![
            Int, Add, Sub, Mul, Div, Set, Cmp, Beq, Bne, Bra, Cmd, Nop, End,
        ]
    }

    pub fn from_string(s: &str) -> Option<Word> {
        STRING_TO_WORD.with(|stw| stw.get(s).cloned())
    }
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Word::*;
        match self {
            Int => write!(f, "int"),
            Add => write!(f, "add"),
            Sub => write!(f, "sub"),
            Mul => write!(f, "mul"),
            Div => write!(f, "div"),
            Set => write!(f, "set"),
            Cmp => write!(f, "cmp"),
            Beq => write!(f, "beq"),
            Bne => write!(f, "bne"),
            Bra => write!(f, "bra"),
            Cmd => write!(f, "cmd"),
            Nop => write!(f, "nop"),
            End => write!(f, "end"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_string() {
        assert_eq!(Word::from_string("cmd"), Some(Word::Cmd));
        assert_eq!(Word::from_string("CMD"), None);
        assert_eq!(Word::from_string("pickles"), None);
    }

    #[test]
    fn test_identifier() {
        assert!(is_identifier("x"));
        assert!(is_identifier("height2"));
        assert!(!is_identifier("2fast"));
        assert!(!is_identifier("loop:"));
        assert!(!is_identifier("add"));
        assert!(!is_identifier(""));
    }

    #[test]
    fn test_int_constant() {
        assert!(is_int_constant("0"));
        assert!(is_int_constant("+15"));
        assert!(is_int_constant("-100"));
        assert!(!is_int_constant("+"));
        assert!(!is_int_constant("-"));
        assert!(!is_int_constant("1x"));
        assert!(!is_int_constant(""));
    }

    #[test]
    fn test_label_definition() {
        assert!(is_label_definition("takeoff:"));
        assert!(!is_label_definition(":"));
        assert!(!is_label_definition("takeoff"));
        assert!(!is_label_definition("9pm:"));
    }

    #[test]
    fn test_drone_command() {
        assert!(is_drone_command("<>"));
        assert!(is_drone_command("<move 1 2 3>"));
        assert!(!is_drone_command("<land"));
        assert!(!is_drone_command(">"));
    }

    #[test]
    fn test_classify_order() {
        assert_eq!(Token::classify("int"), Token::Word(Word::Int));
        assert_eq!(
            Token::classify("int:"),
            Token::Label("int".to_string())
        );
        assert_eq!(Token::classify("-42"), Token::Literal("-42".to_string()));
        assert_eq!(Token::classify("x"), Token::Ident("x".to_string()));
        assert_eq!(
            Token::classify("<land>"),
            Token::Command("<land>".to_string())
        );
        assert_eq!(Token::classify("+"), Token::Unknown("+".to_string()));
    }
}
