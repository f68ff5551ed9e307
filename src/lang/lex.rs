use super::{token::Token, Error, MAX_LINE_TOKENS};
use crate::error;

const BLANK: char = ' ';
const TAB: char = '\t';
const COMMENT_START: char = '#';
const DRONE_START: char = '<';
const DRONE_END: char = '>';

enum ScanState {
    Whitespace,
    DroneCommand,
    OtherToken,
    Comment,
}

/// Scan one source line into at most `MAX_LINE_TOKENS` classified tokens.
///
/// The scanner is a four state machine over the characters of the line.
/// A `<` seen outside a token opens a drone command literal that runs,
/// blanks included, to the closing `>`; a `#` outside a command literal
/// discards the rest of the line. Every other run of non-blank characters
/// is a single token. A token is only complete once terminal whitespace
/// is seen, so a sentinel blank is appended before scanning.
///
/// Extra tokens past the limit and an unterminated command literal are
/// reported as diagnostics; scanning always finishes the line.
pub fn lex(s: &str) -> (Vec<Token>, Vec<Error>) {
    let mut tokens: Vec<Token> = vec![];
    let mut errors: Vec<Error> = vec![];
    let mut state = ScanState::Whitespace;
    let mut token = String::new();
    let mut num_tokens = 0;
    let mut complete_token = false;

    for c in s.chars().chain(std::iter::once(BLANK)) {
        match state {
            ScanState::Whitespace => {
                if c == BLANK || c == TAB {
                } else if c == DRONE_START {
                    token.push(DRONE_START);
                    state = ScanState::DroneCommand;
                } else if c == COMMENT_START {
                    state = ScanState::Comment;
                } else {
                    token.push(c);
                    state = ScanState::OtherToken;
                }
            }
            ScanState::DroneCommand => {
                if c == DRONE_END {
                    token.push(DRONE_END);
                    complete_token = true;
                    state = ScanState::Whitespace;
                } else {
                    token.push(c);
                }
            }
            ScanState::OtherToken => {
                if c == BLANK || c == TAB {
                    complete_token = true;
                    state = ScanState::Whitespace;
                } else if c == COMMENT_START {
                    complete_token = true;
                    state = ScanState::Comment;
                } else {
                    token.push(c);
                }
            }
            ScanState::Comment => {}
        }
        if complete_token {
            if num_tokens < MAX_LINE_TOKENS {
                tokens.push(Token::classify(&token));
            } else if num_tokens == MAX_LINE_TOKENS {
                errors.push(error!(TooManyTokens));
            }
            num_tokens += 1;
            token.clear();
            complete_token = false;
        }
    }

    if let ScanState::DroneCommand = state {
        errors.push(error!(UnterminatedCommand));
    }

    (tokens, errors)
}
