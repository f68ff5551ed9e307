use fpl::lang::token::{Token, Word};
use fpl::lang::lex;

#[test]
fn test_instruction_line() {
    let (tokens, errors) = lex("  set height 50  # cruise altitude");
    assert!(errors.is_empty());
    let mut t = tokens.iter();
    assert_eq!(t.next(), Some(&Token::Word(Word::Set)));
    assert_eq!(t.next(), Some(&Token::Ident("height".to_string())));
    assert_eq!(t.next(), Some(&Token::Literal("50".to_string())));
    assert_eq!(t.next(), None);
}

#[test]
fn test_label_line() {
    let (tokens, errors) = lex("circle:");
    assert!(errors.is_empty());
    assert_eq!(tokens, vec![Token::Label("circle".to_string())]);
}

#[test]
fn test_command_with_placeholders() {
    let (tokens, errors) = lex("cmd <move %x %y %z>");
    assert!(errors.is_empty());
    assert_eq!(
        tokens,
        vec![
            Token::Word(Word::Cmd),
            Token::Command("<move %x %y %z>".to_string()),
        ]
    );
}

#[test]
fn test_signed_constants() {
    let (tokens, _) = lex("set dx -15");
    assert_eq!(tokens[2], Token::Literal("-15".to_string()));
    let (tokens, _) = lex("set dx +15");
    assert_eq!(tokens[2], Token::Literal("+15".to_string()));
    // a bare sign is not a constant
    let (tokens, _) = lex("set dx -");
    assert_eq!(tokens[2], Token::Unknown("-".to_string()));
}

#[test]
fn test_opcode_keywords_are_case_sensitive() {
    let (tokens, _) = lex("END");
    assert_eq!(tokens, vec![Token::Ident("END".to_string())]);
}

#[test]
fn test_fourth_token_is_diagnosed_once() {
    let (tokens, errors) = lex("add x 1 2 3 4");
    assert_eq!(tokens.len(), 3);
    assert_eq!(errors.len(), 1);
}
