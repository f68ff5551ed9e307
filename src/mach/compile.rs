use super::op::{Op, Operand};
use super::{Defined, Program, INVALID};
use crate::error;
use crate::lang::token::{self, Token, Word};
use crate::lang::{Line, LineNumber};

/// Compile one source line into `program`.
///
/// A line holds at most one label definition or one instruction. Label
/// definitions resolve (or create) an entry pointing at the next
/// instruction index. Instructions are decoded per the opcode's operand
/// shape and appended to the instruction store; a mismatch produces a
/// diagnostic naming the line and the instruction is not added.
pub fn compile(program: &mut Program, mut line: Line) {
    let number = Some(line.number());
    let quoted = token::add_quotes(line.text());

    for error in line.take_errors() {
        program.error(error.in_line_number(number).message(quoted.clone()));
    }

    let tokens = line.tokens();
    if tokens.is_empty() {
        return;
    }

    match &tokens[0] {
        Token::Label(name) => {
            if tokens.len() > 1 {
                program.error(error!(InvalidLabel, number; quoted));
                return;
            }
            let target = program.len();
            match program.labels_mut().define(name, target) {
                Ok(Defined::New(_)) | Ok(Defined::Resolved(_)) => {}
                Ok(Defined::Duplicate(_)) => program.warning(error!(DuplicateLabel, number;
                    format!("{} - FIRST OCCURRENCE USED", token::add_quotes(name)))),
                Err(error) => program.error(error.in_line_number(number)),
            }
        }
        Token::Word(word) => match decode(program, number, word, &tokens[1..]) {
            Some(op) => {
                if let Err(error) = program.push(op) {
                    program.error(error.in_line_number(number));
                }
            }
            None => program.error(error!(InvalidOperand, number; quoted)),
        },
        _ => program.error(error!(UnknownOpcode, number; quoted)),
    }
}

/// Decode an opcode and its operand tokens, or `None` on any arity or
/// type mismatch. Symbols that cannot be entered in a full table are
/// recorded as `INVALID` handles; the instruction is still produced so
/// the pre-flight validation pass can point at it.
fn decode(program: &mut Program, number: LineNumber, word: &Word, operands: &[Token]) -> Option<Op> {
    use Word::*;
    match word {
        Int => match operands {
            [Token::Ident(name), Token::Literal(value)] => {
                let value = value.parse::<i32>().ok()?;
                let var = match program.vars_mut().define(name, value) {
                    Ok(handle) => handle,
                    Err(error) => {
                        program.error(error.in_line_number(number));
                        INVALID
                    }
                };
                Some(Op::Int(var, value))
            }
            _ => None,
        },
        Add | Sub | Mul | Div | Set | Cmp => match operands {
            [Token::Ident(name), rhs] => {
                let var = program.vars().lookup(name).unwrap_or(INVALID);
                let rhs = operand(program, rhs)?;
                Some(match word {
                    Add => Op::Add(var, rhs),
                    Sub => Op::Sub(var, rhs),
                    Mul => Op::Mul(var, rhs),
                    Div => Op::Div(var, rhs),
                    Set => Op::Set(var, rhs),
                    _ => Op::Cmp(var, rhs),
                })
            }
            _ => None,
        },
        Beq | Bne | Bra => match operands {
            [Token::Ident(name)] => {
                let label = match program.labels_mut().reference(name) {
                    Ok(handle) => handle,
                    Err(error) => {
                        program.error(error.in_line_number(number));
                        INVALID
                    }
                };
                Some(match word {
                    Beq => Op::Beq(label),
                    Bne => Op::Bne(label),
                    _ => Op::Bra(label),
                })
            }
            _ => None,
        },
        Cmd => match operands {
            [Token::Command(text)] => {
                let command = match program.commands_mut().add(text) {
                    Ok(handle) => handle,
                    Err(error) => {
                        program.error(error.in_line_number(number));
                        INVALID
                    }
                };
                Some(Op::Cmd(command))
            }
            _ => None,
        },
        Nop => match operands {
            [rhs] => Some(Op::Nop(operand(program, rhs)?)),
            _ => None,
        },
        End => match operands {
            [] => Some(Op::End),
            _ => None,
        },
    }
}

fn operand(program: &Program, token: &Token) -> Option<Operand> {
    match token {
        Token::Literal(value) => Some(Operand::Literal(value.parse::<i32>().ok()?)),
        Token::Ident(name) => Some(Operand::Var(
            program.vars().lookup(name).unwrap_or(INVALID),
        )),
        _ => None,
    }
}
