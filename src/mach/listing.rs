use super::op::{Op, Operand};
use super::Program;
use crate::lang::token::add_quotes;

/// ## Table listings
///
/// Console renderings of the parse tables and the reconstructed program.
/// The instruction listing rebuilds FPL source from the tables rather
/// than dumping raw handles, so it reads like the file that was parsed,
/// white space aside.

pub fn variables(program: &Program) -> String {
    let vars = program.vars();
    if vars.is_empty() {
        return "\nThe integer variable table is empty\n".to_string();
    }
    let mut out = String::from("\nInteger variable table: [index | name | value]\n\n");
    for (index, (name, value)) in vars.iter().enumerate() {
        out.push_str(&format!(
            "{:>8}    {:<24}{:>8}\n",
            index,
            add_quotes(name),
            value
        ));
    }
    out
}

pub fn labels(program: &Program) -> String {
    let labels = program.labels();
    if labels.is_empty() {
        return "\nThe label table is empty\n".to_string();
    }
    let mut out = String::from("\nLabel table: [index | label name | label value]\n\n");
    for (index, (name, target)) in labels.iter().enumerate() {
        let target = match target {
            Some(target) => format!("{}", target),
            None => "undefined".to_string(),
        };
        out.push_str(&format!(
            "{:>8}    {:<24}{:>9}\n",
            index,
            add_quotes(name),
            target
        ));
    }
    out
}

pub fn commands(program: &Program) -> String {
    let commands = program.commands();
    if commands.is_empty() {
        return "\nThe drone command table is empty\n".to_string();
    }
    let mut out = String::from("\nDrone command table: [index | command]\n\n");
    for (index, text) in commands.iter().enumerate() {
        out.push_str(&format!("{:>8}    {:<24}\n", index, add_quotes(text)));
    }
    out
}

/// Reconstruct the whole program. Any label defined at an instruction
/// index appears on its own line above that instruction; instructions
/// whose operands no longer resolve are shown as a placeholder (the
/// pre-flight validation pass reports the details).
pub fn instructions(program: &Program) -> String {
    if program.is_empty() {
        return "\nThe instruction table is empty\n".to_string();
    }
    let mut out = String::from("\nReconstructed instruction table:\n\n");
    for index in 0..program.len() {
        for name in program.labels().names_for_target(index) {
            out.push_str(name);
            out.push_str(":\n");
        }
        match instruction_line(program, index) {
            Some(line) => out.push_str(&format!("            {}\n", line)),
            None => out.push_str("            ????\n"),
        }
    }
    out
}

/// Rebuild the source text of one instruction, or `None` if an operand
/// handle does not resolve.
pub fn instruction_line(program: &Program, index: usize) -> Option<String> {
    let op = program.op(index).ok()?;
    use Op::*;
    Some(match op {
        Int(var, value) => format!("int {} {}", program.vars().name(*var).ok()?, value),
        Add(var, rhs) | Sub(var, rhs) | Mul(var, rhs) | Div(var, rhs) | Set(var, rhs)
        | Cmp(var, rhs) => format!(
            "{} {} {}",
            op.keyword(),
            program.vars().name(*var).ok()?,
            operand_text(program, rhs)?
        ),
        Beq(label) | Bne(label) | Bra(label) => {
            format!("{} {}", op.keyword(), program.labels().name(*label).ok()?)
        }
        Cmd(command) => format!("cmd {}", program.commands().text(*command).ok()?),
        Nop(rhs) => format!("nop {}", operand_text(program, rhs)?),
        End => "end".to_string(),
    })
}

fn operand_text(program: &Program, operand: &Operand) -> Option<String> {
    match operand {
        Operand::Literal(value) => Some(format!("{}", value)),
        Operand::Var(handle) => Some(program.vars().name(*handle).ok()?.to_string()),
    }
}
