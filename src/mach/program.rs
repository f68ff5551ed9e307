use super::compile::compile;
use super::op::{Op, Operand};
use super::{Address, Commands, Labels, Vars, MAX_INSTRUCTIONS};
use crate::error;
use crate::lang::{Error, Line};

type Result<T> = std::result::Result<T, Error>;

/// ## Parsed FPL program
///
/// The instruction store plus the three symbol tables it indexes into,
/// and every diagnostic raised while building them. Errors block
/// execution; warnings do not.

pub struct Program {
    ops: Vec<Op>,
    vars: Vars,
    labels: Labels,
    commands: Commands,
    errors: Vec<Error>,
    warnings: Vec<Error>,
}

impl Program {
    pub fn new() -> Program {
        Program {
            ops: vec![],
            vars: Vars::new(),
            labels: Labels::new(),
            commands: Commands::new(),
            errors: vec![],
            warnings: vec![],
        }
    }

    /// Compile source lines into the instruction store and tables.
    /// Parsing always consumes the whole input; diagnostics accumulate.
    pub fn compile<I: IntoIterator<Item = Line>>(&mut self, lines: I) {
        for line in lines {
            compile(self, line);
        }
    }

    pub(crate) fn push(&mut self, op: Op) -> Result<()> {
        if self.ops.len() >= MAX_INSTRUCTIONS {
            return Err(error!(TableOverflow; "TOO MANY INSTRUCTIONS"));
        }
        self.ops.push(op);
        Ok(())
    }

    pub fn op(&self, address: Address) -> Result<&Op> {
        match self.ops.get(address) {
            Some(op) => Ok(op),
            None => Err(error!(ProgramCounterRange)),
        }
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn vars(&self) -> &Vars {
        &self.vars
    }

    pub fn vars_mut(&mut self) -> &mut Vars {
        &mut self.vars
    }

    pub fn labels(&self) -> &Labels {
        &self.labels
    }

    pub fn labels_mut(&mut self) -> &mut Labels {
        &mut self.labels
    }

    pub fn commands(&self) -> &Commands {
        &self.commands
    }

    pub fn commands_mut(&mut self) -> &mut Commands {
        &mut self.commands
    }

    pub fn error(&mut self, error: Error) {
        self.errors.push(error);
    }

    pub fn warning(&mut self, warning: Error) {
        self.warnings.push(warning);
    }

    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    pub fn warnings(&self) -> &[Error] {
        &self.warnings
    }

    /// Whether the whole source parsed without a blocking error.
    pub fn parse_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// Pre-flight check: re-resolve every instruction's operand handles
    /// against the tables as parsed. Returns advisory warnings only;
    /// execution is allowed to proceed regardless and will stop on the
    /// first bad handle it actually reaches.
    pub fn validate(&self) -> Vec<Error> {
        use Op::*;
        let mut warnings: Vec<Error> = vec![];
        for (index, op) in self.ops.iter().enumerate() {
            let bad = match op {
                Int(var, _) => !self.vars.is_valid(*var),
                Add(var, rhs) | Sub(var, rhs) | Mul(var, rhs) | Div(var, rhs)
                | Set(var, rhs) | Cmp(var, rhs) => {
                    !self.vars.is_valid(*var) || !self.operand_ok(rhs)
                }
                Nop(rhs) => !self.operand_ok(rhs),
                Beq(_) | Bne(_) | Bra(_) | Cmd(_) | End => false,
            };
            if bad {
                warnings.push(error!(UndefinedVariable; Program::at(op, index)));
                continue;
            }
            match op {
                Beq(label) | Bne(label) | Bra(label) => {
                    let resolved = match self.labels.target(*label) {
                        Ok(Some(target)) => target < self.ops.len(),
                        _ => false,
                    };
                    if !resolved {
                        warnings.push(error!(UndefinedLabel; Program::at(op, index)));
                    }
                }
                Cmd(command) => {
                    if !self.commands.is_valid(*command) {
                        warnings.push(error!(UndefinedCommand; Program::at(op, index)));
                    }
                }
                _ => {}
            }
        }
        warnings
    }

    fn operand_ok(&self, operand: &Operand) -> bool {
        match operand {
            Operand::Literal(_) => true,
            Operand::Var(handle) => self.vars.is_valid(*handle),
        }
    }

    fn at(op: &Op, index: usize) -> String {
        format!(
            "IN {} INSTRUCTION AT LOCATION {} - PROGRAM EXECUTION MAY FAIL",
            op.keyword(),
            index
        )
    }
}

impl Default for Program {
    fn default() -> Program {
        Program::new()
    }
}
