use super::Handle;

/// The right-hand side of an arithmetic, compare or wait instruction:
/// an embedded integer constant or a variable table handle.
#[derive(Clone, PartialEq)]
pub enum Operand {
    Literal(i32),
    Var(Handle),
}

/// ## Decoded FPL instructions
///
/// One variant per opcode, carrying exactly the operand fields that
/// opcode uses. Branch variants hold a label table handle, not an
/// address; the target is read through the label table at execution
/// time so that forward references cost nothing extra.

#[derive(Clone, PartialEq)]
pub enum Op {
    /// Set a variable to its initial constant.
    Int(Handle, i32),
    Add(Handle, Operand),
    Sub(Handle, Operand),
    Mul(Handle, Operand),
    /// Division by zero stops the machine.
    Div(Handle, Operand),
    Set(Handle, Operand),
    /// Sets the compare flag; branches consume it.
    Cmp(Handle, Operand),
    Beq(Handle),
    Bne(Handle),
    Bra(Handle),
    /// Submit a drone command after `%name` substitution.
    Cmd(Handle),
    /// Suspend until an absolute number of seconds since program start.
    Nop(Operand),
    End,
}

impl Op {
    /// The source keyword this instruction was decoded from.
    pub fn keyword(&self) -> &'static str {
        use Op::*;
        match self {
            Int(..) => "int",
            Add(..) => "add",
            Sub(..) => "sub",
            Mul(..) => "mul",
            Div(..) => "div",
            Set(..) => "set",
            Cmp(..) => "cmp",
            Beq(..) => "beq",
            Bne(..) => "bne",
            Bra(..) => "bra",
            Cmd(..) => "cmd",
            Nop(..) => "nop",
            End => "end",
        }
    }
}

impl std::fmt::Debug for Operand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)
    }
}

impl std::fmt::Display for Operand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Operand::Literal(value) => write!(f, "{}", value),
            Operand::Var(handle) => write!(f, "[{}]", handle),
        }
    }
}

impl std::fmt::Debug for Op {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)
    }
}

impl std::fmt::Display for Op {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Op::*;
        match self {
            Int(var, value) => write!(f, "INT([{}], {})", var, value),
            Add(var, rhs) => write!(f, "ADD([{}], {})", var, rhs),
            Sub(var, rhs) => write!(f, "SUB([{}], {})", var, rhs),
            Mul(var, rhs) => write!(f, "MUL([{}], {})", var, rhs),
            Div(var, rhs) => write!(f, "DIV([{}], {})", var, rhs),
            Set(var, rhs) => write!(f, "SET([{}], {})", var, rhs),
            Cmp(var, rhs) => write!(f, "CMP([{}], {})", var, rhs),
            Beq(label) => write!(f, "BEQ([{}])", label),
            Bne(label) => write!(f, "BNE([{}])", label),
            Bra(label) => write!(f, "BRA([{}])", label),
            Cmd(command) => write!(f, "CMD([{}])", command),
            Nop(rhs) => write!(f, "NOP({})", rhs),
            End => write!(f, "END"),
        }
    }
}
