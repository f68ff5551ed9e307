use super::op::{Op, Operand};
use super::{Address, Handle, Program, Vars};
use crate::drone::{tello, DroneSimulator, Tello};
use crate::error;
use crate::lang::Error;
use std::collections::VecDeque;
use std::time::{Duration, Instant};

type Result<T> = std::result::Result<T, Error>;

/// Which sink(s) receive drone command text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DroneMode {
    None,
    Simulator,
    Tello,
    Both,
}

/// How much of the executing program is echoed back.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TraceMode {
    Off,
    CmdNop,
    All,
}

/// What the driver loop sees from one `execute` slice.
#[derive(Debug)]
pub enum Event {
    Running,
    Stopped,
    Print(String),
    Errors(Vec<Error>),
}

/// ## FPL virtual machine
///
/// Walks the instruction store one opcode at a time. Branches overwrite
/// the program counter; everything else advances it by one. The machine
/// stops on `end` or on the first execution error, and whatever variable
/// state was reached stays as it is.
///
/// The machine never touches the console. Trace lines and drone link
/// diagnostics come out as `Event::Print` payloads; the caller decides
/// what to do with them. The only blocking point is `nop`, which
/// suspends the calling thread until its absolute deadline.

pub struct Runtime {
    program: Program,
    drone_mode: DroneMode,
    trace_mode: TraceMode,
    pc: Address,
    compare_equal: bool,
    started: Instant,
    running: bool,
    simulator: Option<DroneSimulator>,
    tello: Option<Tello>,
    output: VecDeque<String>,
}

impl Runtime {
    pub fn new(program: Program, drone_mode: DroneMode, trace_mode: TraceMode) -> Runtime {
        let mut output = VecDeque::new();
        match trace_mode {
            TraceMode::All => {
                output.push_back("Program execution: [program counter | operation]".to_string())
            }
            TraceMode::CmdNop => {
                output.push_back("Program execution: [CMD and NOP operations]".to_string())
            }
            TraceMode::Off => {}
        }
        Runtime {
            program,
            drone_mode,
            trace_mode,
            pc: 0,
            compare_equal: false,
            started: Instant::now(),
            running: true,
            simulator: None,
            tello: None,
            output,
        }
    }

    /// Run up to `cycles` instructions. Returns early with the next
    /// pending output line, accumulated errors, or `Stopped`; returns
    /// `Running` when the budget is spent, so the caller can poll for
    /// interruption and call again.
    pub fn execute(&mut self, cycles: usize) -> Event {
        if let Some(line) = self.output.pop_front() {
            return Event::Print(line);
        }
        if !self.running {
            return Event::Stopped;
        }
        if self.program.is_empty() {
            self.running = false;
            return Event::Errors(vec![
                error!(EmptyProgram; "PROGRAM EXECUTION CANNOT PROCEED"),
            ]);
        }
        for _ in 0..cycles {
            if let Err(error) = self.step() {
                self.running = false;
                return Event::Errors(vec![error]);
            }
            if let Some(line) = self.output.pop_front() {
                return Event::Print(line);
            }
            if !self.running {
                return Event::Stopped;
            }
        }
        Event::Running
    }

    /// Stop before the next instruction. The `nop` wait itself is not
    /// interruptible.
    pub fn interrupt(&mut self) {
        if self.running {
            self.running = false;
            self.output.push_back("Program interrupted".to_string());
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn pc(&self) -> Address {
        self.pc
    }

    pub fn compare_equal(&self) -> bool {
        self.compare_equal
    }

    pub fn vars(&self) -> &Vars {
        self.program.vars()
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    fn step(&mut self) -> Result<()> {
        let op = match self.program.op(self.pc) {
            Ok(op) => op.clone(),
            Err(error) => return Err(at(self.pc, error)),
        };
        use Op::*;
        match op {
            Int(var, value) => {
                let name = self.var_name(var)?;
                self.trace_all(format!("{} = {}", name, value));
                self.set(var, value)?;
                self.pc += 1;
            }
            Add(var, rhs) => self.binary(var, &rhs, '+', i32::wrapping_add)?,
            Sub(var, rhs) => self.binary(var, &rhs, '-', i32::wrapping_sub)?,
            Mul(var, rhs) => self.binary(var, &rhs, '*', i32::wrapping_mul)?,
            Div(var, rhs) => {
                let rhs_value = self.resolve(&rhs)?;
                if rhs_value == 0 {
                    return Err(error!(DivisionByZero;
                        format!("AT LOCATION {} - PROGRAM TERMINATED", self.pc)));
                }
                let lhs_value = self.value(var)?;
                let new_value = lhs_value.wrapping_div(rhs_value);
                let name = self.var_name(var)?;
                self.trace_all(format!(
                    "{} = {} / {} = {}",
                    name, lhs_value, rhs_value, new_value
                ));
                self.set(var, new_value)?;
                self.pc += 1;
            }
            Set(var, rhs) => {
                let new_value = self.resolve(&rhs)?;
                let name = self.var_name(var)?;
                self.trace_all(format!("{} = {}", name, new_value));
                self.set(var, new_value)?;
                self.pc += 1;
            }
            Cmp(var, rhs) => {
                let lhs_value = self.value(var)?;
                let rhs_value = self.resolve(&rhs)?;
                self.trace_all(format!("{} == {} ?", lhs_value, rhs_value));
                self.compare_equal = lhs_value == rhs_value;
                self.pc += 1;
            }
            Beq(label) => {
                if self.compare_equal {
                    let name = self.label_name(label)?;
                    self.trace_all(format!("BEQ taken to label {}", name));
                    self.pc = self.label_target(label)?;
                } else {
                    self.trace_all("BEQ skipped".to_string());
                    self.pc += 1;
                }
            }
            Bne(label) => {
                if self.compare_equal {
                    self.trace_all("BNE skipped".to_string());
                    self.pc += 1;
                } else {
                    let name = self.label_name(label)?;
                    self.trace_all(format!("BNE taken to label {}", name));
                    self.pc = self.label_target(label)?;
                }
            }
            Bra(label) => {
                let name = self.label_name(label)?;
                self.trace_all(format!("BRA to label {}", name));
                self.pc = self.label_target(label)?;
            }
            Cmd(command) => {
                let text = match self.program.commands().text(command) {
                    Ok(text) => text.to_string(),
                    Err(error) => return Err(at(self.pc, error)),
                };
                let modified = insert_variable_values(&text, self.program.vars());
                let mut line = format!("CMD {}", text);
                if modified != text {
                    line.push_str(&format!(" becomes CMD {}", modified));
                }
                self.trace_cmd_nop(line);
                match self.drone_mode {
                    DroneMode::None => {}
                    DroneMode::Simulator => self.simulator_command(&modified),
                    DroneMode::Tello => self.tello_command(&modified),
                    DroneMode::Both => {
                        self.simulator_command(&modified);
                        self.tello_command(&modified);
                    }
                }
                self.pc += 1;
            }
            Nop(rhs) => {
                let wait_until = self.resolve(&rhs)?;
                self.trace_cmd_nop(format!(
                    "Wait until {} seconds since initialization",
                    wait_until
                ));
                if wait_until > 0 {
                    let deadline = Duration::from_secs(wait_until as u64);
                    let elapsed = self.started.elapsed();
                    if deadline > elapsed {
                        std::thread::sleep(deadline - elapsed);
                    }
                }
                self.pc += 1;
            }
            End => {
                self.trace_all("END".to_string());
                self.running = false;
            }
        }
        Ok(())
    }

    fn binary(
        &mut self,
        var: Handle,
        rhs: &Operand,
        symbol: char,
        apply: fn(i32, i32) -> i32,
    ) -> Result<()> {
        let lhs_value = self.value(var)?;
        let rhs_value = self.resolve(rhs)?;
        let new_value = apply(lhs_value, rhs_value);
        let name = self.var_name(var)?;
        self.trace_all(format!(
            "{} = {} {} {} = {}",
            name, lhs_value, symbol, rhs_value, new_value
        ));
        self.set(var, new_value)?;
        self.pc += 1;
        Ok(())
    }

    fn resolve(&self, operand: &Operand) -> Result<i32> {
        match operand {
            Operand::Literal(value) => Ok(*value),
            Operand::Var(handle) => match self.program.vars().value(*handle) {
                Ok(value) => Ok(value),
                Err(error) => Err(at(self.pc, error)),
            },
        }
    }

    fn value(&self, var: Handle) -> Result<i32> {
        match self.program.vars().value(var) {
            Ok(value) => Ok(value),
            Err(error) => Err(at(self.pc, error)),
        }
    }

    fn set(&mut self, var: Handle, value: i32) -> Result<()> {
        let pc = self.pc;
        self.program
            .vars_mut()
            .set_value(var, value)
            .map_err(|error| at(pc, error))
    }

    fn var_name(&self, var: Handle) -> Result<String> {
        match self.program.vars().name(var) {
            Ok(name) => Ok(name.to_string()),
            Err(error) => Err(at(self.pc, error)),
        }
    }

    fn label_name(&self, label: Handle) -> Result<String> {
        match self.program.labels().name(label) {
            Ok(name) => Ok(name.to_string()),
            Err(error) => Err(at(self.pc, error)),
        }
    }

    fn label_target(&self, label: Handle) -> Result<Address> {
        match self.program.labels().target(label) {
            Ok(Some(target)) => Ok(target),
            Ok(None) => Err(error!(UndefinedLabel;
                format!("AT LOCATION {} - PROGRAM TERMINATED", self.pc))),
            Err(error) => Err(at(self.pc, error)),
        }
    }

    fn trace_all(&mut self, detail: String) {
        if let TraceMode::All = self.trace_mode {
            let line = format!("{:>8}    {}", self.pc, detail);
            self.output.push_back(line);
        }
    }

    fn trace_cmd_nop(&mut self, detail: String) {
        match self.trace_mode {
            TraceMode::All => {
                let line = format!("{:>8}    {}", self.pc, detail);
                self.output.push_back(line);
            }
            TraceMode::CmdNop => self.output.push_back(detail),
            TraceMode::Off => {}
        }
    }

    fn simulator_command(&mut self, command: &str) {
        if command == "<initialize>" {
            if self.simulator.is_none() {
                self.simulator = Some(DroneSimulator::new());
            } else {
                self.output
                    .push_back("The drone simulator is already initialized".to_string());
            }
        } else if let Some(simulator) = &self.simulator {
            if command.len() > 2 && command.starts_with('<') && command.ends_with('>') {
                simulator.submit(&command[1..command.len() - 1]);
            }
        } else {
            self.output.push_back(format!(
                "Drone simulator not initialized - {} command skipped",
                command
            ));
        }
    }

    fn tello_command(&mut self, command: &str) {
        if command == "<initialize>" {
            if self.tello.is_none() {
                match Tello::new() {
                    Ok(tello) => self.tello = Some(tello),
                    Err(error) => self
                        .output
                        .push_back(format!("Tello initialization failed - {}", error)),
                }
            } else {
                self.output
                    .push_back("Tello is already initialized".to_string());
            }
        } else if let Some(drone) = &self.tello {
            if let Err(error) = drone.submit(&tello::translate(command)) {
                self.output
                    .push_back(format!("Tello command {} failed - {}", command, error));
            }
        } else {
            self.output.push_back(format!(
                "Tello not initialized - {} command skipped",
                command
            ));
        }
    }
}

/// Replace every `%name` in a command with the named variable's current
/// value. A name runs from the `%` to the next blank or the closing
/// `>`; the terminating character is copied through. Names that are not
/// in the variable table substitute as `0`.
pub fn insert_variable_values(command: &str, vars: &Vars) -> String {
    enum EditState {
        Copy,
        Insert,
    }
    let mut state = EditState::Copy;
    let mut modified = String::new();
    let mut name = String::new();

    for c in command.chars() {
        match state {
            EditState::Copy => {
                if c == '%' {
                    name.clear();
                    state = EditState::Insert;
                } else {
                    modified.push(c);
                }
            }
            EditState::Insert => {
                if c == ' ' || c == '>' {
                    let value = vars
                        .lookup(&name)
                        .and_then(|handle| vars.value(handle).ok())
                        .unwrap_or(0);
                    modified.push_str(&value.to_string());
                    modified.push(c);
                    state = EditState::Copy;
                } else {
                    name.push(c);
                }
            }
        }
    }

    modified
}

fn at(pc: Address, error: Error) -> Error {
    error.message(format!("AT LOCATION {}", pc))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_variable_values() {
        let mut vars = Vars::new();
        vars.define("x", 1).unwrap();
        vars.define("y", 2).unwrap();
        vars.define("z", 3).unwrap();
        assert_eq!(
            insert_variable_values("<move %x %y %z>", &vars),
            "<move 1 2 3>"
        );
    }

    #[test]
    fn test_unset_name_substitutes_zero() {
        let vars = Vars::new();
        assert_eq!(insert_variable_values("<move %q 5>", &vars), "<move 0 5>");
    }

    #[test]
    fn test_no_placeholders_copies_through() {
        let vars = Vars::new();
        assert_eq!(insert_variable_values("<land>", &vars), "<land>");
    }
}
