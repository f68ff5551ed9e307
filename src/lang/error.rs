use super::LineNumber;

pub struct Error {
    code: u16,
    line_number: LineNumber,
    message: String,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, $line:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_line_number($line)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
    ($err:ident, $line:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_line_number($line)
            .message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code: code as u16,
            line_number: None,
            message: String::new(),
        }
    }

    pub fn code(&self) -> u16 {
        self.code
    }

    pub fn in_line_number(self, line: LineNumber) -> Error {
        debug_assert!(self.line_number.is_none());
        Error {
            line_number: line,
            ..self
        }
    }

    pub fn message<S: Into<String>>(self, message: S) -> Error {
        debug_assert!(self.message.is_empty());
        Error {
            message: message.into(),
            ..self
        }
    }
}

pub enum ErrorCode {
    SyntaxError = 2,
    UnknownOpcode = 3,
    InvalidOperand = 4,
    TooManyTokens = 5,
    UnterminatedCommand = 6,
    DuplicateLabel = 7,
    TableOverflow = 8,
    UndefinedVariable = 9,
    UndefinedLabel = 10,
    UndefinedCommand = 11,
    InvalidLabel = 12,
    DivisionByZero = 20,
    InvalidHandle = 21,
    ProgramCounterRange = 22,
    EmptyProgram = 23,
    InternalError = 51,
    FileNotFound = 53,
    DroneLink = 54,
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let code_str = match self.code {
            2 => "SYNTAX ERROR",
            3 => "UNRECOGNIZED OPCODE",
            4 => "INVALID OR MISSING OPERAND(S)",
            5 => "TOO MANY OPERAND(S)",
            6 => "UNTERMINATED DRONE COMMAND",
            7 => "DUPLICATE LABEL",
            8 => "TABLE OVERFLOW",
            9 => "UNDECLARED INTEGER VARIABLE",
            10 => "UNDEFINED LABEL",
            11 => "UNKNOWN DRONE COMMAND",
            12 => "INVALID LABEL DEFINITION",
            20 => "DIVISION BY ZERO",
            21 => "INVALID TABLE INDEX",
            22 => "PROGRAM COUNTER OUT OF RANGE",
            23 => "EMPTY PROGRAM",
            51 => "INTERNAL ERROR",
            53 => "FILE NOT FOUND",
            54 => "DRONE LINK ERROR",
            _ => "",
        };
        let mut suffix = String::new();
        if let Some(line_number) = self.line_number {
            suffix.push_str(&format!(" IN LINE {}", line_number));
        }
        if !self.message.is_empty() {
            suffix.push_str(&format!("; {}", self.message));
        }
        if code_str.is_empty() {
            write!(f, "PROGRAM ERROR {}{}", self.code, suffix)
        } else {
            write!(f, "{}{}", code_str, suffix)
        }
    }
}
