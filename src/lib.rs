//! # FPL
//!
//! FPL is a small line-oriented flight plan language for an abstracted
//! drone. A program is a sequence of lines, each holding at most one
//! label or one instruction; instructions do integer arithmetic, compare
//! and branch, wait on a wall-clock deadline, and send `<...>` command
//! text to a drone.
//!
//! Run the `fpl` binary and enter the name of a flight plan file (or an
//! `http://` address) at the prompt. The program is parsed, the symbol
//! tables are displayed, and a clean program is then executed against
//! the selected drone target.
//!
//! ```text
//! takeoff:
//!     int x 20
//!     cmd <initialize>
//!     cmd <move %x 0 50>    # climb while moving forward
//!     nop 5
//!     cmd <land>
//!     end
//! ```

#[path = "doc/language.rs"]
#[allow(non_snake_case)]
pub mod _Language_Reference;

pub mod drone;
pub mod lang;
pub mod mach;
pub mod term;
