//! # FPL
//!
//! Parse and fly FPL flight plans.

fn main() {
    fpl::term::main()
}
