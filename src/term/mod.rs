extern crate ansi_term;
extern crate ctrlc;
extern crate linefeed;

use crate::lang::{Error, Line};
use crate::mach::{listing, DroneMode, Event, Program, Runtime, TraceMode};
use crate::error;
use ansi_term::Style;
use chrono::Local;
use linefeed::{DefaultTerminal, Interface, ReadResult};
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

pub fn main() {
    let interrupted = Arc::new(AtomicBool::new(false));
    let int_moved = interrupted.clone();
    ctrlc::set_handler(move || {
        int_moved.store(true, Ordering::SeqCst);
    })
    .expect("Error setting Ctrl-C handler");
    if let Err(error) = main_loop(interrupted) {
        eprintln!("{}", error);
    }
}

fn main_loop(interrupted: Arc<AtomicBool>) -> std::io::Result<()> {
    let command = Interface::new("FPL")?;
    command.write_fmt(format_args!(
        "FPL {}\nEnter a flight plan file name or URL.\n",
        env!("CARGO_PKG_VERSION")
    ))?;
    loop {
        interrupted.store(false, Ordering::SeqCst);
        command.set_prompt("FPL> ")?;
        let file_name = match command.read_line()? {
            ReadResult::Input(string) => string,
            ReadResult::Signal(_) | ReadResult::Eof => break,
        };
        let file_name = file_name.trim().to_string();
        if file_name.is_empty() {
            continue;
        }
        command.add_history_unique(file_name.clone());

        let lines = match load(&file_name) {
            Ok(lines) => lines,
            Err(error) => {
                print_error(&command, &error)?;
                continue;
            }
        };

        let mut program = Program::new();
        program.compile(
            lines
                .iter()
                .enumerate()
                .map(|(index, text)| Line::new(index + 1, text)),
        );

        command.write_fmt(format_args!("{}", listing::variables(&program)))?;
        command.write_fmt(format_args!("{}", listing::labels(&program)))?;
        command.write_fmt(format_args!("{}", listing::commands(&program)))?;

        for error in program.errors() {
            print_error(&command, error)?;
        }
        for warning in program.warnings() {
            print_error(&command, warning)?;
        }
        if !program.parse_ok() {
            command.write_fmt(format_args!(
                "\nThe flight plan did not parse cleanly and will not be executed\n"
            ))?;
            continue;
        }

        command.write_fmt(format_args!("{}", listing::instructions(&program)))?;
        for warning in program.validate() {
            print_error(&command, &warning)?;
        }

        let drone_mode = match prompt_drone_mode(&command)? {
            Some(mode) => mode,
            None => break,
        };
        let trace_mode = match prompt_trace_mode(&command)? {
            Some(mode) => mode,
            None => break,
        };

        command.write_fmt(format_args!(
            "\nProgram execution started at {}\n",
            Local::now().format("%H:%M:%S")
        ))?;
        let mut runtime = Runtime::new(program, drone_mode, trace_mode);
        run(&command, &mut runtime, &interrupted)?;
    }
    Ok(())
}

fn run(
    command: &Interface<DefaultTerminal>,
    runtime: &mut Runtime,
    interrupted: &Arc<AtomicBool>,
) -> std::io::Result<()> {
    loop {
        if interrupted.load(Ordering::SeqCst) {
            runtime.interrupt();
            interrupted.store(false, Ordering::SeqCst);
        }
        match runtime.execute(1000) {
            Event::Stopped => break,
            Event::Running => {}
            Event::Print(line) => command.write_fmt(format_args!("{}\n", line))?,
            Event::Errors(errors) => {
                for error in errors.iter() {
                    print_error(command, error)?;
                }
            }
        }
    }
    Ok(())
}

fn print_error(command: &Interface<DefaultTerminal>, error: &Error) -> std::io::Result<()> {
    command.write_fmt(format_args!(
        "{}\n",
        Style::new().bold().paint(error.to_string())
    ))
}

fn prompt_drone_mode(
    command: &Interface<DefaultTerminal>,
) -> std::io::Result<Option<DroneMode>> {
    loop {
        command.set_prompt("Drone [none/sim/tello/both]: ")?;
        let answer = match command.read_line()? {
            ReadResult::Input(string) => string,
            ReadResult::Signal(_) | ReadResult::Eof => return Ok(None),
        };
        match answer.trim().to_ascii_lowercase().as_str() {
            "" | "none" => return Ok(Some(DroneMode::None)),
            "sim" | "simulator" => return Ok(Some(DroneMode::Simulator)),
            "tello" => return Ok(Some(DroneMode::Tello)),
            "both" => return Ok(Some(DroneMode::Both)),
            _ => {}
        }
    }
}

fn prompt_trace_mode(
    command: &Interface<DefaultTerminal>,
) -> std::io::Result<Option<TraceMode>> {
    loop {
        command.set_prompt("Trace [off/cmd/all]: ")?;
        let answer = match command.read_line()? {
            ReadResult::Input(string) => string,
            ReadResult::Signal(_) | ReadResult::Eof => return Ok(None),
        };
        match answer.trim().to_ascii_lowercase().as_str() {
            "" | "off" => return Ok(Some(TraceMode::Off)),
            "cmd" | "nop" => return Ok(Some(TraceMode::CmdNop)),
            "all" => return Ok(Some(TraceMode::All)),
            _ => {}
        }
    }
}

fn load(file_name: &str) -> Result<Vec<String>, Error> {
    if file_name.starts_with("http://") || file_name.starts_with("https://") {
        return load_url(file_name);
    }
    let reader = match File::open(file_name) {
        Ok(file) => BufReader::new(file),
        Err(error) => {
            let msg = error.to_string();
            return match error.kind() {
                ErrorKind::NotFound => Err(error!(FileNotFound; msg)),
                _ => Err(error!(InternalError; msg)),
            };
        }
    };
    let mut lines: Vec<String> = vec![];
    for line in reader.lines() {
        match line {
            Ok(line) => lines.push(line),
            Err(error) => return Err(error!(InternalError; error.to_string())),
        }
    }
    Ok(lines)
}

fn load_url(url: &str) -> Result<Vec<String>, Error> {
    let response = match reqwest::blocking::get(url) {
        Ok(response) => response,
        Err(error) => return Err(error!(FileNotFound; error.to_string())),
    };
    if !response.status().is_success() {
        return Err(error!(FileNotFound; format!("{} {}", response.status(), url)));
    }
    match response.text() {
        Ok(text) => Ok(text.lines().map(|line| line.to_string()).collect()),
        Err(error) => Err(error!(InternalError; error.to_string())),
    }
}
