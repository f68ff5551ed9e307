use fpl::lang::Line;
use fpl::mach::{DroneMode, Event, Program, Runtime, TraceMode};

pub fn program(source: &str) -> Program {
    let mut program = Program::new();
    program.compile(
        source
            .lines()
            .enumerate()
            .map(|(index, text)| Line::new(index + 1, text)),
    );
    program
}

pub fn runtime(source: &str, trace_mode: TraceMode) -> Runtime {
    let program = program(source);
    assert!(program.parse_ok(), "{:?}", program.errors());
    Runtime::new(program, DroneMode::None, trace_mode)
}

pub fn exec(runtime: &mut Runtime) -> String {
    exec_n(runtime, 5000)
}

pub fn exec_n(runtime: &mut Runtime, cycles: usize) -> String {
    let mut s = String::new();
    let mut prev_running = false;
    loop {
        let event = runtime.execute(cycles);
        match &event {
            Event::Stopped => {
                break;
            }
            Event::Errors(errors) => {
                for error in errors.iter() {
                    s.push_str(&format!("{}\n", error));
                }
            }
            Event::Running => {
                if prev_running {
                    s.push_str(&format!("\n{} Execution cycles exceeded.\n", cycles));
                    break;
                }
            }
            Event::Print(line) => {
                s.push_str(line);
                s.push('\n');
            }
        }
        match event {
            Event::Running => prev_running = true,
            _ => prev_running = false,
        }
    }
    s
}
