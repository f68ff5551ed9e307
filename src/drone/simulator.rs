use super::Mailbox;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

/// Relative integer position of the virtual drone. The origin is where
/// the drone initialized; x is right, y is forward, z is altitude.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Coordinate3D {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

/// ## Virtual drone
///
/// A fire-and-forget sink. `submit` posts the command to a worker
/// thread through a single-slot mailbox and returns at once; the worker
/// applies the relative-motion vocabulary to a tracked position.

pub struct DroneSimulator {
    mailbox: Arc<Mailbox<String>>,
    position: Arc<Mutex<Coordinate3D>>,
    worker: Option<JoinHandle<()>>,
}

impl DroneSimulator {
    pub fn new() -> DroneSimulator {
        let mailbox: Arc<Mailbox<String>> = Arc::new(Mailbox::new());
        let position = Arc::new(Mutex::new(Coordinate3D::default()));
        let worker = {
            let mailbox = mailbox.clone();
            let position = position.clone();
            std::thread::spawn(move || {
                while let Some(command) = mailbox.take() {
                    apply_command(&mut position.lock().unwrap(), &command);
                }
            })
        };
        DroneSimulator {
            mailbox,
            position,
            worker: Some(worker),
        }
    }

    /// Send a command, delimiters already stripped. Never blocks and
    /// never fails; an unrecognized command is ignored by the worker.
    pub fn submit(&self, command: &str) {
        self.mailbox.post(command.to_string());
    }

    pub fn position(&self) -> Coordinate3D {
        *self.position.lock().unwrap()
    }
}

impl Drop for DroneSimulator {
    fn drop(&mut self) {
        self.mailbox.close();
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

impl Default for DroneSimulator {
    fn default() -> DroneSimulator {
        DroneSimulator::new()
    }
}

fn apply_command(position: &mut Coordinate3D, command: &str) {
    let mut fields = command.split_whitespace();
    match fields.next() {
        Some("move") => {
            let mut delta = || fields.next().and_then(|f| f.parse::<i32>().ok());
            if let (Some(dx), Some(dy), Some(dz)) = (delta(), delta(), delta()) {
                position.x += dx;
                position.y += dy;
                position.z += dz;
            }
        }
        Some("land") => position.z = 0,
        _ => {}
    }
}
