use crate::error;
use crate::lang::Error;
use std::net::UdpSocket;
use std::time::Duration;

type Result<T> = std::result::Result<T, Error>;

const TELLO_ADDR: &str = "192.168.10.1:8889";
const LOCAL_ADDR: &str = "0.0.0.0:8889";

/// Seconds allowed for the drone to acknowledge a command.
const MAX_TIMEOUT: u64 = 5;

const BUFFER_SIZE: usize = 256;

/// Tello's default speed in cm/sec, appended to translated commands.
const DEFAULT_SPEED: &str = " 30";

/// ## Tello link
///
/// UDP request/response to the drone's command port. Every command
/// waits for an acknowledgment with a bounded timeout; a timeout or an
/// `error` response is reported to the caller, who logs it and keeps
/// flying.

pub struct Tello {
    socket: UdpSocket,
}

impl Tello {
    /// Bind the command socket and put the drone in SDK command mode.
    pub fn new() -> Result<Tello> {
        let socket = match UdpSocket::bind(LOCAL_ADDR) {
            Ok(socket) => socket,
            Err(error) => return Err(error!(DroneLink; error.to_string())),
        };
        if let Err(error) = socket.set_read_timeout(Some(Duration::from_secs(MAX_TIMEOUT))) {
            return Err(error!(DroneLink; error.to_string()));
        }
        if let Err(error) = socket.connect(TELLO_ADDR) {
            return Err(error!(DroneLink; error.to_string()));
        }
        let tello = Tello { socket };
        tello.submit("command")?;
        Ok(tello)
    }

    /// Send one command and wait for the drone's response.
    pub fn submit(&self, command: &str) -> Result<()> {
        if let Err(error) = self.socket.send(command.as_bytes()) {
            return Err(error!(DroneLink; error.to_string()));
        }
        let mut buffer = [0u8; BUFFER_SIZE];
        match self.socket.recv(&mut buffer) {
            Ok(received) => {
                let response = String::from_utf8_lossy(&buffer[..received]);
                if response.trim_end().starts_with("error") {
                    Err(error!(DroneLink; response.trim_end().to_string()))
                } else {
                    Ok(())
                }
            }
            Err(_) => Err(error!(DroneLink;
                format!("NO RESPONSE WITHIN {} SECONDS", MAX_TIMEOUT))),
        }
    }
}

/// Translate a generic FPL drone command into the Tello vocabulary:
/// `<move dx dy dz>` becomes `go dx dy dz` at the default speed,
/// `<arm>` becomes a `speed` command, and anything else is passed
/// through with the delimiters stripped.
pub fn translate(command: &str) -> String {
    let n = command.len();
    if n > 7 && command.starts_with("<move ") && command.ends_with('>') {
        let mut tello_command = String::from("go ");
        tello_command.push_str(&command[6..n - 1]);
        tello_command.push_str(DEFAULT_SPEED);
        tello_command
    } else if command == "<arm>" {
        format!("speed{}", DEFAULT_SPEED)
    } else if n > 2 && command.starts_with('<') && command.ends_with('>') {
        command[1..n - 1].to_string()
    } else {
        command.to_string()
    }
}
