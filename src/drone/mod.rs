/*!
## FPL Drone Module

The external command sinks fed by the virtual machine's `cmd` handler:
a fire-and-forget virtual drone and a request/response hardware link.
Both accept command text and report success or failure; everything else
about them is opaque to the machine.

*/

mod mailbox;
mod simulator;

pub mod tello;

pub use mailbox::Mailbox;
pub use simulator::Coordinate3D;
pub use simulator::DroneSimulator;
pub use tello::Tello;
