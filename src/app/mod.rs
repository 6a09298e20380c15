// Application layer: interactive console on top of the core library manager.

pub mod input;
pub mod menu;
pub mod session;

pub use session::Session;
