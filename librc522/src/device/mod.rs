// librc522/src/device/mod.rs

//! The reader handle and everything that drives the peripheral: register
//! I/O, the CRC coprocessor, the command executor, initialization and the
//! card protocol operations.

pub mod builder;
pub mod config;
mod crc;
mod executor;
pub mod handle;
mod io;
mod lifecycle;
mod operations;

pub use builder::DeviceBuilder;
pub use config::{DriverConfig, TimerConfig};
pub use handle::{Device, Initialized, Uninitialized};
