// librc522/src/transport/mod.rs

#[cfg(feature = "hal")]
pub mod hal;
pub mod mock;
pub mod spi;
pub mod traits;

#[cfg(feature = "hal")]
pub use hal::{HalBus, HalDelay};
pub use mock::{CardReply, MockTransport, SentFrame};
pub use spi::SpiTransport;
pub use traits::{Bus, Transport};
