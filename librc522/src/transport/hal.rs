// librc522/src/transport/hal.rs

//! `embedded-hal` 0.2 adapters: an SPI peripheral plus a chip-select pin as
//! a [`Bus`], and a HAL delay as a [`Delay`].

use core::fmt::Debug;

use embedded_hal::blocking::delay::DelayMs;
use embedded_hal::blocking::spi::Transfer;
use embedded_hal::digital::v2::OutputPin;

use crate::clock::Delay;
use crate::transport::traits::Bus;
use crate::{Error, Result};

/// SPI bus with a software-driven NSS pin.
pub struct HalBus<SPI, NSS> {
    spi: SPI,
    nss: NSS,
}

impl<SPI, NSS> HalBus<SPI, NSS> {
    pub fn new(spi: SPI, nss: NSS) -> Self {
        Self { spi, nss }
    }

    /// Give back the SPI peripheral and the pin.
    pub fn release(self) -> (SPI, NSS) {
        (self.spi, self.nss)
    }
}

impl<SPI, NSS, E, PE> Bus for HalBus<SPI, NSS>
where
    SPI: Transfer<u8, Error = E>,
    NSS: OutputPin<Error = PE>,
    E: Debug,
    PE: Debug,
{
    fn select(&mut self) -> Result<()> {
        self.nss
            .set_low()
            .map_err(|e| Error::Transport(format!("nss: {:?}", e)))
    }

    fn deselect(&mut self) -> Result<()> {
        self.nss
            .set_high()
            .map_err(|e| Error::Transport(format!("nss: {:?}", e)))
    }

    fn transfer(&mut self, byte: u8) -> Result<u8> {
        let mut buf = [byte];
        let received = self
            .spi
            .transfer(&mut buf)
            .map_err(|e| Error::Transport(format!("spi: {:?}", e)))?;
        received
            .first()
            .copied()
            .ok_or_else(|| Error::Transport("spi: empty transfer".into()))
    }
}

/// Any `DelayMs<u32>` as a driver delay.
pub struct HalDelay<D>(pub D);

impl<D: DelayMs<u32>> Delay for HalDelay<D> {
    fn delay_ms(&mut self, ms: u32) {
        self.0.delay_ms(ms);
    }
}
