// librc522/src/device/lifecycle.rs

use log::{debug, warn};

use crate::device::{Device, Initialized, Uninitialized};
use crate::registers::{PcdCommand, Register, Status2, TxControl};
use crate::Result;

impl Device<Uninitialized> {
    /// Bring the peripheral up: transport reset, power-up delay, soft reset,
    /// timer/modulation/CRC configuration, antenna on.
    pub fn initialize(mut self) -> Result<Device<Initialized>> {
        self.transport.reset()?;
        self.delay.delay_ms(self.config.power_up_delay_ms);
        self.soft_reset()?;
        self.configure()?;
        self.antenna_on()?;
        debug!("mfrc522 initialized");
        Ok(self.into_state())
    }
}

impl<State> Device<State> {
    /// Issue the SoftReset command. Registers return to their reset values.
    pub fn soft_reset(&mut self) -> Result<()> {
        self.write_register(Register::Command, PcdCommand::SoftReset as u8)?;
        debug!("soft reset");
        Ok(())
    }

    /// Write the timer, modulation, CRC preset and receiver gain settings.
    pub fn configure(&mut self) -> Result<()> {
        let timer = self.config.timer;
        let [reload_high, reload_low] = timer.reload.to_be_bytes();
        self.write_register(Register::TMode, timer.mode)?;
        self.write_register(Register::TPrescaler, timer.prescaler)?;
        self.write_register(Register::TReloadLow, reload_low)?;
        self.write_register(Register::TReloadHigh, reload_high)?;
        self.write_register(Register::TxAsk, self.config.tx_ask)?;
        self.write_register(Register::Mode, self.config.mode)?;
        if let Some(gain) = self.config.rx_gain {
            self.write_register(Register::RfCfg, gain)?;
        }
        debug!(
            "configured: timer={:?} tx_ask={:#04x} mode={:#04x}",
            timer, self.config.tx_ask, self.config.mode
        );
        Ok(())
    }

    /// Enable both antenna drivers unless one of them already is, then read
    /// back to verify they latched.
    pub fn antenna_on(&mut self) -> Result<()> {
        let tx = TxControl::from_bits_retain(self.read_register(Register::TxControl)?);
        if tx.intersects(TxControl::ANTENNA) {
            debug!("antenna already on (TxControlReg={:#04x})", tx.bits());
            return Ok(());
        }
        self.set_bits(Register::TxControl, TxControl::ANTENNA.bits())?;
        let after = TxControl::from_bits_retain(self.read_register(Register::TxControl)?);
        if after.contains(TxControl::ANTENNA) {
            debug!("antenna on");
        } else {
            warn!(
                "antenna drivers did not latch (TxControlReg={:#04x})",
                after.bits()
            );
        }
        Ok(())
    }

    pub fn antenna_off(&mut self) -> Result<()> {
        self.clear_bits(Register::TxControl, TxControl::ANTENNA.bits())?;
        debug!("antenna off");
        Ok(())
    }

    /// Both antenna drivers enabled.
    pub fn antenna_enabled(&mut self) -> Result<bool> {
        let tx = TxControl::from_bits_retain(self.read_register(Register::TxControl)?);
        Ok(tx.contains(TxControl::ANTENNA))
    }

    /// `VersionReg`: 0x91 for v1.0 silicon, 0x92 for v2.0.
    pub fn version(&mut self) -> Result<u8> {
        self.read_register(Register::Version)
    }
}

impl Device<Initialized> {
    /// Drop the Crypto1 session so unauthenticated exchanges work again.
    pub fn stop_crypto(&mut self) -> Result<()> {
        self.clear_bits(Register::Status2, Status2::MF_CRYPTO1_ON.bits())
    }
}
