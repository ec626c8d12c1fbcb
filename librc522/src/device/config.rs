// librc522/src/device/config.rs

use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::constants::{CRC_POLLS, EXECUTOR_POLLS};

/// Peripheral timer setup. The defaults give a period of roughly 30 ms:
/// TAuto on, 6.78 MHz / (2 * 0xD3E + 1) per tick (about 1 ms), 30 ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TimerConfig {
    /// `TModeReg`
    pub mode: u8,
    /// `TPrescalerReg`
    pub prescaler: u8,
    /// `TReloadReg` high/low pair.
    pub reload: u16,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            mode: 0x8D,
            prescaler: 0x3E,
            reload: 30,
        }
    }
}

/// Per-deployment tuning values.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DriverConfig {
    pub timer: TimerConfig,
    /// `TxASKReg`; 0x40 forces 100 % ASK modulation.
    pub tx_ask: u8,
    /// `ModeReg`; 0x3D selects CRC preset 0x6363.
    pub mode: u8,
    /// Raw `RFCfgReg` value (receiver gain). Left at reset value when `None`.
    pub rx_gain: Option<u8>,
    /// IRQ poll budget of one command executor call.
    pub executor_polls: u32,
    /// Poll budget of the CRC coprocessor.
    pub crc_polls: u32,
    /// Wall-clock bound on executor polling; only applied when a clock is set.
    pub executor_deadline: Option<Duration>,
    /// Delay between power-up and soft reset.
    pub power_up_delay_ms: u32,
    /// Fail card operations with `Error::CrcTimeout` when the coprocessor
    /// does not finish, instead of sending stale CRC bytes.
    pub strict_crc: bool,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            timer: TimerConfig::default(),
            tx_ask: 0x40,
            mode: 0x3D,
            rx_gain: None,
            executor_polls: EXECUTOR_POLLS,
            crc_polls: CRC_POLLS,
            executor_deadline: None,
            power_up_delay_ms: 50,
            strict_crc: false,
        }
    }
}
