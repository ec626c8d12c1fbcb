// librc522/src/registers.rs

//! MFRC522 register map, command opcodes and register bit layouts.
//!
//! Register addresses occupy 6 bits (0x00..=0x3F). On the wire the address is
//! shifted left by one and bit 7 selects the direction, see
//! [`Register::read_address`] and [`Register::write_address`].

use bitflags::bitflags;

/// Addressable MFRC522 registers (reserved addresses omitted).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Register {
    // Page 0: command and status
    Command = 0x01,
    ComIEn = 0x02,
    DivIEn = 0x03,
    ComIrq = 0x04,
    DivIrq = 0x05,
    Error = 0x06,
    Status1 = 0x07,
    Status2 = 0x08,
    FifoData = 0x09,
    FifoLevel = 0x0A,
    WaterLevel = 0x0B,
    Control = 0x0C,
    BitFraming = 0x0D,
    Coll = 0x0E,
    // Page 1: command
    Mode = 0x11,
    TxMode = 0x12,
    RxMode = 0x13,
    TxControl = 0x14,
    TxAsk = 0x15,
    TxSel = 0x16,
    RxSel = 0x17,
    RxThreshold = 0x18,
    Demod = 0x19,
    MfTx = 0x1C,
    MfRx = 0x1D,
    SerialSpeed = 0x1F,
    // Page 2: configuration
    CrcResultHigh = 0x21,
    CrcResultLow = 0x22,
    ModWidth = 0x24,
    RfCfg = 0x26,
    GsN = 0x27,
    CwGsP = 0x28,
    ModGsP = 0x29,
    TMode = 0x2A,
    TPrescaler = 0x2B,
    TReloadHigh = 0x2C,
    TReloadLow = 0x2D,
    TCounterValueHigh = 0x2E,
    TCounterValueLow = 0x2F,
    // Page 3: test
    TestSel1 = 0x31,
    TestSel2 = 0x32,
    TestPinEn = 0x33,
    TestPinValue = 0x34,
    TestBus = 0x35,
    AutoTest = 0x36,
    Version = 0x37,
    AnalogTest = 0x38,
    TestDac1 = 0x39,
    TestDac2 = 0x3A,
    TestAdc = 0x3B,
}

impl Register {
    /// Every addressable register, in address order.
    pub const ALL: [Register; 50] = [
        Register::Command,
        Register::ComIEn,
        Register::DivIEn,
        Register::ComIrq,
        Register::DivIrq,
        Register::Error,
        Register::Status1,
        Register::Status2,
        Register::FifoData,
        Register::FifoLevel,
        Register::WaterLevel,
        Register::Control,
        Register::BitFraming,
        Register::Coll,
        Register::Mode,
        Register::TxMode,
        Register::RxMode,
        Register::TxControl,
        Register::TxAsk,
        Register::TxSel,
        Register::RxSel,
        Register::RxThreshold,
        Register::Demod,
        Register::MfTx,
        Register::MfRx,
        Register::SerialSpeed,
        Register::CrcResultHigh,
        Register::CrcResultLow,
        Register::ModWidth,
        Register::RfCfg,
        Register::GsN,
        Register::CwGsP,
        Register::ModGsP,
        Register::TMode,
        Register::TPrescaler,
        Register::TReloadHigh,
        Register::TReloadLow,
        Register::TCounterValueHigh,
        Register::TCounterValueLow,
        Register::TestSel1,
        Register::TestSel2,
        Register::TestPinEn,
        Register::TestPinValue,
        Register::TestBus,
        Register::AutoTest,
        Register::Version,
        Register::AnalogTest,
        Register::TestDac1,
        Register::TestDac2,
        Register::TestAdc,
    ];

    pub fn addr(self) -> u8 {
        self as u8
    }

    /// Address byte for a write transaction: `0XXXXXX0`.
    pub fn write_address(self) -> u8 {
        (self.addr() << 1) & 0x7E
    }

    /// Address byte for a read transaction: `1XXXXXX0`.
    pub fn read_address(self) -> u8 {
        self.write_address() | 0x80
    }

    /// Look up a register by its 6-bit address.
    pub fn from_addr(addr: u8) -> Option<Self> {
        Self::ALL.iter().copied().find(|r| r.addr() == addr)
    }
}

/// Peripheral (PCD) commands written to `CommandReg`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PcdCommand {
    Idle = 0x00,
    CalcCrc = 0x03,
    Transmit = 0x04,
    Receive = 0x08,
    Transceive = 0x0C,
    Authent = 0x0E,
    SoftReset = 0x0F,
}

impl PcdCommand {
    pub fn from_u8(value: u8) -> Option<Self> {
        match value & 0x0F {
            0x00 => Some(Self::Idle),
            0x03 => Some(Self::CalcCrc),
            0x04 => Some(Self::Transmit),
            0x08 => Some(Self::Receive),
            0x0C => Some(Self::Transceive),
            0x0E => Some(Self::Authent),
            0x0F => Some(Self::SoftReset),
            _ => None,
        }
    }
}

bitflags! {
    /// `CommIrqReg`: Set1 TxIRq RxIRq IdleIRq HiAlertIRq LoAlertIRq ErrIRq TimerIRq
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ComIrq: u8 {
        const TIMER = 0x01;
        const ERR = 0x02;
        const LO_ALERT = 0x04;
        const HI_ALERT = 0x08;
        const IDLE = 0x10;
        const RX = 0x20;
        const TX = 0x40;
        const SET1 = 0x80;
    }
}

bitflags! {
    /// `CommIEnReg`: same bit layout as [`ComIrq`], bit 7 inverts the IRQ pin.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ComIEn: u8 {
        const TIMER = 0x01;
        const ERR = 0x02;
        const LO_ALERT = 0x04;
        const HI_ALERT = 0x08;
        const IDLE = 0x10;
        const RX = 0x20;
        const TX = 0x40;
        const IRQ_INV = 0x80;
    }
}

bitflags! {
    /// `DivIrqReg`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct DivIrq: u8 {
        const CRC = 0x04;
        const MFIN_ACT = 0x10;
        const SET2 = 0x80;
    }
}

bitflags! {
    /// `ErrorReg`: WrErr TempErr reserved BufferOvfl CollErr CRCErr ParityErr ProtocolErr
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ErrorFlags: u8 {
        const PROTOCOL = 0x01;
        const PARITY = 0x02;
        const CRC = 0x04;
        const COLLISION = 0x08;
        const BUFFER_OVERFLOW = 0x10;
        const TEMPERATURE = 0x40;
        const WRITE = 0x80;

        /// Bits that abort a card exchange (0x1B).
        const FATAL = Self::BUFFER_OVERFLOW.bits()
            | Self::COLLISION.bits()
            | Self::PARITY.bits()
            | Self::PROTOCOL.bits();
    }
}

bitflags! {
    /// `Status2Reg`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Status2: u8 {
        const MF_CRYPTO1_ON = 0x08;
        const I2C_FORCE_HS = 0x40;
        const TEMP_SENS_CLEAR = 0x80;
    }
}

bitflags! {
    /// `FIFOLevelReg`: bit 7 flushes, bits 6..0 hold the byte count.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct FifoLevel: u8 {
        const FLUSH_BUFFER = 0x80;
    }
}

bitflags! {
    /// `BitFramingReg`: StartSend RxAlign[2:0] reserved TxLastBits[2:0]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct BitFraming: u8 {
        const START_SEND = 0x80;
    }
}

bitflags! {
    /// `TxControlReg`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct TxControl: u8 {
        const TX1_RF_EN = 0x01;
        const TX2_RF_EN = 0x02;
        const ANTENNA = Self::TX1_RF_EN.bits() | Self::TX2_RF_EN.bits();
    }
}

/// `ControlReg` bits 2..0: number of valid bits in the last received byte.
pub const RX_LAST_BITS_MASK: u8 = 0x07;
