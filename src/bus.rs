//! Bit-banged bus primitives and the two register-addressed transactions.

use crate::error::{ErrorKind, RegisterWidth, Result, Stage, TransactionResult};
use crate::platform::{PinState, Platform};

/// Bit-banged two-wire serial bus master, generic over a [`Platform`]
/// adapter.
///
/// Holds no state of its own beyond the wrapped platform: every operation
/// drives the bus from entry to return and leaves nothing behind for the
/// next call to depend on.
pub struct SoftI2c<P: Platform> {
    platform: P,
}

impl<P: Platform> SoftI2c<P> {
    /// Wrap a platform adapter as a bus handle.
    pub fn new(platform: P) -> Self {
        Self { platform }
    }

    /// Unwrap the bus handle, giving back the platform adapter.
    pub fn release(self) -> P {
        self.platform
    }

    /// Borrow the platform adapter, e.g. to reconfigure it between
    /// transactions.
    pub fn platform_mut(&mut self) -> &mut P {
        &mut self.platform
    }

    /// Wait for the slave to release SCL, honoring the stretch-timeout
    /// budget. Returns immediately if SCL already reads `High`.
    pub fn stretch_wait(&mut self) -> Result<()> {
        if self.platform.read_scl() == PinState::Low {
            self.platform.timeout_start();
            loop {
                if !self.platform.timeout_check() {
                    warn!("stretch timeout");
                    return Err(ErrorKind::Stretch);
                }
                self.platform.delay_quarter_period();
                if self.platform.read_scl() == PinState::High {
                    break;
                }
            }
        }
        Ok(())
    }

    /// Drive one clock cycle and send one bit.
    pub fn send_bit(&mut self, bit: PinState) -> Result<()> {
        self.platform.write_sda(bit);
        self.platform.delay_quarter_period();
        self.platform.write_scl(PinState::High);
        self.platform.delay_quarter_period();
        self.stretch_wait()?;
        self.platform.delay_quarter_period();
        self.platform.write_scl(PinState::Low);
        self.platform.delay_quarter_period();
        Ok(())
    }

    /// Drive one clock cycle and sample one bit.
    pub fn recv_bit(&mut self) -> Result<PinState> {
        self.platform.write_sda(PinState::High);
        self.platform.delay_quarter_period();
        self.platform.write_scl(PinState::High);
        self.platform.delay_quarter_period();
        self.stretch_wait()?;
        self.platform.delay_quarter_period();
        let bit = self.platform.read_sda();
        self.platform.write_scl(PinState::Low);
        self.platform.delay_quarter_period();
        Ok(bit)
    }

    /// Generate a START condition, or a repeated START if called without an
    /// intervening [`SoftI2c::stop`] — the sequence is the same either way.
    pub fn start(&mut self) -> Result<()> {
        self.platform.write_sda(PinState::High);
        self.platform.delay_quarter_period();
        self.platform.write_scl(PinState::High);
        self.platform.delay_quarter_period();
        self.stretch_wait()?;
        self.platform.write_sda(PinState::Low);
        self.platform.delay_quarter_period();
        self.platform.write_scl(PinState::Low);
        self.platform.delay_quarter_period();
        Ok(())
    }

    /// Generate a STOP condition, releasing the bus.
    pub fn stop(&mut self) -> Result<()> {
        self.platform.write_sda(PinState::Low);
        self.platform.delay_quarter_period();
        self.platform.write_scl(PinState::High);
        self.platform.delay_quarter_period();
        self.stretch_wait()?;
        self.platform.write_sda(PinState::High);
        self.platform.delay_quarter_period();
        Ok(())
    }

    /// Send one byte MSB-first, then sample the slave's ACK/NACK bit.
    pub fn send_byte(&mut self, byte: u8) -> Result<()> {
        for i in 0..8 {
            let bit = PinState::from((byte & (0x80 >> i)) != 0);
            self.send_bit(bit)?;
        }
        match self.recv_bit()? {
            PinState::Low => Ok(()),
            PinState::High => {
                warn!("nack on byte 0x{:02x}", byte);
                Err(ErrorKind::Nack)
            }
        }
    }

    /// Receive one byte MSB-first, then drive the ACK (`ack = true`) or
    /// NACK (`ack = false`) bit.
    pub fn recv_byte(&mut self, ack: bool) -> Result<u8> {
        let mut byte = 0u8;
        for _ in 0..8 {
            let bit: bool = self.recv_bit()?.into();
            byte = (byte << 1) | (bit as u8);
        }
        self.send_bit(PinState::from(!ack))?;
        Ok(byte)
    }

    fn send_register(&mut self, reg_width: RegisterWidth, reg: u16) -> Result<()> {
        if reg_width == RegisterWidth::Word {
            self.send_byte((reg >> 8) as u8)?;
        }
        if reg_width != RegisterWidth::None {
            self.send_byte((reg & 0xFF) as u8)?;
        }
        Ok(())
    }

    /// Write `payload` to the register-addressed device at `addr`.
    ///
    /// Sequence: START, device address (write direction), register address
    /// (per `reg_width`, big-endian), payload bytes in order, STOP. On any
    /// failure, later phases are skipped and the caller is responsible for
    /// bus recovery.
    pub fn write(&mut self, addr: u8, reg_width: RegisterWidth, reg: u16, payload: &[u8]) -> TransactionResult {
        debug_assert!(addr < 0x80, "7-bit address out of range");

        if let Err(err) = self.start() {
            return TransactionResult::failed(Stage::Start, 0, err);
        }
        if let Err(err) = self.send_byte(addr << 1) {
            return TransactionResult::failed(Stage::Addr, 0, err);
        }
        if let Err(err) = self.send_register(reg_width, reg) {
            return TransactionResult::failed(Stage::Reg, 0, err);
        }

        let mut data_size = 0;
        for &byte in payload {
            if let Err(err) = self.send_byte(byte) {
                return TransactionResult::failed(Stage::Data, data_size, err);
            }
            data_size += 1;
        }

        if let Err(err) = self.stop() {
            return TransactionResult::failed(Stage::Stop, data_size, err);
        }
        trace!("write complete, {} bytes", data_size);
        TransactionResult::ok(data_size)
    }

    /// Read `payload.len()` bytes from the register-addressed device at
    /// `addr` into `payload`.
    ///
    /// Sequence: START, device address (write direction), register address,
    /// repeated START, device address (read direction), payload bytes (the
    /// last one NACKed, all others ACKed), STOP. A zero-length `payload`
    /// still runs the full sequence minus the data phase — this is
    /// deliberate, see the crate's design notes; callers rely on it as an
    /// address probe.
    pub fn read(&mut self, addr: u8, reg_width: RegisterWidth, reg: u16, payload: &mut [u8]) -> TransactionResult {
        debug_assert!(addr < 0x80, "7-bit address out of range");

        if let Err(err) = self.start() {
            return TransactionResult::failed(Stage::Start, 0, err);
        }
        if let Err(err) = self.send_byte(addr << 1) {
            return TransactionResult::failed(Stage::Addr, 0, err);
        }
        if let Err(err) = self.send_register(reg_width, reg) {
            return TransactionResult::failed(Stage::Reg, 0, err);
        }
        if let Err(err) = self.start() {
            return TransactionResult::failed(Stage::Start, 0, err);
        }
        if let Err(err) = self.send_byte((addr << 1) | 0x01) {
            return TransactionResult::failed(Stage::Addr, 0, err);
        }

        let mut data_size = 0;
        let len = payload.len();
        for (i, slot) in payload.iter_mut().enumerate() {
            let more_to_come = i + 1 < len;
            match self.recv_byte(more_to_come) {
                Ok(byte) => {
                    *slot = byte;
                    data_size += 1;
                }
                Err(err) => return TransactionResult::failed(Stage::Data, data_size, err),
            }
        }

        if let Err(err) = self.stop() {
            return TransactionResult::failed(Stage::Stop, data_size, err);
        }
        trace!("read complete, {} bytes", data_size);
        TransactionResult::ok(data_size)
    }
}
