//! `embedded-hal` integration: wraps [`SoftI2c`] as a generic
//! [`embedded_hal::i2c::I2c`] so device drivers written against the
//! ecosystem trait can sit on top of this bus unmodified.

use embedded_hal::i2c::{self, ErrorKind as HalErrorKind, NoAcknowledgeSource, Operation};

use crate::bus::SoftI2c;
use crate::error::ErrorKind;
use crate::platform::Platform;

/// Wraps an [`ErrorKind`] for [`embedded_hal::i2c::Error`].
///
/// The bus's own [`ErrorKind`] can't implement the trait directly (it's
/// also used in this crate's own fallible-but-not-`embedded_hal` API), so
/// this newtype carries it across.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Error(
    /// The underlying bus error.
    pub ErrorKind,
);

impl i2c::Error for Error {
    fn kind(&self) -> HalErrorKind {
        match self.0 {
            // The C reference this crate is based on can't tell an address
            // nack from a data nack after the fact, so `Unknown` it is.
            ErrorKind::Nack => HalErrorKind::NoAcknowledge(NoAcknowledgeSource::Unknown),
            ErrorKind::Stretch => HalErrorKind::Bus,
        }
    }
}

impl<P: Platform> i2c::ErrorType for SoftI2c<P> {
    type Error = Error;
}

impl<P: Platform> i2c::I2c for SoftI2c<P> {
    /// Runs `operations` as one transaction: a single START, a repeated
    /// START at every direction change, and one STOP at the end.
    ///
    /// Adjacent operations of the same direction are concatenated without
    /// an intervening START, matching the `embedded-hal` contract. Only the
    /// final byte of a read burst that is itself followed by a STOP or a
    /// direction-changing repeated START is NACKed; every other received
    /// byte is ACKed so the slave keeps clocking out data.
    fn transaction(&mut self, address: u8, operations: &mut [Operation<'_>]) -> Result<(), Self::Error> {
        if operations.is_empty() {
            return Ok(());
        }

        self.start().map_err(Error)?;
        let mut last_dir: Option<bool> = None;

        for idx in 0..operations.len() {
            let is_write = matches!(operations[idx], Operation::Write(_));
            let dir_changed = last_dir != Some(is_write);

            if dir_changed {
                if idx > 0 {
                    self.start().map_err(Error)?;
                }
                let addr_byte = (address << 1) | u8::from(!is_write);
                self.send_byte(addr_byte).map_err(Error)?;
            }

            let next_dir_differs =
                idx + 1 < operations.len() && (matches!(operations[idx + 1], Operation::Write(_)) != is_write);
            let is_last_overall = idx + 1 == operations.len();

            match &mut operations[idx] {
                Operation::Write(buf) => {
                    for &b in buf.iter() {
                        self.send_byte(b).map_err(Error)?;
                    }
                }
                Operation::Read(buf) => {
                    let len = buf.len();
                    for (i, slot) in buf.iter_mut().enumerate() {
                        let last_byte_of_op = i + 1 == len;
                        let ack = !(last_byte_of_op && (is_last_overall || next_dir_differs));
                        *slot = self.recv_byte(ack).map_err(Error)?;
                    }
                }
            }

            last_dir = Some(is_write);
        }

        self.stop().map_err(Error)?;
        Ok(())
    }
}
