//! Public error, stage, and result types.

/// Errors the bus primitives can report.
///
/// There is no `Ok` variant here — success is the `Ok` arm of
/// [`core::result::Result`], which the C reference this crate is based on
/// could not express natively.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ErrorKind {
    /// The slave held SCL low past the platform's clock-stretch timeout
    /// budget. Indicates either a hung slave, or stretching disabled on a
    /// platform plus any slave stretch at all.
    Stretch,
    /// The slave did not acknowledge the most recently transmitted byte.
    /// Only possible while sending the device address, a register address,
    /// or a write-direction data byte.
    Nack,
}

/// Shorthand for the bus primitives' return type.
pub type Result<T> = core::result::Result<T, ErrorKind>;

/// Width of the register address phase of a transaction.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RegisterWidth {
    /// No register-address phase; direct device access.
    None,
    /// One register-address byte.
    Byte,
    /// Two register-address bytes, big-endian on the wire.
    Word,
}

/// Phase a transaction had reached when it returned.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Stage {
    /// Generating the (repeated) START condition.
    Start,
    /// Sending the device address.
    Addr,
    /// Sending the register address.
    Reg,
    /// Sending or receiving the payload.
    Data,
    /// Generating the STOP condition.
    Stop,
}

/// Outcome of a register-addressed write or read transaction.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TransactionResult {
    /// `Ok(())` iff the transaction ran to completion.
    pub result: core::result::Result<(), ErrorKind>,
    /// Last stage the transaction entered.
    pub stage: Stage,
    /// Payload bytes successfully transferred before `result` was decided.
    ///
    /// Always `<=` the requested payload length; equal to it iff `result`
    /// is `Ok` and `stage` is [`Stage::Stop`]. Always `0` while `stage` is
    /// [`Stage::Addr`] or [`Stage::Reg`].
    pub data_size: usize,
}

impl TransactionResult {
    pub(crate) fn failed(stage: Stage, data_size: usize, err: ErrorKind) -> Self {
        Self {
            result: Err(err),
            stage,
            data_size,
        }
    }

    pub(crate) fn ok(data_size: usize) -> Self {
        Self {
            result: Ok(()),
            stage: Stage::Stop,
            data_size,
        }
    }
}
