//! The platform adapter: the capability set a caller supplies to drive the
//! physical SCL/SDA pins, timing, and clock-stretch timeout.

/// Digital state of an open-drain bus line.
///
/// `High` means the line is *released* (the pull-up takes over), not
/// actively driven — the bus is open-drain, so there is no "drive high".
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinState {
    /// Actively pulled to ground.
    Low,
    /// Released; the pull-up resistor raises the line.
    High,
}

impl From<bool> for PinState {
    fn from(high: bool) -> Self {
        if high {
            Self::High
        } else {
            Self::Low
        }
    }
}

impl From<PinState> for bool {
    fn from(state: PinState) -> bool {
        matches!(state, PinState::High)
    }
}

/// Capability bundle the bus driver needs from its host: pin drive/sample,
/// a quarter-bit-period delay, and a clock-stretch timeout timer.
///
/// Every method is infallible. A platform that cannot fail pin operations
/// (the common case for a bare GPIO register) implements this directly; a
/// platform that can fail (e.g. an I/O expander behind a fallible bus)
/// should resolve that fallibility internally (by retrying, or by treating
/// a failed drive as a permanent `Low`/`High` per the policy that best
/// matches its hardware) rather than surface it here, per spec.
pub trait Platform {
    /// Drive SCL: `Low` actively pulls to ground, `High` releases it.
    fn write_scl(&mut self, state: PinState);

    /// Drive SDA: same convention as [`Platform::write_scl`].
    fn write_sda(&mut self, state: PinState);

    /// Sample SCL's current electrical level.
    fn read_scl(&mut self) -> PinState;

    /// Sample SDA's current electrical level.
    fn read_sda(&mut self) -> PinState;

    /// Busy-wait one quarter of the target bit period. Sets the bus speed:
    /// the resulting frequency is `1 / (4 * delay)`.
    fn delay_quarter_period(&mut self);

    /// Arm the clock-stretch timeout timer to its full budget.
    fn timeout_start(&mut self);

    /// Return `true` while the stretch-timeout budget remains, `false` once
    /// it has expired. A platform that does not support clock stretching
    /// should return `false` unconditionally, which makes any slave-held
    /// `Low` SCL at a stretch-wait point fail immediately.
    fn timeout_check(&mut self) -> bool;
}
