#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! Blocking, `no_std` driver for the Holtek BS8116A-3 16-key capacitive
//! touch controller.
//!
//! The BS8116A-3 drives up to sixteen touch keys behind a two-wire bus and
//! reports pending key-state changes on an active-low IRQ line. This crate
//! exposes a strongly typed API on top of the raw register map, with helpers
//! for:
//!
//! - Interrupt-driven status refresh with rising-edge (newly-pressed) key
//!   detection across consecutive snapshots
//! - Per-key sensitivity thresholds and wake-up key selection via
//!   read-modify-write of the shared threshold registers
//! - Low-power scan mode and one-shot IRQ signalling
//! - Using `embedded-hal` 1.0 traits so the driver works across MCU families
//!   (enable the `async` Cargo feature for an awaitable refresh on top of
//!   `embedded-hal-async`)
//!
//! ```no_run
//! use embedded_hal::{digital::InputPin, i2c::{I2c, SevenBitAddress}};
//! use bs8116a::Bs8116a;
//!
//! fn example<I2C, IRQ, E>(i2c: I2C, irq: IRQ) -> Result<(), bs8116a::Error<E>>
//! where
//!   I2C: I2c<SevenBitAddress, Error = E>,
//!   IRQ: InputPin,
//! {
//!   let mut keypad = Bs8116a::new(i2c, irq);
//!   loop {
//!     if keypad.refresh()? {
//!       for key in keypad.just_pressed() {
//!         // feed the key into the application
//!         let _ = key;
//!       }
//!       keypad.clear_interrupt()?;
//!     }
//!   }
//! }
//! ```
//!
//! # IRQ discipline
//!
//! [`Bs8116a::refresh`] only samples the line and reads the status block; it
//! never releases the interrupt condition. Whether a status read alone
//! re-arms the line is not documented for this part, so the driver leaves
//! re-arming to an explicit [`Bs8116a::clear_interrupt`] call after each
//! serviced event.

mod config;
mod defs;
mod event;
mod rw;
#[cfg(feature = "async")]
mod wait;

pub use config::{IrqMode, KeyThreshold};
pub use defs::KEY_COUNT;
pub use event::{KeyMask, Keys};

/// Errors that can occur while interacting with the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
  /// I²C bus transaction failed with the underlying driver error.
  ///
  /// No-acknowledge and timeout conditions are distinguished by the HAL
  /// error's [`embedded_hal::i2c::Error::kind`].
  I2c(E),
  /// The IRQ line could not be sampled.
  Irq,
  /// A per-key operation was given a key index outside `0..16`.
  InvalidKey(u8),
  /// A register byte could not be converted to its typed representation.
  Decode,
}

impl<E: embedded_hal::i2c::Error> Error<E> {
  /// Returns `true` if the device did not acknowledge a bus transaction.
  pub fn is_nack(&self) -> bool {
    use embedded_hal::i2c::ErrorKind;
    matches!(self, Error::I2c(e) if matches!(e.kind(), ErrorKind::NoAcknowledge(_)))
  }
}

/// Driver state for the BS8116A-3 touch controller.
///
/// Owns the I²C peripheral and the IRQ input pin and keeps the two most
/// recent key-status snapshots for edge detection. Create an instance with
/// [`Bs8116a::new`], then poll [`Bs8116a::refresh`] and query the decoded
/// key sets. Configuration calls may interleave with refreshes at any time.
pub struct Bs8116a<I, IRQ> {
  i2c: I,
  irq: IRQ,
  current: u16,
  previous: u16,
}

impl<I, IRQ> Bs8116a<I, IRQ> {
  /// Create a new driver instance with the provided peripherals.
  ///
  /// The IRQ pin must already be configured as an input with pull-up; the
  /// line idles high and the device drives it low while an event is pending.
  /// Both key snapshots start empty.
  pub fn new(i2c: I, irq: IRQ) -> Self {
    Self { i2c, irq, current: 0, previous: 0 }
  }

  /// Consume the driver and return the owned peripherals.
  pub fn release(self) -> (I, IRQ) {
    (self.i2c, self.irq)
  }
}
