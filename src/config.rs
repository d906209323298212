use embedded_hal::i2c::{I2c, SevenBitAddress};

use crate::defs::{Reg, KEY_COUNT};
use crate::{Bs8116a, Error, KeyMask};

impl<I, E, IRQ> Bs8116a<I, IRQ>
where
  I: I2c<SevenBitAddress, Error = E>,
{
  /// Select which keys may wake the device from low-power mode.
  ///
  /// The hardware keeps the flag inverted (bit set = wake-up disabled) in the
  /// top bit of each key's threshold register, so this walks all 16 registers
  /// with a read-modify-write each, leaving the sensitivity bits untouched.
  pub fn set_wake_keys(&mut self, keys: KeyMask) -> Result<(), Error<E>> {
    for key in 0..KEY_COUNT as u8 {
      self.modify_threshold(key, |t| t.wake_disabled = !keys.contains(key))?;
    }
    Ok(())
  }

  /// Set the touch-detection threshold for a single key.
  ///
  /// Levels above [`KeyThreshold::LEVEL_MAX`] are truncated to 6 bits rather
  /// than rejected. The wake-up flag sharing the register is preserved.
  /// Key indices 16 and up have no register and fail with
  /// [`Error::InvalidKey`].
  pub fn set_sensitivity(&mut self, key: u8, level: u8) -> Result<(), Error<E>> {
    self.modify_threshold(key, |t| t.level = level & KeyThreshold::LEVEL_MAX)
  }

  /// Read back the threshold register of a single key.
  pub fn key_threshold(&mut self, key: u8) -> Result<KeyThreshold, Error<E>> {
    let reg = Reg::key_threshold(key).ok_or(Error::InvalidKey(key))?;
    self.read(reg)
  }

  /// Toggle the low-power scan mode (LSC bit of OPTION2).
  ///
  /// Low-power mode trades touch latency for scan current. Only bit 6 is
  /// touched; enabling and then disabling restores the original byte.
  pub fn set_low_power(&mut self, enable: bool) -> Result<(), Error<E>> {
    self.modify_options2(|o| o.low_power = enable)
  }

  /// Select how the IRQ line signals pending events.
  pub fn set_irq_mode(&mut self, mode: IrqMode) -> Result<(), Error<E>> {
    self.modify_options1(|o| o.irq_mode = mode)
  }

  fn modify_threshold<F: FnOnce(&mut KeyThreshold)>(&mut self, key: u8, f: F) -> Result<(), Error<E>> {
    let reg = Reg::key_threshold(key).ok_or(Error::InvalidKey(key))?;
    let mut threshold = self.read(reg)?;
    f(&mut threshold);
    self.write(reg, threshold)
  }

  fn modify_options1<F: FnOnce(&mut Options1)>(&mut self, f: F) -> Result<(), Error<E>> {
    let mut options = self.read(Reg::Option1)?;
    f(&mut options);
    self.write(Reg::Option1, options)
  }

  fn modify_options2<F: FnOnce(&mut Options2)>(&mut self, f: F) -> Result<(), Error<E>> {
    let mut options = self.read(Reg::Option2)?;
    f(&mut options);
    self.write(Reg::Option2, options)
  }
}

/// Per-key threshold register layout.
///
/// Bits 0..5 hold the sensitivity level, bit 6 is reserved, and bit 7
/// disables wake-up for the key when set (note the inverted polarity).
///
/// The reserved bit is held in a private field so a decoded byte encodes
/// back unchanged; the read-modify-write paths must not zero it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[packbits::pack(u8)]
pub struct KeyThreshold {
  #[bits(6)]
  pub level: u8,
  reserved: bool,
  pub wake_disabled: bool,
}

impl KeyThreshold {
  /// Largest representable sensitivity level.
  pub const LEVEL_MAX: u8 = 0x3F;
}

/// OPTION1 register layout. Reserved bits 1..7 round-trip untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[packbits::pack(u8)]
pub(crate) struct Options1 {
  #[bits(1)]
  pub irq_mode: IrqMode,
  #[bits(7)]
  reserved: u8,
}

/// OPTION2 register layout. Reserved bits 0..5 and 7 round-trip untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[packbits::pack(u8)]
pub(crate) struct Options2 {
  #[bits(6)]
  reserved_low: u8,
  pub low_power: bool,
  reserved_high: bool,
}

/// IRQ signalling behaviour, OPTION1 bit 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IrqMode {
  /// The line stays asserted while any key remains touched
  Level = 0b0,
  /// The line asserts once per key-state change
  OneShot = 0b1,
}

impl From<IrqMode> for u8 {
  fn from(v: IrqMode) -> Self {
    v as u8
  }
}

impl TryFrom<u8> for IrqMode {
  type Error = ();

  fn try_from(bits: u8) -> Result<Self, Self::Error> {
    match bits & 0b1 {
      0b0 => Ok(Self::Level),
      0b1 => Ok(Self::OneShot),
      _ => Err(()),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn threshold_decodes_inverted_wake_flag() {
    let threshold = KeyThreshold::try_from([0x80]).expect("decode");
    assert!(threshold.wake_disabled);
    assert_eq!(threshold.level, 0);

    let threshold = KeyThreshold::try_from([0x3F]).expect("decode");
    assert!(!threshold.wake_disabled);
    assert_eq!(threshold.level, KeyThreshold::LEVEL_MAX);
  }

  #[test]
  fn threshold_encodes_around_reserved_bit() {
    let threshold = KeyThreshold { level: 0x2A, reserved: false, wake_disabled: true };
    let [byte]: [u8; 1] = threshold.try_into().expect("encode");
    assert_eq!(byte, 0xAA);
  }

  #[test]
  fn reserved_bits_survive_decode_encode() {
    // Every register byte must round-trip bit-exact or the read-modify-write
    // paths would zero the reserved bits on write-back.
    for byte in [0x40u8, 0x7F, 0xC4, 0xFF] {
      let threshold = KeyThreshold::try_from([byte]).expect("decode");
      let encoded: [u8; 1] = threshold.try_into().expect("encode");
      assert_eq!(encoded, [byte]);
    }
    for byte in [0xAAu8, 0xFE, 0xBF] {
      let options = Options1::try_from([byte]).expect("decode");
      let encoded: [u8; 1] = options.try_into().expect("encode");
      assert_eq!(encoded, [byte]);

      let options = Options2::try_from([byte]).expect("decode");
      let encoded: [u8; 1] = options.try_into().expect("encode");
      assert_eq!(encoded, [byte]);
    }
  }

  #[test]
  fn irq_mode_round_trips_bit0() {
    assert_eq!(IrqMode::try_from(0b0), Ok(IrqMode::Level));
    assert_eq!(IrqMode::try_from(0b1), Ok(IrqMode::OneShot));
    assert_eq!(u8::from(IrqMode::OneShot), 1);
  }

  #[test]
  fn options_isolate_their_bit() {
    let options = Options2 { reserved_low: 0, low_power: true, reserved_high: false };
    let [byte]: [u8; 1] = options.try_into().expect("encode");
    assert_eq!(byte, 0x40);

    let options = Options1 { irq_mode: IrqMode::OneShot, reserved: 0 };
    let [byte]: [u8; 1] = options.try_into().expect("encode");
    assert_eq!(byte, 0x01);
  }
}
