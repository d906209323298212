/******************************************************************************
 * Refer to BS8116A-3 datasheet for more information, available here:         *
 * - https://www.holtek.com/productdetail/-/vg/BS8116A-3                      *
 * ========================================================================== *
 *                      BS8116A-3 - Registers & Memory Map                    *
*******************************************************************************/

pub(crate) const I2C_ADDR: u8 = 0x50;

/// Number of touch keys on the controller.
pub const KEY_COUNT: usize = 16;

#[allow(dead_code)]
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Reg {
  // Key status (0x08..0x09), block-readable as two bytes from 0x08
  KeyStatus0 = 0x08,
  KeyStatus1 = 0x09,
  // Writing any value re-arms the IRQ line
  InterruptClear = 0x0A,

  // Global option bytes
  Option1 = 0xB0,
  Option2 = 0xB4,

  // Per-key threshold bytes (0xB5..0xC4)
  Key1Threshold = 0xB5,
  Key2Threshold = 0xB6,
  Key3Threshold = 0xB7,
  Key4Threshold = 0xB8,
  Key5Threshold = 0xB9,
  Key6Threshold = 0xBA,
  Key7Threshold = 0xBB,
  Key8Threshold = 0xBC,
  Key9Threshold = 0xBD,
  Key10Threshold = 0xBE,
  Key11Threshold = 0xBF,
  Key12Threshold = 0xC0,
  Key13Threshold = 0xC1,
  Key14Threshold = 0xC2,
  Key15Threshold = 0xC3,
  Key16Threshold = 0xC4,
}

impl Reg {
  /// Threshold register for a zero-based key index. Keys 16 and up have no
  /// register on this part.
  pub(crate) fn key_threshold(key: u8) -> Option<Reg> {
    match key {
      0 => Some(Reg::Key1Threshold),
      1 => Some(Reg::Key2Threshold),
      2 => Some(Reg::Key3Threshold),
      3 => Some(Reg::Key4Threshold),
      4 => Some(Reg::Key5Threshold),
      5 => Some(Reg::Key6Threshold),
      6 => Some(Reg::Key7Threshold),
      7 => Some(Reg::Key8Threshold),
      8 => Some(Reg::Key9Threshold),
      9 => Some(Reg::Key10Threshold),
      10 => Some(Reg::Key11Threshold),
      11 => Some(Reg::Key12Threshold),
      12 => Some(Reg::Key13Threshold),
      13 => Some(Reg::Key14Threshold),
      14 => Some(Reg::Key15Threshold),
      15 => Some(Reg::Key16Threshold),
      _ => None,
    }
  }
}

impl From<Reg> for u8 {
  #[inline]
  fn from(r: Reg) -> Self {
    r as u8
  }
}
