use embedded_hal::digital::InputPin;
use embedded_hal::i2c::{I2c, SevenBitAddress};

use crate::defs::{Reg, KEY_COUNT};
use crate::{Bs8116a, Error};

impl<I, E, IRQ> Bs8116a<I, IRQ>
where
  I: I2c<SevenBitAddress, Error = E>,
  IRQ: InputPin,
{
  /// Poll the IRQ line and refresh the key snapshot if it is asserted.
  ///
  /// The line is active-low. While it reads high there is nothing pending and
  /// both snapshots are left untouched; `Ok(false)` is returned. When it
  /// reads low the previous snapshot is rotated out and both status bytes are
  /// block-read in one transaction, then `Ok(true)` is returned.
  ///
  /// Refreshing does not re-arm the IRQ line. Call
  /// [`Bs8116a::clear_interrupt`] once the snapshot has been consumed.
  pub fn refresh(&mut self) -> Result<bool, Error<E>> {
    if self.irq.is_high().map_err(|_| Error::Irq)? {
      return Ok(false);
    }

    let mut status = [0u8; 2];
    self.read_bytes(Reg::KeyStatus0, &mut status)?;

    self.previous = self.current;
    self.current = u16::from_le_bytes(status);
    Ok(true)
  }
}

impl<I, E, IRQ> Bs8116a<I, IRQ>
where
  I: I2c<SevenBitAddress, Error = E>,
{
  /// Re-arm the IRQ line by writing to the interrupt-clear register.
  ///
  /// The device accepts any value there. Reading the key status alone is not
  /// documented to release the line, so callers pair this with
  /// [`Bs8116a::refresh`] once per serviced event.
  pub fn clear_interrupt(&mut self) -> Result<(), Error<E>> {
    self.write_byte(Reg::InterruptClear, 0x00)
  }
}

impl<I, IRQ> Bs8116a<I, IRQ> {
  /// Keys touched as of the last refresh.
  pub const fn pressed(&self) -> KeyMask {
    KeyMask(self.current)
  }

  /// Keys that became touched between the two most recent refreshes.
  ///
  /// Edge detection is change-based, not time-based: a press and release
  /// that both happen between two refreshes produce no edge.
  pub const fn just_pressed(&self) -> KeyMask {
    KeyMask(self.current & !self.previous)
  }

  /// Raw current status bits, bit *i* = key *i*.
  pub const fn raw_mask(&self) -> u16 {
    self.current
  }
}

/// Owned set of key indices, bit *i* = key *i*.
///
/// Returned by the snapshot accessors and consumed by
/// [`Bs8116a::set_wake_keys`]. Iterating yields the indices of set bits in
/// ascending order.
#[derive(Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyMask(u16);

impl KeyMask {
  /// Every key on the part.
  pub const ALL: KeyMask = KeyMask(0xFFFF);
  /// No keys.
  pub const NONE: KeyMask = KeyMask(0);

  pub const fn from_bits(bits: u16) -> Self {
    Self(bits)
  }

  pub const fn bits(self) -> u16 {
    self.0
  }

  /// Returns `true` if the given key index is in the set. Indices 16 and up
  /// are never contained.
  pub const fn contains(self, key: u8) -> bool {
    (key as usize) < KEY_COUNT && self.0 & (1 << key) != 0
  }

  /// Number of keys in the set.
  pub const fn count(self) -> usize {
    self.0.count_ones() as usize
  }

  pub const fn is_empty(self) -> bool {
    self.0 == 0
  }

  /// Copy of the set with the given key added. Out-of-range indices are
  /// ignored.
  pub const fn with(self, key: u8) -> Self {
    if (key as usize) < KEY_COUNT {
      Self(self.0 | 1 << key)
    } else {
      self
    }
  }

  /// Copy of the set with the given key removed.
  pub const fn without(self, key: u8) -> Self {
    if (key as usize) < KEY_COUNT {
      Self(self.0 & !(1 << key))
    } else {
      self
    }
  }
}

impl From<u16> for KeyMask {
  fn from(bits: u16) -> Self {
    Self(bits)
  }
}

impl From<KeyMask> for u16 {
  fn from(mask: KeyMask) -> Self {
    mask.0
  }
}

impl core::fmt::Debug for KeyMask {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_set().entries(*self).finish()
  }
}

impl IntoIterator for KeyMask {
  type Item = u8;
  type IntoIter = Keys;

  fn into_iter(self) -> Keys {
    Keys(self.0)
  }
}

/// Iterator over the key indices of a [`KeyMask`], ascending.
#[derive(Clone, Debug)]
pub struct Keys(u16);

impl Iterator for Keys {
  type Item = u8;

  fn next(&mut self) -> Option<u8> {
    if self.0 == 0 {
      return None;
    }
    let key = self.0.trailing_zeros() as u8;
    self.0 &= self.0 - 1;
    Some(key)
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    let n = self.0.count_ones() as usize;
    (n, Some(n))
  }
}

impl ExactSizeIterator for Keys {}

impl core::iter::FusedIterator for Keys {}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn keys_iterate_ascending() {
    let mask = KeyMask::from_bits(0b1000_0000_0000_0101);
    let mut keys = mask.into_iter();
    assert_eq!(keys.len(), 3);
    assert_eq!(keys.next(), Some(0));
    assert_eq!(keys.next(), Some(2));
    assert_eq!(keys.next(), Some(15));
    assert_eq!(keys.next(), None);
    assert_eq!(keys.next(), None);
  }

  #[test]
  fn count_matches_popcount() {
    for bits in [0u16, 0b0011, 0x00FF, 0xFFFF, 0b1010_1010_1010_1010] {
      let mask = KeyMask::from_bits(bits);
      assert_eq!(mask.count(), bits.count_ones() as usize);
      assert_eq!(mask.into_iter().count(), mask.count());
    }
  }

  #[test]
  fn contains_rejects_out_of_range() {
    let mask = KeyMask::ALL;
    assert!(mask.contains(0));
    assert!(mask.contains(15));
    assert!(!mask.contains(16));
    assert!(!mask.contains(u8::MAX));
  }

  #[test]
  fn builders_ignore_out_of_range() {
    let mask = KeyMask::NONE.with(3).with(16).with(200);
    assert_eq!(mask.bits(), 0b1000);
    assert_eq!(mask.without(3).without(42), KeyMask::NONE);
  }

  #[test]
  fn rising_edges_only() {
    // current 0b0011, previous 0b0001 -> key 1 is the only new press
    let current = KeyMask::from_bits(0b0011);
    let previous = KeyMask::from_bits(0b0001);
    let edges = KeyMask::from_bits(current.bits() & !previous.bits());
    let mut keys = edges.into_iter();
    assert_eq!(keys.next(), Some(1));
    assert_eq!(keys.next(), None);
  }
}
