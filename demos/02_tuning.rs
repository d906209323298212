//! Sensitivity and wake-up configuration example.
#![allow(unused)]
use bs8116a::{Bs8116a, IrqMode, KeyMask};
use embedded_hal::{
  digital::InputPin,
  i2c::{I2c, SevenBitAddress},
};

#[allow(dead_code)]
fn configure<I2C, IRQ, E>(i2c: I2C, irq: IRQ) -> Result<(), bs8116a::Error<E>>
where
  I2C: I2c<SevenBitAddress, Error = E>,
  IRQ: InputPin,
{
  let mut keypad = Bs8116a::new(i2c, irq);

  // Dampen the corner keys, which sit closest to the enclosure seam.
  for key in [0, 3, 12, 15] {
    keypad.set_sensitivity(key, 0x28)?;
  }

  // Only the bottom row may wake the device from low-power scanning.
  keypad.set_wake_keys(KeyMask::NONE.with(12).with(13).with(14).with(15))?;
  keypad.set_irq_mode(IrqMode::OneShot)?;
  keypad.set_low_power(true)?;

  Ok(())
}

fn main() {}
