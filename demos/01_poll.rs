//! Minimal polling loop example.
#![allow(unused)]
use bs8116a::Bs8116a;
use embedded_hal::{
  digital::InputPin,
  i2c::{I2c, SevenBitAddress},
};

#[allow(dead_code)]
fn run<I2C, IRQ, E>(i2c: I2C, irq: IRQ) -> Result<(), bs8116a::Error<E>>
where
  I2C: I2c<SevenBitAddress, Error = E>,
  IRQ: InputPin,
{
  let mut keypad = Bs8116a::new(i2c, irq);

  loop {
    if keypad.refresh()? {
      for key in keypad.just_pressed() {
        // a key went from released to touched since the last refresh
        let _ = key;
      }
      keypad.clear_interrupt()?;
    }
  }
}

fn main() {}
