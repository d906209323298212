//! Awaitable refresh on top of `embedded-hal-async`, available when the
//! `async` Cargo feature is enabled.

use embedded_hal_async::digital::Wait;
use embedded_hal_async::i2c::{I2c, SevenBitAddress};

use crate::defs::{Reg, I2C_ADDR};
use crate::{Bs8116a, Error, KeyMask};

impl<I, E, IRQ> Bs8116a<I, IRQ>
where
  I: I2c<SevenBitAddress, Error = E>,
  IRQ: Wait,
{
  /// Wait for the IRQ line to assert, then refresh the key snapshot.
  ///
  /// Resolves with the keys that became pressed with this update, which may
  /// be empty when the event was a release. Snapshot bookkeeping matches
  /// [`Bs8116a::refresh`], and the IRQ line is likewise left for
  /// [`Bs8116a::clear_interrupt`] to re-arm.
  pub async fn wait_for_keys(&mut self) -> Result<KeyMask, Error<E>> {
    self.irq.wait_for_low().await.map_err(|_| Error::Irq)?;

    let mut status = [0u8; 2];
    self
      .i2c
      .write_read(I2C_ADDR, &[Reg::KeyStatus0 as u8], &mut status)
      .await
      .map_err(Error::I2c)?;

    self.previous = self.current;
    self.current = u16::from_le_bytes(status);
    Ok(self.just_pressed())
  }
}
