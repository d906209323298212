use embedded_hal::i2c::{I2c, SevenBitAddress};

use crate::defs::{Reg, I2C_ADDR};
use crate::{Bs8116a, Error};

impl<I, E, IRQ> Bs8116a<I, IRQ>
where
  I: I2c<SevenBitAddress, Error = E>,
{
  // Typed helpers
  pub(crate) fn read<T: TryFrom<[u8; 1]>>(&mut self, reg: Reg) -> Result<T, Error<E>> {
    let mut b = [0u8; 1];
    self.read_bytes(reg, &mut b)?;
    T::try_from(b).map_err(|_| Error::Decode)
  }

  pub(crate) fn write<T: TryInto<[u8; 1]>>(&mut self, reg: Reg, v: T) -> Result<(), Error<E>> {
    let [b] = v.try_into().map_err(|_| Error::Decode)?;
    self.write_byte(reg, b)
  }

  /// The device treats the address write as a pointer-set operation consumed
  /// by the read that follows, so reads are always a write-then-read pair.
  pub(crate) fn read_bytes(&mut self, reg: Reg, buf: &mut [u8]) -> Result<(), Error<E>> {
    let addr = [reg as u8];
    self.i2c.write_read(I2C_ADDR, &addr, buf).map_err(Error::I2c)
  }

  pub(crate) fn write_byte(&mut self, reg: Reg, value: u8) -> Result<(), Error<E>> {
    self.i2c.write(I2C_ADDR, &[reg.into(), value]).map_err(Error::I2c)
  }
}
