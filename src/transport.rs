//! Register-level access to the device.
//!
//! The driver never talks to the bus directly. It reads and writes runs of
//! consecutive registers through [`RegisterTransport`], so the register model
//! can be exercised against any backing store.

use embedded_hal::i2c::I2c;

/// Default bus address of the PCF8523.
pub const DEFAULT_ADDRESS: u8 = 0x68;

/// Largest payload the driver writes in one transaction (the calendar block).
pub const MAX_WRITE_LEN: usize = 7;

/// Read and write access to a block of consecutive device registers.
///
/// Implementations should complete each call as a single bus transaction
/// and report failures unchanged. The driver performs no retries.
pub trait RegisterTransport {
    /// Bus error type.
    type Error;

    /// Fills `buffer` with the registers starting at `register`.
    ///
    /// # Errors
    ///
    /// Returns the bus error if the transaction fails.
    fn read(&mut self, register: u8, buffer: &mut [u8]) -> Result<(), Self::Error>;

    /// Writes `data` to the registers starting at `register`.
    ///
    /// # Errors
    ///
    /// Returns the bus error if the transaction fails.
    fn write(&mut self, register: u8, data: &[u8]) -> Result<(), Self::Error>;
}

/// [`RegisterTransport`] over an `embedded-hal` I2C bus.
pub struct I2cTransport<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C: I2c> I2cTransport<I2C> {
    /// Creates a transport for the device at `address` on `i2c`.
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// Returns the bus address this transport talks to.
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Releases the underlying bus.
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C: I2c> RegisterTransport for I2cTransport<I2C> {
    type Error = I2C::Error;

    fn read(&mut self, register: u8, buffer: &mut [u8]) -> Result<(), Self::Error> {
        self.i2c.write_read(self.address, &[register], buffer)
    }

    /// Payloads longer than [`MAX_WRITE_LEN`] are sent as several
    /// transactions, each addressed to the first register it covers. The
    /// driver never writes more than the seven calendar registers at once.
    fn write(&mut self, register: u8, data: &[u8]) -> Result<(), Self::Error> {
        if data.is_empty() {
            return self.i2c.write(self.address, &[register]);
        }
        let mut start = register;
        for chunk in data.chunks(MAX_WRITE_LEN) {
            let mut frame = [0u8; MAX_WRITE_LEN + 1];
            let len = chunk.len() + 1;
            frame[0] = start;
            frame[1..len].copy_from_slice(chunk);
            self.i2c.write(self.address, &frame[..len])?;
            start = start.wrapping_add(MAX_WRITE_LEN as u8);
        }
        Ok(())
    }
}
