//! Frequency offset correction.

use crate::{Error, Field, Offset, OffsetMode, PCF8523, RegisterTransport};
use core::ops::RangeInclusive;

const OFFSET_RANGE: RangeInclusive<i8> = -64..=63;

/// Contents of the offset register.
///
/// Each step of `offset` adds or removes clock pulses once per correction
/// interval (4.340 ppm every two hours, or 4.069 ppm every minute).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Calibration {
    /// Correction interval
    pub mode: OffsetMode,
    /// Signed correction, -64 to +63
    pub offset: i8,
}

impl Default for Calibration {
    fn default() -> Self {
        Self {
            mode: OffsetMode::EveryTwoHours,
            offset: 0,
        }
    }
}

impl<T: RegisterTransport> PCF8523<T> {
    /// Reads the frequency offset correction.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Communication`] on bus failure.
    pub fn calibration(&mut self) -> Result<Calibration, Error<T::Error>> {
        let reg = self.offset()?;
        Ok(Calibration {
            mode: reg.mode(),
            offset: reg.offset(),
        })
    }

    /// Writes the frequency offset correction.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidFieldValue`] with [`Field::Offset`] before
    /// touching the bus if the offset does not fit in seven bits, or
    /// [`Error::Communication`] on bus failure.
    pub fn set_calibration(&mut self, calibration: &Calibration) -> Result<(), Error<T::Error>> {
        if !OFFSET_RANGE.contains(&calibration.offset) {
            return Err(Error::InvalidFieldValue(Field::Offset));
        }
        let mut reg = Offset::default();
        reg.set_mode(calibration.mode);
        reg.set_offset(calibration.offset);
        self.set_offset(reg)
    }
}

#[cfg(test)]
mod tests {
    extern crate alloc;
    use crate::tests::RegisterStore;
    use crate::*;
    use alloc::vec;
    use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTrans};

    #[test]
    fn test_negative_offset_encoding() {
        let mut dev = PCF8523::new(I2cMock::new(&[
            I2cTrans::write(0x68, vec![RegAddr::Offset as u8, 0xFE]),
            I2cTrans::write_read(0x68, vec![RegAddr::Offset as u8], vec![0x40]),
        ]));
        dev.set_calibration(&Calibration {
            mode: OffsetMode::EveryMinute,
            offset: -2,
        })
        .unwrap();
        assert_eq!(
            dev.calibration().unwrap(),
            Calibration {
                mode: OffsetMode::EveryTwoHours,
                offset: -64,
            }
        );
        dev.release().release().done();
    }

    #[test]
    fn test_calibration_roundtrip() {
        let mut dev = PCF8523::with_transport(RegisterStore::new());
        for offset in [-64, -1, 0, 1, 63] {
            for mode in [OffsetMode::EveryTwoHours, OffsetMode::EveryMinute] {
                let calibration = Calibration { mode, offset };
                dev.set_calibration(&calibration).unwrap();
                assert_eq!(dev.calibration().unwrap(), calibration);
            }
        }
    }

    #[test]
    fn test_out_of_range_offset_rejected() {
        let mut dev = PCF8523::with_transport(RegisterStore::new());
        for offset in [-128, -65, 64, 127] {
            let calibration = Calibration {
                offset,
                ..Calibration::default()
            };
            assert_eq!(
                dev.set_calibration(&calibration),
                Err(Error::InvalidFieldValue(Field::Offset))
            );
        }
        assert_eq!(dev.release().writes, 0);
    }
}
