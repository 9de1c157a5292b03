//! # PCF8523 Real-Time Clock Driver
//!
//! A platform-agnostic driver for the NXP PCF8523 battery-backed real-time
//! clock, built on the `embedded-hal` 1.0 I2C traits.
//!
//! ## Features
//!
//! - Read and write the calendar time in one bus transaction
//! - Alarm configuration driven by a recurrence [`FrequencyHint`]
//! - Clock-halt control and clock-out frequency selection
//! - Power-lost, alarm-fired and battery status flags
//! - Battery switch-over / power management configuration
//! - Countdown timers A and B and the frequency offset register
//! - Optional logging through `log` or `defmt`
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pcf8523::{AlarmSpec, CalendarDateTime, FrequencyHint, PCF8523};
//!
//! let mut rtc = PCF8523::new(i2c);
//! rtc.configure(&Default::default())?;
//!
//! rtc.write_datetime(&CalendarDateTime::new(2017, 10, 29, 0, 15, 14, 15))?;
//! let now = rtc.read_datetime()?;
//!
//! // Fire every day at 09:30
//! rtc.write_alarm(&AlarmSpec::new().with_hour(9).with_minute(30), FrequencyHint::Daily)?;
//! if rtc.alarm_status()? {
//!     rtc.clear_alarm_status()?;
//! }
//! ```
//!
//! ## Century handling
//!
//! The chip stores only a two digit year. The driver adds a configurable
//! base year (2000 by default) and keeps its own century flag in bit 7 of the
//! months register, so the supported range is `base_year ..= base_year + 199`.
//! That bit is listed as unused in the datasheet and the chip is not
//! documented to retain it; only the first century is backed by hardware.
//!
//! ## Concurrency
//!
//! Every operation is a blocking sequence of register reads and writes. The
//! driver caches no chip state and performs no retries; bus errors are
//! returned unchanged as [`Error::Communication`].

#![no_std]

#[macro_use]
mod fmt;

mod alarm;
mod bcd;
mod calibration;
mod datetime;
mod registers;
mod timer;
mod transport;

use embedded_hal::i2c::I2c;

pub use alarm::{AlarmComponent, AlarmSpec, FrequencyHint, UnsupportedFrequency};
pub use bcd::{decode_bcd, encode_bcd, get_bit, set_bit, BcdError};
pub use calibration::Calibration;
pub use datetime::{CalendarDateTime, Field, FieldError};
pub use registers::*;
pub use transport::{I2cTransport, RegisterTransport, DEFAULT_ADDRESS, MAX_WRITE_LEN};

use alarm::PCF8523Alarm;
use datetime::PCF8523DateTime;

/// Configuration for the PCF8523 device.
///
/// Applied by [`PCF8523::configure`] with read-modify-writes, so bits not
/// named here keep their current value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// Battery switch-over and low-battery detection mode
    pub power_management: PowerManagement,
    /// Crystal load capacitance
    pub oscillator_capacitance: OscillatorCapacitance,
    /// Frequency on the CLKOUT pin
    pub clockout_frequency: ClockoutFrequency,
    /// Drive the interrupt pin when the alarm fires
    pub alarm_interrupt: bool,
    /// Drive the interrupt pin on battery switch-over
    pub battery_switchover_interrupt: bool,
}

impl Default for Config {
    /// Standard battery switch-over with low-battery detection, 7 pF,
    /// 32.768 kHz clock-out and the battery switch-over interrupt enabled.
    fn default() -> Self {
        Self {
            power_management: PowerManagement::StandardWithLowDetection,
            oscillator_capacitance: OscillatorCapacitance::Pf7,
            clockout_frequency: ClockoutFrequency::Hz32768,
            alarm_interrupt: false,
            battery_switchover_interrupt: true,
        }
    }
}

/// Status flags set by the hardware.
///
/// Every flag can be acknowledged (cleared to false) by software except
/// [`StatusFlag::BatteryLow`] and [`StatusFlag::WatchdogA`], which only the
/// hardware clears.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StatusFlag {
    /// Oscillator stopped (OS); the held time may be invalid
    PowerLost,
    /// Alarm condition matched (AF)
    AlarmFired,
    /// Battery voltage below threshold (BLF), read-only
    BatteryLow,
    /// Supply switched to battery (BSF)
    BatterySwitchover,
    /// Countdown timer A elapsed (CTAF)
    CountdownA,
    /// Countdown timer B elapsed (CTBF)
    CountdownB,
    /// Watchdog timer A elapsed (WTAF), read-only; cleared by reading Control_2
    WatchdogA,
    /// Second interrupt (SF)
    Second,
}

impl StatusFlag {
    /// Register and bit position holding the flag.
    const fn location(self) -> (RegAddr, u8) {
        match self {
            StatusFlag::PowerLost => (RegAddr::Seconds, Seconds::OSCILLATOR_STOPPED),
            StatusFlag::AlarmFired => (RegAddr::Control2, Control2::ALARM_FLAG),
            StatusFlag::BatteryLow => (RegAddr::Control3, Control3::BATTERY_LOW_FLAG),
            StatusFlag::BatterySwitchover => (RegAddr::Control3, Control3::BATTERY_SWITCHOVER_FLAG),
            StatusFlag::CountdownA => (RegAddr::Control2, Control2::COUNTDOWN_A_FLAG),
            StatusFlag::CountdownB => (RegAddr::Control2, Control2::COUNTDOWN_B_FLAG),
            StatusFlag::WatchdogA => (RegAddr::Control2, Control2::WATCHDOG_A_FLAG),
            StatusFlag::Second => (RegAddr::Control2, Control2::SECOND_FLAG),
        }
    }

    /// Returns false for flags software cannot clear.
    pub const fn is_clearable(self) -> bool {
        !matches!(self, StatusFlag::BatteryLow | StatusFlag::WatchdogA)
    }
}

/// Errors reported by the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// The register transport failed
    Communication(E),
    /// A caller-supplied value is out of range; nothing was written
    InvalidFieldValue(Field),
    /// A register read from the device holds an impossible value
    InvalidRegisterValue(u8),
    /// The alarm frequency is not supported by the device
    UnsupportedFrequency,
    /// The bit is set by hardware only and cannot be written
    ReadOnlyViolation,
}

impl<E> From<FieldError> for Error<E> {
    fn from(e: FieldError) -> Self {
        match e {
            FieldError::OutOfRange(field) => Error::InvalidFieldValue(field),
            FieldError::InvalidRegisterValue(raw) => Error::InvalidRegisterValue(raw),
        }
    }
}

/// Both BCD failures name the offending byte, reported as a register value.
impl<E> From<BcdError> for Error<E> {
    fn from(e: BcdError) -> Self {
        match e {
            BcdError::InvalidFieldValue(raw) | BcdError::InvalidEncoding(raw) => {
                Error::InvalidRegisterValue(raw)
            }
        }
    }
}

impl<E> From<UnsupportedFrequency> for Error<E> {
    fn from(_: UnsupportedFrequency) -> Self {
        Error::UnsupportedFrequency
    }
}

/// PCF8523 Real-Time Clock driver.
pub struct PCF8523<T> {
    transport: T,
    base_year: u16,
}

/// Base year used unless [`PCF8523::with_base_year`] selects another.
pub const DEFAULT_BASE_YEAR: u16 = 2000;

impl<I2C: I2c> PCF8523<I2cTransport<I2C>> {
    /// Creates a driver for the device at the default address `0x68`.
    pub fn new(i2c: I2C) -> Self {
        Self::with_address(i2c, DEFAULT_ADDRESS)
    }

    /// Creates a driver for the device at `address`.
    pub fn with_address(i2c: I2C, address: u8) -> Self {
        Self::with_transport(I2cTransport::new(i2c, address))
    }
}

impl<T: RegisterTransport> PCF8523<T> {
    /// Creates a driver over any register transport.
    pub fn with_transport(transport: T) -> Self {
        Self {
            transport,
            base_year: DEFAULT_BASE_YEAR,
        }
    }

    /// Selects the first year of the two centuries the driver can represent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidFieldValue`] with [`Field::Year`] if `base_year`
    /// is not a multiple of 4 (the chip treats every year register value
    /// divisible by 4 as a leap year) or leaves no room for 200 years.
    pub fn with_base_year(mut self, base_year: u16) -> Result<Self, Error<T::Error>> {
        if base_year % 4 != 0 || base_year > u16::MAX - 199 {
            return Err(Error::InvalidFieldValue(Field::Year));
        }
        self.base_year = base_year;
        Ok(self)
    }

    /// Returns the configured base year.
    pub fn base_year(&self) -> u16 {
        self.base_year
    }

    /// Releases the underlying transport.
    pub fn release(self) -> T {
        self.transport
    }

    fn read_block(&mut self, start: RegAddr, buffer: &mut [u8]) -> Result<(), Error<T::Error>> {
        self.transport
            .read(start as u8, buffer)
            .map_err(Error::Communication)
    }

    fn write_block(&mut self, start: RegAddr, data: &[u8]) -> Result<(), Error<T::Error>> {
        self.transport
            .write(start as u8, data)
            .map_err(Error::Communication)
    }

    fn read_register(&mut self, register: RegAddr) -> Result<u8, Error<T::Error>> {
        let mut data = [0];
        self.read_block(register, &mut data)?;
        Ok(data[0])
    }

    fn write_register(&mut self, register: RegAddr, value: u8) -> Result<(), Error<T::Error>> {
        self.write_block(register, &[value])
    }

    /// Read-modify-write of one register. Every writer of a shared register
    /// goes through here so unrelated bits are written back unchanged.
    ///
    /// `f` sees the status flags of the register as 1 and only a flag it
    /// clears is written as 0. The chip ignores a 1 written to a flag, so a
    /// flag raised between the read and the write survives.
    fn update_register<F>(&mut self, register: RegAddr, f: F) -> Result<(), Error<T::Error>>
    where
        F: FnOnce(u8) -> u8,
    {
        let before = self.read_register(register)?;
        let value = f(before | register.flag_mask());
        debug!("{:?}: {} -> {}", register, before, value);
        self.write_register(register, value)
    }

    fn update_bit(&mut self, register: RegAddr, pos: u8, value: bool) -> Result<(), Error<T::Error>> {
        self.update_register(register, |raw| set_bit(raw, pos, value))
    }

    fn read_bit(&mut self, register: RegAddr, pos: u8) -> Result<bool, Error<T::Error>> {
        Ok(get_bit(self.read_register(register)?, pos))
    }

    /// Configures the device according to the provided configuration and
    /// selects 24 hour mode.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Communication`] if a bus transaction fails.
    pub fn configure(&mut self, config: &Config) -> Result<(), Error<T::Error>> {
        debug!("configure: {:?}", config);
        self.update_control1(|c| {
            c.set_capacitance(config.oscillator_capacitance);
            c.set_twelve_hour(false);
            c.set_alarm_interrupt(config.alarm_interrupt);
        })?;
        self.update_control3(|c| {
            c.set_power_management_bits(config.power_management.into());
            c.set_battery_switchover_interrupt(config.battery_switchover_interrupt);
        })?;
        self.update_timer_clkout_control(|c| {
            c.set_clockout_frequency(config.clockout_frequency);
        })?;
        Ok(())
    }

    /// Triggers a software reset. All registers return to their reset values.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Communication`] if the bus transaction fails.
    pub fn reset(&mut self) -> Result<(), Error<T::Error>> {
        self.write_register(RegAddr::Control1, Control1::RESET_COMMAND)
    }

    /// Reads the current date and time in one seven-register transaction.
    ///
    /// An oscillator stop observed in the seconds register is logged and
    /// reported by [`PCF8523::power_lost`]; it never changes the value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Communication`] on bus failure and
    /// [`Error::InvalidRegisterValue`] if a register does not hold a valid value.
    pub fn read_datetime(&mut self) -> Result<CalendarDateTime, Error<T::Error>> {
        let mut data = [0; 7];
        self.read_block(RegAddr::Seconds, &mut data)?;
        let raw = PCF8523DateTime::from(data);
        if raw.oscillator_stopped() {
            warn!("oscillator stop flag set, time may be invalid");
        }
        Ok(raw.into_datetime(self.base_year)?)
    }

    /// Writes the date and time in one seven-register transaction.
    ///
    /// Standard battery switch-over with low-battery detection is selected
    /// first, so the written time survives a loss of main power even if
    /// [`PCF8523::configure`] was never called (the chip powers up with
    /// switch-over disabled). The oscillator stop flag is written as clear,
    /// which also acknowledges a power loss.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidFieldValue`] before touching the bus if any
    /// field is out of range, or [`Error::Communication`] on bus failure.
    pub fn write_datetime(&mut self, datetime: &CalendarDateTime) -> Result<(), Error<T::Error>> {
        let raw = PCF8523DateTime::from_datetime(datetime, self.base_year)?;
        let data: [u8; 7] = (&raw).into();
        self.update_control3(|c| {
            c.set_power_management_bits(PowerManagement::StandardWithLowDetection.into());
        })?;
        self.write_block(RegAddr::Seconds, &data)
    }

    /// Reads the alarm registers. Fields whose enable bit is set are wildcards
    /// and reported as `None`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Communication`] on bus failure and
    /// [`Error::InvalidRegisterValue`] for an enabled field with an invalid value.
    pub fn read_alarm(&mut self) -> Result<AlarmSpec, Error<T::Error>> {
        let mut data = [0; 4];
        self.read_block(RegAddr::MinuteAlarm, &mut data)?;
        Ok(PCF8523Alarm::from(data).to_spec()?)
    }

    /// Programs the alarm. The fields matched are chosen by `frequency`; all
    /// others become wildcards. The four registers are written in one
    /// transaction.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidFieldValue`] before touching the bus if a value
    /// in `spec` is out of range, or [`Error::Communication`] on bus failure.
    pub fn write_alarm(
        &mut self,
        spec: &AlarmSpec,
        frequency: FrequencyHint,
    ) -> Result<(), Error<T::Error>> {
        let alarm = PCF8523Alarm::from_spec(spec, frequency)?;
        let data: [u8; 4] = (&alarm).into();
        self.write_block(RegAddr::MinuteAlarm, &data)
    }

    /// Reads a status flag.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Communication`] on bus failure.
    pub fn flag(&mut self, flag: StatusFlag) -> Result<bool, Error<T::Error>> {
        let (register, pos) = flag.location();
        self.read_bit(register, pos)
    }

    /// Acknowledges a status flag by writing it back as false. The write is
    /// issued even if the flag already reads false.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ReadOnlyViolation`] without touching the bus for
    /// [`StatusFlag::BatteryLow`] and [`StatusFlag::WatchdogA`], or
    /// [`Error::Communication`] on bus failure.
    pub fn clear_flag(&mut self, flag: StatusFlag) -> Result<(), Error<T::Error>> {
        if !flag.is_clearable() {
            error!("{:?} is read-only", flag);
            return Err(Error::ReadOnlyViolation);
        }
        let (register, pos) = flag.location();
        self.update_bit(register, pos, false)
    }

    /// Returns true if the alarm has fired since it was last acknowledged.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Communication`] on bus failure.
    pub fn alarm_status(&mut self) -> Result<bool, Error<T::Error>> {
        self.flag(StatusFlag::AlarmFired)
    }

    /// Acknowledges the alarm. This does not disarm it; only
    /// [`PCF8523::write_alarm`] changes what the alarm matches.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Communication`] on bus failure.
    pub fn clear_alarm_status(&mut self) -> Result<(), Error<T::Error>> {
        self.clear_flag(StatusFlag::AlarmFired)
    }

    /// Returns true if the alarm drives the interrupt pin.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Communication`] on bus failure.
    pub fn alarm_interrupt(&mut self) -> Result<bool, Error<T::Error>> {
        self.read_bit(RegAddr::Control1, Control1::ALARM_INTERRUPT)
    }

    /// Enables or disables the alarm interrupt output.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Communication`] on bus failure.
    pub fn set_alarm_interrupt(&mut self, enable: bool) -> Result<(), Error<T::Error>> {
        self.update_bit(RegAddr::Control1, Control1::ALARM_INTERRUPT, enable)
    }

    /// Returns true if the clock is halted.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Communication`] on bus failure.
    pub fn halt(&mut self) -> Result<bool, Error<T::Error>> {
        self.read_bit(RegAddr::Control1, Control1::STOP)
    }

    /// Halts or resumes the clock. While halted the time registers hold their
    /// value; clearing the halt resumes counting from there.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Communication`] on bus failure.
    pub fn set_halt(&mut self, halt: bool) -> Result<(), Error<T::Error>> {
        self.update_bit(RegAddr::Control1, Control1::STOP, halt)
    }

    /// Returns the CLKOUT pin frequency.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Communication`] on bus failure.
    pub fn clockout_frequency(&mut self) -> Result<ClockoutFrequency, Error<T::Error>> {
        Ok(self.timer_clkout_control()?.clockout_frequency())
    }

    /// Selects the CLKOUT pin frequency, preserving the timer bits that share
    /// the register.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Communication`] on bus failure.
    pub fn set_clockout_frequency(
        &mut self,
        frequency: ClockoutFrequency,
    ) -> Result<(), Error<T::Error>> {
        self.update_timer_clkout_control(|c| c.set_clockout_frequency(frequency))?;
        Ok(())
    }

    /// Returns true if the oscillator stopped since the flag was last cleared.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Communication`] on bus failure.
    pub fn power_lost(&mut self) -> Result<bool, Error<T::Error>> {
        self.flag(StatusFlag::PowerLost)
    }

    /// Acknowledges a power loss. The seconds value sharing the register is
    /// preserved.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Communication`] on bus failure.
    pub fn clear_power_lost(&mut self) -> Result<(), Error<T::Error>> {
        self.clear_flag(StatusFlag::PowerLost)
    }

    /// Returns true if the backup battery is low.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Communication`] on bus failure.
    pub fn battery_low(&mut self) -> Result<bool, Error<T::Error>> {
        self.flag(StatusFlag::BatteryLow)
    }

    /// The battery-low flag is cleared only by the hardware.
    ///
    /// # Errors
    ///
    /// Always returns [`Error::ReadOnlyViolation`] and never touches the bus.
    pub fn set_battery_low(&mut self, _value: bool) -> Result<(), Error<T::Error>> {
        self.clear_flag(StatusFlag::BatteryLow)
    }

    /// Returns true if the supply switched over to the battery.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Communication`] on bus failure.
    pub fn battery_switchover(&mut self) -> Result<bool, Error<T::Error>> {
        self.flag(StatusFlag::BatterySwitchover)
    }

    /// Acknowledges a battery switch-over.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Communication`] on bus failure.
    pub fn clear_battery_switchover(&mut self) -> Result<(), Error<T::Error>> {
        self.clear_flag(StatusFlag::BatterySwitchover)
    }

    /// Enables or disables the battery switch-over interrupt.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Communication`] on bus failure.
    pub fn set_battery_switchover_interrupt(&mut self, enable: bool) -> Result<(), Error<T::Error>> {
        self.update_bit(RegAddr::Control3, Control3::BATTERY_SWITCHOVER_INTERRUPT, enable)
    }

    /// Enables or disables the battery-low interrupt.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Communication`] on bus failure.
    pub fn set_battery_low_interrupt(&mut self, enable: bool) -> Result<(), Error<T::Error>> {
        self.update_bit(RegAddr::Control3, Control3::BATTERY_LOW_INTERRUPT, enable)
    }

    /// Returns the power management mode.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Communication`] on bus failure and
    /// [`Error::InvalidRegisterValue`] if the PM bits hold the reserved `0b110`.
    pub fn power_management(&mut self) -> Result<PowerManagement, Error<T::Error>> {
        let control = self.control3()?;
        PowerManagement::try_from(control.power_management_bits())
            .map_err(|_| Error::InvalidRegisterValue(control.into()))
    }

    /// Selects the power management mode, preserving the battery flags and
    /// interrupt enables.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Communication`] on bus failure.
    pub fn set_power_management(&mut self, mode: PowerManagement) -> Result<(), Error<T::Error>> {
        self.update_control3(|c| c.set_power_management_bits(mode.into()))?;
        Ok(())
    }

    /// Returns the crystal load capacitance selection.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Communication`] on bus failure.
    pub fn oscillator_capacitance(&mut self) -> Result<OscillatorCapacitance, Error<T::Error>> {
        Ok(self.control1()?.capacitance())
    }

    /// Selects the crystal load capacitance.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Communication`] on bus failure.
    pub fn set_oscillator_capacitance(
        &mut self,
        capacitance: OscillatorCapacitance,
    ) -> Result<(), Error<T::Error>> {
        self.update_control1(|c| c.set_capacitance(capacitance))?;
        Ok(())
    }
}

// Register access implementations
macro_rules! impl_register_access {
    ($(($name:ident, $regaddr:expr, $typ:ty)),+) => {
        impl<T: RegisterTransport> PCF8523<T> {
            $(
                paste::paste! {
                    #[doc = concat!("Gets the value of the ", stringify!($name), " register.")]
                    #[doc = "\n\n# Errors"]
                    #[doc = "\n\nReturns [`Error::Communication`] on bus failure."]
                    pub fn $name(&mut self) -> Result<$typ, Error<T::Error>> {
                        Ok(<$typ>::from(self.read_register($regaddr)?))
                    }

                    #[doc = concat!("Sets the value of the ", stringify!($name), " register.")]
                    #[doc = "\n\n# Errors"]
                    #[doc = "\n\nReturns [`Error::Communication`] on bus failure."]
                    pub fn [<set_ $name>](&mut self, value: $typ) -> Result<(), Error<T::Error>> {
                        self.write_register($regaddr, value.into())
                    }
                }
            )+
        }
    }
}

// Typed read-modify-write through `update_register`
macro_rules! impl_register_update {
    ($(($name:ident, $regaddr:expr, $typ:ty)),+) => {
        impl<T: RegisterTransport> PCF8523<T> {
            $(
                paste::paste! {
                    fn [<update_ $name>]<F>(&mut self, f: F) -> Result<(), Error<T::Error>>
                    where
                        F: FnOnce(&mut $typ),
                    {
                        self.update_register($regaddr, |raw| {
                            let mut value = <$typ>::from(raw);
                            f(&mut value);
                            value.into()
                        })
                    }
                }
            )+
        }
    }
}

impl_register_access!(
    (control1, RegAddr::Control1, Control1),
    (control2, RegAddr::Control2, Control2),
    (control3, RegAddr::Control3, Control3),
    (seconds, RegAddr::Seconds, Seconds),
    (offset, RegAddr::Offset, Offset),
    (timer_clkout_control, RegAddr::TimerClkoutControl, TimerClkoutControl),
    (timer_a_freq_control, RegAddr::TimerAFreqControl, TimerAFreqControl),
    (timer_b_freq_control, RegAddr::TimerBFreqControl, TimerBFreqControl)
);

impl_register_update!(
    (control1, RegAddr::Control1, Control1),
    (control3, RegAddr::Control3, Control3),
    (timer_clkout_control, RegAddr::TimerClkoutControl, TimerClkoutControl),
    (timer_a_freq_control, RegAddr::TimerAFreqControl, TimerAFreqControl),
    (timer_b_freq_control, RegAddr::TimerBFreqControl, TimerBFreqControl)
);
