//! Register definitions and bitfield structures for the PCF8523 RTC.
//!
//! This module contains all register addresses, bitfield definitions, and
//! related types for interacting with the PCF8523 Real-Time Clock registers.

use bitfield::bitfield;

/// Register addresses for the PCF8523 RTC.
#[allow(unused)]
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RegAddr {
    /// Control_1: oscillator, stop, 12/24h and interrupt enables
    Control1 = 0x00,
    /// Control_2: alarm/timer flags and timer interrupt enables
    Control2 = 0x01,
    /// Control_3: power management and battery flags
    Control3 = 0x02,
    /// Seconds register (0-59) with oscillator stop flag
    Seconds = 0x03,
    /// Minutes register (0-59)
    Minutes = 0x04,
    /// Hours register (0-23)
    Hours = 0x05,
    /// Days register (1-31)
    Days = 0x06,
    /// Weekdays register (0-6)
    Weekdays = 0x07,
    /// Months register (1-12) with century flag
    Months = 0x08,
    /// Years register (0-99)
    Years = 0x09,
    /// Minute alarm register
    MinuteAlarm = 0x0A,
    /// Hour alarm register
    HourAlarm = 0x0B,
    /// Day alarm register
    DayAlarm = 0x0C,
    /// Weekday alarm register
    WeekdayAlarm = 0x0D,
    /// Frequency offset register
    Offset = 0x0E,
    /// Timer and clock-out control register
    TimerClkoutControl = 0x0F,
    /// Timer A source clock register
    TimerAFreqControl = 0x10,
    /// Timer A value register
    TimerA = 0x11,
    /// Timer B source clock and pulse width register
    TimerBFreqControl = 0x12,
    /// Timer B value register
    TimerB = 0x13,
}

impl RegAddr {
    /// Status flag bits of the register. Flags are cleared by writing 0 and
    /// left untouched by writing 1.
    pub(crate) const fn flag_mask(self) -> u8 {
        match self {
            RegAddr::Control2 => Control2::FLAGS,
            RegAddr::Control3 => Control3::FLAGS,
            _ => 0,
        }
    }
}

/// Clock-out frequency selection (COF bits), in datasheet order.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockoutFrequency {
    /// 32.768 kHz
    Hz32768 = 0b000,
    /// 16.384 kHz
    Hz16384 = 0b001,
    /// 8.192 kHz
    Hz8192 = 0b010,
    /// 4.096 kHz
    Hz4096 = 0b011,
    /// 1.024 kHz
    Hz1024 = 0b100,
    /// 32 Hz
    Hz32 = 0b101,
    /// 1 Hz
    Hz1 = 0b110,
    /// CLKOUT pin is high-impedance
    Disabled = 0b111,
}
impl From<u8> for ClockoutFrequency {
    /// Creates a `ClockoutFrequency` from the low three bits of a raw value.
    fn from(v: u8) -> Self {
        match v & 0b111 {
            0b000 => ClockoutFrequency::Hz32768,
            0b001 => ClockoutFrequency::Hz16384,
            0b010 => ClockoutFrequency::Hz8192,
            0b011 => ClockoutFrequency::Hz4096,
            0b100 => ClockoutFrequency::Hz1024,
            0b101 => ClockoutFrequency::Hz32,
            0b110 => ClockoutFrequency::Hz1,
            _ => ClockoutFrequency::Disabled,
        }
    }
}
impl From<ClockoutFrequency> for u8 {
    fn from(v: ClockoutFrequency) -> Self {
        v as u8
    }
}

/// Battery switch-over and low-battery detection mode (PM bits).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PowerManagement {
    /// Switch-over in standard mode, low-battery detection enabled
    StandardWithLowDetection = 0b000,
    /// Switch-over in direct switching mode, low-battery detection enabled
    DirectWithLowDetection = 0b001,
    /// Switch-over disabled (VDD only), low-battery detection enabled
    DisabledWithLowDetection = 0b010,
    /// Switch-over in standard mode, low-battery detection disabled
    Standard = 0b100,
    /// Switch-over in direct switching mode, low-battery detection disabled
    Direct = 0b101,
    /// Switch-over disabled (VDD only), low-battery detection disabled.
    /// This is the power-on reset value.
    Disabled = 0b111,
}
impl TryFrom<u8> for PowerManagement {
    type Error = u8;

    /// Decodes the three PM bits. `0b011` is documented as equivalent to
    /// `0b010`; `0b110` is not allowed and is returned as the error value.
    fn try_from(v: u8) -> Result<Self, Self::Error> {
        match v {
            0b000 => Ok(PowerManagement::StandardWithLowDetection),
            0b001 => Ok(PowerManagement::DirectWithLowDetection),
            0b010 | 0b011 => Ok(PowerManagement::DisabledWithLowDetection),
            0b100 => Ok(PowerManagement::Standard),
            0b101 => Ok(PowerManagement::Direct),
            0b111 => Ok(PowerManagement::Disabled),
            other => Err(other),
        }
    }
}
impl From<PowerManagement> for u8 {
    fn from(v: PowerManagement) -> Self {
        v as u8
    }
}

/// Internal oscillator load capacitance (CAP_SEL).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OscillatorCapacitance {
    /// 7 pF
    Pf7 = 0,
    /// 12.5 pF
    Pf12_5 = 1,
}
impl From<u8> for OscillatorCapacitance {
    fn from(v: u8) -> Self {
        match v & 0b1 {
            0 => OscillatorCapacitance::Pf7,
            _ => OscillatorCapacitance::Pf12_5,
        }
    }
}
impl From<OscillatorCapacitance> for u8 {
    fn from(v: OscillatorCapacitance) -> Self {
        v as u8
    }
}

/// How often the frequency offset correction is applied (MODE bit).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OffsetMode {
    /// Correction every two hours, 1 LSB = 4.340 ppm
    EveryTwoHours = 0,
    /// Correction every minute, 1 LSB = 4.069 ppm
    EveryMinute = 1,
}
impl From<u8> for OffsetMode {
    fn from(v: u8) -> Self {
        match v & 0b1 {
            0 => OffsetMode::EveryTwoHours,
            _ => OffsetMode::EveryMinute,
        }
    }
}
impl From<OffsetMode> for u8 {
    fn from(v: OffsetMode) -> Self {
        v as u8
    }
}

/// Source clock for timer A and timer B (TAQ / TBQ bits).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimerFrequency {
    /// 4.096 kHz
    Hz4096 = 0b000,
    /// 64 Hz
    Hz64 = 0b001,
    /// 1 Hz
    Hz1 = 0b010,
    /// 1/60 Hz
    PerMinute = 0b011,
    /// 1/3600 Hz (also selected by 0b100..=0b110)
    PerHour = 0b111,
}
impl From<u8> for TimerFrequency {
    fn from(v: u8) -> Self {
        match v & 0b111 {
            0b000 => TimerFrequency::Hz4096,
            0b001 => TimerFrequency::Hz64,
            0b010 => TimerFrequency::Hz1,
            0b011 => TimerFrequency::PerMinute,
            _ => TimerFrequency::PerHour,
        }
    }
}
impl From<TimerFrequency> for u8 {
    fn from(v: TimerFrequency) -> Self {
        v as u8
    }
}

/// Timer A function (TAC bits).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimerAMode {
    /// Timer A disabled (also selected by 0b11)
    Disabled = 0b00,
    /// Countdown timer
    Countdown = 0b01,
    /// Watchdog timer
    Watchdog = 0b10,
}
impl From<u8> for TimerAMode {
    fn from(v: u8) -> Self {
        match v & 0b11 {
            0b01 => TimerAMode::Countdown,
            0b10 => TimerAMode::Watchdog,
            _ => TimerAMode::Disabled,
        }
    }
}
impl From<TimerAMode> for u8 {
    fn from(v: TimerAMode) -> Self {
        v as u8
    }
}

/// Interrupt pulse width for timer B in pulsed mode (TBW bits).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimerBPulseWidth {
    /// 46.875 ms
    Ms46_875 = 0b000,
    /// 62.500 ms
    Ms62_5 = 0b001,
    /// 78.125 ms
    Ms78_125 = 0b010,
    /// 93.750 ms
    Ms93_75 = 0b011,
    /// 125.000 ms
    Ms125 = 0b100,
    /// 156.250 ms
    Ms156_25 = 0b101,
    /// 187.500 ms
    Ms187_5 = 0b110,
    /// 218.750 ms
    Ms218_75 = 0b111,
}
impl From<u8> for TimerBPulseWidth {
    fn from(v: u8) -> Self {
        match v & 0b111 {
            0b000 => TimerBPulseWidth::Ms46_875,
            0b001 => TimerBPulseWidth::Ms62_5,
            0b010 => TimerBPulseWidth::Ms78_125,
            0b011 => TimerBPulseWidth::Ms93_75,
            0b100 => TimerBPulseWidth::Ms125,
            0b101 => TimerBPulseWidth::Ms156_25,
            0b110 => TimerBPulseWidth::Ms187_5,
            _ => TimerBPulseWidth::Ms218_75,
        }
    }
}
impl From<TimerBPulseWidth> for u8 {
    fn from(v: TimerBPulseWidth) -> Self {
        v as u8
    }
}

// This macro generates the From<u8> and Into<u8> implementations for the
// register type
macro_rules! from_register_u8 {
    ($typ:ty) => {
        impl From<u8> for $typ {
            fn from(v: u8) -> Self {
                paste::paste!([< $typ >](v))
            }
        }
        impl From<$typ> for u8 {
            fn from(v: $typ) -> Self {
                v.0
            }
        }
    };
}

bitfield! {
    /// Control_1 register.
    #[derive(Clone, Copy, Default, PartialEq)]
    #[cfg_attr(feature = "defmt", derive(defmt::Format))]
    pub struct Control1(u8);
    impl Debug;
    /// Oscillator load capacitance
    pub from into OscillatorCapacitance, capacitance, set_capacitance: 7, 7;
    /// Clock-halt: freezes the time counters while set
    pub stop, set_stop: 5;
    /// Software reset trigger
    pub software_reset, set_software_reset: 4;
    /// 12 hour mode when set
    pub twelve_hour, set_twelve_hour: 3;
    /// Second interrupt enable
    pub second_interrupt, set_second_interrupt: 2;
    /// Alarm interrupt enable
    pub alarm_interrupt, set_alarm_interrupt: 1;
    /// Correction interrupt enable
    pub correction_interrupt, set_correction_interrupt: 0;
}
from_register_u8!(Control1);

impl Control1 {
    pub(crate) const STOP: u8 = 5;
    pub(crate) const ALARM_INTERRUPT: u8 = 1;
    /// Value that triggers a software reset when written to Control_1.
    pub(crate) const RESET_COMMAND: u8 = 0x58;
}

bitfield! {
    /// Control_2 register.
    #[derive(Clone, Copy, Default, PartialEq)]
    #[cfg_attr(feature = "defmt", derive(defmt::Format))]
    pub struct Control2(u8);
    impl Debug;
    /// Watchdog timer A interrupt flag
    pub watchdog_a_flag, set_watchdog_a_flag: 7;
    /// Countdown timer A interrupt flag
    pub countdown_a_flag, set_countdown_a_flag: 6;
    /// Countdown timer B interrupt flag
    pub countdown_b_flag, set_countdown_b_flag: 5;
    /// Second interrupt flag
    pub second_flag, set_second_flag: 4;
    /// Alarm flag
    pub alarm_flag, set_alarm_flag: 3;
    /// Watchdog timer A interrupt enable
    pub watchdog_a_interrupt, set_watchdog_a_interrupt: 2;
    /// Countdown timer A interrupt enable
    pub countdown_a_interrupt, set_countdown_a_interrupt: 1;
    /// Countdown timer B interrupt enable
    pub countdown_b_interrupt, set_countdown_b_interrupt: 0;
}
from_register_u8!(Control2);

impl Control2 {
    pub(crate) const WATCHDOG_A_FLAG: u8 = 7;
    pub(crate) const COUNTDOWN_A_FLAG: u8 = 6;
    pub(crate) const COUNTDOWN_B_FLAG: u8 = 5;
    pub(crate) const SECOND_FLAG: u8 = 4;
    pub(crate) const ALARM_FLAG: u8 = 3;
    pub(crate) const WATCHDOG_A_INTERRUPT: u8 = 2;
    pub(crate) const COUNTDOWN_A_INTERRUPT: u8 = 1;
    pub(crate) const COUNTDOWN_B_INTERRUPT: u8 = 0;
    /// WTAF, CTAF, CTBF, SF and AF. Writing 1 to a flag leaves it unchanged.
    pub(crate) const FLAGS: u8 = 0xF8;
}

bitfield! {
    /// Control_3 register.
    #[derive(Clone, Copy, Default, PartialEq)]
    #[cfg_attr(feature = "defmt", derive(defmt::Format))]
    pub struct Control3(u8);
    impl Debug;
    /// Raw power management bits, see [`PowerManagement`]
    pub power_management_bits, set_power_management_bits: 7, 5;
    /// Battery switch-over flag
    pub battery_switchover_flag, set_battery_switchover_flag: 3;
    /// Battery low flag (read-only)
    pub battery_low_flag, _: 2;
    /// Battery switch-over interrupt enable
    pub battery_switchover_interrupt, set_battery_switchover_interrupt: 1;
    /// Battery low interrupt enable
    pub battery_low_interrupt, set_battery_low_interrupt: 0;
}
from_register_u8!(Control3);

impl Control3 {
    pub(crate) const BATTERY_SWITCHOVER_FLAG: u8 = 3;
    pub(crate) const BATTERY_LOW_FLAG: u8 = 2;
    pub(crate) const BATTERY_SWITCHOVER_INTERRUPT: u8 = 1;
    pub(crate) const BATTERY_LOW_INTERRUPT: u8 = 0;
    /// BSF and BLF
    pub(crate) const FLAGS: u8 = 0x0C;
}

bitfield! {
    /// Seconds register (0-59) with BCD encoding and oscillator stop flag.
    #[derive(Clone, Copy, Default, PartialEq)]
    #[cfg_attr(feature = "defmt", derive(defmt::Format))]
    pub struct Seconds(u8);
    impl Debug;
    /// Oscillator stopped since the flag was last cleared (power lost)
    pub oscillator_stopped, set_oscillator_stopped: 7;
    /// BCD seconds
    pub bcd, set_bcd: 6, 0;
}
from_register_u8!(Seconds);

impl Seconds {
    pub(crate) const OSCILLATOR_STOPPED: u8 = 7;
}

bitfield! {
    /// Minutes register (0-59) with BCD encoding.
    #[derive(Clone, Copy, Default, PartialEq)]
    #[cfg_attr(feature = "defmt", derive(defmt::Format))]
    pub struct Minutes(u8);
    impl Debug;
    /// BCD minutes
    pub bcd, set_bcd: 6, 0;
}
from_register_u8!(Minutes);

bitfield! {
    /// Hours register (0-23, 24 hour mode) with BCD encoding.
    #[derive(Clone, Copy, Default, PartialEq)]
    #[cfg_attr(feature = "defmt", derive(defmt::Format))]
    pub struct Hours(u8);
    impl Debug;
    /// BCD hours
    pub bcd, set_bcd: 5, 0;
}
from_register_u8!(Hours);

bitfield! {
    /// Days register (1-31) with BCD encoding.
    #[derive(Clone, Copy, Default, PartialEq)]
    #[cfg_attr(feature = "defmt", derive(defmt::Format))]
    pub struct Days(u8);
    impl Debug;
    /// BCD day of month
    pub bcd, set_bcd: 5, 0;
}
from_register_u8!(Days);

bitfield! {
    /// Weekdays register (0-6).
    #[derive(Clone, Copy, Default, PartialEq)]
    #[cfg_attr(feature = "defmt", derive(defmt::Format))]
    pub struct Weekdays(u8);
    impl Debug;
    /// Day of week, stored verbatim
    pub weekday, set_weekday: 2, 0;
}
from_register_u8!(Weekdays);

bitfield! {
    /// Months register (1-12) with BCD encoding.
    ///
    /// The datasheet lists bits 7..5 as unused. The driver keeps its century
    /// flag in bit 7; the chip is not documented to retain it, so the second
    /// century is a software convention rather than a hardware feature.
    #[derive(Clone, Copy, Default, PartialEq)]
    #[cfg_attr(feature = "defmt", derive(defmt::Format))]
    pub struct Months(u8);
    impl Debug;
    /// Century flag (year is base year + 100 + register value)
    pub century, set_century: 7;
    /// BCD month
    pub bcd, set_bcd: 4, 0;
}
from_register_u8!(Months);

bitfield! {
    /// Years register (0-99) with BCD encoding.
    #[derive(Clone, Copy, Default, PartialEq)]
    #[cfg_attr(feature = "defmt", derive(defmt::Format))]
    pub struct Years(u8);
    impl Debug;
    /// BCD year within the century
    pub bcd, set_bcd: 7, 0;
}
from_register_u8!(Years);

bitfield! {
    /// One of the four alarm registers.
    ///
    /// The enable bit is inverted: set means the field is ignored (wildcard),
    /// clear means the field takes part in the alarm match.
    #[derive(Clone, Copy, Default, PartialEq)]
    #[cfg_attr(feature = "defmt", derive(defmt::Format))]
    pub struct AlarmRegister(u8);
    impl Debug;
    /// AEN_x bit, set = wildcard
    pub wildcard, set_wildcard: 7;
    /// BCD value (or plain weekday for the weekday alarm)
    pub bcd, set_bcd: 6, 0;
}
from_register_u8!(AlarmRegister);

bitfield! {
    /// Frequency offset register.
    #[derive(Clone, Copy, Default, PartialEq)]
    #[cfg_attr(feature = "defmt", derive(defmt::Format))]
    pub struct Offset(u8);
    impl Debug;
    /// Correction interval
    pub from into OffsetMode, mode, set_mode: 7, 7;
    /// Signed offset (-64 to +63)
    pub i8, offset, set_offset: 6, 0;
}
from_register_u8!(Offset);

bitfield! {
    /// Timer and clock-out control register.
    #[derive(Clone, Copy, Default, PartialEq)]
    #[cfg_attr(feature = "defmt", derive(defmt::Format))]
    pub struct TimerClkoutControl(u8);
    impl Debug;
    /// Timer A interrupt is pulsed instead of permanent
    pub timer_a_pulsed, set_timer_a_pulsed: 7;
    /// Timer B interrupt is pulsed instead of permanent
    pub timer_b_pulsed, set_timer_b_pulsed: 6;
    /// Clock-out frequency
    pub from into ClockoutFrequency, clockout_frequency, set_clockout_frequency: 5, 3;
    /// Timer A function
    pub from into TimerAMode, timer_a_mode, set_timer_a_mode: 2, 1;
    /// Timer B enable
    pub timer_b_enabled, set_timer_b_enabled: 0;
}
from_register_u8!(TimerClkoutControl);

bitfield! {
    /// Timer A source clock register.
    #[derive(Clone, Copy, Default, PartialEq)]
    #[cfg_attr(feature = "defmt", derive(defmt::Format))]
    pub struct TimerAFreqControl(u8);
    impl Debug;
    /// Source clock
    pub from into TimerFrequency, frequency, set_frequency: 2, 0;
}
from_register_u8!(TimerAFreqControl);

bitfield! {
    /// Timer B source clock and pulse width register.
    #[derive(Clone, Copy, Default, PartialEq)]
    #[cfg_attr(feature = "defmt", derive(defmt::Format))]
    pub struct TimerBFreqControl(u8);
    impl Debug;
    /// Pulse width in pulsed interrupt mode
    pub from into TimerBPulseWidth, pulse_width, set_pulse_width: 6, 4;
    /// Source clock
    pub from into TimerFrequency, frequency, set_frequency: 2, 0;
}
from_register_u8!(TimerBFreqControl);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clockout_frequency_conversions() {
        for v in 0..=0b111u8 {
            let f = ClockoutFrequency::from(v);
            assert_eq!(u8::from(f), v);
        }
        assert_eq!(ClockoutFrequency::from(0b000), ClockoutFrequency::Hz32768);
        assert_eq!(ClockoutFrequency::from(0b110), ClockoutFrequency::Hz1);
        assert_eq!(ClockoutFrequency::from(0b111), ClockoutFrequency::Disabled);
    }

    #[test]
    fn test_power_management_conversions() {
        assert_eq!(
            PowerManagement::try_from(0b000u8),
            Ok(PowerManagement::StandardWithLowDetection)
        );
        assert_eq!(
            PowerManagement::try_from(0b011u8),
            Ok(PowerManagement::DisabledWithLowDetection)
        );
        assert_eq!(PowerManagement::try_from(0b111u8), Ok(PowerManagement::Disabled));
        assert_eq!(PowerManagement::try_from(0b110u8), Err(0b110));
        assert_eq!(u8::from(PowerManagement::Direct), 0b101);
    }

    #[test]
    fn test_timer_enum_conversions() {
        assert_eq!(TimerFrequency::from(0b100), TimerFrequency::PerHour);
        assert_eq!(TimerFrequency::from(0b011), TimerFrequency::PerMinute);
        assert_eq!(u8::from(TimerFrequency::PerHour), 0b111);
        assert_eq!(TimerAMode::from(0b11), TimerAMode::Disabled);
        assert_eq!(TimerAMode::from(0b10), TimerAMode::Watchdog);
        assert_eq!(TimerBPulseWidth::from(0b101), TimerBPulseWidth::Ms156_25);
    }

    #[test]
    fn test_control1_register_conversions() {
        let reg = Control1::from(0b1010_0010);
        assert_eq!(reg.capacitance(), OscillatorCapacitance::Pf12_5);
        assert!(reg.stop());
        assert!(!reg.twelve_hour());
        assert!(reg.alarm_interrupt());
        assert!(!reg.correction_interrupt());

        let mut reg = Control1::default();
        reg.set_stop(true);
        reg.set_capacitance(OscillatorCapacitance::Pf12_5);
        assert_eq!(u8::from(reg), 0b1010_0000);
    }

    #[test]
    fn test_control2_register_conversions() {
        let reg = Control2::from(0b0100_1010);
        assert!(reg.countdown_a_flag());
        assert!(reg.alarm_flag());
        assert!(reg.countdown_a_interrupt());
        assert!(!reg.second_flag());
        assert!(!reg.watchdog_a_flag());
    }

    #[test]
    fn test_control3_register_conversions() {
        let reg = Control3::from(0b1110_0100);
        assert_eq!(reg.power_management_bits(), 0b111);
        assert!(reg.battery_low_flag());
        assert!(!reg.battery_switchover_flag());

        let mut reg = Control3::from(0b0000_0100);
        reg.set_power_management_bits(u8::from(PowerManagement::Standard));
        reg.set_battery_switchover_interrupt(true);
        assert_eq!(u8::from(reg), 0b1000_0110);
    }

    #[test]
    fn test_seconds_register_conversions() {
        let reg = Seconds::from(0xD9);
        assert!(reg.oscillator_stopped());
        assert_eq!(reg.bcd(), 0x59);

        let mut reg = Seconds::default();
        reg.set_bcd(0x42);
        assert!(!reg.oscillator_stopped());
        assert_eq!(u8::from(reg), 0x42);
    }

    #[test]
    fn test_calendar_register_masks() {
        assert_eq!(Hours::from(0xE3).bcd(), 0x23);
        assert_eq!(Days::from(0xF1).bcd(), 0x31);
        assert_eq!(Weekdays::from(0xFE).weekday(), 6);
        let months = Months::from(0x92);
        assert!(months.century());
        assert_eq!(months.bcd(), 0x12);
        assert_eq!(Years::from(0x99).bcd(), 0x99);
    }

    #[test]
    fn test_alarm_register_conversions() {
        let reg = AlarmRegister::from(0x80);
        assert!(reg.wildcard());
        assert_eq!(reg.bcd(), 0);

        let reg = AlarmRegister::from(0x45);
        assert!(!reg.wildcard());
        assert_eq!(reg.bcd(), 0x45);
    }

    #[test]
    fn test_offset_register_conversions() {
        let reg = Offset::from(0x7F);
        assert_eq!(reg.mode(), OffsetMode::EveryTwoHours);
        assert_eq!(reg.offset(), -1);

        let reg = Offset::from(0xBF);
        assert_eq!(reg.mode(), OffsetMode::EveryMinute);
        assert_eq!(reg.offset(), 63);

        let mut reg = Offset::default();
        reg.set_offset(-64);
        assert_eq!(u8::from(reg), 0x40);
    }

    #[test]
    fn test_timer_clkout_register_conversions() {
        let reg = TimerClkoutControl::from(0b1011_1011);
        assert!(reg.timer_a_pulsed());
        assert!(!reg.timer_b_pulsed());
        assert_eq!(reg.clockout_frequency(), ClockoutFrequency::Disabled);
        assert_eq!(reg.timer_a_mode(), TimerAMode::Countdown);
        assert!(reg.timer_b_enabled());

        let mut reg = TimerClkoutControl::from(0b1100_0001);
        reg.set_clockout_frequency(ClockoutFrequency::Hz1024);
        assert_eq!(u8::from(reg), 0b1110_0001);
    }

    #[test]
    fn test_flag_masks() {
        assert_eq!(RegAddr::Control2.flag_mask(), 0xF8);
        assert_eq!(RegAddr::Control3.flag_mask(), 0x0C);
        assert_eq!(RegAddr::Control1.flag_mask(), 0);
        assert_eq!(RegAddr::Seconds.flag_mask(), 0);
    }

    #[test]
    fn test_timer_freq_register_conversions() {
        let reg = TimerBFreqControl::from(0b0011_0010);
        assert_eq!(reg.pulse_width(), TimerBPulseWidth::Ms93_75);
        assert_eq!(reg.frequency(), TimerFrequency::Hz1);
        assert_eq!(TimerAFreqControl::from(0x01).frequency(), TimerFrequency::Hz64);
    }
}
