//! Alarm configuration utilities for the PCF8523 RTC.
//!
//! The PCF8523 has a single alarm with four match fields: minute, hour, day of
//! month and weekday. Each field has its own enable bit with inverted sense:
//! a set bit makes the field a wildcard, a clear bit makes it part of the
//! match. The alarm has no seconds field and always fires on a full minute.
//!
//! # Frequency hints
//!
//! Which fields take part in the match is decided by a [`FrequencyHint`]:
//!
//! | Hint | Matched fields |
//! |---|---|
//! | `Minutely` | none (every minute) |
//! | `Hourly` | minute |
//! | `Daily` | hour, minute |
//! | `Weekly` | weekday, hour, minute |
//! | `Monthly` | day, hour, minute |
//!
//! A field selected by the hint is only written as a constraint when the
//! [`AlarmSpec`] supplies a value for it; otherwise it stays a wildcard.

use core::fmt;
use core::str::FromStr;

use crate::datetime::{
    decode_field, encode_field, Field, FieldError, DAY_RANGE, HOUR_RANGE, MINUTE_RANGE,
    WEEKDAY_RANGE,
};
use crate::AlarmRegister;

/// One of the four alarm match fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AlarmComponent {
    /// Minute alarm register
    Minute,
    /// Hour alarm register
    Hour,
    /// Day of month alarm register
    Day,
    /// Weekday alarm register
    Weekday,
}

/// How often an alarm should recur.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrequencyHint {
    /// Every minute
    Minutely,
    /// Once an hour, at the given minute
    Hourly,
    /// Once a day, at the given hour and minute
    Daily,
    /// Once a week, on the given weekday at the given hour and minute
    Weekly,
    /// Once a month, on the given day at the given hour and minute
    Monthly,
}

impl FrequencyHint {
    /// Returns the alarm fields that take part in the match for this hint.
    pub const fn components(self) -> &'static [AlarmComponent] {
        match self {
            FrequencyHint::Minutely => &[],
            FrequencyHint::Hourly => &[AlarmComponent::Minute],
            FrequencyHint::Daily => &[AlarmComponent::Hour, AlarmComponent::Minute],
            FrequencyHint::Weekly => &[
                AlarmComponent::Weekday,
                AlarmComponent::Hour,
                AlarmComponent::Minute,
            ],
            FrequencyHint::Monthly => &[
                AlarmComponent::Day,
                AlarmComponent::Hour,
                AlarmComponent::Minute,
            ],
        }
    }

    /// Returns true if `component` takes part in the match for this hint.
    pub fn enables(self, component: AlarmComponent) -> bool {
        self.components().contains(&component)
    }

    /// Returns the lowercase name accepted by [`FromStr`].
    pub const fn as_str(self) -> &'static str {
        match self {
            FrequencyHint::Minutely => "minutely",
            FrequencyHint::Hourly => "hourly",
            FrequencyHint::Daily => "daily",
            FrequencyHint::Weekly => "weekly",
            FrequencyHint::Monthly => "monthly",
        }
    }
}

/// The frequency name is not one the alarm can implement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UnsupportedFrequency;

impl fmt::Display for UnsupportedFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unsupported alarm frequency")
    }
}

impl FromStr for FrequencyHint {
    type Err = UnsupportedFrequency;

    /// Parses `"minutely"`, `"hourly"`, `"daily"`, `"weekly"` or `"monthly"`.
    ///
    /// `"secondly"` is rejected like any other name: the alarm has no seconds field.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "minutely" => Ok(FrequencyHint::Minutely),
            "hourly" => Ok(FrequencyHint::Hourly),
            "daily" => Ok(FrequencyHint::Daily),
            "weekly" => Ok(FrequencyHint::Weekly),
            "monthly" => Ok(FrequencyHint::Monthly),
            _ => Err(UnsupportedFrequency),
        }
    }
}

/// Alarm match values. `None` means the field matches every value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AlarmSpec {
    /// Minute (0-59)
    pub minute: Option<u8>,
    /// Hour (0-23)
    pub hour: Option<u8>,
    /// Day of month (1-31)
    pub day: Option<u8>,
    /// Day of week (0-6)
    pub weekday: Option<u8>,
}

impl AlarmSpec {
    /// An alarm with every field a wildcard.
    pub const fn new() -> Self {
        Self {
            minute: None,
            hour: None,
            day: None,
            weekday: None,
        }
    }

    pub const fn with_minute(mut self, minute: u8) -> Self {
        self.minute = Some(minute);
        self
    }

    pub const fn with_hour(mut self, hour: u8) -> Self {
        self.hour = Some(hour);
        self
    }

    pub const fn with_day(mut self, day: u8) -> Self {
        self.day = Some(day);
        self
    }

    pub const fn with_weekday(mut self, weekday: u8) -> Self {
        self.weekday = Some(weekday);
        self
    }

    /// Returns the value of `component`, if it constrains the match.
    pub const fn component(&self, component: AlarmComponent) -> Option<u8> {
        match component {
            AlarmComponent::Minute => self.minute,
            AlarmComponent::Hour => self.hour,
            AlarmComponent::Day => self.day,
            AlarmComponent::Weekday => self.weekday,
        }
    }

    /// Infers the frequency hint that produces this set of constrained fields.
    ///
    /// Returns `None` for combinations no hint produces, such as an hour
    /// without a minute.
    pub const fn frequency(&self) -> Option<FrequencyHint> {
        match (
            self.minute.is_some(),
            self.hour.is_some(),
            self.day.is_some(),
            self.weekday.is_some(),
        ) {
            (false, false, false, false) => Some(FrequencyHint::Minutely),
            (true, false, false, false) => Some(FrequencyHint::Hourly),
            (true, true, false, false) => Some(FrequencyHint::Daily),
            (true, true, false, true) => Some(FrequencyHint::Weekly),
            (true, true, true, false) => Some(FrequencyHint::Monthly),
            _ => None,
        }
    }
}

/// Internal representation of the four alarm registers.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub(crate) struct PCF8523Alarm {
    minute: AlarmRegister,
    hour: AlarmRegister,
    day: AlarmRegister,
    weekday: AlarmRegister,
}

impl PCF8523Alarm {
    fn wildcard() -> AlarmRegister {
        let mut reg = AlarmRegister::default();
        reg.set_wildcard(true);
        reg
    }

    fn encode(
        spec: &AlarmSpec,
        frequency: FrequencyHint,
        component: AlarmComponent,
    ) -> Result<AlarmRegister, FieldError> {
        let (field, range) = match component {
            AlarmComponent::Minute => (Field::Minute, MINUTE_RANGE),
            AlarmComponent::Hour => (Field::Hour, HOUR_RANGE),
            AlarmComponent::Day => (Field::Day, DAY_RANGE),
            AlarmComponent::Weekday => (Field::Weekday, WEEKDAY_RANGE),
        };
        match spec.component(component) {
            Some(value) => {
                let digits = encode_field(field, value, range)?;
                if frequency.enables(component) {
                    let mut reg = AlarmRegister::default();
                    reg.set_bcd(digits);
                    Ok(reg)
                } else {
                    Ok(Self::wildcard())
                }
            }
            None => Ok(Self::wildcard()),
        }
    }

    /// Builds the alarm registers for `spec` under `frequency`.
    ///
    /// Every supplied value is range checked, even for fields the hint leaves
    /// as wildcards.
    pub(crate) fn from_spec(spec: &AlarmSpec, frequency: FrequencyHint) -> Result<Self, FieldError> {
        let alarm = PCF8523Alarm {
            minute: Self::encode(spec, frequency, AlarmComponent::Minute)?,
            hour: Self::encode(spec, frequency, AlarmComponent::Hour)?,
            day: Self::encode(spec, frequency, AlarmComponent::Day)?,
            weekday: Self::encode(spec, frequency, AlarmComponent::Weekday)?,
        };
        debug!("alarm {} -> {:?}", frequency.as_str(), alarm);
        Ok(alarm)
    }

    fn decode(reg: AlarmRegister, range: core::ops::RangeInclusive<u8>) -> Result<Option<u8>, FieldError> {
        if reg.wildcard() {
            return Ok(None);
        }
        decode_field(u8::from(reg), reg.bcd(), range).map(Some)
    }

    /// Decodes the registers; a field is present only if its enable bit is clear.
    pub(crate) fn to_spec(self) -> Result<AlarmSpec, FieldError> {
        Ok(AlarmSpec {
            minute: Self::decode(self.minute, MINUTE_RANGE)?,
            hour: Self::decode(self.hour, HOUR_RANGE)?,
            day: Self::decode(self.day, DAY_RANGE)?,
            weekday: Self::decode(self.weekday, WEEKDAY_RANGE)?,
        })
    }
}

impl From<[u8; 4]> for PCF8523Alarm {
    fn from(data: [u8; 4]) -> Self {
        PCF8523Alarm {
            minute: AlarmRegister::from(data[0]),
            hour: AlarmRegister::from(data[1]),
            day: AlarmRegister::from(data[2]),
            weekday: AlarmRegister::from(data[3]),
        }
    }
}

impl From<&PCF8523Alarm> for [u8; 4] {
    fn from(alarm: &PCF8523Alarm) -> [u8; 4] {
        [
            u8::from(alarm.minute),
            u8::from(alarm.hour),
            u8::from(alarm.day),
            u8::from(alarm.weekday),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registers(spec: AlarmSpec, frequency: FrequencyHint) -> [u8; 4] {
        let alarm = PCF8523Alarm::from_spec(&spec, frequency).unwrap();
        (&alarm).into()
    }

    #[test]
    fn test_frequency_components_table() {
        assert!(FrequencyHint::Minutely.components().is_empty());
        assert_eq!(FrequencyHint::Hourly.components(), &[AlarmComponent::Minute]);
        assert!(FrequencyHint::Daily.enables(AlarmComponent::Hour));
        assert!(FrequencyHint::Daily.enables(AlarmComponent::Minute));
        assert!(!FrequencyHint::Daily.enables(AlarmComponent::Day));
        assert!(FrequencyHint::Weekly.enables(AlarmComponent::Weekday));
        assert!(!FrequencyHint::Weekly.enables(AlarmComponent::Day));
        assert!(FrequencyHint::Monthly.enables(AlarmComponent::Day));
        assert!(!FrequencyHint::Monthly.enables(AlarmComponent::Weekday));
    }

    #[test]
    fn test_frequency_parsing() {
        assert_eq!("minutely".parse(), Ok(FrequencyHint::Minutely));
        assert_eq!("hourly".parse(), Ok(FrequencyHint::Hourly));
        assert_eq!("daily".parse(), Ok(FrequencyHint::Daily));
        assert_eq!("weekly".parse(), Ok(FrequencyHint::Weekly));
        assert_eq!("monthly".parse(), Ok(FrequencyHint::Monthly));
        assert_eq!("secondly".parse::<FrequencyHint>(), Err(UnsupportedFrequency));
        assert_eq!("yearly".parse::<FrequencyHint>(), Err(UnsupportedFrequency));
        assert_eq!("Daily".parse::<FrequencyHint>(), Err(UnsupportedFrequency));
        for hint in [
            FrequencyHint::Minutely,
            FrequencyHint::Hourly,
            FrequencyHint::Daily,
            FrequencyHint::Weekly,
            FrequencyHint::Monthly,
        ] {
            assert_eq!(hint.as_str().parse(), Ok(hint));
        }
    }

    #[test]
    fn test_daily_with_hour_only() {
        let regs = registers(AlarmSpec::new().with_hour(9), FrequencyHint::Daily);
        assert_eq!(regs, [0x80, 0x09, 0x80, 0x80]);
        let spec = PCF8523Alarm::from(regs).to_spec().unwrap();
        assert_eq!(spec, AlarmSpec::new().with_hour(9));
    }

    #[test]
    fn test_monthly_disables_weekday() {
        let spec = AlarmSpec::new()
            .with_minute(30)
            .with_hour(7)
            .with_day(15)
            .with_weekday(3);
        let regs = registers(spec, FrequencyHint::Monthly);
        assert_eq!(regs, [0x30, 0x07, 0x15, 0x80]);
    }

    #[test]
    fn test_weekly_disables_day() {
        let spec = AlarmSpec::new()
            .with_minute(5)
            .with_hour(22)
            .with_day(15)
            .with_weekday(6);
        let regs = registers(spec, FrequencyHint::Weekly);
        assert_eq!(regs, [0x05, 0x22, 0x80, 0x06]);
    }

    #[test]
    fn test_minutely_is_all_wildcards() {
        let spec = AlarmSpec::new().with_minute(5).with_hour(22);
        assert_eq!(registers(spec, FrequencyHint::Minutely), [0x80; 4]);
    }

    #[test]
    fn test_hourly_matches_minute() {
        let spec = AlarmSpec::new().with_minute(45).with_hour(22);
        assert_eq!(registers(spec, FrequencyHint::Hourly), [0x45, 0x80, 0x80, 0x80]);
    }

    #[test]
    fn test_out_of_range_values_rejected() {
        let cases = [
            (AlarmSpec::new().with_minute(60), Field::Minute),
            (AlarmSpec::new().with_hour(24), Field::Hour),
            (AlarmSpec::new().with_day(0), Field::Day),
            (AlarmSpec::new().with_day(32), Field::Day),
            (AlarmSpec::new().with_weekday(7), Field::Weekday),
        ];
        for (spec, field) in cases {
            assert_eq!(
                PCF8523Alarm::from_spec(&spec, FrequencyHint::Monthly),
                Err(FieldError::OutOfRange(field))
            );
        }
        // Values outside the hint are still checked
        assert_eq!(
            PCF8523Alarm::from_spec(&AlarmSpec::new().with_weekday(9), FrequencyHint::Daily),
            Err(FieldError::OutOfRange(Field::Weekday))
        );
    }

    #[test]
    fn test_decode_inverted_enable_bits() {
        let spec = PCF8523Alarm::from([0x15, 0x80 | 0x09, 0x28, 0x80]).to_spec().unwrap();
        assert_eq!(spec.minute, Some(15));
        assert_eq!(spec.hour, None);
        assert_eq!(spec.day, Some(28));
        assert_eq!(spec.weekday, None);
    }

    #[test]
    fn test_decode_invalid_register() {
        assert_eq!(
            PCF8523Alarm::from([0x5A, 0x80, 0x80, 0x80]).to_spec(),
            Err(FieldError::InvalidRegisterValue(0x5A))
        );
        assert_eq!(
            PCF8523Alarm::from([0x80, 0x24, 0x80, 0x80]).to_spec(),
            Err(FieldError::InvalidRegisterValue(0x24))
        );
    }

    #[test]
    fn test_frequency_inference() {
        assert_eq!(AlarmSpec::new().frequency(), Some(FrequencyHint::Minutely));
        assert_eq!(
            AlarmSpec::new().with_minute(1).frequency(),
            Some(FrequencyHint::Hourly)
        );
        assert_eq!(
            AlarmSpec::new().with_minute(1).with_hour(2).frequency(),
            Some(FrequencyHint::Daily)
        );
        assert_eq!(
            AlarmSpec::new().with_minute(1).with_hour(2).with_weekday(3).frequency(),
            Some(FrequencyHint::Weekly)
        );
        assert_eq!(
            AlarmSpec::new().with_minute(1).with_hour(2).with_day(3).frequency(),
            Some(FrequencyHint::Monthly)
        );
        assert_eq!(AlarmSpec::new().with_hour(9).frequency(), None);
    }
}
