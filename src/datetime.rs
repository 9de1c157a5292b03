//! Calendar time conversion and register utilities for the PCF8523 RTC.
//!
//! This module provides the internal representation and conversion logic for
//! the PCF8523's seven time-keeping registers, and the [`CalendarDateTime`]
//! value exchanged with callers.
//!
//! # Register Model
//!
//! The PCF8523 stores date and time in 7 consecutive registers starting at
//! `0x03`:
//! - Seconds, Minutes, Hours, Days, Weekdays, Months, Years
//!
//! The top bit of the seconds register is the oscillator stop flag and never
//! part of the seconds value. The top bit of the months register selects the
//! second of the two centuries following the configured base year.
//!
//! # Error Handling
//!
//! Conversion errors are reported via [`FieldError`].

use core::ops::RangeInclusive;

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};

use crate::bcd::{decode_bcd, encode_bcd};
use crate::{Days, Hours, Minutes, Months, Seconds, Weekdays, Years};

pub(crate) const SECOND_RANGE: RangeInclusive<u8> = 0..=59;
pub(crate) const MINUTE_RANGE: RangeInclusive<u8> = 0..=59;
pub(crate) const HOUR_RANGE: RangeInclusive<u8> = 0..=23;
pub(crate) const DAY_RANGE: RangeInclusive<u8> = 1..=31;
pub(crate) const WEEKDAY_RANGE: RangeInclusive<u8> = 0..=6;
pub(crate) const MONTH_RANGE: RangeInclusive<u8> = 1..=12;

/// Number of years covered by the year register plus the century bit.
const YEAR_SPAN: u16 = 200;

/// Identifies a calendar, alarm or timer field in error reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Field {
    /// Seconds (0-59)
    Second,
    /// Minutes (0-59)
    Minute,
    /// Hours (0-23)
    Hour,
    /// Day of month (1-31)
    Day,
    /// Day of week (0-6)
    Weekday,
    /// Month (1-12)
    Month,
    /// Year (base year to base year + 199)
    Year,
    /// Frequency offset (-64 to +63)
    Offset,
}

/// Errors that can occur during register value conversion or validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FieldError {
    /// A caller-supplied value is outside the legal range of its field
    OutOfRange(Field),
    /// A register byte read from the device does not decode to a legal value
    InvalidRegisterValue(u8),
}

/// Checks `value` against `range` and encodes it as BCD.
pub(crate) fn encode_field(
    field: Field,
    value: u8,
    range: RangeInclusive<u8>,
) -> Result<u8, FieldError> {
    if !range.contains(&value) {
        error!("{:?} value {} outside {}..={}", field, value, range.start(), range.end());
        return Err(FieldError::OutOfRange(field));
    }
    encode_bcd(value).map_err(|_| FieldError::OutOfRange(field))
}

/// Decodes BCD `digits` taken from register byte `raw` and checks it against `range`.
pub(crate) fn decode_field(raw: u8, digits: u8, range: RangeInclusive<u8>) -> Result<u8, FieldError> {
    let value = decode_bcd(digits).map_err(|_| FieldError::InvalidRegisterValue(raw))?;
    if range.contains(&value) {
        Ok(value)
    } else {
        Err(FieldError::InvalidRegisterValue(raw))
    }
}

/// A calendar date and time as kept by the RTC.
///
/// The device has no notion of time zones or sub-second precision. The
/// weekday is not derived from the date; it is stored and returned verbatim.
/// The day of month is not checked against the month length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CalendarDateTime {
    /// Full year, e.g. 2017
    pub year: u16,
    /// Month (1-12)
    pub month: u8,
    /// Day of month (1-31)
    pub day: u8,
    /// Day of week (0-6)
    pub weekday: u8,
    /// Hour (0-23)
    pub hour: u8,
    /// Minute (0-59)
    pub minute: u8,
    /// Second (0-59)
    pub second: u8,
}

impl CalendarDateTime {
    /// Creates a value from its components without validating them.
    ///
    /// Validation happens when the value is written to the device.
    pub const fn new(
        year: u16,
        month: u8,
        day: u8,
        weekday: u8,
        hour: u8,
        minute: u8,
        second: u8,
    ) -> Self {
        Self {
            year,
            month,
            day,
            weekday,
            hour,
            minute,
            second,
        }
    }

    /// Converts a chrono `NaiveDateTime`. The weekday is taken as days since Sunday.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::OutOfRange`] for a year that is negative or
    /// does not fit in 16 bits.
    pub fn from_naive(datetime: &NaiveDateTime) -> Result<Self, FieldError> {
        let year = u16::try_from(datetime.year()).map_err(|_| FieldError::OutOfRange(Field::Year))?;
        // chrono guarantees every remaining component fits in a u8
        let narrow = |v: u32, field| u8::try_from(v).map_err(|_| FieldError::OutOfRange(field));
        Ok(Self {
            year,
            month: narrow(datetime.month(), Field::Month)?,
            day: narrow(datetime.day(), Field::Day)?,
            weekday: narrow(datetime.weekday().num_days_from_sunday(), Field::Weekday)?,
            hour: narrow(datetime.hour(), Field::Hour)?,
            minute: narrow(datetime.minute(), Field::Minute)?,
            second: narrow(datetime.second(), Field::Second)?,
        })
    }

    /// Converts to a chrono `NaiveDateTime`, ignoring the stored weekday.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::OutOfRange`] naming the first component that does
    /// not form a real calendar date or time (for example February 30).
    pub fn to_naive(&self) -> Result<NaiveDateTime, FieldError> {
        let date = NaiveDate::from_ymd_opt(
            i32::from(self.year),
            u32::from(self.month),
            u32::from(self.day),
        )
        .ok_or(FieldError::OutOfRange(Field::Day))?;
        date.and_hms_opt(
            u32::from(self.hour),
            u32::from(self.minute),
            u32::from(self.second),
        )
        .ok_or(FieldError::OutOfRange(Field::Second))
    }
}

/// Internal representation of the PCF8523 time-keeping registers.
///
/// This struct models the 7 calendar registers using strongly-typed bitfield
/// wrappers. It is used for register-level I/O and conversion to and from
/// [`CalendarDateTime`].
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub(crate) struct PCF8523DateTime {
    seconds: Seconds,
    minutes: Minutes,
    hours: Hours,
    days: Days,
    weekdays: Weekdays,
    months: Months,
    years: Years,
}

impl PCF8523DateTime {
    fn convert_year(year: u16, base_year: u16) -> Result<(Years, bool), FieldError> {
        let offset = year
            .checked_sub(base_year)
            .filter(|offset| *offset < YEAR_SPAN)
            .ok_or_else(|| {
                error!(
                    "Year {} outside {}..{}",
                    year,
                    base_year,
                    u32::from(base_year) + u32::from(YEAR_SPAN)
                );
                FieldError::OutOfRange(Field::Year)
            })?;
        let century = offset >= 100;
        let two_digit = u8::try_from(offset % 100).map_err(|_| FieldError::OutOfRange(Field::Year))?;
        let mut value = Years::default();
        value.set_bcd(encode_bcd(two_digit).map_err(|_| FieldError::OutOfRange(Field::Year))?);
        Ok((value, century))
    }

    /// Validates and encodes every field of `datetime`.
    ///
    /// The oscillator stop flag is always written as clear.
    pub(crate) fn from_datetime(
        datetime: &CalendarDateTime,
        base_year: u16,
    ) -> Result<Self, FieldError> {
        let mut seconds = Seconds::default();
        seconds.set_bcd(encode_field(Field::Second, datetime.second, SECOND_RANGE)?);
        let mut minutes = Minutes::default();
        minutes.set_bcd(encode_field(Field::Minute, datetime.minute, MINUTE_RANGE)?);
        let mut hours = Hours::default();
        hours.set_bcd(encode_field(Field::Hour, datetime.hour, HOUR_RANGE)?);
        let mut days = Days::default();
        days.set_bcd(encode_field(Field::Day, datetime.day, DAY_RANGE)?);
        let mut weekdays = Weekdays::default();
        weekdays.set_weekday(encode_field(Field::Weekday, datetime.weekday, WEEKDAY_RANGE)?);
        let mut months = Months::default();
        months.set_bcd(encode_field(Field::Month, datetime.month, MONTH_RANGE)?);
        let (years, century) = Self::convert_year(datetime.year, base_year)?;
        months.set_century(century);

        let raw = PCF8523DateTime {
            seconds,
            minutes,
            hours,
            days,
            weekdays,
            months,
            years,
        };

        debug!("raw={:?}", raw);

        Ok(raw)
    }

    /// Decodes the registers into a calendar value.
    pub(crate) fn into_datetime(self, base_year: u16) -> Result<CalendarDateTime, FieldError> {
        let second = decode_field(u8::from(self.seconds), self.seconds.bcd(), SECOND_RANGE)?;
        let minute = decode_field(u8::from(self.minutes), self.minutes.bcd(), MINUTE_RANGE)?;
        let hour = decode_field(u8::from(self.hours), self.hours.bcd(), HOUR_RANGE)?;
        let day = decode_field(u8::from(self.days), self.days.bcd(), DAY_RANGE)?;
        let weekday = self.weekdays.weekday();
        if !WEEKDAY_RANGE.contains(&weekday) {
            return Err(FieldError::InvalidRegisterValue(u8::from(self.weekdays)));
        }
        let month = decode_field(u8::from(self.months), self.months.bcd(), MONTH_RANGE)?;
        let two_digit = decode_field(u8::from(self.years), self.years.bcd(), 0..=99)?;
        let century_offset = if self.months.century() { 100 } else { 0 };
        let year = base_year
            .checked_add(u16::from(two_digit) + century_offset)
            .ok_or(FieldError::InvalidRegisterValue(u8::from(self.years)))?;

        debug!(
            "decoded {}-{}-{} (wd {}) {}:{}:{}",
            year, month, day, weekday, hour, minute, second
        );

        Ok(CalendarDateTime {
            year,
            month,
            day,
            weekday,
            hour,
            minute,
            second,
        })
    }

    /// Returns the oscillator stop flag carried in the seconds register.
    pub(crate) fn oscillator_stopped(&self) -> bool {
        self.seconds.oscillator_stopped()
    }
}

impl From<[u8; 7]> for PCF8523DateTime {
    fn from(data: [u8; 7]) -> Self {
        PCF8523DateTime {
            seconds: Seconds::from(data[0]),
            minutes: Minutes::from(data[1]),
            hours: Hours::from(data[2]),
            days: Days::from(data[3]),
            weekdays: Weekdays::from(data[4]),
            months: Months::from(data[5]),
            years: Years::from(data[6]),
        }
    }
}

impl From<&PCF8523DateTime> for [u8; 7] {
    fn from(dt: &PCF8523DateTime) -> [u8; 7] {
        [
            u8::from(dt.seconds),
            u8::from(dt.minutes),
            u8::from(dt.hours),
            u8::from(dt.days),
            u8::from(dt.weekdays),
            u8::from(dt.months),
            u8::from(dt.years),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: u16 = 2000;

    fn sample() -> CalendarDateTime {
        CalendarDateTime::new(2024, 3, 14, 4, 15, 30, 0)
    }

    #[test]
    fn test_decode_known_register_block() {
        let raw = PCF8523DateTime::from([0x00, 0x06, 0x15, 0x09, 0x01, 0x01, 0x17]);
        let dt = raw.into_datetime(BASE).unwrap();
        assert_eq!(dt, CalendarDateTime::new(2017, 1, 9, 1, 15, 6, 0));
    }

    #[test]
    fn test_encode_known_register_block() {
        let raw = PCF8523DateTime::from_datetime(&sample(), BASE).unwrap();
        let arr: [u8; 7] = (&raw).into();
        assert_eq!(arr, [0x00, 0x30, 0x15, 0x14, 0x04, 0x03, 0x24]);
    }

    #[test]
    fn test_from_datetime_and_into_datetime_roundtrip() {
        let dt = CalendarDateTime::new(2099, 12, 31, 6, 23, 59, 59);
        let raw = PCF8523DateTime::from_datetime(&dt, BASE).unwrap();
        assert_eq!(raw.into_datetime(BASE).unwrap(), dt);
    }

    #[test]
    fn test_century_flag() {
        let dt = CalendarDateTime::new(2099, 1, 1, 0, 0, 0, 0);
        let raw = PCF8523DateTime::from_datetime(&dt, BASE).unwrap();
        assert!(!raw.months.century());

        let dt = CalendarDateTime::new(2117, 1, 1, 0, 0, 0, 0);
        let raw = PCF8523DateTime::from_datetime(&dt, BASE).unwrap();
        assert!(raw.months.century());
        assert_eq!(raw.years.bcd(), 0x17);
        assert_eq!(raw.into_datetime(BASE).unwrap().year, 2117);
    }

    #[test]
    fn test_custom_base_year() {
        let dt = CalendarDateTime::new(1999, 6, 1, 2, 8, 0, 0);
        let raw = PCF8523DateTime::from_datetime(&dt, 1900).unwrap();
        assert_eq!(raw.years.bcd(), 0x99);
        assert!(!raw.months.century());
        assert_eq!(raw.into_datetime(1900).unwrap(), dt);
        // The same registers read with another base land in another century
        assert_eq!(raw.into_datetime(BASE).unwrap().year, 2099);
    }

    #[test]
    fn test_year_out_of_range() {
        let too_early = CalendarDateTime { year: 1999, ..sample() };
        assert_eq!(
            PCF8523DateTime::from_datetime(&too_early, BASE),
            Err(FieldError::OutOfRange(Field::Year))
        );
        let too_late = CalendarDateTime { year: 2200, ..sample() };
        assert_eq!(
            PCF8523DateTime::from_datetime(&too_late, BASE),
            Err(FieldError::OutOfRange(Field::Year))
        );
        let last = CalendarDateTime { year: 2199, ..sample() };
        assert!(PCF8523DateTime::from_datetime(&last, BASE).is_ok());
    }

    #[test]
    fn test_field_validation() {
        let cases = [
            (CalendarDateTime { second: 60, ..sample() }, Field::Second),
            (CalendarDateTime { minute: 60, ..sample() }, Field::Minute),
            (CalendarDateTime { hour: 24, ..sample() }, Field::Hour),
            (CalendarDateTime { day: 0, ..sample() }, Field::Day),
            (CalendarDateTime { day: 32, ..sample() }, Field::Day),
            (CalendarDateTime { weekday: 7, ..sample() }, Field::Weekday),
            (CalendarDateTime { month: 0, ..sample() }, Field::Month),
            (CalendarDateTime { month: 13, ..sample() }, Field::Month),
        ];
        for (dt, field) in cases {
            assert_eq!(
                PCF8523DateTime::from_datetime(&dt, BASE),
                Err(FieldError::OutOfRange(field)),
                "{:?}",
                dt
            );
        }
    }

    #[test]
    fn test_day_not_checked_against_month_length() {
        let dt = CalendarDateTime::new(2023, 2, 31, 0, 0, 0, 0);
        let raw = PCF8523DateTime::from_datetime(&dt, BASE).unwrap();
        assert_eq!(raw.into_datetime(BASE).unwrap(), dt);
    }

    #[test]
    fn test_weekday_stored_verbatim() {
        // 2024-03-14 is a Thursday; the register keeps whatever the caller supplied
        let dt = CalendarDateTime { weekday: 0, ..sample() };
        let raw = PCF8523DateTime::from_datetime(&dt, BASE).unwrap();
        assert_eq!(raw.weekdays.weekday(), 0);
    }

    #[test]
    fn test_oscillator_stop_bit_masked_from_seconds() {
        let raw = PCF8523DateTime::from([0x80 | 0x42, 0x00, 0x00, 0x01, 0x00, 0x01, 0x00]);
        assert!(raw.oscillator_stopped());
        assert_eq!(raw.into_datetime(BASE).unwrap().second, 42);
    }

    #[test]
    fn test_invalid_register_values() {
        // Invalid BCD seconds
        let raw = PCF8523DateTime::from([0x6A, 0x00, 0x00, 0x01, 0x00, 0x01, 0x00]);
        assert_eq!(raw.into_datetime(BASE), Err(FieldError::InvalidRegisterValue(0x6A)));
        // Valid BCD, but month 13
        let raw = PCF8523DateTime::from([0x00, 0x00, 0x00, 0x01, 0x00, 0x13, 0x24]);
        assert_eq!(raw.into_datetime(BASE), Err(FieldError::InvalidRegisterValue(0x13)));
        // Day zero
        let raw = PCF8523DateTime::from([0x00, 0x00, 0x00, 0x00, 0x00, 0x01, 0x24]);
        assert_eq!(raw.into_datetime(BASE), Err(FieldError::InvalidRegisterValue(0x00)));
        // Weekday 7
        let raw = PCF8523DateTime::from([0x00, 0x00, 0x00, 0x01, 0x07, 0x01, 0x24]);
        assert_eq!(raw.into_datetime(BASE), Err(FieldError::InvalidRegisterValue(0x07)));
    }

    #[test]
    fn test_array_conversions() {
        let raw = PCF8523DateTime::from_datetime(&sample(), BASE).unwrap();
        let arr: [u8; 7] = (&raw).into();
        let raw2 = PCF8523DateTime::from(arr);
        assert_eq!(raw, raw2);
    }

    #[test]
    fn test_naive_conversions() {
        let naive = NaiveDate::from_ymd_opt(2024, 3, 10)
            .unwrap()
            .and_hms_opt(7, 8, 9)
            .unwrap();
        let dt = CalendarDateTime::from_naive(&naive).unwrap();
        // 2024-03-10 is a Sunday
        assert_eq!(dt, CalendarDateTime::new(2024, 3, 10, 0, 7, 8, 9));
        assert_eq!(dt.to_naive().unwrap(), naive);

        let impossible = CalendarDateTime::new(2023, 2, 30, 0, 0, 0, 0);
        assert_eq!(impossible.to_naive(), Err(FieldError::OutOfRange(Field::Day)));

        let negative = NaiveDate::from_ymd_opt(-1, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert_eq!(
            CalendarDateTime::from_naive(&negative),
            Err(FieldError::OutOfRange(Field::Year))
        );
    }

    #[test]
    fn test_leap_day_roundtrip() {
        let dt = CalendarDateTime::new(2024, 2, 29, 4, 12, 0, 0);
        let raw = PCF8523DateTime::from_datetime(&dt, BASE).unwrap();
        assert_eq!(raw.into_datetime(BASE).unwrap(), dt);
    }
}
