//! Calendar-independant date.

use std::fmt;
use std::ops::{Add, Sub};

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::DateError;

/// JDN of 0001-01-01 (proleptic Gregorian) minus one, i.e. the offset between
/// JDN and chrono's days-from-CE numbering.
const CE_OFFSET: i64 = 1_721_425;

/// A calendar-independant date.
///
/// Supported range begins from January 1, 4713 BC, proleptic Julian calendar.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Date {
    jdn: u32,
}

impl Date {
    /// Creates a `Date` with a Julian day number (JDN).
    pub fn from_jdn(jdn: u32) -> Self {
        Self { jdn }
    }
    /// Returns the Julian day number (JDN) of the date.
    pub fn jdn(&self) -> u32 {
        self.jdn
    }

    /// Creates a `Date` with a Gregorian calendar date.
    ///
    /// `year` should be an astronomical year number, i.e. 1 BC is `0`, 2
    /// BC is `-1`, etc.
    ///
    /// Returns `None` if the date does not exist (e.g. February 30) or is out
    /// of supported range.
    ///
    /// # Example
    ///
    /// ```
    /// use huangli::Date;
    ///
    /// let date = Date::from_gregorian(2000, 1, 1).unwrap();
    /// assert_eq!(2451545, date.jdn());
    /// assert_eq!(None, Date::from_gregorian(2023, 2, 29));
    /// ```
    pub fn from_gregorian(year: i32, month: i32, day: i32) -> Option<Self> {
        if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
            return None;
        }
        let (y, m, d) = (i64::from(year), i64::from(month), i64::from(day));
        let jdn = (1461 * (y + 4800 + (m - 14) / 12)) / 4
            + (367 * (m - 2 - 12 * ((m - 14) / 12))) / 12
            - (3 * ((y + 4900 + (m - 14) / 12) / 100)) / 4
            + d
            - 32075;
        let date = u32::try_from(jdn).map(Self::from_jdn).ok()?;
        // the formula silently rolls over invalid days into the next month
        (date.gregorian() == (year, month, day)).then_some(date)
    }
    /// Like [`Date::from_gregorian`], reporting which date was rejected.
    pub fn try_from_gregorian(year: i32, month: i32, day: i32) -> Result<Self, DateError> {
        Self::from_gregorian(year, month, day).ok_or(DateError::Invalid { year, month, day })
    }
    /// Parses an ISO 8601 calendar date (`YYYY-MM-DD`).
    ///
    /// # Example
    ///
    /// ```
    /// use huangli::Date;
    ///
    /// let date = Date::parse_iso("2024-02-10").unwrap();
    /// assert_eq!((2024, 2, 10), date.gregorian());
    /// assert!(Date::parse_iso("2024-02-30").is_err());
    /// ```
    pub fn parse_iso(s: &str) -> Result<Self, DateError> {
        // chrono alone accepts unpadded fields and signed years
        let shaped = s.len() == 10
            && s.bytes()
                .enumerate()
                .all(|(i, b)| if i == 4 || i == 7 { b == b'-' } else { b.is_ascii_digit() });
        if !shaped {
            return Err(DateError::Parse(s.to_owned()));
        }
        let naive = NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| DateError::Parse(s.to_owned()))?;
        Date::try_from(naive)
    }
    /// Represents the date in Gregorian calendar.
    ///
    /// Returns in `(year, month, day)` format.
    ///
    /// # Example
    ///
    /// ```
    /// use huangli::Date;
    ///
    /// let date = Date::from_jdn(2451545);
    /// assert_eq!((2000, 1, 1), date.gregorian());
    /// ```
    pub fn gregorian(&self) -> (i32, i32, i32) {
        let jdn = i64::from(self.jdn);
        let f = jdn + 1401 + (((4 * jdn + 274277) / 146097) * 3) / 4 - 38;
        let e = 4 * f + 3;
        let g = (e % 1461) / 4;
        let h = 5 * g + 2;
        let day = (h % 153) / 5 + 1;
        let month = (h / 153 + 2) % 12 + 1;
        let year = e / 1461 - 4716 + (12 + 2 - month) / 12;
        (year as i32, month as i32, day as i32)
    }
    /// Formats the date in ISO 8601 format.
    ///
    /// # Example
    ///
    /// ```
    /// use huangli::Date;
    ///
    /// let date = Date::from_gregorian(2000, 1, 1).unwrap();
    /// assert_eq!("2000-01-01", date.iso_gregorian());
    /// ```
    pub fn iso_gregorian(&self) -> String {
        let (y, m, d) = self.gregorian();
        format!("{:04}-{:02}-{:02}", y, m, d)
    }

    /// Returns the day of week of the date, in ISO-8601 numbering (i.e.
    /// `1..=7` for Monday through Sunday)
    ///
    /// # Example
    ///
    /// ```
    /// use huangli::Date;
    ///
    /// let date = Date::from_gregorian(2000, 1, 1).unwrap();
    /// assert_eq!(6, date.day_of_week()); // Saturday
    /// ```
    pub fn day_of_week(&self) -> i32 {
        (self.jdn % 7 + 1) as i32
    }

    /// Returns the ordinal day of the Gregorian year, `1..=366`.
    ///
    /// ```
    /// use huangli::Date;
    ///
    /// let date = Date::from_gregorian(2024, 12, 31).unwrap();
    /// assert_eq!(366, date.day_of_year());
    /// ```
    pub fn day_of_year(&self) -> i32 {
        let (y, m, d) = self.gregorian();
        ordinal_day_number(m, d, YearType::from_gregorian(y))
    }

    /// Converts into a [`chrono::NaiveDate`], if chrono can represent it.
    pub fn to_naive(&self) -> Option<NaiveDate> {
        let days = i64::from(self.jdn) - CE_OFFSET;
        NaiveDate::from_num_days_from_ce_opt(i32::try_from(days).ok()?)
    }
}

impl TryFrom<NaiveDate> for Date {
    type Error = DateError;
    fn try_from(value: NaiveDate) -> Result<Self, Self::Error> {
        use chrono::Datelike;
        u32::try_from(i64::from(value.num_days_from_ce()) + CE_OFFSET)
            .map(Self::from_jdn)
            .map_err(|_| DateError::OutOfRange)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.iso_gregorian())
    }
}

impl Serialize for Date {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.iso_gregorian())
    }
}

impl<'de> Deserialize<'de> for Date {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Date::parse_iso(&s).map_err(serde::de::Error::custom)
    }
}

impl Add<i32> for Date {
    type Output = Date;
    fn add(self, rhs: i32) -> Self::Output {
        Date::from_jdn(if rhs >= 0 {
            self.jdn.saturating_add(rhs as u32)
        } else {
            self.jdn.saturating_sub(rhs.unsigned_abs())
        })
    }
}
impl Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> Self::Output {
        self.jdn as i32 - rhs.jdn as i32
    }
}

/// An inclusive range of dates, stepped one day at a time.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct DateRange {
    start: Date,
    end: Date,
}

impl DateRange {
    /// Creates the range `start..=end`. A single-day range has `start == end`.
    ///
    /// # Example
    ///
    /// ```
    /// use huangli::Date;
    /// use huangli::date::DateRange;
    ///
    /// let start = Date::from_gregorian(2024, 1, 1).unwrap();
    /// let end = Date::from_gregorian(2024, 1, 31).unwrap();
    /// let range = DateRange::new(start, end).unwrap();
    /// assert_eq!(31, range.days());
    /// assert!(DateRange::new(end, start).is_err());
    /// ```
    pub fn new(start: Date, end: Date) -> Result<Self, DateError> {
        if end < start {
            return Err(DateError::Reversed {
                start: start.iso_gregorian(),
                end: end.iso_gregorian(),
            });
        }
        Ok(Self { start, end })
    }
    pub fn start(&self) -> Date {
        self.start
    }
    pub fn end(&self) -> Date {
        self.end
    }
    /// Number of days covered, both ends included.
    pub fn days(&self) -> u32 {
        self.end.jdn - self.start.jdn + 1
    }
    pub fn contains(&self, date: Date) -> bool {
        (self.start..=self.end).contains(&date)
    }
    /// Iterates every day of the range in order.
    pub fn iter(&self) -> impl Iterator<Item = Date> + use<> {
        (self.start.jdn..=self.end.jdn).map(Date::from_jdn)
    }
}

/// Indicates whether a year is a leap year or common year.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum YearType {
    Common,
    Leap,
}

impl YearType {
    /// Determines if `year` is a leap year in Gregorian calendar.
    pub fn from_gregorian(year: i32) -> Self {
        if year % 4 == 0 && year % 100 != 0 || year % 400 == 0 {
            Self::Leap
        } else {
            Self::Common
        }
    }
    /// Returns `true` if `self` is `Leap`, otherwise `false`.
    pub fn is_leap(&self) -> bool {
        matches!(self, YearType::Leap)
    }
}

fn ordinal_day_number(month: i32, day: i32, year_type: YearType) -> i32 {
    day + match month {
        1 => 0,
        2 => 31,
        _ => 59 + (153 * (month - 3) + 2) / 5 + year_type.is_leap() as i32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_gregorian() {
        let date = Date::from_gregorian(1970, 1, 1).unwrap();
        assert_eq!(2440588, date.jdn());
        let date = Date::from_gregorian(2021, 9, 8).unwrap();
        assert_eq!(2459466, date.jdn());
    }

    #[test]
    fn rejects_nonexistent_days() {
        for (y, m, d) in [(2023, 2, 29), (2024, 4, 31), (2024, 13, 1), (2024, 0, 1), (2024, 1, 0)] {
            assert_eq!(None, Date::from_gregorian(y, m, d), "{y:04}-{m:02}-{d:02}");
        }
        assert!(Date::from_gregorian(2024, 2, 29).is_some());
    }

    #[test]
    fn to_gregorian() {
        let date = Date::from_jdn(2440588);
        assert_eq!((1970, 1, 1), date.gregorian());
        let date = Date::from_jdn(2459466);
        assert_eq!((2021, 9, 8), date.gregorian());
        let date = Date::from_jdn(2451545);
        assert_eq!((2000, 1, 1), date.gregorian());
    }

    #[test]
    fn to_day_of_week() {
        let date = Date::from_gregorian(1970, 1, 1).unwrap();
        assert_eq!(4, date.day_of_week());
        let date = Date::from_gregorian(2021, 9, 8).unwrap();
        assert_eq!(3, date.day_of_week());
    }

    #[test]
    fn to_day_of_year() {
        for ((y, m, d), expected) in [
            ((2023, 1, 1), 1),
            ((2023, 3, 1), 60),
            ((2024, 3, 1), 61),
            ((2023, 9, 13), 256),
            ((2024, 12, 31), 366),
        ] {
            let date = Date::from_gregorian(y, m, d).unwrap();
            assert_eq!(expected, date.day_of_year(), "{y:04}-{m:02}-{d:02}");
        }
    }

    #[test]
    fn parse() {
        assert_eq!(
            Ok(Date::from_gregorian(2024, 2, 10).unwrap()),
            Date::parse_iso("2024-02-10")
        );
        assert_eq!(
            Err(DateError::Parse("2024/02/10".to_owned())),
            Date::parse_iso("2024/02/10")
        );
        for s in [
            "2023-02-29",
            "2024-2-1",
            " 2024-02-10\n",
            "+2024-02-10",
            "02024-002-0010",
            "2024-02-1x",
            "",
        ] {
            assert_eq!(Err(DateError::Parse(s.to_owned())), Date::parse_iso(s), "{s:?}");
        }
    }

    #[test]
    fn chrono_interop() {
        let naive = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
        let date = Date::try_from(naive).unwrap();
        assert_eq!(2451545, date.jdn());
        assert_eq!(Some(naive), date.to_naive());
    }

    #[test]
    fn arithmetic() {
        let date = Date::from_gregorian(2024, 2, 28).unwrap();
        assert_eq!("2024-03-01", (date + 2).iso_gregorian());
        assert_eq!("2024-02-27", (date + -1).iso_gregorian());
        assert_eq!(2, (date + 2) - date);
        assert_eq!(0, (Date::from_jdn(1) + -5).jdn());
    }

    #[test]
    fn range() {
        let start = Date::from_gregorian(2023, 12, 30).unwrap();
        let end = Date::from_gregorian(2024, 1, 2).unwrap();
        let range = DateRange::new(start, end).unwrap();
        let days: Vec<_> = range.iter().map(|d| d.iso_gregorian()).collect();
        assert_eq!(
            vec!["2023-12-30", "2023-12-31", "2024-01-01", "2024-01-02"],
            days
        );
        assert_eq!(4, range.days());
        assert!(range.contains(end));
        assert!(!range.contains(end + 1));
        assert_eq!(1, DateRange::new(start, start).unwrap().days());
    }

    #[test]
    fn iso_format() {
        assert_eq!(
            "2021-09-08",
            Date::from_gregorian(2021, 9, 8).unwrap().iso_gregorian()
        );
    }
}

#[cfg(test)]
mod tests_priv {
    use super::*;

    #[test]
    fn priv_ordinal_day_number() {
        use YearType::*;
        assert_eq!(1, ordinal_day_number(1, 1, Common));
        assert_eq!(256, ordinal_day_number(9, 13, Common));
        assert_eq!(366, ordinal_day_number(12, 31, Leap));
    }
}
