//! Calendar and fortune engine of the traditional Chinese almanac (黄历).
//!
//! Supports Gregorian to Chinese lunisolar conversion for lunar years 1900
//! through 2100, estimated solar terms, festivals, daily 宜/忌 advice, both
//! zodiacs, the five elements, numerology, biorhythms, a personal fortune of
//! the day and a search for auspicious days. Everything is a deterministic
//! function of its input dates.
//!
//! # Examples
//!
//! Basic usage with [`Date`]:
//!
//! ```
//! use huangli::Date;
//!
//! let date = Date::from_gregorian(2000, 1, 1).unwrap();
//!
//! assert_eq!(6, date.day_of_week()); // Saturday
//! assert_eq!(2451545, date.jdn());
//! ```
//!
//! Chinese lunisolar calendar:
//!
//! ```
//! use huangli::Date;
//! use huangli::chinese::{LunarYear, Month::*};
//!
//! let date = Date::from_gregorian(2000, 1, 1).unwrap();
//! let year = LunarYear::from_date(date).unwrap();
//!
//! assert_eq!(Ok((1999, Common(11), 25)), year.ymd_for(date));
//! ```
//!
//! The almanac of a day, and a personal fortune:
//!
//! ```
//! use huangli::{Almanac, Date};
//!
//! let almanac = Almanac::default();
//! let today = Date::from_gregorian(2024, 2, 10).unwrap();
//!
//! let info = almanac.calendar_info(today);
//! assert_eq!("甲辰年正月初一", info.lunar.to_string());
//! assert!(!info.advice.suitable.is_empty());
//!
//! let profile = almanac.profile(Date::from_gregorian(1990, 5, 15).unwrap());
//! let fortune = almanac.personal_fortune(today, &profile);
//! assert!((1..=9).contains(&fortune.lucky_number));
//! ```
//!
//! Dates outside the lunar table do not fail: they get a fallback lunar date
//! and a `tracing` warning. The crate never installs a subscriber.

pub mod advice;
pub mod almanac;
pub mod biorhythm;
pub mod chinese;
pub mod config;
pub mod date;
pub mod element;
pub mod error;
pub mod festival;
pub mod fortune;
pub mod numerology;
pub mod search;
pub mod zodiac;

pub use almanac::{Almanac, CalendarDate};
pub use config::Config;
pub use date::{Date, DateRange, YearType};
pub use error::{DateError, SearchError};
pub use fortune::{FortuneLevel, PersonalFortune, UserProfile};
pub use search::{AuspiciousDay, CancelToken, EventType};
