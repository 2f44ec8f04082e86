//! The almanac service.
//!
//! [`Almanac`] ties the engines together behind one configured value. It holds
//! no mutable state, so a single instance can be shared across threads.

use serde::Serialize;

use crate::advice::{DailyAdvice, advice_for};
use crate::chinese::{LunarDate, fmt, solar_term, to_lunar};
use crate::config::Config;
use crate::date::{Date, DateRange};
use crate::error::SearchError;
use crate::festival;
use crate::fortune::{self, PersonalFortune, UserProfile};
use crate::search::{self, AuspiciousDay, CancelToken, EventType};
use crate::zodiac::{self, ChineseZodiac, ZodiacSign};

/// Everything the almanac says about one day.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize)]
pub struct CalendarDate {
    pub gregorian: Date,
    pub lunar: LunarDate,
    /// 星期一 to 星期日
    pub weekday: &'static str,
    pub solar_term: Option<&'static str>,
    pub festival: Option<&'static str>,
    /// Animal of the lunar year, e.g. 龙年
    pub zodiac_year: String,
    pub advice: DailyAdvice,
}

#[derive(Debug, Default, Clone)]
pub struct Almanac {
    config: Config,
}

impl Almanac {
    pub fn new(config: Config) -> Self {
        Almanac { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// # Example
    ///
    /// ```
    /// use huangli::{Almanac, Date};
    ///
    /// let almanac = Almanac::default();
    /// let info = almanac.calendar_info(Date::from_gregorian(2024, 2, 10).unwrap());
    /// assert_eq!("甲辰年正月初一", info.lunar.to_string());
    /// assert_eq!(Some("春节"), info.festival);
    /// assert_eq!("龙年", info.zodiac_year);
    /// assert_eq!("星期六", info.weekday);
    /// ```
    pub fn calendar_info(&self, date: Date) -> CalendarDate {
        let lunar = to_lunar(date);
        let advice = advice_for(date, &lunar);
        let zodiac_year = ChineseZodiac::for_year(lunar.ymd.0).name().to_owned() + "年";
        CalendarDate {
            gregorian: date,
            weekday: fmt::weekday(date.day_of_week()),
            solar_term: solar_term::solar_term(date),
            festival: festival::festival(date),
            zodiac_year,
            advice,
            lunar,
        }
    }

    pub fn personal_fortune(&self, date: Date, profile: &UserProfile) -> PersonalFortune {
        fortune::personal_fortune(date, profile)
    }

    /// Searches `range` for days suiting `event`, ordered as configured.
    ///
    /// The configured day limit does not apply here; callers bound the range.
    pub fn find_auspicious_days(&self, event: EventType, range: DateRange) -> Vec<AuspiciousDay> {
        search::find_auspicious_days(event, range, self.config.rating_order)
    }

    /// Searches `range` for days suiting `event`, honouring the configured day
    /// limit and stopping once `cancel` is cancelled.
    pub fn find_auspicious_days_cancellable(
        &self,
        event: EventType,
        range: DateRange,
        cancel: &CancelToken,
    ) -> Result<Vec<AuspiciousDay>, SearchError> {
        search::find_auspicious_days_cancellable(
            event,
            range,
            self.config.rating_order,
            self.config.max_search_days,
            cancel,
        )
    }

    pub fn zodiac_sign(&self, birthday: Date) -> ZodiacSign {
        zodiac::western_zodiac(birthday)
    }

    /// The Chinese zodiac of `birthday`, by the configured year basis.
    pub fn chinese_zodiac(&self, birthday: Date) -> ChineseZodiac {
        zodiac::chinese_zodiac(birthday, self.config.zodiac_year_basis)
    }

    /// Builds the profile of `birthday` with both zodiacs filled in.
    pub fn profile(&self, birthday: Date) -> UserProfile {
        UserProfile::new(birthday, self.config.zodiac_year_basis)
    }
}
