//! Chinese calendar
//!
//! Note: 為方便處理諸多術語，本模塊文檔用中文。
//!
//! 本程序採用預製好的農曆年表換算夏曆，見 [`data`]。節氣僅按固定月日估算，見
//! [`solar_term`]。

use std::fmt::{self as std_fmt, Display};

use serde::Serialize;
use tracing::warn;

use crate::date::Date;

pub mod data;
pub mod fmt;
pub mod solar_term;

/// 農曆年，自正月初一至次年正月初一前日。
///
/// 支持的年份取決於年表數據，見 [`data`]。
///
/// # 用例
///
/// ```
/// use huangli::Date;
/// use huangli::chinese::{LunarYear, Month::*};
///
/// let date = Date::from_gregorian(2000, 1, 1).unwrap();
/// let year = LunarYear::from_date(date).unwrap();
///
/// assert_eq!(Ok((1999, Common(11), 25)), year.ymd_for(date));
/// ```
#[derive(Debug, Clone)]
pub struct LunarYear {
    /// 序號，為正月初一所在的公元年
    pub year: i32,
    /// 該年的年表
    pub data: &'static data::Year,
    /// 全部月首，包括次年正月用以標記本年最末日
    pub months: Vec<NewMoon>,
}
/// 月首信息
#[derive(Debug, Copy, Clone)]
pub struct NewMoon {
    /// 月名
    pub month: Month,
    /// 月首所在日期
    pub date: Date,
}
/// 月名，`Common` 為平月，`Leap` 為閏月。
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize)]
pub enum Month {
    Common(u32),
    Leap(u32),
}
impl Month {
    /// 取得月序號，無論平閏。
    pub fn num(&self) -> u32 {
        use Month::*;
        *match self {
            Common(v) | Leap(v) => v,
        }
    }
    /// 閏月為 `true`，平月為 `false`
    pub fn is_leap(&self) -> bool {
        matches!(self, Self::Leap(_))
    }
    /// 取得月名的文本形式，閏月前加「闰」字。
    pub fn name(&self) -> String {
        fmt::month(*self)
    }
}

impl LunarYear {
    /// 取得正月初一在公元 `year` 年的農曆年。
    ///
    /// 若年表無該年資料則返回 `None`。
    ///
    /// # 用例
    ///
    /// ```
    /// use huangli::chinese::LunarYear;
    ///
    /// let year = LunarYear::new(2017).unwrap();
    /// assert_eq!(14, year.months.len()); // 含閏六月及次年正月
    /// ```
    pub fn new(year: i32) -> Option<Self> {
        use Month::*;

        let data = data::Year::get(year)?;
        let mut months = Vec::with_capacity(14);
        let mut date = data.new_year;
        for (m, &days) in (1..=12).zip(&data.month_days) {
            months.push(NewMoon {
                month: Common(m),
                date,
            });
            date = date + days as i32;
            match data.leap {
                Some((leap, leap_days)) if leap == m => {
                    months.push(NewMoon {
                        month: Leap(m),
                        date,
                    });
                    date = date + leap_days as i32;
                }
                _ => {}
            }
        }
        months.push(NewMoon {
            month: Common(1),
            date,
        });

        Some(LunarYear { year, data, months })
    }
    /// 依特定日期取得其所在農曆年。
    ///
    /// 若年表無該年資料則返回 `None`。
    ///
    /// # 用例
    ///
    /// ```
    /// use huangli::Date;
    /// use huangli::chinese::LunarYear;
    ///
    /// let date = Date::from_gregorian(2024, 2, 9).unwrap();
    /// let year = LunarYear::from_date(date).unwrap();
    ///
    /// assert_eq!(2023, year.year);
    /// ```
    pub fn from_date(date: Date) -> Option<Self> {
        // 年表末年的腊月延至次一公历年
        let mut y = date.gregorian().0.min(data::LAST_YEAR);
        loop {
            let year = Self::new(y)?;

            let start = year.start();
            let end = year.end();

            if (start..end).contains(&date) {
                return Some(year);
            }

            y += if date < start { -1 } else { 1 };
        }
    }

    /// 正月初一
    pub fn start(&self) -> Date {
        self.data.new_year
    }
    /// 次年正月初一
    pub fn end(&self) -> Date {
        self.months.last().map_or(self.data.new_year, |m| m.date)
    }

    /// 取得給定日期在該年的年月日，返回格式為 `(年, 月, 日)`。
    ///
    /// 若所給日期不在該年，則回報 `Err` 並指出該日期在該年之前還是之後。
    ///
    /// # 用例
    ///
    /// ```
    /// use huangli::Date;
    /// use huangli::chinese::{LunarYear, Month::*};
    ///
    /// let date = Date::from_gregorian(2017, 7, 23).unwrap();
    /// let year = LunarYear::from_date(date).unwrap();
    ///
    /// assert_eq!(Ok((2017, Leap(6), 1)), year.ymd_for(date));
    /// ```
    pub fn ymd_for(&self, date: Date) -> Result<(i32, Month, u32), OtherYear> {
        if date < self.start() {
            return Err(OtherYear::Before);
        } else if date >= self.end() {
            return Err(OtherYear::After);
        }

        let m = self
            .months
            .iter()
            .take_while(|m| m.date <= date)
            .last()
            .ok_or(OtherYear::Before)?;
        let d = (date - m.date + 1) as u32;
        Ok((self.year, m.month, d))
    }
}

/// 表示給定日期不在該年，並指出其在前還是在後。
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum OtherYear {
    Before,
    After,
}

/// 農曆日期，含數值與文本兩種形式。
///
/// 文本形式如「甲辰年」「正月」「初一」，月名不含閏字，另以 `is_leap_month` 標記。
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize)]
pub struct LunarDate {
    /// 年干支，如「甲辰年」
    pub year: String,
    /// 月名，如「正月」「腊月」
    pub month: String,
    /// 日名，如「初一」「三十」
    pub day: String,
    pub is_leap_month: bool,
    /// 數值形式 `(年, 月, 日)`
    pub ymd: (i32, Month, u32),
}

impl LunarDate {
    /// 由數值形式構造。
    pub fn new(year: i32, month: Month, day: u32) -> Self {
        LunarDate {
            year: fmt::sexagenary(sexagenary_for_year(year)) + "年",
            month: fmt::month_name(month.num()).to_owned(),
            day: fmt::day(day),
            is_leap_month: month.is_leap(),
            ymd: (year, month, day),
        }
    }
    /// 月序 `1..=12`，與月名表對應，閏月取所閏之月。
    pub fn month_value(&self) -> u32 {
        match self.ymd.1.num() {
            n @ 1..=12 => n,
            _ => 1,
        }
    }
    /// 日序 `1..=30`，與日名表對應。
    pub fn day_value(&self) -> u32 {
        match self.ymd.2 {
            n @ 1..=30 => n,
            _ => 1,
        }
    }
}

impl Display for LunarDate {
    fn fmt(&self, f: &mut std_fmt::Formatter<'_>) -> std_fmt::Result {
        write!(f, "{}{}{}", self.year, self.ymd.1.name(), self.day)
    }
}

/// 公曆轉農曆。
///
/// 超出年表範圍的日期不報錯，而取該公元年的干支與「正月初一」。
///
/// # 用例
///
/// ```
/// use huangli::Date;
/// use huangli::chinese::to_lunar;
///
/// let lunar = to_lunar(Date::from_gregorian(2024, 2, 10).unwrap());
/// assert_eq!("甲辰年正月初一", lunar.to_string());
/// ```
pub fn to_lunar(date: Date) -> LunarDate {
    try_to_lunar(date).unwrap_or_else(|| {
        warn!(date = %date, "date outside lunar table, falling back to first month and day");
        LunarDate::new(date.gregorian().0, Month::Common(1), 1)
    })
}

/// 公曆轉農曆，超出年表範圍則返回 `None`。
pub fn try_to_lunar(date: Date) -> Option<LunarDate> {
    let year = LunarYear::from_date(date)?;
    let (y, m, d) = year.ymd_for(date).ok()?;
    Some(LunarDate::new(y, m, d))
}

/// 取得所給公元年的干支。
///
/// # 用例
///
/// ```
/// use huangli::chinese::sexagenary_for_year;
///
/// assert_eq!(1, sexagenary_for_year(-2696));
/// ```
pub fn sexagenary_for_year(year: i32) -> u32 {
    (year.rem_euclid(60) as u32 + 2696) % 60 + 1
}
