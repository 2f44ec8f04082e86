//! Daily 宜/忌 advice.
//!
//! Advice is a pure function of the date: a seed built from the Gregorian and
//! lunar day picks a handful of activities from two fixed pools.

use serde::Serialize;

use crate::chinese::{LunarDate, to_lunar};
use crate::date::Date;

/// Activities a day may be suitable for (宜).
pub const SUITABLE_POOL: [&str; 24] = [
    "祈福", "祭祀", "出行", "嫁娶", "搬家", "开业", "签约", "投资", "会友", "学习", "运动", "沐浴",
    "理发", "纳财", "开市", "立券", "交易", "栽种", "牧养", "入宅", "安床", "作灶", "修造", "动土",
];

/// Activities a day may be unsuitable for (忌).
pub const UNSUITABLE_POOL: [&str; 24] = [
    "动土", "破土", "开仓", "出货", "安葬", "修造", "栽种", "纳畜", "开市", "立券", "出行", "嫁娶",
    "搬家", "祈福", "祭祀", "开业", "签约", "投资", "沐浴", "理发", "安床", "作灶", "牧养", "交易",
];

/// The 宜/忌 lists of one day. The two lists never share an activity.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize)]
pub struct DailyAdvice {
    /// 宜, 3 to 9 activities
    pub suitable: Vec<&'static str>,
    /// 忌, 2 to 6 activities
    pub unsuitable: Vec<&'static str>,
    pub description: String,
}

impl DailyAdvice {
    /// Returns `true` if any suitable activity contains one of `keywords`.
    pub fn suits_any(&self, keywords: &[&str]) -> bool {
        self.suitable
            .iter()
            .any(|item| keywords.iter().any(|kw| item.contains(kw)))
    }
}

/// Computes the advice of `date`.
///
/// # Example
///
/// ```
/// use huangli::Date;
/// use huangli::advice::advice;
///
/// let advice = advice(Date::from_gregorian(2024, 2, 10).unwrap());
/// assert_eq!(vec!["运动", "动土", "理发", "祭祀"], advice.suitable);
/// assert_eq!(vec!["投资", "出行", "出货", "安床"], advice.unsuitable);
/// ```
pub fn advice(date: Date) -> DailyAdvice {
    advice_for(date, &to_lunar(date))
}

/// Computes the advice of `date` whose lunar form is already known.
pub fn advice_for(date: Date, lunar: &LunarDate) -> DailyAdvice {
    let seed = seed(date, lunar);
    let suitable_count = (seed % 7 + 3) as usize;
    let unsuitable_count = (seed % 5 + 2) as usize;

    let suitable = pick(&SUITABLE_POOL, suitable_count, |i| seed + i * 13, &[]);
    let unsuitable = pick(
        &UNSUITABLE_POOL,
        unsuitable_count,
        |i| seed + i * 17 + 7,
        &suitable,
    );
    let description = describe(&suitable, &unsuitable);
    DailyAdvice {
        suitable,
        unsuitable,
        description,
    }
}

/// `year * 10000 + month * 100 + day + lunar_month * 31 + lunar_day`
pub fn seed(date: Date, lunar: &LunarDate) -> u64 {
    let (y, m, d) = date.gregorian();
    let gregorian = i64::from(y) * 10000 + i64::from(m) * 100 + i64::from(d);
    let lunar = i64::from(lunar.month_value()) * 31 + i64::from(lunar.day_value());
    (gregorian + lunar).max(0) as u64
}

/// Strides through `pool` at `index(i) mod len` for `i in 0..count`, skipping
/// repeats and anything in `excluded`, then backfills in pool order if the
/// stride came up short.
fn pick(
    pool: &[&'static str],
    count: usize,
    index: impl Fn(u64) -> u64,
    excluded: &[&'static str],
) -> Vec<&'static str> {
    let mut chosen: Vec<&'static str> = Vec::with_capacity(count);
    let strided = (0..count as u64).map(|i| pool[(index(i) % pool.len() as u64) as usize]);
    for item in strided.chain(pool.iter().copied()) {
        if chosen.len() >= count {
            break;
        }
        if !chosen.contains(&item) && !excluded.contains(&item) {
            chosen.push(item);
        }
    }
    chosen
}

fn describe(suitable: &[&str], unsuitable: &[&str]) -> String {
    format!(
        "今日宜{}，忌{}。顺应天时，趋吉避凶。",
        suitable.join("、"),
        unsuitable.join("、")
    )
}
