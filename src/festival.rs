//! Festival lookup.
//!
//! Two fixed tables: Gregorian festivals keyed by `(month, day)`, and lunar
//! festivals keyed by lunar `(month, day)` ordinals. A Gregorian festival wins
//! when both match.

use crate::chinese::{LunarDate, Month, try_to_lunar};
use crate::date::Date;

const GREGORIAN: [((i32, i32), &str); 13] = [
    ((1, 1), "元旦"),
    ((2, 14), "情人节"),
    ((3, 8), "妇女节"),
    ((3, 12), "植树节"),
    ((4, 1), "愚人节"),
    ((5, 1), "劳动节"),
    ((5, 4), "青年节"),
    ((6, 1), "儿童节"),
    ((7, 1), "建党节"),
    ((8, 1), "建军节"),
    ((9, 10), "教师节"),
    ((10, 1), "国庆节"),
    ((12, 25), "圣诞节"),
];

const LUNAR: [((u32, u32), &str); 11] = [
    ((1, 1), "春节"),
    ((1, 15), "元宵节"),
    ((2, 2), "龙抬头"),
    ((5, 5), "端午节"),
    ((7, 7), "七夕节"),
    ((7, 15), "中元节"),
    ((8, 15), "中秋节"),
    ((9, 9), "重阳节"),
    ((12, 8), "腊八节"),
    ((12, 23), "小年"),
    ((12, 30), "除夕"),
];

const NEW_YEARS_EVE: &str = "除夕";

/// Returns the festival falling on `date`, if any.
///
/// # Example
///
/// ```
/// use huangli::Date;
/// use huangli::festival::festival;
///
/// assert_eq!(Some("春节"), festival(Date::from_gregorian(2024, 2, 10).unwrap()));
/// assert_eq!(Some("国庆节"), festival(Date::from_gregorian(2024, 10, 1).unwrap()));
/// assert_eq!(None, festival(Date::from_gregorian(2024, 10, 2).unwrap()));
/// ```
pub fn festival(date: Date) -> Option<&'static str> {
    gregorian_festival(date)
        .or_else(|| try_to_lunar(date).and_then(|lunar| lunar_festival(date, &lunar)))
}

/// Looks `date` up in the Gregorian table only.
pub fn gregorian_festival(date: Date) -> Option<&'static str> {
    let (_, m, d) = date.gregorian();
    GREGORIAN
        .iter()
        .find(|(key, _)| *key == (m, d))
        .map(|&(_, name)| name)
}

/// Looks up the lunar festival of `lunar`, which must be the lunar form of
/// `date`.
///
/// Leap months carry no festivals. 除夕 is the last day of 腊月, so it also
/// lands on 廿九 in years where 腊月 is a short month.
pub fn lunar_festival(date: Date, lunar: &LunarDate) -> Option<&'static str> {
    let Month::Common(month) = lunar.ymd.1 else {
        return None;
    };
    let day = lunar.ymd.2;
    let found = LUNAR
        .iter()
        .find(|(key, _)| *key == (month, day))
        .map(|&(_, name)| name);
    if found.is_none() && month == 12 && day == 29 {
        let next = try_to_lunar(date + 1)?;
        if next.ymd.1 == Month::Common(1) && next.ymd.2 == 1 {
            return Some(NEW_YEARS_EVE);
        }
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn festivals() {
        let dataset = [
            ((2024, 1, 1), Some("元旦")),
            ((2024, 2, 9), Some("除夕")),
            ((2024, 2, 10), Some("春节")),
            ((2024, 2, 14), Some("情人节")),
            ((2024, 2, 24), Some("元宵节")),
            ((2024, 6, 10), Some("端午节")),
            ((2024, 9, 17), Some("中秋节")),
            ((2024, 12, 25), Some("圣诞节")),
            ((2025, 1, 7), Some("腊八节")),
            ((2025, 1, 22), Some("小年")),
            ((2025, 1, 28), Some("除夕")),
            ((2025, 1, 29), Some("春节")),
            ((2024, 2, 11), None),
        ];
        for ((y, m, d), std) in dataset {
            assert_eq!(
                std,
                festival(Date::from_gregorian(y, m, d).unwrap()),
                "{y:04}-{m:02}-{d:02}"
            );
        }
    }

    #[test]
    fn gregorian_takes_priority() {
        let date = Date::from_gregorian(2001, 10, 1).unwrap();
        let lunar = try_to_lunar(date).unwrap();
        assert_eq!(Some("中秋节"), lunar_festival(date, &lunar));
        assert_eq!(Some("国庆节"), festival(date));
    }

    #[test]
    fn leap_month_has_no_festival() {
        // 2023 闰二月初二
        let date = Date::from_gregorian(2023, 3, 23).unwrap();
        let lunar = try_to_lunar(date).unwrap();
        assert!(lunar.is_leap_month);
        assert_eq!(2, lunar.day_value());
        assert_eq!(None, festival(date));
    }

    #[test]
    fn outside_table() {
        assert_eq!(None, festival(Date::from_gregorian(1850, 2, 12).unwrap()));
        assert_eq!(Some("元旦"), festival(Date::from_gregorian(1850, 1, 1).unwrap()));
    }
}
