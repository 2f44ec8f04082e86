//! 節氣估算
//!
//! 各節氣按固定公曆月日估算，不隨閏年或天文實測調整，與實際交節時刻可差一兩日。
//! 黃曆宜忌的計算依賴此估算結果，故刻意保留。

use crate::chinese::fmt;
use crate::date::Date;

/// 各節氣估算日期，格式為 `(月, 日)`，第 0 項為立春，至第 23 項大寒。
///
/// 小寒、大寒落在次一公曆年一月。
pub const TERM_DATES: [(i32, i32); 24] = [
    (2, 4),
    (2, 19),
    (3, 6),
    (3, 21),
    (4, 5),
    (4, 20),
    (5, 6),
    (5, 21),
    (6, 6),
    (6, 21),
    (7, 7),
    (7, 23),
    (8, 8),
    (8, 23),
    (9, 8),
    (9, 23),
    (10, 8),
    (10, 23),
    (11, 7),
    (11, 22),
    (12, 7),
    (12, 22),
    (1, 6),
    (1, 20),
];

/// 取得所給日期當日交節的節氣名，若當日並無交節則返回 `None`。
///
/// # 用例
///
/// ```
/// use huangli::Date;
/// use huangli::chinese::solar_term::solar_term;
///
/// assert_eq!(Some("立春"), solar_term(Date::from_gregorian(2024, 2, 4).unwrap()));
/// assert_eq!(None, solar_term(Date::from_gregorian(2024, 2, 5).unwrap()));
/// ```
pub fn solar_term(date: Date) -> Option<&'static str> {
    let (_, m, d) = date.gregorian();
    TERM_DATES
        .iter()
        .position(|&term| term == (m, d))
        .map(|idx| fmt::solar_term(idx as u32 + 1))
}

/// 取得以公元 `year` 年立春為首的二十四節氣估算日期，格式為 `(節氣序號, 日期)`，
/// 節氣序號 `1..=24` 對應立春到大寒。
///
/// # 用例
///
/// ```
/// use huangli::chinese::solar_term::term_dates;
///
/// let dates = term_dates(2024);
/// assert_eq!((1, "2024-02-04".to_owned()), (dates[0].0, dates[0].1.iso_gregorian()));
/// assert_eq!((24, "2025-01-20".to_owned()), (dates[23].0, dates[23].1.iso_gregorian()));
/// ```
pub fn term_dates(year: i32) -> Vec<(u32, Date)> {
    (1..)
        .zip(TERM_DATES)
        .filter_map(|(term, (m, d))| {
            let y = if m == 1 { year + 1 } else { year };
            Date::from_gregorian(y, m, d).map(|date| (term, date))
        })
        .collect()
}

/// 取得給定日期所在節氣，格式為 `(節氣序號, 交節後第幾日)`，序號 `1..=24` 對應立春到大寒，
/// 日數為 0 則表示當日交節。
///
/// # 用例
///
/// ```
/// use huangli::Date;
/// use huangli::chinese::solar_term::current_term;
///
/// let date = Date::from_gregorian(2024, 1, 1).unwrap();
/// assert_eq!((22, 10), current_term(date)); // 冬至過後第 10 天
/// ```
pub fn current_term(date: Date) -> (u32, u32) {
    let year = date.gregorian().0;
    // 一月上旬的日期仍屬前一年冬至
    [year - 1, year]
        .into_iter()
        .flat_map(term_dates)
        .filter(|&(_, start)| start <= date)
        .max_by_key(|&(_, start)| start)
        .map_or((22, 0), |(term, start)| (term, (date - start) as u32))
}
