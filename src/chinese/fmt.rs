//! 格式化日期相關功能
//!
//! 名稱均用簡體字，與黃曆通行寫法一致。

/// 漢數字，第 `1..=9` 項分別為「一」到「九」。為便於格式化日期，第 0 項為「十」。
pub const NUM_CHINESE: &[&str] = &["十", "一", "二", "三", "四", "五", "六", "七", "八", "九"];

/// 月名，不含閏字。十二月稱「腊月」，十一月不稱「冬月」。
pub const LUNAR_MONTHS: [&str; 12] = [
    "正月", "二月", "三月", "四月", "五月", "六月", "七月", "八月", "九月", "十月", "十一月",
    "腊月",
];

/// 生肖，自子鼠起。
pub const ZODIAC_ANIMALS: [&str; 12] = [
    "鼠", "牛", "虎", "兔", "龙", "蛇", "马", "羊", "猴", "鸡", "狗", "猪",
];

/// 干支序號轉為文本形式。
///
/// # 用例
///
/// ```
/// use huangli::chinese;
///
/// assert_eq!("乙巳", chinese::fmt::sexagenary(42));
/// ```
pub fn sexagenary(num: u32) -> String {
    static NAME1: &[&str] = &["癸", "甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬"];
    static NAME2: &[&str] = &[
        "亥", "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌",
    ];
    NAME1[num.rem_euclid(10) as usize].to_owned() + NAME2[num.rem_euclid(12) as usize]
}

/// 取得月名（不含閏字）。月序不在 `1..=12` 間則取「正月」。
///
/// # 用例
///
/// ```
/// use huangli::chinese;
///
/// assert_eq!("腊月", chinese::fmt::month_name(12));
/// assert_eq!("正月", chinese::fmt::month_name(13));
/// ```
pub fn month_name(num: u32) -> &'static str {
    num.checked_sub(1)
        .and_then(|i| LUNAR_MONTHS.get(i as usize))
        .unwrap_or(&LUNAR_MONTHS[0])
}

/// 取得完整月名，閏月前加「闰」字。
///
/// # 用例
///
/// ```
/// use huangli::chinese::{self, Month::*};
///
/// assert_eq!("十一月", chinese::fmt::month(Common(11)));
/// assert_eq!("闰正月", chinese::fmt::month(Leap(1)));
/// ```
pub fn month(m: super::Month) -> String {
    let mut rt = String::new();
    if m.is_leap() {
        rt += "闰";
    }
    rt += month_name(m.num());
    rt
}

/// 取得日名，前十日為「初一」到「初十」，第 21 至 29 日為「廿一」到「廿九」。
///
/// 日序不在 `1..=30` 間則取「初一」。
///
/// # 用例
///
/// ```
/// use huangli::chinese;
///
/// assert_eq!("初十", chinese::fmt::day(10));
/// assert_eq!("廿五", chinese::fmt::day(25));
/// assert_eq!("三十", chinese::fmt::day(30));
/// assert_eq!("初一", chinese::fmt::day(31));
/// ```
pub fn day(d: u32) -> String {
    let prefix = match d {
        1..=10 => "初",
        11..=19 => "十",
        20 => "二",
        21..=29 => "廿",
        30 => "三",
        _ => return day(1),
    };
    prefix.to_owned() + NUM_CHINESE[(d % 10) as usize]
}

/// 星期名，`1..=7` 為星期一至星期日。
///
/// # 用例
///
/// ```
/// use huangli::chinese;
///
/// assert_eq!("星期六", chinese::fmt::weekday(6));
/// assert_eq!("星期日", chinese::fmt::weekday(7));
/// ```
pub fn weekday(dow: i32) -> &'static str {
    const NAMES: &[&str] = &[
        "星期日", "星期一", "星期二", "星期三", "星期四", "星期五", "星期六",
    ];
    NAMES[dow.rem_euclid(7) as usize]
}

/// 節氣序號轉為名稱。`1..=24` 分別為立春到大寒。
///
/// # 用例
///
/// ```
/// use huangli::chinese;
///
/// assert_eq!("谷雨", chinese::fmt::solar_term(6));
/// assert_eq!("大寒", chinese::fmt::solar_term(24));
/// ```
pub fn solar_term(term: u32) -> &'static str {
    const NAMES: &[&str] = &[
        "大寒", "立春", "雨水", "惊蛰", "春分", "清明", "谷雨", "立夏", "小满", "芒种", "夏至",
        "小暑", "大暑", "立秋", "处暑", "白露", "秋分", "寒露", "霜降", "立冬", "小雪", "大雪",
        "冬至", "小寒",
    ];
    NAMES[term.rem_euclid(24) as usize]
}
