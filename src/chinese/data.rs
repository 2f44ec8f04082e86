//! 農曆年表數據
//!
//! 每年一項，取自香港天文台公佈的 1900 至 2100 年農曆資料，以二十位整數壓縮：
//!
//! - 第 `0..4` 位：閏月月序，無閏月為 0
//! - 第 `4..16` 位：自臘月至正月（低位至高位），置位為大月（三十日），否則為小月（廿九日）
//! - 第 `16` 位：閏月為大月則置位

use std::sync::OnceLock;

use tracing::debug;

use crate::date::Date;

/// 首年
pub const FIRST_YEAR: i32 = 1900;
/// 末年
pub const LAST_YEAR: i32 = 2100;

/// 1900 年正月初一（公曆 1900-01-31）的儒略日數
const FIRST_NEW_YEAR_JDN: u32 = 2_415_051;

#[rustfmt::skip]
static RAW_DATA: [u32; (LAST_YEAR - FIRST_YEAR + 1) as usize] = [
    0x04bd8, 0x04ae0, 0x0a570, 0x054d5, 0x0d260, 0x0d950, 0x16554, 0x056a0, 0x09ad0, 0x055d2, // 1900
    0x04ae0, 0x0a5b6, 0x0a4d0, 0x0d250, 0x1d255, 0x0b540, 0x0d6a0, 0x0ada2, 0x095b0, 0x14977, // 1910
    0x04970, 0x0a4b0, 0x0b4b5, 0x06a50, 0x06d40, 0x1ab54, 0x02b60, 0x09570, 0x052f2, 0x04970, // 1920
    0x06566, 0x0d4a0, 0x0ea50, 0x16a95, 0x05ad0, 0x02b60, 0x186e3, 0x092e0, 0x1c8d7, 0x0c950, // 1930
    0x0d4a0, 0x1d8a6, 0x0b550, 0x056a0, 0x1a5b4, 0x025d0, 0x092d0, 0x0d2b2, 0x0a950, 0x0b557, // 1940
    0x06ca0, 0x0b550, 0x15355, 0x04da0, 0x0a5b0, 0x14573, 0x052b0, 0x0a9a8, 0x0e950, 0x06aa0, // 1950
    0x0aea6, 0x0ab50, 0x04b60, 0x0aae4, 0x0a570, 0x05260, 0x0f263, 0x0d950, 0x05b57, 0x056a0, // 1960
    0x096d0, 0x04dd5, 0x04ad0, 0x0a4d0, 0x0d4d4, 0x0d250, 0x0d558, 0x0b540, 0x0b6a0, 0x195a6, // 1970
    0x095b0, 0x049b0, 0x0a974, 0x0a4b0, 0x0b27a, 0x06a50, 0x06d40, 0x0af46, 0x0ab60, 0x09570, // 1980
    0x04af5, 0x04970, 0x064b0, 0x074a3, 0x0ea50, 0x06b58, 0x05ac0, 0x0ab60, 0x096d5, 0x092e0, // 1990
    0x0c960, 0x0d954, 0x0d4a0, 0x0da50, 0x07552, 0x056a0, 0x0abb7, 0x025d0, 0x092d0, 0x0cab5, // 2000
    0x0a950, 0x0b4a0, 0x0baa4, 0x0ad50, 0x055d9, 0x04ba0, 0x0a5b0, 0x15176, 0x052b0, 0x0a930, // 2010
    0x07954, 0x06aa0, 0x0ad50, 0x05b52, 0x04b60, 0x0a6e6, 0x0a4e0, 0x0d260, 0x0ea65, 0x0d530, // 2020
    0x05aa0, 0x076a3, 0x096d0, 0x04afb, 0x04ad0, 0x0a4d0, 0x1d0b6, 0x0d250, 0x0d520, 0x0dd45, // 2030
    0x0b5a0, 0x056d0, 0x055b2, 0x049b0, 0x0a577, 0x0a4b0, 0x0aa50, 0x1b255, 0x06d20, 0x0ada0, // 2040
    0x14b63, 0x09370, 0x049f8, 0x04970, 0x064b0, 0x168a6, 0x0ea50, 0x06b20, 0x1a6c4, 0x0aae0, // 2050
    0x092e0, 0x0d2e3, 0x0c960, 0x0d557, 0x0d4a0, 0x0da50, 0x05d55, 0x056a0, 0x0a6d0, 0x055d4, // 2060
    0x052d0, 0x0a9b8, 0x0a950, 0x0b4a0, 0x0b6a6, 0x0ad50, 0x055a0, 0x0aba4, 0x0a5b0, 0x052b0, // 2070
    0x0b273, 0x06930, 0x07337, 0x06aa0, 0x0ad50, 0x14b55, 0x04b60, 0x0a570, 0x054e4, 0x0d160, // 2080
    0x0e968, 0x0d520, 0x0daa0, 0x16aa6, 0x056d0, 0x04ae0, 0x0a9d4, 0x0a2d0, 0x0d150, 0x0f252, // 2090
    0x0d520,                                                                                  // 2100
];

/// 一年的年表數據
#[derive(Debug)]
pub struct Year {
    /// 以正月所在公元年為序號
    pub year: i32,
    /// 正月初一
    pub new_year: Date,
    /// 正月至臘月各月日數
    pub month_days: [u32; 12],
    /// 閏月，格式為 `(月序, 日數)`
    pub leap: Option<(u32, u32)>,
}

static DATA: OnceLock<Vec<Year>> = OnceLock::new();

impl Year {
    /// 取得公元 `year` 年正月起的農曆年表。
    ///
    /// 無數據則返回 `None`。
    pub fn get(year: i32) -> Option<&'static Self> {
        let data = DATA.get_or_init(decode_raw_data);
        data.binary_search_by_key(&year, |y| y.year)
            .ok()
            .map(|i| &data[i])
    }

    /// 全年日數，含閏月
    pub fn total_days(&self) -> u32 {
        self.month_days.iter().sum::<u32>() + self.leap.map_or(0, |(_, days)| days)
    }
}

fn decode_raw_data() -> Vec<Year> {
    let mut res = Vec::with_capacity(RAW_DATA.len());
    let mut new_year = Date::from_jdn(FIRST_NEW_YEAR_JDN);
    for (year, &info) in (FIRST_YEAR..).zip(RAW_DATA.iter()) {
        let mut month_days = [29; 12];
        for (m, days) in (1..=12).zip(month_days.iter_mut()) {
            if info & (0x10000 >> m) != 0 {
                *days = 30;
            }
        }
        let leap = match info & 0xf {
            0 => None,
            m => Some((m, if info & 0x10000 != 0 { 30 } else { 29 })),
        };
        let rec = Year {
            year,
            new_year,
            month_days,
            leap,
        };
        new_year = new_year + rec.total_days() as i32;
        res.push(rec);
    }
    debug!(
        years = res.len(),
        first = FIRST_YEAR,
        last = LAST_YEAR,
        "decoded lunar year table"
    );
    res
}
