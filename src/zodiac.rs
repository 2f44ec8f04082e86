//! Western zodiac signs and Chinese zodiac animals.

use serde::{Deserialize, Serialize};

use crate::chinese::{fmt, try_to_lunar};
use crate::config::ZodiacYearBasis;
use crate::date::Date;
use crate::fortune::FortuneLevel;

/// Western zodiac sign, in order from Aries.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// First and last `(month, day)` of each sign, in [`ZodiacSign::ALL`] order.
const SIGN_RANGES: [((i32, i32), (i32, i32)); 12] = [
    ((3, 21), (4, 19)),
    ((4, 20), (5, 20)),
    ((5, 21), (6, 20)),
    ((6, 21), (7, 22)),
    ((7, 23), (8, 22)),
    ((8, 23), (9, 22)),
    ((9, 23), (10, 22)),
    ((10, 23), (11, 21)),
    ((11, 22), (12, 21)),
    ((12, 22), (1, 19)),
    ((1, 20), (2, 18)),
    ((2, 19), (3, 20)),
];

impl ZodiacSign {
    pub const ALL: [ZodiacSign; 12] = {
        use ZodiacSign::*;
        [
            Aries,
            Taurus,
            Gemini,
            Cancer,
            Leo,
            Virgo,
            Libra,
            Scorpio,
            Sagittarius,
            Capricorn,
            Aquarius,
            Pisces,
        ]
    };

    /// The sign of a Gregorian `(month, day)`.
    ///
    /// Falls back to [`ZodiacSign::Aries`] when no range matches, which only
    /// happens for a `(month, day)` that is not a calendar day.
    ///
    /// # Example
    ///
    /// ```
    /// use huangli::zodiac::ZodiacSign;
    ///
    /// assert_eq!(ZodiacSign::Capricorn, ZodiacSign::from_month_day(1, 19));
    /// assert_eq!(ZodiacSign::Aquarius, ZodiacSign::from_month_day(1, 20));
    /// assert_eq!(ZodiacSign::Aries, ZodiacSign::from_month_day(13, 1));
    /// ```
    pub fn from_month_day(month: i32, day: i32) -> Self {
        SIGN_RANGES
            .iter()
            .position(|&((m1, d1), (m2, d2))| {
                (month == m1 && (d1..=31).contains(&day)) || (month == m2 && (1..=d2).contains(&day))
            })
            .map_or(ZodiacSign::Aries, |i| Self::ALL[i])
    }

    /// Position in [`ZodiacSign::ALL`].
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn name(&self) -> &'static str {
        const NAMES: [&str; 12] = [
            "白羊座", "金牛座", "双子座", "巨蟹座", "狮子座", "处女座", "天秤座", "天蝎座", "射手座",
            "摩羯座", "水瓶座", "双鱼座",
        ];
        NAMES[self.index()]
    }

    /// Sign-specific advice; the encouraging form is used only on an excellent day.
    pub fn advice(&self, level: FortuneLevel) -> &'static str {
        use ZodiacSign::*;
        let (excellent, otherwise) = match self {
            Aries => ("火象星座的你今日特别有冲劲，适合开拓新项目。", "控制冲动，三思而后行。"),
            Taurus => ("土象星座的稳重今日将带来收获。", "保持耐心，稳扎稳打。"),
            Gemini => ("风象星座的灵活性今日大放异彩。", "避免三心二意，专注当下。"),
            Cancer => ("水象星座的直觉今日特别准确。", "注意情绪波动，保持内心平静。"),
            Leo => ("火象星座的领导力今日闪闪发光。", "收敛锋芒，低调行事。"),
            Virgo => ("土象星座的细致今日助你成功。", "不要过分苛求完美。"),
            Libra => ("风象星座的平衡感今日很重要。", "避免犹豫不决，果断行动。"),
            Scorpio => ("水象星座的洞察力今日敏锐。", "控制占有欲，保持开放心态。"),
            Sagittarius => ("火象星座的乐观今日感染他人。", "收敛冒险精神，谨慎为上。"),
            Capricorn => ("土象星座的坚持今日见成效。", "适当放松，不要过于严肃。"),
            Aquarius => ("风象星座的创新思维今日活跃。", "脚踏实地，避免过于理想化。"),
            Pisces => ("水象星座的同理心今日温暖人心。", "保持理性，不要过于感性。"),
        };
        if level == FortuneLevel::Excellent {
            excellent
        } else {
            otherwise
        }
    }
}

/// Chinese zodiac animal, in order from the rat.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChineseZodiac {
    Rat,
    Ox,
    Tiger,
    Rabbit,
    Dragon,
    Snake,
    Horse,
    Goat,
    Monkey,
    Rooster,
    Dog,
    Pig,
}

impl ChineseZodiac {
    pub const ALL: [ChineseZodiac; 12] = {
        use ChineseZodiac::*;
        [
            Rat, Ox, Tiger, Rabbit, Dragon, Snake, Horse, Goat, Monkey, Rooster, Dog, Pig,
        ]
    };

    /// The animal of `year`, `(year - 4) mod 12` from the rat.
    ///
    /// # Example
    ///
    /// ```
    /// use huangli::zodiac::ChineseZodiac;
    ///
    /// assert_eq!(ChineseZodiac::Dragon, ChineseZodiac::for_year(2024));
    /// assert_eq!(ChineseZodiac::Horse, ChineseZodiac::for_year(1990));
    /// ```
    pub fn for_year(year: i32) -> Self {
        Self::ALL[(year - 4).rem_euclid(12) as usize]
    }

    /// Position in [`ChineseZodiac::ALL`].
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn name(&self) -> &'static str {
        fmt::ZODIAC_ANIMALS[self.index()]
    }

    /// Character advice of the animal, with a note on excellent and poor days.
    pub fn advice(&self, level: FortuneLevel) -> String {
        use ChineseZodiac::*;
        let base = match self {
            Rat => "机智灵活是您的优势",
            Ox => "踏实稳重带来成功",
            Tiger => "勇气和决断力是关键",
            Rabbit => "温和谨慎，广结善缘",
            Dragon => "发挥领导才能，志向远大",
            Snake => "深思熟虑，把握时机",
            Horse => "积极进取，追求自由",
            Goat => "善良温和，注重和谐",
            Monkey => "聪明多变，灵活应对",
            Rooster => "勤奋认真，注重细节",
            Dog => "忠诚可靠，正义感强",
            Pig => "真诚善良，福禄双全",
        };
        let note = match level {
            FortuneLevel::Excellent => "，今日特别有利",
            FortuneLevel::Poor => "，今日需要格外小心",
            _ => "",
        };
        base.to_owned() + note
    }
}

/// The Western sign of `birthday`.
pub fn western_zodiac(birthday: Date) -> ZodiacSign {
    let (_, m, d) = birthday.gregorian();
    ZodiacSign::from_month_day(m, d)
}

/// The Chinese zodiac of `birthday`.
///
/// With [`ZodiacYearBasis::Gregorian`] the Gregorian year decides; with
/// [`ZodiacYearBasis::Lunar`] the lunar year does, so a birthday before 春节
/// belongs to the previous animal. Dates outside the lunar table use the
/// Gregorian year either way.
///
/// # Example
///
/// ```
/// use huangli::Date;
/// use huangli::config::ZodiacYearBasis;
/// use huangli::zodiac::{ChineseZodiac, chinese_zodiac};
///
/// let birthday = Date::from_gregorian(2024, 2, 1).unwrap();
/// assert_eq!(ChineseZodiac::Dragon, chinese_zodiac(birthday, ZodiacYearBasis::Gregorian));
/// assert_eq!(ChineseZodiac::Rabbit, chinese_zodiac(birthday, ZodiacYearBasis::Lunar));
/// ```
pub fn chinese_zodiac(birthday: Date, basis: ZodiacYearBasis) -> ChineseZodiac {
    let gregorian = birthday.gregorian().0;
    let year = match basis {
        ZodiacYearBasis::Gregorian => gregorian,
        ZodiacYearBasis::Lunar => try_to_lunar(birthday).map_or(gregorian, |l| l.ymd.0),
    };
    ChineseZodiac::for_year(year)
}
