//! Personal fortune of a day.
//!
//! Every part of a profile's fortune comes from one fortune index in `0..100`:
//! a weighted sum over the day, the birthday, both zodiacs, the lunar date,
//! the elements and the biorhythm. The five categories read the five levels
//! starting at different offsets from that index.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::biorhythm::Biorhythm;
use crate::chinese::{LunarDate, to_lunar};
use crate::config::ZodiacYearBasis;
use crate::date::Date;
use crate::element::{self, ElementCompatibility, FiveElement};
use crate::numerology::{self, LifePath};
use crate::zodiac::{self, ChineseZodiac, ZodiacSign};

/// Fortune level, ordered from best to worst.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FortuneLevel {
    Excellent,
    Good,
    Average,
    Poor,
    Terrible,
}

impl FortuneLevel {
    pub const ALL: [FortuneLevel; 5] = {
        use FortuneLevel::*;
        [Excellent, Good, Average, Poor, Terrible]
    };

    /// The level `num` steps from [`FortuneLevel::Excellent`], wrapping around.
    pub fn nth(num: u32) -> Self {
        Self::ALL[(num % 5) as usize]
    }

    /// # Example
    ///
    /// ```
    /// use huangli::fortune::FortuneLevel;
    ///
    /// assert_eq!("大吉", FortuneLevel::Excellent.name());
    /// assert_eq!("凶", FortuneLevel::Poor.name());
    /// ```
    pub fn name(&self) -> &'static str {
        use FortuneLevel::*;
        match self {
            Excellent => "大吉",
            Good => "吉",
            Average => "平",
            Poor => "凶",
            Terrible => "大凶",
        }
    }

    fn outlook(&self) -> &'static str {
        use FortuneLevel::*;
        match self {
            Excellent => "今日运势极佳，适合重要决策和新的开始。把握机会，积极行动。",
            Good => "今日运势良好，适合稳步推进计划。保持积极心态，会有不错的收获。",
            Average => "今日运势平稳，适合日常事务处理。保持平常心，稳中求进。",
            Poor => "今日运势略有波折，宜谨慎行事。避免重大决策，多加小心。",
            Terrible => "今日运势欠佳，宜静不宜动。多休息调整，等待时机转好。",
        }
    }
}

impl fmt::Display for FortuneLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Birthday of a person with both zodiacs worked out in advance.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct UserProfile {
    pub birthday: Date,
    pub zodiac_sign: ZodiacSign,
    pub chinese_zodiac: ChineseZodiac,
}

impl UserProfile {
    /// Builds the profile of `birthday`, taking the Chinese zodiac from the
    /// year chosen by `basis`.
    pub fn new(birthday: Date, basis: ZodiacYearBasis) -> Self {
        UserProfile {
            birthday,
            zodiac_sign: zodiac::western_zodiac(birthday),
            chinese_zodiac: zodiac::chinese_zodiac(birthday, basis),
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize)]
pub struct PersonalizedAdvice {
    pub zodiac: &'static str,
    pub chinese_zodiac: String,
    pub element: String,
    pub numerology: &'static str,
    /// All of the above, one per line.
    pub combined: String,
}

impl PersonalizedAdvice {
    fn new(profile: &UserProfile, birth_element: FiveElement, life_path: LifePath, level: FortuneLevel) -> Self {
        let zodiac = profile.zodiac_sign.advice(level);
        let chinese_zodiac = profile.chinese_zodiac.advice(level);
        let element = element_advice(birth_element, level);
        let numerology = life_path.today_advice();
        let combined = format!(
            "根据您的个人属性分析：\n🌟 星座指导：{zodiac}\n🐾 生肖建议：{chinese_zodiac}\n🔥 五行平衡：{element}\n🔢 生命密码：{numerology}"
        );
        PersonalizedAdvice {
            zodiac,
            chinese_zodiac,
            element,
            numerology,
            combined,
        }
    }
}

fn element_advice(element: FiveElement, level: FortuneLevel) -> String {
    let modifier = match level {
        FortuneLevel::Excellent => "能量充沛，",
        FortuneLevel::Poor => "能量不足，需要补充，",
        _ => "",
    };
    format!("{modifier}五行属{}，{}", element.name(), element.characteristics())
}

const DIRECTIONS: [&str; 8] = ["正东", "东南", "正南", "西南", "正西", "西北", "正北", "东北"];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PersonalFortune {
    /// In `0..100`.
    pub fortune_index: u32,
    pub overall: FortuneLevel,
    pub wealth: FortuneLevel,
    pub health: FortuneLevel,
    pub career: FortuneLevel,
    pub love: FortuneLevel,
    pub advice: String,
    pub lucky_color: &'static str,
    /// In `1..=9`.
    pub lucky_number: u32,
    pub lucky_direction: &'static str,
    pub birth_element: FiveElement,
    pub daily_element: FiveElement,
    pub element_compatibility: ElementCompatibility,
    pub birth_number: u32,
    pub life_path: LifePath,
    pub personalized_advice: PersonalizedAdvice,
    pub biorhythm: Biorhythm,
}

/// Computes the fortune of `profile` on `date`.
///
/// # Example
///
/// ```
/// use huangli::Date;
/// use huangli::config::ZodiacYearBasis;
/// use huangli::fortune::{FortuneLevel, UserProfile, personal_fortune};
///
/// let birthday = Date::from_gregorian(1990, 5, 15).unwrap();
/// let profile = UserProfile::new(birthday, ZodiacYearBasis::Gregorian);
/// let fortune = personal_fortune(Date::from_gregorian(2024, 2, 10).unwrap(), &profile);
/// assert_eq!(97, fortune.fortune_index);
/// assert_eq!(FortuneLevel::Average, fortune.overall);
/// assert_eq!("东南", fortune.lucky_direction);
/// ```
pub fn personal_fortune(date: Date, profile: &UserProfile) -> PersonalFortune {
    personal_fortune_for(date, &to_lunar(date), profile)
}

/// Computes the fortune of `profile` on `date` whose lunar form is already known.
pub fn personal_fortune_for(date: Date, lunar: &LunarDate, profile: &UserProfile) -> PersonalFortune {
    let (birth_year, _, birth_day) = profile.birthday.gregorian();
    let birth_element = element::birth_element(birth_year);
    let daily_element = element::daily_element(date);
    let biorhythm = Biorhythm::new(profile.birthday, date);
    let life_path = numerology::life_path(profile.birthday);

    let index = fortune_index(date, lunar, profile, birth_element, daily_element, &biorhythm);
    let [overall, wealth, health, career, love] = [0, 1, 2, 3, 4].map(|k| FortuneLevel::nth(index + k));

    let colors = birth_element.lucky_colors();
    PersonalFortune {
        fortune_index: index,
        overall,
        wealth,
        health,
        career,
        love,
        advice: overall.outlook().to_owned() + profile.zodiac_sign.advice(overall),
        lucky_color: colors[index as usize % colors.len()],
        lucky_number: (index + birth_day.unsigned_abs()) % 9 + 1,
        lucky_direction: DIRECTIONS[index as usize % DIRECTIONS.len()],
        birth_element,
        daily_element,
        element_compatibility: element::compatibility(birth_element, daily_element),
        birth_number: numerology::birth_number(birth_day.unsigned_abs()),
        life_path,
        personalized_advice: PersonalizedAdvice::new(profile, birth_element, life_path, overall),
        biorhythm,
    }
}

/// The weighted sum behind every level, taken modulo 100.
fn fortune_index(
    date: Date,
    lunar: &LunarDate,
    profile: &UserProfile,
    birth: FiveElement,
    daily: FiveElement,
    biorhythm: &Biorhythm,
) -> u32 {
    let (_, birth_month, birth_day) = profile.birthday.gregorian();
    let bonus = if birth.supports() == daily {
        20
    } else if birth.restrained_by() == daily {
        -20
    } else {
        0
    };
    let terms = [
        i64::from(date.day_of_year()),
        i64::from(birth_month) * 31,
        i64::from(birth_day),
        profile.zodiac_sign.index() as i64 * 7,
        profile.chinese_zodiac.index() as i64 * 11,
        i64::from(lunar.month_value()) * 3,
        i64::from(lunar.day_value()),
        birth.index() as i64 * 5,
        daily.index() as i64 * 3,
        i64::from(biorhythm.influence()),
        bonus,
    ];
    terms.iter().sum::<i64>().rem_euclid(100) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: i32, d: i32) -> Date {
        Date::from_gregorian(y, m, d).unwrap()
    }

    fn profile(y: i32, m: i32, d: i32) -> UserProfile {
        UserProfile::new(date(y, m, d), ZodiacYearBasis::Gregorian)
    }

    #[test]
    fn levels_rotate() {
        use FortuneLevel::*;
        assert_eq!(Excellent, FortuneLevel::nth(0));
        assert_eq!(Terrible, FortuneLevel::nth(4));
        assert_eq!(Excellent, FortuneLevel::nth(5));
        assert!(Excellent < Good && Poor < Terrible);
    }

    #[test]
    fn golden_fortunes() {
        use FortuneLevel::*;
        let fortune = personal_fortune(date(2024, 2, 10), &profile(1990, 5, 15));
        assert_eq!(97, fortune.fortune_index);
        assert_eq!(
            [Average, Poor, Terrible, Excellent, Good],
            [fortune.overall, fortune.wealth, fortune.health, fortune.career, fortune.love]
        );
        assert_eq!(FiveElement::Fire, fortune.birth_element);
        assert_eq!(FiveElement::Fire, fortune.daily_element);
        assert_eq!(ElementCompatibility::Good, fortune.element_compatibility);
        assert_eq!("紫色", fortune.lucky_color);
        assert_eq!(5, fortune.lucky_number);
        assert_eq!("东南", fortune.lucky_direction);
        assert_eq!(6, fortune.birth_number);
        assert_eq!(LifePath::Three, fortune.life_path);

        let fortune = personal_fortune(date(2024, 6, 15), &profile(1985, 12, 31));
        assert_eq!(66, fortune.fortune_index);
        assert_eq!(
            [Good, Average, Poor, Terrible, Excellent],
            [fortune.overall, fortune.wealth, fortune.health, fortune.career, fortune.love]
        );
        assert_eq!(FiveElement::Metal, fortune.birth_element);
        assert_eq!(FiveElement::Earth, fortune.daily_element);
        assert_eq!(ElementCompatibility::VeryGood, fortune.element_compatibility);
        assert_eq!("白色", fortune.lucky_color);
        assert_eq!(8, fortune.lucky_number);
        assert_eq!("正南", fortune.lucky_direction);
        assert_eq!(-24, fortune.biorhythm.influence());
    }

    #[test]
    fn advice_texts() {
        let fortune = personal_fortune(date(2024, 6, 15), &profile(1985, 12, 31));
        assert_eq!(
            "今日运势良好，适合稳步推进计划。保持积极心态，会有不错的收获。适当放松，不要过于严肃。",
            fortune.advice
        );
        let advice = &fortune.personalized_advice;
        assert_eq!("踏实稳重带来成功", advice.chinese_zodiac);
        assert_eq!("五行属金，果断坚毅，重义守信，宜刚柔并济", advice.element);
        assert!(advice.combined.starts_with("根据您的个人属性分析：\n🌟 星座指导：适当放松"));
        assert_eq!(5, advice.combined.lines().count());
    }

    #[test]
    fn element_advice_modifiers() {
        assert_eq!(
            "能量充沛，五行属火，热情开朗，充满活力，宜张弛有度",
            element_advice(FiveElement::Fire, FortuneLevel::Excellent)
        );
        assert!(element_advice(FiveElement::Water, FortuneLevel::Poor).starts_with("能量不足，需要补充，五行属水"));
    }

    #[test]
    fn before_birth_stays_in_range() {
        let fortune = personal_fortune(date(1901, 1, 1), &profile(2099, 12, 31));
        assert!(fortune.fortune_index < 100);
        assert!((1..=9).contains(&fortune.lucky_number));
    }
}
