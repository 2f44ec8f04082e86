//! Birth numbers and life paths.

use serde::{Deserialize, Serialize};

use crate::date::Date;

/// Life path number, `1..=9`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LifePath {
    One = 1,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
}

impl LifePath {
    pub const ALL: [LifePath; 9] = {
        use LifePath::*;
        [One, Two, Three, Four, Five, Six, Seven, Eight, Nine]
    };

    /// The life path of `num`, or [`LifePath::One`] if `num` is not in `1..=9`.
    pub fn from_number(num: u32) -> Self {
        num.checked_sub(1)
            .and_then(|i| Self::ALL.get(i as usize))
            .copied()
            .unwrap_or(LifePath::One)
    }

    pub fn number(&self) -> u32 {
        *self as u32
    }

    pub fn title(&self) -> &'static str {
        use LifePath::*;
        match self {
            One => "领导者",
            Two => "合作者",
            Three => "表达者",
            Four => "建设者",
            Five => "探索者",
            Six => "守护者",
            Seven => "思考者",
            Eight => "成就者",
            Nine => "奉献者",
        }
    }

    pub fn meaning(&self) -> &'static str {
        use LifePath::*;
        match self {
            One => "独立自主，开拓进取，天生具备领导才能",
            Two => "温和细腻，善于协调，重视伙伴与和谐",
            Three => "乐观开朗，富有创意，善于表达自我",
            Four => "踏实勤恳，讲究秩序，做事稳扎稳打",
            Five => "热爱自由，勇于尝试，适应变化的能力强",
            Six => "富有责任感，关爱家人，乐于照顾他人",
            Seven => "善于思考，追求真理，内心世界丰富",
            Eight => "目标明确，务实能干，重视事业与财富",
            Nine => "心怀博爱，理想远大，乐于助人",
        }
    }

    pub fn today_advice(&self) -> &'static str {
        use LifePath::*;
        match self {
            One => "今日适合主动出击，勇敢迈出第一步。",
            Two => "今日适合与人合作，倾听他人的意见。",
            Three => "今日适合表达想法，发挥你的创造力。",
            Four => "今日适合整理规划，把基础打扎实。",
            Five => "今日适合尝试新鲜事物，保持灵活。",
            Six => "今日适合陪伴家人，关心身边的人。",
            Seven => "今日适合独处静思，沉淀内心。",
            Eight => "今日适合处理财务与事业上的要事。",
            Nine => "今日适合帮助他人，放下过去的包袱。",
        }
    }
}

/// Repeatedly sums the decimal digits of `num` until a single digit remains.
///
/// # Example
///
/// ```
/// use huangli::numerology::reduce_to_single_digit;
///
/// assert_eq!(1, reduce_to_single_digit(1990)); // 19, 10, 1
/// assert_eq!(7, reduce_to_single_digit(7));
/// ```
pub fn reduce_to_single_digit(mut num: u32) -> u32 {
    while num > 9 {
        num = digit_sum(num);
    }
    num
}

fn digit_sum(mut num: u32) -> u32 {
    let mut sum = 0;
    while num > 0 {
        sum += num % 10;
        num /= 10;
    }
    sum
}

/// The birth number of a day of month: the sum of its two digits, reduced
/// only once, so that 29 gives 11.
pub fn birth_number(day: u32) -> u32 {
    if day > 9 { digit_sum(day) } else { day }
}

/// The life path of `birthday`, from the reduced year, month and day.
///
/// # Example
///
/// ```
/// use huangli::Date;
/// use huangli::numerology::{LifePath, life_path};
///
/// let birthday = Date::from_gregorian(1990, 5, 15).unwrap();
/// assert_eq!(LifePath::Three, life_path(birthday)); // 1 + 5 + 6
/// ```
pub fn life_path(birthday: Date) -> LifePath {
    let (y, m, d) = birthday.gregorian();
    let sum: u32 = [y, m, d]
        .into_iter()
        .map(|n| reduce_to_single_digit(n.unsigned_abs()))
        .sum();
    LifePath::from_number(reduce_to_single_digit(sum))
}
