//! Physical, emotional and intellectual biorhythm cycles.

use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};

use crate::date::Date;

/// Cycle lengths in days.
pub const PHYSICAL_PERIOD: f64 = 23.0;
pub const EMOTIONAL_PERIOD: f64 = 28.0;
pub const INTELLECTUAL_PERIOD: f64 = 33.0;

/// The three cycle values on one day, each in `[-1, 1]`.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Biorhythm {
    pub physical: f64,
    pub emotional: f64,
    pub intellectual: f64,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BiorhythmLevel {
    VeryHigh,
    High,
    Neutral,
    Low,
    VeryLow,
}

impl BiorhythmLevel {
    /// Buckets a cycle value.
    ///
    /// # Example
    ///
    /// ```
    /// use huangli::biorhythm::BiorhythmLevel;
    ///
    /// assert_eq!(BiorhythmLevel::VeryHigh, BiorhythmLevel::from_value(0.8));
    /// assert_eq!(BiorhythmLevel::Neutral, BiorhythmLevel::from_value(0.0));
    /// assert_eq!(BiorhythmLevel::Low, BiorhythmLevel::from_value(-0.3));
    /// ```
    pub fn from_value(value: f64) -> Self {
        use BiorhythmLevel::*;
        if value >= 0.8 {
            VeryHigh
        } else if value >= 0.3 {
            High
        } else if value > -0.3 {
            Neutral
        } else if value >= -0.8 {
            Low
        } else {
            VeryLow
        }
    }

    pub fn name(&self) -> &'static str {
        use BiorhythmLevel::*;
        match self {
            VeryHigh => "极佳",
            High => "良好",
            Neutral => "平稳",
            Low => "低迷",
            VeryLow => "极低",
        }
    }
}

impl Biorhythm {
    /// The cycles of someone born on `birthday`, as of `date`.
    ///
    /// Dates before the birthday run the cycles backwards.
    pub fn new(birthday: Date, date: Date) -> Self {
        let days = f64::from(date - birthday);
        let phase = |period: f64| (TAU * days / period).sin();
        Biorhythm {
            physical: phase(PHYSICAL_PERIOD),
            emotional: phase(EMOTIONAL_PERIOD),
            intellectual: phase(INTELLECTUAL_PERIOD),
        }
    }

    /// Sum of the three cycles times ten, truncated toward zero.
    pub fn influence(&self) -> i32 {
        ((self.physical + self.emotional + self.intellectual) * 10.0) as i32
    }

    pub fn physical_level(&self) -> BiorhythmLevel {
        BiorhythmLevel::from_value(self.physical)
    }

    pub fn emotional_level(&self) -> BiorhythmLevel {
        BiorhythmLevel::from_value(self.emotional)
    }

    pub fn intellectual_level(&self) -> BiorhythmLevel {
        BiorhythmLevel::from_value(self.intellectual)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: i32, d: i32) -> Date {
        Date::from_gregorian(y, m, d).unwrap()
    }

    #[test]
    fn birthday_is_zero() {
        let birthday = date(1990, 5, 15);
        let bio = Biorhythm::new(birthday, birthday);
        assert_eq!(0.0, bio.physical);
        assert_eq!(0, bio.influence());
        assert_eq!(BiorhythmLevel::Neutral, bio.emotional_level());
    }

    #[test]
    fn cycles() {
        // 12324 days: 19/23, 4/28 and 15/33 through the cycles
        let bio = Biorhythm::new(date(1990, 5, 15), date(2024, 2, 10));
        assert!((bio.physical - -0.8878).abs() < 1e-3, "{bio:?}");
        assert!((bio.emotional - 0.7818).abs() < 1e-3, "{bio:?}");
        assert!((bio.intellectual - 0.2817).abs() < 1e-3, "{bio:?}");
        assert_eq!(1, bio.influence());
        assert_eq!(BiorhythmLevel::VeryLow, bio.physical_level());
        assert_eq!(BiorhythmLevel::High, bio.emotional_level());
        assert_eq!(BiorhythmLevel::Neutral, bio.intellectual_level());
    }

    #[test]
    fn quarter_periods() {
        let birthday = date(2000, 1, 1);
        // a quarter of 28 days in, the emotional cycle peaks
        let bio = Biorhythm::new(birthday, birthday + 7);
        assert!((bio.emotional - 1.0).abs() < 1e-9);
        let bio = Biorhythm::new(birthday, birthday + 21);
        assert!((bio.emotional + 1.0).abs() < 1e-9);
    }

    #[test]
    fn levels() {
        use BiorhythmLevel::*;
        let dataset = [
            (1.0, VeryHigh),
            (0.79, High),
            (0.3, High),
            (0.29, Neutral),
            (-0.29, Neutral),
            (-0.3, Low),
            (-0.8, Low),
            (-0.81, VeryLow),
            (-1.0, VeryLow),
        ];
        for (value, std) in dataset {
            assert_eq!(std, BiorhythmLevel::from_value(value), "{value}");
        }
    }
}
