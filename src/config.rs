//! Engine configuration.
//!
//! Every field has a default, so an empty document deserializes to
//! [`Config::default`].

use serde::{Deserialize, Serialize};

/// Which year decides the Chinese zodiac of a birthday.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZodiacYearBasis {
    /// The Gregorian year, so January births before 春节 count for the new animal.
    #[default]
    Gregorian,
    /// The lunar year, which changes on 正月初一.
    Lunar,
}

/// How auspicious-day results are ordered.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RatingOrder {
    /// Best rating first; days of equal rating stay in date order.
    #[default]
    Rank,
    /// Descending by rating label as a string: 平, 大吉, 大凶, 吉, 凶.
    Label,
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub zodiac_year_basis: ZodiacYearBasis,
    pub rating_order: RatingOrder,
    /// Longest range, in days, an auspicious-day search accepts. `None` for no
    /// limit.
    pub max_search_days: Option<u32>,
}

impl Config {
    pub fn with_zodiac_year_basis(mut self, basis: ZodiacYearBasis) -> Self {
        self.zodiac_year_basis = basis;
        self
    }

    pub fn with_rating_order(mut self, order: RatingOrder) -> Self {
        self.rating_order = order;
        self
    }

    pub fn with_max_search_days(mut self, limit: u32) -> Self {
        self.max_search_days = Some(limit);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builders() {
        let config = Config::default()
            .with_zodiac_year_basis(ZodiacYearBasis::Lunar)
            .with_rating_order(RatingOrder::Label)
            .with_max_search_days(366);
        assert_eq!(ZodiacYearBasis::Lunar, config.zodiac_year_basis);
        assert_eq!(RatingOrder::Label, config.rating_order);
        assert_eq!(Some(366), config.max_search_days);
    }

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(ZodiacYearBasis::Gregorian, config.zodiac_year_basis);
        assert_eq!(RatingOrder::Rank, config.rating_order);
        assert_eq!(None, config.max_search_days);
    }
}
