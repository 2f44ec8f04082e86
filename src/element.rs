//! The five elements (五行) and how a birth element meets the element of the day.

use serde::{Deserialize, Serialize};

use crate::date::Date;

/// One of the five elements.
///
/// The declaration order is the generating cycle: each element supports (生)
/// the next one and restrains (克) the one after that.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FiveElement {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

/// Element of a birth year, indexed by `(year - 4) mod 10`.
const BIRTH_ELEMENTS: [FiveElement; 10] = {
    use FiveElement::*;
    [Metal, Metal, Water, Water, Wood, Wood, Fire, Fire, Earth, Earth]
};

impl FiveElement {
    pub const ALL: [FiveElement; 5] = {
        use FiveElement::*;
        [Wood, Fire, Earth, Metal, Water]
    };

    /// Position in [`FiveElement::ALL`].
    pub fn index(&self) -> usize {
        *self as usize
    }

    fn nth_after(&self, n: usize) -> Self {
        Self::ALL[(self.index() + n) % 5]
    }

    /// The element this one generates (相生).
    ///
    /// # Example
    ///
    /// ```
    /// use huangli::element::FiveElement;
    ///
    /// assert_eq!(FiveElement::Fire, FiveElement::Wood.supports());
    /// assert_eq!(FiveElement::Wood, FiveElement::Water.supports());
    /// ```
    pub fn supports(&self) -> Self {
        self.nth_after(1)
    }

    /// The element that generates this one.
    pub fn supported_by(&self) -> Self {
        self.nth_after(4)
    }

    /// The element this one overcomes (相克).
    pub fn restrains(&self) -> Self {
        self.nth_after(2)
    }

    /// The element that overcomes this one.
    pub fn restrained_by(&self) -> Self {
        self.nth_after(3)
    }

    pub fn name(&self) -> &'static str {
        ["木", "火", "土", "金", "水"][self.index()]
    }

    pub fn characteristics(&self) -> &'static str {
        use FiveElement::*;
        match self {
            Wood => "仁慈正直，积极向上，宜舒展生发",
            Fire => "热情开朗，充满活力，宜张弛有度",
            Earth => "诚实稳重，包容厚道，宜守中求成",
            Metal => "果断坚毅，重义守信，宜刚柔并济",
            Water => "聪慧灵活，善于变通，宜顺势而为",
        }
    }

    pub fn lucky_colors(&self) -> [&'static str; 3] {
        use FiveElement::*;
        match self {
            Wood => ["绿色", "青色", "碧色"],
            Fire => ["红色", "紫色", "橙色"],
            Earth => ["黄色", "棕色", "咖啡色"],
            Metal => ["白色", "金色", "银色"],
            Water => ["黑色", "蓝色", "灰色"],
        }
    }
}

/// How well the element of the day sits with a birth element.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementCompatibility {
    VeryGood,
    Good,
    Neutral,
    Poor,
}

impl ElementCompatibility {
    pub fn name(&self) -> &'static str {
        use ElementCompatibility::*;
        match self {
            VeryGood => "相生",
            Good => "比和",
            Neutral => "平和",
            Poor => "相克",
        }
    }
}

/// The element of a birth year.
///
/// Consecutive years share an element, following `(year - 4) mod 10` into a
/// fixed table.
///
/// # Example
///
/// ```
/// use huangli::element::{FiveElement, birth_element};
///
/// assert_eq!(FiveElement::Fire, birth_element(1990));
/// assert_eq!(FiveElement::Metal, birth_element(1984));
/// ```
pub fn birth_element(year: i32) -> FiveElement {
    BIRTH_ELEMENTS[(year - 4).rem_euclid(10) as usize]
}

/// The element of a day, cycling through [`FiveElement::ALL`] by day of year.
pub fn daily_element(date: Date) -> FiveElement {
    FiveElement::ALL[date.day_of_year().rem_euclid(5) as usize]
}

/// Compares the element of the day with a birth element.
///
/// A day either generating or generated by the birth element is very good, the
/// same element is good, and an overcoming relation in either direction is
/// poor.
pub fn compatibility(birth: FiveElement, daily: FiveElement) -> ElementCompatibility {
    if daily == birth.supports() || daily == birth.supported_by() {
        ElementCompatibility::VeryGood
    } else if daily == birth {
        ElementCompatibility::Good
    } else if daily == birth.restrained_by() || daily == birth.restrains() {
        ElementCompatibility::Poor
    } else {
        ElementCompatibility::Neutral
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycles() {
        use FiveElement::*;
        let dataset = [
            (Wood, Fire, Water, Earth, Metal),
            (Fire, Earth, Wood, Metal, Water),
            (Earth, Metal, Fire, Water, Wood),
            (Metal, Water, Earth, Wood, Fire),
            (Water, Wood, Metal, Fire, Earth),
        ];
        for (elem, supports, supported_by, restrains, restrained_by) in dataset {
            assert_eq!(supports, elem.supports());
            assert_eq!(supported_by, elem.supported_by());
            assert_eq!(restrains, elem.restrains());
            assert_eq!(restrained_by, elem.restrained_by());
        }
    }

    #[test]
    fn relations_are_inverse() {
        for elem in FiveElement::ALL {
            assert_eq!(elem, elem.supports().supported_by());
            assert_eq!(elem, elem.restrains().restrained_by());
            assert_ne!(elem, elem.supports());
            assert_ne!(elem, elem.restrains());
        }
    }

    #[test]
    fn birth_elements() {
        use FiveElement::*;
        let dataset = [
            (1984, Metal),
            (1985, Metal),
            (1986, Water),
            (1988, Wood),
            (1990, Fire),
            (1991, Fire),
            (1992, Earth),
            (1993, Earth),
            (1994, Metal),
            (2024, Metal),
        ];
        for (year, std) in dataset {
            assert_eq!(std, birth_element(year), "{year}");
        }
    }

    #[test]
    fn daily_elements() {
        use FiveElement::*;
        let dataset = [
            ((2024, 1, 1), Fire),
            ((2024, 1, 4), Water),
            ((2024, 1, 5), Wood),
            ((2024, 2, 10), Fire),
            ((2024, 6, 15), Earth),
        ];
        for ((y, m, d), std) in dataset {
            assert_eq!(std, daily_element(Date::from_gregorian(y, m, d).unwrap()));
        }
    }

    #[test]
    fn compatibilities() {
        use ElementCompatibility::*;
        use FiveElement::*;
        let dataset = [
            ((Fire, Earth), VeryGood),
            ((Fire, Wood), VeryGood),
            ((Fire, Fire), Good),
            ((Fire, Water), Poor),
            ((Fire, Metal), Poor),
            ((Metal, Earth), VeryGood),
        ];
        for ((birth, daily), std) in dataset {
            assert_eq!(std, compatibility(birth, daily), "{birth:?} vs {daily:?}");
        }
    }
}
