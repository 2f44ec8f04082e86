use chrono::{Duration, NaiveDate};
use proptest::prelude::*;

use huangli::biorhythm::Biorhythm;
use huangli::chinese::try_to_lunar;
use huangli::config::{RatingOrder, ZodiacYearBasis};
use huangli::element::{FiveElement, birth_element};
use huangli::numerology::life_path;
use huangli::search::find_auspicious_days;
use huangli::zodiac::ChineseZodiac;
use huangli::{Date, DateRange, EventType, UserProfile, advice, fortune};

/// 1900-01-31, the first day of the lunar table, plus `days`.
fn date_from(days: i64) -> Date {
    let base = NaiveDate::from_ymd_opt(1900, 1, 31).unwrap();
    let naive = base.checked_add_signed(Duration::days(days)).unwrap();
    Date::try_from(naive).unwrap()
}

proptest! {
    /// Advice is a pure function of the date.
    #[test]
    fn advice_is_idempotent(days in 0i64..73000) {
        let date = date_from(days);
        prop_assert_eq!(advice::advice(date), advice::advice(date));
    }

    /// 宜 and 忌 never overlap and stay within their size bounds.
    #[test]
    fn advice_lists_are_disjoint(days in 0i64..73000) {
        let advice = advice::advice(date_from(days));
        prop_assert!((3..=9).contains(&advice.suitable.len()), "{:?}", advice);
        prop_assert!((2..=6).contains(&advice.unsuitable.len()), "{:?}", advice);
        for item in &advice.suitable {
            prop_assert!(!advice.unsuitable.contains(item), "{} in both lists", item);
        }
    }

    /// Every day inside the table converts, and the next day either continues
    /// the month or starts a new one.
    #[test]
    fn lunar_days_are_contiguous(days in 0i64..73000) {
        let date = date_from(days);
        let today = try_to_lunar(date).unwrap();
        let tomorrow = try_to_lunar(date + 1).unwrap();
        prop_assert!((1..=30).contains(&today.ymd.2));
        if tomorrow.ymd.2 != 1 {
            prop_assert_eq!(today.ymd.1, tomorrow.ymd.1);
            prop_assert_eq!(today.ymd.2 + 1, tomorrow.ymd.2);
        } else {
            prop_assert!((29..=30).contains(&today.ymd.2));
        }
    }

    #[test]
    fn chinese_zodiac_has_period_12(year in -5000i32..5000) {
        prop_assert_eq!(ChineseZodiac::for_year(year), ChineseZodiac::for_year(year + 12));
        let animals: Vec<_> = (year..year + 12).map(ChineseZodiac::for_year).collect();
        for animal in ChineseZodiac::ALL {
            prop_assert!(animals.contains(&animal));
        }
    }

    #[test]
    fn element_cycles_close(year in 1900i32..2100) {
        let elem = birth_element(year);
        let five = |f: fn(&FiveElement) -> FiveElement| (0..5).fold(elem, |e, _| f(&e));
        prop_assert_eq!(elem, five(FiveElement::supports));
        prop_assert_eq!(elem, five(FiveElement::restrained_by));
        prop_assert_ne!(elem, elem.supports());
        prop_assert_ne!(elem, elem.restrained_by());
    }

    #[test]
    fn life_path_is_a_digit(days in 0i64..73000) {
        let path = life_path(date_from(days));
        prop_assert!((1..=9).contains(&path.number()));
    }

    #[test]
    fn biorhythm_is_bounded(birth in 0i64..73000, today in 0i64..73000) {
        let bio = Biorhythm::new(date_from(birth), date_from(today));
        for value in [bio.physical, bio.emotional, bio.intellectual] {
            prop_assert!((-1.0..=1.0).contains(&value), "{:?}", bio);
        }
    }

    /// Same inputs, same fortune.
    #[test]
    fn fortune_is_deterministic(birth in 0i64..73000, today in 0i64..73000) {
        let profile = UserProfile::new(date_from(birth), ZodiacYearBasis::Gregorian);
        let date = date_from(today);
        let fortune = fortune::personal_fortune(date, &profile);
        prop_assert!(fortune.fortune_index < 100);
        prop_assert!((1..=9).contains(&fortune.lucky_number));
        prop_assert_eq!(fortune, fortune::personal_fortune(date, &profile));
    }

    /// Search results lie in the range and match the event's keywords.
    #[test]
    fn search_results_match(days in 0i64..72900, len in 0i64..60, event in 0usize..6) {
        let event = EventType::ALL[event];
        let range = DateRange::new(date_from(days), date_from(days + len)).unwrap();
        for day in find_auspicious_days(event, range, RatingOrder::Rank) {
            prop_assert!(range.contains(day.date));
            prop_assert!(day
                .suitable_events
                .iter()
                .any(|item| event.keywords().iter().any(|kw| item.contains(kw))));
        }
    }

    #[test]
    fn chrono_round_trip(days in 0i64..73000) {
        let date = date_from(days);
        let naive = date.to_naive().unwrap();
        prop_assert_eq!(date.iso_gregorian(), naive.to_string());
        prop_assert_eq!(date, Date::try_from(naive).unwrap());
    }
}
