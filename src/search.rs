//! Auspicious-day search.
//!
//! A day is auspicious for an event when any of its 宜 activities contains
//! one of the event's keywords. Matching days get a rating and come back
//! sorted best first.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::advice::advice_for;
use crate::chinese::{LunarDate, to_lunar};
use crate::config::RatingOrder;
use crate::date::{Date, DateRange};
use crate::error::SearchError;
use crate::fortune::FortuneLevel;

/// Event a day can be searched for.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    Wedding,
    Moving,
    Business,
    Travel,
    Investment,
    Meeting,
}

impl EventType {
    pub const ALL: [EventType; 6] = {
        use EventType::*;
        [Wedding, Moving, Business, Travel, Investment, Meeting]
    };

    /// Position in [`EventType::ALL`].
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn name(&self) -> &'static str {
        use EventType::*;
        match self {
            Wedding => "结婚",
            Moving => "搬家",
            Business => "开业",
            Travel => "出行",
            Investment => "投资",
            Meeting => "会议",
        }
    }

    /// Keywords looked for in a day's 宜 list.
    pub fn keywords(&self) -> &'static [&'static str] {
        use EventType::*;
        match self {
            Wedding => &["嫁娶", "结婚", "祈福", "纳财"],
            Moving => &["搬家", "入宅", "移徙", "安床"],
            Business => &["开业", "开市", "立券", "交易"],
            Travel => &["出行", "远行"],
            Investment => &["投资", "交易", "签约", "纳财"],
            Meeting => &["会友", "聚会", "商议"],
        }
    }
}

/// A day found suitable for an event.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize)]
pub struct AuspiciousDay {
    pub date: Date,
    pub lunar: LunarDate,
    /// The full 宜 list of the day.
    pub suitable_events: Vec<&'static str>,
    pub rating: FortuneLevel,
    pub description: String,
}

/// Shared flag for stopping a search from another thread.
///
/// Clones share the flag; cancelling any clone cancels them all.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Rating of `date` for `event`: `(day of year + event index * 7 + lunar month
/// + lunar day) mod 5` steps from [`FortuneLevel::Excellent`].
pub fn rating(date: Date, lunar: &LunarDate, event: EventType) -> FortuneLevel {
    let sum = date.day_of_year().unsigned_abs()
        + event.index() as u32 * 7
        + lunar.month_value()
        + lunar.day_value();
    FortuneLevel::nth(sum)
}

/// Checks a single day, returning it if it suits `event`.
pub fn check_day(date: Date, event: EventType) -> Option<AuspiciousDay> {
    let lunar = to_lunar(date);
    let advice = advice_for(date, &lunar);
    if !advice.suits_any(event.keywords()) {
        return None;
    }
    let rating = rating(date, &lunar, event);
    Some(AuspiciousDay {
        date,
        lunar,
        suitable_events: advice.suitable,
        rating,
        description: format!("此日适宜{}，{}之日。", event.name(), rating.name()),
    })
}

/// Scans every day of `range` for `event`.
///
/// The range is not bounded here; see [`find_auspicious_days_cancellable`]
/// for a search that can be limited and stopped.
///
/// # Example
///
/// ```
/// use huangli::Date;
/// use huangli::config::RatingOrder;
/// use huangli::date::DateRange;
/// use huangli::fortune::FortuneLevel;
/// use huangli::search::{EventType, find_auspicious_days};
///
/// let range = DateRange::new(
///     Date::from_gregorian(2024, 1, 1).unwrap(),
///     Date::from_gregorian(2024, 1, 31).unwrap(),
/// )
/// .unwrap();
/// let days = find_auspicious_days(EventType::Wedding, range, RatingOrder::Rank);
/// assert_eq!(17, days.len());
/// assert_eq!("2024-01-05", days[0].date.iso_gregorian());
/// assert_eq!(FortuneLevel::Excellent, days[0].rating);
/// ```
pub fn find_auspicious_days(event: EventType, range: DateRange, order: RatingOrder) -> Vec<AuspiciousDay> {
    // a fresh token with no limit never fails
    find_auspicious_days_cancellable(event, range, order, None, &CancelToken::new()).unwrap_or_default()
}

/// Like [`find_auspicious_days`], but rejects ranges longer than `limit` days
/// and checks `cancel` before every day.
pub fn find_auspicious_days_cancellable(
    event: EventType,
    range: DateRange,
    order: RatingOrder,
    limit: Option<u32>,
    cancel: &CancelToken,
) -> Result<Vec<AuspiciousDay>, SearchError> {
    if let Some(limit) = limit.filter(|&limit| range.days() > limit) {
        return Err(SearchError::RangeTooLong {
            days: range.days(),
            limit,
        });
    }
    let mut days = Vec::new();
    for (scanned, date) in range.iter().enumerate() {
        if cancel.is_cancelled() {
            debug!(event = event.name(), scanned, "search cancelled");
            return Err(SearchError::Cancelled {
                scanned: scanned as u32,
            });
        }
        trace!(%date, "checking day");
        days.extend(check_day(date, event));
    }
    sort(&mut days, order);
    debug!(event = event.name(), start = %range.start(), end = %range.end(), found = days.len(), "search finished");
    Ok(days)
}

/// Stable, so equal ratings keep date order.
fn sort(days: &mut [AuspiciousDay], order: RatingOrder) {
    match order {
        RatingOrder::Rank => days.sort_by_key(|day| day.rating),
        RatingOrder::Label => days.sort_by(|a, b| b.rating.name().cmp(a.rating.name())),
    }
}
