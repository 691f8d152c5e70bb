//! Pregnancy progress calculations.
//!
//! Pure date math for the progress card: gestational week and day,
//! trimester, days remaining, percent complete, and the week-by-week
//! baby size comparison. Progress is always derived fresh from a due
//! date or a recorded week; nothing here touches storage.
//!
//! All calculators are total functions: out-of-range inputs clamp to
//! the nearest representable value instead of returning errors.

use chrono::NaiveDate;
use once_cell::sync::Lazy;

/// Full-term gestation length in days (40 weeks).
pub const FULL_TERM_DAYS: i64 = 280;

/// Weeks in a full-term gestation.
pub const FULL_TERM_WEEKS: u32 = 40;

/// Latest week the tracker reports; overdue pregnancies clamp here.
pub const MAX_TRACKED_WEEK: u32 = 42;

/// Last week of the first trimester.
const FIRST_TRIMESTER_END: u32 = 12;

/// Last week of the second trimester.
const SECOND_TRIMESTER_END: u32 = 26;

/// First week with a size comparison entry.
const SIZE_TABLE_FIRST_WEEK: u32 = 4;

/// Trimester of a pregnancy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trimester {
    First,
    Second,
    Third,
}

impl Trimester {
    /// Bucket a gestational week into its trimester
    pub fn for_week(week: u32) -> Self {
        if week <= FIRST_TRIMESTER_END {
            Trimester::First
        } else if week <= SECOND_TRIMESTER_END {
            Trimester::Second
        } else {
            Trimester::Third
        }
    }

    pub fn number(&self) -> u8 {
        match self {
            Trimester::First => 1,
            Trimester::Second => 2,
            Trimester::Third => 3,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Trimester::First => "1st Trimester",
            Trimester::Second => "2nd Trimester",
            Trimester::Third => "3rd Trimester",
        }
    }
}

/// Size comparison entry for one gestational week
#[derive(Debug, Clone, PartialEq)]
pub struct BabySizeEntry {
    pub week: u32,
    pub name: &'static str,
    pub emoji: &'static str,
    /// Approximate crown-to-rump or crown-to-heel length
    pub size: &'static str,
}

/// Week-by-week size comparisons, weeks 4 through 40.
static BABY_SIZES: Lazy<Vec<BabySizeEntry>> = Lazy::new(|| {
    vec![
        BabySizeEntry { week: 4, name: "Poppy seed", emoji: "🌱", size: "0.1 cm" },
        BabySizeEntry { week: 5, name: "Sesame seed", emoji: "🌾", size: "0.3 cm" },
        BabySizeEntry { week: 6, name: "Lentil", emoji: "🫘", size: "0.5 cm" },
        BabySizeEntry { week: 7, name: "Blueberry", emoji: "🫐", size: "1.0 cm" },
        BabySizeEntry { week: 8, name: "Raspberry", emoji: "🍇", size: "1.6 cm" },
        BabySizeEntry { week: 9, name: "Cherry", emoji: "🍒", size: "2.3 cm" },
        BabySizeEntry { week: 10, name: "Kumquat", emoji: "🍊", size: "3.1 cm" },
        BabySizeEntry { week: 11, name: "Fig", emoji: "🍈", size: "4.1 cm" },
        BabySizeEntry { week: 12, name: "Lime", emoji: "🍋", size: "5.4 cm" },
        BabySizeEntry { week: 13, name: "Pea pod", emoji: "🫛", size: "7.4 cm" },
        BabySizeEntry { week: 14, name: "Lemon", emoji: "🍋", size: "8.7 cm" },
        BabySizeEntry { week: 15, name: "Apple", emoji: "🍎", size: "10.1 cm" },
        BabySizeEntry { week: 16, name: "Avocado", emoji: "🥑", size: "11.6 cm" },
        BabySizeEntry { week: 17, name: "Pear", emoji: "🍐", size: "13.0 cm" },
        BabySizeEntry { week: 18, name: "Bell pepper", emoji: "🫑", size: "14.2 cm" },
        BabySizeEntry { week: 19, name: "Tomato", emoji: "🍅", size: "15.3 cm" },
        BabySizeEntry { week: 20, name: "Banana", emoji: "🍌", size: "16.4 cm" },
        BabySizeEntry { week: 21, name: "Carrot", emoji: "🥕", size: "26.7 cm" },
        BabySizeEntry { week: 22, name: "Papaya", emoji: "🍈", size: "27.8 cm" },
        BabySizeEntry { week: 23, name: "Grapefruit", emoji: "🍊", size: "28.9 cm" },
        BabySizeEntry { week: 24, name: "Ear of corn", emoji: "🌽", size: "30.0 cm" },
        BabySizeEntry { week: 25, name: "Rutabaga", emoji: "🥔", size: "34.6 cm" },
        BabySizeEntry { week: 26, name: "Scallion bunch", emoji: "🥬", size: "35.6 cm" },
        BabySizeEntry { week: 27, name: "Cauliflower", emoji: "🥦", size: "36.6 cm" },
        BabySizeEntry { week: 28, name: "Eggplant", emoji: "🍆", size: "37.6 cm" },
        BabySizeEntry { week: 29, name: "Butternut squash", emoji: "🎃", size: "38.6 cm" },
        BabySizeEntry { week: 30, name: "Cabbage", emoji: "🥬", size: "39.9 cm" },
        BabySizeEntry { week: 31, name: "Coconut", emoji: "🥥", size: "41.1 cm" },
        BabySizeEntry { week: 32, name: "Jicama", emoji: "🥔", size: "42.4 cm" },
        BabySizeEntry { week: 33, name: "Pineapple", emoji: "🍍", size: "43.7 cm" },
        BabySizeEntry { week: 34, name: "Cantaloupe", emoji: "🍈", size: "45.0 cm" },
        BabySizeEntry { week: 35, name: "Honeydew melon", emoji: "🍈", size: "46.2 cm" },
        BabySizeEntry { week: 36, name: "Romaine lettuce", emoji: "🥬", size: "47.4 cm" },
        BabySizeEntry { week: 37, name: "Swiss chard", emoji: "🥬", size: "48.6 cm" },
        BabySizeEntry { week: 38, name: "Leek", emoji: "🥬", size: "49.8 cm" },
        BabySizeEntry { week: 39, name: "Small watermelon", emoji: "🍉", size: "50.7 cm" },
        BabySizeEntry { week: 40, name: "Pumpkin", emoji: "🎃", size: "51.2 cm" },
    ]
});

/// Look up the size comparison for a gestational week.
///
/// Weeks outside the table clamp to its edges, so week 2 reports the
/// week-4 entry and week 45 reports the week-40 entry.
pub fn baby_size_for_week(week: u32) -> &'static BabySizeEntry {
    let clamped = week.clamp(SIZE_TABLE_FIRST_WEEK, FULL_TERM_WEEKS);
    BABY_SIZES
        .iter()
        .find(|entry| entry.week == clamped)
        .unwrap_or_else(|| &BABY_SIZES[BABY_SIZES.len() - 1])
}

/// Derived pregnancy progress snapshot
#[derive(Debug, Clone, PartialEq)]
pub struct PregnancyInfo {
    /// Gestational week, 1 to 42
    pub current_week: u32,
    /// Day offset within the current week, 0 to 6
    pub current_day: u32,
    pub trimester: Trimester,
    /// Whole days until a 280-day gestation completes, never negative
    pub days_remaining: u32,
    /// Percent of a 40-week gestation completed, capped at 100
    pub progress_percentage: f64,
    pub baby_size: &'static BabySizeEntry,
}

/// Core derivation shared by all calculators.
///
/// `day_of_pregnancy` may be negative (due date far in the future) or
/// past term; both are clamped before week/day extraction.
fn build_info(day_of_pregnancy: i64, days_remaining: i64) -> PregnancyInfo {
    let day = day_of_pregnancy.clamp(0, (MAX_TRACKED_WEEK as i64) * 7 + 6);
    let current_week = ((day / 7) as u32).max(1);
    let current_day = (day % 7) as u32;
    let progress =
        ((current_week as f64 / FULL_TERM_WEEKS as f64) * 100.0).min(100.0);

    PregnancyInfo {
        current_week,
        current_day,
        trimester: Trimester::for_week(current_week),
        days_remaining: days_remaining.max(0) as u32,
        progress_percentage: progress,
        baby_size: baby_size_for_week(current_week),
    }
}

/// Compute progress from a due date.
///
/// The days remaining are counted in whole days and never go negative;
/// once the due date has passed they stay at zero.
pub fn calculate_from_due_date(today: NaiveDate, due_date: NaiveDate) -> PregnancyInfo {
    let days_remaining = (due_date - today).num_days().max(0);
    build_info(FULL_TERM_DAYS - days_remaining, days_remaining)
}

/// Compute progress from a manually entered week.
///
/// The week clamps to 1..=42. A bare week number carries no sub-week
/// information, so the day offset is always 0.
pub fn calculate_from_week(week: u32) -> PregnancyInfo {
    let week = week.clamp(1, MAX_TRACKED_WEEK) as i64;
    let days_remaining = (FULL_TERM_WEEKS as i64 - week).max(0) * 7;
    build_info(week * 7, days_remaining)
}

/// Compute progress from a week recorded on a known date.
///
/// The stored week advances by the whole weeks elapsed since it was
/// recorded, and the leftover days become the real day offset.
pub fn calculate_from_recorded_week(
    week: u32,
    recorded_on: NaiveDate,
    today: NaiveDate,
) -> PregnancyInfo {
    let week = week.clamp(1, MAX_TRACKED_WEEK) as i64;
    let elapsed_days = (today - recorded_on).num_days().max(0);
    let day_of_pregnancy = week * 7 + elapsed_days;
    build_info(day_of_pregnancy, FULL_TERM_DAYS - day_of_pregnancy)
}

/// Format a baby's age from their birth date.
///
/// Under a week the age is counted in days, under 30 days in weeks,
/// and in 30-day months after that. Singular units are not pluralized.
/// A birth date in the future clamps to "0 days".
pub fn format_baby_age(birthdate: NaiveDate, today: NaiveDate) -> String {
    let days = (today - birthdate).num_days().max(0);

    if days < 7 {
        pluralize(days, "day")
    } else if days < 30 {
        pluralize(days / 7, "week")
    } else {
        pluralize(days / 30, "month")
    }
}

fn pluralize(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {}", unit)
    } else {
        format!("{} {}s", count, unit)
    }
}
