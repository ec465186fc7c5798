//! Public holiday rule set.
//!
//! French public holidays: a closed list of fixed dates plus the movable
//! feasts derived from Easter via the Gaussian algorithm. Parameterized by
//! a locale/subdivision code; the Alsace–Moselle departments observe two
//! additional days. Unsupported codes fail explicitly rather than silently
//! returning an empty set.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::DateRange;

/// Days from Easter Sunday to Easter Monday.
const EASTER_MONDAY_OFFSET_DAYS: i64 = 1;

/// Days from Easter Sunday to Ascension Thursday.
const ASCENSION_OFFSET_DAYS: i64 = 39;

/// Days from Easter Sunday back to Good Friday (Alsace–Moselle only).
const GOOD_FRIDAY_OFFSET_DAYS: i64 = -2;

/// Represents a public holiday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicHoliday {
    /// The date of the public holiday.
    pub date: NaiveDate,
    /// The name of the public holiday (e.g. "Fête nationale").
    pub name: String,
}

/// The holiday zone a locale code resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HolidayZone {
    /// Metropolitan France and overseas departments: the standard 11-day list.
    Metropolitan,
    /// Moselle, Bas-Rhin and Haut-Rhin: the standard list plus Good Friday
    /// and Saint Stephen's Day.
    AlsaceMoselle,
}

impl HolidayZone {
    /// Resolves a locale/subdivision code (`FR`, `FR-75`, `FR-57`, …).
    ///
    /// # Errors
    ///
    /// [`EngineError::UnsupportedLocale`] for anything that is not France
    /// or not a known department code.
    pub fn parse(code: &str) -> EngineResult<Self> {
        if code == "FR" {
            return Ok(HolidayZone::Metropolitan);
        }
        let department = code
            .strip_prefix("FR-")
            .ok_or_else(|| EngineError::UnsupportedLocale {
                code: code.to_string(),
            })?;
        match department {
            "57" | "67" | "68" => Ok(HolidayZone::AlsaceMoselle),
            "2A" | "2B" => Ok(HolidayZone::Metropolitan),
            _ => {
                let number: u32 =
                    department
                        .parse()
                        .map_err(|_| EngineError::UnsupportedLocale {
                            code: code.to_string(),
                        })?;
                if (1..=95).contains(&number) || (971..=976).contains(&number) {
                    Ok(HolidayZone::Metropolitan)
                } else {
                    Err(EngineError::UnsupportedLocale {
                        code: code.to_string(),
                    })
                }
            }
        }
    }
}

/// Computes Easter Sunday for `year` using the Gaussian algorithm.
fn easter_sunday(year: i32) -> NaiveDate {
    let a = year % 19;
    let b = year % 4;
    let c = year % 7;
    let k = year / 100;
    let p = (13 + 8 * k) / 25;
    let q = k / 4;
    let m = (15 - p + k - q) % 30;
    let n = (4 + k - q) % 7;
    let d = (19 * a + m) % 30;
    let e = (2 * b + 4 * c + 6 * d + n) % 7;

    let march_day = 22 + d + e;
    // The two classical exceptions of the Gaussian computus.
    let march_day = if d == 29 && e == 6 {
        50 // April 19
    } else if d == 28 && e == 6 && (11 * m + 11) % 30 < 19 {
        49 // April 18
    } else {
        march_day
    };

    let base = NaiveDate::from_ymd_opt(year, 3, 1).expect("March 1st exists");
    base + Duration::days(i64::from(march_day) - 1)
}

fn fixed(year: i32, month: u32, day: u32, name: &str) -> PublicHoliday {
    PublicHoliday {
        date: NaiveDate::from_ymd_opt(year, month, day).expect("fixed holiday date is valid"),
        name: name.to_string(),
    }
}

/// The public holidays of `year` for `zone`, ordered by date.
pub fn holidays_in_year(year: i32, zone: HolidayZone) -> Vec<PublicHoliday> {
    let easter = easter_sunday(year);
    let mut holidays = vec![
        fixed(year, 1, 1, "Jour de l'an"),
        PublicHoliday {
            date: easter + Duration::days(EASTER_MONDAY_OFFSET_DAYS),
            name: "Lundi de Pâques".to_string(),
        },
        fixed(year, 5, 1, "Fête du Travail"),
        fixed(year, 5, 8, "Victoire 1945"),
        PublicHoliday {
            date: easter + Duration::days(ASCENSION_OFFSET_DAYS),
            name: "Ascension".to_string(),
        },
        fixed(year, 7, 14, "Fête nationale"),
        fixed(year, 8, 15, "Assomption"),
        fixed(year, 11, 1, "Toussaint"),
        fixed(year, 11, 11, "Armistice 1918"),
        fixed(year, 12, 25, "Noël"),
    ];
    if zone == HolidayZone::AlsaceMoselle {
        holidays.push(PublicHoliday {
            date: easter + Duration::days(GOOD_FRIDAY_OFFSET_DAYS),
            name: "Vendredi saint".to_string(),
        });
        holidays.push(fixed(year, 12, 26, "Saint-Étienne"));
    }
    holidays.sort_by_key(|h| h.date);
    holidays
}

/// The public holidays falling inside `range` for `zone`, ordered by date.
pub fn holidays_in_range(range: &DateRange, zone: HolidayZone) -> Vec<PublicHoliday> {
    let mut holidays: Vec<PublicHoliday> = (range.start().year()..=range.end().year())
        .flat_map(|year| holidays_in_year(year, zone))
        .filter(|h| range.contains(h.date))
        .collect();
    holidays.sort_by_key(|h| h.date);
    holidays
}

/// Whether `date` is a public holiday in `zone`.
pub fn is_public_holiday(date: NaiveDate, zone: HolidayZone) -> bool {
    holidays_in_year(date.year(), zone)
        .iter()
        .any(|h| h.date == date)
}
