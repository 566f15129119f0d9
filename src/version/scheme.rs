//! Versioning schemes and the ordered matcher table that classifies them

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::version::clock::Clock;
use crate::version::compare::{SEPARATORS, max_version, split_components};
use crate::version::error::UnknownSchemeError;

/// Leading components above this value are treated as date stamps or typos
/// and never compete for "latest" in the numeric schemes.
const MAX_PLAIN_LEAD: u32 = 1000;

/// Earliest year accepted by the year-based schemes
const MIN_RELEASE_YEAR: i32 = 2000;

/// A recognized shape of version string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum VersionScheme {
    /// `59`, `56c`
    #[serde(rename = "x")]
    X,
    /// `1.2`
    #[serde(rename = "x.y")]
    XY,
    /// `1.2.3`
    #[serde(rename = "x.y.z")]
    XYZ,
    /// `1.1.2.1`
    #[serde(rename = "x.y.z.w")]
    XYZW,
    /// `2020.3`
    #[serde(rename = "yyyy.x")]
    YyyyX,
    /// `2020.1.4`
    #[serde(rename = "yyyy.x.y")]
    YyyyXY,
    /// `2020.003`; two-digit months are claimed by `yyyy.x` first
    #[serde(rename = "yyyy.mm")]
    YyyyMm,
    /// `2020.03.15`, `2020_03_15`
    #[serde(rename = "yyyy.mm.dd")]
    YyyyMmDd,
    /// `2020a`, `20203`: a year plus one trailing character
    #[serde(rename = "yyyyw")]
    YyyyW,
    /// `202003`
    #[serde(rename = "yyyymm")]
    Yyyymm,
    /// `20200315`
    #[serde(rename = "yyyymmdd")]
    Yyyymmdd,
    /// `1.2003.5`
    #[serde(rename = "x.yymm.z")]
    XYymmZ,
}

impl VersionScheme {
    /// Matcher priority. The first scheme whose matcher accepts a version wins,
    /// so earlier entries shadow later ones where shapes overlap (`yyyy.x`
    /// claims `2020.03` before `yyyy.mm` is consulted). Reordering this table
    /// changes recommendations for real packages.
    pub const MATCH_ORDER: [VersionScheme; 12] = [
        VersionScheme::X,
        VersionScheme::XY,
        VersionScheme::XYZ,
        VersionScheme::XYZW,
        VersionScheme::YyyyX,
        VersionScheme::YyyyXY,
        VersionScheme::YyyyMm,
        VersionScheme::YyyyMmDd,
        VersionScheme::YyyyW,
        VersionScheme::Yyyymm,
        VersionScheme::Yyyymmdd,
        VersionScheme::XYymmZ,
    ];

    /// Returns the string representation of the scheme
    pub fn as_str(&self) -> &'static str {
        match self {
            VersionScheme::X => "x",
            VersionScheme::XY => "x.y",
            VersionScheme::XYZ => "x.y.z",
            VersionScheme::XYZW => "x.y.z.w",
            VersionScheme::YyyyX => "yyyy.x",
            VersionScheme::YyyyXY => "yyyy.x.y",
            VersionScheme::YyyyMm => "yyyy.mm",
            VersionScheme::YyyyMmDd => "yyyy.mm.dd",
            VersionScheme::YyyyW => "yyyyw",
            VersionScheme::Yyyymm => "yyyymm",
            VersionScheme::Yyyymmdd => "yyyymmdd",
            VersionScheme::XYymmZ => "x.yymm.z",
        }
    }

    /// Check whether `version` has this scheme's shape as of `today`
    pub fn matches(&self, version: &str, today: NaiveDate) -> bool {
        let version = version.trim();
        let components = split_components(version);

        match self {
            VersionScheme::X => within_lengths(&components, &[3]),
            VersionScheme::XY => within_lengths(&components, &[2, 3]),
            VersionScheme::XYZ => within_lengths(&components, &[2, 2, 3]),
            VersionScheme::XYZW => within_lengths(&components, &[2, 2, 3, 1]),
            VersionScheme::YyyyX => {
                components.len() == 2
                    && release_year(components[0], today).is_some()
                    && within_length(components[1], 2)
            }
            VersionScheme::YyyyXY => {
                components.len() == 3
                    && release_year(components[0], today).is_some()
                    && components[1..].iter().all(|c| is_canonical_number(c, 2))
            }
            VersionScheme::YyyyMm => {
                components.len() == 2
                    && release_year_month(components[0], components[1], today).is_some()
            }
            VersionScheme::YyyyMmDd => {
                components.len() == 3
                    && uses_single_separator(version)
                    && components[0].len() == 4
                    && components[1..].iter().all(|c| c.len() <= 2)
                    && past_date(components[0], components[1], components[2], today)
            }
            VersionScheme::YyyyW => {
                version.chars().count() == 5
                    && version.is_char_boundary(4)
                    && release_year(&version[..4], today).is_some()
                    && !version.ends_with(SEPARATORS)
            }
            VersionScheme::Yyyymm => {
                version.len() == 6
                    && is_digits(version)
                    && release_year_month(&version[..4], &version[4..], today).is_some()
            }
            VersionScheme::Yyyymmdd => {
                version.len() == 8
                    && is_digits(version)
                    && past_date(&version[..4], &version[4..6], &version[6..], today)
            }
            VersionScheme::XYymmZ => {
                components.len() == 3
                    && within_length(components[0], 2)
                    && is_year_month_stamp(components[1], today)
                    && within_length(components[2], 2)
            }
        }
    }

    /// Number of leading components that identify a maintenance line, or
    /// None for schemes without a line concept
    pub fn major_line_len(&self) -> Option<usize> {
        match self {
            VersionScheme::XYZW | VersionScheme::XYZ => Some(2),
            VersionScheme::YyyyXY | VersionScheme::YyyyX => Some(2),
            VersionScheme::X => Some(1),
            VersionScheme::XY
            | VersionScheme::YyyyMm
            | VersionScheme::YyyyMmDd
            | VersionScheme::YyyyW
            | VersionScheme::Yyyymm
            | VersionScheme::Yyyymmdd
            | VersionScheme::XYymmZ => None,
        }
    }

    /// Whether this is one of the plain numeric schemes (`x` .. `x.y.z.w`)
    fn is_numeric(&self) -> bool {
        matches!(
            self,
            VersionScheme::X | VersionScheme::XY | VersionScheme::XYZ | VersionScheme::XYZW
        )
    }

    /// Pick the latest version among `candidates`
    ///
    /// For the numeric schemes only candidates with a plain integer lead of at
    /// most 1000 compete, so `59c` or a stray `20200101` tag never wins over
    /// `59`. When nothing qualifies every candidate competes.
    pub fn latest<'a>(&self, candidates: &'a [String]) -> Option<&'a str> {
        let all = candidates.iter().map(String::as_str);

        if self.is_numeric()
            && let Some(latest) = max_version(all.clone().filter(|v| has_plain_lead(v)))
        {
            return Some(latest);
        }

        max_version(all)
    }

    /// Pick the newest version in the same major line as `current`
    ///
    /// `current` always belongs to its own line, so when no candidate shares
    /// the line the result is `current` itself. Schemes without a line concept
    /// return None.
    pub fn maintain_version<'a>(&self, candidates: &'a [String], current: &'a str) -> Option<&'a str> {
        let line_len = self.major_line_len()?;
        let current_components = split_components(current);
        let line = &current_components[..line_len.min(current_components.len())];

        let members = candidates.iter().map(String::as_str).filter(|candidate| {
            let components = split_components(candidate);
            components.len() >= line.len() && components[..line.len()] == *line
        });

        max_version(members.chain(std::iter::once(current)))
    }
}

impl fmt::Display for VersionScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VersionScheme {
    type Err = UnknownSchemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VersionScheme::MATCH_ORDER
            .into_iter()
            .find(|scheme| scheme.as_str() == s)
            .ok_or_else(|| UnknownSchemeError {
                name: s.to_string(),
            })
    }
}

/// Classify `version` by trying each matcher in [`VersionScheme::MATCH_ORDER`]
///
/// Returns None when no matcher accepts the version.
pub fn classify<C: Clock + ?Sized>(version: &str, clock: &C) -> Option<VersionScheme> {
    let today = clock.today();
    VersionScheme::MATCH_ORDER
        .into_iter()
        .find(|scheme| scheme.matches(version, today))
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn within_length(component: &str, max_len: usize) -> bool {
    component.starts_with(|c: char| c.is_ascii_digit()) && component.chars().count() <= max_len
}

fn within_lengths(components: &[&str], max_lens: &[usize]) -> bool {
    components.len() == max_lens.len()
        && components
            .iter()
            .zip(max_lens)
            .all(|(component, max_len)| within_length(component, *max_len))
}

/// Digits only, at most `max_len` long, and no leading zero (`0` itself is fine)
fn is_canonical_number(component: &str, max_len: usize) -> bool {
    is_digits(component)
        && component.len() <= max_len
        && (component == "0" || !component.starts_with('0'))
}

fn has_plain_lead(version: &str) -> bool {
    split_components(version).first().is_some_and(|lead| {
        is_digits(lead) && lead.parse::<u32>().is_ok_and(|n| n <= MAX_PLAIN_LEAD)
    })
}

fn release_year(component: &str, today: NaiveDate) -> Option<i32> {
    if component.len() != 4 || !is_digits(component) {
        return None;
    }
    let year: i32 = component.parse().ok()?;
    (MIN_RELEASE_YEAR..=today.year()).contains(&year).then_some(year)
}

fn parse_month(component: &str) -> Option<u32> {
    if !is_digits(component) {
        return None;
    }
    let month: u32 = component.parse().ok()?;
    (1..=12).contains(&month).then_some(month)
}

/// A release year plus a month that is not later than the current month
fn release_year_month(year: &str, month: &str, today: NaiveDate) -> Option<(i32, u32)> {
    let year = release_year(year, today)?;
    let month = parse_month(month)?;
    if year == today.year() && month > today.month() {
        return None;
    }
    Some((year, month))
}

fn past_date(year: &str, month: &str, day: &str, today: NaiveDate) -> bool {
    if !is_digits(year) || !is_digits(day) {
        return false;
    }
    let (Some(month), Ok(year), Ok(day)) = (parse_month(month), year.parse::<i32>(), day.parse::<u32>())
    else {
        return false;
    };

    (1..=31).contains(&day)
        && NaiveDate::from_ymd_opt(year, month, day).is_some_and(|date| date <= today)
}

/// `yymm` with a two-digit year not after the current one
fn is_year_month_stamp(component: &str, today: NaiveDate) -> bool {
    if component.len() != 4 || !is_digits(component) {
        return false;
    }
    let current_yy = format!("{:02}", today.year().rem_euclid(100));
    &component[..2] <= current_yy.as_str() && parse_month(&component[2..]).is_some()
}

fn uses_single_separator(version: &str) -> bool {
    let mut used = SEPARATORS.iter().filter(|sep| version.contains(**sep));
    used.next().is_some() && used.next().is_none()
}
