//! Time model for the school calendar
//!
//! The calendar is layered: a school year is divided into terms (Semester,
//! Half-Semester, Full-Year), each term into term slots (S1/S2, Q1–Q4,
//! FullYear), each school day into named period slots (A, Pride, B, Lunch,
//! C, D), and a period slot into two sub-periods that Skinny classes use.
//!
//! [`TimeModel`] holds the lookup tables. It is an immutable value built once
//! (normally with [`TimeModel::standard`]) and passed to the engines that need
//! it, so alternate calendars can be substituted in tests.

use super::error::{Result, ScheduleError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Month names for calendar display (index 0 = January)
pub const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Coarse yearly bucket a class runs for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Term {
    /// Half of the school year
    Semester,
    /// A quarter of the school year
    HalfSemester,
    /// The entire school year
    FullYear,
}

impl Term {
    /// Canonical name used in catalog data ("Semester", "Half-Semester", "Full-Year")
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Semester => "Semester",
            Self::HalfSemester => "Half-Semester",
            Self::FullYear => "Full-Year",
        }
    }
}

impl FromStr for Term {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "Semester" => Ok(Self::Semester),
            "Half-Semester" => Ok(Self::HalfSemester),
            "Full-Year" => Ok(Self::FullYear),
            other => Err(ScheduleError::UnknownTerm(other.to_string())),
        }
    }
}

/// A specific instance of a term within the year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TermSlot {
    /// First semester
    S1,
    /// Second semester
    S2,
    /// First quarter
    Q1,
    /// Second quarter
    Q2,
    /// Third quarter
    Q3,
    /// Fourth quarter
    Q4,
    /// Whole year
    FullYear,
}

impl TermSlot {
    /// Every slot in calendar order
    pub const ALL: [Self; 7] = [
        Self::S1,
        Self::S2,
        Self::Q1,
        Self::Q2,
        Self::Q3,
        Self::Q4,
        Self::FullYear,
    ];

    /// Slot code as written in schedules ("S1", "Q3", "FullYear")
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::S1 => "S1",
            Self::S2 => "S2",
            Self::Q1 => "Q1",
            Self::Q2 => "Q2",
            Self::Q3 => "Q3",
            Self::Q4 => "Q4",
            Self::FullYear => "FullYear",
        }
    }
}

impl FromStr for TermSlot {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|slot| slot.code() == s.trim())
            .ok_or_else(|| ScheduleError::UnknownTermSlot(s.to_string()))
    }
}

/// How much of a period slot a class occupies each day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DurationType {
    /// Occupies the whole period slot
    Block,
    /// Occupies one half of a period slot
    Skinny,
}

impl DurationType {
    /// Display name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Block => "Block",
            Self::Skinny => "Skinny",
        }
    }
}

impl FromStr for DurationType {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "block" => Ok(Self::Block),
            "skinny" => Ok(Self::Skinny),
            _ => Err(ScheduleError::UnknownDurationType(s.to_string())),
        }
    }
}

/// A named daily time block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PeriodSlot {
    /// Block A (first block of the day)
    A,
    /// Pride & RCC advisory period
    Pride,
    /// Block B
    B,
    /// Lunch
    Lunch,
    /// Block C
    C,
    /// Block D
    D,
}

impl PeriodSlot {
    /// Every period in the order it occurs during the day
    pub const ALL: [Self; 6] = [
        Self::A,
        Self::Pride,
        Self::B,
        Self::Lunch,
        Self::C,
        Self::D,
    ];

    /// Period code ("A", "Pride", "Lunch", ...)
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::Pride => "Pride",
            Self::B => "B",
            Self::Lunch => "Lunch",
            Self::C => "C",
            Self::D => "D",
        }
    }
}

impl FromStr for PeriodSlot {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|slot| slot.code().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ScheduleError::UnknownPeriodSlot(s.to_string()))
    }
}

/// First or second half of a period slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum SubPeriod {
    /// First half (A1, B3, C5, D7)
    First,
    /// Second half (A2, B4, C6, D8)
    Second,
}

impl SubPeriod {
    /// 1 or 2
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::First => 1,
            Self::Second => 2,
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::First => "First Half",
            Self::Second => "Second Half",
        }
    }
}

impl TryFrom<u8> for SubPeriod {
    type Error = ScheduleError;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            1 => Ok(Self::First),
            2 => Ok(Self::Second),
            other => Err(ScheduleError::InvalidSubPeriod(other)),
        }
    }
}

impl From<SubPeriod> for u8 {
    fn from(sub: SubPeriod) -> Self {
        sub.number()
    }
}

macro_rules! string_codec {
    ($ty:ty, $code:ident) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.$code())
            }
        }

        impl TryFrom<String> for $ty {
            type Error = ScheduleError;

            fn try_from(value: String) -> Result<Self> {
                value.parse()
            }
        }

        impl From<$ty> for String {
            fn from(value: $ty) -> Self {
                value.$code().to_string()
            }
        }
    };
}

string_codec!(Term, name);
string_codec!(TermSlot, code);
string_codec!(DurationType, name);
string_codec!(PeriodSlot, code);

impl fmt::Display for SubPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// Configuration for a term (e.g., "Semester")
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermConfig {
    /// Which term this describes
    pub term: Term,
    /// Approximate length in months
    pub duration_months: u8,
    /// Slots a class of this term can be placed into
    pub slots: Vec<TermSlot>,
}

/// Inclusive, 1-indexed month range of a term slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotRange {
    /// The slot
    pub slot: TermSlot,
    /// First month (1 = January)
    pub start_month: u8,
    /// Last month, inclusive
    pub end_month: u8,
}

/// Configuration for a daily period slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodConfig {
    /// Which period this describes
    pub slot: PeriodSlot,
    /// Display name (e.g., "Block A")
    pub name: String,
    /// Start time, `H:MM`
    pub start_time: String,
    /// End time, `H:MM`
    pub end_time: String,
    /// Whether two Skinny classes may share this period
    pub can_have_skinny: bool,
}

/// School day bounds in whole hours (24-hour clock)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchoolDay {
    /// First hour shown on the calendar
    pub start_hour: u8,
    /// Last hour shown on the calendar
    pub end_hour: u8,
}

/// Immutable calendar lookup tables
#[derive(Debug, Clone, PartialEq)]
pub struct TimeModel {
    terms: Vec<TermConfig>,
    slot_ranges: Vec<SlotRange>,
    /// Slot pairs (other than identical slots and FullYear) that share calendar time
    overlapping_slots: Vec<(TermSlot, TermSlot)>,
    duration_hours: Vec<(DurationType, f32)>,
    periods: Vec<PeriodConfig>,
    school_day: SchoolDay,
}

impl TimeModel {
    /// Create a time model from explicit tables
    #[must_use]
    pub const fn new(
        terms: Vec<TermConfig>,
        slot_ranges: Vec<SlotRange>,
        overlapping_slots: Vec<(TermSlot, TermSlot)>,
        duration_hours: Vec<(DurationType, f32)>,
        periods: Vec<PeriodConfig>,
        school_day: SchoolDay,
    ) -> Self {
        Self {
            terms,
            slot_ranges,
            overlapping_slots,
            duration_hours,
            periods,
            school_day,
        }
    }

    /// The school's standard calendar
    ///
    /// S1 runs January–May and S2 June–October; quarters are three months
    /// each. S1 shares time with Q1 and Q2, S2 with Q3 and Q4.
    #[must_use]
    pub fn standard() -> Self {
        let terms = vec![
            TermConfig {
                term: Term::Semester,
                duration_months: 5,
                slots: vec![TermSlot::S1, TermSlot::S2],
            },
            TermConfig {
                term: Term::HalfSemester,
                duration_months: 3,
                slots: vec![TermSlot::Q1, TermSlot::Q2, TermSlot::Q3, TermSlot::Q4],
            },
            TermConfig {
                term: Term::FullYear,
                duration_months: 12,
                slots: vec![TermSlot::FullYear],
            },
        ];

        let slot_ranges = [
            (TermSlot::S1, 1, 5),
            (TermSlot::S2, 6, 10),
            (TermSlot::Q1, 1, 3),
            (TermSlot::Q2, 4, 6),
            (TermSlot::Q3, 7, 9),
            (TermSlot::Q4, 10, 12),
            (TermSlot::FullYear, 1, 12),
        ]
        .into_iter()
        .map(|(slot, start_month, end_month)| SlotRange {
            slot,
            start_month,
            end_month,
        })
        .collect();

        let overlapping_slots = vec![
            (TermSlot::S1, TermSlot::Q1),
            (TermSlot::S1, TermSlot::Q2),
            (TermSlot::S2, TermSlot::Q3),
            (TermSlot::S2, TermSlot::Q4),
        ];

        let duration_hours = vec![(DurationType::Block, 1.0), (DurationType::Skinny, 0.75)];

        let periods = [
            (PeriodSlot::A, "Block A", "7:20", "8:45", true),
            (PeriodSlot::Pride, "Pride & RCC", "8:55", "9:25", false),
            (PeriodSlot::B, "Block B", "9:35", "11:00", true),
            (PeriodSlot::Lunch, "Lunch", "11:00", "11:35", false),
            (PeriodSlot::C, "Block C", "11:40", "13:05", true),
            (PeriodSlot::D, "Block D", "13:15", "14:40", true),
        ]
        .into_iter()
        .map(|(slot, name, start, end, can_have_skinny)| PeriodConfig {
            slot,
            name: name.to_string(),
            start_time: start.to_string(),
            end_time: end.to_string(),
            can_have_skinny,
        })
        .collect();

        Self::new(
            terms,
            slot_ranges,
            overlapping_slots,
            duration_hours,
            periods,
            SchoolDay {
                start_hour: 7,
                end_hour: 15,
            },
        )
    }

    /// Month range `(start, end)` of a term slot, 1-indexed and inclusive
    ///
    /// # Errors
    /// Returns [`ScheduleError::UnknownTermSlot`] if this model has no range
    /// for the slot. That indicates a broken configuration, not bad user data.
    pub fn term_slot_month_range(&self, slot: TermSlot) -> Result<(u8, u8)> {
        self.slot_ranges
            .iter()
            .find(|range| range.slot == slot)
            .map(|range| (range.start_month, range.end_month))
            .ok_or_else(|| ScheduleError::UnknownTermSlot(slot.code().to_string()))
    }

    /// Month range of a term slot given by its code (e.g., "Q2")
    ///
    /// # Errors
    /// Returns [`ScheduleError::UnknownTermSlot`] if the code is not a slot
    /// this model defines.
    pub fn month_range_for_code(&self, code: &str) -> Result<(u8, u8)> {
        let slot: TermSlot = code.parse()?;
        self.term_slot_month_range(slot)
    }

    /// Slots available to a term, by term name. Unknown names have no slots.
    #[must_use]
    pub fn available_slots_for_term(&self, term_name: &str) -> &[TermSlot] {
        term_name
            .parse::<Term>()
            .map(|term| self.slots_for(term))
            .unwrap_or_default()
    }

    /// Slots available to a term
    #[must_use]
    pub fn slots_for(&self, term: Term) -> &[TermSlot] {
        self.terms
            .iter()
            .find(|config| config.term == term)
            .map(|config| config.slots.as_slice())
            .unwrap_or_default()
    }

    /// Term configurations in definition order
    #[must_use]
    pub fn terms(&self) -> &[TermConfig] {
        &self.terms
    }

    /// Daily hours a duration type occupies (display and estimation only)
    ///
    /// Duration types missing from the table count as one hour.
    #[must_use]
    pub fn duration_hours(&self, duration_type: DurationType) -> f32 {
        self.duration_hours
            .iter()
            .find(|(dt, _)| *dt == duration_type)
            .map_or(1.0, |(_, hours)| *hours)
    }

    /// Whether two slots share any part of the year
    ///
    /// This is a fixed adjacency table, not interval arithmetic over the month
    /// ranges: identical slots overlap, FullYear overlaps everything, and the
    /// explicitly listed semester/quarter pairs overlap. Everything else is
    /// disjoint.
    #[must_use]
    pub fn terms_overlap(&self, a: TermSlot, b: TermSlot) -> bool {
        a == b
            || a == TermSlot::FullYear
            || b == TermSlot::FullYear
            || self
                .overlapping_slots
                .iter()
                .any(|&(x, y)| (x == a && y == b) || (x == b && y == a))
    }

    /// Configuration of a daily period
    #[must_use]
    pub fn period(&self, slot: PeriodSlot) -> Option<&PeriodConfig> {
        self.periods.iter().find(|p| p.slot == slot)
    }

    /// All daily periods in order
    #[must_use]
    pub fn periods(&self) -> &[PeriodConfig] {
        &self.periods
    }

    /// School day bounds
    #[must_use]
    pub const fn school_day(&self) -> SchoolDay {
        self.school_day
    }

    /// Slot code with its months, e.g. "S1 (Jan-May)"
    ///
    /// # Errors
    /// Returns [`ScheduleError::UnknownTermSlot`] if this model has no range
    /// for the slot.
    pub fn slot_label(&self, slot: TermSlot) -> Result<String> {
        let (start, end) = self.term_slot_month_range(slot)?;
        let start = month_name(start).unwrap_or("?");
        let end = month_name(end).unwrap_or("?");
        Ok(format!("{slot} ({start}-{end})"))
    }

    /// Clock times of a daily period, e.g. "7:20-8:45"
    #[must_use]
    pub fn period_times(&self, slot: PeriodSlot) -> Option<String> {
        self.period(slot)
            .map(|p| format!("{}-{}", p.start_time, p.end_time))
    }
}

impl Default for TimeModel {
    fn default() -> Self {
        Self::standard()
    }
}

/// Short month name for a 1-indexed month
#[must_use]
pub fn month_name(month: u8) -> Option<&'static str> {
    usize::from(month)
        .checked_sub(1)
        .and_then(|idx| MONTH_NAMES.get(idx))
        .copied()
}
