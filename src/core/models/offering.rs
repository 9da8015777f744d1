//! Class offering model

use crate::core::calendar::{DurationType, PeriodSlot, SubPeriod, Term, TermSlot};
use serde::{Deserialize, Serialize};

/// A class placed into the school calendar
///
/// `period_slot` and `sub_period` are optional: an offering without a period
/// has not been placed into the school day yet, and a Skinny offering without
/// a sub-period has not been assigned a half of its period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassOffering {
    /// Identifier of the offering
    pub id: u32,

    /// Class name
    pub name: String,

    /// Semester, Half-Semester or Full-Year
    pub term: Term,

    /// Slot within the year (S1, Q2, FullYear, ...)
    pub term_slot: TermSlot,

    /// Daily period the class meets in, if placed
    #[serde(default)]
    pub period_slot: Option<PeriodSlot>,

    /// Block or Skinny
    pub duration_type: DurationType,

    /// Half of the period used by a Skinny class, if assigned
    #[serde(default)]
    pub sub_period: Option<SubPeriod>,

    /// Scheduling priority (1-10); advisory only
    #[serde(default = "default_priority")]
    pub priority: u8,
}

const fn default_priority() -> u8 {
    5
}

impl ClassOffering {
    /// Create an unplaced offering
    ///
    /// # Arguments
    /// * `id` - Offering id
    /// * `name` - Class name
    /// * `term` - Term kind
    /// * `term_slot` - Slot within the year
    /// * `duration_type` - Block or Skinny
    #[must_use]
    pub const fn new(
        id: u32,
        name: String,
        term: Term,
        term_slot: TermSlot,
        duration_type: DurationType,
    ) -> Self {
        Self {
            id,
            name,
            term,
            term_slot,
            period_slot: None,
            duration_type,
            sub_period: None,
            priority: default_priority(),
        }
    }

    /// Place the offering into a daily period
    #[must_use]
    pub const fn in_period(mut self, period: PeriodSlot) -> Self {
        self.period_slot = Some(period);
        self
    }

    /// Assign the half of the period a Skinny offering uses
    #[must_use]
    pub const fn in_sub_period(mut self, sub_period: SubPeriod) -> Self {
        self.sub_period = Some(sub_period);
        self
    }

    /// Calendar label, e.g. "Block A", "Skinny B2", or "Skinny C" when no
    /// sub-period is assigned. `None` for an unplaced offering.
    #[must_use]
    pub fn placement_label(&self) -> Option<String> {
        let period = self.period_slot?;
        Some(match (self.duration_type, self.sub_period) {
            (DurationType::Skinny, Some(sub)) => format!("Skinny {period}{sub}"),
            (duration, _) => format!("{duration} {period}"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let offering = ClassOffering::new(
            1,
            "Art".to_string(),
            Term::Semester,
            TermSlot::S1,
            DurationType::Skinny,
        )
        .in_period(PeriodSlot::B)
        .in_sub_period(SubPeriod::Second);

        assert_eq!(offering.period_slot, Some(PeriodSlot::B));
        assert_eq!(offering.sub_period, Some(SubPeriod::Second));
        assert_eq!(offering.priority, 5);
        assert_eq!(offering.placement_label().as_deref(), Some("Skinny B2"));
    }

    #[test]
    fn test_unplaced_label() {
        let offering = ClassOffering::new(
            2,
            "Chemistry".to_string(),
            Term::FullYear,
            TermSlot::FullYear,
            DurationType::Block,
        );
        assert!(offering.placement_label().is_none());
        assert_eq!(
            offering.in_period(PeriodSlot::C).placement_label().as_deref(),
            Some("Block C")
        );
    }

    #[test]
    fn test_json_shape() {
        let json = r#"{
            "id": 3,
            "name": "Spanish 2",
            "term": "Half-Semester",
            "termSlot": "Q2",
            "periodSlot": "D",
            "durationType": "Skinny",
            "subPeriod": 1,
            "priority": 4
        }"#;

        let offering: ClassOffering = serde_json::from_str(json).unwrap();
        assert_eq!(offering.term, Term::HalfSemester);
        assert_eq!(offering.term_slot, TermSlot::Q2);
        assert_eq!(offering.sub_period, Some(SubPeriod::First));
    }

    #[test]
    fn test_json_rejects_unknown_slot() {
        let json = r#"{
            "id": 3,
            "name": "Spanish 2",
            "term": "Half-Semester",
            "termSlot": "Q5",
            "durationType": "Block"
        }"#;

        let err = serde_json::from_str::<ClassOffering>(json).unwrap_err();
        assert!(err.to_string().contains("Unknown term slot: Q5"));
    }
}
