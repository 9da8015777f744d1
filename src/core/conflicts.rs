//! Term and period conflict detection
//!
//! Two offerings conflict when their term slots overlap in the year and they
//! meet in the same daily period. Block classes use the whole period; Skinny
//! classes use one half of it, so two Skinny classes only collide when they
//! are assigned the same half.

use crate::core::calendar::{DurationType, PeriodSlot, SubPeriod, TimeModel};
use crate::core::error::Result;
use crate::core::models::{ClassOffering, Conflict};

/// Pairwise conflict detector over a fixed time model
#[derive(Debug, Clone, Copy)]
pub struct ConflictDetector<'a> {
    model: &'a TimeModel,
}

impl<'a> ConflictDetector<'a> {
    /// Create a detector for a time model
    #[must_use]
    pub const fn new(model: &'a TimeModel) -> Self {
        Self { model }
    }

    /// Find every conflicting pair of offerings
    ///
    /// Pairs are reported once, in input order (`i < j`), and an offering is
    /// never compared with itself.
    ///
    /// # Errors
    /// Returns [`ScheduleError::UnknownTermSlot`](crate::core::error::ScheduleError::UnknownTermSlot)
    /// if an offering uses a term slot the time model does not define.
    pub fn detect(&self, offerings: &[ClassOffering]) -> Result<Vec<Conflict>> {
        for offering in offerings {
            self.model.term_slot_month_range(offering.term_slot)?;
        }

        let mut conflicts = Vec::new();
        for (i, first) in offerings.iter().enumerate() {
            for second in &offerings[i + 1..] {
                if let Some(reason) = self.conflict_reason(first, second) {
                    conflicts.push(Conflict::between(first, second, reason));
                }
            }
        }

        crate::debug!(
            "Checked {} offerings, found {} conflicts",
            offerings.len(),
            conflicts.len()
        );
        Ok(conflicts)
    }

    /// Conflicts involving a single offering
    ///
    /// # Errors
    /// Same as [`detect`](Self::detect).
    pub fn conflicts_for(
        &self,
        offering_id: u32,
        offerings: &[ClassOffering],
    ) -> Result<Vec<Conflict>> {
        Ok(self
            .detect(offerings)?
            .into_iter()
            .filter(|c| c.involves(offering_id))
            .collect())
    }

    /// Whether two offerings conflict
    #[must_use]
    pub fn has_conflict(&self, first: &ClassOffering, second: &ClassOffering) -> bool {
        self.conflict_reason(first, second).is_some()
    }

    /// Explanation of why two offerings conflict, or `None` if they don't
    fn conflict_reason(&self, first: &ClassOffering, second: &ClassOffering) -> Option<String> {
        // The same offering listed twice is one class, not two
        if first.id == second.id {
            return None;
        }
        if !self.model.terms_overlap(first.term_slot, second.term_slot) {
            return None;
        }

        let period = match (first.period_slot, second.period_slot) {
            (Some(a), Some(b)) if a == b => a,
            _ => return None,
        };

        match (first.duration_type, second.duration_type) {
            (DurationType::Block, DurationType::Block) => {
                Some(format!("Both scheduled for Block {period}"))
            }
            (DurationType::Block, DurationType::Skinny) => Some(format!(
                "{} (Block {period}) conflicts with {} (Skinny {})",
                first.name,
                second.name,
                skinny_label(period, second.sub_period)
            )),
            (DurationType::Skinny, DurationType::Block) => Some(format!(
                "{} (Skinny {}) conflicts with {} (Block {period})",
                first.name,
                skinny_label(period, first.sub_period),
                second.name
            )),
            (DurationType::Skinny, DurationType::Skinny) => match (first.sub_period, second.sub_period) {
                (Some(a), Some(b)) if a == b => Some(format!("Both scheduled for Skinny {period}{a}")),
                _ => None,
            },
        }
    }
}

fn skinny_label(period: PeriodSlot, sub_period: Option<SubPeriod>) -> String {
    sub_period.map_or_else(|| period.to_string(), |sub| format!("{period}{sub}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::calendar::{SchoolDay, SlotRange, Term, TermSlot};
    use crate::core::error::ScheduleError;

    fn offering(
        id: u32,
        name: &str,
        slot: TermSlot,
        period: Option<PeriodSlot>,
        duration: DurationType,
        sub: Option<SubPeriod>,
    ) -> ClassOffering {
        let term = match slot {
            TermSlot::S1 | TermSlot::S2 => Term::Semester,
            TermSlot::FullYear => Term::FullYear,
            _ => Term::HalfSemester,
        };
        let mut o = ClassOffering::new(id, name.to_string(), term, slot, duration);
        o.period_slot = period;
        o.sub_period = sub;
        o
    }

    fn block(id: u32, name: &str, slot: TermSlot, period: PeriodSlot) -> ClassOffering {
        offering(id, name, slot, Some(period), DurationType::Block, None)
    }

    fn skinny(id: u32, name: &str, slot: TermSlot, period: PeriodSlot, sub: u8) -> ClassOffering {
        offering(
            id,
            name,
            slot,
            Some(period),
            DurationType::Skinny,
            SubPeriod::try_from(sub).ok(),
        )
    }

    #[test]
    fn test_block_collision() {
        let model = TimeModel::standard();
        let offerings = vec![
            block(1, "Chemistry", TermSlot::S1, PeriodSlot::A),
            block(2, "Spanish", TermSlot::S1, PeriodSlot::A),
        ];

        let conflicts = ConflictDetector::new(&model).detect(&offerings).unwrap();
        assert_eq!(conflicts.len(), 1);
        assert_eq!(conflicts[0].offering_id1, 1);
        assert_eq!(conflicts[0].offering_id2, 2);
        assert_eq!(conflicts[0].reason, "Both scheduled for Block A");
    }

    #[test]
    fn test_skinny_different_halves() {
        let model = TimeModel::standard();
        let offerings = vec![
            skinny(1, "Art", TermSlot::S1, PeriodSlot::B, 1),
            skinny(2, "Band", TermSlot::S1, PeriodSlot::B, 2),
        ];

        assert!(ConflictDetector::new(&model)
            .detect(&offerings)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_skinny_same_half() {
        let model = TimeModel::standard();
        let offerings = vec![
            skinny(1, "Art", TermSlot::S2, PeriodSlot::C, 2),
            skinny(2, "Band", TermSlot::Q4, PeriodSlot::C, 2),
        ];

        let conflicts = ConflictDetector::new(&model).detect(&offerings).unwrap();
        assert_eq!(conflicts.len(), 1);
        assert_eq!(conflicts[0].reason, "Both scheduled for Skinny C2");
    }

    #[test]
    fn test_block_beats_skinny() {
        let model = TimeModel::standard();
        let offerings = vec![
            block(1, "Chemistry", TermSlot::S1, PeriodSlot::A),
            skinny(2, "Yoga", TermSlot::S1, PeriodSlot::A, 1),
        ];

        let conflicts = ConflictDetector::new(&model).detect(&offerings).unwrap();
        assert_eq!(conflicts.len(), 1);
        assert_eq!(
            conflicts[0].reason,
            "Chemistry (Block A) conflicts with Yoga (Skinny A1)"
        );
    }

    #[test]
    fn test_skinny_before_block_reason_is_mirrored() {
        let model = TimeModel::standard();
        let offerings = vec![
            skinny(1, "Yoga", TermSlot::S1, PeriodSlot::D, 2),
            block(2, "Chemistry", TermSlot::FullYear, PeriodSlot::D),
        ];

        let conflicts = ConflictDetector::new(&model).detect(&offerings).unwrap();
        assert_eq!(
            conflicts[0].reason,
            "Yoga (Skinny D2) conflicts with Chemistry (Block D)"
        );
    }

    #[test]
    fn test_block_against_unassigned_skinny_still_conflicts() {
        let model = TimeModel::standard();
        let offerings = vec![
            block(1, "Chemistry", TermSlot::S1, PeriodSlot::B),
            offering(2, "Yoga", TermSlot::S1, Some(PeriodSlot::B), DurationType::Skinny, None),
        ];

        let conflicts = ConflictDetector::new(&model).detect(&offerings).unwrap();
        assert_eq!(
            conflicts[0].reason,
            "Chemistry (Block B) conflicts with Yoga (Skinny B)"
        );
    }

    #[test]
    fn test_unassigned_sub_periods_do_not_conflict() {
        let model = TimeModel::standard();
        let offerings = vec![
            offering(1, "Art", TermSlot::S1, Some(PeriodSlot::B), DurationType::Skinny, None),
            skinny(2, "Band", TermSlot::S1, PeriodSlot::B, 1),
        ];

        assert!(ConflictDetector::new(&model)
            .detect(&offerings)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_disjoint_terms() {
        let model = TimeModel::standard();
        let offerings = vec![
            block(1, "Health", TermSlot::Q1, PeriodSlot::A),
            block(2, "Speech", TermSlot::Q2, PeriodSlot::A),
            block(3, "Econ", TermSlot::S2, PeriodSlot::A),
        ];

        let conflicts = ConflictDetector::new(&model).detect(&offerings).unwrap();
        assert!(conflicts.is_empty());
    }

    #[test]
    fn test_full_year_overlaps_every_slot() {
        let model = TimeModel::standard();
        let offerings = vec![
            block(1, "English 9", TermSlot::FullYear, PeriodSlot::C),
            block(2, "Health", TermSlot::Q3, PeriodSlot::C),
            block(3, "Econ", TermSlot::S1, PeriodSlot::C),
        ];

        let conflicts = ConflictDetector::new(&model).detect(&offerings).unwrap();
        // Q3 and S1 do not overlap, so only the full-year pairs collide
        assert_eq!(conflicts.len(), 2);
        assert!(conflicts.iter().all(|c| c.offering_id1 == 1));
    }

    #[test]
    fn test_missing_period_cannot_conflict() {
        let model = TimeModel::standard();
        let offerings = vec![
            offering(1, "Chemistry", TermSlot::S1, None, DurationType::Block, None),
            block(2, "Spanish", TermSlot::S1, PeriodSlot::A),
        ];

        assert!(ConflictDetector::new(&model)
            .detect(&offerings)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_never_reports_self_or_duplicates() {
        let model = TimeModel::standard();
        let chem = block(1, "Chemistry", TermSlot::S1, PeriodSlot::A);
        let offerings = vec![chem.clone(), chem];

        let detector = ConflictDetector::new(&model);
        assert!(detector.detect(&offerings).unwrap().is_empty());
        assert!(!detector.has_conflict(&offerings[0], &offerings[1]));
        assert!(detector.detect(&offerings[..1]).unwrap().is_empty());
    }

    #[test]
    fn test_repeated_offering_still_conflicts_with_others() {
        let model = TimeModel::standard();
        let chem = block(1, "Chemistry", TermSlot::S1, PeriodSlot::A);
        let offerings = vec![
            chem.clone(),
            block(2, "Spanish", TermSlot::S1, PeriodSlot::A),
            chem,
        ];

        let conflicts = ConflictDetector::new(&model).detect(&offerings).unwrap();
        assert_eq!(conflicts.len(), 2);
        assert!(conflicts.iter().all(|c| c.offering_id1 != c.offering_id2));
    }

    #[test]
    fn test_block_and_skinny_in_disjoint_semesters() {
        let model = TimeModel::standard();
        let detector = ConflictDetector::new(&model);

        let same_term = vec![
            block(1, "Chemistry", TermSlot::S1, PeriodSlot::A),
            skinny(2, "Yoga", TermSlot::S1, PeriodSlot::A, 1),
        ];
        assert_eq!(detector.detect(&same_term).unwrap().len(), 1);

        let other_term = vec![
            block(1, "Chemistry", TermSlot::S1, PeriodSlot::A),
            skinny(2, "Yoga", TermSlot::S2, PeriodSlot::A, 1),
        ];
        assert!(detector.detect(&other_term).unwrap().is_empty());
    }

    #[test]
    fn test_symmetric() {
        let model = TimeModel::standard();
        let detector = ConflictDetector::new(&model);
        let pairs = [
            (
                block(1, "Chemistry", TermSlot::S1, PeriodSlot::A),
                skinny(2, "Yoga", TermSlot::Q2, PeriodSlot::A, 2),
            ),
            (
                skinny(1, "Art", TermSlot::S2, PeriodSlot::B, 1),
                skinny(2, "Band", TermSlot::Q1, PeriodSlot::B, 1),
            ),
            (
                block(1, "Econ", TermSlot::FullYear, PeriodSlot::D),
                block(2, "Gov", TermSlot::Q4, PeriodSlot::D),
            ),
        ];

        for (a, b) in &pairs {
            assert_eq!(detector.has_conflict(a, b), detector.has_conflict(b, a));
        }
    }

    #[test]
    fn test_conflicts_for_offering() {
        let model = TimeModel::standard();
        let offerings = vec![
            block(1, "Chemistry", TermSlot::S1, PeriodSlot::A),
            block(2, "Spanish", TermSlot::S1, PeriodSlot::A),
            block(3, "Econ", TermSlot::S1, PeriodSlot::B),
            block(4, "Gov", TermSlot::S1, PeriodSlot::B),
        ];

        let conflicts = ConflictDetector::new(&model)
            .conflicts_for(3, &offerings)
            .unwrap();
        assert_eq!(conflicts.len(), 1);
        assert_eq!(conflicts[0].name2, "Gov");
    }

    #[test]
    fn test_slot_missing_from_model_is_an_error() {
        let model = TimeModel::new(
            Vec::new(),
            vec![SlotRange {
                slot: TermSlot::FullYear,
                start_month: 1,
                end_month: 12,
            }],
            Vec::new(),
            Vec::new(),
            Vec::new(),
            SchoolDay {
                start_hour: 7,
                end_hour: 15,
            },
        );
        let offerings = vec![block(1, "Chemistry", TermSlot::Q2, PeriodSlot::A)];

        let err = ConflictDetector::new(&model).detect(&offerings).unwrap_err();
        assert_eq!(err, ScheduleError::UnknownTermSlot("Q2".to_string()));
    }
}
