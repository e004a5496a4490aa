//! The scan roster: which labs exist and who is expected to submit them.
//!
//! The course roster is compiled in. Changing the cohort or the number of
//! assignments means editing the constants here.

use std::ops::RangeInclusive;

/// First lab assignment number.
pub const FIRST_LAB: u8 = 1;

/// Last lab assignment number.
pub const LAST_LAB: u8 = 5;

/// Student identifiers expected to submit every lab, in report order.
pub const STUDENT_IDS: [u32; 26] = [
    7738, 7749, 5292, 7756, 7761, 7762, 7763, 7774, 7691, 7803, 7813, 7818, 7833, 7834, 7841,
    7853, 7858, 7863, 7872, 7355, 7892, 7381, 7976, 7928, 7937, 7647,
];

/// The set of (lab, student) combinations a scan covers.
///
/// Iteration order is fixed: lab-major, student-minor, students in roster
/// order. Every consumer of the roster relies on that ordering for
/// reproducible output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    labs: RangeInclusive<u8>,
    students: Vec<u32>,
}

impl Roster {
    /// Create a roster over an arbitrary lab range and student list.
    pub fn new(labs: RangeInclusive<u8>, students: Vec<u32>) -> Self {
        Self { labs, students }
    }

    /// The compiled-in course roster.
    pub fn builtin() -> Self {
        Self::new(FIRST_LAB..=LAST_LAB, STUDENT_IDS.to_vec())
    }

    /// Lab numbers covered by this roster.
    pub fn labs(&self) -> RangeInclusive<u8> {
        self.labs.clone()
    }

    /// Student identifiers covered by this roster, in order.
    pub fn students(&self) -> &[u32] {
        &self.students
    }

    /// Total number of (lab, student) combinations.
    pub fn len(&self) -> usize {
        self.labs.clone().count() * self.students.len()
    }

    /// Check whether the roster covers no combinations at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate every (lab, student) combination, lab-major.
    pub fn pairs(&self) -> impl Iterator<Item = (u8, u32)> + '_ {
        let students = &self.students;
        self.labs
            .clone()
            .flat_map(move |lab| students.iter().map(move |&student| (lab, student)))
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_covers_five_labs() {
        let roster = Roster::builtin();
        assert_eq!(roster.labs(), 1..=5);
    }

    #[test]
    fn builtin_covers_twenty_six_students() {
        let roster = Roster::builtin();
        assert_eq!(roster.students().len(), 26);
    }

    #[test]
    fn builtin_len_is_full_product() {
        let roster = Roster::builtin();
        assert_eq!(roster.len(), 130);
        assert!(!roster.is_empty());
    }

    #[test]
    fn pairs_are_lab_major() {
        let roster = Roster::new(1..=2, vec![10, 20]);
        let pairs: Vec<_> = roster.pairs().collect();
        assert_eq!(pairs, vec![(1, 10), (1, 20), (2, 10), (2, 20)]);
    }

    #[test]
    fn pairs_preserve_student_order() {
        let roster = Roster::builtin();
        let first_lab: Vec<u32> = roster
            .pairs()
            .take_while(|(lab, _)| *lab == 1)
            .map(|(_, student)| student)
            .collect();
        assert_eq!(first_lab, STUDENT_IDS.to_vec());
    }

    #[test]
    fn builtin_first_and_last_pair() {
        let roster = Roster::builtin();
        let pairs: Vec<_> = roster.pairs().collect();
        assert_eq!(pairs.first(), Some(&(1, 7738)));
        assert_eq!(pairs.last(), Some(&(5, 7647)));
    }

    #[test]
    fn pairs_visit_each_combination_once() {
        let roster = Roster::builtin();
        let mut seen = std::collections::HashSet::new();
        for pair in roster.pairs() {
            assert!(seen.insert(pair), "duplicate pair {:?}", pair);
        }
        assert_eq!(seen.len(), roster.len());
    }

    #[test]
    fn empty_student_list_yields_no_pairs() {
        let roster = Roster::new(1..=5, Vec::new());
        assert!(roster.is_empty());
        assert_eq!(roster.pairs().count(), 0);
    }

    #[test]
    fn default_is_builtin() {
        assert_eq!(Roster::default(), Roster::builtin());
    }
}
