use std::collections::BTreeMap;

use crate::error::RegistryError;
use crate::model::{GradeRecord, StudentId, Subject};
use crate::store::EntityStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upsert {
    Inserted,
    Updated,
}

/// Grade entries grouped per student.
///
/// Each student's entries keep the order their subjects were first graded;
/// iterating the whole ledger walks students by id, then that order.
/// A (student, subject) pair appears at most once.
#[derive(Debug, Clone, Default)]
pub struct GradeLedger {
    by_student: BTreeMap<StudentId, Vec<(Subject, f64)>>,
}

impl GradeLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or overwrites the score for (student, subject). The student
    /// must exist in `store` and the score must be non-negative; otherwise
    /// nothing changes.
    pub fn add_grade(
        &mut self,
        store: &EntityStore,
        student_id: StudentId,
        subject: Subject,
        score: f64,
    ) -> Result<Upsert, RegistryError> {
        if !store.contains_student(student_id) {
            return Err(RegistryError::UnknownStudent(student_id));
        }
        if score.is_nan() || score < 0.0 {
            return Err(RegistryError::InvalidScore(score));
        }

        let entries = self.by_student.entry(student_id).or_default();
        if let Some(slot) = entries.iter_mut().find(|(s, _)| *s == subject) {
            slot.1 = score;
            return Ok(Upsert::Updated);
        }
        entries.push((subject, score));
        Ok(Upsert::Inserted)
    }

    pub fn student_grades(&self, student_id: StudentId) -> Vec<GradeRecord> {
        self.by_student
            .get(&student_id)
            .map(|entries| {
                entries
                    .iter()
                    .map(|&(subject, score)| GradeRecord {
                        student_id,
                        subject,
                        score,
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Drops every entry for the student; returns how many were removed.
    pub(crate) fn remove_all_for_student(&mut self, student_id: StudentId) -> usize {
        self.by_student
            .remove(&student_id)
            .map(|entries| entries.len())
            .unwrap_or(0)
    }

    pub fn records(&self) -> impl Iterator<Item = GradeRecord> + '_ {
        self.by_student.iter().flat_map(|(&student_id, entries)| {
            entries.iter().map(move |&(subject, score)| GradeRecord {
                student_id,
                subject,
                score,
            })
        })
    }

    pub fn len(&self) -> usize {
        self.by_student.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.by_student.values().all(Vec::is_empty)
    }
}
