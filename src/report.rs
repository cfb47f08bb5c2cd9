use serde::Serialize;

use crate::calc::{self, GradeBand};
use crate::ledger::GradeLedger;
use crate::model::{StudentId, Subject};
use crate::store::EntityStore;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectScore {
    pub subject: Subject,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentReport {
    pub student_name: String,
    pub average: f64,
    pub grades: Vec<SubjectScore>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SchoolStatistics {
    pub total_students: usize,
    pub total_teachers: usize,
    pub average_score_across_all_grades: f64,
}

/// A ledger entry joined with its student's name, for grade tables.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GradeRow {
    pub student_id: StudentId,
    pub student_name: String,
    pub subject: Subject,
    pub score: f64,
    pub band: GradeBand,
    pub passed: bool,
}

const UNKNOWN_STUDENT_NAME: &str = "Undefined";

pub fn student_report(
    store: &EntityStore,
    ledger: &GradeLedger,
    student_id: StudentId,
) -> Option<StudentReport> {
    let student = store.student(student_id)?;
    let grades: Vec<SubjectScore> = ledger
        .student_grades(student_id)
        .into_iter()
        .map(|r| SubjectScore {
            subject: r.subject,
            score: r.score,
        })
        .collect();
    Some(StudentReport {
        student_name: student.name.clone(),
        average: calc::average(grades.iter().map(|g| g.score)),
        grades,
    })
}

/// Current collection sizes plus the mean over every ledger entry.
pub fn school_statistics(store: &EntityStore, ledger: &GradeLedger) -> SchoolStatistics {
    SchoolStatistics {
        total_students: store.student_count(),
        total_teachers: store.teacher_count(),
        average_score_across_all_grades: calc::average(ledger.records().map(|r| r.score)),
    }
}

/// Every ledger entry as a table row. Rows are grouped by student id
/// (ascending), then follow the order that student's subjects were first
/// graded; this is not global entry order across students.
pub fn grade_rows(store: &EntityStore, ledger: &GradeLedger, pass_mark: f64) -> Vec<GradeRow> {
    ledger
        .records()
        .map(|r| GradeRow {
            student_id: r.student_id,
            student_name: store
                .student(r.student_id)
                .map(|s| s.name.clone())
                .unwrap_or_else(|| UNKNOWN_STUDENT_NAME.to_string()),
            subject: r.subject,
            score: r.score,
            band: calc::grade_band(r.score),
            passed: calc::passed(r.score, pass_mark),
        })
        .collect()
}
