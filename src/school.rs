use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::RegistryConfig;
use crate::error::RegistryError;
use crate::ledger::{GradeLedger, Upsert};
use crate::model::{GradeLevel, GradeRecord, Student, StudentId, Subject, Teacher};
use crate::query::{self, GradeLevelCount, SearchCriteria, SubjectStats};
use crate::report::{self, GradeRow, SchoolStatistics, StudentReport};
use crate::store::EntityStore;

/// Change notifications, delivered after the mutation has fully applied.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum RegistryEvent {
    StudentAdded { student: Student },
    TeacherAdded { teacher: Teacher },
    GradeRecorded { record: GradeRecord, updated: bool },
    #[serde(rename_all = "camelCase")]
    StudentRemoved { student: Student, grades_removed: usize },
}

type Observer = Box<dyn FnMut(&RegistryEvent)>;

/// One school's registry: the entity store, its grade ledger and the
/// observers interested in changes to them.
pub struct School {
    config: RegistryConfig,
    store: EntityStore,
    ledger: GradeLedger,
    observers: Vec<Observer>,
}

impl Default for School {
    fn default() -> Self {
        Self::new(RegistryConfig::default())
    }
}

impl School {
    pub fn new(config: RegistryConfig) -> Self {
        let store = EntityStore::new(config.first_student_id, config.first_teacher_id);
        Self {
            config,
            store,
            ledger: GradeLedger::new(),
            observers: Vec::new(),
        }
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    pub fn store(&self) -> &EntityStore {
        &self.store
    }

    pub fn ledger(&self) -> &GradeLedger {
        &self.ledger
    }

    pub fn subscribe(&mut self, observer: impl FnMut(&RegistryEvent) + 'static) {
        self.observers.push(Box::new(observer));
    }

    fn publish(&mut self, event: RegistryEvent) {
        for observer in self.observers.iter_mut() {
            observer(&event);
        }
    }

    pub fn add_student(&mut self, name: &str, age: u32, grade_level: GradeLevel) -> Student {
        let student = self.store.add_student(name, age, grade_level);
        info!(id = student.id, name = %student.name, "student registered");
        self.publish(RegistryEvent::StudentAdded {
            student: student.clone(),
        });
        student
    }

    pub fn add_teacher(&mut self, name: &str, age: u32, subject: Subject) -> Teacher {
        let teacher = self.store.add_teacher(name, age, subject);
        info!(id = teacher.id, name = %teacher.name, %subject, "teacher registered");
        self.publish(RegistryEvent::TeacherAdded {
            teacher: teacher.clone(),
        });
        teacher
    }

    pub fn students(&self) -> impl Iterator<Item = &Student> + '_ {
        self.store.students()
    }

    pub fn teachers(&self) -> impl Iterator<Item = &Teacher> + '_ {
        self.store.teachers()
    }

    pub fn find_student_by_name(&self, query: &str) -> Option<&Student> {
        self.store.find_student_by_name(query)
    }

    pub fn find_teacher_by_name(&self, query: &str) -> Option<&Teacher> {
        self.store.find_teacher_by_name(query)
    }

    /// Removes the student and all of their grades. Returns `false` and
    /// changes nothing when the id is unknown.
    pub fn remove_student(&mut self, id: StudentId) -> bool {
        let Some(student) = self.store.take_student(id) else {
            debug!(id, "remove requested for unknown student");
            return false;
        };
        let grades_removed = self.ledger.remove_all_for_student(id);
        info!(id, name = %student.name, grades_removed, "student removed");
        self.publish(RegistryEvent::StudentRemoved {
            student,
            grades_removed,
        });
        true
    }

    pub fn add_grade(
        &mut self,
        student_id: StudentId,
        subject: Subject,
        score: f64,
    ) -> Result<(), RegistryError> {
        let outcome = match self.ledger.add_grade(&self.store, student_id, subject, score) {
            Ok(v) => v,
            Err(e) => {
                warn!(student_id, %subject, score, "grade rejected: {e}");
                return Err(e);
            }
        };
        let updated = outcome == Upsert::Updated;
        debug!(student_id, %subject, score, updated, "grade recorded");
        self.publish(RegistryEvent::GradeRecorded {
            record: GradeRecord {
                student_id,
                subject,
                score,
            },
            updated,
        });
        Ok(())
    }

    pub fn student_grades(&self, student_id: StudentId) -> Vec<GradeRecord> {
        self.ledger.student_grades(student_id)
    }

    pub fn search_students(&self, criteria: &SearchCriteria) -> Vec<&Student> {
        query::search_students(&self.store, criteria)
    }

    pub fn grade_level_distribution(&self) -> Vec<GradeLevelCount> {
        query::grade_level_distribution(&self.store)
    }

    pub fn subject_statistics(&self) -> Vec<SubjectStats> {
        query::subject_statistics(&self.ledger)
    }

    pub fn student_report(&self, student_id: StudentId) -> Option<StudentReport> {
        report::student_report(&self.store, &self.ledger, student_id)
    }

    pub fn school_statistics(&self) -> SchoolStatistics {
        report::school_statistics(&self.store, &self.ledger)
    }

    pub fn grade_rows(&self) -> Vec<GradeRow> {
        report::grade_rows(&self.store, &self.ledger, self.config.pass_mark)
    }
}
