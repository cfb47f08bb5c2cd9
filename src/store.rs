use std::collections::BTreeMap;

use crate::model::{GradeLevel, Student, StudentId, Subject, Teacher, TeacherId};

/// Owns the student and teacher collections.
///
/// Ids come from per-collection sequences that only move forward, so keying
/// by id in a `BTreeMap` iterates in insertion order and gives logarithmic
/// lookup/removal. Ids are never reused after a removal.
#[derive(Debug, Clone)]
pub struct EntityStore {
    students: BTreeMap<StudentId, Student>,
    teachers: BTreeMap<TeacherId, Teacher>,
    next_student_id: StudentId,
    next_teacher_id: TeacherId,
    enrolled_students: usize,
    enrolled_teachers: usize,
}

/// Highest usable starting id. Starting at or below it leaves 2^63 ids per
/// sequence, so allocation never overflows.
pub const MAX_FIRST_ID: u64 = u64::MAX / 2;

impl Default for EntityStore {
    fn default() -> Self {
        Self::new(1000, 2000)
    }
}

impl EntityStore {
    /// Start values above [`MAX_FIRST_ID`] are clamped to it; configs are
    /// rejected before that point by `RegistryConfig::validate`.
    pub fn new(first_student_id: StudentId, first_teacher_id: TeacherId) -> Self {
        Self {
            students: BTreeMap::new(),
            teachers: BTreeMap::new(),
            next_student_id: first_student_id.min(MAX_FIRST_ID),
            next_teacher_id: first_teacher_id.min(MAX_FIRST_ID),
            enrolled_students: 0,
            enrolled_teachers: 0,
        }
    }

    pub fn add_student(&mut self, name: &str, age: u32, grade_level: GradeLevel) -> Student {
        let id = self.next_student_id;
        self.next_student_id += 1;
        let student = Student {
            id,
            name: name.to_string(),
            age,
            grade_level,
        };
        self.students.insert(id, student.clone());
        self.enrolled_students += 1;
        student
    }

    pub fn add_teacher(&mut self, name: &str, age: u32, subject: Subject) -> Teacher {
        let id = self.next_teacher_id;
        self.next_teacher_id += 1;
        let teacher = Teacher {
            id,
            name: name.to_string(),
            age,
            subject,
        };
        self.teachers.insert(id, teacher.clone());
        self.enrolled_teachers += 1;
        teacher
    }

    /// Live view of all students in insertion order. Records are only
    /// mutable through the store's own operations.
    pub fn students(&self) -> impl Iterator<Item = &Student> + '_ {
        self.students.values()
    }

    pub fn teachers(&self) -> impl Iterator<Item = &Teacher> + '_ {
        self.teachers.values()
    }

    pub fn student(&self, id: StudentId) -> Option<&Student> {
        self.students.get(&id)
    }

    pub fn contains_student(&self, id: StudentId) -> bool {
        self.students.contains_key(&id)
    }

    pub fn student_count(&self) -> usize {
        self.students.len()
    }

    pub fn teacher_count(&self) -> usize {
        self.teachers.len()
    }

    pub fn enrolled_students(&self) -> usize {
        self.enrolled_students
    }

    pub fn enrolled_teachers(&self) -> usize {
        self.enrolled_teachers
    }

    /// First student (insertion order) whose name contains `query`,
    /// case-sensitive. Later matches are ignored; use a name search for all.
    pub fn find_student_by_name(&self, query: &str) -> Option<&Student> {
        self.students.values().find(|s| s.name.contains(query))
    }

    pub fn find_teacher_by_name(&self, query: &str) -> Option<&Teacher> {
        self.teachers.values().find(|t| t.name.contains(query))
    }

    /// Detaches a student. Grade cleanup is the caller's job; see
    /// `School::remove_student`.
    pub(crate) fn take_student(&mut self, id: StudentId) -> Option<Student> {
        let student = self.students.remove(&id)?;
        self.enrolled_students -= 1;
        Some(student)
    }
}
