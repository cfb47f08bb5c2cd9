use serde::{Deserialize, Serialize};
use std::fmt;

pub type StudentId = u64;
pub type TeacherId = u64;

/// Cohort a student belongs to. Serialized as its number (1..=3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum GradeLevel {
    First = 1,
    Second = 2,
    Third = 3,
}

impl GradeLevel {
    pub const ALL: [GradeLevel; 3] = [GradeLevel::First, GradeLevel::Second, GradeLevel::Third];
}

impl From<GradeLevel> for u8 {
    fn from(level: GradeLevel) -> u8 {
        level as u8
    }
}

impl TryFrom<u8> for GradeLevel {
    type Error = String;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        match v {
            1 => Ok(GradeLevel::First),
            2 => Ok(GradeLevel::Second),
            3 => Ok(GradeLevel::Third),
            other => Err(format!("grade level must be 1, 2 or 3 (got {other})")),
        }
    }
}

impl fmt::Display for GradeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", *self as u8)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Subject {
    Math,
    Science,
    Physics,
    Arabic,
}

impl Subject {
    /// Declared order; statistics are reported in this order.
    pub const ALL: [Subject; 4] = [
        Subject::Math,
        Subject::Science,
        Subject::Physics,
        Subject::Arabic,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Subject::Math => "Math",
            Subject::Science => "Science",
            Subject::Physics => "Physics",
            Subject::Arabic => "Arabic",
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: StudentId,
    pub name: String,
    pub age: u32,
    pub grade_level: GradeLevel,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Teacher {
    pub id: TeacherId,
    pub name: String,
    pub age: u32,
    pub subject: Subject,
}

/// One score per (student, subject). `student_id` is a back-reference only.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GradeRecord {
    pub student_id: StudentId,
    pub subject: Subject,
    pub score: f64,
}
