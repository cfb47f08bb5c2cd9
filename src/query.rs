use serde::{Deserialize, Serialize};

use crate::calc;
use crate::ledger::GradeLedger;
use crate::model::{GradeLevel, Student, Subject};
use crate::store::EntityStore;

/// Optional, independent student filters combined with AND.
///
/// A filter applies whenever it is `Some`, including `Some("")` (matches every
/// name) and `Some(0)` for the age bounds.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchCriteria {
    pub name: Option<String>,
    pub grade_level: Option<GradeLevel>,
    pub min_age: Option<u32>,
    pub max_age: Option<u32>,
}

impl SearchCriteria {
    pub fn matches(&self, student: &Student) -> bool {
        if let Some(name) = &self.name {
            if !student.name.contains(name.as_str()) {
                return false;
            }
        }
        if let Some(level) = self.grade_level {
            if student.grade_level != level {
                return false;
            }
        }
        if let Some(min) = self.min_age {
            if student.age < min {
                return false;
            }
        }
        if let Some(max) = self.max_age {
            if student.age > max {
                return false;
            }
        }
        true
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GradeLevelCount {
    pub grade_level: GradeLevel,
    pub count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectStats {
    pub subject: Subject,
    pub average_score: f64,
    pub record_count: usize,
}

pub fn search_students<'a>(store: &'a EntityStore, criteria: &SearchCriteria) -> Vec<&'a Student> {
    store.students().filter(|s| criteria.matches(s)).collect()
}

/// Student count per level, in level order. Counts sum to the population.
pub fn grade_level_distribution(store: &EntityStore) -> Vec<GradeLevelCount> {
    let mut counts = [0usize; 3];
    for s in store.students() {
        counts[s.grade_level as usize - 1] += 1;
    }
    GradeLevel::ALL
        .iter()
        .zip(counts)
        .map(|(&grade_level, count)| GradeLevelCount { grade_level, count })
        .collect()
}

/// Average and record count for every subject in declared order; subjects
/// without grades report 0 and 0.
pub fn subject_statistics(ledger: &GradeLedger) -> Vec<SubjectStats> {
    Subject::ALL
        .iter()
        .map(|&subject| {
            let scores: Vec<f64> = ledger
                .records()
                .filter(|r| r.subject == subject)
                .map(|r| r.score)
                .collect();
            SubjectStats {
                subject,
                average_score: calc::average(scores.iter().copied()),
                record_count: scores.len(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_store() -> EntityStore {
        let mut store = EntityStore::default();
        store.add_student("Talal Alsebai", 18, GradeLevel::First);
        store.add_student("Omar", 17, GradeLevel::Second);
        store.add_student("Ahmad", 16, GradeLevel::Third);
        store.add_student("Mohammad", 18, GradeLevel::First);
        store.add_student("Noor", 16, GradeLevel::Third);
        store
    }

    fn names<'a>(students: &[&'a Student]) -> Vec<&'a str> {
        students.iter().map(|s| s.name.as_str()).collect()
    }

    #[test]
    fn empty_criteria_returns_everyone_in_order() {
        let store = sample_store();
        let hits = search_students(&store, &SearchCriteria::default());
        assert_eq!(
            names(&hits),
            vec!["Talal Alsebai", "Omar", "Ahmad", "Mohammad", "Noor"]
        );
    }

    #[test]
    fn criteria_are_intersected() {
        let store = sample_store();
        let criteria = SearchCriteria {
            name: Some("ma".to_string()),
            min_age: Some(18),
            ..Default::default()
        };
        // "Omar" and "Ahmad" match the name but fail the age floor.
        assert_eq!(names(&search_students(&store, &criteria)), vec!["Mohammad"]);

        let criteria = SearchCriteria {
            grade_level: Some(GradeLevel::Third),
            max_age: Some(16),
            ..Default::default()
        };
        assert_eq!(
            names(&search_students(&store, &criteria)),
            vec!["Ahmad", "Noor"]
        );
    }

    #[test]
    fn zero_and_empty_filters_are_applied() {
        let store = sample_store();
        let criteria = SearchCriteria {
            name: Some(String::new()),
            min_age: Some(0),
            ..Default::default()
        };
        assert_eq!(search_students(&store, &criteria).len(), 5);

        let criteria = SearchCriteria {
            max_age: Some(0),
            ..Default::default()
        };
        assert!(search_students(&store, &criteria).is_empty());
    }

    #[test]
    fn criteria_deserialize_from_camel_case() {
        let c: SearchCriteria =
            serde_json::from_value(serde_json::json!({ "gradeLevel": 2, "minAge": 0 }))
                .expect("criteria");
        assert_eq!(c.grade_level, Some(GradeLevel::Second));
        assert_eq!(c.min_age, Some(0));
        assert_eq!(c.name, None);
    }

    #[test]
    fn distribution_partitions_population() {
        let store = sample_store();
        let dist = grade_level_distribution(&store);
        let counts: Vec<usize> = dist.iter().map(|d| d.count).collect();
        assert_eq!(counts, vec![2, 1, 2]);
        assert_eq!(counts.iter().sum::<usize>(), store.student_count());

        let empty = grade_level_distribution(&EntityStore::default());
        assert_eq!(empty.len(), 3);
        assert!(empty.iter().all(|d| d.count == 0));
    }

    #[test]
    fn subject_statistics_cover_every_subject() {
        let store = sample_store();
        let mut ledger = GradeLedger::new();
        ledger.add_grade(&store, 1000, Subject::Math, 85.0).expect("g");
        ledger.add_grade(&store, 1001, Subject::Math, 95.0).expect("g");
        ledger.add_grade(&store, 1002, Subject::Math, 78.0).expect("g");
        ledger.add_grade(&store, 1000, Subject::Physics, 90.0).expect("g");

        let stats = subject_statistics(&ledger);
        let subjects: Vec<Subject> = stats.iter().map(|s| s.subject).collect();
        assert_eq!(subjects, Subject::ALL.to_vec());
        assert_eq!(stats[0].average_score, 86.0);
        assert_eq!(stats[0].record_count, 3);
        assert_eq!(stats[1].average_score, 0.0);
        assert_eq!(stats[1].record_count, 0);
        assert_eq!(stats[2].average_score, 90.0);
        assert_eq!(stats[2].record_count, 1);
    }
}
