//! In-memory school registry: students, teachers and per-subject grades,
//! plus the queries and reports derived from them.
//!
//! [`School`] owns one [`EntityStore`]/[`GradeLedger`] pair and is the entry
//! point for callers; [`ipc`] exposes it as a JSON-lines sidecar.

pub mod calc;
pub mod config;
pub mod error;
pub mod ipc;
pub mod ledger;
pub mod model;
pub mod query;
pub mod report;
pub mod school;
pub mod store;

pub use config::RegistryConfig;
pub use error::RegistryError;
pub use ledger::GradeLedger;
pub use model::{GradeLevel, GradeRecord, Student, StudentId, Subject, Teacher, TeacherId};
pub use query::SearchCriteria;
pub use school::{RegistryEvent, School};
pub use store::EntityStore;
