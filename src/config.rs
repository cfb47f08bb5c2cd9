use anyhow::{bail, Context};
use serde::Deserialize;
use std::path::Path;

use crate::model::{StudentId, TeacherId};
use crate::store::MAX_FIRST_ID;

pub const CONFIG_ENV: &str = "SCHOOLD_CONFIG";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegistryConfig {
    pub school_name: String,
    pub first_student_id: StudentId,
    pub first_teacher_id: TeacherId,
    pub pass_mark: f64,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            school_name: "Alzihrawi".to_string(),
            first_student_id: 1000,
            first_teacher_id: 2000,
            pass_mark: 60.0,
        }
    }
}

impl RegistryConfig {
    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        let cfg: Self = serde_json::from_str(&text)
            .with_context(|| format!("parse config {}", path.display()))?;
        cfg.validate()
            .with_context(|| format!("invalid config {}", path.display()))?;
        Ok(cfg)
    }

    /// Rejects id starts that leave no room for the sequence to grow.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.first_student_id > MAX_FIRST_ID {
            bail!("firstStudentId must be at most {MAX_FIRST_ID}");
        }
        if self.first_teacher_id > MAX_FIRST_ID {
            bail!("firstTeacherId must be at most {MAX_FIRST_ID}");
        }
        Ok(())
    }

    /// Config named by `SCHOOLD_CONFIG`, or defaults when unset.
    pub fn from_env() -> anyhow::Result<Self> {
        match std::env::var_os(CONFIG_ENV) {
            Some(p) if !p.is_empty() => Self::from_path(Path::new(&p)),
            _ => Ok(Self::default()),
        }
    }
}
