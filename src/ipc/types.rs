use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::ipc::error::Fault;
use crate::school::School;

/// One line of input: `{"id", "method", "params"}`.
#[derive(Debug, Deserialize, Clone)]
pub struct Request {
    pub id: String,
    pub method: String,
    #[serde(default)]
    pub params: serde_json::Value,
}

impl Request {
    fn param(&self, key: &str) -> Result<&serde_json::Value, Fault> {
        self.params
            .get(key)
            .ok_or_else(|| Fault::bad_params(format!("missing {key}")))
    }

    pub fn str_param(&self, key: &str) -> Result<&str, Fault> {
        self.param(key)?
            .as_str()
            .ok_or_else(|| Fault::bad_params(format!("{key} must be a string")))
    }

    pub fn u64_param(&self, key: &str) -> Result<u64, Fault> {
        self.param(key)?
            .as_u64()
            .ok_or_else(|| Fault::bad_params(format!("{key} must be a non-negative integer")))
    }

    pub fn u32_param(&self, key: &str) -> Result<u32, Fault> {
        u32::try_from(self.u64_param(key)?)
            .map_err(|_| Fault::bad_params(format!("{key} out of range")))
    }

    pub fn f64_param(&self, key: &str) -> Result<f64, Fault> {
        self.param(key)?
            .as_f64()
            .ok_or_else(|| Fault::bad_params(format!("{key} must be a number")))
    }

    /// Deserializes `params[key]` (enums, criteria objects).
    pub fn typed_param<T: DeserializeOwned>(&self, key: &str) -> Result<T, Fault> {
        T::deserialize(self.param(key)?)
            .map_err(|e| Fault::bad_params(format!("invalid {key}: {e}")))
    }

    /// Like [`Request::typed_param`], but an absent key yields `T::default()`.
    pub fn typed_param_or_default<T: DeserializeOwned + Default>(
        &self,
        key: &str,
    ) -> Result<T, Fault> {
        if self.params.get(key).is_none() {
            return Ok(T::default());
        }
        self.typed_param(key)
    }
}

pub struct AppState {
    pub school: School,
}
