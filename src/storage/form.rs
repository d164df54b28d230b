//! The stored form record.
//!
//! Loading is deliberately forgiving: anything that does not look like a
//! form (missing key, broken JSON, wrong field types) loads as `None`, and an
//! absent or unknown coefficient falls back to the default standard.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::coefficients::DEFAULT_STANDARD;
use crate::domain::{CoefficientStandard, MetricsInput};
use crate::storage::store::{KeyValueStore, StorageError};

/// The single key the form lives under.
pub const STORAGE_KEY: &str = "hse-flow-metrics";

/// Last-entered form: the three raw fields as typed, plus the standard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredForm {
    pub hours_worked: String,
    pub accidents_count: String,
    pub days_lost: String,
    pub coefficient: CoefficientStandard,
}

impl StoredForm {
    pub fn to_input(&self) -> MetricsInput {
        MetricsInput::from_text(&self.hours_worked, &self.accidents_count, &self.days_lost)
            .with_coefficient(self.coefficient)
    }

    /// Parse a stored value, or `None` if it is not a usable form.
    pub fn parse(raw: &str) -> Option<Self> {
        let value: Value = serde_json::from_str(raw).ok()?;
        let obj = value.as_object()?;
        let text = |name: &str| obj.get(name).and_then(Value::as_str).map(str::to_string);

        let coefficient = obj
            .get("coefficient")
            .and_then(Value::as_str)
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_STANDARD);

        Some(Self {
            hours_worked: text("hoursWorked")?,
            accidents_count: text("accidentsCount")?,
            days_lost: text("daysLost")?,
            coefficient,
        })
    }
}

/// Form persistence over any key-value backend.
#[derive(Debug, Clone)]
pub struct FormStorage<S> {
    store: S,
}

impl<S: KeyValueStore> FormStorage<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn save(&mut self, form: &StoredForm) {
        let outcome = serde_json::to_string(form)
            .map_err(StorageError::from)
            .and_then(|json| self.store.set(STORAGE_KEY, &json));
        drain(outcome, "save");
    }

    pub fn load(&self) -> Option<StoredForm> {
        let raw = drain(self.store.get(STORAGE_KEY), "load")??;
        let form = StoredForm::parse(&raw);
        if form.is_none() {
            debug!("stored form has an unexpected shape; ignoring it");
        }
        form
    }

    pub fn clear(&mut self) {
        drain(self.store.remove(STORAGE_KEY), "clear");
    }
}

/// Log a storage failure and drop it.
fn drain<T>(outcome: Result<T, StorageError>, action: &str) -> Option<T> {
    match outcome {
        Ok(value) => Some(value),
        Err(err) => {
            warn!(action, error = %err, "form storage unavailable");
            None
        }
    }
}
