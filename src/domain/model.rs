use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

use crate::utils::error::{AppError, Result};
use crate::utils::validation::{collect_errors, validate_required_field, Validate};

pub const AGE_RANGE_REQUIRED: &str = "La tranche d'âge est obligatoire.";
pub const PROFESSION_REQUIRED: &str = "La profession est obligatoire.";
pub const FAMILY_SITUATION_REQUIRED: &str = "La situation de famille est obligatoire.";
pub const FEELING_REQUIRED: &str = "Le ressenti est obligatoire.";

/// One persisted testimonial. `id` and `submitted_at` are assigned by the
/// service and never read from visitor input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub id: Uuid,
    #[serde(default)]
    pub age_range: String,
    #[serde(default)]
    pub profession: String,
    #[serde(default)]
    pub family_situation: String,
    #[serde(default)]
    pub feeling: String,
    #[serde(with = "timestamp")]
    pub submitted_at: DateTime<Utc>,
}

/// Inbound create request. Unknown keys such as a caller-supplied `id` or
/// `submittedAt` are dropped during deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionPayload {
    #[serde(default)]
    pub age_range: Option<String>,
    #[serde(default)]
    pub profession: Option<String>,
    #[serde(default)]
    pub family_situation: Option<String>,
    #[serde(default)]
    pub feeling: Option<String>,
}

impl SubmissionPayload {
    /// An empty body reads as an empty object.
    pub fn from_bytes(body: &[u8]) -> Result<Self> {
        if body.is_empty() {
            return Ok(Self::default());
        }

        serde_json::from_slice(body).map_err(|e| AppError::MalformedRequest {
            message: e.to_string(),
        })
    }

    /// Builds the record to persist. Fails with the accumulated validation
    /// errors when any required field is missing.
    pub fn into_submission(self, id: Uuid, submitted_at: DateTime<Utc>) -> Result<Submission> {
        self.validate()?;

        Ok(Submission {
            id,
            age_range: self.age_range.unwrap_or_default(),
            profession: self.profession.unwrap_or_default(),
            family_situation: self.family_situation.unwrap_or_default(),
            feeling: self.feeling.unwrap_or_default(),
            submitted_at,
        })
    }
}

impl Validate for SubmissionPayload {
    fn validate(&self) -> Result<()> {
        collect_errors([
            validate_required_field("ageRange", AGE_RANGE_REQUIRED, &self.age_range).map(drop),
            validate_required_field("profession", PROFESSION_REQUIRED, &self.profession).map(drop),
            validate_required_field(
                "familySituation",
                FAMILY_SITUATION_REQUIRED,
                &self.family_situation,
            )
            .map(drop),
            validate_required_field("feeling", FEELING_REQUIRED, &self.feeling).map(drop),
        ])
    }
}

/// Frequency tables over the categorical fields. Recomputed per request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateStats {
    pub total_submissions: usize,
    pub age_ranges: BTreeMap<String, usize>,
    pub family_situations: BTreeMap<String, usize>,
}

/// RFC 3339 in UTC with millisecond precision, e.g. `2026-10-19T08:15:30.123Z`.
pub mod timestamp {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|parsed| parsed.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}
