use serde::{Deserialize, Serialize};

/// Emit an aggregate forwarding snapshot every this many identifiers.
pub const PROGRESS_SNAPSHOT_INTERVAL: usize = 50;

/// One unit of work extracted from one queued message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SyncJobPayload {
    #[serde(default)]
    pub access_token: String,
    #[serde(default)]
    pub seller_id: String,
}

impl SyncJobPayload {
    /// Both credential fields must be present and non-empty before a job
    /// may run. An absent field decodes to the empty string, so the two
    /// cases are deliberately indistinguishable here.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.access_token.is_empty() {
            return Err(ValidationError::new("access_token missing from job payload"));
        }
        if self.seller_id.is_empty() {
            return Err(ValidationError::new("seller_id missing from job payload"));
        }
        Ok(())
    }
}

/// Success/failure counters for one forwarding run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ForwardTally {
    pub successful: usize,
    pub failed: usize,
}

impl ForwardTally {
    pub fn record_success(&mut self) {
        self.successful += 1;
    }

    pub fn record_failure(&mut self) {
        self.failed += 1;
    }

    pub fn processed(&self) -> usize {
        self.successful + self.failed
    }

    /// Success percentage; zero when nothing was processed.
    pub fn success_rate(&self) -> f64 {
        if self.processed() == 0 {
            return 0.0;
        }
        self.successful as f64 / self.processed() as f64 * 100.0
    }
}

/// Per-batch counters reported back to the trigger mechanism. Skipped
/// jobs are those whose payload never decoded or validated; everything
/// else counts as processed regardless of forwarding outcomes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub jobs_processed: usize,
    pub jobs_skipped: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_decodes_with_missing_fields_as_empty() {
        let payload: SyncJobPayload =
            serde_json::from_str(r#"{"access_token": "Atza|token"}"#).expect("payload should parse");

        assert_eq!(payload.access_token, "Atza|token");
        assert_eq!(payload.seller_id, "");
    }

    #[test]
    fn validate_names_the_missing_field() {
        let payload = SyncJobPayload {
            access_token: "Atza|token".to_string(),
            seller_id: String::new(),
        };

        let error = payload.validate().expect_err("payload should fail");
        assert_eq!(error.message(), "seller_id missing from job payload");
    }

    #[test]
    fn validate_rejects_empty_token_first() {
        let payload = SyncJobPayload {
            access_token: String::new(),
            seller_id: String::new(),
        };

        let error = payload.validate().expect_err("payload should fail");
        assert_eq!(error.message(), "access_token missing from job payload");
    }

    #[test]
    fn validate_accepts_complete_payload() {
        let payload = SyncJobPayload {
            access_token: "Atza|token".to_string(),
            seller_id: "12028".to_string(),
        };

        assert!(payload.validate().is_ok());
    }

    #[test]
    fn tally_counts_every_recorded_outcome() {
        let mut tally = ForwardTally::default();
        tally.record_success();
        tally.record_success();
        tally.record_failure();

        assert_eq!(tally.successful, 2);
        assert_eq!(tally.failed, 1);
        assert_eq!(tally.processed(), 3);
    }

    #[test]
    fn success_rate_is_a_percentage() {
        let tally = ForwardTally {
            successful: 3,
            failed: 1,
        };

        assert!((tally.success_rate() - 75.0).abs() < f64::EPSILON);
    }

    #[test]
    fn success_rate_is_zero_when_nothing_was_processed() {
        let tally = ForwardTally::default();

        assert_eq!(tally.success_rate(), 0.0);
    }
}
