use crate::observability::labels::Labels;
use crate::RejectionReason;
use metrics::{counter, Counter};

pub struct Metrics {
    pub checks: Counter,
    pub accepted: Counter,
    rejected_missing: Counter,
    rejected_empty: Counter,
    rejected_invalid_length: Counter,
    rejected_invalid_character: Counter,
    rejected_checksum_mismatch: Counter,
}

const REASON: &str = "reason";

impl Metrics {
    pub fn new(labels: &Labels) -> Self {
        let rejected = |reason: RejectionReason| {
            counter!(
                "tax_code.rejected",
                labels.clone_with_labels(&[(REASON, reason.as_str())])
            )
        };

        Metrics {
            checks: counter!("tax_code.checks", labels.clone()),
            accepted: counter!("tax_code.accepted", labels.clone()),
            rejected_missing: rejected(RejectionReason::Missing),
            rejected_empty: rejected(RejectionReason::Empty),
            rejected_invalid_length: rejected(RejectionReason::InvalidLength),
            rejected_invalid_character: rejected(RejectionReason::InvalidCharacter),
            rejected_checksum_mismatch: rejected(RejectionReason::ChecksumMismatch),
        }
    }

    pub fn rejected(&self, reason: RejectionReason) -> &Counter {
        match reason {
            RejectionReason::Missing => &self.rejected_missing,
            RejectionReason::Empty => &self.rejected_empty,
            RejectionReason::InvalidLength => &self.rejected_invalid_length,
            RejectionReason::InvalidCharacter => &self.rejected_invalid_character,
            RejectionReason::ChecksumMismatch => &self.rejected_checksum_mismatch,
        }
    }
}
