use crate::models::ReconciliationResult;
use crate::utils::strip_uid;

pub struct IdentifierReconciler;

impl IdentifierReconciler {
    /// Pick the authoritative UID from the front and back readings.
    /// Accepts either spaced or bare digits; comparison is on digits only.
    pub fn reconcile(identifier_front: &str, identifier_back: &str) -> ReconciliationResult {
        let front = strip_uid(identifier_front);
        let back = strip_uid(identifier_back);

        let matched = front == back;
        let canonical_identifier = [front, back].into_iter().find(|digits| digits.len() == 12);

        ReconciliationResult {
            canonical_identifier,
            matched,
        }
    }
}
