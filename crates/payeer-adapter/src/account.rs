/*
[INPUT]:  Candidate recipient identifiers
[OUTPUT]: Accept/reject verdict before any network call
[POS]:    Validation layer - pure account-format check
[UPDATE]: When Payeer changes its account-number or email format
*/

use once_cell::sync::Lazy;
use regex::Regex;

use crate::http::{PayeerError, Result};

// Account branch is a prefix match (trailing characters allowed), the email
// branch is anchored at both ends.
static ACCOUNT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([Pp][0-9]{7,15}|.+@.+\..+$)").expect("invalid account pattern"));

/// Validate a transfer recipient: a Payeer account number (`P` followed by
/// 7-15 digits) or an email address.
///
/// Pure and I/O-free; [`crate::PayeerClient::transfer`] runs it before
/// submitting anything, so a malformed recipient never costs a round trip.
pub fn validate_account(candidate: &str) -> Result<()> {
    if ACCOUNT_PATTERN.is_match(candidate) {
        Ok(())
    } else {
        Err(PayeerError::InvalidAccount(candidate.to_string()))
    }
}
