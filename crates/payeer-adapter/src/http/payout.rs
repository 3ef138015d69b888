/*
[INPUT]:  Transfer and payout requests (live remote mutations)
[OUTPUT]: Confirmation envelopes or feasibility verdicts
[POS]:    HTTP layer - fund-movement endpoints
[UPDATE]: When adding new payout endpoints or changing the transfer flow
*/

use crate::account::validate_account;
use crate::http::{PayeerClient, PayeerError, Result};
use crate::types::{Action, Envelope, PayoutRequest, TransferRequest};

impl PayeerClient {
    /// Transfer funds to another Payeer account or email address.
    ///
    /// action=transfer
    /// The recipient is validated locally first, so a malformed `to` fails
    /// with [`PayeerError::InvalidAccount`] before any network call. Not
    /// idempotent: every successful call moves funds.
    pub async fn transfer(&self, request: TransferRequest) -> Result<Envelope> {
        validate_account(&request.to)?;
        self.request(request.into_params()).await
    }

    /// Check the feasibility of a payout without creating one.
    ///
    /// action=initOutput
    /// A vendor-reported error means the payout would be rejected and maps
    /// to `Ok(false)`; transport failures still propagate.
    pub async fn check_output(&self, request: PayoutRequest) -> Result<bool> {
        match self.request(request.into_params(Action::InitOutput)).await {
            Ok(_) => Ok(true),
            Err(PayeerError::Api { .. }) => Ok(false),
            Err(err) => Err(err),
        }
    }

    /// Create a payout to an external payment system.
    ///
    /// action=output
    /// Returns the full envelope. Not idempotent: every successful call
    /// moves funds.
    pub async fn output(&self, request: PayoutRequest) -> Result<Envelope> {
        self.request(request.into_params(Action::Output)).await
    }
}
