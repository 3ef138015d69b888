/*
[INPUT]:  Wallet queries (balance, account existence, transaction lookups)
[OUTPUT]: Account data projected out of the response envelope
[POS]:    HTTP layer - wallet and merchant-order endpoints
[UPDATE]: When adding new wallet endpoints or changing projections
*/

use serde_json::Value;

use crate::http::{PayeerClient, PayeerError, Result};
use crate::types::{Action, Envelope, HistoryQuery, Params};

impl PayeerClient {
    /// Wallet balance per currency
    ///
    /// action=balance
    /// Projects the `balance` key of the envelope.
    pub async fn get_balance(&self) -> Result<Value> {
        self.request(Params::new(Action::Balance))
            .await?
            .take("balance")
    }

    /// Check whether `user` names an existing Payeer account.
    ///
    /// action=checkUser, user={user}
    /// Payeer signals "no such account" through the error envelope, so a
    /// vendor-reported error maps to `Ok(false)` here; transport failures
    /// still propagate.
    pub async fn check_user(&self, user: &str) -> Result<bool> {
        let params = Params::new(Action::CheckUser).with("user", user);
        match self.request(params).await {
            Ok(_) => Ok(true),
            Err(PayeerError::Api { .. }) => Ok(false),
            Err(err) => Err(err),
        }
    }

    /// Information about a single wallet transaction
    ///
    /// action=historyInfo, historyId={history_id}
    /// Projects the `info` key of the envelope.
    pub async fn get_history_info(&self, history_id: u64) -> Result<Value> {
        let params = Params::new(Action::HistoryInfo).with("historyId", history_id.to_string());
        self.request(params).await?.take("info")
    }

    /// Information on a store transaction
    ///
    /// action=shopOrderInfo, shopId={shop_id}, orderId={order_id}
    /// Returns the full envelope.
    pub async fn shop_order_info(&self, shop_id: u64, order_id: &str) -> Result<Envelope> {
        let params = Params::new(Action::ShopOrderInfo)
            .with("shopId", shop_id.to_string())
            .with("orderId", order_id);
        self.request(params).await
    }

    /// Transaction history, filtered by `query`
    ///
    /// action=history plus the query's filter fields
    /// Projects the `history` key of the envelope.
    pub async fn history(&self, query: HistoryQuery) -> Result<Value> {
        self.request(query.into_params()).await?.take("history")
    }
}
