/*
[INPUT]:  Rate-table selection
[OUTPUT]: Reference data (conversion rates, available payment systems)
[POS]:    HTTP layer - reference-data endpoints
[UPDATE]: When adding new reference endpoints or changing projections
*/

use serde_json::Value;

use crate::http::{PayeerClient, Result};
use crate::types::{Action, Params, RateKind};

impl PayeerClient {
    /// Automatic conversion rates
    ///
    /// action=getExchangeRate, output=N|Y
    /// Projects the `rate` key of the envelope.
    pub async fn get_exchange_rate(&self, rates: RateKind) -> Result<Value> {
        let params = Params::new(Action::GetExchangeRate).with("output", rates.as_str());
        self.request(params).await?.take("rate")
    }

    /// Payment systems available for payouts
    ///
    /// action=getPaySystems
    /// Projects the `list` key of the envelope.
    pub async fn get_pay_systems(&self) -> Result<Value> {
        self.request(Params::new(Action::GetPaySystems))
            .await?
            .take("list")
    }
}

#[cfg(test)]
mod tests {
    use crate::http::{ClientConfig, Credentials, PayeerClient};
    use crate::types::RateKind;
    use serde_json::json;
    use wiremock::matchers::{body_string_contains, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> PayeerClient {
        PayeerClient::with_config_and_base_url(
            Credentials::new("P1000000", "12345", "test-secret"),
            ClientConfig::default(),
            &server.uri(),
        )
        .expect("client init")
    }

    #[tokio::test]
    async fn test_get_exchange_rate() {
        let server = MockServer::start().await;

        let _mock = Mock::given(method("POST"))
            .and(path("/ajax/api/api.php"))
            .and(body_string_contains("action=getExchangeRate"))
            .and(body_string_contains("output=N"))
            .and(body_string_contains("account=P1000000"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "errors": [],
                "rate": {"USD/RUB": "65.5", "EUR/USD": "1.08"},
            })))
            .expect(1)
            .mount(&server)
            .await;

        let rate = client_for(&server)
            .get_exchange_rate(RateKind::Deposit)
            .await
            .expect("get_exchange_rate failed");

        assert_eq!(rate, json!({"USD/RUB": "65.5", "EUR/USD": "1.08"}));
    }

    #[tokio::test]
    async fn test_get_exchange_rate_withdrawal_table() {
        let server = MockServer::start().await;

        let _mock = Mock::given(method("POST"))
            .and(path("/ajax/api/api.php"))
            .and(body_string_contains("output=Y"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "errors": [],
                "rate": {},
            })))
            .expect(1)
            .mount(&server)
            .await;

        let rate = client_for(&server)
            .get_exchange_rate(RateKind::Withdrawal)
            .await
            .expect("get_exchange_rate failed");

        assert_eq!(rate, json!({}));
    }

    #[tokio::test]
    async fn test_get_pay_systems() {
        let server = MockServer::start().await;

        let _mock = Mock::given(method("POST"))
            .and(path("/ajax/api/api.php"))
            .and(body_string_contains("action=getPaySystems"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "errors": [],
                "list": {"1136053": {"name": "Payeer"}},
            })))
            .expect(1)
            .mount(&server)
            .await;

        let list = client_for(&server)
            .get_pay_systems()
            .await
            .expect("get_pay_systems failed");

        assert_eq!(list, json!({"1136053": {"name": "Payeer"}}));
    }
}
