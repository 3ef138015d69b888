/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust enums with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

/// Wire discriminator selecting which remote operation a request performs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Balance,
    CheckUser,
    GetExchangeRate,
    GetPaySystems,
    HistoryInfo,
    ShopOrderInfo,
    Transfer,
    InitOutput,
    Output,
    History,
}

impl Action {
    /// Wire value for the `action` form field
    pub fn as_str(self) -> &'static str {
        match self {
            Action::Balance => "balance",
            Action::CheckUser => "checkUser",
            Action::GetExchangeRate => "getExchangeRate",
            Action::GetPaySystems => "getPaySystems",
            Action::HistoryInfo => "historyInfo",
            Action::ShopOrderInfo => "shopOrderInfo",
            Action::Transfer => "transfer",
            Action::InitOutput => "initOutput",
            Action::Output => "output",
            Action::History => "history",
        }
    }
}

/// Currencies accepted by the transfer and payout endpoints
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Usd,
    Eur,
    Rub,
}

impl Currency {
    pub fn as_str(self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Rub => "RUB",
        }
    }
}

/// Which conversion-rate table to fetch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RateKind {
    /// Deposit rates (wire value `N`)
    #[default]
    #[serde(rename = "N")]
    Deposit,
    /// Withdrawal rates (wire value `Y`)
    #[serde(rename = "Y")]
    Withdrawal,
}

impl RateKind {
    pub fn as_str(self) -> &'static str {
        match self {
            RateKind::Deposit => "N",
            RateKind::Withdrawal => "Y",
        }
    }
}

/// Sort order for transaction history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistorySort {
    Asc,
    Desc,
}

impl HistorySort {
    pub fn as_str(self) -> &'static str {
        match self {
            HistorySort::Asc => "asc",
            HistorySort::Desc => "desc",
        }
    }
}

/// Direction filter for transaction history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryKind {
    Incoming,
    Outgoing,
}

impl HistoryKind {
    pub fn as_str(self) -> &'static str {
        match self {
            HistoryKind::Incoming => "incoming",
            HistoryKind::Outgoing => "outgoing",
        }
    }
}
