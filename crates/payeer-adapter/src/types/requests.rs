/*
[INPUT]:  Typed call arguments and caller-supplied filter fields
[OUTPUT]: Flat form parameter sets ready for the request primitive
[POS]:    Data layer - request-side types and parameter lowering
[UPDATE]: When API parameters change or new request types added
*/

use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;

use super::enums::{Action, Currency, HistoryKind, HistorySort};

/// Datetime format the history endpoint expects for period bounds
const HISTORY_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Flat key/value parameter set for a single API call.
///
/// Constructed fresh per call and merged over the credential fields by the
/// request primitive; on key collision the call parameters win.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params(BTreeMap<String, String>);

impl Params {
    /// Empty parameter set with no `action` yet
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parameter set seeded with the `action` discriminator
    pub fn new(action: Action) -> Self {
        Self::empty().with("action", action.as_str())
    }

    /// Insert a parameter, replacing any previous value under the same key
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn into_inner(self) -> BTreeMap<String, String> {
        self.0
    }
}

impl IntoIterator for Params {
    type Item = (String, String);
    type IntoIter = std::collections::btree_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Escrow protection for a transfer.
///
/// Its presence on [`TransferRequest`] sets `protect=Y` on the wire; the
/// period and code fields only ever reach the wire through this struct, so a
/// transfer without protection cannot leak them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Protection {
    /// Protection period in days, 1-30
    pub period: Option<u8>,
    /// Code the recipient must present to release the funds
    pub code: Option<String>,
}

/// Arguments for the `transfer` action
#[derive(Debug, Clone, PartialEq)]
pub struct TransferRequest {
    /// Amount withdrawn; the deposited amount is derived by Payeer after fees
    pub sum: Decimal,
    /// Recipient account number (`P1000000`) or email address
    pub to: String,
    /// Currency the withdrawal is performed in
    pub cur_in: Currency,
    /// Currency deposited to the recipient
    pub cur_out: Currency,
    /// Free-form comment shown to the recipient
    pub comment: Option<String>,
    /// Escrow protection; `None` performs an unprotected transfer
    pub protection: Option<Protection>,
}

impl TransferRequest {
    /// New transfer of `sum` to `to`; both currencies default to USD
    pub fn new(sum: Decimal, to: impl Into<String>) -> Self {
        Self {
            sum,
            to: to.into(),
            cur_in: Currency::default(),
            cur_out: Currency::default(),
            comment: None,
            protection: None,
        }
    }

    pub(crate) fn into_params(self) -> Params {
        let mut params = Params::new(Action::Transfer);
        params.insert("sum", self.sum.to_string());
        params.insert("to", self.to);
        params.insert("curIn", self.cur_in.as_str());
        params.insert("curOut", self.cur_out.as_str());
        if let Some(comment) = self.comment {
            params.insert("comment", comment);
        }
        if let Some(protection) = self.protection {
            params.insert("protect", "Y");
            if let Some(period) = protection.period {
                params.insert("protectPeriod", period.to_string());
            }
            if let Some(code) = protection.code {
                params.insert("protectCode", code);
            }
        }
        params
    }
}

/// Arguments for the `initOutput` and `output` actions
#[derive(Debug, Clone, PartialEq)]
pub struct PayoutRequest {
    /// ID of the selected payment system
    pub ps: u64,
    /// Recipient's account number in the selected payment system
    pub account: String,
    /// Amount withdrawn; the received amount is derived by Payeer after fees
    pub sum_in: Decimal,
    /// Currency the withdrawal is performed in
    pub cur_in: Currency,
    /// Currency received on the other side
    pub cur_out: Currency,
}

impl PayoutRequest {
    /// New payout of `sum_in` to `account` via payment system `ps`; both
    /// currencies default to USD
    pub fn new(ps: u64, account: impl Into<String>, sum_in: Decimal) -> Self {
        Self {
            ps,
            account: account.into(),
            sum_in,
            cur_in: Currency::default(),
            cur_out: Currency::default(),
        }
    }

    pub(crate) fn into_params(self, action: Action) -> Params {
        Params::new(action)
            .with("ps", self.ps.to_string())
            .with("param_ACCOUNT_NUMBER", self.account)
            .with("sumIn", self.sum_in.to_string())
            .with("curIn", self.cur_in.as_str())
            .with("curOut", self.cur_out.as_str())
    }
}

/// Filters for the `history` action.
///
/// Typed fields cover the filters Payeer documents; `extra` entries are
/// forwarded onto the wire verbatim for anything beyond them. The action
/// discriminator is forced last, so not even an `extra` entry can replace it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistoryQuery {
    /// Sort by date
    pub sort: Option<HistorySort>,
    /// Number of records, max 1000
    pub count: Option<u32>,
    /// Begin of the period
    pub from: Option<NaiveDateTime>,
    /// End of the period
    pub to: Option<NaiveDateTime>,
    /// Incoming or outgoing payments only
    pub kind: Option<HistoryKind>,
    /// ID of the previous transaction, for pagination
    pub append: Option<u64>,
    /// Additional filter fields forwarded verbatim
    pub extra: BTreeMap<String, String>,
}

impl HistoryQuery {
    pub(crate) fn into_params(self) -> Params {
        let mut params = Params::empty();
        if let Some(sort) = self.sort {
            params.insert("sort", sort.as_str());
        }
        if let Some(count) = self.count {
            params.insert("count", count.to_string());
        }
        if let Some(from) = self.from {
            params.insert("from", from.format(HISTORY_TIME_FORMAT).to_string());
        }
        if let Some(to) = self.to {
            params.insert("to", to.format(HISTORY_TIME_FORMAT).to_string());
        }
        if let Some(kind) = self.kind {
            params.insert("type", kind.as_str());
        }
        if let Some(append) = self.append {
            params.insert("append", append.to_string());
        }
        for (key, value) in self.extra {
            params.insert(key, value);
        }
        params.insert("action", Action::History.as_str());
        params
    }
}
