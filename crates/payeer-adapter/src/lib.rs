/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public Payeer adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod account;
pub mod http;
pub mod types;

// Re-export the validator
pub use account::validate_account;

// Re-export commonly used types from http
pub use http::{
    ClientConfig,
    Credentials,
    PayeerClient,
    PayeerError,
    Result,
};

// Re-export all types
pub use types::*;
