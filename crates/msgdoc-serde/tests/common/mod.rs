// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(dead_code, clippy::unwrap_used)]

use msgdoc_schema::MessageSchema;
use serde::{Deserialize, Serialize};

/// Fields every message carries.
pub const BASE_FIELDS: [&str; 2] = ["MessageId", "Timestamp"];
/// Fields a payment adds on top of the base message.
pub const PAYMENT_FIELDS: [&str; 4] = ["Amount", "Currency", "Memo", "Status"];

pub fn payment_schema() -> MessageSchema {
    MessageSchema::base("Message", BASE_FIELDS)
        .unwrap()
        .derive("Payment", PAYMENT_FIELDS)
        .unwrap()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    Pending,
    Settled,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Payment {
    pub message_id: u64,
    pub timestamp: i64,
    pub amount: f64,
    pub currency: String,
    pub memo: Option<String>,
    pub status: Status,
}

pub fn payment() -> Payment {
    Payment {
        message_id: 42,
        timestamp: 1_700_000_000,
        amount: 12.5,
        currency: "EUR".into(),
        memo: Some("rent & bills".into()),
        status: Status::Settled,
    }
}
