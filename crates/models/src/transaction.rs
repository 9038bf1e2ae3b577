use serde::{Deserialize, Serialize};

use crate::amount::{parse_amount, string_or_number};
use crate::errors::ModelError;
use crate::record::{new_id, now_iso, Extra};

fn default_status() -> String { "completed".to_string() }

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    #[serde(default)]
    pub id: String,
    pub from_address: Option<String>,
    pub to_address: Option<String>,
    #[serde(deserialize_with = "string_or_number")]
    pub amount: String,
    pub scholarship_id: Option<String>,
    #[serde(default)]
    pub timestamp: String,
    #[serde(default = "default_status")]
    pub status: String,
    pub tx_hash: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

crate::impl_record!(Transaction, "transactions");

impl Transaction {
    pub fn involves(&self, address: &str) -> bool {
        self.from_address.as_deref() == Some(address) || self.to_address.as_deref() == Some(address)
    }
}

/// Body of `POST /api/transactions`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewTransaction {
    pub from_address: Option<String>,
    pub to_address: Option<String>,
    #[serde(deserialize_with = "string_or_number")]
    pub amount: String,
    pub scholarship_id: Option<String>,
    pub tx_hash: Option<String>,
}

impl NewTransaction {
    /// Validates and returns the numeric amount.
    pub fn validate(&self) -> Result<f64, ModelError> {
        parse_amount(&self.amount)
    }

    pub fn into_record(self) -> Transaction {
        Transaction {
            id: new_id(),
            from_address: self.from_address,
            to_address: self.to_address,
            amount: self.amount,
            scholarship_id: self.scholarship_id,
            timestamp: now_iso(),
            status: default_status(),
            tx_hash: self.tx_hash,
            extra: Extra::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(amount: &str) -> NewTransaction {
        serde_json::from_value(serde_json::json!({
            "fromAddress": "0xA", "toAddress": "0xB", "amount": amount
        }))
        .unwrap()
    }

    #[test]
    fn involves_matches_either_side() {
        let tx = input("1.0").into_record();
        assert!(tx.involves("0xA"));
        assert!(tx.involves("0xB"));
        assert!(!tx.involves("0xC"));
        assert_eq!(tx.status, "completed");
    }

    #[test]
    fn amount_must_be_numeric() {
        assert!(input("lots").validate().is_err());
        assert_eq!(input("3.0").validate().unwrap(), 3.0);
    }
}
