use serde::{Deserialize, Serialize};

use crate::amount::parse_amount;
use crate::errors::ModelError;
use crate::record::{new_id, now_iso, Extra};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Milestone {
    pub description: String,
    pub percentage: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct ContractTerms {
    #[serde(default)]
    pub milestones: Vec<Milestone>,
    pub minimum_gpa: Option<f64>,
    pub deadline: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SmartContract {
    #[serde(default)]
    pub id: String,
    pub contract_address: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub sponsor_address: Option<String>,
    pub total_funds: Option<String>,
    pub remaining_funds: Option<String>,
    #[serde(default)]
    pub created_at: String,
    pub terms: Option<ContractTerms>,
    #[serde(flatten)]
    pub extra: Extra,
}

crate::impl_record!(SmartContract, "smart_contracts");

/// Body of `POST /api/contracts`. Unknown keys are kept on the record.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct NewSmartContract {
    pub contract_address: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub sponsor_address: Option<String>,
    pub total_funds: Option<String>,
    pub remaining_funds: Option<String>,
    pub terms: Option<ContractTerms>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl NewSmartContract {
    pub fn validate(&self) -> Result<(), ModelError> {
        let total = self.total_funds.as_deref().map(parse_amount).transpose()?;
        let remaining = self.remaining_funds.as_deref().map(parse_amount).transpose()?;
        if let (Some(t), Some(r)) = (total, remaining) {
            if r > t {
                return Err(ModelError::invalid("remaining_funds exceeds total_funds"));
            }
        }
        if let Some(terms) = &self.terms {
            let sum: f64 = terms.milestones.iter().map(|m| m.percentage).sum();
            if terms.milestones.iter().any(|m| m.percentage < 0.0) || sum > 100.0 {
                return Err(ModelError::invalid("milestone percentages must be non-negative and sum to at most 100"));
            }
        }
        Ok(())
    }

    pub fn into_record(self) -> SmartContract {
        // A fresh contract has not paid anything out yet.
        let remaining_funds = self.remaining_funds.or_else(|| self.total_funds.clone());
        SmartContract {
            id: new_id(),
            contract_address: self.contract_address,
            title: self.title,
            description: self.description,
            sponsor_address: self.sponsor_address,
            total_funds: self.total_funds,
            remaining_funds,
            created_at: now_iso(),
            terms: self.terms,
            extra: self.extra,
        }
    }
}
