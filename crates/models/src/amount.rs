//! Decimal amounts stored as strings (`"10.2"`), the way wallet balances and
//! transfer amounts are kept on disk.

use serde::{Deserialize, Deserializer};

use crate::errors::ModelError;

/// Parse a stored or submitted amount. Rejects non-finite and negative values.
pub fn parse_amount(raw: &str) -> Result<f64, ModelError> {
    let v: f64 = raw
        .trim()
        .parse()
        .map_err(|_| ModelError::invalid(format!("amount '{raw}' is not a number")))?;
    if !v.is_finite() {
        return Err(ModelError::invalid(format!("amount '{raw}' is not finite")));
    }
    if v < 0.0 {
        return Err(ModelError::invalid(format!("amount '{raw}' is negative")));
    }
    Ok(v)
}

/// Render an amount with at least one fractional digit: `7.0`, `0.5`.
pub fn format_amount(v: f64) -> String {
    format!("{v:?}")
}

/// Accept `"3.0"` or `3.0` / `3` and keep the textual form.
pub fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Number(n) => n.to_string(),
    })
}
