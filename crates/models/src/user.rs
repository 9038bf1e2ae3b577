use serde::{Deserialize, Serialize};

use crate::amount::{format_amount, parse_amount, string_or_number};
use crate::errors::ModelError;
use crate::record::{new_id, now_iso, Extra, Record};

fn default_name() -> String { "Unnamed User".to_string() }
fn default_kind() -> String { "student".to_string() }
fn default_balance() -> String { "0.0".to_string() }

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct User {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub address: String,
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(rename = "type", default = "default_kind")]
    pub kind: String,
    #[serde(default = "default_balance", deserialize_with = "string_or_number")]
    pub balance: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(flatten)]
    pub extra: Extra,
}

impl Record for User {
    const COLLECTION: &'static str = "users";

    fn id(&self) -> &str { &self.id }

    fn set_id(&mut self, id: String) { self.id = id; }

    fn unique_keys(&self) -> Vec<(&'static str, &str)> {
        let mut keys = Vec::with_capacity(2);
        if !self.address.is_empty() { keys.push(("address", self.address.as_str())); }
        if !self.email.is_empty() { keys.push(("email", self.email.as_str())); }
        keys
    }
}

impl User {
    pub fn is_sponsor(&self) -> bool { self.kind == "sponsor" }

    /// Subtract `amount` from the balance, clamping at zero.
    pub fn debit(&mut self, amount: f64) -> Result<(), ModelError> {
        let current = parse_amount(&self.balance)?;
        self.balance = format_amount((current - amount).max(0.0));
        Ok(())
    }

    pub fn credit(&mut self, amount: f64) -> Result<(), ModelError> {
        let current = parse_amount(&self.balance)?;
        let next = current + amount;
        if !next.is_finite() {
            return Err(ModelError::invalid(format!("balance of {} would overflow", self.id)));
        }
        self.balance = format_amount(next);
        Ok(())
    }

    /// Apply the fields of a partial update. Only name, email, type and
    /// balance are writable this way.
    pub fn apply(&mut self, patch: UserPatch) {
        if let Some(name) = patch.name { self.name = name; }
        if let Some(email) = patch.email { self.email = email; }
        if let Some(kind) = patch.kind { self.kind = kind; }
        if let Some(balance) = patch.balance { self.balance = balance; }
    }
}

/// Body of `POST /api/users`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct NewUser {
    #[serde(default)]
    pub address: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub balance: Option<String>,
}

impl NewUser {
    pub fn validate(&self) -> Result<(), ModelError> {
        let has = |v: &Option<String>| v.as_deref().map(|s| !s.trim().is_empty()).unwrap_or(false);
        if !has(&self.address) && !has(&self.email) {
            return Err(ModelError::invalid("address or email is required"));
        }
        if let Some(email) = self.email.as_deref().filter(|e| !e.is_empty()) {
            validate_email(email)?;
        }
        if let Some(balance) = &self.balance {
            parse_amount(balance)?;
        }
        Ok(())
    }

    pub fn into_record(self) -> User {
        User {
            id: new_id(),
            address: self.address.unwrap_or_default(),
            name: self.name.unwrap_or_else(default_name),
            email: self.email.unwrap_or_default(),
            kind: self.kind.unwrap_or_else(default_kind),
            balance: self.balance.unwrap_or_else(default_balance),
            created_at: now_iso(),
            extra: Extra::new(),
        }
    }
}

/// Body of `PUT /api/users/:address`. Other fields in the body are ignored.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub balance: Option<String>,
}

impl UserPatch {
    pub fn validate(&self) -> Result<(), ModelError> {
        if let Some(email) = self.email.as_deref().filter(|e| !e.is_empty()) {
            validate_email(email)?;
        }
        if let Some(balance) = &self.balance {
            parse_amount(balance)?;
        }
        Ok(())
    }
}

pub fn validate_email(email: &str) -> Result<(), ModelError> {
    if !email.contains('@') { return Err(ModelError::invalid("invalid email")); }
    Ok(())
}

fn opt_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    struct Wrap(#[serde(deserialize_with = "string_or_number")] String);

    Ok(Option::<Wrap>::deserialize(deserializer)?.map(|Wrap(s)| s))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(balance: &str) -> User {
        NewUser { address: Some("0xA".into()), balance: Some(balance.into()), ..Default::default() }.into_record()
    }

    #[test]
    fn debit_clamps_at_zero() {
        let mut u = user("2.0");
        u.debit(5.0).unwrap();
        assert_eq!(u.balance, "0.0");
    }

    #[test]
    fn credit_and_debit_format_like_decimals() {
        let mut a = user("10.0");
        let mut b = user("0.0");
        a.debit(3.0).unwrap();
        b.credit(3.0).unwrap();
        assert_eq!(a.balance, "7.0");
        assert_eq!(b.balance, "3.0");
    }

    #[test]
    fn credit_rejects_overflow_and_keeps_balance() {
        let mut u = user("1e308");
        assert!(u.credit(1e308).is_err());
        assert_eq!(u.balance, "1e308");
    }

    #[test]
    fn address_or_email_required() {
        assert!(NewUser::default().validate().is_err());
        let by_email = NewUser { email: Some("a@b.c".into()), ..Default::default() };
        assert!(by_email.validate().is_ok());
    }

    #[test]
    fn unique_keys_skip_empty_values() {
        let u = user("0.0");
        assert_eq!(u.unique_keys(), vec![("address", "0xA")]);
    }

    #[test]
    fn patch_touches_only_allowed_fields() {
        let mut u = user("1.0");
        let before = u.clone();
        let patch: UserPatch = serde_json::from_str(r#"{"name":"New","balance":2.5,"address":"0xZ","id":"x"}"#).unwrap();
        u.apply(patch);
        assert_eq!(u.name, "New");
        assert_eq!(u.balance, "2.5");
        assert_eq!(u.address, before.address);
        assert_eq!(u.id, before.id);
    }

    #[test]
    fn type_field_is_renamed() {
        let u = user("0.0");
        let v = serde_json::to_value(&u).unwrap();
        assert_eq!(v["type"], "student");
        assert!(v.get("kind").is_none());
    }
}
