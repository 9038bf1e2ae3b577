use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
pub struct Health {
    pub status: &'static str,
}

/// Body returned by `GET /`.
#[derive(Serialize, Deserialize, Debug)]
pub struct Banner {
    pub message: String,
}

impl Default for Banner {
    fn default() -> Self {
        Self { message: "MetaMind Fellowship API".to_string() }
    }
}
