use serde::{Deserialize, Serialize};

/// A resolved account from the user directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerRecord {
    pub id: i64,
    pub username: String,
    pub email: Option<String>,
    pub name: Option<String>,
}
