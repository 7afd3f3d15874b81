use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AccountType {
    #[serde(alias = "pessoaFisica")]
    Individual,
    #[serde(alias = "pessoaJuridica")]
    LegalEntity,
    #[serde(alias = "estudante")]
    Student,
    #[serde(alias = "funcionario")]
    Staff,
}

impl AccountType {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "individual" | "pessoafisica" | "pf" => Some(Self::Individual),
            "legalentity" | "legal-entity" | "pessoajuridica" | "pj" => Some(Self::LegalEntity),
            "student" | "estudante" => Some(Self::Student),
            "staff" | "funcionario" => Some(Self::Staff),
            _ => None,
        }
    }

    pub fn is_staff(&self) -> bool {
        matches!(self, Self::Staff)
    }
}

/// Account as exposed by the backend; only `(id, account_type)` drives the engine
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    #[serde(deserialize_with = "super::de_id")]
    pub id: String,
    #[serde(rename = "type", alias = "tipo")]
    pub account_type: AccountType,
    #[serde(default, alias = "nome")]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, alias = "telefone", deserialize_with = "super::de_opt_text")]
    pub phone: Option<String>,
}

/// Identity of whoever opened the view, passed explicitly into the fetchers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub account_id: String,
    pub account_type: AccountType,
}

impl Session {
    pub fn new(account_id: impl Into<String>, account_type: AccountType) -> Self {
        Self {
            account_id: account_id.into(),
            account_type,
        }
    }

    pub fn is_owner_of(&self, owner_account_id: Option<&str>) -> bool {
        owner_account_id == Some(self.account_id.as_str())
    }
}

impl From<&Account> for Session {
    fn from(account: &Account) -> Self {
        Self::new(account.id.clone(), account.account_type)
    }
}
