use chrono::{DateTime, FixedOffset, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Endpoint family of a parent record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParentType {
    Doacoes,
    Solicitacoes,
    Descartes,
}

impl ParentType {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "doacoes" | "doacao" | "donation" => Some(Self::Doacoes),
            "solicitacoes" | "solicitacao" | "solicitation" => Some(Self::Solicitacoes),
            "descartes" | "descarte" | "disposal" => Some(Self::Descartes),
            _ => None,
        }
    }

    pub fn segment(&self) -> &'static str {
        match self {
            Self::Doacoes => "doacoes",
            Self::Solicitacoes => "solicitacoes",
            Self::Descartes => "descartes",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Doacoes => "Doação",
            Self::Solicitacoes => "Solicitação",
            Self::Descartes => "Descarte",
        }
    }
}

impl std::fmt::Display for ParentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.segment())
    }
}

/// Donation, solicitation or disposal as returned by `GET /{parentType}/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParentRecord {
    #[serde(deserialize_with = "super::de_id")]
    pub id: String,
    #[serde(
        default,
        alias = "usuarioId",
        alias = "userId",
        deserialize_with = "super::de_opt_text"
    )]
    pub owner_account_id: Option<String>,
    #[serde(default, deserialize_with = "super::de_opt_text")]
    pub status: Option<String>,
    #[serde(default, alias = "dataCriacao", deserialize_with = "super::de_opt_text")]
    pub created_at: Option<String>,
    #[serde(default, alias = "descricao", deserialize_with = "super::de_opt_text")]
    pub description: Option<String>,
    #[serde(default, alias = "informacoesAdicionais", deserialize_with = "super::de_opt_text")]
    pub additional_info: Option<String>,
    #[serde(default, alias = "horario", deserialize_with = "super::de_opt_text")]
    pub schedule_window: Option<String>,
    #[serde(default, alias = "contato", deserialize_with = "super::de_opt_text")]
    pub contact: Option<String>,
    #[serde(default, alias = "codigoReferencia", deserialize_with = "super::de_opt_text")]
    pub reference_code: Option<String>,
}

impl ParentRecord {
    /// Parse `created_at`; accepts RFC 3339 and naive `YYYY-MM-DD[ T]HH:MM:SS` (read as UTC)
    pub fn created_at_parsed(&self) -> Option<DateTime<FixedOffset>> {
        let raw = self.created_at.as_deref()?.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt);
        }
        ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
            .map(|naive| naive.and_utc().fixed_offset())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parent_type_segments() {
        assert_eq!(ParentType::from_str("Doacoes"), Some(ParentType::Doacoes));
        assert_eq!(ParentType::from_str("descarte"), Some(ParentType::Descartes));
        assert_eq!(ParentType::from_str("pedidos"), None);
        assert_eq!(ParentType::Solicitacoes.segment(), "solicitacoes");
    }

    #[test]
    fn test_parent_record_loose_payload() {
        let record: ParentRecord = serde_json::from_str(
            r#"{
                "id": 42,
                "usuarioId": 7,
                "status": "APROVADO",
                "dataCriacao": "2024-03-01T12:30:00Z",
                "descricao": "Dois monitores e um HD",
                "codigoReferencia": "DSC-0042",
                "somethingNew": [1, 2, 3]
            }"#,
        )
        .unwrap();
        assert_eq!(record.id, "42");
        assert_eq!(record.owner_account_id.as_deref(), Some("7"));
        assert_eq!(record.reference_code.as_deref(), Some("DSC-0042"));
        assert!(record.additional_info.is_none());
        assert!(record.schedule_window.is_none());
        assert!(record.created_at_parsed().is_some());
    }

    #[test]
    fn test_parent_record_minimal_payload() {
        let record: ParentRecord = serde_json::from_str(r#"{"id": "abc"}"#).unwrap();
        assert_eq!(record.id, "abc");
        assert!(record.status.is_none());
        assert!(record.created_at_parsed().is_none());
    }

    #[test]
    fn test_created_at_naive_format() {
        let record: ParentRecord =
            serde_json::from_str(r#"{"id": 1, "createdAt": "2024-03-01 08:00:00"}"#).unwrap();
        let parsed = record.created_at_parsed().unwrap();
        assert_eq!(parsed.to_rfc3339(), "2024-03-01T08:00:00+00:00");
    }
}
