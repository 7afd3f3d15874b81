use serde::Serialize;

/// Closed status vocabulary of parent records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl RecordStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Pendente",
            Self::Approved => "Aprovado",
            Self::Rejected => "Rejeitado",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NormalizedStatus {
    pub value: RecordStatus,
    pub label: &'static str,
}

impl From<RecordStatus> for NormalizedStatus {
    fn from(value: RecordStatus) -> Self {
        Self {
            value,
            label: value.label(),
        }
    }
}

/// Map a raw backend status onto `RecordStatus`; unknown or missing values are pending
pub fn normalize_status(raw: Option<&str>) -> NormalizedStatus {
    let value = match raw.map(|s| s.trim().to_lowercase()).as_deref() {
        Some("aprovado") => RecordStatus::Approved,
        Some("rejeitado") => RecordStatus::Rejected,
        Some("pendente") => RecordStatus::Pending,
        _ => RecordStatus::Pending,
    };
    value.into()
}
