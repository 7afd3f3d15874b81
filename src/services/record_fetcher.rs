use std::sync::Arc;

use serde::Serialize;

use crate::error::FetchError;
use crate::http_client::{segment, Backend};
use crate::models::{ParentRecord, ParentType, Session};

/// Owning account of a parent record, as seen from the current session
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerRef {
    pub account_id: Option<String>,
    pub viewed_by_owner: bool,
    /// Staff reviewing someone else's record
    pub viewed_by_staff: bool,
}

pub struct RecordFetcher {
    backend: Arc<dyn Backend>,
}

impl RecordFetcher {
    pub fn new(backend: Arc<dyn Backend>) -> Self {
        Self { backend }
    }

    pub fn record_path(parent_type: ParentType, parent_id: &str) -> String {
        format!("/{}/{}", parent_type.segment(), segment(parent_id))
    }

    /// Load a parent record; every failure is reported as "no record"
    pub async fn fetch_parent(
        &self,
        session: &Session,
        parent_type: ParentType,
        parent_id: &str,
    ) -> Option<ParentRecord> {
        match self.try_fetch_parent(parent_type, parent_id).await {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::warn!(
                    "No details for {} {} (account {}): {}",
                    parent_type,
                    parent_id,
                    session.account_id,
                    e
                );
                None
            }
        }
    }

    /// Resolve the record's owning account against the session that opened it
    pub fn resolve_owner(session: &Session, record: &ParentRecord) -> OwnerRef {
        let owner = record.owner_account_id.as_deref();
        let viewed_by_owner = session.is_owner_of(owner);
        let viewed_by_staff = !viewed_by_owner && session.account_type.is_staff();

        if !viewed_by_owner && !viewed_by_staff {
            tracing::debug!(
                "Record {} opened by non-owner account {}",
                record.id,
                session.account_id
            );
        }

        OwnerRef {
            account_id: owner.map(str::to_string),
            viewed_by_owner,
            viewed_by_staff,
        }
    }

    async fn try_fetch_parent(
        &self,
        parent_type: ParentType,
        parent_id: &str,
    ) -> Result<ParentRecord, FetchError> {
        let payload = self
            .backend
            .get_json(&Self::record_path(parent_type, parent_id))
            .await?;
        Ok(serde_json::from_value(payload)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AccountType;
    use crate::testing::{StubBackend, StubResponse};
    use serde_json::json;

    fn fetcher(stub: StubBackend) -> RecordFetcher {
        RecordFetcher::new(Arc::new(stub))
    }

    fn staff() -> Session {
        Session::new("1", AccountType::Staff)
    }

    #[tokio::test]
    async fn test_fetch_parent_success() {
        let fetcher = fetcher(StubBackend::new().json(
            "/descartes/42",
            json!({"id": 42, "usuarioId": 9, "status": "pendente", "codigoReferencia": "R-1"}),
        ));

        let record = fetcher
            .fetch_parent(&staff(), ParentType::Descartes, "42")
            .await
            .unwrap();

        assert_eq!(record.id, "42");
        assert_eq!(record.owner_account_id.as_deref(), Some("9"));
        assert_eq!(record.reference_code.as_deref(), Some("R-1"));
    }

    #[tokio::test]
    async fn test_failures_become_none() {
        let fetcher = fetcher(
            StubBackend::new()
                .with("/doacoes/1", StubResponse::Transport)
                .with("/doacoes/2", StubResponse::Status(500))
                .with("/doacoes/3", StubResponse::Garbage)
                .json("/doacoes/4", json!([{"id": 4}])),
        );
        let session = Session::new("9", AccountType::Individual);

        for id in ["1", "2", "3", "4", "404"] {
            assert!(
                fetcher.fetch_parent(&session, ParentType::Doacoes, id).await.is_none(),
                "id={}",
                id
            );
        }
    }

    fn record(owner: Option<&str>) -> ParentRecord {
        serde_json::from_value(json!({"id": 1, "usuarioId": owner})).unwrap()
    }

    #[test]
    fn test_resolve_owner_for_owner() {
        let session = Session::new("9", AccountType::Individual);
        let owner = RecordFetcher::resolve_owner(&session, &record(Some("9")));
        assert_eq!(
            owner,
            OwnerRef {
                account_id: Some("9".to_string()),
                viewed_by_owner: true,
                viewed_by_staff: false,
            }
        );
    }

    #[test]
    fn test_resolve_owner_for_staff_and_others() {
        let staff_view = RecordFetcher::resolve_owner(&staff(), &record(Some("9")));
        assert!(!staff_view.viewed_by_owner);
        assert!(staff_view.viewed_by_staff);

        let student = Session::new("3", AccountType::Student);
        let other_view = RecordFetcher::resolve_owner(&student, &record(Some("9")));
        assert!(!other_view.viewed_by_owner);
        assert!(!other_view.viewed_by_staff);

        let orphan = RecordFetcher::resolve_owner(&student, &record(None));
        assert_eq!(orphan.account_id, None);
        assert!(!orphan.viewed_by_owner);
    }

    #[test]
    fn test_staff_owning_a_record_is_the_owner() {
        let owner = RecordFetcher::resolve_owner(&staff(), &record(Some("1")));
        assert!(owner.viewed_by_owner);
        assert!(!owner.viewed_by_staff);
    }

    #[tokio::test]
    async fn test_uses_parent_type_endpoint_family() {
        let stub = Arc::new(StubBackend::new().json("/solicitacoes/5", json!({"id": 5})));
        let fetcher = RecordFetcher::new(stub.clone());

        assert!(fetcher
            .fetch_parent(&staff(), ParentType::Solicitacoes, "5")
            .await
            .is_some());
        assert!(fetcher
            .fetch_parent(&staff(), ParentType::Doacoes, "5")
            .await
            .is_none());
        assert_eq!(stub.requests(), vec!["/solicitacoes/5", "/doacoes/5"]);
    }
}
