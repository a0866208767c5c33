//! PaymentService unit tests.

#[cfg(test)]
pub(crate) mod tests {
    use std::collections::HashSet;
    use std::sync::Mutex;

    use async_trait::async_trait;

    use payments_types::{
        AppError, CreatePaymentRequest, PaymentFilter, PaymentId, PaymentRecord,
        PaymentRepository, RepoError, Timestamp, UpdatePaymentRequest,
    };

    use crate::PaymentService;

    /// Simple ordered in-memory repository for testing the service layer.
    pub struct MockRepo {
        items: Mutex<Vec<PaymentRecord>>,
    }

    impl MockRepo {
        pub fn new() -> Self {
            Self {
                items: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl PaymentRepository for MockRepo {
        async fn scan_payments(
            &self,
            filter: Option<PaymentFilter>,
        ) -> Result<Vec<PaymentRecord>, RepoError> {
            Ok(self
                .items
                .lock()
                .unwrap()
                .iter()
                .filter(|p| filter.as_ref().is_none_or(|f| p.matches(f)))
                .cloned()
                .collect())
        }

        async fn put_payment(&self, record: &PaymentRecord) -> Result<(), RepoError> {
            let mut items = self.items.lock().unwrap();
            items.retain(|p| p.id != record.id);
            items.push(record.clone());
            Ok(())
        }

        async fn update_payment(&self, record: &PaymentRecord) -> Result<(), RepoError> {
            let mut items = self.items.lock().unwrap();
            match items.iter_mut().find(|p| p.id == record.id) {
                Some(existing) => *existing = record.clone(),
                None => items.push(record.clone()),
            }
            Ok(())
        }

        async fn delete_payment(&self, id: &PaymentId) -> Result<(), RepoError> {
            self.items.lock().unwrap().retain(|p| &p.id != id);
            Ok(())
        }
    }

    /// Repository whose every call fails like an unreachable store.
    pub struct FailingRepo;

    #[async_trait]
    impl PaymentRepository for FailingRepo {
        async fn scan_payments(
            &self,
            _filter: Option<PaymentFilter>,
        ) -> Result<Vec<PaymentRecord>, RepoError> {
            Err(RepoError::Database("connection refused".into()))
        }

        async fn put_payment(&self, _record: &PaymentRecord) -> Result<(), RepoError> {
            Err(RepoError::Database("connection refused".into()))
        }

        async fn update_payment(&self, _record: &PaymentRecord) -> Result<(), RepoError> {
            Err(RepoError::Database("connection refused".into()))
        }

        async fn delete_payment(&self, _id: &PaymentId) -> Result<(), RepoError> {
            Err(RepoError::Database("connection refused".into()))
        }
    }

    fn create_request(user: &str, reserve: &str, borrow: &str) -> CreatePaymentRequest {
        CreatePaymentRequest {
            user_id: user.to_string(),
            reserve_id: reserve.to_string(),
            status: "active".to_string(),
            timestamp: 1000.into(),
            price: 9.99,
            borrow_id: borrow.to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_payment_assigns_id_and_stores_fields() {
        let service = PaymentService::new(MockRepo::new());

        let created = service
            .create_payment(create_request("u1", "r1", "b1"))
            .await
            .unwrap();

        let all = service.list_payments().await.unwrap();
        assert_eq!(all, vec![created.clone()]);
        assert_eq!(created.user_id, "u1");
        assert_eq!(created.reserve_id, "r1");
        assert_eq!(created.borrow_id, "b1");
        assert_eq!(created.status, "active");
        assert_eq!(created.timestamp, Timestamp::from(1000));
        assert_eq!(created.price, 9.99);
    }

    #[tokio::test]
    async fn test_sequential_creates_never_share_an_id() {
        let service = PaymentService::new(MockRepo::new());

        let mut ids = HashSet::new();
        for _ in 0..50 {
            let created = service
                .create_payment(create_request("u1", "r1", "b1"))
                .await
                .unwrap();
            assert!(ids.insert(created.id));
        }

        assert_eq!(service.list_payments().await.unwrap().len(), 50);
    }

    #[tokio::test]
    async fn test_list_user_payments_filters_by_user() {
        let service = PaymentService::new(MockRepo::new());
        service.create_payment(create_request("u1", "r1", "b1")).await.unwrap();
        service.create_payment(create_request("u2", "r2", "b2")).await.unwrap();
        service.create_payment(create_request("u1", "r3", "b3")).await.unwrap();

        let payments = service.list_user_payments("u1".into()).await.unwrap();

        assert_eq!(payments.len(), 2);
        assert!(payments.iter().all(|p| p.user_id == "u1"));
        assert!(service.list_user_payments("nobody".into()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_get_by_reserve_id_returns_first_match() {
        let service = PaymentService::new(MockRepo::new());
        let first = service
            .create_payment(create_request("u1", "shared", "b1"))
            .await
            .unwrap();
        service
            .create_payment(create_request("u2", "shared", "b2"))
            .await
            .unwrap();

        let found = service.get_by_reserve_id("shared".into()).await.unwrap();

        assert_eq!(found, first);
    }

    #[tokio::test]
    async fn test_get_by_borrow_id() {
        let service = PaymentService::new(MockRepo::new());
        service.create_payment(create_request("u1", "r1", "b1")).await.unwrap();
        let target = service
            .create_payment(create_request("u2", "r2", "b2"))
            .await
            .unwrap();

        let found = service.get_by_borrow_id("b2".into()).await.unwrap();

        assert_eq!(found, target);
    }

    #[tokio::test]
    async fn test_lookup_without_match_is_not_found() {
        let service = PaymentService::new(MockRepo::new());

        let by_reserve = service.get_by_reserve_id("r404".into()).await;
        let by_borrow = service.get_by_borrow_id("b404".into()).await;

        assert!(matches!(by_reserve, Err(AppError::NotFound(msg)) if msg.contains("reserveId r404")));
        assert!(matches!(by_borrow, Err(AppError::NotFound(msg)) if msg.contains("borrowId b404")));
    }

    #[tokio::test]
    async fn test_update_replaces_every_field_but_id() {
        let service = PaymentService::new(MockRepo::new());
        let created = service
            .create_payment(create_request("u1", "r1", "b1"))
            .await
            .unwrap();

        service
            .update_payment(UpdatePaymentRequest {
                id: created.id.clone(),
                user_id: "u2".to_string(),
                reserve_id: "r2".to_string(),
                status: "closed".to_string(),
                timestamp: 2000.into(),
                price: 12.5,
                borrow_id: "b2".to_string(),
            })
            .await
            .unwrap();

        let all = service.list_payments().await.unwrap();
        assert_eq!(all.len(), 1);
        let stored = &all[0];
        assert_eq!(stored.id, created.id);
        assert_eq!(stored.user_id, "u2");
        assert_eq!(stored.reserve_id, "r2");
        assert_eq!(stored.status, "closed");
        assert_eq!(stored.timestamp, Timestamp::from(2000));
        assert_eq!(stored.price, 12.5);
        assert_eq!(stored.borrow_id, "b2");
    }

    #[tokio::test]
    async fn test_delete_payment_and_missing_id() {
        let service = PaymentService::new(MockRepo::new());
        let created = service
            .create_payment(create_request("u1", "r1", "b1"))
            .await
            .unwrap();

        service.delete_payment(created.id.clone()).await.unwrap();
        assert!(service.list_payments().await.unwrap().is_empty());

        // A second delete of the same id is still a success.
        service.delete_payment(created.id).await.unwrap();
    }

    #[tokio::test]
    async fn test_store_failures_are_internal_errors() {
        let service = PaymentService::new(FailingRepo);

        assert!(matches!(service.list_payments().await, Err(AppError::Internal(_))));
        assert!(matches!(
            service.get_by_reserve_id("r1".into()).await,
            Err(AppError::Internal(_))
        ));
        assert!(matches!(
            service.create_payment(create_request("u1", "r1", "b1")).await,
            Err(AppError::Internal(_))
        ));
        assert!(matches!(
            service.delete_payment(PaymentId::new()).await,
            Err(AppError::Internal(_))
        ));
    }
}
