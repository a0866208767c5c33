//! In-memory repository tests.

#[cfg(test)]
mod tests {
    use payments_types::{PaymentFilter, PaymentId, PaymentRecord, PaymentRepository};

    use crate::MemoryRepo;

    fn record(user: &str, reserve: &str, borrow: &str) -> PaymentRecord {
        PaymentRecord {
            id: PaymentId::new(),
            user_id: user.to_string(),
            reserve_id: reserve.to_string(),
            status: "active".to_string(),
            timestamp: 1000.into(),
            price: 9.99,
            borrow_id: borrow.to_string(),
        }
    }

    #[tokio::test]
    async fn test_put_and_scan_all() {
        let repo = MemoryRepo::new();

        repo.put_payment(&record("u1", "r1", "b1")).await.unwrap();
        repo.put_payment(&record("u2", "r2", "b2")).await.unwrap();

        let items = repo.scan_payments(None).await.unwrap();

        assert_eq!(items.len(), 2);
    }

    #[tokio::test]
    async fn test_scan_with_user_filter() {
        let repo = MemoryRepo::new();

        repo.put_payment(&record("u1", "r1", "b1")).await.unwrap();
        repo.put_payment(&record("u1", "r2", "b2")).await.unwrap();
        repo.put_payment(&record("u2", "r3", "b3")).await.unwrap();

        let items = repo
            .scan_payments(Some(PaymentFilter::UserId("u1".into())))
            .await
            .unwrap();

        assert_eq!(items.len(), 2);
        assert!(items.iter().all(|p| p.user_id == "u1"));
    }

    #[tokio::test]
    async fn test_scan_with_no_matches_is_empty() {
        let repo = MemoryRepo::new();
        repo.put_payment(&record("u1", "r1", "b1")).await.unwrap();

        let items = repo
            .scan_payments(Some(PaymentFilter::BorrowId("missing".into())))
            .await
            .unwrap();

        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn test_put_does_not_enforce_reserve_id_uniqueness() {
        let repo = MemoryRepo::new();

        repo.put_payment(&record("u1", "r1", "b1")).await.unwrap();
        repo.put_payment(&record("u2", "r1", "b2")).await.unwrap();

        let items = repo
            .scan_payments(Some(PaymentFilter::ReserveId("r1".into())))
            .await
            .unwrap();

        assert_eq!(items.len(), 2);
    }

    #[tokio::test]
    async fn test_update_overwrites_all_fields() {
        let repo = MemoryRepo::new();
        let original = record("u1", "r1", "b1");
        repo.put_payment(&original).await.unwrap();

        let updated = PaymentRecord {
            id: original.id.clone(),
            user_id: "u9".to_string(),
            reserve_id: "r9".to_string(),
            status: "closed".to_string(),
            timestamp: 2000.into(),
            price: 1.5,
            borrow_id: "b9".to_string(),
        };
        repo.update_payment(&updated).await.unwrap();

        let items = repo.scan_payments(None).await.unwrap();

        assert_eq!(items, vec![updated]);
    }

    #[tokio::test]
    async fn test_update_missing_id_upserts() {
        let repo = MemoryRepo::new();
        let ghost = record("u1", "r1", "b1");

        repo.update_payment(&ghost).await.unwrap();

        assert_eq!(repo.len(), 1);
    }

    #[tokio::test]
    async fn test_delete_removes_item() {
        let repo = MemoryRepo::new();
        let keep = record("u1", "r1", "b1");
        let gone = record("u1", "r2", "b2");
        repo.put_payment(&keep).await.unwrap();
        repo.put_payment(&gone).await.unwrap();

        repo.delete_payment(&gone.id).await.unwrap();

        let items = repo.scan_payments(None).await.unwrap();
        assert_eq!(items, vec![keep]);
    }

    #[tokio::test]
    async fn test_delete_missing_id_succeeds() {
        let repo = MemoryRepo::new();

        let result = repo
            .delete_payment(&PaymentId::from_string("does-not-exist"))
            .await;

        assert!(result.is_ok());
        assert!(repo.is_empty());
    }
}
