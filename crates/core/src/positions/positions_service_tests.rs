#[cfg(test)]
mod tests {
    use crate::errors::{DatabaseError, Error, Result, ValidationError};
    use crate::positions::{
        NewPosition, NewPurchase, Position, PositionRepositoryTrait, PositionService,
        PositionServiceTrait, PositionUpdate,
    };
    use async_trait::async_trait;
    use chrono::Utc;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    // --- Mock PositionRepository ---
    #[derive(Default)]
    struct MockPositionRepository {
        positions: Mutex<HashMap<String, Position>>,
        writes: Mutex<usize>,
    }

    impl MockPositionRepository {
        fn seed(&self, id: &str, owner_id: &str, symbol: &str, shares: Decimal, cost: Decimal) {
            self.positions.lock().unwrap().insert(
                id.to_string(),
                Position {
                    id: id.to_string(),
                    owner_id: owner_id.to_string(),
                    symbol: symbol.to_string(),
                    company_name: format!("{} Corp", symbol),
                    shares,
                    average_cost: cost,
                    created_at: Utc::now(),
                    updated_at: Utc::now(),
                },
            );
        }

        fn snapshot(&self, id: &str) -> Option<Position> {
            self.positions.lock().unwrap().get(id).cloned()
        }

        fn writes(&self) -> usize {
            *self.writes.lock().unwrap()
        }
    }

    #[async_trait]
    impl PositionRepositoryTrait for MockPositionRepository {
        fn get_by_id(&self, position_id: &str) -> Result<Option<Position>> {
            Ok(self.snapshot(position_id))
        }

        fn find_by_symbol(&self, owner_id: &str, symbol: &str) -> Result<Option<Position>> {
            Ok(self
                .positions
                .lock()
                .unwrap()
                .values()
                .find(|p| p.owner_id == owner_id && p.symbol == symbol)
                .cloned())
        }

        fn list_by_owner(&self, owner_id: &str) -> Result<Vec<Position>> {
            let mut positions: Vec<Position> = self
                .positions
                .lock()
                .unwrap()
                .values()
                .filter(|p| p.owner_id == owner_id)
                .cloned()
                .collect();
            positions.sort_by(|a, b| a.symbol.cmp(&b.symbol));
            Ok(positions)
        }

        async fn insert(&self, new_position: NewPosition) -> Result<Position> {
            if self
                .find_by_symbol(&new_position.owner_id, &new_position.symbol)?
                .is_some()
            {
                return Err(DatabaseError::UniqueViolation(new_position.symbol).into());
            }
            let now = Utc::now();
            let position = Position {
                id: new_position.id,
                owner_id: new_position.owner_id,
                symbol: new_position.symbol,
                company_name: new_position.company_name,
                shares: new_position.shares,
                average_cost: new_position.average_cost,
                created_at: now,
                updated_at: now,
            };
            *self.writes.lock().unwrap() += 1;
            self.positions
                .lock()
                .unwrap()
                .insert(position.id.clone(), position.clone());
            Ok(position)
        }

        async fn patch(&self, position_id: &str, update: PositionUpdate) -> Result<Position> {
            let mut positions = self.positions.lock().unwrap();
            let position = positions
                .get_mut(position_id)
                .ok_or_else(|| DatabaseError::NotFound(position_id.to_string()))?;
            if let Some(shares) = update.shares {
                position.shares = shares;
            }
            if let Some(average_cost) = update.average_cost {
                position.average_cost = average_cost;
            }
            position.updated_at = Utc::now();
            *self.writes.lock().unwrap() += 1;
            Ok(position.clone())
        }

        async fn delete(&self, position_id: &str) -> Result<usize> {
            *self.writes.lock().unwrap() += 1;
            Ok(self
                .positions
                .lock()
                .unwrap()
                .remove(position_id)
                .map_or(0, |_| 1))
        }
    }

    fn service_with(repo: Arc<MockPositionRepository>) -> PositionService {
        PositionService::new(repo)
    }

    #[tokio::test]
    async fn test_add_purchase_creates_position() {
        let repo = Arc::new(MockPositionRepository::default());
        let service = service_with(repo.clone());

        let position = service
            .add_purchase("alice", NewPurchase::new("aapl", "Apple Inc", dec!(10), dec!(150)))
            .await
            .unwrap();

        assert_eq!(position.symbol, "AAPL");
        assert_eq!(position.owner_id, "alice");
        assert_eq!(position.shares, dec!(10));
        assert_eq!(position.average_cost, dec!(150));
        assert!(!position.id.is_empty());
    }

    #[tokio::test]
    async fn test_add_purchase_merges_case_insensitively() {
        let repo = Arc::new(MockPositionRepository::default());
        let service = service_with(repo.clone());

        let first = service
            .add_purchase("alice", NewPurchase::new("AAPL", "Apple Inc", dec!(10), dec!(100)))
            .await
            .unwrap();
        let merged = service
            .add_purchase("alice", NewPurchase::new("aapl", "Apple Inc", dec!(10), dec!(200)))
            .await
            .unwrap();

        assert_eq!(merged.id, first.id);
        assert_eq!(merged.shares, dec!(20));
        assert_eq!(merged.average_cost, dec!(150));
        assert_eq!(service.list_positions("alice").unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_same_symbol_different_owners_are_separate() {
        let repo = Arc::new(MockPositionRepository::default());
        let service = service_with(repo.clone());

        service
            .add_purchase("alice", NewPurchase::new("MSFT", "Microsoft", dec!(1), dec!(400)))
            .await
            .unwrap();
        service
            .add_purchase("bob", NewPurchase::new("MSFT", "Microsoft", dec!(2), dec!(410)))
            .await
            .unwrap();

        assert_eq!(service.list_positions("alice").unwrap()[0].shares, dec!(1));
        assert_eq!(service.list_positions("bob").unwrap()[0].shares, dec!(2));
    }

    #[tokio::test]
    async fn test_invalid_purchase_is_not_persisted() {
        let repo = Arc::new(MockPositionRepository::default());
        repo.seed("p1", "alice", "AAPL", dec!(5), dec!(100));
        let service = service_with(repo.clone());

        let err = service
            .add_purchase("alice", NewPurchase::new("AAPL", "Apple Inc", dec!(0), dec!(100)))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            Error::Validation(ValidationError::NonPositiveShares(_))
        ));
        assert_eq!(repo.writes(), 0);
        assert_eq!(repo.snapshot("p1").unwrap().shares, dec!(5));
    }

    #[tokio::test]
    async fn test_remove_other_users_position_is_rejected() {
        let repo = Arc::new(MockPositionRepository::default());
        repo.seed("p1", "alice", "AAPL", dec!(5), dec!(100));
        let service = service_with(repo.clone());

        let err = service.remove_position("mallory", "p1").await.unwrap_err();

        assert!(matches!(err, Error::NotFoundOrUnauthorized(_)));
        assert!(repo.snapshot("p1").is_some());
        assert_eq!(repo.writes(), 0);
    }

    #[tokio::test]
    async fn test_remove_missing_position_matches_unauthorized() {
        let repo = Arc::new(MockPositionRepository::default());
        let service = service_with(repo);

        let missing = service.remove_position("alice", "nope").await.unwrap_err();
        assert_eq!(missing.to_string(), "Position not found or unauthorized");
    }

    #[tokio::test]
    async fn test_remove_own_position() {
        let repo = Arc::new(MockPositionRepository::default());
        repo.seed("p1", "alice", "AAPL", dec!(5), dec!(100));
        let service = service_with(repo.clone());

        service.remove_position("alice", "p1").await.unwrap();
        assert!(repo.snapshot("p1").is_none());
    }

    #[tokio::test]
    async fn test_update_other_users_position_leaves_it_unchanged() {
        let repo = Arc::new(MockPositionRepository::default());
        repo.seed("p1", "alice", "AAPL", dec!(5), dec!(100));
        let service = service_with(repo.clone());
        let before = repo.snapshot("p1").unwrap();

        let err = service
            .update_position(
                "mallory",
                "p1",
                PositionUpdate {
                    shares: Some(dec!(1000)),
                    average_cost: None,
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, Error::NotFoundOrUnauthorized(_)));
        assert_eq!(repo.snapshot("p1").unwrap(), before);
    }

    #[tokio::test]
    async fn test_partial_update_leaves_omitted_fields() {
        let repo = Arc::new(MockPositionRepository::default());
        repo.seed("p1", "alice", "AAPL", dec!(5), dec!(100));
        let service = service_with(repo.clone());

        let updated = service
            .update_position(
                "alice",
                "p1",
                PositionUpdate {
                    shares: Some(dec!(8)),
                    average_cost: None,
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.shares, dec!(8));
        assert_eq!(updated.average_cost, dec!(100));

        let updated = service
            .update_position(
                "alice",
                "p1",
                PositionUpdate {
                    shares: None,
                    average_cost: Some(dec!(95.5)),
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.shares, dec!(8));
        assert_eq!(updated.average_cost, dec!(95.5));
    }

    #[tokio::test]
    async fn test_invalid_update_is_rejected_before_write() {
        let repo = Arc::new(MockPositionRepository::default());
        repo.seed("p1", "alice", "AAPL", dec!(5), dec!(100));
        let service = service_with(repo.clone());

        let err = service
            .update_position(
                "alice",
                "p1",
                PositionUpdate {
                    shares: Some(dec!(-1)),
                    average_cost: Some(dec!(1)),
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Validation(_)));
        assert_eq!(repo.writes(), 0);
        assert_eq!(repo.snapshot("p1").unwrap().average_cost, dec!(100));
    }
}
