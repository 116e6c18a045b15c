//! End-to-end integration tests
//!
//! These tests drive the public crate surface the way an embedding
//! application would: build a ledger through validated operations, persist
//! it as dump files, restore it into a fresh store, and aggregate over the
//! result with varying worker counts.

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use tempfile::tempdir;
    use wallet_engine::{
        export_dump, history_to_files, import_dump, Account, Money, Payment, PaymentStatus,
        Progress, WalletError, WalletStore,
    };

    /// The reference scenario: one account with phone "A" and balance 500,
    /// one completed payment p1 of 200 in category "food".
    fn reference_store() -> WalletStore {
        let mut store = WalletStore::new();
        store.restore_account(Account {
            id: 1,
            phone: "A".to_string(),
            balance: 500,
        });
        store.restore_payment(Payment {
            id: "p1".to_string(),
            account_id: 1,
            amount: 200,
            category: "food".to_string(),
            status: PaymentStatus::Ok,
        });
        store
    }

    fn sort_by_id(mut payments: Vec<Payment>) -> Vec<Payment> {
        payments.sort_by(|a, b| a.id.cmp(&b.id));
        payments
    }

    #[test]
    fn test_reference_scenario() {
        let store = reference_store();

        assert_eq!(store.sum_payments(0), 200);

        let matches = store.filter_payments(1, 0).unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].id, "p1");

        let missing = store.filter_payments(99, 0);
        assert_eq!(missing.unwrap_err(), WalletError::AccountNotFound);

        let dir = tempdir().unwrap();
        export_dump(&store, dir.path()).unwrap();

        let mut restored = WalletStore::new();
        import_dump(&mut restored, dir.path()).unwrap();
        assert_eq!(restored.accounts(), store.accounts());
        assert_eq!(restored.payments(), store.payments());
    }

    #[rstest]
    #[case::degenerate(0)]
    #[case::one(1)]
    #[case::two(2)]
    #[case::half(16)]
    #[case::all(32)]
    fn test_sum_is_stable_across_worker_counts(#[case] workers: usize) {
        let mut store = WalletStore::new();
        let account = store.register_account("+992000000001").unwrap();
        store.deposit(account.id, 1_000_000).unwrap();
        for amount in 1..=32 {
            store.pay(account.id, amount, "bulk").unwrap();
        }

        let sequential: Money = store.payments().iter().map(|payment| payment.amount).sum();
        assert_eq!(store.sum_payments(workers), sequential);
    }

    #[test]
    fn test_full_ledger_survives_directory_round_trip() {
        let mut store = WalletStore::new();
        let first = store.register_account("+992000000001").unwrap().id;
        let second = store.register_account("+992000000002").unwrap().id;
        store.deposit(first, 5_000).unwrap();
        store.deposit(second, 3_000).unwrap();
        let groceries = store.pay(first, 700, "groceries").unwrap();
        store.pay(second, 250, "transport").unwrap();
        store.favorite_payment(&groceries.id, "weekly shop").unwrap();
        store.reject(&groceries.id).unwrap();

        let dir = tempdir().unwrap();
        export_dump(&store, dir.path()).unwrap();

        let mut restored = WalletStore::new();
        import_dump(&mut restored, dir.path()).unwrap();

        assert_eq!(restored.accounts(), store.accounts());
        assert_eq!(
            sort_by_id(restored.payments().to_vec()),
            sort_by_id(store.payments().to_vec())
        );
        assert_eq!(restored.favorites(), store.favorites());

        // The restored store aggregates identically to the original.
        assert_eq!(restored.sum_payments(3), store.sum_payments(3));
        assert_eq!(
            sort_by_id(restored.filter_payments(second, 2).unwrap()),
            sort_by_id(store.filter_payments(second, 2).unwrap())
        );
    }

    #[test]
    fn test_predicate_filter_on_restored_store() {
        let store = reference_store();
        let dir = tempdir().unwrap();
        export_dump(&store, dir.path()).unwrap();

        let mut restored = WalletStore::new();
        import_dump(&mut restored, dir.path()).unwrap();

        let everything = restored.filter_payments_by(|_| true, 2).unwrap();
        assert_eq!(sort_by_id(everything), sort_by_id(store.payments().to_vec()));

        let nothing = restored.filter_payments_by(|payment| payment.amount > 10_000, 2);
        assert_eq!(nothing.unwrap_err(), WalletError::AccountNotFound);
    }

    #[test]
    fn test_streamed_sum_matches_blocking_sum() {
        let mut store = WalletStore::new();
        let account = store.register_account("+992000000001").unwrap();
        store.deposit(account.id, 100_000).unwrap();
        for amount in 1..=100 {
            store.pay(account.id, amount, "stream").unwrap();
        }

        let streamed: Money = store
            .sum_payments_with_progress()
            .iter()
            .map(|progress: Progress| progress.result)
            .sum();
        assert_eq!(streamed, store.sum_payments(4));
    }

    #[test]
    fn test_history_export_pipeline() {
        let mut store = WalletStore::new();
        let account = store.register_account("+992000000001").unwrap();
        store.deposit(account.id, 10_000).unwrap();
        for amount in 1..=10 {
            store.pay(account.id, amount * 10, "history").unwrap();
        }

        let history = store.export_account_history(account.id).unwrap();
        assert_eq!(history.len(), 10);

        let dir = tempdir().unwrap();
        history_to_files(&store, &history, dir.path(), 4).unwrap();

        // 10 payments in chunks of 4: payments1..payments3.dump.
        assert!(dir.path().join("payments1.dump").exists());
        assert!(dir.path().join("payments2.dump").exists());
        assert!(dir.path().join("payments3.dump").exists());
        assert!(!dir.path().join("payments4.dump").exists());
    }
}
