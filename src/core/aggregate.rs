//! Partitioned aggregation over the payment collection
//!
//! Splits the payment slice into contiguous, non-overlapping partitions and
//! runs one worker thread per partition. The caller controls the worker
//! count; `0` degenerates to a single worker covering the whole collection.
//!
//! # Merge discipline
//!
//! Workers scan their partition without any lock. The only shared mutable
//! state is the merge accumulator (a running sum or a growing result vector)
//! behind a single `Mutex`, locked once per worker for the merge step.
//! Merge order across workers is non-deterministic; sums rely on integer
//! addition being commutative, and filtered results carry no ordering
//! guarantee.
//!
//! # Streaming variant
//!
//! [`WalletStore::sum_payments_with_progress`] returns immediately with a
//! live receiver: one worker per 100 000-payment batch publishes its partial
//! sum on a rendezvous channel, which disconnects once every worker has
//! published. There is no cancellation; dispatched workers always run to
//! completion.

use crate::core::store::WalletStore;
use crate::types::{AccountId, Money, Payment, Progress, WalletError};
use std::ops::Range;
use std::sync::{mpsc, Arc, Mutex};
use std::thread;

/// Unit of work for the streaming summation, in payments per worker
const PROGRESS_BATCH_SIZE: usize = 100_000;

/// Split `len` indices into contiguous partitions for `workers` workers
///
/// The first `workers - 1` partitions each hold `len / workers` items; the
/// final partition absorbs the integer-division remainder. `workers == 0` is
/// treated as a single partition spanning the whole collection, which falls
/// out of the same formula rather than a separate branch.
fn partition_ranges(len: usize, workers: usize) -> Vec<Range<usize>> {
    let (workers, size) = if workers == 0 {
        (1, len)
    } else {
        (workers, len / workers)
    };

    let mut ranges = Vec::with_capacity(workers);
    for i in 0..workers - 1 {
        ranges.push(i * size..(i + 1) * size);
    }
    ranges.push((workers - 1) * size..len);
    ranges
}

impl WalletStore {
    /// Sum all payment amounts across `workers` parallel partitions
    ///
    /// Returns 0 for an empty collection. The result is independent of the
    /// worker count.
    pub fn sum_payments(&self, workers: usize) -> Money {
        let payments = self.payments();
        let total = Mutex::new(0);

        thread::scope(|scope| {
            for range in partition_ranges(payments.len(), workers) {
                let partition = &payments[range];
                let total = &total;
                scope.spawn(move || {
                    let partial: Money = partition.iter().map(|payment| payment.amount).sum();
                    *total.lock().expect("sum accumulator poisoned") += partial;
                });
            }
        });

        total.into_inner().expect("sum accumulator poisoned")
    }

    /// Collect one account's payments across `workers` parallel partitions
    ///
    /// Fails with [`WalletError::AccountNotFound`] if the account does not
    /// exist; an existing account with no payments yields an empty vector.
    /// Result order is unspecified.
    pub fn filter_payments(
        &self,
        account_id: AccountId,
        workers: usize,
    ) -> Result<Vec<Payment>, WalletError> {
        self.find_account(account_id)?;
        Ok(self.filter_partitioned(workers, |payment| payment.account_id == account_id))
    }

    /// Collect the payments matching `predicate` across parallel partitions
    ///
    /// The predicate only borrows each payment; matches are copied into the
    /// result. An empty merged result is reported as
    /// [`WalletError::AccountNotFound`], whatever its cause. Result order is
    /// unspecified.
    pub fn filter_payments_by<F>(
        &self,
        predicate: F,
        workers: usize,
    ) -> Result<Vec<Payment>, WalletError>
    where
        F: Fn(&Payment) -> bool + Sync,
    {
        let matches = self.filter_partitioned(workers, predicate);
        if matches.is_empty() {
            return Err(WalletError::AccountNotFound);
        }
        Ok(matches)
    }

    fn filter_partitioned<F>(&self, workers: usize, predicate: F) -> Vec<Payment>
    where
        F: Fn(&Payment) -> bool + Sync,
    {
        let payments = self.payments();
        let matches = Mutex::new(Vec::new());

        thread::scope(|scope| {
            for range in partition_ranges(payments.len(), workers) {
                let partition = &payments[range];
                let matches = &matches;
                let predicate = &predicate;
                scope.spawn(move || {
                    // Scan without the lock, merge under it.
                    let found: Vec<Payment> = partition
                        .iter()
                        .filter(|payment| predicate(payment))
                        .cloned()
                        .collect();
                    matches
                        .lock()
                        .expect("filter accumulator poisoned")
                        .extend(found);
                });
            }
        });

        matches.into_inner().expect("filter accumulator poisoned")
    }

    /// Stream partial sums while the collection is summed in the background
    ///
    /// Returns immediately with a live receiver. One worker per full
    /// 100 000-payment batch (plus one for a non-empty tail, or exactly one
    /// for a collection shorter than a batch, empty included) publishes a
    /// single [`Progress`] on a rendezvous channel and exits. Each progress
    /// value reports the total collection length and that worker's partial
    /// sum. Arrival order is first-finished-first-read; the channel
    /// disconnects after the last worker has published.
    pub fn sum_payments_with_progress(&self) -> mpsc::Receiver<Progress> {
        let payments: Arc<Vec<Payment>> = Arc::new(self.payments().to_vec());
        let len = payments.len();
        let (sender, receiver) = mpsc::sync_channel(0);

        let full_batches = len / PROGRESS_BATCH_SIZE;
        let mut ranges: Vec<Range<usize>> = (0..full_batches)
            .map(|i| i * PROGRESS_BATCH_SIZE..(i + 1) * PROGRESS_BATCH_SIZE)
            .collect();
        // Tail worker for the remainder; also covers collections shorter
        // than one batch, including the empty one.
        if full_batches * PROGRESS_BATCH_SIZE < len || full_batches == 0 {
            ranges.push(full_batches * PROGRESS_BATCH_SIZE..len);
        }

        for range in ranges {
            let payments = Arc::clone(&payments);
            let sender = sender.clone();
            thread::spawn(move || {
                let result: Money = payments[range].iter().map(|payment| payment.amount).sum();
                // A dropped receiver just means nobody is listening anymore;
                // the worker finishes either way.
                let _ = sender.send(Progress { part: len, result });
            });
        }

        // Dropping the original sender leaves one sender clone per worker;
        // the channel disconnects once the last of them has published.
        receiver
    }
}
