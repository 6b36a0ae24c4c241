//! The block-range ingestion subscription.
//!
//! [`VidaSubscription`] owns a single run loop that polls the chain tip,
//! fetches bounded ranges of VIDA transactions, and delivers them to a
//! caller-supplied handler. Pause, resume, and stop are cooperative: the
//! control methods communicate with the loop only through flags the loop
//! observes at the top of each iteration.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::time::sleep;

use crate::error::ChainReadError;
use crate::handler::{CheckpointSink, TransactionHandler};
use crate::range::next_range;
use crate::reader::ChainReader;

/// Poll interval used when none is configured.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Delay between flag checks while the loop idles in the paused state and
/// while control calls wait for the loop to reach a quiescent point.
/// Deliberately short and independent of the poll interval.
const FLAG_CHECK_INTERVAL: Duration = Duration::from_millis(10);

/// A continuous subscription to the transactions of one VIDA.
///
/// The subscription scans forward from `starting_block`, never misses or
/// duplicates a block range within a run, and survives any collaborator
/// failure: network errors are retried on the next cycle, handler and
/// checkpoint-sink errors are logged and isolated.
///
/// Cloning yields another handle to the same subscription; at most one
/// run loop is active across all handles.
pub struct VidaSubscription<R> {
    inner: Arc<Inner<R>>,
}

impl<R> Clone for VidaSubscription<R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

struct Inner<R> {
    reader: R,
    vida_id: u64,
    starting_block: u64,
    poll_interval: Duration,
    handler: Box<dyn TransactionHandler>,
    checkpoint: Option<Box<dyn CheckpointSink>>,
    /// Highest block height fully processed (inclusive).
    latest_checked_block: AtomicU64,
    running: AtomicBool,
    pause_requested: AtomicBool,
    paused: AtomicBool,
    stop_requested: AtomicBool,
}

impl<R: ChainReader + 'static> VidaSubscription<R> {
    /// Create a subscription with the default poll interval and no
    /// checkpoint sink.
    pub fn new(
        reader: R,
        vida_id: u64,
        starting_block: u64,
        handler: impl TransactionHandler + 'static,
    ) -> Self {
        Self::with_options(
            reader,
            vida_id,
            starting_block,
            handler,
            DEFAULT_POLL_INTERVAL,
            None,
        )
    }

    /// Create a subscription with an explicit poll interval and an
    /// optional checkpoint sink.
    ///
    /// The poll interval is the minimum delay between fetch attempts; it
    /// applies uniformly after successful, failed, and no-op cycles.
    pub fn with_options(
        reader: R,
        vida_id: u64,
        starting_block: u64,
        handler: impl TransactionHandler + 'static,
        poll_interval: Duration,
        checkpoint: Option<Box<dyn CheckpointSink>>,
    ) -> Self {
        Self {
            inner: Arc::new(Inner {
                reader,
                vida_id,
                starting_block,
                poll_interval,
                handler: Box::new(handler),
                checkpoint,
                latest_checked_block: AtomicU64::new(starting_block.saturating_sub(1)),
                running: AtomicBool::new(false),
                pause_requested: AtomicBool::new(false),
                paused: AtomicBool::new(false),
                stop_requested: AtomicBool::new(false),
            }),
        }
    }

    /// Start the run loop.
    ///
    /// Resets the checkpoint to `starting_block - 1`, clears the control
    /// flags, and spawns the loop task. If a loop is already active the
    /// call logs an error and does nothing; a second concurrent loop is
    /// never spawned.
    pub fn start(&self) {
        if self.inner.running.swap(true, Ordering::SeqCst) {
            tracing::error!(vida_id = self.inner.vida_id, "subscription is already running");
            return;
        }

        let inner = &self.inner;
        inner
            .latest_checked_block
            .store(inner.starting_block.saturating_sub(1), Ordering::SeqCst);
        inner.pause_requested.store(false, Ordering::SeqCst);
        inner.paused.store(false, Ordering::SeqCst);
        inner.stop_requested.store(false, Ordering::SeqCst);

        tracing::info!(
            vida_id = inner.vida_id,
            starting_block = inner.starting_block,
            "subscription started"
        );
        tokio::spawn(Arc::clone(inner).run());
    }

    /// Request a pause and wait until the loop is quiescent.
    ///
    /// Returns once the loop has acknowledged the pause (no fetch or
    /// delivery in progress) or has already exited. Logs and returns
    /// immediately if the subscription is not running.
    pub async fn pause(&self) {
        if !self.inner.running.load(Ordering::SeqCst) {
            tracing::warn!(
                vida_id = self.inner.vida_id,
                "pause requested but subscription is not running"
            );
            return;
        }
        self.inner.pause_requested.store(true, Ordering::SeqCst);
        while !self.inner.paused.load(Ordering::SeqCst)
            && self.inner.running.load(Ordering::SeqCst)
        {
            sleep(FLAG_CHECK_INTERVAL).await;
        }
    }

    /// Clear a pending pause.
    ///
    /// Takes effect on the loop's next iteration; does not wait for the
    /// loop to observe it.
    pub fn resume(&self) {
        self.inner.pause_requested.store(false, Ordering::SeqCst);
    }

    /// Stop the run loop and wait for it to exit.
    ///
    /// Pauses first so the loop reaches a quiescent point, then requests
    /// the stop and waits until the loop has terminated. No fetch or
    /// delivery is in flight when this returns. Logs and returns
    /// immediately if the subscription is not running.
    pub async fn stop(&self) {
        if !self.inner.running.load(Ordering::SeqCst) {
            tracing::warn!(
                vida_id = self.inner.vida_id,
                "stop requested but subscription is not running"
            );
            return;
        }
        self.pause().await;
        self.inner.stop_requested.store(true, Ordering::SeqCst);
        while self.inner.running.load(Ordering::SeqCst) {
            sleep(FLAG_CHECK_INTERVAL).await;
        }
        tracing::info!(
            vida_id = self.inner.vida_id,
            latest_checked_block = self.inner.latest_checked_block.load(Ordering::SeqCst),
            "subscription stopped"
        );
    }

    /// Whether a run loop is currently active.
    pub fn is_running(&self) -> bool {
        self.inner.running.load(Ordering::SeqCst)
    }

    /// Whether the loop is idling in the paused state.
    pub fn is_paused(&self) -> bool {
        self.inner.paused.load(Ordering::SeqCst)
    }

    /// Whether no run loop is active (never started, or stopped).
    pub fn is_stopped(&self) -> bool {
        !self.is_running()
    }

    /// The VIDA this subscription watches.
    pub fn vida_id(&self) -> u64 {
        self.inner.vida_id
    }

    /// First block height the subscription scans.
    pub fn starting_block(&self) -> u64 {
        self.inner.starting_block
    }

    /// Highest block height fully processed (inclusive).
    pub fn latest_checked_block(&self) -> u64 {
        self.inner.latest_checked_block.load(Ordering::SeqCst)
    }

    /// Override the checkpoint, e.g. to resume from persisted state.
    ///
    /// Effective on the loop's next cycle when called during a run. Note
    /// that [`start`](Self::start) resets the checkpoint to
    /// `starting_block - 1`, so an override meant for a fresh run must be
    /// applied after the call to `start`.
    pub fn set_latest_checked_block(&self, height: u64) {
        self.inner
            .latest_checked_block
            .store(height, Ordering::SeqCst);
    }
}

impl<R: ChainReader> Inner<R> {
    async fn run(self: Arc<Self>) {
        loop {
            if self.stop_requested.load(Ordering::SeqCst) {
                break;
            }
            if self.pause_requested.load(Ordering::SeqCst) {
                self.paused.store(true, Ordering::SeqCst);
                sleep(FLAG_CHECK_INTERVAL).await;
                continue;
            }
            self.paused.store(false, Ordering::SeqCst);
            self.scan_once().await;
            sleep(self.poll_interval).await;
        }
        self.paused.store(false, Ordering::SeqCst);
        self.pause_requested.store(false, Ordering::SeqCst);
        self.running.store(false, Ordering::SeqCst);
    }

    /// One scan-and-deliver cycle. Infallible: every collaborator error
    /// is logged and contained here so the loop outlives it.
    async fn scan_once(&self) {
        let chain_height = match self.reader.latest_block_number().await {
            Ok(height) => height,
            Err(err) => {
                self.log_read_failure("failed to query latest block number", &err);
                return;
            }
        };

        let latest_checked = self.latest_checked_block.load(Ordering::SeqCst);
        let Some(range) = next_range(latest_checked, chain_height) else {
            // Nothing new at the tip.
            return;
        };

        let txs = match self
            .reader
            .vida_transactions_in_range(self.vida_id, *range.start(), *range.end())
            .await
        {
            Ok(txs) => txs,
            Err(err) => {
                self.log_read_failure("failed to fetch transaction batch", &err);
                return;
            }
        };

        for tx in &txs {
            // A failed delivery does not block the rest of the batch or
            // the checkpoint advance; re-delivery is the caller's concern.
            if let Err(err) = self.handler.handle(tx) {
                tracing::error!(
                    vida_id = self.vida_id,
                    transaction_hash = %tx.transaction_hash,
                    error = %err,
                    "transaction handler failed"
                );
            }
        }

        self.latest_checked_block
            .store(*range.end(), Ordering::SeqCst);

        if let Some(sink) = &self.checkpoint {
            if let Err(err) = sink.save(*range.end()) {
                tracing::error!(
                    vida_id = self.vida_id,
                    height = *range.end(),
                    error = %err,
                    "checkpoint sink failed"
                );
            }
        }
    }

    fn log_read_failure(&self, context: &str, err: &ChainReadError) {
        match err {
            ChainReadError::Network(_) => {
                tracing::warn!(
                    vida_id = self.vida_id,
                    error = %err,
                    "{context}; retrying next cycle"
                );
            }
            ChainReadError::Rpc(_) => {
                tracing::error!(
                    vida_id = self.vida_id,
                    error = %err,
                    "{context}; retrying next cycle"
                );
            }
        }
    }
}
