use dashmap::DashMap;
use rustc_hash::FxBuildHasher;
use std::future::Future;
use std::hash::Hash;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::debug;
use zonecache_domain::DomainError;

type InflightOutcome<T> = Option<Result<T, DomainError>>;
type InflightSender<T> = Arc<watch::Sender<InflightOutcome<T>>>;
type InflightMap<K, T> = DashMap<K, InflightSender<T>, FxBuildHasher>;

struct InflightLeaderGuard<K: Hash + Eq, T> {
    inflight: Arc<InflightMap<K, T>>,
    key: K,
    tx: InflightSender<T>,
}

impl<K: Hash + Eq, T> Drop for InflightLeaderGuard<K, T> {
    fn drop(&mut self) {
        // After a `forget` the slot may belong to a newer leader.
        self.inflight
            .remove_if(&self.key, |_, current| Arc::ptr_eq(current, &self.tx));
    }
}

enum InflightRole<T> {
    Leader(InflightSender<T>),
    Follower(watch::Receiver<InflightOutcome<T>>),
}

/// Collapses concurrent executions of the same keyed operation into one.
///
/// The first caller for a key becomes the leader and runs the operation;
/// callers arriving while it runs subscribe to the leader's `watch` channel
/// and receive a clone of its result, error included. The registration is
/// dropped as soon as the leader finishes, so nothing is memoized here.
///
/// If a leader is cancelled (its future dropped) before publishing, the
/// channel closes and joined callers retry, one of them taking over.
pub struct RequestCoalescer<K: Hash + Eq, T> {
    inflight: Arc<InflightMap<K, T>>,
}

impl<K, T> RequestCoalescer<K, T>
where
    K: Hash + Eq + Clone,
    T: Clone,
{
    pub fn new() -> Self {
        Self {
            inflight: Arc::new(DashMap::with_hasher(FxBuildHasher)),
        }
    }

    pub async fn run_once<F, Fut>(&self, key: &K, f: F) -> Result<T, DomainError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, DomainError>>,
    {
        loop {
            match self.register_or_join(key) {
                InflightRole::Leader(tx) => return self.run_as_leader(key, tx, f).await,
                InflightRole::Follower(rx) => {
                    if let Some(outcome) = Self::wait_as_follower(rx).await {
                        return outcome;
                    }
                    debug!("In-flight leader abandoned, retrying");
                }
            }
        }
    }

    /// Drops the registration for `key` without cancelling a running leader.
    ///
    /// Callers already waiting still get the leader's result; the next caller
    /// starts a fresh execution.
    pub fn forget(&self, key: &K) -> bool {
        self.inflight.remove(key).is_some()
    }

    pub fn in_flight(&self) -> usize {
        self.inflight.len()
    }

    fn register_or_join(&self, key: &K) -> InflightRole<T> {
        match self.inflight.entry(key.clone()) {
            dashmap::Entry::Occupied(e) => {
                let rx = e.get().subscribe();
                drop(e);
                InflightRole::Follower(rx)
            }
            dashmap::Entry::Vacant(e) => {
                let (tx, _rx) = watch::channel(None::<Result<T, DomainError>>);
                let tx = Arc::new(tx);
                e.insert(Arc::clone(&tx));
                InflightRole::Leader(tx)
            }
        }
    }

    async fn run_as_leader<F, Fut>(
        &self,
        key: &K,
        tx: InflightSender<T>,
        f: F,
    ) -> Result<T, DomainError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, DomainError>>,
    {
        let guard = InflightLeaderGuard {
            inflight: Arc::clone(&self.inflight),
            key: key.clone(),
            tx: Arc::clone(&tx),
        };

        let outcome = f().await;

        drop(guard);
        tx.send_replace(Some(outcome.clone()));
        outcome
    }

    async fn wait_as_follower(
        mut rx: watch::Receiver<InflightOutcome<T>>,
    ) -> InflightOutcome<T> {
        loop {
            let published = rx.borrow_and_update().clone();
            if published.is_some() {
                return published;
            }
            if rx.changed().await.is_err() {
                return rx.borrow().clone();
            }
        }
    }
}

impl<K, T> Default for RequestCoalescer<K, T>
where
    K: Hash + Eq + Clone,
    T: Clone,
{
    fn default() -> Self {
        Self::new()
    }
}
