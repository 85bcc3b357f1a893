use std::sync::Arc;

use tokio::spawn;
use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::{JoinError, JoinHandle};
use tracing::{debug, info, warn};

use crate::actors::{Mutation, StoreError};
use crate::models::Transaction;
use crate::storage::{Storage, TransactionRepository};
use crate::types::{Revision, TransactionId};

/// An immutable view of the transaction list at one revision.
///
/// Revision `0` is the empty list published before the initial load completes.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub revision: Revision,
    pub transactions: Arc<Vec<Transaction>>
}

impl Snapshot {
    fn new(revision: Revision, transactions: Vec<Transaction>) -> Self {
        Self {
            revision,
            transactions: Arc::new(transactions)
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.revision > 0
    }

    pub fn find(&self, id: &str) -> Option<&Transaction> {
        self.transactions.iter().find(|transaction| transaction.id == id)
    }
}

struct Command {
    mutation: Mutation,
    reply: oneshot::Sender<Result<Snapshot, StoreError>>
}

/// Owner of the canonical transaction list.
///
/// A single actor task applies mutations one at a time, writes the full list
/// back through the repository and then publishes the new snapshot. The
/// snapshot is published even when the save fails: there is no rollback, the
/// caller is told through `StoreError::Save`.
pub struct TransactionStore {
    sender: mpsc::UnboundedSender<Command>,
    snapshots: watch::Receiver<Snapshot>,
    handle: JoinHandle<()>
}

impl TransactionStore {
    /// Spawns the store actor. The initial load runs before any queued mutation.
    pub fn spawn<S: Storage>(repository: TransactionRepository<S>) -> Self {
        let (sender, mut receiver) = mpsc::unbounded_channel::<Command>();
        let (publisher, snapshots) = watch::channel(Snapshot::default());

        let handle = spawn(async move {
            let loaded = repository.load().await;
            info!("Loaded [{}] transactions", loaded.len());

            let mut current = Snapshot::new(1, loaded);
            publisher.send_replace(current.clone());

            while let Some(Command { mutation, reply }) = receiver.recv().await {
                let next = mutation.apply(&current.transactions);
                let saved = repository.save(&next).await;

                current = Snapshot::new(current.revision + 1, next);
                publisher.send_replace(current.clone());

                let outcome = match saved {
                    Ok(()) => {
                        debug!("{mutation} applied at revision [{}]", current.revision);
                        Ok(current.clone())
                    }
                    Err(source) => {
                        warn!("{mutation} applied at revision [{}] but not persisted", current.revision);
                        Err(StoreError::Save { snapshot: current.clone(), source })
                    }
                };

                //NOTE: The caller may have stopped waiting, the mutation stands either way
                let _ = reply.send(outcome);
            }
        });

        Self { sender, snapshots, handle }
    }

    /// The latest published snapshot; empty until the initial load completes.
    pub fn snapshot(&self) -> Snapshot {
        self.snapshots.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.snapshots.clone()
    }

    /// Waits for the initial load and returns the loaded snapshot.
    pub async fn ready(&self) -> Result<Snapshot, StoreError> {
        let mut receiver = self.subscribe();
        let snapshot = receiver.wait_for(Snapshot::is_loaded).await
            .map_err(|_| StoreError::Closed)?;

        Ok(snapshot.clone())
    }

    pub async fn create(&self, transaction: Transaction) -> Result<Snapshot, StoreError> {
        self.submit(Mutation::Create(transaction)).await
    }

    pub async fn update(&self, transaction: Transaction) -> Result<Snapshot, StoreError> {
        self.submit(Mutation::Update(transaction)).await
    }

    pub async fn delete(&self, id: TransactionId) -> Result<Snapshot, StoreError> {
        self.submit(Mutation::Delete(id)).await
    }

    /// Stops accepting mutations and waits for the queued ones to be applied.
    pub async fn close(self) -> Result<(), JoinError> {
        drop(self.sender);
        self.handle.await
    }

    async fn submit(&self, mutation: Mutation) -> Result<Snapshot, StoreError> {
        let (reply, response) = oneshot::channel();

        self.sender.send(Command { mutation, reply })
            .map_err(|_| StoreError::Closed)?;

        response.await.map_err(|_| StoreError::Closed)?
    }
}
