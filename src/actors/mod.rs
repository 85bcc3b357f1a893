mod errors;
mod mutation;
mod transaction_store;

pub use errors::StoreError;
pub use mutation::Mutation;
pub use transaction_store::{Snapshot, TransactionStore};
