pub mod file_store;
pub mod memory;

use crate::{
    errors::{LedgerError, Result},
    ledger::Ledger,
};

pub use file_store::FileStore;
pub use memory::MemoryStore;

/// Storage slot that holds the whole ledger blob.
pub const LEDGER_KEY: &str = "budgetTrackerData";

/// Abstraction over string key-value stores able to hold the ledger blob.
pub trait PersistencePort {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
    fn remove(&mut self, key: &str) -> Result<()>;
}

impl<P: PersistencePort + ?Sized> PersistencePort for Box<P> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}

/// Rehydrates the ledger stored under `key`.
///
/// A missing or malformed blob yields an empty ledger; only failures of the
/// store itself are returned.
pub fn load_ledger<P: PersistencePort + ?Sized>(port: &P, key: &str) -> Result<Ledger> {
    let Some(raw) = port.get(key)? else {
        tracing::debug!(key, "no stored ledger, starting empty");
        return Ok(Ledger::new());
    };
    match Ledger::deserialize(&raw) {
        Ok(ledger) => {
            tracing::info!(key, records = ledger.record_count(), "ledger loaded");
            Ok(ledger)
        }
        Err(LedgerError::MalformedState(reason)) => {
            tracing::warn!(key, %reason, "stored ledger is malformed, starting empty");
            Ok(Ledger::new())
        }
        Err(err) => Err(err),
    }
}

pub fn save_ledger<P: PersistencePort + ?Sized>(
    port: &mut P,
    key: &str,
    ledger: &Ledger,
) -> Result<()> {
    let blob = ledger.serialize()?;
    port.set(key, &blob)?;
    tracing::debug!(key, records = ledger.record_count(), "ledger saved");
    Ok(())
}

pub fn clear_ledger<P: PersistencePort + ?Sized>(port: &mut P, key: &str) -> Result<()> {
    port.remove(key)?;
    tracing::info!(key, "stored ledger removed");
    Ok(())
}
