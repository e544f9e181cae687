use std::collections::BTreeSet;

use log::{info, warn};

use crate::errors::CoreError;

/// Maximum number of calculators open at the same time.
pub const MAX_CALCULATORS: usize = 3;

/// Fixed pool of slot ids, scanned in ascending order.
const ID_POOL: [u8; MAX_CALCULATORS] = [1, 2, 3];

/// Tracks which calculator slot ids are in use.
///
/// Ids come from a fixed pool and the smallest free one is always handed out
/// first, so assignment is deterministic: after removing id 2 from {1, 2, 3}
/// the next `add` returns 2 again.
#[derive(Debug, Clone, Default)]
pub struct InstanceRegistry {
    occupied: BTreeSet<u8>,
}

impl InstanceRegistry {
    pub fn new() -> Self {
        Self {
            occupied: BTreeSet::new(),
        }
    }

    /// Claim the smallest free id.
    /// Fails with `CapacityExceeded` once every slot is taken.
    pub fn add(&mut self) -> Result<u8, CoreError> {
        if self.occupied.len() >= MAX_CALCULATORS {
            warn!("Rejected new calculator: {MAX_CALCULATORS} already open");
            return Err(CoreError::CapacityExceeded {
                max: MAX_CALCULATORS,
            });
        }

        let id = ID_POOL
            .iter()
            .copied()
            .find(|id| !self.occupied.contains(id))
            .ok_or(CoreError::CapacityExceeded {
                max: MAX_CALCULATORS,
            })?;

        self.occupied.insert(id);
        info!("Opened calculator {id} ({} of {MAX_CALCULATORS})", self.occupied.len());
        Ok(id)
    }

    /// Free an id. Freeing an id that is not in use is a no-op.
    pub fn remove(&mut self, id: u8) {
        if self.occupied.remove(&id) {
            info!("Closed calculator {id}");
        }
    }

    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.occupied.len()
    }

    #[must_use]
    pub fn is_occupied(&self, id: u8) -> bool {
        self.occupied.contains(&id)
    }

    /// `false` once the registry is full; drives the "add calculator" button.
    #[must_use]
    pub fn can_add(&self) -> bool {
        self.occupied.len() < MAX_CALCULATORS
    }

    /// Occupied ids in ascending order.
    pub fn occupied_ids(&self) -> impl Iterator<Item = u8> + '_ {
        self.occupied.iter().copied()
    }
}
