// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Entity id allocation, FIFO recycling, and the per-entity signature table.

use crate::ecs::Signature;
use ergon_core::{EcsError, EcsResult, Entity};
use std::collections::VecDeque;

/// Issues and recycles entity ids and owns each entity's current signature.
///
/// The store is seeded with every id in `[0, capacity)` at construction.
/// `despawn` pushes the freed id on the tail of the free list, so the next
/// `spawn` receives the oldest freed id: breadth-first reuse that keeps a
/// stale handle from landing on a freshly spawned entity as long as
/// possible.
pub struct EntityStore {
    /// Ids available for spawning, in FIFO order.
    free: VecDeque<Entity>,
    /// Current signature per pool slot; empty for slots that are not live.
    signatures: Vec<Signature>,
    /// Liveness per pool slot.
    alive: Vec<bool>,
    live_count: usize,
    capacity: usize,
    signature_capacity: usize,
}

impl EntityStore {
    /// Creates a store with `capacity` entity slots whose signatures hold
    /// `signature_capacity` bits.
    #[must_use]
    pub fn new(capacity: usize, signature_capacity: usize) -> Self {
        Self {
            free: (0..capacity as u32).map(Entity::from_raw).collect(),
            signatures: vec![Signature::new(signature_capacity); capacity],
            alive: vec![false; capacity],
            live_count: 0,
            capacity,
            signature_capacity,
        }
    }

    /// Returns the configured size of the entity pool.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the bit capacity of every signature in this store.
    #[must_use]
    pub fn signature_capacity(&self) -> usize {
        self.signature_capacity
    }

    /// Returns the number of currently live entities.
    #[must_use]
    pub fn live_count(&self) -> usize {
        self.live_count
    }

    /// Returns `true` if `entity` is inside the pool and currently live.
    #[must_use]
    pub fn is_alive(&self, entity: Entity) -> bool {
        self.alive.get(entity.index()).copied().unwrap_or(false)
    }

    /// Resolves an entity to its pool slot, rejecting ids outside the pool.
    fn slot(&self, entity: Entity) -> EcsResult<usize> {
        let index = entity.index();
        if index >= self.capacity {
            return Err(EcsError::EntityOutOfRange {
                entity,
                capacity: self.capacity,
            });
        }
        Ok(index)
    }

    /// Rejects ids outside the pool or not currently live.
    pub fn ensure_alive(&self, entity: Entity) -> EcsResult<()> {
        let index = self.slot(entity)?;
        if !self.alive[index] {
            return Err(EcsError::EntityNotAlive { entity });
        }
        Ok(())
    }

    /// Takes the oldest free id out of the pool and marks it live.
    ///
    /// Fails with [`EcsError::PoolExhausted`] when the live count — not
    /// the number of ids ever created — has reached the pool capacity.
    pub fn spawn(&mut self) -> EcsResult<Entity> {
        if self.live_count >= self.capacity {
            return Err(EcsError::PoolExhausted {
                capacity: self.capacity,
            });
        }
        let entity = self.free.pop_front().ok_or(EcsError::PoolExhausted {
            capacity: self.capacity,
        })?;
        self.alive[entity.index()] = true;
        self.live_count += 1;
        log::trace!("spawned {entity} ({}/{} live)", self.live_count, self.capacity);
        Ok(entity)
    }

    /// Returns a live id to the tail of the free list.
    ///
    /// The signature slot is eagerly reset, so a recycled id always starts
    /// with an empty signature. Despawning an id that is not live is an
    /// error rather than a silent no-op; anything else would corrupt the
    /// live count that backs pool-exhaustion checks.
    pub fn despawn(&mut self, entity: Entity) -> EcsResult<()> {
        let index = self.slot(entity)?;
        if !self.alive[index] {
            return Err(EcsError::EntityNotAlive { entity });
        }
        self.signatures[index].reset();
        self.alive[index] = false;
        self.live_count -= 1;
        self.free.push_back(entity);
        log::trace!("despawned {entity} ({}/{} live)", self.live_count, self.capacity);
        Ok(())
    }

    /// Replaces the entity's signature.
    ///
    /// The incoming signature must have this store's configured bit
    /// capacity; anything else is a wiring bug surfaced as
    /// [`EcsError::SignatureCapacityMismatch`].
    pub fn set_signature(&mut self, entity: Entity, signature: Signature) -> EcsResult<()> {
        let index = self.slot(entity)?;
        if signature.capacity() != self.signature_capacity {
            return Err(EcsError::SignatureCapacityMismatch {
                expected: self.signature_capacity,
                actual: signature.capacity(),
            });
        }
        self.signatures[index] = signature;
        Ok(())
    }

    /// Returns the entity's current signature.
    ///
    /// A never-assigned or freshly recycled entity reports the empty
    /// signature, never an undefined one.
    pub fn signature(&self, entity: Entity) -> EcsResult<&Signature> {
        let index = self.slot(entity)?;
        Ok(&self.signatures[index])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ergon_core::ComponentTypeId;

    #[test]
    fn test_spawn_issues_sequential_ids() {
        let mut store = EntityStore::new(3, 8);
        assert_eq!(store.spawn().unwrap(), Entity::from_raw(0));
        assert_eq!(store.spawn().unwrap(), Entity::from_raw(1));
        assert_eq!(store.live_count(), 2);
    }

    #[test]
    fn test_recycling_is_fifo() {
        let mut store = EntityStore::new(3, 8);
        let e0 = store.spawn().unwrap();
        let e1 = store.spawn().unwrap();

        store.despawn(e1).unwrap();

        // Id 2 was freed before e1 was returned, so it must come out first.
        assert_eq!(store.spawn().unwrap(), Entity::from_raw(2));
        assert_eq!(store.spawn().unwrap(), e1);
        assert!(store.is_alive(e0));
    }

    #[test]
    fn test_pool_exhaustion_tracks_live_count() {
        let mut store = EntityStore::new(2, 8);
        let e0 = store.spawn().unwrap();
        let _e1 = store.spawn().unwrap();

        assert_eq!(
            store.spawn(),
            Err(EcsError::PoolExhausted { capacity: 2 })
        );

        // Despawning brings the live count back under the limit.
        store.despawn(e0).unwrap();
        assert!(store.spawn().is_ok());
    }

    #[test]
    fn test_out_of_range_is_rejected() {
        let mut store = EntityStore::new(2, 8);
        let stray = Entity::from_raw(99);
        assert_eq!(
            store.despawn(stray),
            Err(EcsError::EntityOutOfRange {
                entity: stray,
                capacity: 2
            })
        );
        assert!(store.signature(stray).is_err());
    }

    #[test]
    fn test_double_despawn_is_an_error() {
        let mut store = EntityStore::new(2, 8);
        let e0 = store.spawn().unwrap();
        store.despawn(e0).unwrap();
        assert_eq!(store.despawn(e0), Err(EcsError::EntityNotAlive { entity: e0 }));
        assert_eq!(store.live_count(), 0);
    }

    #[test]
    fn test_despawn_eagerly_resets_signature() {
        let mut store = EntityStore::new(2, 8);
        let e0 = store.spawn().unwrap();

        let mut sig = Signature::new(8);
        sig.set(ComponentTypeId::new(0)).unwrap();
        store.set_signature(e0, sig).unwrap();
        assert!(!store.signature(e0).unwrap().is_empty());

        store.despawn(e0).unwrap();
        assert!(
            store.signature(e0).unwrap().is_empty(),
            "a despawned slot must not leak its old signature"
        );
    }

    #[test]
    fn test_foreign_signature_capacity_is_rejected() {
        let mut store = EntityStore::new(2, 8);
        let e0 = store.spawn().unwrap();
        assert_eq!(
            store.set_signature(e0, Signature::new(16)),
            Err(EcsError::SignatureCapacityMismatch {
                expected: 8,
                actual: 16
            })
        );
    }

    #[test]
    fn test_no_two_live_entities_share_an_id() {
        let mut store = EntityStore::new(4, 8);
        let mut live = Vec::new();

        // Interleave spawns and despawns and check the live set stays unique.
        for round in 0..20 {
            if round % 3 == 2 {
                let victim = live.remove(0);
                store.despawn(victim).unwrap();
            } else if store.live_count() < store.capacity() {
                live.push(store.spawn().unwrap());
            }
            let mut seen = live.clone();
            seen.sort();
            seen.dedup();
            assert_eq!(seen.len(), live.len(), "live ids must never alias");
        }
    }
}
