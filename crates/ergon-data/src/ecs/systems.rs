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

//! The system registry and signature-driven membership dispatch.

use crate::ecs::Signature;
use ergon_core::{EcsError, EcsResult, Entity, System};
use std::collections::HashMap;

/// One registered system and its required signature.
struct SystemEntry {
    system: Box<dyn System>,
    signature: Signature,
}

/// Holds every registered system and keeps each one's visible entity set
/// current as signatures change.
///
/// Systems are keyed by an explicit caller-chosen name, so identity
/// collisions are caught at registration time instead of silently
/// merging two instances. A freshly registered system carries an empty
/// required signature — satisfied by every entity — until
/// [`set_signature`](SystemRegistry::set_signature) assigns its real
/// requirement; requirements are only ever changed by that call, never
/// recomputed behind the caller's back.
pub struct SystemRegistry {
    systems: HashMap<String, SystemEntry>,
    signature_capacity: usize,
}

impl SystemRegistry {
    /// Creates a registry whose signatures hold `signature_capacity` bits.
    #[must_use]
    pub fn new(signature_capacity: usize) -> Self {
        Self {
            systems: HashMap::new(),
            signature_capacity,
        }
    }

    /// Returns the number of registered systems.
    #[must_use]
    pub fn system_count(&self) -> usize {
        self.systems.len()
    }

    /// Registers `system` under `name`.
    ///
    /// A duplicate name is a hard error; the already-registered system
    /// keeps its visible set and its requirement.
    pub fn register(&mut self, name: &str, system: Box<dyn System>) -> EcsResult<()> {
        if self.systems.contains_key(name) {
            return Err(EcsError::SystemAlreadyRegistered {
                name: name.to_owned(),
            });
        }
        log::debug!("registered system '{name}'");
        self.systems.insert(
            name.to_owned(),
            SystemEntry {
                system,
                signature: Signature::new(self.signature_capacity),
            },
        );
        Ok(())
    }

    /// Assigns the required signature of the system registered as `name`.
    pub fn set_signature(&mut self, name: &str, signature: Signature) -> EcsResult<()> {
        if signature.capacity() != self.signature_capacity {
            return Err(EcsError::SignatureCapacityMismatch {
                expected: self.signature_capacity,
                actual: signature.capacity(),
            });
        }
        let entry = self
            .systems
            .get_mut(name)
            .ok_or_else(|| EcsError::UnknownSystem {
                name: name.to_owned(),
            })?;
        entry.signature = signature;
        Ok(())
    }

    /// Returns the required signature of the system registered as `name`.
    pub fn signature(&self, name: &str) -> EcsResult<&Signature> {
        self.systems
            .get(name)
            .map(|entry| &entry.signature)
            .ok_or_else(|| EcsError::UnknownSystem {
                name: name.to_owned(),
            })
    }

    /// Re-evaluates every system's membership for `entity` after its
    /// signature changed to `new_signature`.
    ///
    /// A system whose requirement is satisfied receives `add_entity`
    /// unless it already reports the entity present — the guard that
    /// keeps a membership-preserving component change from producing a
    /// duplicate add. A system whose requirement is not satisfied
    /// receives `remove_entity` unconditionally; removal is idempotent
    /// by contract. Cost is O(number of systems), which is deliberate:
    /// systems are expected to be few, entities many.
    pub fn entity_signature_changed(
        &mut self,
        entity: Entity,
        new_signature: &Signature,
    ) -> EcsResult<()> {
        for (name, entry) in &mut self.systems {
            if entry.signature.contains(new_signature)? {
                if !entry.system.has_entity(entity) {
                    log::trace!("{entity} entered system '{name}'");
                    entry.system.add_entity(entity);
                }
            } else {
                entry.system.remove_entity(entity);
            }
        }
        Ok(())
    }

    /// Drops `entity` from every system's visible set.
    pub fn entity_destroyed(&mut self, entity: Entity) {
        for entry in self.systems.values_mut() {
            entry.system.remove_entity(entity);
        }
    }

    /// Returns a typed reference to the system registered as `name`.
    ///
    /// Fails with [`EcsError::UnknownSystem`] when no system carries the
    /// name or the registered system is not an `S`.
    pub fn system<S: System>(&self, name: &str) -> EcsResult<&S> {
        self.systems
            .get(name)
            .and_then(|entry| entry.system.as_any().downcast_ref::<S>())
            .ok_or_else(|| EcsError::UnknownSystem {
                name: name.to_owned(),
            })
    }

    /// Returns a typed mutable reference to the system registered as
    /// `name`.
    pub fn system_mut<S: System>(&mut self, name: &str) -> EcsResult<&mut S> {
        self.systems
            .get_mut(name)
            .and_then(|entry| entry.system.as_any_mut().downcast_mut::<S>())
            .ok_or_else(|| EcsError::UnknownSystem {
                name: name.to_owned(),
            })
    }
}
