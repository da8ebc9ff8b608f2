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

//! The `World` facade — the single entry point for managing entities,
//! components, and systems.
//!
//! The facade owns the entity store, the component registry, and the
//! system registry, and funnels every mutation through itself so the
//! three stay consistent: a component change always rewrites the
//! entity's signature and re-evaluates system membership in one ordered
//! sequence, and nothing outside this module can touch the signature
//! table directly.

use ergon_core::{Component, ComponentTypeId, EcsResult, Entity, System};
use ergon_data::ecs::{ComponentRegistry, EntityStore, Signature, SystemRegistry};

/// Entity-pool size used by [`World::default`].
pub const DEFAULT_MAX_ENTITIES: usize = 5000;

/// Component-type capacity used by [`World::default`].
pub const DEFAULT_MAX_COMPONENT_TYPES: usize = 32;

/// The central facade over the ECS storage subsystems.
///
/// All operations run to completion on the caller's thread, and within
/// one `World` signature changes and system notifications are strictly
/// ordered as issued — there is no batching, reordering, or deferred
/// dispatch.
///
/// # Examples
///
/// ```rust,ignore
/// let mut world = World::default();
/// world.register_component::<Transform>()?;
///
/// let player = world.spawn()?;
/// world.add_component(player, Transform::identity())?;
/// ```
pub struct World {
    entities: EntityStore,
    components: ComponentRegistry,
    systems: SystemRegistry,
}

impl World {
    /// Creates a world with room for `max_entities` live entities and
    /// `max_component_types` distinct component types.
    #[must_use]
    pub fn new(max_entities: usize, max_component_types: usize) -> Self {
        log::debug!(
            "world created: {max_entities} entity slots, {max_component_types} component types"
        );
        Self {
            entities: EntityStore::new(max_entities, max_component_types),
            components: ComponentRegistry::new(max_entities, max_component_types),
            systems: SystemRegistry::new(max_component_types),
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Entity Lifecycle
    // ─────────────────────────────────────────────────────────────────────

    /// Spawns a new entity with an empty signature.
    ///
    /// Fails with [`EcsError::PoolExhausted`](ergon_core::EcsError) when
    /// every id in the pool is live.
    pub fn spawn(&mut self) -> EcsResult<Entity> {
        self.entities.spawn()
    }

    /// Destroys an entity and erases every trace of it.
    ///
    /// In order: the entity store frees the id and resets its signature,
    /// every component column drops the entity's data, and every system
    /// removes it from its visible set.
    pub fn despawn(&mut self, entity: Entity) -> EcsResult<()> {
        self.entities.despawn(entity)?;
        self.components.entity_destroyed(entity);
        self.systems.entity_destroyed(entity);
        Ok(())
    }

    /// Returns `true` if `entity` is currently live.
    #[must_use]
    pub fn is_alive(&self, entity: Entity) -> bool {
        self.entities.is_alive(entity)
    }

    /// Returns the number of currently live entities.
    #[must_use]
    pub fn live_count(&self) -> usize {
        self.entities.live_count()
    }

    /// Returns the configured size of the entity pool.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.entities.capacity()
    }

    // ─────────────────────────────────────────────────────────────────────
    // Component Types
    // ─────────────────────────────────────────────────────────────────────

    /// Registers the component type `T`, returning its assigned id.
    ///
    /// Registering a type twice is an idempotent no-op returning the
    /// existing id.
    pub fn register_component<T: Component>(&mut self) -> EcsResult<ComponentTypeId> {
        self.components.register::<T>()
    }

    /// Returns the id assigned to `T` at registration.
    pub fn component_type<T: Component>(&self) -> EcsResult<ComponentTypeId> {
        self.components.type_id::<T>()
    }

    // ─────────────────────────────────────────────────────────────────────
    // Component Access
    // ─────────────────────────────────────────────────────────────────────

    /// Attaches `component` to `entity` and re-evaluates system
    /// membership.
    ///
    /// In order: the component lands in its column, the entity's
    /// signature gains `T`'s bit, the store records the new signature,
    /// and the system registry is notified. If the entity already held a
    /// `T`, the value is overwritten in place and the previous value is
    /// returned.
    pub fn add_component<T: Component>(
        &mut self,
        entity: Entity,
        component: T,
    ) -> EcsResult<Option<T>> {
        self.entities.ensure_alive(entity)?;
        let replaced = self.components.insert(entity, component)?;
        let type_id = self.components.type_id::<T>()?;
        let mut signature = self.entities.signature(entity)?.clone();
        signature.set(type_id)?;
        self.entities.set_signature(entity, signature.clone())?;
        self.systems.entity_signature_changed(entity, &signature)?;
        Ok(replaced)
    }

    /// Detaches `entity`'s `T`, returns it, and re-evaluates system
    /// membership. The mirror image of
    /// [`add_component`](World::add_component).
    pub fn remove_component<T: Component>(&mut self, entity: Entity) -> EcsResult<T> {
        self.entities.ensure_alive(entity)?;
        let removed = self.components.remove::<T>(entity)?;
        let type_id = self.components.type_id::<T>()?;
        let mut signature = self.entities.signature(entity)?.clone();
        signature.unset(type_id)?;
        self.entities.set_signature(entity, signature.clone())?;
        self.systems.entity_signature_changed(entity, &signature)?;
        Ok(removed)
    }

    /// Returns a reference to `entity`'s `T`.
    ///
    /// An entity that does not hold the component fails with
    /// [`EcsError::ComponentNotFound`](ergon_core::EcsError) — a routine
    /// outcome callers are expected to check, never escalated by the
    /// runtime.
    pub fn component<T: Component>(&self, entity: Entity) -> EcsResult<&T> {
        self.components.get::<T>(entity)
    }

    /// Returns a mutable reference to `entity`'s `T`.
    pub fn component_mut<T: Component>(&mut self, entity: Entity) -> EcsResult<&mut T> {
        self.components.get_mut::<T>(entity)
    }

    /// Iterates every `T` with its owning entity, in packed order.
    ///
    /// This is the cache-friendly path a simulation tick should prefer
    /// over per-entity lookups.
    pub fn components<T: Component>(&self) -> EcsResult<impl Iterator<Item = (Entity, &T)>> {
        Ok(self.components.column::<T>()?.iter())
    }

    // ─────────────────────────────────────────────────────────────────────
    // Systems
    // ─────────────────────────────────────────────────────────────────────

    /// Registers `system` under the explicit key `name`.
    ///
    /// A duplicate name fails with
    /// [`EcsError::SystemAlreadyRegistered`](ergon_core::EcsError);
    /// nothing is ever silently merged.
    pub fn register_system<S: System>(&mut self, name: &str, system: S) -> EcsResult<()> {
        self.systems.register(name, Box::new(system))
    }

    /// Assigns the required signature of the system registered as
    /// `name`. Requirements change only through this call.
    pub fn set_system_signature(&mut self, name: &str, signature: Signature) -> EcsResult<()> {
        self.systems.set_signature(name, signature)
    }

    /// Returns a typed reference to the system registered as `name`.
    pub fn system<S: System>(&self, name: &str) -> EcsResult<&S> {
        self.systems.system::<S>(name)
    }

    /// Returns a typed mutable reference to the system registered as
    /// `name`.
    pub fn system_mut<S: System>(&mut self, name: &str) -> EcsResult<&mut S> {
        self.systems.system_mut::<S>(name)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Signatures
    // ─────────────────────────────────────────────────────────────────────

    /// Returns a copy of `entity`'s current signature.
    ///
    /// A copy, deliberately: the live signature table is mutated only
    /// through [`add_component`](World::add_component) /
    /// [`remove_component`](World::remove_component).
    pub fn signature(&self, entity: Entity) -> EcsResult<Signature> {
        Ok(self.entities.signature(entity)?.clone())
    }

    /// Returns a fresh all-clear signature of this world's component
    /// capacity, for building system requirements.
    #[must_use]
    pub fn empty_signature(&self) -> Signature {
        Signature::new(self.entities.signature_capacity())
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ENTITIES, DEFAULT_MAX_COMPONENT_TYPES)
    }
}
