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

//! The component-type registry and its type-erased column dispatch.

use crate::ecs::{AnyColumn, ComponentColumn};
use ergon_core::{Component, ComponentTypeId, EcsError, EcsResult, Entity};
use std::any::{type_name, TypeId};
use std::collections::HashMap;

/// Registers component types and routes typed operations to the column
/// that stores them.
///
/// Each distinct component type receives a small sequential
/// [`ComponentTypeId`] at first registration — stable for the process
/// lifetime, never recycled — and one [`ComponentColumn`] behind a
/// type-erased [`AnyColumn`]. Dispatch is keyed by [`TypeId`]; an
/// unregistered type surfaces as a typed error, never as an unchecked
/// downcast.
pub struct ComponentRegistry {
    type_ids: HashMap<TypeId, ComponentTypeId>,
    columns: HashMap<TypeId, Box<dyn AnyColumn>>,
    next_type_id: u16,
    type_capacity: usize,
    entity_capacity: usize,
}

impl ComponentRegistry {
    /// Creates a registry for at most `type_capacity` distinct component
    /// types, with columns pre-sized for `entity_capacity` entities.
    #[must_use]
    pub fn new(entity_capacity: usize, type_capacity: usize) -> Self {
        Self {
            type_ids: HashMap::new(),
            columns: HashMap::new(),
            next_type_id: 0,
            type_capacity,
            entity_capacity,
        }
    }

    /// Returns the number of registered component types.
    #[must_use]
    pub fn type_count(&self) -> usize {
        self.type_ids.len()
    }

    /// Registers `T` and returns its assigned id.
    ///
    /// Registering a type that is already known is an idempotent no-op
    /// that returns the existing id; a second id is never assigned.
    pub fn register<T: Component>(&mut self) -> EcsResult<ComponentTypeId> {
        let key = TypeId::of::<T>();
        if let Some(&id) = self.type_ids.get(&key) {
            log::warn!(
                "component type {} is already registered as {id}",
                type_name::<T>()
            );
            return Ok(id);
        }
        if usize::from(self.next_type_id) >= self.type_capacity {
            return Err(EcsError::TypeCapacityExhausted {
                capacity: self.type_capacity,
            });
        }
        let id = ComponentTypeId::new(self.next_type_id);
        self.next_type_id += 1;
        self.type_ids.insert(key, id);
        self.columns.insert(
            key,
            Box::new(ComponentColumn::<T>::with_capacity(self.entity_capacity)),
        );
        log::debug!("registered component type {} as {id}", type_name::<T>());
        Ok(id)
    }

    /// Returns the id assigned to `T` at registration.
    pub fn type_id<T: Component>(&self) -> EcsResult<ComponentTypeId> {
        self.type_ids
            .get(&TypeId::of::<T>())
            .copied()
            .ok_or(EcsError::UnregisteredComponent {
                type_name: type_name::<T>(),
            })
    }

    /// Returns the typed column storing every `T`.
    pub fn column<T: Component>(&self) -> EcsResult<&ComponentColumn<T>> {
        self.columns
            .get(&TypeId::of::<T>())
            .and_then(|column| column.as_any().downcast_ref::<ComponentColumn<T>>())
            .ok_or(EcsError::UnregisteredComponent {
                type_name: type_name::<T>(),
            })
    }

    /// Returns the typed column storing every `T`, mutably.
    pub fn column_mut<T: Component>(&mut self) -> EcsResult<&mut ComponentColumn<T>> {
        self.columns
            .get_mut(&TypeId::of::<T>())
            .and_then(|column| column.as_any_mut().downcast_mut::<ComponentColumn<T>>())
            .ok_or(EcsError::UnregisteredComponent {
                type_name: type_name::<T>(),
            })
    }

    /// Attaches `component` to `entity`, overwriting in place if the
    /// entity already holds a `T`; the replaced value is returned.
    pub fn insert<T: Component>(&mut self, entity: Entity, component: T) -> EcsResult<Option<T>> {
        Ok(self.column_mut::<T>()?.insert(entity, component))
    }

    /// Detaches and returns `entity`'s `T`.
    ///
    /// An entity that does not hold the component fails with
    /// [`EcsError::ComponentNotFound`] — a routine, recoverable outcome.
    pub fn remove<T: Component>(&mut self, entity: Entity) -> EcsResult<T> {
        self.column_mut::<T>()?
            .remove(entity)
            .ok_or(EcsError::ComponentNotFound {
                type_name: type_name::<T>(),
                entity,
            })
    }

    /// Returns a reference to `entity`'s `T`.
    pub fn get<T: Component>(&self, entity: Entity) -> EcsResult<&T> {
        self.column::<T>()?
            .get(entity)
            .ok_or(EcsError::ComponentNotFound {
                type_name: type_name::<T>(),
                entity,
            })
    }

    /// Returns a mutable reference to `entity`'s `T`.
    pub fn get_mut<T: Component>(&mut self, entity: Entity) -> EcsResult<&mut T> {
        self.column_mut::<T>()?
            .get_mut(entity)
            .ok_or(EcsError::ComponentNotFound {
                type_name: type_name::<T>(),
                entity,
            })
    }

    /// Drops `entity`'s components from every registered column.
    ///
    /// Fans out to each column's uniform `entity_destroyed` hook, so the
    /// cost is proportional to the number of distinct registered types,
    /// not to the entity count.
    pub fn entity_destroyed(&mut self, entity: Entity) {
        for column in self.columns.values_mut() {
            column.entity_destroyed(entity);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Health(u32);
    impl Component for Health {}

    #[derive(Debug, Clone, PartialEq)]
    struct Armor(u32);
    impl Component for Armor {}

    struct Unregistered;
    impl Component for Unregistered {}

    fn ent(index: u32) -> Entity {
        Entity::from_raw(index)
    }

    #[test]
    fn test_registration_assigns_sequential_ids() {
        let mut registry = ComponentRegistry::new(16, 8);
        assert_eq!(registry.register::<Health>().unwrap(), ComponentTypeId::new(0));
        assert_eq!(registry.register::<Armor>().unwrap(), ComponentTypeId::new(1));
        assert_eq!(registry.type_count(), 2);
    }

    #[test]
    fn test_re_registration_is_an_idempotent_no_op() {
        let mut registry = ComponentRegistry::new(16, 8);
        let first = registry.register::<Health>().unwrap();
        let second = registry.register::<Health>().unwrap();

        assert_eq!(first, second);
        assert_eq!(registry.type_count(), 1);
        // The column must survive re-registration untouched.
        registry.insert(ent(0), Health(10)).unwrap();
        registry.register::<Health>().unwrap();
        assert_eq!(registry.get::<Health>(ent(0)).unwrap(), &Health(10));
    }

    #[test]
    fn test_type_capacity_is_enforced() {
        let mut registry = ComponentRegistry::new(16, 1);
        registry.register::<Health>().unwrap();
        assert_eq!(
            registry.register::<Armor>(),
            Err(EcsError::TypeCapacityExhausted { capacity: 1 })
        );
    }

    #[test]
    fn test_unregistered_type_is_a_typed_error() {
        let mut registry = ComponentRegistry::new(16, 8);
        assert!(matches!(
            registry.type_id::<Unregistered>(),
            Err(EcsError::UnregisteredComponent { .. })
        ));
        assert!(matches!(
            registry.insert(ent(0), Health(1)),
            Err(EcsError::UnregisteredComponent { .. })
        ));
    }

    #[test]
    fn test_lookup_after_removal_is_component_not_found() {
        let mut registry = ComponentRegistry::new(16, 8);
        registry.register::<Health>().unwrap();
        registry.insert(ent(0), Health(10)).unwrap();

        assert_eq!(registry.remove::<Health>(ent(0)).unwrap(), Health(10));
        assert!(matches!(
            registry.get::<Health>(ent(0)),
            Err(EcsError::ComponentNotFound { .. })
        ));
        assert!(matches!(
            registry.remove::<Health>(ent(0)),
            Err(EcsError::ComponentNotFound { .. })
        ));
    }

    #[test]
    fn test_entity_destroyed_fans_out_to_every_column() {
        let mut registry = ComponentRegistry::new(16, 8);
        registry.register::<Health>().unwrap();
        registry.register::<Armor>().unwrap();
        registry.insert(ent(0), Health(10)).unwrap();
        registry.insert(ent(0), Armor(5)).unwrap();
        registry.insert(ent(1), Health(3)).unwrap();

        registry.entity_destroyed(ent(0));

        assert!(matches!(
            registry.get::<Health>(ent(0)),
            Err(EcsError::ComponentNotFound { .. })
        ));
        assert!(matches!(
            registry.get::<Armor>(ent(0)),
            Err(EcsError::ComponentNotFound { .. })
        ));
        assert_eq!(registry.get::<Health>(ent(1)).unwrap(), &Health(3));
    }

    #[test]
    fn test_typed_column_access() {
        let mut registry = ComponentRegistry::new(16, 8);
        registry.register::<Health>().unwrap();
        registry.insert(ent(3), Health(1)).unwrap();
        registry.insert(ent(4), Health(2)).unwrap();

        let column = registry.column::<Health>().unwrap();
        assert_eq!(column.as_slice(), &[Health(1), Health(2)]);
    }
}
