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

//! Defines the hierarchy of error types for ECS operations.

use crate::ecs::Entity;
use std::fmt;

/// Convenience alias for results carrying an [`EcsError`].
pub type EcsResult<T> = Result<T, EcsError>;

/// An error raised by an ECS operation.
///
/// Capacity and bounds violations are reported to the immediate caller,
/// never silently clamped. [`ComponentNotFound`](EcsError::ComponentNotFound)
/// is a routine query outcome callers are expected to check;
/// [`UnregisteredComponent`](EcsError::UnregisteredComponent) indicates a
/// setup-order bug and may legitimately be escalated to a hard stop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EcsError {
    /// A spawn was requested while every id in the entity pool is live.
    PoolExhausted {
        /// The configured size of the entity pool.
        capacity: usize,
    },
    /// An entity id lies outside the configured pool.
    EntityOutOfRange {
        /// The offending entity.
        entity: Entity,
        /// The configured size of the entity pool.
        capacity: usize,
    },
    /// A despawn was requested for an id that is not currently live.
    EntityNotAlive {
        /// The offending entity.
        entity: Entity,
    },
    /// A component operation referenced a type that was never registered.
    UnregisteredComponent {
        /// The name of the offending component type.
        type_name: &'static str,
    },
    /// The entity does not currently hold the requested component.
    ComponentNotFound {
        /// The name of the requested component type.
        type_name: &'static str,
        /// The entity that was queried.
        entity: Entity,
    },
    /// Component-type registration exceeded the configured capacity.
    TypeCapacityExhausted {
        /// The configured number of distinct component types.
        capacity: usize,
    },
    /// A signature bit outside the configured capacity was addressed.
    BitOutOfRange {
        /// The offending bit position.
        bit: usize,
        /// The signature's fixed capacity.
        capacity: usize,
    },
    /// Two signatures of different capacities were compared.
    SignatureCapacityMismatch {
        /// The capacity of the signature the operation was called on.
        expected: usize,
        /// The capacity of the signature it was compared against.
        actual: usize,
    },
    /// A system was registered under a name that is already taken.
    SystemAlreadyRegistered {
        /// The contested registration name.
        name: String,
    },
    /// A system operation referenced a name that was never registered.
    UnknownSystem {
        /// The unknown registration name.
        name: String,
    },
}

impl fmt::Display for EcsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EcsError::PoolExhausted { capacity } => {
                write!(f, "Entity pool exhausted: all {capacity} ids are live")
            }
            EcsError::EntityOutOfRange { entity, capacity } => {
                write!(f, "{entity} is outside the pool of {capacity} ids")
            }
            EcsError::EntityNotAlive { entity } => {
                write!(f, "{entity} is not currently alive")
            }
            EcsError::UnregisteredComponent { type_name } => {
                write!(f, "Component type '{type_name}' was never registered")
            }
            EcsError::ComponentNotFound { type_name, entity } => {
                write!(f, "{entity} holds no component of type '{type_name}'")
            }
            EcsError::TypeCapacityExhausted { capacity } => {
                write!(
                    f,
                    "Cannot register more than {capacity} distinct component types"
                )
            }
            EcsError::BitOutOfRange { bit, capacity } => {
                write!(f, "Bit {bit} is out of range for a {capacity}-bit signature")
            }
            EcsError::SignatureCapacityMismatch { expected, actual } => {
                write!(
                    f,
                    "Signature capacity mismatch: expected {expected} bits, got {actual}"
                )
            }
            EcsError::SystemAlreadyRegistered { name } => {
                write!(f, "A system is already registered under the name '{name}'")
            }
            EcsError::UnknownSystem { name } => {
                write!(f, "No system is registered under the name '{name}'")
            }
        }
    }
}

impl std::error::Error for EcsError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_carries_context() {
        let err = EcsError::ComponentNotFound {
            type_name: "Transform",
            entity: Entity::from_raw(7),
        };
        let rendered = err.to_string();
        assert!(rendered.contains("entity#7"));
        assert!(rendered.contains("Transform"));
    }

    #[test]
    fn test_errors_compare_structurally() {
        let a = EcsError::PoolExhausted { capacity: 8 };
        let b = EcsError::PoolExhausted { capacity: 8 };
        assert_eq!(a, b);
        assert_ne!(a, EcsError::PoolExhausted { capacity: 9 });
    }
}
