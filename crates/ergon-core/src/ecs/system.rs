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

//! The interface the runtime drives on every registered system.

use crate::ecs::Entity;
use std::any::Any;

/// A behavior unit operating on entities that satisfy its required
/// signature.
///
/// The runtime holds one abstract reference per registered system and
/// keeps its visible set current through these callbacks, invoked
/// synchronously on the caller's thread whenever an entity's component
/// set changes. Concrete behavior and state are the implementor's
/// business; a callback that panics is a caller bug the runtime does
/// not catch.
pub trait System: Send + Sync + 'static {
    /// Called when an entity's signature begins to satisfy this system's
    /// requirement. The registry guards against duplicate adds, so an
    /// entity is announced at most once while it remains a member.
    fn add_entity(&mut self, entity: Entity);

    /// Called when an entity no longer satisfies the requirement, or is
    /// destroyed. Must be idempotent: removing an entity that was never
    /// added is a no-op.
    fn remove_entity(&mut self, entity: Entity);

    /// Reports whether this system currently tracks `entity`.
    fn has_entity(&self, entity: Entity) -> bool;

    /// Casts the system to `&dyn Any` so the registry can hand typed
    /// references back to the caller without unchecked casts.
    fn as_any(&self) -> &dyn Any;

    /// Casts the system to `&mut dyn Any`.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}
