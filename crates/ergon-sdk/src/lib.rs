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

//! The public-facing SDK of the Ergon ECS runtime.
//!
//! Simulation code interacts with one [`World`] facade; the storage
//! internals live in `ergon-data` and are kept consistent by the facade
//! under every mutation.

#![warn(missing_docs)]

mod world;

pub use world::{World, DEFAULT_MAX_COMPONENT_TYPES, DEFAULT_MAX_ENTITIES};

pub mod prelude {
    //! Single import bringing the whole API surface into scope.

    pub use crate::World;
    pub use ergon_core::{Component, ComponentTypeId, EcsError, EcsResult, Entity, System};
    pub use ergon_data::ecs::Signature;
}
