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

//! # Ergon Core
//!
//! Foundational crate containing the contracts of the Ergon ECS runtime:
//! entity identifiers, the component marker trait, the system interface,
//! and the shared error hierarchy.
//!
//! Storage lives in `ergon-data`; the public facade lives in `ergon-sdk`.

#![warn(missing_docs)]

pub mod ecs;

pub use ecs::{Component, ComponentTypeId, EcsError, EcsResult, Entity, System};
