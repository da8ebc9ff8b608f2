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

//! The storage subsystems behind the Ergon world facade.
//!
//! Layering is strictly leaf-to-root: [`Signature`] depends on nothing,
//! the [`EntityStore`] owns one signature per pooled entity,
//! [`ComponentColumn`]s are owned and dispatched by the
//! [`ComponentRegistry`], and the [`SystemRegistry`] matches entity
//! signatures against the requirements of registered systems. Nothing in
//! this crate reaches back up; cross-cutting consistency is the facade's
//! job.

mod column;
mod entity_store;
mod registry;
mod signature;
mod systems;

pub use column::{AnyColumn, ComponentColumn};
pub use entity_store::EntityStore;
pub use registry::ComponentRegistry;
pub use signature::Signature;
pub use systems::SystemRegistry;
