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

//! The component contract and component-type identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A marker trait for types that can be attached to an entity.
///
/// Any plain data type qualifies; there is no further contract. The
/// `'static` lifetime keeps columns free of borrowed data, and
/// `Send + Sync` allow a whole world to be handed to another thread
/// (access itself is single-threaded).
pub trait Component: 'static + Send + Sync {}

/// The identifier assigned to a component type at registration.
///
/// Ids are small, sequential, and stable for the process lifetime: the
/// first registered type receives id 0, the next id 1, and so on. An id
/// is never reassigned or recycled, and it doubles as the bit position
/// for its type in entity and system signatures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ComponentTypeId(u16);

impl ComponentTypeId {
    /// Creates a component-type id from its raw sequential value.
    ///
    /// Intended for the component registry; external code obtains ids
    /// from registration and lookup calls.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Returns the bit position this type occupies in a signature.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for ComponentTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "type#{}", self.0)
    }
}
