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

//! Defines the entity identifier type.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A unique identifier for a simulated object in the world.
///
/// An `Entity` carries no data of its own: it is a key into the entity
/// store's signature table and into every component column's index maps.
/// Identifiers are drawn from the bounded pool `[0, max_entities)` and
/// are recycled in FIFO order when despawned, so a freed id is handed
/// out again only after every id freed before it has been reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Entity(u32);

impl Entity {
    /// Creates an entity handle from a raw pool index.
    ///
    /// Intended for the entity store when seeding its free list; external
    /// code receives handles from `spawn` and treats them as opaque.
    #[must_use]
    pub const fn from_raw(index: u32) -> Self {
        Self(index)
    }

    /// Returns the raw pool index behind this handle.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "entity#{}", self.0)
    }
}
