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

//! # Ergon Data
//!
//! Storage layer of the Ergon ECS runtime: fixed-capacity signatures,
//! the recycling entity store, densely packed component columns, and
//! the component and system registries. These pieces are composed and
//! kept consistent by the `World` facade in `ergon-sdk`.

#![warn(missing_docs)]

pub mod ecs;
