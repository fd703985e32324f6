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

//! # JOVE Core
//!
//! Geometry and linear algebra for the JOVE engine: immutable tuple types,
//! matrices, rotations, bounding volumes and ray intersection.
//!
//! Every type in this crate is a small `Copy` value and every operation is a
//! pure function over those values.

#![warn(missing_docs)]

pub mod error;
pub mod geometry;
pub mod math;
pub mod volume;

pub use error::GeometryError;
