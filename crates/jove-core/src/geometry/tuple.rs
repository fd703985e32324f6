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

//! The [`Tuple`] trait shared by every three-component value type.

/// An immutable `(x, y, z)` triple of floats.
///
/// [`Point`](super::Point), [`Vector`](super::Vector) and
/// [`Normal`](super::Normal) all implement this trait, which lets routines such
/// as the matrix builder or plane distance accept any of them.
pub trait Tuple: Copy {
    /// The x component.
    fn x(&self) -> f32;
    /// The y component.
    fn y(&self) -> f32;
    /// The z component.
    fn z(&self) -> f32;

    /// The components as an array.
    #[inline]
    fn to_array(&self) -> [f32; 3] {
        [self.x(), self.y(), self.z()]
    }

    /// Retrieves a component by index.
    ///
    /// # Panics
    /// Panics if `index` is not 0, 1, or 2.
    #[inline]
    fn get(&self, index: usize) -> f32 {
        match index {
            0 => self.x(),
            1 => self.y(),
            2 => self.z(),
            _ => panic!("Index {index} out of bounds for tuple"),
        }
    }

    /// Dot product against any other tuple.
    #[inline]
    fn dot<T: Tuple>(&self, other: &T) -> f32 {
        self.x() * other.x() + self.y() * other.y() + self.z() * other.z()
    }
}
