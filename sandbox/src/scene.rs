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

//! RON scene description.

use std::fs;
use std::path::Path;

use anyhow::{ensure, Context, Result};
use jove_core::geometry::{Matrix, Point, Ray};
use jove_core::volume::{Frustum, Volume};
use serde::{Deserialize, Serialize};

/// Named volumes, rays and probe points, plus an optional view frustum.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Scene {
    pub volumes: Vec<(String, Volume)>,
    pub rays: Vec<(String, Ray)>,
    pub points: Vec<(String, Point)>,
    /// Projection-view matrix, 16 floats in column-major order.
    pub frustum: Option<Vec<f32>>,
}

impl Scene {
    /// Reads and parses a scene file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read scene file {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("Failed to parse scene file {}", path.display()))
    }

    /// Parses a scene from RON text.
    pub fn parse(text: &str) -> Result<Self> {
        let scene: Scene = ron::from_str(text)?;
        log::debug!(
            "Parsed scene: {} volumes, {} rays, {} points",
            scene.volumes.len(),
            scene.rays.len(),
            scene.points.len()
        );
        Ok(scene)
    }

    /// Looks up a ray by name.
    pub fn ray(&self, name: &str) -> Option<&Ray> {
        self.rays.iter().find(|(n, _)| n == name).map(|(_, ray)| ray)
    }

    /// Builds the culling frustum, if the scene defines one.
    pub fn frustum(&self) -> Result<Option<Frustum>> {
        let Some(elements) = &self.frustum else {
            return Ok(None);
        };
        ensure!(
            elements.len() == 16,
            "Frustum matrix needs 16 elements, got {}",
            elements.len()
        );

        let cols = std::array::from_fn(|col| std::array::from_fn(|row| elements[col * 4 + row]));
        let frustum = Frustum::from_matrix(&Matrix::from_cols(cols))
            .context("Frustum matrix does not describe a projection")?;
        Ok(Some(frustum))
    }
}
