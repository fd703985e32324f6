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

//! Queries run over a [`Scene`] and their textual output.

use anyhow::{bail, Result};
use jove_core::geometry::{Intersected, Intersection, Ray};
use jove_core::volume::Frustum;

use crate::scene::Scene;

/// A volume surface crossed by a ray.
#[derive(Debug, Clone, PartialEq)]
pub struct Hit {
    pub volume: String,
    pub intersection: Intersection,
}

/// The rays to cast: every ray in the scene, or only the one named `only`.
pub fn select_rays<'a>(scene: &'a Scene, only: Option<&str>) -> Result<Vec<(&'a str, &'a Ray)>> {
    let rays: Vec<(&str, &Ray)> = scene
        .rays
        .iter()
        .map(|(name, ray)| (name.as_str(), ray))
        .filter(|(name, _)| only.is_none_or(|only| only == *name))
        .collect();
    if let Some(only) = only {
        if rays.is_empty() {
            bail!("Scene has no ray named '{only}'");
        }
    }
    Ok(rays)
}

/// Every surface crossing of one ray, nearest first.
pub fn cast(scene: &Scene, ray: &Ray) -> Vec<Hit> {
    let mut hits: Vec<Hit> = scene
        .volumes
        .iter()
        .flat_map(|(name, volume)| {
            volume.intersections(ray).into_iter().map(|intersection| Hit {
                volume: name.clone(),
                intersection,
            })
        })
        .collect();
    hits.sort_by(|a, b| {
        a.intersection
            .distance
            .total_cmp(&b.intersection.distance)
    });
    hits
}

/// Names of the volumes containing each probe point.
pub fn containment(scene: &Scene) -> Vec<(&str, Vec<&str>)> {
    scene
        .points
        .iter()
        .map(|(point_name, point)| {
            let containing = scene
                .volumes
                .iter()
                .filter(|(_, volume)| volume.contains(*point))
                .map(|(name, _)| name.as_str())
                .collect();
            (point_name.as_str(), containing)
        })
        .collect()
}

/// Whether each volume is at least partially inside the frustum.
pub fn visibility<'a>(scene: &'a Scene, frustum: &Frustum) -> Vec<(&'a str, bool)> {
    scene
        .volumes
        .iter()
        .map(|(name, volume)| (name.as_str(), frustum.intersects(volume)))
        .collect()
}

/// Every unordered pair of overlapping volumes.
pub fn overlaps(scene: &Scene) -> Vec<(&str, &str)> {
    let volumes = &scene.volumes;
    let mut pairs = Vec::new();
    for (i, (a_name, a)) in volumes.iter().enumerate() {
        for (b_name, b) in &volumes[i + 1..] {
            if a.intersects(b) {
                pairs.push((a_name.as_str(), b_name.as_str()));
            }
        }
    }
    pairs
}

/// Prints the full report, casting only `rays`.
pub fn print(scene: &Scene, rays: &[(&str, &Ray)], frustum: Option<&Frustum>) {
    println!("== Rays ==");
    for &(name, ray) in rays {
        let hits = cast(scene, ray);
        if hits.is_empty() {
            println!("{name}: no hits");
            continue;
        }
        println!("{name}:");
        for hit in hits {
            let i = hit.intersection;
            println!(
                "  {:>8.3}  {:<16} at ({:.3}, {:.3}, {:.3})",
                i.distance, hit.volume, i.point.x, i.point.y, i.point.z
            );
            log::debug!("    normal {:?}", i.normal.vector());
        }
    }

    println!("== Points ==");
    for (point, volumes) in containment(scene) {
        if volumes.is_empty() {
            println!("{point}: outside every volume");
        } else {
            println!("{point}: inside {}", volumes.join(", "));
        }
    }

    if let Some(frustum) = frustum {
        println!("== Frustum ==");
        for (name, visible) in visibility(scene, frustum) {
            println!("{name}: {}", if visible { "visible" } else { "culled" });
        }
    }

    println!("== Overlaps ==");
    let pairs = overlaps(scene);
    if pairs.is_empty() {
        println!("none");
    }
    for (a, b) in pairs {
        println!("{a} <-> {b}");
    }
}
