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

// JOVE Sandbox
// Loads a scene file and reports ray hits, containment, culling and overlaps.

mod report;
mod scene;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::scene::Scene;

#[derive(Parser, Debug)]
#[command(author, version, about = "Probe a JOVE scene of volumes, rays and points")]
struct Args {
    /// Path to the RON scene file
    scene: PathBuf,
    /// Log at debug level, including hit normals
    #[arg(short, long)]
    verbose: bool,
    /// Only cast the ray with this name
    #[arg(long)]
    ray: Option<String>,
}

fn main() -> Result<()> {
    use env_logger::{Builder, Env};

    let args = Args::parse();
    let level = if args.verbose { "debug" } else { "info" };
    Builder::from_env(Env::default().default_filter_or(level)).init();

    let scene = Scene::load(&args.scene)?;
    log::info!(
        "Loaded {}: {} volumes, {} rays, {} points",
        args.scene.display(),
        scene.volumes.len(),
        scene.rays.len(),
        scene.points.len()
    );

    let rays = report::select_rays(&scene, args.ray.as_deref())?;

    let frustum = scene.frustum()?;
    if frustum.is_none() {
        log::info!("No frustum in scene, skipping visibility");
    }

    report::print(&scene, &rays, frustum.as_ref());
    Ok(())
}
