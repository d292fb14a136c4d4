// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Asset materialization
//!
//! Generated meshes carry deterministic names, so building the same wall
//! twice yields the same name twice. Sinks resolve those collisions with a
//! [`NamePolicy`].

use crate::error::{Error, Result};
use floorplan_geometry::MeshAsset;
use rustc_hash::{FxHashMap, FxHashSet};
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Receives generated meshes and turns them into stored assets
pub trait AssetSink {
    /// Store one asset and return the name it was stored under
    fn materialize(&mut self, asset: MeshAsset) -> Result<String>;
}

/// What to do when an asset name is already taken
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NamePolicy {
    /// Keep both: the repeat becomes `<name>_1`, `<name>_2`, ...
    #[default]
    Version,
    /// Replace the earlier asset
    Overwrite,
}

#[derive(Debug, Default)]
struct NameRegistry {
    policy: NamePolicy,
    /// Next suffix to try per base name
    next_suffix: FxHashMap<String, u32>,
    used: FxHashSet<String>,
}

impl NameRegistry {
    fn new(policy: NamePolicy) -> Self {
        Self {
            policy,
            ..Default::default()
        }
    }

    /// Pick the name to store `name` under. With [`NamePolicy::Version`] the
    /// result is neither a name handed out before nor one `is_taken` reports.
    fn resolve(&mut self, name: &str, is_taken: impl Fn(&str) -> bool) -> String {
        if self.policy == NamePolicy::Overwrite {
            self.used.insert(name.to_string());
            return name.to_string();
        }

        let mut suffix = self.next_suffix.get(name).copied().unwrap_or(0);
        let resolved = loop {
            let candidate = match suffix {
                0 => name.to_string(),
                n => format!("{}_{}", name, n),
            };
            suffix += 1;
            if !self.used.contains(&candidate) && !is_taken(&candidate) {
                break candidate;
            }
        };

        self.next_suffix.insert(name.to_string(), suffix);
        self.used.insert(resolved.clone());
        resolved
    }
}

fn ensure_not_empty(asset: &MeshAsset) -> Result<()> {
    if asset.buffers.is_empty() {
        tracing::error!(name = %asset.name, "no vertices or triangles to create mesh asset");
        return Err(Error::EmptyMesh(asset.name.clone()));
    }
    Ok(())
}

/// Keeps assets in memory, in the order they were materialized
#[derive(Debug, Default)]
pub struct MemorySink {
    names: NameRegistry,
    assets: Vec<MeshAsset>,
}

impl MemorySink {
    pub fn new(policy: NamePolicy) -> Self {
        Self {
            names: NameRegistry::new(policy),
            assets: Vec::new(),
        }
    }

    pub fn assets(&self) -> &[MeshAsset] {
        &self.assets
    }

    pub fn get(&self, name: &str) -> Option<&MeshAsset> {
        self.assets.iter().find(|a| a.name == name)
    }

    pub fn into_assets(self) -> Vec<MeshAsset> {
        self.assets
    }
}

impl AssetSink for MemorySink {
    fn materialize(&mut self, mut asset: MeshAsset) -> Result<String> {
        ensure_not_empty(&asset)?;

        asset.name = self.names.resolve(&asset.name, |_| false);
        let name = asset.name.clone();

        match self.assets.iter_mut().find(|a| a.name == name) {
            Some(existing) => *existing = asset,
            None => self.assets.push(asset),
        }
        Ok(name)
    }
}

/// Writes each asset to `<dir>/<name>.obj`.
///
/// With [`NamePolicy::Version`], files already in the directory are never
/// replaced; the new asset gets the next free suffix instead.
#[derive(Debug)]
pub struct ObjDirectorySink {
    dir: PathBuf,
    names: NameRegistry,
}

impl ObjDirectorySink {
    /// Create the sink, creating `dir` if needed
    pub fn new(dir: impl Into<PathBuf>, policy: NamePolicy) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|source| Error::AssetWrite {
            name: dir.display().to_string(),
            source,
        })?;
        Ok(Self {
            dir,
            names: NameRegistry::new(policy),
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn asset_path(&self, name: &str) -> PathBuf {
        obj_path(&self.dir, name)
    }
}

fn obj_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(format!("{}.obj", name))
}

impl AssetSink for ObjDirectorySink {
    fn materialize(&mut self, asset: MeshAsset) -> Result<String> {
        ensure_not_empty(&asset)?;

        // Files from earlier runs count as taken names
        let dir = &self.dir;
        let name = self
            .names
            .resolve(&asset.name, |candidate| obj_path(dir, candidate).exists());
        let path = self.asset_path(&name);

        let write = || -> std::io::Result<()> {
            let mut writer = BufWriter::new(fs::File::create(&path)?);
            write_obj(&mut writer, &name, &asset)?;
            writer.flush()
        };
        write().map_err(|source| Error::AssetWrite {
            name: name.clone(),
            source,
        })?;

        tracing::info!(
            name = %name,
            path = %path.display(),
            vertices = asset.buffers.vertex_count(),
            triangles = asset.buffers.triangle_count(),
            "created mesh asset"
        );
        Ok(name)
    }
}

/// Write one asset as a Wavefront OBJ object.
///
/// Positions are lifted by the asset's elevation and converted from Z-up to
/// Y-up. Faces are re-wound from the generator's clockwise-front order to
/// OBJ's counter-clockwise.
pub fn write_obj<W: Write>(out: &mut W, name: &str, asset: &MeshAsset) -> std::io::Result<()> {
    let buffers = &asset.buffers;

    writeln!(out, "# Generated by floorplan-to-mesh")?;
    writeln!(out, "# Coordinate system: Y-up (OBJ convention)")?;
    writeln!(out, "o {}", name)?;

    // OBJ X = source X, OBJ Y = source Z, OBJ Z = -source Y
    let elevation = asset.elevation as f32;
    for p in buffers.positions.chunks_exact(3) {
        writeln!(out, "v {:.6} {:.6} {:.6}", p[0], p[2] + elevation, -p[1])?;
    }
    for uv in buffers.uvs.chunks_exact(2) {
        writeln!(out, "vt {:.6} {:.6}", uv[0], uv[1])?;
    }
    for n in buffers.normals.chunks_exact(3) {
        writeln!(out, "vn {:.6} {:.6} {:.6}", n[0], n[2], -n[1])?;
    }
    for tri in buffers.indices.chunks_exact(3) {
        let (i0, i1, i2) = (tri[0] + 1, tri[1] + 1, tri[2] + 1);
        writeln!(
            out,
            "f {}/{}/{} {}/{}/{} {}/{}/{}",
            i0, i0, i0, i2, i2, i2, i1, i1, i1
        )?;
    }
    Ok(())
}
