// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Generator inputs and the output record

use crate::mesh::MeshBuffers;

/// Opening type classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OpeningKind {
    Door,
    Window,
}

/// Door or window cut into a wall
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Opening {
    pub kind: OpeningKind,
    /// Offset of the opening center from the wall start
    pub offset: f64,
    /// Width along the wall (must be positive)
    pub width: f64,
    /// Depth through the wall (frame thickness)
    pub depth: f64,
    /// Rotation in degrees within the plan
    pub rotation: f64,
}

impl Opening {
    pub fn door(offset: f64, width: f64) -> Self {
        Self {
            kind: OpeningKind::Door,
            offset,
            width,
            depth: 20.0,
            rotation: 0.0,
        }
    }

    pub fn window(offset: f64, width: f64) -> Self {
        Self {
            kind: OpeningKind::Window,
            offset,
            width,
            depth: 15.0,
            rotation: 0.0,
        }
    }

    #[inline]
    pub fn is_door(&self) -> bool {
        self.kind == OpeningKind::Door
    }
}

/// Generated mesh plus the deterministic name a sink stores it under
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MeshAsset {
    pub name: String,
    /// Z placement requested by the caller; vertex data stays local
    pub elevation: f64,
    pub buffers: MeshBuffers,
}

impl MeshAsset {
    pub fn new(name: String, elevation: f64, buffers: MeshBuffers) -> Self {
        Self {
            name,
            elevation,
            buffers,
        }
    }
}
