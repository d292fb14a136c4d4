// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use thiserror::Error;

/// Result type for geometry operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during mesh generation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Not enough boundary points for a slab: need at least 3, got {0}")]
    InsufficientBoundary(usize),
}
