// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Failures of the mirror creation pipeline.
//!
//! Only creation can fail. Moves that arrive before creation has completed are
//! dropped rather than reported, see [`MirrorPlugin`](crate::plugin::MirrorPlugin).

/// Reasons a creation pipeline is aborted.
///
/// When any of these is returned no tracking state is committed for the new mirror.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MirrorError {
    /// The source element has no bounding box, typically because it was removed from the document.
    #[error("source element cannot be measured: it is not attached to a document")]
    SourceDetached,
    /// The measured source rect or the pointer position is NaN or infinite.
    #[error("non-finite geometry while computing the mirror offset")]
    NonFiniteGeometry,
}

/// Result alias for the mirror pipelines.
pub type Result<T, E = MirrorError> = core::result::Result<T, E>;
