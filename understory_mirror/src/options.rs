// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mirror configuration and its override rule.
//!
//! The host exposes partial settings as [`MirrorOverrides`] (its `options.mirror` lookup).
//! [`MirrorOptions::merged`] resolves them against the defaults: every `Some` field replaces
//! the default value and every `None` field keeps it.
//!
//! ```
//! use understory_mirror::options::{MirrorOptions, MirrorOverrides};
//!
//! let opts = MirrorOptions::merged(MirrorOverrides { y_axis: Some(false), ..Default::default() });
//! assert!(opts.x_axis);
//! assert!(!opts.y_axis);
//! ```

use crate::types::Axes;

/// Resolved mirror configuration, immutable for the lifetime of a plugin.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct MirrorOptions {
    /// Follow the pointer horizontally after the initial placement.
    pub x_axis: bool,
    /// Follow the pointer vertically after the initial placement.
    pub y_axis: bool,
}

impl Default for MirrorOptions {
    fn default() -> Self {
        Self {
            x_axis: true,
            y_axis: true,
        }
    }
}

impl MirrorOptions {
    /// Resolve host overrides against the defaults.
    pub fn merged(overrides: MirrorOverrides) -> Self {
        let defaults = Self::default();
        Self {
            x_axis: overrides.x_axis.unwrap_or(defaults.x_axis),
            y_axis: overrides.y_axis.unwrap_or(defaults.y_axis),
        }
    }

    /// The enabled axes as flags.
    pub fn axes(&self) -> Axes {
        let mut axes = Axes::empty();
        axes.set(Axes::X, self.x_axis);
        axes.set(Axes::Y, self.y_axis);
        axes
    }
}

/// Partial mirror settings supplied by the host.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct MirrorOverrides {
    /// Override for [`MirrorOptions::x_axis`].
    pub x_axis: Option<bool>,
    /// Override for [`MirrorOptions::y_axis`].
    pub y_axis: Option<bool>,
}

impl From<MirrorOptions> for MirrorOverrides {
    fn from(opts: MirrorOptions) -> Self {
        Self {
            x_axis: Some(opts.x_axis),
            y_axis: Some(opts.y_axis),
        }
    }
}
