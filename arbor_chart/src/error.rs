// Copyright 2026 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use arbor_directory::DirectoryError;
use arbor_layout::ConfigError;
use arbor_viewport::ZoomConfigError;

/// Why an [`OrgChart`](crate::OrgChart) could not be created.
#[derive(Clone, Debug, PartialEq)]
pub enum ChartError {
    /// The employee records do not form a single tree.
    Directory(DirectoryError),
    /// The layout configuration is unusable.
    Layout(ConfigError),
    /// The zoom configuration is unusable.
    Zoom(ZoomConfigError),
    /// `top_margin` is NaN or infinite.
    TopMarginNotFinite,
}

impl fmt::Display for ChartError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Directory(err) => write!(f, "invalid directory: {err}"),
            Self::Layout(err) => write!(f, "invalid layout config: {err}"),
            Self::Zoom(err) => write!(f, "invalid zoom config: {err}"),
            Self::TopMarginNotFinite => f.write_str("chart `top_margin` must be finite"),
        }
    }
}

impl core::error::Error for ChartError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Directory(err) => Some(err),
            Self::Layout(err) => Some(err),
            Self::Zoom(err) => Some(err),
            Self::TopMarginNotFinite => None,
        }
    }
}

impl From<DirectoryError> for ChartError {
    fn from(err: DirectoryError) -> Self {
        Self::Directory(err)
    }
}

impl From<ConfigError> for ChartError {
    fn from(err: ConfigError) -> Self {
        Self::Layout(err)
    }
}

impl From<ZoomConfigError> for ChartError {
    fn from(err: ZoomConfigError) -> Self {
        Self::Zoom(err)
    }
}
