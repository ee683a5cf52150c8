// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Error types for config validation and mounting.

use thiserror::Error;

/// Error type for widget config.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Mount id was empty or whitespace.
    #[error("mount id must not be empty")]
    EmptyMountId,
    /// Host-supplied config could not be decoded.
    #[error("invalid widget config: {0}")]
    Decode(String),
}

/// Error type for attaching a widget to a host.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MountError {
    /// No element with the given id exists in the host document.
    #[error("mount target `{0}` not found in host document")]
    TargetNotFound(String),
    /// The target already hosts a widget.
    #[error("mount target `{0}` already hosts a widget")]
    AlreadyMounted(String),
    /// A host global (`window`, `document`) is missing.
    #[error("host environment unavailable: no {0}")]
    HostUnavailable(&'static str),
    /// The host rejected a DOM operation.
    #[error("host error: {0}")]
    Host(String),
    /// Config failed validation.
    #[error(transparent)]
    Config(#[from] ConfigError),
}
