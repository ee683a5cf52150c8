// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Port traits for host adapters (browser DOM, in-memory test hosts) so the
//! widget never depends on a specific rendering backend.

use crate::error::MountError;
use crate::view::ButtonView;

/// A document that can receive a widget.
pub trait MountHost {
    /// Handle to the attached button.
    type Surface: ButtonSurface;

    /// Locate the element with id `mount_id`, replace its children with a
    /// button built from `view`, and return a handle to that button.
    ///
    /// Returns [`MountError::TargetNotFound`] when the element is absent.
    fn attach(&self, mount_id: &str, view: &ButtonView<'_>) -> Result<Self::Surface, MountError>;
}

/// An attached button that can be repainted.
pub trait ButtonSurface {
    /// Re-apply class and label from `view`.
    fn paint(&self, view: &ButtonView<'_>);
}
