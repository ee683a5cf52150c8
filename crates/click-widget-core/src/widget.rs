// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Mounted widget runtime and the once-per-target mount registry.

use std::cell::Cell;
use std::collections::BTreeSet;

use tracing::{debug, trace, warn};

use crate::config::WidgetConfig;
use crate::error::MountError;
use crate::port::{ButtonSurface, MountHost};
use crate::state::{update, Msg, Phase, WidgetState};
use crate::view::{render, ButtonView, Label};

/// A widget attached to a host surface.
///
/// Owns the only copy of its [`WidgetState`]. Every [`Widget::dispatch`]
/// runs the update function and repaints the surface. Single-threaded: the
/// state lives in a `Cell` and the type is not `Sync`.
pub struct Widget<S> {
    mount_id: String,
    state: Cell<WidgetState>,
    surface: S,
}

impl<S: ButtonSurface> Widget<S> {
    /// Attach a fresh widget through `host`. The surface comes back already
    /// showing the initial state.
    ///
    /// The view handed to [`MountHost::attach`] has an inert click; hosts
    /// route clicks to [`Widget::dispatch`] once they hold the widget.
    pub(crate) fn attach<H>(host: &H, config: &WidgetConfig) -> Result<Self, MountError>
    where
        H: MountHost<Surface = S>,
    {
        let state = WidgetState::new();
        let inert = |_: Msg| {};
        let surface = host.attach(&config.mount_id, &render(state, &inert))?;
        Ok(Self {
            mount_id: config.mount_id.clone(),
            state: Cell::new(state),
            surface,
        })
    }

    /// Apply `msg` and re-render.
    ///
    /// The surface is repainted even when the state did not change.
    pub fn dispatch(&self, msg: Msg) {
        let prev = self.state.get();
        let next = update(prev, msg);
        self.state.set(next);
        trace!(
            mount_id = %self.mount_id,
            ?msg,
            from = %prev.phase(),
            to = %next.phase(),
            "dispatch"
        );
        self.with_view(|view| self.surface.paint(view));
    }

    /// Shorthand for `dispatch(Msg::Click)`.
    pub fn click(&self) {
        self.dispatch(Msg::Click);
    }

    /// Run `f` against a view of the current state whose click dispatches
    /// back into this widget.
    pub fn with_view<R>(&self, f: impl FnOnce(&ButtonView<'_>) -> R) -> R {
        let dispatch = |msg: Msg| self.dispatch(msg);
        f(&render(self.state.get(), &dispatch))
    }
}

impl<S> Widget<S> {
    /// Id of the element this widget is mounted in.
    pub fn mount_id(&self) -> &str {
        &self.mount_id
    }

    /// Current state.
    pub fn state(&self) -> WidgetState {
        self.state.get()
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.state.get().phase()
    }

    /// Label currently shown.
    pub fn label(&self) -> Label {
        Label::for_state(self.state.get())
    }

    /// Host surface backing this widget.
    pub fn surface(&self) -> &S {
        &self.surface
    }
}

/// Tracks which mount targets already host a widget.
///
/// A target can be bound once; there is no unmount.
#[derive(Debug, Default)]
pub struct MountRegistry {
    mounted: BTreeSet<String>,
}

impl MountRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `mount_id` already hosts a widget.
    pub fn is_mounted(&self, mount_id: &str) -> bool {
        self.mounted.contains(mount_id)
    }

    /// Number of bound targets.
    pub fn len(&self) -> usize {
        self.mounted.len()
    }

    /// True when nothing has been mounted.
    pub fn is_empty(&self) -> bool {
        self.mounted.is_empty()
    }

    /// Validate `config`, then attach one widget to its target through `host`.
    ///
    /// A failed attach leaves the target unclaimed.
    pub fn mount<H: MountHost>(
        &mut self,
        host: &H,
        config: &WidgetConfig,
    ) -> Result<Widget<H::Surface>, MountError> {
        config.validate()?;
        let mount_id = config.mount_id.as_str();
        if self.is_mounted(mount_id) {
            warn!(mount_id, "refusing to bind a second widget");
            return Err(MountError::AlreadyMounted(mount_id.to_owned()));
        }
        let widget = Widget::attach(host, config).inspect_err(|err| {
            warn!(mount_id, %err, "mount failed");
        })?;
        self.mounted.insert(mount_id.to_owned());
        debug!(mount_id, label = %widget.label(), "widget mounted");
        Ok(widget)
    }
}
