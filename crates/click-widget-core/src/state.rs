// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Widget state and its update function.

use std::fmt;

/// Messages the widget reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Msg {
    /// The button was clicked.
    Click,
}

/// Lifecycle phase derived from [`WidgetState`].
///
/// `Unclicked` is initial; `Clicked` is terminal for the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// No click observed yet.
    Unclicked,
    /// At least one click observed.
    Clicked,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unclicked => f.write_str("unclicked"),
            Self::Clicked => f.write_str("clicked"),
        }
    }
}

/// Entire state of one widget instance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct WidgetState {
    was_clicked: bool,
}

impl WidgetState {
    /// State of a freshly created widget.
    pub const fn new() -> Self {
        Self { was_clicked: false }
    }

    /// Whether the button has been clicked at least once.
    pub const fn was_clicked(self) -> bool {
        self.was_clicked
    }

    /// Phase view of the flag.
    pub const fn phase(self) -> Phase {
        if self.was_clicked {
            Phase::Clicked
        } else {
            Phase::Unclicked
        }
    }

    /// Apply `msg`, returning the next state.
    ///
    /// A click always sets the flag; it never clears it.
    #[must_use]
    pub const fn apply(self, msg: Msg) -> Self {
        match msg {
            Msg::Click => Self { was_clicked: true },
        }
    }
}

/// Free-function form of [`WidgetState::apply`].
#[must_use]
pub const fn update(state: WidgetState, msg: Msg) -> WidgetState {
    state.apply(msg)
}
