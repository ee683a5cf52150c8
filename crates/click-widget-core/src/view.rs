// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Pure render: state in, button description out.

use std::fmt;

use crate::state::{Msg, WidgetState};

/// Element kind of the rendered button.
pub const BUTTON_TAG: &str = "button";

/// CSS class list carried by the button in every state.
pub const BUTTON_CLASS: &str = "btn btn-primary mt-2";

/// Visible button text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    /// Shown before the first click.
    ClickMe,
    /// Shown after the first click.
    Clicked,
}

impl Label {
    /// Label for a given state.
    pub const fn for_state(state: WidgetState) -> Self {
        if state.was_clicked() {
            Self::Clicked
        } else {
            Self::ClickMe
        }
    }

    /// Exact text content of the button.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ClickMe => "Click Me",
            Self::Clicked => "Clicked!",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Description of the button for one state, plus its click behavior.
///
/// Hosts read `tag`, `class` and `label` to build or patch the element and
/// call [`ButtonView::click`] (or dispatch [`Msg::Click`] directly) when the
/// element is clicked.
#[derive(Clone, Copy)]
pub struct ButtonView<'d> {
    state: WidgetState,
    dispatch: &'d dyn Fn(Msg),
}

impl ButtonView<'_> {
    /// Element kind, always [`BUTTON_TAG`].
    pub const fn tag(&self) -> &'static str {
        BUTTON_TAG
    }

    /// Class list, always [`BUTTON_CLASS`].
    pub const fn class(&self) -> &'static str {
        BUTTON_CLASS
    }

    /// Label derived from the state this view was rendered from.
    pub const fn label(&self) -> Label {
        Label::for_state(self.state)
    }

    /// State this view was rendered from.
    pub const fn state(&self) -> WidgetState {
        self.state
    }

    /// Click behavior: forwards [`Msg::Click`] to the dispatch callback.
    pub fn click(&self) {
        (self.dispatch)(Msg::Click);
    }

    /// Static HTML for hosts without a live DOM.
    ///
    /// Label and class are fixed ASCII without markup characters, so no
    /// escaping is applied.
    pub fn markup(&self) -> String {
        format!(
            "<{tag} class=\"{class}\">{label}</{tag}>",
            tag = self.tag(),
            class = self.class(),
            label = self.label(),
        )
    }
}

impl fmt::Debug for ButtonView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ButtonView")
            .field("tag", &self.tag())
            .field("class", &self.class())
            .field("label", &self.label())
            .finish_non_exhaustive()
    }
}

/// Render `state` into a [`ButtonView`] whose click invokes `dispatch`.
///
/// Pure: the same state always yields the same tag, class and label.
pub fn render(state: WidgetState, dispatch: &dyn Fn(Msg)) -> ButtonView<'_> {
    ButtonView { state, dispatch }
}
