// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Core of the click widget: a single button whose label moves from
//! "Click Me" to "Clicked!" on the first click and stays there.
//!
//! The crate is framework-agnostic. State changes go through a pure
//! [`update`] function, the UI is derived by a pure [`render`] function, and
//! hosts plug in through the [`MountHost`] / [`ButtonSurface`] ports. The
//! browser adapter lives in `click-widget-wasm`; tests drive the same code
//! through an in-memory host.
//!
//! # Usage
//!
//! ```
//! use click_widget_core::{render, update, Label, Msg, WidgetState};
//!
//! let state = WidgetState::default();
//! assert_eq!(render(state, &|_: Msg| {}).label(), Label::ClickMe);
//!
//! let state = update(state, Msg::Click);
//! assert_eq!(render(state, &|_: Msg| {}).label().as_str(), "Clicked!");
//! ```

pub mod config;
pub mod error;
pub mod port;
pub mod state;
pub mod view;
pub mod widget;

pub use config::{WidgetConfig, DEFAULT_MOUNT_ID};
pub use error::{ConfigError, MountError};
pub use port::{ButtonSurface, MountHost};
pub use state::{update, Msg, Phase, WidgetState};
pub use view::{render, ButtonView, Label, BUTTON_CLASS, BUTTON_TAG};
pub use widget::{MountRegistry, Widget};
