// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! wasm-bindgen bindings that mount the click widget into a host page.
//!
//! The host page provides an element (by default `#react_root`) and calls
//! `initialize` once after loading the module:
//!
//! ```js
//! import init, { initialize } from 'click-widget-wasm';
//!
//! await init();
//! initialize('react_root');
//! ```
//!
//! A missing target throws; nothing is mounted silently.
#![deny(missing_docs)]

use std::cell::RefCell;
use std::rc::Rc;

use click_widget_core::{ConfigError, MountError, MountRegistry, WidgetConfig, DEFAULT_MOUNT_ID};
use tracing::debug;
use wasm_bindgen::prelude::*;

pub mod dom;

use dom::{bind_click, DomHost};

thread_local! {
    static REGISTRY: RefCell<MountRegistry> = RefCell::new(MountRegistry::new());
}

#[cfg(feature = "console-panic")]
#[wasm_bindgen(start)]
/// Initialize console panic hook for better error messages in browser.
pub fn init_console_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Mount a widget as described by `config` into the page's document.
pub fn mount(config: &WidgetConfig) -> Result<(), MountError> {
    let host = DomHost::from_window()?;
    let widget = REGISTRY.with(|registry| registry.borrow_mut().mount(&host, config))?;
    let widget = Rc::new(widget);
    bind_click(&widget)?;
    debug!(mount_id = %widget.mount_id(), "click listener installed");
    Ok(())
}

fn to_js_error(err: &MountError) -> JsError {
    web_sys::console::error_1(&format!("click-widget: {err}").into());
    JsError::new(&err.to_string())
}

/// Mount the widget into the element with id `mount_id`.
///
/// # Errors
///
/// Throws if the element does not exist, already hosts a widget, or the DOM
/// rejects the button.
#[wasm_bindgen]
pub fn initialize(mount_id: &str) -> Result<(), JsError> {
    mount(&WidgetConfig::new(mount_id)).map_err(|e| to_js_error(&e))
}

/// Mount the widget using a host config object `{ mountId?: string }`.
///
/// # Errors
///
/// Throws on an undecodable config, plus every failure of [`initialize`].
#[wasm_bindgen]
pub fn initialize_with_config(config: js_sys::Object) -> Result<(), JsError> {
    let config: WidgetConfig = serde_wasm_bindgen::from_value(config.into())
        .map_err(|e| to_js_error(&MountError::from(ConfigError::Decode(e.to_string()))))?;
    mount(&config).map_err(|e| to_js_error(&e))
}

/// Element id used when the host does not name one.
#[wasm_bindgen]
pub fn default_mount_id() -> String {
    DEFAULT_MOUNT_ID.to_owned()
}
