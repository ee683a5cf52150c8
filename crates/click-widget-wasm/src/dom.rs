// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! `web-sys` implementations of the core host ports.

use std::rc::Rc;

use click_widget_core::{ButtonSurface, ButtonView, MountError, MountHost, Msg, Widget};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlButtonElement, MouseEvent};

/// Render a JS exception into a `MountError::Host`.
fn host_error(context: &str, err: &JsValue) -> MountError {
    let detail = err
        .as_string()
        .or_else(|| err.dyn_ref::<js_sys::Error>().map(|e| String::from(e.message())))
        .unwrap_or_else(|| format!("{err:?}"));
    MountError::Host(format!("{context}: {detail}"))
}

/// The page's `document`, viewed as a mount host.
pub struct DomHost {
    document: Document,
}

impl DomHost {
    /// Host over an explicit document.
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    /// Host over the global `window.document`.
    pub fn from_window() -> Result<Self, MountError> {
        let window = web_sys::window().ok_or(MountError::HostUnavailable("window"))?;
        let document = window
            .document()
            .ok_or(MountError::HostUnavailable("document"))?;
        Ok(Self::new(document))
    }
}

impl MountHost for DomHost {
    type Surface = DomSurface;

    fn attach(&self, mount_id: &str, view: &ButtonView<'_>) -> Result<DomSurface, MountError> {
        let target = self
            .document
            .get_element_by_id(mount_id)
            .ok_or_else(|| MountError::TargetNotFound(mount_id.to_owned()))?;

        let button = self
            .document
            .create_element(view.tag())
            .map_err(|e| host_error("create_element", &e))?
            .dyn_into::<HtmlButtonElement>()
            .map_err(|_| MountError::Host("created element is not a button".into()))?;
        let surface = DomSurface { button };
        surface.paint(view);

        // Mounting replaces whatever the host left inside the target.
        target.set_text_content(None);
        target
            .append_child(&surface.button)
            .map_err(|e| host_error("append_child", &e))?;
        Ok(surface)
    }
}

/// A live `<button>` element.
pub struct DomSurface {
    button: HtmlButtonElement,
}

impl DomSurface {
    /// The underlying element.
    pub fn element(&self) -> &HtmlButtonElement {
        &self.button
    }
}

impl ButtonSurface for DomSurface {
    fn paint(&self, view: &ButtonView<'_>) {
        if self.button.class_name() != view.class() {
            self.button.set_class_name(view.class());
        }
        self.button.set_text_content(Some(view.label().as_str()));
    }
}

/// Route DOM `click` events on the widget's button into `Widget::dispatch`.
///
/// The listener lives as long as the page; there is no unmount.
pub fn bind_click(widget: &Rc<Widget<DomSurface>>) -> Result<(), MountError> {
    let target = Rc::clone(widget);
    let on_click = Closure::<dyn Fn(MouseEvent)>::new(move |_event: MouseEvent| {
        target.dispatch(Msg::Click);
    });
    widget
        .surface()
        .element()
        .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
        .map_err(|e| host_error("add_event_listener", &e))?;
    on_click.forget();
    Ok(())
}
