// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! In-memory host document shared by the integration tests.
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use click_widget_core::{ButtonSurface, ButtonView, MountError, MountHost};

/// Snapshot of a rendered button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FakeButton {
    pub tag: String,
    pub class: String,
    pub text: String,
    pub paints: usize,
}

impl FakeButton {
    fn from_view(view: &ButtonView<'_>) -> Self {
        Self {
            tag: view.tag().to_owned(),
            class: view.class().to_owned(),
            text: view.label().as_str().to_owned(),
            paints: 0,
        }
    }
}

/// Elements by id; `None` means the element exists but is empty.
#[derive(Default)]
pub struct FakeDocument {
    targets: RefCell<BTreeMap<String, Option<Rc<RefCell<FakeButton>>>>>,
}

impl FakeDocument {
    pub fn with_targets(ids: &[&str]) -> Self {
        let doc = Self::default();
        for id in ids {
            doc.targets.borrow_mut().insert((*id).to_owned(), None);
        }
        doc
    }

    /// Current button inside `id`, if any.
    pub fn button(&self, id: &str) -> Option<FakeButton> {
        self.targets
            .borrow()
            .get(id)
            .and_then(|slot| slot.as_ref().map(|b| b.borrow().clone()))
    }

    pub fn text(&self, id: &str) -> Option<String> {
        self.button(id).map(|b| b.text)
    }
}

impl MountHost for FakeDocument {
    type Surface = FakeSurface;

    fn attach(&self, mount_id: &str, view: &ButtonView<'_>) -> Result<FakeSurface, MountError> {
        let mut targets = self.targets.borrow_mut();
        let slot = targets
            .get_mut(mount_id)
            .ok_or_else(|| MountError::TargetNotFound(mount_id.to_owned()))?;
        let button = Rc::new(RefCell::new(FakeButton::from_view(view)));
        *slot = Some(Rc::clone(&button));
        Ok(FakeSurface { button })
    }
}

pub struct FakeSurface {
    button: Rc<RefCell<FakeButton>>,
}

impl ButtonSurface for FakeSurface {
    fn paint(&self, view: &ButtonView<'_>) {
        let mut button = self.button.borrow_mut();
        button.class = view.class().to_owned();
        button.text = view.label().as_str().to_owned();
        button.paints += 1;
    }
}
