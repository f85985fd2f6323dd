//! Open/closed state for detail dialogs.
//!
//! DESIGN
//! ======
//! A dialog holds its own copy of the selected record, so opening and
//! closing never touches the list it was picked from.

#[cfg(test)]
#[path = "dialog_test.rs"]
mod dialog_test;

#[derive(Clone, Debug, PartialEq)]
pub struct Dialog<T> {
    selected: Option<T>,
}

impl<T> Default for Dialog<T> {
    fn default() -> Self {
        Self { selected: None }
    }
}

impl<T> Dialog<T> {
    pub fn open(&mut self, item: T) {
        self.selected = Some(item);
    }

    pub fn close(&mut self) {
        self.selected = None;
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    pub fn selected(&self) -> Option<&T> {
        self.selected.as_ref()
    }
}

/// Legal notices reachable from the footer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LegalNotice {
    Mentions,
    Privacy,
}
