//! Single-expansion selector for accordion panels.

#[cfg(test)]
#[path = "accordion_test.rs"]
mod accordion_test;

/// At most one panel expanded at a time, keyed by a stable panel id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SingleExpansion<Id> {
    expanded: Option<Id>,
}

impl<Id> Default for SingleExpansion<Id> {
    fn default() -> Self {
        Self { expanded: None }
    }
}

impl<Id: PartialEq> SingleExpansion<Id> {
    pub fn new(expanded: Option<Id>) -> Self {
        Self { expanded }
    }

    pub fn expanded(&self) -> Option<&Id> {
        self.expanded.as_ref()
    }

    pub fn is_expanded(&self, id: &Id) -> bool {
        self.expanded.as_ref() == Some(id)
    }

    /// Header click: expand `id`, or collapse everything if it is already
    /// the expanded panel.
    pub fn toggle(&mut self, id: Id) {
        if self.is_expanded(&id) {
            self.expanded = None;
        } else {
            self.expanded = Some(id);
        }
    }

    pub fn collapse(&mut self) {
        self.expanded = None;
    }
}
