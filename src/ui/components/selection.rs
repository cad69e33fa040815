// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jourdon Floyd

//! Checked rows of a table, keyed by name.

use std::collections::BTreeSet;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    names: BTreeSet<String>,
}

impl Selection {
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn toggle(&mut self, name: &str) {
        if !self.names.remove(name) {
            self.names.insert(name.to_string());
        }
    }

    pub fn select_all<'a>(&mut self, names: impl IntoIterator<Item = &'a str>) {
        self.names.extend(names.into_iter().map(str::to_string));
    }

    pub fn clear(&mut self) {
        self.names.clear();
    }

    /// Forget names that are no longer shown.
    pub fn retain_present<'a>(&mut self, present: impl IntoIterator<Item = &'a str>) {
        let present: BTreeSet<&str> = present.into_iter().collect();
        self.names.retain(|n| present.contains(n.as_str()));
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Selected names in sorted order.
    pub fn names(&self) -> Vec<String> {
        self.names.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_membership() {
        let mut sel = Selection::default();
        sel.toggle("oats");
        assert!(sel.contains("oats"));
        sel.toggle("oats");
        assert!(sel.is_empty());
    }

    #[test]
    fn retain_drops_vanished_rows() {
        let mut sel = Selection::default();
        sel.select_all(["oats", "rice", "milk"]);

        sel.retain_present(["rice", "bread"]);

        assert_eq!(sel.names(), vec!["rice"]);
    }
}
