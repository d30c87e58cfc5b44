//! Per-name quantity accumulator.

use std::collections::HashMap;

/// Name and quantity reported when a tally has no entries.
pub const NO_DATA: (&str, u64) = ("N/A", 0);

/// Running per-key quantity accumulator.
///
/// Keys are unique. The tally also remembers the order in which each key was
/// first recorded, and [`ItemTally::top`] uses that order to break ties: the
/// earliest-seen key among those sharing the maximum wins. Results are therefore
/// reproducible for the same input sequence.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ItemTally {
    entries: Vec<(String, u64)>,
    index: HashMap<String, usize>,
}

impl ItemTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `quantity` to the running total for `name`.
    pub fn record(&mut self, name: &str, quantity: u64) {
        match self.index.get(name) {
            Some(&pos) => {
                let total = &mut self.entries[pos].1;
                *total = total.saturating_add(quantity);
            }
            None => {
                self.index.insert(name.to_owned(), self.entries.len());
                self.entries.push((name.to_owned(), quantity));
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<u64> {
        self.index.get(name).map(|&pos| self.entries[pos].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries.iter().map(|(name, qty)| (name.as_str(), *qty))
    }

    /// The entry with the highest quantity; ties go to the first-seen key.
    pub fn top(&self) -> Option<(&str, u64)> {
        let mut best: Option<(&str, u64)> = None;
        for (name, qty) in self.iter() {
            match best {
                Some((_, best_qty)) if qty <= best_qty => {}
                _ => best = Some((name, qty)),
            }
        }
        best
    }
}

impl<'a> FromIterator<(&'a str, u64)> for ItemTally {
    fn from_iter<I: IntoIterator<Item = (&'a str, u64)>>(iter: I) -> Self {
        let mut tally = ItemTally::new();
        for (name, qty) in iter {
            tally.record(name, qty);
        }
        tally
    }
}
