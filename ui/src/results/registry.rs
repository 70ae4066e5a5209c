//! One live chart per display slot.
//!
//! Redrawing a slot disposes whatever chart already occupies it before the new
//! one is stored, so a slot never holds two charts and a replaced chart never
//! lingers.

use std::collections::HashMap;

use tracing::trace;

/// Something that owns rendering resources until told to let go of them.
pub trait ChartHandle {
    fn dispose(&mut self);
}

#[derive(Debug)]
pub struct ChartRegistry<H: ChartHandle> {
    slots: HashMap<String, H>,
}

impl<H: ChartHandle> Default for ChartRegistry<H> {
    fn default() -> Self {
        Self {
            slots: HashMap::new(),
        }
    }
}

impl<H: ChartHandle> ChartRegistry<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `handle` for `slot`, disposing the previous occupant first.
    /// Returns whether a previous chart was disposed.
    pub fn set(&mut self, slot: &str, handle: H) -> bool {
        let replaced = match self.slots.remove(slot) {
            Some(mut previous) => {
                previous.dispose();
                trace!(slot, "disposed previous chart");
                true
            }
            None => false,
        };
        self.slots.insert(slot.to_string(), handle);
        replaced
    }

    pub fn get(&self, slot: &str) -> Option<&H> {
        self.slots.get(slot)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;

    struct Tracked {
        id: u32,
        disposed: Rc<Cell<u32>>,
    }

    impl ChartHandle for Tracked {
        fn dispose(&mut self) {
            self.disposed.set(self.disposed.get() + 1);
        }
    }

    fn tracked(id: u32, counter: &Rc<Cell<u32>>) -> Tracked {
        Tracked {
            id,
            disposed: counter.clone(),
        }
    }

    #[test]
    fn first_draw_disposes_nothing() {
        let disposed = Rc::new(Cell::new(0));
        let mut registry = ChartRegistry::new();
        assert!(!registry.set("integrity", tracked(1, &disposed)));
        assert_eq!(disposed.get(), 0);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn redraw_disposes_exactly_one_prior_chart() {
        let old = Rc::new(Cell::new(0));
        let new = Rc::new(Cell::new(0));
        let mut registry = ChartRegistry::new();
        registry.set("integrity", tracked(1, &old));

        assert!(registry.set("integrity", tracked(2, &new)));

        assert_eq!(old.get(), 1);
        assert_eq!(new.get(), 0);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("integrity").map(|p| p.id), Some(2));
    }

    #[test]
    fn slots_are_independent() {
        let disposed = Rc::new(Cell::new(0));
        let mut registry = ChartRegistry::new();
        registry.set("integrity", tracked(1, &disposed));
        registry.set("fairness", tracked(2, &disposed));
        registry.set("fairness", tracked(3, &disposed));

        assert_eq!(disposed.get(), 1);
        assert_eq!(registry.get("integrity").map(|p| p.id), Some(1));
        assert_eq!(registry.get("fairness").map(|p| p.id), Some(3));
    }
}
