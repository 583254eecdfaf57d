//! Fixed-capacity entity pools
//!
//! Every game preallocates its bullets, meteors, enemies and explosions at
//! init. Spawning claims an inactive slot, despawning clears the flag; the
//! slot count never changes after construction.

use serde::{Deserialize, Serialize};

/// An entity that lives in a [`Pool`] slot
pub trait Slot {
    fn is_active(&self) -> bool;
    fn set_active(&mut self, active: bool);
}

/// Fixed-size array of entity slots with a round-robin cursor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pool<T> {
    slots: Vec<T>,
    /// Next slot a round-robin spawn starts scanning from
    cursor: usize,
}

impl<T: Slot> Pool<T> {
    /// Build a pool with `capacity` slots, each made inactive by `make`
    pub fn new(capacity: usize, mut make: impl FnMut(usize) -> T) -> Self {
        let slots = (0..capacity)
            .map(|i| {
                let mut slot = make(i);
                slot.set_active(false);
                slot
            })
            .collect();
        Self { slots, cursor: 0 }
    }

    /// Build a pool whose slots start active (initial waves)
    pub fn new_active(capacity: usize, mut make: impl FnMut(usize) -> T) -> Self {
        let slots = (0..capacity)
            .map(|i| {
                let mut slot = make(i);
                slot.set_active(true);
                slot
            })
            .collect();
        Self { slots, cursor: 0 }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of live entities
    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_active()).count()
    }

    pub fn is_full(&self) -> bool {
        self.slots.iter().all(|s| s.is_active())
    }

    /// Claim the first inactive slot in index order.
    ///
    /// The slot is marked active before it is returned, so a second spawn in
    /// the same frame never lands on it. Returns `None` when the pool is full.
    pub fn spawn(&mut self) -> Option<usize> {
        let idx = self.slots.iter().position(|s| !s.is_active());
        match idx {
            Some(i) => {
                self.slots[i].set_active(true);
                Some(i)
            }
            None => {
                log::debug!("pool exhausted ({} slots)", self.slots.len());
                None
            }
        }
    }

    /// Claim the next inactive slot at or after the cursor, wrapping around.
    ///
    /// The cursor then moves past the claimed slot so consecutive spawns cycle
    /// through the pool. Returns `None` when the pool is full.
    pub fn spawn_round_robin(&mut self) -> Option<usize> {
        let len = self.slots.len();
        for offset in 0..len {
            let i = (self.cursor + offset) % len;
            if !self.slots[i].is_active() {
                self.slots[i].set_active(true);
                self.cursor = (i + 1) % len;
                return Some(i);
            }
        }
        log::debug!("pool exhausted ({} slots)", len);
        None
    }

    /// Mark a slot free
    #[inline]
    pub fn despawn(&mut self, idx: usize) {
        self.slots[idx].set_active(false);
    }

    /// Rebuild every slot in place (used on re-init); capacity is unchanged
    pub fn reset(&mut self, mut make: impl FnMut(usize) -> T) {
        for (i, slot) in self.slots.iter_mut().enumerate() {
            *slot = make(i);
            slot.set_active(false);
        }
        self.cursor = 0;
    }

    #[inline]
    pub fn get(&self, idx: usize) -> Option<&T> {
        self.slots.get(idx)
    }

    #[inline]
    pub fn get_mut(&mut self, idx: usize) -> Option<&mut T> {
        self.slots.get_mut(idx)
    }

    /// All slots, live or not
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.slots.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.slots.iter_mut()
    }

    /// Live entities only
    pub fn iter_active(&self) -> impl Iterator<Item = &T> {
        self.slots.iter().filter(|s| s.is_active())
    }

    pub fn iter_active_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.slots.iter_mut().filter(|s| s.is_active())
    }

    /// True when any live entity matches
    pub fn any_active(&self, mut pred: impl FnMut(&T) -> bool) -> bool {
        self.slots.iter().any(|s| s.is_active() && pred(s))
    }
}

impl<T> std::ops::Index<usize> for Pool<T> {
    type Output = T;

    fn index(&self, idx: usize) -> &T {
        &self.slots[idx]
    }
}

impl<T> std::ops::IndexMut<usize> for Pool<T> {
    fn index_mut(&mut self, idx: usize) -> &mut T {
        &mut self.slots[idx]
    }
}

/// Implement [`Slot`] for a struct with a `pub active: bool` field
#[macro_export]
macro_rules! impl_slot {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::sim::pool::Slot for $ty {
                #[inline]
                fn is_active(&self) -> bool {
                    self.active
                }

                #[inline]
                fn set_active(&mut self, active: bool) {
                    self.active = active;
                }
            }
        )+
    };
}
