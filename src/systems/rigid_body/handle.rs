//! Stable body handles
//!
//! World storage is a dense array that shifts on removal, so raw slot indices
//! go stale. Handles point into a generation-counted table instead: the table
//! tracks which slot each live handle currently occupies, and bumping the
//! generation on release makes every old copy of the handle detectably stale.
//! Each handle also carries the issuing world's id, so it never resolves in
//! another world.

use std::sync::atomic::{AtomicU32, Ordering};

use serde::Serialize;

// Bit layout of `BodyHandle::to_bits`: world | generation | index.
// 16 + 21 + 16 = 53 bits, so the value is exact as a JS number.
const INDEX_BITS: u32 = 16;
const GENERATION_BITS: u32 = 21;
const WORLD_BITS: u32 = 16;

const INDEX_LIMIT: usize = 1 << INDEX_BITS;
/// Highest generation a slot may reach before it is retired
pub(crate) const MAX_GENERATION: u32 = (1 << GENERATION_BITS) - 1;
const MAX_WORLD_ID: u32 = (1 << WORLD_BITS) - 1;

/// Process-unique identity of a world (used as the body's back-reference).
///
/// Ids cycle through `1..=65535`; 0 is never issued.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct WorldId(u32);

static NEXT_WORLD_ID: AtomicU32 = AtomicU32::new(1);

impl WorldId {
    pub(crate) fn next() -> Self {
        let raw = NEXT_WORLD_ID.fetch_add(1, Ordering::Relaxed);
        WorldId(raw.wrapping_sub(1) % MAX_WORLD_ID + 1)
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

/// Reference to a body stored in a world
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct BodyHandle {
    world: u32,
    index: u32,
    generation: u32,
}

impl BodyHandle {
    /// Never issued by a world
    pub const NULL: BodyHandle = BodyHandle { world: 0, index: 0, generation: 0 };

    #[inline]
    pub fn is_null(self) -> bool {
        self.generation == 0
    }

    /// Id of the world that issued this handle
    pub fn world(self) -> WorldId {
        WorldId(self.world)
    }

    /// Pack into 53 bits (world, generation, index from high to low).
    /// `0` is the null handle.
    pub fn to_bits(self) -> u64 {
        ((self.world as u64) << (GENERATION_BITS + INDEX_BITS))
            | ((self.generation as u64) << INDEX_BITS)
            | self.index as u64
    }

    pub fn from_bits(bits: u64) -> Self {
        BodyHandle {
            world: ((bits >> (GENERATION_BITS + INDEX_BITS)) & MAX_WORLD_ID as u64) as u32,
            generation: ((bits >> INDEX_BITS) & MAX_GENERATION as u64) as u32,
            index: (bits & (INDEX_LIMIT as u64 - 1)) as u32,
        }
    }
}

#[derive(Clone, Copy, Debug)]
struct HandleEntry {
    generation: u32,
    slot: Option<usize>,
}

/// Handle -> storage slot table with a free-list
#[derive(Debug)]
pub(crate) struct HandleTable {
    world: WorldId,
    entries: Vec<HandleEntry>,
    free: Vec<u32>,
    live: usize,
}

impl HandleTable {
    pub(crate) fn with_capacity(world: WorldId, capacity: usize) -> Self {
        Self {
            world,
            entries: Vec::with_capacity(capacity),
            free: Vec::with_capacity(capacity),
            live: 0,
        }
    }

    pub(crate) fn live(&self) -> usize {
        self.live
    }

    fn handle(&self, index: u32, generation: u32) -> BodyHandle {
        BodyHandle { world: self.world.get(), index, generation }
    }

    /// Issue a handle for a body stored at `slot`.
    ///
    /// `None` once every table index has been retired.
    pub(crate) fn allocate(&mut self, slot: usize) -> Option<BodyHandle> {
        let index = match self.free.pop() {
            Some(index) => index,
            None if self.entries.len() < INDEX_LIMIT => {
                self.entries.push(HandleEntry { generation: 1, slot: None });
                (self.entries.len() - 1) as u32
            }
            None => return None,
        };
        let entry = &mut self.entries[index as usize];
        entry.slot = Some(slot);
        let generation = entry.generation;
        self.live += 1;
        Some(self.handle(index, generation))
    }

    /// Current slot of a live handle issued by this table
    pub(crate) fn slot(&self, handle: BodyHandle) -> Option<usize> {
        if handle.world != self.world.get() {
            return None;
        }
        let entry = self.entries.get(handle.index as usize)?;
        if entry.generation != handle.generation {
            return None;
        }
        entry.slot
    }

    /// Point a live handle at a new slot (after a shift)
    pub(crate) fn relocate(&mut self, handle: BodyHandle, slot: usize) {
        if handle.world != self.world.get() {
            return;
        }
        if let Some(entry) = self.entries.get_mut(handle.index as usize) {
            if entry.generation == handle.generation {
                entry.slot = Some(slot);
            }
        }
    }

    /// Invalidate a handle. Returns false if it was already stale.
    pub(crate) fn release(&mut self, handle: BodyHandle) -> bool {
        if self.slot(handle).is_none() {
            return false;
        }
        self.retire_or_free(handle.index);
        self.live -= 1;
        true
    }

    /// Invalidate every live handle (world clear / destroy)
    pub(crate) fn release_all(&mut self) {
        for index in 0..self.entries.len() {
            if self.entries[index].slot.is_some() {
                self.retire_or_free(index as u32);
            }
        }
        self.live = 0;
    }

    // A slot at the last generation is retired so handle bits never wrap
    fn retire_or_free(&mut self, index: u32) {
        let entry = &mut self.entries[index as usize];
        entry.slot = None;
        if entry.generation < MAX_GENERATION {
            entry.generation += 1;
            self.free.push(index);
        }
    }
}
