use std::collections::HashMap;
use std::fmt::Debug;

use crate::{Error, Result};

/// Number of slots allocated by an empty queue
const INITIAL_CAPACITY: usize = 4;

/// Source of the ordering key and the name of every heap item
///
/// The heap stores only item handles. Keys are read through this trait on
/// every comparison, so they may change between calls; [`IndexedMinHeap::rebuild`]
/// restores the heap order afterwards.
pub trait HeapKeys<V> {
    type Priority: Ord;

    /// Current key of an item
    fn priority(&self, item: V) -> Self::Priority;

    /// Name of an item, or `None` if the item is unknown
    fn label(&self, item: V) -> Option<&str>;
}

/// An array-backed binary min-heap with a name lookup index
///
/// Parents never compare greater than their children. Equal keys are never
/// swapped, so the relative order of equal items is unspecified.
#[derive(Debug)]
pub struct IndexedMinHeap<V>
where
    V: Copy + Eq + Debug,
{
    /// Heap-ordered item handles
    items: Vec<V>,

    /// Item name -> item, for every item still in the heap
    index: HashMap<String, V>,
}

impl<V> IndexedMinHeap<V>
where
    V: Copy + Eq + Debug,
{
    /// Creates a new empty priority queue
    pub fn new() -> Self {
        IndexedMinHeap {
            items: Vec::with_capacity(INITIAL_CAPACITY),
            index: HashMap::new(),
        }
    }

    /// Returns true if the priority queue is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of elements in the priority queue
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns the number of slots currently allocated
    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    /// The items in heap order
    pub fn as_slice(&self) -> &[V] {
        &self.items
    }

    /// Returns the root without removing it
    pub fn peek(&self) -> Option<V> {
        self.items.first().copied()
    }

    /// Looks up a queued item by name
    pub fn find_by_name(&self, name: &str) -> Option<V> {
        self.index.get(name).copied()
    }

    /// Removes every item
    pub fn clear(&mut self) {
        self.items.clear();
        self.index.clear();
    }

    /// Inserts an item and bubbles it up into position
    pub fn insert<K>(&mut self, item: V, keys: &K) -> Result<()>
    where
        K: HeapKeys<V>,
    {
        let name = keys
            .label(item)
            .ok_or_else(|| Error::InvalidVertex(format!("{:?}", item)))?;
        if name.is_empty() {
            return Err(Error::EmptyVertexName);
        }
        if self.index.contains_key(name) {
            return Err(Error::DuplicateVertex(name.to_string()));
        }

        if self.items.len() == self.items.capacity() {
            let grow_by = self.items.capacity().max(INITIAL_CAPACITY);
            self.items.reserve_exact(grow_by);
        }

        self.index.insert(name.to_string(), item);
        self.items.push(item);
        self.bubble_up(self.items.len() - 1, keys);
        Ok(())
    }

    /// Removes and returns the item with the smallest key
    pub fn extract_min<K>(&mut self, keys: &K) -> Result<V>
    where
        K: HeapKeys<V>,
    {
        if self.items.is_empty() {
            return Err(Error::EmptyQueue);
        }

        let last = self.items.len() - 1;
        self.items.swap(0, last);
        let min = self.items.pop().ok_or(Error::EmptyQueue)?;
        if self.items.len() > 1 {
            self.bubble_down(0, keys);
        }

        if let Some(name) = keys.label(min) {
            self.index.remove(name);
        }
        Ok(min)
    }

    /// Restores the heap order over all items after keys have changed
    pub fn rebuild<K>(&mut self, keys: &K)
    where
        K: HeapKeys<V>,
    {
        let Some(last_parent) = self.last_parent() else {
            return;
        };
        for i in (0..=last_parent).rev() {
            self.bubble_down(i, keys);
        }
    }

    /// Returns true if every parent's key is <= the keys of its children
    pub fn is_heap<K>(&self, keys: &K) -> bool
    where
        K: HeapKeys<V>,
    {
        (1..self.items.len()).all(|i| {
            keys.priority(self.items[parent_index(i)]) <= keys.priority(self.items[i])
        })
    }

    fn last_parent(&self) -> Option<usize> {
        if self.items.len() < 2 {
            None
        } else {
            Some(parent_index(self.items.len() - 1))
        }
    }

    fn bubble_up<K>(&mut self, mut i: usize, keys: &K)
    where
        K: HeapKeys<V>,
    {
        while i > 0 {
            let parent = parent_index(i);
            if keys.priority(self.items[i]) >= keys.priority(self.items[parent]) {
                break;
            }
            self.items.swap(i, parent);
            i = parent;
        }
    }

    fn bubble_down<K>(&mut self, mut i: usize, keys: &K)
    where
        K: HeapKeys<V>,
    {
        let len = self.items.len();
        loop {
            let left = left_child_index(i);
            if left >= len {
                break;
            }
            let right = left + 1;

            let current = keys.priority(self.items[i]);
            let left_key = keys.priority(self.items[left]);
            let right_key = (right < len).then(|| keys.priority(self.items[right]));

            let left_ok = current <= left_key;
            let right_ok = right_key.as_ref().map_or(true, |r| current <= *r);
            if left_ok && right_ok {
                break;
            }

            // Swap with the smaller child, preferring the left one on ties
            let child = match right_key {
                Some(r) if r < left_key => right,
                _ => left,
            };
            self.items.swap(i, child);
            i = child;
        }
    }
}

impl<V> Default for IndexedMinHeap<V>
where
    V: Copy + Eq + Debug,
{
    fn default() -> Self {
        IndexedMinHeap::new()
    }
}

fn parent_index(i: usize) -> usize {
    (i - 1) / 2
}

fn left_child_index(i: usize) -> usize {
    2 * i + 1
}
