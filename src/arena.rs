//! Chunked slot storage with stable handles.

use std::mem;
use std::ops::{Index, IndexMut};
use std::vec::Vec;

/// A stable handle to an object stored in a `TypedArena<T>`.
///
/// A handle stays valid until the object it refers to is freed. After that, the block may be
/// handed out again by a later allocation.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Entry {
    chunk_index: usize,
    block_index: usize,
}

enum Block<T> {
    Occupied(T),
    Vacant(Option<Entry>),
}

/// An allocator for a single type of object that addresses objects by `Entry` instead of by
/// reference.
///
/// Objects live in fixed-capacity chunks, so growing the arena never moves an existing object.
/// Freed blocks are threaded onto a free list and reused by subsequent allocations. Linked
/// structures can store `Entry` handles as links and unlink a node with a constant number of
/// writes, without any unsafe code.
///
/// # Examples
///
/// ```
/// use sorted_containers::arena::TypedArena;
///
/// let mut arena = TypedArena::new(16);
///
/// let head = arena.allocate((1, None));
/// let tail = arena.allocate((2, Some(head)));
/// assert_eq!(arena[tail].1, Some(head));
///
/// arena[head].0 += 10;
/// assert_eq!(arena[head].0, 11);
///
/// assert_eq!(arena.free(&tail), (2, Some(head)));
/// assert_eq!(arena.len(), 1);
/// ```
pub struct TypedArena<T> {
    free_head: Option<Entry>,
    chunks: Vec<Vec<Block<T>>>,
    chunk_size: usize,
    len: usize,
    capacity: usize,
}

impl<T> TypedArena<T> {
    fn is_valid_entry(&self, entry: &Entry) -> bool {
        entry.chunk_index < self.chunks.len()
            && entry.block_index < self.chunks[entry.chunk_index].len()
    }

    /// Constructs a new, empty `TypedArena<T>` that grows `chunk_size` blocks at a time.
    ///
    /// # Panics
    ///
    /// Panics if `chunk_size` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_containers::arena::TypedArena;
    ///
    /// let arena: TypedArena<u32> = TypedArena::new(256);
    /// assert!(arena.is_empty());
    /// ```
    pub fn new(chunk_size: usize) -> Self {
        assert!(chunk_size > 0, "Error: chunk size must be positive.");
        TypedArena {
            free_head: None,
            chunks: Vec::new(),
            chunk_size,
            len: 0,
            capacity: 0,
        }
    }

    /// Stores an object in the arena and returns its handle. Vacant blocks are reused before a
    /// new chunk is allocated.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_containers::arena::TypedArena;
    ///
    /// let mut arena = TypedArena::new(256);
    /// let entry = arena.allocate("slot");
    /// assert_eq!(arena[entry], "slot");
    /// ```
    pub fn allocate(&mut self, value: T) -> Entry {
        match self.free_head.take() {
            Some(entry) => {
                let vacant = mem::replace(
                    &mut self.chunks[entry.chunk_index][entry.block_index],
                    Block::Occupied(value),
                );
                match vacant {
                    Block::Vacant(next_free) => self.free_head = next_free,
                    Block::Occupied(_) => panic!("Error: free list points at an occupied block."),
                }
                self.len += 1;
                entry
            },
            None => {
                if self.len == self.capacity {
                    self.chunks.push(Vec::with_capacity(self.chunk_size));
                    self.capacity += self.chunk_size;
                }
                self.len += 1;

                let chunk_index = self.chunks.len() - 1;
                let chunk = &mut self.chunks[chunk_index];
                chunk.push(Block::Occupied(value));
                Entry {
                    chunk_index,
                    block_index: chunk.len() - 1,
                }
            },
        }
    }

    /// Removes an object from the arena and returns it. The handle must not be used afterwards.
    ///
    /// # Panics
    ///
    /// Panics if `entry` does not refer to an occupied block.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_containers::arena::TypedArena;
    ///
    /// let mut arena = TypedArena::new(256);
    /// let entry = arena.allocate(7);
    /// assert_eq!(arena.free(&entry), 7);
    /// assert_eq!(arena.get(&entry), None);
    /// ```
    pub fn free(&mut self, entry: &Entry) -> T {
        if !self.is_valid_entry(entry) {
            panic!("Error: attempting to free invalid block.");
        }
        if let Block::Vacant(_) = self.chunks[entry.chunk_index][entry.block_index] {
            panic!("Error: attempting to free vacant block.");
        }

        let old_block = mem::replace(
            &mut self.chunks[entry.chunk_index][entry.block_index],
            Block::Vacant(self.free_head.take()),
        );
        self.free_head = Some(*entry);
        self.len -= 1;
        match old_block {
            Block::Occupied(value) => value,
            Block::Vacant(_) => unreachable!(),
        }
    }

    /// Returns an immutable reference to an object, or `None` if `entry` does not refer to an
    /// occupied block.
    pub fn get(&self, entry: &Entry) -> Option<&T> {
        if !self.is_valid_entry(entry) {
            return None;
        }
        match self.chunks[entry.chunk_index][entry.block_index] {
            Block::Occupied(ref value) => Some(value),
            Block::Vacant(_) => None,
        }
    }

    /// Returns a mutable reference to an object, or `None` if `entry` does not refer to an
    /// occupied block.
    pub fn get_mut(&mut self, entry: &Entry) -> Option<&mut T> {
        if !self.is_valid_entry(entry) {
            return None;
        }
        match self.chunks[entry.chunk_index][entry.block_index] {
            Block::Occupied(ref mut value) => Some(value),
            Block::Vacant(_) => None,
        }
    }

    /// Returns the number of occupied blocks.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no block is occupied.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<T> Index<Entry> for TypedArena<T> {
    type Output = T;

    fn index(&self, entry: Entry) -> &Self::Output {
        self.get(&entry).expect("Error: entry does not refer to an occupied block.")
    }
}

impl<T> IndexMut<Entry> for TypedArena<T> {
    fn index_mut(&mut self, entry: Entry) -> &mut Self::Output {
        self.get_mut(&entry).expect("Error: entry does not refer to an occupied block.")
    }
}
