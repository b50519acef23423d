use crate::arena::{Entry, TypedArena};
use rand::{Rng, SeedableRng, XorShiftRng};
use std::cmp;
use std::fmt;
use std::iter::FromIterator;
use std::ops::{Add, Sub};

/// The maximum number of levels a slot can participate in.
pub const MAX_HEIGHT: usize = 64;

/// The seed used for height generation by `SkipSet::new`.
pub const DEFAULT_SEED: [u32; 4] = [123_123, 0xa8a7_d469, 0x9783_0e05, 0x113b_a7bb];

const CHUNK_SIZE: usize = 64;

// Last slot preceding a probe at every level. `None` stands for the head.
type Predecessors = [Option<Entry>; MAX_HEIGHT];

struct Slot<T> {
    value: T,
    next: Vec<Option<Entry>>,
}

fn natural_less<T: Ord>(left: &T, right: &T) -> bool {
    left < right
}

/// An ordered set implemented by a skiplist whose ordering is given by a comparator.
///
/// A skiplist is a probabilistic data structure that allows for binary search tree operations by
/// maintaining a linked hierarchy of subsequences. The first subsequence is a sorted linked list
/// of every element in the set. Each successive subsequence contains approximately half the
/// elements of the previous one, so searching, insertion, and removal take expected logarithmic
/// time.
///
/// The comparator `less(a, b)` must be a strict weak ordering. Two values are the same member of
/// the set when neither is less than the other, regardless of any other difference between them.
/// Supplying a comparator that is not a strict weak ordering does not cause memory unsafety, but
/// the resulting order and membership are unspecified.
///
/// Slot heights are drawn from a seeded generator owned by the set, so the shape of the skiplist
/// is reproducible for a given sequence of operations.
///
/// # Examples
/// ```
/// use sorted_containers::skiplist::SkipSet;
///
/// let mut set = SkipSet::new(|a: &i32, b: &i32| a < b);
/// assert!(set.add(7));
/// assert!(set.add(5));
/// assert!(set.add(3));
/// assert!(!set.add(7));
///
/// assert_eq!(set.cardinality(), 3);
/// assert!(set.contains_all(&[3, 5, 7]));
/// assert_eq!(set.iter().collect::<Vec<&i32>>(), vec![&3, &5, &7]);
///
/// assert_eq!(set.remove(&5), Some(5));
/// assert_eq!(set.remove(&5), None);
/// ```
pub struct SkipSet<T, F = fn(&T, &T) -> bool> {
    less: F,
    head: [Option<Entry>; MAX_HEIGHT],
    slots: TypedArena<Slot<T>>,
    top: usize,
    len: usize,
    rng: XorShiftRng,
    seed: [u32; 4],
}

impl<T, F> SkipSet<T, F>
where
    F: Fn(&T, &T) -> bool,
{
    /// Constructs a new, empty `SkipSet<T, F>` ordered by `less`.
    ///
    /// # Examples
    /// ```
    /// use sorted_containers::skiplist::SkipSet;
    ///
    /// let mut set = SkipSet::new(|a: &u32, b: &u32| a > b);
    /// assert!(set.is_empty());
    /// set.add(1);
    /// set.add(2);
    /// assert_eq!(set.min(), Some(&2));
    /// ```
    pub fn new(less: F) -> Self {
        Self::with_seed(less, DEFAULT_SEED)
    }

    /// Constructs a new, empty `SkipSet<T, F>` ordered by `less` whose slot heights are drawn
    /// from a generator seeded with `seed`.
    ///
    /// # Panics
    ///
    /// Panics if `seed` is all zeros.
    ///
    /// # Examples
    /// ```
    /// use sorted_containers::skiplist::SkipSet;
    ///
    /// let mut set = SkipSet::with_seed(|a: &u32, b: &u32| a < b, [1, 2, 3, 4]);
    /// set.add(1);
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn with_seed(less: F, seed: [u32; 4]) -> Self {
        SkipSet {
            less,
            head: [None; MAX_HEIGHT],
            slots: TypedArena::new(CHUNK_SIZE),
            top: 0,
            len: 0,
            rng: XorShiftRng::from_seed(seed),
            seed,
        }
    }

    /// Constructs a set from the values of a slice. Values equivalent to an earlier value in the
    /// slice are skipped.
    ///
    /// # Examples
    /// ```
    /// use sorted_containers::skiplist::SkipSet;
    ///
    /// let set = SkipSet::from_slice(|a: &u32, b: &u32| a < b, &[3, 1, 3, 2]);
    /// assert_eq!(set.iter().collect::<Vec<&u32>>(), vec![&1, &2, &3]);
    /// ```
    pub fn from_slice(less: F, values: &[T]) -> Self
    where
        T: Clone,
    {
        let mut ret = Self::new(less);
        ret.extend(values.iter().cloned());
        ret
    }

    // Geometric with p = 0.5: every leading zero bit is one more successful flip.
    fn gen_random_height(&mut self) -> usize {
        cmp::min(self.rng.next_u64().leading_zeros() as usize + 1, MAX_HEIGHT)
    }

    fn next_of(&self, slot: Option<Entry>, level: usize) -> Option<Entry> {
        match slot {
            Some(entry) => self.slots[entry].next[level],
            None => self.head[level],
        }
    }

    fn set_next(&mut self, slot: Option<Entry>, level: usize, target: Option<Entry>) {
        match slot {
            Some(entry) => self.slots[entry].next[level] = target,
            None => self.head[level] = target,
        }
    }

    /// Descends from the highest level in use down to level 0. At every level it walks forward
    /// while the next slot is less than `value`, and records the last slot not skipped past. Also
    /// returns the slot equivalent to `value`, if one is encountered.
    fn search(&self, value: &T) -> (Predecessors, Option<Entry>) {
        let mut preds = [None; MAX_HEIGHT];
        let mut found = None;
        let mut curr = None;

        for level in (0..self.top).rev() {
            let mut next = self.next_of(curr, level);
            while let Some(entry) = next {
                let slot = &self.slots[entry];
                if (self.less)(&slot.value, value) {
                    curr = next;
                    next = slot.next[level];
                } else {
                    if !(self.less)(value, &slot.value) {
                        found = Some(entry);
                    }
                    break;
                }
            }
            preds[level] = curr;
        }

        (preds, found)
    }

    /// Inserts a value into the set. Returns `false` and leaves the set untouched if an
    /// equivalent value is already a member; the existing member is not replaced.
    ///
    /// # Examples
    /// ```
    /// use sorted_containers::skiplist::SkipSet;
    ///
    /// let mut set = SkipSet::new(|a: &(u32, char), b: &(u32, char)| a.0 < b.0);
    /// assert!(set.add((1, 'a')));
    /// assert!(!set.add((1, 'b')));
    /// assert_eq!(set.get(&(1, 'z')), Some(&(1, 'a')));
    /// ```
    pub fn add(&mut self, value: T) -> bool {
        let (preds, found) = self.search(&value);
        if found.is_some() {
            return false;
        }

        let height = self.gen_random_height();
        let next = (0..height)
            .map(|level| self.next_of(preds[level], level))
            .collect();
        let entry = self.slots.allocate(Slot { value, next });
        for (level, pred) in preds.iter().enumerate().take(height) {
            self.set_next(*pred, level, Some(entry));
        }

        self.top = cmp::max(self.top, height);
        self.len += 1;
        trace!("linked slot {:?} at height {}", entry, height);
        true
    }

    /// Removes the member equivalent to `value` from the set and returns it. Returns `None` and
    /// leaves the set untouched if there is no such member.
    ///
    /// # Examples
    /// ```
    /// use sorted_containers::skiplist::SkipSet;
    ///
    /// let mut set = SkipSet::new(|a: &u32, b: &u32| a < b);
    /// set.add(6);
    /// set.add(3);
    /// assert_eq!(set.remove(&3), Some(3));
    /// assert_eq!(set.remove(&3), None);
    /// assert!(!set.contains(&3));
    /// ```
    pub fn remove(&mut self, value: &T) -> Option<T> {
        let (preds, found) = self.search(value);
        let entry = found?;

        let height = self.slots[entry].next.len();
        for (level, pred) in preds.iter().enumerate().take(height) {
            debug_assert_eq!(self.next_of(*pred, level), Some(entry));
            let successor = self.slots[entry].next[level];
            self.set_next(*pred, level, successor);
        }

        while self.top > 0 && self.head[self.top - 1].is_none() {
            self.top -= 1;
        }
        self.len -= 1;
        trace!("unlinked slot {:?} from {} levels", entry, height);
        Some(self.slots.free(&entry).value)
    }

    /// Checks if a value equivalent to `value` is a member of the set.
    ///
    /// # Examples
    /// ```
    /// use sorted_containers::skiplist::SkipSet;
    ///
    /// let mut set = SkipSet::new(|a: &u32, b: &u32| a < b);
    /// set.add(71);
    /// assert!(set.contains(&71));
    /// assert!(!set.contains(&13));
    /// ```
    pub fn contains(&self, value: &T) -> bool {
        self.search(value).1.is_some()
    }

    /// Checks if every value yielded by `values` is a member of the set. Stops at the first
    /// value that is not.
    ///
    /// # Examples
    /// ```
    /// use sorted_containers::skiplist::SkipSet;
    ///
    /// let set = SkipSet::from_slice(|a: &u32, b: &u32| a < b, &[8, 6, 7, 5, 3, 0, 9]);
    /// assert!(set.contains_all(&[8, 6, 7, 5, 3, 0, 9]));
    /// assert!(!set.contains_all(&[8, 6, 11]));
    /// ```
    pub fn contains_all<'a, I>(&self, values: I) -> bool
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        values.into_iter().all(|value| self.contains(value))
    }

    /// Returns the member equivalent to `value`, if any.
    pub fn get(&self, value: &T) -> Option<&T> {
        self.search(value).1.map(|entry| &self.slots[entry].value)
    }

    /// Counts the members of the set by walking the bottom level.
    ///
    /// # Examples
    /// ```
    /// use sorted_containers::skiplist::SkipSet;
    ///
    /// let set = SkipSet::from_slice(|a: &u32, b: &u32| a < b, &[7, 5, 3, 7]);
    /// assert_eq!(set.cardinality(), 3);
    /// ```
    pub fn cardinality(&self) -> usize {
        let mut ret = 0;
        let mut curr = self.head[0];
        while let Some(entry) = curr {
            ret += 1;
            curr = self.slots[entry].next[0];
        }
        ret
    }

    /// Returns the number of members of the set without walking it.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the set has no members.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Removes every member and resets the height generator to its seed.
    ///
    /// # Examples
    /// ```
    /// use sorted_containers::skiplist::SkipSet;
    ///
    /// let mut set = SkipSet::from_slice(|a: &u32, b: &u32| a < b, &[2, 5, 9, 10]);
    /// set.clear();
    /// assert_eq!(set.cardinality(), 0);
    /// ```
    pub fn clear(&mut self) {
        self.head = [None; MAX_HEIGHT];
        self.slots = TypedArena::new(CHUNK_SIZE);
        self.top = 0;
        self.len = 0;
        self.rng = XorShiftRng::from_seed(self.seed);
    }

    /// Returns the smallest member of the set.
    pub fn min(&self) -> Option<&T> {
        self.head[0].map(|entry| &self.slots[entry].value)
    }

    /// Returns the largest member of the set.
    pub fn max(&self) -> Option<&T> {
        let mut curr = None;
        for level in (0..self.top).rev() {
            while let Some(entry) = self.next_of(curr, level) {
                curr = Some(entry);
            }
        }
        curr.map(|entry| &self.slots[entry].value)
    }

    /// Returns the smallest member that is not less than `value`.
    ///
    /// # Examples
    /// ```
    /// use sorted_containers::skiplist::SkipSet;
    ///
    /// let set = SkipSet::from_slice(|a: &u32, b: &u32| a < b, &[1, 3, 5]);
    /// assert_eq!(set.ceil(&2), Some(&3));
    /// assert_eq!(set.ceil(&3), Some(&3));
    /// assert_eq!(set.ceil(&6), None);
    /// ```
    pub fn ceil(&self, value: &T) -> Option<&T> {
        let (preds, _) = self.search(value);
        self.next_of(preds[0], 0).map(|entry| &self.slots[entry].value)
    }

    /// Returns the largest member that is not greater than `value`.
    ///
    /// # Examples
    /// ```
    /// use sorted_containers::skiplist::SkipSet;
    ///
    /// let set = SkipSet::from_slice(|a: &u32, b: &u32| a < b, &[1, 3, 5]);
    /// assert_eq!(set.floor(&0), None);
    /// assert_eq!(set.floor(&4), Some(&3));
    /// assert_eq!(set.floor(&5), Some(&5));
    /// ```
    pub fn floor(&self, value: &T) -> Option<&T> {
        let (preds, found) = self.search(value);
        found.or(preds[0]).map(|entry| &self.slots[entry].value)
    }

    /// Checks if every member of this set is a member of `other`.
    ///
    /// # Examples
    /// ```
    /// use sorted_containers::skiplist::SkipSet;
    ///
    /// let less = |a: &u32, b: &u32| a < b;
    /// let a = SkipSet::from_slice(less, &[1, 2, 3, 5, 7]);
    /// let mut b = SkipSet::from_slice(less, &[3, 5, 7]);
    /// assert!(b.is_subset(&a));
    /// b.add(72);
    /// assert!(!b.is_subset(&a));
    /// ```
    pub fn is_subset(&self, other: &Self) -> bool {
        self.iter().all(|value| other.contains(value))
    }

    /// Checks if every member of `other` is a member of this set.
    pub fn is_superset(&self, other: &Self) -> bool {
        other.is_subset(self)
    }

    /// Checks if both sets have the same members under this set's comparator.
    ///
    /// # Examples
    /// ```
    /// use sorted_containers::skiplist::SkipSet;
    ///
    /// let less = |a: &u32, b: &u32| a < b;
    /// let mut a = SkipSet::new(less);
    /// let mut b = SkipSet::new(less);
    /// assert!(a.equal(&b));
    ///
    /// a.add(10);
    /// assert!(!a.equal(&b));
    /// b.add(10);
    /// assert!(a.equal(&b));
    /// ```
    pub fn equal(&self, other: &Self) -> bool {
        self.cardinality() == other.cardinality() && self.is_subset(other)
    }

    /// Returns an iterator over the set. The iterator yields members in ascending order.
    ///
    /// Each call starts a fresh traversal, so iterating an unmodified set repeatedly yields the
    /// same sequence.
    ///
    /// # Examples
    /// ```
    /// use sorted_containers::skiplist::SkipSet;
    ///
    /// let set = SkipSet::from_slice(|a: &u32, b: &u32| a < b, &[4, 1, 3]);
    ///
    /// let mut iterator = set.iter();
    /// assert_eq!(iterator.next(), Some(&1));
    /// assert_eq!(iterator.next(), Some(&3));
    /// assert_eq!(iterator.next(), Some(&4));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> SkipSetIter<T> {
        SkipSetIter {
            slots: &self.slots,
            current: self.head[0],
            remaining: self.len,
        }
    }
}

impl<T, F> SkipSet<T, F>
where
    T: Clone,
    F: Clone + Fn(&T, &T) -> bool,
{
    fn empty_like(&self) -> Self {
        Self::with_seed(self.less.clone(), self.seed)
    }

    /// Returns a new set with the members of both sets. Where a member of `other` is equivalent
    /// to a member of this set, the member of this set is kept. The `+` operator is implemented
    /// to take the union of two sets.
    ///
    /// # Examples
    /// ```
    /// use sorted_containers::skiplist::SkipSet;
    ///
    /// let less = |a: &u32, b: &u32| a < b;
    /// let n = SkipSet::from_slice(less, &[1, 2]);
    /// let m = SkipSet::from_slice(less, &[2, 3]);
    ///
    /// let union = n.union(&m);
    /// assert_eq!(union.iter().collect::<Vec<&u32>>(), vec![&1, &2, &3]);
    /// ```
    pub fn union(&self, other: &Self) -> Self {
        let mut ret = self.empty_like();
        ret.extend(self.iter().cloned());
        ret.extend(other.iter().cloned());
        ret
    }

    /// Returns a new set with the members found in both sets. The smaller set is walked and
    /// probed against the larger one, and the members of the walked set are kept. When both sets
    /// have the same cardinality, `other` is walked.
    ///
    /// # Examples
    /// ```
    /// use sorted_containers::skiplist::SkipSet;
    ///
    /// let less = |a: &u32, b: &u32| a < b;
    /// let n = SkipSet::from_slice(less, &[1, 2]);
    /// let m = SkipSet::from_slice(less, &[2, 3]);
    ///
    /// let intersection = n.intersect(&m);
    /// assert_eq!(intersection.iter().collect::<Vec<&u32>>(), vec![&2]);
    /// ```
    pub fn intersect(&self, other: &Self) -> Self {
        let (smaller, larger) = if self.cardinality() < other.cardinality() {
            (self, other)
        } else {
            (other, self)
        };

        let mut ret = self.empty_like();
        ret.extend(
            smaller
                .iter()
                .filter(|value| larger.contains(value))
                .cloned(),
        );
        ret
    }

    /// Returns a new set with the members of this set that are not members of `other`. The `-`
    /// operator is implemented to take the difference of two sets.
    ///
    /// # Examples
    /// ```
    /// use sorted_containers::skiplist::SkipSet;
    ///
    /// let less = |a: &u32, b: &u32| a < b;
    /// let n = SkipSet::from_slice(less, &[1, 2, 3]);
    /// let m = SkipSet::from_slice(less, &[1, 3, 4, 5, 6, 99]);
    ///
    /// let difference = n.difference(&m);
    /// assert_eq!(difference.iter().collect::<Vec<&u32>>(), vec![&2]);
    /// ```
    pub fn difference(&self, other: &Self) -> Self {
        let mut ret = self.empty_like();
        ret.extend(
            self.iter()
                .filter(|value| !other.contains(value))
                .cloned(),
        );
        ret
    }

    /// Returns a new set with the members that belong to exactly one of the two sets.
    ///
    /// # Examples
    /// ```
    /// use sorted_containers::skiplist::SkipSet;
    ///
    /// let less = |a: &u32, b: &u32| a < b;
    /// let n = SkipSet::from_slice(less, &[1, 2, 3, 45]);
    /// let m = SkipSet::from_slice(less, &[1, 3, 4, 5, 6, 99]);
    ///
    /// let symmetric_difference = n.symmetric_difference(&m);
    /// assert_eq!(
    ///     symmetric_difference.iter().collect::<Vec<&u32>>(),
    ///     vec![&2, &4, &5, &6, &45, &99],
    /// );
    /// ```
    pub fn symmetric_difference(&self, other: &Self) -> Self {
        self.difference(other).union(&other.difference(self))
    }
}

impl<T> SkipSet<T>
where
    T: Ord,
{
    /// Constructs a new, empty `SkipSet<T>` ordered by `T`'s `Ord` implementation.
    ///
    /// # Examples
    /// ```
    /// use sorted_containers::skiplist::SkipSet;
    ///
    /// let mut set = SkipSet::ordered();
    /// set.add("b");
    /// set.add("a");
    /// assert_eq!(set.min(), Some(&"a"));
    /// ```
    pub fn ordered() -> Self {
        Self::new(natural_less)
    }
}

impl<T, F> Clone for SkipSet<T, F>
where
    T: Clone,
    F: Clone + Fn(&T, &T) -> bool,
{
    /// Reinserts every member, in ascending order, into a fresh set with the same comparator.
    /// The new set shares no slots with this one.
    fn clone(&self) -> Self {
        let mut ret = self.empty_like();
        ret.extend(self.iter().cloned());
        ret
    }
}

impl<T, F> PartialEq for SkipSet<T, F>
where
    F: Fn(&T, &T) -> bool,
{
    fn eq(&self, other: &Self) -> bool {
        self.equal(other)
    }
}

impl<T, F> fmt::Debug for SkipSet<T, F>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let iter = SkipSetIter {
            slots: &self.slots,
            current: self.head[0],
            remaining: self.len,
        };
        f.debug_set().entries(iter).finish()
    }
}

impl<T> Default for SkipSet<T>
where
    T: Ord,
{
    fn default() -> Self {
        Self::ordered()
    }
}

impl<T, F> Extend<T> for SkipSet<T, F>
where
    F: Fn(&T, &T) -> bool,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

impl<T> FromIterator<T> for SkipSet<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut ret = Self::ordered();
        ret.extend(iter);
        ret
    }
}

impl<'a, 'b, T, F> Add<&'b SkipSet<T, F>> for &'a SkipSet<T, F>
where
    T: Clone,
    F: Clone + Fn(&T, &T) -> bool,
{
    type Output = SkipSet<T, F>;

    fn add(self, other: &'b SkipSet<T, F>) -> SkipSet<T, F> {
        self.union(other)
    }
}

impl<'a, 'b, T, F> Sub<&'b SkipSet<T, F>> for &'a SkipSet<T, F>
where
    T: Clone,
    F: Clone + Fn(&T, &T) -> bool,
{
    type Output = SkipSet<T, F>;

    fn sub(self, other: &'b SkipSet<T, F>) -> SkipSet<T, F> {
        self.difference(other)
    }
}

impl<T, F> IntoIterator for SkipSet<T, F> {
    type Item = T;
    type IntoIter = SkipSetIntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        SkipSetIntoIter {
            current: self.head[0],
            slots: self.slots,
        }
    }
}

impl<'a, T, F> IntoIterator for &'a SkipSet<T, F>
where
    F: Fn(&T, &T) -> bool,
{
    type Item = &'a T;
    type IntoIter = SkipSetIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An owning iterator for `SkipSet<T, F>`.
///
/// This iterator traverses the members of a set in ascending order and yields owned values.
pub struct SkipSetIntoIter<T> {
    slots: TypedArena<Slot<T>>,
    current: Option<Entry>,
}

impl<T> Iterator for SkipSetIntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.current?;
        let slot = self.slots.free(&entry);
        self.current = slot.next[0];
        Some(slot.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.slots.len(), Some(self.slots.len()))
    }
}

impl<T> ExactSizeIterator for SkipSetIntoIter<T> {}

/// An iterator for `SkipSet<T, F>`.
///
/// This iterator traverses the members of a set in ascending order and yields immutable
/// references.
pub struct SkipSetIter<'a, T: 'a> {
    slots: &'a TypedArena<Slot<T>>,
    current: Option<Entry>,
    remaining: usize,
}

impl<'a, T: 'a> Iterator for SkipSetIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.current?;
        let slot = &self.slots[entry];
        self.current = slot.next[0];
        self.remaining -= 1;
        Some(&slot.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T: 'a> ExactSizeIterator for SkipSetIter<'a, T> {}

#[cfg(test)]
mod tests {
    use super::{SkipSet, MAX_HEIGHT};

    fn less(a: &u32, b: &u32) -> bool {
        a < b
    }

    fn empty() -> SkipSet<u32> {
        SkipSet::new(less)
    }

    fn set_of(values: &[u32]) -> SkipSet<u32> {
        SkipSet::from_slice(less, values)
    }

    fn assert_levels_ascending(set: &SkipSet<u32>) {
        for level in 0..MAX_HEIGHT {
            let mut prev: Option<u32> = None;
            let mut curr = set.head[level];
            while let Some(entry) = curr {
                let slot = &set.slots[entry];
                assert!(slot.next.len() > level);
                if let Some(prev) = prev {
                    assert!(prev < slot.value);
                }
                prev = Some(slot.value);
                curr = slot.next[level];
            }
            if level >= set.top {
                assert_eq!(set.head[level], None);
            }
        }
    }

    #[test]
    fn test_len_empty() {
        let set = empty();
        assert_eq!(set.len(), 0);
        assert_eq!(set.cardinality(), 0);
        assert!(set.is_empty());
    }

    #[test]
    fn test_min_max_empty() {
        let set: SkipSet<u32> = SkipSet::ordered();
        assert_eq!(set.min(), None);
        assert_eq!(set.max(), None);
        assert_eq!(set.ceil(&0), None);
        assert_eq!(set.floor(&0), None);
    }

    #[test]
    fn test_add() {
        let mut set = empty();
        assert!(set.add(1));
        assert!(set.contains(&1));
        assert_levels_ascending(&set);
    }

    #[test]
    fn test_add_duplicate() {
        let set = set_of(&[7, 5, 3, 7]);
        assert_eq!(set.cardinality(), 3);
        assert_eq!(set.len(), 3);
        assert!(set.contains(&7) && set.contains(&5) && set.contains(&3));
        assert!(!set.contains(&4));
    }

    #[test]
    fn test_add_keeps_first_equivalent() {
        let mut set = SkipSet::new(|a: &(u32, u32), b: &(u32, u32)| a.0 < b.0);
        assert!(set.add((1, 10)));
        assert!(!set.add((1, 20)));
        assert_eq!(set.len(), 1);
        assert_eq!(set.get(&(1, 0)), Some(&(1, 10)));
    }

    #[test]
    fn test_remove() {
        let mut set = set_of(&[6, 3, 1]);
        assert_eq!(set.remove(&3), Some(3));
        assert_eq!(set.cardinality(), 2);
        assert!(set.contains(&6) && set.contains(&1));

        set.remove(&6);
        set.remove(&1);
        assert_eq!(set.cardinality(), 0);
        assert_eq!(set.top, 0);
    }

    #[test]
    fn test_remove_missing() {
        let mut set = set_of(&[1, 2]);
        assert_eq!(set.remove(&3), None);
        assert_eq!(set.len(), 2);
        assert_levels_ascending(&set);
    }

    #[test]
    fn test_contains_after_readd() {
        let mut set = empty();
        set.add(71);
        assert!(set.contains(&71));
        set.remove(&71);
        assert!(!set.contains(&71));

        set.add(13);
        set.add(7);
        set.add(1);
        assert!(set.contains_all(&[13, 7, 1]));
    }

    #[test]
    fn test_clear() {
        let mut set = set_of(&[2, 5, 9, 10]);
        set.clear();
        assert_eq!(set.cardinality(), 0);
        assert!(set.is_empty());
        assert!(set.add(9));
        assert_eq!(set.cardinality(), 1);
    }

    #[test]
    fn test_heights_reproducible() {
        let mut first = empty();
        let mut second = empty();
        let heights: Vec<usize> = (0..32).map(|_| first.gen_random_height()).collect();
        assert!(heights.iter().all(|height| *height >= 1 && *height <= MAX_HEIGHT));
        assert_eq!(
            heights,
            (0..32).map(|_| second.gen_random_height()).collect::<Vec<usize>>(),
        );

        first.clear();
        assert_eq!(first.gen_random_height(), heights[0]);
    }

    #[test]
    fn test_min_max() {
        let set = set_of(&[3, 5, 1]);
        assert_eq!(set.min(), Some(&1));
        assert_eq!(set.max(), Some(&5));
    }

    #[test]
    fn test_floor_ceil() {
        let set = set_of(&[1, 3, 5]);

        assert_eq!(set.floor(&0), None);
        assert_eq!(set.floor(&2), Some(&1));
        assert_eq!(set.floor(&4), Some(&3));
        assert_eq!(set.floor(&6), Some(&5));

        assert_eq!(set.ceil(&0), Some(&1));
        assert_eq!(set.ceil(&2), Some(&3));
        assert_eq!(set.ceil(&4), Some(&5));
        assert_eq!(set.ceil(&6), None);
    }

    #[test]
    fn test_subset_superset() {
        let a = set_of(&[9, 5, 2, 1, 11]);
        let mut b = set_of(&[5, 2, 11]);
        assert!(b.is_subset(&a));
        assert!(a.is_superset(&b));

        b.add(42);
        assert!(!b.is_subset(&a));
        assert!(!a.is_superset(&b));
    }

    #[test]
    fn test_union() {
        let a = empty();
        let b = set_of(&[1, 2, 3, 4, 5]);
        let c = a.union(&b);
        assert_eq!(c.cardinality(), 5);

        let d = set_of(&[10, 14, 0]);
        let e = &c + &d;
        assert_eq!(e.cardinality(), 8);

        let f = set_of(&[14, 3]);
        let g = f.union(&e);
        assert_eq!(g.cardinality(), 8);
        assert_eq!(
            g.iter().collect::<Vec<&u32>>(),
            vec![&0, &1, &2, &3, &4, &5, &10, &14],
        );
    }

    #[test]
    fn test_intersect() {
        let mut a = set_of(&[1, 3, 5, 2, 4, 6]);
        let mut b = empty();
        assert_eq!(a.intersect(&b).cardinality(), 0);

        a.add(10);
        b.add(10);
        let d = a.intersect(&b);
        assert_eq!(d.cardinality(), 1);
        assert!(d.contains(&10));
    }

    #[test]
    fn test_intersect_keeps_smaller_members() {
        let by_key = |a: &(u32, char), b: &(u32, char)| a.0 < b.0;
        let small = SkipSet::from_slice(by_key, &[(1, 's')]);
        let large = SkipSet::from_slice(by_key, &[(1, 'l'), (2, 'l')]);
        assert_eq!(large.intersect(&small).get(&(1, ' ')), Some(&(1, 's')));
        assert_eq!(small.intersect(&large).get(&(1, ' ')), Some(&(1, 's')));
    }

    #[test]
    fn test_difference() {
        let a = set_of(&[1, 2, 3]);
        let b = set_of(&[1, 3, 4, 5, 6, 99]);
        let c = &a - &b;
        assert_eq!(c.cardinality(), 1);
        assert!(c.contains(&2));
    }

    #[test]
    fn test_symmetric_difference() {
        let a = set_of(&[1, 2, 3, 45]);
        let b = set_of(&[1, 3, 4, 5, 6, 99]);
        let c = a.symmetric_difference(&b);
        assert_eq!(c.cardinality(), 6);
        assert!(c.contains_all(&[2, 45, 4, 5, 6, 99]));
        assert!(!c.contains(&1) && !c.contains(&3));
    }

    #[test]
    fn test_equal() {
        let mut a = empty();
        let mut b = empty();
        assert!(a.equal(&b));

        a.add(10);
        assert!(!a.equal(&b));
        b.add(10);
        assert!(a.equal(&b));

        b.add(8);
        b.add(3);
        b.add(47);
        assert!(a != b);

        a.add(47);
        a.add(3);
        a.add(8);
        assert!(a == b);
    }

    #[test]
    fn test_clone() {
        let mut a = set_of(&[1, 2]);
        let b = a.clone();
        assert!(a.equal(&b));

        a.add(3);
        assert!(!a.equal(&b));
        assert_eq!(b.cardinality(), 2);

        let mut c = a.clone();
        c.remove(&1);
        assert!(!a.equal(&c));
        assert!(a.contains(&1));
    }

    #[test]
    fn test_iter() {
        let a = set_of(&[1, 5, 3, 4]);
        assert_eq!(a.iter().len(), 4);
        assert_eq!(a.iter().collect::<Vec<&u32>>(), vec![&1, &3, &4, &5]);

        let mut b = empty();
        for value in &a {
            b.add(*value);
        }
        assert!(a.equal(&b));
    }

    #[test]
    fn test_into_iter() {
        let set = set_of(&[1, 5, 3]);
        assert_eq!(set.into_iter().collect::<Vec<u32>>(), vec![1, 3, 5]);
    }

    #[test]
    fn test_from_iter_and_debug() {
        let set: SkipSet<i32> = vec![3, -1, 2, 3].into_iter().collect();
        assert_eq!(format!("{:?}", set), "{-1, 2, 3}");
    }

    #[test]
    fn test_reverse_comparator() {
        let set = SkipSet::from_slice(|a: &u32, b: &u32| a > b, &[1, 3, 2]);
        assert_eq!(set.iter().collect::<Vec<&u32>>(), vec![&3, &2, &1]);
        assert_eq!(set.min(), Some(&3));
        assert_eq!(set.max(), Some(&1));
    }
}
