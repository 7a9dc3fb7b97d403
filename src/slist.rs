use indexmap::IndexSet;
use std::{
    hash::{BuildHasher, Hasher},
    mem,
};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ListError {
    #[error("OVERFLOW: memory allocation failed")]
    AllocationFailure,
}

/// Node addresses are already unique `usize`s, so hashing one is just handing
/// it back as `u64`.
struct AddrHasher {
    hash: usize,
}

impl Hasher for AddrHasher {
    fn write(&mut self, _bytes: &[u8]) {
        panic!("Only node addresses are hashed.");
    }

    fn write_usize(&mut self, i: usize) {
        self.hash = i;
    }

    fn finish(&self) -> u64 {
        self.hash as u64
    }
}

#[derive(Clone, Default)]
struct BuildAddrHasher;

impl BuildHasher for BuildAddrHasher {
    type Hasher = AddrHasher;

    fn build_hasher(&self) -> Self::Hasher {
        AddrHasher { hash: 0 }
    }
}

/// Slot storage shared by every list of a [`ListManager`]. Freed slots are
/// recycled before the backing vector grows.
#[derive(Clone)]
struct Mem<T> {
    data: Vec<T>,
    available: IndexSet<usize, BuildAddrHasher>,
    limit: Option<usize>,
}

impl<T> Default for Mem<T> {
    fn default() -> Self {
        Self::with_limit(None)
    }
}

impl<T> Mem<T> {
    fn with_limit(limit: Option<usize>) -> Self {
        Self {
            data: Vec::new(),
            available: IndexSet::with_hasher(BuildAddrHasher),
            limit,
        }
    }

    #[inline]
    fn live(&self) -> usize {
        self.data.len() - self.available.len()
    }

    fn alloc(&mut self, t: T) -> Result<usize, ListError> {
        if self.limit.is_some_and(|limit| self.live() >= limit) {
            return Err(ListError::AllocationFailure);
        }
        if let Some(addr) = self.available.pop() {
            self.data[addr] = t;
            return Ok(addr);
        }
        self.data
            .try_reserve(1)
            .map_err(|_| ListError::AllocationFailure)?;
        let addr = self.data.len();
        self.data.push(t);
        Ok(addr)
    }

    fn assert_not_free(&self, addr: &usize) {
        assert!(!self.available.contains(addr), "Node address is free.");
    }

    fn get(&self, addr: usize) -> &T {
        self.assert_not_free(&addr);
        &self.data[addr]
    }

    fn get_mut(&mut self, addr: usize) -> &mut T {
        self.assert_not_free(&addr);
        &mut self.data[addr]
    }

    fn free(&mut self, addr: usize) {
        self.available.insert(addr);
    }
}

#[derive(Clone)]
struct Node {
    data: i32,
    next: Option<usize>,
}

#[derive(Clone, Copy, Default)]
struct Head {
    first: Option<usize>,
    len: usize,
}

/// Handle to one list owned by a [`ListManager`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListId(usize);

/// What [`ListManager::concatenate`] ended up doing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Concat {
    /// The first list was empty and took over the second one's nodes.
    AdoptedSecond,
    /// Nothing to append.
    SecondEmpty,
    Appended,
    /// Appending a list to itself would close a cycle, so nothing happens.
    SameList,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sorted {
    Empty,
    Done,
}

/// Owns any number of singly linked `i32` lists whose nodes live in a single
/// arena. Moving nodes between lists only rewrites links.
#[derive(Clone, Default)]
pub struct ListManager {
    mem: Mem<Node>,
    heads: Vec<Head>,
}

impl ListManager {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Caps the number of live nodes across all lists. Inserting past the cap
    /// fails the same way an exhausted allocator does.
    pub fn with_node_limit(limit: usize) -> Self {
        Self {
            mem: Mem::with_limit(Some(limit)),
            heads: Vec::new(),
        }
    }

    pub fn add_list(&mut self) -> ListId {
        self.heads.push(Head::default());
        ListId(self.heads.len() - 1)
    }

    #[inline]
    pub fn len(&self, id: ListId) -> usize {
        self.heads[id.0].len
    }

    #[inline]
    pub fn is_empty(&self, id: ListId) -> bool {
        self.heads[id.0].first.is_none()
    }

    #[inline]
    pub fn live_nodes(&self) -> usize {
        self.mem.live()
    }

    pub fn iter(&self, id: ListId) -> Iter<'_> {
        Iter {
            mem: &self.mem,
            next: self.heads[id.0].first,
        }
    }

    #[inline]
    pub fn collect(&self, id: ListId) -> Vec<i32> {
        let mut buf = Vec::with_capacity(self.len(id));
        buf.extend(self.iter(id));
        buf
    }

    /// Prepends `value`. On failure the list is left exactly as it was.
    pub fn insert_at_beginning(&mut self, id: ListId, value: i32) -> Result<(), ListError> {
        let next = self.heads[id.0].first;
        let addr = self.mem.alloc(Node { data: value, next })?;
        let head = &mut self.heads[id.0];
        head.first = Some(addr);
        head.len += 1;
        Ok(())
    }

    pub fn display(&self, id: ListId, label: &str) -> String {
        let mut out = format!("--- {label} ---\n");
        if self.is_empty(id) {
            out.push_str("List is empty.");
            return out;
        }
        out.push_str("Content: ");
        for value in self.iter(id) {
            out.push_str(&value.to_string());
            out.push_str(" -> ");
        }
        out.push_str("NULL");
        out
    }

    fn last_addr(&self, id: ListId) -> Option<usize> {
        let mut addr = self.heads[id.0].first?;
        while let Some(next) = self.mem.get(addr).next {
            addr = next;
        }
        Some(addr)
    }

    /// Moves every node of `second` to the end of `first`, leaving `second`
    /// empty.
    pub fn concatenate(&mut self, first: ListId, second: ListId) -> Concat {
        if first == second {
            return Concat::SameList;
        }
        if self.is_empty(first) {
            self.heads[first.0] = mem::take(&mut self.heads[second.0]);
            return Concat::AdoptedSecond;
        }
        if self.is_empty(second) {
            return Concat::SecondEmpty;
        }
        let taken = mem::take(&mut self.heads[second.0]);
        if let Some(last) = self.last_addr(first) {
            self.mem.get_mut(last).next = taken.first;
        }
        self.heads[first.0].len += taken.len;
        Concat::Appended
    }

    pub fn reverse(&mut self, id: ListId) {
        let mut prev = None;
        let mut current = self.heads[id.0].first;
        while let Some(addr) = current {
            let node = self.mem.get_mut(addr);
            let next = node.next;
            node.next = prev;
            prev = Some(addr);
            current = next;
        }
        self.heads[id.0].first = prev;
    }

    /// Bubble sort that swaps payloads between adjacent nodes. Node identities
    /// and links are never touched.
    pub fn sort(&mut self, id: ListId) -> Sorted {
        let Some(first) = self.heads[id.0].first else {
            return Sorted::Empty;
        };
        loop {
            let mut swapped = false;
            let mut addr = first;
            while let Some(next) = self.mem.get(addr).next {
                let (left, right) = (self.mem.get(addr).data, self.mem.get(next).data);
                if left > right {
                    self.mem.get_mut(addr).data = right;
                    self.mem.get_mut(next).data = left;
                    swapped = true;
                }
                addr = next;
            }
            if !swapped {
                break;
            }
        }
        Sorted::Done
    }

    /// Empties the list and hands its nodes back to the arena. Returns how
    /// many were released.
    pub fn clear(&mut self, id: ListId) -> usize {
        let head = mem::take(&mut self.heads[id.0]);
        let mut current = head.first;
        while let Some(addr) = current {
            current = self.mem.get(addr).next;
            self.mem.free(addr);
        }
        head.len
    }
}

pub struct Iter<'a> {
    mem: &'a Mem<Node>,
    next: Option<usize>,
}

impl Iterator for Iter<'_> {
    type Item = i32;

    fn next(&mut self) -> Option<Self::Item> {
        let addr = self.next?;
        let node = self.mem.get(addr);
        self.next = node.next;
        Some(node.data)
    }
}

#[cfg(test)]
mod tests {
    use super::{Concat, ListError, ListId, ListManager, Sorted};

    impl ListManager {
        /// Builds a list whose payloads read `values` from head to tail.
        fn list_of(&mut self, values: &[i32]) -> ListId {
            let id = self.add_list();
            for value in values.iter().rev() {
                self.insert_at_beginning(id, *value).unwrap();
            }
            id
        }

        /// Addresses in link order, to check that sorting keeps identities.
        fn addrs(&self, id: ListId) -> Vec<usize> {
            let mut buf = vec![];
            let mut current = self.heads[id.0].first;
            while let Some(addr) = current {
                buf.push(addr);
                current = self.mem.get(addr).next;
            }
            buf
        }
    }

    fn seeded() -> (ListManager, ListId, ListId) {
        let mut lists = ListManager::new();
        let first = lists.add_list();
        let second = lists.add_list();
        for value in [20, 5, 45, 10] {
            lists.insert_at_beginning(first, value).unwrap();
        }
        for value in [99, 33, 66] {
            lists.insert_at_beginning(second, value).unwrap();
        }
        (lists, first, second)
    }

    #[test]
    fn test_insert_prepends() {
        let (lists, first, second) = seeded();
        assert_eq!(lists.collect(first), vec![10, 45, 5, 20]);
        assert_eq!(lists.collect(second), vec![66, 33, 99]);
        assert_eq!(lists.len(first), 4);
        assert_eq!(lists.len(second), 3);
    }

    #[test]
    fn test_display() {
        let (mut lists, first, _) = seeded();
        assert_eq!(
            lists.display(first, "List 1"),
            "--- List 1 ---\nContent: 10 -> 45 -> 5 -> 20 -> NULL"
        );
        let empty = lists.add_list();
        assert_eq!(lists.display(empty, "Empty"), "--- Empty ---\nList is empty.");
    }

    #[test]
    fn test_display_tracks_inserts() {
        let mut lists = ListManager::new();
        let id = lists.add_list();
        for n in 1..=6 {
            lists.insert_at_beginning(id, n * 3).unwrap();
            assert_eq!(lists.display(id, "L").matches(" -> ").count(), n as usize);
        }
        lists.clear(id);
        lists.insert_at_beginning(id, 1).unwrap();
        assert_eq!(lists.display(id, "L").matches(" -> ").count(), 1);
    }

    #[test]
    fn test_reference_scenario() {
        let (mut lists, first, second) = seeded();

        assert_eq!(lists.concatenate(first, second), Concat::Appended);
        assert_eq!(lists.collect(first), vec![10, 45, 5, 20, 66, 33, 99]);
        assert!(lists.is_empty(second));
        assert_eq!(lists.len(first), 7);
        assert_eq!(lists.len(second), 0);

        lists.reverse(first);
        assert_eq!(lists.collect(first), vec![99, 33, 66, 20, 5, 45, 10]);

        assert_eq!(lists.sort(first), Sorted::Done);
        assert_eq!(lists.collect(first), vec![5, 10, 20, 33, 45, 66, 99]);
    }

    #[test]
    fn test_concatenate_is_idempotent_once_drained() {
        let (mut lists, first, second) = seeded();
        lists.concatenate(first, second);
        let after_first = lists.collect(first);
        assert_eq!(lists.concatenate(first, second), Concat::SecondEmpty);
        assert_eq!(lists.collect(first), after_first);
        assert_eq!(lists.live_nodes(), 7);
    }

    #[test]
    fn test_concatenate_onto_empty() {
        let mut lists = ListManager::new();
        let first = lists.add_list();
        let second = lists.list_of(&[1, 2, 3]);
        let moved = lists.addrs(second);
        assert_eq!(lists.concatenate(first, second), Concat::AdoptedSecond);
        assert_eq!(lists.collect(first), vec![1, 2, 3]);
        assert_eq!(lists.addrs(first), moved);
        assert_eq!(lists.len(first), 3);
        assert!(lists.is_empty(second));
    }

    #[test]
    fn test_concatenate_both_empty() {
        let mut lists = ListManager::new();
        let first = lists.add_list();
        let second = lists.add_list();
        assert_eq!(lists.concatenate(first, second), Concat::AdoptedSecond);
        assert!(lists.is_empty(first));
        assert!(lists.is_empty(second));
    }

    #[test]
    fn test_concatenate_with_itself() {
        let mut lists = ListManager::new();
        let id = lists.list_of(&[4, 2]);
        assert_eq!(lists.concatenate(id, id), Concat::SameList);
        assert_eq!(lists.collect(id), vec![4, 2]);
    }

    #[test]
    fn test_reverse_twice() {
        let cases: [&[i32]; 5] = [&[], &[7], &[1, 2], &[3, 1, 2], &[9, -4, 0, 9, 12, -4]];
        for values in cases {
            let mut lists = ListManager::new();
            let id = lists.list_of(values);
            lists.reverse(id);
            let mut expected = values.to_vec();
            expected.reverse();
            assert_eq!(lists.collect(id), expected);
            lists.reverse(id);
            assert_eq!(lists.collect(id), values);
        }
    }

    #[test]
    fn test_reverse_allocates_nothing() {
        let mut lists = ListManager::new();
        let id = lists.list_of(&[1, 2, 3, 4]);
        let mut addrs = lists.addrs(id);
        lists.reverse(id);
        addrs.reverse();
        assert_eq!(lists.addrs(id), addrs);
        assert_eq!(lists.live_nodes(), 4);
    }

    #[test]
    fn test_sort_permutes_values_only() {
        let cases: [&[i32]; 5] = [
            &[1],
            &[2, 1],
            &[5, 5, 1, 5],
            &[3, -1, 8, 0, -1, 7, 2],
            &[6, 5, 4, 3, 2, 1],
        ];
        for values in cases {
            let mut lists = ListManager::new();
            let id = lists.list_of(values);
            let addrs = lists.addrs(id);
            assert_eq!(lists.sort(id), Sorted::Done);
            let mut expected = values.to_vec();
            expected.sort();
            assert_eq!(lists.collect(id), expected);
            assert_eq!(lists.addrs(id), addrs);
        }
    }

    #[test]
    fn test_sort_empty() {
        let mut lists = ListManager::new();
        let id = lists.add_list();
        assert_eq!(lists.sort(id), Sorted::Empty);
        assert!(lists.is_empty(id));
    }

    #[test]
    fn test_allocation_failure_leaves_list_intact() {
        let mut lists = ListManager::with_node_limit(2);
        let id = lists.add_list();
        lists.insert_at_beginning(id, 1).unwrap();
        lists.insert_at_beginning(id, 2).unwrap();
        assert_eq!(
            lists.insert_at_beginning(id, 3),
            Err(ListError::AllocationFailure)
        );
        assert_eq!(lists.collect(id), vec![2, 1]);
        assert_eq!(lists.len(id), 2);
    }

    #[test]
    fn test_clear_reuses_slots() {
        let mut lists = ListManager::with_node_limit(3);
        let id = lists.list_of(&[1, 2, 3]);
        let mut freed = lists.addrs(id);
        assert_eq!(lists.clear(id), 3);
        assert!(lists.is_empty(id));
        assert_eq!(lists.live_nodes(), 0);

        for value in [7, 8, 9] {
            lists.insert_at_beginning(id, value).unwrap();
        }
        let mut reused = lists.addrs(id);
        freed.sort();
        reused.sort();
        assert_eq!(freed, reused);
    }

    #[test]
    #[should_panic]
    fn test_freed_address_access() {
        let mut lists = ListManager::new();
        let id = lists.list_of(&[1]);
        let addr = lists.addrs(id)[0];
        lists.clear(id);
        lists.mem.get(addr);
    }
}
