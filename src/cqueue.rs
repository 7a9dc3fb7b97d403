use std::fmt;
use thiserror::Error;

pub const DEFAULT_CAPACITY: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Violation {
    Full,
    Empty,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::Full => write!(f, "full"),
            Violation::Empty => write!(f, "empty"),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueueError {
    #[error("queue is {0}")]
    CapacityViolation(Violation),
    #[error("a {policy:?} queue can't be built with capacity {capacity}")]
    InvalidCapacity {
        capacity: usize,
        policy: CapacityPolicy,
    },
}

/// How a queue tells "full" apart from "empty" when both cursors meet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CapacityPolicy {
    /// One slot stays permanently unused, so at most `capacity - 1` values
    /// are resident.
    #[default]
    ReserveSlot,
    /// Occupancy is counted explicitly and every slot is usable.
    Counted,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Cursors {
    front: usize,
    rear: usize,
}

/// Fixed-capacity ring buffer of `i32`. Dequeued slots aren't cleared, the
/// cursors just move past them.
#[derive(Clone, Debug)]
pub struct CircularQueue {
    slots: Box<[i32]>,
    cursors: Option<Cursors>,
    len: usize,
    policy: CapacityPolicy,
}

impl CircularQueue {
    #[inline]
    pub fn new(capacity: usize) -> Result<Self, QueueError> {
        Self::with_policy(capacity, CapacityPolicy::default())
    }

    pub fn with_policy(capacity: usize, policy: CapacityPolicy) -> Result<Self, QueueError> {
        let min = match policy {
            CapacityPolicy::ReserveSlot => 2,
            CapacityPolicy::Counted => 1,
        };
        if capacity < min {
            return Err(QueueError::InvalidCapacity { capacity, policy });
        }
        Ok(Self {
            slots: vec![0; capacity].into_boxed_slice(),
            cursors: None,
            len: 0,
            policy,
        })
    }

    /// Drops every resident value, back to the empty state.
    pub fn initialize(&mut self) {
        self.cursors = None;
        self.len = 0;
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn usable_capacity(&self) -> usize {
        match self.policy {
            CapacityPolicy::ReserveSlot => self.capacity() - 1,
            CapacityPolicy::Counted => self.capacity(),
        }
    }

    #[inline]
    pub fn policy(&self) -> CapacityPolicy {
        self.policy
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cursors.is_none()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == self.usable_capacity()
    }

    /// `(front, rear)` slot indices, or `None` while empty.
    #[inline]
    pub fn cursors(&self) -> Option<(usize, usize)> {
        self.cursors.map(|c| (c.front, c.rear))
    }

    #[inline]
    fn advance(&self, index: usize) -> usize {
        (index + 1) % self.capacity()
    }

    pub fn enqueue(&mut self, value: i32) -> Result<(), QueueError> {
        if self.is_full() {
            return Err(QueueError::CapacityViolation(Violation::Full));
        }
        let cursors = match self.cursors {
            None => Cursors { front: 0, rear: 0 },
            Some(c) => Cursors {
                front: c.front,
                rear: self.advance(c.rear),
            },
        };
        self.slots[cursors.rear] = value;
        self.cursors = Some(cursors);
        self.len += 1;
        Ok(())
    }

    pub fn dequeue(&mut self) -> Result<i32, QueueError> {
        let Some(c) = self.cursors else {
            return Err(QueueError::CapacityViolation(Violation::Empty));
        };
        let value = self.slots[c.front];
        self.cursors = if c.front == c.rear {
            None
        } else {
            Some(Cursors {
                front: self.advance(c.front),
                rear: c.rear,
            })
        };
        self.len -= 1;
        Ok(value)
    }

    #[inline]
    pub fn peek(&self) -> Option<i32> {
        self.cursors.map(|c| self.slots[c.front])
    }

    /// Resident values, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = i32> + '_ {
        let front = self.cursors.map_or(0, |c| c.front);
        (0..self.len).map(move |i| self.slots[(front + i) % self.capacity()])
    }

    #[inline]
    pub fn display(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CircularQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "Queue is empty!");
        }
        write!(f, "Queue elements:")?;
        for value in self.iter() {
            write!(f, " {value}")?;
        }
        Ok(())
    }
}
