use std::alloc::{self, Layout};
use std::cmp;

/// Bytes held inside the writer itself, before any heap allocation is made.
pub const INLINE_CAPACITY: usize = 256;

/// Added on every reallocation, so that a run of small appends reallocates rarely.
pub const GROWTH_SLACK: usize = 0x1000;

/// Backing bytes of a [`crate::serde::Writer`].
///
/// Moves `Empty -> Inline -> Heap` or `Empty -> Heap`, never back,
/// except that detaching resets it to `Empty`.
#[derive(Clone, Debug)]
pub(super) enum Storage {
    /// Holds nothing, not even an inline region. Grows straight onto the heap.
    Empty,
    Inline {
        buf: [u8; INLINE_CAPACITY],
        len: usize,
    },
    Heap(Vec<u8>),
}

impl Storage {
    pub fn new_inline() -> Self {
        Self::Inline {
            buf: [0u8; INLINE_CAPACITY],
            len: 0,
        }
    }

    pub fn new_heap(cap: usize) -> Self {
        if cap == 0 {
            Self::Empty
        } else {
            Self::Heap(try_alloc(cap))
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Empty => 0,
            Self::Inline { len, .. } => *len,
            Self::Heap(heap) => heap.len(),
        }
    }

    pub fn capacity(&self) -> usize {
        match self {
            Self::Empty => 0,
            Self::Inline { .. } => INLINE_CAPACITY,
            Self::Heap(heap) => heap.capacity(),
        }
    }

    pub fn as_slice(&self) -> &[u8] {
        match self {
            Self::Empty => &[],
            Self::Inline { buf, len } => &buf[..*len],
            Self::Heap(heap) => &heap[..],
        }
    }

    /// Makes room for `additional` more bytes.
    /// On shortfall, the new capacity is `max(2 * capacity + additional + GROWTH_SLACK, len + additional)`.
    pub fn reserve(&mut self, additional: usize) {
        let len = self.len();
        let cap = self.capacity();
        let need = match len.checked_add(additional) {
            None => allocation_failure(usize::MAX),
            Some(need) => need,
        };
        if need <= cap {
            return;
        }

        let new_cap = cmp::max(
            cap.saturating_mul(2)
                .saturating_add(additional)
                .saturating_add(GROWTH_SLACK),
            need,
        );

        /* The new heap buffer is filled completely before it replaces the old storage. */
        let heap = match self {
            Self::Heap(heap) => {
                if heap.try_reserve_exact(new_cap - len).is_err() {
                    allocation_failure(new_cap);
                }
                return;
            }
            Self::Inline { buf, len } => {
                let mut heap = try_alloc(new_cap);
                heap.extend_from_slice(&buf[..*len]);
                tracing::trace!(len = *len, new_cap, "Writer storage moved to heap.");
                heap
            }
            Self::Empty => try_alloc(new_cap),
        };
        *self = Self::Heap(heap);
    }

    /// Callers must have reserved room for `bytes` beforehand.
    pub fn append_reserved(&mut self, bytes: &[u8]) {
        match self {
            Self::Empty => debug_assert!(bytes.is_empty()),
            Self::Inline { buf, len } => {
                buf[*len..*len + bytes.len()].copy_from_slice(bytes);
                *len += bytes.len();
            }
            Self::Heap(heap) => heap.extend_from_slice(bytes),
        }
    }

    pub fn clear(&mut self) {
        match self {
            Self::Empty => {}
            Self::Inline { len, .. } => *len = 0,
            Self::Heap(heap) => heap.clear(),
        }
    }

    /// Always returns an allocation distinct from anything this storage keeps.
    pub fn into_vec(self) -> Vec<u8> {
        match self {
            Self::Empty => vec![],
            Self::Inline { buf, len } => buf[..len].to_vec(),
            Self::Heap(heap) => heap,
        }
    }
}

fn try_alloc(cap: usize) -> Vec<u8> {
    let mut heap = vec![];
    if heap.try_reserve_exact(cap).is_err() {
        allocation_failure(cap);
    }
    heap
}

#[cold]
fn allocation_failure(cap: usize) -> ! {
    tracing::error!(cap, "Writer could not allocate its buffer.");
    let layout = Layout::array::<u8>(cap).unwrap_or_else(|_| Layout::new::<u8>());
    alloc::handle_alloc_error(layout)
}
