//! Client-handle bookkeeping for graphics objects.
//!
//! The native graphics binding hands out **opaque objects** with no stable
//! integer identity, while the API surface we adapt exchanges small positive
//! integers. A [`HandleTable`] bridges the two: it mints monotonically
//! increasing `u32` handles for owned native objects and resolves them on
//! every later use. Handle `0` is the "no object" sentinel and is never
//! minted; released handles are never reused, so a stale handle keeps failing
//! lookup instead of silently aliasing a newer object.

use std::fmt;

use hashbrown::HashMap;
use thiserror::Error;

/// Object category a handle belongs to. Carried by every table so that
/// lookup failures name what the handle was supposed to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    Texture,
    Buffer,
    Framebuffer,
    Renderbuffer,
    Shader,
    Program,
    Query,
    Sampler,
    TransformFeedback,
    VertexArray,
    UniformLocation,
}

impl ObjectKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ObjectKind::Texture => "texture",
            ObjectKind::Buffer => "buffer",
            ObjectKind::Framebuffer => "framebuffer",
            ObjectKind::Renderbuffer => "renderbuffer",
            ObjectKind::Shader => "shader",
            ObjectKind::Program => "program",
            ObjectKind::Query => "query",
            ObjectKind::Sampler => "sampler",
            ObjectKind::TransformFeedback => "transform feedback",
            ObjectKind::VertexArray => "vertex array",
            ObjectKind::UniformLocation => "uniform location",
        }
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lookup or release of a handle with no live entry: never allocated,
/// already released, or the reserved sentinel `0`.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("unknown {kind} handle {handle}")]
pub struct UnknownHandle {
    pub kind: ObjectKind,
    pub handle: u32,
}

/// Maps client-visible `u32` handles to owned native objects for one object
/// category.
///
/// Entries are created exactly once (when the native object is created),
/// resolved on every bind/use, and removed exactly once on explicit deletion.
/// Ids strictly increase for the lifetime of the table and are never
/// recycled. The table cannot tell "never allocated" from "already
/// released"; both are simply absent.
#[derive(Debug)]
pub struct HandleTable<T> {
    kind: ObjectKind,
    next_id: u32,
    entries: HashMap<u32, T>,
}

impl<T> HandleTable<T> {
    pub fn new(kind: ObjectKind) -> Self {
        Self {
            kind,
            next_id: 1,
            entries: HashMap::new(),
        }
    }

    pub fn kind(&self) -> ObjectKind {
        self.kind
    }

    /// Stores `object` under a freshly minted handle. Never returns 0.
    ///
    /// Panics once the 32-bit id space is exhausted; wrapping around would
    /// break the no-reuse guarantee.
    pub fn insert(&mut self, object: T) -> u32 {
        let handle = self.next_id;
        let Some(next) = self.next_id.checked_add(1) else {
            panic!("{} handle space exhausted", self.kind);
        };
        self.next_id = next;
        self.entries.insert(handle, object);
        handle
    }

    pub fn get(&self, handle: u32) -> Result<&T, UnknownHandle> {
        self.entries.get(&handle).ok_or(UnknownHandle {
            kind: self.kind,
            handle,
        })
    }

    pub fn get_mut(&mut self, handle: u32) -> Result<&mut T, UnknownHandle> {
        let kind = self.kind;
        self.entries
            .get_mut(&handle)
            .ok_or(UnknownHandle { kind, handle })
    }

    /// Removes the entry, returning the owned object so the caller can hand
    /// it to the native delete call.
    pub fn remove(&mut self, handle: u32) -> Result<T, UnknownHandle> {
        self.entries.remove(&handle).ok_or(UnknownHandle {
            kind: self.kind,
            handle,
        })
    }

    /// Whether `handle` currently resolves. Backs the `glIs*` predicates,
    /// which report `false` for stale handles rather than erroring.
    pub fn contains(&self, handle: u32) -> bool {
        self.entries.contains_key(&handle)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handles_start_at_one_and_strictly_increase() {
        let mut table = HandleTable::new(ObjectKind::Texture);
        let a = table.insert("a");
        let b = table.insert("b");
        let c = table.insert("c");
        assert_eq!((a, b, c), (1, 2, 3));
    }

    #[test]
    fn lookup_returns_the_inserted_object() {
        let mut table = HandleTable::new(ObjectKind::Buffer);
        let h = table.insert(0xB0u8);
        assert_eq!(table.get(h).copied(), Ok(0xB0));
        *table.get_mut(h).expect("live handle") = 0xB1;
        assert_eq!(table.get(h).copied(), Ok(0xB1));
    }

    #[test]
    fn released_handle_fails_lookup_with_kind_and_id() {
        let mut table = HandleTable::new(ObjectKind::Shader);
        let h = table.insert(());
        assert_eq!(table.remove(h), Ok(()));

        let err = table.get(h).expect_err("stale handle must not resolve");
        assert_eq!(
            err,
            UnknownHandle {
                kind: ObjectKind::Shader,
                handle: h,
            }
        );
        assert_eq!(err.to_string(), "unknown shader handle 1");
    }

    #[test]
    fn zero_is_never_minted_and_never_resolves() {
        let mut table = HandleTable::new(ObjectKind::Program);
        for _ in 0..64 {
            assert_ne!(table.insert(()), 0);
        }
        assert!(!table.contains(0));
        assert!(table.get(0).is_err());
        assert!(table.remove(0).is_err());
    }

    #[test]
    fn released_ids_are_not_reused() {
        let mut table = HandleTable::new(ObjectKind::Query);
        let first = table.insert(());
        let second = table.insert(());
        let third = table.insert(());
        assert_eq!((first, second, third), (1, 2, 3));

        table.remove(second).expect("live handle");
        // The freed id must stay dead; the counter keeps going.
        assert_eq!(table.insert(()), 4);
        assert!(!table.contains(second));
    }

    #[test]
    fn release_is_not_idempotent() {
        let mut table = HandleTable::new(ObjectKind::Framebuffer);
        let h = table.insert(());
        assert!(table.remove(h).is_ok());
        assert!(table.remove(h).is_err(), "double release must fail");
    }

    #[test]
    fn tables_count_independently() {
        let mut textures = HandleTable::new(ObjectKind::Texture);
        let mut buffers = HandleTable::new(ObjectKind::Buffer);
        assert_eq!(textures.insert(()), 1);
        assert_eq!(textures.insert(()), 2);
        // A fresh table starts back at 1 regardless of sibling activity.
        assert_eq!(buffers.insert(()), 1);
    }

    #[test]
    fn neighbors_survive_a_release() {
        let mut table = HandleTable::new(ObjectKind::Renderbuffer);
        let handles: Vec<u32> = (0..5u32).map(|i| table.insert(i * 10)).collect();
        assert_eq!(handles, vec![1, 2, 3, 4, 5]);

        table.remove(3).expect("live handle");

        assert!(table.get(3).is_err());
        for &h in &[1, 2, 4, 5] {
            assert_eq!(table.get(h).copied(), Ok((h - 1) * 10));
        }
        assert_eq!(table.len(), 4);
    }

    /// Deterministic PRNG for randomized tests without bringing in
    /// `rand`/`proptest`.
    struct Rng(u64);

    impl Rng {
        fn next_u64(&mut self) -> u64 {
            // xorshift64*
            let mut x = self.0;
            x ^= x >> 12;
            x ^= x << 25;
            x ^= x >> 27;
            self.0 = x;
            x.wrapping_mul(0x2545_F491_4F6C_DD1D)
        }
    }

    #[test]
    fn randomized_lifecycle_never_reuses_or_aliases() {
        let mut rng = Rng(0x0DD5_EED0_1234_5678);
        let mut table = HandleTable::new(ObjectKind::Sampler);
        let mut live: Vec<u32> = Vec::new();
        let mut last_minted = 0u32;

        for step in 0..2_000u64 {
            let release = !live.is_empty() && rng.next_u64() % 3 == 0;
            if release {
                let idx = (rng.next_u64() as usize) % live.len();
                let h = live.swap_remove(idx);
                table.remove(h).expect("live handle");
                assert!(table.get(h).is_err());
            } else {
                let h = table.insert(step);
                assert!(h > last_minted, "ids must strictly increase");
                last_minted = h;
                live.push(h);
            }

            // Every live handle still resolves to its own payload.
            for &h in &live {
                let payload = *table.get(h).expect("live handle");
                assert!(payload <= step);
            }
            assert_eq!(table.len(), live.len());
        }
    }
}
