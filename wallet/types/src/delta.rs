// Copyright (c) 2023 RBB S.r.l
// opensource@mintlayer.org
// SPDX-License-Identifier: MIT
// Licensed under the MIT License;
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// https://github.com/mintlayer/mintlayer-core/blob/master/LICENSE
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Accumulating deltas over maps and sets.
//!
//! A delta records the net effect of a sequence of insert/delete steps
//! without touching the underlying store. Deletions carry the value being
//! removed, which makes a step and its exact reverse annihilate: inserting a
//! key and then deleting it (or deleting and then re-inserting the same
//! value) leaves no trace, so rolling back an application yields the empty
//! delta. A delete of a pre-existing value followed by an insert of a
//! different one nets out to a replacement.
//!
//! Composition replays the later delta's per-key ops onto the earlier one.
//! Within the block protocol a key is created at most once and spent at most
//! once between insertions, and under that discipline composition is
//! associative with the empty delta as identity.

use std::collections::BTreeMap;

use common::chain::Address;
use common::primitives::Id;
use serialization::{Decode, Encode};

use crate::address_meta::WalletAddressMeta;

/// Net per-key operation of a map delta.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub enum DeltaOp<V> {
    /// The key is new relative to the underlying store.
    #[codec(index = 0)]
    Insert(V),
    /// The key exists in the underlying store with this value and is
    /// removed.
    #[codec(index = 1)]
    Delete(V),
    /// The key existed with `old`, was removed, and was inserted again as
    /// `new`.
    #[codec(index = 2)]
    Replace { old: V, new: V },
}

#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub struct MapDelta<K: Ord, V> {
    ops: BTreeMap<K, DeltaOp<V>>,
}

impl<K: Ord, V> Default for MapDelta<K, V> {
    fn default() -> Self {
        MapDelta {
            ops: BTreeMap::new(),
        }
    }
}

impl<K: Ord + Clone, V: Clone + Eq> MapDelta<K, V> {
    pub fn new() -> Self {
        MapDelta {
            ops: BTreeMap::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn insert(&mut self, key: K, value: V) {
        match self.ops.remove(&key) {
            None => {
                self.ops.insert(key, DeltaOp::Insert(value));
            }
            // Later insertion wins.
            Some(DeltaOp::Insert(_)) => {
                self.ops.insert(key, DeltaOp::Insert(value));
            }
            Some(DeltaOp::Delete(old)) => {
                if old != value {
                    self.ops.insert(key, DeltaOp::Replace { old, new: value });
                }
                // Re-inserting the deleted value exactly restores it.
            }
            Some(DeltaOp::Replace { old, .. }) => {
                self.ops.insert(key, DeltaOp::Replace { old, new: value });
            }
        }
    }

    pub fn delete(&mut self, key: K, value: V) {
        match self.ops.remove(&key) {
            // Deleting our own insertion cancels it.
            Some(DeltaOp::Insert(_)) => {}
            None | Some(DeltaOp::Delete(_)) => {
                self.ops.insert(key, DeltaOp::Delete(value));
            }
            Some(DeltaOp::Replace { old, .. }) => {
                self.ops.insert(key, DeltaOp::Delete(old));
            }
        }
    }

    pub fn get(&self, key: &K) -> Option<&DeltaOp<V>> {
        self.ops.get(key)
    }

    pub fn ops(&self) -> impl Iterator<Item = (&K, &DeltaOp<V>)> {
        self.ops.iter()
    }

    /// Keys this delta nets out to inserting or replacing, with the value
    /// that ends up in the store.
    pub fn insertions(&self) -> impl Iterator<Item = (&K, &V)> {
        self.ops.iter().filter_map(|(k, op)| match op {
            DeltaOp::Insert(v) | DeltaOp::Replace { new: v, .. } => Some((k, v)),
            DeltaOp::Delete(_) => None,
        })
    }

    /// Keys this delta nets out to deleting.
    pub fn deletions(&self) -> impl Iterator<Item = &K> {
        self.ops.iter().filter_map(|(k, op)| match op {
            DeltaOp::Delete(_) => Some(k),
            DeltaOp::Insert(_) | DeltaOp::Replace { .. } => None,
        })
    }

    /// Replay `later` on top of `self`.
    pub fn compose(mut self, later: Self) -> Self {
        for (key, op) in later.ops {
            match op {
                DeltaOp::Insert(v) => self.insert(key, v),
                DeltaOp::Delete(v) => self.delete(key, v),
                DeltaOp::Replace { old, new } => {
                    self.delete(key.clone(), old);
                    self.insert(key, new);
                }
            }
        }
        self
    }
}

/// Net per-element operation of a set delta. Elements are self-describing,
/// so no payload is needed for annihilation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Encode, Decode)]
pub enum SetOp {
    #[codec(index = 0)]
    Insert,
    #[codec(index = 1)]
    Delete,
}

#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub struct SetDelta<T: Ord> {
    ops: BTreeMap<T, SetOp>,
}

impl<T: Ord> Default for SetDelta<T> {
    fn default() -> Self {
        SetDelta {
            ops: BTreeMap::new(),
        }
    }
}

impl<T: Ord + Clone> SetDelta<T> {
    pub fn new() -> Self {
        SetDelta {
            ops: BTreeMap::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn insert(&mut self, element: T) {
        match self.ops.remove(&element) {
            // Re-inserting a deleted element restores it.
            Some(SetOp::Delete) => {}
            None | Some(SetOp::Insert) => {
                self.ops.insert(element, SetOp::Insert);
            }
        }
    }

    pub fn delete(&mut self, element: T) {
        match self.ops.remove(&element) {
            Some(SetOp::Insert) => {}
            None | Some(SetOp::Delete) => {
                self.ops.insert(element, SetOp::Delete);
            }
        }
    }

    pub fn insertions(&self) -> impl Iterator<Item = &T> {
        self.ops.iter().filter_map(|(e, op)| match op {
            SetOp::Insert => Some(e),
            SetOp::Delete => None,
        })
    }

    pub fn deletions(&self) -> impl Iterator<Item = &T> {
        self.ops.iter().filter_map(|(e, op)| match op {
            SetOp::Delete => Some(e),
            SetOp::Insert => None,
        })
    }

    pub fn compose(mut self, later: Self) -> Self {
        for (element, op) in later.ops {
            match op {
                SetOp::Insert => self.insert(element),
                SetOp::Delete => self.delete(element),
            }
        }
        self
    }
}

/// Delta over the wallet's address book. Keyed by address id, but unlike
/// [`MapDelta`] it remembers the order in which addresses were first
/// inserted (the wallet presents addresses in discovery order) and repeated
/// insertions keep the first metadata rather than the last. The metadata for
/// a given address id is deterministic, so deletions carry no payload.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub struct AddressDelta {
    ops: BTreeMap<Id<Address>, AddressOp>,
    insertion_order: Vec<Id<Address>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode)]
enum AddressOp {
    #[codec(index = 0)]
    Insert(WalletAddressMeta),
    #[codec(index = 1)]
    Delete,
}

impl Default for AddressDelta {
    fn default() -> Self {
        Self::new()
    }
}

impl AddressDelta {
    pub fn new() -> Self {
        AddressDelta {
            ops: BTreeMap::new(),
            insertion_order: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn insert(&mut self, meta: WalletAddressMeta) {
        let id = meta.address_id;
        match self.ops.get(&id) {
            // First insertion wins; discovery order is what matters.
            Some(AddressOp::Insert(_)) => {}
            // Deleting and re-adding an address cancels out.
            Some(AddressOp::Delete) => {
                self.ops.remove(&id);
            }
            None => {
                self.ops.insert(id, AddressOp::Insert(meta));
                self.insertion_order.push(id);
            }
        }
    }

    pub fn delete(&mut self, id: Id<Address>) {
        match self.ops.remove(&id) {
            Some(AddressOp::Insert(_)) => {
                self.insertion_order.retain(|e| *e != id);
            }
            None | Some(AddressOp::Delete) => {
                self.ops.insert(id, AddressOp::Delete);
            }
        }
    }

    /// Net-inserted addresses in first-insertion order.
    pub fn insertions(&self) -> impl Iterator<Item = &WalletAddressMeta> {
        self.insertion_order.iter().filter_map(|id| match self.ops.get(id) {
            Some(AddressOp::Insert(meta)) => Some(meta),
            _ => None,
        })
    }

    pub fn deletions(&self) -> impl Iterator<Item = &Id<Address>> {
        self.ops.iter().filter_map(|(id, op)| match op {
            AddressOp::Delete => Some(id),
            AddressOp::Insert(_) => None,
        })
    }

    pub fn compose(mut self, later: Self) -> Self {
        for id in later.deletions().copied().collect::<Vec<_>>() {
            self.delete(id);
        }
        for meta in later.insertions() {
            self.insert(meta.clone());
        }
        self
    }
}
