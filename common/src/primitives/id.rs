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

use std::fmt::{Debug, Display};

use crypto::hash::blake2b_256;
use serialization::{Decode, Encode};
use utils::TypeName;

fixed_hash::construct_fixed_hash! {
    #[derive(Encode, Decode)]
    pub struct H256(32);
}

/// Content-addressed identifier of a `T`. Two ids with different tags never
/// compare or unify, which keeps transaction ids, header hashes and address
/// ids apart at compile time.
#[derive(Encode, Decode)]
pub struct Id<T> {
    hash: H256,
    _shadow: std::marker::PhantomData<fn() -> T>,
}

impl<T> Id<T> {
    pub const fn new(hash: H256) -> Self {
        Self {
            hash,
            _shadow: std::marker::PhantomData,
        }
    }

    pub const fn to_hash(&self) -> H256 {
        self.hash
    }
}

// Manual impls of the usual suspects so that `T` itself does not have to
// implement them; only the hash participates.
impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Id<T> {}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.hash == other.hash
    }
}

impl<T> Eq for Id<T> {}

impl<T> PartialOrd for Id<T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Id<T> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.hash.cmp(&other.hash)
    }
}

impl<T: TypeName> Debug for Id<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Id<{}>{{{:x}}}", T::typename_str(), self.hash)
    }
}

impl<T> Display for Id<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = self.hash.to_string();
        write!(f, "{}", s.strip_prefix("0x").unwrap_or(&s))
    }
}

/// Objects that deserve a unique id, together with the rule for computing it.
pub trait Idable {
    type Tag;

    fn get_id(&self) -> Id<Self::Tag>;
}

/// The id of any encodable value: blake2b-256 over its binary encoding.
pub fn hash_encoded<T: Encode>(value: &T) -> H256 {
    H256(blake2b_256(value.encode()))
}
