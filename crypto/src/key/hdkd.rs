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

//! Hierarchical deterministic key derivation.
//!
//! The hierarchy is two levels deep: a root key owns accounts, an account
//! owns leaf keys addressed by index. Child keys are produced by seeding the
//! key generator with a hash of the parent seed and the path, so the whole
//! tree is recoverable from the root seed alone.

use serialization::{Decode, Encode, Input};

use crate::hash::{Blake2b32Stream, StreamHasher};
use crate::key::{PrivateKey, PublicKey};
use crate::random::{CryptoRng, Rng};

const LEAF_DERIVATION_TAG: &[u8] = b"hdkd/leaf/v1";
const ROOT_DERIVATION_TAG: &[u8] = b"hdkd/root/v1";

#[derive(thiserror::Error, Debug, PartialEq, Eq, Clone)]
pub enum DerivationError {
    #[error("Index {0} out of the valid derivation range")]
    IndexOutOfRange(u32),
}

/// A derivation index. The most significant bit is reserved, as in the
/// common hardened/non-hardened index split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Ord, PartialOrd, Encode)]
pub struct U31(u32);

impl U31 {
    pub const ZERO: U31 = U31(0);
    pub const ONE: U31 = U31(1);

    pub const fn from_u32(val: u32) -> Option<U31> {
        if val < 0x8000_0000 {
            Some(U31(val))
        } else {
            None
        }
    }

    pub fn into_u32(self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for U31 {
    type Error = DerivationError;

    fn try_from(val: u32) -> Result<Self, Self::Error> {
        U31::from_u32(val).ok_or(DerivationError::IndexOutOfRange(val))
    }
}

impl From<U31> for u32 {
    fn from(val: U31) -> u32 {
        val.0
    }
}

impl std::fmt::Display for U31 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Manual decoding so that a persisted value with the reserved bit set is a
// codec error rather than an invalid index.
impl Decode for U31 {
    fn decode<I: Input>(input: &mut I) -> Result<Self, serialization::Error> {
        let val = u32::decode(input)?;
        U31::from_u32(val).ok_or_else(|| "U31 with the reserved bit set".into())
    }
}

/// The position of a leaf key under a root: account, then index within the
/// account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Ord, PartialOrd, Encode, Decode)]
pub struct HdPath {
    pub account: U31,
    pub index: U31,
}

impl HdPath {
    pub fn new(account: U31, index: U31) -> Self {
        HdPath { account, index }
    }
}

impl std::fmt::Display for HdPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "m/{}/{}", self.account, self.index)
    }
}

/// The root secret of a wallet. All leaf keys and the wallet's payload
/// encryption key are derived from it deterministically.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub struct RootPrivateKey {
    seed: [u8; 32],
}

impl RootPrivateKey {
    pub fn new<R: Rng + CryptoRng>(rng: &mut R) -> Self {
        Self { seed: rng.gen() }
    }

    pub const fn from_seed(seed: [u8; 32]) -> Self {
        Self { seed }
    }

    pub fn as_seed_bytes(&self) -> &[u8] {
        self.seed.as_slice()
    }

    pub fn root_public_key(&self) -> PublicKey {
        self.root_keypair().1
    }

    fn root_keypair(&self) -> (PrivateKey, PublicKey) {
        let seed = Blake2b32Stream::new()
            .write(ROOT_DERIVATION_TAG)
            .write(self.seed)
            .finalize();
        PrivateKey::new_from_seed(seed)
    }

    /// The keypair at `path`. Stable across restarts and machines.
    pub fn derive_leaf(&self, path: HdPath) -> (PrivateKey, PublicKey) {
        let seed = Blake2b32Stream::new()
            .write(LEAF_DERIVATION_TAG)
            .write(self.seed)
            .write(path.account.into_u32().to_le_bytes())
            .write(path.index.into_u32().to_le_bytes())
            .finalize();
        PrivateKey::new_from_seed(seed)
    }
}
