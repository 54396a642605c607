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

use common::primitives::{hash_encoded, H256};
use crypto::key::hdkd::{RootPrivateKey, U31};
use serialization::{Decode, Encode};

/// Content-addressed identifier of a wallet: the hash of the root public
/// key's encoding. Stable across restarts, safe to show in logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Encode, Decode)]
pub struct WalletId(H256);

impl WalletId {
    pub fn from_root_key(root: &RootPrivateKey) -> Self {
        WalletId(hash_encoded(&root.root_public_key()))
    }

    pub const fn from_hash(hash: H256) -> Self {
        WalletId(hash)
    }
}

impl std::fmt::Display for WalletId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An account within a wallet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Encode, Decode)]
pub struct AccountId {
    pub wallet_id: WalletId,
    pub account: U31,
}

impl AccountId {
    pub fn new(wallet_id: WalletId, account: U31) -> Self {
        AccountId { wallet_id, account }
    }
}

impl std::fmt::Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.wallet_id, self.account)
    }
}
