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

use common::chain::BlockHeader;
use common::primitives::Id;
use serialization::{Decode, Encode};

/// Where a wallet's view of the chain currently ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Encode, Decode)]
pub enum WalletTip {
    /// Freshly created or imported; nothing scanned yet, not even genesis.
    #[codec(index = 0)]
    NotSynced,
    /// Everything up to and including this header has been applied.
    #[codec(index = 1)]
    SyncedWith(Id<BlockHeader>),
}

impl WalletTip {
    pub fn synced_header(&self) -> Option<Id<BlockHeader>> {
        match self {
            WalletTip::NotSynced => None,
            WalletTip::SyncedWith(id) => Some(*id),
        }
    }
}
