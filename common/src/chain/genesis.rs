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

use std::collections::BTreeMap;

use serialization::{Decode, Encode};

use super::block::BlockHeader;
use super::transaction::{TxOutput, UtxoOutPoint};
use crate::primitives::{hash_encoded, Id, Idable};

/// The chain's initial coin distribution. Not a block: it has no parent, no
/// transactions and sits at height zero, but it does have an id so a wallet
/// tip can point at it.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub struct Genesis {
    utxo: BTreeMap<UtxoOutPoint, TxOutput>,
}

impl Genesis {
    pub fn new(utxo: BTreeMap<UtxoOutPoint, TxOutput>) -> Self {
        Genesis { utxo }
    }

    pub fn utxo(&self) -> &BTreeMap<UtxoOutPoint, TxOutput> {
        &self.utxo
    }
}

impl Idable for Genesis {
    type Tag = BlockHeader;

    fn get_id(&self) -> Id<BlockHeader> {
        Id::new(hash_encoded(self))
    }
}
