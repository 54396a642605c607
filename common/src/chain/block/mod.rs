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

pub mod timestamp;

use serialization::{Decode, Encode};
use utils::TypeName;

use super::slotting::SlotId;
use super::transaction::signed_transaction::SignedTransaction;
use super::transaction::TxUndo;
use crate::primitives::{hash_encoded, BlockHeight, Id, Idable, H256};

#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub struct BlockHeader {
    prev_block: Id<BlockHeader>,
    height: BlockHeight,
    slot: SlotId,
    tx_merkle_root: H256,
}

impl BlockHeader {
    pub fn prev_block(&self) -> Id<BlockHeader> {
        self.prev_block
    }

    /// Height doubles as the difficulty measure of the chain up to and
    /// including this header.
    pub fn height(&self) -> BlockHeight {
        self.height
    }

    pub fn slot(&self) -> SlotId {
        self.slot
    }

    pub fn block_id(&self) -> Id<BlockHeader> {
        self.get_id()
    }
}

impl Idable for BlockHeader {
    type Tag = BlockHeader;

    fn get_id(&self) -> Id<BlockHeader> {
        Id::new(hash_encoded(self))
    }
}

impl TypeName for BlockHeader {
    fn typename_str() -> &'static str {
        "BlockHeader"
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub struct Block {
    header: BlockHeader,
    transactions: Vec<SignedTransaction>,
}

impl Block {
    pub fn new(
        prev_block: Id<BlockHeader>,
        height: BlockHeight,
        slot: SlotId,
        transactions: Vec<SignedTransaction>,
    ) -> Self {
        let tx_merkle_root = calculate_tx_merkle_root(&transactions);
        Block {
            header: BlockHeader {
                prev_block,
                height,
                slot,
                tx_merkle_root,
            },
            transactions,
        }
    }

    pub fn header(&self) -> &BlockHeader {
        &self.header
    }

    pub fn transactions(&self) -> &[SignedTransaction] {
        &self.transactions
    }
}

impl Idable for Block {
    type Tag = BlockHeader;

    fn get_id(&self) -> Id<BlockHeader> {
        self.header.get_id()
    }
}

fn calculate_tx_merkle_root(transactions: &[SignedTransaction]) -> H256 {
    let ids: Vec<H256> = transactions.iter().map(|tx| tx.get_id().to_hash()).collect();
    hash_encoded(&ids)
}

/// Per-transaction undo data for a whole block, in block transaction order.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub struct BlockUndo {
    tx_undos: Vec<TxUndo>,
}

impl BlockUndo {
    pub fn new(tx_undos: Vec<TxUndo>) -> Self {
        BlockUndo { tx_undos }
    }

    pub fn tx_undos(&self) -> &[TxUndo] {
        &self.tx_undos
    }
}

/// A block paired with the undo data needed to reverse its application.
pub type Blund = (Block, BlockUndo);
