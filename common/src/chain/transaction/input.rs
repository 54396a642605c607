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

use serialization::{Decode, Encode};

use super::Transaction;
use crate::primitives::Id;

/// A reference to a specific output of a specific transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Encode, Decode)]
pub struct UtxoOutPoint {
    source_tx: Id<Transaction>,
    output_index: u32,
}

impl UtxoOutPoint {
    pub fn new(source_tx: Id<Transaction>, output_index: u32) -> Self {
        UtxoOutPoint {
            source_tx,
            output_index,
        }
    }

    pub fn source_tx_id(&self) -> Id<Transaction> {
        self.source_tx
    }

    pub fn output_index(&self) -> u32 {
        self.output_index
    }
}

impl std::fmt::Display for UtxoOutPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.source_tx, self.output_index)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Encode, Decode)]
pub enum TxInput {
    /// Spends an unspent output.
    #[codec(index = 0)]
    Utxo(UtxoOutPoint),
    /// An input this node does not know how to interpret. Preserved verbatim
    /// so foreign transactions still hash and relay correctly.
    #[codec(index = 1)]
    Unknown { tag: u8, data: Vec<u8> },
}

impl TxInput {
    pub fn utxo(source_tx: Id<Transaction>, output_index: u32) -> Self {
        TxInput::Utxo(UtxoOutPoint::new(source_tx, output_index))
    }

    pub fn utxo_outpoint(&self) -> Option<&UtxoOutPoint> {
        match self {
            TxInput::Utxo(outpoint) => Some(outpoint),
            TxInput::Unknown { .. } => None,
        }
    }
}
