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

pub mod address;
pub mod block;
pub mod config;
pub mod genesis;
pub mod slotting;
pub mod transaction;

pub use address::{Address, Destination, HdPayload};
pub use block::timestamp::BlockTimestamp;
pub use block::{Block, BlockHeader, BlockUndo, Blund};
pub use config::{create_unit_test_config, ChainConfig};
pub use genesis::Genesis;
pub use slotting::{slot_start, SlotId, SlottingData};
pub use transaction::signed_transaction::{
    produce_input_witness, produce_redeem_witness, verify_input_witness, InputWitness,
    SignedTransaction,
};
pub use transaction::{
    Transaction, TransactionCreationError, TxAttributes, TxInput, TxOutput, TxUndo, UtxoOutPoint,
};

/// The unspent outputs visible to one owner: outpoint to output.
pub type Utxo = std::collections::BTreeMap<UtxoOutPoint, TxOutput>;

/// Total value held in a UTXO set; `None` on overflow.
pub fn utxo_total(utxo: &Utxo) -> Option<crate::primitives::Coin> {
    crate::primitives::amount::sum_coins(utxo.values().map(|output| output.value()))
}
