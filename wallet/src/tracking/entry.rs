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

use common::chain::{BlockTimestamp, Transaction, TxInput, TxOutput, TxUndo};
use common::primitives::amount::sum_coins;
use common::primitives::{BlockHeight, Idable, SignedCoin};
use wallet_types::{TxDirection, TxHistoryEntry, WalletAddressMeta};

use crate::credentials::WalletCredentials;

/// The wallet-relevant projection of one processed transaction: which of
/// its inputs consumed our outputs, which of its outputs pay us, and the
/// normalized history entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxEntryExtra {
    /// Own spent inputs as `(input, consumed output)` with the owner
    /// metadata of the consumed output's address.
    pub own_inputs: Vec<((TxInput, TxOutput), WalletAddressMeta)>,
    /// Own received outputs as `(output index, output)` with the owner
    /// metadata.
    pub own_outputs: Vec<((u32, TxOutput), WalletAddressMeta)>,
    pub entry: TxHistoryEntry,
}

impl TxEntryExtra {
    /// A transaction concerns the wallet iff it touches it on either side.
    pub fn is_interesting(&self) -> bool {
        !self.own_inputs.is_empty() || !self.own_outputs.is_empty()
    }
}

/// Project `tx` down to the wallet's view.
///
/// `undo` lists what each input consumed, in input order; a mismatch with
/// the input count means the caller handed over undo data for a different
/// transaction, which is unrecoverable.
///
/// Balance totals use checked arithmetic and treat overflow as fatal: the
/// chain guarantees totals fit, so an overflow here is corrupt input data.
pub fn build_tx_entry_extra(
    creds: &WalletCredentials,
    tx: &Transaction,
    undo: &TxUndo,
    difficulty: Option<BlockHeight>,
    timestamp: Option<BlockTimestamp>,
) -> TxEntryExtra {
    assert_eq!(
        undo.len(),
        tx.inputs().len(),
        "undo length diverges from input count for {:?}",
        tx.get_id()
    );

    // Unknown inputs never spend wallet UTXO (wallet outputs are only
    // spendable by outpoint), so ownership is only probed on utxo inputs.
    let spent = tx
        .inputs()
        .iter()
        .zip(undo.iter())
        .filter(|(input, _)| input.utxo_outpoint().is_some())
        .map(|(input, consumed)| (input.clone(), consumed.clone()));
    let own_inputs = creds.select_own(spent, |(_, consumed)| consumed.address());

    let received = tx
        .outputs()
        .iter()
        .enumerate()
        .map(|(index, output)| (index as u32, output.clone()));
    let own_outputs = creds.select_own(received, |(_, output)| output.address());

    let input_total = sum_coins(own_inputs.iter().map(|((_, consumed), _)| consumed.value()))
        .expect("own input total overflows");
    let output_total = sum_coins(own_outputs.iter().map(|((_, output), _)| output.value()))
        .expect("own output total overflows");

    let delta = (SignedCoin::from_coin(output_total).expect("own output total overflows")
        - SignedCoin::from_coin(input_total).expect("own input total overflows"))
    .expect("balance delta overflows");

    let direction = match delta.into_atoms() {
        d if d > 0 => TxDirection::Incoming,
        d if d < 0 => TxDirection::Outgoing,
        _ => TxDirection::Internal,
    };

    TxEntryExtra {
        own_inputs,
        own_outputs,
        entry: TxHistoryEntry {
            tx_id: tx.get_id(),
            direction,
            delta,
            input_total,
            output_total,
            difficulty,
            timestamp,
        },
    }
}
