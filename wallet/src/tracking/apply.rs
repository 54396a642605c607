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

use std::collections::BTreeSet;

use common::chain::{
    Address, BlockHeader, SignedTransaction, SlotId, TxUndo, UtxoOutPoint,
};
use common::primitives::{Id, Idable};
use wallet_types::delta::SetDelta;
use wallet_types::{WalletAddressMeta, WalletModifier};

use super::change::eval_change;
use super::entry::build_tx_entry_extra;
use super::BlockInfo;
use crate::credentials::WalletCredentials;

/// The set of addresses known to have appeared on chain: the persisted used
/// book plus whatever the in-flight modifier has discovered since the last
/// commit.
///
/// Materialized per call. Set equality with this definition is all
/// correctness needs; callers processing very long stretches may want to
/// maintain it incrementally.
pub fn construct_all_used(
    db_used: &[(Id<Address>, Id<BlockHeader>)],
    used_delta: &SetDelta<(Id<Address>, Id<BlockHeader>)>,
) -> BTreeSet<Id<Address>> {
    db_used
        .iter()
        .map(|(addr, _)| *addr)
        .chain(used_delta.insertions().map(|(addr, _)| *addr))
        .collect()
}

fn own_metas<T>(own: &[(T, WalletAddressMeta)]) -> Vec<WalletAddressMeta> {
    own.iter().map(|(_, meta)| meta.clone()).collect()
}

/// Fold one confirmed transaction into the modifier.
pub fn tracking_apply_tx_to_modifier(
    creds: &WalletCredentials,
    db_used: &[(Id<Address>, Id<BlockHeader>)],
    info_fn: &impl Fn(&BlockHeader) -> BlockInfo,
    mut modifier: WalletModifier,
    (tx, undo, header): (&SignedTransaction, &TxUndo, &BlockHeader),
) -> WalletModifier {
    let info = info_fn(header);
    let thee = build_tx_entry_extra(creds, tx.transaction(), undo, info.difficulty, info.timestamp);
    let tx_id = tx.get_id();
    let header_id = header.get_id();

    let own_input_metas = own_metas(&thee.own_inputs);
    let own_output_metas = own_metas(&thee.own_outputs);

    // The change heuristic must not see this transaction's own outputs as
    // already used, so the used set is snapshotted before they are added.
    let all_used = construct_all_used(db_used, &modifier.used);
    let change_addrs = eval_change(
        &all_used,
        &own_input_metas,
        &own_output_metas,
        thee.own_outputs.len() == tx.transaction().outputs().len(),
    );

    for ((input, consumed), _) in &thee.own_inputs {
        let outpoint = input
            .utxo_outpoint()
            .expect("own inputs are utxo inputs by construction");
        modifier.utxo.delete(*outpoint, consumed.clone());
    }
    for ((index, output), _) in &thee.own_outputs {
        modifier.utxo.insert(UtxoOutPoint::new(tx_id, *index), output.clone());
    }

    // Every output address of a transaction that concerns us has now been
    // observed on chain, the counterparty's included; the change heuristic
    // must never pick an address anyone has already exposed.
    if thee.is_interesting() {
        for output in tx.transaction().outputs() {
            modifier.used.insert((output.address().get_id(), header_id));
        }
    }
    for addr_id in change_addrs {
        modifier.change.insert((addr_id, header_id));
    }

    if thee.is_interesting() {
        modifier.history.insert(tx_id, thee.entry.clone());
    }

    if let Some(ptx_info) = info.ptx {
        modifier.pending.confirm(tx_id, ptx_info);
    }

    for meta in own_output_metas {
        modifier.addresses.insert(meta);
    }

    modifier
}

/// Fold the reversal of one confirmed transaction into the modifier. The
/// mirror image of [`tracking_apply_tx_to_modifier`]: every insertion
/// becomes a deletion on the same key, the spent inputs are restored from
/// `undo`, and the change heuristic is re-evaluated against the same used
/// set the application saw, so rollback composed onto its apply cancels.
pub fn tracking_rollback_tx_to_modifier(
    creds: &WalletCredentials,
    db_used: &[(Id<Address>, Id<BlockHeader>)],
    current_slot: SlotId,
    info_fn: &impl Fn(&BlockHeader) -> BlockInfo,
    mut modifier: WalletModifier,
    (tx, undo, header): (&SignedTransaction, &TxUndo, &BlockHeader),
) -> WalletModifier {
    let info = info_fn(header);
    let thee = build_tx_entry_extra(creds, tx.transaction(), undo, info.difficulty, info.timestamp);
    let tx_id = tx.get_id();
    let header_id = header.get_id();

    let own_input_metas = own_metas(&thee.own_inputs);
    let own_output_metas = own_metas(&thee.own_outputs);

    // Withdraw the used records first: the change evaluation below must see
    // the used set as it was before this transaction was applied.
    if thee.is_interesting() {
        for output in tx.transaction().outputs() {
            modifier.used.delete((output.address().get_id(), header_id));
        }
    }
    let all_used = construct_all_used(db_used, &modifier.used);
    let change_addrs = eval_change(
        &all_used,
        &own_input_metas,
        &own_output_metas,
        thee.own_outputs.len() == tx.transaction().outputs().len(),
    );
    for addr_id in change_addrs {
        modifier.change.delete((addr_id, header_id));
    }

    for ((input, consumed), _) in &thee.own_inputs {
        let outpoint = input
            .utxo_outpoint()
            .expect("own inputs are utxo inputs by construction");
        modifier.utxo.insert(*outpoint, consumed.clone());
    }
    for ((index, output), _) in &thee.own_outputs {
        modifier.utxo.delete(UtxoOutPoint::new(tx_id, *index), output.clone());
    }

    if thee.is_interesting() {
        modifier.history.delete(tx_id, thee.entry.clone());
    }

    modifier.pending.revert(tx_id, thee.entry, current_slot);

    for meta in own_output_metas {
        modifier.addresses.delete(meta.address_id);
    }

    modifier
}

/// Left-fold of [`tracking_apply_tx_to_modifier`] over a stretch of
/// confirmed transactions in chain order.
pub fn tracking_apply_txs(
    creds: &WalletCredentials,
    db_used: &[(Id<Address>, Id<BlockHeader>)],
    info_fn: &impl Fn(&BlockHeader) -> BlockInfo,
    base: WalletModifier,
    txs: &[(SignedTransaction, TxUndo, BlockHeader)],
) -> WalletModifier {
    txs.iter().fold(base, |modifier, (tx, undo, header)| {
        tracking_apply_tx_to_modifier(creds, db_used, info_fn, modifier, (tx, undo, header))
    })
}

/// Left-fold of [`tracking_rollback_tx_to_modifier`]. `txs` must arrive
/// newest-first: the reverse of the order they were applied in.
pub fn tracking_rollback_txs(
    creds: &WalletCredentials,
    db_used: &[(Id<Address>, Id<BlockHeader>)],
    current_slot: SlotId,
    info_fn: &impl Fn(&BlockHeader) -> BlockInfo,
    base: WalletModifier,
    txs: &[(SignedTransaction, TxUndo, BlockHeader)],
) -> WalletModifier {
    txs.iter().fold(base, |modifier, (tx, undo, header)| {
        tracking_rollback_tx_to_modifier(
            creds,
            db_used,
            current_slot,
            info_fn,
            modifier,
            (tx, undo, header),
        )
    })
}
