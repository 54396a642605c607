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

//! Reconciliation of wallet tips with the chain tip.
//!
//! A wallet may lag the node (missed applications) or lead it (missed
//! rollbacks). One reconciliation pass first undoes any wallet blocks that
//! are no longer on the main chain, then walks the chain's forward links up
//! to the target, accumulating a single [`WalletModifier`] that is committed
//! atomically together with the new tip.
//!
//! Catch-up is two-phase. While the wallet is more than `k` blocks behind,
//! the engine works without the node's state lock: the chain cannot
//! reorganize deeper than `k`, so everything at and below `tip - (k + 1)` is
//! immutable. Only the final stretch, at most `k + 1` blocks, is reconciled
//! under the lock, so a deeply lagging wallet never stalls block validation.

pub mod view;


use common::chain::{slot_start, BlockHeader, ChainConfig, SignedTransaction, TxUndo};
use common::primitives::{BlockHeight, Id, Idable};
use crypto::key::hdkd::RootPrivateKey;
use logging::log;
use wallet_storage::{CustomAddressKind, WalletStorageWrite};
use wallet_types::delta::MapDelta;
use wallet_types::{PtxBlockInfo, WalletModifier, WalletTip};

use crate::credentials::WalletCredentials;
use crate::tracking::{tracking_apply_txs, tracking_rollback_txs, BlockInfo};
use view::{ChainstateView, Priority, SlottingView, StateLockView};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SyncError {
    /// The wallet database and the chain database disagree; this wallet
    /// cannot make progress until one of them is repaired.
    #[error("Internal error: {0}")]
    InternalError(String),
    #[error("Wallet database error: {0}")]
    Storage(#[from] wallet_storage::Error),
}

type SyncResult<T> = Result<T, SyncError>;

/// Bring every given wallet in line with the chain tip. A failure in one
/// wallet is logged with its id and does not keep the others from syncing.
pub fn sync_wallets_with_chainstate<C, S, L, DB>(
    chain_config: &ChainConfig,
    chainstate: &C,
    slotting: &S,
    state_lock: &L,
    db: &mut DB,
    root_keys: &[RootPrivateKey],
) where
    C: ChainstateView,
    S: SlottingView,
    L: StateLockView,
    DB: WalletStorageWrite,
{
    for root in root_keys {
        let creds = WalletCredentials::from_root_key(root);
        let wallet_id = creds.wallet_id();
        match sync_wallet(chain_config, chainstate, slotting, state_lock, db, &creds) {
            Ok(()) => log::debug!("Wallet {wallet_id} is synced with the chain"),
            Err(e) => log::error!("Failed to sync wallet {wallet_id}: {e}"),
        }
    }
}

/// Register a freshly imported wallet and run its first sync. Unlike the
/// bulk entry point, errors propagate: the caller of an import wants to
/// know.
pub fn sync_wallet_on_import<C, S, L, DB>(
    chain_config: &ChainConfig,
    chainstate: &C,
    slotting: &S,
    state_lock: &L,
    db: &mut DB,
    root_key: &RootPrivateKey,
) -> SyncResult<()>
where
    C: ChainstateView,
    S: SlottingView,
    L: StateLockView,
    DB: WalletStorageWrite,
{
    let creds = WalletCredentials::from_root_key(root_key);
    db.register_wallet(&creds.wallet_id())?;
    db.set_wallet_ready(&creds.wallet_id(), false)?;
    sync_wallet(chain_config, chainstate, slotting, state_lock, db, &creds)
}

fn sync_wallet<C, S, L, DB>(
    chain_config: &ChainConfig,
    chainstate: &C,
    slotting: &S,
    state_lock: &L,
    db: &mut DB,
    creds: &WalletCredentials,
) -> SyncResult<()>
where
    C: ChainstateView,
    S: SlottingView,
    L: StateLockView,
    DB: WalletStorageWrite,
{
    let wallet_id = creds.wallet_id();
    db.register_wallet(&wallet_id)?;

    let mut wallet_header = match db.get_wallet_sync_tip(&wallet_id)? {
        WalletTip::SyncedWith(header) => header,
        WalletTip::NotSynced => {
            seed_from_genesis(chain_config, db, creds)?;
            chain_config.genesis_id()
        }
    };

    // Phase 1, no lock: while the wallet is beyond the rollback horizon,
    // reconcile toward the highest header that can no longer be reorganized
    // away.
    let k = chain_config.blk_security_param();
    let wallet_difficulty = header_difficulty(chain_config, chainstate, &wallet_header)?;
    let (tip_id, tip_difficulty) = chainstate.tip();
    if tip_difficulty.into_int() > wallet_difficulty.into_int() + k {
        let headers = chainstate.load_headers_by_depth(k + 2, &tip_id);
        if let Some(stable) = headers.get((k + 1) as usize) {
            if stable.height() > wallet_difficulty {
                log::info!(
                    "Wallet {wallet_id} is {} blocks behind; catching up to height {} without the state lock",
                    tip_difficulty.into_int() - wallet_difficulty.into_int(),
                    stable.height(),
                );
                wallet_header = reconcile_and_commit(
                    chain_config,
                    chainstate,
                    slotting,
                    db,
                    creds,
                    wallet_header,
                    stable.get_id(),
                    stable.height(),
                )?;
            }
        }
    }

    // Phase 2: the remaining distance is at most k + 1 blocks, short enough
    // to finish under the lock with the tip frozen.
    state_lock.with_state_lock(Priority::High, |locked_tip| -> SyncResult<()> {
        let locked_difficulty = header_difficulty(chain_config, chainstate, &locked_tip)?;
        reconcile_and_commit(
            chain_config,
            chainstate,
            slotting,
            db,
            creds,
            wallet_header,
            locked_tip,
            locked_difficulty,
        )?;
        Ok(())
    })?;

    db.set_wallet_ready(&wallet_id, true)?;
    Ok(())
}

/// Difficulty of a committed wallet tip. The genesis id is a valid tip of
/// difficulty zero; anything else must be a header the chain database
/// knows.
fn header_difficulty<C: ChainstateView>(
    chain_config: &ChainConfig,
    chainstate: &C,
    header_id: &Id<BlockHeader>,
) -> SyncResult<BlockHeight> {
    if *header_id == chain_config.genesis_id() {
        return Ok(BlockHeight::zero());
    }
    chainstate
        .get_header(header_id)
        .map(|header| header.height())
        .ok_or_else(|| {
            SyncError::InternalError(format!(
                "wallet sync tip {header_id} is not known to the chain database"
            ))
        })
}

/// Insert the wallet-owned slice of the genesis distribution and move the
/// tip to the genesis id.
fn seed_from_genesis<DB: WalletStorageWrite>(
    chain_config: &ChainConfig,
    db: &mut DB,
    creds: &WalletCredentials,
) -> SyncResult<()> {
    let wallet_id = creds.wallet_id();
    let mut utxo_delta = MapDelta::new();
    for (outpoint, output) in chain_config.genesis().utxo() {
        if let Some(meta) = creds.classify(output.address()) {
            db.add_wallet_address(&meta)?;
            utxo_delta.insert(*outpoint, output.clone());
        }
    }
    db.update_wallet_utxo(&wallet_id, &utxo_delta)?;
    db.apply_modifier_to_wallet(&wallet_id, chain_config.genesis_id(), &WalletModifier::new())?;
    log::debug!("Wallet {wallet_id} seeded from genesis");
    Ok(())
}

fn block_txs_with_undo(
    block: &common::chain::Block,
    undo: &common::chain::BlockUndo,
) -> SyncResult<Vec<(SignedTransaction, TxUndo, BlockHeader)>> {
    utils::ensure!(
        block.transactions().len() == undo.tx_undos().len(),
        SyncError::InternalError(format!(
            "block {} carries {} transactions but {} undo records",
            block.get_id(),
            block.transactions().len(),
            undo.tx_undos().len()
        ))
    );
    Ok(block
        .transactions()
        .iter()
        .zip(undo.tx_undos().iter())
        .map(|(tx, tx_undo)| (tx.clone(), tx_undo.clone(), block.header().clone()))
        .collect())
}

/// Reconcile the wallet from `from` up to the target and commit the result
/// as one write. Returns the header id the wallet tip now points at:
/// normally the target, or an intermediate main-chain header if the forward
/// walk was cut short by a concurrent chain update (the commit is still a
/// consistent wallet state, and the next pass continues from there).
#[allow(clippy::too_many_arguments)]
fn reconcile_and_commit<C, S, DB>(
    chain_config: &ChainConfig,
    chainstate: &C,
    slotting: &S,
    db: &mut DB,
    creds: &WalletCredentials,
    from: Id<BlockHeader>,
    target_id: Id<BlockHeader>,
    target_difficulty: BlockHeight,
) -> SyncResult<Id<BlockHeader>>
where
    C: ChainstateView,
    S: SlottingView,
    DB: WalletStorageWrite,
{
    let wallet_id = creds.wallet_id();
    if from == target_id {
        return Ok(from);
    }
    // Validates that the wallet tip is known to the chain database.
    let _ = header_difficulty(chain_config, chainstate, &from)?;

    let db_used = db.get_custom_addresses(&wallet_id, CustomAddressKind::Used)?;
    let system_start = slotting.system_start();
    let slotting_data = slotting.slotting_data();
    let info_fn = |header: &BlockHeader| -> BlockInfo {
        let timestamp = slot_start(system_start, header.slot(), &slotting_data);
        BlockInfo {
            difficulty: Some(header.height()),
            timestamp,
            ptx: Some(PtxBlockInfo {
                difficulty: header.height(),
                timestamp,
                header: header.get_id(),
            }),
        }
    };

    let mut modifier = WalletModifier::new();
    let mut cursor = from;

    // Undo wallet blocks that are no longer on the main chain, newest
    // first, down to the fork point. A block is on the main chain iff its
    // parent's forward link points at it.
    if cursor != chain_config.genesis_id() {
        let off_main = |header: &BlockHeader| {
            chainstate.resolve_forward_link(&header.prev_block()) != Some(header.get_id())
        };
        let blunds = chainstate.load_blunds_while(&cursor, &off_main);
        if !blunds.is_empty() {
            let current_slot = slotting.current_slot_inaccurate();
            for (block, undo) in &blunds {
                let mut txs = block_txs_with_undo(block, undo)?;
                // Transactions are undone in the reverse of application
                // order.
                txs.reverse();
                modifier =
                    tracking_rollback_txs(creds, &db_used, current_slot, &info_fn, modifier, &txs);
            }
            cursor = blunds.last().expect("checked nonempty").0.header().prev_block();
            log::debug!(
                "Wallet {wallet_id}: rolled back {} blocks to fork point {cursor}",
                blunds.len()
            );
        }
    }

    // Walk the forward links up to the target difficulty.
    while cursor != target_id {
        let next = match chainstate.resolve_forward_link(&cursor) {
            Some(next) => next,
            None => break,
        };
        let (block, undo) = chainstate.get_blund(&next).ok_or_else(|| {
            SyncError::InternalError(format!(
                "main-chain block {next} has no blund in the chain database"
            ))
        })?;
        if block.header().height() > target_difficulty {
            break;
        }
        let txs = block_txs_with_undo(&block, &undo)?;
        modifier = tracking_apply_txs(creds, &db_used, &info_fn, modifier, &txs);
        cursor = next;
    }

    db.apply_modifier_to_wallet(&wallet_id, cursor, &modifier)?;
    log::debug!("Wallet {wallet_id} reconciled to {cursor}");
    Ok(cursor)
}
