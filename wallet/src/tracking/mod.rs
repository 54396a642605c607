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

//! Incremental wallet-state modification under block apply and rollback.
//!
//! The entry extractor projects a chain transaction down to its
//! wallet-relevant parts; the apply/rollback operations fold those parts
//! into a [`WalletModifier`], a pure value the wallet database later
//! commits in one write. Rolling back a transaction is the exact inverse of
//! applying it, except for the pending-candidate revert token which records
//! information on purpose.

mod apply;
mod change;
mod entry;


use common::chain::BlockTimestamp;
use common::primitives::BlockHeight;
use wallet_types::PtxBlockInfo;

pub use apply::{
    construct_all_used, tracking_apply_tx_to_modifier, tracking_apply_txs,
    tracking_rollback_tx_to_modifier, tracking_rollback_txs,
};
pub use change::eval_change;
pub use entry::{build_tx_entry_extra, TxEntryExtra};

/// Per-header context the tracker needs while processing a block: the
/// confirmation difficulty and wall-clock time when known, plus the context
/// attached to pending candidates confirmed by that header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockInfo {
    pub difficulty: Option<BlockHeight>,
    pub timestamp: Option<BlockTimestamp>,
    pub ptx: Option<PtxBlockInfo>,
}
