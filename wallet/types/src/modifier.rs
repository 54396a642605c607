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

use common::chain::{Address, BlockHeader, SlotId, Transaction, TxOutput, UtxoOutPoint};
use common::primitives::Id;
use serialization::{Decode, Encode};

use crate::delta::{AddressDelta, MapDelta, SetDelta};
use crate::history::TxHistoryEntry;
use crate::pending::{PendingOp, PtxBlockInfo};

/// Delta over the pending-transaction candidates. Per transaction the later
/// bookkeeping step wins; a confirm followed by a revert leaves the revert,
/// which is deliberate — the revert token carries information the pending
/// machinery needs even when the two cancel on the candidate set itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Encode, Decode)]
pub struct PendingDelta {
    ops: BTreeMap<Id<Transaction>, PendingOp>,
}

impl PendingDelta {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn confirm(&mut self, tx_id: Id<Transaction>, info: PtxBlockInfo) {
        self.ops.insert(tx_id, PendingOp::Confirmed(info));
    }

    pub fn revert(&mut self, tx_id: Id<Transaction>, entry: TxHistoryEntry, slot: SlotId) {
        self.ops.insert(tx_id, PendingOp::Reverted(entry, slot));
    }

    pub fn ops(&self) -> impl Iterator<Item = (&Id<Transaction>, &PendingOp)> {
        self.ops.iter()
    }

    pub fn compose(mut self, later: Self) -> Self {
        self.ops.extend(later.ops);
        self
    }
}

/// The accumulated effect of applying or rolling back chain events on one
/// wallet. A plain value: building one performs no I/O, and the wallet
/// database consumes it in a single atomic write.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub struct WalletModifier {
    /// Newly discovered (or, on rollback, withdrawn) own addresses.
    pub addresses: AddressDelta,
    /// Per-transaction history entries.
    pub history: MapDelta<Id<Transaction>, TxHistoryEntry>,
    /// Addresses observed on chain, tagged with the header that showed them.
    pub used: SetDelta<(Id<Address>, Id<BlockHeader>)>,
    /// Wallet-chosen change addresses, tagged the same way.
    pub change: SetDelta<(Id<Address>, Id<BlockHeader>)>,
    /// This wallet's unspent outputs.
    pub utxo: MapDelta<UtxoOutPoint, TxOutput>,
    /// Pending-transaction candidate bookkeeping.
    pub pending: PendingDelta,
}

impl Default for WalletModifier {
    fn default() -> Self {
        Self::new()
    }
}

impl WalletModifier {
    pub fn new() -> Self {
        WalletModifier {
            addresses: AddressDelta::new(),
            history: MapDelta::new(),
            used: SetDelta::new(),
            change: SetDelta::new(),
            utxo: MapDelta::new(),
            pending: PendingDelta::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
            && self.history.is_empty()
            && self.used.is_empty()
            && self.change.is_empty()
            && self.utxo.is_empty()
            && self.pending.is_empty()
    }

    /// Sequential composition: the result describes "`self`, then `later`".
    pub fn compose(self, later: Self) -> Self {
        WalletModifier {
            addresses: self.addresses.compose(later.addresses),
            history: self.history.compose(later.history),
            used: self.used.compose(later.used),
            change: self.change.compose(later.change),
            utxo: self.utxo.compose(later.utxo),
            pending: self.pending.compose(later.pending),
        }
    }

    /// The same modifier with pending-candidate bookkeeping dropped. The
    /// revert token is the one part of a rollback that is not the mirror
    /// image of the apply, so inverse-law checks compare modifiers through
    /// this projection.
    pub fn without_pending(mut self) -> Self {
        self.pending = PendingDelta::new();
        self
    }
}
