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

use common::chain::{Address, BlockHeader, Transaction, TxOutput, Utxo, UtxoOutPoint};
use common::primitives::Id;
use wallet_types::delta::MapDelta;
use wallet_types::{
    PendingOp, PtxBlockInfo, TxHistoryEntry, WalletAddressMeta, WalletId, WalletModifier,
    WalletTip,
};

use crate::{CustomAddressKind, Error, WalletStorageRead, WalletStorageWrite};

#[derive(Debug, Clone)]
struct WalletRecord {
    sync_tip: WalletTip,
    ready: bool,
    addresses: Vec<WalletAddressMeta>,
    used: BTreeMap<Id<Address>, Id<BlockHeader>>,
    change: BTreeMap<Id<Address>, Id<BlockHeader>>,
    utxo: Utxo,
    history: BTreeMap<Id<Transaction>, TxHistoryEntry>,
    pending: BTreeMap<Id<Transaction>, PtxBlockInfo>,
}

impl WalletRecord {
    fn new() -> Self {
        WalletRecord {
            sync_tip: WalletTip::NotSynced,
            ready: false,
            addresses: Vec::new(),
            used: BTreeMap::new(),
            change: BTreeMap::new(),
            utxo: BTreeMap::new(),
            history: BTreeMap::new(),
            pending: BTreeMap::new(),
        }
    }

    fn apply_utxo_delta(&mut self, delta: &MapDelta<UtxoOutPoint, TxOutput>) {
        for outpoint in delta.deletions() {
            self.utxo.remove(outpoint);
        }
        for (outpoint, output) in delta.insertions() {
            self.utxo.insert(*outpoint, output.clone());
        }
    }

    fn apply_modifier(&mut self, new_tip: Id<BlockHeader>, modifier: &WalletModifier) {
        for id in modifier.addresses.deletions() {
            self.addresses.retain(|meta| meta.address_id != *id);
        }
        for meta in modifier.addresses.insertions() {
            if !self.addresses.iter().any(|m| m.address_id == meta.address_id) {
                self.addresses.push(meta.clone());
            }
        }

        // The address books record where an address was *first* seen, so an
        // insertion never overwrites, and a deletion only takes effect when
        // it names the recorded header (a rollback of some later sighting is
        // a no-op).
        for (addr, header) in modifier.used.deletions() {
            if self.used.get(addr) == Some(header) {
                self.used.remove(addr);
            }
        }
        for (addr, header) in modifier.used.insertions() {
            self.used.entry(*addr).or_insert(*header);
        }
        for (addr, header) in modifier.change.deletions() {
            if self.change.get(addr) == Some(header) {
                self.change.remove(addr);
            }
        }
        for (addr, header) in modifier.change.insertions() {
            self.change.entry(*addr).or_insert(*header);
        }

        for tx_id in modifier.history.deletions() {
            self.history.remove(tx_id);
        }
        for (tx_id, entry) in modifier.history.insertions() {
            self.history.insert(*tx_id, entry.clone());
        }

        self.apply_utxo_delta(&modifier.utxo);

        for (tx_id, op) in modifier.pending.ops() {
            match op {
                PendingOp::Confirmed(info) => {
                    self.pending.insert(*tx_id, info.clone());
                }
                PendingOp::Reverted(_, _) => {
                    self.pending.remove(tx_id);
                }
            }
        }

        self.sync_tip = WalletTip::SyncedWith(new_tip);
    }
}

/// Wallet storage backed by plain maps. The store of the test suite and of
/// nodes that keep wallet state hot; each `&mut self` call is one atomic
/// write from the point of view of any reader.
#[derive(Debug, Clone, Default)]
pub struct InMemoryWalletStorage {
    wallets: BTreeMap<WalletId, WalletRecord>,
}

impl InMemoryWalletStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn wallet(&self, wallet_id: &WalletId) -> Result<&WalletRecord, Error> {
        self.wallets.get(wallet_id).ok_or(Error::UnknownWallet(*wallet_id))
    }

    fn wallet_mut(&mut self, wallet_id: &WalletId) -> Result<&mut WalletRecord, Error> {
        self.wallets.get_mut(wallet_id).ok_or(Error::UnknownWallet(*wallet_id))
    }
}

impl WalletStorageRead for InMemoryWalletStorage {
    fn get_wallet_sync_tip(&self, wallet_id: &WalletId) -> Result<WalletTip, Error> {
        Ok(self.wallet(wallet_id)?.sync_tip)
    }

    fn get_custom_addresses(
        &self,
        wallet_id: &WalletId,
        kind: CustomAddressKind,
    ) -> Result<Vec<(Id<Address>, Id<BlockHeader>)>, Error> {
        let record = self.wallet(wallet_id)?;
        let book = match kind {
            CustomAddressKind::Used => &record.used,
            CustomAddressKind::Change => &record.change,
        };
        Ok(book.iter().map(|(addr, header)| (*addr, *header)).collect())
    }

    fn get_addresses(&self, wallet_id: &WalletId) -> Result<Vec<WalletAddressMeta>, Error> {
        Ok(self.wallet(wallet_id)?.addresses.clone())
    }

    fn get_utxo(&self, wallet_id: &WalletId) -> Result<Utxo, Error> {
        Ok(self.wallet(wallet_id)?.utxo.clone())
    }

    fn get_history(
        &self,
        wallet_id: &WalletId,
    ) -> Result<BTreeMap<Id<Transaction>, TxHistoryEntry>, Error> {
        Ok(self.wallet(wallet_id)?.history.clone())
    }

    fn get_pending_candidates(
        &self,
        wallet_id: &WalletId,
    ) -> Result<BTreeMap<Id<Transaction>, PtxBlockInfo>, Error> {
        Ok(self.wallet(wallet_id)?.pending.clone())
    }

    fn is_wallet_ready(&self, wallet_id: &WalletId) -> Result<bool, Error> {
        Ok(self.wallet(wallet_id)?.ready)
    }
}

impl WalletStorageWrite for InMemoryWalletStorage {
    fn register_wallet(&mut self, wallet_id: &WalletId) -> Result<(), Error> {
        self.wallets.entry(*wallet_id).or_insert_with(WalletRecord::new);
        Ok(())
    }

    fn add_wallet_address(&mut self, meta: &WalletAddressMeta) -> Result<(), Error> {
        let record = self.wallet_mut(&meta.wallet_id)?;
        if !record.addresses.iter().any(|m| m.address_id == meta.address_id) {
            record.addresses.push(meta.clone());
        }
        Ok(())
    }

    fn update_wallet_utxo(
        &mut self,
        wallet_id: &WalletId,
        utxo_delta: &MapDelta<UtxoOutPoint, TxOutput>,
    ) -> Result<(), Error> {
        self.wallet_mut(wallet_id)?.apply_utxo_delta(utxo_delta);
        Ok(())
    }

    fn apply_modifier_to_wallet(
        &mut self,
        wallet_id: &WalletId,
        new_tip: Id<BlockHeader>,
        modifier: &WalletModifier,
    ) -> Result<(), Error> {
        self.wallet_mut(wallet_id)?.apply_modifier(new_tip, modifier);
        Ok(())
    }

    fn set_wallet_ready(&mut self, wallet_id: &WalletId, ready: bool) -> Result<(), Error> {
        self.wallet_mut(wallet_id)?.ready = ready;
        Ok(())
    }
}
