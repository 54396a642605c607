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

//! The wallet database abstraction.
//!
//! The tracker talks to wallet persistence exclusively through these traits.
//! The one structural requirement is [`WalletStorageWrite::apply_modifier_to_wallet`]:
//! a whole reconciliation result and the new sync tip land in a single
//! atomic write, so readers never observe a half-applied block.

mod in_memory;

use std::collections::BTreeMap;

use common::chain::{Address, BlockHeader, Transaction, TxOutput, Utxo, UtxoOutPoint};
use common::primitives::Id;
use wallet_types::delta::MapDelta;
use wallet_types::{PtxBlockInfo, TxHistoryEntry, WalletAddressMeta, WalletId, WalletModifier, WalletTip};

pub use in_memory::InMemoryWalletStorage;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Unknown wallet: {0}")]
    UnknownWallet(WalletId),
}

/// Which per-address book to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomAddressKind {
    /// Addresses observed on chain.
    Used,
    /// Addresses the wallet picked as change.
    Change,
}

pub trait WalletStorageRead {
    fn get_wallet_sync_tip(&self, wallet_id: &WalletId) -> Result<WalletTip, Error>;

    /// The requested address book as `(address, first seen under header)`
    /// pairs.
    fn get_custom_addresses(
        &self,
        wallet_id: &WalletId,
        kind: CustomAddressKind,
    ) -> Result<Vec<(Id<Address>, Id<BlockHeader>)>, Error>;

    /// Owned addresses in discovery order.
    fn get_addresses(&self, wallet_id: &WalletId) -> Result<Vec<WalletAddressMeta>, Error>;

    fn get_utxo(&self, wallet_id: &WalletId) -> Result<Utxo, Error>;

    fn get_history(
        &self,
        wallet_id: &WalletId,
    ) -> Result<BTreeMap<Id<Transaction>, TxHistoryEntry>, Error>;

    fn get_pending_candidates(
        &self,
        wallet_id: &WalletId,
    ) -> Result<BTreeMap<Id<Transaction>, PtxBlockInfo>, Error>;

    fn is_wallet_ready(&self, wallet_id: &WalletId) -> Result<bool, Error>;
}

pub trait WalletStorageWrite: WalletStorageRead {
    /// Create the wallet's record if it does not exist yet. Idempotent.
    fn register_wallet(&mut self, wallet_id: &WalletId) -> Result<(), Error>;

    fn add_wallet_address(&mut self, meta: &WalletAddressMeta) -> Result<(), Error>;

    /// Direct UTXO adjustment outside block reconciliation (genesis
    /// seeding).
    fn update_wallet_utxo(
        &mut self,
        wallet_id: &WalletId,
        utxo_delta: &MapDelta<UtxoOutPoint, TxOutput>,
    ) -> Result<(), Error>;

    /// Apply a reconciliation result and move the sync tip to `new_tip`, as
    /// one atomic write.
    fn apply_modifier_to_wallet(
        &mut self,
        wallet_id: &WalletId,
        new_tip: Id<BlockHeader>,
        modifier: &WalletModifier,
    ) -> Result<(), Error>;

    fn set_wallet_ready(&mut self, wallet_id: &WalletId, ready: bool) -> Result<(), Error>;
}
