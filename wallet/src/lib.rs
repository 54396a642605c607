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

//! Wallet tracking core.
//!
//! Keeps each wallet's view of the chain (addresses, UTXO, history, pending
//! candidates) coherent with the node's chain state as blocks are applied
//! and rolled back, and prepares outgoing transactions from the tracked
//! UTXO. Everything the tracker needs from the node is injected through the
//! traits in [`sync::view`], [`submission`] and [`wallet_storage`].

pub mod credentials;
pub mod send_request;
pub mod submission;
pub mod sync;
pub mod tracking;

pub use credentials::WalletCredentials;
pub use send_request::{
    decode_address_base16, decode_signed_tx_base16, prepare_mtx, prepare_redemption_tx,
    submit_tx, InputSelectionPolicy, SafeSigner, TxError,
};
pub use submission::{
    send_tx_outs, submit_and_save, submit_tx_raw, MempoolSnapshot, TransactionDispatch,
};
pub use sync::{sync_wallet_on_import, sync_wallets_with_chainstate, SyncError};
pub use tracking::{
    eval_change, tracking_apply_tx_to_modifier, tracking_apply_txs, tracking_rollback_txs,
};
