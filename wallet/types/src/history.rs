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

use common::chain::{BlockTimestamp, Transaction};
use common::primitives::{BlockHeight, Coin, Id, SignedCoin};
use serialization::{Decode, Encode};

/// Which way a transaction moved the wallet's balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Encode, Decode)]
pub enum TxDirection {
    #[codec(index = 0)]
    Incoming,
    #[codec(index = 1)]
    Outgoing,
    /// Own funds shuffled between own addresses with no net change.
    #[codec(index = 2)]
    Internal,
}

/// The wallet-facing record of one transaction that touched it.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub struct TxHistoryEntry {
    pub tx_id: Id<Transaction>,
    pub direction: TxDirection,
    /// Net effect on the wallet balance: own outputs minus own inputs.
    pub delta: SignedCoin,
    /// Total consumed from wallet-owned addresses.
    pub input_total: Coin,
    /// Total received to wallet-owned addresses.
    pub output_total: Coin,
    /// Difficulty of the confirming block, when known.
    pub difficulty: Option<BlockHeight>,
    /// Wall-clock slot start of the confirming block, when known.
    pub timestamp: Option<BlockTimestamp>,
}
