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

pub mod address_meta;
pub mod delta;
pub mod history;
pub mod modifier;
pub mod pending;
pub mod wallet_id;
pub mod wallet_tip;

pub use address_meta::WalletAddressMeta;
pub use delta::{AddressDelta, DeltaOp, MapDelta, SetDelta, SetOp};
pub use history::{TxDirection, TxHistoryEntry};
pub use modifier::{PendingDelta, WalletModifier};
pub use pending::{PendingOp, PtxBlockInfo};
pub use wallet_id::{AccountId, WalletId};
pub use wallet_tip::WalletTip;
