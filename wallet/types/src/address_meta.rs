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

use common::chain::Address;
use common::primitives::Id;
use crypto::key::hdkd::U31;
use serialization::{Decode, Encode};

use crate::wallet_id::{AccountId, WalletId};

/// An owned address together with its position in the wallet's key
/// hierarchy and its chain-visible identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Encode, Decode)]
pub struct WalletAddressMeta {
    pub wallet_id: WalletId,
    pub account: U31,
    pub index: U31,
    pub address_id: Id<Address>,
}

impl WalletAddressMeta {
    pub fn to_account_id(&self) -> AccountId {
        AccountId::new(self.wallet_id, self.account)
    }
}
