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

use serialization::{Decode, Encode};

use crate::chain::address::Address;
use crate::primitives::Coin;

#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub struct TxOutput {
    value: Coin,
    address: Address,
}

impl TxOutput {
    pub fn new(value: Coin, address: Address) -> Self {
        TxOutput { value, address }
    }

    pub fn value(&self) -> Coin {
        self.value
    }

    pub fn address(&self) -> &Address {
        &self.address
    }
}
