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

/// Distance of a block from genesis on the main chain. Doubles as the chain
/// difficulty measure: a longer chain is a heavier chain.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Encode, Decode)]
pub struct BlockHeight(u64);

impl BlockHeight {
    pub const fn new(height: u64) -> Self {
        BlockHeight(height)
    }

    pub const fn zero() -> Self {
        BlockHeight(0)
    }

    pub const fn into_int(self) -> u64 {
        self.0
    }

    pub fn next_height(self) -> BlockHeight {
        BlockHeight(self.0.checked_add(1).expect("block height overflow"))
    }

    pub fn checked_add(self, delta: u64) -> Option<BlockHeight> {
        self.0.checked_add(delta).map(BlockHeight)
    }

    pub fn saturating_sub(self, delta: u64) -> BlockHeight {
        BlockHeight(self.0.saturating_sub(delta))
    }
}

impl std::fmt::Display for BlockHeight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
