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

/// Seconds since the unix epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Encode, Decode)]
pub struct BlockTimestamp {
    timestamp: u64,
}

impl BlockTimestamp {
    pub const fn from_int_seconds(timestamp: u64) -> Self {
        BlockTimestamp { timestamp }
    }

    pub const fn as_int_seconds(self) -> u64 {
        self.timestamp
    }

    pub fn checked_add_secs(self, secs: u64) -> Option<BlockTimestamp> {
        self.timestamp.checked_add(secs).map(|t| BlockTimestamp { timestamp: t })
    }
}

impl std::fmt::Display for BlockTimestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.timestamp)
    }
}
