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

//! Slot arithmetic. Wall-clock time on the chain is divided into fixed-width
//! slots counted from the system start; a block is minted in exactly one
//! slot.

use serialization::{Decode, Encode};

use super::block::timestamp::BlockTimestamp;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Encode, Decode)]
pub struct SlotId(u64);

impl SlotId {
    pub const fn new(slot: u64) -> Self {
        SlotId(slot)
    }

    pub const fn into_int(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for SlotId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "slot {}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Encode, Decode)]
pub struct SlottingData {
    slot_duration_secs: u64,
}

impl SlottingData {
    pub const fn new(slot_duration_secs: u64) -> Self {
        SlottingData { slot_duration_secs }
    }

    pub const fn slot_duration_secs(self) -> u64 {
        self.slot_duration_secs
    }
}

/// Wall-clock start of `slot`, or `None` when the multiplication leaves the
/// representable range.
pub fn slot_start(
    system_start: BlockTimestamp,
    slot: SlotId,
    data: &SlottingData,
) -> Option<BlockTimestamp> {
    let offset = slot.0.checked_mul(data.slot_duration_secs)?;
    system_start.checked_add_secs(offset)
}
