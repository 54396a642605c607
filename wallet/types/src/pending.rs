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

use common::chain::{BlockHeader, BlockTimestamp, SlotId};
use common::primitives::{BlockHeight, Id};
use serialization::{Decode, Encode};

use crate::history::TxHistoryEntry;

/// Block context attached to a pending transaction when the chain confirms
/// it.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub struct PtxBlockInfo {
    pub difficulty: BlockHeight,
    pub timestamp: Option<BlockTimestamp>,
    pub header: Id<BlockHeader>,
}

/// One pending-candidate bookkeeping step. A block apply confirms the
/// candidate; a rollback reverts it, remembering what was known about the
/// transaction and when the reversal was observed so the pending machinery
/// can decide whether to resubmit.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub enum PendingOp {
    #[codec(index = 0)]
    Confirmed(PtxBlockInfo),
    #[codec(index = 1)]
    Reverted(TxHistoryEntry, SlotId),
}
