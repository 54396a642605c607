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

//! The node capabilities the sync engine consumes, as explicit interfaces.
//! Production wires these to the chain database, the slotting service and
//! the node's state lock; tests substitute in-memory fakes.

use common::chain::{BlockHeader, BlockTimestamp, Blund, SlotId, SlottingData};
use common::primitives::{BlockHeight, Id};

/// Read access to the node's chain database.
pub trait ChainstateView {
    /// The current main-chain tip and its difficulty. The genesis id with
    /// difficulty zero when no block has been applied yet.
    fn tip(&self) -> (Id<BlockHeader>, BlockHeight);

    fn get_header(&self, id: &Id<BlockHeader>) -> Option<BlockHeader>;

    /// The block and its undo data. Present for every block the node has
    /// applied, including ones later rolled back (rollback needs them).
    fn get_blund(&self, id: &Id<BlockHeader>) -> Option<Blund>;

    /// The next main-chain header above `id`, if `id` is on the main chain
    /// and not the tip.
    fn resolve_forward_link(&self, id: &Id<BlockHeader>) -> Option<Id<BlockHeader>>;

    /// Up to `count` headers, newest first, starting from `from` inclusive
    /// and following parent links. Stops early at the first block above
    /// genesis.
    fn load_headers_by_depth(&self, count: u64, from: &Id<BlockHeader>) -> Vec<BlockHeader>;

    /// Blunds newest first, starting from `from` inclusive and following
    /// parent links while `pred` holds for the block's header.
    fn load_blunds_while(
        &self,
        from: &Id<BlockHeader>,
        pred: &dyn Fn(&BlockHeader) -> bool,
    ) -> Vec<Blund>;
}

/// Read access to the node's slotting state.
pub trait SlottingView {
    fn system_start(&self) -> BlockTimestamp;

    fn slotting_data(&self) -> SlottingData;

    /// Best-effort current slot. May be behind wall clock while the node is
    /// itself catching up; only used for bookkeeping, never for consensus.
    fn current_slot_inaccurate(&self) -> SlotId;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    Normal,
    High,
}

/// The node's single lock guarding chain tip advancement.
pub trait StateLockView {
    /// Run `f` with the tip frozen at the id passed to it.
    fn with_state_lock<R>(
        &self,
        priority: Priority,
        f: impl FnOnce(Id<BlockHeader>) -> R,
    ) -> R;
}
