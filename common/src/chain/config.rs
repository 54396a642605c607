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

use std::collections::BTreeMap;

use super::block::timestamp::BlockTimestamp;
use super::block::BlockHeader;
use super::genesis::Genesis;
use super::slotting::SlottingData;
use super::transaction::{TxOutput, UtxoOutPoint};
use crate::primitives::{Id, Idable};

/// Static chain parameters. Built once at startup and shared read-only.
#[derive(Debug, Clone)]
pub struct ChainConfig {
    blk_security_param: u64,
    system_start: BlockTimestamp,
    slotting_data: SlottingData,
    genesis: Genesis,
    genesis_id: Id<BlockHeader>,
}

impl ChainConfig {
    pub fn new(
        blk_security_param: u64,
        system_start: BlockTimestamp,
        slotting_data: SlottingData,
        genesis: Genesis,
    ) -> Self {
        let genesis_id = genesis.get_id();
        ChainConfig {
            blk_security_param,
            system_start,
            slotting_data,
            genesis,
            genesis_id,
        }
    }

    /// The consensus bound on reorganization depth: no fork can rewrite
    /// history deeper than this many blocks below the tip.
    pub fn blk_security_param(&self) -> u64 {
        self.blk_security_param
    }

    pub fn system_start(&self) -> BlockTimestamp {
        self.system_start
    }

    pub fn slotting_data(&self) -> &SlottingData {
        &self.slotting_data
    }

    pub fn genesis(&self) -> &Genesis {
        &self.genesis
    }

    pub fn genesis_id(&self) -> Id<BlockHeader> {
        self.genesis_id
    }
}

/// A tiny chain for unit tests: short rollback horizon, fast slots.
pub fn create_unit_test_config(
    blk_security_param: u64,
    genesis_utxo: BTreeMap<UtxoOutPoint, TxOutput>,
) -> ChainConfig {
    ChainConfig::new(
        blk_security_param,
        BlockTimestamp::from_int_seconds(1_600_000_000),
        SlottingData::new(20),
        Genesis::new(genesis_utxo),
    )
}
