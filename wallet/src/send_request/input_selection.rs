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

use std::collections::BTreeSet;

use common::chain::{TxOutput, Utxo, UtxoOutPoint};
use common::primitives::amount::sum_coins;
use common::primitives::Coin;
use itertools::Itertools;

use super::TxError;

/// How to pick inputs for an outgoing transaction. A closed enumeration
/// chosen by configuration, so behavior stays inspectable and testable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSelectionPolicy {
    /// Prefer fewer, larger inputs: the transaction exposes as few of our
    /// outputs as possible.
    OptimizeForSecurity,
    /// Prefer inputs that no pending transaction has locked, so a queue of
    /// unconfirmed transactions does not serialize on the same outputs.
    OptimizeForHighThroughput,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedInputs {
    pub inputs: Vec<(UtxoOutPoint, TxOutput)>,
    pub total: Coin,
}

/// Deterministically pick inputs from `utxo` covering `target`.
///
/// Redemption outputs are never allowed as ordinary inputs; when they are
/// the difference between covering the target and not, the failure says so
/// (`NotEnoughAllowedMoney` rather than `NotEnoughFunds`).
pub fn select_inputs(
    policy: InputSelectionPolicy,
    utxo: &Utxo,
    pending: &BTreeSet<UtxoOutPoint>,
    target: Coin,
) -> Result<SelectedInputs, TxError> {
    let grand_total = common::chain::utxo_total(utxo)
        .ok_or_else(|| TxError::GeneralTxError("owned utxo total overflows".into()))?;

    let allowed: Vec<(&UtxoOutPoint, &TxOutput)> =
        utxo.iter().filter(|(_, output)| !output.address().is_redeem()).collect();
    let allowed_total = sum_coins(allowed.iter().map(|(_, output)| output.value()))
        .ok_or_else(|| TxError::GeneralTxError("owned utxo total overflows".into()))?;

    if allowed_total < target {
        if grand_total >= target {
            return Err(TxError::NotEnoughAllowedMoney(allowed_total, target));
        }
        return Err(TxError::NotEnoughFunds(grand_total, target));
    }

    let ordered: Vec<(&UtxoOutPoint, &TxOutput)> = match policy {
        InputSelectionPolicy::OptimizeForSecurity => allowed
            .into_iter()
            .sorted_by(|(ap, ao), (bp, bo)| {
                bo.value().cmp(&ao.value()).then_with(|| ap.cmp(bp))
            })
            .collect(),
        InputSelectionPolicy::OptimizeForHighThroughput => {
            // Unlocked outputs first; locked ones remain usable as a last
            // resort rather than failing the request outright.
            let (free, locked): (Vec<_>, Vec<_>) =
                allowed.into_iter().partition(|(outpoint, _)| !pending.contains(*outpoint));
            free.into_iter()
                .sorted_by_key(|(outpoint, _)| **outpoint)
                .chain(locked.into_iter().sorted_by_key(|(outpoint, _)| **outpoint))
                .collect()
        }
    };

    let mut inputs = Vec::new();
    let mut total = Coin::ZERO;
    for (outpoint, output) in ordered {
        if total >= target {
            break;
        }
        total = (total + output.value()).expect("bounded by the checked grand total");
        inputs.push((*outpoint, output.clone()));
    }

    Ok(SelectedInputs { inputs, total })
}
