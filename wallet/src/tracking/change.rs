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

use common::chain::Address;
use common::primitives::Id;
use wallet_types::WalletAddressMeta;

/// Decide which own outputs of a transaction are change rather than
/// payments received.
///
/// The rules, in order:
/// 1. an incoming transaction (no own inputs) has no change;
/// 2. candidates are own outputs in the account the first own input spends
///    from;
/// 3. of those, only addresses never seen on chain qualify;
/// 4. a transaction that pays exclusively to ourselves, with every own
///    output qualifying, marks nothing — there is no payment for the
///    change to be the remainder of;
/// 5. what is left is the change.
pub fn eval_change(
    all_used: &BTreeSet<Id<Address>>,
    own_inputs: &[WalletAddressMeta],
    own_outputs: &[WalletAddressMeta],
    all_outputs_ours: bool,
) -> Vec<Id<Address>> {
    let first_own_input = match own_inputs.first() {
        Some(meta) => meta,
        None => return Vec::new(),
    };
    let source_account = first_own_input.to_account_id();

    let candidates: Vec<&WalletAddressMeta> = own_outputs
        .iter()
        .filter(|meta| meta.to_account_id() == source_account)
        .collect();

    let potential_change: Vec<Id<Address>> = candidates
        .iter()
        .filter(|meta| !all_used.contains(&meta.address_id))
        .map(|meta| meta.address_id)
        .collect();

    let potential_set: BTreeSet<Id<Address>> = potential_change.iter().copied().collect();
    let all_own_outputs: BTreeSet<Id<Address>> =
        own_outputs.iter().map(|meta| meta.address_id).collect();

    if all_outputs_ours && potential_set == all_own_outputs {
        return Vec::new();
    }

    potential_change
}
