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

use serialization::{Decode, Encode};
use thiserror::Error;
use utils::TypeName;

use crate::primitives::{hash_encoded, Id, Idable};
use crate::text_summary::TextSummary;

pub mod input;
pub use input::*;

pub mod output;
pub use output::*;

pub mod signed_transaction;

/// Free-form tagged extension data. Unknown tags are carried verbatim so a
/// transaction produced by a newer node round-trips through an older one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Encode, Decode)]
pub struct TxAttributes {
    entries: BTreeMap<u8, Vec<u8>>,
}

impl TxAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransactionCreationError {
    #[error("Transactions must have at least one input")]
    EmptyInputs,
    #[error("Transactions must have at least one output")]
    EmptyOutputs,
    #[error("The number of signatures ({0}) does not match the number of inputs ({1})")]
    InvalidWitnessCount(usize, usize),
}

#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub struct Transaction {
    inputs: Vec<TxInput>,
    outputs: Vec<TxOutput>,
    attributes: TxAttributes,
}

impl Transaction {
    pub fn new(
        inputs: Vec<TxInput>,
        outputs: Vec<TxOutput>,
        attributes: TxAttributes,
    ) -> Result<Self, TransactionCreationError> {
        utils::ensure!(!inputs.is_empty(), TransactionCreationError::EmptyInputs);
        utils::ensure!(!outputs.is_empty(), TransactionCreationError::EmptyOutputs);
        Ok(Transaction {
            inputs,
            outputs,
            attributes,
        })
    }

    pub fn inputs(&self) -> &[TxInput] {
        &self.inputs
    }

    pub fn outputs(&self) -> &[TxOutput] {
        &self.outputs
    }

    pub fn attributes(&self) -> &TxAttributes {
        &self.attributes
    }
}

impl Idable for Transaction {
    type Tag = Transaction;

    fn get_id(&self) -> Id<Transaction> {
        Id::new(hash_encoded(self))
    }
}

impl TypeName for Transaction {
    fn typename_str() -> &'static str {
        "Transaction"
    }
}

impl TextSummary for Transaction {
    fn text_summary(&self) -> String {
        let out_total = crate::primitives::amount::sum_coins(
            self.outputs.iter().map(|out| out.value()),
        );
        match out_total {
            Some(total) => format!(
                "Tx({}, {} in, {} out, total {})",
                self.get_id(),
                self.inputs.len(),
                self.outputs.len(),
                total,
            ),
            None => format!(
                "Tx({}, {} in, {} out, total overflows)",
                self.get_id(),
                self.inputs.len(),
                self.outputs.len(),
            ),
        }
    }
}

/// What a transaction consumed, one entry per input in input order. Required
/// so that undoing a transaction is a local operation with no chain lookups.
pub type TxUndo = Vec<TxOutput>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::{Address, Destination};
    use crate::primitives::{Coin, H256};

    fn some_output(mark: u64) -> TxOutput {
        TxOutput::new(
            Coin::from_atoms(100),
            Address::new(Destination::PublicKeyHash(H256::from_low_u64_be(mark))),
        )
    }

    #[test]
    fn empty_sides_are_rejected() {
        let input = TxInput::utxo(Id::new(H256::from_low_u64_be(1)), 0);
        assert_eq!(
            Transaction::new(vec![], vec![some_output(1)], TxAttributes::new()),
            Err(TransactionCreationError::EmptyInputs)
        );
        assert_eq!(
            Transaction::new(vec![input], vec![], TxAttributes::new()),
            Err(TransactionCreationError::EmptyOutputs)
        );
    }

    #[test]
    fn id_changes_with_content() {
        let input = TxInput::utxo(Id::new(H256::from_low_u64_be(1)), 0);
        let tx1 = Transaction::new(
            vec![input.clone()],
            vec![some_output(1)],
            TxAttributes::new(),
        )
        .unwrap();
        let tx2 =
            Transaction::new(vec![input], vec![some_output(2)], TxAttributes::new()).unwrap();
        assert_ne!(tx1.get_id(), tx2.get_id());
        assert_eq!(tx1.get_id(), tx1.clone().get_id());
    }
}
