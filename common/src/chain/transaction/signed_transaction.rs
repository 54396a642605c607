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

use crypto::key::redeem::{RedeemPrivateKey, RedeemPublicKey};
use crypto::key::{PrivateKey, PublicKey, Signature, SignatureError};
use crypto::random::{CryptoRng, Rng};
use serialization::{Decode, Encode};

use super::{Transaction, TransactionCreationError};
use crate::primitives::{Id, Idable};

/// Spending authorization for one input. Signatures commit to the
/// transaction id, which covers every input and output (sighash-all
/// semantics).
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub enum InputWitness {
    #[codec(index = 0)]
    Standard {
        public_key: PublicKey,
        signature: Signature,
    },
    #[codec(index = 1)]
    Redeem {
        public_key: RedeemPublicKey,
        signature: Signature,
    },
}

/// A transaction together with one witness per input.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub struct SignedTransaction {
    transaction: Transaction,
    witnesses: Vec<InputWitness>,
}

impl SignedTransaction {
    pub fn new(
        transaction: Transaction,
        witnesses: Vec<InputWitness>,
    ) -> Result<Self, TransactionCreationError> {
        utils::ensure!(
            witnesses.len() == transaction.inputs().len(),
            TransactionCreationError::InvalidWitnessCount(
                witnesses.len(),
                transaction.inputs().len()
            )
        );
        Ok(SignedTransaction {
            transaction,
            witnesses,
        })
    }

    pub fn transaction(&self) -> &Transaction {
        &self.transaction
    }

    pub fn witnesses(&self) -> &[InputWitness] {
        &self.witnesses
    }
}

impl Idable for SignedTransaction {
    type Tag = Transaction;

    fn get_id(&self) -> Id<Transaction> {
        self.transaction.get_id()
    }
}

fn signature_message(tx: &Transaction) -> [u8; 32] {
    tx.get_id().to_hash().0
}

pub fn produce_input_witness<R: Rng + CryptoRng>(
    rng: &mut R,
    private_key: &PrivateKey,
    tx: &Transaction,
) -> Result<InputWitness, SignatureError> {
    let signature = private_key.sign_message(rng, &signature_message(tx))?;
    Ok(InputWitness::Standard {
        public_key: PublicKey::from_private_key(private_key),
        signature,
    })
}

pub fn produce_redeem_witness<R: Rng + CryptoRng>(
    rng: &mut R,
    redeem_key: &RedeemPrivateKey,
    tx: &Transaction,
) -> Result<InputWitness, SignatureError> {
    let signature = redeem_key.sign_message(rng, &signature_message(tx))?;
    Ok(InputWitness::Redeem {
        public_key: redeem_key.public_key(),
        signature,
    })
}

pub fn verify_input_witness(witness: &InputWitness, tx: &Transaction) -> bool {
    let msg = signature_message(tx);
    match witness {
        InputWitness::Standard {
            public_key,
            signature,
        } => public_key.verify_message(signature, &msg),
        InputWitness::Redeem {
            public_key,
            signature,
        } => public_key.verify_message(signature, &msg),
    }
}
