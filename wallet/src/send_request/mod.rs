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

//! Construction of outgoing transactions from tracked UTXO.
//!
//! All entry points are pure over the node-provided closures: they read
//! UTXO through `get_own_utxos`, pick inputs under an
//! [`InputSelectionPolicy`], balance the request with a fee and a change
//! output, and sign every input with the key its owner supplies.

mod input_selection;


use std::collections::BTreeSet;

use common::chain::address::make_redeem_address;
use common::chain::{
    produce_input_witness, produce_redeem_witness, Address, SignedTransaction, Transaction,
    TxAttributes, TxInput, TxOutput, Utxo, UtxoOutPoint,
};
use common::primitives::amount::sum_coins;
use common::primitives::{Coin, Id, Idable};
use crypto::key::redeem::RedeemPrivateKey;
use crypto::key::{PrivateKey, PublicKey};
use crypto::random::{CryptoRng, Rng};
use serialization::{DecodeAll, Encode};
use utils::ensure;

pub use input_selection::{select_inputs, InputSelectionPolicy, SelectedInputs};

use crate::submission::{submit_and_save, MempoolSnapshot, TransactionDispatch};

/// Builder-layer failures. Surfaced to the caller of the public builder and
/// submission entry points; never swallowed.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum TxError {
    #[error("Not enough funds: available {0}, required {1}")]
    NotEnoughFunds(Coin, Coin),
    #[error("Not enough money on allowed inputs: allowed {0}, required {1}")]
    NotEnoughAllowedMoney(Coin, Coin),
    #[error("Fee selection did not stabilize after {0} rounds")]
    FailedToStabilize(usize),
    #[error("Output address {0} is a redemption address")]
    OutputIsRedeem(Id<Address>),
    #[error("Redemption address {0} holds no balance")]
    RedemptionDepleted(Id<Address>),
    #[error("No signer available for address {0}")]
    SafeSignerNotFound(Id<Address>),
    #[error("Externally signed transaction is not valid base16")]
    SignedTxNotBase16,
    #[error("Invalid address format: {0}")]
    InvalidAddressFormat(String),
    #[error("{0}")]
    GeneralTxError(String),
}

type TxResult<T> = Result<T, TxError>;

// Linear fee: base plus a per-byte rate over the estimated signed size.
// Fixed constants keep test vectors deterministic; a fee market is a
// node-level concern.
const TX_FEE_BASE_ATOMS: u128 = 155_381;
const TX_FEE_PER_BYTE_ATOMS: u128 = 44;

// A standard witness encodes to a known size; inputs are priced before the
// witnesses exist.
const WITNESS_SIZE_ESTIMATE: usize = 112;

const FEE_STABILIZATION_ROUNDS: usize = 5;

fn minimum_fee(estimated_size: usize) -> TxResult<Coin> {
    let variable = (Coin::from_atoms(TX_FEE_PER_BYTE_ATOMS) * estimated_size as u128)
        .ok_or_else(|| TxError::GeneralTxError("fee computation overflows".into()))?;
    (Coin::from_atoms(TX_FEE_BASE_ATOMS) + variable)
        .ok_or_else(|| TxError::GeneralTxError("fee computation overflows".into()))
}

fn estimated_signed_size(tx: &Transaction) -> usize {
    tx.encode().len() + tx.inputs().len() * WITNESS_SIZE_ESTIMATE
}

/// A single-owner signer: one key, its public key, and the bare address
/// they control.
#[derive(Debug, Clone)]
pub struct SafeSigner {
    private_key: PrivateKey,
    public_key: PublicKey,
}

impl SafeSigner {
    pub fn new(private_key: PrivateKey) -> Self {
        let public_key = PublicKey::from_private_key(&private_key);
        SafeSigner {
            private_key,
            public_key,
        }
    }

    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    pub fn address(&self) -> Address {
        Address::from_public_key(&self.public_key, None)
    }
}

struct BalancedRequest {
    inputs: Vec<(UtxoOutPoint, TxOutput)>,
    outputs: Vec<TxOutput>,
}

/// Pick inputs and balance them against `outputs` plus the fee, minting a
/// change output when a remainder is left. The fee depends on the selected
/// inputs and the selection depends on the fee, so the two are iterated to
/// a fixpoint; failure to converge within a few rounds is reported rather
/// than looping.
fn balance_request(
    policy: InputSelectionPolicy,
    utxo: &Utxo,
    pending: &BTreeSet<UtxoOutPoint>,
    outputs: &[TxOutput],
    change_address: impl FnOnce() -> TxResult<Address>,
) -> TxResult<BalancedRequest> {
    ensure!(
        !outputs.is_empty(),
        TxError::GeneralTxError("a payment needs at least one output".into())
    );
    for output in outputs {
        ensure!(
            !output.address().is_redeem(),
            TxError::OutputIsRedeem(output.address().get_id())
        );
    }

    let out_total = sum_coins(outputs.iter().map(|output| output.value()))
        .ok_or_else(|| TxError::GeneralTxError("requested output total overflows".into()))?;

    let mut change_address = Some(change_address);
    let mut allocated_change: Option<Address> = None;
    let mut fee = minimum_fee(0)?;

    for _ in 0..FEE_STABILIZATION_ROUNDS {
        let target = (out_total + fee)
            .ok_or_else(|| TxError::GeneralTxError("payment target overflows".into()))?;
        let selection = select_inputs(policy, utxo, pending, target)?;

        let change = (selection.total - target).expect("selection covers the target");
        let mut final_outputs = outputs.to_vec();
        if change > Coin::ZERO {
            // The change address is allocated once and reused across
            // rounds; rounds must not mint a fresh address each.
            let address = match &allocated_change {
                Some(address) => address.clone(),
                None => {
                    let taker = change_address.take().expect("allocated at most once");
                    let address = taker()?;
                    allocated_change = Some(address.clone());
                    address
                }
            };
            final_outputs.push(TxOutput::new(change, address));
        }

        let inputs: Vec<TxInput> = selection
            .inputs
            .iter()
            .map(|(outpoint, _)| TxInput::Utxo(*outpoint))
            .collect();
        let candidate = Transaction::new(inputs, final_outputs.clone(), TxAttributes::new())
            .map_err(|e| TxError::GeneralTxError(e.to_string()))?;

        let required_fee = minimum_fee(estimated_signed_size(&candidate))?;
        if required_fee <= fee {
            return Ok(BalancedRequest {
                inputs: selection.inputs,
                outputs: final_outputs,
            });
        }
        fee = required_fee;
    }

    Err(TxError::FailedToStabilize(FEE_STABILIZATION_ROUNDS))
}

fn sign_request<R: Rng + CryptoRng>(
    rng: &mut R,
    signer_for_addr: impl Fn(&Address) -> Option<PrivateKey>,
    request: BalancedRequest,
) -> TxResult<SignedTransaction> {
    let inputs: Vec<TxInput> = request
        .inputs
        .iter()
        .map(|(outpoint, _)| TxInput::Utxo(*outpoint))
        .collect();
    let tx = Transaction::new(inputs, request.outputs, TxAttributes::new())
        .map_err(|e| TxError::GeneralTxError(e.to_string()))?;

    let witnesses = request
        .inputs
        .iter()
        .map(|(_, consumed)| {
            let owner = consumed.address();
            let key = signer_for_addr(owner)
                .ok_or_else(|| TxError::SafeSignerNotFound(owner.get_id()))?;
            produce_input_witness(rng, &key, &tx)
                .map_err(|e| TxError::GeneralTxError(e.to_string()))
        })
        .collect::<TxResult<Vec<_>>>()?;

    SignedTransaction::new(tx, witnesses).map_err(|e| TxError::GeneralTxError(e.to_string()))
}

/// Build and sign a transaction spending UTXO owned by `source_addrs`,
/// where each input may belong to a different owner. Returns the signed
/// transaction and the final output list, change included.
#[allow(clippy::too_many_arguments)]
pub fn prepare_mtx<R: Rng + CryptoRng>(
    rng: &mut R,
    get_own_utxos: impl FnOnce(&[Address]) -> TxResult<Utxo>,
    signer_for_addr: impl Fn(&Address) -> Option<PrivateKey>,
    pending: &BTreeSet<UtxoOutPoint>,
    policy: InputSelectionPolicy,
    source_addrs: &[Address],
    outputs: &[TxOutput],
    change_address: impl FnOnce() -> TxResult<Address>,
) -> TxResult<(SignedTransaction, Vec<TxOutput>)> {
    let utxo = get_own_utxos(source_addrs)?;
    let request = balance_request(policy, &utxo, pending, outputs, change_address)?;
    let outputs = request.outputs.clone();
    let tx = sign_request(rng, signer_for_addr, request)?;
    Ok((tx, outputs))
}

/// Single-owner convenience path: resolve the owner's address from the
/// signer, build under the default policy, then submit and save into the
/// caller's mempool snapshot.
#[allow(clippy::too_many_arguments)]
pub fn submit_tx<R: Rng + CryptoRng, D: TransactionDispatch, M: MempoolSnapshot>(
    rng: &mut R,
    dispatch: &D,
    mempool: &mut M,
    get_own_utxos: impl FnOnce(&[Address]) -> TxResult<Utxo>,
    pending: &BTreeSet<UtxoOutPoint>,
    signer: &SafeSigner,
    outputs: &[TxOutput],
    change_address: impl FnOnce() -> TxResult<Address>,
) -> TxResult<(SignedTransaction, Vec<TxOutput>)> {
    let source = signer.address();
    let key = signer.private_key.clone();
    let (tx, outs) = prepare_mtx(
        rng,
        get_own_utxos,
        move |addr| (*addr == source).then(|| key.clone()),
        pending,
        InputSelectionPolicy::OptimizeForSecurity,
        &[signer.address()],
        outputs,
        change_address,
    )?;
    submit_and_save(mempool, dispatch, &tx);
    Ok((tx, outs))
}

/// Sweep a redemption voucher: spend everything at the redeem address into
/// a single output paying `destination`. Redemption transactions carry no
/// fee, so the payout equals the full voucher balance.
pub fn prepare_redemption_tx<R: Rng + CryptoRng>(
    rng: &mut R,
    get_own_utxos: impl FnOnce(&[Address]) -> TxResult<Utxo>,
    redeem_key: &RedeemPrivateKey,
    destination: &Address,
) -> TxResult<(SignedTransaction, Address, Coin)> {
    ensure!(
        !destination.is_redeem(),
        TxError::OutputIsRedeem(destination.get_id())
    );
    let redeem_address = make_redeem_address(&redeem_key.public_key());
    let utxo = get_own_utxos(std::slice::from_ref(&redeem_address))?;

    let total = common::chain::utxo_total(&utxo)
        .ok_or_else(|| TxError::GeneralTxError("redemption balance overflows".into()))?;
    ensure!(
        total > Coin::ZERO,
        TxError::RedemptionDepleted(redeem_address.get_id())
    );

    let inputs: Vec<TxInput> = utxo.keys().map(|outpoint| TxInput::Utxo(*outpoint)).collect();
    let tx = Transaction::new(
        inputs,
        vec![TxOutput::new(total, destination.clone())],
        TxAttributes::new(),
    )
    .map_err(|e| TxError::GeneralTxError(e.to_string()))?;

    let witnesses = tx
        .inputs()
        .iter()
        .map(|_| {
            produce_redeem_witness(rng, redeem_key, &tx)
                .map_err(|e| TxError::GeneralTxError(e.to_string()))
        })
        .collect::<TxResult<Vec<_>>>()?;
    let tx = SignedTransaction::new(tx, witnesses)
        .map_err(|e| TxError::GeneralTxError(e.to_string()))?;

    Ok((tx, redeem_address, total))
}

/// Decode a transaction signed by an external device, transported as
/// base16.
pub fn decode_signed_tx_base16(data: &str) -> TxResult<SignedTransaction> {
    let bytes = hex::decode(data).map_err(|_| TxError::SignedTxNotBase16)?;
    SignedTransaction::decode_all(&mut bytes.as_slice())
        .map_err(|e| TxError::GeneralTxError(format!("undecodable signed transaction: {e}")))
}

/// Parse a base16-encoded address, as accepted on the API surfaces.
pub fn decode_address_base16(data: &str) -> TxResult<Address> {
    let bytes = hex::decode(data).map_err(|e| TxError::InvalidAddressFormat(e.to_string()))?;
    Address::decode_all(&mut bytes.as_slice())
        .map_err(|e| TxError::InvalidAddressFormat(e.to_string()))
}
