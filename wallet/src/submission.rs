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

//! Hand-off of fully formed transactions to the network layer.

use std::collections::BTreeMap;

use common::chain::{SignedTransaction, Transaction};
use common::primitives::{Id, Idable};
use common::TextSummary;
use logging::log;

/// The payload of a transaction announcement: peers first see the inventory
/// key (the id) and pull these contents on demand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxMessageContents(pub SignedTransaction);

/// An inv/data relay unit for one transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxRelayMessage {
    pub tx_id: Id<Transaction>,
    pub contents: TxMessageContents,
}

/// Describes an outbound message class this node can originate, for the
/// dispatcher's capability negotiation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutboundSpec {
    pub message_name: &'static str,
}

/// The outbound capability the submission path relies on.
pub fn send_tx_outs() -> OutboundSpec {
    OutboundSpec {
        message_name: "inv/data TxMessageContents",
    }
}

/// The network dispatch seam. Returns whether at least one peer accepted
/// the enqueued message.
pub trait TransactionDispatch {
    fn enqueue(&self, message: TxRelayMessage) -> bool;
}

/// A caller-supplied snapshot of the local mempool. Saving is keyed by the
/// transaction hash, so repeating a submission cannot duplicate an entry.
pub trait MempoolSnapshot {
    fn save_tx(&mut self, tx: (Id<Transaction>, SignedTransaction));
}

impl MempoolSnapshot for BTreeMap<Id<Transaction>, SignedTransaction> {
    fn save_tx(&mut self, tx: (Id<Transaction>, SignedTransaction)) {
        self.entry(tx.0).or_insert(tx.1);
    }
}

/// Announce a transaction to the network. Logs what goes out, enqueues the
/// relay message, and reports the dispatcher's verdict.
pub fn submit_tx_raw<D: TransactionDispatch>(dispatch: &D, tx_aux: &SignedTransaction) -> bool {
    let tx_id = tx_aux.get_id();
    log::info!("Submitting transaction: {}", tx_aux.transaction().text_summary());
    log::info!("Announcing transaction with id {tx_id}");
    dispatch.enqueue(TxRelayMessage {
        tx_id,
        contents: TxMessageContents(tx_aux.clone()),
    })
}

/// [`submit_tx_raw`], then persist into the caller's mempool snapshot. The
/// save happens regardless of network acceptance: the transaction must
/// survive locally for rebroadcast even when no peer took it the first
/// time.
pub fn submit_and_save<M: MempoolSnapshot, D: TransactionDispatch>(
    mempool: &mut M,
    dispatch: &D,
    tx_aux: &SignedTransaction,
) -> bool {
    let accepted = submit_tx_raw(dispatch, tx_aux);
    mempool.save_tx((tx_aux.get_id(), tx_aux.clone()));
    accepted
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use common::chain::{
        Address, Destination, TxAttributes, TxInput, TxOutput,
    };
    use common::primitives::{Coin, H256};
    use crypto::key::PrivateKey;
    use crypto::random::make_seeded_rng;

    struct RecordingDispatch {
        accept: bool,
        seen: RefCell<Vec<Id<Transaction>>>,
    }

    impl TransactionDispatch for RecordingDispatch {
        fn enqueue(&self, message: TxRelayMessage) -> bool {
            assert_eq!(message.contents.0.get_id(), message.tx_id);
            self.seen.borrow_mut().push(message.tx_id);
            self.accept
        }
    }

    fn some_tx() -> SignedTransaction {
        let mut rng = make_seeded_rng([21; 32]);
        let (sk, _) = PrivateKey::new(&mut rng);
        let tx = common::chain::Transaction::new(
            vec![TxInput::utxo(Id::new(H256::from_low_u64_be(1)), 0)],
            vec![TxOutput::new(
                Coin::from_atoms(5),
                Address::new(Destination::PublicKeyHash(H256::from_low_u64_be(2))),
            )],
            TxAttributes::new(),
        )
        .unwrap();
        let witness = common::chain::produce_input_witness(&mut rng, &sk, &tx).unwrap();
        SignedTransaction::new(tx, vec![witness]).unwrap()
    }

    #[test]
    fn submission_reports_the_dispatcher_verdict() {
        let tx = some_tx();
        let accepting = RecordingDispatch {
            accept: true,
            seen: RefCell::new(vec![]),
        };
        assert!(submit_tx_raw(&accepting, &tx));
        assert_eq!(accepting.seen.borrow().as_slice(), &[tx.get_id()]);

        let rejecting = RecordingDispatch {
            accept: false,
            seen: RefCell::new(vec![]),
        };
        assert!(!submit_tx_raw(&rejecting, &tx));
    }

    #[test]
    fn save_happens_even_when_no_peer_accepts() {
        let tx = some_tx();
        let dispatch = RecordingDispatch {
            accept: false,
            seen: RefCell::new(vec![]),
        };
        let mut mempool: BTreeMap<Id<Transaction>, SignedTransaction> = BTreeMap::new();
        assert!(!submit_and_save(&mut mempool, &dispatch, &tx));
        assert_eq!(mempool.get(&tx.get_id()), Some(&tx));
    }

    #[test]
    fn saving_twice_keeps_one_entry() {
        let tx = some_tx();
        let dispatch = RecordingDispatch {
            accept: true,
            seen: RefCell::new(vec![]),
        };
        let mut mempool: BTreeMap<Id<Transaction>, SignedTransaction> = BTreeMap::new();
        submit_and_save(&mut mempool, &dispatch, &tx);
        submit_and_save(&mut mempool, &dispatch, &tx);
        assert_eq!(mempool.len(), 1);
    }
}
