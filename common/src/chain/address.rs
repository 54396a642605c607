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

use crypto::key::redeem::RedeemPublicKey;
use crypto::key::PublicKey;
use serialization::{Decode, Encode};
use utils::TypeName;

use crate::primitives::{hash_encoded, Id, Idable, H256};

/// Who can spend an output. Redeem destinations are kept apart from regular
/// key destinations so the wallet can refuse to treat redemption vouchers as
/// ordinary funds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Encode, Decode)]
pub enum Destination {
    #[codec(index = 0)]
    PublicKeyHash(H256),
    #[codec(index = 1)]
    RedeemKeyHash(H256),
}

/// Opaque, encrypted HD coordinates embedded in a wallet-created address.
/// Only the creating wallet's payload key can open it; everyone else sees
/// random bytes.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Encode, Decode)]
pub struct HdPayload(Vec<u8>);

impl HdPayload {
    pub fn new(cipher_text: Vec<u8>) -> Self {
        HdPayload(cipher_text)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Encode, Decode)]
pub struct Address {
    destination: Destination,
    hd_payload: Option<HdPayload>,
}

impl Address {
    pub fn new(destination: Destination) -> Self {
        Address {
            destination,
            hd_payload: None,
        }
    }

    pub fn new_with_payload(destination: Destination, payload: HdPayload) -> Self {
        Address {
            destination,
            hd_payload: Some(payload),
        }
    }

    pub fn from_public_key(public_key: &PublicKey, payload: Option<HdPayload>) -> Self {
        Address {
            destination: Destination::PublicKeyHash(hash_encoded(public_key)),
            hd_payload: payload,
        }
    }

    pub fn destination(&self) -> &Destination {
        &self.destination
    }

    pub fn hd_payload(&self) -> Option<&HdPayload> {
        self.hd_payload.as_ref()
    }

    pub fn is_redeem(&self) -> bool {
        matches!(self.destination, Destination::RedeemKeyHash(_))
    }
}

impl Idable for Address {
    type Tag = Address;

    fn get_id(&self) -> Id<Address> {
        Id::new(hash_encoded(self))
    }
}

impl TypeName for Address {
    fn typename_str() -> &'static str {
        "Address"
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.get_id())
    }
}

/// The address a redemption voucher is locked to. Pure function of the
/// redeem public key; carries no HD payload.
pub fn make_redeem_address(public_key: &RedeemPublicKey) -> Address {
    Address::new(Destination::RedeemKeyHash(hash_encoded(public_key)))
}
