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

//! Keys for voucher redemption.
//!
//! Redemption keys are ordinary Schnorr keys behind distinct types, so a
//! redeem key can never be passed where a wallet key is expected and vice
//! versa.

use serialization::{Decode, Encode};

use crate::key::{PrivateKey, PublicKey, Signature, SignatureError};
use crate::random::{CryptoRng, Rng};

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Decode, Encode)]
pub struct RedeemPrivateKey(PrivateKey);

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Decode, Encode)]
pub struct RedeemPublicKey(PublicKey);

impl RedeemPrivateKey {
    pub fn new<R: Rng + CryptoRng>(rng: &mut R) -> (RedeemPrivateKey, RedeemPublicKey) {
        let (sk, pk) = PrivateKey::new(rng);
        (RedeemPrivateKey(sk), RedeemPublicKey(pk))
    }

    pub fn from_seed(seed: [u8; 32]) -> (RedeemPrivateKey, RedeemPublicKey) {
        let (sk, pk) = PrivateKey::new_from_seed(seed);
        (RedeemPrivateKey(sk), RedeemPublicKey(pk))
    }

    pub fn public_key(&self) -> RedeemPublicKey {
        RedeemPublicKey(PublicKey::from_private_key(&self.0))
    }

    pub fn sign_message<R: Rng + CryptoRng>(
        &self,
        rng: &mut R,
        msg: &[u8],
    ) -> Result<Signature, SignatureError> {
        self.0.sign_message(rng, msg)
    }
}

impl RedeemPublicKey {
    pub fn verify_message(&self, signature: &Signature, msg: &[u8]) -> bool {
        self.0.verify_message(signature, msg)
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}
