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

pub mod hdkd;
pub mod redeem;

use serialization::{Decode, Encode};
use tari_crypto::keys::PublicKey as TariPublicKeyTrait;
use tari_crypto::ristretto::{RistrettoPublicKey, RistrettoSchnorr, RistrettoSecretKey};
use tari_crypto::tari_utilities::message_format::MessageFormat;
use tari_crypto::tari_utilities::ByteArray;

use crate::hash::{Blake2b32Stream, StreamHasher};
use crate::random::{CryptoRng, Rng};

#[derive(thiserror::Error, Debug, PartialEq, Eq, Clone)]
pub enum SignatureError {
    #[error("Signature construction failed")]
    SignatureConstructionError,
    #[error("Data conversion error: {0}")]
    DataConversionError(String),
}

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Decode, Encode)]
pub enum KeyKind {
    #[codec(index = 0)]
    RistrettoSchnorr,
}

/// A wallet-side signing key. The representation is the canonical 32-byte
/// scalar; all keys produced by this module are canonical, so the native
/// conversions below cannot fail.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Decode, Encode)]
pub struct PrivateKey {
    key_data: [u8; 32],
}

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Decode, Encode)]
pub struct PublicKey {
    pubkey_data: [u8; 32],
}

/// A detached Schnorr signature in its serialized form, tagged with the
/// scheme that produced it.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Decode, Encode)]
pub struct Signature {
    kind: KeyKind,
    data: Vec<u8>,
}

impl Signature {
    pub fn kind(&self) -> KeyKind {
        self.kind
    }
}

impl PrivateKey {
    pub fn new<R: Rng + CryptoRng>(rng: &mut R) -> (PrivateKey, PublicKey) {
        let (secret, public) = RistrettoPublicKey::random_keypair(rng);
        (Self::from_native(&secret), PublicKey::from_native(&public))
    }

    /// Deterministic keypair from a 32-byte seed. Same seed, same keypair;
    /// this is the primitive hierarchical derivation is built on.
    pub fn new_from_seed(seed: [u8; 32]) -> (PrivateKey, PublicKey) {
        let mut rng = crate::random::make_seeded_rng(seed);
        Self::new(&mut rng)
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.key_data.as_slice()
    }

    fn as_native(&self) -> RistrettoSecretKey {
        RistrettoSecretKey::from_bytes(&self.key_data)
            .expect("canonical 32-byte scalar by construction")
    }

    fn from_native(native: &RistrettoSecretKey) -> Self {
        Self {
            key_data: native
                .as_bytes()
                .try_into()
                .expect("Ristretto secret keys are 32 bytes"),
        }
    }

    pub fn sign_message<R: Rng + CryptoRng>(
        &self,
        rng: &mut R,
        msg: &[u8],
    ) -> Result<Signature, SignatureError> {
        let (nonce, _nonce_pub) = RistrettoPublicKey::random_keypair(rng);
        let challenge = Blake2b32Stream::new().write(msg).finalize();
        let sig = RistrettoSchnorr::sign(self.as_native(), nonce, &challenge)
            .map_err(|_| SignatureError::SignatureConstructionError)?;
        let data = sig
            .to_binary()
            .map_err(|e| SignatureError::DataConversionError(e.to_string()))?;
        Ok(Signature {
            kind: KeyKind::RistrettoSchnorr,
            data,
        })
    }
}

impl PublicKey {
    pub fn from_private_key(private_key: &PrivateKey) -> Self {
        Self::from_native(&RistrettoPublicKey::from_secret_key(
            &private_key.as_native(),
        ))
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.pubkey_data.as_slice()
    }

    fn as_native(&self) -> RistrettoPublicKey {
        RistrettoPublicKey::from_bytes(&self.pubkey_data)
            .expect("valid compressed point by construction")
    }

    fn from_native(native: &RistrettoPublicKey) -> Self {
        Self {
            pubkey_data: native
                .as_bytes()
                .try_into()
                .expect("Ristretto public keys are 32 bytes (compressed)"),
        }
    }

    pub fn verify_message(&self, signature: &Signature, msg: &[u8]) -> bool {
        let sig = match signature.kind {
            KeyKind::RistrettoSchnorr => match RistrettoSchnorr::from_binary(&signature.data) {
                Ok(s) => s,
                Err(_) => return false,
            },
        };
        let challenge = Blake2b32Stream::new().write(msg).finalize();
        sig.verify_challenge(&self.as_native(), &challenge)
    }
}
