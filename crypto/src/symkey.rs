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

//! Authenticated symmetric encryption (XChaCha20Poly1305).
//!
//! Ciphertexts carry their nonce as a prefix, so a key plus a ciphertext is
//! all a holder needs to decrypt.

use chacha20poly1305::aead::{Aead, KeyInit, Payload};
use chacha20poly1305::{Key, XChaCha20Poly1305, XNonce};
use serialization::{Decode, Encode};
use thiserror::Error;

use crate::random::{CryptoRng, Rng};

pub const NONCE_LEN: usize = 24;

#[derive(Debug, PartialEq, Eq, Clone, Error)]
pub enum Error {
    #[error("Encryption error")]
    EncryptionError,
    #[error("Cipher text is shorter than allowed: {0} < minimum {1}")]
    CipherTextTooShort(usize, usize),
    #[error("Decryption error")]
    DecryptionError,
}

#[derive(Debug, PartialEq, Eq, Copy, Clone, Decode, Encode)]
pub enum SymmetricKeyKind {
    #[codec(index = 0)]
    XChacha20Poly1305,
}

#[derive(Debug, PartialEq, Eq, Clone, Decode, Encode)]
pub struct SymmetricKey {
    kind: SymmetricKeyKind,
    key_data: [u8; 32],
}

impl SymmetricKey {
    pub fn new<R: Rng + CryptoRng>(kind: SymmetricKeyKind, rng: &mut R) -> Self {
        Self::new_from_array(kind, rng.gen())
    }

    pub const fn new_from_array(kind: SymmetricKeyKind, key_data: [u8; 32]) -> Self {
        Self { kind, key_data }
    }

    fn cipher(&self) -> XChaCha20Poly1305 {
        match self.kind {
            SymmetricKeyKind::XChacha20Poly1305 => {
                XChaCha20Poly1305::new(Key::from_slice(&self.key_data))
            }
        }
    }

    pub fn encrypt<R: Rng + CryptoRng>(
        &self,
        message: &[u8],
        rng: &mut R,
        associated_data: Option<&[u8]>,
    ) -> Result<Vec<u8>, Error> {
        let nonce: [u8; NONCE_LEN] = rng.gen();
        let payload = Payload {
            msg: message,
            aad: associated_data.unwrap_or(b""),
        };
        let cipher_text = self
            .cipher()
            .encrypt(XNonce::from_slice(&nonce), payload)
            .map_err(|_| Error::EncryptionError)?;
        let mut result = nonce.to_vec();
        result.extend(cipher_text);
        Ok(result)
    }

    pub fn decrypt(
        &self,
        cipher_text_with_nonce: &[u8],
        associated_data: Option<&[u8]>,
    ) -> Result<Vec<u8>, Error> {
        if cipher_text_with_nonce.len() < NONCE_LEN {
            return Err(Error::CipherTextTooShort(
                cipher_text_with_nonce.len(),
                NONCE_LEN,
            ));
        }
        let (nonce, cipher_text) = cipher_text_with_nonce.split_at(NONCE_LEN);
        let payload = Payload {
            msg: cipher_text,
            aad: associated_data.unwrap_or(b""),
        };
        self.cipher()
            .decrypt(XNonce::from_slice(nonce), payload)
            .map_err(|_| Error::DecryptionError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::make_true_rng;

    #[test]
    fn encrypt_then_decrypt() {
        let mut rng = make_true_rng();
        let key = SymmetricKey::new(SymmetricKeyKind::XChacha20Poly1305, &mut rng);
        let message = b"some message to protect";
        let cipher_text = key.encrypt(message, &mut rng, None).unwrap();
        let decrypted = key.decrypt(&cipher_text, None).unwrap();
        assert_eq!(decrypted, message);
    }

    #[test]
    fn wrong_key_fails_to_decrypt() {
        let mut rng = make_true_rng();
        let key = SymmetricKey::new(SymmetricKeyKind::XChacha20Poly1305, &mut rng);
        let other = SymmetricKey::new(SymmetricKeyKind::XChacha20Poly1305, &mut rng);
        let cipher_text = key.encrypt(b"message", &mut rng, None).unwrap();
        assert_eq!(
            other.decrypt(&cipher_text, None).unwrap_err(),
            Error::DecryptionError
        );
    }

    #[test]
    fn associated_data_is_authenticated() {
        let mut rng = make_true_rng();
        let key = SymmetricKey::new(SymmetricKeyKind::XChacha20Poly1305, &mut rng);
        let cipher_text = key.encrypt(b"message", &mut rng, Some(b"context")).unwrap();
        assert!(key.decrypt(&cipher_text, Some(b"context")).is_ok());
        assert_eq!(
            key.decrypt(&cipher_text, Some(b"other")).unwrap_err(),
            Error::DecryptionError
        );
    }

    #[test]
    fn truncated_cipher_text_is_rejected() {
        let key = SymmetricKey::new_from_array(SymmetricKeyKind::XChacha20Poly1305, [1; 32]);
        assert_eq!(
            key.decrypt(&[0; NONCE_LEN - 1], None).unwrap_err(),
            Error::CipherTextTooShort(NONCE_LEN - 1, NONCE_LEN)
        );
    }
}
