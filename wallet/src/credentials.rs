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

//! Ownership detection.
//!
//! A wallet-created address embeds its HD coordinates, encrypted under a key
//! only the owning wallet can derive. Classification decrypts the payload
//! and then re-derives the leaf key to check that the address really is the
//! one this wallet would have minted at those coordinates, so a payload
//! transplanted onto a foreign address does not classify.

use common::chain::{Address, Destination, HdPayload};
use common::primitives::{hash_encoded, Idable};
use crypto::hash::{Blake2b32Stream, StreamHasher};
use crypto::key::hdkd::{HdPath, RootPrivateKey, U31};
use crypto::key::PrivateKey;
use crypto::random::{CryptoRng, Rng};
use crypto::symkey::{SymmetricKey, SymmetricKeyKind};
use serialization::{DecodeAll, Encode};
use wallet_types::{WalletAddressMeta, WalletId};

const PAYLOAD_KEY_TAG: &[u8] = b"wallet/payload-key/v1";

/// Everything needed to recognize and spend this wallet's addresses,
/// derived once from the root key. Pure function of the root: stable across
/// restarts.
#[derive(Debug, Clone)]
pub struct WalletCredentials {
    wallet_id: WalletId,
    payload_key: SymmetricKey,
    root: RootPrivateKey,
}

impl WalletCredentials {
    pub fn from_root_key(root: &RootPrivateKey) -> Self {
        let key_bytes = Blake2b32Stream::new()
            .write(PAYLOAD_KEY_TAG)
            .write(root.root_public_key().encode())
            .finalize();
        WalletCredentials {
            wallet_id: WalletId::from_root_key(root),
            payload_key: SymmetricKey::new_from_array(
                SymmetricKeyKind::XChacha20Poly1305,
                key_bytes,
            ),
            root: root.clone(),
        }
    }

    pub fn wallet_id(&self) -> WalletId {
        self.wallet_id
    }

    /// Mint the address at `(account, index)`, embedding its encrypted HD
    /// coordinates.
    pub fn new_address<R: Rng + CryptoRng>(
        &self,
        rng: &mut R,
        account: U31,
        index: U31,
    ) -> (Address, WalletAddressMeta) {
        let (_, public_key) = self.root.derive_leaf(HdPath::new(account, index));
        let plain = (account.into_u32(), index.into_u32()).encode();
        let cipher = self
            .payload_key
            .encrypt(&plain, rng, None)
            .expect("payload encryption is infallible for this cipher");
        let address = Address::from_public_key(&public_key, Some(HdPayload::new(cipher)));
        let meta = WalletAddressMeta {
            wallet_id: self.wallet_id,
            account,
            index,
            address_id: address.get_id(),
        };
        (address, meta)
    }

    /// The signing key for an address of this wallet, when it is ours.
    pub fn signer_for_address(&self, address: &Address) -> Option<PrivateKey> {
        let meta = self.classify(address)?;
        let (private_key, _) = self.root.derive_leaf(HdPath::new(meta.account, meta.index));
        Some(private_key)
    }

    /// Recover the HD coordinates of `address` if it belongs to this
    /// wallet. Not owning the address is a `None`, never an error.
    pub fn classify(&self, address: &Address) -> Option<WalletAddressMeta> {
        let payload = address.hd_payload()?;
        let plain = self.payload_key.decrypt(payload.as_bytes(), None).ok()?;
        let (account_raw, index_raw) =
            <(u32, u32)>::decode_all(&mut plain.as_slice()).ok()?;
        let account = U31::from_u32(account_raw)?;
        let index = U31::from_u32(index_raw)?;

        let (_, public_key) = self.root.derive_leaf(HdPath::new(account, index));
        utils::ensure!(
            *address.destination() == Destination::PublicKeyHash(hash_encoded(&public_key))
        );

        Some(WalletAddressMeta {
            wallet_id: self.wallet_id,
            account,
            index,
            address_id: address.get_id(),
        })
    }

    /// Filter-map `items` down to the ones whose address is ours, pairing
    /// each with its recovered metadata.
    pub fn select_own<T>(
        &self,
        items: impl IntoIterator<Item = T>,
        address_of: impl Fn(&T) -> &Address,
    ) -> Vec<(T, WalletAddressMeta)> {
        items
            .into_iter()
            .filter_map(|item| {
                let meta = self.classify(address_of(&item))?;
                Some((item, meta))
            })
            .collect()
    }
}
