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

use serialization::{Decode, Encode};

use crate::primitives::Coin;

pub type SignedIntType = i128;

/// A signed coin delta, used where a balance can move in either direction
/// (e.g. the net effect of a transaction on a wallet).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Encode, Decode)]
pub struct SignedCoin {
    atoms: SignedIntType,
}

impl SignedCoin {
    pub const ZERO: SignedCoin = SignedCoin { atoms: 0 };

    pub const fn from_atoms(atoms: SignedIntType) -> Self {
        SignedCoin { atoms }
    }

    pub const fn into_atoms(self) -> SignedIntType {
        self.atoms
    }

    pub fn from_coin(coin: Coin) -> Option<Self> {
        let atoms: SignedIntType = coin.into_atoms().try_into().ok()?;
        Some(SignedCoin { atoms })
    }

    pub fn neg(self) -> Option<Self> {
        self.atoms.checked_neg().map(|n| SignedCoin { atoms: n })
    }
}

impl std::ops::Add for SignedCoin {
    type Output = Option<Self>;

    fn add(self, other: Self) -> Option<Self> {
        self.atoms.checked_add(other.atoms).map(|n| SignedCoin { atoms: n })
    }
}

impl std::ops::Sub for SignedCoin {
    type Output = Option<Self>;

    fn sub(self, other: Self) -> Option<Self> {
        self.atoms.checked_sub(other.atoms).map(|n| SignedCoin { atoms: n })
    }
}

impl std::fmt::Display for SignedCoin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.atoms)
    }
}
