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

// Unsigned only. The signed counterpart lives in signed_amount.rs with an
// explicit conversion; there is no implicit mixing of the two.
pub type CoinIntType = u128;

/// An amount of coin in atomic units. All arithmetic is checked; the
/// operators return [`Option`] so a caller must decide what overflow means
/// at its own level.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Encode, Decode)]
pub struct Coin {
    atoms: CoinIntType,
}

impl Coin {
    pub const ZERO: Coin = Coin { atoms: 0 };
    pub const MAX: Coin = Coin {
        atoms: CoinIntType::MAX,
    };

    pub const fn from_atoms(atoms: CoinIntType) -> Self {
        Coin { atoms }
    }

    pub const fn into_atoms(self) -> CoinIntType {
        self.atoms
    }
}

impl std::ops::Add for Coin {
    type Output = Option<Self>;

    fn add(self, other: Self) -> Option<Self> {
        self.atoms.checked_add(other.atoms).map(|n| Coin { atoms: n })
    }
}

impl std::ops::Sub for Coin {
    type Output = Option<Self>;

    fn sub(self, other: Self) -> Option<Self> {
        self.atoms.checked_sub(other.atoms).map(|n| Coin { atoms: n })
    }
}

impl std::ops::Mul<CoinIntType> for Coin {
    type Output = Option<Self>;

    fn mul(self, other: CoinIntType) -> Option<Self> {
        self.atoms.checked_mul(other).map(|n| Coin { atoms: n })
    }
}

impl std::fmt::Display for Coin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.atoms)
    }
}

/// Sum an iterator of coins; `None` on overflow.
pub fn sum_coins(amounts: impl IntoIterator<Item = Coin>) -> Option<Coin> {
    amounts.into_iter().try_fold(Coin::ZERO, |acc, c| acc + c)
}
