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

pub use rand::{CryptoRng, Rng, RngCore, SeedableRng};

/// An rng seeded from the operating system.
pub fn make_true_rng() -> impl Rng + CryptoRng {
    rand::rngs::StdRng::from_entropy()
}

/// A deterministic rng for anything that must be reproducible from a seed,
/// such as hierarchical key derivation. Never use for ephemeral secrets.
pub fn make_seeded_rng(seed: [u8; 32]) -> impl Rng + CryptoRng {
    rand::rngs::StdRng::from_seed(seed)
}
