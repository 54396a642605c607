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

use blake2::digest::consts::U32;
use blake2::{Blake2b, Digest};

/// Blake2b cropped to 32 bytes, so a hash result and a 32-byte id have
/// identical representations while keeping a software-friendly hash function.
type Blake2b32 = Blake2b<U32>;

/// One-shot blake2b-256.
pub fn blake2b_256<T: AsRef<[u8]>>(data: T) -> [u8; 32] {
    Blake2b32::digest(data.as_ref()).into()
}

/// Incremental hashing with the same algorithm as [`blake2b_256`]; feeding
/// the whole message through [`StreamHasher::write`] once is equivalent to
/// the one-shot call.
pub trait StreamHasher {
    fn new() -> Self;
    fn write<T: AsRef<[u8]>>(&mut self, data: T) -> &mut Self;
    fn finalize(&mut self) -> [u8; 32];
}

#[derive(Clone)]
pub struct Blake2b32Stream {
    state: Blake2b32,
}

impl StreamHasher for Blake2b32Stream {
    fn new() -> Self {
        Self {
            state: Blake2b32::new(),
        }
    }

    fn write<T: AsRef<[u8]>>(&mut self, data: T) -> &mut Self {
        self.state.update(data.as_ref());
        self
    }

    fn finalize(&mut self) -> [u8; 32] {
        self.state.clone().finalize().into()
    }
}
