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

//! Single point of entry for the binary codec.
//!
//! Every entity that is hashed, persisted, or put on the wire derives
//! [`Encode`]/[`Decode`] through this crate, so the codec can be swapped in
//! one place.

pub use parity_scale_codec::{Decode, DecodeAll, Encode, Error, Input, Output};

/// Encode `value` and hand the buffer to the caller.
///
/// Shorthand for `value.encode()` that keeps call sites free of direct codec
/// imports.
pub fn encoded<T: Encode>(value: &T) -> Vec<u8> {
    value.encode()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Encode, Decode, PartialEq, Eq, Debug)]
    struct Pair {
        left: u64,
        right: Vec<u8>,
    }

    #[test]
    fn round_trip() {
        let original = Pair {
            left: 42,
            right: vec![1, 2, 3],
        };
        let buf = encoded(&original);
        let decoded = Pair::decode_all(&mut buf.as_slice()).unwrap();
        assert_eq!(decoded, original);
    }
}
