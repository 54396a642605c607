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

//! Guard-clause macro for early returns.

/// Bail out of the enclosing function when a condition does not hold.
///
/// `ensure!(cond)` returns `None` from a function returning [`Option`];
/// `ensure!(cond, err)` returns `Err(err)` from a function returning
/// [`Result`].
///
/// ```
/// # use utils::ensure;
/// #[derive(PartialEq, Eq, Debug)]
/// struct Underflow;
///
/// fn decrement(x: u32) -> Result<u32, Underflow> {
///     ensure!(x > 0, Underflow);
///     Ok(x - 1)
/// }
///
/// assert_eq!(decrement(3), Ok(2));
/// assert_eq!(decrement(0), Err(Underflow));
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr $(,)?) => {
        if !$cond {
            return None;
        }
    };
    ($cond:expr, $err:expr $(,)?) => {
        if !$cond {
            return Err($err);
        }
    };
}
