// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use log::{trace, warn};

use crate::{
    error::{Result, malformed},
    impl_mesh,
};

impl_mesh! {
    /// Drains `stack`, flipping every flippable edge and queueing the four
    /// outer edges of each flipped quadrilateral. Edges detached while queued
    /// are skipped. Returns the number of flips performed.
    pub fn legalize(&mut self, stack: &mut Vec<usize>) -> Result<usize> {
        let n = self.vertices.len().max(8);
        let max_flips = n * n;
        let mut flips = 0usize;

        while let Some(e) = stack.pop() {
            if !self.is_flippable(e) {
                continue;
            }
            let [a, b] = self.edges[e].vertices;
            let new_edge = self.flip_edge(e)?;
            flips += 1;
            if flips > max_flips {
                warn!("legalization did not settle after {max_flips} flips");
                return Err(malformed("legalization does not terminate"));
            }

            let [c, d] = self.edges[new_edge].vertices;
            for (x, y) in [(a, c), (c, b), (b, d), (d, a)] {
                let outer = self
                    .edge_between(x, y)
                    .ok_or_else(|| malformed(format!("flip lost edge ({x}, {y})")))?;
                stack.push(outer);
            }
        }

        if flips > 0 {
            trace!("legalized with {flips} flips");
        }
        Ok(flips)
    }
}
