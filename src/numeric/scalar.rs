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

use std::fmt::Debug;

use num_traits::Float;

/// Coordinate scalar for the geometry layer.
///
/// Each backing type carries its own identity tolerance: two coordinates
/// within `vertex_tolerance()` of each other belong to the same vertex.
pub trait Scalar: Float + Debug + Default + 'static {
    fn vertex_tolerance() -> Self;

    /// Grid quantum for hashable vertex keys; one cell per identity class.
    fn key_quantum() -> Self {
        Self::vertex_tolerance()
    }
}

impl Scalar for f64 {
    fn vertex_tolerance() -> Self {
        1e-10
    }
}

impl Scalar for f32 {
    fn vertex_tolerance() -> Self {
        1e-6
    }
}
