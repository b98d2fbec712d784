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

use crate::{
    geometry::{GeoPoint, Segment},
    numeric::Scalar,
};

/// The true crossing of two segments, if any.
///
/// Pairs with equal `a` coefficients are never tested. A solved candidate
/// counts only when it falls strictly inside both segments' bounding boxes
/// on both axes, which rejects endpoint touches and collinear overlaps.
pub fn true_crossing<T: Scalar>(s1: &Segment<T>, s2: &Segment<T>) -> Option<GeoPoint<T>> {
    if (s1.equation.a - s2.equation.a).abs() <= T::vertex_tolerance() {
        return None;
    }

    let (b1, b2) = (s1.aabb(), s2.aabb());
    if !b1.overlaps(&b2) {
        return None;
    }

    let (lat, lng) = s1.equation.intersect(&s2.equation)?;
    if b1.strictly_contains(lat, lng) && b2.strictly_contains(lat, lng) {
        Some(GeoPoint::new(lat, lng))
    } else {
        None
    }
}
