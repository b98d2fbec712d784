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

use crate::{geometry::GeoPoint, numeric::Scalar};

/// Uniform 3-parameter line through two vertices: `c·lng = a·lat + b`.
///
/// Three cases share the representation: a vertical segment (constant lat)
/// is `a=1, b=-lat, c=0`, a horizontal segment (constant lng) is
/// `a=0, b=lng, c=1`, and everything else is the slope/intercept form with
/// latitude as the independent axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineEquation<T: Scalar> {
    pub a: T,
    pub b: T,
    pub c: T,
}

impl<T: Scalar> LineEquation<T> {
    pub fn through(start: &GeoPoint<T>, end: &GeoPoint<T>) -> Self {
        let eps = T::vertex_tolerance();
        if (end.lat - start.lat).abs() <= eps {
            Self {
                a: T::one(),
                b: -start.lat,
                c: T::zero(),
            }
        } else if (end.lng - start.lng).abs() <= eps {
            Self {
                a: T::zero(),
                b: start.lng,
                c: T::one(),
            }
        } else {
            let a = (start.lng - end.lng) / (start.lat - end.lat);
            let b = start.lng - start.lat * a;
            Self { a, b, c: T::one() }
        }
    }

    /// Solve two equations for their common point `(lat, lng)`.
    ///
    /// Returns `None` when the system is singular (coincident or parallel
    /// lines, including the vertical/vertical case).
    pub fn intersect(&self, other: &Self) -> Option<(T, T)> {
        let denom = other.c * self.a - self.c * other.a;
        if denom.abs() <= T::vertex_tolerance() {
            return None;
        }
        let lat = (self.c * other.b - other.c * self.b) / denom;
        let lng = if self.c > T::zero() {
            (self.a * lat + self.b) / self.c
        } else {
            (other.a * lat + other.b) / other.c
        };
        Some((lat, lng))
    }
}
