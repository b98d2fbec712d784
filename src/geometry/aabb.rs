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

/// An axis-aligned bounding box in `(lat, lng)` space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb<T: Scalar> {
    min: GeoPoint<T>,
    max: GeoPoint<T>,
}

impl<T: Scalar> Aabb<T> {
    /// Build the smallest box containing two points.
    pub fn from_points(a: &GeoPoint<T>, b: &GeoPoint<T>) -> Self {
        Self {
            min: GeoPoint::new(a.lat.min(b.lat), a.lng.min(b.lng)),
            max: GeoPoint::new(a.lat.max(b.lat), a.lng.max(b.lng)),
        }
    }

    pub fn min(&self) -> &GeoPoint<T> {
        &self.min
    }

    /// Access the maximum corner.
    pub fn max(&self) -> &GeoPoint<T> {
        &self.max
    }

    /// Does this box intersect `other`?
    pub fn overlaps(&self, other: &Self) -> bool {
        self.min.lat <= other.max.lat
            && other.min.lat <= self.max.lat
            && self.min.lng <= other.max.lng
            && other.min.lng <= self.max.lng
    }

    /// Endpoint-exclusive containment on both axes; boundary points fail.
    pub fn strictly_contains(&self, lat: T, lng: T) -> bool {
        lat > self.min.lat && lat < self.max.lat && lng > self.min.lng && lng < self.max.lng
    }
}
