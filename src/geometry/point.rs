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

use num_traits::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::numeric::Scalar;

/// Mean Earth radius, kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0088;

/// A drawn vertex.
///
/// Identity is epsilon equality on `(lat, lng)`; `alt` is carried through
/// untouched and never participates in identity or geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint<T: Scalar> {
    pub lat: T,
    pub lng: T,
    pub alt: Option<T>,
}

impl<T: Scalar> GeoPoint<T> {
    pub fn new(lat: T, lng: T) -> Self {
        Self {
            lat,
            lng,
            alt: None,
        }
    }

    pub fn with_alt(lat: T, lng: T, alt: T) -> Self {
        Self {
            lat,
            lng,
            alt: Some(alt),
        }
    }

    /// Epsilon identity on `(lat, lng)`.
    pub fn are_equal(&self, other: &Self, eps: T) -> bool {
        (self.lat - other.lat).abs() <= eps && (self.lng - other.lng).abs() <= eps
    }

    pub fn key(&self) -> VertexKey {
        VertexKey::of(self)
    }
}

impl GeoPoint<f64> {
    /// Great-circle distance to `other`, in kilometers.
    pub fn haversine_km(&self, other: &Self) -> f64 {
        let (lat1, lat2) = (self.lat.to_radians(), other.lat.to_radians());
        let dlat = lat2 - lat1;
        let dlng = (other.lng - self.lng).to_radians();
        let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlng / 2.0).sin().powi(2);
        2.0 * EARTH_RADIUS_KM * h.sqrt().asin()
    }
}

/// Quantized coordinate key: one grid cell per epsilon-identity class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexKey(i64, i64);

impl VertexKey {
    pub fn of<T: Scalar>(p: &GeoPoint<T>) -> Self {
        let q = T::key_quantum();
        // non-finite coordinates collapse onto a sentinel cell
        Self(
            (p.lat / q).round().to_i64().unwrap_or(i64::MAX),
            (p.lng / q).round().to_i64().unwrap_or(i64::MAX),
        )
    }
}
