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

use serde::{Deserialize, Serialize};

use crate::geometry::GeoPoint;

/// Identifier of one drawing gesture, from mode entry to finalize or abort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(u64);

impl SessionId {
    /// A fresh random id for a new gesture.
    pub fn random() -> Self {
        Self(rand::random())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShapeKind {
    Polyline,
    Polygon,
}

/// A finalized drawn shape.
///
/// Immutable once produced; it disappears only through an explicit delete
/// of its whole session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    session: SessionId,
    kind: ShapeKind,
    index: u32,
    vertices: Vec<GeoPoint<f64>>,
}

impl Shape {
    pub(crate) fn new(
        session: SessionId,
        kind: ShapeKind,
        index: u32,
        vertices: Vec<GeoPoint<f64>>,
    ) -> Self {
        Self {
            session,
            kind,
            index,
            vertices,
        }
    }

    pub fn session(&self) -> SessionId {
        self.session
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    /// Display index within this shape's kind sequence.
    pub fn index(&self) -> u32 {
        self.index
    }

    pub fn vertices(&self) -> &[GeoPoint<f64>] {
        &self.vertices
    }

    /// Great-circle length in kilometers, for polylines only. A closed
    /// polyline repeats its first vertex, so the closing leg is included.
    pub fn length_km(&self) -> Option<f64> {
        if self.kind != ShapeKind::Polyline {
            return None;
        }
        let km = self
            .vertices
            .windows(2)
            .map(|pair| pair[0].haversine_km(&pair[1]))
            .sum();
        Some(km)
    }

    /// What a tap on the rendered shape reports to the popup collaborator.
    pub fn details(&self) -> ShapeDetails {
        ShapeDetails {
            index: self.index,
            kind: self.kind,
            length_km: self.length_km(),
        }
    }
}

/// Tap-interaction payload: display index, kind, and length for polylines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeDetails {
    pub index: u32,
    pub kind: ShapeKind,
    pub length_km: Option<f64>,
}
