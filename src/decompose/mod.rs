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

pub mod adjacency;
pub mod faces;
pub mod intersector;

pub use adjacency::{Adjacency, AdjacencyMap};
pub use faces::{Face, dedup_faces, extract_faces};
pub use intersector::insert_crossings;

use crate::{geometry::GeoPoint, numeric::Scalar};

/// Decompose one closed freehand loop into its simple faces.
///
/// The walk may arrive explicitly closed or missing the final repeated
/// vertex; it is closed here before the pipeline runs. Fewer than three
/// usable vertices yield no faces.
pub fn decompose_loop<T: Scalar>(points: &[GeoPoint<T>]) -> Vec<Face<T>> {
    if points.len() < 3 {
        return Vec::new();
    }

    let mut walk = points.to_vec();
    if walk[0].key() != walk[walk.len() - 1].key() {
        let first = walk[0];
        walk.push(first);
    }

    let augmented = insert_crossings(&walk);
    let inserted = augmented.len() - walk.len();
    let adjacency = AdjacencyMap::from_walk(&augmented);
    let candidates = extract_faces(&adjacency);
    let traced = candidates.len();
    let faces = dedup_faces(candidates);

    tracing::debug!(
        vertices = points.len(),
        inserted,
        traced,
        faces = faces.len(),
        "loop decomposed"
    );
    faces
}
