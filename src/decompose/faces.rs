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

use ahash::AHashSet;

use crate::{
    decompose::AdjacencyMap,
    geometry::{GeoPoint, VertexKey},
    numeric::Scalar,
};

/// One closed simple loop recovered from the walk.
#[derive(Debug, Clone, PartialEq)]
pub struct Face<T: Scalar> {
    pub vertices: Vec<GeoPoint<T>>,
}

impl<T: Scalar> Face<T> {
    /// Sorted, deduplicated vertex keys; the face's identity for dedup.
    pub fn key_set(&self) -> Vec<VertexKey> {
        let mut keys: Vec<VertexKey> = self.vertices.iter().map(GeoPoint::key).collect();
        keys.sort_unstable();
        keys.dedup();
        keys
    }
}

/// Run every traversal task: one per vertex with a full 2-neighbor record,
/// seeded as `(start = predecessor, target = successor)`. Tasks whose walk
/// cannot close contribute nothing.
pub fn extract_faces<T: Scalar>(adjacency: &AdjacencyMap<T>) -> Vec<Face<T>> {
    adjacency
        .iter()
        .filter(|(_, entry)| entry.neighbors.len() == 2)
        .filter_map(|(key, entry)| {
            trace_face(adjacency, key, entry.neighbors[0], entry.neighbors[1])
        })
        .collect()
}

/// Face walk as an explicit loop over an owned path buffer and a visited
/// set.
///
/// Closes as soon as the target shows up among the current vertex's
/// neighbors; otherwise advances to the neighbor that is neither the vertex
/// just appended nor already visited. No such neighbor means the walk dead
/// ends and no face is recoverable from this seed.
fn trace_face<T: Scalar>(
    adjacency: &AdjacencyMap<T>,
    seed: VertexKey,
    start: VertexKey,
    target: VertexKey,
) -> Option<Face<T>> {
    let mut path = vec![adjacency.get(&seed)?.vertex];
    let mut visited: AHashSet<VertexKey> = AHashSet::new();
    visited.insert(start);

    let mut appended = seed; // key of the vertex last pushed onto the path
    let mut current = start;

    loop {
        let node = adjacency.get(&current)?;
        if node.neighbors.contains(&target) {
            path.push(node.vertex);
            path.push(adjacency.get(&target)?.vertex);
            return Some(Face { vertices: path });
        }

        let next = node
            .neighbors
            .iter()
            .copied()
            .find(|k| *k != appended && !visited.contains(k))?;
        path.push(node.vertex);
        appended = current;
        visited.insert(next);
        current = next;
    }
}

/// Drop degenerate faces and duplicate discoveries of the same loop.
///
/// Two faces are the same loop when their vertex key sets are equal as
/// unordered sets; the first discovery wins. Applying this twice yields the
/// same result as applying it once.
pub fn dedup_faces<T: Scalar>(faces: Vec<Face<T>>) -> Vec<Face<T>> {
    let mut seen: AHashSet<Vec<VertexKey>> = AHashSet::new();
    let mut kept = Vec::new();
    for face in faces {
        let keys = face.key_set();
        if keys.len() < 2 {
            continue;
        }
        if seen.insert(keys) {
            kept.push(face);
        }
    }
    kept
}
