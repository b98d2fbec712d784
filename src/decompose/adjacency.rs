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

use ahash::AHashMap;
use smallvec::SmallVec;

use crate::{
    geometry::{GeoPoint, VertexKey},
    numeric::Scalar,
};

/// Neighbor record of one vertex class: the canonical vertex instance plus
/// at most two neighbor keys.
#[derive(Debug, Clone)]
pub struct Adjacency<T: Scalar> {
    pub vertex: GeoPoint<T>,
    pub neighbors: SmallVec<[VertexKey; 2]>,
}

/// Degree-bounded adjacency over the augmented walk.
///
/// The first occurrence of a key records its predecessor and successor in
/// the walk, never itself; any revisit leaves the entry frozen. Every entry
/// therefore has at most two neighbors, and iteration follows first-sighting
/// order so the whole pipeline is deterministic.
#[derive(Debug, Clone, Default)]
pub struct AdjacencyMap<T: Scalar> {
    entries: AHashMap<VertexKey, Adjacency<T>>,
    order: Vec<VertexKey>,
}

impl<T: Scalar> AdjacencyMap<T> {
    /// Build from an explicitly closed walk (first vertex repeated at the
    /// end); predecessor and successor wrap around the sequence.
    pub fn from_walk(walk: &[GeoPoint<T>]) -> Self {
        let mut map = Self::default();
        let len = walk.len();
        if len == 0 {
            return map;
        }

        for (idx, point) in walk.iter().enumerate() {
            let key = point.key();
            if map.entries.contains_key(&key) {
                continue; // frozen at first sighting
            }
            let prev = walk[(idx + len - 1) % len].key();
            let next = walk[(idx + 1) % len].key();

            let mut neighbors = SmallVec::new();
            if prev != key {
                neighbors.push(prev);
            }
            if next != key {
                neighbors.push(next);
            }

            map.entries.insert(
                key,
                Adjacency {
                    vertex: *point,
                    neighbors,
                },
            );
            map.order.push(key);
        }
        map
    }

    pub fn get(&self, key: &VertexKey) -> Option<&Adjacency<T>> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Entries in first-sighting order.
    pub fn iter(&self) -> impl Iterator<Item = (VertexKey, &Adjacency<T>)> {
        self.order.iter().map(|k| (*k, &self.entries[k]))
    }
}
