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

use std::cmp::Ordering;

use ahash::AHashMap;

use crate::{
    geometry::{GeoPoint, Segment, VertexKey, true_crossing},
    numeric::Scalar,
};

/// Insert every true crossing into the closed walk, in traversal order.
///
/// Emits, per original segment, its start vertex followed by that segment's
/// crossings ordered along it, and re-appends the first vertex to close the
/// loop. A crossing discovered a second time (once per segment involved)
/// reuses the first discovery's instance, so downstream keying stays
/// consistent.
pub fn insert_crossings<T: Scalar>(walk: &[GeoPoint<T>]) -> Vec<GeoPoint<T>> {
    if walk.is_empty() {
        return Vec::new();
    }
    let segments: Vec<Segment<T>> = walk.windows(2).map(|w| Segment::new(w[0], w[1])).collect();

    // every point found so far, keyed for epsilon-class reuse
    let mut found: AHashMap<VertexKey, GeoPoint<T>> = AHashMap::new();
    let mut out: Vec<GeoPoint<T>> = Vec::with_capacity(walk.len());

    for (i, segment) in segments.iter().enumerate() {
        let mut cuts: Vec<GeoPoint<T>> = Vec::new();
        for (j, other) in segments.iter().enumerate() {
            if j == i || j + 1 == i || j == i + 1 {
                continue; // the segment itself and its immediate neighbors
            }
            let Some(candidate) = true_crossing(segment, other) else {
                continue;
            };
            let cut = *found.entry(candidate.key()).or_insert(candidate);
            cuts.push(cut);
        }
        sort_along(segment, &mut cuts);

        found.entry(segment.start.key()).or_insert(segment.start);
        out.push(segment.start);
        out.extend(cuts);
    }

    out.push(walk[0]);
    out
}

/// Order crossings along the segment's own traversal direction: a stable
/// sort by latitude, then a stable sort by longitude. Whichever axis the
/// segment actually advances on ends up deciding the order.
fn sort_along<T: Scalar>(segment: &Segment<T>, cuts: &mut [GeoPoint<T>]) {
    let lat_ascending = segment.start.lat < segment.end.lat;
    cuts.sort_by(|p, q| {
        let ord = p.lat.partial_cmp(&q.lat).unwrap_or(Ordering::Equal);
        if lat_ascending { ord } else { ord.reverse() }
    });

    let lng_ascending = segment.start.lng < segment.end.lng;
    cuts.sort_by(|p, q| {
        let ord = p.lng.partial_cmp(&q.lng).unwrap_or(Ordering::Equal);
        if lng_ascending { ord } else { ord.reverse() }
    });
}
