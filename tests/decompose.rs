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

use loopcut::decompose::{Face, decompose_loop, dedup_faces};
use loopcut::geometry::{GeoPoint, VertexKey};

fn walk(points: &[(f64, f64)]) -> Vec<GeoPoint<f64>> {
    points
        .iter()
        .map(|&(lat, lng)| GeoPoint::new(lat, lng))
        .collect()
}

fn key(lat: f64, lng: f64) -> VertexKey {
    GeoPoint::new(lat, lng).key()
}

#[test]
fn test_square_yields_one_face() {
    let faces = decompose_loop(&walk(&[
        (0.0, 0.0),
        (0.0, 2.0),
        (2.0, 2.0),
        (2.0, 0.0),
        (0.0, 0.0),
    ]));

    assert_eq!(faces.len(), 1);
    let face = &faces[0];
    assert_eq!(face.vertices.len(), 4);
    let keys = face.key_set();
    assert_eq!(keys.len(), 4);
    for &(lat, lng) in &[(0.0, 0.0), (0.0, 2.0), (2.0, 2.0), (2.0, 0.0)] {
        assert!(keys.contains(&key(lat, lng)));
    }
}

#[test]
fn test_bowtie_yields_two_triangles_sharing_the_crossing() {
    let faces = decompose_loop(&walk(&[
        (0.0, 0.0),
        (2.0, 2.0),
        (2.0, 0.0),
        (0.0, 2.0),
        (0.0, 0.0),
    ]));

    assert_eq!(faces.len(), 2);
    let crossing = key(1.0, 1.0);
    for face in &faces {
        assert_eq!(face.key_set().len(), 3);
        assert!(face.key_set().contains(&crossing));
    }
    assert_ne!(faces[0].key_set(), faces[1].key_set());
}

#[test]
fn test_unclosed_input_is_closed_first() {
    let faces = decompose_loop(&walk(&[(0.0, 0.0), (0.0, 2.0), (2.0, 2.0), (2.0, 0.0)]));
    assert_eq!(faces.len(), 1);
}

#[test]
fn test_faces_survive_a_round_trip() {
    let faces = decompose_loop(&walk(&[
        (0.0, 0.0),
        (2.0, 2.0),
        (2.0, 0.0),
        (0.0, 2.0),
        (0.0, 0.0),
    ]));

    for face in &faces {
        let again = decompose_loop(&face.vertices);
        assert_eq!(again.len(), 1);
        assert_eq!(again[0].key_set(), face.key_set());
    }
}

#[test]
fn test_degenerate_input_yields_nothing() {
    assert!(decompose_loop::<f64>(&[]).is_empty());
    assert!(decompose_loop(&walk(&[(0.0, 0.0), (1.0, 1.0)])).is_empty());
}

#[test]
fn test_dedup_keeps_the_first_discovery() {
    let a = Face {
        vertices: walk(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)]),
    };
    let b = Face {
        vertices: walk(&[(1.0, 1.0), (1.0, 0.0), (0.0, 0.0)]), // same set, other order
    };
    let c = Face {
        vertices: walk(&[(5.0, 5.0), (5.0, 5.0)]), // one identity class only
    };

    let kept = dedup_faces(vec![a.clone(), b, c]);
    assert_eq!(kept, vec![a]);
}

#[test]
fn test_dedup_is_idempotent() {
    let faces = vec![
        Face {
            vertices: walk(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)]),
        },
        Face {
            vertices: walk(&[(1.0, 1.0), (1.0, 0.0), (0.0, 0.0)]),
        },
        Face {
            vertices: walk(&[(2.0, 2.0), (3.0, 2.0), (3.0, 3.0)]),
        },
    ];

    let once = dedup_faces(faces);
    let twice = dedup_faces(once.clone());
    assert_eq!(once, twice);
    assert_eq!(once.len(), 2);
}

#[test]
fn test_decomposition_is_deterministic() {
    let pts = walk(&[
        (0.0, 0.0),
        (2.0, 2.0),
        (2.0, 0.0),
        (0.0, 2.0),
        (0.0, 0.0),
    ]);
    assert_eq!(decompose_loop(&pts), decompose_loop(&pts));
}
