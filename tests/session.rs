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

use approx::assert_relative_eq;
use loopcut::Error;
use loopcut::geometry::GeoPoint;
use loopcut::session::{ClickAction, DrawMode, DrawSession, SessionId, ShapeKind, ShapeStore};

fn session_with(mode: DrawMode, points: &[(f64, f64)]) -> DrawSession {
    let mut session = DrawSession::begin(mode).unwrap();
    for &(lat, lng) in points {
        session.push_vertex(GeoPoint::new(lat, lng));
    }
    session
}

#[test]
fn test_normal_mode_cannot_draw() {
    assert_eq!(
        DrawSession::begin(DrawMode::Normal).err(),
        Some(Error::DrawingDisabled(DrawMode::Normal))
    );
}

#[test]
fn test_selecting_the_active_mode_toggles_back() {
    assert_eq!(
        DrawMode::DrawLine.toggled(DrawMode::DrawLine),
        DrawMode::Normal
    );
    assert_eq!(
        DrawMode::Normal.toggled(DrawMode::DrawPolygon),
        DrawMode::DrawPolygon
    );
    assert_eq!(
        DrawMode::DrawLine.toggled(DrawMode::DrawPolygon),
        DrawMode::DrawPolygon
    );
}

#[test]
fn test_polyline_indices_run_one_two_three() {
    let mut store = ShapeStore::new();
    for _ in 0..3 {
        store.finalize(session_with(DrawMode::DrawLine, &[(0.0, 0.0), (1.0, 1.0)]));
    }
    let indices: Vec<u32> = store.shapes().iter().map(|s| s.index()).collect();
    assert_eq!(indices, vec![1, 2, 3]);
}

#[test]
fn test_deleted_index_is_not_reused() {
    let mut store = ShapeStore::new();
    let mut ids = Vec::new();
    for _ in 0..3 {
        let session = session_with(DrawMode::DrawLine, &[(0.0, 0.0), (1.0, 1.0)]);
        ids.push(session.id());
        store.finalize(session);
    }
    assert_eq!(store.delete_session(ids[1]), Ok(1));

    let added = store.finalize(session_with(DrawMode::DrawLine, &[(2.0, 2.0), (3.0, 3.0)]));
    assert_eq!(added.len(), 1);
    assert_eq!(added[0].index(), 4);
}

#[test]
fn test_polygon_faces_share_one_session_index() {
    let mut store = ShapeStore::new();
    let bowtie = session_with(
        DrawMode::DrawPolygon,
        &[(0.0, 0.0), (2.0, 2.0), (2.0, 0.0), (0.0, 2.0)],
    );
    let added = store.finalize(bowtie);
    assert_eq!(added.len(), 2);
    assert!(
        added
            .iter()
            .all(|s| s.kind() == ShapeKind::Polygon && s.index() == 1)
    );

    let square = session_with(
        DrawMode::DrawPolygon,
        &[(5.0, 5.0), (5.0, 7.0), (7.0, 7.0), (7.0, 5.0)],
    );
    let added = store.finalize(square);
    assert_eq!(added.len(), 1);
    assert_eq!(added[0].index(), 2);
}

#[test]
fn test_polyline_and_polygon_sequences_are_independent() {
    let mut store = ShapeStore::new();
    store.finalize(session_with(DrawMode::DrawLine, &[(0.0, 0.0), (1.0, 0.0)]));
    store.finalize(session_with(
        DrawMode::DrawPolygon,
        &[(0.0, 0.0), (0.0, 2.0), (2.0, 2.0), (2.0, 0.0)],
    ));
    store.finalize(session_with(DrawMode::DrawLine, &[(3.0, 0.0), (4.0, 0.0)]));

    let summary: Vec<(ShapeKind, u32)> = store
        .shapes()
        .iter()
        .map(|s| (s.kind(), s.index()))
        .collect();
    assert_eq!(
        summary,
        vec![
            (ShapeKind::Polyline, 1),
            (ShapeKind::Polygon, 1),
            (ShapeKind::Polyline, 2),
        ]
    );
}

#[test]
fn test_degenerate_session_is_ignored() {
    let mut store = ShapeStore::new();
    let added = store.finalize(session_with(DrawMode::DrawLine, &[(0.0, 0.0)]));
    assert!(added.is_empty());
    assert!(store.shapes().is_empty());
}

#[test]
fn test_short_polygon_falls_back_to_polyline() {
    let mut store = ShapeStore::new();
    let added = store.finalize(session_with(DrawMode::DrawPolygon, &[(0.0, 0.0), (1.0, 1.0)]));
    assert_eq!(added.len(), 1);
    assert_eq!(added[0].kind(), ShapeKind::Polyline);
}

#[test]
fn test_abort_leaves_no_residue() {
    let mut store = ShapeStore::new();
    let mut session = session_with(DrawMode::DrawPolygon, &[(0.0, 0.0), (1.0, 1.0), (1.0, 0.0)]);
    session.push_vertex(GeoPoint::new(0.5, 0.5));
    let id = session.id();
    session.abort();

    assert!(store.shapes().is_empty());
    assert_eq!(store.delete_session(id), Err(Error::UnknownSession(id)));
}

#[test]
fn test_resolve_click_ladder() {
    let session = session_with(
        DrawMode::DrawPolygon,
        &[(0.0, 0.0), (5.0, 5.0), (5.0, 0.0)],
    );
    let radius = 0.1;

    assert_eq!(
        session.resolve_click(&GeoPoint::new(0.05, 0.0), radius),
        ClickAction::CloseLoop
    );
    assert_eq!(
        session.resolve_click(&GeoPoint::new(5.0, 0.05), radius),
        ClickAction::DuplicateOfLast
    );
    assert_eq!(
        session.resolve_click(&GeoPoint::new(5.05, 5.0), radius),
        ClickAction::Snap(GeoPoint::new(5.0, 5.0))
    );
    assert_eq!(
        session.resolve_click(&GeoPoint::new(9.0, 9.0), radius),
        ClickAction::New
    );
}

#[test]
fn test_polyline_length_and_details() {
    let mut store = ShapeStore::new();
    let added = store.finalize(session_with(
        DrawMode::DrawLine,
        &[(0.0, 0.0), (0.0, 1.0), (0.0, 2.0)],
    ));
    let details = added[0].details();

    assert_eq!(details.kind, ShapeKind::Polyline);
    assert_eq!(details.index, 1);
    assert_relative_eq!(details.length_km.unwrap(), 222.39, max_relative = 1e-3);
}

#[test]
fn test_polygon_details_have_no_length() {
    let mut store = ShapeStore::new();
    let added = store.finalize(session_with(
        DrawMode::DrawPolygon,
        &[(0.0, 0.0), (0.0, 2.0), (2.0, 2.0), (2.0, 0.0)],
    ));
    assert_eq!(added[0].details().length_km, None);
}

#[test]
fn test_delete_unknown_session_errors() {
    let mut store = ShapeStore::new();
    let id = SessionId::random();
    assert_eq!(store.delete_session(id), Err(Error::UnknownSession(id)));
}
