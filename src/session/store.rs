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

use crate::{
    decompose::decompose_loop,
    error::Error,
    session::{DrawMode, DrawSession, SessionId, Shape, ShapeKind},
};

/// Owner of every finalized shape, in finalize order.
#[derive(Debug, Clone, Default)]
pub struct ShapeStore {
    shapes: Vec<Shape>,
}

impl ShapeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Finalize a gesture and return the newly added shapes.
    ///
    /// Polygon sessions with more than two vertices are decomposed into
    /// faces, all sharing one display index; everything else becomes a
    /// single polyline. Fewer than two usable vertices emit nothing.
    pub fn finalize(&mut self, session: DrawSession) -> &[Shape] {
        let first = self.shapes.len();
        let (id, mode, points) = session.into_parts();

        if points.len() < 2 {
            tracing::debug!(?id, vertices = points.len(), "degenerate session ignored");
            return &self.shapes[first..];
        }

        if mode == DrawMode::DrawPolygon && points.len() > 2 {
            let mut walk = points;
            let head = walk[0];
            walk.push(head); // close the traced loop
            let faces = decompose_loop(&walk);
            if !faces.is_empty() {
                let index = self.next_index(ShapeKind::Polygon);
                for face in faces {
                    self.shapes
                        .push(Shape::new(id, ShapeKind::Polygon, index, face.vertices));
                }
            }
        } else {
            let index = self.next_index(ShapeKind::Polyline);
            self.shapes
                .push(Shape::new(id, ShapeKind::Polyline, index, points));
        }

        let added = &self.shapes[first..];
        tracing::debug!(?id, shapes = added.len(), "session finalized");
        added
    }

    /// Next display index for `kind`: highest existing index of that kind
    /// plus one, scanning most-recent-first. Indices are monotone, so the
    /// first hit of a kind carries the highest index; deleting a shape
    /// never frees its index while a higher one exists.
    fn next_index(&self, kind: ShapeKind) -> u32 {
        self.shapes
            .iter()
            .rev()
            .find(|s| s.kind() == kind)
            .map(|s| s.index() + 1)
            .unwrap_or(1)
    }

    /// Remove every shape the session produced.
    pub fn delete_session(&mut self, id: SessionId) -> Result<usize, Error> {
        let before = self.shapes.len();
        self.shapes.retain(|s| s.session() != id);
        let removed = before - self.shapes.len();
        if removed == 0 {
            return Err(Error::UnknownSession(id));
        }
        tracing::debug!(?id, removed, "session shapes deleted");
        Ok(removed)
    }
}
