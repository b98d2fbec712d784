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

use crate::{error::Error, geometry::GeoPoint, session::SessionId};

/// Drawing-mode selector. Gates whether clicks count as drawing input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DrawMode {
    #[default]
    Normal,
    DrawLine,
    DrawPolygon,
}

impl DrawMode {
    pub fn is_drawing(self) -> bool {
        matches!(self, Self::DrawLine | Self::DrawPolygon)
    }

    /// Mode after the user selects `action`: selecting the already-active
    /// mode returns to `Normal`.
    pub fn toggled(self, action: Self) -> Self {
        if self == action { Self::Normal } else { action }
    }
}

/// How a click relates to the vertices accumulated so far.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClickAction {
    /// Within radius of the first vertex: the finalize-as-polygon trigger.
    /// The click itself is not appended.
    CloseLoop,
    /// Within radius of the previous vertex: ignored.
    DuplicateOfLast,
    /// Within radius of an existing vertex: reuse its canonical instance.
    Snap(GeoPoint<f64>),
    /// Anywhere else.
    New,
}

/// One in-progress drawing gesture.
///
/// Created on mode entry and consumed by finalize or abort, so partial
/// state can never outlive the gesture that produced it.
#[derive(Debug)]
pub struct DrawSession {
    id: SessionId,
    mode: DrawMode,
    points: Vec<GeoPoint<f64>>,
}

impl DrawSession {
    /// Open a session for a drawing mode. `Normal` is not one.
    pub fn begin(mode: DrawMode) -> Result<Self, Error> {
        if !mode.is_drawing() {
            return Err(Error::DrawingDisabled(mode));
        }
        let id = SessionId::random();
        tracing::trace!(?id, ?mode, "drawing session opened");
        Ok(Self {
            id,
            mode,
            points: Vec::new(),
        })
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn mode(&self) -> DrawMode {
        self.mode
    }

    pub fn vertices(&self) -> &[GeoPoint<f64>] {
        &self.points
    }

    /// Classify a click against the accumulated vertices. `radius` is in
    /// coordinate units; converting from screen pixels is the viewport
    /// collaborator's job.
    pub fn resolve_click(&self, p: &GeoPoint<f64>, radius: f64) -> ClickAction {
        let near =
            |q: &GeoPoint<f64>| (q.lat - p.lat).abs() <= radius && (q.lng - p.lng).abs() <= radius;

        if self.points.first().is_some_and(near) {
            return ClickAction::CloseLoop;
        }
        if self.points.len() > 1 && self.points.last().is_some_and(near) {
            return ClickAction::DuplicateOfLast;
        }
        if let Some(hit) = self.points.iter().find(|q| near(q)) {
            return ClickAction::Snap(*hit);
        }
        ClickAction::New
    }

    /// Append a clicked vertex.
    pub fn push_vertex(&mut self, p: GeoPoint<f64>) {
        self.points.push(p);
    }

    /// Discard the gesture and everything it accumulated.
    pub fn abort(self) {
        tracing::trace!(id = ?self.id, vertices = self.points.len(), "drawing session aborted");
    }

    pub(crate) fn into_parts(self) -> (SessionId, DrawMode, Vec<GeoPoint<f64>>) {
        (self.id, self.mode, self.points)
    }
}
