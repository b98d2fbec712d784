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

//! Decomposition of self-crossing freehand loops into simple polygon faces.
//!
//! A traced loop that crosses itself divides the plane the way a pen stroke
//! does. The `decompose` module recovers those simple faces from an ordered
//! vertex walk; `session` manages drawing gestures and the finalized shapes
//! around the engine; `geometry` holds the planar primitives both build on.

pub mod decompose;
pub mod error;
pub mod geometry;
pub mod numeric;
pub mod session;

pub use decompose::{Face, decompose_loop};
pub use error::Error;
pub use session::{DrawMode, DrawSession, SessionId, Shape, ShapeKind, ShapeStore};
