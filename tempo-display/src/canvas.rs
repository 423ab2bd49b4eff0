// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::geometry::{Point, StrokeStyle};

/// Path-stroking surface provided by the render pipeline.
pub trait Canvas {
    fn begin_path(&mut self);

    fn move_to(&mut self, point: Point);

    fn line_to(&mut self, point: Point);

    /// Stroke the current path.
    fn stroke(&mut self, style: &StrokeStyle);
}

/// Something that knows how to put itself on a [`Canvas`].
pub trait Drawable {
    fn draw(&self, canvas: &mut dyn Canvas);
}

#[derive(Clone, Debug, PartialEq)]
pub enum CanvasOp {
    BeginPath,
    MoveTo(Point),
    LineTo(Point),
    Stroke(StrokeStyle),
}

/// Headless canvas that records every call, for snapshotting a frame.
#[derive(Clone, Debug, Default)]
pub struct RecordingCanvas {
    ops: Vec<CanvasOp>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[CanvasOp] {
        &self.ops
    }

    /// Number of paths stroked so far.
    pub fn stroke_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, CanvasOp::Stroke(_)))
            .count()
    }

    pub fn clear(&mut self) {
        self.ops.clear();
    }
}

impl Canvas for RecordingCanvas {
    fn begin_path(&mut self) {
        self.ops.push(CanvasOp::BeginPath);
    }

    fn move_to(&mut self, point: Point) {
        self.ops.push(CanvasOp::MoveTo(point));
    }

    fn line_to(&mut self, point: Point) {
        self.ops.push(CanvasOp::LineTo(point));
    }

    fn stroke(&mut self, style: &StrokeStyle) {
        self.ops.push(CanvasOp::Stroke(style.clone()));
    }
}
