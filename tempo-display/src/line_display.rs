// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::canvas::{Canvas, Drawable};
use crate::geometry::{Point, StrokeStyle};

/// A straight segment between two points, e.g. a spring or a rod between two bodies.
#[derive(Clone, Debug, PartialEq)]
pub struct LineDisplay {
    start: Point,
    end: Point,
    style: StrokeStyle,
}

impl LineDisplay {
    pub fn new(start: Point, end: Point, style: StrokeStyle) -> Self {
        Self { start, end, style }
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn end(&self) -> Point {
        self.end
    }

    pub fn set_start(&mut self, start: Point) {
        self.start = start;
    }

    pub fn set_end(&mut self, end: Point) {
        self.end = end;
    }

    pub fn set_points(&mut self, start: Point, end: Point) {
        self.start = start;
        self.end = end;
    }

    pub fn length(&self) -> f64 {
        self.start.distance_to(self.end)
    }
}

impl Drawable for LineDisplay {
    fn draw(&self, canvas: &mut dyn Canvas) {
        canvas.begin_path();
        canvas.move_to(self.start);
        canvas.line_to(self.end);
        canvas.stroke(&self.style);
    }
}
