// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::canvas::{Canvas, Drawable};
use crate::geometry::{Point, StrokeStyle};
use std::sync::Arc;

/// A model that leaves a trail, oldest point first.
pub trait PathSource {
    fn path(&self) -> Vec<Point>;
}

/// Strokes a model's trail as one polyline.
#[derive(Debug)]
pub struct PathDisplay<M> {
    model: Arc<M>,
    style: StrokeStyle,
}

impl<M> PathDisplay<M> {
    pub fn new(model: Arc<M>, style: StrokeStyle) -> Self {
        Self { model, style }
    }

    pub fn model(&self) -> &Arc<M> {
        &self.model
    }

    /// Whether this display renders exactly `model` (pointer identity).
    pub fn renders(&self, model: &Arc<M>) -> bool {
        Arc::ptr_eq(&self.model, model)
    }
}

impl<M: PathSource> Drawable for PathDisplay<M> {
    fn draw(&self, canvas: &mut dyn Canvas) {
        let path = self.model.path();
        let [first, rest @ ..] = path.as_slice() else {
            return;
        };
        // A single point is not a path
        if rest.is_empty() {
            return;
        }

        canvas.begin_path();
        canvas.move_to(*first);
        for point in rest {
            canvas.line_to(*point);
        }
        canvas.stroke(&self.style);
    }
}
