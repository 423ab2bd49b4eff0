// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Display glue between simulation models and a render pipeline.
//!
//! The render pipeline itself is abstracted as [`Canvas`]; this crate only decides what
//! to stroke.
//!
//! - [`LineDisplay`] - a straight segment between two points
//! - [`PathDisplay`] - a model's trail as a polyline
//! - [`ObservableList`] - a list that announces additions and removals
//! - [`PathLayer`] - creates a [`PathDisplay`] for every model that appears in an
//!   observed list and drops it when the model leaves

pub mod canvas;
pub mod geometry;
pub mod line_display;
pub mod observable_list;
pub mod path_display;
pub mod path_layer;

pub use canvas::{Canvas, CanvasOp, Drawable, RecordingCanvas};
pub use geometry::{Point, StrokeStyle};
pub use line_display::LineDisplay;
pub use observable_list::{ListEvent, ObservableList, SubscriptionId};
pub use path_display::{PathDisplay, PathSource};
pub use path_layer::PathLayer;
