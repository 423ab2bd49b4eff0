// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use tempo_display::{CanvasOp, Drawable, LineDisplay, Point, RecordingCanvas, StrokeStyle};

#[test]
fn test_draws_segment_between_points() {
    let style = StrokeStyle::new("#ff0000", 2.0);
    let line = LineDisplay::new(Point::new(0.0, 0.0), Point::new(3.0, 4.0), style.clone());
    let mut canvas = RecordingCanvas::new();

    line.draw(&mut canvas);

    assert_eq!(
        canvas.ops(),
        &[
            CanvasOp::BeginPath,
            CanvasOp::MoveTo(Point::new(0.0, 0.0)),
            CanvasOp::LineTo(Point::new(3.0, 4.0)),
            CanvasOp::Stroke(style),
        ]
    );
    assert_eq!(line.length(), 5.0);
}

#[test]
fn test_moved_endpoints_are_drawn_next_frame() {
    let mut line = LineDisplay::new(Point::default(), Point::new(1.0, 0.0), StrokeStyle::default());
    let mut canvas = RecordingCanvas::new();

    line.set_points((1.0, 1.0).into(), (2.0, 2.0).into());
    line.draw(&mut canvas);

    assert_eq!(canvas.ops()[1], CanvasOp::MoveTo(Point::new(1.0, 1.0)));
    assert_eq!(canvas.ops()[2], CanvasOp::LineTo(Point::new(2.0, 2.0)));

    line.set_end(Point::new(5.0, 1.0));
    assert_eq!(line.start(), Point::new(1.0, 1.0));
    assert_eq!(line.length(), 4.0);
}

#[test]
fn test_degenerate_line_still_strokes() {
    let line = LineDisplay::new(Point::new(2.0, 2.0), Point::new(2.0, 2.0), StrokeStyle::default());
    let mut canvas = RecordingCanvas::new();

    line.draw(&mut canvas);

    assert_eq!(canvas.stroke_count(), 1);
    assert_eq!(line.length(), 0.0);
}
