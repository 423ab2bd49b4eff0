// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::canvas::{Canvas, Drawable};
use crate::geometry::StrokeStyle;
use crate::observable_list::{ListEvent, ObservableList, SubscriptionId};
use crate::path_display::{PathDisplay, PathSource};
use parking_lot::Mutex;
use std::sync::Arc;
use tempo_core::debug;

/// Display for one model, with the number of times that model sits in the list.
struct Tracked<M> {
    display: PathDisplay<M>,
    copies: usize,
}

/// Keeps one [`PathDisplay`] per model in an observed list.
///
/// A model pushed more than once still gets a single display, which stays until the
/// last copy of the model leaves the list.
///
/// Clones share the same set of displays, so a clone can be handed to the render loop
/// while the original stays attached to the list.
pub struct PathLayer<M> {
    style: StrokeStyle,
    paths: Arc<Mutex<Vec<Tracked<M>>>>,
}

impl<M> PathLayer<M>
where
    M: PathSource + Send + Sync + 'static,
{
    pub fn new(style: StrokeStyle) -> Self {
        Self {
            style,
            paths: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Track `list`: create displays for the models already in it, then add or drop
    /// one whenever a model is added or removed.
    pub fn attach(&self, list: &mut ObservableList<Arc<M>>) -> SubscriptionId {
        for model in list.iter() {
            self.add(model.clone());
        }

        let layer = self.clone();
        list.subscribe(move |event| match event {
            ListEvent::Added(model) => layer.add(model.clone()),
            ListEvent::Removed(model) => layer.remove(model),
        })
    }

    fn add(&self, model: Arc<M>) {
        let mut paths = self.paths.lock();
        if let Some(tracked) = paths.iter_mut().find(|t| t.display.renders(&model)) {
            tracked.copies += 1;
            return;
        }
        paths.push(Tracked {
            display: PathDisplay::new(model, self.style.clone()),
            copies: 1,
        });
        debug!("path layer: display created, {} tracked", paths.len());
    }

    fn remove(&self, model: &Arc<M>) {
        let mut paths = self.paths.lock();
        let Some(index) = paths.iter().position(|t| t.display.renders(model)) else {
            return;
        };

        paths[index].copies -= 1;
        if paths[index].copies == 0 {
            paths.remove(index);
            debug!("path layer: display dropped, {} tracked", paths.len());
        }
    }

    pub fn len(&self) -> usize {
        self.paths.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.lock().is_empty()
    }

    /// Whether a display exists for exactly `model`.
    pub fn tracks(&self, model: &Arc<M>) -> bool {
        self.paths.lock().iter().any(|t| t.display.renders(model))
    }
}

impl<M> Clone for PathLayer<M> {
    fn clone(&self) -> Self {
        Self {
            style: self.style.clone(),
            paths: self.paths.clone(),
        }
    }
}

impl<M: PathSource> Drawable for PathLayer<M> {
    fn draw(&self, canvas: &mut dyn Canvas) {
        for tracked in self.paths.lock().iter() {
            tracked.display.draw(canvas);
        }
    }
}
