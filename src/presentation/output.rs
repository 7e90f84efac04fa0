//! Output Rendering
//!
//! A one-shot CLI run changes state several times (load, then select, ...)
//! but should print a single listing. [`FinalFrameView`] forwards loading and
//! error notifications as they happen and keeps only the latest lists until
//! [`FinalFrameView::flush`].

use std::sync::Mutex;

use crate::domain::ports::{ProjectItem, ProjectsView};

type Frame = (Vec<ProjectItem>, Vec<ProjectItem>);

pub struct FinalFrameView<V: ProjectsView> {
    inner: V,
    latest: Mutex<Option<Frame>>,
}

impl<V: ProjectsView> FinalFrameView<V> {
    pub fn new(inner: V) -> Self {
        Self {
            inner,
            latest: Mutex::new(None),
        }
    }

    /// Render the latest lists, if any, into the wrapped view.
    ///
    /// Returns whether anything was rendered.
    pub fn flush(&self) -> bool {
        let frame = self.latest.lock().ok().and_then(|mut latest| latest.take());
        match frame {
            Some((available, selected)) => {
                self.inner.show_projects(&available, &selected);
                true
            }
            None => false,
        }
    }

    pub fn inner(&self) -> &V {
        &self.inner
    }
}

impl<V: ProjectsView> ProjectsView for FinalFrameView<V> {
    fn set_loading(&self, loading: bool) {
        self.inner.set_loading(loading);
    }

    fn show_projects(&self, available: &[ProjectItem], selected: &[ProjectItem]) {
        if let Ok(mut latest) = self.latest.lock() {
            *latest = Some((available.to_vec(), selected.to_vec()));
        }
    }

    fn show_error(&self, message: &str) {
        self.inner.show_error(message);
    }
}
