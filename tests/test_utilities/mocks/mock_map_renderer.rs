use devradar::prelude::*;
use std::sync::{Arc, Mutex};

/// MapRenderer capturing every view it is asked to draw
#[derive(Default, Clone)]
pub struct CapturingRenderer {
    pub views: Arc<Mutex<Vec<ScreenView>>>,
}

impl CapturingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_view(&self) -> Option<ScreenView> {
        self.views.lock().unwrap().last().cloned()
    }

    pub fn render_count(&self) -> usize {
        self.views.lock().unwrap().len()
    }
}

impl MapRenderer for CapturingRenderer {
    fn render(&self, view: &ScreenView) -> Result<String> {
        self.views.lock().unwrap().push(view.clone());
        Ok(String::new())
    }
}

/// OutputPresenter discarding everything
pub struct NullPresenter;

impl OutputPresenter for NullPresenter {
    fn present(&self, _content: &str) -> Result<()> {
        Ok(())
    }
}

/// OutputPresenter that starts failing after a number of successful calls
#[derive(Clone)]
pub struct FailingPresenter {
    succeed_first: usize,
    calls: Arc<Mutex<usize>>,
}

impl FailingPresenter {
    pub fn after(succeed_first: usize) -> Self {
        Self {
            succeed_first,
            calls: Arc::new(Mutex::new(0)),
        }
    }
}

impl OutputPresenter for FailingPresenter {
    fn present(&self, _content: &str) -> Result<()> {
        let mut calls = self.calls.lock().unwrap();
        *calls += 1;
        if *calls > self.succeed_first {
            anyhow::bail!("disk full");
        }
        Ok(())
    }
}
