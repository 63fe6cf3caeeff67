/// Something drawn that must be torn down before its canvas is reused
pub trait ChartInstance {
    fn dispose(&mut self);
}

/// Owner of the single live chart on a canvas
pub struct ChartSlot<C: ChartInstance> {
    current: Option<C>,
}

impl<C: ChartInstance> ChartSlot<C> {
    pub fn new() -> Self {
        Self { current: None }
    }

    /// Dispose the current chart, then create its successor. `create` may
    /// decline (nothing to draw), which leaves the slot empty.
    pub fn replace<F>(&mut self, create: F)
    where
        F: FnOnce() -> Option<C>,
    {
        self.clear();
        self.current = create();
    }

    pub fn clear(&mut self) {
        if let Some(mut chart) = self.current.take() {
            chart.dispose();
        }
    }

    pub fn is_occupied(&self) -> bool {
        self.current.is_some()
    }
}

impl<C: ChartInstance> Default for ChartSlot<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: ChartInstance> Drop for ChartSlot<C> {
    fn drop(&mut self) {
        self.clear();
    }
}
