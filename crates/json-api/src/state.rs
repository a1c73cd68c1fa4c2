//! State

use std::sync::Arc;

use stockpile_app::context::AppContext;

#[derive(Clone)]
pub(crate) struct State {
    pub(crate) app: AppContext,
    pub(crate) low_stock_threshold: u32,
}

impl State {
    #[must_use]
    pub(crate) fn new(app: AppContext, low_stock_threshold: u32) -> Self {
        Self {
            app,
            low_stock_threshold,
        }
    }

    #[must_use]
    pub(crate) fn shared(app: AppContext, low_stock_threshold: u32) -> Arc<Self> {
        Arc::new(Self::new(app, low_stock_threshold))
    }
}
