use crate::config::PageConfig;
use coursepredict_classifiers::SharedModel;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct PageState {
    /// Page configuration
    pub config: Arc<PageConfig>,

    /// Model used to fill the prediction table
    pub model: SharedModel,
}

impl PageState {
    pub fn new(config: PageConfig, model: SharedModel) -> Self {
        Self {
            config: Arc::new(config),
            model,
        }
    }
}
