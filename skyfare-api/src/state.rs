use std::sync::Arc;
use skyfare_core::{Catalog, Translator, ViewSettings};

use crate::error::AppError;

/// Outcome of the one startup load.
#[derive(Clone)]
pub enum DataState {
    Ready(Arc<Catalog>),
    /// Terminal; carries the message shown to users
    Failed(String),
}

#[derive(Clone)]
pub struct AppState {
    pub data: DataState,
    pub translator: Arc<dyn Translator>,
    pub settings: Arc<ViewSettings>,
}

impl AppState {
    pub fn new(data: DataState, translator: impl Translator + 'static, settings: ViewSettings) -> Self {
        Self {
            data,
            translator: Arc::new(translator),
            settings: Arc::new(settings),
        }
    }

    pub fn catalog(&self) -> Result<&Catalog, AppError> {
        match &self.data {
            DataState::Ready(catalog) => Ok(catalog.as_ref()),
            DataState::Failed(msg) => Err(AppError::Unavailable(msg.clone())),
        }
    }
}
