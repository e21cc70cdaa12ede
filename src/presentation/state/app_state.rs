use std::sync::Arc;

use crate::application::ports::WorkbookReader;
use crate::application::services::OrderExtractionService;
use crate::presentation::config::Settings;

pub struct AppState<R>
where
    R: WorkbookReader,
{
    pub extraction_service: Arc<OrderExtractionService<R>>,
    pub settings: Settings,
}

impl<R> Clone for AppState<R>
where
    R: WorkbookReader,
{
    fn clone(&self) -> Self {
        Self {
            extraction_service: Arc::clone(&self.extraction_service),
            settings: self.settings.clone(),
        }
    }
}
