use std::sync::Arc;

use crate::{config::Config, upstream::TickerSource};

#[derive(Clone)]
pub struct AppState {
    pub upstream: Arc<dyn TickerSource>,
    pub config: Config,
}
