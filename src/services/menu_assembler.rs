use std::sync::Arc;
use tracing::instrument;

use crate::models::{FullMenuResponse, MenuCategory, ServiceResult};
use crate::repositories::MenuRepository;

/// Builds the denormalized full-menu view consumed by read-only clients.
///
/// A pure function of store state: one consistent snapshot per call, no
/// caching, no side effects. Dishes are returned regardless of
/// availability; hiding unavailable ones is the consumer's call, since the
/// admin view needs to see them.
pub struct MenuAssembler {
    repository: Arc<dyn MenuRepository>,
}

impl MenuAssembler {
    /// Create a new MenuAssembler
    pub fn new(repository: Arc<dyn MenuRepository>) -> Self {
        Self { repository }
    }

    /// Assemble the full menu: restaurant info plus every category in
    /// display order, each with its dishes in id order
    #[instrument(skip(self))]
    pub async fn get_full_menu(&self) -> ServiceResult<FullMenuResponse> {
        let (restaurant, categories) = self.repository.menu_snapshot().await?;

        let categories = categories
            .into_iter()
            .map(|(category, dishes)| MenuCategory { category, dishes })
            .collect();

        Ok(FullMenuResponse {
            restaurant,
            categories,
        })
    }
}
