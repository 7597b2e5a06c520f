use alloc::vec::Vec;

use crate::*;

pub type CategoryId = u64;

/// Supplier of the category pool and the per-category clue sets. The web app
/// backs this with an HTTP client; tests use an in-memory table.
#[allow(async_fn_in_trait)]
pub trait CategorySource {
    async fn category_pool(&self, pool_size: usize) -> Result<Vec<CategoryId>>;
    async fn category(&self, id: CategoryId) -> Result<Category>;
}

/// Fetches a pool of category ids, samples a board's worth of them and
/// assembles a fresh board with every clue hidden.
pub async fn build_board<S: CategorySource>(
    source: &S,
    config: BoardConfig,
    seed: u64,
) -> Result<Board> {
    use rand::prelude::*;

    let pool = source.category_pool(config.pool_size).await?;
    log::debug!(
        "Fetched pool of {} categories, sampling {}",
        pool.len(),
        config.categories
    );

    let mut rng = SmallRng::seed_from_u64(seed);
    let picked = sample(&pool, config.categories, &mut rng)?;

    let mut columns = Vec::with_capacity(picked.len());
    for id in picked {
        log::trace!("Fetching category {}", id);
        let category = source.category(id).await?;
        columns.push(category.with_clue_count(config.clues_per_category)?);
    }
    Board::from_columns(columns)
}
