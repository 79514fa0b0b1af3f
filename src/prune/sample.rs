use rand::seq::index;

/// Draw `count` distinct entries from `pool` uniformly at random, without
/// replacement. Returns `None` when the pool holds fewer than `count`
/// entries; the caller reports that as a warning and deletes nothing.
pub fn draw<T: Clone>(pool: &[T], count: usize) -> Option<Vec<T>> {
    if pool.len() < count {
        return None;
    }

    let mut rng = rand::rng();
    let selection = index::sample(&mut rng, pool.len(), count)
        .into_iter()
        .map(|i| pool[i].clone())
        .collect();
    Some(selection)
}
