//! Splitting the URL list into per-worker shards.

/// Items per shard: `ceil(len / workers)`. Zero workers is treated as one.
pub fn shard_size(len: usize, workers: usize) -> usize {
    len.div_ceil(workers.max(1))
}

/// Splits `urls` into exactly `workers` (at least one) consecutive shards of
/// `shard_size` items. Trailing shards may be shorter or empty. Order is kept
/// and every item lands in exactly one shard.
pub fn partition(urls: Vec<String>, workers: usize) -> Vec<Vec<String>> {
    let workers = workers.max(1);
    let size = shard_size(urls.len(), workers);
    let mut rest = urls.into_iter();
    (0..workers)
        .map(|_| rest.by_ref().take(size).collect())
        .collect()
}
