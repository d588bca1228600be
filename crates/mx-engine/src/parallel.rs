//! Fork-join range splitting over the rayon worker pool.
//!
//! Both helpers cut the work into one contiguous chunk per worker thread,
//! run the body on every chunk concurrently, and return only once all
//! chunks have completed. Each element ends up in exactly one chunk, so a
//! body that writes only its own chunk never races another worker.

use rayon::prelude::*;

/// Splits `items` into one contiguous chunk per worker and runs
/// `body(offset, chunk)` on each, where `offset` is the index of the
/// chunk's first element. Blocks until every chunk is done.
pub fn for_each_chunk<T, F>(items: &mut [T], body: F)
where
    T: Send,
    F: Fn(usize, &mut [T]) + Sync,
{
    if items.is_empty() {
        return;
    }
    let workers = rayon::current_num_threads().max(1);
    let chunk_size = (items.len() + workers - 1) / workers;
    items
        .par_chunks_mut(chunk_size)
        .enumerate()
        .for_each(|(i, chunk)| body(i * chunk_size, chunk));
}

/// Splits a column-major buffer of `rows`-element columns into one
/// contiguous run of whole columns per worker and runs
/// `body(first_col, chunk)` on each. Every column is written by exactly
/// one worker. Blocks until every chunk is done.
pub fn for_each_column_chunk<F>(data: &mut [f64], rows: usize, body: F)
where
    F: Fn(usize, &mut [f64]) + Sync,
{
    if data.is_empty() || rows == 0 {
        return;
    }
    let cols = data.len() / rows;
    debug_assert_eq!(cols * rows, data.len());
    let workers = rayon::current_num_threads().max(1);
    let chunk_cols = (cols + workers - 1) / workers;
    data.par_chunks_mut(chunk_cols * rows)
        .enumerate()
        .for_each(|(i, chunk)| body(i * chunk_cols, chunk));
}
