//! Batch rendering workflow
//!
//! Renders many hashes with the same options. Results keep input order;
//! an invalid hash only fails its own entry.

use crate::app::generator::{GenerateError, Options, generate};

#[cfg(feature = "parallel")]
use rayon::prelude::*;
#[cfg(feature = "parallel")]
use std::sync::atomic::{AtomicUsize, Ordering};

/// Render every hash sequentially
pub fn render_batch<S: AsRef<str>>(
    hashes: &[S],
    options: &Options,
) -> Vec<Result<String, GenerateError>> {
    hashes
        .iter()
        .map(|hash| generate(hash.as_ref(), options))
        .collect()
}

/// Render with a progress callback
pub fn render_batch_with_progress<S, F>(
    hashes: &[S],
    options: &Options,
    mut on_progress: F,
) -> Vec<Result<String, GenerateError>>
where
    S: AsRef<str>,
    F: FnMut(usize, usize), // (current, total)
{
    let total = hashes.len();
    let mut results = Vec::with_capacity(total);

    for (i, hash) in hashes.iter().enumerate() {
        results.push(generate(hash.as_ref(), options));
        on_progress(i + 1, total);
    }

    results
}

/// Render every hash in parallel using rayon
///
/// Generation is pure, so workers share nothing but the options.
#[cfg(feature = "parallel")]
pub fn render_batch_parallel<S>(
    hashes: &[S],
    options: &Options,
) -> Vec<Result<String, GenerateError>>
where
    S: AsRef<str> + Sync,
{
    hashes
        .par_iter()
        .map(|hash| generate(hash.as_ref(), options))
        .collect()
}

/// Render in parallel with a progress callback
///
/// The callback may run on any worker thread. `current` counts finished
/// hashes, so calls can arrive out of order; exactly one call reports
/// `(total, total)`.
#[cfg(feature = "parallel")]
pub fn render_batch_parallel_with_progress<S, F>(
    hashes: &[S],
    options: &Options,
    on_progress: F,
) -> Vec<Result<String, GenerateError>>
where
    S: AsRef<str> + Sync,
    F: Fn(usize, usize) + Sync, // (current, total)
{
    let total = hashes.len();
    let progress = AtomicUsize::new(0);

    hashes
        .par_iter()
        .map(|hash| {
            let result = generate(hash.as_ref(), options);
            let current = progress.fetch_add(1, Ordering::Relaxed) + 1;
            on_progress(current, total);
            result
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hashes() -> Vec<String> {
        vec![
            "0".repeat(64),
            "f".repeat(64),
            "not-a-hash".to_string(),
            "0123456789abcdef".repeat(4),
        ]
    }

    #[test]
    fn test_render_batch_keeps_order_and_errors() {
        let results = render_batch(&hashes(), &Options::default());
        assert_eq!(results.len(), 4);
        assert!(results[0].is_ok());
        assert!(results[1].is_ok());
        assert!(matches!(results[2], Err(GenerateError::Validation(_))));
        assert!(results[3].is_ok());
        assert_ne!(results[0], results[1]);
    }

    #[test]
    fn test_render_batch_empty() {
        let empty: Vec<String> = vec![];
        assert!(render_batch(&empty, &Options::default()).is_empty());
    }

    #[test]
    fn test_render_batch_with_progress() {
        let mut calls = Vec::new();
        let results =
            render_batch_with_progress(&hashes(), &Options::default(), |c, t| calls.push((c, t)));
        assert_eq!(results.len(), 4);
        assert_eq!(calls, vec![(1, 4), (2, 4), (3, 4), (4, 4)]);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_render_batch_parallel_matches_sequential() {
        let options = Options::default().with_grid(true);
        let hashes = hashes();
        assert_eq!(
            render_batch_parallel(&hashes, &options),
            render_batch(&hashes, &options)
        );
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_render_batch_parallel_with_progress() {
        use std::sync::Mutex;

        let options = Options::default();
        let hashes = hashes();
        let calls = Mutex::new(Vec::new());
        let results = render_batch_parallel_with_progress(&hashes, &options, |c, t| {
            calls.lock().unwrap().push((c, t));
        });

        assert_eq!(results, render_batch(&hashes, &options));
        let mut calls = calls.into_inner().unwrap();
        calls.sort_unstable();
        assert_eq!(calls, vec![(1, 4), (2, 4), (3, 4), (4, 4)]);
    }
}
