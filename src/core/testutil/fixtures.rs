mod test_imports {
    pub use crate::core::testutil::random::{random_direction, values};
    pub use crate::core::{SearchSpace, SortDirection, NOT_FOUND_INDEX};
    pub use rand::Rng;
    pub use std::cell::Cell;
    pub use tracing::{Level, Span};
}

use std::sync::Once;
use std::thread::JoinHandle;
use std::time::Duration;
use test_imports::*;

static TRACING_INIT: Once = Once::new();

/// Returns a span to parent the spans of the components under test.
/// The first call installs a fmt subscriber writing through the test harness, so trace output
/// is only shown for failing tests.
pub fn span_fixture() -> Span {
    TRACING_INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(Level::TRACE)
            .with_test_writer()
            .try_init();
    });
    tracing::span!(Level::INFO, "test_span")
}

/// Generate a random search space of `n` values in `[-max, max]`, sorted in the given direction.
pub fn random_sorted_space(n: usize, max: i32, direction: SortDirection) -> Vec<i32> {
    let mut space = values(n, max);
    space.sort();
    if direction == SortDirection::Descending {
        space.reverse();
    }
    space
}

/// Generate a random search space of random length (up to `max_len`) and random direction.
pub fn random_search_space(max_len: usize, max: i32) -> Vec<i32> {
    let n = rand::rng().random_range(0..=max_len);
    random_sorted_space(n, max, random_direction())
}

/// Returns the indexes holding `key` found by scanning every element, in the index-list shape
/// (`[-1]` when there is none). Used as the reference answer for the binary searches.
pub fn linear_scan(space: &[i32], key: i32) -> Vec<isize> {
    let found = space
        .iter()
        .enumerate()
        .filter(|(_, v)| **v == key)
        .map(|(i, _)| i as isize)
        .collect::<Vec<isize>>();
    if found.is_empty() {
        vec![NOT_FOUND_INDEX]
    } else {
        found
    }
}

/// CountingSpace is a search space that records how many elements have been read from it.
pub struct CountingSpace<'a> {
    inner: &'a [i32],
    reads: Cell<usize>,
}

impl<'a> CountingSpace<'a> {
    pub fn new(inner: &'a [i32]) -> Self {
        CountingSpace {
            inner,
            reads: Cell::new(0),
        }
    }

    /// Returns the number of element reads so far.
    pub fn reads(&self) -> usize {
        self.reads.get()
    }
}

impl SearchSpace for CountingSpace<'_> {
    type Elem = i32;

    fn len(&self) -> usize {
        self.inner.len()
    }

    fn elem(&self, idx: usize) -> i32 {
        self.reads.set(self.reads.get() + 1);
        self.inner[idx]
    }
}

/// Joins all threads in the given handles with a timeout.
/// If any thread takes longer than the timeout, it will return an error.
/// If all threads finish within the timeout, it will return Ok(()).
pub fn join_all_with_timeout<T>(handles: Vec<JoinHandle<T>>, timeout: Duration) -> Result<(), String>
where
    T: Send + 'static,
{
    let start = std::time::Instant::now();

    for handle in handles {
        let elapsed = start.elapsed();
        if elapsed >= timeout {
            return Err("Timeout".to_string());
        }
        join_with_timeout(handle, timeout - elapsed)?;
    }

    Ok(())
}

/// Joins a thread with a timeout by handing the join to a helper thread and waiting on a channel
/// for its outcome. A panic in the joined thread is reported as an error.
pub fn join_with_timeout<T>(handle: JoinHandle<T>, timeout: Duration) -> Result<(), String>
where
    T: Send + 'static,
{
    let (tx, rx) = std::sync::mpsc::channel();

    let join_thread = std::thread::spawn(move || {
        let res = handle.join();
        let _ = tx.send(res);
    });

    match rx.recv_timeout(timeout) {
        Ok(join_res) => {
            join_thread.join().expect("Failed to join thread");
            join_res
                .map(|_| ())
                .map_err(|e| format!("Thread panicked: {:?}", e))
        }
        Err(_) => Err("Thread timed out".to_string()),
    }
}

mod test {
    use super::*;
    use crate::core::SearchSpace;

    /// Random search spaces are sorted in the direction they were generated for.
    #[test]
    fn test_random_sorted_space() {
        let asc = random_sorted_space(100, 10, SortDirection::Ascending);
        assert!(asc.windows(2).all(|w| w[0] <= w[1]));

        let desc = random_sorted_space(100, 10, SortDirection::Descending);
        assert!(desc.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_linear_scan() {
        assert_eq!(vec![1, 2], linear_scan(&[1, 2, 2, 3], 2));
        assert_eq!(vec![NOT_FOUND_INDEX], linear_scan(&[1, 2, 2, 3], 4));
        assert_eq!(vec![NOT_FOUND_INDEX], linear_scan(&[], 4));
    }

    #[test]
    fn test_counting_space() {
        let data = [1, 2, 3];
        let space = CountingSpace::new(&data);
        assert_eq!(0, space.reads());
        assert_eq!(2, space.elem(1));
        assert_eq!(3, space.elem(2));
        assert_eq!(2, space.reads());
    }
}
