//! Tests for search progress tracking

#[cfg(test)]
mod tests {
    use tilemosaic::io::progress::SearchProgress;

    // Tests only the deepest placement is retained
    // Verified by storing the latest depth instead of the maximum
    #[test]
    fn test_deepest_placement() {
        let mut progress = SearchProgress::hidden();
        progress.start(9);
        progress.placed(3);
        progress.placed(5);
        progress.placed(2);

        assert_eq!(progress.deepest(), 5);
        progress.finish();
    }

    // Tests backtracks are tallied and reset by start
    // Verified by skipping the reset in start
    #[test]
    fn test_backtracks() {
        let mut progress = SearchProgress::default();
        progress.start(4);
        progress.backtracked();
        progress.backtracked();
        assert_eq!(progress.backtracks(), 2);

        progress.start(4);
        assert_eq!(progress.backtracks(), 0);
        assert_eq!(progress.deepest(), 0);
    }

    // Tests many backtracks are tallied across message refreshes
    // Verified by counting only the backtracks that refresh the message
    #[test]
    fn test_backtracks_across_refreshes() {
        for mut progress in [SearchProgress::hidden(), SearchProgress::new()] {
            progress.start(16);
            for _ in 0..3000 {
                progress.backtracked();
            }
            assert_eq!(progress.backtracks(), 3000);
            progress.finish();
        }
    }

    // Tests a stderr-backed tracker can be driven without a terminal
    // Verified by unwrapping the template parse
    #[test]
    fn test_stderr_progress() {
        let mut progress = SearchProgress::new();
        progress.start(1);
        progress.placed(1);
        progress.finish();
        assert_eq!(progress.deepest(), 1);
    }
}
