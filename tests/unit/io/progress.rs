//! Tests for sprite and frame progress display

#[cfg(test)]
mod tests {
    use needleframe::io::progress::ProgressManager;

    // Tests a full batch lifecycle with successes and failures
    #[test]
    fn test_progress_lifecycle() {
        let mut pm = ProgressManager::new();
        pm.initialize(2);

        pm.start_sprite("basic_ore_compass", 32);
        for _ in 0..32 {
            pm.frame_written();
        }
        pm.complete_sprite("basic_ore_compass", true);

        pm.start_sprite("master_ore_compass", 32);
        pm.complete_sprite("master_ore_compass", false);

        pm.finish();
    }

    // Tests calls before initialization are harmless
    #[test]
    fn test_uninitialized_calls() {
        let mut pm = ProgressManager::default();

        pm.frame_written();
        pm.complete_sprite("missing", false);
        pm.finish();
    }

    // Tests starting a new sprite replaces an unfinished frame bar
    #[test]
    fn test_restart_sprite() {
        let mut pm = ProgressManager::new();
        pm.initialize(0);

        pm.start_sprite("a", 4);
        pm.frame_written();
        pm.start_sprite("b", 4);
        pm.frame_written();
        pm.complete_sprite("b", true);
        pm.finish();
    }
}
