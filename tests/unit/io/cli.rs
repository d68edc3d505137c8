//! Tests for command-line parsing and its batch configuration

#[cfg(test)]
mod tests {
    use crate::compass_fixture;
    use clap::Parser;
    use needleframe::FrameError;
    use needleframe::io::cli::Cli;
    use needleframe::io::configuration::{DEFAULT_FRAME_COUNT, DEFAULT_SPRITES};
    use std::path::PathBuf;
    use tempfile::TempDir;

    // Tests parsing with only the required textures directory
    #[test]
    fn test_cli_parse_minimal_args() {
        let cli = Cli::parse_from(["program", "textures"]);

        assert_eq!(cli.textures_dir, PathBuf::from("textures"));
        assert_eq!(cli.frames, DEFAULT_FRAME_COUNT);
        assert!(cli.sprites.is_empty());
        assert!(!cli.quiet);
        assert!(cli.models.is_none());
        assert!(cli.palette_base.is_none());
        assert_eq!(cli.sprite_ids(), DEFAULT_SPRITES.map(String::from).to_vec());
    }

    // Tests parsing with every option in long form
    #[test]
    fn test_cli_parse_all_args() {
        let cli = Cli::parse_from([
            "program",
            "textures",
            "--frames",
            "16",
            "--sprite",
            "a",
            "--sprite",
            "b",
            "--quiet",
            "--models",
            "models",
            "--palette-base",
            "base.png",
        ]);

        assert_eq!(cli.frames, 16);
        assert_eq!(cli.sprite_ids(), vec!["a".to_string(), "b".to_string()]);
        assert!(cli.quiet);
        assert_eq!(cli.models, Some(PathBuf::from("models")));
        assert_eq!(cli.palette_base, Some(PathBuf::from("base.png")));
    }

    // Tests short flags
    #[test]
    fn test_cli_short_flags() {
        let cli = Cli::parse_from(["program", "t", "-f", "8", "-s", "x", "-q", "-m", "m", "-p", "b.png"]);

        assert_eq!(cli.frames, 8);
        assert_eq!(cli.sprites, vec!["x".to_string()]);
        assert!(!cli.should_show_progress());
        assert_eq!(cli.models, Some(PathBuf::from("m")));
        assert_eq!(cli.palette_base, Some(PathBuf::from("b.png")));
    }

    // Tests the arguments map onto the batch configuration
    #[test]
    fn test_batch_config_mapping() {
        let cli = Cli::parse_from(["program", "textures", "-f", "4", "-s", "needle"]);
        let config = cli.batch_config();

        assert_eq!(config.textures_dir, PathBuf::from("textures"));
        assert_eq!(config.frame_count, 4);
        assert_eq!(config.sprites, vec!["needle".to_string()]);
        assert!(config.show_progress);
        assert!(config.models_dir.is_none());
    }

    // Tests a missing textures directory is fatal
    #[test]
    fn test_run_missing_directory() {
        let cli = Cli::parse_from(["program", "definitely/not/here", "-q"]);

        assert!(matches!(cli.run(), Err(FrameError::MissingDirectory { .. })));
    }

    // Tests a full run through the command-line entry point
    #[test]
    fn test_run_generates_frames() {
        let temp_dir = TempDir::new().unwrap();
        compass_fixture()
            .save(temp_dir.path().join("needle.png"))
            .unwrap();
        let dir = temp_dir.path().to_str().unwrap();

        let cli = Cli::parse_from(["program", dir, "-q", "-s", "needle", "-f", "4"]);
        let report = cli.run().unwrap();

        assert_eq!(report.succeeded, 1);
        assert_eq!(report.frames_written, 4);
        assert!(temp_dir.path().join("needle_03.png").exists());
    }
}
