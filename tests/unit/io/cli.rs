//! Tests for command-line parsing and file processing

#[cfg(test)]
mod tests {
    use crate::SAMPLE;
    use clap::Parser;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;
    use tilemosaic::io::cli::{Cli, FileProcessor};
    use tilemosaic::{AlgorithmError, Report};

    // Tests the single positional path argument
    // Verified by renaming the argument field
    #[test]
    fn test_cli_parse_path() {
        let cli = Cli::parse_from(["program", "tiles.txt"]);
        assert_eq!(cli.input, PathBuf::from("tiles.txt"));
    }

    // Tests exactly one path is accepted and no flags exist
    // Verified by making the path optional
    #[test]
    fn test_cli_rejects_other_shapes() {
        assert!(Cli::try_parse_from(["program"]).is_err());
        assert!(Cli::try_parse_from(["program", "a.txt", "b.txt"]).is_err());
        assert!(Cli::try_parse_from(["program", "--seed", "1", "a.txt"]).is_err());
    }

    // Tests processing the fixture from disk
    // Verified by swapping checksum and roughness in the report
    #[test]
    fn test_process_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("tiles.txt");
        fs::write(&path, SAMPLE).unwrap();

        let processor = FileProcessor::new(Cli { input: path });
        let report = processor.process().unwrap();

        assert_eq!(
            report,
            Report {
                checksum: 20_899_048_083_289,
                roughness: 273,
            }
        );
    }

    // Tests error handling for missing files
    // Verified by removing error return for nonexistent files
    #[test]
    fn test_process_nonexistent_file() {
        let processor = FileProcessor::new(Cli {
            input: PathBuf::from("nonexistent.txt"),
        });

        assert!(matches!(
            processor.process(),
            Err(AlgorithmError::FileSystem { .. })
        ));
    }

    // Tests a tile count that is not square is reported from a file
    // Verified by truncating the search to the largest square
    #[test]
    fn test_process_not_square() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("eight.txt");
        let eight: Vec<&str> = SAMPLE.split("\n\n").take(8).collect();
        fs::write(&path, eight.join("\n\n")).unwrap();

        let processor = FileProcessor::new(Cli { input: path });
        assert!(matches!(
            processor.process(),
            Err(AlgorithmError::NotPerfectSquare { tile_count: 8 })
        ));
    }
}
