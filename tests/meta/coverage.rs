//! Structural checks keeping `tests/unit` a file-for-file mirror of `src`

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::Path;

    const SRC_ROOT: &str = "src";
    const UNIT_ROOT: &str = "tests/unit";

    /// Entry points and module declarations have no mirrored unit file
    fn is_exempt(relative: &str) -> bool {
        relative == "main.rs" || relative == "lib.rs" || relative.ends_with("mod.rs")
    }

    /// Relative paths of every Rust file and directory below `root`
    fn mirror_entries(root: &Path) -> io::Result<BTreeSet<String>> {
        let mut entries = BTreeSet::new();
        let mut pending = vec![root.to_path_buf()];

        while let Some(dir) = pending.pop() {
            for entry in fs::read_dir(&dir)? {
                let path = entry?.path();
                let relative = path
                    .strip_prefix(root)
                    .map_err(|_stripped| io::Error::other("entry outside of root"))?
                    .to_string_lossy()
                    .replace('\\', "/");

                if path.is_dir() {
                    entries.insert(relative);
                    pending.push(path);
                } else if path.extension().is_some_and(|ext| ext == "rs") {
                    entries.insert(relative);
                }
            }
        }

        Ok(entries)
    }

    fn report(header: &str, lines: &[String]) -> String {
        format!("{header}:\n{}", lines.join("\n"))
    }

    // Tests every source file has a unit test file at the same relative path
    #[test]
    fn test_sources_have_unit_tests() {
        let sources = mirror_entries(Path::new(SRC_ROOT)).unwrap();
        let units = mirror_entries(Path::new(UNIT_ROOT)).unwrap();

        let missing: Vec<String> = sources
            .iter()
            .filter(|relative| !is_exempt(relative) && !units.contains(*relative))
            .map(|relative| format!("  - src/{relative} -> {UNIT_ROOT}/{relative}"))
            .collect();

        assert!(
            missing.is_empty(),
            "{}",
            report("Source files without unit tests", &missing)
        );
    }

    // Tests no unit test file outlives the source it covered
    #[test]
    fn test_unit_tests_have_sources() {
        let sources = mirror_entries(Path::new(SRC_ROOT)).unwrap();
        let units = mirror_entries(Path::new(UNIT_ROOT)).unwrap();

        let orphaned: Vec<String> = units
            .iter()
            .filter(|relative| !relative.ends_with("mod.rs") && !sources.contains(*relative))
            .map(|relative| format!("  - {UNIT_ROOT}/{relative} (no src/{relative})"))
            .collect();

        assert!(
            orphaned.is_empty(),
            "{}",
            report("Unit tests without sources", &orphaned)
        );
    }

    // Tests every test file below tests/ declares at least one test
    #[test]
    fn test_test_files_declare_tests() {
        let tests_root = Path::new("tests");
        let entries = mirror_entries(tests_root).unwrap();

        let empty: Vec<String> = entries
            .iter()
            .filter(|relative| {
                Path::new(relative.as_str())
                    .extension()
                    .is_some_and(|ext| ext == "rs")
            })
            .filter(|relative| !relative.ends_with("mod.rs"))
            .filter(|relative| {
                fs::read_to_string(tests_root.join(relative.as_str()))
                    .map(|content| !content.contains("#[test]"))
                    .unwrap_or(true)
            })
            .map(|relative| format!("  - tests/{relative}"))
            .collect();

        assert!(
            empty.is_empty(),
            "{}",
            report("Test files without any #[test] function", &empty)
        );
    }
}
