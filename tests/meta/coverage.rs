//! Keeps the `tests/unit` tree wired to the `src` module tree and to Cargo
//!
//! Unit test files mirror source files one to one, every file is reachable
//! from `tests/unit/mod.rs` through `mod` declarations, and every test and
//! bench target named in `Cargo.toml` points at an existing file.

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::Path;

    const SRC: &str = "src";
    const UNIT: &str = "tests/unit";

    /// Module files below `root`, relative and with `/` separators, skipping `mod.rs`
    fn module_files(root: &Path) -> io::Result<BTreeSet<String>> {
        let mut found = BTreeSet::new();
        let mut pending = vec![root.to_path_buf()];
        while let Some(dir) = pending.pop() {
            for entry in fs::read_dir(&dir)? {
                let path = entry?.path();
                if path.is_dir() {
                    pending.push(path);
                    continue;
                }
                let is_module = path.extension().is_some_and(|ext| ext == "rs")
                    && path.file_name().is_some_and(|name| name != "mod.rs");
                if let (true, Ok(relative)) = (is_module, path.strip_prefix(root)) {
                    found.insert(relative.to_string_lossy().replace('\\', "/"));
                }
            }
        }
        Ok(found)
    }

    /// Names declared with `mod <name>;` in a module file
    fn declared_modules(file: &Path) -> io::Result<BTreeSet<String>> {
        let text = fs::read_to_string(file)?;
        Ok(text
            .lines()
            .filter_map(|line| {
                let line = line.trim();
                line.strip_prefix("pub mod ")
                    .or_else(|| line.strip_prefix("mod "))
                    .and_then(|rest| rest.strip_suffix(';'))
                    .map(str::to_string)
            })
            .collect())
    }

    fn source_files() -> BTreeSet<String> {
        let mut files = module_files(Path::new(SRC)).unwrap();
        files.remove("lib.rs");
        files.remove("main.rs");
        files
    }

    #[test]
    fn test_every_source_file_has_unit_tests() {
        let unit = module_files(Path::new(UNIT)).unwrap();
        let missing: Vec<_> = source_files().difference(&unit).cloned().collect();

        assert!(
            missing.is_empty(),
            "source files without tests/unit counterparts: {missing:?}"
        );
    }

    #[test]
    fn test_every_unit_test_has_a_source_file() {
        let unit = module_files(Path::new(UNIT)).unwrap();
        let orphaned: Vec<_> = unit.difference(&source_files()).cloned().collect();

        assert!(
            orphaned.is_empty(),
            "tests/unit files without src counterparts: {orphaned:?}"
        );
    }

    // A file nobody declares is silently never compiled
    #[test]
    fn test_unit_files_are_declared_modules() {
        let mut undeclared = Vec::new();
        let mut pending = vec![Path::new(UNIT).to_path_buf()];
        while let Some(dir) = pending.pop() {
            let declared = declared_modules(&dir.join("mod.rs")).unwrap();
            for entry in fs::read_dir(&dir).unwrap() {
                let path = entry.unwrap().path();
                let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) else {
                    continue;
                };
                if path.is_dir() {
                    pending.push(path.clone());
                } else if stem == "mod" {
                    continue;
                }
                if !declared.contains(stem) {
                    undeclared.push(path.display().to_string());
                }
            }
        }

        assert!(
            undeclared.is_empty(),
            "unit test files missing a `mod` declaration: {undeclared:?}"
        );
    }

    #[test]
    fn test_unit_files_contain_tests() {
        let empty: Vec<_> = module_files(Path::new(UNIT))
            .unwrap()
            .into_iter()
            .filter(|file| {
                let text = fs::read_to_string(Path::new(UNIT).join(file)).unwrap();
                !text.contains("#[test]")
            })
            .collect();

        assert!(empty.is_empty(), "unit test files without tests: {empty:?}");
    }

    #[test]
    fn test_cargo_targets_exist() {
        let manifest = fs::read_to_string("Cargo.toml").unwrap();
        let mut section = "";
        let mut missing = Vec::new();

        for line in manifest.lines().map(str::trim) {
            if line.starts_with('[') {
                section = line;
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let value = value.trim().trim_matches('"');
            let target = match (section, key.trim()) {
                ("[[test]]", "path") => value.to_string(),
                ("[[bench]]", "name") => format!("benches/{value}.rs"),
                _ => continue,
            };
            if !Path::new(&target).is_file() {
                missing.push(target);
            }
        }

        assert!(missing.is_empty(), "Cargo targets without files: {missing:?}");
        assert!(manifest.contains("path = \"tests/unit/mod.rs\""));
    }
}
