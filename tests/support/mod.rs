use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

pub struct TestSpace {
    dir: TempDir,
}

impl TestSpace {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("failed to create tempdir"),
        }
    }

    pub fn save_path(&self) -> PathBuf {
        self.dir.path().join("tasks.txt")
    }

    pub fn write_save(&self, contents: &str) -> PathBuf {
        let path = self.save_path();
        fs::write(&path, contents).expect("failed to seed save file");
        path
    }

    pub fn read_save(&self) -> String {
        fs::read_to_string(self.save_path()).expect("failed to read save file")
    }
}
