use std::fs;
use std::path::{Path, PathBuf};

/// 测试用临时目录，离开作用域时删除
pub struct ScratchDir {
    root: PathBuf,
}

impl ScratchDir {
    pub fn new() -> Self {
        let root = std::env::temp_dir().join(format!("icogen-{}", uuid::Uuid::new_v4()));
        fs::create_dir_all(&root).expect("create scratch directory");
        Self { root }
    }

    pub fn path(&self) -> &Path {
        &self.root
    }
}

impl Drop for ScratchDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.root);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scratch_dir_removed_on_drop() {
        let root = {
            let scratch = ScratchDir::new();
            fs::write(scratch.path().join("icon.ico"), b"x").unwrap();
            scratch.path().to_path_buf()
        };
        assert!(!root.exists());
    }
}
