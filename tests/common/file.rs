use derive_new::new;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Eq, PartialEq, new)]
pub struct FileSpec {
    pub path: PathBuf,
    pub content: Vec<u8>,
}

impl FileSpec {
    pub fn text(path: PathBuf, content: &str) -> Self {
        Self::new(path, content.as_bytes().to_vec())
    }
}

pub fn write_file(file_spec: FileSpec) {
    // make sure the parent directory exists
    if let Some(parent) = file_spec.path.parent() {
        std::fs::create_dir_all(parent)
            .unwrap_or_else(|e| panic!("Failed to create directory {:?}: {}", parent, e));
    }

    std::fs::write(&file_spec.path, &file_spec.content)
        .unwrap_or_else(|e| panic!("Failed to write file {:?}: {}", file_spec.path, e));
}

pub fn write_text(dir: &Path, relative: &str, content: &str) {
    write_file(FileSpec::text(dir.join(relative), content));
}

/// Write `files_count` files with random names and content; returns their
/// names sorted.
pub fn write_generated_files(dir: &Path, prefix: &str, files_count: usize) -> Vec<String> {
    use fake::{
        Fake,
        faker::lorem::en::{Word, Words},
    };

    let mut names = (0..files_count)
        .map(|i| {
            let file_name = format!("{prefix}{i}_{}.txt", Word().fake::<String>());
            let file_content = Words(5..10).fake::<Vec<String>>().join(" ");
            write_text(dir, &file_name, &file_content);

            file_name
        })
        .collect::<Vec<_>>();

    names.sort();
    names
}

pub fn delete_path(path: &Path) {
    if path.is_dir() {
        std::fs::remove_dir_all(path)
            .unwrap_or_else(|e| panic!("Failed to delete directory {:?}: {}", path, e));
    } else {
        std::fs::remove_file(path)
            .unwrap_or_else(|e| panic!("Failed to delete file {:?}: {}", path, e));
    }
}
