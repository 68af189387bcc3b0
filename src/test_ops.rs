//! shared helpers for filesystem-backed tests.
use std::fs;
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

static SCRATCH_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// wires the log facade to stderr for test runs. safe to call from every
/// test; only the first call wins.
pub fn init_test_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// creates a unique scratch directory under the system temp directory.
pub fn scratch_dir(label: &str) -> PathBuf {
    init_test_logging();
    let n = SCRATCH_COUNTER.fetch_add(1, Ordering::SeqCst);
    let dir = std::env::temp_dir().join(format!(
        "reachmap-{}-{}-{}",
        label,
        std::process::id(),
        n
    ));
    fs::create_dir_all(&dir).expect("failed creating scratch directory");
    dir
}

pub fn remove_scratch_dir(dir: &Path) {
    let _ = fs::remove_dir_all(dir);
}

/// builds an in-memory zip archive from (file name, contents) pairs.
pub fn zip_payload(files: &[(&str, &str)]) -> Vec<u8> {
    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    for (name, contents) in files {
        writer
            .start_file(*name, zip::write::SimpleFileOptions::default())
            .expect("failed starting zip entry");
        writer
            .write_all(contents.as_bytes())
            .expect("failed writing zip entry");
    }
    writer
        .finish()
        .expect("failed finishing zip archive")
        .into_inner()
}
