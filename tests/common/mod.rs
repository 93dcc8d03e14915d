use std::{path::PathBuf, sync::Once};

static INIT: Once = Once::new();

/// Initialize test environment with RUST_LOG=WARN
pub fn init_test_env() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::new("warn"))
            .with_test_writer()
            .try_init();
    });
}

pub fn data_path(name: &str) -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("data");
    path.push(name);
    path
}

/// Writes `contents` to a uniquely named file in the system temp directory.
pub fn write_temp_file(name: &str, contents: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("course_fit_test_{}", std::process::id()));
    std::fs::create_dir_all(&dir).expect("Expected temp directory to be writable");

    let path = dir.join(name);
    std::fs::write(&path, contents).expect("Expected temp file to be writable");
    path
}
