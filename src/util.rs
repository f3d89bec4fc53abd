/// Run a statement and log how long it took.
#[macro_export]
macro_rules! profile(
  ($title: literal, $stmt: stmt) => {{
    let t0 = std::time::Instant::now();
    $stmt
    log::info!("{} profile: {}ms", $title, t0.elapsed().as_millis());
  }}
);

/// Human readable byte count, e.g. `12.5 KB`.
pub fn file_size(bytes: usize) -> String {
  use humansize::{FileSize, file_size_opts as options};

  bytes.file_size(options::CONVENTIONAL)
    .unwrap_or_else(|_| format!("{} B", bytes))
}
