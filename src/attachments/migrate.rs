//! Relocation of legacy attachment files into canonical storage.
//!
//! Canonical storage holds one file per hash, named `<hash><ext>` where the
//! extension comes from a [`ContentSniffer`]. Two legacy layouts feed it:
//!
//! - the **primary** location, whose files are *moved* (fail-fast), and
//! - the **secondary** location, whose extension-less files are *copied*
//!   (best-effort: failures are logged and skipped).
//!
//! A hash that already has any `<hash>.*` file in canonical storage is never
//! touched again, so running a migration twice is a no-op the second time.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use super::error::MigrationError;
use super::sniff::ContentSniffer;

/// Where legacy and canonical attachments live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageLayout {
    /// Primary legacy location; its files are moved and the directory removed once empty.
    pub primary: PathBuf,
    /// Secondary legacy location; its files are copied and left in place.
    pub secondary: PathBuf,
    /// Canonical, web-served location.
    pub canonical: PathBuf,
}

/// Outcome of a migration run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MigrationReport {
    /// Files moved out of the primary location.
    pub moved: usize,
    /// Files copied out of the secondary location.
    pub copied: usize,
    /// Files skipped because a canonical counterpart already existed.
    pub skipped: usize,
    /// Secondary files that could not be copied.
    pub failed: usize,
    /// Total bytes placed into canonical storage.
    pub bytes: u64,
}

impl MigrationReport {
    /// Number of files that now have a new canonical copy.
    pub fn migrated(&self) -> usize {
        self.moved + self.copied
    }
}

/// Moves and copies legacy attachments into canonical storage.
pub struct Migrator<'a> {
    layout: &'a StorageLayout,
    sniffer: &'a dyn ContentSniffer,
}

impl<'a> Migrator<'a> {
    pub fn new(layout: &'a StorageLayout, sniffer: &'a dyn ContentSniffer) -> Self {
        Self { layout, sniffer }
    }

    /// Run the migration.
    ///
    /// Returns an error only when the canonical directory cannot be created or a
    /// primary-location file cannot be read or moved.
    pub fn run(&self) -> Result<MigrationReport, MigrationError> {
        let canonical = &self.layout.canonical;
        fs::create_dir_all(canonical).map_err(|source| MigrationError::CreateDir {
            path: canonical.clone(),
            source,
        })?;

        debug!(sniffer = self.sniffer.name(), canonical = %canonical.display(), "migrating attachments");
        let mut report = MigrationReport::default();
        self.migrate_primary(&mut report)?;
        self.migrate_secondary(&mut report);

        info!(
            moved = report.moved,
            copied = report.copied,
            skipped = report.skipped,
            failed = report.failed,
            "attachment migration finished"
        );
        Ok(report)
    }

    fn migrate_primary(&self, report: &mut MigrationReport) -> Result<(), MigrationError> {
        let primary = &self.layout.primary;
        if !primary.is_dir() {
            debug!(path = %primary.display(), "no primary attachment directory");
            return Ok(());
        }

        for (hash, path) in list_files(primary)? {
            if has_canonical(&self.layout.canonical, &hash) {
                debug!(%hash, "already migrated, skipping");
                report.skipped += 1;
                continue;
            }

            let category = self.sniffer.classify(&path);
            let dest = self
                .layout
                .canonical
                .join(format!("{}{}", hash, category.extension()));
            let size = fs::metadata(&path).map(|m| m.len()).unwrap_or(0);

            move_file(&path, &dest).map_err(|source| MigrationError::Move {
                from: path.clone(),
                to: dest.clone(),
                source,
            })?;
            debug!(%hash, %category, dest = %dest.display(), "moved attachment");
            report.moved += 1;
            report.bytes += size;
        }

        remove_if_empty(primary);
        Ok(())
    }

    fn migrate_secondary(&self, report: &mut MigrationReport) {
        let secondary = &self.layout.secondary;
        if !secondary.is_dir() {
            return;
        }

        let entries = match list_files(secondary) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(error = %e, "skipping secondary attachment directory");
                return;
            }
        };

        for (hash, path) in entries {
            // Files that already carry an extension are not raw blobs.
            if hash.contains('.') {
                continue;
            }
            if has_canonical(&self.layout.canonical, &hash) {
                report.skipped += 1;
                continue;
            }

            let category = self.sniffer.classify(&path);
            let dest = self
                .layout
                .canonical
                .join(format!("{}{}", hash, category.extension()));

            match fs::copy(&path, &dest) {
                Ok(bytes) => {
                    debug!(%hash, %category, dest = %dest.display(), "copied legacy attachment");
                    report.copied += 1;
                    report.bytes += bytes;
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "could not copy legacy attachment, skipping");
                    report.failed += 1;
                }
            }
        }
    }
}

/// Whether canonical storage already holds a file named `<hash>.<anything>`.
pub fn has_canonical(canonical: &Path, hash: &str) -> bool {
    let prefix = format!("{}.", hash);
    match fs::read_dir(canonical) {
        Ok(entries) => entries
            .filter_map(|e| e.ok())
            .any(|e| e.file_name().to_string_lossy().starts_with(&prefix)),
        Err(_) => false,
    }
}

/// Regular files directly inside `dir`, as `(file name, path)` sorted by name.
fn list_files(dir: &Path) -> Result<Vec<(String, PathBuf)>, MigrationError> {
    let read_err = |source| MigrationError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_err)? {
        let entry = entry.map_err(read_err)?;
        let path = entry.path();
        if path.is_file() {
            files.push((entry.file_name().to_string_lossy().into_owned(), path));
        }
    }
    files.sort();
    Ok(files)
}

/// Rename, falling back to copy + remove only when the rename crosses filesystems.
///
/// Any other rename error is returned as-is, so a failed move never leaves a
/// second copy behind.
fn move_file(from: &Path, to: &Path) -> io::Result<()> {
    match fs::rename(from, to) {
        Ok(()) => Ok(()),
        Err(e) if crosses_devices(&e) => {
            fs::copy(from, to)?;
            fs::remove_file(from)
        }
        Err(e) => Err(e),
    }
}

/// `EXDEV` on Unix, `ERROR_NOT_SAME_DEVICE` on Windows.
fn crosses_devices(err: &io::Error) -> bool {
    #[cfg(unix)]
    const CROSS_DEVICE: i32 = 18;
    #[cfg(windows)]
    const CROSS_DEVICE: i32 = 17;
    #[cfg(not(any(unix, windows)))]
    const CROSS_DEVICE: i32 = -1;

    err.raw_os_error() == Some(CROSS_DEVICE)
}

fn remove_if_empty(dir: &Path) {
    let empty = fs::read_dir(dir)
        .map(|mut entries| entries.next().is_none())
        .unwrap_or(false);
    if empty {
        match fs::remove_dir(dir) {
            Ok(()) => debug!(path = %dir.display(), "removed empty primary attachment directory"),
            Err(e) => warn!(path = %dir.display(), error = %e, "could not remove empty directory"),
        }
    }
}
