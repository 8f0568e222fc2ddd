use crate::errors::{AppError, AppResult};
use crate::store::RecordStore;
use crate::store::oplog::ttlog;
use crate::ui::messages::{info, success, warning};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the store file to `dest_file`, optionally replacing the copy
    /// with a `.zip` archive. Returns the path of the final artifact.
    pub fn backup(store: &RecordStore, dest_file: &Path, compress: bool) -> AppResult<PathBuf> {
        Self::check_destination(dest_file, compress)?;

        let src = store.path();

        if !src.exists() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("Record store not found: {}", src.display()),
            )
            .into());
        }

        if let Some(parent) = dest_file.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        fs::copy(src, dest_file)?;
        success(format!("Backup created: {}", dest_file.display()));

        let final_path = if compress {
            let compressed = compress_backup(dest_file)?;
            if let Err(e) = fs::remove_file(dest_file) {
                warning(format!("Failed to remove uncompressed backup: {e}"));
            } else {
                info(format!("Removed uncompressed backup: {}", dest_file.display()));
            }
            compressed
        } else {
            dest_file.to_path_buf()
        };

        if let Err(e) = ttlog(
            src,
            "backup",
            &final_path.to_string_lossy(),
            if compress {
                "Backup created and compressed"
            } else {
                "Backup created"
            },
        ) {
            log::warn!("failed to write internal log: {e}");
        }

        Ok(final_path)
    }

    /// A compressed backup replaces `<dest>` with `<dest>.zip`, so `dest`
    /// itself must not already carry the `.zip` extension.
    pub fn check_destination(dest_file: &Path, compress: bool) -> AppResult<()> {
        if compress
            && dest_file
                .extension()
                .is_some_and(|e| e.eq_ignore_ascii_case("zip"))
        {
            return Err(AppError::Other(format!(
                "backup file must not end in .zip when compressing: {}",
                dest_file.display()
            )));
        }
        Ok(())
    }
}

/// Compress a backup using .zip
fn compress_backup(path: &Path) -> AppResult<PathBuf> {
    let zip_path = path.with_extension("zip");
    let file = fs::File::create(&zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let name = path
        .file_name()
        .ok_or_else(|| AppError::Other(format!("invalid backup path: {}", path.display())))?
        .to_string_lossy();

    let mut f = fs::File::open(path)?;
    zip.start_file(name, options).map_err(io::Error::other)?;

    io::copy(&mut f, &mut zip)?;
    zip.finish().map_err(io::Error::other)?;

    info(format!("Compressed: {}", zip_path.display()));

    Ok(zip_path)
}
