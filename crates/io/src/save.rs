use std::io::Write;

/// Writes `lines` to `path`, each terminated by `\n`, and returns the number of
/// bytes written.
///
/// The content goes to a temporary file in the *same directory* as the target,
/// which is then renamed over it. Renames across filesystems fail, so the
/// temporary file must not live in `/tmp`. An existing target keeps its
/// permissions.
///
/// # Errors
///
/// Returns an error if the temporary file cannot be created or written, or if
/// the final rename fails. The target is left untouched in every error case.
pub fn write_lines<'a, I>(path: impl AsRef<std::path::Path>, lines: I) -> std::io::Result<u64>
where
    I: IntoIterator<Item = &'a str>,
{
    let path = path.as_ref();
    let parent_dir = path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| std::path::Path::new("."));
    let temp_save_file = tempfile::Builder::new()
        .prefix(".save_tmp_")
        .tempfile_in(parent_dir)?;

    let mut size = 0u64;
    {
        let mut writer = std::io::BufWriter::new(temp_save_file.as_file());

        for line in lines {
            writer.write_all(line.as_bytes())?;
            writer.write_all(b"\n")?;
            size += line.len() as u64 + 1;
        }

        writer.flush()?;
    }

    temp_save_file.as_file().sync_all()?;

    if let Ok(metadata) = std::fs::metadata(path) {
        std::fs::set_permissions(temp_save_file.path(), metadata.permissions())?;
    }

    // `persist` reports the temp file back on failure; only the io::Error matters here.
    temp_save_file.persist(path).map_err(|e| e.error)?;

    tracing::info!(path = %path.display(), bytes = size, "saved file");

    Ok(size)
}
