#[derive(Debug)]
pub struct MmapFile {
    _file: std::fs::File,
    mmap: memmap2::Mmap,
    path: std::path::PathBuf,
}

/// Lines decoded from a file together with the number of bytes read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedFile {
    pub lines: Vec<String>,
    pub byte_len: u64,
}

impl MmapFile {
    /// # Errors
    ///
    /// - `std::io::Error` if the file cannot be opened or mapped.
    pub fn open(path: impl AsRef<std::path::Path>) -> std::io::Result<Self> {
        let path_buf = path.as_ref().to_path_buf();
        let file = std::fs::File::open(&path_buf)?;

        // SAFETY:
        // - File is opened read-only
        // - We keep the file handle alive in struct
        // - Caller only gets immutable &[u8]
        let mmap = unsafe { memmap2::Mmap::map(&file)? };

        Ok(Self {
            _file: file,
            mmap,
            path: path_buf,
        })
    }

    /// Splits the mapped bytes on `\n`.
    ///
    /// The newline itself is not part of a line. Trailing bytes after the last
    /// newline form a final line; a trailing newline does not start an empty one.
    /// Invalid UTF-8 is replaced rather than rejected.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        let bytes = self.as_slice();
        let mut lines = Vec::new();
        let mut last_position = 0usize;

        for line_position in memchr::memchr_iter(b'\n', bytes) {
            lines.push(String::from_utf8_lossy(&bytes[last_position..line_position]).into_owned());
            last_position = line_position + 1;
        }

        // Handle the trailing text after the last newline
        if last_position < bytes.len() {
            lines.push(String::from_utf8_lossy(&bytes[last_position..]).into_owned());
        }

        lines
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.mmap
    }

    /// File length in bytes.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.mmap.len()
    }

    /// Whether file is empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Path of mapped file.
    #[inline]
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

/// Maps `path`, decodes its lines and drops the mapping before returning.
///
/// # Errors
///
/// - `std::io::Error` if the file cannot be opened or mapped.
pub fn read_lines(path: impl AsRef<std::path::Path>) -> std::io::Result<LoadedFile> {
    let mmap_file = MmapFile::open(path)?;
    let lines = mmap_file.lines();
    let byte_len = mmap_file.len() as u64;

    tracing::info!(
        path = %mmap_file.path().display(),
        lines = lines.len(),
        byte_len,
        "loaded file"
    );

    Ok(LoadedFile { lines, byte_len })
}
