use std::{
    collections::BTreeMap,
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use tracing::debug;

/// Destination for generated outputs.
///
/// A generator asks the sink for a named output and writes its bytes into
/// the returned writer. Sinks decide where the bytes end up; generators never
/// touch the filesystem directly.
pub trait OutputSink {
    /// Open (create or truncate) the output with the given relative name.
    fn open(&mut self, name: &str) -> io::Result<Box<dyn Write + '_>>;
}

impl<S: OutputSink + ?Sized> OutputSink for &mut S {
    fn open(&mut self, name: &str) -> io::Result<Box<dyn Write + '_>> {
        (**self).open(name)
    }
}

/// Derive an output file name from a source document name by replacing its
/// extension (`api/todo.gql` + `go` -> `api/todo.go`).
///
/// The extension is everything from the last `.` of the final path element,
/// so a dotfile name such as `.gql` becomes `.go` and an empty name becomes
/// `.go`.
pub fn output_file_name(doc_name: &str, extension: &str) -> String {
    let file_start = doc_name
        .rfind(std::path::is_separator)
        .map_or(0, |i| i + 1);
    let stem = match doc_name[file_start..].rfind('.') {
        Some(dot) => &doc_name[..file_start + dot],
        None => doc_name,
    };
    format!("{stem}.{extension}")
}

/// Sink writing outputs as files below a base directory.
#[derive(Debug, Clone)]
pub struct DirSink {
    base: PathBuf,
}

impl DirSink {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    /// Full path an output with the given name is written to.
    pub fn path_of(&self, name: &str) -> PathBuf {
        self.base.join(name)
    }
}

impl OutputSink for DirSink {
    fn open(&mut self, name: &str) -> io::Result<Box<dyn Write + '_>> {
        let path = self.path_of(name);
        debug!(path = %path.display(), "opening output file");
        Ok(Box::new(io::BufWriter::new(create_file(&path)?)))
    }
}

fn create_file(path: &Path) -> io::Result<fs::File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::File::create(path)
}

/// Sink keeping every output in memory, keyed by name.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    files: BTreeMap<String, Vec<u8>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the bytes written to an output
    pub fn get(&self, name: &str) -> Option<&[u8]> {
        self.files.get(name).map(Vec::as_slice)
    }

    /// Get an output as UTF-8 text.
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(|b| std::str::from_utf8(b).ok())
    }

    /// Names of all outputs opened so far, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.files.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl OutputSink for MemorySink {
    fn open(&mut self, name: &str) -> io::Result<Box<dyn Write + '_>> {
        let buf = self.files.entry(name.to_string()).or_default();
        buf.clear();
        Ok(Box::new(buf))
    }
}
