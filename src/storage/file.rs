use std::{
    fs,
    io::{ErrorKind, Write},
    path::{Path, PathBuf},
};

use anyhow::Context;

use super::PinStore;

#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PinStore for FileStore {
    fn label(&self) -> &'static str {
        "file"
    }

    fn load(&self) -> anyhow::Result<Option<Vec<String>>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("reading {} failed", self.path.display()));
            }
        };
        let pins = serde_json::from_str(&content).context("parsing pins file failed")?;
        Ok(Some(pins))
    }

    fn save(&mut self, pins: &[String]) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).context("creating pins directory failed")?;
        }
        let payload = serde_json::to_string_pretty(pins).context("serializing pins failed")?;

        let mut options = fs::OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }
        let mut file = options
            .open(&self.path)
            .with_context(|| format!("opening {} failed", self.path.display()))?;
        file.write_all(payload.as_bytes())
            .context("writing pins file failed")
    }
}
