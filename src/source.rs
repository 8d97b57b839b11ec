use std::{fmt, fs, path::PathBuf, str::FromStr, time::Duration};

use anyhow::{Context, bail};
use url::Url;

use crate::diag;

/// Where the publications data is read from when nothing else is given.
pub const DEFAULT_DATA: &str = "publications-data.json";

/// Something that can hand back the raw publications document.
pub trait Fetch {
    /// Human-readable location, used in diagnostics.
    fn describe(&self) -> String;
    fn fetch(&self) -> anyhow::Result<String>;
}

pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileSource { path: path.into() }
    }
}

impl Fetch for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn fetch(&self) -> anyhow::Result<String> {
        fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read {}", self.path.display()))
    }
}

pub struct HttpSource {
    url: Url,
}

impl HttpSource {
    pub fn new(url: Url) -> Self {
        HttpSource { url }
    }
}

impl Fetch for HttpSource {
    fn describe(&self) -> String {
        self.url.to_string()
    }

    fn fetch(&self) -> anyhow::Result<String> {
        let cfg = ureq::Agent::config_builder()
            .timeout_connect(Some(Duration::from_secs(5)))
            .timeout_global(Some(Duration::from_secs(15)))
            .build();
        let agent = ureq::Agent::new_with_config(cfg);
        let pb = diag::spinner(format!("Fetching {}", self.url));
        let res = agent
            .get(self.url.as_str())
            .header("Accept", "application/json")
            .header("User-Agent", "pubs/0.1")
            .call()
            .with_context(|| format!("failed request for URL {}", self.url));
        pb.finish_and_clear();
        let body = res?
            .into_body()
            .read_to_string()
            .context("read body")?;
        Ok(body)
    }
}

/// Location of the data file as given on the command line: either an HTTP(S) URL or a path.
#[derive(Clone, Debug, PartialEq)]
pub enum DataSource {
    Url(Url),
    File(PathBuf),
}

impl FromStr for DataSource {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err("data location must not be empty".to_string());
        }
        match Url::parse(s) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(DataSource::Url(url)),
            _ => Ok(DataSource::File(PathBuf::from(s))),
        }
    }
}

impl Default for DataSource {
    fn default() -> Self {
        DataSource::File(PathBuf::from(DEFAULT_DATA))
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::Url(url) => write!(f, "{url}"),
            DataSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

impl DataSource {
    /// Resolve against the page the list is published on, the way a browser resolves a
    /// relative `fetch`. Absolute paths and URLs ignore `base`.
    pub fn resolve(self, base: Option<&Url>) -> anyhow::Result<DataSource> {
        match (self, base) {
            (DataSource::File(path), Some(base)) if path.is_relative() => {
                let Some(rel) = path.to_str() else {
                    bail!("data path {} is not valid UTF-8", path.display());
                };
                let joined = base
                    .join(&rel.replace('\\', "/"))
                    .with_context(|| format!("cannot resolve {rel} against {base}"))?;
                match joined.scheme() {
                    "http" | "https" => Ok(DataSource::Url(joined)),
                    "file" => match joined.to_file_path() {
                        Ok(p) => Ok(DataSource::File(p)),
                        Err(()) => bail!("cannot turn {joined} into a local path"),
                    },
                    other => bail!("unsupported base URL scheme: {other}"),
                }
            }
            (source, _) => Ok(source),
        }
    }

    pub fn into_fetcher(self) -> Box<dyn Fetch> {
        match self {
            DataSource::Url(url) => Box::new(HttpSource::new(url)),
            DataSource::File(path) => Box::new(FileSource::new(path)),
        }
    }
}
