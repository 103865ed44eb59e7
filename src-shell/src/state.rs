//! Application state management
use mirage_core::{Browser, Config, LoadEvent, Result};
use parking_lot::RwLock;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// Command line options for the shell.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShellOptions {
    /// JSON config file; defaults to `config.json` in the data directory
    pub config_path: Option<PathBuf>,
    /// Keep bookmarks in memory instead of the database
    pub in_memory: bool,
}

impl ShellOptions {
    pub fn parse<I>(args: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut options = Self::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" => {
                    let path = args
                        .next()
                        .ok_or_else(|| anyhow::anyhow!("--config requires a path"))?;
                    options.config_path = Some(PathBuf::from(path));
                }
                "--in-memory" => options.in_memory = true,
                other => anyhow::bail!("Unknown argument: {other}"),
            }
        }

        Ok(options)
    }

    fn config_path(&self) -> PathBuf {
        self.config_path
            .clone()
            .unwrap_or_else(|| Config::data_dir().join("config.json"))
    }
}

/// Thread-safe application state wrapper
#[derive(Clone)]
pub struct AppState {
    browser: Arc<RwLock<Browser>>,
}

impl AppState {
    pub fn new(options: &ShellOptions) -> Result<Self> {
        let config = Config::load(options.config_path())?;

        let browser = if options.in_memory {
            Browser::in_memory(config)
        } else {
            Browser::open(config)?
        };

        Ok(Self::from_browser(browser))
    }

    pub fn from_browser(browser: Browser) -> Self {
        Self {
            browser: Arc::new(RwLock::new(browser)),
        }
    }

    pub fn with_browser<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&Browser) -> T,
    {
        let guard = self.browser.read();
        f(&*guard)
    }

    pub fn with_browser_mut<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&mut Browser) -> T,
    {
        let mut guard = self.browser.write();
        f(&mut *guard)
    }

    pub fn tick_interval(&self) -> Duration {
        self.with_browser(|browser| browser.config().tick_interval())
    }

    pub fn advance(&self, elapsed: Duration) -> Vec<LoadEvent> {
        self.with_browser_mut(|browser| browser.advance(elapsed))
    }
}
