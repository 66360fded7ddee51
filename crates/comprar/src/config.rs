//! Suite configuration.
//!
//! Everything the harness needs to know about its environment lives here:
//! the storefront base URL, how the browser is launched, and where artifacts
//! are written. Defaults target the public demo site; environment variables
//! override them for CI.

use std::path::PathBuf;

/// Default storefront under test
pub const DEFAULT_BASE_URL: &str = "https://www.saucedemo.com";

/// Default timeout for element readiness (5 seconds)
pub const DEFAULT_WAIT_TIMEOUT_MS: u64 = 5000;

/// Suite configuration
#[derive(Debug, Clone)]
pub struct SuiteConfig {
    /// Base URL of the storefront
    pub base_url: String,
    /// Run the browser headless
    pub headless: bool,
    /// Viewport width
    pub viewport_width: u32,
    /// Viewport height
    pub viewport_height: u32,
    /// Path to chromium binary (None = auto-detect)
    pub chromium_path: Option<String>,
    /// Sandbox mode (disable for containers)
    pub sandbox: bool,
    /// Directory for failure screenshots and reports
    pub artifact_dir: PathBuf,
    /// Path to a local axe-core script for accessibility scans
    pub axe_script_path: Option<PathBuf>,
    /// Default wait timeout in milliseconds
    pub wait_timeout_ms: u64,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            headless: true,
            viewport_width: 1280,
            viewport_height: 800,
            chromium_path: None,
            sandbox: true,
            artifact_dir: PathBuf::from("screenshots"),
            axe_script_path: None,
            wait_timeout_ms: DEFAULT_WAIT_TIMEOUT_MS,
        }
    }
}

impl SuiteConfig {
    /// Create a config with defaults, then apply environment overrides:
    /// `COMPRAR_BASE_URL`, `COMPRAR_CHROMIUM`, `COMPRAR_HEADFUL`,
    /// `COMPRAR_AXE_SCRIPT`.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = std::env::var("COMPRAR_BASE_URL") {
            config.base_url = url;
        }
        if let Ok(path) = std::env::var("COMPRAR_CHROMIUM") {
            config.chromium_path = Some(path);
        }
        if std::env::var("COMPRAR_HEADFUL").is_ok() {
            config.headless = false;
        }
        if let Ok(path) = std::env::var("COMPRAR_AXE_SCRIPT") {
            config.axe_script_path = Some(PathBuf::from(path));
        }
        config
    }

    /// Set the base URL
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set headless mode
    #[must_use]
    pub const fn with_headless(mut self, headless: bool) -> Self {
        self.headless = headless;
        self
    }

    /// Set viewport dimensions
    #[must_use]
    pub const fn with_viewport(mut self, width: u32, height: u32) -> Self {
        self.viewport_width = width;
        self.viewport_height = height;
        self
    }

    /// Set chromium path
    #[must_use]
    pub fn with_chromium_path(mut self, path: impl Into<String>) -> Self {
        self.chromium_path = Some(path.into());
        self
    }

    /// Disable sandbox (for containers/CI)
    #[must_use]
    pub const fn with_no_sandbox(mut self) -> Self {
        self.sandbox = false;
        self
    }

    /// Set the artifact directory
    #[must_use]
    pub fn with_artifact_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.artifact_dir = dir.into();
        self
    }

    /// Set the axe-core script path
    #[must_use]
    pub fn with_axe_script(mut self, path: impl Into<PathBuf>) -> Self {
        self.axe_script_path = Some(path.into());
        self
    }

    /// Set the default wait timeout
    #[must_use]
    pub const fn with_wait_timeout(mut self, ms: u64) -> Self {
        self.wait_timeout_ms = ms;
        self
    }

    /// Absolute URL for a page path (e.g. `/cart.html`)
    #[must_use]
    pub fn page_url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        if path.is_empty() {
            format!("{base}/")
        } else {
            format!("{base}/{path}")
        }
    }
}
