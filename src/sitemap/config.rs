/// Default configuration constants
pub mod defaults {
    /// Default XML namespace for the sitemap index root element
    pub const XMLNS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

    /// Default output path for the generated sitemap
    pub const OUTPUT_PATH: &str = "sitemap.xml";

    /// Default path of the file containing URLs to include
    pub const URL_FILE: &str = "input/urls.txt";
}

/// Configuration for sitemap generation
#[derive(Debug, Clone)]
pub struct SitemapConfig {
    /// XML namespace placed on the root element
    pub xmlns: String,

    /// Path the sitemap is written to when no explicit path is given
    pub output_path: String,
}

impl Default for SitemapConfig {
    fn default() -> Self {
        use defaults::*;

        Self {
            xmlns: XMLNS.to_string(),
            output_path: OUTPUT_PATH.to_string(),
        }
    }
}

impl SitemapConfig {
    /// Create a builder for more granular configuration
    pub fn builder() -> SitemapConfigBuilder {
        SitemapConfigBuilder::default()
    }
}

/// Builder for SitemapConfig to allow for more granular configuration
#[derive(Default)]
pub struct SitemapConfigBuilder {
    config: SitemapConfig,
}

impl SitemapConfigBuilder {
    /// Set the XML namespace of the root element
    ///
    /// An empty string drops the attribute value but keeps the attribute,
    /// matching sitemaps produced by older generators.
    pub fn xmlns(mut self, xmlns: &str) -> Self {
        self.config.xmlns = xmlns.to_string();
        self
    }

    /// Set the default output path
    pub fn output_path(mut self, path: &str) -> Self {
        self.config.output_path = path.to_string();
        self
    }

    /// Build the final SitemapConfig
    pub fn build(self) -> SitemapConfig {
        self.config
    }
}
