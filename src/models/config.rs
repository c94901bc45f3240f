//! Configuration model loaded from external sources.

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

use crate::domain::post::Post;
use crate::domain::product::Product;
use crate::domain::user::User;
use crate::listing::{Listing, ListingError};
use crate::{DEFAULT_POSTS_PER_PAGE, DEFAULT_PRODUCTS_PER_PAGE, DEFAULT_USERS_PER_PAGE};

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Settings shared by the repository and the list views.
pub struct AppConfig {
    pub database_url: String,
    pub users_per_page: usize,
    pub posts_per_page: usize,
    pub products_per_page: usize,
    pub user_search_fields: Vec<String>,
    pub post_search_fields: Vec<String>,
    pub product_search_fields: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: "app.db".to_string(),
            users_per_page: DEFAULT_USERS_PER_PAGE,
            posts_per_page: DEFAULT_POSTS_PER_PAGE,
            products_per_page: DEFAULT_PRODUCTS_PER_PAGE,
            user_search_fields: vec!["name".to_string()],
            post_search_fields: vec!["title".to_string(), "content".to_string()],
            product_search_fields: vec!["name".to_string(), "description".to_string()],
        }
    }
}

impl AppConfig {
    /// Loads `config/default.yaml`, the optional `config/{APP_ENV}.yaml` and
    /// `APP_*` environment variables, in increasing priority.
    pub fn load() -> Result<Self, ConfigError> {
        // Load environment variables from `.env` in local development.
        dotenvy::dotenv().ok();

        let app_env = std::env::var("APP_ENV").unwrap_or_else(|_| "local".into());

        Config::builder()
            // Add `./config/default.yaml`
            .add_source(File::with_name("config/default").required(false))
            // Add environment-specific overrides
            .add_source(File::with_name(&format!("config/{app_env}")).required(false))
            // Add settings from the environment (with a prefix of APP)
            .add_source(
                Environment::with_prefix("APP")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("user_search_fields")
                    .with_list_parse_key("post_search_fields")
                    .with_list_parse_key("product_search_fields"),
            )
            .build()?
            .try_deserialize()
    }

    /// Parses a YAML document, falling back to defaults for missing keys.
    pub fn from_yaml(source: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from_str(source, FileFormat::Yaml))
            .build()?
            .try_deserialize()
    }

    pub fn users_listing(&self) -> Result<Listing<User>, ListingError> {
        Listing::new(self.users_per_page, &self.user_search_fields)
    }

    pub fn posts_listing(&self) -> Result<Listing<Post>, ListingError> {
        Listing::new(self.posts_per_page, &self.post_search_fields)
    }

    pub fn products_listing(&self) -> Result<Listing<Product>, ListingError> {
        Listing::new(self.products_per_page, &self.product_search_fields)
    }
}
