use std::str::FromStr;
use std::time::Duration;

use crate::modules::content::domain::entities::EntityKind;

pub const DEFAULT_API_PREFIX: &str = "/functions/v1/make-server";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Path scheme of the remote content API.
///
/// `KeyValue` is the current server; `Document` is the older
/// document-database deployment that named the blog and portfolio
/// collections differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EndpointStyle {
    #[default]
    KeyValue,
    Document,
}

impl FromStr for EndpointStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "kv" | "key-value" | "keyvalue" => Ok(EndpointStyle::KeyValue),
            "document" | "doc" => Ok(EndpointStyle::Document),
            other => Err(format!("unknown endpoint style '{other}'")),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RemoteApiConfig {
    pub base_url: String,
    pub api_key: String,
    pub prefix: String,
    pub style: EndpointStyle,
    pub timeout: Duration,
}

impl RemoteApiConfig {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            prefix: DEFAULT_API_PREFIX.to_string(),
            style: EndpointStyle::default(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_style(mut self, style: EndpointStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn collection_path(&self, kind: EntityKind) -> &'static str {
        match (kind, self.style) {
            (EntityKind::Profile, _) => "profile",
            (EntityKind::Analytics, _) => "analytics",
            (EntityKind::Experience, _) => "experience",
            (EntityKind::Skill, _) => "skills",
            (EntityKind::Education, _) => "education",
            (EntityKind::BlogPost, EndpointStyle::KeyValue) => "blog",
            (EntityKind::BlogPost, EndpointStyle::Document) => "blog-posts",
            (EntityKind::PortfolioItem, EndpointStyle::KeyValue) => "projects",
            (EntityKind::PortfolioItem, EndpointStyle::Document) => "portfolio-items",
        }
    }

    /// `{base}{prefix}/{resource}`
    pub fn url(&self, resource: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let prefix = self.prefix.trim_end_matches('/');
        format!("{base}{prefix}/{resource}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_join_base_prefix_and_resource() {
        let config = RemoteApiConfig::new("https://abc.supabase.co/", "k");

        assert_eq!(
            config.url("skills/7"),
            "https://abc.supabase.co/functions/v1/make-server/skills/7"
        );
    }

    #[test]
    fn style_changes_only_blog_and_portfolio_paths() {
        let kv = RemoteApiConfig::new("http://x", "k");
        let doc = kv.clone().with_style(EndpointStyle::Document);

        assert_eq!(kv.collection_path(EntityKind::BlogPost), "blog");
        assert_eq!(doc.collection_path(EntityKind::BlogPost), "blog-posts");
        assert_eq!(kv.collection_path(EntityKind::PortfolioItem), "projects");
        assert_eq!(
            doc.collection_path(EntityKind::PortfolioItem),
            "portfolio-items"
        );
        assert_eq!(doc.collection_path(EntityKind::Skill), "skills");
    }

    #[test]
    fn style_parses_from_env_values() {
        assert_eq!("kv".parse::<EndpointStyle>(), Ok(EndpointStyle::KeyValue));
        assert_eq!("Document".parse::<EndpointStyle>(), Ok(EndpointStyle::Document));
        assert!("sql".parse::<EndpointStyle>().is_err());
    }
}
