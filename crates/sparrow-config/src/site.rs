//! Site settings parsing.
//!
//! ```kdl
//! site {
//!     bucket-region "eu-west-1"
//!     index-document "index.html"
//!     error-document "index.html"
//!     placeholder "<p>Hello, world!</p>"
//!     content-type "text/html"
//!     price-class "PriceClass_100"
//!     comment "marketing site"
//! }
//! ```
//!
//! Every entry is optional; anything left out keeps its default.

use crate::{ConfigError, ConfigResult};
use kdl::{KdlDocument, KdlNode};
use sparrow_core::site::{PriceClass, ProvisionSettings};
use std::path::Path;
use tracing::{debug, warn};

/// Load settings from `path`, or the defaults when no path is given.
pub fn load_settings(path: Option<&Path>) -> ConfigResult<ProvisionSettings> {
    match path {
        Some(path) => {
            debug!(path = %path.display(), "Loading site settings");
            let content = std::fs::read_to_string(path)?;
            parse_settings(&content)
        }
        None => Ok(ProvisionSettings::default()),
    }
}

/// Parse site settings from KDL text.
pub fn parse_settings(kdl: &str) -> ConfigResult<ProvisionSettings> {
    let doc: KdlDocument = kdl.parse()?;
    let mut settings = ProvisionSettings::default();

    for node in doc.nodes() {
        match node.name().value() {
            "site" => apply_site_node(node, &mut settings)?,
            other => warn!(node = other, "Ignoring unknown configuration node"),
        }
    }

    Ok(settings)
}

fn apply_site_node(node: &KdlNode, settings: &mut ProvisionSettings) -> ConfigResult<()> {
    let Some(children) = node.children() else {
        return Ok(());
    };

    for child in children.nodes() {
        let key = child.name().value();
        match key {
            "bucket-region" => settings.bucket_region = required_string(child)?,
            "index-document" => settings.index_document = required_string(child)?,
            "error-document" => settings.error_document = required_string(child)?,
            "placeholder" => settings.placeholder_body = required_string(child)?,
            "content-type" => settings.placeholder_content_type = required_string(child)?,
            "price-class" => {
                let value = required_string(child)?;
                settings.price_class = value.parse::<PriceClass>().map_err(|e| {
                    ConfigError::InvalidValue {
                        field: key.to_string(),
                        message: e.to_string(),
                    }
                })?;
            }
            // An empty comment is valid.
            "comment" => settings.comment = get_first_string_arg(child).unwrap_or_default(),
            other => warn!(key = other, "Ignoring unknown site setting"),
        }
    }

    for (field, value) in [
        ("bucket-region", &settings.bucket_region),
        ("index-document", &settings.index_document),
        ("error-document", &settings.error_document),
    ] {
        if value.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: field.to_string(),
                message: "must not be empty".to_string(),
            });
        }
    }

    Ok(())
}

fn required_string(node: &KdlNode) -> ConfigResult<String> {
    get_first_string_arg(node).ok_or_else(|| ConfigError::MissingField(node.name().value().to_string()))
}

fn get_first_string_arg(node: &KdlNode) -> Option<String> {
    node.entries()
        .iter()
        .find(|e| e.name().is_none())
        .and_then(|e| e.value().as_string())
        .map(|s| s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let settings = parse_settings("").unwrap();
        assert_eq!(settings, ProvisionSettings::default());
    }

    #[test]
    fn test_parse_full_site_block() {
        let kdl = r#"
            site {
                bucket-region "eu-west-1"
                index-document "home.html"
                error-document "404.html"
                placeholder "<h1>Soon</h1>"
                content-type "text/html; charset=utf-8"
                price-class "PriceClass_All"
                comment "marketing site"
            }
        "#;

        let settings = parse_settings(kdl).unwrap();
        assert_eq!(settings.bucket_region, "eu-west-1");
        assert_eq!(settings.index_document, "home.html");
        assert_eq!(settings.error_document, "404.html");
        assert_eq!(settings.placeholder_body, "<h1>Soon</h1>");
        assert_eq!(settings.placeholder_content_type, "text/html; charset=utf-8");
        assert_eq!(settings.price_class, PriceClass::PriceClassAll);
        assert_eq!(settings.comment, "marketing site");
    }

    #[test]
    fn test_partial_site_block_keeps_defaults() {
        let kdl = r#"
            site {
                bucket-region "ap-southeast-2"
            }
        "#;

        let settings = parse_settings(kdl).unwrap();
        assert_eq!(settings.bucket_region, "ap-southeast-2");
        assert_eq!(settings.index_document, "index.html");
        assert_eq!(settings.placeholder_body, "<p>Hello, world!</p>");
        assert_eq!(settings.price_class, PriceClass::PriceClass100);
    }

    #[test]
    fn test_unknown_price_class() {
        let kdl = r#"
            site {
                price-class "PriceClass_999"
            }
        "#;

        let result = parse_settings(kdl);
        assert!(matches!(
            result.unwrap_err(),
            ConfigError::InvalidValue { field, .. } if field == "price-class"
        ));
    }

    #[test]
    fn test_missing_value() {
        let kdl = r#"
            site {
                bucket-region
            }
        "#;

        assert!(matches!(
            parse_settings(kdl).unwrap_err(),
            ConfigError::MissingField(_)
        ));
    }

    #[test]
    fn test_empty_region_rejected() {
        let kdl = r#"
            site {
                bucket-region ""
            }
        "#;

        assert!(matches!(
            parse_settings(kdl).unwrap_err(),
            ConfigError::InvalidValue { .. }
        ));
    }

    #[test]
    fn test_invalid_kdl() {
        assert!(matches!(
            parse_settings("site {").unwrap_err(),
            ConfigError::Parse(_)
        ));
    }

    #[test]
    fn test_no_path_gives_defaults() {
        assert_eq!(load_settings(None).unwrap(), ProvisionSettings::default());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = load_settings(Some(Path::new("/nonexistent/sparrow.kdl")));
        assert!(matches!(result.unwrap_err(), ConfigError::Io(_)));
    }
}
