//! `devto-publish` turns a Markdown file carrying a `---` metadata header into
//! a DEV.to article request.
//!
//! The pipeline has three pure stages: [`frontmatter::split`] separates the
//! header from the body, [`metadata::interpret`] reads the header's flat
//! YAML-like fields, and [`payload::assemble`] builds the request honouring
//! the caller's [`PublishOptions`]. Sending the request is left to a
//! [`transport::Transport`].
//!
//! # Example
//!
//! ```rust
//! use devto_publish::{build_payload, PublishOptions};
//!
//! # fn demo() -> Result<(), devto_publish::error::PublishError> {
//! let document = "---\ntitle: \"Hello\"\ntags: [rust, cli]\n---\nWorld";
//! let request = build_payload(document, &PublishOptions::default())?;
//!
//! assert_eq!(
//!     request.to_json()?,
//!     r#"{"article":{"title":"Hello","published":false,"body_markdown":"World","tags":["rust","cli"]}}"#
//! );
//! # Ok(())
//! # }
//! # demo().unwrap();
//! ```

pub mod error;
pub mod frontmatter;
pub mod metadata;
pub mod payload;
pub mod transport;

pub use crate::error::{PublishError, TransportError};
pub use crate::metadata::{MetadataMap, MetadataValue};
pub use crate::payload::{Article, HeaderLabel, PublishOptions, PublishRequest, RemovalSet};

/// Runs split, interpret and assemble over a raw document.
pub fn build_payload(raw: &str, options: &PublishOptions) -> Result<PublishRequest, PublishError> {
    let document = frontmatter::split(raw)?;
    let meta = metadata::interpret(&document.metadata);
    payload::assemble(&meta, &document.body, options)
}
