//! Separates the metadata header of a document from its Markdown body.

use crate::error::PublishError;

/// The line that opens and closes the metadata block.
pub const DELIMITER: &str = "---";

/// A document cut into its metadata block and body, both whitespace-trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitDocument {
    pub metadata: String,
    pub body: String,
}

impl SplitDocument {
    /// Puts the two halves back together with the delimiter lines.
    pub fn join(&self) -> String {
        let mut document = String::new();
        document.push_str(DELIMITER);
        document.push('\n');

        if !self.metadata.is_empty() {
            document.push_str(&self.metadata);
            document.push('\n');
        }

        document.push_str(DELIMITER);
        document.push('\n');
        document.push_str(&self.body);
        document
    }
}

/// Splits `raw` into its metadata block and body.
///
/// The document must open with a `---` line (leading whitespace is allowed)
/// and the first later `---` line closes the block. Everything after the
/// closing line is the body.
pub fn split(raw: &str) -> Result<SplitDocument, PublishError> {
    let content = raw.trim_start();

    let rest = strip_opening_delimiter(content).ok_or_else(PublishError::no_metadata_block)?;
    let (metadata, body_start) =
        extract_metadata_block(rest).ok_or_else(PublishError::no_metadata_block)?;

    Ok(SplitDocument {
        metadata: metadata.trim().to_string(),
        body: rest[body_start..].trim().to_string(),
    })
}

fn is_delimiter_line(line: &str) -> bool {
    line.trim_end() == DELIMITER
}

fn strip_opening_delimiter(content: &str) -> Option<&str> {
    let (first_line, rest) = match content.find('\n') {
        Some(idx) => (&content[..idx], &content[idx + 1..]),
        None => (content, ""),
    };

    is_delimiter_line(first_line).then_some(rest)
}

/// Returns the block preceding the first delimiter line and the byte offset
/// where the body begins.
fn extract_metadata_block(content: &str) -> Option<(&str, usize)> {
    let mut offset = 0;

    for line in content.split_inclusive('\n') {
        if is_delimiter_line(line) {
            return Some((&content[..offset], offset + line.len()));
        }

        offset += line.len();
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn splits_metadata_from_body() {
        let doc = split("---\ntitle: Hello\ntags: [a, b]\n---\n\n# Heading\n\nText.\n").unwrap();

        assert_eq!(doc.metadata, "title: Hello\ntags: [a, b]");
        assert_eq!(doc.body, "# Heading\n\nText.");
    }

    #[test]
    fn allows_leading_whitespace_before_opening_delimiter() {
        let doc = split("\n\n  ---\ntitle: Hello\n---\nBody").unwrap();

        assert_eq!(doc.metadata, "title: Hello");
        assert_eq!(doc.body, "Body");
    }

    #[test]
    fn handles_crlf_line_endings() {
        let doc = split("---\r\ntitle: Hello\r\n---\r\nBody\r\n").unwrap();

        assert_eq!(doc.metadata, "title: Hello");
        assert_eq!(doc.body, "Body");
    }

    #[test]
    fn first_closing_delimiter_wins() {
        let doc = split("---\ntitle: Hello\n---\nIntro\n---\nMore\n").unwrap();

        assert_eq!(doc.metadata, "title: Hello");
        assert_eq!(doc.body, "Intro\n---\nMore");
    }

    #[test]
    fn hyphens_inside_a_line_do_not_close_the_block() {
        let doc = split("---\ntitle: before---after\n---\nBody").unwrap();

        assert_eq!(doc.metadata, "title: before---after");
    }

    #[test]
    fn indented_hyphens_do_not_close_the_block() {
        let doc = split("---\ntitle: Hello\n   ---\nseries: S\n---\nBody").unwrap();

        assert_eq!(doc.metadata, "title: Hello\n   ---\nseries: S");
        assert_eq!(doc.body, "Body");
    }

    #[test]
    fn accepts_empty_metadata_block() {
        let doc = split("---\n---\nBody only").unwrap();

        assert_eq!(doc.metadata, "");
        assert_eq!(doc.body, "Body only");
    }

    #[rstest]
    #[case::empty("")]
    #[case::no_delimiters("# Just Markdown\n\nNo header here.\n")]
    #[case::not_at_start("# Title\n---\ntitle: Hello\n---\nBody")]
    #[case::missing_closing("---\ntitle: Hello\n\nBody without a closing line\n")]
    #[case::only_opening("---")]
    #[case::four_hyphens("----\ntitle: Hello\n----\nBody")]
    fn rejects_documents_without_a_metadata_block(#[case] raw: &str) {
        let err = split(raw).unwrap_err();

        assert!(matches!(err, PublishError::Format(_)));
        assert!(err.to_string().contains("no metadata block found"));
    }

    #[test]
    fn join_round_trips_trimmed_spans() {
        let original = "---\ntitle: Hello\npublished: true\n---\n# Heading\n\nBody text.";
        let doc = split(original).unwrap();

        assert_eq!(doc.join(), original);
        assert_eq!(split(&doc.join()).unwrap(), doc);
    }
}
