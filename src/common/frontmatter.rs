use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FrontmatterError {
    #[error("Invalid frontmatter format: {0}")]
    InvalidFormat(String),
    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),
}

/// The three parts of a stored document.
struct Document<'content> {
    yaml: String,
    heading: Option<&'content str>,
    rest: Vec<&'content str>,
}

fn split_document(content: &str) -> Result<Document<'_>, FrontmatterError> {
    let lines: Vec<&str> = content.lines().collect();

    if lines.first() != Some(&"---") {
        return Err(FrontmatterError::InvalidFormat(
            "Content must start with '---'".to_string(),
        ));
    }

    let end_idx = lines
        .iter()
        .skip(1)
        .position(|&line| line == "---")
        .ok_or_else(|| {
            FrontmatterError::InvalidFormat("Missing closing '---' for frontmatter".to_string())
        })?;

    let yaml = lines.get(1..=end_idx).unwrap_or(&[]).join("\n");

    let mut body_lines = lines
        .get(end_idx.saturating_add(2)..)
        .unwrap_or(&[])
        .iter()
        .skip_while(|line| line.is_empty())
        .copied()
        .peekable();

    let heading = body_lines
        .next_if(|line| line.starts_with("# "))
        .and_then(|line| line.strip_prefix("# "));

    Ok(Document {
        yaml,
        heading,
        rest: body_lines.skip_while(|line| line.is_empty()).collect(),
    })
}

/// Parse markdown content with YAML frontmatter.
///
/// Returns the deserialized metadata, the title taken from the H1 heading
/// right after the frontmatter (empty when there is none) and the remaining body.
///
/// ```markdown
/// ---
/// number: 1000
/// status: signed
/// ---
///
/// # Title
///
/// Body content...
/// ```
pub fn parse_frontmatter<T: DeserializeOwned>(
    content: &str,
) -> Result<(T, String, String), FrontmatterError> {
    let document = split_document(content)?;
    let metadata: T = serde_yaml::from_str(&document.yaml)?;
    let title = document.heading.unwrap_or_default().to_string();
    let body = document.rest.join("\n").trim_end().to_string();
    Ok((metadata, title, body))
}

/// Render metadata, title and body back into a frontmatter document.
pub fn generate_frontmatter<T: Serialize>(
    metadata: &T,
    title: &str,
    body: &str,
) -> Result<String, FrontmatterError> {
    let yaml = serde_yaml::to_string(metadata)?;
    // serde_yaml adds a trailing newline
    let yaml = yaml.trim_end();

    if body.is_empty() {
        Ok(format!("---\n{yaml}\n---\n\n# {title}\n"))
    } else {
        Ok(format!("---\n{yaml}\n---\n\n# {title}\n\n{body}\n"))
    }
}
