//! Command dispatch.

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use tracing::{debug, info};
use verity_core::{
    AnalysisResponse, ContentType, Mode, extract_youtube_id, format_content, validate_source_url,
};

use crate::cli::{Command, input_path};
use crate::error::CliError;

/// Run a parsed command, writing results to stdout.
pub fn run(command: Command) -> Result<(), CliError> {
    let output = match command {
        Command::Format { mode, file } => format_file(mode, file)?,
        Command::Render { json, file } => render_file(json, file)?,
        Command::Inspect { url } => inspect(&url)?,
    };

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{output}").map_err(CliError::Write)?;
    stdout.flush().map_err(CliError::Write)
}

fn format_file(mode: Mode, file: Option<PathBuf>) -> Result<String, CliError> {
    let text = read_input(file)?;
    debug!(%mode, bytes = text.len(), "formatting input");
    Ok(format_content(Some(&text), mode))
}

fn render_file(json: bool, file: Option<PathBuf>) -> Result<String, CliError> {
    let document = read_input(file)?;
    let rendered = AnalysisResponse::from_json(&document)?.render()?;
    info!(
        summary_len = rendered.summary_html.len(),
        analysis_len = rendered.analysis_html.len(),
        "rendered analysis response"
    );

    if json {
        Ok(serde_json::to_string_pretty(&rendered)?)
    } else {
        Ok(rendered.to_html())
    }
}

fn inspect(url: &str) -> Result<String, CliError> {
    let url = validate_source_url(url)?;
    let content_type = ContentType::from_url(&url);
    let mut lines = vec![
        format!("url: {url}"),
        format!("content type: {}", content_type.label()),
    ];
    if content_type == ContentType::Youtube {
        let id = extract_youtube_id(&url);
        lines.push(format!("video id: {}", id.as_deref().unwrap_or("(not found)")));
    }
    Ok(lines.join("\n"))
}

fn read_input(file: Option<PathBuf>) -> Result<String, CliError> {
    match input_path(file) {
        Some(path) => fs::read_to_string(&path).map_err(|source| CliError::Read { path, source }),
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .map_err(|source| CliError::Read {
                    path: PathBuf::from("<stdin>"),
                    source,
                })?;
            Ok(text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_inspect_video() {
        assert_eq!(
            inspect(" https://www.youtube.com/watch?v=dQw4w9WgXcQ ").unwrap(),
            "url: https://www.youtube.com/watch?v=dQw4w9WgXcQ\n\
             content type: YouTube Video\n\
             video id: dQw4w9WgXcQ"
        );
    }

    #[test]
    fn test_inspect_article() {
        assert_eq!(
            inspect("https://news.example.com/a").unwrap(),
            "url: https://news.example.com/a\ncontent type: Article"
        );
    }

    #[test]
    fn test_inspect_rejects_bad_scheme() {
        assert!(matches!(inspect("ftp://x.org"), Err(CliError::Url(_))));
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_input(Some(PathBuf::from("/nonexistent/verity-input.txt"))).unwrap_err();
        assert!(err.to_string().starts_with("failed to read /nonexistent/verity-input.txt"));
    }
}
