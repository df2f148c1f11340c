//! Text and JSON rendering of input source records

use crate::error::Result;
use crate::types::InputSourceRecord;
use serde_json::json;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Which attributes of a record are shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Id,
    Name,
    Detail,
}

/// Render a single record
pub fn render_source(source: &InputSourceRecord, view: View, format: OutputFormat) -> Result<String> {
    let rendered = match (view, format) {
        (View::Id, OutputFormat::Text) => source.id.clone(),
        (View::Name, OutputFormat::Text) => source.localized_name.clone(),
        (View::Detail, OutputFormat::Text) => detail_text(source),
        (View::Id, OutputFormat::Json) => json!({ "id": source.id }).to_string(),
        (View::Name, OutputFormat::Json) => {
            json!({ "localizedName": source.localized_name }).to_string()
        }
        (View::Detail, OutputFormat::Json) => serde_json::to_string(source)?,
    };
    Ok(rendered)
}

/// Render a sequence of records. Text output has one entry per line, detail
/// blocks are separated by an empty line. JSON output is always an array.
pub fn render_sources(sources: &[InputSourceRecord], view: View, format: OutputFormat) -> Result<String> {
    let rendered = match (view, format) {
        (View::Id, OutputFormat::Text) => join_lines(sources.iter().map(|s| s.id.as_str())),
        (View::Name, OutputFormat::Text) => {
            join_lines(sources.iter().map(|s| s.localized_name.as_str()))
        }
        (View::Detail, OutputFormat::Text) => sources
            .iter()
            .map(detail_text)
            .collect::<Vec<_>>()
            .join("\n\n"),
        (View::Id, OutputFormat::Json) => {
            serde_json::to_string(&sources.iter().map(|s| &s.id).collect::<Vec<_>>())?
        }
        (View::Name, OutputFormat::Json) => {
            serde_json::to_string(&sources.iter().map(|s| &s.localized_name).collect::<Vec<_>>())?
        }
        (View::Detail, OutputFormat::Json) => serde_json::to_string(sources)?,
    };
    Ok(rendered)
}

/// `key: value` lines for every attribute of `source`
pub fn detail_text(source: &InputSourceRecord) -> String {
    let languages = source
        .source_languages
        .iter()
        .map(|lang| format!("{:?}", lang))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "id: {}\nlocalizedName: {}\nisSelectCapable: {}\nisSelected: {}\nsourceLanguages: [{}]",
        source.id, source.localized_name, source.is_select_capable, source.is_selected, languages
    )
}

/// Error line for stderr; JSON mode wraps the message in an object
pub fn render_error(message: &str, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => message.to_string(),
        OutputFormat::Json => json!({ "error": message }).to_string(),
    }
}

fn join_lines<'a>(lines: impl Iterator<Item = &'a str>) -> String {
    lines.collect::<Vec<_>>().join("\n")
}
