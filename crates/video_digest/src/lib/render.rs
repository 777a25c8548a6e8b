//! # Report rendering
//!
//! Builds the rendered-report HTML page for a video: a metadata header
//! followed by the markdown summary, which a client-side renderer turns into
//! HTML in the browser.

use artifact_store::{VideoId, VideoMetadata};
use chrono::NaiveDate;
use itertools::Itertools;

/// Full HTML document for one video's summary.
pub fn summary_page(id: &VideoId, summary_md: &str, metadata: &VideoMetadata) -> String {
    let metadata_html = metadata_section(metadata);
    // the summary is embedded in a JS template literal
    let escaped_summary = summary_md.replace('`', "\\`");

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <title>Summary for {id}</title>
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <script src="https://cdn.jsdelivr.net/npm/marked/marked.min.js"></script>
    <style>
        body {{
            font-family: 'Arial', sans-serif;
            line-height: 1.6;
            color: #333;
            margin: 0;
            padding: 20px;
            background-color: #f4f4f4;
        }}
        #content {{
            max-width: 800px;
            margin: 20px auto;
            padding: 30px;
            background-color: #fff;
            border-radius: 8px;
            box-shadow: 0 2px 10px rgba(0, 0, 0, 0.1);
        }}
        h1, h2, h3, h4, h5, h6 {{
            color: #0056b3;
        }}
        pre {{
            background-color: #eee;
            padding: 10px;
            border-radius: 5px;
            overflow-x: auto;
        }}
        code {{
            font-family: 'Courier New', Courier, monospace;
            background-color: #eee;
            padding: 2px 4px;
            border-radius: 3px;
        }}
    </style>
</head>
<body>
    <div id="content">
        {metadata_html}
    </div>
    <script>
        document.getElementById('content').innerHTML +=
            marked.parse(`{escaped_summary}`);
    </script>
</body>
</html>
"#
    )
}

fn metadata_section(metadata: &VideoMetadata) -> String {
    let mut html = String::from("<div>");
    if let Some(title) = &metadata.title {
        html.push_str(&format!("<h1>{title}</h1>"));
    }
    if let Some(uploader) = &metadata.uploader {
        html.push_str(&format!("<p><strong>Uploader:</strong> {uploader}</p>"));
    }
    if let Some(upload_date) = &metadata.upload_date {
        html.push_str(&format!(
            "<p><strong>Upload Date:</strong> {}</p>",
            format_upload_date(upload_date)
        ));
    }
    if let Some(duration) = metadata.duration {
        html.push_str(&format!(
            "<p><strong>Duration:</strong> {}</p>",
            format_duration(duration)
        ));
    }
    if let Some(description) = &metadata.description {
        html.push_str(&format!(
            "<p><strong>Description:</strong><br>{}</p>",
            truncate_description(description)
        ));
    }
    html.push_str("<hr></div>");
    html
}

/// 8-digit YYYYMMDD to YYYY-MM-DD; anything unparseable passes through.
pub fn format_upload_date(raw: &str) -> String {
    NaiveDate::parse_from_str(raw, "%Y%m%d")
        .map(|date| date.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

pub fn format_duration(seconds: u64) -> String {
    format!("{}m {}s", seconds / 60, seconds % 60)
}

/// First 5 lines of the description, with an ellipsis marker when cut.
fn truncate_description(description: &str) -> String {
    let lines: Vec<&str> = description.split('\n').collect();
    let mut truncated = lines.iter().take(5).join("<br>");
    if lines.len() > 5 {
        truncated.push_str("...");
    }
    truncated
}
