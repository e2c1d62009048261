//! HTML rendering of the prediction page

use coursepredict_core::Prediction;
use serde::Serialize;

pub const PAGE_HEADER: &str = "Course Keyword Prediction Page";
pub const INPUT_LABEL: &str = "Enter a course name";
pub const MISSING_INPUT_MESSAGE: &str = "Please enter a course name";
pub const TABLE_CAPTION: &str = "Prediction Table:";

/// One row of the prediction table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PredictionRow {
    pub course_name: String,
    pub prediction: String,
}

/// Indexed table of predictions, shown beneath the form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PredictionTable {
    rows: Vec<PredictionRow>,
}

impl PredictionTable {
    pub fn rows(&self) -> &[PredictionRow] {
        &self.rows
    }

    fn to_html(&self) -> String {
        let mut html = String::from(
            "<table class=\"prediction-table\">\n\
             <thead><tr><th></th><th>course_name</th><th>prediction</th></tr></thead>\n\
             <tbody>\n",
        );
        for (index, row) in self.rows.iter().enumerate() {
            html.push_str(&format!(
                "<tr><th>{}</th><td>{}</td><td>{}</td></tr>\n",
                index,
                escape_html(&row.course_name),
                escape_html(&row.prediction)
            ));
        }
        html.push_str("</tbody>\n</table>\n");
        html
    }
}

impl From<Prediction> for PredictionTable {
    fn from(prediction: Prediction) -> Self {
        Self {
            rows: vec![PredictionRow {
                course_name: prediction.course_name,
                prediction: prediction.label,
            }],
        }
    }
}

/// What appears below the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageContent {
    /// Nothing was entered
    MissingInput,
    /// A prediction was made
    Table(PredictionTable),
    /// The model could not be consulted
    Failure(String),
}

/// Render the full page, with the form pre-filled with `course_name`
pub fn render_page(course_name: &str, content: &PageContent) -> String {
    let body = match content {
        PageContent::MissingInput => format!(
            "<div class=\"alert alert-error\">{}</div>\n",
            MISSING_INPUT_MESSAGE
        ),
        PageContent::Table(table) => format!(
            "<p class=\"caption\">{}</p>\n{}",
            TABLE_CAPTION,
            table.to_html()
        ),
        PageContent::Failure(message) => format!(
            "<div class=\"alert alert-error\">Prediction failed: {}</div>\n",
            escape_html(message)
        ),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{header}</title>
    <link rel="stylesheet" href="/static/style.css">
</head>
<body>
    <main class="container">
        <h1>{header}</h1>
        <form method="get" action="/">
            <label for="course_name">{label}</label>
            <input type="text" id="course_name" name="course_name" value="{value}" autofocus>
        </form>
{content}    </main>
</body>
</html>
"#,
        header = PAGE_HEADER,
        label = INPUT_LABEL,
        value = escape_html(course_name),
        content = body,
    )
}

/// Escape text for use in HTML element content and quoted attributes
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
