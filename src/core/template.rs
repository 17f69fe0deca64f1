use crate::domain::model::ContactSubmission;
use crate::utils::html::escape_html;

pub const DEFAULT_SENDER_LABEL: &str = "Formulario Web";

const TABLE_OPEN: &str = r#"<table border="0" cellpadding="6" cellspacing="0" style="border-collapse:collapse; font-family:Arial, sans-serif; font-size:14px;">"#;
const DIVIDER: &str = r#"<hr style="margin:16px 0;border:none;border-top:1px solid #eee;">"#;

/// Plain-text body: message first, then the labelled extras, one per line.
pub fn plain_text_body(submission: &ContactSubmission) -> String {
    let lines = [
        submission.message().map(str::to_string),
        submission.service().map(|s| format!("Servicio: {}", s)),
        submission.date().map(|d| format!("Fecha: {}", d)),
        submission.time().map(|t| format!("Hora: {}", t)),
        submission.email().map(|e| format!("Email de contacto: {}", e)),
    ];

    lines
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

pub fn subject_line(submission: &ContactSubmission) -> String {
    match submission.subject().map(str::trim).filter(|s| !s.is_empty()) {
        Some(subject) => subject.to_string(),
        None => format!(
            "Nuevo mensaje de {}",
            submission.name().unwrap_or(DEFAULT_SENDER_LABEL)
        ),
    }
}

pub fn html_body(submission: &ContactSubmission) -> String {
    let rows = [
        ("Nombre", submission.name()),
        ("Email", submission.email()),
        ("Servicio", submission.service()),
        ("Fecha", submission.date()),
        ("Hora", submission.time()),
        ("Asunto", submission.subject()),
    ];

    let mut html = String::from("<h2>Nueva solicitud desde el formulario web</h2>\n");
    html.push_str(TABLE_OPEN);
    html.push('\n');
    for (label, value) in rows {
        if let Some(value) = value {
            html.push_str(&format!(
                "<tr><td><strong>{}</strong></td><td>{}</td></tr>\n",
                label,
                escape_html(value)
            ));
        }
    }
    html.push_str("</table>\n");

    if let Some(message) = submission.message() {
        html.push_str(DIVIDER);
        html.push_str(&format!(
            r#"<p style="white-space:pre-wrap;">{}</p>"#,
            escape_html(message)
        ));
        html.push('\n');
    }

    html
}
