use axum::http::header;
use axum::response::IntoResponse;
use serde::Deserialize;
use service::advice;

use crate::errors::ApiForm;

/// Twilio posts the inbound text as the `Body` form field.
#[derive(Debug, Deserialize)]
pub struct InboundMessage {
    #[serde(rename = "Body", default)]
    pub body: String,
}

#[utoipa::path(post, path = "/webhook", tag = "webhook", responses((status = 200, description = "TwiML reply", content_type = "text/xml")))]
pub async fn inbound(ApiForm(msg): ApiForm<InboundMessage>) -> impl IntoResponse {
    let reply = advice::respond(msg.body.trim());
    ([(header::CONTENT_TYPE, "text/xml")], twiml(&reply))
}

/// Wrap `text` in a single-message TwiML document.
pub fn twiml(text: &str) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?><Response><Message>{}</Message></Response>",
        escape_xml(text)
    )
}

// Escapes the five XML predefined entities: & < > " '
fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twiml_escapes_markup() {
        let doc = twiml("Asian & Pacific <Islander>");
        assert!(doc.ends_with("<Response><Message>Asian &amp; Pacific &lt;Islander&gt;</Message></Response>"));
    }

    #[test]
    fn quotes_are_escaped() {
        assert_eq!(escape_xml(r#"say "hi" it's"#), "say &quot;hi&quot; it&apos;s");
    }
}
