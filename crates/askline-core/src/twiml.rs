//! Voice-markup rendering for the telephony webhook.
//!
//! The telephony runtime consumes one XML document per turn: a `<Say>`
//! utterance followed by a `<Gather input="speech">` window that posts the
//! next recognized utterance back to the webhook. Re-issuing the gather
//! after every answer keeps the call looping until the caller hangs up or
//! stays silent past the timeout.

/// Spoken when a call connects with no recognized speech yet.
pub const GREETING: &str =
    "Welcome to askline. Ask me anything after the tone, and I will do my best to answer.";

/// Spoken instead of an answer when every provider came back empty.
pub const APOLOGY: &str = "Sorry, I could not find an answer to that. Please try again.";

/// Webhook path the gather window posts recognized speech back to.
pub const VOICE_ACTION: &str = "/voice";

/// One voice turn: speak `text`, then collect the caller's next utterance
/// for up to `gather_timeout_secs`.
pub fn say_and_gather(text: &str, gather_timeout_secs: u8) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<Response>
    <Say>{}</Say>
    <Gather input="speech" action="{}" method="POST" timeout="{}"/>
</Response>"#,
        xml_escape(text),
        VOICE_ACTION,
        gather_timeout_secs
    )
}

pub fn xml_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn turn_contains_say_and_gather() {
        let xml = say_and_gather(GREETING, 6);
        assert!(xml.contains("<Say>"));
        assert!(xml.contains(r#"<Gather input="speech""#));
        assert!(xml.contains(r#"action="/voice""#));
        assert!(xml.contains(r#"timeout="6""#));
    }

    #[test]
    fn gather_timeout_is_configurable() {
        let xml = say_and_gather("hello", 10);
        assert!(xml.contains(r#"timeout="10""#));
    }

    #[test]
    fn spoken_text_is_escaped() {
        let xml = say_and_gather(r#"salt & pepper <tags> "quoted""#, 6);
        assert!(xml.contains("salt &amp; pepper &lt;tags&gt; &quot;quoted&quot;"));
        assert!(!xml.contains("<tags>"));
    }

    #[test]
    fn escape_orders_ampersand_first() {
        assert_eq!(xml_escape("<&>"), "&lt;&amp;&gt;");
    }
}
