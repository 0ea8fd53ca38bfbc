use crate::models::{AgentRequest, AgentResponse};

pub const DEMO_INTENT: &str = "demo";
pub const REPLY_PREFIX: &str = "Received transcript: ";

pub fn demo_reply(transcript: &str) -> String {
    format!("{}{}", REPLY_PREFIX, transcript)
}

/// Builds the response for a transcript request. Pure: no I/O, no shared
/// state, the page context moves through unmodified.
pub fn respond(request: AgentRequest) -> AgentResponse {
    AgentResponse {
        intent: DEMO_INTENT.to_string(),
        response: demo_reply(&request.transcript),
        page_context: request.page_context,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Map, Value};

    fn page_context(value: Value) -> Map<String, Value> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn reply_is_prefix_plus_transcript() {
        assert_eq!(demo_reply("turn on lights"), "Received transcript: turn on lights");
    }

    #[test]
    fn empty_transcript_reply_is_bare_prefix() {
        assert_eq!(demo_reply(""), "Received transcript: ");
    }

    #[test]
    fn respond_labels_every_request_demo() {
        let response = respond(AgentRequest {
            transcript: "book a flight".to_string(),
            page_context: Map::new(),
        });
        assert_eq!(response.intent, DEMO_INTENT);
    }

    #[test]
    fn respond_echoes_page_context_unmodified() {
        let context = page_context(json!({"url": "example.com", "title": "Shop"}));
        let response = respond(AgentRequest {
            transcript: "add to cart".to_string(),
            page_context: context.clone(),
        });
        assert_eq!(response.page_context, context);
        assert_eq!(response.response, "Received transcript: add to cart");
    }

    #[test]
    fn respond_is_deterministic() {
        let request = AgentRequest {
            transcript: "scroll down".to_string(),
            page_context: page_context(json!({"url": "example.com"})),
        };
        let first = serde_json::to_value(respond(request.clone())).unwrap();
        let second = serde_json::to_value(respond(request)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn unicode_transcript_passes_through() {
        let response = respond(AgentRequest {
            transcript: "allume les lumières 💡".to_string(),
            page_context: Map::new(),
        });
        assert_eq!(response.response, "Received transcript: allume les lumières 💡");
    }
}
