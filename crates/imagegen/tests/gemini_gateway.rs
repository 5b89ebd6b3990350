//! Gateway behaviour that needs no live image service.

use std::time::Duration;

use assert_matches::assert_matches;

use oratory_core::panel::{PanelPosition, PanelShape};
use oratory_imagegen::api::GeminiConfig;
use oratory_imagegen::gateway::{ArtError, ArtGateway, ArtRequest, GeminiGateway};
use oratory_imagegen::messages::GenerateContentRequest;

fn unreachable_config() -> GeminiConfig {
    GeminiConfig {
        api_url: "http://127.0.0.1:1".to_string(),
        api_key: "test-key".to_string(),
        model: "gemini-2.5-flash-image".to_string(),
        request_timeout: Duration::from_secs(2),
    }
}

fn request() -> ArtRequest {
    ArtRequest {
        prompt: "Saint Francis preaching to the birds".to_string(),
        shape: PanelShape::Square,
        position: PanelPosition::Left,
    }
}

// ---------------------------------------------------------------------------
// Test: a network failure surfaces as an API error from generate()
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unreachable_service_is_request_error() {
    let gateway = GeminiGateway::from_config(&unreachable_config()).unwrap();

    let result = gateway.generate(&request()).await;

    assert_matches!(result, Err(ArtError::Api(_)));
}

// ---------------------------------------------------------------------------
// Test: the trait boundary collapses failures to None
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unreachable_service_yields_no_image() {
    let gateway = GeminiGateway::from_config(&unreachable_config()).unwrap();

    assert!(gateway.request_art(&request()).await.is_none());
    assert_eq!(gateway.name(), "gemini");
}

// ---------------------------------------------------------------------------
// Test: the wire body carries the composed instruction and aspect ratio
// ---------------------------------------------------------------------------

#[test]
fn wire_body_for_square_side_panel() {
    let body = GenerateContentRequest::from_prompt(&request().composed());
    let json = serde_json::to_value(&body).unwrap();

    let text = json["contents"][0]["parts"][0]["text"].as_str().unwrap();
    assert!(text.contains("Saint Francis preaching to the birds"));
    assert!(text.contains("supporting sacred symbols"));
    assert!(text.contains("balanced square composition"));
    assert_eq!(json["generationConfig"]["imageConfig"]["aspectRatio"], "1:1");
}
