use reqwest::Client;
use serde_json::json;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = Client::new();
    let base_url = "http://127.0.0.1:5000";

    println!("🔍 Testing Voice Agent Backend");

    // Health check first, like the extension does before recording
    println!("\n📋 Health Check:");
    let health_response = client.get(&format!("{}/health", base_url)).send().await?;

    println!("Status: {}", health_response.status());
    let health_json: serde_json::Value = health_response.json().await?;
    println!("Response: {}", serde_json::to_string_pretty(&health_json)?);

    // Post a transcript with the page context shape the extension captures
    println!("\n🎤 Transcript Echo:");
    let test_payload = json!({
        "transcript": "turn on lights",
        "page_context": {
            "title": "Smart Home Dashboard",
            "url": "https://example.com/dashboard",
            "summary": "Living room: 3 lights, all off. Thermostat at 19C."
        }
    });

    let test_response = client
        .post(&format!("{}/test", base_url))
        .header("Content-Type", "application/json")
        .json(&test_payload)
        .send()
        .await?;

    println!("Status: {}", test_response.status());
    let test_json: serde_json::Value = test_response.json().await?;
    println!("Response: {}", serde_json::to_string_pretty(&test_json)?);

    println!("\n✅ Client test completed!");
    Ok(())
}
