//! Local stand-in for the Gemini endpoint plus image helpers.

#![allow(dead_code)]

use gengraphic_engine::image_handler;
use gengraphic_engine::utils::convert;
use image::{DynamicImage, Rgb, RgbImage};
use std::sync::{Arc, Mutex};
use tiny_http::{Header, Response, Server};

#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub url: String,
    pub api_key: Option<String>,
    pub body: serde_json::Value,
}

pub struct StubServer {
    pub base_url: String,
    pub requests: Arc<Mutex<Vec<CapturedRequest>>>,
}

impl StubServer {
    /// Serve `responses` (status, JSON body) in order, one per request.
    pub fn start(responses: Vec<(u16, String)>) -> StubServer {
        let server = Server::http("127.0.0.1:0").unwrap();
        let port = server.server_addr().to_ip().unwrap().port();
        let requests = Arc::new(Mutex::new(Vec::new()));
        let captured = Arc::clone(&requests);

        std::thread::spawn(move || {
            let mut queue = responses.into_iter();
            for mut request in server.incoming_requests() {
                let mut raw = String::new();
                let _ = request.as_reader().read_to_string(&mut raw);
                let api_key = request
                    .headers()
                    .iter()
                    .find(|h| h.field.equiv("x-goog-api-key"))
                    .map(|h| h.value.as_str().to_string());
                captured.lock().unwrap().push(CapturedRequest {
                    url: request.url().to_string(),
                    api_key,
                    body: serde_json::from_str(&raw).unwrap_or(serde_json::Value::Null),
                });

                let (status, body) = queue
                    .next()
                    .unwrap_or((500, r#"{"error":{"message":"no more responses"}}"#.into()));
                let resp = Response::from_string(body)
                    .with_status_code(status)
                    .with_header("Content-Type: application/json".parse::<Header>().unwrap());
                let _ = request.respond(resp);
            }
        });

        StubServer {
            base_url: format!("http://127.0.0.1:{}", port),
            requests,
        }
    }

    pub fn captured(&self) -> Vec<CapturedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

pub fn png_base64(width: u32, height: u32) -> String {
    let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, Rgb([20, 40, 200])));
    convert::encode_base64(&image_handler::save_image_to_bytes(&img).unwrap())
}

pub fn image_response(data: &str) -> String {
    serde_json::json!({
        "candidates": [{
            "content": {
                "parts": [
                    { "text": "Here is the logo." },
                    { "inlineData": { "mimeType": "image/png", "data": data } }
                ]
            }
        }]
    })
    .to_string()
}

pub fn text_only_response() -> String {
    serde_json::json!({
        "candidates": [{ "content": { "parts": [{ "text": "I cannot draw that." }] } }]
    })
    .to_string()
}
