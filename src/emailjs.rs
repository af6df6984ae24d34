use crate::core::contact::{DeliveryRequest, EmailSender, OutboundEmail};
use crate::error::DeliveryError;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, error, info};

/// EmailJS REST client used to deliver contact-form submissions
pub struct EmailJsClient {
    http_client: Client,
    endpoint: String,
}

#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a OutboundEmail,
}

impl EmailJsClient {
    /// Create a client posting to `endpoint`
    pub fn new(endpoint: impl Into<String>) -> Self {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| Client::new());
        Self {
            http_client,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// Mask a public key for logs
fn key_preview(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() > 8 {
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{}...{}", head, tail)
    } else {
        "***".to_string()
    }
}

impl EmailSender for EmailJsClient {
    async fn send(&self, request: &DeliveryRequest) -> Result<(), DeliveryError> {
        let body = SendRequest {
            service_id: &request.credentials.service_id,
            template_id: &request.credentials.template_id,
            user_id: &request.credentials.public_key,
            template_params: &request.email,
        };

        info!("=== EmailJS Request ===");
        info!("URL: {}", self.endpoint);
        info!("Service: {}", request.credentials.service_id);
        info!("Template: {}", request.credentials.template_id);
        info!("Public key: {}", key_preview(&request.credentials.public_key));
        debug!("Recipient: {}", request.email.to_email);

        let response = self
            .http_client
            .post(&self.endpoint)
            .header("User-Agent", "happyvisit")
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!("EmailJS request failed: {}", e);
                DeliveryError::Transport(e.to_string())
            })?;

        let status = response.status();
        info!("=== EmailJS Response ===");
        info!("Status: {} {}", status.as_u16(), status);

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            error!("EmailJS error response body: {}", error_text);
            return Err(DeliveryError::Rejected {
                status: status.as_u16(),
                body: error_text,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EmailCredentials;

    #[test]
    fn test_key_preview_masks() {
        assert_eq!(key_preview("abcd1234wxyz"), "abcd...wxyz");
        assert_eq!(key_preview("short"), "***");
    }

    #[test]
    fn test_request_body_shape() {
        let request = DeliveryRequest {
            credentials: EmailCredentials {
                service_id: "svc".to_string(),
                template_id: "tpl".to_string(),
                public_key: "pk".to_string(),
            },
            email: OutboundEmail {
                from_name: "Jo".to_string(),
                from_email: "jo@example.com".to_string(),
                phone: "555".to_string(),
                message: "Hi".to_string(),
                to_email: "office@example.com".to_string(),
            },
        };
        let body = SendRequest {
            service_id: &request.credentials.service_id,
            template_id: &request.credentials.template_id,
            user_id: &request.credentials.public_key,
            template_params: &request.email,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["user_id"], "pk");
        assert_eq!(json["template_params"]["from_name"], "Jo");
        assert_eq!(json["template_params"]["to_email"], "office@example.com");
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_transport_error() {
        let client = EmailJsClient::new("http://127.0.0.1:9/api/v1.0/email/send");
        let request = DeliveryRequest {
            credentials: EmailCredentials {
                service_id: "svc".to_string(),
                template_id: "tpl".to_string(),
                public_key: "pk".to_string(),
            },
            email: OutboundEmail {
                from_name: String::new(),
                from_email: String::new(),
                phone: String::new(),
                message: String::new(),
                to_email: String::new(),
            },
        };
        let result = client.send(&request).await;
        assert!(matches!(result, Err(DeliveryError::Transport(_))));
    }
}
