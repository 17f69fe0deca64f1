use crate::core::contact::ContactHandler;
use crate::core::{ConfigProvider, ContactPayload, ContactReply, EmailSender};
use lambda_http::{Body, Error, Request, Response};

/// API Gateway and function URL bodies arrive already decoded by `lambda_http`;
/// `isBase64Encoded` payloads show up as `Body::Binary`.
pub fn contact_payload(body: &Body) -> ContactPayload {
    match body {
        Body::Text(text) => ContactPayload::from_text(text.clone()),
        Body::Binary(bytes) => ContactPayload::from_bytes(bytes),
        Body::Empty => ContactPayload::Empty,
    }
}

pub fn contact_response(reply: ContactReply) -> Result<Response<Body>, Error> {
    Ok(Response::builder()
        .status(reply.status)
        .header("Content-Type", "application/json")
        .body(reply.to_json()?.into())
        .map_err(Box::new)?)
}

pub async fn handle_request<S, C>(
    handler: &ContactHandler<S, C>,
    event: Request,
) -> Result<Response<Body>, Error>
where
    S: EmailSender,
    C: ConfigProvider,
{
    let method = event.method().as_str().to_string();
    tracing::debug!("Lambda contact request ({})", method);

    let reply = handler.handle(&method, contact_payload(event.body())).await;
    contact_response(reply)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_variants_map_to_payloads() {
        let text = contact_payload(&Body::Text(r#"{"name":"Ana"}"#.to_string()));
        assert_eq!(text.into_submission().name(), Some("Ana"));

        let binary = contact_payload(&Body::Binary(br#"{"message":"Hola"}"#.to_vec()));
        assert_eq!(binary.into_submission().message(), Some("Hola"));

        assert_eq!(contact_payload(&Body::Empty), ContactPayload::Empty);
        assert_eq!(
            contact_payload(&Body::Text("  ".to_string())),
            ContactPayload::Empty
        );
    }

    #[test]
    fn test_reply_becomes_json_response() {
        let response = contact_response(ContactReply::rejected(405, "Method not allowed")).unwrap();
        assert_eq!(response.status().as_u16(), 405);
        assert_eq!(
            response.headers()["Content-Type"].to_str().unwrap(),
            "application/json"
        );
        match response.body() {
            Body::Text(text) => assert_eq!(text, r#"{"error":"Method not allowed"}"#),
            other => panic!("unexpected body: {other:?}"),
        }
    }
}
