//! Websocket echo endpoint

use actix_web::{HttpRequest, Responder, Scope, get, rt, web};
use tracing::{info, warn};

use crate::api::metrics::METRICS;

/// Reply text for an incoming frame
fn echo_reply(text: &str) -> String {
    format!("echo: {}", text)
}

#[get("/echo")]
pub async fn echo(req: HttpRequest, body: web::Payload) -> actix_web::Result<impl Responder> {
    let (response, mut session, mut msg_stream) = actix_ws::handle(&req, body)?;

    METRICS.inc_ws_sessions();
    info!("websocket echo session opened");

    rt::spawn(async move {
        let close_reason = loop {
            match msg_stream.recv().await {
                Some(Ok(actix_ws::Message::Text(text))) => {
                    if session.text(echo_reply(&text)).await.is_err() {
                        break None;
                    }
                }
                Some(Ok(actix_ws::Message::Ping(bytes))) => {
                    if session.pong(&bytes).await.is_err() {
                        break None;
                    }
                }
                Some(Ok(actix_ws::Message::Close(reason))) => break reason,
                Some(Ok(_)) => {}
                Some(Err(e)) => {
                    warn!(error = %e, "websocket protocol error");
                    break None;
                }
                None => break None,
            }
        };

        let _ = session.close(close_reason).await;
        info!("websocket echo session closed");
    });

    Ok(response)
}

pub fn routes() -> Scope {
    web::scope("/ws").service(echo)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_echo_reply() {
        assert_eq!(echo_reply("hello"), "echo: hello");
        assert_eq!(echo_reply(""), "echo: ");
    }
}
