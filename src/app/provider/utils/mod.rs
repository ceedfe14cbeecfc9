use actix_web::client::ClientRequest;
use futures::Future;
use futures::future::{err as fut_err, Either};
use actix_web::HttpMessage;
use serde::de::DeserializeOwned;

const MAX_BODY_SIZE: usize = 4 * 1024 * 1024;

#[derive(Debug, Fail)]
pub enum RequestError {
    #[fail(display = "Request failed: {}", reason)]
    SendFailed {
        reason: String,
    },

    #[fail(display = "Unexpected status {}", status)]
    BadStatus {
        status: u16,
    },

    #[fail(display = "Unreadable body: {}", reason)]
    BodyFailed {
        reason: String,
    },

    #[fail(display = "Invalid response: {}", reason)]
    InvalidResponse {
        reason: String,
    },
}

pub fn is_success_status(status: u16) -> bool {
    status >= 200 && status < 400
}

/// Sends `request` with the client's default timeout and decodes a JSON body.
pub fn fetch_json_request<T: 'static>(request: ClientRequest) -> Box<dyn Future<Item=T, Error=RequestError>>
    where T: DeserializeOwned
{
    Box::new(
        request
            .send()
            .map_err(|e| RequestError::SendFailed { reason: e.to_string() })
            .and_then(|response| {
                let status = response.status().as_u16();
                if !is_success_status(status) {
                    return Either::A(fut_err(RequestError::BadStatus { status }));
                }

                Either::B(
                    response
                        .body()
                        .limit(MAX_BODY_SIZE)
                        .map_err(|e| RequestError::BodyFailed { reason: e.to_string() })
                        .and_then(|body| {
                            serde_json::from_slice::<T>(&body).map_err(|e| RequestError::InvalidResponse { reason: e.to_string() })
                        })
                )
            })
    )
}
