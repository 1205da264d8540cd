use super::super::common::HTTPError;
use super::super::http_client::HTTPClient;
use super::super::http_response::response_common::{HTTPResponseType, ResponseError};
use strum_macros::Display;

/// The HTTP method a request type is dispatched with.
#[derive(Debug, Copy, Clone, Display)]
pub(crate) enum HTTPRequestMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl From<HTTPRequestMethod> for reqwest::Method {
    fn from(value: HTTPRequestMethod) -> Self {
        match value {
            HTTPRequestMethod::Get => reqwest::Method::GET,
            HTTPRequestMethod::Post => reqwest::Method::POST,
            HTTPRequestMethod::Put => reqwest::Method::PUT,
            HTTPRequestMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

#[derive(Debug, Display)]
pub enum RequestError {
    /// A user-scoped endpoint was hit while no session is active.
    NotAuthenticated,
}

impl std::error::Error for RequestError {}

pub(crate) trait HTTPRequestType {
    /// Type of the expected response.
    type Response: HTTPResponseType;
    /// `str` object representing the specific endpoint.
    fn endpoint(&self) -> &str;
    /// The corresponding HTTP Request Method.
    fn request_method(&self) -> HTTPRequestMethod;
    /// Additional header parameters, empty by default.
    fn header_params(&self) -> reqwest::header::HeaderMap {
        reqwest::header::HeaderMap::default()
    }
    /// Query parameters appended to the endpoint, empty by default.
    fn query_params(&self) -> Vec<(String, String)> { Vec::new() }
}

/// Serializes as `{}` for endpoints that expect a body-less JSON mutation.
#[derive(serde::Serialize, Debug)]
pub(crate) struct EmptyBody {}

pub(crate) const EMPTY_BODY: EmptyBody = EmptyBody {};

/// Request types without a body, dispatched as bare method + endpoint.
pub(crate) trait NoBodyHTTPRequestType: HTTPRequestType {
    async fn send_request(
        &self,
        client: &HTTPClient,
    ) -> Result<<Self::Response as HTTPResponseType>::ParsedResponseType, HTTPError> {
        let response = client
            .request_builder(self.request_method().into(), self.endpoint())
            .headers(self.header_params())
            .query(&self.query_params())
            .send()
            .await
            .map_err(|e| HTTPError::HTTPResponseError(ResponseError::from(e)))?;
        Self::Response::read_response(response).await.map_err(HTTPError::HTTPResponseError)
    }
}

/// Request types carrying a JSON body.
pub(crate) trait JSONBodyHTTPRequestType: HTTPRequestType {
    /// The type of the json body.
    type Body: serde::Serialize;
    /// Returns the serializable object.
    fn body(&self) -> &Self::Body;

    async fn send_request(
        &self,
        client: &HTTPClient,
    ) -> Result<<Self::Response as HTTPResponseType>::ParsedResponseType, HTTPError> {
        let response = client
            .request_builder(self.request_method().into(), self.endpoint())
            .headers(self.header_params())
            .query(&self.query_params())
            .json(self.body())
            .send()
            .await
            .map_err(|e| HTTPError::HTTPResponseError(ResponseError::from(e)))?;
        Self::Response::read_response(response).await.map_err(HTTPError::HTTPResponseError)
    }
}
