use strum_macros::Display;

pub(crate) trait JSONBodyHTTPResponseType: HTTPResponseType {
    async fn parse_json_body(
        response: reqwest::Response,
    ) -> Result<Self::ParsedResponseType, ResponseError>
    where Self::ParsedResponseType: for<'de> serde::Deserialize<'de> {
        Ok(response.json::<Self::ParsedResponseType>().await?)
    }
}

pub(crate) trait SerdeJSONBodyHTTPResponseType {}

impl<T> JSONBodyHTTPResponseType for T
where
    T: SerdeJSONBodyHTTPResponseType,
    for<'de> T: serde::Deserialize<'de>,
{
}

impl<T> HTTPResponseType for T
where
    T: SerdeJSONBodyHTTPResponseType,
    for<'de> T: serde::Deserialize<'de>,
{
    type ParsedResponseType = T;

    async fn read_response(
        response: reqwest::Response,
    ) -> Result<Self::ParsedResponseType, ResponseError> {
        let resp = Self::unwrap_return_code(response).await?;
        Self::parse_json_body(resp).await
    }
}

pub(crate) trait HTTPResponseType {
    type ParsedResponseType;
    async fn read_response(
        response: reqwest::Response,
    ) -> Result<Self::ParsedResponseType, ResponseError>;

    async fn unwrap_return_code(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, ResponseError> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else if status.is_server_error() {
            Err(ResponseError::InternalServer)
        } else if status == reqwest::StatusCode::UNAUTHORIZED
            || status == reqwest::StatusCode::FORBIDDEN
        {
            Err(ResponseError::Unauthorized)
        } else if status == reqwest::StatusCode::NOT_FOUND {
            Err(ResponseError::NotFound)
        } else if status.is_client_error() {
            Err(ResponseError::BadRequest(response.json().await.unwrap_or_default()))
        } else {
            Err(ResponseError::Unknown)
        }
    }
}

/// Error body the backend attaches to rejected requests.
#[derive(Debug, Default, serde::Deserialize)]
pub struct BadRequestReturn {
    message: Option<String>,
    errors: Option<Vec<BadRequestDetail>>,
}

impl BadRequestReturn {
    pub fn message(&self) -> Option<&str> { self.message.as_deref() }
}

#[derive(Debug, serde::Deserialize)]
struct BadRequestDetail {
    field: Option<String>,
    msg: String,
}

#[derive(Debug, Display)]
pub enum ResponseError {
    InternalServer,
    BadRequest(BadRequestReturn),
    Unauthorized,
    NotFound,
    NoConnection,
    Unknown,
}

impl std::error::Error for ResponseError {}
impl From<reqwest::Error> for ResponseError {
    fn from(value: reqwest::Error) -> Self {
        if value.is_request() {
            ResponseError::BadRequest(BadRequestReturn::default())
        } else if value.is_timeout() || value.is_redirect() {
            ResponseError::InternalServer
        } else if value.is_connect() {
            ResponseError::NoConnection
        } else {
            ResponseError::Unknown
        }
    }
}
