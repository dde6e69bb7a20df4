use crate::client::{
    error::ApiError,
    service::{ApiRequest, ApiResponse},
};

/// Sends a prepared request and returns the raw response.
///
/// Implementations must not interpret the status code; [`ApiClient`](super::ApiClient) does.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError>;
}

pub use platform::HttpTransport;

#[cfg(target_arch = "wasm32")]
mod platform {
    use reqwasm::http::Request;

    use super::*;
    use crate::client::service::{FileUpload, Method, RequestBody};

    /// Browser `fetch` transport.
    #[derive(Clone, Default)]
    pub struct HttpTransport;

    fn form_data(upload: &FileUpload) -> Result<web_sys::FormData, ApiError> {
        let js_err = |e| ApiError::Request(format!("{:?}", e));

        let form = web_sys::FormData::new().map_err(js_err)?;
        let bytes = js_sys::Uint8Array::from(upload.bytes.as_slice());
        let parts = js_sys::Array::of1(&bytes);
        let options = web_sys::BlobPropertyBag::new();
        options.set_type(&upload.content_type);
        let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)
            .map_err(js_err)?;
        form.append_with_blob_and_filename(upload.field, &blob, &upload.file_name)
            .map_err(js_err)?;

        Ok(form)
    }

    impl Transport for HttpTransport {
        async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
            let url = request.url.as_str();
            let mut builder = match request.method {
                Method::Get => Request::get(url),
                Method::Post => Request::post(url),
                Method::Put => Request::put(url),
                Method::Delete => Request::delete(url),
            };

            if let Some(token) = &request.bearer {
                builder = builder.header("Authorization", &format!("Bearer {}", token));
            }

            builder = match &request.body {
                RequestBody::Empty => builder,
                RequestBody::Json(json) => builder
                    .header("Content-Type", "application/json")
                    .body(json.as_str()),
                RequestBody::File(upload) => builder.body(form_data(upload)?),
            };

            let response = builder
                .send()
                .await
                .map_err(|e| ApiError::Request(e.to_string()))?;
            let status = response.status();
            let body = response
                .text()
                .await
                .map_err(|e| ApiError::Request(e.to_string()))?;

            Ok(ApiResponse { status, body })
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod platform {
    use reqwest::{
        header::CONTENT_TYPE,
        multipart::{Form, Part},
    };

    use super::*;
    use crate::client::service::{Method, RequestBody};

    /// Native transport used by the desktop build and the tests.
    #[derive(Clone, Default)]
    pub struct HttpTransport {
        client: reqwest::Client,
    }

    impl Transport for HttpTransport {
        async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
            let method = match request.method {
                Method::Get => reqwest::Method::GET,
                Method::Post => reqwest::Method::POST,
                Method::Put => reqwest::Method::PUT,
                Method::Delete => reqwest::Method::DELETE,
            };

            let mut builder = self.client.request(method, &request.url);
            if let Some(token) = &request.bearer {
                builder = builder.bearer_auth(token);
            }

            builder = match request.body {
                RequestBody::Empty => builder,
                RequestBody::Json(json) => builder.header(CONTENT_TYPE, "application/json").body(json),
                RequestBody::File(upload) => {
                    let part = Part::bytes(upload.bytes)
                        .file_name(upload.file_name)
                        .mime_str(&upload.content_type)
                        .map_err(|e| ApiError::Request(e.to_string()))?;
                    builder.multipart(Form::new().part(upload.field, part))
                }
            };

            let response = builder
                .send()
                .await
                .map_err(|e| ApiError::Request(e.to_string()))?;
            let status = response.status().as_u16();
            let body = response
                .text()
                .await
                .map_err(|e| ApiError::Request(e.to_string()))?;

            Ok(ApiResponse { status, body })
        }
    }
}
