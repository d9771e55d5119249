use std::collections::HashMap;

use async_trait::async_trait;
use axum::extract::FromRequest;
use axum::extract::Multipart;
use axum::extract::Request;
use axum::Form;
use http::header::CONTENT_TYPE;

use crate::inbound::http::handlers::ApiError;
use crate::upload::errors::FileStoreError;
use crate::upload::models::Upload;

/// File part of a multipart body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePart {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// Form body accepted either url-encoded or as `multipart/form-data`.
///
/// Files are only ever present in the multipart case.
#[derive(Debug, Default)]
pub struct FormData {
    fields: HashMap<String, String>,
    files: HashMap<String, FilePart>,
}

impl FormData {
    pub fn take_text(&mut self, name: &str) -> Option<String> {
        self.fields.remove(name)
    }

    /// Take a text field, treating an empty value as absent.
    pub fn take_non_empty(&mut self, name: &str) -> Option<String> {
        self.take_text(name).filter(|value| !value.is_empty())
    }

    /// Take a file part and validate it as an image.
    pub fn take_image(&mut self, name: &str) -> Result<Option<Upload>, FileStoreError> {
        self.files
            .remove(name)
            .map(|part| Upload::image(part.filename, part.bytes))
            .transpose()
    }

    async fn from_multipart(mut multipart: Multipart) -> Result<Self, ApiError> {
        let mut form = FormData::default();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| ApiError::BadRequest(e.body_text()))?
        {
            let Some(name) = field.name().map(str::to_string) else {
                continue;
            };

            match field.file_name().map(str::to_string) {
                Some(filename) => {
                    let bytes = field
                        .bytes()
                        .await
                        .map_err(|e| ApiError::BadRequest(e.body_text()))?;

                    // Browsers send an empty part when no file was picked.
                    if filename.is_empty() && bytes.is_empty() {
                        continue;
                    }

                    form.files.insert(
                        name,
                        FilePart {
                            filename,
                            bytes: bytes.to_vec(),
                        },
                    );
                }
                None => {
                    let value = field
                        .text()
                        .await
                        .map_err(|e| ApiError::BadRequest(e.body_text()))?;
                    form.fields.insert(name, value);
                }
            }
        }

        Ok(form)
    }
}

#[async_trait]
impl<S> FromRequest<S> for FormData
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_multipart = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.starts_with("multipart/form-data"));

        if is_multipart {
            let multipart = Multipart::from_request(req, state)
                .await
                .map_err(|e| ApiError::BadRequest(e.body_text()))?;
            return Self::from_multipart(multipart).await;
        }

        let Form(fields) = Form::<HashMap<String, String>>::from_request(req, state)
            .await
            .map_err(|e| ApiError::BadRequest(e.body_text()))?;

        Ok(FormData {
            fields,
            files: HashMap::new(),
        })
    }
}
