use crate::client::{ClientError, EmailApi};
use crate::domain::EmailRecord;
use crate::features::users::model::CreateEmailRequest;
use async_trait::async_trait;
use reqwest::{Client, Response};

pub struct HttpEmailApi {
    client: Client,
    users_url: String,
}

impl HttpEmailApi {
    /// `api_base_url` is the prefixed API root, e.g. `http://localhost:5000/api/v1`.
    pub fn new(api_base_url: &str) -> Self {
        Self {
            client: Client::new(),
            users_url: format!("{}/users", api_base_url.trim_end_matches('/')),
        }
    }

    pub fn users_url(&self) -> &str {
        &self.users_url
    }
}

fn check_status(response: Response) -> Result<Response, ClientError> {
    if response.status().is_success() {
        Ok(response)
    } else {
        Err(ClientError::Status(response.status().as_u16()))
    }
}

#[async_trait]
impl EmailApi for HttpEmailApi {
    async fn list(&self) -> Result<Vec<EmailRecord>, ClientError> {
        let response = check_status(self.client.get(&self.users_url).send().await?)?;

        // anything but an array of records counts as a format error, not a fetch error
        let body: serde_json::Value = response.json().await?;
        if !body.is_array() {
            return Err(ClientError::InvalidFormat);
        }
        serde_json::from_value(body).map_err(|_| ClientError::InvalidFormat)
    }

    async fn create(&self, email: &str) -> Result<EmailRecord, ClientError> {
        let request = CreateEmailRequest {
            email: email.to_string(),
        };
        let response = check_status(
            self.client
                .post(&self.users_url)
                .json(&request)
                .send()
                .await?,
        )?;

        Ok(response.json().await?)
    }
}
