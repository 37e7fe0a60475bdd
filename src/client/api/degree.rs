use crate::{
    client::model::error::ApiError,
    model::{
        api::MessageDto,
        degree::{CreateDegreeDto, DegreeDto, UpdateDegreeDto},
    },
};

use super::{helper::parse_response, FacultyClient};

impl FacultyClient {
    /// Get all degrees
    pub async fn get_degrees(&self) -> Result<Vec<DegreeDto>, ApiError> {
        let response = self.http.get(self.url("/degrees")).send().await?;
        parse_response(response).await
    }

    /// Get a degree by ID
    pub async fn get_degree(&self, id: i32) -> Result<DegreeDto, ApiError> {
        let response = self
            .http
            .get(self.url(&format!("/degrees/{}", id)))
            .send()
            .await?;
        parse_response(response).await
    }

    /// Create a new degree
    pub async fn create_degree(&self, payload: &CreateDegreeDto) -> Result<DegreeDto, ApiError> {
        let response = self
            .http
            .post(self.url("/degrees"))
            .json(payload)
            .send()
            .await?;
        parse_response(response).await
    }

    /// Update a degree
    pub async fn update_degree(
        &self,
        id: i32,
        payload: &UpdateDegreeDto,
    ) -> Result<DegreeDto, ApiError> {
        let response = self
            .http
            .put(self.url(&format!("/degrees/{}", id)))
            .json(payload)
            .send()
            .await?;
        parse_response(response).await
    }

    /// Delete a degree
    pub async fn delete_degree(&self, id: i32) -> Result<MessageDto, ApiError> {
        let response = self
            .http
            .delete(self.url(&format!("/degrees/{}", id)))
            .send()
            .await?;
        parse_response(response).await
    }
}
