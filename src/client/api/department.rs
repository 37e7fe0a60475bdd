use crate::{
    client::model::error::ApiError,
    model::{
        api::MessageDto,
        department::{CreateDepartmentDto, DepartmentDto, UpdateDepartmentDto},
    },
};

use super::{helper::parse_response, FacultyClient};

impl FacultyClient {
    /// Get all departments
    pub async fn get_departments(&self) -> Result<Vec<DepartmentDto>, ApiError> {
        let response = self.http.get(self.url("/departments")).send().await?;
        parse_response(response).await
    }

    /// Get a department by ID
    pub async fn get_department(&self, id: i32) -> Result<DepartmentDto, ApiError> {
        let response = self
            .http
            .get(self.url(&format!("/departments/{}", id)))
            .send()
            .await?;
        parse_response(response).await
    }

    /// Create a new department
    pub async fn create_department(
        &self,
        payload: &CreateDepartmentDto,
    ) -> Result<DepartmentDto, ApiError> {
        let response = self
            .http
            .post(self.url("/departments"))
            .json(payload)
            .send()
            .await?;
        parse_response(response).await
    }

    /// Update a department
    pub async fn update_department(
        &self,
        id: i32,
        payload: &UpdateDepartmentDto,
    ) -> Result<DepartmentDto, ApiError> {
        let response = self
            .http
            .put(self.url(&format!("/departments/{}", id)))
            .json(payload)
            .send()
            .await?;
        parse_response(response).await
    }

    /// Delete a department
    pub async fn delete_department(&self, id: i32) -> Result<MessageDto, ApiError> {
        let response = self
            .http
            .delete(self.url(&format!("/departments/{}", id)))
            .send()
            .await?;
        parse_response(response).await
    }
}
