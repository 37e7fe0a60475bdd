use crate::{
    client::model::error::ApiError,
    model::{
        api::MessageDto,
        statistics::TeacherStatisticsDto,
        teacher::{CreateTeacherDto, TeacherDto, UpdateTeacherDto},
    },
};

use super::{helper::parse_response, FacultyClient};

impl FacultyClient {
    /// Get all teachers
    pub async fn get_teachers(&self) -> Result<Vec<TeacherDto>, ApiError> {
        let response = self.http.get(self.url("/teachers")).send().await?;
        parse_response(response).await
    }

    /// Get a teacher by generated ID or staff code (e.g. `"GV001"`)
    pub async fn get_teacher(&self, key: &str) -> Result<TeacherDto, ApiError> {
        let response = self
            .http
            .get(self.url(&format!("/teachers/{}", key)))
            .send()
            .await?;
        parse_response(response).await
    }

    /// Create a new teacher
    pub async fn create_teacher(
        &self,
        payload: &CreateTeacherDto,
    ) -> Result<TeacherDto, ApiError> {
        let response = self
            .http
            .post(self.url("/teachers"))
            .json(payload)
            .send()
            .await?;
        parse_response(response).await
    }

    /// Update a teacher by generated ID or staff code
    pub async fn update_teacher(
        &self,
        key: &str,
        payload: &UpdateTeacherDto,
    ) -> Result<TeacherDto, ApiError> {
        let response = self
            .http
            .put(self.url(&format!("/teachers/{}", key)))
            .json(payload)
            .send()
            .await?;
        parse_response(response).await
    }

    /// Delete a teacher by generated ID or staff code
    pub async fn delete_teacher(&self, key: &str) -> Result<MessageDto, ApiError> {
        let response = self
            .http
            .delete(self.url(&format!("/teachers/{}", key)))
            .send()
            .await?;
        parse_response(response).await
    }

    /// Get aggregated teacher statistics
    pub async fn get_teacher_statistics(&self) -> Result<TeacherStatisticsDto, ApiError> {
        let response = self
            .http
            .get(self.url("/teachers/statistics"))
            .send()
            .await?;
        parse_response(response).await
    }
}
