use super::ProjectBackend;
use crate::errors::{AppError, AppResult};
use crate::models::Project;
use reqwest::StatusCode;
use reqwest::blocking::{Client, Response};
use serde::Deserialize;

/// REST client for `{api}/projects`.
pub struct HttpBackend {
    client: Client,
    base_url: String,
}

#[derive(Deserialize)]
struct Created {
    id: i64,
}

impl HttpBackend {
    pub fn new(base_url: &str) -> AppResult<Self> {
        let client = Client::builder()
            .user_agent(concat!("projmgr/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Map non-2xx responses to errors, keeping the server's message when present.
fn check(resp: Response, id: Option<i64>) -> AppResult<Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    if status == StatusCode::NOT_FOUND
        && let Some(id) = id
    {
        return Err(AppError::ProjectNotFound(id));
    }
    let body = resp.text().unwrap_or_default();
    Err(AppError::Backend(format!("{} {}", status, body.trim())))
}

impl ProjectBackend for HttpBackend {
    fn list(&mut self) -> AppResult<Vec<Project>> {
        let resp = self.client.get(self.url("/projects")).send()?;
        let mut projects: Vec<Project> = check(resp, None)?.json()?;
        for p in &mut projects {
            p.normalize_phases();
        }
        Ok(projects)
    }

    fn create(&mut self, project: &Project) -> AppResult<i64> {
        let resp = self
            .client
            .post(self.url("/projects"))
            .json(project)
            .send()?;
        let created: Created = check(resp, None)?.json()?;
        Ok(created.id)
    }

    fn update(&mut self, id: i64, project: &Project) -> AppResult<()> {
        let resp = self
            .client
            .put(self.url(&format!("/projects/{}", id)))
            .json(project)
            .send()?;
        check(resp, Some(id))?;
        Ok(())
    }

    fn delete(&mut self, id: i64) -> AppResult<()> {
        let resp = self
            .client
            .delete(self.url(&format!("/projects/{}", id)))
            .send()?;
        check(resp, Some(id))?;
        Ok(())
    }
}
