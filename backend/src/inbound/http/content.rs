//! Read-only portfolio content endpoints.
//!
//! ```text
//! GET /
//! GET /profile
//! GET /skills
//! GET /projects
//! GET /timeline
//! ```

use actix_web::{get, web};

use crate::domain::{Banner, Profile, ShowcaseProject, Skill, TimelineEntry};
use crate::inbound::http::schemas::{
    BannerSchema, ProfileSchema, ShowcaseProjectSchema, SkillSchema, TimelineEntrySchema,
};
use crate::inbound::http::state::HttpState;

/// Service banner.
#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Service banner", body = BannerSchema)),
    tags = ["content"],
    operation_id = "banner"
)]
#[get("/")]
pub async fn banner(state: web::Data<HttpState>) -> web::Json<Banner> {
    web::Json(state.content.banner())
}

/// Owner profile card.
#[utoipa::path(
    get,
    path = "/profile",
    responses((status = 200, description = "Profile", body = ProfileSchema)),
    tags = ["content"],
    operation_id = "getProfile"
)]
#[get("/profile")]
pub async fn get_profile(state: web::Data<HttpState>) -> web::Json<Profile> {
    web::Json(state.content.profile().clone())
}

/// Skill list.
#[utoipa::path(
    get,
    path = "/skills",
    responses((status = 200, description = "Skills", body = [SkillSchema])),
    tags = ["content"],
    operation_id = "getSkills"
)]
#[get("/skills")]
pub async fn get_skills(state: web::Data<HttpState>) -> web::Json<Vec<Skill>> {
    web::Json(state.content.skills().to_vec())
}

/// Showcase projects.
#[utoipa::path(
    get,
    path = "/projects",
    responses((status = 200, description = "Showcase projects", body = [ShowcaseProjectSchema])),
    tags = ["content"],
    operation_id = "getProjects"
)]
#[get("/projects")]
pub async fn get_projects(state: web::Data<HttpState>) -> web::Json<Vec<ShowcaseProject>> {
    web::Json(state.content.projects().to_vec())
}

/// Timeline, newest year first.
#[utoipa::path(
    get,
    path = "/timeline",
    responses((status = 200, description = "Timeline", body = [TimelineEntrySchema])),
    tags = ["content"],
    operation_id = "getTimeline"
)]
#[get("/timeline")]
pub async fn get_timeline(state: web::Data<HttpState>) -> web::Json<Vec<TimelineEntry>> {
    web::Json(state.content.timeline().to_vec())
}
