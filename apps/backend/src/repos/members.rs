//! Members and their one-to-one profiles.

use sea_orm::ConnectionTrait;
use serde::{Deserialize, Serialize};

use crate::adapters::members_sea as members_adapter;
use crate::entities::{members as members_entity, profiles as profiles_entity};
use crate::errors::domain::{ConflictKind, DomainError, NotFoundKind};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: i64,
    pub full_name: Option<String>,
    pub member_id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: i64,
    pub username: String,
    pub profile: Option<Profile>,
}

pub async fn list_members<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<Member>, DomainError> {
    let rows = members_adapter::list_members_with_profile(conn).await?;
    Ok(rows.into_iter().map(Member::from).collect())
}

pub async fn find_member<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    member_id: i64,
) -> Result<Option<Member>, DomainError> {
    let row = members_adapter::find_member_with_profile(conn, member_id).await?;
    Ok(row.map(Member::from))
}

pub async fn require_member<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    member_id: i64,
) -> Result<Member, DomainError> {
    find_member(conn, member_id)
        .await?
        .ok_or_else(|| DomainError::missing(NotFoundKind::Member, member_id))
}

pub async fn create_member<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    username: &str,
    password: &str,
) -> Result<Member, DomainError> {
    let model =
        members_adapter::create_member(conn, members_adapter::MemberCreate::new(username, password))
            .await?;
    Ok(Member::from((model, None)))
}

/// Attaches the profile of `member_id`. A member has at most one profile;
/// a second attempt is `Conflict(UniqueProfile)`.
pub async fn create_profile<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    member_id: i64,
    full_name: Option<&str>,
) -> Result<Profile, DomainError> {
    if !members_adapter::member_exists(conn, member_id).await? {
        return Err(DomainError::missing(NotFoundKind::Member, member_id));
    }
    if members_adapter::find_profile_by_member(conn, member_id)
        .await?
        .is_some()
    {
        return Err(DomainError::conflict(
            ConflictKind::UniqueProfile,
            format!("Member {member_id} already has a profile"),
        ));
    }

    let model = members_adapter::create_profile(
        conn,
        members_adapter::ProfileCreate {
            member_id,
            full_name: full_name.map(str::to_string),
        },
    )
    .await?;
    Ok(Profile::from(model))
}

/// Deletes the member (profile cascades) and returns the pre-delete view.
pub async fn delete_member<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    member_id: i64,
) -> Result<Member, DomainError> {
    let member = require_member(conn, member_id).await?;
    members_adapter::delete_member(conn, member_id).await?;
    Ok(member)
}

impl From<profiles_entity::Model> for Profile {
    fn from(model: profiles_entity::Model) -> Self {
        Self {
            id: model.id,
            full_name: model.full_name,
            member_id: model.member_id,
        }
    }
}

impl From<(members_entity::Model, Option<profiles_entity::Model>)> for Member {
    fn from((member, profile): (members_entity::Model, Option<profiles_entity::Model>)) -> Self {
        Self {
            id: member.id,
            username: member.username,
            profile: profile.map(Profile::from),
        }
    }
}
