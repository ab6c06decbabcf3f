//! SeaORM adapter for members and their one-to-one profiles.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder,
    Set,
};

use crate::entities::{members, profiles};

pub mod dto;

pub use dto::{MemberCreate, ProfileCreate};

pub async fn list_members_with_profile<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<(members::Model, Option<profiles::Model>)>, sea_orm::DbErr> {
    members::Entity::find()
        .find_also_related(profiles::Entity)
        .order_by_asc(members::Column::Id)
        .all(conn)
        .await
}

pub async fn find_member_with_profile<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    member_id: i64,
) -> Result<Option<(members::Model, Option<profiles::Model>)>, sea_orm::DbErr> {
    members::Entity::find_by_id(member_id)
        .find_also_related(profiles::Entity)
        .one(conn)
        .await
}

pub async fn member_exists<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    member_id: i64,
) -> Result<bool, sea_orm::DbErr> {
    Ok(members::Entity::find_by_id(member_id)
        .one(conn)
        .await?
        .is_some())
}

pub async fn create_member<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: MemberCreate,
) -> Result<members::Model, sea_orm::DbErr> {
    let member_active = members::ActiveModel {
        id: NotSet,
        username: Set(dto.username),
        password: Set(dto.password),
    };

    member_active.insert(conn).await
}

pub async fn find_profile_by_member<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    member_id: i64,
) -> Result<Option<profiles::Model>, sea_orm::DbErr> {
    profiles::Entity::find()
        .filter(profiles::Column::MemberId.eq(member_id))
        .one(conn)
        .await
}

/// Fails with a unique violation if the member already has a profile.
pub async fn create_profile<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: ProfileCreate,
) -> Result<profiles::Model, sea_orm::DbErr> {
    let profile_active = profiles::ActiveModel {
        id: NotSet,
        full_name: Set(dto.full_name),
        member_id: Set(dto.member_id),
    };

    profile_active.insert(conn).await
}

pub async fn delete_member<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    member_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    let res = members::Entity::delete_by_id(member_id).exec(conn).await?;
    Ok(res.rows_affected)
}
