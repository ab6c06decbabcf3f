use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_query::{ColumnDef, ForeignKeyAction, Index, Table, TableCreateStatement};

#[derive(DeriveMigrationName)]
pub struct Migration;

// ----- Iden enums for tables & columns -----
#[derive(Iden)]
enum Users {
    Table,
    Id,
    Email,
    Password,
}

#[derive(Iden)]
enum People {
    Table,
    Id,
    Name,
    Description,
}

#[derive(Iden)]
enum Planets {
    Table,
    Id,
    Name,
    Climate,
    Terrain,
}

#[derive(Iden)]
enum Favorites {
    Table,
    Id,
    UserId,
    PlanetId,
    PeopleId,
}

#[derive(Iden)]
enum Members {
    Table,
    Id,
    Username,
    Password,
}

#[derive(Iden)]
enum Profiles {
    Table,
    Id,
    FullName,
    MemberId,
}

#[derive(Iden)]
enum Stores {
    Table,
    Id,
    Name,
}

#[derive(Iden)]
enum Products {
    Table,
    Id,
    Name,
    Price,
    StoreId,
}

#[derive(Iden)]
enum Customers {
    Table,
    Id,
    Name,
}

#[derive(Iden)]
enum Orders {
    Table,
    Id,
    Product,
    Quantity,
    CustomerId,
}

#[derive(Iden)]
enum Students {
    Table,
    Id,
    Name,
}

#[derive(Iden)]
enum Courses {
    Table,
    Id,
    Name,
}

#[derive(Iden)]
enum Inscriptions {
    Table,
    StudentId,
    CourseId,
}

fn id_col<T: Iden + 'static>(col: T) -> ColumnDef {
    ColumnDef::new(col)
        .big_integer()
        .not_null()
        .primary_key()
        .auto_increment()
        .to_owned()
}

/// Table with only `id` and a required `name` (stores, customers, students, courses).
fn named_table<T: Iden + 'static>(table: T, id: T, name: T) -> TableCreateStatement {
    Table::create()
        .table(table)
        .if_not_exists()
        .col(id_col(id))
        .col(ColumnDef::new(name).string_len(80).not_null())
        .to_owned()
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // users
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(id_col(Users::Id))
                    .col(
                        ColumnDef::new(Users::Email)
                            .string_len(120)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Users::Password).string_len(80).not_null())
                    .to_owned(),
            )
            .await?;

        // people
        manager
            .create_table(
                Table::create()
                    .table(People::Table)
                    .if_not_exists()
                    .col(id_col(People::Id))
                    .col(ColumnDef::new(People::Name).string_len(80).not_null())
                    .col(ColumnDef::new(People::Description).string_len(280).null())
                    .to_owned(),
            )
            .await?;

        // planets
        manager
            .create_table(
                Table::create()
                    .table(Planets::Table)
                    .if_not_exists()
                    .col(id_col(Planets::Id))
                    .col(ColumnDef::new(Planets::Name).string_len(80).not_null())
                    .col(ColumnDef::new(Planets::Climate).string_len(80).null())
                    .col(ColumnDef::new(Planets::Terrain).string_len(80).null())
                    .to_owned(),
            )
            .await?;

        // favorites: owned by the user, only reference people/planets
        manager
            .create_table(
                Table::create()
                    .table(Favorites::Table)
                    .if_not_exists()
                    .col(id_col(Favorites::Id))
                    .col(ColumnDef::new(Favorites::UserId).big_integer().not_null())
                    .col(ColumnDef::new(Favorites::PlanetId).big_integer().null())
                    .col(ColumnDef::new(Favorites::PeopleId).big_integer().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_favorites_user_id")
                            .from(Favorites::Table, Favorites::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_favorites_planet_id")
                            .from(Favorites::Table, Favorites::PlanetId)
                            .to(Planets::Table, Planets::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_favorites_people_id")
                            .from(Favorites::Table, Favorites::PeopleId)
                            .to(People::Table, People::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_favorites_user_id")
                    .table(Favorites::Table)
                    .col(Favorites::UserId)
                    .to_owned(),
            )
            .await?;

        // members / profiles (one-to-one)
        manager
            .create_table(
                Table::create()
                    .table(Members::Table)
                    .if_not_exists()
                    .col(id_col(Members::Id))
                    .col(ColumnDef::new(Members::Username).string_len(80).not_null())
                    .col(ColumnDef::new(Members::Password).string_len(80).not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Profiles::Table)
                    .if_not_exists()
                    .col(id_col(Profiles::Id))
                    .col(ColumnDef::new(Profiles::FullName).string_len(120).null())
                    .col(ColumnDef::new(Profiles::MemberId).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_profiles_member_id")
                            .from(Profiles::Table, Profiles::MemberId)
                            .to(Members::Table, Members::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ux_profiles_member_id")
                    .table(Profiles::Table)
                    .col(Profiles::MemberId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // stores / products (one-to-many)
        manager
            .create_table(named_table(Stores::Table, Stores::Id, Stores::Name))
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Products::Table)
                    .if_not_exists()
                    .col(id_col(Products::Id))
                    .col(ColumnDef::new(Products::Name).string_len(80).not_null())
                    .col(ColumnDef::new(Products::Price).double().not_null())
                    .col(ColumnDef::new(Products::StoreId).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_products_store_id")
                            .from(Products::Table, Products::StoreId)
                            .to(Stores::Table, Stores::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        // customers / orders (many-to-one)
        manager
            .create_table(named_table(
                Customers::Table,
                Customers::Id,
                Customers::Name,
            ))
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Orders::Table)
                    .if_not_exists()
                    .col(id_col(Orders::Id))
                    .col(ColumnDef::new(Orders::Product).string_len(80).not_null())
                    .col(ColumnDef::new(Orders::Quantity).integer().not_null())
                    .col(ColumnDef::new(Orders::CustomerId).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_orders_customer_id")
                            .from(Orders::Table, Orders::CustomerId)
                            .to(Customers::Table, Customers::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        // students / courses (many-to-many through inscriptions)
        manager
            .create_table(named_table(Students::Table, Students::Id, Students::Name))
            .await?;

        manager
            .create_table(named_table(Courses::Table, Courses::Id, Courses::Name))
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Inscriptions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Inscriptions::StudentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Inscriptions::CourseId)
                            .big_integer()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .name("pk_inscriptions")
                            .col(Inscriptions::StudentId)
                            .col(Inscriptions::CourseId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_inscriptions_student_id")
                            .from(Inscriptions::Table, Inscriptions::StudentId)
                            .to(Students::Table, Students::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_inscriptions_course_id")
                            .from(Inscriptions::Table, Inscriptions::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // children before parents
        manager
            .drop_table(Table::drop().table(Inscriptions::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Courses::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Students::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Orders::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Customers::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Products::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Stores::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Profiles::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Members::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Favorites::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Planets::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(People::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).if_exists().to_owned())
            .await?;

        Ok(())
    }
}
