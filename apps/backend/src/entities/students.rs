use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "students")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::inscriptions::Entity")]
    Inscriptions,
}

impl Related<super::inscriptions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Inscriptions.def()
    }
}

impl Related<super::courses::Entity> for Entity {
    fn to() -> RelationDef {
        super::inscriptions::Relation::Course.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::inscriptions::Relation::Student.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
