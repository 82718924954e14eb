use chrono::NaiveDate;
use sea_orm::entity::prelude::*;
use sea_orm::{DatabaseConnection, Set};
use serde::Serialize;

/// Represents an instructor in the `instructors` table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "instructors")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub hire_date: Option<NaiveDate>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Courses taught by this instructor.
    #[sea_orm(has_many = "super::course::Entity")]
    Course,
}

impl Related<super::course::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Inserts a new instructor record.
    pub async fn create(
        db: &DatabaseConnection,
        first_name: &str,
        last_name: &str,
        hire_date: Option<NaiveDate>,
    ) -> Result<Self, DbErr> {
        let instructor = ActiveModel {
            first_name: Set(first_name.to_string()),
            last_name: Set(last_name.to_string()),
            hire_date: Set(hire_date),
            ..Default::default()
        };
        instructor.insert(db).await
    }

    /// Retrieves all instructors in store-default order.
    pub async fn list(db: &DatabaseConnection) -> Result<Vec<Self>, DbErr> {
        Entity::find().all(db).await
    }
}
