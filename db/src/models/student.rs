use sea_orm::entity::prelude::*;
use sea_orm::{DatabaseConnection, QueryOrder, Set};
use serde::Serialize;
use strum::{Display, EnumString};

/// Represents a student in the `students` table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "students")]
pub struct Model {
    /// Primary key ID (auto-incremented).
    #[sea_orm(primary_key)]
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    /// Year of study, if recorded.
    pub year: Option<i32>,
    /// Grade point average, if recorded.
    pub gpa: Option<f64>,
}

/// Closed set of columns a student listing may be ordered by.
///
/// The wire value (e.g. `?order=last_name`) is parsed into this enum before
/// any query is built, so an arbitrary string can never reach an ORDER BY
/// clause. Unknown keys fail to parse and are rejected by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum SortKey {
    FirstName,
    LastName,
    Year,
    Gpa,
}

impl SortKey {
    /// Maps the sort key to its entity column.
    fn column(self) -> Column {
        match self {
            SortKey::FirstName => Column::FirstName,
            SortKey::LastName => Column::LastName,
            SortKey::Year => Column::Year,
            SortKey::Gpa => Column::Gpa,
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Enrollment rows linking this student to courses.
    #[sea_orm(has_many = "super::student_course::Entity")]
    StudentCourse,
}

impl Related<super::student_course::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StudentCourse.def()
    }
}

impl Related<super::course::Entity> for Entity {
    fn to() -> RelationDef {
        super::student_course::Relation::Course.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::student_course::Relation::Student.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Inserts a new student record.
    pub async fn create(
        db: &DatabaseConnection,
        first_name: &str,
        last_name: &str,
        year: Option<i32>,
        gpa: Option<f64>,
    ) -> Result<Self, DbErr> {
        let student = ActiveModel {
            first_name: Set(first_name.to_string()),
            last_name: Set(last_name.to_string()),
            year: Set(year),
            gpa: Set(gpa),
            ..Default::default()
        };
        student.insert(db).await
    }

    /// Retrieves all students, optionally ordered.
    ///
    /// - `None` leaves the ordering to the store (no ORDER BY).
    /// - `Some(SortKey::Gpa)` orders by GPA descending.
    /// - Any other key orders ascending by that column.
    pub async fn list(
        db: &DatabaseConnection,
        order: Option<SortKey>,
    ) -> Result<Vec<Self>, DbErr> {
        let mut query = Entity::find();

        match order {
            Some(SortKey::Gpa) => query = query.order_by_desc(Column::Gpa),
            Some(key) => query = query.order_by_asc(key.column()),
            None => {}
        }

        query.all(db).await
    }
}
