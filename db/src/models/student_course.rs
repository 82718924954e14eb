use sea_orm::entity::prelude::*;
use sea_orm::{DatabaseConnection, Set};
use serde::Serialize;

/// Junction table linking students to the courses they are enrolled in.
///
/// The `(student_id, course_id)` composite primary key makes an enrollment
/// unique per pair; `grade` is the relationship attribute carried alongside.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "student_courses")]
pub struct Model {
    /// Student ID (foreign key to `students`)
    #[sea_orm(primary_key, auto_increment = false)]
    pub student_id: i64,

    /// Course ID (foreign key to `courses`)
    #[sea_orm(primary_key, auto_increment = false)]
    pub course_id: i64,

    /// Letter grade, at most 5 characters (e.g. "A+", "65%").
    pub grade: Option<String>,
}

/// Defines relationships for foreign key joins.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Belongs to a student
    #[sea_orm(
        belongs_to = "super::student::Entity",
        from = "Column::StudentId",
        to = "super::student::Column::Id"
    )]
    Student,

    /// Belongs to a course
    #[sea_orm(
        belongs_to = "super::course::Entity",
        from = "Column::CourseId",
        to = "super::course::Column::Id"
    )]
    Course,
}

impl Related<super::student::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl Related<super::course::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Enrolls a student in a course, optionally with a grade.
    pub async fn enroll(
        db: &DatabaseConnection,
        student_id: i64,
        course_id: i64,
        grade: Option<&str>,
    ) -> Result<Self, DbErr> {
        let enrollment = ActiveModel {
            student_id: Set(student_id),
            course_id: Set(course_id),
            grade: Set(grade.map(|g| g.to_string())),
        };
        enrollment.insert(db).await
    }
}
