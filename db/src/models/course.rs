use sea_orm::entity::prelude::*;
use sea_orm::{DatabaseConnection, ModelTrait, Set};
use serde::Serialize;

/// Represents a course in the `courses` table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "courses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub credits: Option<i32>,
    /// Assigned instructor, if any (nullable foreign key).
    pub instructor_id: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Belongs to an instructor (optional).
    #[sea_orm(
        belongs_to = "super::instructor::Entity",
        from = "Column::InstructorId",
        to = "super::instructor::Column::Id"
    )]
    Instructor,

    /// Enrollment rows linking this course to students.
    #[sea_orm(has_many = "super::student_course::Entity")]
    StudentCourse,
}

impl Related<super::instructor::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Instructor.def()
    }
}

impl Related<super::student_course::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StudentCourse.def()
    }
}

impl Related<super::student::Entity> for Entity {
    fn to() -> RelationDef {
        super::student_course::Relation::Student.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::student_course::Relation::Course.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Inserts a new course record.
    pub async fn create(
        db: &DatabaseConnection,
        name: &str,
        credits: Option<i32>,
        instructor_id: Option<i64>,
    ) -> Result<Self, DbErr> {
        let course = ActiveModel {
            name: Set(name.to_string()),
            credits: Set(credits),
            instructor_id: Set(instructor_id),
            ..Default::default()
        };
        course.insert(db).await
    }

    /// Retrieves a course by its ID.
    pub async fn get_by_id(db: &DatabaseConnection, id: i64) -> Result<Option<Self>, DbErr> {
        Entity::find_by_id(id).one(db).await
    }

    /// Retrieves all courses in store-default order.
    pub async fn list(db: &DatabaseConnection) -> Result<Vec<Self>, DbErr> {
        Entity::find().all(db).await
    }

    /// The instructor assigned to this course, if one is set.
    pub async fn instructor(
        &self,
        db: &DatabaseConnection,
    ) -> Result<Option<super::instructor::Model>, DbErr> {
        self.find_related(super::instructor::Entity).one(db).await
    }

    /// Students enrolled in this course, in junction order.
    pub async fn students(
        &self,
        db: &DatabaseConnection,
    ) -> Result<Vec<super::student::Model>, DbErr> {
        self.find_related(super::student::Entity).all(db).await
    }
}
