use crate::seed::Seeder;
use db::models::course::Model as CourseModel;
use db::models::student::Model as StudentModel;
use db::models::student_course::Model as EnrollmentModel;
use rand::rngs::{OsRng, StdRng};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use sea_orm::DatabaseConnection;

pub struct EnrollmentSeeder;

#[async_trait::async_trait]
impl Seeder for EnrollmentSeeder {
    async fn seed(&self, db: &DatabaseConnection) {
        // Use a Send-compatible RNG
        let mut rng = StdRng::from_rng(OsRng).expect("Failed to seed RNG");

        let students = StudentModel::list(db, None)
            .await
            .expect("Failed to fetch students");
        let courses = CourseModel::list(db).await.expect("Failed to fetch courses");

        if courses.is_empty() {
            return;
        }

        let grades = ["A+", "A", "B+", "B", "C", "D", "F"];

        let max_per_student = courses.len().min(4);

        for student in &students {
            let count = rng.gen_range(1..=max_per_student);
            // choose_multiple keeps the (student, course) pairs distinct.
            let picked: Vec<_> = courses.choose_multiple(&mut rng, count).collect();

            for course in picked {
                let grade = if rng.gen_bool(0.7) {
                    grades.choose(&mut rng).copied()
                } else {
                    None
                };
                let _ = EnrollmentModel::enroll(db, student.id, course.id, grade).await;
            }
        }
    }
}
