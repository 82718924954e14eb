use crate::seed::{Seeder, run_seeder};
use crate::seeds::{
    course::CourseSeeder, enrollment::EnrollmentSeeder, instructor::InstructorSeeder,
    student::StudentSeeder,
};

mod seed;
mod seeds;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let db = db::connect().await;

    // Instructors and students first; courses reference instructors and
    // enrollments reference both.
    for (seeder, name) in [
        (
            Box::new(InstructorSeeder) as Box<dyn Seeder + Send + Sync>,
            "Instructor",
        ),
        (Box::new(StudentSeeder), "Student"),
        (Box::new(CourseSeeder), "Course"),
        (Box::new(EnrollmentSeeder), "Enrollment"),
    ] {
        run_seeder(&*seeder, name, &db).await;
    }
}
