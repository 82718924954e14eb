use crate::seed::Seeder;
use db::models::course::Model as CourseModel;
use db::models::instructor::Model as InstructorModel;
use rand::rngs::{OsRng, StdRng};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use sea_orm::DatabaseConnection;

pub struct CourseSeeder;

#[async_trait::async_trait]
impl Seeder for CourseSeeder {
    async fn seed(&self, db: &DatabaseConnection) {
        // Use a Send-compatible RNG
        let mut rng = StdRng::from_rng(OsRng).expect("Failed to seed RNG");

        let instructors = InstructorModel::list(db)
            .await
            .expect("Failed to fetch instructors");

        let departments = ["CS", "MATH", "PHY", "STAT"];

        for _ in 0..12 {
            let dept = departments.choose(&mut rng).unwrap();
            let name = format!("{}{}", dept, rng.gen_range(100..500));
            let credits = rng.gen_bool(0.9).then(|| rng.gen_range(1..=4));
            // Most courses have an instructor; some are unassigned.
            let instructor_id = if rng.gen_bool(0.85) {
                instructors.choose(&mut rng).map(|i| i.id)
            } else {
                None
            };

            let _ = CourseModel::create(db, &name, credits, instructor_id).await;
        }
    }
}
