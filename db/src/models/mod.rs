pub mod course;
pub mod instructor;
pub mod student;
pub mod student_course;

pub use course::Entity as Course;
pub use instructor::Entity as Instructor;
pub use student::Entity as Student;
pub use student_course::Entity as StudentCourse;
