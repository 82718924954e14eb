pub mod m202601120001_create_students;
pub mod m202601120002_create_instructors;
pub mod m202601120003_create_courses;
pub mod m202601120004_create_student_courses;
