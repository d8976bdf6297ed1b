use crate::profile::{Occupation, OccupationKind, Profile};

/// Appended to the school year, e.g. `大學3年級`.
pub const YEAR_SUFFIX: &str = "年級";

/// The one-line occupation shown under the name on the card.
///
/// Students are described by education level and year. Workers by their position, or
/// by the generic worker label when no position was entered. Only the details of the
/// active [`OccupationKind`] are read.
pub fn describe_occupation(profile: &Profile) -> String {
    match profile.occupation() {
        Occupation::Student(details) => format!(
            "{}{}{YEAR_SUFFIX}",
            details.education_level(),
            details.year()
        ),
        Occupation::Worker(job) if job.position().is_empty() => OccupationKind::Worker.to_string(),
        Occupation::Worker(job) => job.position().clone(),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::profile::{EducationLevel, Year};

    fn student(level: EducationLevel, year: i32) -> Profile {
        let mut profile = Profile::new();
        profile.student.education_level = level;
        profile.student.year = Year::new(year);
        profile
    }

    fn worker(position: &str) -> Profile {
        let mut profile = Profile::new();
        profile.occupation_kind = OccupationKind::Worker;
        profile.job.position = position.into();
        profile
    }

    #[test]
    fn test_student() {
        assert_eq!(describe_occupation(&Profile::new()), "大學1年級");
        assert_eq!(
            describe_occupation(&student(EducationLevel::Undergraduate, 3)),
            "大學3年級"
        );
        assert_eq!(
            describe_occupation(&student(EducationLevel::Master, 2)),
            "碩士2年級"
        );
        assert_eq!(
            describe_occupation(&student(EducationLevel::Phd, 6)),
            "博士6年級"
        );
    }

    #[test]
    fn test_student_ignores_job() {
        let mut profile = student(EducationLevel::Master, 1);
        profile.job.position = "Barista".into();

        assert_eq!(describe_occupation(&profile), "碩士1年級");
    }

    #[test]
    fn test_worker_with_position() {
        assert_eq!(describe_occupation(&worker("Data Engineer")), "Data Engineer");
        // Whitespace is a position like any other
        assert_eq!(describe_occupation(&worker(" ")), " ");
    }

    #[test]
    fn test_worker_without_position() {
        assert_eq!(describe_occupation(&worker("")), "上班族");
    }

    #[test]
    fn test_worker_ignores_student() {
        let mut profile = worker("Designer");
        profile.student.education_level = EducationLevel::Phd;
        profile.student.year = Year::new(4);

        assert_eq!(describe_occupation(&profile), "Designer");
    }
}
