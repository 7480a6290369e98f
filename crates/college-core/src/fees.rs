//! Built-in fee schedule and duration multipliers
//!
//! Both tables are `&'static` data. They are read by the fee calculator, the
//! fee table on the fees page and the course selector of the application form.

/// Per-term charges for one course, in whole Kenyan shillings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CourseFees {
    pub tuition: u64,
    pub registration: u64,
    pub library: u64,
    pub exam: u64,
}

impl CourseFees {
    /// Sum of every charge for a single term.
    pub fn per_term_total(&self) -> u64 {
        self.tuition + self.registration + self.library + self.exam
    }
}

/// A named course and its fees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Course {
    pub name: &'static str,
    pub fees: CourseFees,
}

/// A named enrollment duration and how many terms it spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StudyDuration {
    pub label: &'static str,
    pub multiplier: u64,
}

const COURSES: &[Course] = &[
    Course {
        name: "Software Engineering",
        fees: CourseFees {
            tuition: 80_000,
            registration: 5_000,
            library: 3_000,
            exam: 4_000,
        },
    },
    Course {
        name: "Information Technology (IT)",
        fees: CourseFees {
            tuition: 75_000,
            registration: 5_000,
            library: 3_000,
            exam: 4_000,
        },
    },
    Course {
        name: "Computer Science",
        fees: CourseFees {
            tuition: 85_000,
            registration: 5_000,
            library: 3_000,
            exam: 4_000,
        },
    },
    Course {
        name: "Accounting",
        fees: CourseFees {
            tuition: 65_000,
            registration: 4_000,
            library: 2_500,
            exam: 3_500,
        },
    },
    Course {
        name: "Business Management",
        fees: CourseFees {
            tuition: 60_000,
            registration: 4_000,
            library: 2_500,
            exam: 3_500,
        },
    },
    Course {
        name: "Data Science",
        fees: CourseFees {
            tuition: 90_000,
            registration: 5_000,
            library: 3_500,
            exam: 4_500,
        },
    },
];

// A year is estimated as three terms.
const DURATIONS: &[StudyDuration] = &[
    StudyDuration {
        label: "Term",
        multiplier: 1,
    },
    StudyDuration {
        label: "Year",
        multiplier: 3,
    },
];

/// Read-only view over the course and duration tables.
#[derive(Debug, Clone, Copy)]
pub struct FeeSchedule {
    courses: &'static [Course],
    durations: &'static [StudyDuration],
}

impl Default for FeeSchedule {
    fn default() -> Self {
        Self::builtin()
    }
}

impl FeeSchedule {
    /// The college's published schedule.
    pub const fn builtin() -> Self {
        Self {
            courses: COURSES,
            durations: DURATIONS,
        }
    }

    /// Courses in table order.
    pub fn courses(&self) -> impl Iterator<Item = &'static Course> {
        self.courses.iter()
    }

    /// Course names in table order.
    pub fn course_names(&self) -> impl Iterator<Item = &'static str> {
        self.courses.iter().map(|c| c.name)
    }

    /// Durations in table order.
    pub fn durations(&self) -> impl Iterator<Item = &'static StudyDuration> {
        self.durations.iter()
    }

    pub fn fees_for(&self, course: &str) -> Option<&'static CourseFees> {
        self.courses
            .iter()
            .find(|c| c.name == course)
            .map(|c| &c.fees)
    }

    pub fn multiplier_for(&self, duration: &str) -> Option<u64> {
        self.durations
            .iter()
            .find(|d| d.label == duration)
            .map(|d| d.multiplier)
    }
}
