pub struct Highlight {
    pub title: &'static str,
    pub desc: &'static str,
}

pub fn highlights() -> Vec<Highlight> {
    vec![
        Highlight {
            title: "Industry-Ready Courses",
            desc: "Programmes designed with local tech and finance employers, updated every academic year.",
        },
        Highlight {
            title: "Flexible Intakes",
            desc: "Join in January, May or September and study by the term or by the full year.",
        },
        Highlight {
            title: "Hands-On Labs",
            desc: "Modern computer labs and a library open late on weekdays for every registered student.",
        },
        Highlight {
            title: "Sponsorship Partners",
            desc: "Scholarships and equipment grants from partner organizations for qualifying students.",
        },
    ]
}

pub struct AdmissionStep {
    pub step: &'static str,
    pub detail: &'static str,
}

pub fn admission_steps() -> Vec<AdmissionStep> {
    vec![
        AdmissionStep {
            step: "Estimate your fees",
            detail: "Use the fee calculator to plan for a term or a full year.",
        },
        AdmissionStep {
            step: "Apply online",
            detail: "Fill in the application form and attach your supporting documents.",
        },
        AdmissionStep {
            step: "Get a confirmation",
            detail: "You will see a confirmation straight away and can email yourself a copy.",
        },
        AdmissionStep {
            step: "Hear from admissions",
            detail: "The admissions office contacts every applicant within five working days.",
        },
    ]
}
