//! Static career reference tables. These are curated data, not computed:
//! career → applicable degrees, career → skill keywords, degree → entrance
//! exam, career → recommended MOOCs.

/// Every career with a degree mapping, in presentation order.
pub fn careers() -> &'static [&'static str] {
    &[
        "Data Analyst",
        "Software Developer",
        "AI/ML Engineer",
        "Business Analyst",
        "Graphic Designer",
        "Doctor (MBBS)",
        "Dentist (BDS)",
        "Nurse",
        "Architect",
    ]
}

pub fn degrees_for(career: &str) -> &'static [&'static str] {
    match career {
        "Data Analyst" => &["B.Sc", "BCA", "B.Com"],
        "Software Developer" => &["BCA", "B.Sc", "B.Tech", "BE"],
        "AI/ML Engineer" => &["B.Tech", "BE", "B.Sc"],
        "Business Analyst" => &["B.Com", "BBA", "B.Sc"],
        "Graphic Designer" => &["BA", "Arts"],
        "Doctor (MBBS)" => &["MBBS"],
        "Dentist (BDS)" => &["BDS"],
        "Nurse" => &["B.Sc. Nursing"],
        "Architect" => &["B.Arch"],
        _ => &[],
    }
}

pub fn keywords_for(career: &str) -> &'static [&'static str] {
    match career {
        "Data Analyst" => &["data", "statistics", "analytics", "python"],
        "Software Developer" => &["programming", "software", "computer"],
        "AI/ML Engineer" => &["ai", "ml", "machine", "data"],
        "Business Analyst" => &["finance", "business", "analytics"],
        "Graphic Designer" => &["design", "art", "media"],
        "Doctor (MBBS)" => &["medicine", "clinical", "biology"],
        "Dentist (BDS)" => &["dental", "oral"],
        "Nurse" => &["nursing", "health"],
        "Architect" => &["architecture", "design"],
        _ => &[],
    }
}

/// (exam name, reference URL) for a degree, when an entrance route is known.
pub fn entrance_for(degree: &str) -> Option<(&'static str, &'static str)> {
    match degree {
        "BA" | "B.Sc" | "B.Com" => {
            Some(("CUET-UG (where applicable)", "https://cuet.nta.nic.in/"))
        }
        "BBA" | "BCA" => Some(("CUET-UG / Univ process", "https://cuet.nta.nic.in/")),
        "B.Tech" | "BE" => Some(("JEE Main", "https://jeemain.nta.nic.in/")),
        "MBBS" | "BDS" => Some(("NEET-UG", "https://neet.nta.nic.in/")),
        "B.Arch" => Some(("JEE Main (Paper 2) / NATA (varies)", "https://jeemain.nta.nic.in/")),
        "B.Sc. Nursing" => Some(("University/State process", "")),
        _ => None,
    }
}

/// (title, platform, reference URL) triples of recommended online courses.
pub fn moocs_for(career: &str) -> &'static [(&'static str, &'static str, &'static str)] {
    match career {
        "Data Analyst" => &[
            (
                "Python for Data Science",
                "NPTEL/SWAYAM",
                "https://onlinecourses.nptel.ac.in/",
            ),
            (
                "Statistics for Data Analysis",
                "SWAYAM",
                "https://swayam.gov.in/",
            ),
        ],
        "Software Developer" => &[
            (
                "Data Structures & Algorithms",
                "NPTEL",
                "https://onlinecourses.nptel.ac.in/",
            ),
            ("Databases / SQL", "SWAYAM", "https://swayam.gov.in/"),
        ],
        "AI/ML Engineer" => &[(
            "Intro to Machine Learning",
            "NPTEL",
            "https://onlinecourses.nptel.ac.in/",
        )],
        "Business Analyst" => &[
            ("Financial Accounting", "SWAYAM", "https://swayam.gov.in/"),
            ("Business Analytics", "SWAYAM", "https://swayam.gov.in/"),
        ],
        "Graphic Designer" => &[(
            "Design Basics / Visual Communication",
            "SWAYAM",
            "https://swayam.gov.in/",
        )],
        "Doctor (MBBS)" => &[(
            "Human Physiology Basics",
            "SWAYAM",
            "https://swayam.gov.in/",
        )],
        "Dentist (BDS)" => &[(
            "Oral Biology Foundations",
            "SWAYAM",
            "https://swayam.gov.in/",
        )],
        "Nurse" => &[("Foundations of Nursing", "SWAYAM", "https://swayam.gov.in/")],
        "Architect" => &[("Architectural Graphics", "SWAYAM", "https://swayam.gov.in/")],
        _ => &[],
    }
}
