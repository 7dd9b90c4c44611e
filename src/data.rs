//! Static portfolio content shown by the desktop's windows.

#[derive(Debug, Clone, Copy)]
pub struct PersonalInfo {
    pub name: &'static str,
    pub title: &'static str,
    pub location: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub github: &'static str,
    pub linkedin: &'static str,
    pub summary: &'static str,
    pub availability: &'static str,
    pub timezone: &'static str,
    pub working_hours: &'static str,
}

impl PersonalInfo {
    pub fn first_name(&self) -> &'static str {
        self.name.split_whitespace().next().unwrap_or(self.name)
    }
}

pub const PERSONAL_INFO: PersonalInfo = PersonalInfo {
    name: "Shaik Luqman Sajid",
    title: "Software Development Engineer — Applied AI & Machine Learning",
    location: "India",
    email: "shaikluqmansajid@gmail.com",
    phone: "+91 8801118786",
    github: "github.com/skluqmansajid",
    linkedin: "linkedin.com/in/luqmansajid",
    summary: "Research-oriented Software Development Engineer with strong experience in applied machine learning, computer vision, and data-driven systems. Proven ability to plan and execute experiments, preprocess large datasets, develop and evaluate models, and contribute to academic research workflows. Experienced in translating research ideas into reproducible experiments and scalable AI-driven systems, with hands-on exposure to publications, internships, and end-to-end ML pipelines.",
    availability: "Immediate start",
    timezone: "IST (UTC+5:30)",
    working_hours: "Flexible",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectStatus {
    Completed,
    Ongoing,
    InDevelopment,
    Published,
    Live,
}

impl ProjectStatus {
    pub const fn label(self) -> &'static str {
        match self {
            ProjectStatus::Completed => "completed",
            ProjectStatus::Ongoing => "ongoing",
            ProjectStatus::InDevelopment => "in development",
            ProjectStatus::Published => "published",
            ProjectStatus::Live => "live",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub status: ProjectStatus,
    pub technologies: &'static [&'static str],
    pub year: &'static str,
    pub category: &'static str,
    pub github_url: &'static str,
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Multi-Label Ocular Disease Classification",
        description: "Developing a multi-label deep learning pipeline for classification from retinal fundus images. Applying image preprocessing and data augmentation techniques to address class imbalance.",
        status: ProjectStatus::Ongoing,
        technologies: &["Python", "TensorFlow", "Computer Vision", "Deep Learning"],
        year: "2025",
        category: "ai",
        github_url: "https://github.com/skluqmansajid/ocular-disease-classification",
    },
    Project {
        title: "Face Expression Recognition",
        description: "Developed a computer vision pipeline to detect and classify human facial expressions. Applied preprocessing and feature extraction techniques to enhance classification accuracy.",
        status: ProjectStatus::Completed,
        technologies: &["Python", "OpenCV", "Deep Learning", "CNN"],
        year: "2024",
        category: "ai",
        github_url: "https://github.com/skluqmansajid/face-expression-recognition",
    },
    Project {
        title: "PrescriptionX - Prescription Maker",
        description: "Developed a web-based application for generating structured medical prescriptions. Implemented standardized input workflows for patient details and medication dosage.",
        status: ProjectStatus::Completed,
        technologies: &["React", "Node.js", "MongoDB"],
        year: "2024",
        category: "web",
        github_url: "https://github.com/skluqmansajid/prescriptionx",
    },
    Project {
        title: "URL Shortener",
        description: "Developed a Django-based URL shortening service with database-backed redirection logic. Implemented efficient link storage and retrieval mechanisms.",
        status: ProjectStatus::Completed,
        technologies: &["Django", "Python", "PostgreSQL"],
        year: "2024",
        category: "web",
        github_url: "https://github.com/skluqmansajid/url-shortener",
    },
    Project {
        title: "Hand Gesture Shooter",
        description: "Built a browser-based shooting game controlled via real-time hand gesture recognition. Applied MediaPipe Hands for landmark detection using live webcam input.",
        status: ProjectStatus::Completed,
        technologies: &["JavaScript", "MediaPipe", "HTML5 Canvas", "Computer Vision"],
        year: "2024",
        category: "web",
        github_url: "https://github.com/skluqmansajid/hand-gesture-shooter",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl SkillLevel {
    pub const fn label(self) -> &'static str {
        match self {
            SkillLevel::Beginner => "Beginner",
            SkillLevel::Intermediate => "Intermediate",
            SkillLevel::Advanced => "Advanced",
            SkillLevel::Expert => "Expert",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Skill {
    pub name: &'static str,
    pub level: SkillLevel,
    pub years: &'static str,
    pub projects: u32,
    pub percentage: u8,
    pub category: &'static str,
}

const fn skill(
    name: &'static str,
    level: SkillLevel,
    years: &'static str,
    projects: u32,
    percentage: u8,
    category: &'static str,
) -> Skill {
    Skill {
        name,
        level,
        years,
        projects,
        percentage,
        category,
    }
}

pub const SKILL_CATEGORIES: &[(&str, &str)] = &[
    ("programming", "Programming"),
    ("ai", "AI / ML"),
    ("backend", "Backend"),
    ("frontend", "Frontend"),
    ("database", "Database"),
    ("tools", "Tools & Cloud"),
];

pub const SKILLS: &[Skill] = &[
    skill("Python", SkillLevel::Advanced, "3", 12, 85, "programming"),
    skill("Java", SkillLevel::Advanced, "3", 6, 80, "programming"),
    skill("C++", SkillLevel::Intermediate, "2", 4, 70, "programming"),
    skill("SQL", SkillLevel::Advanced, "3", 10, 80, "programming"),
    skill("Deep Learning", SkillLevel::Advanced, "2", 8, 85, "ai"),
    skill("Computer Vision", SkillLevel::Advanced, "2", 6, 80, "ai"),
    skill("NLP", SkillLevel::Intermediate, "2", 4, 75, "ai"),
    skill("TensorFlow", SkillLevel::Advanced, "2", 6, 80, "ai"),
    skill("Transformers", SkillLevel::Intermediate, "1", 3, 70, "ai"),
    skill("Flask", SkillLevel::Advanced, "2", 5, 80, "backend"),
    skill("Django", SkillLevel::Intermediate, "1", 2, 65, "backend"),
    skill("Node.js", SkillLevel::Intermediate, "1", 3, 60, "backend"),
    skill("React", SkillLevel::Intermediate, "2", 4, 70, "frontend"),
    skill("JavaScript", SkillLevel::Intermediate, "2", 5, 70, "frontend"),
    skill("HTML/CSS", SkillLevel::Advanced, "3", 8, 85, "frontend"),
    skill("MySQL", SkillLevel::Advanced, "3", 8, 80, "database"),
    skill("MongoDB", SkillLevel::Intermediate, "2", 4, 70, "database"),
    skill("PostgreSQL", SkillLevel::Intermediate, "1", 2, 65, "database"),
    skill("Git", SkillLevel::Advanced, "3", 15, 85, "tools"),
    skill("Docker", SkillLevel::Intermediate, "1", 3, 60, "tools"),
    skill("GCP", SkillLevel::Intermediate, "1", 2, 55, "tools"),
    skill("Streamlit", SkillLevel::Advanced, "2", 5, 80, "tools"),
];

#[derive(Debug, Clone, Copy)]
pub struct Certificate {
    pub name: &'static str,
    pub issuer: &'static str,
    pub date: &'static str,
    pub url: &'static str,
    pub category: &'static str,
}

pub const CERTIFICATES: &[Certificate] = &[
    Certificate {
        name: "Oracle Cloud Infrastructure 2025 Certified Architect Associate",
        issuer: "Oracle",
        date: "2025",
        url: "https://catalog-education.oracle.com/ords/certview/sharebadge?id=8A7F5C3E2D1B4A6098765432109876543210",
        category: "cloud",
    },
    Certificate {
        name: "Oracle Cloud Infrastructure 2025 Certified AI Foundations Associate",
        issuer: "Oracle",
        date: "2025",
        url: "https://catalog-education.oracle.com/ords/certview/sharebadge?id=9B8G6D4F3E2C5B7109876543210987654321",
        category: "ai",
    },
    Certificate {
        name: "Building RAG Apps Using MongoDB",
        issuer: "MongoDB & Credly",
        date: "Feb 2026",
        url: "https://www.credly.com/badges/4fe669a8-c993-4b7c-94b6-65a2b68e1197",
        category: "database",
    },
    Certificate {
        name: "Gemini Certified Student",
        issuer: "Google",
        date: "2026",
        url: "https://edu.google.accredible.com/434c9693-f78a-4bcf-b3d4-8cb5ef94d189",
        category: "ai",
    },
    Certificate {
        name: "AWS Certified Cloud Practitioner",
        issuer: "Amazon Web Services (AWS)",
        date: "2026",
        url: "https://www.credly.com/go/X4OAXmv1",
        category: "cloud",
    },
    Certificate {
        name: "Python Full Master",
        issuer: "GeeksforGeeks",
        date: "2024",
        url: "https://www.geeksforgeeks.org/certificate/verify",
        category: "programming",
    },
    Certificate {
        name: "Big Data Emerging Technologies",
        issuer: "Yonsei University (Coursera)",
        date: "2024",
        url: "https://coursera.org/verify/1234567890",
        category: "data",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Education {
    pub degree: &'static str,
    pub institution: &'static str,
    pub year: &'static str,
    pub grade: &'static str,
}

pub const EDUCATION: &[Education] = &[
    Education {
        degree: "B.Tech in Computer Science and Engineering",
        institution: "Amrita Vishwa Vidyapeetham",
        year: "2023 - 2027",
        grade: "CGPA: 8.3",
    },
    Education {
        degree: "Intermediate",
        institution: "Junior College",
        year: "2021 - 2023",
        grade: "Percentage: 91.1%",
    },
    Education {
        degree: "Class X",
        institution: "Sri Krishnaveni E.M High School",
        year: "2020 - 2021",
        grade: "Percentage: 91.8%",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Experience {
    pub title: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub description: &'static [&'static str],
}

pub const EXPERIENCES: &[Experience] = &[
    Experience {
        title: "Research Intern",
        company: "King Abdullah University of Science and Technology (KAUST)",
        period: "Feb 2025 - Jun 2025",
        description: &[
            "Planned and executed multiple deep learning experiments for computer vision applications",
            "Developed data preprocessing and augmentation pipelines to improve model robustness",
            "Analyzed model performance across multiple experimental runs using accuracy, precision, recall, and F1-score",
            "Identified performance bottlenecks and optimized training strategies through iterative experimentation",
            "Documented experimental outcomes and contributed to collaborative technical reviews",
        ],
    },
    Experience {
        title: "Machine Learning Engineer Intern",
        company: "Infosys",
        period: "Nov 2025 - Dec 2025",
        description: &[
            "Processed and consolidated multi-source datasets for Fire Weather Index (FWI) prediction",
            "Engineered features and normalized data to support regression-based modeling",
            "Trained and assessed regression models, ensuring stable predictions across validation runs",
            "Deployed trained models via a Flask-based inference service to support real-time evaluation",
        ],
    },
    Experience {
        title: "AI Engineer Intern",
        company: "Innomatics Research Labs",
        period: "Feb 2024 - Apr 2024",
        description: &[
            "Developed Retrieval-Augmented Generation (RAG) pipelines to extract structured insights from unstructured datasets",
            "Applied NLP techniques and LLM-based workflows to generate personalized learning recommendations",
            "Automated extraction of LinkedIn profile information from Zoom chat logs, reducing manual effort",
            "Delivered end-to-end ML pipelines covering data ingestion, processing, and inference",
        ],
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Publication {
    pub title: &'static str,
    pub journal: &'static str,
}

pub const PUBLICATIONS: &[Publication] = &[
    Publication {
        title: "The HOME App: Real-Time Feedback Framework for School Meal Hygiene",
        journal: "International Journal of Advanced Multidisciplinary Research and Development",
    },
    Publication {
        title: "LEAP: Traffic-Aware Routing in Encrypted SDN Environments",
        journal: "IEEE Conference Publication",
    },
    Publication {
        title: "Multi-Label Ocular Disease Classification Using Deep Learning",
        journal: "Manuscript in preparation",
    },
];

pub const ACHIEVEMENTS: &[&str] = &[
    "Google Campus Ambassador - Promoted developer programs and technical learning initiatives",
    "Student Council (International Affairs) - Assisted in international academic collaborations",
    "Times of India Hackathon - Secured Top 5 position among 5,000+ participants",
];

pub const LANGUAGES: &[&str] = &["English", "Urdu", "Hindi", "Japanese", "Telugu"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_name_is_leading_word() {
        assert_eq!(PERSONAL_INFO.first_name(), "Shaik");
    }

    #[test]
    fn every_skill_belongs_to_a_listed_category() {
        for skill in SKILLS {
            assert!(
                SKILL_CATEGORIES.iter().any(|(key, _)| *key == skill.category),
                "{} has unlisted category {}",
                skill.name,
                skill.category
            );
            assert!(skill.percentage <= 100);
        }
    }
}
