use std::{fmt, str::FromStr};

use chrono::{DateTime, Datelike, Utc};
use thiserror::Error;

pub const OWNER: &str = "Omar Ahmed";
pub const TAGLINE: &str = "Aspiring Software Engineer";
pub const EMAIL: &str = "omersalahabuzaid@gmail.com";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/omar-ahmed-9214b6186/";
pub const RESUME_PATH: &str = "/OmarAhmedResume.pdf";
pub const LOGO_PATH: &str = "/images/logo.png";
pub const AVATAR_PATH: &str = "/images/avatar.png";

/// Scrollable regions of the page, in the order they are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Story,
    Skills,
    Projects,
    Experience,
    Education,
    Honors,
    Connect,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown section: {0}")]
pub struct UnknownSection(pub String);

impl SectionId {
    pub const ALL: [SectionId; 7] = [
        SectionId::Story,
        SectionId::Skills,
        SectionId::Projects,
        SectionId::Experience,
        SectionId::Education,
        SectionId::Honors,
        SectionId::Connect,
    ];

    /// The element id used as the anchor target.
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionId::Story => "story",
            SectionId::Skills => "skills",
            SectionId::Projects => "projects",
            SectionId::Experience => "experience",
            SectionId::Education => "education",
            SectionId::Honors => "honors",
            SectionId::Connect => "connect",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionId {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct NavItem {
    pub id: SectionId,
    pub icon: &'static str,
    pub label: &'static str,
}

pub static NAV_ITEMS: &[NavItem] = &[
    NavItem {
        id: SectionId::Story,
        icon: "👤",
        label: "Story",
    },
    NavItem {
        id: SectionId::Skills,
        icon: "🧱",
        label: "Skills",
    },
    NavItem {
        id: SectionId::Projects,
        icon: "📁",
        label: "Projects",
    },
    NavItem {
        id: SectionId::Experience,
        icon: "💼",
        label: "Exp",
    },
    NavItem {
        id: SectionId::Education,
        icon: "🎓",
        label: "Education",
    },
    NavItem {
        id: SectionId::Honors,
        icon: "🏆",
        label: "Honors",
    },
    NavItem {
        id: SectionId::Connect,
        icon: "✉️",
        label: "Connect",
    },
];

/// Skill level as a percentage, always within 0..=100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Proficiency(u8);

impl Proficiency {
    pub const fn new(percent: u8) -> Self {
        if percent > 100 {
            Self(100)
        } else {
            Self(percent)
        }
    }

    pub fn percent(&self) -> u8 {
        self.0
    }

    /// Inline style for the fill bar.
    pub fn bar_style(&self) -> String {
        format!("width: {}%", self.0)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Skill {
    pub name: &'static str,
    pub proficiency: Proficiency,
}

#[derive(Debug, Clone, Copy)]
pub struct SkillGroup {
    pub title: &'static str,
    pub skills: &'static [Skill],
}

const fn skill(name: &'static str, percent: u8) -> Skill {
    Skill {
        name,
        proficiency: Proficiency::new(percent),
    }
}

pub static SKILL_GROUPS: &[SkillGroup] = &[
    SkillGroup {
        title: "Languages",
        skills: &[
            skill("Python", 90),
            skill("JavaScript", 90),
            skill("TypeScript", 80),
            skill("Java", 70),
            skill("Swift", 65),
        ],
    },
    SkillGroup {
        title: "Frontend",
        skills: &[
            skill("React", 90),
            skill("Next.js", 85),
            skill("Tailwind CSS", 85),
            skill("React Native", 75),
        ],
    },
    SkillGroup {
        title: "Backend & Cloud",
        skills: &[
            skill("Node.js", 85),
            skill("MongoDB", 80),
            skill("PostgreSQL", 70),
            skill("Docker", 70),
            skill("Google Cloud Platform", 65),
        ],
    },
];

#[derive(Debug, Clone, Copy)]
pub struct TechCategory {
    pub name: &'static str,
    pub description: &'static str,
    pub skills: &'static [&'static str],
    pub icon: &'static str,
}

pub static TECH_CATEGORIES: &[TechCategory] = &[
    TechCategory {
        name: "Programming Languages",
        description: "Core development languages",
        skills: &["Python", "JavaScript", "C++", "Java", "Kotlin", "Swift"],
        icon: "⌨️",
    },
    TechCategory {
        name: "Web Technologies",
        description: "Frontend & frameworks",
        skills: &[
            "HTML/CSS",
            "React",
            "React Native",
            "TypeScript",
            "Next.js",
            "Vue.js",
            "Tailwind CSS",
            "Node.js",
        ],
        icon: "🌐",
    },
    TechCategory {
        name: "Backend & Databases",
        description: "Server & data management",
        skills: &[
            "Express",
            "MongoDB",
            "PostgreSQL",
            "SQL",
            "Firebase",
            "Google Cloud Platform",
        ],
        icon: "🗄️",
    },
    TechCategory {
        name: "Tools & Technologies",
        description: "Development tools",
        skills: &[
            "Git/GitHub",
            "Xcode",
            "Docker",
            "Kubernetes",
            "Bash",
            "Jest",
            "MS Office Suite",
        ],
        icon: "🔧",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub image: &'static str,
    pub link: Option<&'static str>,
}

pub static PROJECTS: &[Project] = &[
    Project {
        title: "Quran Verse of the Day Website",
        description: "Developed a Quran Verse Website using Next.js, React, Chakra UI, Node.js, Express, and MongoDB. Features include random verse display, favorites, history, Tafsir (interpretation), audio recitation with multiple reciters, prayer times, and dark mode. Integrated Axios for external APIs, and supported responsive design with customizable Islamic backgrounds.",
        technologies: &["Next.js", "React", "Chakra UI", "Node.js", "Express", "MongoDB", "Axios"],
        image: "/images/quran-verse.png",
        link: Some("https://github.com/omer310/Quran-Website-"),
    },
    Project {
        title: "Manarat Al-Muslim App",
        description: "Created an Android app using React Native for prayer times, Quran, Tasbeeh, and Hadith with real-time and offline features. Integrated API services for real-time prayer times and offline access to core features such as Quran and Hadith.",
        technologies: &["React Native", "Android", "API Integration"],
        image: "/images/tasbeeh-app.png",
        link: Some("https://github.com/omer310/Tasbeeh"),
    },
    Project {
        title: "Food Assistance Form",
        description: "Revamped a food assistance application form, focusing on improving user experience and data flow. Key features include a streamlined application process.",
        technologies: &["HTML", "CSS", "JavaScript", "Firebase", "React"],
        image: "/images/food-assistance.png",
        link: Some("https://github.com/464squad/CMB-FrontEnd"),
    },
    Project {
        title: "Black Mentor Network Website",
        description: "Designed and implemented a website for the Black Mentor Network, a non-profit organization that provides mentorship to underprivileged individuals. The website was built using Next.js, Tailwind CSS, and Firebase, and it allows users to browse mentorship opportunities and apply to the ones that interest them.",
        technologies: &["HTML", "CSS", "JavaScript", "Firebase", "React", "Next.js", "Tailwind CSS"],
        image: "/images/black-mentor-network.png",
        link: Some("https://blackmentornetwork.org/"),
    },
    Project {
        title: "Live Transcription",
        description: "Turn your computer's sounds into text with this nifty app! Using Deepgram's API, it grabs your PC's audio and converts it to readable words in real-time. Watch as computer babble becomes actual sentences in a cool little window. It's tech magic made simple!",
        technologies: &["Python", "Deepgram API", "OpenAI API", "Customtkinter"],
        image: "/images/live-transcription.png",
        link: Some("https://github.com/omer310/real-time-audio-transcription"),
    },
    Project {
        title: "Set-Game iOS",
        description: "Set is a fast-paced card game of visual perception. In this iOS implementation, players identify sets of three cards where each feature is either all the same or all different.",
        technologies: &["Swift", "SwiftUI", "MVVM Architecture", "Combine"],
        image: "/images/set-game.png",
        link: Some("https://github.com/omer310/Set-Game"),
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Experience {
    pub title: &'static str,
    pub company: &'static str,
    pub date: &'static str,
    pub description: &'static str,
    pub skills: &'static [&'static str],
}

pub static EXPERIENCES: &[Experience] = &[
    Experience {
        title: "Application Manager",
        company: "Solar Stewards",
        date: "Nov 2024 - Present",
        description: "Manage and develop a performant full-stack application using Next.js and Node.js. Implement serverless functions, APIs, and maintain infrastructure using Docker and Google Cloud Platform. Optimize for scalability, implement CI/CD pipelines, and ensure high-performance, responsive user interfaces.",
        skills: &["Next.js", "Node.js", "Docker", "Google Cloud Platform", "MongoDB", "CI/CD", "Jest", "TypeScript"],
    },
    Experience {
        title: "Project Consultant",
        company: "Floreo Labs",
        date: "Aug 2024 - Nov 2024",
        description: "Led the development of a machine learning algorithm to improve compatibility between students and companies in a workforce development program. Increased accuracy from 30% to 95% by integrating factors like gender balance and programming language compatibility.",
        skills: &["Python", "Pandas", "GeoPy", "Machine Learning", "Technical Documentation"],
    },
    Experience {
        title: "Web Developer Intern",
        company: "Black Mentor Network",
        date: "Jun 2024 - Aug 2024",
        description: "Designed and developed a secure, responsive website using React and Tailwind CSS. Implemented SEO best practices and optimized the site for performance and usability.",
        skills: &["React", "Tailwind CSS", "JavaScript", "SEO", "Web Development"],
    },
    Experience {
        title: "Lab Tech Manager",
        company: "Bronx Community College",
        date: "May 2021 - Present",
        description: "Delivered technical support for macOS and Windows systems, maintained ticketing systems to track and resolve user issues, and implemented system maintenance protocols for seamless performance.",
        skills: &["macOS", "Windows", "Troubleshooting", "System Maintenance", "Ticketing Systems"],
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Milestone {
    pub year: &'static str,
    pub event: &'static str,
    pub details: &'static str,
}

pub static MILESTONES: &[Milestone] = &[
    Milestone {
        year: "2018",
        event: "Started CS in Sudan",
        details: "Began my tech journey at University of Al-Gzera in Sudan, diving into programming fundamentals.",
    },
    Milestone {
        year: "2019",
        event: "Moved to USA",
        details: "Relocated to continue education, embracing new challenges and cultural experiences.",
    },
    Milestone {
        year: "2021",
        event: "Associate's Degree",
        details: "Earned my Associate's in Computer Science, building a strong foundation in tech.",
    },
    Milestone {
        year: "2023",
        event: "Bachelor's Degree",
        details: "Completed Bachelor's in CS, mastering advanced concepts and preparing for industry.",
    },
    Milestone {
        year: "2024",
        event: "Career Launch",
        details: "Seeking opportunities to apply my skills and contribute to innovative tech projects.",
    },
];

pub const PERSPECTIVE: &str = "I've been through a wild ride with computers and software. Started in Sudan, messing with PCs, then civil war hits and I'm in the US learning English and coding at the same time. It's like fixing a broken computer: you figure it out as you go. Learning both coding and English made me better at solving problems in different ways, and the math from college changed how I see software. I rebuilt computers, rebuilt my life, and now I build software.";

#[derive(Debug, Clone, Copy)]
pub struct Education {
    pub school: &'static str,
    pub degree: &'static str,
    pub minor: Option<&'static str>,
    pub gpa: &'static str,
    pub graduated: &'static str,
    pub coursework: Option<&'static str>,
}

pub static EDUCATION: &[Education] = &[
    Education {
        school: "Lehman College",
        degree: "Bachelor of Science in Computer Science",
        minor: Some("Minor in Mathematics"),
        gpa: "3.65",
        graduated: "May 2024",
        coursework: Some("Data Structures and Algorithms, Machine Learning, Web Development"),
    },
    Education {
        school: "Bronx Community College",
        degree: "Associate Degree in Computer Science",
        minor: None,
        gpa: "3.7",
        graduated: "May 2022",
        coursework: None,
    },
];

pub static HONORS: &[&str] = &[
    "President's List",
    "Dean's List",
    "1st Place, University Hackathon 2022",
];

#[derive(Debug, Clone, Copy)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
}

pub static SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        label: "LinkedIn",
        href: LINKEDIN_URL,
        icon: "devicon-linkedin-plain",
    },
    SocialLink {
        label: "GitHub",
        href: "https://github.com/omer310",
        icon: "devicon-github-original",
    },
    SocialLink {
        label: "Twitter",
        href: "https://x.com/user_l0_0l",
        icon: "devicon-twitter-original",
    },
];

/// Year the site was built, taken from the stamp written by `build.rs`.
pub fn build_year() -> i32 {
    year_from_stamp(env!("BUILD_TIME")).unwrap_or_else(|| Utc::now().year())
}

fn year_from_stamp(stamp: &str) -> Option<i32> {
    DateTime::parse_from_rfc3339(stamp)
        .ok()
        .map(|dt| dt.with_timezone(&Utc).year())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_section_ids_unique_and_round_trip() {
        let ids: HashSet<&str> = SectionId::ALL.iter().map(|s| s.as_str()).collect();
        assert_eq!(ids.len(), SectionId::ALL.len());

        for id in SectionId::ALL {
            assert_eq!(id.as_str().parse::<SectionId>(), Ok(id));
        }
        assert_eq!(
            "blog".parse::<SectionId>(),
            Err(UnknownSection("blog".to_string()))
        );
    }

    #[test]
    fn test_nav_items_cover_every_section_in_order() {
        let nav: Vec<SectionId> = NAV_ITEMS.iter().map(|n| n.id).collect();
        assert_eq!(nav, SectionId::ALL.to_vec());
    }

    #[test]
    fn test_proficiency_clamps() {
        assert_eq!(Proficiency::new(85).percent(), 85);
        assert_eq!(Proficiency::new(0).percent(), 0);
        assert_eq!(Proficiency::new(250).percent(), 100);
        assert_eq!(Proficiency::new(42).bar_style(), "width: 42%");
    }

    #[test]
    fn test_static_lists_populated() {
        assert_eq!(TECH_CATEGORIES.len(), 4);
        assert_eq!(PROJECTS.len(), 6);
        assert_eq!(EXPERIENCES.len(), 4);
        assert_eq!(MILESTONES.len(), 5);
        assert!(SKILL_GROUPS
            .iter()
            .all(|g| !g.skills.is_empty() && g.skills.iter().all(|s| s.proficiency.percent() <= 100)));
        assert!(PROJECTS.iter().all(|p| p.link.is_some_and(|l| l.starts_with("https://"))));
        let live = PROJECTS
            .iter()
            .find(|p| p.title == "Live Transcription")
            .expect("live transcription project listed");
        assert!(live.description.ends_with("It's tech magic made simple!"));
    }

    #[test]
    fn test_build_year() {
        assert_eq!(year_from_stamp("2024-05-20T10:00:00+00:00"), Some(2024));
        assert_eq!(year_from_stamp("not a date"), None);
        assert!(build_year() >= 2024);
    }
}
