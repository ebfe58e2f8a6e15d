pub const OWNER_NAME: &str = "Shreyash Patil";
pub const GREETING: &str = "Hello, It's";
pub const GITHUB_PROFILE: &str = "https://github.com/Shreyash-SP80";
pub const RESUME_PATH: &str = "/Resume/Shreyash Resume updated.pdf";

pub const LOGO_PATH: &str = "/logo/Mylogo.jpg";
pub const SPLASH_TITLE: &str = "Shreyash's Portfolio";
pub const SPLASH_CAPTION: &str = "\u{1F6E0}\u{FE0F} Explore My Work...\u{1F6E0}\u{FE0F}";
pub const LOADER_COLOURS: [&str; 4] = ["#32cd32", "#327fcd", "#cd32cd", "#cd8032"];

pub const HERO_PHRASES: &[&str] = &[
    "Fullstack Developer \u{1F4BB}",
    "Creative Problem Solver \u{1F9E0}",
    "Tech Explorer \u{1F310}",
    "Solving Realworld Problems \u{1F680}",
];

pub const PROFILE_IMAGE: &str = "/MyImage/My.png";
pub const SCROLL_HINT: &str = "Scroll down";

pub const ORBIT_WORDS: &[(&str, &str)] = &[
    ("MERN", "#6366F1"),
    ("Algorithms", "#0EA5E9"),
    ("Data Structures", "#A855F7"),
    ("Projects", "#3B82F6"),
    ("Aptitude", "#EC4899"),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TextRun {
    pub text: &'static str,
    pub accent: Option<Accent>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Accent {
    Blue,
    Purple,
    Pink,
    Indigo,
    Green,
    Red,
}

impl Accent {
    pub fn class(self) -> &'static str {
        match self {
            Self::Blue => "accent-blue",
            Self::Purple => "accent-purple",
            Self::Pink => "accent-pink",
            Self::Indigo => "accent-indigo",
            Self::Green => "accent-green",
            Self::Red => "accent-red",
        }
    }
}

const fn plain(text: &'static str) -> TextRun {
    TextRun { text, accent: None }
}

const fn tinted(text: &'static str, accent: Accent) -> TextRun {
    TextRun {
        text,
        accent: Some(accent),
    }
}

pub const HERO_SUBTITLE: &[TextRun] = &[
    plain("I'm a final-year "),
    tinted("B.Sc. (ECS)", Accent::Blue),
    plain(" student, turning "),
    tinted("ideas into code", Accent::Purple),
    plain(" and code into "),
    tinted("experiences that matter", Accent::Pink),
    plain(". It's not just about coding, it's about "),
    tinted("storytelling through tech", Accent::Indigo),
    plain("."),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub id: &'static str,
    pub label: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink {
        id: "home",
        label: "Home",
    },
    NavLink {
        id: "about",
        label: "About",
    },
    NavLink {
        id: "work",
        label: "Work",
    },
    NavLink {
        id: "contact",
        label: "Contact",
    },
];

pub const CERTIFICATIONS_ANCHOR: &str = "certifications";

pub const ABOUT_SUBTITLE: &str = "Developer | Problem Solver | Technology Explorer";

pub const JOURNEY: &[&[TextRun]] = &[
    &[
        plain("My coding journey began in 2018 with C, sparking a passion for "),
        tinted("problem-solving", Accent::Indigo),
        plain(" and logical thinking. This curiosity led me to modern technologies and "),
        tinted("web development", Accent::Indigo),
        plain(
            ", where I enjoy creating meaningful digital experiences. With continuous \
             learning and practice, I've built the ability to turn ideas into ",
        ),
        tinted("user-friendly projects", Accent::Indigo),
        plain("."),
    ],
    &[
        plain("Along with my technical journey, my academics have shaped my growth. Scoring "),
        tinted("80% in 10th", Accent::Indigo),
        plain(
            " and 59.20% in 12th taught me persistence and the importance of continuous \
             improvement. These lessons, combined with my passion for coding, keep me \
             motivated to build a strong ",
        ),
        tinted("career in technology", Accent::Indigo),
        plain("."),
    ],
];

pub const PHILOSOPHY: &[TextRun] = &[
    plain("I believe in "),
    tinted("\"code with purpose\"", Accent::Indigo),
    plain(
        " - every line should serve a clear function while being maintainable and \
         efficient. Great design and smooth interactions should work together to create \
         memorable experiences.",
    ),
];

pub const SKILLS: &[&str] = &[
    "DSA In C++",
    "C++",
    "Java",
    "MERN Stack",
    "PHP",
    "MySQL",
    "SQL",
    "Python",
    "Data Science",
    "PowerBI",
    "Tailwind",
    "GSAP",
    "Framer Motion",
    "Git and GitHub",
];

pub const HOBBIES_INTRO: &str = "When I'm not coding, you can find me enjoying these activities:";

pub const HOBBIES: &[&str] = &[
    "Gaming",
    "Reading",
    "Music",
    "Painting",
    "Cricket",
    "Watching Anime",
];

pub const CODE_LINES: &[&str] = &[
    "function greet() {",
    "  return 'Hello, World!';",
    "}",
    "class Developer {",
    "  constructor(name) {",
    "    this.name = name;",
    "  }",
    "  code() {",
    "    return `${this.name} is coding...`;",
    "  }",
    "}",
    "const dev = new Developer('You');",
    "console.log(dev.code());",
    "const projects = [];",
    "while(true) {",
    "  projects.push(new Project());",
    "}",
];

pub const CODE_BACKDROP_LINES: usize = 30;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Principle {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const PRINCIPLES: &[Principle] = &[
    Principle {
        icon: "\u{1F393}",
        title: "Education",
        description: "Currently pursuing a B.sc-(ECS), maintaining a CGPA of 9/10. \
                      3rd Year | Expected Graduation: May 2026.",
    },
    Principle {
        icon: "\u{1F4BC}",
        title: "Experience",
        description: "Worked on multiple academic and personal projects, gaining hands-on \
                      experience in C++, web development, and problem-solving.",
    },
    Principle {
        icon: "\u{1F31F}",
        title: "Skills",
        description: "Strong foundation in programming, web technologies, and database \
                      management with a passion for continuous learning.",
    },
];

pub const WORK_SUBTITLE: &str = "Selected projects that showcase my skills and approach";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub image: &'static str,
    pub video: &'static str,
    pub github: Option<&'static str>,
    pub demo: Option<&'static str>,
    pub gradient: (&'static str, &'static str),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProjectLink {
    Demo(&'static str),
    GitHub(&'static str),
    WorkingOnIt,
}

impl ProjectLink {
    pub fn label(self) -> &'static str {
        match self {
            Self::Demo(_) => "Live Demo",
            Self::GitHub(_) => "GitHub",
            Self::WorkingOnIt => "Working on it",
        }
    }

    pub fn href(self) -> Option<&'static str> {
        match self {
            Self::Demo(href) | Self::GitHub(href) => Some(href),
            Self::WorkingOnIt => None,
        }
    }
}

impl Project {
    pub fn primary_link(&self) -> ProjectLink {
        match (self.demo, self.github) {
            (Some(demo), _) => ProjectLink::Demo(demo),
            (None, Some(github)) => ProjectLink::GitHub(github),
            (None, None) => ProjectLink::WorkingOnIt,
        }
    }
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Collage Result Management System",
        description: "Developed a College Result Management System using Python, Streamlit, \
                      and MongoDB to manage student records, display insights through a \
                      simple user-friendly interface.",
        tags: &["Python", "Streamlit", "MongoDB", "Data Science"],
        image: "/projectimg/ResultManagement.png",
        video: "https://drive.google.com/file/d/1w-ztmCKoeH00JFbglq2PsMZ9kTuR2P5S/preview",
        github: None,
        demo: None,
        gradient: ("#6366f1", "#9333ea"),
    },
    Project {
        title: "Interactive Portfolio",
        description: "Developed a modern portfolio using React, featuring smooth animations \
                      and transitions with GSAP and Framer Motion, styled with Tailwind CSS \
                      for a responsive and elegant design.",
        tags: &["React", "GSAP", "Framer Motion", "Tailwind CSS"],
        image: "/projectimg/Protfolio.png",
        video: "https://example.com/video2.mp4",
        github: Some("https://github.com/yourusername/portfolio"),
        demo: Some("https://github.com/yourusername/portfolio"),
        gradient: ("#f59e0b", "#ec4899"),
    },
    Project {
        title: "AI-Powered Skill-to-Career Roadmap Generator",
        description: "Built a MERN-based Skill-to-Career Roadmap Generator with AI/ML-powered \
                      personalized paths and a gamified journey featuring badges, levels, and \
                      step-by-step guidance.",
        tags: &["React", "Expres.js", "Node.js", "Mongodb", "AI ML API's"],
        image: "/projectimg/CareerCraft.png",
        video: "https://example.com/video3.mp4",
        github: None,
        demo: None,
        gradient: ("#10b981", "#0d9488"),
    },
];

pub const WORK_OUTRO: &str = "Explore more projects on";

pub const ACHIEVEMENTS_SUBTITLE: &str = "Certifications and coding profile";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Certificate {
    pub title: &'static str,
    pub issuer: &'static str,
    pub date: &'static str,
    pub image: &'static str,
}

pub const CERTIFICATES: &[Certificate] = &[
    Certificate {
        title: "Data Science",
        issuer: "CORIZO",
        date: "05-Jun-2025",
        image: "/Certificates/C1.png",
    },
    Certificate {
        title: "AI Tools WorkShop",
        issuer: "be10x",
        date: "27-July-2025",
        image: "/Certificates/C2.png",
    },
    Certificate {
        title: "PowerBI Workshop",
        issuer: "OfficeMaster",
        date: "27-July-2025",
        image: "/Certificates/C3.png",
    },
    Certificate {
        title: "Cybersecurity Analyst Job Simulation",
        issuer: "Forage",
        date: "13-August-2025",
        image: "/Certificates/C4.png",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CodingProfile {
    pub username: &'static str,
    pub ranking: &'static str,
    pub problems_solved: u32,
    pub acceptance_rate: &'static str,
    pub member_since: &'static str,
    pub badges: &'static [&'static str],
    pub picture: &'static str,
}

impl CodingProfile {
    pub fn stats(&self) -> [(&'static str, String); 4] {
        [
            ("Ranking", self.ranking.to_string()),
            ("Solved", self.problems_solved.to_string()),
            ("Acceptance", self.acceptance_rate.to_string()),
            ("Since", self.member_since.to_string()),
        ]
    }
}

pub const LEETCODE: CodingProfile = CodingProfile {
    username: "ShreyashPatil37",
    ranking: "1440433",
    problems_solved: 102,
    acceptance_rate: "88.01%",
    member_since: "Jun 2025",
    badges: &["None"],
    picture: "/Certificates/LeetCode.jpeg",
};

pub const CONTACT_TITLE: &str = "Get In Touch";

pub const CONTACT_SUBTITLE: &[TextRun] = &[
    plain("Questions, "),
    tinted("ideas", Accent::Green),
    plain(", thoughts, or just a "),
    tinted("friendly hello", Accent::Blue),
    plain(" - I'm "),
    tinted("always here", Accent::Red),
    plain("."),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactDetail {
    pub label: &'static str,
    pub value: &'static str,
    pub href: &'static str,
}

pub const CONTACT_DETAILS: &[ContactDetail] = &[
    ContactDetail {
        label: "Email",
        value: "shreyashpatil8078@gmail.com",
        href: "mailto:shreyashpatil8078@gmail.com",
    },
    ContactDetail {
        label: "Phone",
        value: "+91 8956501934",
        href: "tel:+918956501934",
    },
    ContactDetail {
        label: "Location",
        value: "Sangola, Solapur, India",
        href: "",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Social {
    pub name: &'static str,
    pub href: &'static str,
}

pub const SOCIALS: &[Social] = &[
    Social {
        name: "GitHub",
        href: GITHUB_PROFILE,
    },
    Social {
        name: "LinkedIn",
        href: "https://linkedin.com/in/shreyash-patil-sp7213",
    },
    Social {
        name: "WhatsApp",
        href: "https://wa.me/8956501934",
    },
    Social {
        name: "Instagram",
        href: "https://instagram.com/patilshreyash638",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_link_prefers_demo_then_github() {
        let labels: Vec<_> = PROJECTS
            .iter()
            .map(|project| project.primary_link().label())
            .collect();
        assert_eq!(labels, ["Working on it", "Live Demo", "Working on it"]);

        let repo_only = Project {
            demo: None,
            ..PROJECTS[1]
        };
        assert_eq!(
            repo_only.primary_link(),
            ProjectLink::GitHub("https://github.com/yourusername/portfolio")
        );
        assert_eq!(ProjectLink::WorkingOnIt.href(), None);
    }

    #[test]
    fn nav_links_cover_every_section_in_order() {
        let ids: Vec<_> = NAV_LINKS.iter().map(|link| link.id).collect();
        assert_eq!(ids, ["home", "about", "work", "contact"]);
    }

    #[test]
    fn copy_runs_join_into_readable_text() {
        let plain_text = |runs: &[TextRun]| runs.iter().map(|run| run.text).collect::<String>();
        assert_eq!(
            plain_text(CONTACT_SUBTITLE),
            "Questions, ideas, thoughts, or just a friendly hello - I'm always here."
        );
        assert!(plain_text(HERO_SUBTITLE).starts_with("I'm a final-year B.Sc. (ECS) student"));
    }

    #[test]
    fn profile_stats_render_in_display_order() {
        let stats = LEETCODE.stats();
        assert_eq!(stats[0], ("Ranking", "1440433".to_string()));
        assert_eq!(stats[1], ("Solved", "102".to_string()));
        assert_eq!(stats[3].1, "Jun 2025");
    }

    #[test]
    fn splash_caption_is_short_enough_to_type() {
        assert_eq!(SPLASH_CAPTION.chars().count(), 23);
        assert_eq!(HOBBIES.len(), 6);
        assert_eq!(SKILLS.len(), 14);
        assert_eq!(CERTIFICATES.len(), 4);
    }
}
