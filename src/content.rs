//! Author-supplied page content.

pub const NAME: &str = "Pedro";
pub const BRAND: &str = "My Portfolio";
pub const TAGLINE: &str = "Full-Stack Developer | Tech Enthusiast | Problem Solver";
pub const PROFILE_IMAGE: &str = "/images/myself.jpg";

pub const ABOUT: [&str; 2] = [
    "I'm a Full-Stack Developer with a passion for web development and technology, building products end to end from the database up to the last pixel.",
    "Besides coding, I enjoy collaborating with teams, sharing knowledge, and learning whatever the next problem needs.",
];

pub const CONTACT_BLURB: &str =
    "Interested in working together or just want to chat? Don't hesitate to reach out!";

#[derive(Debug)]
pub struct Skill {
    pub title: &'static str,
    pub percent: u8,
}

impl Skill {
    pub fn percent_label(&self) -> String {
        format!("{}%", self.percent.min(100))
    }

    /// Background drawing the filled arc of the progress ring.
    pub fn ring_style(&self) -> String {
        let p = self.percent.min(100);
        format!("background: conic-gradient(#00aaf9 {p}%, #2d3748 {p}% 100%)")
    }
}

pub const SKILLS: &[Skill] = &[
    Skill {
        title: "Python (Django, Flask)",
        percent: 95,
    },
    Skill {
        title: "JavaScript (React, Node.js)",
        percent: 80,
    },
];

/// One card in the experience or education timeline.
#[derive(Debug)]
pub struct TimelineEntry {
    pub title: &'static str,
    pub organisation: &'static str,
    pub date: &'static str,
    pub details: &'static [&'static str],
}

pub const EXPERIENCE: &[TimelineEntry] = &[
    TimelineEntry {
        title: "Web Developer Intern",
        organisation: "PT. Teknologi Maju Jaya",
        date: "Jun 2019 - Dec 2019",
        details: &[
            "Developed internal web applications with Django and React.",
            "Optimised database performance.",
            "Took part in code reviews.",
        ],
    },
    TimelineEntry {
        title: "Freelance Web Developer",
        organisation: "Self-Employed",
        date: "Jan 2020 - Present",
        details: &[
            "Built websites for clients.",
            "Integrated payment systems.",
            "Provided technical support.",
        ],
    },
    TimelineEntry {
        title: "Security Officer (Part-Time)",
        organisation: "PT. Keamanan Terpercaya",
        date: "Mar 2018 - Dec 2019",
        details: &[
            "Operated the site security systems.",
            "Kept the workplace safe.",
        ],
    },
];

pub const EDUCATION: &[TimelineEntry] = &[
    TimelineEntry {
        title: "Bachelor of Computer Engineering",
        organisation: "Universitas XYZ",
        date: "2015 - 2019",
        details: &[
            "GPA: 3.8/4.0",
            "Focused on web development.",
            "Active in student organisations.",
        ],
    },
    TimelineEntry {
        title: "Thesis Project",
        organisation: "Web-Based Inventory Management System",
        date: "2018 - 2019",
        details: &[
            "Built an inventory system.",
            "Stock management and reporting features.",
        ],
    },
];

#[derive(Debug)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub link: &'static str,
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "E-commerce Platform",
        description: "A full-featured e-commerce platform.",
        image: "/images/project1.jpg",
        link: "#",
    },
    Project {
        title: "Blog Platform",
        description: "A multi-user blogging platform.",
        image: "/images/project2.jpg",
        link: "#",
    },
    Project {
        title: "Task Management App",
        description: "A task manager with collaboration features.",
        image: "/images/project3.jpg",
        link: "#",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactKind {
    Email,
    LinkedIn,
    GitHub,
}

// Indexed by `ContactKind as usize`.
const CONTACT_BADGES: [(&str, &str); 3] = [("📧", "Email"), ("🔗", "LinkedIn"), ("🐱", "GitHub")];

impl ContactKind {
    pub fn glyph(self) -> &'static str {
        CONTACT_BADGES[self as usize].0
    }

    pub fn label(self) -> &'static str {
        CONTACT_BADGES[self as usize].1
    }
}

#[derive(Debug)]
pub struct ContactLink {
    pub kind: ContactKind,
    pub target: &'static str,
}

impl ContactLink {
    pub fn href(&self) -> String {
        match self.kind {
            ContactKind::Email if !self.target.starts_with("mailto:") => {
                format!("mailto:{}", self.target)
            }
            _ => self.target.to_string(),
        }
    }
}

pub const CONTACTS: &[ContactLink] = &[
    ContactLink {
        kind: ContactKind::Email,
        target: "youremail@example.com",
    },
    ContactLink {
        kind: ContactKind::LinkedIn,
        target: "https://linkedin.com/in/yourprofile",
    },
    ContactLink {
        kind: ContactKind::GitHub,
        target: "https://github.com/yourprofile",
    },
];

/// Year the site was built, for the copyright line.
pub const BUILD_YEAR: &str = env!("BUILD_YEAR");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skill_ring() {
        let s = Skill {
            title: "Rust",
            percent: 95,
        };
        assert_eq!(s.percent_label(), "95%");
        assert_eq!(
            s.ring_style(),
            "background: conic-gradient(#00aaf9 95%, #2d3748 95% 100%)"
        );

        let over = Skill {
            title: "Over",
            percent: 140,
        };
        assert_eq!(over.percent_label(), "100%");
    }

    #[test]
    fn email_gets_mailto() {
        let email = ContactLink {
            kind: ContactKind::Email,
            target: "me@example.com",
        };
        assert_eq!(email.href(), "mailto:me@example.com");

        let already = ContactLink {
            kind: ContactKind::Email,
            target: "mailto:me@example.com",
        };
        assert_eq!(already.href(), "mailto:me@example.com");

        let gh = ContactLink {
            kind: ContactKind::GitHub,
            target: "https://github.com/me",
        };
        assert_eq!(gh.href(), "https://github.com/me");
    }

    #[test]
    fn contact_badges() {
        assert_eq!(ContactKind::Email.label(), "Email");
        assert_eq!(ContactKind::LinkedIn.glyph(), "🔗");
        assert_eq!(ContactKind::GitHub.label(), "GitHub");
    }

    #[test]
    fn build_year_is_numeric() {
        assert!(BUILD_YEAR.parse::<u32>().is_ok());
    }
}
