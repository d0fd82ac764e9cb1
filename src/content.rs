//! Static display data for the four panels.
//!
//! Everything here is copy, not logic: the panels iterate these slices and
//! render one view unit per entry. Editing the portfolio means editing this
//! file only.

pub struct Profile {
    pub name: &'static str,
    pub role: &'static str,
    pub location: &'static str,
    pub availability: &'static str,
    pub title_lines: [&'static str; 3],
    pub description: &'static str,
}

pub struct Project {
    pub title: &'static str,
    pub category: &'static str,
    pub year: &'static str,
    pub tech: &'static str,
    pub description: &'static str,
}

pub struct Experience {
    pub role: &'static str,
    pub period: &'static str,
    pub summary: &'static str,
}

pub struct SkillGroup {
    pub name: &'static str,
    pub skills: &'static [&'static str],
}

pub struct ContactChannel {
    pub label: &'static str,
    pub value: &'static str,
}

pub const PROFILE: Profile = Profile {
    name: "Tanuja",
    role: "Full Stack Developer",
    location: "Based in India",
    availability: "Available for new projects",
    title_lines: ["Full Stack", "Developer", "& Problem Solver"],
    description: "I craft scalable web applications using modern technologies. \
        Passionate about creating efficient solutions that bridge the gap \
        between frontend aesthetics and backend functionality.",
};

pub const WORK_SUBTITLE: &str =
    "A showcase of full-stack applications built with modern technologies and best practices";

pub const PROJECTS: &[Project] = &[
    Project {
        title: "E-Commerce Platform",
        category: "Full Stack Development",
        year: "2024",
        tech: "React, Node.js, MongoDB",
        description: "Complete online store with payment integration and admin dashboard",
    },
    Project {
        title: "Task Management App",
        category: "MERN Stack",
        year: "2024",
        tech: "React, Express, MongoDB",
        description: "Collaborative project management tool with real-time updates",
    },
    Project {
        title: "Social Media Dashboard",
        category: "Frontend + API",
        year: "2024",
        tech: "Next.js, REST APIs",
        description: "Analytics dashboard for social media management",
    },
    Project {
        title: "Weather App",
        category: "React Application",
        year: "2023",
        tech: "React, Weather API",
        description: "Real-time weather forecasting with location services",
    },
    Project {
        title: "Portfolio Website",
        category: "Frontend Development",
        year: "2023",
        tech: "React, CSS3, Responsive",
        description: "Modern portfolio showcasing responsive design principles",
    },
    Project {
        title: "Blog CMS",
        category: "Full Stack",
        year: "2023",
        tech: "Node.js, MySQL, React",
        description: "Content management system with user authentication",
    },
];

pub const ABOUT_PARAGRAPHS: &[&str] = &[
    "Hi, I'm Tanuja! I'm a passionate Full Stack Web Developer with a love for \
     creating digital solutions that make a difference. With expertise in both \
     frontend and backend technologies, I enjoy the entire development lifecycle.",
    "My journey in web development started with curiosity about how websites work, \
     and it has evolved into a career focused on building scalable, user-centric \
     applications. I believe in writing clean, maintainable code and staying \
     updated with the latest technologies.",
    "When I'm not coding, you'll find me exploring new frameworks, contributing \
     to open source projects, or mentoring aspiring developers in my community.",
];

pub const EXPERIENCE: &[Experience] = &[
    Experience {
        role: "Full Stack Developer",
        period: "2022 - Present",
        summary: "Building modern web applications and leading development teams",
    },
    Experience {
        role: "Frontend Developer",
        period: "2021 - 2022",
        summary: "Specialized in React development and UI/UX implementation",
    },
];

pub const SKILL_GROUPS: &[SkillGroup] = &[
    SkillGroup {
        name: "Frontend",
        skills: &["React", "JavaScript", "TypeScript", "Next.js", "CSS3", "HTML5"],
    },
    SkillGroup {
        name: "Backend",
        skills: &["Node.js", "Express", "Python", "Django", "REST APIs", "GraphQL"],
    },
    SkillGroup {
        name: "Database",
        skills: &["MongoDB", "MySQL", "PostgreSQL", "Firebase"],
    },
    SkillGroup {
        name: "Tools & Others",
        skills: &["Git", "Docker", "AWS", "Figma", "Postman"],
    },
];

pub const CONTACT_HEADLINE: &str = "Let's Build Something Amazing";

pub const CONTACT_TEXT: &str = "Ready to turn your ideas into reality? I'm always excited to \
    work on challenging projects and collaborate with innovative teams. Let's discuss how we \
    can bring your vision to life.";

pub const CONTACT_CHANNELS: &[ContactChannel] = &[
    ContactChannel {
        label: "Email",
        value: "tanuja.dev@gmail.com",
    },
    ContactChannel {
        label: "GitHub",
        value: "github.com/tanuja-dev",
    },
    ContactChannel {
        label: "LinkedIn",
        value: "linkedin.com/in/tanuja-dev",
    },
];

pub const PROJECT_TYPES: &[&str] = &[
    "Full Stack Web Application",
    "Frontend Development",
    "Backend API Development",
    "Website Redesign",
    "E-commerce Solution",
    "Other",
];
