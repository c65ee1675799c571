//! Static portfolio content rendered by the page sections.

pub const OWNER_NAME: &str = "Sudipto Gayen";
pub const OWNER_EMAIL: &str = "sudipto002gayen@gmail.com";
pub const GITHUB_URL: &str = "https://github.com/sudipto39";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/sudipto-gayen-7416b622b/";
pub const WHATSAPP_URL: &str = "https://wa.me/918336833473";
pub const WHATSAPP_DISPLAY: &str = "+91 83368 33473";
pub const LOCATION: &str = "Kolkata, West Bengal";

#[derive(Debug, Clone, Copy)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { href: "#about", label: "About" },
    NavLink { href: "#projects", label: "Projects" },
    NavLink { href: "#skills", label: "Skills" },
    NavLink { href: "#contact", label: "Contact" },
];

#[derive(Debug, Clone, Copy)]
pub struct Stat {
    pub label: &'static str,
    pub value: &'static str,
}

pub const ABOUT_STATS: &[Stat] = &[
    Stat { label: "Projects", value: "5+" },
    Stat { label: "Technologies", value: "10+" },
    Stat { label: "Coffee Cups", value: "∞" },
    Stat { label: "Passion Level", value: "💯" },
];

#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub github: &'static str,
    pub demo: Option<&'static str>,
    pub featured: bool,
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Redis Session Manager",
        description: "A robust session management system using Redis for lightning-fast session storage, integrated with Google OAuth via Passport.js for secure authentication.",
        tech: &["Node.js", "Redis", "Passport.js", "OAuth 2.0", "Express"],
        github: "https://github.com",
        demo: Some("https://demo.com"),
        featured: true,
    },
    Project {
        title: "E-Commerce Backend API",
        description: "RESTful API powering a full-featured e-commerce platform with inventory management, order processing, and payment gateway integration.",
        tech: &["Node.js", "Express", "MongoDB", "Stripe", "JWT"],
        github: "https://github.com",
        demo: Some("https://demo.com"),
        featured: true,
    },
    Project {
        title: "Real-time Chat Application",
        description: "WebSocket-powered chat application supporting private messaging, group chats, and real-time notifications with message persistence.",
        tech: &["Socket.io", "Node.js", "Redis", "React", "TypeScript"],
        github: "https://github.com",
        demo: Some("https://demo.com"),
        featured: true,
    },
    Project {
        title: "Task Scheduler Service",
        description: "Distributed task scheduling service with priority queues, retry mechanisms, and comprehensive logging for background job processing.",
        tech: &["Node.js", "Bull Queue", "Redis", "PostgreSQL"],
        github: "https://github.com",
        demo: None,
        featured: false,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Primary,
    Purple,
    Gold,
}

impl Accent {
    pub fn gradient(&self) -> &'static str {
        match self {
            Self::Primary => "from-primary to-primary/70",
            Self::Purple => "from-purple to-purple/70",
            Self::Gold => "from-gold to-gold/70",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Skill {
    pub name: &'static str,
    /// Percentage, 0..=100.
    pub level: u8,
    pub tooltip: &'static str,
    pub accent: Accent,
}

pub const SKILLS: &[Skill] = &[
    Skill { name: "JavaScript", level: 85, tooltip: "Types make me happy 💙", accent: Accent::Purple },
    Skill { name: "Node.js", level: 85, tooltip: "My trusty steed 🐎", accent: Accent::Primary },
    Skill { name: "Express.js", level: 80, tooltip: "Routing like a pro 🛤️", accent: Accent::Primary },
    Skill { name: "MongoDB", level: 75, tooltip: "Documents are my friends 📄", accent: Accent::Gold },
    Skill { name: "OAuth 2.0", level: 60, tooltip: "Security is my middle name 🔐", accent: Accent::Purple },
    Skill { name: "Redis", level: 50, tooltip: "Cache me if you can ⚡", accent: Accent::Purple },
    Skill { name: "Java/DSA", level: 50, tooltip: "Algorithmic thinking 🧠", accent: Accent::Primary },
];

#[derive(Debug, Clone, Copy)]
pub struct Technology {
    pub name: &'static str,
    pub category: &'static str,
}

pub const TECHNOLOGIES: &[Technology] = &[
    Technology { name: "Git", category: "Tools" },
    Technology { name: "REST APIs", category: "Backend" },
    Technology { name: "Passport.js", category: "Auth" },
    Technology { name: "JWT", category: "Security" },
    Technology { name: "Linux", category: "Systems" },
    Technology { name: "VS Code", category: "Tools" },
];

#[derive(Debug, Clone, Copy)]
pub struct BlogPost {
    pub title: &'static str,
    pub excerpt: &'static str,
    pub date: &'static str,
    pub read_time: &'static str,
    pub tags: &'static [&'static str],
}

pub const BLOG_POSTS: &[BlogPost] = &[
    BlogPost {
        title: "Debugging OAuth Nightmares: A Survival Guide",
        excerpt: "That moment when your OAuth flow works perfectly in development but breaks mysteriously in production. Here's how I conquered the callback URL chaos...",
        date: "Dec 15, 2025",
        read_time: "5 min read",
        tags: &["OAuth", "Debugging", "Node.js"],
    },
    BlogPost {
        title: "Why Redis Loves Your Sessions",
        excerpt: "Storing sessions in memory vs Redis - the performance gains are real. Let me show you how to implement lightning-fast session management...",
        date: "Nov 28, 2025",
        read_time: "7 min read",
        tags: &["Redis", "Sessions", "Performance"],
    },
    BlogPost {
        title: "Building Your First RESTful API: A Beginner's Journey",
        excerpt: "From 'what is an endpoint?' to deploying a production-ready API. My learning path and the mistakes that taught me the most...",
        date: "Oct 10, 2025",
        read_time: "10 min read",
        tags: &["REST", "API", "Backend"],
    },
];

#[derive(Debug, Clone, Copy)]
pub struct SocialLink {
    pub name: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink { name: "GitHub", href: GITHUB_URL, icon: "devicon-github-plain" },
    SocialLink { name: "LinkedIn", href: LINKEDIN_URL, icon: "devicon-linkedin-plain" },
    SocialLink { name: "Email", href: "mailto:sudipto002gayen@gmail.com", icon: "extra-email" },
    SocialLink { name: "WhatsApp", href: WHATSAPP_URL, icon: "extra-phone" },
];
