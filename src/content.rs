//! Static site copy. Nothing here is ever mutated; pages borrow straight
//! from these slices.

pub const OWNER_NAME: &str = "Rishabh Ostwal";
pub const OWNER_ROLE: &str = "Web Designer & Developer";
pub const OWNER_TAGLINE: &str =
    "Crafting immersive digital experiences with cutting-edge technology and creative vision";
pub const OWNER_EMAIL: &str = "john.doe@example.com";
pub const OWNER_PHONE: &str = "+1 (555) 123-4567";
pub const OWNER_LOCATION: &str = "San Francisco, CA";
pub const RESUME_PATH: &str = "/resume.pdf";
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    pub glyph: &'static str,
}

pub static SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        label: "GitHub",
        href: "https://github.com",
        glyph: "⌘",
    },
    SocialLink {
        label: "LinkedIn",
        href: "https://linkedin.com",
        glyph: "in",
    },
    SocialLink {
        label: "Twitter",
        href: "https://twitter.com",
        glyph: "✦",
    },
    SocialLink {
        label: "Email",
        href: "mailto:john.doe@example.com",
        glyph: "✉",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlogPost {
    pub id: u32,
    pub title: &'static str,
    pub excerpt: &'static str,
    pub body: &'static str,
    pub date: &'static str,
    pub read_time: &'static str,
    pub category: &'static str,
    pub tags: &'static [&'static str],
    pub featured: bool,
}

pub static BLOG_CATEGORIES: &[&str] = &[
    "All",
    "3D Development",
    "Web Development",
    "React",
    "CSS",
    "AR/VR",
    "JavaScript",
];

pub static BLOG_POSTS: &[BlogPost] = &[
    BlogPost {
        id: 1,
        title: "Building Immersive 3D Web Experiences with Three.js",
        excerpt: "Learn how to create stunning 3D web applications that captivate users and push the boundaries of web development.",
        body: "In this comprehensive guide, we'll explore the fundamentals of Three.js and how to create immersive 3D experiences...",
        date: "2024-01-15",
        read_time: "8 min read",
        category: "3D Development",
        tags: &["Three.js", "WebGL", "JavaScript"],
        featured: true,
    },
    BlogPost {
        id: 2,
        title: "The Future of Web Development: WebAssembly and Beyond",
        excerpt: "Exploring how WebAssembly is revolutionizing web performance and opening new possibilities for web applications.",
        body: "WebAssembly represents a paradigm shift in web development, offering near-native performance...",
        date: "2024-01-10",
        read_time: "6 min read",
        category: "Web Development",
        tags: &["WebAssembly", "Performance", "Future Tech"],
        featured: false,
    },
    BlogPost {
        id: 3,
        title: "Optimizing React Applications for Better Performance",
        excerpt: "Practical tips and techniques to make your React applications faster and more efficient.",
        body: "Performance optimization is crucial for user experience. Here are proven strategies...",
        date: "2024-01-05",
        read_time: "10 min read",
        category: "React",
        tags: &["React", "Performance", "Optimization"],
        featured: true,
    },
    BlogPost {
        id: 4,
        title: "Creating Responsive Designs with Tailwind CSS",
        excerpt: "Master the art of responsive design using Tailwind CSS utility classes and best practices.",
        body: "Responsive design is essential in today's multi-device world. Tailwind CSS makes it easier...",
        date: "2023-12-28",
        read_time: "7 min read",
        category: "CSS",
        tags: &["Tailwind CSS", "Responsive Design", "CSS"],
        featured: false,
    },
    BlogPost {
        id: 5,
        title: "Introduction to WebXR: Building AR/VR Experiences",
        excerpt: "Dive into the world of WebXR and learn how to create augmented and virtual reality experiences for the web.",
        body: "WebXR opens up exciting possibilities for immersive web experiences...",
        date: "2023-12-20",
        read_time: "12 min read",
        category: "AR/VR",
        tags: &["WebXR", "AR", "VR", "Immersive Tech"],
        featured: false,
    },
    BlogPost {
        id: 6,
        title: "Modern JavaScript: ES2024 Features You Should Know",
        excerpt: "Stay up-to-date with the latest JavaScript features and how they can improve your development workflow.",
        body: "JavaScript continues to evolve with new features that enhance developer productivity...",
        date: "2023-12-15",
        read_time: "9 min read",
        category: "JavaScript",
        tags: &["JavaScript", "ES2024", "Modern JS"],
        featured: false,
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub long_description: &'static str,
    pub tech: &'static [&'static str],
    pub category: &'static str,
    /// CSS class naming the card's gradient swatch.
    pub gradient: &'static str,
    pub repository: &'static str,
    pub demo: &'static str,
    pub featured: bool,
}

pub static PROJECT_CATEGORIES: &[&str] = &[
    "All",
    "Web Development",
    "E-commerce",
    "Data Science",
    "Blockchain",
    "Mobile Development",
];

pub static PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: "3D E-commerce Platform",
        description: "Interactive 3D product visualization with AR capabilities and real-time customization",
        long_description: "A revolutionary e-commerce platform that allows customers to interact with products in 3D space, customize materials and colors in real-time, and preview items using augmented reality before purchase.",
        tech: &["Next.js", "Three.js", "WebXR", "TypeScript", "Tailwind CSS"],
        category: "Web Development",
        gradient: "swatch-blue-purple",
        repository: "https://github.com",
        demo: "https://example.com",
        featured: true,
    },
    Project {
        id: 2,
        title: "AI-Powered Dashboard",
        description: "Real-time analytics dashboard with machine learning insights and predictive analytics",
        long_description: "An intelligent dashboard that processes large datasets in real-time, provides actionable insights through machine learning algorithms, and offers predictive analytics for business decision-making.",
        tech: &["React", "Python", "TensorFlow", "D3.js", "PostgreSQL"],
        category: "Data Science",
        gradient: "swatch-green-teal",
        repository: "https://github.com",
        demo: "https://example.com",
        featured: true,
    },
    Project {
        id: 3,
        title: "Metaverse Gallery",
        description: "Virtual art gallery with NFT integration and immersive 3D experiences",
        long_description: "A virtual reality art gallery that showcases NFT collections in an immersive 3D environment, complete with social features, virtual events, and blockchain integration.",
        tech: &["Three.js", "Web3", "Solidity", "IPFS", "WebGL"],
        category: "Blockchain",
        gradient: "swatch-purple-pink",
        repository: "https://github.com",
        demo: "https://example.com",
        featured: true,
    },
    Project {
        id: 4,
        title: "Manglanam Naturals Storefront",
        description: "Headless storefront for an organic skincare brand with subscription checkout",
        long_description: "A fast, accessible storefront for Manglanam Naturals with a product quiz, recurring orders, and inventory synced from the warehouse system every few minutes.",
        tech: &["Next.js", "Shopify", "Stripe", "TypeScript", "Tailwind CSS"],
        category: "E-commerce",
        gradient: "swatch-amber-rose",
        repository: "https://github.com",
        demo: "https://example.com",
        featured: true,
    },
    Project {
        id: 5,
        title: "Artisan Market Checkout",
        description: "Multi-vendor marketplace checkout with split payments and order tracking",
        long_description: "A checkout flow for a handmade-goods marketplace that splits each basket across vendors, settles payouts automatically, and keeps buyers informed with live order tracking.",
        tech: &["React", "Node.js", "Stripe Connect", "PostgreSQL", "Redis"],
        category: "E-commerce",
        gradient: "swatch-lime-emerald",
        repository: "https://github.com",
        demo: "https://example.com",
        featured: false,
    },
    Project {
        id: 6,
        title: "Real-time Collaboration Tool",
        description: "Multi-user collaborative workspace with real-time synchronization",
        long_description: "A comprehensive collaboration platform that enables teams to work together in real-time, featuring document editing, video conferencing, and project management tools.",
        tech: &["Next.js", "Socket.io", "MongoDB", "WebRTC", "Redis"],
        category: "Web Development",
        gradient: "swatch-orange-red",
        repository: "https://github.com",
        demo: "https://example.com",
        featured: false,
    },
    Project {
        id: 7,
        title: "Mobile Fitness App",
        description: "Cross-platform fitness tracking app with AI-powered workout recommendations",
        long_description: "A comprehensive fitness application that tracks workouts, provides personalized recommendations using AI, and includes social features for community engagement.",
        tech: &["React Native", "Node.js", "TensorFlow", "MongoDB", "AWS"],
        category: "Mobile Development",
        gradient: "swatch-cyan-blue",
        repository: "https://github.com",
        demo: "https://example.com",
        featured: false,
    },
    Project {
        id: 8,
        title: "Blockchain Voting System",
        description: "Secure and transparent voting system built on blockchain technology",
        long_description: "A decentralized voting platform that ensures transparency, security, and immutability of votes using blockchain technology and smart contracts.",
        tech: &["Solidity", "Web3.js", "React", "IPFS", "Ethereum"],
        category: "Blockchain",
        gradient: "swatch-indigo-purple",
        repository: "https://github.com",
        demo: "https://example.com",
        featured: false,
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    level: u8,
}

impl Skill {
    pub const fn new(name: &'static str, level: u8) -> Self {
        Self { name, level }
    }

    /// Proficiency as a percentage, never above 100.
    pub fn level(&self) -> u8 {
        self.level.min(100)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SkillCategory {
    pub title: &'static str,
    pub description: &'static str,
    pub glyph: &'static str,
    pub gradient: &'static str,
    pub skills: &'static [Skill],
}

pub static SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        title: "Frontend Development",
        description: "Creating responsive and interactive user interfaces",
        glyph: "</>",
        gradient: "swatch-blue-cyan",
        skills: &[
            Skill::new("React", 95),
            Skill::new("Next.js", 90),
            Skill::new("TypeScript", 88),
            Skill::new("Three.js", 85),
            Skill::new("Tailwind CSS", 92),
            Skill::new("Vue.js", 75),
        ],
    },
    SkillCategory {
        title: "Backend Development",
        description: "Building scalable server-side applications and APIs",
        glyph: "⛁",
        gradient: "swatch-green-emerald",
        skills: &[
            Skill::new("Node.js", 90),
            Skill::new("Python", 85),
            Skill::new("PostgreSQL", 88),
            Skill::new("MongoDB", 82),
            Skill::new("GraphQL", 78),
            Skill::new("REST APIs", 92),
        ],
    },
    SkillCategory {
        title: "3D & Creative",
        description: "Crafting immersive 3D experiences and visual effects",
        glyph: "◆",
        gradient: "swatch-purple-pink",
        skills: &[
            Skill::new("Three.js", 85),
            Skill::new("WebGL", 80),
            Skill::new("Blender", 75),
            Skill::new("GSAP", 88),
            Skill::new("Canvas API", 82),
            Skill::new("WebXR", 70),
        ],
    },
    SkillCategory {
        title: "Web Technologies",
        description: "Modern web standards and performance optimization",
        glyph: "◎",
        gradient: "swatch-orange-red",
        skills: &[
            Skill::new("HTML5", 95),
            Skill::new("CSS3", 92),
            Skill::new("JavaScript", 93),
            Skill::new("WebAssembly", 65),
            Skill::new("PWA", 80),
            Skill::new("Web Performance", 85),
        ],
    },
    SkillCategory {
        title: "Mobile Development",
        description: "Cross-platform mobile application development",
        glyph: "▯",
        gradient: "swatch-cyan-blue",
        skills: &[
            Skill::new("React Native", 82),
            Skill::new("Flutter", 70),
            Skill::new("Expo", 85),
            Skill::new("Mobile UI/UX", 80),
            Skill::new("App Store Optimization", 75),
            Skill::new("Push Notifications", 78),
        ],
    },
    SkillCategory {
        title: "DevOps & Cloud",
        description: "Deployment, scaling, and infrastructure management",
        glyph: "☁",
        gradient: "swatch-indigo-purple",
        skills: &[
            Skill::new("AWS", 80),
            Skill::new("Docker", 85),
            Skill::new("Vercel", 90),
            Skill::new("Git", 92),
            Skill::new("CI/CD", 78),
            Skill::new("Monitoring", 75),
        ],
    },
];

/// Short skill summaries teased on the home page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Highlight {
    pub title: &'static str,
    pub description: &'static str,
    pub glyph: &'static str,
    pub gradient: &'static str,
}

pub static HOME_HIGHLIGHTS: &[Highlight] = &[
    Highlight {
        title: "Frontend Development",
        description: "React, Next.js, Vue.js, TypeScript",
        glyph: "</>",
        gradient: "swatch-blue-cyan",
    },
    Highlight {
        title: "Backend Development",
        description: "Node.js, Python, PostgreSQL, MongoDB",
        glyph: "⚡",
        gradient: "swatch-purple-pink",
    },
    Highlight {
        title: "3D & Creative",
        description: "Three.js, Blender, WebGL, GSAP",
        glyph: "◆",
        gradient: "swatch-orange-red",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TagGroup {
    pub title: &'static str,
    pub items: &'static [&'static str],
}

pub static TOOL_GROUPS: &[TagGroup] = &[
    TagGroup {
        title: "Development Tools",
        items: &["VS Code", "Git", "GitHub", "Figma", "Postman", "Chrome DevTools"],
    },
    TagGroup {
        title: "Frameworks & Libraries",
        items: &["React", "Next.js", "Express.js", "Tailwind CSS", "Material-UI", "Framer Motion"],
    },
    TagGroup {
        title: "Databases & Storage",
        items: &["PostgreSQL", "MongoDB", "Redis", "Supabase", "Firebase", "AWS S3"],
    },
    TagGroup {
        title: "Cloud & Deployment",
        items: &["Vercel", "AWS", "Docker", "Netlify", "Heroku", "GitHub Actions"],
    },
    TagGroup {
        title: "Design & 3D",
        items: &["Blender", "Adobe Creative Suite", "Sketch", "Principle", "After Effects", "Cinema 4D"],
    },
    TagGroup {
        title: "Testing & Quality",
        items: &["Jest", "Cypress", "ESLint", "Prettier", "Lighthouse", "WebPageTest"],
    },
];

pub static ABOUT_SKILL_GROUPS: &[TagGroup] = &[
    TagGroup {
        title: "Frontend",
        items: &["React", "Next.js", "TypeScript", "Three.js", "Tailwind CSS", "Vue.js"],
    },
    TagGroup {
        title: "Backend",
        items: &["Node.js", "Python", "PostgreSQL", "MongoDB", "GraphQL", "REST APIs"],
    },
    TagGroup {
        title: "Tools & Others",
        items: &["Git", "Docker", "AWS", "Figma", "Blender", "WebGL"],
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Certification {
    pub title: &'static str,
    pub issuer: &'static str,
    pub year: &'static str,
    pub badge: &'static str,
}

pub static CERTIFICATIONS: &[Certification] = &[
    Certification {
        title: "AWS Certified Developer",
        issuer: "Amazon Web Services",
        year: "2023",
        badge: "🏆",
    },
    Certification {
        title: "React Developer Certification",
        issuer: "Meta",
        year: "2022",
        badge: "⚛️",
    },
    Certification {
        title: "Google Cloud Professional",
        issuer: "Google Cloud",
        year: "2023",
        badge: "☁️",
    },
    Certification {
        title: "Three.js Journey",
        issuer: "Bruno Simon",
        year: "2022",
        badge: "🎮",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Milestone {
    pub year: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub static MILESTONES: &[Milestone] = &[
    Milestone {
        year: "2019",
        title: "Started Web Development",
        description: "Began my journey with HTML, CSS, and JavaScript",
    },
    Milestone {
        year: "2020",
        title: "First React Project",
        description: "Built my first React application and fell in love with component-based architecture",
    },
    Milestone {
        year: "2021",
        title: "Discovered Three.js",
        description: "Started exploring 3D web development and interactive experiences",
    },
    Milestone {
        year: "2022",
        title: "Full-Stack Developer",
        description: "Expanded skills to backend development with Node.js and databases",
    },
    Milestone {
        year: "2023",
        title: "3D Specialist",
        description: "Specialized in creating immersive 3D web experiences",
    },
    Milestone {
        year: "2024",
        title: "Present",
        description: "Leading innovative projects and mentoring other developers",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Value {
    pub title: &'static str,
    pub description: &'static str,
    pub glyph: &'static str,
}

pub static VALUES: &[Value] = &[
    Value {
        title: "Passion-Driven",
        description: "I believe that passion is the fuel for exceptional work and continuous learning.",
        glyph: "♥",
    },
    Value {
        title: "Quality First",
        description: "Every project deserves attention to detail and commitment to excellence.",
        glyph: "★",
    },
    Value {
        title: "Collaborative",
        description: "Great things happen when talented people work together towards a common goal.",
        glyph: "☕",
    },
];

pub static ABOUT_FACTS: &[&str] = &[
    "San Francisco, CA",
    "5+ Years Experience",
    "50+ Projects Completed",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

pub static FAQS: &[Faq] = &[
    Faq {
        question: "What's your typical project timeline?",
        answer: "Project timelines vary depending on complexity, but most web development projects take 4-12 weeks from concept to launch. I'll provide a detailed timeline during our initial consultation.",
    },
    Faq {
        question: "Do you work with international clients?",
        answer: "I work with clients worldwide and am comfortable with remote collaboration across different time zones. Communication is key, and I ensure regular updates throughout the project.",
    },
    Faq {
        question: "What technologies do you specialize in?",
        answer: "I specialize in React, Next.js, Three.js for 3D web experiences, Node.js for backend development, and various databases. I'm always learning new technologies to stay current with industry trends.",
    },
    Faq {
        question: "Do you provide ongoing support after project completion?",
        answer: "Yes! I offer various support packages including bug fixes, updates, and feature enhancements. I believe in building long-term relationships with my clients.",
    },
];

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Renders an ISO `YYYY-MM-DD` date as `Jan 15, 2024`. Anything that does
/// not parse is shown as written.
pub fn display_date(iso: &str) -> String {
    let mut parts = iso.splitn(3, '-');
    let (Some(year), Some(month), Some(day)) = (parts.next(), parts.next(), parts.next()) else {
        return iso.to_string();
    };

    let month = month.parse::<usize>().ok().filter(|m| (1..=12).contains(m));
    let day = day.parse::<u8>().ok().filter(|d| (1..=31).contains(d));
    match (month, day, year.len() == 4 && year.bytes().all(|b| b.is_ascii_digit())) {
        (Some(month), Some(day), true) => format!("{} {day}, {year}", MONTHS[month - 1]),
        _ => iso.to_string(),
    }
}

/// Tags shown on a compact card, plus how many were left out.
pub fn visible_tags<'a>(tags: &'a [&'a str], limit: usize) -> (&'a [&'a str], usize) {
    let shown = tags.len().min(limit);
    (&tags[..shown], tags.len() - shown)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_are_unique() {
        let posts: HashSet<u32> = BLOG_POSTS.iter().map(|post| post.id).collect();
        assert_eq!(posts.len(), BLOG_POSTS.len());

        let projects: HashSet<u32> = PROJECTS.iter().map(|project| project.id).collect();
        assert_eq!(projects.len(), PROJECTS.len());
    }

    #[test]
    fn every_item_uses_a_listed_category() {
        assert_eq!(BLOG_CATEGORIES[0], "All");
        assert_eq!(PROJECT_CATEGORIES[0], "All");
        assert!(BLOG_POSTS.iter().all(|post| BLOG_CATEGORIES.contains(&post.category)));
        assert!(PROJECTS.iter().all(|project| PROJECT_CATEGORIES.contains(&project.category)));
    }

    #[test]
    fn skill_levels_are_percentages() {
        assert!(SKILL_CATEGORIES
            .iter()
            .flat_map(|category| category.skills)
            .all(|skill| skill.level() <= 100));
        assert_eq!(Skill::new("Overconfidence", 140).level(), 100);
    }

    #[test]
    fn dates_render_for_display() {
        assert_eq!(display_date("2024-01-15"), "Jan 15, 2024");
        assert_eq!(display_date("2023-12-05"), "Dec 5, 2023");
        assert_eq!(display_date("2023-13-05"), "2023-13-05");
        assert_eq!(display_date("soon"), "soon");
    }

    #[test]
    fn compact_cards_count_hidden_tags() {
        let tags = ["WebXR", "AR", "VR", "Immersive Tech"];
        let (shown, hidden) = visible_tags(&tags, 2);
        assert_eq!(shown, ["WebXR", "AR"]);
        assert_eq!(hidden, 2);
        assert_eq!(visible_tags(&tags[..1], 3), (&tags[..1], 0));
    }
}
