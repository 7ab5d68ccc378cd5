//! Static copy for the site pages.

use crate::Route;

pub struct NavItem {
    pub name: &'static str,
    pub route: Route,
}

pub static NAV_ITEMS: [NavItem; 7] = [
    NavItem { name: "Home", route: Route::Home },
    NavItem { name: "About", route: Route::About },
    NavItem { name: "Membership", route: Route::Membership },
    NavItem { name: "Events", route: Route::Events },
    NavItem { name: "Resources", route: Route::Resources },
    NavItem { name: "Gallery", route: Route::Gallery },
    NavItem { name: "Contact", route: Route::Contact },
];

pub struct SocialLink {
    pub name: &'static str,
    pub glyph: &'static str,
    pub url: &'static str,
}

pub static SOCIAL_LINKS: [SocialLink; 4] = [
    SocialLink { name: "Twitter", glyph: "𝕏", url: "#" },
    SocialLink { name: "LinkedIn", glyph: "in", url: "https://www.linkedin.com/company/110528289/admin/dashboard/" },
    SocialLink { name: "GitHub", glyph: "GH", url: "#" },
    SocialLink { name: "Instagram", glyph: "IG", url: "#" },
];

pub struct Card {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

pub struct LinkCard {
    pub card: Card,
    pub route: Route,
}

pub static HIGHLIGHT_CARDS: [LinkCard; 3] = [
    LinkCard {
        card: Card {
            title: "Upcoming Events",
            description: "Workshops, seminars, and competitions to enhance your skills",
            icon: "📅",
        },
        route: Route::Events,
    },
    LinkCard {
        card: Card {
            title: "Membership",
            description: "Join our community and unlock exclusive benefits",
            icon: "👥",
        },
        route: Route::Membership,
    },
    LinkCard {
        card: Card {
            title: "Resource Hub",
            description: "Study materials, papers, and project ideas at your fingertips",
            icon: "📖",
        },
        route: Route::Resources,
    },
];

pub static MARQUEE_WORDS: [&str; 3] = ["Innovation", "Engineering", "Technology"];

pub const ORGANIZATION_BLURB: &str = "The Institution of Engineers (India) – IE(I) is a premier professional body dedicated to \
    fostering innovation, collaboration, and professional growth among engineers. \
    We bridge the gap between academic learning and industry practices.";

// About

pub static OBJECTIVES: [&str; 5] = [
    "Promote technical excellence and innovation among students",
    "Organize workshops, seminars, and industrial visits",
    "Facilitate networking between students and industry professionals",
    "Encourage participation in competitions and hackathons",
    "Support research and project development initiatives",
];

pub struct TeamMember {
    pub role: &'static str,
    pub name: &'static str,
    pub department: &'static str,
}

pub static TEAM: [TeamMember; 4] = [
    TeamMember { role: "President", name: "John Doe", department: "Mechanical Engineering" },
    TeamMember { role: "Vice President", name: "Jane Smith", department: "Electrical Engineering" },
    TeamMember { role: "Secretary", name: "Alex Johnson", department: "Computer Science" },
    TeamMember { role: "Faculty Coordinator", name: "Dr. Sarah Wilson", department: "Engineering" },
];

pub static WHY_WE_EXIST: [Card; 3] = [
    Card { title: "Innovation", description: "Fostering creative thinking and problem-solving", icon: "💡" },
    Card { title: "Community", description: "Building a network of future engineers", icon: "🤝" },
    Card { title: "Growth", description: "Accelerating professional development", icon: "🚀" },
];

// Events

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventCategory {
    Workshops,
    Seminars,
    TechnicalLectures,
    Conferences,
    StudentActivities,
}

impl EventCategory {
    pub const ALL: [EventCategory; 5] = [
        EventCategory::Workshops,
        EventCategory::Seminars,
        EventCategory::TechnicalLectures,
        EventCategory::Conferences,
        EventCategory::StudentActivities,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            EventCategory::Workshops => "Workshops",
            EventCategory::Seminars => "Seminars",
            EventCategory::TechnicalLectures => "Technical Lectures",
            EventCategory::Conferences => "Conferences",
            EventCategory::StudentActivities => "Student Activities",
        }
    }
}

pub struct UpcomingEvent {
    pub title: &'static str,
    pub date: &'static str,
    pub description: &'static str,
    pub location: &'static str,
    pub category: EventCategory,
}

pub static UPCOMING_EVENTS: [UpcomingEvent; 3] = [
    UpcomingEvent {
        title: "Advanced Machine Learning Workshop",
        date: "March 15, 2024",
        description: "Hands-on workshop covering deep learning fundamentals and practical applications in engineering.",
        location: "Main Auditorium",
        category: EventCategory::Workshops,
    },
    UpcomingEvent {
        title: "Sustainable Engineering Seminar",
        date: "March 22, 2024",
        description: "Exploring green technologies and sustainable practices in modern engineering projects.",
        location: "Conference Hall",
        category: EventCategory::Seminars,
    },
    UpcomingEvent {
        title: "Industry-Academia Connect",
        date: "April 5, 2024",
        description: "Networking event bringing together industry leaders and academic professionals.",
        location: "Engineering Block",
        category: EventCategory::Conferences,
    },
];

pub struct PastEvent {
    pub name: &'static str,
    pub location: &'static str,
    pub year: &'static str,
}

pub static PAST_EVENTS: [PastEvent; 9] = [
    PastEvent { name: "Tech Innovation Summit 2023", location: "New Delhi", year: "2023" },
    PastEvent { name: "Robotics Competition", location: "Mumbai", year: "2023" },
    PastEvent { name: "AI & ML Conference", location: "Bangalore", year: "2023" },
    PastEvent { name: "Engineering Excellence Awards", location: "Chennai", year: "2022" },
    PastEvent { name: "Startup Showcase", location: "Hyderabad", year: "2022" },
    PastEvent { name: "Women in Engineering Meet", location: "Pune", year: "2022" },
    PastEvent { name: "Research Symposium", location: "Kolkata", year: "2021" },
    PastEvent { name: "Industry Workshop Series", location: "Ahmedabad", year: "2021" },
    PastEvent { name: "Student Technical Fest", location: "Jaipur", year: "2020" },
];

pub struct Milestone {
    pub year: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub static TIMELINE: [Milestone; 4] = [
    Milestone { year: "2023", title: "Major Expansion", description: "Launched new chapters across 5 states" },
    Milestone { year: "2022", title: "Digital Transformation", description: "Introduced online learning platform" },
    Milestone { year: "2021", title: "Research Initiative", description: "Established research grants program" },
    Milestone { year: "2020", title: "Foundation Year", description: "Inaugurated new headquarters" },
];

// Membership

pub static MEMBERSHIP_TIERS: [Card; 3] = [
    Card {
        title: "Student Member (SMIE)",
        description: "For engineering students pursuing their degree. Access to student resources, workshops, and competitions.",
        icon: "🎓",
    },
    Card {
        title: "Associate Member (AMIE)",
        description: "For engineering graduates. Professional recognition, networking opportunities, and technical resources.",
        icon: "💼",
    },
    Card {
        title: "Corporate Member (MIE/FIE)",
        description: "For established professionals and organizations. Premium benefits, certifications, and industry connections.",
        icon: "🏢",
    },
];

pub static BENEFITS: [(&str, &str); 6] = [
    ("Professional Recognition", "🏅"),
    ("Access to Events", "👥"),
    ("Technical Resources", "📚"),
    ("Networking", "🔗"),
    ("Certifications", "📄"),
    ("Career Growth", "📈"),
];

// Resources

pub static RESOURCE_CATEGORIES: [Card; 3] = [
    Card {
        title: "Study Materials",
        description: "Access comprehensive PDFs, lecture notes, and study guides for various engineering disciplines.",
        icon: "📖",
    },
    Card {
        title: "Examination Resources",
        description: "Find syllabi, previous year papers, circulars, and examination guidelines for AMIE and other certifications.",
        icon: "✅",
    },
    Card {
        title: "Technical Journals & Publications",
        description: "Browse through research papers, technical journals, and publications from leading engineering institutions.",
        icon: "📚",
    },
];

pub struct Download {
    pub title: &'static str,
    pub kind: &'static str,
    pub size: &'static str,
}

pub static DOWNLOADS: [Download; 6] = [
    Download { title: "Previous Year Papers", kind: "PDF", size: "2.4 MB" },
    Download { title: "AMIE Syllabus PDFs", kind: "PDF", size: "1.8 MB" },
    Download { title: "IE(I) Circulars", kind: "PDF", size: "950 KB" },
    Download { title: "Technical Guidelines", kind: "PDF", size: "3.2 MB" },
    Download { title: "Code of Ethics", kind: "PDF", size: "1.1 MB" },
    Download { title: "Membership Application Form", kind: "PDF", size: "520 KB" },
];

pub struct ExternalLink {
    pub title: &'static str,
    pub description: &'static str,
    pub url: &'static str,
}

pub static EXTERNAL_LINKS: [ExternalLink; 5] = [
    ExternalLink { title: "NPTEL", description: "National Programme on Technology Enhanced Learning", url: "https://nptel.ac.in" },
    ExternalLink { title: "Coursera Engineering", description: "Online courses from top universities", url: "https://www.coursera.org" },
    ExternalLink { title: "GitHub Student Resources", description: "Open source projects and learning materials", url: "https://education.github.com" },
    ExternalLink { title: "Arduino Documentation", description: "Electronics and embedded systems resources", url: "https://www.arduino.cc" },
    ExternalLink { title: "Government Engineering Portals", description: "Official engineering resources and updates", url: "#" },
];

pub static PROJECT_IDEAS: [(&str, &str); 6] = [
    ("IoT-Based Smart Home System", "Design and implement a comprehensive home automation system using IoT sensors and microcontrollers."),
    ("Renewable Energy Monitoring Dashboard", "Real-time monitoring system for solar and wind energy generation with data visualization."),
    ("Automated Waste Management System", "AI-powered waste sorting and recycling system using computer vision and robotics."),
    ("Blockchain-Based Academic Credential Verification", "Secure and tamper-proof system for verifying academic certificates using blockchain technology."),
    ("Smart Traffic Management System", "Intelligent traffic control using machine learning and real-time data analysis."),
    ("Water Quality Monitoring System", "IoT-based solution for continuous monitoring of water quality parameters in real-time."),
];

// Contact

pub static CONTACT_INFO: [(&str, &str, &str); 3] = [
    ("✉", "Email", "iei@university.edu"),
    ("☎", "Phone", "+1 (234) 567-8900"),
    ("⌖", "Address", "Engineering Building, Room 101"),
];
