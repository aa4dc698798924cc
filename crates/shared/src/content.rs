//! Built-in portfolio content. Everything here is constructed once at startup
//! and treated as immutable for the lifetime of the window.

use crate::domain::{ContactChannel, Highlight, ProjectRecord, SkillCategory};

#[derive(Debug, Clone)]
pub struct PortfolioContent {
    pub owner_name: String,
    pub greeting: String,
    pub role_line: String,
    pub biography: String,
    pub github_url: String,
    pub profile_image: String,
    pub contact_email: String,
    pub highlights: Vec<Highlight>,
    pub skill_categories: Vec<SkillCategory>,
    pub projects: Vec<ProjectRecord>,
    pub contact_channels: Vec<ContactChannel>,
}

impl PortfolioContent {
    pub fn builtin() -> Self {
        Self {
            owner_name: "Zyrach Adrian Agres".to_string(),
            greeting: "Hello, I'm".to_string(),
            role_line: "Aspiring Software Developer".to_string(),
            biography: "I'm a passionate Computer Science student and Game \
                        Development Mentor at SCRIPT, exploring the diverse world \
                        of software development. I enjoy building web apps, games, \
                        and mobile applications, and I'm eager to grow and apply \
                        my creativity in real-world projects."
                .to_string(),
            github_url: "https://github.com/ZAAALJLJ".to_string(),
            profile_image: "assets/profile.jpg".to_string(),
            contact_email: "fo.agres.zyrach.m01@gmail.com".to_string(),
            highlights: vec![
                Highlight {
                    figure: "5".to_string(),
                    label: "Completed Projects".to_string(),
                    icon: "💻".to_string(),
                },
                Highlight {
                    figure: "100%".to_string(),
                    label: "Problem Solving".to_string(),
                    icon: "🧩".to_string(),
                },
                Highlight {
                    figure: "24/7".to_string(),
                    label: "Learning".to_string(),
                    icon: "📚".to_string(),
                },
            ],
            skill_categories: vec![
                SkillCategory {
                    title: "Programming Languages".to_string(),
                    icon: "⚡".to_string(),
                    skills: [
                        "Python",
                        "JavaScript",
                        "TypeScript",
                        "C#",
                        "C++",
                        "C",
                        "SQL",
                        "HTML/CSS",
                        "GDScript",
                    ]
                    .map(str::to_string)
                    .to_vec(),
                },
                SkillCategory {
                    title: "Technical Skills".to_string(),
                    icon: "🚀".to_string(),
                    skills: [
                        "React", "Flask", "FastAPI", "Git", "MongoDB", "REST APIs", "Godot",
                        "Unity",
                    ]
                    .map(str::to_string)
                    .to_vec(),
                },
                SkillCategory {
                    title: "Soft Skills".to_string(),
                    icon: "🧠".to_string(),
                    skills: [
                        "Problem Solving",
                        "Communication",
                        "Time Management",
                        "Critical Thinking",
                        "Adaptability",
                        "Team Collaboration",
                        "Leadership",
                    ]
                    .map(str::to_string)
                    .to_vec(),
                },
            ],
            projects: vec![
                ProjectRecord {
                    title: "ClashCards: Battle of Knowledge".to_string(),
                    description: "A competitive web-based flashcard platform that transforms \
                                  learning into an exciting multiplayer experience. Features \
                                  include real-time battles, custom flashcard creation, lobby \
                                  system, and live leaderboards."
                        .to_string(),
                    preview_image: "assets/clashcards-preview.jpg".to_string(),
                    tech_stack: ["ReactJS", "Python", "FastAPI", "WebSocket", "CSS"]
                        .map(str::to_string)
                        .to_vec(),
                    link: "https://github.com/ZAAALJLJ/ClashCards".to_string(),
                },
                ProjectRecord {
                    title: "CODEase: Legacy Visual Programming".to_string(),
                    description: "A web-based visual programming simulator featuring \
                                  block-based coding with drag-and-drop functionality. Users \
                                  can create programs by connecting blocks, visualize \
                                  execution line-by-line, and see real-time output."
                        .to_string(),
                    preview_image: "assets/codease.jpg".to_string(),
                    tech_stack: ["JavaScript", "HTML", "CSS", "Node.js", "Express.js"]
                        .map(str::to_string)
                        .to_vec(),
                    link: "https://github.com/ZAAALJLJ/CODEase".to_string(),
                },
                ProjectRecord {
                    title: "CHAVATAR: AI-Integrated SDG Awareness Platform".to_string(),
                    description: "An online platform that promotes awareness of the \
                                  Sustainable Development Goals through AI technology. \
                                  Features AI-driven conversations with a speaking avatar, \
                                  user-to-user interactions, and themed forums."
                        .to_string(),
                    preview_image: "assets/chavatar.jpg".to_string(),
                    tech_stack: ["C#", ".NET", "Gemini API", "WPF", "AI Integration"]
                        .map(str::to_string)
                        .to_vec(),
                    link: "https://github.com/ZAAALJLJ/SpeakingChatbot".to_string(),
                },
                ProjectRecord {
                    title: "Datu Sandigan: The Moonborne Oath".to_string(),
                    description: "A 2D platformer hack-and-slash game built with Godot \
                                  Engine, immersing players in Philippine mythology. Dynamic \
                                  melee combat with traditional Filipino weapons and a \
                                  narrative spanning three chapters."
                        .to_string(),
                    preview_image: "assets/datusandigan.jpg".to_string(),
                    tech_stack: [
                        "Godot Engine",
                        "GDScript",
                        "Game Design",
                        "2D Animation",
                        "Level Design",
                    ]
                    .map(str::to_string)
                    .to_vec(),
                    link: "https://github.com/HusPhil/DatuSandigan".to_string(),
                },
            ],
            contact_channels: vec![
                ContactChannel {
                    title: "Email".to_string(),
                    value: "fo.agres.zyrach.m01@gmail.com".to_string(),
                    icon: "📧".to_string(),
                },
                ContactChannel {
                    title: "Phone".to_string(),
                    value: "(+63) 9933680436".to_string(),
                    icon: "📱".to_string(),
                },
                ContactChannel {
                    title: "Location".to_string(),
                    value: "Batangas City, CALABARZON".to_string(),
                    icon: "📍".to_string(),
                },
            ],
        }
    }
}
