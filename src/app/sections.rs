use leptos::prelude::*;

// Stamped by build.rs as an RFC 3339 timestamp; the first four bytes are the
// year for the footer.
const BUILD_TIME: &str = env!("BUILD_TIME");

struct SkillCategory {
    title: &'static str,
    skills: &'static [&'static str],
}

const SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        title: "Programming & Scripting",
        skills: &["Python 🐍", "Java ☕", "C/C++ ⚡"],
    },
    SkillCategory {
        title: "CI/CD & DevOps",
        skills: &["GitHub 🐱", "GitHub Actions 🤖", "Bitbucket 🪣", "GCP ☁️"],
    },
    SkillCategory {
        title: "Database & Cache",
        skills: &["PostgreSQL 🐘", "MySQL 🐬", "Redis 🚀", "Kafka 📨"],
    },
];

struct Project {
    title: &'static str,
    description: &'static str,
    tech: &'static str,
}

const PROJECTS: &[Project] = &[
    Project {
        title: "Smart Surveillance System",
        description: "Teaching cameras to be smart! 📸 AI-powered system that catches sneaky intruders.",
        tech: "YOLO, AWS EC2, AWS S3, Deep Learning, Android",
    },
    Project {
        title: "One's SEGAIN in Life",
        description: "Making pools safer! 🏊‍♂️ AI lifeguard that never sleeps (unlike real ones).",
        tech: "YOLO, Embedded Systems, AI Mobile Application",
    },
];

struct Schooling {
    degree: &'static str,
    school: &'static str,
    period: &'static str,
}

const EDUCATION: &[Schooling] = &[
    Schooling {
        degree: "Post Graduate Diploma, Cloud Data Management",
        school: "Conestoga College, Doon Campus, Canada",
        period: "Sept 2024 - Present",
    },
    Schooling {
        degree: "Bachelor of Technology (B.Tech), Information Technology",
        school: "Sri Venkateswara College Of Engineering, Sriperumbudur, India",
        period: "2016 - 2020",
    },
];

const AWARDS: &[&str] = &[
    "🏆 Winner - HACK & TACKLE 1.0 24hrs Hackathon",
    "🏆 Winner - VISAI 19 International Project Competition",
    "🥈 Runner-up - MOZOHACK 24-hour Hackathon",
    "🥈 Runner-up - VIVID 19 National Level Project Competition",
    "🎖️ Honorable Mention - IEEE YESIST 12 Innovation Challenge, Thailand",
];

#[component]
pub fn ExperienceSection() -> impl IntoView {
    view! {
        <h2 class="text-3xl font-bold mb-8">"Where I've Left My Mark"</h2>
        <div class="space-y-8">
            <div class="bg-gray-100 rounded-lg p-6 hover:shadow-xl transition-all duration-300">
                <div class="flex justify-between items-start mb-4">
                    <div>
                        <h3 class="text-xl font-semibold">
                            "Software Developer [Member Technical Staff]"
                        </h3>
                        <p class="text-gray-600">"Zoho Corporation, Chennai, India"</p>
                    </div>
                    <span class="text-gray-600">"Oct 2020 - Aug 2024"</span>
                </div>
                <ul class="list-disc list-inside text-gray-700 space-y-2">
                    <li>
                        "Crafted magical cloud-based solutions for MDM Cloud & Desktop Central Cloud ✨"
                    </li>
                    <li>"Built super-fast Redis frameworks that made databases go zoom! 🚀"</li>
                    <li>
                        "Collaborated with awesome teammates to create REST APIs that actually REST 😴"
                    </li>
                    <li>"Fought and defeated countless bugs in the wild 🐛"</li>
                </ul>
                <p class="mt-4 text-gray-600">
                    <strong>"My weapons of choice: "</strong>
                    "Java, Redis, Ant, Kafka, Apache Tomcat, Nginx, PostgreSQL"
                </p>
            </div>
        </div>
    }
}

#[component]
pub fn SkillsSection() -> impl IntoView {
    view! {
        <h2 class="text-3xl font-bold mb-8">"My Tech Superpowers"</h2>
        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
            {SKILL_CATEGORIES
                .iter()
                .map(|category| {
                    view! {
                        <div class="bg-zinc-900 rounded-lg p-6 hover:shadow-xl transition-all duration-300 border border-zinc-800">
                            <h3 class="text-xl font-semibold mb-4">{category.title}</h3>
                            <div class="flex flex-wrap gap-2">
                                {category
                                    .skills
                                    .iter()
                                    .map(|skill| {
                                        view! {
                                            <span class="bg-zinc-800 px-3 py-1 rounded-full text-sm">
                                                {*skill}
                                            </span>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn ProjectsSection() -> impl IntoView {
    view! {
        <h2 class="text-3xl font-bold mb-8">"Cool Stuff I've Built"</h2>
        <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
            {PROJECTS
                .iter()
                .map(|project| {
                    view! {
                        <div class="bg-gray-100 rounded-lg p-6 hover:shadow-xl transition-all duration-300">
                            <h3 class="text-xl font-semibold mb-2">{project.title}</h3>
                            <p class="text-gray-700 mb-4">{project.description}</p>
                            <p class="text-gray-600">
                                <strong>"Magic ingredients: "</strong>
                                {project.tech}
                            </p>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn EducationSection() -> impl IntoView {
    view! {
        <h2 class="text-3xl font-bold mb-8">"Brain Upgrades"</h2>
        <div class="space-y-6">
            {EDUCATION
                .iter()
                .map(|edu| {
                    view! {
                        <div class="bg-zinc-900 rounded-lg p-6 hover:shadow-xl transition-all duration-300 border border-zinc-800">
                            <div class="flex justify-between items-start">
                                <div>
                                    <h3 class="text-xl font-semibold">{edu.degree}</h3>
                                    <p class="text-gray-400">{edu.school}</p>
                                </div>
                                <span class="text-gray-400">{edu.period}</span>
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn AwardsSection() -> impl IntoView {
    view! {
        <h2 class="text-3xl font-bold mb-8">"Trophy Cabinet"</h2>
        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
            {AWARDS
                .iter()
                .map(|award| {
                    view! {
                        <div class="bg-gray-100 rounded-lg p-6 hover:shadow-xl transition-all duration-300">
                            <p class="text-gray-700">{*award}</p>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let year = &BUILD_TIME[..4];
    view! {
        <footer class="bg-black py-8">
            <div class="container mx-auto px-4 text-center text-gray-400">
                <p>"Made with ☕ by Kishore Suresh © " {year}</p>
            </div>
        </footer>
    }
}
