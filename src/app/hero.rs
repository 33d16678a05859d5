use std::time::Duration;

use leptos::prelude::*;

use super::typing::Typewriter;
use crate::animate::TypingTimings;

const TITLES: &[&str] = &[
    "Code Wizard 🧙‍♂️",
    "Cloud Architect ☁️",
    "Problem Solver 🔧",
    "Coffee Consumer ☕",
    "Bit Whisperer 💻",
    "Tech Enthusiast 🚀",
    "Dream Builder 🌟",
];

#[component]
pub fn Hero() -> impl IntoView {
    let titles = TITLES.iter().map(|s| s.to_string()).collect::<Vec<_>>();
    let timings = TypingTimings {
        type_delay: Duration::from_millis(100),
        delete_delay: Duration::from_millis(50),
        pause: Duration::from_millis(2000),
    };

    view! {
        <header class="container mx-auto px-4 py-16 md:py-32">
            <div class="max-w-4xl mx-auto">
                <h1 class="text-4xl md:text-6xl font-bold mb-4">"KISHORE SURESH"</h1>
                <div class="text-xl md:text-2xl text-gray-300 mb-8 h-8 flex items-center">
                    <Typewriter phrases=titles timings=timings />
                </div>
                <p class="text-lg text-gray-400 mb-8 max-w-2xl">
                    "Experienced software engineer who turns ☕ into <code/>. Specializing in cloud-based application development, system optimization, and making computers do cool stuff!"
                </p>
                <div class="flex flex-wrap gap-4 text-gray-300">
                    <a
                        href="https://github.com/erohsikero"
                        target="_blank"
                        rel="noopener noreferrer"
                        class="flex items-center gap-2 hover:text-white"
                        aria-label="GitHub Profile"
                    >
                        <i class="devicon-github-plain"></i>
                        "ErohsikEro"
                    </a>
                    <a
                        href="https://www.linkedin.com/in/kishore-suresh/"
                        target="_blank"
                        rel="noopener noreferrer"
                        class="flex items-center gap-2 hover:text-white"
                        aria-label="LinkedIn Profile"
                    >
                        <i class="devicon-linkedin-plain"></i>
                        "Kishore-Suresh"
                    </a>
                    <span class="flex items-center gap-2">
                        <i class="extra-location"></i>
                        "Canada"
                    </span>
                </div>
            </div>
        </header>
    }
}
