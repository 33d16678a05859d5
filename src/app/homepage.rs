use leptos::prelude::*;
use leptos_meta::Title;

use super::hero::Hero;
use super::reveal::RevealOnScroll;
use super::sections::{
    AwardsSection, EducationSection, ExperienceSection, Footer, ProjectsSection, SkillsSection,
};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <div class="min-h-screen bg-black text-white">
            <RevealOnScroll>
                <Hero />
            </RevealOnScroll>
            <section class="bg-white text-black py-16">
                <div class="container mx-auto px-4">
                    <RevealOnScroll>
                        <ExperienceSection />
                    </RevealOnScroll>
                </div>
            </section>
            <section class="bg-black text-white py-16">
                <div class="container mx-auto px-4">
                    <RevealOnScroll>
                        <SkillsSection />
                    </RevealOnScroll>
                </div>
            </section>
            <section class="bg-white text-black py-16">
                <div class="container mx-auto px-4">
                    <RevealOnScroll>
                        <ProjectsSection />
                    </RevealOnScroll>
                </div>
            </section>
            <section class="bg-black text-white py-16">
                <div class="container mx-auto px-4">
                    <RevealOnScroll>
                        <EducationSection />
                    </RevealOnScroll>
                </div>
            </section>
            <section class="bg-white text-black py-16">
                <div class="container mx-auto px-4">
                    <RevealOnScroll>
                        <AwardsSection />
                    </RevealOnScroll>
                </div>
            </section>
            <Footer />
        </div>
    }
}
