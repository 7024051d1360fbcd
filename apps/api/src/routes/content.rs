//! Static editorial content for the Home and About screens.

use axum::Json;
use rand::seq::SliceRandom;
use serde::Serialize;

const FACTS: [&str; 5] = [
    "The fastest-growing career in India is Data Science, expected to create 11M+ jobs by 2030.",
    "The average salary of an AI Engineer in India is ₹8-12 LPA for freshers.",
    "Graphic Designers are now in demand in media, healthcare & finance sectors.",
    "By 2030, 50% of jobs will require new skills due to automation and AI.",
    "India produces 1.5 million engineers every year, but only ~20% work in core fields.",
];

#[derive(Debug, Clone, Serialize)]
pub struct SuccessStory {
    pub name: &'static str,
    pub story: &'static str,
    pub quote: &'static str,
}

const STORIES: [SuccessStory; 3] = [
    SuccessStory {
        name: "Aditi Sharma",
        story: "From a small town in J&K, Aditi cracked IIT-JEE and is now a researcher in AI at Google.",
        quote: "Never doubt your potential, guidance + hard work = success!",
    },
    SuccessStory {
        name: "Ravi Kumar",
        story: "Started as a diploma student in civil engineering, Ravi built a startup in Sustainable Housing.",
        quote: "Your background doesn't define you, your choices do.",
    },
    SuccessStory {
        name: "Mehak Ali",
        story: "A passionate artist who turned her hobby into a career in Graphic Design freelancing worldwide.",
        quote: "Follow your passion, and success will follow you.",
    },
];

#[derive(Debug, Serialize)]
pub struct HomeView {
    pub fact: &'static str,
    pub stories: Vec<SuccessStory>,
}

/// GET /api/v1/home
pub async fn handle_home() -> Json<HomeView> {
    let fact = FACTS
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(FACTS[0]);
    Json(HomeView {
        fact,
        stories: STORIES.to_vec(),
    })
}

#[derive(Debug, Serialize)]
pub struct AboutView {
    pub title: &'static str,
    pub lines: Vec<&'static str>,
}

/// GET /api/v1/about
pub async fn handle_about() -> Json<AboutView> {
    Json(AboutView {
        title: "About Us",
        lines: vec![
            "Career Compass is your personal career guidance tool.",
            "It helps students in J&K explore careers, colleges, and roadmaps.",
        ],
    })
}
