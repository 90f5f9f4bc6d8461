//! Static portfolio content that is not translated.
//!
//! Translated content (project descriptions, jobs, degrees) lives in the
//! dictionaries; the item types here are what those lists deserialize into.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub location: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub github: &'static str,
    pub linkedin: &'static str,
}

pub const PROFILE: Profile = Profile {
    name: "Satyam Arora",
    location: "Hämeenlinna, Finland",
    email: "arorasatyam1112@gmail.com",
    phone: "+358 466199543",
    github: "https://github.com/yourhandle",
    linkedin: "https://www.linkedin.com/in/satyam-arora-211120/",
};

pub const SKILLS: &[&str] = &[
    "JavaScript",
    "TypeScript",
    "Python",
    "Java",
    "React",
    "Vite",
    "Material UI",
    "Node.js",
    "Express.js",
    "PostgreSQL",
    "MySQL",
    "MongoDB",
    "Docker",
    "CI/CD",
    "Azure",
    "AWS (basics)",
    "PowerBI",
    "Tableau",
    "Web Scraping",
    "AI API Integration",
    "Agile/Scrum",
    "Git",
    "Excel",
];

/// Technology tags by project title. Titles are the same in every language.
const PROJECT_TAGS: &[(&str, &[&str])] = &[
    ("AI Chatbot — CLI", &["Python", "OpenAI API", "CLI"]),
    ("AI Chatbot — React UI", &["React", "OpenAI API", "UX"]),
    ("EDEKAOffers Scraper", &["Python", "Web Scraping", "Data"]),
    ("WeatherApp", &["Python", "API"]),
    ("PDFDownloader", &["Python", "Automation"]),
    ("FudHub", &["PHP", "HTML", "CSS"]),
];

const PROJECT_REPOS: &[(&str, &str)] = &[
    (
        "AI Chatbot — CLI",
        "https://github.com/brogrammer2000/AI_Research_Agent",
    ),
    (
        "AI Chatbot — React UI",
        "https://github.com/brogrammer2000/AI_Research_Bot",
    ),
    (
        "EDEKAOffers Scraper",
        "https://github.com/brogrammer2000/Fetching_Offers_EDEKA",
    ),
    ("WeatherApp", "https://github.com/brogrammer2000/WeatherAPI-Py-"),
    ("PDFDownloader", "https://github.com/brogrammer2000/PDF_Downloader"),
    ("FudHub", "https://github.com/brogrammer2000/fud-hub_2.0"),
];

/// Tags shown under a project; empty for unknown titles
pub fn project_tags(title: &str) -> &'static [&'static str] {
    PROJECT_TAGS
        .iter()
        .find(|(t, _)| *t == title)
        .map(|(_, tags)| *tags)
        .unwrap_or(&[])
}

pub fn project_repo(title: &str) -> Option<&'static str> {
    PROJECT_REPOS
        .iter()
        .find(|(t, _)| *t == title)
        .map(|(_, url)| *url)
}

// Translated list items

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub title: String,
    pub dates: String,
    #[serde(default)]
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Degree {
    pub degree: String,
    pub school: String,
    pub dates: String,
    #[serde(default)]
    pub bullets: Vec<String>,
}

/// Volunteering entries share the job layout
pub type Volunteering = Job;
