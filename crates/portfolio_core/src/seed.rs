//! Bundled default dataset.
//!
//! Used per collection whenever nothing usable is persisted for it.

use crate::model::certification::Certification;
use crate::model::profile::{Education, Profile, SocialLink};
use crate::model::project::{Project, ProjectStatus};
use crate::model::resume::ResumeLinks;
use crate::model::skill::{Skill, SkillCategory};

/// Default content for every store collection.
#[derive(Debug, Clone, PartialEq)]
pub struct SeedData {
    pub projects: Vec<Project>,
    pub certifications: Vec<Certification>,
    pub skills: Vec<Skill>,
    pub resume_links: ResumeLinks,
    pub profile: Profile,
}

impl SeedData {
    /// Seed with empty collections, handy for tests and blank installs.
    pub fn empty() -> Self {
        Self {
            projects: Vec::new(),
            certifications: Vec::new(),
            skills: Vec::new(),
            resume_links: ResumeLinks::new("", ""),
            profile: Profile {
                name: String::new(),
                title: String::new(),
                introduction: String::new(),
                photo_url: String::new(),
                education: Vec::new(),
                social_links: Vec::new(),
            },
        }
    }
}

impl Default for SeedData {
    fn default() -> Self {
        Self {
            projects: default_projects(),
            certifications: default_certifications(),
            skills: default_skills(),
            resume_links: ResumeLinks::new("/cv/general-resume.pdf", "/cv/specialized-resume.pdf"),
            profile: default_profile(),
        }
    }
}

fn project(
    id: &str,
    title: &str,
    description: &str,
    technologies: &[&str],
    image: &str,
    github: &str,
) -> Project {
    let mut project = Project::new(id, title);
    project.description = description.to_string();
    project.technologies = technologies.iter().map(|tech| tech.to_string()).collect();
    project.image = image.to_string();
    project.github = Some(github.to_string());
    project.status = ProjectStatus::Live;
    project
}

fn default_projects() -> Vec<Project> {
    vec![
        project(
            "project1",
            "Recipe Sharing Platform",
            "A dynamic React-based Recipe Sharing Platform that allows users to create, share, favorite, and explore recipes with search, categorization, and social interactions.",
            &["React", "Node.js", "PHP"],
            "/projects/recipe-react/recipe-react.png",
            "https://github.com/Yaswanth-Marri/recipe-react",
        ),
        project(
            "project2",
            "Online Courses Project",
            "A responsive frontend online courses platform that lets users browse, enroll in, and interact with a wide range of courses.",
            &["Angular", "Node.js"],
            "/projects/online courses project/online courses project.png",
            "https://github.com/Yaswanth-Marri/Online-Courses-Project",
        ),
        project(
            "project3",
            "Recipe share PHP",
            "A PHP backend for a recipe sharing platform that manages user accounts, recipe submissions, favorites, likes, and search.",
            &["PHP", "MySQL"],
            "/projects/recipe-share/recipeshare.png",
            "https://github.com/Yaswanth-Marri/recipe-share",
        ),
    ]
}

fn default_certifications() -> Vec<Certification> {
    let mut devops = Certification::new("cert1", "DevOps Certificate", "DevOps Institute", "2024-02-24");
    devops.credential_link = Some("/certificates/DevOps certicate.pdf".to_string());
    devops.image = Some("/certificates/Devopsgfg.webp".to_string());

    let mut cloud = Certification::new(
        "cert2",
        "Cloud Computing Certificate",
        "Cloud Computing Institute",
        "2023-11-30",
    );
    cloud.credential_link = Some("/certificates/cloudcomputing.pdf".to_string());
    cloud.image = Some("/certificates/cloud.jpeg".to_string());

    vec![devops, cloud]
}

fn default_skills() -> Vec<Skill> {
    use SkillCategory::{Backend, Frontend, Languages, Tools};

    [
        ("JavaScript", 90, Frontend, "FileCode"),
        ("TypeScript", 85, Frontend, "FileCode"),
        ("React", 88, Frontend, "Code"),
        ("HTML/CSS", 92, Frontend, "Layout"),
        ("Tailwind CSS", 90, Frontend, "Wind"),
        ("Node.js", 82, Backend, "Server"),
        ("Express", 80, Backend, "Server"),
        ("MongoDB", 75, Backend, "Database"),
        ("SQL", 70, Backend, "Database"),
        ("Git", 85, Tools, "Git"),
        ("Docker", 65, Tools, "Box"),
        ("VS Code", 90, Tools, "Code2"),
        ("Python", 80, Languages, "FileCode"),
        ("Java", 75, Languages, "FileCode"),
        ("C++", 60, Languages, "FileCode"),
    ]
    .into_iter()
    .map(|(name, proficiency, category, icon)| Skill::new(name, proficiency, category).with_icon(icon))
    .collect()
}

fn default_profile() -> Profile {
    let education = [
        (
            "Lovely Professional University",
            "Bachelor of Technology - Computer Science and Engineering",
            "Punjab, India",
            "2022-Present",
        ),
        ("NRI Academy", "Intermediate", "Guntur, Andhra Pradesh", "2020-2022"),
        (
            "St. Laurels School",
            "Matriculation",
            "Guntur, Andhra Pradesh",
            "April 2016 - March 2018",
        ),
    ]
    .into_iter()
    .map(|(institution, degree, location, period)| Education {
        institution: institution.to_string(),
        degree: degree.to_string(),
        location: location.to_string(),
        period: period.to_string(),
    })
    .collect();

    let social_links = [
        ("GitHub", "https://github.com/", "Github"),
        ("LinkedIn", "https://linkedin.com/in/", "Linkedin"),
        ("Email", "mailto:your.email@example.com", "Mail"),
    ]
    .into_iter()
    .map(|(name, url, icon)| SocialLink {
        name: name.to_string(),
        url: url.to_string(),
        icon: icon.to_string(),
    })
    .collect();

    Profile {
        name: "Marri Venkata Siva Naga Yaswanth".to_string(),
        title: "Crafting Digital Experiences Through Code".to_string(),
        introduction: "Full-stack web developer building dynamic, scalable, user-focused web applications across the front end and back end.".to_string(),
        photo_url: "/portfolio-picture.jpeg".to_string(),
        education,
        social_links,
    }
}
