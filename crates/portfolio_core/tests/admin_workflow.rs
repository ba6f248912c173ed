use portfolio_core::db::open_db_in_memory;
use portfolio_core::service::technology::{candidates_for, resolve_candidates};
use portfolio_core::{
    detect_new_technologies, CertificationDraft, CollectionKind, ContentStore, Credential,
    EditPlan, EditSummary, MutationOutcome, PortfolioService, ProjectDraft, ProjectPatch,
    SeedData, ServiceError, Skill, SkillCandidate, SkillCategory, SkillDraft, SqliteBlobStore,
};
use rusqlite::Connection;

fn service(conn: &Connection) -> PortfolioService<SqliteBlobStore<'_>> {
    PortfolioService::new(ContentStore::open(
        SqliteBlobStore::new(conn),
        SeedData::default(),
    ))
}

fn tags(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

#[test]
fn detection_ignores_case_against_skills_and_within_tags() {
    let skills = vec![
        Skill::new("React", 80, SkillCategory::Frontend),
        Skill::new("Node.js", 70, SkillCategory::Backend),
    ];

    let detected = detect_new_technologies(&skills, &tags(&["React", "Docker", "docker"]));

    assert_eq!(detected, vec!["Docker"]);
}

#[test]
fn detection_keeps_submission_order() {
    let skills = vec![Skill::new("react", 80, SkillCategory::Frontend)];

    let detected = detect_new_technologies(&skills, &tags(&["Vite", "REACT", "Astro", "vite"]));

    assert_eq!(detected, vec!["Vite", "Astro"]);
}

#[test]
fn candidates_resolve_custom_category_and_skip() {
    let mut candidates = candidates_for(&[], &tags(&["Terraform", "Ansible", "Figma"]));
    assert!(candidates
        .iter()
        .all(|c| c.proficiency == 50 && c.category == SkillCategory::other()));

    candidates[0].custom_category = "  Cloud Ops ".to_string();
    candidates[0].set_proficiency(140);
    candidates[1].skip = true;
    candidates[2].category = SkillCategory::Tools;
    candidates[2].custom_category = "ignored".to_string();

    let skills = resolve_candidates(&candidates);

    assert_eq!(skills.len(), 2);
    assert_eq!(skills[0].name, "Terraform");
    assert_eq!(skills[0].proficiency, 100);
    assert_eq!(skills[0].category, SkillCategory::Custom("cloud ops".to_string()));
    assert_eq!(skills[1].category, SkillCategory::Tools);
}

#[test]
fn submit_project_assigns_id_and_reports_candidates() {
    let conn = open_db_in_memory().unwrap();
    let mut service = service(&conn);

    let submission = service
        .submit_project(ProjectDraft {
            title: "  Portfolio  ".to_string(),
            technologies: tags(&["React", " ", "Svelte"]),
            github: "   ".to_string(),
            credentials: vec![Credential::new("user", "demo"), Credential::new("", "x")],
            ..ProjectDraft::default()
        })
        .unwrap();

    assert!(submission.id.starts_with("project-"));
    assert!(submission.outcome.persisted);
    let names: Vec<&str> = submission.candidates.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Svelte"]);

    let project = service.store().project(&submission.id).unwrap();
    assert_eq!(project.title, "Portfolio");
    assert_eq!(project.technologies, tags(&["React", "Svelte"]));
    assert_eq!(project.image, "/projects/placeholder.png");
    assert_eq!(project.github, None);
    assert_eq!(project.credentials, vec![Credential::new("user", "demo")]);
    assert_eq!(service.store().projects().last().unwrap().id, submission.id);

    let outcome = service.add_discovered_skills(&submission.candidates);
    assert!(outcome.changed);
    assert!(service.store().skill("Svelte").is_some());
}

#[test]
fn submit_rejects_blank_required_fields() {
    let conn = open_db_in_memory().unwrap();
    let mut service = service(&conn);

    let err = service.submit_project(ProjectDraft::default()).unwrap_err();
    assert_eq!(err, ServiceError::MissingField("title"));

    let err = service
        .submit_certification(CertificationDraft {
            name: "AWS".to_string(),
            issuer: "Amazon".to_string(),
            ..CertificationDraft::default()
        })
        .unwrap_err();
    assert_eq!(err, ServiceError::MissingField("date"));

    let err = service.submit_skill(SkillDraft::default()).unwrap_err();
    assert_eq!(err, ServiceError::MissingField("name"));

    assert_eq!(service.store().projects().len(), 3);
    assert_eq!(service.store().certifications().len(), 2);
}

#[test]
fn submit_certification_and_skill_normalize_input() {
    let conn = open_db_in_memory().unwrap();
    let mut service = service(&conn);

    let (id, _) = service
        .submit_certification(CertificationDraft {
            name: "CKA".to_string(),
            issuer: "CNCF".to_string(),
            date: "2025-06-01".to_string(),
            credential_link: "https://verify".to_string(),
            image: String::new(),
        })
        .unwrap();
    let cert = service.store().certification(&id).unwrap();
    assert!(id.starts_with("cert-"));
    assert_eq!(cert.credential_link.as_deref(), Some("https://verify"));
    assert_eq!(cert.image, None);

    service
        .submit_skill(SkillDraft {
            name: " Bash ".to_string(),
            proficiency: -3,
            category: SkillCategory::other(),
            custom_category: "Scripting".to_string(),
            icon: String::new(),
        })
        .unwrap();
    let skill = service.store().skill("Bash").unwrap();
    assert_eq!(skill.proficiency, 0);
    assert_eq!(skill.category, SkillCategory::Custom("scripting".to_string()));
    assert_eq!(skill.icon, None);
}

#[test]
fn edit_without_new_technologies_is_ready() {
    let conn = open_db_in_memory().unwrap();
    let service = service(&conn);

    let plan = service
        .begin_project_edit(
            "project1",
            ProjectPatch {
                technologies: Some(tags(&["react", " node.js ", ""])),
                ..ProjectPatch::default()
            },
        )
        .unwrap();

    match plan {
        EditPlan::Ready { patch } => {
            assert_eq!(patch.technologies, Some(tags(&["react", "node.js"])));
        }
        other => panic!("unexpected plan: {other:?}"),
    }
}

#[test]
fn edit_of_unknown_project_is_rejected() {
    let conn = open_db_in_memory().unwrap();
    let service = service(&conn);

    let err = service
        .begin_project_edit("nope", ProjectPatch::default())
        .unwrap_err();

    assert_eq!(err, ServiceError::ProjectNotFound("nope".to_string()));
}

#[test]
fn reviewed_edit_commits_project_and_accepted_skills() {
    let conn = open_db_in_memory().unwrap();
    let mut service = service(&conn);

    let plan = service
        .begin_project_edit(
            "project2",
            ProjectPatch {
                technologies: Some(tags(&["Angular", "Node.js", "RxJS", "NgRx", "Jest"])),
                ..ProjectPatch::default()
            },
        )
        .unwrap();
    let EditPlan::NeedsSkills { patch, mut candidates } = plan else {
        panic!("expected new technologies");
    };
    let names: Vec<&str> = candidates.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Angular", "RxJS", "NgRx", "Jest"]);

    candidates[3].skip = true;
    let summary = service.commit_project_edit("project2", &patch, &candidates);

    assert_eq!(
        summary,
        EditSummary {
            outcome: MutationOutcome {
                changed: true,
                persisted: true,
            },
            added: 3,
            skipped: 1,
        }
    );
    assert_eq!(summary.message(), "Project updated, 3 skill(s) added, 1 skipped");
    assert!(service.store().skill("RxJS").is_some());
    assert!(service.store().skill("Jest").is_none());
    assert_eq!(
        service.store().project("project2").unwrap().technologies.len(),
        5
    );
    assert_eq!(
        service.store().hydration().source(CollectionKind::Skills),
        portfolio_core::HydrationSource::SeedMissing
    );
}

#[test]
fn skip_all_saves_only_the_project() {
    let conn = open_db_in_memory().unwrap();
    let mut service = service(&conn);
    let skills_before = service.store().skills().len();

    let patch = ProjectPatch {
        technologies: Some(tags(&["Deno"])),
        ..ProjectPatch::default()
    };
    let outcome = service.skip_all_new_skills("project3", &patch);

    assert!(outcome.changed);
    assert_eq!(service.store().skills().len(), skills_before);
    assert_eq!(
        service.store().project("project3").unwrap().technologies,
        tags(&["Deno"])
    );
}

#[test]
fn summary_message_omits_zero_counts() {
    let summary = EditSummary {
        outcome: MutationOutcome {
            changed: true,
            persisted: true,
        },
        added: 0,
        skipped: 0,
    };
    assert_eq!(summary.message(), "Project updated");

    let candidate = SkillCandidate::new("Go");
    assert_eq!(candidate.to_skill().category, SkillCategory::other());
}
