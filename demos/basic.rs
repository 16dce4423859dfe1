use skill_matcher::{ProjectRecord, SkillMatcher};

fn main() {
    // matcher over the production skill list
    let matcher = SkillMatcher::with_default_vocabulary();

    // catalog snapshot, as the surrounding application would fetch it
    let catalog = vec![
        ProjectRecord::new(
            "p1",
            "alice",
            "Cluster autoscaler",
            "Scale worker pools from queue depth",
            vec!["Rust".into(), "Docker".into(), "Kubernetes".into()],
        ),
        ProjectRecord::new(
            "p2",
            "bob",
            "Course dashboard",
            "Progress charts for mentees",
            vec!["React".into(), "TypeScript".into(), "CSS".into()],
        ),
        ProjectRecord::new(
            "p3",
            "carol",
            "Defect detector",
            "Classify PCB photos",
            vec!["Python".into(), "PyTorch".into(), "Docker".into()],
        ),
    ];

    // free-text user skills: cased, padded, misspelled
    let user_skills = vec![
        "rust".to_string(),
        " DOCKER ".to_string(),
        "kuberntes".to_string(),
    ];

    let ranking = matcher.rank_projects(&catalog, &user_skills);
    println!("Ranked projects:\n{:#?}", ranking);

    let vector = matcher.user_vector(&catalog, &user_skills);
    println!("Top skills: {:?}", matcher.top_skills(&vector, 3));

    let gaps = matcher.skill_gaps(&user_skills, &catalog[2].skills_required);
    println!("Gaps toward {}: {:?}", catalog[2].id, gaps);
}
