//! Flattens a structured resume into one plain-text blob for extraction

use crate::model::resume::ResumeProfile;

/// Project a resume to text: summary, name, skills, experience, education
///
/// Field order is fixed so extraction order (and everything downstream of
/// it) is deterministic. Missing fields contribute nothing.
pub fn project(resume: &ResumeProfile) -> String {
    fn push<'a>(field: &'a Option<String>, parts: &mut Vec<&'a str>) {
        if let Some(value) = field.as_deref() {
            if !value.trim().is_empty() {
                parts.push(value);
            }
        }
    }

    let mut parts: Vec<&str> = Vec::new();
    push(&resume.summary, &mut parts);
    push(&resume.personal_info.first_name, &mut parts);
    push(&resume.personal_info.last_name, &mut parts);

    parts.extend(resume.skills.technical.iter().map(String::as_str));
    parts.extend(resume.skills.soft.iter().map(String::as_str));

    for experience in &resume.work_experience {
        push(&experience.position, &mut parts);
        push(&experience.company, &mut parts);
        parts.extend(experience.description.iter().map(String::as_str));
        parts.extend(experience.achievements.iter().map(String::as_str));
    }

    for education in &resume.education {
        push(&education.degree, &mut parts);
        push(&education.field_of_study, &mut parts);
        push(&education.institution, &mut parts);
    }

    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::resume::{Education, Experience, PersonalInfo, SkillSet};

    #[test]
    fn test_projection_order_and_content() {
        let resume = ResumeProfile {
            personal_info: PersonalInfo {
                first_name: Some("Ada".to_string()),
                last_name: Some("Lovelace".to_string()),
                ..Default::default()
            },
            summary: Some("Backend engineer".to_string()),
            skills: SkillSet {
                technical: vec!["Rust".to_string()],
                soft: vec!["Mentoring".to_string()],
            },
            work_experience: vec![Experience {
                position: Some("Engineer".to_string()),
                company: Some("Analytical Ltd".to_string()),
                description: vec!["Built compilers".to_string()],
                achievements: vec!["Shipped v1".to_string()],
                ..Default::default()
            }],
            education: vec![Education {
                degree: Some("BSc".to_string()),
                field_of_study: Some("Mathematics".to_string()),
                institution: Some("London".to_string()),
            }],
        };

        let text = project(&resume);
        assert_eq!(
            text,
            "Backend engineer Ada Lovelace Rust Mentoring Engineer Analytical Ltd \
             Built compilers Shipped v1 BSc Mathematics London"
        );
    }

    #[test]
    fn test_empty_resume_projects_to_empty_text() {
        let text = project(&ResumeProfile::default());
        assert!(text.is_empty());
    }

    #[test]
    fn test_missing_fields_never_emit_placeholders() {
        let resume = ResumeProfile {
            work_experience: vec![Experience::default()],
            ..Default::default()
        };
        let text = project(&resume);
        assert!(!text.contains("null"));
        assert!(!text.contains("undefined"));
        assert!(text.trim().is_empty());
    }
}
