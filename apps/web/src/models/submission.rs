use serde::Deserialize;

/// Fields posted by the résumé form to `POST /generate`.
///
/// Every key is optional on the wire. Missing keys become empty strings so the
/// renderer never has to distinguish "absent" from "left blank".
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ResumeSubmission {
    pub name: String,
    pub furigana: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub birth: String,
    #[serde(rename = "desiredPosition")]
    pub desired_position: Option<String>,
    pub experience: String,
    #[serde(rename = "prText")]
    pub pr_text: String,
}

impl ResumeSubmission {
    /// The desired position, or `None` when it was omitted or submitted empty.
    pub fn desired_position(&self) -> Option<&str> {
        self.desired_position.as_deref().filter(|s| !s.is_empty())
    }

    /// Experience text, or `None` when blank (empty or whitespace only).
    pub fn experience(&self) -> Option<&str> {
        non_blank(&self.experience)
    }

    pub fn pr_text(&self) -> Option<&str> {
        non_blank(&self.pr_text)
    }
}

fn non_blank(s: &str) -> Option<&str> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_keys_default_to_empty() {
        let sub: ResumeSubmission = serde_json::from_str(r#"{"name":"山田花子"}"#).unwrap();
        assert_eq!(sub.name, "山田花子");
        assert_eq!(sub.email, "");
        assert!(sub.desired_position.is_none());
    }

    #[test]
    fn test_camel_case_keys_are_mapped() {
        let sub: ResumeSubmission =
            serde_json::from_str(r#"{"desiredPosition":"保育士（正社員）","prText":"笑顔"}"#)
                .unwrap();
        assert_eq!(sub.desired_position(), Some("保育士（正社員）"));
        assert_eq!(sub.pr_text(), Some("笑顔"));
    }

    #[test]
    fn test_empty_desired_position_counts_as_absent() {
        let sub = ResumeSubmission {
            desired_position: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(sub.desired_position(), None);
    }

    #[test]
    fn test_whitespace_only_free_text_is_blank() {
        let sub = ResumeSubmission {
            experience: "  \n\t ".to_string(),
            pr_text: " 子どもが好きです ".to_string(),
            ..Default::default()
        };
        assert_eq!(sub.experience(), None);
        assert_eq!(sub.pr_text(), Some(" 子どもが好きです "));
    }
}
