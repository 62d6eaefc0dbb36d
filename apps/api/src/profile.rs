//! Job profile — the reference text every uploaded résumé is ranked against.

use serde::Serialize;
use thiserror::Error;

pub const DEFAULT_TITLE: &str = "Ingeniero en Sistemas Informáticos";

/// Built-in profile used when neither `JOB_DESCRIPTION` nor
/// `JOB_DESCRIPTION_FILE` is configured.
pub const DEFAULT_DESCRIPTION: &str = "\
Se requiere un Ingeniero en Sistemas Informáticos con conocimientos en:
- Desarrollo de software backend y frontend
- Manejo de bases de datos SQL y NoSQL
- Programación en Python, Java o C#
- Uso de servicios en la nube como AWS o Azure
- Buenas prácticas de seguridad informática
- Trabajo en equipo y metodologías ágiles como Scrum
";

#[derive(Debug, Error, PartialEq)]
pub enum ProfileError {
    #[error("Job description cannot be empty")]
    EmptyDescription,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobProfile {
    pub title: String,
    pub description: String,
}

impl JobProfile {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, ProfileError> {
        let description = description.into();
        if description.trim().is_empty() {
            return Err(ProfileError::EmptyDescription);
        }
        Ok(Self {
            title: title.into(),
            description,
        })
    }
}

impl Default for JobProfile {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_description_rejected() {
        assert_eq!(
            JobProfile::new("Backend", " \n "),
            Err(ProfileError::EmptyDescription)
        );
    }

    #[test]
    fn test_default_profile_is_valid() {
        let profile = JobProfile::default();
        assert!(JobProfile::new(&profile.title, &profile.description).is_ok());
        assert!(profile.description.contains("Python"));
    }
}
