//! Owned state of one design session: the form, the selected body size, the
//! last generated design and whether a generation is running.
//!
//! At most one generation runs at a time. A second `start_generation` while
//! one is outstanding is rejected in place with [`DesignError::Busy`].

use serde::Serialize;

use crate::{
    error::{DesignError, Result},
    mockup::{self, Mockup},
    models::{BodySize, DesignField, DesignParameters, GeneratedDesign, Preset},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationState {
    #[default]
    Idle,
    Generating,
    Complete,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Info,
    Success,
    Destructive,
}

/// A user-facing notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub kind: NoticeKind,
}

impl Notice {
    pub fn success(title: &str, description: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            kind: NoticeKind::Success,
        }
    }

    pub fn info(title: &str, description: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            kind: NoticeKind::Info,
        }
    }

    pub fn from_error(error: &DesignError) -> Self {
        Self {
            title: error.title().to_string(),
            description: error.to_string(),
            kind: NoticeKind::Destructive,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct DesignSession {
    params: DesignParameters,
    body_size: BodySize,
    design: Option<GeneratedDesign>,
    state: GenerationState,
    last_error: Option<DesignError>,
}

impl DesignSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn params(&self) -> &DesignParameters {
        &self.params
    }

    pub fn body_size(&self) -> BodySize {
        self.body_size
    }

    pub fn design(&self) -> Option<&GeneratedDesign> {
        self.design.as_ref()
    }

    pub fn state(&self) -> GenerationState {
        self.state
    }

    pub fn last_error(&self) -> Option<&DesignError> {
        self.last_error.as_ref()
    }

    pub fn is_generating(&self) -> bool {
        self.state == GenerationState::Generating
    }

    fn ensure_editable(&self) -> Result<()> {
        if self.is_generating() {
            return Err(DesignError::Busy);
        }
        Ok(())
    }

    /// Change one form field. Parameters are frozen while generating.
    pub fn update(&mut self, field: DesignField) -> Result<()> {
        self.ensure_editable()?;
        self.params.apply(field);
        Ok(())
    }

    /// Replace the whole form with a preset and drop the current design.
    pub fn select_preset(&mut self, preset: &Preset) -> Result<()> {
        self.ensure_editable()?;
        self.params = preset.data.clone();
        self.design = None;
        self.last_error = None;
        self.state = GenerationState::Idle;
        Ok(())
    }

    /// Body size only affects the mockup, so it may change at any time.
    pub fn set_body_size(&mut self, size: BodySize) {
        self.body_size = size;
    }

    /// Gate a new request. Returns the parameters to send.
    pub fn start_generation(&mut self) -> std::result::Result<DesignParameters, Notice> {
        if self.is_generating() {
            return Err(Notice::from_error(&DesignError::Busy));
        }
        if let Err(e) = self.params.validate() {
            log::warn!("⚠️  Generation blocked: {}", e);
            return Err(Notice::from_error(&e));
        }
        self.state = GenerationState::Generating;
        self.last_error = None;
        Ok(self.params.clone())
    }

    /// Record the outcome of the outstanding request.
    pub fn receive_result(&mut self, result: Result<GeneratedDesign>) -> Notice {
        if !self.is_generating() {
            log::warn!("⚠️  Received a generation result with no request outstanding");
        }
        match result {
            Ok(design) => {
                self.design = Some(design);
                self.state = GenerationState::Complete;
                Notice::success(
                    "Design generated!",
                    "Your T-shirt design has been created successfully.",
                )
            }
            Err(e) => {
                // Show the placeholder, not a stale or broken image.
                self.design = None;
                self.state = GenerationState::Failed;
                let notice = Notice::from_error(&e);
                self.last_error = Some(e);
                notice
            }
        }
    }

    /// Back to the initial form with no design.
    pub fn reset(&mut self) -> Result<()> {
        self.ensure_editable()?;
        let body_size = self.body_size;
        *self = DesignSession {
            body_size,
            ..DesignSession::default()
        };
        Ok(())
    }

    pub fn download(&self, dir: impl AsRef<std::path::Path>) -> Result<Notice> {
        let design = self
            .design
            .as_ref()
            .ok_or_else(|| DesignError::Validation("There is no design to download yet".into()))?;
        design.save_to(dir)?;
        Ok(Notice::info(
            "Download started",
            "Your design is being prepared for download.",
        ))
    }

    pub fn mockup(&self) -> Mockup {
        mockup::compose(
            self.params.garment_color,
            self.body_size,
            self.design.as_ref().map(|design| design.image.as_str()),
            self.is_generating(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MISSING_QUOTE_MESSAGE;
    use crate::models::{GarmentColor, ImageReference, Mood};

    fn design() -> GeneratedDesign {
        GeneratedDesign::new(ImageReference::new("https://example.com/d.png"), None)
    }

    fn ready_session() -> DesignSession {
        let mut session = DesignSession::new();
        session
            .update(DesignField::MainIdea("Stay Weird".into()))
            .unwrap();
        session
    }

    #[test]
    fn test_empty_idea_blocks_generation() {
        let mut session = DesignSession::new();
        let notice = session.start_generation().unwrap_err();
        assert_eq!(notice.title, "Missing quote");
        assert_eq!(notice.description, MISSING_QUOTE_MESSAGE);
        assert_eq!(session.state(), GenerationState::Idle);
    }

    #[test]
    fn test_second_start_is_rejected() {
        let mut session = ready_session();
        assert!(session.start_generation().is_ok());
        let notice = session.start_generation().unwrap_err();
        assert_eq!(notice.description, DesignError::Busy.to_string());
        assert!(session.is_generating());
    }

    #[test]
    fn test_params_frozen_while_generating() {
        let mut session = ready_session();
        session.start_generation().unwrap();
        assert_eq!(session.update(DesignField::Mood(Mood::Dark)), Err(DesignError::Busy));
        let preset = Preset::find("funny").unwrap();
        assert_eq!(session.select_preset(&preset), Err(DesignError::Busy));
        assert_eq!(session.reset(), Err(DesignError::Busy));
    }

    #[test]
    fn test_success_flow_and_mockup() {
        let mut session = ready_session();
        session.start_generation().unwrap();
        assert!(session.mockup().content.is_spinner());

        let notice = session.receive_result(Ok(design()));
        assert_eq!(notice.kind, NoticeKind::Success);
        assert_eq!(session.state(), GenerationState::Complete);
        assert_eq!(
            session.mockup().content.image_href(),
            Some("https://example.com/d.png")
        );
    }

    #[test]
    fn test_failure_falls_back_to_placeholder() {
        let mut session = ready_session();
        session.start_generation().unwrap();
        session.receive_result(Ok(design()));

        session.start_generation().unwrap();
        let notice = session.receive_result(Err(DesignError::rate_limited()));
        assert_eq!(notice.kind, NoticeKind::Destructive);
        assert_eq!(session.state(), GenerationState::Failed);
        assert_eq!(session.last_error(), Some(&DesignError::rate_limited()));
        assert!(session.mockup().content.is_placeholder());
    }

    #[test]
    fn test_preset_replaces_form_and_clears_design() {
        let mut session = ready_session();
        session.start_generation().unwrap();
        session.receive_result(Ok(design()));

        let preset = Preset::find("streetwear").unwrap();
        session.select_preset(&preset).unwrap();
        assert_eq!(session.params(), &preset.data);
        assert!(session.design().is_none());
        assert_eq!(session.state(), GenerationState::Idle);
    }

    #[test]
    fn test_reset_keeps_body_size() {
        let mut session = ready_session();
        session.set_body_size(BodySize::XL);
        session
            .update(DesignField::GarmentColor(GarmentColor::White))
            .unwrap();
        session.reset().unwrap();
        assert_eq!(session.params(), &DesignParameters::default());
        assert_eq!(session.body_size(), BodySize::XL);
        assert!(session.design().is_none());
    }

    #[test]
    fn test_download_without_design() {
        assert!(DesignSession::new().download(std::env::temp_dir()).is_err());
    }
}
