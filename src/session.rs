//! The studio session: mock profile, credit ledger, and the submit state machine.
//!
//! Credits live only in this object and vanish with it; nothing here is
//! persisted or validated against a server.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::StudioError;
use crate::ports::image_generator::{EditRequest, GenerateRequest, ImageGenerator};

/// Default number of free credits at session start.
pub const STARTING_CREDITS: u32 = 25;

/// Default cost of one image in credits.
pub const COST_PER_IMAGE: u32 = 5;

/// Whether a submission creates an image from scratch or edits one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Text prompt only.
    Generate,
    /// Text prompt plus an attached source image.
    Edit,
}

/// Tag distinguishing how a result was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageKind {
    /// Created from scratch.
    Creation,
    /// Derived by editing an existing image.
    Edit,
}

/// One successful result. Created once per successful call, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedImage {
    /// Millisecond-timestamp identifier.
    pub id: String,
    /// The image as a `data:<mime>;base64,<payload>` URI.
    pub data_uri: String,
    /// The prompt that produced it.
    pub prompt: String,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Creation vs. edit tag.
    pub kind: ImageKind,
}

/// Mock user profile with a client-only credit counter.
#[derive(Debug, Clone)]
pub struct UserProfile {
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Credit balance.
    pub credits: u32,
}

impl UserProfile {
    /// The default guest profile with the given free-credit balance.
    #[must_use]
    pub fn guest(credits: u32) -> Self {
        Self { name: "Guest User".into(), email: "user@example.com".into(), credits }
    }

    /// Deduct credits, clamping the balance at zero.
    pub fn deduct(&mut self, amount: u32) {
        self.credits = self.credits.saturating_sub(amount);
    }
}

/// The session state driving spinner, error banner, and result display.
#[derive(Debug, Clone)]
pub enum SessionState {
    /// Nothing submitted yet (or mode just switched).
    Idle,
    /// One call in flight.
    Requesting,
    /// Last submission produced an image.
    Succeeded(GeneratedImage),
    /// Last submission failed with a displayable message.
    Failed(String),
}

/// A studio session owning the profile, mode, and state machine.
///
/// `submit` takes `&mut self`, so a second submission cannot start while one
/// is in flight.
pub struct Studio {
    profile: UserProfile,
    cost: u32,
    mode: Mode,
    source_image: Option<String>,
    state: SessionState,
}

impl Studio {
    /// Create a session for the given profile and per-image cost.
    #[must_use]
    pub fn new(profile: UserProfile, cost: u32) -> Self {
        Self { profile, cost, mode: Mode::Generate, source_image: None, state: SessionState::Idle }
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Current credit balance.
    #[must_use]
    pub fn credits(&self) -> u32 {
        self.profile.credits
    }

    /// Current mode.
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Switch modes, discarding any result, error, and attached source image.
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
        self.source_image = None;
        self.state = SessionState::Idle;
    }

    /// Attach a source image (a data URI) for edit mode.
    pub fn attach_source(&mut self, data_uri: String) {
        self.source_image = Some(data_uri);
    }

    /// Submit a prompt through the given generator.
    ///
    /// Guards fire before any call is made: an empty prompt, an insufficient
    /// balance, or a missing source image in edit mode block the submission
    /// with the balance untouched. On success the cost is deducted; on
    /// adapter failure credits are untouched.
    ///
    /// # Errors
    ///
    /// Returns the guard or adapter error; the session lands in
    /// [`SessionState::Failed`] with the same message.
    pub async fn submit(
        &mut self,
        generator: &dyn ImageGenerator,
        model: &str,
        prompt: &str,
    ) -> Result<GeneratedImage, StudioError> {
        let prompt = prompt.trim();
        if prompt.is_empty() {
            return self.block(StudioError::InvalidArgument("Prompt must not be empty".into()));
        }
        if self.profile.credits < self.cost {
            return self.block(StudioError::InsufficientCredits {
                balance: self.profile.credits,
                cost: self.cost,
            });
        }
        let source = match self.mode {
            Mode::Generate => None,
            Mode::Edit => match self.source_image.clone() {
                Some(s) => Some(s),
                None => {
                    return self.block(StudioError::InvalidArgument(
                        "Please upload an image to edit first".into(),
                    ));
                }
            },
        };

        self.state = SessionState::Requesting;

        let result = match source {
            None => {
                let request =
                    GenerateRequest { model: model.to_string(), prompt: prompt.to_string() };
                generator.generate(&request).await
            }
            Some(source) => {
                let request = EditRequest {
                    model: model.to_string(),
                    source,
                    instruction: prompt.to_string(),
                };
                generator.edit(&request).await
            }
        };

        match result {
            Ok(response) => {
                let now = Utc::now();
                let image = GeneratedImage {
                    id: now.timestamp_millis().to_string(),
                    data_uri: response.data_uri,
                    prompt: prompt.to_string(),
                    created_at: now,
                    kind: match self.mode {
                        Mode::Generate => ImageKind::Creation,
                        Mode::Edit => ImageKind::Edit,
                    },
                };
                self.profile.deduct(self.cost);
                self.state = SessionState::Succeeded(image.clone());
                Ok(image)
            }
            Err(e) => {
                self.state = SessionState::Failed(e.to_string());
                Err(e)
            }
        }
    }

    /// A guard fired: record the message, make no call.
    fn block(&mut self, err: StudioError) -> Result<GeneratedImage, StudioError> {
        self.state = SessionState::Failed(err.to_string());
        Err(err)
    }
}
