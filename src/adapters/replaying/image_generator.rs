//! Replaying adapter for the `ImageGenerator` port.

use std::sync::{Arc, Mutex};

use super::{next_output, replay_result};
use crate::cassette::replayer::CassetteReplayer;
use crate::error::StudioError;
use crate::ports::image_generator::{
    EditRequest, GenerateFuture, GenerateRequest, ImageGenerator, ImageResponse,
};

/// Serves recorded image generation results from a cassette.
pub struct ReplayingImageGenerator {
    replayer: Option<Arc<Mutex<CassetteReplayer>>>,
}

impl ReplayingImageGenerator {
    /// Create a replaying generator backed by the given replayer.
    #[must_use]
    pub fn new(replayer: Arc<Mutex<CassetteReplayer>>) -> Self {
        Self { replayer: Some(replayer) }
    }

    fn replay(&self, method: &str) -> GenerateFuture<'_> {
        let output = next_output(self.replayer.as_ref(), "image_generator", method);
        Box::pin(async move {
            replay_result::<ImageResponse>(output)
                .map_err(|e| StudioError::Api { status: 0, message: e.to_string() })
        })
    }
}

impl ImageGenerator for ReplayingImageGenerator {
    fn generate(&self, _request: &GenerateRequest) -> GenerateFuture<'_> {
        self.replay("generate")
    }

    fn edit(&self, _request: &EditRequest) -> GenerateFuture<'_> {
        self.replay("edit")
    }
}
