use crate::models::ExtractionResult;
use crate::processing::{FieldExtractor, OcrEngine, ReleaseGuard, RemoveFiles, ResourceCleanup};
use crate::utils::{format_uid, ExtractionError};
use crate::validation::{
    AgeBandClassifier, ContentValidator, IdentifierReconciler, IdentifierValidator, VerhoeffValidator,
};
use log::{debug, info, warn};
use std::future::Future;
use std::path::Path;

/// Runs a front/back card pair through validation, extraction and reconciliation.
/// Collaborators are owned by the pipeline; nothing is shared between requests.
pub struct ExtractionPipeline<O, V = VerhoeffValidator, C = RemoveFiles> {
    ocr: O,
    identifier_validator: V,
    cleanup: C,
    content_validator: ContentValidator,
}

impl<O, V, C> ExtractionPipeline<O, V, C>
where
    O: OcrEngine,
    V: IdentifierValidator,
    C: ResourceCleanup,
{
    pub fn new(ocr: O, identifier_validator: V, cleanup: C) -> Self {
        ExtractionPipeline {
            ocr,
            identifier_validator,
            cleanup,
            content_validator: ContentValidator::new(),
        }
    }

    pub fn with_content_validator(mut self, content_validator: ContentValidator) -> Self {
        self.content_validator = content_validator;
        self
    }

    /// OCR both photos concurrently and extract the card fields.
    /// Both photos are handed to the cleanup collaborator on every exit path,
    /// including when the returned future is dropped before it is first polled.
    pub fn process_images<'a>(
        &'a self,
        front_image: &Path,
        back_image: &Path,
    ) -> impl Future<Output = Result<ExtractionResult, ExtractionError>> + 'a {
        let front_image = front_image.to_path_buf();
        let back_image = back_image.to_path_buf();
        let release = ReleaseGuard::new(&self.cleanup, vec![front_image.clone(), back_image.clone()]);

        async move {
            let _release = release;

            debug!("Running OCR on {} and {}", front_image.display(), back_image.display());
            let (front_text, back_text) = tokio::try_join!(
                self.ocr.extract_text(&front_image),
                self.ocr.extract_text(&back_image),
            )
            .map_err(|e| {
                warn!("OCR failed: {}", e);
                ExtractionError::from(e)
            })?;

            self.process_text(&front_text, &back_text)
        }
    }

    /// Extract the card fields from text that has already been through OCR.
    pub fn process_text(
        &self,
        front_text: &str,
        back_text: &str,
    ) -> Result<ExtractionResult, ExtractionError> {
        // Step 1: Make sure this is an Aadhaar card at all
        let score = self.content_validator.score(front_text, back_text);
        if !score.admitted {
            warn!(
                "Rejected card content: score {:.1} from {:?}",
                score.score, score.fired
            );
            return Err(ExtractionError::InvalidDocumentContent);
        }
        debug!("Card content admitted with score {:.1}", score.score);

        // Step 2: Pull the fields out of both sides
        let (fields, report) = FieldExtractor::extract_with_report(front_text, back_text);
        debug!("Field strategies: {:?}", report.hits());

        // Step 3: Reconcile the UID read from each side
        let reconciliation =
            IdentifierReconciler::reconcile(&fields.identifier_front, &fields.identifier_back);
        let uid = match reconciliation.canonical_identifier {
            Some(uid) if self.identifier_validator.is_valid(&uid) => uid,
            _ => {
                warn!("No valid Aadhaar number found on the card");
                return Err(ExtractionError::InvalidIdentifier);
            }
        };
        if !reconciliation.matched {
            warn!("Aadhaar number differs between front and back");
            return Err(ExtractionError::IdentifierMismatch);
        }

        // Step 4: Derive the age band
        let age_band = AgeBandClassifier::classify(&fields.dob);

        info!("Card accepted (age band {})", age_band.as_str());
        Ok(ExtractionResult {
            name: fields.name,
            dob: fields.dob,
            gender: fields.gender,
            uid: format_uid(&uid),
            address: fields.address,
            pincode: fields.pincode,
            age_band,
            is_uid_same: reconciliation.matched,
        })
    }
}
