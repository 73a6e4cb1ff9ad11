// ============================================================================
// PREDICT VIEWMODEL - Validación + llamada al predictor con el token actual
// ============================================================================

use std::rc::Rc;

use crate::models::Prediction;
use crate::services::error::{ApiError, ApiResult};
use crate::services::gateways::Predictor;
use crate::state::session_store::SessionStore;

#[derive(Clone)]
pub struct PredictViewModel {
    predictor: Rc<dyn Predictor>,
    session: SessionStore,
}

impl PredictViewModel {
    pub fn new(predictor: Rc<dyn Predictor>, session: SessionStore) -> Self {
        Self { predictor, session }
    }

    pub async fn predict(&self, text: &str) -> ApiResult<Prediction> {
        if text.trim().is_empty() {
            return Err(ApiError::Validation(
                "Please enter some text to analyze".to_string(),
            ));
        }
        let token = self.session.token().ok_or_else(|| {
            ApiError::Auth("You must be logged in to predict sentiment".to_string())
        })?;

        let prediction = self.predictor.predict(text, &token).await?;
        log::info!(
            "🔮 [PREDICT] {} {}",
            prediction.sentiment.emoji(),
            prediction.sentiment.label()
        );
        Ok(prediction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Sentiment;
    use crate::state::session_store::tests::FakeAuth;
    use crate::utils::MemoryStorage;
    use futures::executor::block_on;
    use futures::future::{self, LocalBoxFuture};
    use futures::FutureExt;
    use std::cell::RefCell;

    #[derive(Default)]
    struct KeywordPredictor {
        tokens: RefCell<Vec<String>>,
    }

    impl Predictor for KeywordPredictor {
        fn predict(&self, text: &str, token: &str) -> LocalBoxFuture<'static, ApiResult<Prediction>> {
            self.tokens.borrow_mut().push(token.to_string());
            let sentiment = if text.contains("plummeted") {
                Sentiment::Negative
            } else if text.contains("record profits") {
                Sentiment::Positive
            } else {
                Sentiment::Neutral
            };
            future::ready(Ok(Prediction {
                text: text.to_string(),
                sentiment,
            }))
            .boxed_local()
        }
    }

    fn setup(logged_in: bool) -> (PredictViewModel, Rc<KeywordPredictor>) {
        let session = SessionStore::new(Rc::new(FakeAuth::default()), Rc::new(MemoryStorage::new()));
        session.restore();
        if logged_in {
            block_on(session.login("ana@x.com", "secret")).unwrap();
        }
        let predictor = Rc::new(KeywordPredictor::default());
        (PredictViewModel::new(predictor.clone(), session), predictor)
    }

    #[test]
    fn blank_text_is_rejected() {
        let (vm, predictor) = setup(true);
        let err = block_on(vm.predict("   \n")).unwrap_err();
        assert_eq!(err.message(), "Please enter some text to analyze");
        assert!(predictor.tokens.borrow().is_empty());
    }

    #[test]
    fn anonymous_users_get_auth_error() {
        let (vm, _) = setup(false);
        let err = block_on(vm.predict("Stock prices plummeted")).unwrap_err();
        assert!(err.is_auth());
    }

    #[test]
    fn sends_bearer_token_and_returns_label() {
        let (vm, predictor) = setup(true);
        let prediction = block_on(vm.predict("Stock prices plummeted")).unwrap();
        assert_eq!(prediction.sentiment, Sentiment::Negative);
        assert_eq!(*predictor.tokens.borrow(), vec!["tok-1".to_string()]);
    }
}
