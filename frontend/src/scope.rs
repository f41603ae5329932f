use web_sys::{AbortController, AbortSignal};

/// Owns an `AbortController`. Every request made with its signal is
/// cancelled when the scope is dropped.
pub struct RequestScope {
    controller: Option<AbortController>,
}

impl RequestScope {
    pub fn new() -> Self {
        let controller = match AbortController::new() {
            Ok(controller) => Some(controller),
            Err(err) => {
                log::warn!("requests will not be cancellable: {:?}", err);
                None
            }
        };
        RequestScope { controller }
    }

    pub fn signal(&self) -> Option<AbortSignal> {
        self.controller.as_ref().map(AbortController::signal)
    }
}

impl Default for RequestScope {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for RequestScope {
    fn drop(&mut self) {
        if let Some(controller) = &self.controller {
            controller.abort();
        }
    }
}
