// Composition root for the spam-to-ham service.
//
// Responsibilities
// - Load the training corpus and the synonym lexicon named by the config.
// - Train the filter and wire concrete adapters into the use case handlers.
// - Expose the HTTP router.

pub mod bootstrap;
pub mod http;
pub mod state;
