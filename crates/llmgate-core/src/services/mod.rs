//! Core services - the application's business logic layer.
//!
//! Services orchestrate between ports and domain logic. They don't know
//! about concrete HTTP clients or servers.

mod gateway;

pub use gateway::{
    CHAT_FAILED_MESSAGE, EMBEDDING_FAILED_MESSAGE, GatewayService, MISSING_API_KEY_MESSAGE,
    NO_TEXT_OUTPUT_MESSAGE, RESPONSE_FAILED_MESSAGE,
};
